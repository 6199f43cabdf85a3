//! Validation for the `[provider]` section.

use crate::schema::ParleyConfig;

use super::{validate_range, validate_range_f64};

pub(crate) fn validate_provider(errors: &mut Vec<String>, config: &ParleyConfig) {
    let provider = &config.provider;

    if provider.model.trim().is_empty() {
        errors.push("provider.model must not be empty".into());
    }
    if provider.api_key_env.trim().is_empty() {
        errors.push("provider.api_key_env must not be empty".into());
    }
    if !provider.base_url.starts_with("http://") && !provider.base_url.starts_with("https://") {
        errors.push(format!(
            "provider.base_url = {:?} must be an http(s) URL",
            provider.base_url
        ));
    }

    validate_range_f64(
        errors,
        "provider.temperature",
        provider.temperature,
        0.0,
        1.0,
    );
    validate_range(errors, "provider.max_tokens", provider.max_tokens, 100, 2000);
    validate_range(
        errors,
        "provider.connect_timeout_secs",
        provider.connect_timeout_secs,
        1,
        60,
    );
    validate_range(
        errors,
        "provider.request_timeout_secs",
        provider.request_timeout_secs,
        5,
        600,
    );
}
