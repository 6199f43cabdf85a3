//! Configuration validation.
//!
//! Collects every violation into a single `SettingsError` so a user can
//! fix the whole file in one pass.

mod helpers;
mod provider;


use crate::schema::ParleyConfig;
use parley_common::SettingsError;

pub(crate) use helpers::{validate_range, validate_range_f64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ParleyConfig) -> Result<(), SettingsError> {
    let mut errors: Vec<String> = Vec::new();

    provider::validate_provider(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SettingsError::ValidationError(errors.join("; ")))
    }
}
