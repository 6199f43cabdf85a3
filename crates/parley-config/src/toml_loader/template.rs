//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Parley Configuration
# Only override what you want to change -- missing fields use defaults.

[provider]
# model = "gemini-2.0-flash"
# temperature = 0.7            # 0.0-1.0
# max_tokens = 500             # 100-2000
# api_key_env = "GEMINI_API_KEY"
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"
# connect_timeout_secs = 10    # 1-60
# request_timeout_secs = 120   # 5-600
# verify_key = true            # probe the model endpoint when a key is entered

[export]
# directory = ""               # empty: current directory

[logging]
# level = "warn"               # trace, debug, info, warn, error
"##
    .to_string()
}
