//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Emberloom Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[endpoint]
url = "https://cluckfargame.com/app"
# load_timeout_secs = 12    # 1-120
# require_https = true

[startup.splash]
# enabled = true
# duration = 2.0            # 0-30 seconds
# skip_on_key = true

[connectivity]
# enabled = true
# probe_interval_secs = 5   # 1-300
# probe_timeout_secs = 3    # 1-60
# probe_target = "cluckfargame.com:443"

[webview]
# transparent = true
# autoplay = true
# back_forward_gestures = true
# clipboard = true
# user_agent = "Emberloom/0.1"
# clear_data_on_launch = false

[logging]
# level = "INFO"            # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
