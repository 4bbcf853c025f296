//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Chef Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[provider]
# kind = "gemini"            # gemini, groq
# model = ""                 # empty = provider default
# api_key_env = ""           # empty = GEMINI_API_KEY / GROQ_API_KEY
# request_timeout_secs = 120 # 1-600

[generation]
# temperature = 1.0          # 0.0-2.0
# top_p = 0.95               # 0.0-1.0
# top_k = 64                 # 1-1000
# max_output_tokens = 2000   # 1-65536
# response_mime_type = "text/plain"

[session]
# mode = "general"           # general, fitness, vegan
# handle_policy = "persistent"  # persistent, fresh_per_call

[logging]
# level = "INFO"             # DEBUG, INFO, WARNING, ERROR
"##
}
