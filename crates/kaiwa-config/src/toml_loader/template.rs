//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# kaiwa configuration
# Only override what you want to change -- missing fields use defaults.

[server]
# host = "127.0.0.1"
# port = 5000
# static_dir = "/srv/kaiwa/static"  # unset: serve the built-in chat.js/chat.css
# session_cookie = "kaiwa_session"
# session_ttl_secs = 86400      # 60-2592000, idle sessions are dropped after this
# reap_interval_secs = 300      # 10-86400

[provider]
# name = "groq"
# base_url = "https://api.groq.com/openai/v1"
# model = "qwen/qwen3-32b"
# api_key_env = "GROQ_API_KEY"  # read first
# api_key = ""                  # fallback when the env var is unset
# max_tokens = 1024
# temperature = 0.6             # 0.0-2.0
# connect_timeout_secs = 10     # 1-120
# request_timeout_secs = 120    # 1-600

[persona]
# system_prompt = "..."

[page]
# please_type = "メッセージを入力してください。。。"
# start = "会話を始めましょう"

[logging]
# level = "INFO"                # TRACE, DEBUG, INFO, WARNING, ERROR
"##
}
