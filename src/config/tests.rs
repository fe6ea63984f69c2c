//! Tests for configuration defaults, overrides and validation.

use super::*;
use rstest::rstest;
use secrecy::ExposeSecret;
use std::env;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Sets environment variables for its lifetime and restores them on drop.
struct EnvGuard {
    previous: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    fn set(changes: &[(&'static str, Option<&str>)]) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let mut previous = Vec::with_capacity(changes.len());
        for (key, value) in changes {
            previous.push((*key, env::var(key).ok()));
            unsafe {
                // SAFETY: ENV_LOCK serializes environment mutations in these tests.
                match value {
                    Some(new_value) => env::set_var(key, new_value),
                    None => env::remove_var(key),
                }
            }
        }
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            unsafe {
                // SAFETY: ENV_LOCK serializes environment mutations in these tests.
                match value {
                    Some(previous) => env::set_var(key, previous),
                    None => env::remove_var(key),
                }
            }
        }
    }
}

#[rstest]
fn defaults_match_directive_constants() {
    let config = AppConfig::from_toml("").expect("empty TOML loads");

    assert_eq!(config.resolution.select_char_budget, 4000);
    assert_eq!(config.resolution.summary_char_limit, 1000);
    assert_eq!(
        config.resolution.default_question,
        "What are the key insights from this conversation?"
    );
    assert_eq!(config.completion.base_url, DEFAULT_BASE_URL);
    assert!(config.completion.api_key.is_none());
    assert!(config.database_url.is_none());
    config.validate().expect("defaults are valid");
}

#[rstest]
fn toml_overrides_nested_sections() {
    let config = AppConfig::from_toml(
        r#"
        database_url = "postgres://localhost/interlink"

        [resolution]
        select_char_budget = 120
        default_question = "What was decided?"

        [completion]
        api_key = "sk-or-test"
        model = "anthropic/claude-3-haiku"
        timeout_secs = 5
        "#,
    )
    .expect("TOML loads");

    assert_eq!(config.resolution.select_char_budget, 120);
    assert_eq!(config.resolution.summary_char_limit, DEFAULT_SUMMARY_CHAR_LIMIT);
    assert_eq!(config.resolution.default_question, "What was decided?");
    assert_eq!(config.completion.model, "anthropic/claude-3-haiku");
    assert_eq!(
        config
            .completion
            .api_key
            .as_ref()
            .map(|key| key.expose_secret().as_str()),
        Some("sk-or-test")
    );
    assert_eq!(config.completion.timeout().as_secs(), 5);
    assert_eq!(
        config.require_database_url().expect("url present"),
        "postgres://localhost/interlink"
    );
    config.completion.validate().expect("completion settings are valid");
}

#[rstest]
fn debug_output_redacts_api_key() {
    let config = AppConfig::from_toml("[completion]\napi_key = \"sk-or-secret\"")
        .expect("TOML loads");

    assert!(!format!("{config:?}").contains("sk-or-secret"));
}

#[rstest]
#[case("https://openrouter.ai/api/v1", "https://openrouter.ai/api/v1/chat/completions")]
#[case("http://localhost:8080/v1/", "http://localhost:8080/v1/chat/completions")]
fn completions_url_appends_endpoint(#[case] base_url: &str, #[case] expected: &str) {
    let config = CompletionConfig {
        base_url: base_url.to_owned(),
        ..CompletionConfig::default()
    };

    assert_eq!(config.completions_url(), expected);
}

#[rstest]
fn completion_validation_requires_api_key() {
    let error = CompletionConfig::default()
        .validate()
        .expect_err("missing key is rejected");

    assert!(matches!(error, ConfigError::MissingRequired("completion.api_key")));
}

#[rstest]
#[case("[resolution]\nselect_char_budget = 0")]
#[case("[resolution]\nsummary_char_limit = 0")]
#[case("[resolution]\nsummarize_prompt = \"{{ max_chars\"")]
fn invalid_resolution_settings_are_rejected(#[case] toml: &str) {
    let config = AppConfig::from_toml(toml).expect("TOML loads");

    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[rstest]
fn blank_database_url_counts_as_missing() {
    let config = AppConfig::from_toml("database_url = \"  \"").expect("TOML loads");

    assert!(matches!(
        config.require_database_url(),
        Err(ConfigError::MissingRequired("database_url"))
    ));
}

#[rstest]
fn malformed_toml_is_a_load_error() {
    assert!(matches!(
        AppConfig::from_toml("[resolution"),
        Err(ConfigError::Load(_))
    ));
}

#[rstest]
fn environment_overrides_openrouter_fallbacks() {
    let _env = EnvGuard::set(&[
        ("OPENROUTER_API_KEY", Some("sk-or-fallback")),
        ("OPENROUTER_MODEL", Some("fallback/model")),
        ("INTERLINK__COMPLETION__MODEL", Some("override/model")),
        ("INTERLINK__COMPLETION__API_KEY", None),
        ("INTERLINK__RESOLUTION__SELECT_CHAR_BUDGET", Some("2000")),
        ("INTERLINK__DATABASE_URL", Some("postgres://env/interlink")),
    ]);

    let config = AppConfig::from_env().expect("environment loads");

    assert_eq!(
        config
            .completion
            .api_key
            .as_ref()
            .map(|key| key.expose_secret().as_str()),
        Some("sk-or-fallback")
    );
    assert_eq!(config.completion.model, "override/model");
    assert_eq!(config.resolution.select_char_budget, 2000);
    assert_eq!(
        config.require_database_url().expect("url present"),
        "postgres://env/interlink"
    );
}

#[rstest]
fn openrouter_model_applies_without_interlink_override() {
    let _env = EnvGuard::set(&[
        ("OPENROUTER_API_KEY", None),
        ("OPENROUTER_MODEL", Some("fallback/model")),
        ("INTERLINK__COMPLETION__MODEL", None),
        ("INTERLINK__COMPLETION__API_KEY", Some("sk-or-direct")),
    ]);

    let config = AppConfig::from_env().expect("environment loads");

    assert_eq!(config.completion.model, "fallback/model");
    assert_eq!(
        config
            .completion
            .api_key
            .as_ref()
            .map(|key| key.expose_secret().as_str()),
        Some("sk-or-direct")
    );
}
