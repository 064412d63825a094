use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
use tracing::debug;

pub mod models;
pub use models::*;

/// Prefix of the environment variables that override file configuration,
/// e.g. `GOBARBER_API__BASE_URL`.
pub const ENV_PREFIX: &str = "GOBARBER";

/// Loads the application configuration.
///
/// Sources, lowest precedence first: built-in defaults, `config/default.*`,
/// `config/{RUN_ENV}.*`, then `GOBARBER_*` environment variables. The
/// directory can be moved with `CONFIG_DIR`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let config_dir = env::var("CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);
    debug!(
        "Loading config from {} and {}",
        default_path.display(),
        env_path.display()
    );

    let builder = default_builder()?
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

    build_config(builder)
}

/// A builder pre-seeded with the defaults every deployment shares.
pub fn default_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("api.base_url", "http://localhost:3333")?
        .set_default("api.timeout_secs", 30)?
        .set_default("api.providers_path", "providers")?
        .set_default("scheduling.auto_dismiss_date_picker", true)?
        .set_default("logging.level", "info")
}

/// Builds and deserializes an [`AppConfig`] from an assembled builder.
pub fn build_config(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = builder.build()?.try_deserialize()?;
    if config.api.base_url.trim().is_empty() {
        return Err(ConfigError::Message("api.base_url must not be empty".into()));
    }
    Ok(config)
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file into the process environment, once.
///
/// `DOTENV_OVERRIDE` names an alternative file; `.env` is used otherwise.
/// Returns the path that was (or would have been) loaded.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config = build_config(default_builder().unwrap()).unwrap();

        assert_eq!(config.api.base_url, "http://localhost:3333");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.providers_path, "providers");
        assert!(config.scheduling.auto_dismiss_date_picker);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_file_source_overrides_defaults() {
        let toml = r#"
            [api]
            base_url = "https://api.gobarber.test"
            timeout_secs = 5

            [scheduling]
            auto_dismiss_date_picker = false
        "#;
        let builder = default_builder()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml));

        let config = build_config(builder).unwrap();

        assert_eq!(config.api.base_url, "https://api.gobarber.test");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.providers_path, "providers");
        assert!(!config.scheduling.auto_dismiss_date_picker);
    }

    #[test]
    fn test_blank_base_url_is_rejected() {
        let builder = default_builder()
            .unwrap()
            .set_override("api.base_url", "  ")
            .unwrap();

        let err = build_config(builder).unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn test_app_config_deserializes_with_only_api_section() {
        let json = r#"{ "api": { "base_url": "http://10.0.2.2:3333" } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.scheduling.auto_dismiss_date_picker);
        assert_eq!(config.logging.level, "info");
    }
}
