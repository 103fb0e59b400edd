//! Handles settings for the application. Configuration is read from an
//! optional `settings.toml`, then from `SALES__*` environment variables.
//! A bare `PORT` variable overrides the listening port.
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct Store {
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub store: Store,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_sources(
            Config::builder().add_source(File::with_name("settings").required(false)),
            Environment::with_prefix("SALES").separator("__"),
            std::env::var("PORT").ok(),
        )
    }

    fn from_sources(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        environment: Environment,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        let settings = builder
            .set_default("app.level", "info")?
            .set_default("server.port", 3000)?
            .set_default("store.path", engine::DEFAULT_STORE_PATH)?
            .add_source(environment)
            .set_override_option("server.port", port)?
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let vars = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Environment::with_prefix("SALES")
            .separator("__")
            .source(Some(vars))
    }

    #[test]
    fn defaults_apply_without_file() {
        let settings = Settings::from_sources(Config::builder(), environment(&[]), None).unwrap();
        assert_eq!(settings.app.level, "info");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.store.path, "data/sales.json");
        assert!(settings.server.bind.is_none());
    }

    #[test]
    fn file_values_override_defaults() {
        let builder = Config::builder().add_source(File::from_str(
            "[server]\nbind = \"0.0.0.0\"\n\n[store]\npath = \"/tmp/sales.json\"\n",
            FileFormat::Toml,
        ));
        let settings = Settings::from_sources(builder, environment(&[]), None).unwrap();
        assert_eq!(settings.server.bind.as_deref(), Some("0.0.0.0"));
        assert_eq!(settings.store.path, "/tmp/sales.json");
    }

    #[test]
    fn prefixed_environment_overrides_file() {
        let builder = Config::builder().add_source(File::from_str(
            "[server]\nport = 4000\n",
            FileFormat::Toml,
        ));
        let env = environment(&[
            ("SALES__SERVER__PORT", "8080"),
            ("SALES__STORE__PATH", "/srv/sales.json"),
        ]);
        let settings = Settings::from_sources(builder, env, None).unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.store.path, "/srv/sales.json");
    }

    #[test]
    fn bare_port_wins_over_everything() {
        let env = environment(&[("SALES__SERVER__PORT", "8080")]);
        let settings =
            Settings::from_sources(Config::builder(), env, Some("9000".to_string())).unwrap();
        assert_eq!(settings.server.port, 9000);
    }
}
