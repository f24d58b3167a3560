use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(rename = "CARD_SERVER")]
    pub card_server: String,
}

impl Settings {
    /// Reads the `settings` file from the working directory, in any format
    /// the config crate recognizes.
    pub fn load() -> Result<Settings, ConfigError> {
        let source = Config::builder()
            .add_source(File::with_name("settings"))
            .build()?;
        source.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn deserializes_from_settings_source() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(
                "CARD_SERVER = \"http://localhost:7878\"",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.card_server, "http://localhost:7878");
    }
}
