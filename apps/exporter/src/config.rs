use std::path::{Path, PathBuf};

use serde::Deserialize;
use visitwall_vcard::VcardOptions;

/// Exporter configuration loaded from config.toml with env var overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct ExporterConfig {
    /// Where `.vcf` files are written. Default: "."
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Tracing log level. Default: "info"
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Contact document settings (`[vcard]` table).
    #[serde(default)]
    pub vcard: VcardOptions,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            log_level: default_log_level(),
            vcard: VcardOptions::default(),
        }
    }
}

impl ExporterConfig {
    /// Load configuration from a TOML file with environment variable overrides.
    ///
    /// An explicit `path` must exist. Otherwise `CONFIG_PATH` (or `config.toml`
    /// in CWD) is read when present, and defaults are used when it is not.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = match path {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let path =
                    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
                match std::fs::read_to_string(&path) {
                    Ok(contents) => contents,
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
                    Err(e) => return Err(format!("failed to read {path}: {e}").into()),
                }
            }
        };
        Self::from_toml_str(&contents)
    }

    /// Load configuration from a TOML string, then apply env var overrides.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config: ExporterConfig = toml::from_str(toml_str)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply environment variable overrides to the config.
    ///
    /// Returns an error if a boolean env var is set to something other than
    /// `true` or `false`.
    pub fn apply_env_overrides(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Ok(val) = std::env::var("OUTPUT_DIR") {
            self.output_dir = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("PROFILE_BASE_URL") {
            self.vcard.profile_base_url = val;
        }
        if let Ok(val) = std::env::var("NOTE_LABEL") {
            self.vcard.note_label = if val.trim().is_empty() { None } else { Some(val) };
        }
        if let Ok(val) = std::env::var("ESCAPE_VALUES") {
            self.vcard.escape_values = val
                .parse()
                .map_err(|_| format!("invalid ESCAPE_VALUES value: {val}"))?;
        }
        if let Ok(val) = std::env::var("EMBED_AVATAR") {
            self.vcard.embed_avatar = val
                .parse()
                .map_err(|_| format!("invalid EMBED_AVATAR value: {val}"))?;
        }
        if let Ok(val) = std::env::var("LOG_LEVEL") {
            self.log_level = val;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_loads_from_valid_toml_string() {
        let toml = r#"
            output_dir = "cards"
            log_level = "debug"

            [vcard]
            profile_base_url = "https://visitwall.example"
            note_label = "Bio:"
            escape_values = false
            embed_avatar = true
        "#;
        let config = ExporterConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("cards"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.vcard.profile_base_url, "https://visitwall.example");
        assert_eq!(config.vcard.note_label.as_deref(), Some("Bio:"));
        assert!(!config.vcard.escape_values);
        assert!(config.vcard.embed_avatar);
    }

    #[test]
    #[serial]
    fn test_config_has_correct_defaults_for_empty_file() {
        let config = ExporterConfig::from_toml_str("").unwrap();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.vcard, VcardOptions::default());
    }

    #[test]
    #[serial]
    fn test_config_applies_env_var_overrides() {
        std::env::set_var("PROFILE_BASE_URL", "https://override.example");
        std::env::set_var("EMBED_AVATAR", "true");
        std::env::set_var("NOTE_LABEL", "");
        let config = ExporterConfig::from_toml_str("[vcard]\nnote_label = \"Bio:\"").unwrap();
        std::env::remove_var("PROFILE_BASE_URL");
        std::env::remove_var("EMBED_AVATAR");
        std::env::remove_var("NOTE_LABEL");
        assert_eq!(config.vcard.profile_base_url, "https://override.example");
        assert!(config.vcard.embed_avatar);
        assert!(config.vcard.note_label.is_none());
    }

    #[test]
    #[serial]
    fn test_config_rejects_malformed_bool_override() {
        std::env::set_var("ESCAPE_VALUES", "maybe");
        let result = ExporterConfig::from_toml_str("");
        std::env::remove_var("ESCAPE_VALUES");
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_config_fails_on_malformed_toml() {
        let toml = "this is not valid = [[[toml";
        let result = ExporterConfig::from_toml_str(toml);
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_load_missing_default_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("CONFIG_PATH", dir.path().join("absent.toml"));
        let config = ExporterConfig::load(None);
        std::env::remove_var("CONFIG_PATH");
        assert_eq!(config.unwrap().log_level, "info");
    }

    #[test]
    #[serial]
    fn test_load_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(ExporterConfig::load(Some(&missing)).is_err());
    }
}
