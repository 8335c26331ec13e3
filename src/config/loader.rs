//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::LauncherConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Read a TOML launcher config without validating it.
///
/// Command-line overrides are applied on top before [`finalize`] runs.
pub fn read_config(path: &Path) -> Result<LauncherConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Validate an assembled configuration.
pub fn finalize(config: LauncherConfig) -> Result<LauncherConfig, ConfigError> {
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::config::schema::LaunchMode;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_full_config() {
        let file = write_temp(
            r#"
            options_path = "/tmp/options.json"

            [target]
            program = "/opt/app/server"
            addr = "127.0.0.1"
            port = 8100

            [launch]
            mode = "supervise"

            [observability]
            log_level = "debug"
            "#,
        );

        let config = finalize(read_config(file.path()).unwrap()).unwrap();
        assert_eq!(config.options_path, "/tmp/options.json");
        assert_eq!(config.target.program, "/opt/app/server");
        assert_eq!(config.target.port, 8100);
        assert_eq!(config.launch.mode, LaunchMode::Supervise);
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = write_temp("[target]\nport = 0\n");
        let config = read_config(file.path()).unwrap();
        let err = finalize(config).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref e) if e.len() == 1));
        assert!(err.to_string().contains("port"));
    }

    #[test]
    fn test_syntax_error_is_parse_error() {
        let file = write_temp("[target\n");
        assert!(matches!(read_config(file.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launcher.toml");
        assert!(matches!(read_config(&path), Err(ConfigError::Io(_))));
    }
}
