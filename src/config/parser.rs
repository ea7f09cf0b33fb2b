//! Generic TOML parsing with file path context.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

use crate::core::SlottyError;

/// Parse a TOML configuration file into the specified type.
///
/// A file that cannot be read yields [`SlottyError::ConfigError`]. A file
/// that is not valid TOML for `T` yields "Failed to parse config file: ..."
/// with the `toml` error kept as the cause.
///
/// ```rust,no_run
/// use slotty::config::{SlottyOptions, parse_config};
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let options: SlottyOptions = parse_config(Path::new("slotty.toml")).await?;
/// println!("validation mode: {}", options.validation_mode);
/// # Ok(())
/// # }
/// ```
pub async fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = fs::read_to_string(path).await.map_err(|e| SlottyError::ConfigError {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SlottyOptions, ValidationMode};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_parse_config() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("slotty.toml");
        std::fs::write(&config_path, "validation_mode = \"throw\"\n").unwrap();

        let options: SlottyOptions = parse_config(&config_path).await.unwrap();
        assert_eq!(options.validation_mode, ValidationMode::Throw);
    }

    #[tokio::test]
    async fn test_parse_config_missing_file() {
        let temp = tempdir().unwrap();
        let err =
            parse_config::<SlottyOptions>(&temp.path().join("missing.toml")).await.unwrap_err();

        assert!(matches!(err.downcast_ref::<SlottyError>(), Some(SlottyError::ConfigError { .. })));
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[tokio::test]
    async fn test_parse_config_invalid_toml() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("bad.toml");
        std::fs::write(&config_path, "validation_mode = [").unwrap();

        let err = parse_config::<SlottyOptions>(&config_path).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        assert!(err.downcast_ref::<toml::de::Error>().is_some());
    }
}
