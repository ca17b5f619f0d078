//! Configuration loading for the CLI.

use crate::error::{CliError, Result};
use covenant_extractor::ExtractorConfig;
use std::path::{Path, PathBuf};

/// Default configuration file path (`~/.covenant/config.toml`).
pub fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".covenant").join("config.toml"))
}

/// Load the extractor configuration.
///
/// An explicit path must exist. Without one, the default path is used if
/// present, otherwise built-in defaults apply.
pub fn load(explicit: Option<&Path>, model: Option<&str>) -> Result<ExtractorConfig> {
    let mut config = match explicit {
        Some(path) => ExtractorConfig::from_file(path)?,
        None => match default_path().filter(|p| p.exists()) {
            Some(path) => ExtractorConfig::from_file(path)?,
            None => ExtractorConfig::default(),
        },
    };

    if let Some(model) = model {
        config.provider.model = model.to_string();
    }

    config.validate().map_err(CliError::Config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[provider]\nmodel = \"gemini-1.5-pro\"").unwrap();

        let config = load(Some(file.path()), None).unwrap();
        assert_eq!(config.provider.model, "gemini-1.5-pro");
    }

    #[test]
    fn test_model_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[provider]\nmodel = \"gemini-1.5-pro\"").unwrap();

        let config = load(Some(file.path()), Some("gemini-2.0-flash")).unwrap();
        assert_eq!(config.provider.model, "gemini-2.0-flash");
    }

    #[test]
    fn test_blank_model_override_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let result = load(Some(file.path()), Some(" "));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = load(Some(Path::new("/nonexistent/covenant.toml")), None);
        assert!(matches!(result, Err(CliError::Extractor(_))));
    }
}
