pub mod clean;
pub mod convert;
pub mod init;

use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigError, DEFAULT_CONFIG_FILE};
use crate::convert::resolve_against;

/// Load the config named on the command line (or the default file).
///
/// Returns the config together with its absolute path.
fn load_config(config_file: Option<&Path>) -> Result<(Config, PathBuf), ConfigError> {
    let config_path = config_file.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
    let config_path = if config_path.is_relative() {
        std::env::current_dir()
            .map_err(ConfigError::CwdFailure)?
            .join(config_path)
    } else {
        config_path.to_path_buf()
    };

    let config = Config::load_from_file(&config_path)?;
    Ok((config, config_path))
}

/// Documents named on the command line, or else those listed in the config.
fn document_paths(inputs: &[PathBuf], config: &Config, base_path: &Path) -> Vec<PathBuf> {
    if inputs.is_empty() {
        config
            .documents
            .iter()
            .map(|doc| resolve_against(base_path, doc))
            .collect()
    } else {
        inputs.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_paths_prefers_arguments() {
        let config = Config {
            documents: vec![PathBuf::from("configured.tex")],
            ..Config::default()
        };
        let inputs = vec![PathBuf::from("given.tex")];

        assert_eq!(
            document_paths(&inputs, &config, Path::new("/project")),
            vec![PathBuf::from("given.tex")]
        );
        assert_eq!(
            document_paths(&[], &config, Path::new("/project")),
            vec![PathBuf::from("/project/configured.tex")]
        );
    }

    #[test]
    fn test_load_config_from_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        std::fs::write(&path, "documents:\n  - a.tex\n").unwrap();

        let (config, config_path) = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config_path, path);
        assert_eq!(config.documents, vec![PathBuf::from("a.tex")]);
    }

    #[test]
    fn test_load_config_resolves_default_against_cwd() {
        let (_, config_path) = load_config(None).unwrap();
        assert!(config_path.is_absolute());
        assert_eq!(
            config_path,
            std::env::current_dir().unwrap().join(DEFAULT_CONFIG_FILE)
        );
    }
}
