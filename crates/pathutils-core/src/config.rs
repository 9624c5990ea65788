use crate::decode::DecodeOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/pathutils/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathutilsConfig {
    /// Pretty-print JSON output instead of emitting one line per result.
    #[serde(default)]
    pub pretty_json: bool,
    /// How the CLI decodes file URL arguments; strict URLs unless overridden.
    #[serde(default)]
    pub decode: DecodeOptions,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pathutils")?;
    Ok(xdg_dirs
        .get_config_home()
        .join("pathutils")
        .join("config.toml"))
}

/// Load configuration from the XDG config dir, falling back to defaults if the file is missing.
pub fn load_or_default() -> Result<PathutilsConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(PathutilsConfig::default());
    }
    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<PathutilsConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: PathutilsConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::folder::Folder;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = PathutilsConfig::default();
        assert!(!cfg.decode.read_from_path);
        assert!(cfg.decode.base.is_none());
        assert!(!cfg.pretty_json);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = PathutilsConfig {
            pretty_json: true,
            decode: DecodeOptions::from_paths(Folder::from_path("/srv/data")),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: PathutilsConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: PathutilsConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, PathutilsConfig::default());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            pretty_json = true

            [decode]
            read_from_path = true
            base = "file:///home/user/"
        "#;
        let cfg: PathutilsConfig = toml::from_str(toml).unwrap();
        assert!(cfg.pretty_json);
        assert!(cfg.decode.read_from_path);
        assert_eq!(cfg.decode.base.unwrap().path(), "/home/user");
    }

    #[test]
    fn config_toml_rejects_file_base() {
        let toml = r#"
            [decode]
            base = "file:///home/user/notes.txt"
        "#;
        assert!(toml::from_str::<PathutilsConfig>(toml).is_err());
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "[decode]\nread_from_path = true").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert!(cfg.decode.read_from_path);
        assert!(load_from(&f.path().with_extension("missing")).is_err());
    }
}
