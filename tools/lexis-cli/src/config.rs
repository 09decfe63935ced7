use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use lexis_protocol::Layers;
use lexis_stats::{Normalization, DEFAULT_TTR_WINDOW};
use serde::Deserialize;

/// Run settings from the optional JSON config file; command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub ttr_window: usize,
    /// Text form of the flags, e.g. `"SIMPLE | EXTENDED"`.
    pub layers: Layers,
    pub normalizations: Vec<Normalization>,
    /// Subdirectories of the `run` output.
    pub tagged_dir: String,
    pub statistics_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ttr_window: DEFAULT_TTR_WINDOW,
            layers: Layers::all(),
            normalizations: Normalization::ALL.to_vec(),
            tagged_dir: "Tagged".to_string(),
            statistics_dir: "Statistics".to_string(),
        }
    }
}

impl Settings {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path).with_context(|| format!("reading config {:?}", path))?;
        let settings: Self = serde_json::from_str(&text).with_context(|| format!("parsing config {:?}", path))?;
        if settings.ttr_window == 0 {
            bail!("config {:?}: ttr_window must be at least 1", path);
        }
        Ok(settings)
    }
}

/// Parses `--layers SIMPLE|EXTENDED`.
pub fn parse_layers(s: &str) -> Result<Layers, String> {
    bitflags::parser::from_str::<Layers>(s).map_err(|e| format!("invalid layers `{s}`: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::load(None).expect("settings");
        assert_eq!(settings.ttr_window, 400);
        assert_eq!(settings.layers, Layers::all());
        assert_eq!(settings.normalizations.len(), 3);
    }

    #[test]
    fn test_config_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("lexis.json");
        fs::write(
            &path,
            r#"{ "ttr_window": 100, "layers": "SIMPLE | EXTENDED", "normalizations": ["word-based"] }"#,
        )
        .expect("write");
        let settings = Settings::load(Some(&path)).expect("settings");
        assert_eq!(settings.ttr_window, 100);
        assert_eq!(settings.layers, Layers::SIMPLE | Layers::EXTENDED);
        assert_eq!(settings.normalizations, vec![Normalization::WordBased]);
        assert_eq!(settings.tagged_dir, "Tagged");
    }

    #[test]
    fn test_bad_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("lexis.json");
        fs::write(&path, r#"{ "ttr": 100 }"#).expect("write");
        assert!(Settings::load(Some(&path)).is_err());
        fs::write(&path, r#"{ "ttr_window": 0 }"#).expect("write");
        assert!(Settings::load(Some(&path)).is_err());
        assert!(Settings::load(Some(&dir.path().join("missing.json"))).is_err());
    }

    #[test]
    fn test_parse_layers() {
        assert_eq!(parse_layers("SIMPLE"), Ok(Layers::SIMPLE));
        assert_eq!(parse_layers("SIMPLE | CONSTITUENCY"), Ok(Layers::SIMPLE | Layers::CONSTITUENCY));
        assert!(parse_layers("SEMANTIC").is_err());
    }
}
