//! Configuration file schema.
//!
//! Everything has a default, so the monitor runs with no config file at all;
//! a TOML file overrides selectively and CLI flags override the file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use vigil_models::{AssetUniverse, UniverseEntry};

/// Root configuration schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Standard deviations defining "anomalous".
    pub threshold_z: f64,
    /// Minimum valid trailing observations before testing.
    pub min_days: usize,
    /// Trailing window requested per asset, in trading days.
    pub lookback_days: usize,
    /// Directory reports are written into.
    pub output_dir: PathBuf,
    pub notify: NotifyInfo,
    /// Optional replacement for the built-in six-category universe.
    pub category: Option<Vec<UniverseEntry>>,
}

/// Push-delivery settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NotifyInfo {
    pub webhook_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            threshold_z: vigil_monitor::DEFAULT_THRESHOLD_Z,
            min_days: vigil_monitor::DEFAULT_MIN_DAYS,
            lookback_days: 252,
            output_dir: PathBuf::from("output"),
            notify: NotifyInfo::default(),
            category: None,
        }
    }
}

impl Settings {
    /// Load a TOML config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("could not read config {}: {}", path.display(), e))?;
        toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("could not parse config {}: {}", path.display(), e))
    }

    /// The universe this run monitors: config override or built-in table.
    pub fn universe(&self) -> AssetUniverse {
        match &self.category {
            Some(entries) => AssetUniverse::new(entries.clone()),
            None => AssetUniverse::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use vigil_models::Resolution;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.threshold_z, 2.0);
        assert_eq!(settings.min_days, 30);
        assert_eq!(settings.lookback_days, 252);
        assert!(settings.notify.webhook_url.is_none());
        assert_eq!(settings.universe().len(), 6);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "threshold_z = 2.5").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "[notify]").unwrap();
        writeln!(file, "webhook_url = \"https://example.invalid/hook\"").unwrap();
        file.flush().unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.threshold_z, 2.5);
        assert_eq!(settings.min_days, 30);
        assert_eq!(
            settings.notify.webhook_url.as_deref(),
            Some("https://example.invalid/hook")
        );
    }

    #[test]
    fn test_universe_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
                [[category]]
                key = "etf"
                display_name = "Major ETFs"
                mode = "direct"
                codes = ["510300.SH"]
            "#
        )
        .unwrap();
        file.flush().unwrap();

        let settings = Settings::load(file.path()).unwrap();
        let universe = settings.universe();
        assert_eq!(universe.len(), 1);
        assert!(matches!(
            universe.entries()[0].resolution,
            Resolution::Direct { ref codes } if codes == &["510300.SH".to_string()]
        ));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Settings::load(Path::new("/nonexistent/vigil.toml")).is_err());
    }
}
