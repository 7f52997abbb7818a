//! Configuration file support for Triad
//!
//! Loads engine settings from JSON files.
//!
//! Search order:
//! 1. Explicit path (--config CLI flag)
//! 2. `.triadrc.json` in the project root
//! 3. `triad.config.json` in the project root
//!
//! All fields are optional. CLI flags take precedence over config file values.

use crate::cost::CostThresholds;
use crate::facade::EngineSettings;
use crate::timeline::TimelineSettings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Largest capex total any posture can reach (3 dimensions x 100 points)
const MAX_CAPEX_TOTAL: f64 = 300.0;

/// Triad configuration loaded from a JSON config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TriadConfig {
    /// Basic vs. comprehensive classification boundary
    #[serde(default)]
    pub classification: Option<ClassificationConfig>,

    /// Total implementation weeks per overall rating
    #[serde(default)]
    pub timeline: Option<TimelineConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassificationConfig {
    /// Capex totals at or below this are basic (default: 50.0)
    pub basic_capex_max: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineConfig {
    /// Weeks for None, Low, Moderate, High, Very High (default: [3, 6, 10, 16, 24])
    pub weeks: Option<Vec<u32>>,
}

/// Resolved configuration ready for use
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub settings: EngineSettings,
    /// Path the config was loaded from (None if defaults)
    pub config_path: Option<PathBuf>,
}

impl TriadConfig {
    /// Validate the configuration for logical errors
    pub fn validate(&self) -> Result<()> {
        if let Some(max) = self
            .classification
            .as_ref()
            .and_then(|c| c.basic_capex_max)
        {
            if !max.is_finite() {
                anyhow::bail!("classification.basic_capex_max must be finite (got {})", max);
            }
            if !(0.0..=MAX_CAPEX_TOTAL).contains(&max) {
                anyhow::bail!(
                    "classification.basic_capex_max must be between 0 and {} (got {})",
                    MAX_CAPEX_TOTAL,
                    max
                );
            }
        }

        if let Some(weeks) = self.timeline.as_ref().and_then(|t| t.weeks.as_ref()) {
            timeline_settings(weeks)?;
        }

        Ok(())
    }

    /// Resolve config into engine settings, filling defaults
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.validate()?;

        let defaults = EngineSettings::default();

        let basic_capex_max = self
            .classification
            .as_ref()
            .and_then(|c| c.basic_capex_max)
            .unwrap_or(defaults.cost.basic_capex_max);

        let timeline = match self.timeline.as_ref().and_then(|t| t.weeks.as_ref()) {
            Some(weeks) => timeline_settings(weeks)?,
            None => defaults.timeline,
        };

        Ok(ResolvedConfig {
            settings: EngineSettings {
                cost: CostThresholds { basic_capex_max },
                timeline,
            },
            config_path: None,
        })
    }
}

/// Check the entry count, then the week ordering rules
fn timeline_settings(weeks: &[u32]) -> Result<TimelineSettings> {
    let table: [u32; 5] = weeks.try_into().map_err(|_| {
        anyhow::anyhow!(
            "timeline.weeks must have exactly 5 entries, one per rating (got {})",
            weeks.len()
        )
    })?;
    TimelineSettings::new(table).context("invalid timeline.weeks")
}

impl ResolvedConfig {
    /// Build a ResolvedConfig with all defaults (no config file)
    pub fn defaults() -> Result<Self> {
        TriadConfig::default().resolve()
    }
}

/// Discover and load a config file from the project root
///
/// Returns `None` if no config file is found (use defaults).
pub fn discover_config(project_root: &Path) -> Result<Option<(TriadConfig, PathBuf)>> {
    for name in [".triadrc.json", "triad.config.json"] {
        let path = project_root.join(name);
        if path.exists() {
            let config = load_config_file(&path)?;
            return Ok(Some((config, path)));
        }
    }
    Ok(None)
}

/// Load config from an explicit file path
pub fn load_config_file(path: &Path) -> Result<TriadConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    let config: TriadConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("invalid config in: {}", path.display()))?;

    Ok(config)
}

/// Load and resolve config for a project
///
/// If `config_path` is provided, loads from that file.
/// Otherwise, discovers config from the project root.
/// Returns default config if nothing is found.
pub fn load_and_resolve(project_root: &Path, config_path: Option<&Path>) -> Result<ResolvedConfig> {
    let (config, source_path) = if let Some(path) = config_path {
        let config = load_config_file(path)?;
        (config, Some(path.to_path_buf()))
    } else {
        match discover_config(project_root)? {
            Some((config, path)) => (config, Some(path)),
            None => (TriadConfig::default(), None),
        }
    };

    let mut resolved = config.resolve()?;
    resolved.config_path = source_path;
    if let Some(path) = &resolved.config_path {
        tracing::debug!(path = %path.display(), "loaded configuration");
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config_is_valid() {
        let config = TriadConfig::default();
        config.validate().expect("default config should be valid");
        let resolved = config.resolve().expect("default config should resolve");
        assert_eq!(resolved.settings.cost.basic_capex_max, 50.0);
        assert_eq!(resolved.settings.timeline.weeks(), [3, 6, 10, 16, 24]);
        assert!(resolved.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: TriadConfig = serde_json::from_str("{}").unwrap();
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "classification": { "basic_capex_max": 100.0 },
            "timeline": { "weeks": [4, 8, 12, 20, 30] }
        }"#;
        let config: TriadConfig = serde_json::from_str(json).unwrap();
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.settings.cost.basic_capex_max, 100.0);
        assert_eq!(resolved.settings.timeline.weeks(), [4, 8, 12, 20, 30]);
    }

    #[test]
    fn test_reject_unknown_fields() {
        let result: Result<TriadConfig, _> = serde_json::from_str(r#"{"unknown_field": true}"#);
        assert!(result.is_err(), "unknown fields should be rejected");
        let result: Result<TriadConfig, _> =
            serde_json::from_str(r#"{"classification": {"boundary": 10}}"#);
        assert!(result.is_err(), "unknown nested fields should be rejected");
    }

    #[test]
    fn test_reject_out_of_range_boundary() {
        let config: TriadConfig =
            serde_json::from_str(r#"{"classification": {"basic_capex_max": -1.0}}"#).unwrap();
        assert!(config.validate().is_err());
        let config: TriadConfig =
            serde_json::from_str(r#"{"classification": {"basic_capex_max": 301.0}}"#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reject_wrong_timeline_length() {
        let config: TriadConfig =
            serde_json::from_str(r#"{"timeline": {"weeks": [3, 6, 10]}}"#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reject_non_increasing_timeline() {
        let config: TriadConfig =
            serde_json::from_str(r#"{"timeline": {"weeks": [3, 6, 6, 16, 24]}}"#).unwrap();
        let err = config.validate().unwrap_err();
        assert!(format!("{:#}", err).contains("strictly increasing"));
    }

    #[test]
    fn test_reject_too_short_timeline() {
        let config: TriadConfig =
            serde_json::from_str(r#"{"timeline": {"weeks": [2, 6, 10, 16, 24]}}"#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reject_too_long_timeline() {
        let config: TriadConfig =
            serde_json::from_str(r#"{"timeline": {"weeks": [3, 6, 10, 16, 521]}}"#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults_for_rest() {
        let config: TriadConfig =
            serde_json::from_str(r#"{"classification": {"basic_capex_max": 75.0}}"#).unwrap();
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.settings.cost.basic_capex_max, 75.0);
        assert_eq!(resolved.settings.timeline, TimelineSettings::default());
    }

    #[test]
    fn test_discover_triadrc() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join(".triadrc.json");
        fs::write(&config_path, r#"{"classification": {"basic_capex_max": 60.0}}"#).unwrap();

        let (config, path) = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(
            config.classification.unwrap().basic_capex_max,
            Some(60.0)
        );
        assert_eq!(path, config_path);
    }

    #[test]
    fn test_discover_priority_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".triadrc.json"),
            r#"{"classification": {"basic_capex_max": 10.0}}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("triad.config.json"),
            r#"{"classification": {"basic_capex_max": 20.0}}"#,
        )
        .unwrap();

        let resolved = load_and_resolve(dir.path(), None).unwrap();
        assert_eq!(
            resolved.settings.cost.basic_capex_max, 10.0,
            ".triadrc.json should take priority"
        );
    }

    #[test]
    fn test_no_config_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
        let resolved = load_and_resolve(dir.path(), None).unwrap();
        assert_eq!(resolved, ResolvedConfig::defaults().unwrap());
    }

    #[test]
    fn test_load_and_resolve_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("custom.json");
        fs::write(&config_path, r#"{"timeline": {"weeks": [5, 6, 7, 8, 9]}}"#).unwrap();

        let resolved = load_and_resolve(dir.path(), Some(&config_path)).unwrap();
        assert_eq!(resolved.settings.timeline.weeks(), [5, 6, 7, 8, 9]);
        assert_eq!(resolved.config_path, Some(config_path));
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("triad.config.json");
        fs::write(&config_path, "{ not json").unwrap();

        let err = load_and_resolve(dir.path(), None).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to parse config file"));
    }
}
