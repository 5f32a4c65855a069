use super::MilepostAppError;
use config::{Config, File, FileFormat};
use milepost_core::algorithm::search::HeuristicConfig;
use serde::{Deserialize, Serialize};

/// application configuration: heuristic calibration and queue sizing.
/// built by layering an optional user TOML file over the embedded
/// defaults, so a user file only needs the keys it changes.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub heuristic: HeuristicSection,
    pub queue: QueueSection,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Decimeters,
    Meters,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HeuristicSection {
    pub unit: WeightUnit,
    /// weight units per microdegree; overrides `unit` when set
    pub scale: Option<f64>,
    pub safety: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct QueueSection {
    pub width: usize,
}

impl AppConfig {
    /// reads the layered configuration: embedded defaults first, then
    /// the user file when one is given.
    pub fn load(user_file: Option<&str>) -> Result<AppConfig, MilepostAppError> {
        let defaults = File::from_str(include_str!("config.default.toml"), FileFormat::Toml);
        let mut builder = Config::builder().add_source(defaults);
        if let Some(path) = user_file {
            builder = builder.add_source(File::new(path, FileFormat::Toml));
        }
        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.heuristic_config().validate()?;
        if config.queue.width == 0 {
            return Err(MilepostAppError::BuildFailure(String::from(
                "queue width must be positive",
            )));
        }
        Ok(config)
    }

    /// the calibrated heuristic the search engine is built with
    pub fn heuristic_config(&self) -> HeuristicConfig {
        let base = match self.heuristic.unit {
            WeightUnit::Decimeters => HeuristicConfig::decimeters(),
            WeightUnit::Meters => HeuristicConfig::meters(),
        };
        HeuristicConfig {
            scale: self.heuristic.scale.unwrap_or(base.scale),
            safety: self.heuristic.safety,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-6
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::load(None).unwrap();
        assert!(matches!(config.heuristic.unit, WeightUnit::Decimeters));
        assert_eq!(config.queue.width, 100_000);
        assert!(close(config.heuristic_config().scale, 1.111_949_3));
        assert!(close(config.heuristic_config().safety, 0.99));
    }

    #[test]
    fn test_user_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meters.toml");
        std::fs::write(&path, "[heuristic]\nunit = \"meters\"\nsafety = 0.9\n").unwrap();
        let config = AppConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert!(close(config.heuristic_config().scale, 0.111_194_93));
        assert!(close(config.heuristic_config().safety, 0.9));
        // untouched sections keep their defaults
        assert_eq!(config.queue.width, 100_000);
    }

    #[test]
    fn test_explicit_scale_wins_over_unit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scale.toml");
        std::fs::write(&path, "[heuristic]\nscale = 2.5\n").unwrap();
        let config = AppConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert!(close(config.heuristic_config().scale, 2.5));
    }

    #[test]
    fn test_invalid_safety_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unsafe.toml");
        std::fs::write(&path, "[heuristic]\nsafety = 1.5\n").unwrap();
        assert!(AppConfig::load(Some(path.to_str().unwrap())).is_err());
    }

    #[test]
    fn test_missing_user_file_is_an_error() {
        assert!(AppConfig::load(Some("no/such/file.toml")).is_err());
    }
}
