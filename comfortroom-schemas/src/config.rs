//! Scoring configuration documents

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use comfortroom_core::{
    rank_rooms, recommend, Criterion, DesiredProfile, RankedRoom, RoomRequirements, RoomSnapshot,
    Scorable, Weights,
};
use serde::{Deserialize, Serialize};

use crate::SchemaError;

/// Weights, desired profile and facility requirements for one scoring run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Criterion weights
    pub weights: Weights,
    /// Ideal overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_profile: Option<DesiredProfile>,
    /// Facility filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<RoomRequirements>,
}

impl ScoringConfig {
    /// Config with the given weights and nothing else
    pub fn with_weights(weights: Weights) -> Self {
        Self {
            weights,
            ..Default::default()
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SchemaError> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| SchemaError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject weights and ideals the scorer could only use by guessing
    ///
    /// Weights must be finite, non-negative and not all zero. Desired ideals
    /// must be finite; out-of-band ideals are accepted (temperature, CO2 and
    /// sound ideals are clamped at scoring time).
    pub fn validate(&self) -> Result<(), SchemaError> {
        self.weights
            .validate()
            .map_err(|e| SchemaError::Validation(e.to_string()))?;

        if self.weights.total() <= 0.0 {
            return Err(SchemaError::Validation(
                "at least one weight must be positive".to_string(),
            ));
        }

        if let Some(profile) = &self.desired_profile {
            for criterion in Criterion::ALL {
                if let Some(ideal) = profile.get(criterion) {
                    if !ideal.is_scorable() {
                        return Err(SchemaError::Validation(format!(
                            "desired {} must be a finite number",
                            criterion
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Rank rooms with this config, filtering by requirements when present
    pub fn rank(&self, rooms: &[RoomSnapshot]) -> Vec<RankedRoom> {
        let profile = self.desired_profile.as_ref();
        match &self.requirements {
            Some(requirements) => recommend(rooms, requirements, &self.weights, profile),
            None => rank_rooms(rooms, &self.weights, profile),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comfortroom_core::SensorReading;
    use std::io::Write;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ScoringConfig::from_json_str("{}").unwrap();
        assert_eq!(config.weights, Weights::default());
        assert!(config.desired_profile.is_none());
        assert!(config.requirements.is_none());
    }

    #[test]
    fn partial_weights_fill_from_defaults() {
        let config = ScoringConfig::from_json_str(r#"{"weights": {"co2": 0.6}}"#).unwrap();
        assert_eq!(config.weights.co2, 0.6);
        assert_eq!(config.weights.temperature, 0.25);
    }

    #[test]
    fn full_document() {
        let json = r#"{
            "description": "exam hall",
            "weights": {"temperature": 0.3, "co2": 0.3, "humidity": 0.1, "sound": 0.3},
            "desired_profile": {"temperature": 21.0},
            "requirements": {"min_capacity": 50, "needs_accessible": true}
        }"#;
        let config = ScoringConfig::from_json_str(json).unwrap();
        assert_eq!(config.description.as_deref(), Some("exam hall"));
        assert_eq!(config.desired_profile.unwrap().temperature, Some(21.0));
        let req = config.requirements.unwrap();
        assert_eq!(req.min_capacity, Some(50));
        assert!(req.needs_accessible);
        assert!(!req.needs_projector);
    }

    #[test]
    fn rejects_bad_weights() {
        let negative = ScoringConfig::from_json_str(r#"{"weights": {"sound": -0.5}}"#);
        assert!(matches!(negative, Err(SchemaError::Validation(_))));

        let zero = r#"{"weights": {"temperature": 0, "co2": 0, "humidity": 0, "sound": 0}}"#;
        assert!(matches!(
            ScoringConfig::from_json_str(zero),
            Err(SchemaError::Validation(_))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            ScoringConfig::from_json_str(r#"{"weights": "#),
            Err(SchemaError::Parse(_))
        ));
        assert!(matches!(
            ScoringConfig::from_json_str(r#"{"weights": {"co2": "high"}}"#),
            Err(SchemaError::Parse(_))
        ));
    }

    #[test]
    fn rejects_non_finite_ideal() {
        let config = ScoringConfig {
            desired_profile: Some(DesiredProfile::default().with_humidity(f64::NAN)),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SchemaError::Validation(_))));
    }

    #[test]
    fn json_round_trip_keeps_values() {
        let config = ScoringConfig {
            description: Some("warm".into()),
            weights: Weights::air_quality_priority(),
            desired_profile: Some(DesiredProfile::default().with_temperature(23.5)),
            requirements: None,
        };
        let json = config.to_json_string().unwrap();
        assert!(!json.contains("requirements"));
        assert_eq!(ScoringConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"weights": {{"co2": 0.5}}, "requirements": {{"needs_projector": true}}}}"#)
            .unwrap();

        let config = ScoringConfig::from_path(file.path()).unwrap();
        assert_eq!(config.weights.co2, 0.5);
        assert!(config.requirements.unwrap().needs_projector);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ScoringConfig::from_path(dir.path().join("absent.json"));
        assert!(matches!(result, Err(SchemaError::Io(_))));
    }

    #[test]
    fn rank_applies_requirements() {
        let rooms = vec![
            RoomSnapshot::new(1, SensorReading::new(22.0, 600.0, 50.0, 30.0)),
            RoomSnapshot::new(2, SensorReading::new(26.0, 1200.0, 50.0, 45.0)),
        ];

        let open = ScoringConfig::default();
        assert_eq!(open.rank(&rooms).len(), 2);

        let strict = ScoringConfig {
            requirements: Some(RoomRequirements {
                needs_whiteboard: true,
                ..Default::default()
            }),
            ..Default::default()
        };
        // neither room declares facilities
        assert!(strict.rank(&rooms).is_empty());
    }
}
