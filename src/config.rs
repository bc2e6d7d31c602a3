use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono_tz::Tz;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use solar_positioning::RefractionCorrection;
use thiserror::Error;

use crate::ephemeris::Model;
use crate::observation::ObservationSet;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown time zone {0:?}")]
    Timezone(String),

    #[error("Invalid refraction parameters: {0}")]
    Refraction(solar_positioning::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub observations: ObservationSet,
    pub timezone: Tz,
    pub height_m: f64,
    pub model: Model,
    pub refraction: Option<RefractionCorrection>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            observations: ObservationSet::default(),
            timezone: Tz::UTC,
            height_m: 0.0,
            model: Model::default(),
            refraction: None,
        }
    }
}

// List fields are optional as a group: a config that names none of them
// reports the built-in observations, one that names only some zips to nothing.
impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct ConfigHelper {
            dates: Option<Vec<String>>,
            times: Option<Vec<String>>,
            longitudes: Option<Vec<f64>>,
            latitudes: Option<Vec<f64>>,
            timezone: Option<String>,
            #[serde(default)]
            height_m: f64,
            #[serde(default)]
            model: Model,
            refraction: Option<RefractionHelper>,
        }

        #[derive(Deserialize)]
        struct RefractionHelper {
            pressure: f64,
            temperature: f64,
        }

        let helper = ConfigHelper::deserialize(deserializer)?;

        let observations = match (
            helper.dates,
            helper.times,
            helper.longitudes,
            helper.latitudes,
        ) {
            (None, None, None, None) => ObservationSet::default(),
            (dates, times, longitudes, latitudes) => ObservationSet::new(
                dates.unwrap_or_default(),
                times.unwrap_or_default(),
                longitudes.unwrap_or_default(),
                latitudes.unwrap_or_default(),
            ),
        };

        let timezone = match helper.timezone {
            Some(name) => parse_timezone(&name).map_err(D::Error::custom)?,
            None => Tz::UTC,
        };

        let refraction = helper
            .refraction
            .map(|r| RefractionCorrection::new(r.pressure, r.temperature))
            .transpose()
            .map_err(|e| D::Error::custom(ConfigError::Refraction(e)))?;

        Ok(Config {
            observations,
            timezone,
            height_m: helper.height_m,
            model: helper.model,
            refraction,
        })
    }
}

pub fn parse_timezone(name: &str) -> Result<Tz, ConfigError> {
    name.parse::<Tz>()
        .map_err(|_| ConfigError::Timezone(name.to_string()))
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Applies command-line settings on top of the loaded config.
    ///
    /// `refraction` only switches on the standard atmosphere when the config
    /// has no refraction block of its own.
    pub fn apply_overrides(&mut self, overrides: &Overrides) -> Result<(), ConfigError> {
        if let Some(model) = overrides.model {
            self.model = model;
        }
        if let Some(name) = &overrides.timezone {
            self.timezone = parse_timezone(name)?;
        }
        if let Some(height_m) = overrides.height_m {
            self.height_m = height_m;
        }
        if overrides.refraction && self.refraction.is_none() {
            self.refraction = Some(RefractionCorrection::standard());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub model: Option<Model>,
    pub timezone: Option<String>,
    pub height_m: Option<f64>,
    pub refraction: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_builtin_observations() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.observations.rows().len(), 4);
    }

    #[test]
    fn test_full_config() {
        let json = r#"{
            "dates": ["2024-06-21"],
            "times": ["12:00:00"],
            "longitudes": [16.37],
            "latitudes": [48.21],
            "timezone": "Europe/Vienna",
            "height_m": 190.0,
            "model": "approx",
            "refraction": { "pressure": 1013.25, "temperature": 15.0 }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.timezone, chrono_tz::Europe::Vienna);
        assert_eq!(config.height_m, 190.0);
        assert_eq!(config.model, Model::Approx);
        assert_eq!(config.refraction, Some(RefractionCorrection::standard()));
        assert_eq!(config.observations.dates, ["2024-06-21"]);
    }

    #[test]
    fn test_partial_lists_do_not_fall_back() {
        let config: Config = serde_json::from_str(r#"{ "dates": ["2024-06-21"] }"#).unwrap();
        assert!(config.observations.rows().is_empty());
    }

    #[test]
    fn test_unknown_timezone() {
        let err = serde_json::from_str::<Config>(r#"{ "timezone": "Mars/Olympus_Mons" }"#)
            .unwrap_err();
        assert!(err.to_string().contains("Unknown time zone"), "{err}");
    }

    #[test]
    fn test_bad_refraction() {
        let json = r#"{ "refraction": { "pressure": -1.0, "temperature": 15.0 } }"#;
        let err = serde_json::from_str::<Config>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid refraction"), "{err}");
    }

    #[test]
    fn test_unknown_model() {
        assert!(serde_json::from_str::<Config>(r#"{ "model": "vsop87" }"#).is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(serde_json::from_str::<Config>(r#"{ "elevation": 3.0 }"#).is_err());
    }

    #[test]
    fn test_no_overrides_leave_config_alone() {
        let mut config = Config::default();
        config.apply_overrides(&Overrides::default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_override_model_timezone_height() {
        let mut config = Config::default();
        let overrides = Overrides {
            model: Some(Model::Approx),
            timezone: Some("America/New_York".to_string()),
            height_m: Some(45.0),
            ..Overrides::default()
        };
        config.apply_overrides(&overrides).unwrap();
        assert_eq!(config.model, Model::Approx);
        assert_eq!(config.timezone, chrono_tz::America::New_York);
        assert_eq!(config.height_m, 45.0);
    }

    #[test]
    fn test_refraction_flag_sets_standard_atmosphere() {
        let mut config = Config::default();
        let overrides = Overrides {
            refraction: true,
            ..Overrides::default()
        };
        config.apply_overrides(&overrides).unwrap();
        assert_eq!(config.refraction, Some(RefractionCorrection::standard()));
    }

    #[test]
    fn test_refraction_flag_keeps_configured_atmosphere() {
        let json = r#"{ "refraction": { "pressure": 900.0, "temperature": -5.0 } }"#;
        let mut config: Config = serde_json::from_str(json).unwrap();
        let overrides = Overrides {
            refraction: true,
            ..Overrides::default()
        };
        config.apply_overrides(&overrides).unwrap();
        let refraction = config.refraction.unwrap();
        assert_eq!(refraction.pressure(), 900.0);
        assert_eq!(refraction.temperature(), -5.0);
    }

    #[test]
    fn test_override_unknown_timezone() {
        let mut config = Config::default();
        let overrides = Overrides {
            timezone: Some("Mars/Olympus_Mons".to_string()),
            ..Overrides::default()
        };
        let err = config.apply_overrides(&overrides).unwrap_err();
        assert!(matches!(err, ConfigError::Timezone(ref name) if name == "Mars/Olympus_Mons"));
        assert_eq!(config.timezone, Tz::UTC);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/nonexistent/sun_altaz.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
