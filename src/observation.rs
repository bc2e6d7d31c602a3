//! Observation rows and the timestamps they describe.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use log::warn;

use crate::error::{Error, Result};
use crate::types::GeodeticLocation;

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const ISO_FORMAT_HM: &str = "%Y-%m-%dT%H:%M";

/// One aligned input row: a calendar date, a time of day and a ground position.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub date: String,
    pub time: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl Observation {
    pub fn iso_timestamp(&self) -> String {
        format!("{}T{}", self.date, self.time)
    }

    pub fn location(&self, height_m: f64) -> GeodeticLocation {
        GeodeticLocation::from_geodetic(self.longitude, self.latitude).with_height(height_m)
    }

    /// Reads the timestamp as wall-clock time in `tz` and returns the matching UTC instant.
    pub fn instant(&self, tz: Tz) -> Result<DateTime<Utc>> {
        let timestamp = self.iso_timestamp();
        let naive = NaiveDateTime::parse_from_str(&timestamp, ISO_FORMAT)
            .or_else(|err| {
                NaiveDateTime::parse_from_str(&timestamp, ISO_FORMAT_HM).map_err(|_| err)
            })
            .map_err(|source| Error::Timestamp {
                timestamp: timestamp.clone(),
                source,
            })?;

        match tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(..) | LocalResult::None => Err(Error::AmbiguousLocalTime {
                timestamp,
                timezone: tz.name().to_string(),
            }),
        }
    }
}

/// The four parallel input lists.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSet {
    pub dates: Vec<String>,
    pub times: Vec<String>,
    pub longitudes: Vec<f64>,
    pub latitudes: Vec<f64>,
}

impl ObservationSet {
    pub fn new(
        dates: Vec<String>,
        times: Vec<String>,
        longitudes: Vec<f64>,
        latitudes: Vec<f64>,
    ) -> Self {
        Self {
            dates,
            times,
            longitudes,
            latitudes,
        }
    }

    pub fn is_aligned(&self) -> bool {
        let n = self.dates.len();
        self.times.len() == n && self.longitudes.len() == n && self.latitudes.len() == n
    }

    /// Zips the lists into rows. Stops at the shortest list.
    pub fn rows(&self) -> Vec<Observation> {
        if !self.is_aligned() {
            warn!(
                "observation lists differ in length (dates={}, times={}, longitudes={}, latitudes={}); extra entries are ignored",
                self.dates.len(),
                self.times.len(),
                self.longitudes.len(),
                self.latitudes.len()
            );
        }

        self.dates
            .iter()
            .zip(&self.times)
            .zip(&self.longitudes)
            .zip(&self.latitudes)
            .map(|(((date, time), &longitude), &latitude)| Observation {
                date: date.clone(),
                time: time.clone(),
                longitude,
                latitude,
            })
            .collect()
    }
}

impl Default for ObservationSet {
    fn default() -> Self {
        Self::new(
            ["2023-10-09", "2023-10-02", "2023-09-20", "2023-10-13"]
                .map(String::from)
                .to_vec(),
            ["17:51:09", "17:55:03", "18:26:24", "17:44:57"]
                .map(String::from)
                .to_vec(),
            vec![-71.26575556, -71.26577778, -71.26574722, -71.26578611],
            vec![42.29589722, 42.29591111, 42.295925, 42.29589167],
        )
    }
}
