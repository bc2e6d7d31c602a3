//! Sun altitude/azimuth backends.
//!
//! [`SpaEphemeris`] delegates to NREL's Solar Position Algorithm from the
//! `solar-positioning` crate. [`ApproxEphemeris`] uses the closed-form
//! declination and equation-of-time model in [`crate::angles`]; it is good to
//! roughly a degree and needs no ΔT.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use solar_positioning::{spa, time::DeltaT, RefractionCorrection};

use crate::angles;
use crate::error::Result;
use crate::types::{GeodeticLocation, HorizontalCoordinates};

pub trait SunEphemeris {
    fn sun_altaz(
        &self,
        location: &GeodeticLocation,
        at: &DateTime<Utc>,
    ) -> Result<HorizontalCoordinates>;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpaEphemeris {
    /// `None` gives the airless position.
    pub refraction: Option<RefractionCorrection>,
}

impl SpaEphemeris {
    pub fn new(refraction: Option<RefractionCorrection>) -> Self {
        Self { refraction }
    }
}

impl SunEphemeris for SpaEphemeris {
    fn sun_altaz(
        &self,
        location: &GeodeticLocation,
        at: &DateTime<Utc>,
    ) -> Result<HorizontalCoordinates> {
        let delta_t = DeltaT::estimate_from_date_like(*at)?;
        let position = spa::solar_position(
            *at,
            location.latitude,
            location.longitude,
            location.height_m,
            delta_t,
            self.refraction,
        )?;
        Ok(HorizontalCoordinates {
            altitude: position.elevation_angle(),
            azimuth: position.azimuth(),
        })
    }

    fn name(&self) -> &'static str {
        "spa"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApproxEphemeris;

impl SunEphemeris for ApproxEphemeris {
    fn sun_altaz(
        &self,
        location: &GeodeticLocation,
        at: &DateTime<Utc>,
    ) -> Result<HorizontalCoordinates> {
        Ok(angles::sun_angles(location.latitude, location.longitude, at).into())
    }

    fn name(&self) -> &'static str {
        "approx"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Model {
    #[default]
    Spa,
    Approx,
}

impl Model {
    /// Refraction only applies to SPA.
    pub fn ephemeris(self, refraction: Option<RefractionCorrection>) -> Box<dyn SunEphemeris> {
        match self {
            Model::Spa => Box::new(SpaEphemeris::new(refraction)),
            Model::Approx => Box::new(ApproxEphemeris),
        }
    }
}
