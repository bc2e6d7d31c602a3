use serde::Serialize;

/// A point on the WGS84 ellipsoid. Longitude is positive east.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticLocation {
    pub longitude: f64,
    pub latitude: f64,
    pub height_m: f64,
}

impl GeodeticLocation {
    pub fn from_geodetic(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            height_m: 0.0,
        }
    }

    pub fn with_height(self, height_m: f64) -> Self {
        Self { height_m, ..self }
    }
}

/// Altitude above the horizon and azimuth from north through east, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoordinates {
    pub altitude: f64,
    pub azimuth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunAngles {
    pub day_of_year: u32,
    pub declination: f64,
    pub equation_of_time: f64,
    pub local_solar_time: f64,
    pub hour_angle: f64,
    pub zenith: f64,
    pub altitude: f64,
    pub azimuth: f64,
}

impl From<SunAngles> for HorizontalCoordinates {
    fn from(angles: SunAngles) -> Self {
        Self {
            altitude: angles.altitude,
            azimuth: angles.azimuth,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunReport {
    pub date: String,
    pub time: String,
    pub altitude: f64,
    pub azimuth: f64,
}
