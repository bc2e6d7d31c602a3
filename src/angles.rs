//! Closed-form solar geometry: Cooper's declination, Spencer's equation of
//! time and the spherical-triangle altitude/azimuth.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

use crate::types::SunAngles;

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

fn fractional_year(day_of_year: u32) -> f64 {
    (2.0 * std::f64::consts::PI / 365.0) * (day_of_year as f64 - 1.0)
}

/// Equation of time in minutes.
pub fn equation_of_time(day_of_year: u32) -> f64 {
    let (s1, c1) = fractional_year(day_of_year).sin_cos();
    let (s2, c2) = (2.0 * fractional_year(day_of_year)).sin_cos();
    229.18 * (0.000075 + 0.001868 * c1 - 0.032077 * s1 - 0.014615 * c2 - 0.040849 * s2)
}

pub fn solar_declination(day_of_year: u32) -> f64 {
    let phase = 360.0 * (284 + day_of_year) as f64 / 365.0;
    EARTH_AXIAL_TILT * phase.to_radians().sin()
}

/// Local apparent solar time in hours, wrapped to [0, 24).
pub fn local_solar_time(utc_hours: f64, longitude: f64, equation_of_time: f64) -> f64 {
    let offset_minutes = 4.0 * longitude + equation_of_time;
    (utc_hours + offset_minutes / 60.0).rem_euclid(24.0)
}

pub fn hour_angle(local_solar_time: f64) -> f64 {
    DEGREES_PER_HOUR * (local_solar_time - 12.0)
}

/// Returns `(zenith, azimuth)` in degrees; azimuth is measured from north through east.
pub fn zenith_and_azimuth(latitude: f64, declination: f64, hour_angle: f64) -> (f64, f64) {
    let (sin_lat, cos_lat) = latitude.to_radians().sin_cos();
    let (sin_dec, cos_dec) = declination.to_radians().sin_cos();
    let (sin_ha, cos_ha) = hour_angle.to_radians().sin_cos();

    let cos_zenith = (sin_lat * sin_dec + cos_lat * cos_dec * cos_ha).clamp(-1.0, 1.0);
    let azimuth = (-cos_dec * sin_ha).atan2(sin_dec * cos_lat - cos_dec * sin_lat * cos_ha);

    (
        cos_zenith.acos().to_degrees(),
        normalize_angle(azimuth.to_degrees()),
    )
}

fn utc_hours(utc: &DateTime<Utc>) -> f64 {
    let seconds = utc.num_seconds_from_midnight() as f64 + utc.nanosecond() as f64 * 1e-9;
    seconds / 3600.0
}

pub fn sun_angles<Tz: TimeZone>(latitude: f64, longitude: f64, dt: &DateTime<Tz>) -> SunAngles {
    let utc = dt.with_timezone(&Utc);
    let day_of_year = utc.ordinal();
    let eot = equation_of_time(day_of_year);
    let declination = solar_declination(day_of_year);
    let lst = local_solar_time(utc_hours(&utc), longitude, eot);
    let ha = hour_angle(lst);
    let (zenith, azimuth) = zenith_and_azimuth(latitude, declination, ha);

    SunAngles {
        day_of_year,
        declination,
        equation_of_time: eot,
        local_solar_time: lst,
        hour_angle: ha,
        zenith,
        altitude: 90.0 - zenith,
        azimuth,
    }
}
