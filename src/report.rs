use std::io::Write;

use chrono_tz::Tz;
use log::{debug, info};

use crate::ephemeris::SunEphemeris;
use crate::error::Result;
use crate::observation::ObservationSet;
use crate::types::SunReport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportOptions {
    /// Zone the naive date/time strings are read in.
    pub timezone: Tz,
    pub height_m: f64,
    pub format: OutputFormat,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            height_m: 0.0,
            format: OutputFormat::Text,
        }
    }
}

pub fn format_line(report: &SunReport) -> String {
    format!(
        "Date: {}, Time: {}, Altitude: {}, Azimuth: {}",
        report.date, report.time, report.altitude, report.azimuth
    )
}

fn write_report<W: Write>(out: &mut W, report: &SunReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", format_line(report))?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Computes and writes the sun's altitude and azimuth for every row of `set`, in order.
///
/// Stops at the first row that fails; lines already written are left in `out`.
pub fn get_sun_position<W: Write>(
    set: &ObservationSet,
    ephemeris: &dyn SunEphemeris,
    options: &ReportOptions,
    out: &mut W,
) -> Result<Vec<SunReport>> {
    let rows = set.rows();
    info!(
        "computing sun position for {} observation(s) with {} model",
        rows.len(),
        ephemeris.name()
    );

    let mut reports = Vec::with_capacity(rows.len());
    for row in rows {
        let location = row.location(options.height_m);
        let at = row.instant(options.timezone)?;
        let altaz = ephemeris.sun_altaz(&location, &at)?;
        debug!(
            "{} at ({}, {}): alt={:.4} az={:.4}",
            at, location.longitude, location.latitude, altaz.altitude, altaz.azimuth
        );

        let report = SunReport {
            date: row.date,
            time: row.time,
            altitude: altaz.altitude,
            azimuth: altaz.azimuth,
        };
        write_report(out, &report, options.format)?;
        reports.push(report);
    }

    out.flush()?;
    Ok(reports)
}
