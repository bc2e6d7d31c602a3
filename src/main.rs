use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::info;

use sun_altaz::config::{Config, Overrides};
use sun_altaz::{get_sun_position, Model, OutputFormat, ReportOptions};

#[derive(Parser)]
#[command(
    name = "sun_altaz",
    about = "Apparent sun altitude and azimuth for a list of observations"
)]
struct Args {
    /// JSON file with dates, times, longitudes and latitudes (built-in observations if omitted)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Ephemeris backend
    #[arg(long, value_enum)]
    model: Option<Model>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// IANA zone the dates and times are given in (default UTC)
    #[arg(long)]
    timezone: Option<String>,
    /// Observer height above the ellipsoid in meters
    #[arg(long)]
    height: Option<f64>,
    /// Apply standard-atmosphere refraction (SPA only)
    #[arg(long)]
    refraction: bool,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => {
            info!("loading observations from {}", path.display());
            Config::from_file(path)?
        }
        None => Config::default(),
    };

    config.apply_overrides(&Overrides {
        model: args.model,
        timezone: args.timezone,
        height_m: args.height,
        refraction: args.refraction,
    })?;

    let ephemeris = config.model.ephemeris(config.refraction);
    let options = ReportOptions {
        timezone: config.timezone,
        height_m: config.height_m,
        format: args.format,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    get_sun_position(&config.observations, ephemeris.as_ref(), &options, &mut out)?;

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
