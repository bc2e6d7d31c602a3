pub mod angles;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod observation;
pub mod report;
pub mod types;

pub use angles::sun_angles;

pub use config::{Config, ConfigError, Overrides};
pub use ephemeris::{ApproxEphemeris, Model, SpaEphemeris, SunEphemeris};
pub use error::{Error, Result};
pub use observation::{Observation, ObservationSet};
pub use report::{format_line, get_sun_position, OutputFormat, ReportOptions};

pub use types::{GeodeticLocation, HorizontalCoordinates, SunAngles, SunReport};
