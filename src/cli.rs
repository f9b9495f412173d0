use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use golfweather::{Coordinates, Language};

#[derive(Debug, Parser)]
#[command(
    name = "golfweather",
    version,
    about = "Find nearby golf courses and see whether the coming week is golf weather."
)]
pub struct Cli {
    /// Configuration file (defaults to <config dir>/golfweather/config.toml)
    #[arg(long, global = true, env = "GOLFWEATHER_CONFIG")]
    pub config: Option<PathBuf>,
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
    /// Display language: no or en
    #[arg(long, global = true)]
    pub lang: Option<Language>,
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Locate, pick the nearest course and show today's verdict and the week ahead
    Check(TargetArgs),
    /// List golf courses around a position or place
    Courses(TargetArgs),
    /// Seven-day golf forecast for a coordinate
    Forecast(PositionArgs),
    /// Serve the JSON API
    Serve {
        #[arg(long, short, env = "GOLFWEATHER_PORT", default_value_t = 3000)]
        port: u16,
    },
}

/// Where to search from. Without arguments the configured home position is used.
#[derive(Debug, Args)]
pub struct TargetArgs {
    #[arg(long, allow_negative_numbers = true, requires = "lon", conflicts_with = "place")]
    pub lat: Option<f64>,
    #[arg(long, allow_negative_numbers = true, requires = "lat", conflicts_with = "place")]
    pub lon: Option<f64>,
    /// Free-text place name, or "lat,lon"
    #[arg(long)]
    pub place: Option<String>,
}

impl TargetArgs {
    pub fn position(&self) -> Option<Coordinates> {
        self.lat
            .zip(self.lon)
            .map(|(lat, lon)| Coordinates::new(lat, lon))
    }
}

#[derive(Debug, Args)]
pub struct PositionArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_with_coordinates() {
        let cli = Cli::parse_from(["golfweather", "--lang", "en", "check", "--lat", "-33.9", "--lon", "151.2"]);
        assert_eq!(cli.lang, Some(Language::En));
        let Command::Check(target) = cli.cmd else {
            panic!("expected check");
        };
        assert_eq!(target.position(), Some(Coordinates::new(-33.9, 151.2)));
    }

    #[test]
    fn test_lat_requires_lon() {
        assert!(Cli::try_parse_from(["golfweather", "courses", "--lat", "59.9"]).is_err());
    }

    #[test]
    fn test_place_conflicts_with_coordinates() {
        assert!(
            Cli::try_parse_from([
                "golfweather", "courses", "--place", "Oslo", "--lat", "1", "--lon", "2"
            ])
            .is_err()
        );
    }
}
