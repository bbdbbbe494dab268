//! CLI command implementations
//!
//! This module contains implementations of the commands supported by the
//! CLI application using the Command pattern.

pub mod command_traits;
pub mod bounds_command;
pub mod relate_command;
pub mod distance_command;
pub mod center_command;

pub use command_traits::{Command, CommandFactory};
pub use bounds_command::BoundsCommand;
pub use relate_command::RelateCommand;
pub use distance_command::DistanceCommand;
pub use center_command::CenterCommand;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use log::debug;

use crate::config::MapConfiguration;
use crate::errors::{MapError, MapResult};
use crate::utils::logger::Logger;

/// Build the command-line interface definition
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("mapbounds")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect map points and bounds")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file with a [Leaflet] section")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Append log records to this file instead of stderr")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            ClapCommand::new("bounds")
                .about("Summarise the bounds enclosing a set of points")
                .arg(
                    Arg::new("points")
                        .long("points")
                        .help("Points as 'lat,lon' separated by ';'")
                        .value_name("POINTS")
                        .allow_hyphen_values(true)
                        .conflicts_with("points-file"),
                )
                .arg(
                    Arg::new("points-file")
                        .long("points-file")
                        .help("File with one 'lat,lon' point per line")
                        .value_name("FILE"),
                )
                .arg(
                    Arg::new("pad")
                        .long("pad")
                        .help("Buffer ratio to pad the bounds by (negative shrinks)")
                        .value_name("RATIO")
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("round")
                        .long("round")
                        .help("Round the center to whole numbers")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            ClapCommand::new("relate")
                .about("Compare two bounds given as 'sw_lat,sw_lon,ne_lat,ne_lon'")
                .arg(Arg::new("first").required(true).index(1).allow_hyphen_values(true))
                .arg(Arg::new("second").required(true).index(2).allow_hyphen_values(true)),
        )
        .subcommand(
            ClapCommand::new("distance")
                .about("Planar distance between two 'lat,lon' points")
                .arg(Arg::new("from").required(true).index(1).allow_hyphen_values(true))
                .arg(Arg::new("to").required(true).index(2).allow_hyphen_values(true)),
        )
        .subcommand(
            ClapCommand::new("center")
                .about("Show the configured initial map center and zoom"),
        )
}

/// Factory for creating command instances based on CLI arguments
pub struct MapBoundsCommandFactory;

impl MapBoundsCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        MapBoundsCommandFactory
    }

    fn load_config(args: &ArgMatches) -> MapResult<MapConfiguration> {
        match args.get_one::<String>("config") {
            Some(path) => {
                debug!("Loading map configuration from {}", path);
                MapConfiguration::from_file(path)
            }
            None => Ok(MapConfiguration::embedded().clone()),
        }
    }
}

impl Default for MapBoundsCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for MapBoundsCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> MapResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("bounds", sub)) => Ok(Box::new(BoundsCommand::new(sub, logger)?)),
            Some(("relate", sub)) => Ok(Box::new(RelateCommand::new(sub, logger)?)),
            Some(("distance", sub)) => Ok(Box::new(DistanceCommand::new(sub, logger)?)),
            Some(("center", sub)) => {
                let config = Self::load_config(sub)?;
                Ok(Box::new(CenterCommand::new(config, logger)))
            }
            Some((other, _)) => Err(MapError::invalid_argument("command", format!("Unknown command '{}'.", other))),
            None => Err(MapError::invalid_argument("command", "A command is required.")),
        }
    }
}
