//! Point distance command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::coordinate::Point;
use crate::errors::{MapError, MapResult};
use crate::utils::logger::Logger;

/// Command measuring the planar distance between two points
pub struct DistanceCommand<'a> {
    from: Point,
    to: Point,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> DistanceCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> MapResult<Self> {
        let from = Self::point_arg(args, "from")?;
        let to = Self::point_arg(args, "to")?;
        Ok(DistanceCommand { from, to, logger })
    }

    fn point_arg(args: &ArgMatches, name: &'static str) -> MapResult<Point> {
        args.get_one::<String>(name)
            .ok_or_else(|| MapError::invalid_argument(name, "Missing point."))?
            .parse::<Point>()
    }
}

impl<'a> Command for DistanceCommand<'a> {
    fn report(&self) -> MapResult<String> {
        let distance = self.from.distance_to(&self.to);
        info!("Distance from {} to {} is {}", self.from, self.to, distance);

        let result = format!(
            "Distance: {}\n  Offset: {}",
            distance,
            self.to - self.from
        );
        self.logger.log(&result)?;
        Ok(result)
    }
}
