//! Bounds summary command
//!
//! Builds the bounds enclosing a set of points and reports their derived
//! quantities.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::coordinate::{Bounds, Point};
use crate::errors::{MapError, MapResult};
use crate::utils::coordinate_utils::{parse_point_list, read_points_file};
use crate::utils::logger::Logger;

/// Command for summarising the bounds of a point set
pub struct BoundsCommand<'a> {
    /// Points to enclose
    points: Vec<Point>,
    /// Optional buffer ratio applied after construction
    pad: Option<f64>,
    /// Whether the reported center is rounded
    round: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> BoundsCommand<'a> {
    /// Create a new bounds command
    ///
    /// Points come from `--points` or, failing that, `--points-file`.
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> MapResult<Self> {
        let points = if let Some(list) = args.get_one::<String>("points") {
            parse_point_list(list)?
        } else if let Some(path) = args.get_one::<String>("points-file") {
            read_points_file(path)?
        } else {
            return Err(MapError::invalid_argument("points", "Either --points or --points-file is required."));
        };

        let pad = match args.get_one::<String>("pad") {
            Some(ratio) => Some(ratio.trim().parse::<f64>()
                .map_err(|_| MapError::ParseError(format!("Invalid pad ratio: {}", ratio)))?),
            None => None,
        };

        Ok(Self::from_parts(points, pad, args.get_flag("round"), logger))
    }

    /// Create a bounds command from already parsed values
    pub fn from_parts(points: Vec<Point>, pad: Option<f64>, round: bool, logger: &'a Logger) -> Self {
        debug!("Bounds command over {} points (pad: {:?}, round: {})", points.len(), pad, round);
        BoundsCommand {
            points,
            pad,
            round,
            logger,
        }
    }
}

impl<'a> Command for BoundsCommand<'a> {
    fn report(&self) -> MapResult<String> {
        let mut bounds = Bounds::from_points(&self.points)?;
        info!("Bounds of {} points: {}", self.points.len(), bounds);

        if let Some(ratio) = self.pad {
            bounds = bounds.pad(ratio);
            info!("Padded by {}: {}", ratio, bounds);
        }

        let mut result = format!("Bounds: {}\n", bounds);
        result.push_str(&format!("  Width: {}\n", bounds.width()));
        result.push_str(&format!("  Height: {}\n", bounds.height()));
        result.push_str(&format!("  Size: {}\n", bounds.size()));
        result.push_str(&format!("  Center: {}\n", bounds.center(self.round)));
        result.push_str(&format!("  Top left: {}\n", bounds.top_left()));
        result.push_str(&format!("  Top right: {}\n", bounds.top_right()));
        result.push_str(&format!("  Bottom left: {}\n", bounds.bottom_left()));
        result.push_str(&format!("  Bottom right: {}", bounds.bottom_right()));

        self.logger.log(&result)?;
        Ok(result)
    }
}
