//! Bounds relation command
//!
//! Reports how two bounds relate: containment, intersection, overlap and
//! their union.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::coordinate::Bounds;
use crate::errors::{MapError, MapResult};
use crate::utils::logger::Logger;

/// Command comparing two bounds
pub struct RelateCommand<'a> {
    first: Bounds,
    second: Bounds,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> RelateCommand<'a> {
    /// Create a new relate command from the `first` and `second` arguments
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> MapResult<Self> {
        let first = Self::bounds_arg(args, "first")?;
        let second = Self::bounds_arg(args, "second")?;
        Ok(Self::from_parts(first, second, logger))
    }

    pub fn from_parts(first: Bounds, second: Bounds, logger: &'a Logger) -> Self {
        RelateCommand {
            first,
            second,
            logger,
        }
    }

    fn bounds_arg(args: &ArgMatches, name: &'static str) -> MapResult<Bounds> {
        args.get_one::<String>(name)
            .ok_or_else(|| MapError::invalid_argument(name, "Missing bounds."))?
            .parse::<Bounds>()
    }
}

impl<'a> Command for RelateCommand<'a> {
    fn report(&self) -> MapResult<String> {
        let (a, b) = (&self.first, &self.second);
        info!("Relating {} to {}", a, b);

        let intersection = match a.intersection(b) {
            Some(shared) => shared.to_string(),
            None => "none".to_string(),
        };

        let mut result = format!("A: {}\nB: {}\n", a, b);
        result.push_str(&format!("  A contains B: {}\n", a.contains_bounds(b)));
        result.push_str(&format!("  B contains A: {}\n", b.contains_bounds(a)));
        result.push_str(&format!("  Intersects: {}\n", a.intersects(b)));
        result.push_str(&format!("  Overlaps: {}\n", a.overlaps(b)));
        result.push_str(&format!("  Intersection: {}\n", intersection));
        result.push_str(&format!("  Extended: {}", a.extend_bounds(b)));

        self.logger.log(&result)?;
        Ok(result)
    }
}
