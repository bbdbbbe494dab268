//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use crate::utils::logger::Logger;
use crate::errors::MapResult;

/// Represents an executable command in the application
pub trait Command {
    /// Compute the text the command prints
    fn report(&self) -> MapResult<String>;

    /// Execute the command, printing its report
    fn execute(&self) -> MapResult<()> {
        let report = self.report()?;
        println!("{}", report);
        Ok(())
    }
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> MapResult<Box<dyn Command + 'a>>;
}
