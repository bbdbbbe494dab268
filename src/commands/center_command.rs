//! Configured map center command

use log::info;

use crate::commands::command_traits::Command;
use crate::config::MapConfiguration;
use crate::errors::MapResult;
use crate::utils::logger::Logger;

/// Command printing the map's configured initial view
pub struct CenterCommand<'a> {
    config: MapConfiguration,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> CenterCommand<'a> {
    pub fn new(config: MapConfiguration, logger: &'a Logger) -> Self {
        CenterCommand { config, logger }
    }
}

impl<'a> Command for CenterCommand<'a> {
    fn report(&self) -> MapResult<String> {
        info!("Reporting configured center for map {:?}", self.config.map_id);

        let mut result = format!("Map: {}\n", self.config.map_id.as_deref().unwrap_or("(unnamed)"));
        result.push_str(&format!("  Center: {}\n", self.config.center()));
        result.push_str(&format!("  Zoom: {}", self.config.zoom));

        self.logger.log(&result)?;
        Ok(result)
    }
}
