//! Map configuration options
//!
//! Reads the `[Leaflet]` section of a TOML document. Keys use the same
//! PascalCase spelling as the host application's settings files.

use std::fs;
use lazy_static::lazy_static;
use log::debug;

use crate::coordinate::Point;
use crate::errors::{MapError, MapResult};

lazy_static! {
    // Parsed once from the defaults shipped with the crate
    static ref EMBEDDED_CONFIGURATION: MapConfiguration = {
        let content = include_str!("../map_defaults.toml");
        MapConfiguration::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse embedded map defaults: {}", e);
            MapConfiguration::default()
        })
    };
}

/// Options describing the initial state of a map
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfiguration {
    /// Identifier of the map element
    pub map_id: Option<String>,
    /// Latitude of the initial center
    pub latitude: f64,
    /// Longitude of the initial center
    pub longitude: f64,
    /// Initial zoom level
    pub zoom: i32,
}

impl Default for MapConfiguration {
    fn default() -> Self {
        MapConfiguration {
            map_id: Some("mapId".to_string()),
            latitude: Point::DEFAULT.latitude(),
            longitude: Point::DEFAULT.longitude(),
            zoom: 13,
        }
    }
}

impl MapConfiguration {
    /// Name of the TOML table holding the options
    pub const SECTION_NAME: &'static str = "Leaflet";

    /// Parse configuration from a TOML string
    ///
    /// A missing `[Leaflet]` table or missing keys fall back to defaults.
    pub fn from_str(content: &str) -> MapResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| MapError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let mut config = MapConfiguration::default();

        let section = match toml_value.get(Self::SECTION_NAME) {
            Some(value) => value.as_table().ok_or_else(|| {
                MapError::ConfigError(format!("'{}' must be a table", Self::SECTION_NAME))
            })?,
            None => {
                debug!("No [{}] section found, using defaults", Self::SECTION_NAME);
                return Ok(config);
            }
        };

        if let Some(value) = section.get("MapId") {
            let id = value.as_str()
                .ok_or_else(|| Self::type_error("MapId", "a string"))?;
            config.map_id = Some(id.to_string());
        }
        if let Some(value) = section.get("Latitude") {
            config.latitude = Self::as_number(value, "Latitude")?;
        }
        if let Some(value) = section.get("Longitude") {
            config.longitude = Self::as_number(value, "Longitude")?;
        }
        if let Some(value) = section.get("Zoom") {
            let zoom = value.as_integer()
                .ok_or_else(|| Self::type_error("Zoom", "an integer"))?;
            config.zoom = i32::try_from(zoom)
                .map_err(|_| MapError::ConfigError(format!("Zoom {} is out of range", zoom)))?;
        }

        debug!("Loaded map configuration: {:?}", config);
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> MapResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Defaults shipped with the crate
    pub fn embedded() -> &'static MapConfiguration {
        &EMBEDDED_CONFIGURATION
    }

    /// Initial map center
    pub fn center(&self) -> Point {
        Point::new(self.latitude, self.longitude)
    }

    // TOML writes whole numbers as integers, accept both.
    fn as_number(value: &toml::Value, key: &str) -> MapResult<f64> {
        value.as_float()
            .or_else(|| value.as_integer().map(|i| i as f64))
            .ok_or_else(|| Self::type_error(key, "a number"))
    }

    fn type_error(key: &str, expected: &str) -> MapError {
        MapError::ConfigError(format!("[{}] {} must be {}", Self::SECTION_NAME, key, expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_default_point() {
        let config = MapConfiguration::default();
        assert_eq!(config.center(), Point::DEFAULT);
        assert_eq!(config.zoom, 13);
        assert_eq!(config.map_id.as_deref(), Some("mapId"));
    }

    #[test]
    fn test_embedded_defaults() {
        assert_eq!(MapConfiguration::embedded(), &MapConfiguration::default());
    }

    #[test]
    fn test_parse_section() {
        let config = MapConfiguration::from_str(
            "[Leaflet]\nMapId = \"world\"\nLatitude = 48.8566\nLongitude = 2\nZoom = 5\n",
        ).unwrap();

        assert_eq!(config.map_id.as_deref(), Some("world"));
        assert_eq!(config.center(), Point::new(48.8566, 2.0));
        assert_eq!(config.zoom, 5);
    }

    #[test]
    fn test_empty_map_id_is_kept() {
        let config = MapConfiguration::from_str("[Leaflet]\nMapId = \"\"\n").unwrap();
        assert_eq!(config.map_id.as_deref(), Some(""));
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config = MapConfiguration::from_str("[Leaflet]\nZoom = 3\n").unwrap();
        assert_eq!(config.center(), Point::DEFAULT);
        assert_eq!(config.zoom, 3);

        let empty = MapConfiguration::from_str("").unwrap();
        assert_eq!(empty, MapConfiguration::default());
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        assert!(matches!(
            MapConfiguration::from_str("[Leaflet]\nLatitude = \"north\"\n"),
            Err(MapError::ConfigError(_))
        ));
        assert!(matches!(
            MapConfiguration::from_str("[Leaflet]\nZoom = 1.5\n"),
            Err(MapError::ConfigError(_))
        ));
        assert!(matches!(
            MapConfiguration::from_str("Leaflet = 4\n"),
            Err(MapError::ConfigError(_))
        ));
        assert!(matches!(
            MapConfiguration::from_str("[Leaflet"),
            Err(MapError::ConfigError(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            MapConfiguration::from_file("does-not-exist/map.toml"),
            Err(MapError::IoError(_))
        ));
    }
}
