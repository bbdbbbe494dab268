//! Point structure for representing map coordinates

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use crate::errors::{MapError, MapResult};

/// A point on a map surface
///
/// The type is agnostic about the coordinate space: `latitude`/`longitude`
/// may equally hold pixel-space y/x values. No range is enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    latitude: f64,
    longitude: f64,
}

impl Point {
    /// Fallback map center (central London)
    pub const DEFAULT: Point = Point {
        latitude: 51.505,
        longitude: -0.09,
    };

    /// Create a new point from its two components
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Point {
            latitude,
            longitude,
        }
    }

    /// Alias of [`Point::new`]
    pub const fn create(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude)
    }

    /// Latitude (or y) component
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude (or x) component
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Multiply both components by `factor`
    pub fn scale(self, factor: f64) -> Point {
        Point::new(self.latitude * factor, self.longitude * factor)
    }

    /// Planar Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        let d_lat = self.latitude - other.latitude;
        let d_lon = self.longitude - other.longitude;
        (d_lat.powi(2) + d_lon.powi(2)).sqrt()
    }

    /// Split the point into `(latitude, longitude)`
    pub fn into_parts(self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// `[latitude, longitude]` view of the point
    pub fn to_array(self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

impl Default for Point {
    fn default() -> Self {
        Point::DEFAULT
    }
}

// -0.0 == 0.0, so both must hash alike.
fn hash_component<H: Hasher>(value: f64, state: &mut H) {
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_bits().hash(state);
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_component(self.latitude, state);
        hash_component(self.longitude, state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.latitude, self.longitude)
    }
}

impl FromStr for Point {
    type Err = MapError;

    /// Parse `"lat,lon"` or the display form `"[lat, lon]"`
    fn from_str(s: &str) -> MapResult<Self> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);

        let parts: Vec<&str> = inner.split(',').collect();
        if parts.len() != 2 {
            return Err(MapError::ParseError(format!(
                "Point must be in format 'lat,lon', got '{}'",
                trimmed
            )));
        }

        let latitude = parts[0].trim().parse::<f64>()
            .map_err(|_| MapError::ParseError(format!("Invalid latitude value '{}'", parts[0].trim())))?;
        let longitude = parts[1].trim().parse::<f64>()
            .map_err(|_| MapError::ParseError(format!("Invalid longitude value '{}'", parts[1].trim())))?;

        Ok(Point::new(latitude, longitude))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.latitude + other.latitude, self.longitude + other.longitude)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.latitude - other.latitude, self.longitude - other.longitude)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, factor: f64) -> Point {
        self.scale(factor)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, factor: f64) -> Point {
        Point::new(self.latitude / factor, self.longitude / factor)
    }
}

impl From<[f64; 2]> for Point {
    fn from(values: [f64; 2]) -> Self {
        Point::new(values[0], values[1])
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        point.to_array()
    }
}

impl From<(f64, f64)> for Point {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Point::new(latitude, longitude)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        point.into_parts()
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = MapError;

    fn try_from(values: &[f64]) -> MapResult<Self> {
        match values {
            [latitude, longitude] => Ok(Point::new(*latitude, *longitude)),
            _ => Err(MapError::invalid_argument(
                "point",
                format!("A point requires exactly 2 components, got {}.", values.len()),
            )),
        }
    }
}
