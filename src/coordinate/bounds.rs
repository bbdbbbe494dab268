//! Bounds structure for defining rectangular map regions

use std::fmt;
use std::str::FromStr;

use super::point::Point;
use crate::errors::{MapError, MapResult};

/// An axis-aligned rectangle described by its southwest and northeast corners
///
/// [`Bounds::new`] stores the corners exactly as given. Callers passing them
/// out of order get negative widths/heights and predicates that answer for
/// the inverted rectangle. Use [`Bounds::from_corners`] or
/// [`Bounds::from_points`] to get normalized corners.
#[derive(Debug, Clone, Copy, PartialEq, Hash)]
pub struct Bounds {
    southwest: Point,
    northeast: Point,
}

impl Bounds {
    /// Create bounds from two corners without reordering them
    pub const fn new(southwest: Point, northeast: Point) -> Self {
        Bounds {
            southwest,
            northeast,
        }
    }

    /// Alias of [`Bounds::new`]
    pub const fn create(southwest: Point, northeast: Point) -> Self {
        Self::new(southwest, northeast)
    }

    /// Create normalized bounds from any two opposite corners
    pub fn from_corners(a: Point, b: Point) -> Self {
        Bounds::new(
            Point::new(a.latitude().min(b.latitude()), a.longitude().min(b.longitude())),
            Point::new(a.latitude().max(b.latitude()), a.longitude().max(b.longitude())),
        )
    }

    /// Create the smallest bounds containing every point
    ///
    /// # Errors
    /// Returns [`MapError::InvalidArgument`] for an empty slice.
    pub fn from_points(points: &[Point]) -> MapResult<Self> {
        let (first, rest) = points.split_first().ok_or_else(|| {
            MapError::invalid_argument("points", "At least one point is required to create a bounds.")
        })?;

        let start = Bounds::new(*first, *first);
        Ok(rest.iter().fold(start, |bounds, point| bounds.extend(point)))
    }

    /// The minimum corner
    pub fn southwest(&self) -> Point {
        self.southwest
    }

    /// The maximum corner
    pub fn northeast(&self) -> Point {
        self.northeast
    }

    /// Longitudinal extent
    pub fn width(&self) -> f64 {
        self.northeast.longitude() - self.southwest.longitude()
    }

    /// Latitudinal extent
    pub fn height(&self) -> f64 {
        self.northeast.latitude() - self.southwest.latitude()
    }

    /// Midpoint of the two corners
    ///
    /// With `round` set, each coordinate is rounded half to even
    /// (0.5 becomes 0, 1.5 becomes 2).
    pub fn center(&self, round: bool) -> Point {
        let latitude = (self.southwest.latitude() + self.northeast.latitude()) * 0.5;
        let longitude = (self.southwest.longitude() + self.northeast.longitude()) * 0.5;

        if round {
            Point::new(latitude.round_ties_even(), longitude.round_ties_even())
        } else {
            Point::new(latitude, longitude)
        }
    }

    /// `(width, height)` packed into a point
    pub fn size(&self) -> Point {
        Point::new(self.width(), self.height())
    }

    pub fn bottom_left(&self) -> Point {
        self.southwest
    }

    pub fn top_right(&self) -> Point {
        self.northeast
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.southwest.latitude(), self.northeast.longitude())
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.northeast.latitude(), self.southwest.longitude())
    }

    /// Check if the point lies inside or on the edge of these bounds
    pub fn contains(&self, point: &Point) -> bool {
        point.latitude() >= self.southwest.latitude()
            && point.latitude() <= self.northeast.latitude()
            && point.longitude() >= self.southwest.longitude()
            && point.longitude() <= self.northeast.longitude()
    }

    /// Check if `other` lies entirely inside these bounds (edges included)
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        other.southwest.latitude() >= self.southwest.latitude()
            && other.northeast.latitude() <= self.northeast.latitude()
            && other.southwest.longitude() >= self.southwest.longitude()
            && other.northeast.longitude() <= self.northeast.longitude()
    }

    /// Check if the two bounds share at least one point, touching edges included
    pub fn intersects(&self, other: &Bounds) -> bool {
        !(other.southwest.longitude() > self.northeast.longitude()
            || other.northeast.longitude() < self.southwest.longitude()
            || other.southwest.latitude() > self.northeast.latitude()
            || other.northeast.latitude() < self.southwest.latitude())
    }

    /// The shared rectangle of two intersecting bounds
    ///
    /// Touching bounds yield a degenerate rectangle of zero width or height.
    pub fn intersection(&self, other: &Bounds) -> Option<Bounds> {
        if !self.intersects(other) {
            return None;
        }

        Some(Bounds::new(
            Point::new(
                self.southwest.latitude().max(other.southwest.latitude()),
                self.southwest.longitude().max(other.southwest.longitude()),
            ),
            Point::new(
                self.northeast.latitude().min(other.northeast.latitude()),
                self.northeast.longitude().min(other.northeast.longitude()),
            ),
        ))
    }

    /// Check if the two bounds share a region of non-zero area
    pub fn overlaps(&self, other: &Bounds) -> bool {
        match self.intersection(other) {
            Some(shared) => {
                shared.southwest.latitude() < shared.northeast.latitude()
                    && shared.southwest.longitude() < shared.northeast.longitude()
            }
            None => false,
        }
    }

    /// Grow the bounds so they include `point`
    pub fn extend(&self, point: &Point) -> Bounds {
        Bounds::new(
            Point::new(
                self.southwest.latitude().min(point.latitude()),
                self.southwest.longitude().min(point.longitude()),
            ),
            Point::new(
                self.northeast.latitude().max(point.latitude()),
                self.northeast.longitude().max(point.longitude()),
            ),
        )
    }

    /// Grow the bounds so they include `other`
    pub fn extend_bounds(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            Point::new(
                self.southwest.latitude().min(other.southwest.latitude()),
                self.southwest.longitude().min(other.southwest.longitude()),
            ),
            Point::new(
                self.northeast.latitude().max(other.northeast.latitude()),
                self.northeast.longitude().max(other.northeast.longitude()),
            ),
        )
    }

    /// Expand (or, with a negative ratio, shrink) by a fraction of the
    /// current width and height on every side
    pub fn pad(&self, buffer_ratio: f64) -> Bounds {
        let lat_buffer = self.height() * buffer_ratio;
        let lon_buffer = self.width() * buffer_ratio;

        Bounds::new(
            Point::new(
                self.southwest.latitude() - lat_buffer,
                self.southwest.longitude() - lon_buffer,
            ),
            Point::new(
                self.northeast.latitude() + lat_buffer,
                self.northeast.longitude() + lon_buffer,
            ),
        )
    }

    fn parse_nested(s: &str) -> MapResult<Self> {
        let malformed = || MapError::ParseError(format!(
            "Bounds must be in format '[[sw_lat, sw_lon], [ne_lat, ne_lon]]', got '{}'", s));

        let inner = s.strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(malformed)?
            .trim();
        let split = inner.find(']').ok_or_else(malformed)?;
        let (southwest, rest) = inner.split_at(split + 1);
        let northeast = rest.trim_start().strip_prefix(',').ok_or_else(malformed)?;

        Ok(Bounds::new(southwest.parse::<Point>()?, northeast.parse::<Point>()?))
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.southwest, self.northeast)
    }
}

impl FromStr for Bounds {
    type Err = MapError;

    /// Parse `"sw_lat,sw_lon,ne_lat,ne_lon"` or the display form
    /// `"[[sw_lat, sw_lon], [ne_lat, ne_lon]]"`; corners are kept as given
    fn from_str(s: &str) -> MapResult<Self> {
        let trimmed = s.trim();
        if trimmed.starts_with('[') {
            return Self::parse_nested(trimmed);
        }

        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(MapError::ParseError(
                "Bounds must have 4 comma-separated values (sw_lat,sw_lon,ne_lat,ne_lon)".to_string()));
        }

        let mut values = [0.0f64; 4];
        let names = ["sw_lat", "sw_lon", "ne_lat", "ne_lon"];
        for (i, part) in parts.iter().enumerate() {
            values[i] = part.trim().parse::<f64>()
                .map_err(|_| MapError::ParseError(format!("Invalid {} value '{}'", names[i], part.trim())))?;
        }

        Ok(Bounds::new(
            Point::new(values[0], values[1]),
            Point::new(values[2], values[3]),
        ))
    }
}
