//! Coordinate utility functions
//!
//! Helpers for reading point lists typed on the command line or stored in
//! plain text files, one `lat,lon` pair per entry.

use std::fs;
use log::debug;

use crate::coordinate::Point;
use crate::errors::{MapError, MapResult};

/// Parse a list of points separated by `;` or newlines
///
/// Blank entries and anything after a `#` on a line are ignored.
///
/// # Arguments
/// * `input` - Text such as `"51.5,-0.1; 51.6,-0.2"`
///
/// # Returns
/// The parsed points in input order, or the first parse error annotated
/// with its 1-based entry number
pub fn parse_point_list(input: &str) -> MapResult<Vec<Point>> {
    let mut points = Vec::new();

    let entries = input
        .lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(|line| line.split(';'))
        .map(str::trim)
        .filter(|entry| !entry.is_empty());

    for (index, entry) in entries.enumerate() {
        let point = entry.parse::<Point>().map_err(|e| match e {
            MapError::ParseError(msg) => MapError::ParseError(format!("entry {}: {}", index + 1, msg)),
            other => other,
        })?;
        points.push(point);
    }

    debug!("Parsed {} points", points.len());
    Ok(points)
}

/// Read a point list from a file
pub fn read_points_file(path: &str) -> MapResult<Vec<Point>> {
    debug!("Reading points from {}", path);
    let contents = fs::read_to_string(path)?;
    parse_point_list(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_semicolon_list() {
        let points = parse_point_list("51.5,-0.1; 51.6,-0.2;").unwrap();
        assert_eq!(points, vec![Point::new(51.5, -0.1), Point::new(51.6, -0.2)]);
    }

    #[test]
    fn test_parse_lines_with_comments() {
        let text = "# corners\n0,0\n\n1,1 # north-east\n[2, 3]\n";
        let points = parse_point_list(text).unwrap();
        assert_eq!(points, vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 3.0)]);
    }

    #[test]
    fn test_empty_input_yields_no_points() {
        assert!(parse_point_list("  \n# nothing\n").unwrap().is_empty());
    }

    #[test]
    fn test_bad_entry_is_reported_with_position() {
        match parse_point_list("1,2;oops") {
            Err(MapError::ParseError(msg)) => assert!(msg.starts_with("entry 2:"), "{}", msg),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
