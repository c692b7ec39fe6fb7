//! Point collection from text (`x y` pairs, one per line).
//!
//! The hull core only ever operates on validated [`Point`]s; this module is
//! the boundary where raw coordinate text is checked. Malformed lines
//! surface as structured errors carrying their 1-based line number instead
//! of being skipped silently.

use std::num::ParseFloatError;

use nalgebra::Vector2;
use thiserror::Error;

use crate::Point;

/// Malformed point input. Produced by the text layer only, never by the hull
/// core.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PointParseError {
    /// A line did not split into exactly two fields.
    #[error("line {line}: expected `x y`, found {found} field(s)")]
    WrongArity { line: usize, found: usize },
    /// A field did not parse as a coordinate.
    #[error("line {line}: invalid coordinate {text:?}")]
    InvalidCoordinate {
        line: usize,
        text: String,
        source: ParseFloatError,
    },
}

/// Parse whitespace-separated `x y` pairs, one pair per line. Blank lines
/// are skipped.
pub fn parse_points(input: &str) -> Result<Vec<Point>, PointParseError> {
    let mut points = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = raw.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(PointParseError::WrongArity {
                line,
                found: fields.len(),
            });
        }
        let coord = |text: &str| {
            text.parse::<f64>()
                .map_err(|source| PointParseError::InvalidCoordinate {
                    line,
                    text: text.to_string(),
                    source,
                })
        };
        points.push(Vector2::new(coord(fields[0])?, coord(fields[1])?));
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn parses_pairs_and_skips_blanks() {
        let text = "0 0\n4 0\n\n  4 4 \n0 4\n";
        let pts = parse_points(text).unwrap();
        assert_eq!(
            pts,
            vec![
                vector![0.0, 0.0],
                vector![4.0, 0.0],
                vector![4.0, 4.0],
                vector![0.0, 4.0],
            ]
        );
    }

    #[test]
    fn accepts_floats_and_negatives() {
        let pts = parse_points("-1.5 2.25\n3e2 -0.5\n").unwrap();
        assert_eq!(pts, vec![vector![-1.5, 2.25], vector![300.0, -0.5]]);
    }

    #[test]
    fn empty_input_is_an_empty_list() {
        assert_eq!(parse_points(""), Ok(Vec::new()));
    }

    #[test]
    fn wrong_arity_is_reported_with_line() {
        let err = parse_points("0 0\n1 2 3\n").unwrap_err();
        assert_eq!(err, PointParseError::WrongArity { line: 2, found: 3 });
    }

    #[test]
    fn non_numeric_coordinate_is_reported() {
        let err = parse_points("0 0\nfoo 1\n").unwrap_err();
        match err {
            PointParseError::InvalidCoordinate { line, text, .. } => {
                assert_eq!(line, 2);
                assert_eq!(text, "foo");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
