//! Coordinate and route file parsing.
//!
//! Coordinate files carry one `x y` pair per line; route files carry one
//! city index per line. Blank lines are skipped, anything else malformed
//! is an error — optimization never starts on bad input.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::tsp::{City, Tour};

/// Malformed or unreadable input data.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input")]
    Io(#[from] std::io::Error),

    /// A non-empty line without two coordinate fields.
    #[error("line {line}: expected two coordinates, got {content:?}")]
    MalformedLine { line: usize, content: String },

    /// A field that does not parse as a number.
    #[error("line {line}: invalid number {token:?}")]
    BadNumber { line: usize, token: String },

    /// A route file whose entries are not a permutation of `0..n`.
    #[error("route is not a permutation of 0..{expected}")]
    BadRoute { expected: usize },
}

/// Reads cities from a whitespace/line-delimited coordinate file.
///
/// City ids follow input order.
pub fn read_cities(path: &Path) -> Result<Vec<City>, InputError> {
    parse_cities(BufReader::new(File::open(path)?))
}

pub fn parse_cities<R: BufRead>(reader: R) -> Result<Vec<City>, InputError> {
    let mut cities = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(x), Some(y)) = (fields.next(), fields.next()) else {
            return Err(InputError::MalformedLine {
                line: idx + 1,
                content: line.clone(),
            });
        };
        let x = parse_coordinate(x, idx + 1)?;
        let y = parse_coordinate(y, idx + 1)?;
        cities.push(City::new(cities.len(), x, y));
    }
    Ok(cities)
}

/// Reads a visiting order from a route file, one city index per line.
///
/// The order must be a permutation of `0..n` where `n` is the number of
/// lines read.
pub fn read_route(path: &Path) -> Result<Tour, InputError> {
    parse_route(BufReader::new(File::open(path)?))
}

pub fn parse_route<R: BufRead>(reader: R) -> Result<Tour, InputError> {
    let mut order = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        let city: usize = token.parse().map_err(|_| InputError::BadNumber {
            line: idx + 1,
            token: token.to_string(),
        })?;
        order.push(city);
    }
    let expected = order.len();
    Tour::from_order(order).ok_or(InputError::BadRoute { expected })
}

fn parse_coordinate(token: &str, line: usize) -> Result<f64, InputError> {
    token.parse().map_err(|_| InputError::BadNumber {
        line,
        token: token.to_string(),
    })
}
