//! Route persistence and the console run summary.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use crate::tsp::Tour;

/// Serializes a visiting order, one city index per line.
pub fn format_route(tour: &Tour) -> String {
    let mut out = String::new();
    for &city in tour.as_slice() {
        out.push_str(&city.to_string());
        out.push('\n');
    }
    out
}

/// Writes the visiting order to a text file.
pub fn write_route(path: &Path, tour: &Tour) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(format_route(tour).as_bytes())?;
    out.flush()
}

/// Formats the end-of-run report shown on the console.
pub fn run_summary(tour: &Tour, length: f64, elapsed: Duration) -> String {
    let order: Vec<String> = tour.as_slice().iter().map(|c| c.to_string()).collect();
    format!(
        "shortest tour length found: {length:.4}\nshortest tour found: {}\nrun time: {:.3}s",
        order.join(" "),
        elapsed.as_secs_f64(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::input::parse_route;
    use std::io::Cursor;

    #[test]
    fn test_format_route_one_index_per_line() {
        let tour = Tour::from_order(vec![2, 0, 1]).unwrap();
        assert_eq!(format_route(&tour), "2\n0\n1\n");
    }

    #[test]
    fn test_format_route_round_trips() {
        let tour = Tour::from_order(vec![3, 1, 4, 0, 2]).unwrap();
        let parsed = parse_route(Cursor::new(format_route(&tour))).unwrap();
        assert_eq!(parsed, tour);
    }

    #[test]
    fn test_run_summary_contents() {
        let tour = Tour::from_order(vec![0, 2, 1]).unwrap();
        let summary = run_summary(&tour, 12.3456, Duration::from_millis(1500));
        assert!(summary.contains("12.3456"));
        assert!(summary.contains("0 2 1"));
        assert!(summary.contains("1.500s"));
    }
}
