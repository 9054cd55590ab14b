//! SVG rendering of a tour.
//!
//! Builds the document by hand: a closed polygon for the tour and a dot
//! plus label per city, scaled into a fixed viewport.

use std::fs;
use std::path::Path;

use crate::tsp::{City, Tour};

const VIEW_SIZE: f64 = 800.0;
const MARGIN: f64 = 40.0;
const CITY_RADIUS: f64 = 5.0;

/// Renders the cities and the closed tour as an SVG document.
///
/// Coordinates are scaled uniformly to fit the viewport; the y axis is
/// flipped so the plot reads like graph paper.
pub fn render_svg(cities: &[City], tour: &Tour) -> String {
    let min_x = cities.iter().map(|c| c.x).fold(f64::INFINITY, f64::min);
    let max_x = cities.iter().map(|c| c.x).fold(f64::NEG_INFINITY, f64::max);
    let min_y = cities.iter().map(|c| c.y).fold(f64::INFINITY, f64::min);
    let max_y = cities.iter().map(|c| c.y).fold(f64::NEG_INFINITY, f64::max);

    let span = (max_x - min_x).max(max_y - min_y).max(f64::EPSILON);
    let scale = (VIEW_SIZE - 2.0 * MARGIN) / span;
    let project = |c: &City| -> (f64, f64) {
        (
            (c.x - min_x) * scale + MARGIN,
            VIEW_SIZE - ((c.y - min_y) * scale + MARGIN),
        )
    };

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {VIEW_SIZE} {VIEW_SIZE}\">\n"
    ));
    svg.push_str(&format!(
        "\t<rect x=\"0\" y=\"0\" width=\"{VIEW_SIZE}\" height=\"{VIEW_SIZE}\" fill=\"white\"/>\n"
    ));

    let points: Vec<String> = tour
        .as_slice()
        .iter()
        .map(|&idx| {
            let (x, y) = project(&cities[idx]);
            format!("{x:.2},{y:.2}")
        })
        .collect();
    svg.push_str(&format!(
        "\t<polygon points=\"{}\" fill=\"none\" stroke=\"steelblue\" stroke-width=\"2\"/>\n",
        points.join(" ")
    ));

    for city in cities {
        let (x, y) = project(city);
        svg.push_str(&format!(
            "\t<circle cx=\"{x:.2}\" cy=\"{y:.2}\" r=\"{CITY_RADIUS}\" fill=\"crimson\"/>\n"
        ));
        svg.push_str(&format!(
            "\t<text x=\"{:.2}\" y=\"{:.2}\" fill=\"black\" font-size=\"14\">{}</text>\n",
            x + CITY_RADIUS + 2.0,
            y - CITY_RADIUS,
            city.id
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Writes the rendered tour to an SVG file.
pub fn write_svg(path: &Path, cities: &[City], tour: &Tour) -> std::io::Result<()> {
    fs::write(path, render_svg(cities, tour))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<City> {
        vec![
            City::new(0, 0.0, 0.0),
            City::new(1, 0.0, 1.0),
            City::new(2, 1.0, 1.0),
            City::new(3, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_svg_structure() {
        let cities = unit_square();
        let svg = render_svg(&cities, &Tour::identity(4));

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert_eq!(svg.matches("<circle").count(), 4);
        assert_eq!(svg.matches("<polygon").count(), 1);
    }

    #[test]
    fn test_svg_labels_every_city() {
        let cities = unit_square();
        let svg = render_svg(&cities, &Tour::identity(4));
        for id in 0..4 {
            assert!(svg.contains(&format!(">{id}</text>")));
        }
    }

    #[test]
    fn test_svg_handles_coincident_cities() {
        // A degenerate span must not divide by zero
        let cities = vec![City::new(0, 2.0, 2.0), City::new(1, 2.0, 2.0)];
        let svg = render_svg(&cities, &Tour::identity(2));
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
    }
}
