//! City coordinates.

/// A city: an identifier plus a 2-D coordinate.
///
/// The `id` doubles as the city's index into the instance, so tours and
/// the distance matrix never carry coordinates around.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}
