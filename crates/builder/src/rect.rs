use serde::{Deserialize, Serialize};

/// A width/height pair
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub const fn new(width: f64, height: f64) -> Rectangle {
        Rectangle { width, height }
    }

    /// The area enclosed by this rectangle
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
