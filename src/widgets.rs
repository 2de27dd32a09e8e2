//! State for the two toy widgets. Rendering lives in `ui`.

use log::debug;

pub const COLORS: [&str; 3] = ["red", "blue", "green"];

const INITIAL_VALUE: f64 = 10.0;

/// Cycles through [`COLORS`], starting at red.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColoredBox {
    color_index: usize,
}

impl ColoredBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    pub fn color(&self) -> &'static str {
        COLORS[self.color_index]
    }

    pub fn next_color(&mut self) {
        self.color_index = (self.color_index + 1) % COLORS.len();
        debug!("Colored box switched to {}", self.color());
    }
}

/// A number that can be doubled or halved, starting at 10.
#[derive(Debug, Clone, PartialEq)]
pub struct DoubleHalf {
    value: f64,
}

impl DoubleHalf {
    pub fn new() -> Self {
        Self {
            value: INITIAL_VALUE,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn double(&mut self) {
        self.value *= 2.0;
        debug!("Doubled value to {}", self.value);
    }

    pub fn halve(&mut self) {
        self.value *= 0.5;
        debug!("Halved value to {}", self.value);
    }
}

impl Default for DoubleHalf {
    fn default() -> Self {
        Self::new()
    }
}
