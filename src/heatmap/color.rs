use std::fmt;

#[derive(Debug, PartialEq, Clone)]
pub enum Color {
    Gray,
    Blue,
    Red,
    Black,
    Grad(f64),
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Gray => write!(formatter, "#BABABA"),
            Color::Blue => write!(formatter, "#1383C6"),
            Color::Red => write!(formatter, "#E3371E"),
            Color::Black => write!(formatter, "#000000"),
            Color::Grad(value) => write!(formatter, "{}", get_gradient(*value)),
        }
    }
}

fn get_gradient(value: f64) -> String {
    let gray: (u8, u8, u8) = (186, 186, 186);
    let blue: (u8, u8, u8) = (19, 131, 198);
    let mix_red = (gray.0 as f64 * (1.0 - value) + blue.0 as f64 * value).round() as u8;
    let mix_green = (gray.1 as f64 * (1.0 - value) + blue.1 as f64 * value).round() as u8;
    let mix_blue = (gray.2 as f64 * (1.0 - value) + blue.2 as f64 * value).round() as u8;

    format!("#{:02X}{:02X}{:02X}", mix_red, mix_green, mix_blue)
}

/// Linear color scale over the non-zero frequencies of the plotted subset.
/// Zero maps to the fixed neutral gray; non-zero values are stretched from
/// the smallest observed non-zero frequency to 1.0 and clipped.
#[derive(Debug, PartialEq)]
pub struct FreqScale {
    min_nonzero: f64,
}

impl FreqScale {
    pub fn new(min_nonzero: f64) -> Self {
        Self { min_nonzero }
    }

    pub fn color(&self, freq: f64) -> Color {
        if freq == 0.0 {
            Color::Gray
        } else {
            Color::Grad(self.normalize(freq))
        }
    }

    pub fn normalize(&self, freq: f64) -> f64 {
        let span = 1.0 - self.min_nonzero;
        if span <= f64::EPSILON {
            return 1.0;
        }
        ((freq - self.min_nonzero) / span).clamp(0.0, 1.0)
    }

    /// Colorbar ticks as (bar fraction, frequency) pairs: minimum, midpoint,
    /// and maximum of the non-zero range.
    pub fn ticks(&self) -> [(f64, f64); 3] {
        [
            (0.0, self.min_nonzero),
            (0.5, (self.min_nonzero + 1.0) / 2.0),
            (1.0, 1.0),
        ]
    }

    /// Evenly spaced gradient samples from the gray end to the blue end.
    pub fn samples(&self, count: usize) -> Vec<Color> {
        (0..count)
            .map(|index| Color::Grad(index as f64 / (count - 1) as f64))
            .collect()
    }
}
