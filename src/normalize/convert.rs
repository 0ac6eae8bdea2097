use crate::types::Conversion;

/// Fahrenheit to Celsius.
pub fn f_to_c(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) / 1.8
}

/// Inches to millimeters.
pub fn inch_to_mm(inches: f64) -> f64 {
    inches * 25.4
}

/// Rounds to one decimal place, half away from zero. Applied once, at the
/// point a value is stored into the record.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl Conversion {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Conversion::FahrenheitToCelsius => f_to_c(value),
            Conversion::InchToMillimeter => inch_to_mm(value),
        }
    }
}
