mod aggregate;
mod coerce;
mod convert;
mod normalizer;

pub use aggregate::{month_mean, pstdev};
pub use coerce::coerce_number;
pub use convert::{f_to_c, inch_to_mm, round1};
pub use normalizer::normalize;
