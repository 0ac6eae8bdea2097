pub mod candidate;
pub mod month;
pub mod parameter;
pub mod record;
pub mod series;
pub mod weather_box;

pub use candidate::Candidate;
pub use month::Month;
pub use parameter::{Aggregator, Conversion, Parameter};
pub use record::CityRecord;
pub use series::MonthlySeries;
pub use weather_box::WeatherBox;
