use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::candidate::Candidate;

/// The persisted per-city document: the candidate's identity fields plus
/// however much weather data survived normalization.
///
/// Weather keys are the flat field names of the source infobox
/// (`"Jan high C"`), the derived yearly aggregates (`"year high C"`) and
/// standard deviations (`"year mean C stdev"`). All values are metric;
/// converted imperial parameters keep their original field name. The map is
/// flattened into the document, so a record serializes to a single flat
/// JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub population: u64,
    pub country: String,
    pub city_wd: String,
    pub gps_lat: f64,
    pub gps_lon: f64,
    #[serde(flatten)]
    pub weather: BTreeMap<String, f64>,
}

impl CityRecord {
    /// The minimal record written when a city has no locatable weather box.
    pub fn identity_only(candidate: &Candidate) -> Self {
        Self {
            name: candidate.name.clone(),
            population: candidate.population,
            country: candidate.country.clone(),
            city_wd: candidate.city_wd.clone(),
            gps_lat: candidate.gps_lat,
            gps_lon: candidate.gps_lon,
            weather: BTreeMap::new(),
        }
    }

    pub fn has_weather_data(&self) -> bool {
        !self.weather.is_empty()
    }
}
