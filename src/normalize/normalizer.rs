use log::warn;

use crate::normalize::aggregate::pstdev;
use crate::normalize::coerce::coerce_number;
use crate::normalize::convert::round1;
use crate::types::{Candidate, CityRecord, Month, MonthlySeries, Parameter, WeatherBox};

/// Turns a located weather box (or its absence) into the final per-city
/// record.
///
/// With no box this is just the identity fields. With a box, each
/// recognized parameter runs through coercion, the all-or-nothing
/// completeness check, in-place imperial-to-metric conversion, yearly
/// aggregation, and (for the fixed subset) population standard deviation.
pub fn normalize(candidate: &Candidate, weather_box: Option<&WeatherBox>) -> CityRecord {
    let mut record = CityRecord::identity_only(candidate);
    let Some(weather_box) = weather_box else {
        return record;
    };

    for parameter in Parameter::ALL {
        let Some(mut values) = collect_series(weather_box, parameter, &candidate.name) else {
            continue;
        };

        if let Some(conversion) = parameter.conversion() {
            values = values.map(|v| round1(conversion.apply(v)));
        }

        for (month, value) in Month::ALL.into_iter().zip(values) {
            record
                .weather
                .insert(format!("{} {}", month, parameter), value);
        }

        let aggregate = parameter.aggregator().apply(&values);
        record
            .weather
            .insert(format!("year {}", parameter), round1(aggregate));

        if parameter.has_stdev() {
            record
                .weather
                .insert(format!("year {} stdev", parameter), round1(pstdev(&values)));
        }
    }

    record
}

/// Builds the complete twelve-month series for one parameter.
///
/// Returns `None` both for a parameter that never appears (normal) and for
/// one that appears but is incomplete or non-numeric somewhere (logged and
/// dropped whole, never kept partially).
fn collect_series(
    weather_box: &WeatherBox,
    parameter: Parameter,
    city_name: &str,
) -> Option<[f64; 12]> {
    let mut series = MonthlySeries::default();
    let mut present = 0usize;

    for month in Month::ALL {
        let field = format!("{} {}", month, parameter);
        let Some(raw) = weather_box.get(&field) else {
            continue;
        };
        if raw.trim().is_empty() {
            continue;
        }
        present += 1;
        if let Some(value) = coerce_number(raw) {
            series.set(month, value);
        }
    }

    if present == 0 {
        return None;
    }
    match series.complete() {
        Some(values) => Some(values),
        None => {
            warn!(
                "Dropping parameter '{}' for {}: {} of 12 months usable",
                parameter,
                city_name,
                series.present_count()
            );
            None
        }
    }
}
