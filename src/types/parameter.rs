use std::fmt;

/// Yearly aggregation applied to a parameter's complete 12-month series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregator {
    /// Arithmetic mean over the fixed twelve months (sum divided by 12).
    MonthlyMean,
    /// Yearly total.
    Sum,
    /// Warmest month wins.
    Max,
    /// Coldest month wins.
    Min,
}

/// In-place unit conversion applied before aggregation. Converted values
/// keep their original field name in the output record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    FahrenheitToCelsius,
    InchToMillimeter,
}

/// The recognized weather box parameters. Everything outside this set is
/// ignored during normalization.
///
/// Each parameter statically knows its field-name key (the part after the
/// month abbreviation), its optional unit conversion, its yearly aggregator,
/// and whether its month-to-month spread is recorded as a standard
/// deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Parameter {
    HighC,
    HighF,
    MeanC,
    MeanF,
    LowC,
    LowF,
    Humidity,
    Sun,
    PrecipitationDays,
    PrecipitationMm,
    PrecipitationInch,
    RecordHighC,
    RecordHighF,
    RecordLowC,
    RecordLowF,
}

impl Parameter {
    pub const ALL: [Parameter; 15] = [
        Parameter::HighC,
        Parameter::HighF,
        Parameter::MeanC,
        Parameter::MeanF,
        Parameter::LowC,
        Parameter::LowF,
        Parameter::Humidity,
        Parameter::Sun,
        Parameter::PrecipitationDays,
        Parameter::PrecipitationMm,
        Parameter::PrecipitationInch,
        Parameter::RecordHighC,
        Parameter::RecordHighF,
        Parameter::RecordLowC,
        Parameter::RecordLowF,
    ];

    /// Field-name fragment as it appears after the month abbreviation in the
    /// weather box (`"Jan high C"` -> `"high C"`).
    pub fn key(self) -> &'static str {
        match self {
            Parameter::HighC => "high C",
            Parameter::HighF => "high F",
            Parameter::MeanC => "mean C",
            Parameter::MeanF => "mean F",
            Parameter::LowC => "low C",
            Parameter::LowF => "low F",
            Parameter::Humidity => "humidity",
            Parameter::Sun => "sun",
            Parameter::PrecipitationDays => "precipitation days",
            Parameter::PrecipitationMm => "precipitation mm",
            Parameter::PrecipitationInch => "precipitation inch",
            Parameter::RecordHighC => "record high C",
            Parameter::RecordHighF => "record high F",
            Parameter::RecordLowC => "record low C",
            Parameter::RecordLowF => "record low F",
        }
    }

    /// Imperial parameters are converted in place; metric ones pass through.
    pub fn conversion(self) -> Option<Conversion> {
        match self {
            Parameter::HighF
            | Parameter::MeanF
            | Parameter::LowF
            | Parameter::RecordHighF
            | Parameter::RecordLowF => Some(Conversion::FahrenheitToCelsius),
            Parameter::PrecipitationInch => Some(Conversion::InchToMillimeter),
            _ => None,
        }
    }

    /// How the yearly figure is derived from the twelve monthly values.
    /// Converted imperial parameters aggregate exactly like their metric
    /// counterparts, since their values are metric by the time aggregation
    /// runs.
    pub fn aggregator(self) -> Aggregator {
        match self {
            Parameter::HighC
            | Parameter::HighF
            | Parameter::MeanC
            | Parameter::MeanF
            | Parameter::LowC
            | Parameter::LowF
            | Parameter::Humidity => Aggregator::MonthlyMean,
            Parameter::Sun
            | Parameter::PrecipitationDays
            | Parameter::PrecipitationMm
            | Parameter::PrecipitationInch => Aggregator::Sum,
            Parameter::RecordHighC | Parameter::RecordHighF => Aggregator::Max,
            Parameter::RecordLowC | Parameter::RecordLowF => Aggregator::Min,
        }
    }

    /// The fixed subset of parameters that also get a
    /// `"year <param> stdev"` field.
    pub fn has_stdev(self) -> bool {
        matches!(
            self,
            Parameter::MeanC
                | Parameter::Humidity
                | Parameter::Sun
                | Parameter::PrecipitationDays
                | Parameter::PrecipitationMm
        )
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fahrenheit_parameter_converts_to_celsius() {
        for parameter in [
            Parameter::HighF,
            Parameter::MeanF,
            Parameter::LowF,
            Parameter::RecordHighF,
            Parameter::RecordLowF,
        ] {
            assert_eq!(
                parameter.conversion(),
                Some(Conversion::FahrenheitToCelsius)
            );
        }
        assert_eq!(
            Parameter::PrecipitationInch.conversion(),
            Some(Conversion::InchToMillimeter)
        );
        assert_eq!(Parameter::Humidity.conversion(), None);
    }

    #[test]
    fn stdev_subset_is_exactly_five_parameters() {
        let subset: Vec<Parameter> = Parameter::ALL
            .into_iter()
            .filter(|p| p.has_stdev())
            .collect();
        assert_eq!(
            subset,
            vec![
                Parameter::MeanC,
                Parameter::Humidity,
                Parameter::Sun,
                Parameter::PrecipitationDays,
                Parameter::PrecipitationMm,
            ]
        );
    }

    #[test]
    fn record_parameters_use_extreme_aggregators() {
        assert_eq!(Parameter::RecordHighC.aggregator(), Aggregator::Max);
        assert_eq!(Parameter::RecordHighF.aggregator(), Aggregator::Max);
        assert_eq!(Parameter::RecordLowC.aggregator(), Aggregator::Min);
        assert_eq!(Parameter::RecordLowF.aggregator(), Aggregator::Min);
    }
}
