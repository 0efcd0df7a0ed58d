//! Scalar facet types derived from a locale.

/// Measurement system facet. `Uk` keeps metric lengths but imperial
/// volumes and body measurements; `Us` is fully customary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementSystem {
    Metric,
    Uk,
    Us,
}

impl MeasurementSystem {
    pub fn as_str(self) -> &'static str {
        match self {
            MeasurementSystem::Metric => "metric",
            MeasurementSystem::Uk => "uk",
            MeasurementSystem::Us => "us",
        }
    }

    /// Accepts both the UTS #35 keyword values and the legacy alias
    /// "imperial", which maps to the UK system.
    pub fn from_keyword(value: &str) -> Option<Self> {
        match value {
            "metric" => Some(MeasurementSystem::Metric),
            "uksystem" | "uk" | "imperial" => Some(MeasurementSystem::Uk),
            "ussystem" | "us" => Some(MeasurementSystem::Us),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }
}

/// Preferred clock representation, named after the UTS #35 `hc` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HourCycle {
    /// 0..11, midnight starts the cycle.
    H11,
    /// 1..12.
    H12,
    /// 0..23.
    H23,
    /// 1..24.
    H24,
}

impl HourCycle {
    pub fn as_str(self) -> &'static str {
        match self {
            HourCycle::H11 => "h11",
            HourCycle::H12 => "h12",
            HourCycle::H23 => "h23",
            HourCycle::H24 => "h24",
        }
    }

    pub fn from_keyword(value: &str) -> Option<Self> {
        match value {
            "h11" => Some(HourCycle::H11),
            "h12" => Some(HourCycle::H12),
            "h23" => Some(HourCycle::H23),
            "h24" => Some(HourCycle::H24),
            _ => None,
        }
    }

    pub fn uses_day_period(self) -> bool {
        matches!(self, HourCycle::H11 | HourCycle::H12)
    }
}

/// Numeric style backing a formatter handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberStyle {
    Decimal,
    Currency,
    Percent,
    Scientific,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurement_keyword_aliases() {
        assert_eq!(
            MeasurementSystem::from_keyword("imperial"),
            Some(MeasurementSystem::Uk)
        );
        assert_eq!(
            MeasurementSystem::from_keyword("uksystem"),
            Some(MeasurementSystem::Uk)
        );
        assert_eq!(
            MeasurementSystem::from_keyword("ussystem"),
            Some(MeasurementSystem::Us)
        );
        assert_eq!(MeasurementSystem::from_keyword("bogus"), None);
    }

    #[test]
    fn hour_cycle_round_trip() {
        for hc in [HourCycle::H11, HourCycle::H12, HourCycle::H23, HourCycle::H24] {
            assert_eq!(HourCycle::from_keyword(hc.as_str()), Some(hc));
        }
    }
}
