use serde::{Deserialize, Serialize};

/// Physical quantity a metric row measures. Stored in the `type` column and
/// echoed in every response so clients can tell the two row shapes apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "metric_type", rename_all = "UPPERCASE")]
pub enum MetricType {
    Distance,
    Temperature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "distance_unit", rename_all = "UPPERCASE")]
pub enum DistanceUnit {
    Meter,
    Centimeter,
    Inch,
    Feet,
    Yard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "temperature_unit", rename_all = "UPPERCASE")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// Multiplier taking one unit of distance to meters, the pivot unit.
fn meter_factor(unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Meter => 1.0,
        DistanceUnit::Centimeter => 0.01,
        DistanceUnit::Inch => 0.0254,
        DistanceUnit::Feet => 0.3048,
        DistanceUnit::Yard => 0.9144,
    }
}

/// Convert a distance between units by pivoting through meters.
///
/// Same-unit calls return the value untouched so no floating-point error is
/// introduced. Negative values are treated as valid signed scalars.
pub fn convert_distance(value: f64, from: DistanceUnit, to: DistanceUnit) -> f64 {
    if from == to {
        return value;
    }
    let meters = value * meter_factor(from);
    meters / meter_factor(to)
}

/// Convert a temperature between units by pivoting through Kelvin.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    let kelvin = match from {
        TemperatureUnit::Celsius => value + 273.15,
        TemperatureUnit::Fahrenheit => (value + 459.67) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => value,
    };
    match to {
        TemperatureUnit::Celsius => kelvin - 273.15,
        TemperatureUnit::Fahrenheit => kelvin * 9.0 / 5.0 - 459.67,
        TemperatureUnit::Kelvin => kelvin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISTANCE_UNITS: [DistanceUnit; 5] = [
        DistanceUnit::Meter,
        DistanceUnit::Centimeter,
        DistanceUnit::Inch,
        DistanceUnit::Feet,
        DistanceUnit::Yard,
    ];

    const TEMPERATURE_UNITS: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    fn close(a: f64, b: f64) -> bool {
        let scale = a.abs().max(b.abs()).max(1.0);
        (a - b).abs() <= 1e-9 * scale
    }

    #[test]
    fn same_unit_is_exact_identity() {
        for unit in DISTANCE_UNITS {
            assert_eq!(convert_distance(0.1, unit, unit), 0.1);
        }
        for unit in TEMPERATURE_UNITS {
            assert_eq!(convert_temperature(-40.5, unit, unit), -40.5);
        }
    }

    #[test]
    fn distance_anchors() {
        assert!(close(
            convert_distance(100.0, DistanceUnit::Centimeter, DistanceUnit::Meter),
            1.0
        ));
        assert!(close(
            convert_distance(1.0, DistanceUnit::Yard, DistanceUnit::Feet),
            3.0
        ));
        assert!(close(
            convert_distance(1.0, DistanceUnit::Inch, DistanceUnit::Centimeter),
            2.54
        ));
        assert!(close(
            convert_distance(1.0, DistanceUnit::Meter, DistanceUnit::Feet),
            1.0 / 0.3048
        ));
    }

    #[test]
    fn distance_round_trips() {
        for from in DISTANCE_UNITS {
            for to in DISTANCE_UNITS {
                let there = convert_distance(123.456, from, to);
                let back = convert_distance(there, to, from);
                assert!(close(back, 123.456), "{from:?} -> {to:?} -> back = {back}");
            }
        }
    }

    #[test]
    fn negative_distance_passes_through_the_arithmetic() {
        assert!(close(
            convert_distance(-2.0, DistanceUnit::Meter, DistanceUnit::Centimeter),
            -200.0
        ));
    }

    #[test]
    fn temperature_anchors() {
        assert!(close(
            convert_temperature(0.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit),
            32.0
        ));
        assert!(close(
            convert_temperature(32.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius),
            0.0
        ));
        assert!(close(
            convert_temperature(0.0, TemperatureUnit::Celsius, TemperatureUnit::Kelvin),
            273.15
        ));
        assert!(close(
            convert_temperature(100.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit),
            212.0
        ));
        assert!(close(
            convert_temperature(0.0, TemperatureUnit::Kelvin, TemperatureUnit::Fahrenheit),
            -459.67
        ));
    }

    #[test]
    fn temperature_round_trips() {
        for from in TEMPERATURE_UNITS {
            for to in TEMPERATURE_UNITS {
                let there = convert_temperature(21.7, from, to);
                let back = convert_temperature(there, to, from);
                assert!(close(back, 21.7), "{from:?} -> {to:?} -> back = {back}");
            }
        }
    }

    #[test]
    fn enums_use_wire_spellings() {
        assert_eq!(
            serde_json::to_string(&DistanceUnit::Centimeter).unwrap(),
            "\"CENTIMETER\""
        );
        assert_eq!(
            serde_json::to_string(&TemperatureUnit::Fahrenheit).unwrap(),
            "\"FAHRENHEIT\""
        );
        assert_eq!(
            serde_json::to_string(&MetricType::Distance).unwrap(),
            "\"DISTANCE\""
        );
        let unit: DistanceUnit = serde_json::from_str("\"YARD\"").unwrap();
        assert_eq!(unit, DistanceUnit::Yard);
    }
}
