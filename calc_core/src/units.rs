//! # Unit Conversion Tables
//!
//! Each [`UnitDomain`] owns a fixed table of [`ConversionUnit`]s. Every unit
//! records how many canonical units one of it is worth, so a conversion is
//! always routed through the canonical unit:
//!
//! ```text
//! value [from] --to_canonical--> canonical --from_canonical--> value [to]
//! ```
//!
//! Temperature has offsets as well as scale factors and is handled
//! separately by [`TemperatureScale`].
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{convert, convert_temperature, UnitDomain};
//!
//! let feet = convert(UnitDomain::Length, 1.0, "m", "ft");
//! assert!((feet - 3.28084).abs() < 1e-5);
//!
//! assert!(convert(UnitDomain::Length, 1.0, "m", "furlong").is_nan());
//! assert_eq!(convert_temperature(100.0, "C", "F"), 212.0);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Unit Descriptors
// ============================================================================

/// One unit of a conversion domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionUnit {
    /// Short id, unique within the domain (e.g., "km")
    pub id: &'static str,
    /// Display label (e.g., "Kilometer")
    pub label: &'static str,
    /// Size of one of this unit, expressed in the canonical unit
    pub in_canonical: f64,
}

impl ConversionUnit {
    const fn new(id: &'static str, label: &'static str, in_canonical: f64) -> Self {
        Self { id, label, in_canonical }
    }

    /// Express `value` of this unit in the canonical unit
    pub fn to_canonical(&self, value: f64) -> f64 {
        value * self.in_canonical
    }

    /// Express a canonical `value` in this unit
    pub fn from_canonical(&self, value: f64) -> f64 {
        value / self.in_canonical
    }
}

/// Length, canonical unit: meter
pub static LENGTH_UNITS: &[ConversionUnit] = &[
    ConversionUnit::new("mm", "Millimeter", 1.0 / 1000.0),
    ConversionUnit::new("cm", "Centimeter", 1.0 / 100.0),
    ConversionUnit::new("m", "Meter", 1.0),
    ConversionUnit::new("km", "Kilometer", 1000.0),
    ConversionUnit::new("in", "Inch", 0.0254),
    ConversionUnit::new("ft", "Foot", 0.3048),
];

/// Weight, canonical unit: kilogram
pub static WEIGHT_UNITS: &[ConversionUnit] = &[
    ConversionUnit::new("g", "Gram", 1.0 / 1000.0),
    ConversionUnit::new("kg", "Kilogram", 1.0),
    ConversionUnit::new("lb", "Pound", 0.45359237),
];

/// Time, canonical unit: second
pub static TIME_UNITS: &[ConversionUnit] = &[
    ConversionUnit::new("sec", "Second", 1.0),
    ConversionUnit::new("min", "Minute", 60.0),
    ConversionUnit::new("hr", "Hour", 3600.0),
    ConversionUnit::new("day", "Day", 86400.0),
];

/// Speed, canonical unit: meter per second
pub static SPEED_UNITS: &[ConversionUnit] = &[
    ConversionUnit::new("m/s", "Meter/second", 1.0),
    ConversionUnit::new("km/h", "Kilometer/hour", 1.0 / 3.6),
    ConversionUnit::new("mph", "Mile/hour", 0.44704),
];

/// Area, canonical unit: square meter
pub static AREA_UNITS: &[ConversionUnit] = &[
    ConversionUnit::new("sqm", "sq m", 1.0),
    ConversionUnit::new("sqft", "sq ft", 0.09290304),
];

// ============================================================================
// Domains
// ============================================================================

/// A family of mutually convertible units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitDomain {
    Length,
    Weight,
    Time,
    Speed,
    Area,
}

impl UnitDomain {
    /// All scalar domains, in display order
    pub const ALL: [UnitDomain; 5] = [
        UnitDomain::Length,
        UnitDomain::Weight,
        UnitDomain::Time,
        UnitDomain::Speed,
        UnitDomain::Area,
    ];

    /// Lowercase domain name used in messages
    pub fn name(&self) -> &'static str {
        match self {
            UnitDomain::Length => "length",
            UnitDomain::Weight => "weight",
            UnitDomain::Time => "time",
            UnitDomain::Speed => "speed",
            UnitDomain::Area => "area",
        }
    }

    /// The unit table of this domain
    pub fn units(&self) -> &'static [ConversionUnit] {
        match self {
            UnitDomain::Length => LENGTH_UNITS,
            UnitDomain::Weight => WEIGHT_UNITS,
            UnitDomain::Time => TIME_UNITS,
            UnitDomain::Speed => SPEED_UNITS,
            UnitDomain::Area => AREA_UNITS,
        }
    }

    /// Ids of every unit, in table order
    pub fn unit_ids(&self) -> Vec<&'static str> {
        self.units().iter().map(|u| u.id).collect()
    }

    /// Look a unit up by id, or by label ignoring ASCII case.
    pub fn unit(&self, id: &str) -> Option<&'static ConversionUnit> {
        let id = id.trim();
        self.units()
            .iter()
            .find(|u| u.id == id || u.label.eq_ignore_ascii_case(id))
    }

    /// Like [`UnitDomain::unit`], but reports the miss.
    pub fn try_unit(&self, id: &str) -> CalcResult<&'static ConversionUnit> {
        self.unit(id)
            .ok_or_else(|| CalcError::unknown_unit(self.name(), id))
    }
}

/// Convert `value` from one unit of `domain` to another.
///
/// Returns an error naming the unit that is missing from the table.
pub fn try_convert(domain: UnitDomain, value: f64, from: &str, to: &str) -> CalcResult<f64> {
    let from = domain.try_unit(from)?;
    let to = domain.try_unit(to)?;
    Ok(to.from_canonical(from.to_canonical(value)))
}

/// Convert `value` between two units of `domain`; NaN if either id is unknown.
pub fn convert(domain: UnitDomain, value: f64, from: &str, to: &str) -> f64 {
    try_convert(domain, value, from, to).unwrap_or(f64::NAN)
}

// ============================================================================
// Temperature
// ============================================================================

/// Temperature scales. Conversions go through Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureScale {
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
    #[serde(rename = "K")]
    Kelvin,
}

impl TemperatureScale {
    pub const ALL: [TemperatureScale; 3] = [
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Kelvin,
    ];

    /// Single-letter id ("C", "F", "K")
    pub fn id(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "C",
            TemperatureScale::Fahrenheit => "F",
            TemperatureScale::Kelvin => "K",
        }
    }

    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => value,
            TemperatureScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureScale::Kelvin => value - 273.15,
        }
    }

    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => celsius,
            TemperatureScale::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TemperatureScale::Kelvin => celsius + 273.15,
        }
    }

    /// Convert `value` on this scale to the `target` scale
    pub fn convert(&self, value: f64, target: TemperatureScale) -> f64 {
        target.from_celsius(self.to_celsius(value))
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for TemperatureScale {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "celsius" => Ok(TemperatureScale::Celsius),
            "f" | "fahrenheit" => Ok(TemperatureScale::Fahrenheit),
            "k" | "kelvin" => Ok(TemperatureScale::Kelvin),
            _ => Err(CalcError::unknown_unit("temperature", s)),
        }
    }
}

/// Convert between temperature scales by id; NaN if either id is unknown.
pub fn convert_temperature(value: f64, from: &str, to: &str) -> f64 {
    match (from.parse::<TemperatureScale>(), to.parse::<TemperatureScale>()) {
        (Ok(from), Ok(to)) => from.convert(value, to),
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_meter_to_feet() {
        let ft = convert(UnitDomain::Length, 1.0, "m", "ft");
        assert!((ft - 3.28084).abs() < 1e-5);
    }

    #[test]
    fn test_known_factors() {
        assert!(close(convert(UnitDomain::Length, 1.0, "km", "mm"), 1_000_000.0));
        assert!(close(convert(UnitDomain::Weight, 1.0, "lb", "g"), 453.59237));
        assert!(close(convert(UnitDomain::Time, 1.0, "day", "min"), 1440.0));
        assert!(close(convert(UnitDomain::Speed, 36.0, "km/h", "m/s"), 10.0));
        assert!(close(convert(UnitDomain::Area, 1.0, "sqm", "sqft"), 10.763910416709722));
    }

    #[test]
    fn test_unknown_unit_is_nan() {
        assert!(convert(UnitDomain::Weight, 1.0, "stone", "kg").is_nan());
        assert!(convert(UnitDomain::Weight, 1.0, "kg", "stone").is_nan());
        let err = try_convert(UnitDomain::Weight, 1.0, "kg", "stone").unwrap_err();
        assert_eq!(err, CalcError::unknown_unit("weight", "stone"));
    }

    #[test]
    fn test_lookup_by_label() {
        assert_eq!(UnitDomain::Area.unit("sq ft").map(|u| u.id), Some("sqft"));
        assert_eq!(UnitDomain::Length.unit("METER").map(|u| u.id), Some("m"));
    }

    #[test]
    fn test_unit_ids_unique_per_domain() {
        for domain in UnitDomain::ALL {
            let ids = domain.unit_ids();
            for (i, id) in ids.iter().enumerate() {
                assert!(!ids[i + 1..].contains(id), "duplicate {} in {:?}", id, domain);
            }
        }
    }

    #[test]
    fn test_temperature_fixed_points() {
        assert_eq!(convert_temperature(100.0, "C", "F"), 212.0);
        assert_eq!(convert_temperature(32.0, "F", "C"), 0.0);
        assert!(close(convert_temperature(0.0, "C", "K"), 273.15));
        assert!(close(convert_temperature(-40.0, "F", "C"), -40.0));
        assert!(convert_temperature(1.0, "C", "R").is_nan());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn scalar_round_trip(value in -1.0e9_f64..1.0e9_f64, d in 0usize..5, i in 0usize..6, j in 0usize..6) {
            let domain = UnitDomain::ALL[d];
            let units = domain.units();
            let a = units[i % units.len()].id;
            let b = units[j % units.len()].id;
            let back = convert(domain, convert(domain, value, a, b), b, a);
            prop_assert!((back - value).abs() <= 1e-9 * value.abs().max(1.0));
        }

        #[test]
        fn temperature_round_trip(value in -1.0e6_f64..1.0e6_f64, i in 0usize..3, j in 0usize..3) {
            let a = TemperatureScale::ALL[i];
            let b = TemperatureScale::ALL[j];
            let back = b.convert(a.convert(value, b), a);
            prop_assert!((back - value).abs() <= 1e-9 * value.abs().max(1.0));
        }
    }
}
