// file: src/models/temperature.rs
// description: Temperature value with a Celsius/Fahrenheit unit tag and linear conversion
// reference: https://en.wikipedia.org/wiki/Fahrenheit#Conversion_(specific_temperature_point)

use crate::error::{Result, UtilError};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Celsius,
    Fahrenheit,
}

impl Unit {
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Celsius => "C",
            Unit::Fahrenheit => "F",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Unit::Celsius => Unit::Fahrenheit,
            Unit::Fahrenheit => Unit::Celsius,
        }
    }
}

impl FromStr for Unit {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "C" => Ok(Unit::Celsius),
            "F" => Ok(Unit::Fahrenheit),
            other => Err(UtilError::InvalidUnit(other.to_string())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature {
    pub value: f64,
    pub unit: Unit,
}

impl Temperature {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Parse raw command line input. The number is checked before the unit.
    /// Surrounding whitespace is not accepted.
    pub fn parse(value: &str, unit: &str) -> Result<Self> {
        let value: f64 = value
            .parse()
            .map_err(|_| UtilError::InvalidNumber(value.to_string()))?;
        let unit = unit.parse::<Unit>()?;
        Ok(Self::new(value, unit))
    }

    /// Convert to the opposite unit.
    pub fn convert(self) -> Self {
        match self.unit {
            Unit::Fahrenheit => Self::new((self.value - 32.0) * 5.0 / 9.0, Unit::Celsius),
            Unit::Celsius => Self::new(self.value * 9.0 / 5.0 + 32.0, Unit::Fahrenheit),
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
