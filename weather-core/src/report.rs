use std::fmt;

use crate::{WeatherReading, condition};

/// Successful pipeline result, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub reading: WeatherReading,
    pub description: &'static str,
}

impl Report {
    pub fn new(reading: WeatherReading) -> Self {
        let description = condition::describe(reading.condition_code);
        Self { reading, description }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current weather in {}:", self.reading.location_name)?;
        writeln!(f, "Temperature: {:.2}°C", self.reading.temperature_c)?;
        write!(f, "Description: {}", self.description)?;
        if let Some(observed_at) = self.reading.observed_at {
            write!(f, "\nObserved at: {}", observed_at.format("%Y-%m-%d %H:%M"))?;
        }
        Ok(())
    }
}
