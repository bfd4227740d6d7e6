//! Survey records and the closed set of numeric fields they expose.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::ScatterError;

/// A numeric column of the survey table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Poverty,
    Age,
    Income,
    Obesity,
    Smokes,
    Healthcare,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Poverty,
        Field::Age,
        Field::Income,
        Field::Obesity,
        Field::Smokes,
        Field::Healthcare,
    ];

    /// Column name as it appears in the CSV header.
    pub fn name(self) -> &'static str {
        match self {
            Field::Poverty => "poverty",
            Field::Age => "age",
            Field::Income => "income",
            Field::Obesity => "obesity",
            Field::Smokes => "smokes",
            Field::Healthcare => "healthcare",
        }
    }

    /// Axis label shown on the chart.
    pub fn label(self) -> &'static str {
        match self {
            Field::Poverty => "In Poverty (%)",
            Field::Age => "Age (Median)",
            Field::Income => "Household Income (Median)",
            Field::Obesity => "Obese (%)",
            Field::Smokes => "Smokes (%)",
            Field::Healthcare => "Lacks Healthcare (%)",
        }
    }

    /// Medians are plain numbers, everything else is a percentage.
    pub fn unit(self) -> &'static str {
        match self {
            Field::Age | Field::Income => "",
            _ => "%",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = ScatterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "poverty" => Ok(Field::Poverty),
            "age" => Ok(Field::Age),
            "income" => Ok(Field::Income),
            "obesity" | "obese" => Ok(Field::Obesity),
            "smokes" => Ok(Field::Smokes),
            "healthcare" => Ok(Field::Healthcare),
            other => Err(ScatterError::InvalidField(other.to_string())),
        }
    }
}

/// One row of the survey: a state with its numeric indicators.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    pub state: String,
    pub abbr: String,
    pub poverty: f64,
    pub age: f64,
    pub income: f64,
    pub obesity: f64,
    pub smokes: f64,
    pub healthcare: f64,
}

impl Record {
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::Poverty => self.poverty,
            Field::Age => self.age,
            Field::Income => self.income,
            Field::Obesity => self.obesity,
            Field::Smokes => self.smokes,
            Field::Healthcare => self.healthcare,
        }
    }
}
