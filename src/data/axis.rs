//! Axis vocabulary: dimensions, selections, paddings and padded scale domains.

use crate::data::dataset::Dataset;
use crate::data::record::Field;
use crate::error::{Result, ScatterError};

/// One of the two visual dimensions of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    X,
    Y,
}

impl Dimension {
    pub const BOTH: [Dimension; 2] = [Dimension::X, Dimension::Y];

    /// Fields that may be bound to this dimension.
    pub fn candidates(self) -> &'static [Field] {
        match self {
            Dimension::X => &[Field::Poverty, Field::Age, Field::Income],
            Dimension::Y => &[Field::Obesity, Field::Smokes, Field::Healthcare],
        }
    }

    pub fn accepts(self, field: Field) -> bool {
        self.candidates().contains(&field)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::X => f.write_str("X"),
            Dimension::Y => f.write_str("Y"),
        }
    }
}

/// The field currently driving each dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisSelection {
    pub x: Field,
    pub y: Field,
}

impl AxisSelection {
    pub fn get(&self, dimension: Dimension) -> Field {
        match dimension {
            Dimension::X => self.x,
            Dimension::Y => self.y,
        }
    }

    pub(crate) fn set(&mut self, dimension: Dimension, field: Field) {
        match dimension {
            Dimension::X => self.x = field,
            Dimension::Y => self.y = field,
        }
    }
}

impl Default for AxisSelection {
    fn default() -> Self {
        Self {
            x: Field::Poverty,
            y: Field::Obesity,
        }
    }
}

/// Multipliers applied to the raw minimum and maximum of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisPadding {
    pub low: f64,
    pub high: f64,
}

impl AxisPadding {
    pub const X_DEFAULT: AxisPadding = AxisPadding { low: 0.8, high: 1.1 };
    pub const Y_DEFAULT: AxisPadding = AxisPadding { low: 0.5, high: 1.1 };

    pub fn new(low: f64, high: f64) -> Result<Self> {
        let padding = Self { low, high };
        padding.validate()?;
        Ok(padding)
    }

    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        // low < high keeps the padded domain increasing for positive data.
        if ok(self.low) && ok(self.high) && self.low < self.high {
            Ok(())
        } else {
            Err(ScatterError::InvalidPadding {
                low: self.low,
                high: self.high,
            })
        }
    }
}

/// Padded numeric range a dimension's scale is stretched over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleDomain {
    pub min: f64,
    pub max: f64,
}

impl ScaleDomain {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Empty, inverted or NaN domains are degenerate.
    pub fn is_degenerate(&self) -> bool {
        self.min >= self.max || self.min.is_nan() || self.max.is_nan()
    }

    /// Linear blend towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(&self, other: &ScaleDomain, t: f64) -> ScaleDomain {
        ScaleDomain {
            min: self.min + (other.min - self.min) * t,
            max: self.max + (other.max - self.max) * t,
        }
    }
}

/// Padded domain of the column named `field`.
///
/// The name is validated before the dataset is inspected, so an unknown field
/// reports [`ScatterError::InvalidField`] even on an empty dataset.
pub fn compute_domain(dataset: &Dataset, field: &str, padding: AxisPadding) -> Result<ScaleDomain> {
    let field: Field = field.parse()?;
    compute_field_domain(dataset, field, padding)
}

/// Padded domain of a typed field: `(min * padding.low, max * padding.high)`.
///
/// NaN values are skipped. A column with no finite extremes reports
/// [`ScatterError::NonFiniteDomain`].
pub fn compute_field_domain(dataset: &Dataset, field: Field, padding: AxisPadding) -> Result<ScaleDomain> {
    if dataset.is_empty() {
        return Err(ScatterError::EmptyDataset);
    }
    let (min, max) = dataset
        .values(field)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    // `f64::min` skips NaN, so an all-NaN column leaves the fold at its seeds.
    if !min.is_finite() || !max.is_finite() {
        return Err(ScatterError::NonFiniteDomain { field });
    }
    Ok(ScaleDomain::new(min * padding.low, max * padding.high))
}
