//! The axis-binding engine: owns the dataset, the active field per dimension
//! and the padded domain derived for each.

use log::{debug, info};

use crate::data::axis::{compute_field_domain, AxisPadding, AxisSelection, Dimension, ScaleDomain};
use crate::data::dataset::Dataset;
use crate::data::record::Field;
use crate::error::{Result, ScatterError, SelectionRejection};

/// Per-dimension padding multipliers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddings {
    pub x: AxisPadding,
    pub y: AxisPadding,
}

impl Paddings {
    pub fn get(&self, dimension: Dimension) -> AxisPadding {
        match dimension {
            Dimension::X => self.x,
            Dimension::Y => self.y,
        }
    }
}

impl Default for Paddings {
    fn default() -> Self {
        Self {
            x: AxisPadding::X_DEFAULT,
            y: AxisPadding::Y_DEFAULT,
        }
    }
}

/// A request to bind `field` to `dimension`, as issued by one axis label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisCommand {
    pub dimension: Dimension,
    pub field: Field,
}

impl AxisCommand {
    pub fn new(dimension: Dimension, field: Field) -> Self {
        Self { dimension, field }
    }

    /// One command per selectable label, X labels first.
    pub fn all() -> impl Iterator<Item = AxisCommand> {
        Dimension::BOTH.into_iter().flat_map(|dimension| {
            dimension
                .candidates()
                .iter()
                .map(move |&field| AxisCommand::new(dimension, field))
        })
    }
}

pub struct AxisBindingEngine {
    dataset: Dataset,
    paddings: Paddings,
    selection: AxisSelection,
    x_domain: ScaleDomain,
    y_domain: ScaleDomain,
}

impl AxisBindingEngine {
    /// Bind `selection` over `dataset`, computing both initial domains.
    ///
    /// Fails if either padding is invalid, the dataset is empty, or a selected
    /// field is not a candidate of its dimension.
    pub fn new(dataset: Dataset, selection: AxisSelection, paddings: Paddings) -> Result<Self> {
        paddings.x.validate()?;
        paddings.y.validate()?;
        for dimension in Dimension::BOTH {
            let field = selection.get(dimension);
            if !dimension.accepts(field) {
                return Err(ScatterError::InvalidSelection {
                    dimension,
                    field,
                    reason: SelectionRejection::NotACandidate,
                });
            }
        }
        let x_domain = compute_field_domain(&dataset, selection.x, paddings.x)?;
        let y_domain = compute_field_domain(&dataset, selection.y, paddings.y)?;
        debug!(
            "engine bound x={} {:?}, y={} {:?}",
            selection.x, x_domain, selection.y, y_domain
        );
        Ok(Self {
            dataset,
            paddings,
            selection,
            x_domain,
            y_domain,
        })
    }

    /// Default selection (poverty vs. obesity) with default paddings.
    pub fn with_defaults(dataset: Dataset) -> Result<Self> {
        Self::new(dataset, AxisSelection::default(), Paddings::default())
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selection(&self) -> AxisSelection {
        self.selection
    }

    pub fn paddings(&self) -> Paddings {
        self.paddings
    }

    pub fn domain(&self, dimension: Dimension) -> ScaleDomain {
        match dimension {
            Dimension::X => self.x_domain,
            Dimension::Y => self.y_domain,
        }
    }

    pub fn candidates(&self, dimension: Dimension) -> &'static [Field] {
        dimension.candidates()
    }

    pub fn is_active(&self, dimension: Dimension, field: Field) -> bool {
        self.selection.get(dimension) == field
    }

    pub fn dispatch(&mut self, command: AxisCommand) -> Result<ScaleDomain> {
        self.rebind_field(command.dimension, command.field)
    }

    /// Bind the field named `field` to `dimension`. See [`Self::rebind_field`].
    pub fn rebind(&mut self, dimension: Dimension, field: &str) -> Result<ScaleDomain> {
        let field: Field = field.parse()?;
        self.rebind_field(dimension, field)
    }

    /// Make `field` the active field of `dimension` and recompute that
    /// dimension's domain. The other dimension is not touched.
    ///
    /// Rebinding to the already-active field, or to a field that belongs to the
    /// other dimension, is rejected and leaves all state as it was.
    pub fn rebind_field(&mut self, dimension: Dimension, field: Field) -> Result<ScaleDomain> {
        let reject = |reason: SelectionRejection| -> Result<ScaleDomain> {
            debug!("rejected rebind of {dimension} to {field}: {reason}");
            Err(ScatterError::InvalidSelection {
                dimension,
                field,
                reason,
            })
        };
        if !dimension.accepts(field) {
            return reject(SelectionRejection::NotACandidate);
        }
        if self.is_active(dimension, field) {
            return reject(SelectionRejection::AlreadyActive);
        }

        let domain = compute_field_domain(&self.dataset, field, self.paddings.get(dimension))?;
        let previous = self.selection.get(dimension);
        self.selection.set(dimension, field);
        match dimension {
            Dimension::X => self.x_domain = domain,
            Dimension::Y => self.y_domain = domain,
        }
        debug_assert!(dimension.accepts(self.selection.get(dimension)));
        info!(
            "rebound {dimension} axis {previous} -> {field}, domain [{}, {}]",
            domain.min, domain.max
        );
        Ok(domain)
    }
}
