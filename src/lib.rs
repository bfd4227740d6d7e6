//! Health survey scatter plot with clickable axis labels.
//!
//! One point per state is plotted from a CSV of survey columns. Clicking one
//! of the labels under the X axis or beside the Y axis rebinds that dimension
//! to another column. The scale domain is recomputed from the data and the
//! points and ticks animate to their new positions.
//!
//! Modules:
//! - `data`: records, CSV loading, the axis-binding engine, scales and transitions
//! - `panels`: the plot, the axis label strips and the analysis text
//! - `app`: the eframe application and [`run_scatter`]
//! - `config`: view configuration and the YAML/JSON override file
//! - `events`: event bitflags and the subscription controller
//! - `error`: the crate error type

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod panels;

// Public re-exports for a compact external API
pub use app::{run_scatter, ScatterApp};
pub use config::{ScatterConfig, ScatterConfigFile};
pub use data::axis::{compute_domain, AxisPadding, AxisSelection, Dimension, ScaleDomain};
pub use data::dataset::Dataset;
pub use data::engine::{AxisBindingEngine, AxisCommand, Paddings};
pub use data::record::{Field, Record};
pub use error::{Result, ScatterError, SelectionRejection};
pub use events::{EventController, EventFilter, EventKind, ScatterEvent};
