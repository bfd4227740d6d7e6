//! Configuration for the scatter view, plus the on-disk override format.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::data::axis::{AxisPadding, AxisSelection};
use crate::data::engine::Paddings;
use crate::data::record::Field;
use crate::error::{Result, ScatterError};
use crate::events::EventController;

// ─────────────────────────────────────────────────────────────────────────────
// Axes
// ─────────────────────────────────────────────────────────────────────────────

/// Initial binding and padding of both axes.
#[derive(Clone, Debug, Default)]
pub struct AxisConfig {
    /// Fields bound when the view opens. Default: poverty vs. obesity.
    pub default_selection: AxisSelection,
    /// Padding multipliers. Default: X `(0.8, 1.1)`, Y `(0.5, 1.1)`.
    pub paddings: Paddings,
}

// ─────────────────────────────────────────────────────────────────────────────
// Transition
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct TransitionConfig {
    /// Time taken to move points after a rebind. Default: 1800 ms.
    pub duration: Duration,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(1800),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Points
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct PointConfig {
    /// Marker radius in screen points. Default: `12.0`.
    pub radius: f32,
    /// Draw each record's abbreviation on its marker.
    pub show_labels: bool,
}

impl Default for PointConfig {
    fn default() -> Self {
        Self {
            radius: 12.0,
            show_labels: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle optional parts of the UI. All default to `true`.
#[derive(Clone, Debug)]
pub struct FeatureFlags {
    /// Show the commentary panel next to the chart.
    pub analysis_panel: bool,
    /// Show a tooltip when hovering a point.
    pub tooltips: bool,
    /// Show the plot grid.
    pub grid: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            analysis_panel: true,
            tooltips: true,
            grid: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ScatterConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the scatter view.
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `axes`           | Default selection and padding multipliers |
/// | `transition`     | Rebind animation timing |
/// | `points`         | Marker size and labels |
/// | `features`       | Toggle optional UI parts |
/// | `events`         | Optional event subscription handle |
#[derive(Clone)]
pub struct ScatterConfig {
    /// Native window title.
    pub title: String,
    /// Optional headline rendered above the chart.
    pub headline: Option<String>,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,

    pub axes: AxisConfig,
    pub transition: TransitionConfig,
    pub points: PointConfig,
    pub features: FeatureFlags,

    /// Receives label-click, rebind, hover and transition events.
    pub events: Option<EventController>,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            title: "Health Risks by State".to_string(),
            headline: None,
            native_options: None,
            axes: AxisConfig::default(),
            transition: TransitionConfig::default(),
            points: PointConfig::default(),
            features: FeatureFlags::default(),
            events: None,
        }
    }
}

impl ScatterConfig {
    /// Defaults overridden by the YAML or JSON file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut cfg = Self::default();
        ScatterConfigFile::load(path)?.apply_to(&mut cfg)?;
        Ok(cfg)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File format
// ─────────────────────────────────────────────────────────────────────────────

/// Serializable overrides for [`ScatterConfig`]. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScatterConfigFile {
    pub title: Option<String>,
    pub headline: Option<String>,
    pub x_field: Option<String>,
    pub y_field: Option<String>,
    /// `[low, high]` multipliers for the X domain.
    pub x_padding: Option<[f64; 2]>,
    pub y_padding: Option<[f64; 2]>,
    pub transition_ms: Option<u64>,
    pub point_radius: Option<f32>,
    pub show_labels: Option<bool>,
    pub analysis_panel: Option<bool>,
    pub tooltips: Option<bool>,
    pub grid: Option<bool>,
}

impl ScatterConfigFile {
    /// Read overrides, choosing the format by file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let text = std::fs::read_to_string(path)?;
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&text)?),
            Some("json") => Ok(serde_json::from_str(&text)?),
            _ => Err(ScatterError::UnsupportedConfigFormat(path.display().to_string())),
        }
    }

    /// Apply stored overrides. Nothing is written unless every override is valid.
    pub fn apply_to(self, cfg: &mut ScatterConfig) -> Result<()> {
        let mut axes = cfg.axes.clone();
        if let Some(name) = &self.x_field {
            axes.default_selection.x = name.parse::<Field>()?;
        }
        if let Some(name) = &self.y_field {
            axes.default_selection.y = name.parse::<Field>()?;
        }
        if let Some([low, high]) = self.x_padding {
            axes.paddings.x = AxisPadding::new(low, high)?;
        }
        if let Some([low, high]) = self.y_padding {
            axes.paddings.y = AxisPadding::new(low, high)?;
        }

        cfg.axes = axes;
        if let Some(title) = self.title {
            cfg.title = title;
        }
        if self.headline.is_some() {
            cfg.headline = self.headline;
        }
        if let Some(ms) = self.transition_ms {
            cfg.transition.duration = Duration::from_millis(ms);
        }
        if let Some(r) = self.point_radius {
            cfg.points.radius = r;
        }
        if let Some(v) = self.show_labels {
            cfg.points.show_labels = v;
        }
        if let Some(v) = self.analysis_panel {
            cfg.features.analysis_panel = v;
        }
        if let Some(v) = self.tooltips {
            cfg.features.tooltips = v;
        }
        if let Some(v) = self.grid {
            cfg.features.grid = v;
        }
        Ok(())
    }
}
