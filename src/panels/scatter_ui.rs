//! Central scatter plot.
//!
//! The plot works in unit space ([0, 1] on both axes). Each dimension's
//! [`AxisAnimator`] supplies normalized point positions and the (possibly
//! blending) domain used to label ticks, so a rebind animates only the
//! dimension that changed.

use std::time::Duration;

use egui::{Color32, RichText, Ui};
use egui_plot::{Plot, PlotPoint, Points, Text};

use crate::config::{FeatureFlags, PointConfig};
use crate::data::annotations::tooltip_text;
use crate::data::axis::Dimension;
use crate::data::engine::AxisBindingEngine;
use crate::data::scale::LinearScale;
use crate::data::transition::AxisAnimator;

/// Index of the point closest to `target`, if it lies within `max_dist`.
pub fn nearest_point(points: &[[f64; 2]], target: [f64; 2], max_dist: f64) -> Option<usize> {
    let mut best = None;
    let mut best_d2 = max_dist * max_dist;
    for (i, p) in points.iter().enumerate() {
        let dx = p[0] - target[0];
        let dy = p[1] - target[1];
        let d2 = dx * dx + dy * dy;
        if d2 <= best_d2 {
            best_d2 = d2;
            best = Some(i);
        }
    }
    best
}

/// Tick label for an axis value: one decimal, dropping a trailing `.0`.
pub fn format_tick(value: f64) -> String {
    let s = format!("{:.1}", value);
    match s.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => s,
    }
}

pub struct ScatterPanel {
    x: AxisAnimator,
    y: AxisAnimator,
    points: PointConfig,
    tooltips: bool,
    grid: bool,
    hovered: Option<usize>,
}

impl ScatterPanel {
    pub fn new(engine: &AxisBindingEngine, duration: Duration, points: PointConfig, features: &FeatureFlags) -> Self {
        let selection = engine.selection();
        let dataset = engine.dataset();
        Self {
            x: AxisAnimator::new(Dimension::X, dataset, selection.x, engine.domain(Dimension::X), duration),
            y: AxisAnimator::new(Dimension::Y, dataset, selection.y, engine.domain(Dimension::Y), duration),
            points,
            tooltips: features.tooltips,
            grid: features.grid,
            hovered: None,
        }
    }

    pub fn animator(&self, dimension: Dimension) -> &AxisAnimator {
        match dimension {
            Dimension::X => &self.x,
            Dimension::Y => &self.y,
        }
    }

    /// Start the transition of `dimension` towards the engine's current binding.
    pub fn on_rebound(&mut self, engine: &AxisBindingEngine, dimension: Dimension, now: f64) {
        let field = engine.selection().get(dimension);
        let domain = engine.domain(dimension);
        let animator = match dimension {
            Dimension::X => &mut self.x,
            Dimension::Y => &mut self.y,
        };
        animator.retarget(engine.dataset(), field, domain, now);
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.x.is_animating(now) || self.y.is_animating(now)
    }

    /// Dimensions whose transition completed since the last call.
    pub fn settle(&mut self, now: f64) -> Vec<Dimension> {
        let mut done = Vec::new();
        if self.x.settle(now) {
            done.push(Dimension::X);
        }
        if self.y.settle(now) {
            done.push(Dimension::Y);
        }
        done
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Unit-space position of every record at time `now`.
    pub fn positions_at(&self, now: f64) -> Vec<[f64; 2]> {
        let xs = self.x.positions_at(now);
        let ys = self.y.positions_at(now);
        xs.into_iter().zip(ys).map(|(x, y)| [x, y]).collect()
    }

    /// Draw the plot and update the hovered point.
    pub fn render_plot(&mut self, ui: &mut Ui, engine: &AxisBindingEngine, now: f64) {
        let positions = self.positions_at(now);
        let x_scale = LinearScale::unit(self.x.domain_at(now));
        let y_scale = LinearScale::unit(self.y.domain_at(now));

        let plot = Plot::new("scatter_plot")
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show_x(false)
            .show_y(false)
            .show_grid(self.grid)
            .x_axis_formatter(move |mark, _range| format_tick(x_scale.invert(mark.value)))
            .y_axis_formatter(move |mark, _range| format_tick(y_scale.invert(mark.value)));

        let radius = self.points.radius;
        let show_labels = self.points.show_labels;
        let plot_response = plot.show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(0.0..=1.0);
            plot_ui.set_plot_bounds_y(0.0..=1.0);

            plot_ui.points(
                Points::new("states", positions.clone())
                    .radius(radius)
                    .filled(true)
                    .color(Color32::LIGHT_BLUE),
            );

            if show_labels {
                for (record, p) in engine.dataset().iter().zip(positions.iter()) {
                    let rich = RichText::new(&record.abbr)
                        .size(10.0)
                        .strong()
                        .color(Color32::BLACK);
                    plot_ui.text(Text::new("abbr", PlotPoint::new(p[0], p[1]), rich));
                }
            }
        });

        // Hit-test in screen space so the hover radius matches the marker radius.
        let transform = plot_response.transform;
        let response = plot_response.response;
        self.hovered = response.hover_pos().and_then(|pointer| {
            let screen: Vec<[f64; 2]> = positions
                .iter()
                .map(|p| {
                    let pos = transform.position_from_point(&PlotPoint::new(p[0], p[1]));
                    [pos.x as f64, pos.y as f64]
                })
                .collect();
            nearest_point(&screen, [pointer.x as f64, pointer.y as f64], radius as f64)
        });

        if self.tooltips {
            if let Some(record) = self.hovered.and_then(|i| engine.dataset().records().get(i)) {
                let _ = response.on_hover_text_at_pointer(tooltip_text(record, &engine.selection()));
            }
        }
    }
}
