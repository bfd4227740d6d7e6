//! Standalone application wrapper for the scatter view.
//!
//! [`ScatterApp`] owns the [`AxisBindingEngine`] and the panels, dispatches
//! label clicks to the engine, starts transitions for the dimension that
//! changed and reports what happened to an optional [`EventController`].

use eframe::egui;
use log::{debug, info};

use crate::config::{FeatureFlags, ScatterConfig};
use crate::data::axis::{Dimension, ScaleDomain};
use crate::data::dataset::Dataset;
use crate::data::engine::{AxisBindingEngine, AxisCommand};
use crate::error::Result;
use crate::events::{EventController, EventKind, HoverMeta, RebindMeta, ScatterEvent, TransitionMeta};
use crate::panels::{AnalysisPanel, AxisLabelsPanel, Panel, ScatterPanel};

pub struct ScatterApp {
    engine: AxisBindingEngine,

    // ── Panels ───────────────────────────────────────────────────────────────
    scatter: ScatterPanel,
    x_labels: AxisLabelsPanel,
    y_labels: AxisLabelsPanel,
    analysis: AnalysisPanel,

    headline: Option<String>,
    features: FeatureFlags,
    events: Option<EventController>,
    last_hovered: Option<usize>,
}

impl ScatterApp {
    /// Bind the configured default selection over `dataset`.
    pub fn new(dataset: Dataset, cfg: &ScatterConfig) -> Result<Self> {
        let engine = AxisBindingEngine::new(dataset, cfg.axes.default_selection, cfg.axes.paddings)?;
        let scatter = ScatterPanel::new(&engine, cfg.transition.duration, cfg.points.clone(), &cfg.features);
        let mut analysis = AnalysisPanel::default();
        analysis.state_mut().visible = cfg.features.analysis_panel;
        info!(
            "scatter view ready: {} records, x={}, y={}",
            engine.dataset().len(),
            engine.selection().x,
            engine.selection().y
        );
        Ok(Self {
            engine,
            scatter,
            x_labels: AxisLabelsPanel::new(Dimension::X),
            y_labels: AxisLabelsPanel::new(Dimension::Y),
            analysis,
            headline: cfg.headline.clone(),
            features: cfg.features.clone(),
            events: cfg.events.clone(),
            last_hovered: None,
        })
    }

    pub fn engine(&self) -> &AxisBindingEngine {
        &self.engine
    }

    pub fn scatter(&self) -> &ScatterPanel {
        &self.scatter
    }

    /// Handle one label click at time `now` (seconds).
    ///
    /// On success the clicked dimension starts its transition. A rejected
    /// command changes nothing on screen and is only reported.
    pub fn dispatch(&mut self, command: AxisCommand, now: f64) -> Result<ScaleDomain> {
        let previous = self.engine.selection().get(command.dimension);
        let result = self.engine.dispatch(command);

        let mut meta = RebindMeta {
            dimension: command.dimension,
            previous,
            field: command.field,
            domain: None,
            error: None,
        };
        let kinds = match &result {
            Ok(domain) => {
                self.scatter.on_rebound(&self.engine, command.dimension, now);
                meta.domain = Some(*domain);
                EventKind::LABEL_CLICKED | EventKind::AXIS_REBOUND
            }
            Err(e) => {
                debug!("label click ignored: {e}");
                meta.error = Some(e.to_string());
                EventKind::LABEL_CLICKED | EventKind::REBIND_REJECTED
            }
        };
        let mut event = ScatterEvent::new(kinds);
        event.rebind = Some(meta);
        self.emit(event);
        result
    }

    /// Finish transitions that have run their course and report them.
    pub fn settle_transitions(&mut self, now: f64) {
        for dimension in self.scatter.settle(now) {
            let field = self.engine.selection().get(dimension);
            debug!("{dimension} transition to {field} finished");
            let mut event = ScatterEvent::new(EventKind::TRANSITION_FINISHED);
            event.transition = Some(TransitionMeta { dimension, field });
            self.emit(event);
        }
    }

    fn report_hover(&mut self) {
        let hovered = self.scatter.hovered();
        if hovered == self.last_hovered {
            return;
        }
        self.last_hovered = hovered;
        let Some(index) = hovered else {
            return;
        };
        if let Some(record) = self.engine.dataset().records().get(index) {
            let mut event = ScatterEvent::new(EventKind::POINT_HOVERED);
            event.hover = Some(HoverMeta {
                index,
                state: record.state.clone(),
                abbr: record.abbr.clone(),
            });
            self.emit(event);
        }
    }

    fn emit(&self, event: ScatterEvent) {
        if let Some(ctrl) = &self.events {
            ctrl.emit(event);
        }
    }

    fn render(&mut self, ctx: &egui::Context, now: f64) -> Option<AxisCommand> {
        let mut command = None;

        if let Some(headline) = &self.headline {
            egui::TopBottomPanel::top("headline").show(ctx, |ui| {
                ui.heading(headline);
            });
        }

        if self.features.analysis_panel && self.analysis.state().visible {
            egui::SidePanel::right("analysis_panel")
                .resizable(true)
                .default_width(260.0)
                .show(ctx, |ui| {
                    self.analysis.render_panel(ui, &self.engine);
                });
        }

        egui::TopBottomPanel::bottom("x_labels").show(ctx, |ui| {
            if let Some(c) = self.x_labels.render_panel(ui, &self.engine) {
                command = Some(c);
            }
        });

        egui::SidePanel::left("y_labels")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(ui.available_height() * 0.4);
                if let Some(c) = self.y_labels.render_panel(ui, &self.engine) {
                    command = Some(c);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.scatter.render_plot(ui, &self.engine, now);
        });

        command
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        if let Some(command) = self.render(ctx, now) {
            // Rejections are already logged and reported as events.
            let _ = self.dispatch(command, now);
        }
        self.report_hover();
        self.settle_transitions(now);

        if self.scatter.is_animating(now) {
            ctx.request_repaint();
        }
    }
}
