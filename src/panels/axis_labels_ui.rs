use egui::{RichText, Ui};

use super::panel_trait::{Panel, PanelState};
use crate::data::axis::Dimension;
use crate::data::engine::{AxisBindingEngine, AxisCommand};

/// The three clickable labels of one dimension. The active one is highlighted.
pub struct AxisLabelsPanel {
    dimension: Dimension,
    state: PanelState,
}

impl AxisLabelsPanel {
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            state: PanelState::default(),
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }
}

impl Panel for AxisLabelsPanel {
    fn title(&self) -> &'static str {
        match self.dimension {
            Dimension::X => "X Axis",
            Dimension::Y => "Y Axis",
        }
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, engine: &AxisBindingEngine) -> Option<AxisCommand> {
        let mut clicked = None;
        ui.vertical_centered(|ui| {
            for &field in engine.candidates(self.dimension) {
                let active = engine.is_active(self.dimension, field);
                let text = if active {
                    RichText::new(field.label()).strong()
                } else {
                    RichText::new(field.label()).weak()
                };
                if ui
                    .selectable_label(active, text)
                    .on_hover_text(format!("Plot {} on the {} axis", field.name(), self.dimension))
                    .clicked()
                {
                    clicked = Some(AxisCommand::new(self.dimension, field));
                }
            }
        });
        clicked
    }
}
