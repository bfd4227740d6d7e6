use egui::Ui;

use super::panel_trait::{Panel, PanelState};
use crate::data::annotations::analysis_text;
use crate::data::engine::{AxisBindingEngine, AxisCommand};

/// Commentary that follows the active X field.
#[derive(Default)]
pub struct AnalysisPanel {
    state: PanelState,
}

impl Panel for AnalysisPanel {
    fn title(&self) -> &'static str {
        "Analysis"
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, engine: &AxisBindingEngine) -> Option<AxisCommand> {
        ui.heading(format!("{} {}", egui_phosphor::regular::INFO, self.title()));
        ui.separator();
        ui.label(analysis_text(engine.selection().x));
        None
    }
}
