use egui::Ui;

use crate::data::engine::{AxisBindingEngine, AxisCommand};

#[derive(Debug, Clone, Copy)]
pub struct PanelState {
    pub visible: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self { visible: true }
    }
}

/// A docked UI section that reads the engine and may request a rebind.
pub trait Panel {
    fn title(&self) -> &'static str;
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    /// Draw the panel. A returned command is dispatched by the app after the frame's UI pass.
    fn render_panel(&mut self, _ui: &mut Ui, _engine: &AxisBindingEngine) -> Option<AxisCommand> {
        None
    }
}
