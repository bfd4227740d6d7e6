pub mod analysis_ui;
pub mod axis_labels_ui;
pub mod panel_trait;
pub mod scatter_ui;

pub use analysis_ui::AnalysisPanel;
pub use axis_labels_ui::AxisLabelsPanel;
pub use panel_trait::{Panel, PanelState};
pub use scatter_ui::ScatterPanel;
