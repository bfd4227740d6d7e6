//! Text shown alongside the chart: point tooltips and the per-axis commentary.

use crate::data::axis::AxisSelection;
use crate::data::record::{Field, Record};

pub fn format_value(field: Field, value: f64) -> String {
    format!("{}: {}{}", field.name(), value, field.unit())
}

/// Tooltip for a hovered point: state name, then the X and Y readings.
pub fn tooltip_text(record: &Record, selection: &AxisSelection) -> String {
    format!(
        "{}\n{}\n{}",
        record.state,
        format_value(selection.x, record.value(selection.x)),
        format_value(selection.y, record.value(selection.y)),
    )
}

/// Commentary for the active X field. Only the X axis drives it.
pub fn analysis_text(x_field: Field) -> &'static str {
    match x_field {
        Field::Poverty => {
            "The increase of poverty percentage is strongly related to the increase of obesity, smokes, and lack healthcare."
        }
        Field::Age => {
            "Ages between 36 to 40 years old indicate seriously high obesity, smokes, and lack healthcare percentages."
        }
        _ => {
            "Income below $55.000 US dollars is most likely to result in obesity, smokes, and lack healthcare."
        }
    }
}
