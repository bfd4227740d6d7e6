mod common;

use float_cmp::approx_eq;
use healthscatter::{
    AxisBindingEngine, AxisCommand, AxisPadding, AxisSelection, Dataset, Dimension, Field, Paddings,
    ScatterError, SelectionRejection,
};

fn engine() -> AxisBindingEngine {
    AxisBindingEngine::with_defaults(common::three_states()).unwrap()
}

#[test]
fn starts_on_poverty_and_obesity() {
    let e = AxisBindingEngine::with_defaults(common::two_states()).unwrap();
    assert_eq!(e.selection(), AxisSelection { x: Field::Poverty, y: Field::Obesity });
    let x = e.domain(Dimension::X);
    let y = e.domain(Dimension::Y);
    assert!(approx_eq!(f64, x.min, 8.0, epsilon = 1e-9));
    assert!(approx_eq!(f64, x.max, 33.0, epsilon = 1e-9));
    assert!(approx_eq!(f64, y.min, 10.0, epsilon = 1e-9));
    assert!(approx_eq!(f64, y.max, 44.0, epsilon = 1e-9));
}

#[test]
fn rebind_x_leaves_y_alone() {
    let mut e = engine();
    let y_before = e.domain(Dimension::Y);
    let d = e.rebind(Dimension::X, "age").unwrap();
    assert_eq!(e.selection().x, Field::Age);
    assert_eq!(e.selection().y, Field::Obesity);
    assert_eq!(e.domain(Dimension::X), d);
    assert_eq!(e.domain(Dimension::Y), y_before);
    assert!(approx_eq!(f64, d.min, 24.0, epsilon = 1e-9));
    assert!(approx_eq!(f64, d.max, 44.0, epsilon = 1e-9));
}

#[test]
fn rebind_y_leaves_x_alone() {
    let mut e = engine();
    let x_before = e.domain(Dimension::X);
    let d = e.rebind(Dimension::Y, "healthcare").unwrap();
    assert_eq!(e.selection().x, Field::Poverty);
    assert_eq!(e.domain(Dimension::X), x_before);
    assert!(approx_eq!(f64, d.min, 4.0, epsilon = 1e-9));
    assert!(approx_eq!(f64, d.max, 17.6, epsilon = 1e-9));
}

#[test]
fn rebinding_the_active_field_is_rejected_without_change() {
    let mut e = engine();
    let before = (e.selection(), e.domain(Dimension::X), e.domain(Dimension::Y));
    let err = e.rebind(Dimension::X, "poverty").unwrap_err();
    assert!(matches!(
        err,
        ScatterError::InvalidSelection {
            dimension: Dimension::X,
            field: Field::Poverty,
            reason: SelectionRejection::AlreadyActive,
        }
    ));
    assert_eq!(before, (e.selection(), e.domain(Dimension::X), e.domain(Dimension::Y)));
}

#[test]
fn field_of_the_other_dimension_is_rejected() {
    let mut e = engine();
    let err = e.rebind(Dimension::X, "smokes").unwrap_err();
    assert!(matches!(
        err,
        ScatterError::InvalidSelection {
            reason: SelectionRejection::NotACandidate,
            ..
        }
    ));
    assert_eq!(e.selection().x, Field::Poverty);
}

#[test]
fn unknown_field_name_is_rejected() {
    let mut e = engine();
    assert!(matches!(e.rebind(Dimension::Y, "weight"), Err(ScatterError::InvalidField(_))));
    assert_eq!(e.selection(), AxisSelection::default());
}

#[test]
fn switching_back_restores_the_initial_domain() {
    let mut e = engine();
    let initial = e.domain(Dimension::X);
    e.rebind(Dimension::X, "income").unwrap();
    e.rebind(Dimension::X, "poverty").unwrap();
    assert_eq!(e.domain(Dimension::X), initial);
}

#[test]
fn every_label_command_is_either_rebound_or_already_active() {
    let mut e = engine();
    for command in AxisCommand::all() {
        let was_active = e.is_active(command.dimension, command.field);
        let result = e.dispatch(command);
        assert_eq!(result.is_err(), was_active, "{command:?}");
        assert!(e.is_active(command.dimension, command.field));
    }
    assert_eq!(AxisCommand::all().count(), 6);
}

#[test]
fn empty_dataset_cannot_be_bound() {
    let err = AxisBindingEngine::with_defaults(Dataset::default()).err();
    assert!(matches!(err, Some(ScatterError::EmptyDataset)));
}

#[test]
fn custom_paddings_are_used() {
    let paddings = Paddings {
        x: AxisPadding::new(0.5, 1.0).unwrap(),
        y: AxisPadding::new(0.9, 1.2).unwrap(),
    };
    let e = AxisBindingEngine::new(common::two_states(), AxisSelection::default(), paddings).unwrap();
    assert_eq!(e.paddings(), paddings);
    assert!(approx_eq!(f64, e.domain(Dimension::X).min, 5.0, epsilon = 1e-9));
    assert!(approx_eq!(f64, e.domain(Dimension::X).max, 30.0, epsilon = 1e-9));
    assert!(approx_eq!(f64, e.domain(Dimension::Y).min, 18.0, epsilon = 1e-9));
    assert!(approx_eq!(f64, e.domain(Dimension::Y).max, 48.0, epsilon = 1e-9));
}

#[test]
fn invalid_initial_selection_is_rejected() {
    let selection = AxisSelection { x: Field::Obesity, y: Field::Obesity };
    let err = AxisBindingEngine::new(common::two_states(), selection, Paddings::default()).err();
    assert!(matches!(
        err,
        Some(ScatterError::InvalidSelection { dimension: Dimension::X, .. })
    ));
}

#[test]
fn invalid_padding_is_rejected_at_construction() {
    let paddings = Paddings {
        x: AxisPadding { low: 0.0, high: 1.1 },
        y: AxisPadding::Y_DEFAULT,
    };
    let err = AxisBindingEngine::new(common::two_states(), AxisSelection::default(), paddings).err();
    assert!(matches!(err, Some(ScatterError::InvalidPadding { .. })));
}

#[test]
fn inverted_padding_built_by_hand_is_rejected() {
    let paddings = Paddings {
        x: AxisPadding { low: 1.2, high: 0.9 },
        y: AxisPadding::Y_DEFAULT,
    };
    let err = AxisBindingEngine::new(common::two_states(), AxisSelection::default(), paddings).err();
    assert!(matches!(err, Some(ScatterError::InvalidPadding { low, high }) if low == 1.2 && high == 0.9));
}
