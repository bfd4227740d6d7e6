pub mod annotations;
pub mod axis;
pub mod dataset;
pub mod engine;
pub mod record;
pub mod scale;
pub mod transition;
