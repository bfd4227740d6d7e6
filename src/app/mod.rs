//! Application wiring for the scatter view.
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | [`scatter_app`] | [`ScatterApp`]: engine, panels, label dispatch and per-frame update |
//! | [`run`]         | [`run_scatter()`] entry point that opens the native window |

mod run;
mod scatter_app;

pub use run::run_scatter;
pub use scatter_app::ScatterApp;
