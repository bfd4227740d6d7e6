//! Timed, linear transitions of one chart dimension between two bindings.
//!
//! Points are kept in unit space: each record's position along a dimension is
//! its value normalized over that dimension's domain. A rebind moves every
//! position from the old normalization to the new one while the axis domain
//! (used for tick labels) blends between the old and new domain. Times are
//! seconds on whatever monotonic clock the caller uses (egui's input time).

use std::time::Duration;

use crate::data::axis::{Dimension, ScaleDomain};
use crate::data::dataset::Dataset;
use crate::data::record::Field;
use crate::data::scale::LinearScale;

/// Normalized positions of every record for `field` over `domain`.
pub fn unit_positions(dataset: &Dataset, field: Field, domain: ScaleDomain) -> Vec<f64> {
    let scale = LinearScale::unit(domain);
    dataset.values(field).map(|v| scale.normalize(v)).collect()
}

/// One in-flight transition.
#[derive(Debug, Clone)]
pub struct AxisTransition {
    from_positions: Vec<f64>,
    to_positions: Vec<f64>,
    from_domain: ScaleDomain,
    to_domain: ScaleDomain,
    start: f64,
    duration: f64,
}

impl AxisTransition {
    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn domain_at(&self, now: f64) -> ScaleDomain {
        self.from_domain.lerp(&self.to_domain, self.progress(now))
    }

    pub fn position(&self, index: usize, now: f64) -> f64 {
        let t = self.progress(now);
        let a = self.from_positions[index];
        let b = self.to_positions[index];
        a + (b - a) * t
    }

    pub fn positions_at(&self, now: f64) -> Vec<f64> {
        (0..self.to_positions.len()).map(|i| self.position(i, now)).collect()
    }
}

/// Animated state of one dimension: its settled binding plus an optional
/// transition towards it.
#[derive(Debug, Clone)]
pub struct AxisAnimator {
    dimension: Dimension,
    field: Field,
    domain: ScaleDomain,
    positions: Vec<f64>,
    duration: Duration,
    transition: Option<AxisTransition>,
}

impl AxisAnimator {
    pub fn new(dimension: Dimension, dataset: &Dataset, field: Field, domain: ScaleDomain, duration: Duration) -> Self {
        Self {
            dimension,
            field,
            domain,
            positions: unit_positions(dataset, field, domain),
            duration,
            transition: None,
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Field the dimension is (or is transitioning to be) bound to.
    pub fn field(&self) -> Field {
        self.field
    }

    /// Start moving towards a new binding. If a transition is already running
    /// the new one starts from its current interpolated state.
    pub fn retarget(&mut self, dataset: &Dataset, field: Field, domain: ScaleDomain, now: f64) {
        let from_positions = self.positions_at(now);
        let from_domain = self.domain_at(now);
        let to_positions = unit_positions(dataset, field, domain);
        self.transition = Some(AxisTransition {
            from_positions,
            to_positions: to_positions.clone(),
            from_domain,
            to_domain: domain,
            start: now,
            duration: self.duration.as_secs_f64(),
        });
        self.field = field;
        self.domain = domain;
        self.positions = to_positions;
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.transition.as_ref().is_some_and(|t| !t.is_finished(now))
    }

    pub fn domain_at(&self, now: f64) -> ScaleDomain {
        match &self.transition {
            Some(t) => t.domain_at(now),
            None => self.domain,
        }
    }

    pub fn positions_at(&self, now: f64) -> Vec<f64> {
        match &self.transition {
            Some(t) => t.positions_at(now),
            None => self.positions.clone(),
        }
    }

    /// Drop a completed transition. Returns `true` exactly once per transition.
    pub fn settle(&mut self, now: f64) -> bool {
        if self.transition.as_ref().is_some_and(|t| t.is_finished(now)) {
            self.transition = None;
            true
        } else {
            false
        }
    }
}
