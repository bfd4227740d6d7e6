//! Event system for the scatter view.
//!
//! Callers can subscribe to UI events via [`EventController`].  Each event
//! carries a set of [`EventKind`] flags so that a single occurrence can match
//! multiple categories (e.g. a rejected rebind is *also* a `LABEL_CLICKED`).
//!
//! The caller specifies an [`EventFilter`] to receive only the events they
//! care about.  The filter is a simple OR mask: an event is delivered when
//! `(event.kinds & filter) != 0`.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::data::axis::{Dimension, ScaleDomain};
use crate::data::record::Field;

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing the *categories* an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u64);

impl EventKind {
    /// An axis label was clicked, whether or not it changed anything.
    pub const LABEL_CLICKED: Self = Self(1 << 0);
    /// A dimension was rebound to a new field.
    pub const AXIS_REBOUND: Self = Self(1 << 1);
    /// A rebind request was refused by the engine.
    pub const REBIND_REJECTED: Self = Self(1 << 2);
    /// The pointer started hovering a data point.
    pub const POINT_HOVERED: Self = Self(1 << 3);
    /// A rebind transition reached its end.
    pub const TRANSITION_FINISHED: Self = Self(1 << 4);

    /// Wildcard: matches *every* event kind.
    pub const ALL: Self = Self(u64::MAX);

    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether `self` contains all bits in `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether `self` intersects with `other` (at least one bit in common).
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for EventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for EventKind {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == EventKind::ALL {
            return write!(f, "ALL");
        }

        let pairs: &[(EventKind, &str)] = &[
            (EventKind::LABEL_CLICKED, "LABEL_CLICKED"),
            (EventKind::AXIS_REBOUND, "AXIS_REBOUND"),
            (EventKind::REBIND_REJECTED, "REBIND_REJECTED"),
            (EventKind::POINT_HOVERED, "POINT_HOVERED"),
            (EventKind::TRANSITION_FINISHED, "TRANSITION_FINISHED"),
        ];

        let mut names = Vec::new();
        let mut known_bits: u64 = 0;
        for (kind, name) in pairs {
            known_bits |= kind.0;
            if self.contains(*kind) {
                names.push((*name).to_string());
            }
        }

        let extra = self.0 & !known_bits;
        if extra != 0 {
            names.push(format!("0x{:x}", extra));
        }
        write!(f, "{}", names.join("|"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Metadata
// ─────────────────────────────────────────────────────────────────────────────

/// Metadata for label clicks and rebinds.
#[derive(Debug, Clone)]
pub struct RebindMeta {
    pub dimension: Dimension,
    /// Field that was active before the click.
    pub previous: Field,
    /// Field that was clicked.
    pub field: Field,
    /// New domain, set only when the rebind succeeded.
    pub domain: Option<ScaleDomain>,
    /// Engine error message when the rebind was refused.
    pub error: Option<String>,
}

/// Metadata for hover events.
#[derive(Debug, Clone)]
pub struct HoverMeta {
    /// Index of the record in the dataset.
    pub index: usize,
    pub state: String,
    pub abbr: String,
}

#[derive(Debug, Clone, Copy)]
pub struct TransitionMeta {
    pub dimension: Dimension,
    pub field: Field,
}

// ─────────────────────────────────────────────────────────────────────────────
// ScatterEvent
// ─────────────────────────────────────────────────────────────────────────────

/// An event emitted by the scatter UI.
#[derive(Debug, Clone)]
pub struct ScatterEvent {
    pub kinds: EventKind,
    /// Seconds since the controller was created; set on emit.
    pub timestamp: f64,

    pub rebind: Option<RebindMeta>,
    pub hover: Option<HoverMeta>,
    pub transition: Option<TransitionMeta>,
}

impl ScatterEvent {
    pub fn new(kinds: EventKind) -> Self {
        Self {
            kinds,
            timestamp: 0.0,
            rebind: None,
            hover: None,
            transition: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventFilter
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    pub const fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    pub const fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    #[inline]
    pub fn matches(&self, event: &ScatterEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

struct Subscriber {
    filter: EventFilter,
    sender: Sender<ScatterEvent>,
}

/// Controller that distributes UI events to subscribers.
///
/// Attach it to [`ScatterConfig`](crate::config::ScatterConfig) before
/// launching the UI, then call [`subscribe`](Self::subscribe) to receive
/// events on an `mpsc` channel.
#[derive(Clone)]
pub struct EventController {
    inner: Arc<Mutex<EventCtrlInner>>,
}

struct EventCtrlInner {
    subscribers: Vec<Subscriber>,
    start_instant: std::time::Instant,
}

impl EventController {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventCtrlInner {
                subscribers: Vec::new(),
                start_instant: std::time::Instant::now(),
            })),
        }
    }

    /// Subscribe to events whose kinds intersect the filter mask.
    pub fn subscribe(&self, filter: EventFilter) -> Receiver<ScatterEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        if let Ok(mut inner) = self.inner.lock() {
            inner.subscribers.push(Subscriber { filter, sender: tx });
        }
        rx
    }

    pub fn subscribe_all(&self) -> Receiver<ScatterEvent> {
        self.subscribe(EventFilter::all())
    }

    /// Send an event to every matching subscriber. Subscribers whose receiver
    /// was dropped are removed the next time an event matches them.
    pub fn emit(&self, mut event: ScatterEvent) {
        let Ok(mut inner) = self.inner.lock() else {
            return;
        };
        event.timestamp = inner.start_instant.elapsed().as_secs_f64();
        inner.subscribers.retain(|sub| {
            if sub.filter.matches(&event) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().map(|i| i.subscribers.len()).unwrap_or(0)
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_union_and_intersection() {
        let click = EventKind::LABEL_CLICKED;
        let rebound = EventKind::AXIS_REBOUND;
        let combined = click | rebound;
        assert!(combined.contains(click));
        assert!(combined.contains(rebound));
        assert!(!EventKind::POINT_HOVERED.intersects(combined));
    }

    #[test]
    fn event_filter_matches() {
        let filter = EventFilter::only(EventKind::AXIS_REBOUND | EventKind::REBIND_REJECTED);
        assert!(filter.matches(&ScatterEvent::new(EventKind::AXIS_REBOUND)));
        assert!(filter.matches(&ScatterEvent::new(
            EventKind::LABEL_CLICKED | EventKind::REBIND_REJECTED
        )));
        assert!(!filter.matches(&ScatterEvent::new(EventKind::POINT_HOVERED)));
    }

    #[test]
    fn event_controller_subscribe_and_emit() {
        let ctrl = EventController::new();
        let rx_all = ctrl.subscribe_all();
        let rx_rebind = ctrl.subscribe(EventFilter::only(EventKind::AXIS_REBOUND));
        let rx_hover = ctrl.subscribe(EventFilter::only(EventKind::POINT_HOVERED));

        ctrl.emit(ScatterEvent::new(EventKind::LABEL_CLICKED | EventKind::AXIS_REBOUND));

        assert!(rx_all.try_recv().is_ok());
        assert!(rx_rebind.try_recv().is_ok());
        assert!(rx_hover.try_recv().is_err());
    }

    #[test]
    fn timestamp_set_on_emit() {
        let ctrl = EventController::new();
        let rx = ctrl.subscribe_all();
        std::thread::sleep(std::time::Duration::from_millis(10));
        ctrl.emit(ScatterEvent::new(EventKind::TRANSITION_FINISHED));
        let evt = rx.try_recv().unwrap();
        assert!(evt.timestamp > 0.0);
    }

    #[test]
    fn event_kind_display() {
        assert_eq!(format!("{}", EventKind::AXIS_REBOUND), "AXIS_REBOUND");
        let combo = EventKind::LABEL_CLICKED | EventKind::REBIND_REJECTED;
        assert_eq!(format!("{}", combo), "LABEL_CLICKED|REBIND_REJECTED");
        assert_eq!(format!("{}", EventKind::ALL), "ALL");
        assert!(format!("{}", EventKind(1 << 63)).starts_with("0x"));
    }

    #[test]
    fn dropped_receiver_is_cleaned_up() {
        let ctrl = EventController::new();
        let rx1 = ctrl.subscribe_all();
        let rx2 = ctrl.subscribe_all();
        drop(rx1);

        ctrl.emit(ScatterEvent::new(EventKind::POINT_HOVERED));
        assert!(rx2.try_recv().is_ok());
        assert_eq!(ctrl.subscriber_count(), 1);
    }
}
