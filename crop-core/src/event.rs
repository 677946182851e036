//! Region change notifications.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Notifications published by the region when its state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CropEvent {
    /// The region's extent changed.
    AreaResize,
    /// The region's position changed.
    AreaMove,
}

impl CropEvent {
    /// Stable wire name of this event.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AreaResize => "area-resize",
            Self::AreaMove => "area-move",
        }
    }
}

/// Fire-and-forget sink for region notifications.
///
/// The region only publishes; it never subscribes. `publish` takes `&self` -
/// the engine is single-threaded and implementations use interior
/// mutability where they need state.
pub trait EventBus {
    /// Publish a single event.
    fn publish(&self, event: CropEvent);
}

/// A bus that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBus;

impl EventBus for NullBus {
    fn publish(&self, _event: CropEvent) {}
}

/// A bus that records events for later inspection.
///
/// Cloning shares the underlying buffer, so a handle kept by the caller
/// observes everything published through the clone handed to the region.
#[derive(Debug, Clone, Default)]
pub struct RecordingBus {
    events: Rc<RefCell<Vec<CropEvent>>>,
}

impl RecordingBus {
    /// Create an empty recording bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events published so far.
    #[must_use]
    pub fn events(&self) -> Vec<CropEvent> {
        self.events.borrow().clone()
    }

    /// Drop all recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventBus for RecordingBus {
    fn publish(&self, event: CropEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(CropEvent::AreaResize.name(), "area-resize");
        assert_eq!(CropEvent::AreaMove.name(), "area-move");
    }

    #[test]
    fn test_serde_matches_wire_names() {
        let json = serde_json::to_string(&CropEvent::AreaResize).expect("serialize");
        assert_eq!(json, "\"area-resize\"");
        let back: CropEvent = serde_json::from_str("\"area-move\"").expect("deserialize");
        assert_eq!(back, CropEvent::AreaMove);
    }

    #[test]
    fn test_recording_bus_preserves_order() {
        let bus = RecordingBus::new();
        let handle = bus.clone();
        bus.publish(CropEvent::AreaResize);
        bus.publish(CropEvent::AreaMove);
        assert_eq!(handle.events(), vec![CropEvent::AreaResize, CropEvent::AreaMove]);

        handle.clear();
        assert!(bus.events().is_empty());
    }
}
