use std::sync::{Arc, Mutex, PoisonError};

use super::source::{EventSource, Subscription};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Pen,
    Touch,
}

impl From<&str> for PointerKind {
    /// Maps a DOM `pointerType`. Unknown types are treated as a mouse.
    fn from(value: &str) -> Self {
        match value {
            "touch" => Self::Touch,
            "pen" => Self::Pen,
            _ => Self::Mouse,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub kind: PointerKind,
}

impl PointerSample {
    pub fn mouse(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            kind: PointerKind::Mouse,
        }
    }
}

/// Viewport coordinates, no clamping applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// Follows the pointer for the cursor glow.
///
/// Touch samples are ignored, so on touch-only devices the position stays at
/// whatever was last seen (the origin if nothing was).
pub struct PointerTracker {
    position: Arc<Mutex<PointerPosition>>,
    changes: EventSource<PointerPosition>,
    registration: Subscription,
}

impl PointerTracker {
    pub fn mount(source: &EventSource<PointerSample>) -> Self {
        let position = Arc::new(Mutex::new(PointerPosition::default()));
        let changes = EventSource::new();

        let registration = {
            let position = Arc::clone(&position);
            let changes = changes.clone();
            source.subscribe(move |sample: &PointerSample| {
                if sample.kind == PointerKind::Touch {
                    return;
                }
                let next = PointerPosition {
                    x: sample.x,
                    y: sample.y,
                };
                *position.lock().unwrap_or_else(PoisonError::into_inner) = next;
                changes.emit(&next);
            })
        };

        Self {
            position,
            changes,
            registration,
        }
    }

    pub fn position(&self) -> PointerPosition {
        *self.position.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn on_change(
        &self,
        listener: impl Fn(&PointerPosition) + Send + Sync + 'static,
    ) -> Subscription {
        self.changes.subscribe(listener)
    }

    pub fn unmount(&self) {
        self.registration.cancel();
    }
}
