use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use super::schedule::Scheduler;
use super::source::{EventSource, Subscription, SubscriptionSlot};

/// The first `chars` characters of `text`, or all of it.
pub fn char_prefix(text: &str, chars: usize) -> &str {
    let end = text
        .char_indices()
        .nth(chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    &text[..end]
}

/// Reveals a fixed string one character per tick.
///
/// The count only grows. Once the whole string is shown the periodic task
/// cancels itself; `unmount` cancels it too, and either order is fine.
pub struct TypewriterEffect {
    text: Arc<str>,
    total: usize,
    revealed: Arc<AtomicUsize>,
    changes: EventSource<usize>,
    task: Arc<SubscriptionSlot>,
}

impl TypewriterEffect {
    pub fn mount(scheduler: &impl Scheduler, text: impl Into<Arc<str>>, interval: Duration) -> Self {
        let text = text.into();
        let total = text.chars().count();
        let revealed = Arc::new(AtomicUsize::new(0));
        let changes = EventSource::new();
        let task = Arc::new(SubscriptionSlot::new());

        let effect = Self {
            text,
            total,
            revealed,
            changes,
            task,
        };
        if total == 0 {
            return effect;
        }

        let tick = {
            let revealed = Arc::clone(&effect.revealed);
            let changes = effect.changes.clone();
            let slot: Weak<SubscriptionSlot> = Arc::downgrade(&effect.task);
            move || {
                let current = revealed.load(Ordering::SeqCst);
                if current < total {
                    let next = current + 1;
                    revealed.store(next, Ordering::SeqCst);
                    changes.emit(&next);
                }
                if revealed.load(Ordering::SeqCst) >= total {
                    if let Some(slot) = slot.upgrade() {
                        slot.cancel();
                    }
                }
            }
        };

        match scheduler.every(interval, Box::new(tick)) {
            Ok(task) => {
                effect.task.fill(task);
                // a scheduler that ran synchronously may already have finished
                if effect.is_complete() {
                    effect.task.cancel();
                }
            }
            Err(e) => {
                log::warn!("typewriter frozen at {} chars: {}", effect.revealed(), e);
            }
        }
        effect
    }

    pub fn revealed(&self) -> usize {
        self.revealed.load(Ordering::SeqCst)
    }

    pub fn revealed_text(&self) -> &str {
        char_prefix(&self.text, self.revealed())
    }

    pub fn full_text(&self) -> &str {
        &self.text
    }

    pub fn is_complete(&self) -> bool {
        self.revealed() >= self.total
    }

    /// Whether the periodic task is still installed.
    pub fn is_running(&self) -> bool {
        self.task.is_active()
    }

    pub fn on_change(&self, listener: impl Fn(&usize) + Send + Sync + 'static) -> Subscription {
        self.changes.subscribe(listener)
    }

    pub fn unmount(&self) {
        self.task.cancel();
    }
}

impl Drop for TypewriterEffect {
    fn drop(&mut self) {
        self.unmount();
    }
}
