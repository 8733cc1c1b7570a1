use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as SlotMutex, OwnedMutexGuard};

use super::domain::IdeaId;

/// One async mutex per idea. Holding the guard means no other evaluation of that idea is in
/// flight, so the upsert at the end of an evaluation cannot interleave with another.
#[derive(Debug, Default)]
pub struct IdeaLocks {
    slots: Mutex<HashMap<IdeaId, Arc<SlotMutex<()>>>>,
}

pub type IdeaGuard = OwnedMutexGuard<()>;

impl IdeaLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, idea_id: &IdeaId) -> IdeaGuard {
        let slot = {
            let mut slots = self
                .slots
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            // Slots referenced only by the map have no holder or waiter.
            slots.retain(|_, slot| Arc::strong_count(slot) > 1);
            let slot = slots
                .entry(idea_id.clone())
                .or_insert_with(|| Arc::new(SlotMutex::new(())))
                .clone();
            slot
        };
        slot.lock_owned().await
    }

    /// Number of ideas with a held or awaited slot.
    pub fn active(&self) -> usize {
        let slots = self
            .slots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        slots
            .values()
            .filter(|slot| Arc::strong_count(slot) > 1)
            .count()
    }
}
