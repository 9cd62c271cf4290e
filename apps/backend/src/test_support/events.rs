//! Event capture for assertions.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::PlayerId;
use crate::ws::hub::GameHub;
use crate::ws::protocol::GameEvent;

/// A [`GameHub`] that records every emission for later inspection.
#[derive(Default)]
pub struct CaptureHub {
    broadcasts: Mutex<Vec<GameEvent>>,
    unicasts: Mutex<Vec<(PlayerId, GameEvent)>>,
}

impl CaptureHub {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn broadcasts(&self) -> Vec<GameEvent> {
        self.broadcasts.lock().clone()
    }

    pub fn unicasts(&self) -> Vec<(PlayerId, GameEvent)> {
        self.unicasts.lock().clone()
    }

    /// Every event unicast to one participant, in emission order.
    pub fn unicasts_to(&self, id: PlayerId) -> Vec<GameEvent> {
        self.unicasts
            .lock()
            .iter()
            .filter(|(to, _)| *to == id)
            .map(|(_, event)| event.clone())
            .collect()
    }

    pub fn count_broadcasts(&self, pred: impl Fn(&GameEvent) -> bool) -> usize {
        self.broadcasts.lock().iter().filter(|e| pred(e)).count()
    }

    pub fn clear(&self) {
        self.broadcasts.lock().clear();
        self.unicasts.lock().clear();
    }
}

impl GameHub for CaptureHub {
    fn broadcast(&self, event: &GameEvent) {
        self.broadcasts.lock().push(event.clone());
    }

    fn unicast(&self, id: PlayerId, event: &GameEvent) {
        self.unicasts.lock().push((id, event.clone()));
    }
}
