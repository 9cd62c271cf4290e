//! Transport-facing fan-out.
//!
//! The socket layer registers one sender per connection; the core emits
//! through [`GameHub`] and never learns transport identity beyond the player
//! id. Sending to a missing or departed connection is a no-op: disconnect
//! races are routine, not errors.

use dashmap::DashMap;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::domain::PlayerId;
use crate::ws::protocol::GameEvent;

/// Outbound capability surface of the session core.
pub trait GameHub: Send + Sync {
    fn broadcast(&self, event: &GameEvent);
    fn unicast(&self, id: PlayerId, event: &GameEvent);
}

/// Channel-backed [`GameHub`]: one unbounded sender per registered
/// connection. Simulated players never register, so unicasts aimed at them
/// fall through silently.
#[derive(Default)]
pub struct ConnectionRegistry {
    connections: DashMap<PlayerId, UnboundedSender<GameEvent>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    /// Register a connection and hand back the receiving half the transport
    /// task drains.
    pub fn register(&self, id: PlayerId) -> UnboundedReceiver<GameEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.connections.insert(id, tx);
        rx
    }

    pub fn unregister(&self, id: PlayerId) {
        self.connections.remove(&id);
    }
}

impl GameHub for ConnectionRegistry {
    fn broadcast(&self, event: &GameEvent) {
        for entry in self.connections.iter() {
            // A closed receiver just means the connection is going away.
            let _ = entry.value().send(event.clone());
        }
    }

    fn unicast(&self, id: PlayerId, event: &GameEvent) {
        if let Some(sender) = self.connections.get(&id) {
            let _ = sender.send(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn broadcast_reaches_every_registered_connection() {
        let registry = ConnectionRegistry::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let mut rx_a = registry.register(a);
        let mut rx_b = registry.register(b);

        registry.broadcast(&GameEvent::GameStarting);

        assert_eq!(rx_a.try_recv().unwrap(), GameEvent::GameStarting);
        assert_eq!(rx_b.try_recv().unwrap(), GameEvent::GameStarting);
    }

    #[test]
    fn unicast_to_unknown_id_is_a_noop() {
        let registry = ConnectionRegistry::new();
        registry.unicast(Uuid::new_v4(), &GameEvent::GameStarting);
    }

    #[test]
    fn unregistered_connections_stop_receiving() {
        let registry = ConnectionRegistry::new();
        let id = Uuid::new_v4();
        let mut rx = registry.register(id);
        registry.unregister(id);

        registry.broadcast(&GameEvent::GameStarting);
        registry.unicast(id, &GameEvent::GameStarting);

        assert!(rx.try_recv().is_err());
    }
}
