use std::collections::HashMap;

use crate::editing::{Document, Patch};
use crate::models::{Node, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Node)>;

/// Attribute-change subscriptions, keyed by node.
///
/// After a command is applied, [`Observers::dispatch`] calls every listener
/// of every node in `patch.changed`, synchronously and in patch order.
/// Listeners of removed nodes are dropped.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    listeners: HashMap<NodeId, Vec<(SubscriptionId, Listener)>>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, node: NodeId, listener: impl FnMut(&Node) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(node)
            .or_default()
            .push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        for listeners in self.listeners.values_mut() {
            let before = listeners.len();
            listeners.retain(|(id, _)| *id != subscription);
            if listeners.len() != before {
                return true;
            }
        }
        false
    }

    pub fn subscriber_count(&self, node: NodeId) -> usize {
        self.listeners.get(&node).map_or(0, Vec::len)
    }

    pub fn dispatch(&mut self, document: &Document, patch: &Patch) {
        for id in &patch.removed {
            self.listeners.remove(id);
        }
        for id in &patch.changed {
            let (Some(node), Some(listeners)) = (document.node(*id), self.listeners.get_mut(id))
            else {
                continue;
            };
            for (_, listener) in listeners.iter_mut() {
                listener(node);
            }
        }
    }
}
