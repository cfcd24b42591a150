use tracing::debug;

use crate::alarm::AlarmId;
use crate::presenter::{Node, dom_id_for};

pub const CONTAINER_ID: &str = "rp-container-alarms";

/// Page region holding rendered alarm cards. Attaching is always an explicit
/// call; building an alarm or a card never touches the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmContainer {
    cards: Vec<Node>,
}

impl Default for AlarmContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl AlarmContainer {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends `card`. A card whose id is already shown is treated as a
    /// re-render of that alarm: it takes the old card's slot and the old card
    /// is returned. Callers that never re-render should treat `Some` as an id
    /// collision.
    pub fn attach(&mut self, card: Node) -> Option<Node> {
        if let Some(existing) = self
            .cards
            .iter_mut()
            .find(|existing| existing.id.is_some() && existing.id == card.id)
        {
            debug!(card = ?card.id, "replaced alarm card");
            return Some(std::mem::replace(existing, card));
        }
        debug!(card = ?card.id, "attached alarm card");
        self.cards.push(card);
        None
    }

    /// Removes the card of the alarm whose close affordance was used.
    pub fn detach(&mut self, id: &AlarmId) -> Option<Node> {
        let dom_id = dom_id_for(id);
        let position = self
            .cards
            .iter()
            .position(|card| card.id.as_deref() == Some(dom_id.as_str()))?;
        debug!(card = %dom_id, "detached alarm card");
        Some(self.cards.remove(position))
    }

    pub fn cards(&self) -> &[Node] {
        &self.cards
    }

    pub fn to_html(&self) -> String {
        let root = self
            .cards
            .iter()
            .cloned()
            .fold(Node::new("div").with_id(CONTAINER_ID), Node::with_child);
        root.to_html()
    }
}
