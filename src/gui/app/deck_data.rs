use crate::core::CardSet;

/// Everything tied to the currently loaded deck. Replaced wholesale when
/// a new topic is generated, only appended to when the deck is extended.
#[derive(Debug, Clone, Default)]
pub struct DeckData {
    pub topic: String,
    pub cards: CardSet,
}
