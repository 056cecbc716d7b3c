use crate::core::Flashcard;

pub type DeckResult = Result<Vec<Flashcard>, String>;

/// Results sent from worker threads back to the GUI thread.
#[derive(Debug, Clone)]
pub enum TaskResult {
    DeckGenerated(DeckResult),
    DeckExtended(DeckResult),
}
