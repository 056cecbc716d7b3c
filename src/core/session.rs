use std::future::Future;

use crate::{
    core::{parser::parse_cards, CardForgeError, CardSet, Flashcard},
    gemini::prompt,
};

/// Request a brand-new deck for `topic`.
///
/// `generate` is any async `prompt -> text` function: the GUI passes the
/// Gemini client, tests pass a canned stub. It is not invoked at all when
/// the topic fails validation.
pub async fn generate_deck<G, Fut>(
    topic: &str,
    generate: G,
) -> Result<Vec<Flashcard>, CardForgeError>
where
    G: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<String, CardForgeError>>,
{
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(CardForgeError::Validation(
            "Enter a topic to generate flashcards for.".to_string(),
        ));
    }

    let raw =
        generate(prompt::topic_prompt(topic)).await.map_err(CardForgeError::into_generation)?;

    let cards = parse_cards(&raw);
    if cards.is_empty() {
        return Err(CardForgeError::EmptyResult(
            "The reply contained no usable flashcards. Try again or rephrase the topic."
                .to_string(),
        ));
    }

    Ok(cards)
}

/// Request additional cards for an existing deck. Cards whose term the
/// deck already contains (case-insensitively) are dropped; the survivors
/// are returned in reply order for the caller to append.
pub async fn extend_deck<G, Fut>(
    topic: &str,
    existing: &CardSet,
    generate: G,
) -> Result<Vec<Flashcard>, CardForgeError>
where
    G: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<String, CardForgeError>>,
{
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(CardForgeError::Validation(
            "Enter a topic to generate flashcards for.".to_string(),
        ));
    }
    if existing.is_empty() {
        return Err(CardForgeError::Validation(
            "Generate a deck before asking for more cards.".to_string(),
        ));
    }

    let known: Vec<&str> = existing.terms().collect();
    let raw = generate(prompt::extend_prompt(topic, &known))
        .await
        .map_err(CardForgeError::into_generation)?;

    let fresh: Vec<Flashcard> = parse_cards(&raw)
        .into_iter()
        .filter(|card| !existing.contains_term(&card.term))
        .collect();

    if fresh.is_empty() {
        return Err(CardForgeError::EmptyResult(
            "The reply contained no new cards for this deck.".to_string(),
        ));
    }

    Ok(fresh)
}
