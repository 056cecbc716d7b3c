#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use crate::core::{
        session::{extend_deck, generate_deck},
        CardForgeError, CardSet, Flashcard,
    };

    fn deck_of(pairs: &[(&str, &str)]) -> CardSet {
        let mut set = CardSet::new();
        set.append_unique(pairs.iter().map(|(t, d)| Flashcard::new(*t, *d)).collect());
        set
    }

    #[tokio::test]
    async fn fresh_deck_preserves_reply_order() {
        let calls = Cell::new(0);
        let cards = generate_deck("Chemistry", |_prompt| {
            calls.set(calls.get() + 1);
            async { Ok("Atom: The smallest unit of an element\nIon: A charged atom".to_string()) }
        })
        .await
        .unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].term, "Atom");
        assert_eq!(cards[1].term, "Ion");
    }

    #[tokio::test]
    async fn empty_topic_is_rejected_before_any_request() {
        let calls = Cell::new(0);
        let result = generate_deck("   ", |_prompt| {
            calls.set(calls.get() + 1);
            async { Ok(String::new()) }
        })
        .await;

        assert!(matches!(result, Err(CardForgeError::Validation(_))));
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn unparseable_reply_is_an_empty_result() {
        let result = generate_deck("Chemistry", |_prompt| async {
            Ok("Sorry, I cannot help with that.".to_string())
        })
        .await;

        assert!(matches!(result, Err(CardForgeError::EmptyResult(_))));
    }

    #[tokio::test]
    async fn topic_is_embedded_in_the_prompt() {
        let seen = RefCell::new(String::new());
        let _ = generate_deck("Photosynthesis", |prompt| {
            *seen.borrow_mut() = prompt;
            async { Ok("Chlorophyll: green pigment".to_string()) }
        })
        .await
        .unwrap();

        assert!(seen.borrow().contains("Photosynthesis"));
    }

    #[tokio::test]
    async fn extension_drops_known_terms_case_insensitively() {
        let existing = deck_of(&[("Paris", "Capital of France"), ("Lyon", "City on the Rhône")]);

        let fresh = extend_deck("France", &existing, |_prompt| async {
            Ok("paris: should be dropped\nMarseille: port city\nLYON: also dropped".to_string())
        })
        .await
        .unwrap();

        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].term, "Marseille");
    }

    #[tokio::test]
    async fn extension_with_only_duplicates_is_an_empty_result() {
        let existing = deck_of(&[("Paris", "Capital of France")]);

        let result = extend_deck("France", &existing, |_prompt| async {
            Ok("PARIS: nothing new here".to_string())
        })
        .await;

        assert!(matches!(result, Err(CardForgeError::EmptyResult(_))));
    }

    #[tokio::test]
    async fn extension_requires_an_existing_deck() {
        let calls = Cell::new(0);
        let result = extend_deck("France", &CardSet::new(), |_prompt| {
            calls.set(calls.get() + 1);
            async { Ok(String::new()) }
        })
        .await;

        assert!(matches!(result, Err(CardForgeError::Validation(_))));
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn known_terms_are_joined_into_the_extension_prompt() {
        let existing = deck_of(&[("Paris", "1"), ("Lyon", "2")]);
        let seen = RefCell::new(String::new());

        let _ = extend_deck("France", &existing, |prompt| {
            *seen.borrow_mut() = prompt;
            async { Ok("Marseille: port city".to_string()) }
        })
        .await
        .unwrap();

        let prompt = seen.borrow();
        assert!(prompt.contains("Paris, Lyon"));
        assert!(prompt.contains("France"));
    }

    #[tokio::test]
    async fn a_failing_generator_maps_to_a_generation_error() {
        let existing = deck_of(&[("Paris", "Capital of France")]);
        let before = existing.clone();

        let result = extend_deck("France", &existing, |_prompt| async {
            Err(CardForgeError::EmptyResult("boom".to_string()))
        })
        .await;

        match result {
            Err(CardForgeError::Generation(message)) => assert!(message.contains("boom")),
            other => panic!("expected a Generation error, got {:?}", other),
        }

        // Failure leaves the deck exactly as it was.
        assert_eq!(existing.cards(), before.cards());
    }
}
