/// One term/definition pair produced by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub term: String,
    pub definition: String,
}

impl Flashcard {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Flashcard { term: term.into(), definition: definition.into() }
    }
}

/// Ordered deck of flashcards. Terms are unique under case-insensitive
/// comparison at all times; the definition plays no part in identity.
#[derive(Debug, Clone, Default)]
pub struct CardSet {
    cards: Vec<Flashcard>,
}

impl CardSet {
    pub fn new() -> Self {
        CardSet { cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().map(|card| card.term.as_str())
    }

    pub fn contains_term(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.cards.iter().any(|card| card.term.to_lowercase() == needle)
    }

    /// Append every card whose term is not already present, in order.
    /// Returns how many cards were actually added.
    pub fn append_unique(&mut self, new_cards: Vec<Flashcard>) -> usize {
        let mut added = 0;
        for card in new_cards {
            if self.contains_term(&card.term) {
                continue;
            }
            self.cards.push(card);
            added += 1;
        }
        added
    }

    /// Drop the current deck and rebuild it from `new_cards`. Duplicate
    /// terms within the batch keep their first occurrence.
    pub fn replace(&mut self, new_cards: Vec<Flashcard>) -> usize {
        self.cards.clear();
        self.append_unique(new_cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(term: &str, definition: &str) -> Flashcard {
        Flashcard::new(term, definition)
    }

    #[test]
    fn append_unique_drops_case_insensitive_duplicates() {
        let mut set = CardSet::new();
        set.append_unique(vec![card("Paris", "Capital of France")]);

        let added = set.append_unique(vec![
            card("paris", "a city"),
            card("Lyon", "a city on the Rhône"),
            card("PARIS", "again"),
        ]);

        assert_eq!(added, 1);
        assert_eq!(set.len(), 2);
        assert_eq!(set.cards()[1].term, "Lyon");
    }

    #[test]
    fn replace_keeps_first_occurrence_of_a_term() {
        let mut set = CardSet::new();
        set.append_unique(vec![card("Old", "gone after replace")]);

        let added = set.replace(vec![
            card("Osmosis", "diffusion of water"),
            card("osmosis", "duplicate"),
            card("Diffusion", "movement down a gradient"),
        ]);

        assert_eq!(added, 2);
        assert_eq!(set.cards()[0].definition, "diffusion of water");
        assert!(!set.contains_term("Old"));
    }

    #[test]
    fn terms_stay_unique_across_mixed_operations() {
        let mut set = CardSet::new();
        set.replace(vec![card("A", "1"), card("B", "2")]);
        set.append_unique(vec![card("b", "x"), card("C", "3")]);
        set.append_unique(vec![card("a", "y"), card("c", "z"), card("D", "4")]);

        let unique: std::collections::HashSet<String> =
            set.terms().map(|t| t.to_lowercase()).collect();
        assert_eq!(set.len(), 4);
        assert_eq!(unique.len(), set.len());
    }
}
