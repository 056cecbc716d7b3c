use crate::core::Flashcard;

/// Parse the model's free-text reply into term/definition pairs.
///
/// One card per line; the first colon splits term from definition and any
/// later colons stay in the definition verbatim. Lines with no colon, or
/// with an empty side after trimming, are dropped silently.
pub fn parse_cards(raw: &str) -> Vec<Flashcard> {
    raw.lines()
        .filter_map(|line| {
            let (term, definition) = line.split_once(':')?;
            let term = term.trim();
            let definition = definition.trim();
            if term.is_empty() || definition.is_empty() {
                return None;
            }
            Some(Flashcard::new(term, definition))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_cards;

    #[test]
    fn parses_lines_in_order() {
        let cards = parse_cards("A: 1\nB: 2");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].term, "A");
        assert_eq!(cards[0].definition, "1");
        assert_eq!(cards[1].term, "B");
        assert_eq!(cards[1].definition, "2");
    }

    #[test]
    fn line_without_colon_yields_nothing() {
        assert!(parse_cards("NoColonHere").is_empty());
    }

    #[test]
    fn empty_term_is_rejected() {
        assert!(parse_cards(": empty term").is_empty());
        assert!(parse_cards("   : spaced out").is_empty());
    }

    #[test]
    fn empty_definition_is_rejected() {
        assert!(parse_cards("Term:").is_empty());
        assert!(parse_cards("Term:   ").is_empty());
    }

    #[test]
    fn only_the_first_colon_delimits() {
        let cards = parse_cards("Ratio: 3:2");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].term, "Ratio");
        assert_eq!(cards[0].definition, "3:2");
    }

    #[test]
    fn malformed_lines_are_skipped_without_affecting_neighbors() {
        let raw = "Mitochondria: powerhouse of the cell\n\njust a stray line\n: nope\nRibosome: builds proteins";
        let cards = parse_cards(raw);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].term, "Mitochondria");
        assert_eq!(cards[1].term, "Ribosome");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let cards = parse_cards("  Enzyme  :  a biological catalyst  ");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].term, "Enzyme");
        assert_eq!(cards[0].definition, "a biological catalyst");
    }

    #[test]
    fn carriage_returns_are_tolerated() {
        let cards = parse_cards("A: 1\r\nB: 2\r\n");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].definition, "2");
    }
}
