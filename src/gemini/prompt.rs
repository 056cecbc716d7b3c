// Both prompts ask for bare "Term: Definition" lines so the reply can be
// fed straight to the parser without stripping any markup.

pub fn topic_prompt(topic: &str) -> String {
    format!(
        "Generate a list of 10 to 15 study flashcards about \"{}\". \
         Respond with one flashcard per line in the exact format \
         Term: Definition. Do not number the lines and do not add any text \
         before or after the list.",
        topic
    )
}

pub fn extend_prompt(topic: &str, known_terms: &[&str]) -> String {
    format!(
        "I already have flashcards about \"{}\" for these terms: {}. \
         Generate 5 to 10 additional flashcards about \"{}\" that do not \
         repeat any of those terms. Respond with one flashcard per line in \
         the exact format Term: Definition, with no other text.",
        topic,
        known_terms.join(", "),
        topic
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_prompt_lists_known_terms() {
        let prompt = extend_prompt("France", &["Paris", "Lyon"]);
        assert!(prompt.contains("Paris, Lyon"));
        assert!(prompt.contains("France"));
    }

    #[test]
    fn prompts_pin_the_line_format() {
        assert!(topic_prompt("Biology").contains("Term: Definition"));
        assert!(extend_prompt("Biology", &["Cell"]).contains("Term: Definition"));
    }
}
