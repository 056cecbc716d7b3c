use std::{
    fs::File,
    io::{
        BufWriter,
        Write,
    },
    path::Path,
};

use crate::core::{
    CardForgeError,
    Flashcard,
};

/// Write the deck as tab-separated `term<TAB>definition` lines, the import
/// format Anki and similar tools accept. Tabs inside a field would shift
/// the columns, so they are replaced with spaces.
pub fn write_tsv(path: &Path, cards: &[Flashcard]) -> Result<(), CardForgeError> {
    let mut writer = BufWriter::new(File::create(path)?);

    for card in cards {
        writeln!(writer, "{}\t{}", clean_field(&card.term), clean_field(&card.definition))?;
    }

    writer.flush()?;
    Ok(())
}

fn clean_field(field: &str) -> String {
    field.replace('\t', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_in_fields_become_spaces() {
        assert_eq!(clean_field("a\tb"), "a b");
        assert_eq!(clean_field("plain"), "plain");
    }

    #[test]
    fn writes_one_line_per_card() {
        let dir = std::env::temp_dir();
        let path = dir.join("cardforge_export_test.tsv");

        let cards = vec![
            Flashcard::new("Atom", "The smallest unit of an element"),
            Flashcard::new("Ion", "A charged atom"),
        ];
        write_tsv(&path, &cards).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Atom\tThe smallest unit of an element");
        assert_eq!(lines[1], "Ion\tA charged atom");
    }
}
