use super::models::WordRecord;

/// Render a record as the Markdown block appended to the note.
///
/// The block starts with a blank line so it stays separated from whatever the
/// note already ends with. Field content is substituted verbatim: a field
/// that contains the block's own markers (`##`, `---`) is passed through
/// unchanged.
pub fn format_word_record(record: &WordRecord) -> String {
    format!(
        "\n## {}\n{}\n\n---\n\n{}\n{}\n",
        record.word, record.meaning, record.example, record.example_translation
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(word: &str, meaning: &str, example: &str, translation: &str) -> WordRecord {
        WordRecord {
            word: word.to_string(),
            meaning: meaning.to_string(),
            example: example.to_string(),
            example_translation: translation.to_string(),
        }
    }

    #[test]
    fn formats_the_fixed_block() {
        let formatted =
            format_word_record(&record("run", "走る", "I run every day.", "私は毎日走ります。"));

        assert_eq!(formatted, "\n## run\n走る\n\n---\n\nI run every day.\n私は毎日走ります。\n");
    }

    #[test]
    fn empty_record_keeps_the_skeleton() {
        assert_eq!(format_word_record(&WordRecord::default()), "\n## \n\n\n---\n\n\n\n");
    }

    #[test]
    fn field_content_is_not_escaped() {
        let formatted = format_word_record(&record("---", "## nested", "a\nb", "c"));

        assert_eq!(formatted, "\n## ---\n## nested\n\n---\n\na\nb\nc\n");
    }

    #[test]
    fn output_is_deterministic() {
        let r = record("word", "meaning", "example", "translation");

        assert_eq!(format_word_record(&r), format_word_record(&r));
    }
}
