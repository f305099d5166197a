/// A single vocabulary entry collected from the user.
///
/// All four fields are free-form text and nothing is validated: an empty or
/// partially filled record is still a valid record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordRecord {
    pub word: String,
    pub meaning: String,
    pub example: String,
    pub example_translation: String,
}
