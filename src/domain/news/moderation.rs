// src/domain/news/moderation.rs
use crate::domain::news::value_objects::CommentText;
use crate::domain::validation::FieldErrors;

pub const BAD_WORDS: [&str; 2] = ["редиска", "негодяй"];
pub const WARNING: &str = "Не ругайтесь!";

/// Case-sensitive substring match against [`BAD_WORDS`].
pub fn contains_bad_words(text: &str) -> bool {
    BAD_WORDS.iter().any(|word| text.contains(word))
}

pub fn ensure_clean(text: CommentText) -> Result<CommentText, FieldErrors> {
    if contains_bad_words(text.as_str()) {
        Err(FieldErrors::single("text", WARNING))
    } else {
        Ok(text)
    }
}
