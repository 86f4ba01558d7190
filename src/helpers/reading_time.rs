//! Reading time estimation

const WORDS_PER_MINUTE: usize = 200;

/// Estimate reading time for a body of text.
///
/// Deterministic pure function of the content: word count at 200 wpm,
/// rounded up, never less than one minute.
pub fn reading_time(content: &str) -> String {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}
