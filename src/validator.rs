// src/validator.rs
use regex::Regex;
use std::sync::LazyLock;

use crate::errors::ErrorClassification;

/// Hard upper bound on submitted text, in characters.
pub const MAX_TEXT_CHARS: usize = 200;

/// Khmer block, whitespace, ASCII digits and punctuation, and emoji.
static ALLOWED_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r##"^[\u{1780}-\u{17FF}\s0-9!"\#$%\&'()*+,\-./:;<=>?@\[\\\]\^_`{|}\~\p{Emoji}]*$"##,
    )
    .unwrap()
});

/// Text that passed validation and may be sent upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionText(String);

impl SubmissionText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_khmer(c: char) -> bool {
    ('\u{1780}'..='\u{17FF}').contains(&c)
}

/// Checks raw form input against the Khmer script policy.
///
/// The accepted text is returned verbatim, surrounding whitespace included.
pub fn validate(raw: &str) -> Result<SubmissionText, ErrorClassification> {
    if raw.trim().is_empty() {
        return Err(ErrorClassification::NoInput);
    }

    // script before length: non-Khmer text is InvalidScript at any length
    if !raw.chars().any(is_khmer) || !ALLOWED_TEXT.is_match(raw) {
        return Err(ErrorClassification::InvalidScript);
    }

    if raw.chars().count() > MAX_TEXT_CHARS {
        return Err(ErrorClassification::TooLong);
    }

    Ok(SubmissionText(raw.to_string()))
}
