// src/models.rs
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SentimentError};
use crate::validator::SubmissionText;

/// The three classes the model scores, in the order the API reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
        SentimentLabel::Positive,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            SentimentLabel::Negative => 0,
            SentimentLabel::Neutral => 1,
            SentimentLabel::Positive => 2,
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Negative => write!(f, "Negative"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
            SentimentLabel::Positive => write!(f, "Positive"),
        }
    }
}

/// Body of a sentiment request, both towards the model API and from the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentRequest {
    pub text: String,
}

impl From<&SubmissionText> for SentimentRequest {
    fn from(text: &SubmissionText) -> Self {
        Self {
            text: text.as_str().to_string(),
        }
    }
}

#[derive(Deserialize)]
struct RawSentimentResponse {
    sentiments: Vec<f64>,
}

/// Class probabilities returned by the model API, indexed by `SentimentLabel`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentResponse {
    sentiments: [f64; 3],
}

impl SentimentResponse {
    pub fn new(sentiments: [f64; 3]) -> Self {
        Self { sentiments }
    }

    /// Parses and checks an upstream body. Anything but exactly three
    /// probabilities in `[0, 1]` is rejected.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let raw: RawSentimentResponse = serde_json::from_slice(body)?;

        let sentiments: [f64; 3] = raw.sentiments.try_into().map_err(|v: Vec<f64>| {
            SentimentError::UnexpectedResponse(format!(
                "expected 3 sentiment values, got {}",
                v.len()
            ))
        })?;

        if let Some(bad) = sentiments
            .iter()
            .find(|p| !p.is_finite() || **p < 0.0 || **p > 1.0)
        {
            return Err(SentimentError::UnexpectedResponse(format!(
                "sentiment value {} is not a probability",
                bad
            )));
        }

        Ok(Self { sentiments })
    }

    pub fn sentiments(&self) -> &[f64; 3] {
        &self.sentiments
    }

    pub fn probability(&self, label: SentimentLabel) -> f64 {
        self.sentiments[label.index()]
    }
}
