// src/presenter.rs
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{ErrorBody, ErrorClassification, SentimentError};
use crate::models::{SentimentLabel, SentimentResponse};

/// Formats a probability as a percentage with two decimals, rounding half up.
pub fn format_percentage(probability: f64) -> String {
    let hundredths = (probability * 100.0 * 100.0).round();
    format!("{:.2}%", hundredths / 100.0)
}

/// How result rows are ordered on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultOrder {
    /// Negative, Neutral, Positive.
    Fixed,
    /// Highest probability first.
    #[default]
    Descending,
}

impl FromStr for ResultOrder {
    type Err = SentimentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(ResultOrder::Fixed),
            "descending" => Ok(ResultOrder::Descending),
            other => Err(SentimentError::Config(format!(
                "Unknown result order '{}', expected 'fixed' or 'descending'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayEntry {
    /// Position in the upstream response.
    pub index: usize,
    pub label: SentimentLabel,
    pub probability: f64,
    pub percentage: String,
}

impl std::fmt::Display for DisplayEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.label, self.percentage)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayResult {
    pub order: ResultOrder,
    pub entries: Vec<DisplayEntry>,
}

impl DisplayResult {
    pub fn from_response(response: &SentimentResponse, order: ResultOrder) -> Self {
        let mut entries: Vec<DisplayEntry> = response
            .sentiments()
            .iter()
            .enumerate()
            .filter_map(|(index, &probability)| {
                SentimentLabel::from_index(index).map(|label| DisplayEntry {
                    index,
                    label,
                    probability,
                    percentage: format_percentage(probability),
                })
            })
            .collect();

        if order == ResultOrder::Descending {
            // stable: equal probabilities keep label order
            entries.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        }

        Self { order, entries }
    }

    /// Bar widths in display order, as percentages.
    pub fn bar_values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.probability * 100.0).collect()
    }
}

/// Identifies one submission attempt within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct AttemptId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Validating,
    Rejected,
    Submitting,
    Displaying,
    Failed,
}

/// Second half of a display transition: progress bars grow to these values.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedUpdate {
    attempt: AttemptId,
    values: Vec<f64>,
}

/// Snapshot pushed to the page after every transition.
#[derive(Debug, Clone, Serialize)]
pub struct ViewState {
    pub attempt: AttemptId,
    pub phase: Phase,
    pub loading: bool,
    pub error: Option<ErrorBody>,
    pub result: Option<DisplayResult>,
    pub progress: Vec<f64>,
}

/// Per-session form state. Transitions carrying a superseded attempt are ignored.
#[derive(Debug)]
pub struct FormState {
    order: ResultOrder,
    next_attempt: u64,
    attempt: AttemptId,
    phase: Phase,
    error: Option<ErrorClassification>,
    result: Option<DisplayResult>,
    progress: Vec<f64>,
}

impl FormState {
    pub fn new(order: ResultOrder) -> Self {
        Self {
            order,
            next_attempt: 1,
            attempt: AttemptId(0),
            phase: Phase::Idle,
            error: None,
            result: None,
            progress: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn error(&self) -> Option<ErrorClassification> {
        self.error
    }

    pub fn result(&self) -> Option<&DisplayResult> {
        self.result.as_ref()
    }

    pub fn progress(&self) -> &[f64] {
        &self.progress
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Submitting
    }

    fn is_current(&self, attempt: AttemptId) -> bool {
        if attempt != self.attempt {
            log::debug!(
                "Discarding update for attempt {:?}, current is {:?}",
                attempt,
                self.attempt
            );
            return false;
        }
        true
    }

    /// Starts a new attempt and clears everything the previous one left behind.
    pub fn begin_attempt(&mut self) -> AttemptId {
        self.attempt = AttemptId(self.next_attempt);
        self.next_attempt += 1;
        self.phase = Phase::Validating;
        self.error = None;
        self.result = None;
        self.progress.clear();
        self.attempt
    }

    pub fn reject(&mut self, attempt: AttemptId, kind: ErrorClassification) -> bool {
        if !self.is_current(attempt) || self.phase != Phase::Validating {
            return false;
        }
        self.phase = Phase::Rejected;
        self.error = Some(kind);
        true
    }

    pub fn start_submitting(&mut self, attempt: AttemptId) -> bool {
        if !self.is_current(attempt) || self.phase != Phase::Validating {
            return false;
        }
        self.phase = Phase::Submitting;
        true
    }

    pub fn fail(&mut self, attempt: AttemptId, kind: ErrorClassification) -> bool {
        if !self.is_current(attempt) || self.phase != Phase::Submitting {
            return false;
        }
        self.phase = Phase::Failed;
        self.error = Some(kind);
        self.result = None;
        self.progress.clear();
        true
    }

    /// Stores the result for immediate display and hands back the staged bar update.
    pub fn display(
        &mut self,
        attempt: AttemptId,
        response: &SentimentResponse,
    ) -> Option<StagedUpdate> {
        if !self.is_current(attempt) || self.phase != Phase::Submitting {
            return None;
        }
        let result = DisplayResult::from_response(response, self.order);
        let values = result.bar_values();
        self.phase = Phase::Displaying;
        self.result = Some(result);
        self.progress.clear();
        Some(StagedUpdate { attempt, values })
    }

    pub fn apply_staged(&mut self, update: StagedUpdate) -> bool {
        if !self.is_current(update.attempt) || self.phase != Phase::Displaying {
            return false;
        }
        self.progress = update.values;
        true
    }

    pub fn view(&self) -> ViewState {
        ViewState {
            attempt: self.attempt,
            phase: self.phase,
            loading: self.is_loading(),
            error: self.error.map(ErrorBody::from),
            result: self.result.clone(),
            progress: self.progress.clone(),
        }
    }
}
