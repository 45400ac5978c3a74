use crate::domain::model::PredictionEntry;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// One scoring method's ranked substrate calls for a single A domain.
///
/// A single struct carries every method's results; the `method` tag is the
/// discriminant. Immutable after construction: entries are stored in the
/// order the scoring method produced them (descending by score) and are
/// never re-sorted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    method: String,
    entries: Vec<PredictionEntry>,
}

impl Prediction {
    pub fn new(method: impl Into<String>, entries: Vec<PredictionEntry>) -> Self {
        Self {
            method: method.into(),
            entries,
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn entries(&self) -> &[PredictionEntry] {
        &self.entries
    }

    /// The label(s) tied for the single highest score, in original order.
    ///
    /// Ties are detected with exact float equality. Scores come back from
    /// the model bit-identical for genuinely tied candidates, so no epsilon
    /// is applied; near-equal scores are distinct calls.
    ///
    /// `use_alternate_naming` is accepted for interface compatibility with
    /// the PKS prediction types and has no effect here.
    pub fn classification(&self, _use_alternate_naming: bool) -> Vec<String> {
        let Some(first) = self.entries.first() else {
            return Vec::new();
        };

        let mut labels = vec![first.label.clone()];
        for entry in &self.entries[1..] {
            if entry.score == first.score {
                labels.push(entry.label.clone());
            }
        }
        labels
    }

    /// Human-readable rendering of the ranked calls, scores at two
    /// decimals.
    pub fn describe(&self) -> String {
        if self.entries.is_empty() {
            return "No hits above threshold.".to_string();
        }

        let mut out = format!("{} prediction, score (0-1):\n", self.method);
        for entry in &self.entries {
            out.push_str(&format!("  {}: {:.2}\n", entry.label, entry.score));
        }
        out
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}
