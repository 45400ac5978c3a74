use crate::domain::model::PredictionEntry;
use crate::domain::ports::ScoringModel;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

/// A scoring model backed by a sequence-keyed table of ranked entries,
/// typically exported from an offline inference run. Sequences absent from
/// the table score as "no hits".
#[derive(Debug, Clone, Default)]
pub struct PrecomputedModel {
    by_sequence: HashMap<String, Vec<PredictionEntry>>,
}

impl PrecomputedModel {
    pub fn new(by_sequence: HashMap<String, Vec<PredictionEntry>>) -> Self {
        Self { by_sequence }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let by_sequence = serde_json::from_str(&raw)?;
        Ok(Self { by_sequence })
    }

    pub fn is_empty(&self) -> bool {
        self.by_sequence.is_empty()
    }
}

#[async_trait]
impl ScoringModel for PrecomputedModel {
    async fn bulk_predict(
        &self,
        sequences: &[String],
        threshold: f64,
    ) -> Result<Vec<Vec<PredictionEntry>>> {
        Ok(sequences
            .iter()
            .map(|sequence| {
                self.by_sequence
                    .get(sequence)
                    .map(|entries| {
                        entries
                            .iter()
                            .filter(|entry| entry.score >= threshold)
                            .cloned()
                            .collect()
                    })
                    .unwrap_or_default()
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> PrecomputedModel {
        let mut by_sequence = HashMap::new();
        by_sequence.insert(
            "MKLAAV".to_string(),
            vec![
                PredictionEntry::new(0.9, "leu"),
                PredictionEntry::new(0.4, "val"),
                PredictionEntry::new(0.1, "gly"),
            ],
        );
        PrecomputedModel::new(by_sequence)
    }

    #[tokio::test]
    async fn test_threshold_filters_low_entries() {
        let results = model()
            .bulk_predict(&["MKLAAV".to_string()], 0.2)
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].len(), 2);
        assert_eq!(results[0][0].label, "leu");
        assert_eq!(results[0][1].label, "val");
    }

    #[tokio::test]
    async fn test_unknown_sequence_yields_no_hits() {
        let results = model()
            .bulk_predict(&["QRSTTV".to_string(), "MKLAAV".to_string()], 0.2)
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert!(results[0].is_empty());
        assert!(!results[1].is_empty());
    }

    #[tokio::test]
    async fn test_from_path_loads_table() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            r#"{"MKLAAV": [{"score": 0.9, "label": "leu"}]}"#,
        )
        .unwrap();

        let model = PrecomputedModel::from_path(file.path()).unwrap();
        let results = model
            .bulk_predict(&["MKLAAV".to_string()], 0.2)
            .await
            .unwrap();

        assert_eq!(results[0][0].label, "leu");
    }
}
