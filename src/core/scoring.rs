use crate::core::prediction::Prediction;
use crate::domain::model::ADomain;
use crate::domain::ports::ScoringModel;
use crate::utils::error::{AnalysisError, Result};
use crate::utils::validation::validate_amino_acid_sequence;
use std::collections::HashMap;

/// Wraps one bulk-scoring model for one named method.
///
/// Inference is batched: all domain translations go out in a single
/// `bulk_predict` call and results are zipped back by position, so the
/// input set must be gap-free up front.
pub struct ScoringAdapter<'a> {
    model: &'a dyn ScoringModel,
    method: &'a str,
    threshold: f64,
}

impl<'a> ScoringAdapter<'a> {
    pub fn new(model: &'a dyn ScoringModel, method: &'a str, threshold: f64) -> Self {
        Self {
            model,
            method,
            threshold,
        }
    }

    pub fn method(&self) -> &str {
        self.method
    }

    /// Scores every domain in one batch call, returning one `Prediction`
    /// per input domain in input order.
    pub async fn run_scoring(&self, domains: &[ADomain]) -> Result<Vec<Prediction>> {
        for domain in domains {
            if domain.domain_id.is_empty() {
                return Err(AnalysisError::InvalidInput {
                    message: "domain with empty id cannot participate in scoring".to_string(),
                });
            }
            validate_amino_acid_sequence(&domain.domain_id, &domain.translation)?;
        }

        let sequences: Vec<String> = domains.iter().map(|d| d.translation.clone()).collect();

        tracing::debug!(
            "Running {} over {} domain sequences (threshold {})",
            self.method,
            sequences.len(),
            self.threshold
        );
        let raw = self.model.bulk_predict(&sequences, self.threshold).await?;

        if raw.len() != domains.len() {
            return Err(AnalysisError::ResultCountMismatch {
                method: self.method.to_string(),
                expected: domains.len(),
                actual: raw.len(),
            });
        }

        Ok(raw
            .into_iter()
            .map(|entries| Prediction::new(self.method, entries))
            .collect())
    }

    /// Same predictions keyed by domain id, the shape the result store
    /// consumes.
    pub async fn run(&self, domains: &[ADomain]) -> Result<HashMap<String, Prediction>> {
        let predictions = self.run_scoring(domains).await?;

        Ok(domains
            .iter()
            .zip(predictions)
            .map(|(domain, prediction)| (domain.domain_id.clone(), prediction))
            .collect())
    }
}
