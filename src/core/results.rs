use crate::core::prediction::Prediction;
use crate::domain::model::ClusterPrediction;
use crate::domain::ports::{ConsensusMap, MethodPredictions};
use crate::utils::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-record results of the NRPS/PKS analysis.
///
/// `domain_predictions` is append-only per method: each scoring method
/// writes its results exactly once for a record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NrpsPksResults {
    pub domain_predictions: MethodPredictions,
    pub consensus: ConsensusMap,
    pub consensus_transat: ConsensusMap,
    pub region_predictions: HashMap<u32, Vec<ClusterPrediction>>,
}

impl NrpsPksResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one method's per-domain predictions. Writing the same
    /// method twice for a record violates the append-only contract.
    pub fn add_method_results(
        &mut self,
        method: &str,
        results: HashMap<String, Prediction>,
    ) -> Result<()> {
        if self.domain_predictions.contains_key(method) {
            return Err(AnalysisError::DuplicateMethodResults {
                method: method.to_string(),
            });
        }

        self.domain_predictions.insert(method.to_string(), results);
        Ok(())
    }

    pub fn predictions_for_method(&self, method: &str) -> Option<&HashMap<String, Prediction>> {
        self.domain_predictions.get(method)
    }
}
