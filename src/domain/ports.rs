use crate::core::prediction::Prediction;
use crate::domain::model::{ADomain, ClusterPrediction, PredictionEntry, Record};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Per-method predictions keyed by method name, then by domain id.
pub type MethodPredictions = HashMap<String, HashMap<String, Prediction>>;

/// Consensus substrate call per domain id.
pub type ConsensusMap = HashMap<String, String>;

/// Batch inference boundary of one scoring model. Implementations return
/// one entry list per input sequence, in input order, already filtered to
/// the threshold and sorted descending by score.
#[async_trait]
pub trait ScoringModel: Send + Sync {
    async fn bulk_predict(
        &self,
        sequences: &[String],
        threshold: f64,
    ) -> Result<Vec<Vec<PredictionEntry>>>;
}

/// Combines the per-method predictions for each domain into a single call,
/// returning the primary view and the trans-AT-specific variant.
pub trait ConsensusAnalyser: Send + Sync {
    fn compute_consensus(
        &self,
        domains: &[ADomain],
        predictions: &MethodPredictions,
    ) -> (ConsensusMap, ConsensusMap);
}

/// Orders candidate biosynthetic clusters from the consensus calls.
pub trait OrderAnalyser: Send + Sync {
    fn analyse_order(
        &self,
        domains: &[ADomain],
        consensus: &ConsensusMap,
        record: &Record,
    ) -> Vec<ClusterPrediction>;
}
