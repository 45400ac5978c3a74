use crate::domain::model::ADomain;
use crate::domain::ports::{ConsensusAnalyser, ConsensusMap, MethodPredictions};
use std::collections::{HashMap, HashSet};

/// Substrate call used when no method produced a usable prediction.
pub const UNKNOWN_SUBSTRATE: &str = "nrp";

/// Majority vote over each method's top classification.
///
/// Every label a method reports as tied-for-top contributes one vote.
/// The label with the most votes wins; vote ties break lexicographically
/// so the outcome is deterministic across runs. Domains with no votes get
/// the unknown marker.
#[derive(Debug, Clone, Default)]
pub struct MajorityConsensus {
    /// Methods contributing to the trans-AT view. Empty means the trans-AT
    /// view mirrors the primary one.
    transat_methods: HashSet<String>,
}

impl MajorityConsensus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transat_methods(methods: impl IntoIterator<Item = String>) -> Self {
        Self {
            transat_methods: methods.into_iter().collect(),
        }
    }

    fn vote(
        &self,
        domain: &ADomain,
        predictions: &MethodPredictions,
        restrict_to_transat: bool,
    ) -> String {
        let mut votes: HashMap<String, usize> = HashMap::new();

        for (method, by_domain) in predictions {
            if restrict_to_transat && !self.transat_methods.contains(method) {
                continue;
            }
            let Some(prediction) = by_domain.get(&domain.domain_id) else {
                continue;
            };
            for label in prediction.classification(false) {
                *votes.entry(label).or_insert(0) += 1;
            }
        }

        votes
            .into_iter()
            .max_by(|(label_a, count_a), (label_b, count_b)| {
                count_a.cmp(count_b).then(label_b.cmp(label_a))
            })
            .map(|(label, _)| label)
            .unwrap_or_else(|| UNKNOWN_SUBSTRATE.to_string())
    }
}

impl ConsensusAnalyser for MajorityConsensus {
    fn compute_consensus(
        &self,
        domains: &[ADomain],
        predictions: &MethodPredictions,
    ) -> (ConsensusMap, ConsensusMap) {
        let mut consensus = ConsensusMap::new();
        let mut consensus_transat = ConsensusMap::new();
        let restrict = !self.transat_methods.is_empty();

        for domain in domains {
            consensus.insert(
                domain.domain_id.clone(),
                self.vote(domain, predictions, false),
            );
            consensus_transat.insert(
                domain.domain_id.clone(),
                self.vote(domain, predictions, restrict),
            );
        }

        (consensus, consensus_transat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prediction::Prediction;
    use crate::domain::model::PredictionEntry;

    fn domain(id: &str) -> ADomain {
        ADomain {
            domain_id: id.to_string(),
            translation: "MKLAAV".to_string(),
        }
    }

    fn method_results(
        method: &str,
        calls: &[(&str, &[(f64, &str)])],
    ) -> (String, HashMap<String, Prediction>) {
        let mut by_domain = HashMap::new();
        for (domain_id, pairs) in calls {
            let entries = pairs
                .iter()
                .map(|(score, label)| PredictionEntry::new(*score, *label))
                .collect();
            by_domain.insert(domain_id.to_string(), Prediction::new(method, entries));
        }
        (method.to_string(), by_domain)
    }

    #[test]
    fn test_majority_wins() {
        let domains = vec![domain("A1")];
        let predictions: MethodPredictions = [
            method_results("paras", &[("A1", &[(0.9, "leu")])]),
            method_results("nrpys", &[("A1", &[(0.8, "leu")])]),
            method_results("stachelhaus", &[("A1", &[(0.7, "ile")])]),
        ]
        .into_iter()
        .collect();

        let (consensus, _) = MajorityConsensus::new().compute_consensus(&domains, &predictions);

        assert_eq!(consensus["A1"], "leu");
    }

    #[test]
    fn test_no_votes_gives_unknown_marker() {
        let domains = vec![domain("A1")];
        let predictions: MethodPredictions =
            [method_results("paras", &[("A1", &[])])].into_iter().collect();

        let (consensus, _) = MajorityConsensus::new().compute_consensus(&domains, &predictions);

        assert_eq!(consensus["A1"], UNKNOWN_SUBSTRATE);
    }

    #[test]
    fn test_vote_tie_breaks_lexicographically() {
        let domains = vec![domain("A1")];
        let predictions: MethodPredictions = [
            method_results("paras", &[("A1", &[(0.9, "val")])]),
            method_results("nrpys", &[("A1", &[(0.8, "leu")])]),
        ]
        .into_iter()
        .collect();

        let (consensus, _) = MajorityConsensus::new().compute_consensus(&domains, &predictions);

        assert_eq!(consensus["A1"], "leu");
    }

    #[test]
    fn test_transat_view_restricts_to_configured_methods() {
        let domains = vec![domain("A1")];
        let predictions: MethodPredictions = [
            method_results("paras", &[("A1", &[(0.9, "leu")])]),
            method_results("transat-ks", &[("A1", &[(0.6, "gly")])]),
        ]
        .into_iter()
        .collect();

        let analyser =
            MajorityConsensus::with_transat_methods(["transat-ks".to_string()]);
        let (consensus, consensus_transat) = analyser.compute_consensus(&domains, &predictions);

        // primary view is a one-one tie, broken lexicographically
        assert_eq!(consensus["A1"], "gly");
        assert_eq!(consensus_transat["A1"], "gly");
    }
}
