use crate::adapters::consensus::UNKNOWN_SUBSTRATE;
use crate::domain::model::{ADomain, ClusterPrediction, Record};
use crate::domain::ports::{ConsensusMap, OrderAnalyser};

/// Orders clusters colinearly: candidate clusters are visited in ascending
/// number order and each cluster's polymer is the consensus calls of its
/// member domains joined in genomic order.
#[derive(Debug, Clone, Default)]
pub struct ColinearOrderAnalyser;

impl ColinearOrderAnalyser {
    pub fn new() -> Self {
        Self
    }
}

impl OrderAnalyser for ColinearOrderAnalyser {
    fn analyse_order(
        &self,
        _domains: &[ADomain],
        consensus: &ConsensusMap,
        record: &Record,
    ) -> Vec<ClusterPrediction> {
        let mut numbers: Vec<u32> = record.candidate_clusters.iter().map(|c| c.number).collect();
        numbers.sort_unstable();

        numbers
            .into_iter()
            .filter_map(|number| record.candidate_cluster(number))
            .map(|cluster| {
                let monomers: Vec<&str> = cluster
                    .domain_ids
                    .iter()
                    .map(|id| {
                        consensus
                            .get(id)
                            .map(String::as_str)
                            .unwrap_or(UNKNOWN_SUBSTRATE)
                    })
                    .collect();

                ClusterPrediction {
                    candidate_cluster_number: cluster.number,
                    polymer: format!("({})", monomers.join(" - ")),
                }
            })
            .collect()
    }
}
