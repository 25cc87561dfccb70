//! Lookup - ranked association queries over the graph.
//!
//! A lookup works as follows:
//! 1. **Seeds**: One or more nodes, each with a contribution weight
//! 2. **Scan**: Walk each seed's adjacency list strongest-first, up to `depth` entries
//! 3. **Accumulate**: Add `association weight * seed weight` per neighbor
//! 4. **Exclude**: Drop the seeds themselves
//! 5. **Rank**: Sort by score, ties by node, keep the top `limit`
//! 6. **Normalize**: Divide by the decay factor and round

mod scores;

pub use scores::*;

use grass_model::{LookupConfig, NodeId};

use crate::store::AssociativeGraph;

/// Runs ranked lookups with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct LookupEngine {
    config: LookupConfig,
}

impl LookupEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: LookupConfig) -> Self {
        Self { config }
    }

    /// Create an engine with depth 100, limit 10 and 3-decimal rounding.
    pub fn with_defaults() -> Self {
        Self::new(LookupConfig::default())
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Lookup with every seed weighted 1.
    pub fn lookup<N: NodeId>(&self, graph: &AssociativeGraph<N>, seeds: &[N]) -> Vec<(N, f64)> {
        let weighted: Vec<_> = seeds.iter().map(|seed| (seed.clone(), 1.0)).collect();
        self.lookup_weighted(graph, &weighted)
    }

    /// Lookup with an explicit weight per seed.
    ///
    /// Unknown seeds contribute nothing. A node reachable from several seeds
    /// sums their contributions.
    pub fn lookup_weighted<N: NodeId>(
        &self,
        graph: &AssociativeGraph<N>,
        seeds: &[(N, f64)],
    ) -> Vec<(N, f64)> {
        let board = self.accumulate(graph, seeds);
        let decay_factor = graph.decay_factor();

        board
            .ranked(self.config.limit)
            .into_iter()
            .map(|(node, score)| (node, round_to(score / decay_factor, self.config.precision)))
            .collect()
    }

    /// Raw scores before ranking and normalization, seeds excluded.
    pub fn accumulate<N: NodeId>(
        &self,
        graph: &AssociativeGraph<N>,
        seeds: &[(N, f64)],
    ) -> ScoreBoard<N> {
        let mut board = ScoreBoard::new();

        for (seed, seed_weight) in seeds {
            for entry in graph.neighbors(seed).iter().take(self.config.depth) {
                board.add(entry.neighbor.clone(), entry.weight() * seed_weight);
            }
        }

        board.exclude(seeds.iter().map(|(seed, _)| seed));
        board
    }
}

/// Every finite `f64` has an exact decimal expansion within this many
/// fractional digits.
const EXACT_DECIMALS: u32 = 1074;

/// Round to `precision` decimal places using the exact decimal value of
/// `value`, ties to even.
fn round_to(value: f64, precision: u32) -> f64 {
    let digits = usize::try_from(precision.min(EXACT_DECIMALS)).unwrap_or(usize::MAX);
    format!("{:.*}", digits, value).parse().unwrap_or(value)
}
