//! Snapshot - whole-graph persistence.
//!
//! A snapshot is an independent copy of the graph state with these fields:
//! - `decay_factor`: cumulative decay at the time of saving
//! - `bidirectional`: mirroring flag fixed at construction
//! - `priority_queues`: node -> `[negated_weight, neighbor]` pairs, strongest first
//! - `connected_nodes`: directed `[start, end]` pairs present in storage
//!
//! Snapshots encode as JSON (portable) or bincode (compact, not portable
//! across implementations). See [`SnapshotFormat`].

mod format;

pub use format::*;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use grass_model::{LookupConfig, NodeId};
use tracing::{debug, info};

use crate::error::{GraphError, GraphResult};
use crate::store::{AdjacencyEntry, AdjacencyList, AssociativeGraph};

fn default_decay_factor() -> f64 {
    1.0
}

/// Serializable state of an [`AssociativeGraph`].
///
/// Older snapshots without `decay_factor` load with a factor of 1, and
/// snapshots without `connected_nodes` have the set rebuilt from storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "N: Serialize + Ord",
    deserialize = "N: Deserialize<'de> + Ord"
))]
pub struct Snapshot<N> {
    #[serde(default = "default_decay_factor")]
    pub decay_factor: f64,

    pub bidirectional: bool,

    pub priority_queues: BTreeMap<N, Vec<AdjacencyEntry<N>>>,

    #[serde(default)]
    pub connected_nodes: Option<Vec<(N, N)>>,
}

impl<N: NodeId> Snapshot<N> {
    /// Check the snapshot can be turned back into a graph.
    ///
    /// The decay factor must be finite and nonzero, every adjacency list
    /// sorted, and, when `connected_nodes` is present, it must name exactly
    /// the stored `(start, neighbor)` pairs.
    pub fn validate(&self) -> GraphResult<()> {
        if self.decay_factor == 0.0 || !self.decay_factor.is_finite() {
            return Err(invalid(format!(
                "decay factor must be finite and nonzero, got {}",
                self.decay_factor
            )));
        }

        for (node, entries) in &self.priority_queues {
            if !entries.windows(2).all(|pair| pair[0] <= pair[1]) {
                return Err(invalid(format!("adjacency of {:?} is not sorted", node)));
            }
        }

        if let Some(connected) = &self.connected_nodes {
            let pairs: HashSet<(&N, &N)> = connected.iter().map(|(a, b)| (a, b)).collect();
            for (start, entries) in &self.priority_queues {
                if let Some(entry) = entries.iter().find(|e| !pairs.contains(&(start, &e.neighbor)))
                {
                    return Err(invalid(format!(
                        "stored pair ({:?}, {:?}) missing from connected nodes",
                        start, entry.neighbor
                    )));
                }
            }

            for (start, end) in connected {
                let present = self
                    .priority_queues
                    .get(start)
                    .is_some_and(|entries| entries.iter().any(|e| &e.neighbor == end));
                if !present {
                    return Err(invalid(format!(
                        "connected pair ({:?}, {:?}) has no stored entry",
                        start, end
                    )));
                }
            }
        }

        Ok(())
    }
}

fn invalid(reason: String) -> GraphError {
    GraphError::InvalidSnapshot { reason }
}

impl<N: NodeId> AssociativeGraph<N> {
    /// Copy the graph state into a snapshot, in sorted node order.
    pub fn to_snapshot(&self) -> Snapshot<N> {
        let priority_queues = self
            .adjacency
            .iter()
            .map(|(node, list)| (node.clone(), list.as_slice().to_vec()))
            .collect();

        let mut connected: Vec<_> = self.connected.iter().cloned().collect();
        connected.sort();

        Snapshot {
            decay_factor: self.decay_factor,
            bidirectional: self.bidirectional,
            priority_queues,
            connected_nodes: Some(connected),
        }
    }

    /// Rebuild a graph from a snapshot, validating it first.
    pub fn from_snapshot(snapshot: Snapshot<N>) -> GraphResult<Self> {
        snapshot.validate()?;

        let mut adjacency = HashMap::with_capacity(snapshot.priority_queues.len());
        for (node, entries) in snapshot.priority_queues {
            if entries.is_empty() {
                continue;
            }
            let list = AdjacencyList::from_sorted(entries)
                .ok_or_else(|| invalid(format!("adjacency of {:?} is not sorted", node)))?;
            adjacency.insert(node, list);
        }

        let connected: HashSet<(N, N)> = match snapshot.connected_nodes {
            Some(pairs) => pairs.into_iter().collect(),
            None => adjacency
                .iter()
                .flat_map(|(start, list)| {
                    list.iter()
                        .map(move |entry| (start.clone(), entry.neighbor.clone()))
                })
                .collect(),
        };

        debug!(
            nodes = adjacency.len(),
            connected = connected.len(),
            "restored graph from snapshot"
        );

        Ok(Self {
            bidirectional: snapshot.bidirectional,
            decay_factor: snapshot.decay_factor,
            adjacency,
            connected,
            lookup: LookupConfig::default(),
        })
    }
}

impl<N: NodeId + Serialize> AssociativeGraph<N> {
    /// Encode the graph as a JSON string.
    pub fn to_json_string(&self) -> GraphResult<String> {
        Ok(serde_json::to_string(&self.to_snapshot())?)
    }

    /// Encode the graph with bincode.
    pub fn to_bytes(&self) -> GraphResult<Vec<u8>> {
        Ok(bincode::serialize(&self.to_snapshot())?)
    }

    /// Write the graph to `writer` in the given format.
    pub fn save_to_writer<W: Write>(&self, writer: W, format: SnapshotFormat) -> GraphResult<()> {
        format.encode(&self.to_snapshot(), writer)
    }

    /// Save the graph to a file, choosing the format from its extension.
    pub fn save(&self, path: impl AsRef<Path>) -> GraphResult<()> {
        let path = path.as_ref();
        let format = SnapshotFormat::from_path(path)?;

        let mut writer = BufWriter::new(File::create(path)?);
        self.save_to_writer(&mut writer, format)?;
        writer.flush()?;

        info!(
            path = %path.display(),
            ?format,
            nodes = self.node_count(),
            entries = self.edge_count(),
            "saved graph snapshot"
        );
        Ok(())
    }
}

impl<N: NodeId + DeserializeOwned> AssociativeGraph<N> {
    /// Decode a graph from a JSON string.
    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        Self::from_snapshot(serde_json::from_str(input)?)
    }

    /// Decode a graph from bincode bytes.
    pub fn from_bytes(bytes: &[u8]) -> GraphResult<Self> {
        Self::from_snapshot(bincode::deserialize(bytes)?)
    }

    /// Read a graph from `reader` in the given format.
    pub fn load_from_reader<R: Read>(reader: R, format: SnapshotFormat) -> GraphResult<Self> {
        Self::from_snapshot(format.decode(reader)?)
    }

    /// Load a graph from a file, choosing the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> GraphResult<Self> {
        let path = path.as_ref();
        let format = SnapshotFormat::from_path(path)?;

        let reader = BufReader::new(File::open(path)?);
        let graph = Self::load_from_reader(reader, format)?;

        info!(
            path = %path.display(),
            ?format,
            nodes = graph.node_count(),
            entries = graph.edge_count(),
            "loaded graph snapshot"
        );
        Ok(graph)
    }
}
