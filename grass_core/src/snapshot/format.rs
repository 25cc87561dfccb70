//! Snapshot encodings.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};
use std::path::Path;

use grass_model::NodeId;
use tracing::debug;

use super::Snapshot;
use crate::error::{GraphError, GraphResult};

/// How a snapshot is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapshotFormat {
    /// Human-readable JSON, portable across platforms.
    Json,
    /// Compact bincode layout. Only this crate reads it back.
    Binary,
}

impl SnapshotFormat {
    /// Pick a format from a file extension: `.json`, or `.bin` / `.bincode`.
    pub fn from_path(path: impl AsRef<Path>) -> GraphResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(SnapshotFormat::Json),
            Some("bin") | Some("bincode") => Ok(SnapshotFormat::Binary),
            _ => Err(GraphError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    /// Write a snapshot to `writer`.
    pub fn encode<N, W>(&self, snapshot: &Snapshot<N>, writer: W) -> GraphResult<()>
    where
        N: NodeId + Serialize,
        W: Write,
    {
        debug!(format = ?self, nodes = snapshot.priority_queues.len(), "encoding snapshot");
        match self {
            SnapshotFormat::Json => serde_json::to_writer(writer, snapshot)?,
            SnapshotFormat::Binary => bincode::serialize_into(writer, snapshot)?,
        }
        Ok(())
    }

    /// Read a snapshot from `reader`. The snapshot is not validated here.
    pub fn decode<N, R>(&self, reader: R) -> GraphResult<Snapshot<N>>
    where
        N: NodeId + DeserializeOwned,
        R: Read,
    {
        let snapshot: Snapshot<N> = match self {
            SnapshotFormat::Json => serde_json::from_reader(reader)?,
            SnapshotFormat::Binary => bincode::deserialize_from(reader)?,
        };
        debug!(format = ?self, nodes = snapshot.priority_queues.len(), "decoded snapshot");
        Ok(snapshot)
    }
}
