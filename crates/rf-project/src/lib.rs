//! rf-project: network file format and validation.

pub mod reference;
pub mod schema;
pub mod validate;

use std::path::Path;

use rf_graph::{Graph, GraphBuilder, GraphError};

pub use reference::reference_network;
pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_network};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Unsupported file format: {path}")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NetworkDef {
    /// Build the graph described by this network, honoring its duplicate policy.
    pub fn build_graph(&self) -> ProjectResult<Graph> {
        let mut builder = GraphBuilder::with_policy(self.duplicate_policy.into());
        builder.extend(self.edges.iter().cloned())?;
        Ok(builder.build()?)
    }

    /// `(source, target)` pairs of the stored queries.
    pub fn query_pairs(&self) -> Vec<(&str, &str)> {
        self.queries
            .iter()
            .map(|q| (q.source.as_str(), q.target.as_str()))
            .collect()
    }
}

pub fn load_yaml(path: &Path) -> ProjectResult<NetworkDef> {
    let content = std::fs::read_to_string(path)?;
    let network: NetworkDef = serde_yaml::from_str(&content)?;
    validate_network(&network)?;
    tracing::debug!(path = %path.display(), edges = network.edges.len(), "loaded network");
    Ok(network)
}

pub fn save_yaml(path: &Path, network: &NetworkDef) -> ProjectResult<()> {
    validate_network(network)?;
    let content = serde_yaml::to_string(network)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<NetworkDef> {
    let content = std::fs::read_to_string(path)?;
    let network: NetworkDef = serde_json::from_str(&content)?;
    validate_network(&network)?;
    tracing::debug!(path = %path.display(), edges = network.edges.len(), "loaded network");
    Ok(network)
}

pub fn save_json(path: &Path, network: &NetworkDef) -> ProjectResult<()> {
    validate_network(network)?;
    let content = serde_json::to_string_pretty(network)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a network, picking the format from the file extension.
pub fn load(path: &Path) -> ProjectResult<NetworkDef> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => load_yaml(path),
        Some("json") => load_json(path),
        _ => Err(ProjectError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}
