//! Network validation logic.

use std::collections::HashSet;

use crate::schema::{DuplicatePolicyDef, NetworkDef};

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Empty node name in {context}")]
    EmptyName { context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Duplicate edge: {a} - {b}")]
    DuplicateEdge { a: String, b: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },
}

pub fn validate_network(network: &NetworkDef) -> Result<(), ValidationError> {
    if network.version == 0 || network.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: network.version,
        });
    }

    let mut names: HashSet<&str> = HashSet::new();
    let mut pairs: HashSet<(&str, &str)> = HashSet::new();

    for (i, edge) in network.edges.iter().enumerate() {
        if edge.a.is_empty() || edge.b.is_empty() {
            return Err(ValidationError::EmptyName {
                context: format!("edges[{i}]"),
            });
        }
        if !edge.cost.is_finite() || edge.cost < 0.0 {
            return Err(ValidationError::InvalidValue {
                field: format!("edges[{i}].cost"),
                value: edge.cost.to_string(),
                reason: "cost must be finite and non-negative".to_string(),
            });
        }

        let key = if edge.a <= edge.b {
            (edge.a.as_str(), edge.b.as_str())
        } else {
            (edge.b.as_str(), edge.a.as_str())
        };
        if !pairs.insert(key) && network.duplicate_policy == DuplicatePolicyDef::Reject {
            return Err(ValidationError::DuplicateEdge {
                a: edge.a.clone(),
                b: edge.b.clone(),
            });
        }

        names.insert(&edge.a);
        names.insert(&edge.b);
    }

    for (i, query) in network.queries.iter().enumerate() {
        for endpoint in [&query.source, &query.target] {
            if !names.contains(endpoint.as_str()) {
                return Err(ValidationError::MissingReference {
                    id: endpoint.clone(),
                    context: format!("queries[{i}]"),
                });
            }
        }
    }

    Ok(())
}
