//! Network file schema definitions.

use rf_graph::DuplicatePolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkDef {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicyDef,
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub queries: Vec<QueryDef>,
}

/// One undirected edge.
///
/// Accepts either `[a, b, cost]` or `{ a, b, cost }`; always written as
/// the compact triple.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "EdgeRepr", into = "EdgeRepr")]
pub struct EdgeDef {
    pub a: String,
    pub b: String,
    pub cost: f64,
}

impl EdgeDef {
    pub fn new(a: impl Into<String>, b: impl Into<String>, cost: f64) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            cost,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum EdgeRepr {
    Triple(String, String, f64),
    Named { a: String, b: String, cost: f64 },
}

impl From<EdgeRepr> for EdgeDef {
    fn from(repr: EdgeRepr) -> Self {
        match repr {
            EdgeRepr::Triple(a, b, cost) | EdgeRepr::Named { a, b, cost } => {
                EdgeDef { a, b, cost }
            }
        }
    }
}

impl From<EdgeDef> for EdgeRepr {
    fn from(edge: EdgeDef) -> Self {
        EdgeRepr::Triple(edge.a, edge.b, edge.cost)
    }
}

impl From<EdgeDef> for rf_graph::Edge {
    fn from(edge: EdgeDef) -> Self {
        rf_graph::Edge::new(edge.a, edge.b, edge.cost)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryDef {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicyDef {
    #[default]
    LastWins,
    KeepMin,
    Reject,
}

impl From<DuplicatePolicyDef> for DuplicatePolicy {
    fn from(def: DuplicatePolicyDef) -> Self {
        match def {
            DuplicatePolicyDef::LastWins => DuplicatePolicy::LastWins,
            DuplicatePolicyDef::KeepMin => DuplicatePolicy::KeepMin,
            DuplicatePolicyDef::Reject => DuplicatePolicy::Reject,
        }
    }
}
