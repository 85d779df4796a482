//! Built-in demonstration network.

use crate::schema::{DuplicatePolicyDef, EdgeDef, NetworkDef, QueryDef};
use crate::validate::LATEST_VERSION;

/// Ten intercity connections with travel costs, plus the Kazan -> Perm query.
pub fn reference_network() -> NetworkDef {
    let edges = [
        ("Moscow", "St.Pitersbourg", 3000.0),
        ("Moscow", "Kazan", 3000.0),
        ("Moscow", "Rostov", 6000.0),
        ("St.Pitersbourg", "Kazan", 1000.0),
        ("St.Pitersbourg", "Kemerovo", 3000.0),
        ("Perm", "Kemerovo", 2000.0),
        ("Perm", "Rostov", 3000.0),
        ("Kazan", "Kemerovo", 1000.0),
        ("Kazan", "Rostov", 2000.0),
        ("Kemerovo", "Rostov", 5000.0),
    ];

    NetworkDef {
        version: LATEST_VERSION,
        name: "Intercity".to_string(),
        duplicate_policy: DuplicatePolicyDef::LastWins,
        edges: edges
            .into_iter()
            .map(|(a, b, cost)| EdgeDef::new(a, b, cost))
            .collect(),
        queries: vec![QueryDef {
            source: "Kazan".to_string(),
            target: "Perm".to_string(),
        }],
    }
}
