// Construction de la table de routage à partir des distances calculées par Dijkstra.

use crate::types::{RoutingTable, ShortestPaths};

/// Projette les distances d'un calcul en table de routage : toutes les
/// destinations atteintes, sauf la source elle-même.
pub fn build_routing_table(paths: &ShortestPaths) -> RoutingTable {
    paths
        .distances
        .iter()
        .filter(|(&dest_id, _)| dest_id != paths.source)
        .map(|(&dest_id, &distance)| (dest_id, distance))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use crate::types::PredecessorMap;

    #[test]
    fn test_source_excluded() {
        let paths = ShortestPaths {
            source: 2,
            distances: BTreeMap::from([(1, 3), (2, 0), (5, 8)]),
            predecessors: PredecessorMap::new(),
        };
        let table = build_routing_table(&paths);
        assert_eq!(table, BTreeMap::from([(1, 3), (5, 8)]));
    }

    #[test]
    fn test_isolated_source_gives_empty_table() {
        let paths = ShortestPaths {
            source: 1,
            distances: BTreeMap::from([(1, 0)]),
            predecessors: PredecessorMap::from([(1, None)]),
        };
        assert!(build_routing_table(&paths).is_empty());
    }
}
