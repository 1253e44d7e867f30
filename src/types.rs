// Définitions des structures et types partagés

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifiant d'un routeur, attribué par l'appelant
pub type RouterId = i64;

/// Coût d'un lien (toujours positif ou nul)
pub type Cost = u32;

/// Distance cumulée ; u64 ne déborde pas pour u32::MAX routeurs × u32::MAX de coût
pub type Distance = u64;

/// Table de routage : destination -> distance la plus courte
pub type RoutingTable = BTreeMap<RouterId, Distance>;

/// Prédécesseur de chaque routeur atteint sur l'arbre des plus courts chemins.
/// `None` marque la source ; les routeurs non atteints sont absents.
pub type PredecessorMap = BTreeMap<RouterId, Option<RouterId>>;

/// Représentation d'un routeur dans la topologie
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Router {
    pub router_id: RouterId,
    pub neighbors: BTreeMap<RouterId, Cost>, // voisin -> coût du lien
    pub routing_table: RoutingTable,         // remplacée à chaque recalcul
}

impl Router {
    pub fn new(router_id: RouterId) -> Self {
        Self {
            router_id,
            neighbors: BTreeMap::new(),
            routing_table: RoutingTable::new(),
        }
    }

    pub fn add_neighbor(&mut self, neighbor_id: RouterId, cost: Cost) {
        self.neighbors.insert(neighbor_id, cost);
    }
}

/// Lien non orienté entre deux routeurs distincts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub a: RouterId,
    pub b: RouterId,
    pub cost: Cost,
}

impl Link {
    /// Vrai si le lien relie `x` et `y`, dans un sens ou dans l'autre
    pub fn connects(&self, x: RouterId, y: RouterId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

/// Résultat d'un calcul de Dijkstra depuis une source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortestPaths {
    pub source: RouterId,
    pub distances: BTreeMap<RouterId, Distance>,
    pub predecessors: PredecessorMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_connects_both_directions() {
        let link = Link { a: 1, b: 2, cost: 5 };
        assert!(link.connects(1, 2));
        assert!(link.connects(2, 1));
        assert!(!link.connects(1, 3));
    }

    #[test]
    fn test_router_neighbor_overwrite() {
        let mut router = Router::new(1);
        router.add_neighbor(2, 10);
        router.add_neighbor(2, 3);
        assert_eq!(router.neighbors.get(&2), Some(&3));
        assert_eq!(router.neighbors.len(), 1);
    }
}
