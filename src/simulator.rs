// État du simulateur : topologie, tables de routage et cartes de prédécesseurs.

use std::collections::BTreeMap;
use log::{debug, info, warn};
use serde::Serialize;
use crate::core::path_calculation::reconstruct;
use crate::core::routing_table::build_routing_table;
use crate::core::topology::Topology;
use crate::dijkstra::compute_from;
use crate::error::RoutingError;
use crate::types::{Cost, Distance, Link, PredecessorMap, Router, RouterId, RoutingTable, ShortestPaths};

/// Agrégat possédant toute la topologie et les résultats du dernier recalcul
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    topology: Topology,
    parent_map: BTreeMap<RouterId, PredecessorMap>, // une carte par source calculée
}

/// Vue sérialisable d'un routeur pour l'export JSON
#[derive(Debug, Clone, Serialize)]
pub struct RouterSnapshot {
    pub router_id: RouterId,
    pub neighbors: BTreeMap<RouterId, Cost>,
    pub routing_table: RoutingTable,
    pub predecessors: Option<PredecessorMap>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub routers: Vec<RouterSnapshot>,
    pub links: Vec<Link>,
}

impl Simulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_router(&mut self, router_id: RouterId) -> Result<(), RoutingError> {
        self.topology.add_router(router_id)
    }

    pub fn add_link(&mut self, a: RouterId, b: RouterId, cost: i64) -> Result<(), RoutingError> {
        self.topology.add_link(a, b, cost)
    }

    /// Relance Dijkstra pour chaque routeur configuré, l'un après l'autre.
    /// Chaque routeur voit sa table de routage et sa carte de prédécesseurs
    /// remplacées une fois son propre calcul terminé.
    pub fn recompute_all(&mut self) -> Result<BTreeMap<RouterId, ShortestPaths>, RoutingError> {
        if self.topology.is_empty() {
            warn!("Recompute requested with no routers configured");
            return Err(RoutingError::NoRoutersConfigured);
        }

        info!(
            "Recalcul SPF: {} routeurs, {} liens",
            self.topology.len(),
            self.topology.links().len()
        );

        let mut results = BTreeMap::new();
        for router_id in self.topology.router_ids() {
            let paths = compute_from(&self.topology, router_id)?;
            let table = build_routing_table(&paths);
            debug!("Router {}: {} routes", router_id, table.len());

            if let Some(router) = self.topology.router_mut(router_id) {
                router.routing_table = table;
            }
            self.parent_map.insert(router_id, paths.predecessors.clone());
            results.insert(router_id, paths);
        }
        Ok(results)
    }

    /// Table de routage courante ; vide si le routeur est inconnu ou jamais calculé
    pub fn routing_table(&self, router_id: RouterId) -> RoutingTable {
        self.topology
            .router(router_id)
            .map(|router| router.routing_table.clone())
            .unwrap_or_default()
    }

    pub fn get_path(&self, source: RouterId, destination: RouterId) -> Result<Vec<RouterId>, RoutingError> {
        reconstruct(source, destination, self.parent_map.get(&source))
    }

    /// Coût total du plus court chemin, lu dans la table de routage de la source
    pub fn path_cost(&self, source: RouterId, destination: RouterId) -> Option<Distance> {
        self.topology
            .router(source)
            .and_then(|router| router.routing_table.get(&destination).copied())
    }

    /// Vrai si un recalcul a déjà été fait pour cette source
    pub fn has_computed(&self, source: RouterId) -> bool {
        self.parent_map.contains_key(&source)
    }

    pub fn predecessor_map(&self, source: RouterId) -> Option<&PredecessorMap> {
        self.parent_map.get(&source)
    }

    /// Oublie tous les routeurs, liens, tables et cartes de prédécesseurs
    pub fn clear(&mut self) {
        self.topology.clear();
        self.parent_map.clear();
        info!("All routers and links cleared");
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn contains(&self, router_id: RouterId) -> bool {
        self.topology.contains(router_id)
    }

    pub fn routers(&self) -> impl Iterator<Item = &Router> {
        self.topology.routers()
    }

    pub fn links(&self) -> &[Link] {
        self.topology.links()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            routers: self
                .topology
                .routers()
                .map(|router| RouterSnapshot {
                    router_id: router.router_id,
                    neighbors: router.neighbors.clone(),
                    routing_table: router.routing_table.clone(),
                    predecessors: self.parent_map.get(&router.router_id).cloned(),
                })
                .collect(),
            links: self.topology.links().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_with_shortcut() -> Simulator {
        let mut sim = Simulator::new();
        for id in 1..=4 {
            sim.add_router(id).unwrap();
        }
        sim.add_link(1, 2, 1).unwrap();
        sim.add_link(2, 3, 1).unwrap();
        sim.add_link(3, 4, 1).unwrap();
        sim.add_link(1, 4, 10).unwrap();
        sim
    }

    #[test]
    fn test_recompute_on_empty_topology() {
        let mut sim = Simulator::new();
        assert_eq!(sim.recompute_all().unwrap_err(), RoutingError::NoRoutersConfigured);
        assert!(!sim.has_computed(1));
    }

    #[test]
    fn test_path_through_cheaper_links() {
        let mut sim = line_with_shortcut();
        sim.recompute_all().unwrap();
        assert_eq!(sim.get_path(1, 4), Ok(vec![1, 2, 3, 4]));
        assert_eq!(sim.path_cost(1, 4), Some(3));
        assert_eq!(sim.get_path(4, 1), Ok(vec![4, 3, 2, 1]));
    }

    #[test]
    fn test_tables_empty_before_recompute() {
        let sim = line_with_shortcut();
        assert!(sim.routing_table(1).is_empty());
        assert!(sim.get_path(1, 4).is_err());
        assert!(!sim.has_computed(1));
    }

    #[test]
    fn test_tables_stale_after_mutation() {
        let mut sim = line_with_shortcut();
        sim.recompute_all().unwrap();
        sim.add_router(5).unwrap();
        sim.add_link(4, 5, 2).unwrap();

        // Pas de recalcul : l'ancienne table reste en place
        assert_eq!(sim.routing_table(1).get(&5), None);
        assert_eq!(sim.routing_table(1).get(&4), Some(&3));
        assert!(sim.routing_table(5).is_empty());

        sim.recompute_all().unwrap();
        assert_eq!(sim.routing_table(1).get(&5), Some(&5));
    }

    #[test]
    fn test_clear_wipes_everything() {
        let mut sim = line_with_shortcut();
        sim.recompute_all().unwrap();
        sim.clear();
        for id in 1..=4 {
            assert!(sim.routing_table(id).is_empty());
            assert!(!sim.has_computed(id));
        }
        assert!(sim.links().is_empty());
        assert!(sim.get_path(1, 4).is_err());
    }

    #[test]
    fn test_snapshot_contains_predecessors() {
        let mut sim = line_with_shortcut();
        sim.recompute_all().unwrap();
        let snapshot = sim.snapshot();
        assert_eq!(snapshot.routers.len(), 4);
        assert_eq!(snapshot.links.len(), 4);
        let first = &snapshot.routers[0];
        assert_eq!(first.router_id, 1);
        assert_eq!(first.predecessors.as_ref().and_then(|p| p.get(&4)), Some(&Some(3)));
    }
}
