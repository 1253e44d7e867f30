// Stockage de la topologie : routeurs et liens pondérés non orientés.

use std::collections::BTreeMap;
use log::{info, warn};
use crate::error::RoutingError;
use crate::types::{Cost, Link, Router, RouterId};

/// Structure représentant la topologie complète du réseau
#[derive(Debug, Clone, Default)]
pub struct Topology {
    routers: BTreeMap<RouterId, Router>,
    links: Vec<Link>, // ordre d'insertion, utilisé pour l'affichage
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute un routeur sans voisin ni table de routage
    pub fn add_router(&mut self, router_id: RouterId) -> Result<(), RoutingError> {
        if self.routers.contains_key(&router_id) {
            warn!("Router {} already exists", router_id);
            return Err(RoutingError::DuplicateRouter(router_id));
        }
        self.routers.insert(router_id, Router::new(router_id));
        info!("Router {} added", router_id);
        Ok(())
    }

    /// Ajoute un lien bidirectionnel entre deux routeurs existants.
    /// Un lien déjà présent entre la même paire est écrasé dans les deux sens.
    pub fn add_link(&mut self, a: RouterId, b: RouterId, cost: i64) -> Result<(), RoutingError> {
        for id in [a, b] {
            if !self.routers.contains_key(&id) {
                warn!("Link {} <-> {} rejected: router {} doesn't exist", a, b, id);
                return Err(RoutingError::UnknownRouter(id));
            }
        }
        if a == b {
            warn!("Link rejected: cannot link router {} to itself", a);
            return Err(RoutingError::SelfLink(a));
        }
        let cost = Cost::try_from(cost).map_err(|_| {
            warn!("Link {} <-> {} rejected: invalid cost {}", a, b, cost);
            RoutingError::InvalidCost(cost)
        })?;

        // Les deux extrémités existent, vérifié plus haut
        if let Some(router) = self.routers.get_mut(&a) {
            router.add_neighbor(b, cost);
        }
        if let Some(router) = self.routers.get_mut(&b) {
            router.add_neighbor(a, cost);
        }
        self.links.push(Link { a, b, cost });
        info!("Link added: {} <-> {} (cost {})", a, b, cost);
        Ok(())
    }

    /// Supprime tous les routeurs et tous les liens
    pub fn clear(&mut self) {
        self.routers.clear();
        self.links.clear();
    }

    pub fn contains(&self, router_id: RouterId) -> bool {
        self.routers.contains_key(&router_id)
    }

    pub fn router(&self, router_id: RouterId) -> Option<&Router> {
        self.routers.get(&router_id)
    }

    pub(crate) fn router_mut(&mut self, router_id: RouterId) -> Option<&mut Router> {
        self.routers.get_mut(&router_id)
    }

    /// Routeurs triés par identifiant croissant
    pub fn routers(&self) -> impl Iterator<Item = &Router> {
        self.routers.values()
    }

    pub fn router_ids(&self) -> Vec<RouterId> {
        self.routers.keys().copied().collect()
    }

    /// Voisins d'un routeur avec le coût du lien, triés par identifiant
    pub fn neighbors(&self, router_id: RouterId) -> impl Iterator<Item = (RouterId, Cost)> + '_ {
        self.routers
            .get(&router_id)
            .into_iter()
            .flat_map(|router| router.neighbors.iter().map(|(&id, &cost)| (id, cost)))
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn is_empty(&self) -> bool {
        self.routers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.routers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Topology {
        let mut topology = Topology::new();
        for id in 1..=3 {
            topology.add_router(id).unwrap();
        }
        topology.add_link(1, 2, 4).unwrap();
        topology.add_link(2, 3, 1).unwrap();
        topology
    }

    #[test]
    fn test_duplicate_router_rejected() {
        let mut topology = triangle();
        assert_eq!(topology.add_router(2), Err(RoutingError::DuplicateRouter(2)));
        assert_eq!(topology.len(), 3);
    }

    #[test]
    fn test_link_is_symmetric() {
        let topology = triangle();
        assert_eq!(topology.router(1).unwrap().neighbors.get(&2), Some(&4));
        assert_eq!(topology.router(2).unwrap().neighbors.get(&1), Some(&4));
        assert_eq!(topology.links().len(), 2);
    }

    #[test]
    fn test_link_validation_leaves_topology_unchanged() {
        let mut topology = triangle();
        assert_eq!(topology.add_link(1, 9, 1), Err(RoutingError::UnknownRouter(9)));
        assert_eq!(topology.add_link(7, 1, 1), Err(RoutingError::UnknownRouter(7)));
        assert_eq!(topology.add_link(2, 2, 1), Err(RoutingError::SelfLink(2)));
        assert_eq!(topology.add_link(1, 3, -1), Err(RoutingError::InvalidCost(-1)));
        assert_eq!(topology.links().len(), 2);
        assert!(topology.router(1).unwrap().neighbors.get(&3).is_none());
        assert!(topology.router(3).unwrap().neighbors.get(&1).is_none());
    }

    #[test]
    fn test_cost_above_supported_range_rejected() {
        let mut topology = triangle();
        let too_large = i64::from(Cost::MAX) + 1;
        assert_eq!(topology.add_link(1, 3, too_large), Err(RoutingError::InvalidCost(too_large)));
    }

    #[test]
    fn test_readding_link_overwrites_both_directions() {
        let mut topology = triangle();
        topology.add_link(2, 1, 9).unwrap();
        assert_eq!(topology.router(1).unwrap().neighbors.get(&2), Some(&9));
        assert_eq!(topology.router(2).unwrap().neighbors.get(&1), Some(&9));
        assert_eq!(topology.links().len(), 3);
    }

    #[test]
    fn test_zero_cost_link_allowed() {
        let mut topology = triangle();
        assert!(topology.add_link(1, 3, 0).is_ok());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut topology = triangle();
        topology.clear();
        topology.clear();
        assert!(topology.is_empty());
        assert!(topology.links().is_empty());
        assert_eq!(topology.neighbors(1).count(), 0);
    }
}
