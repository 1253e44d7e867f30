// Module d'implémentation de l'algorithme de Dijkstra
// Calcul des plus courts chemins depuis un routeur source sur la topologie courante

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap, HashSet};
use log::debug;
use crate::core::topology::Topology;
use crate::error::RoutingError;
use crate::types::{Distance, PredecessorMap, RouterId, ShortestPaths};

/// Nœud utilisé dans la file de priorité de Dijkstra
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct DijkstraNode {
    router_id: RouterId,
    total_cost: Distance,
}

impl Ord for DijkstraNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap est un tas max : on inverse pour extraire le coût minimum,
        // puis le plus petit identifiant à coût égal
        other.total_cost.cmp(&self.total_cost)
            .then_with(|| other.router_id.cmp(&self.router_id))
    }
}

impl PartialOrd for DijkstraNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Calcule les distances et l'arbre des prédécesseurs depuis `source`.
///
/// Les routeurs non atteignables sont absents des deux résultats. La distance
/// vers la source elle-même (0) est conservée ici ; c'est la construction de la
/// table de routage qui l'écarte.
///
/// À coût égal, le routeur de plus petit identifiant est extrait en premier et
/// la relaxation est stricte : le premier prédécesseur trouvé pour une distance
/// donnée est conservé.
pub fn compute_from(topology: &Topology, source: RouterId) -> Result<ShortestPaths, RoutingError> {
    if !topology.contains(source) {
        return Err(RoutingError::UnknownRouter(source));
    }

    let mut distances: BTreeMap<RouterId, Distance> = BTreeMap::new();
    let mut predecessors = PredecessorMap::new();
    let mut visited = HashSet::new();
    let mut heap = BinaryHeap::new();

    distances.insert(source, 0);
    predecessors.insert(source, None);
    heap.push(DijkstraNode { router_id: source, total_cost: 0 });

    while let Some(current) = heap.pop() {
        if !visited.insert(current.router_id) {
            continue;
        }

        for (neighbor_id, cost) in topology.neighbors(current.router_id) {
            if visited.contains(&neighbor_id) {
                continue;
            }

            let new_cost = current.total_cost + Distance::from(cost);
            let is_better_path = match distances.get(&neighbor_id) {
                Some(&old_cost) => new_cost < old_cost,
                None => true,
            };

            if is_better_path {
                distances.insert(neighbor_id, new_cost);
                predecessors.insert(neighbor_id, Some(current.router_id));
                heap.push(DijkstraNode { router_id: neighbor_id, total_cost: new_cost });
            }
        }
    }

    debug!(
        "Dijkstra depuis {}: {} routeurs atteints sur {}",
        source,
        visited.len(),
        topology.len()
    );

    Ok(ShortestPaths { source, distances, predecessors })
}
