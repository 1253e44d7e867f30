// Reconstruction d'un chemin à partir de la carte des prédécesseurs d'une source.

use crate::error::RoutingError;
use crate::types::{Link, PredecessorMap, RouterId};

/// Remonte les prédécesseurs depuis `destination` jusqu'à la source et renvoie
/// le chemin dans l'ordre source -> destination.
///
/// Renvoie `SameRouter` si source et destination sont identiques, et `NotFound`
/// si la chaîne ne se termine pas sur `source` (destination non atteinte, ou
/// carte absente/vide parce qu'aucun calcul n'a été fait).
pub fn reconstruct(
    source: RouterId,
    destination: RouterId,
    predecessors: Option<&PredecessorMap>,
) -> Result<Vec<RouterId>, RoutingError> {
    if source == destination {
        return Err(RoutingError::SameRouter(source));
    }
    let not_found = RoutingError::NotFound { start: source, destination };
    let predecessors = predecessors.ok_or_else(|| not_found.clone())?;

    let mut path = Vec::new();
    let mut current = Some(destination);
    while let Some(router_id) = current {
        // Un routeur absent de la carte n'a pas été atteint
        let previous = predecessors.get(&router_id).ok_or_else(|| not_found.clone())?;
        path.push(router_id);
        // La carte est un arbre : un chemin ne peut pas dépasser sa taille
        if path.len() > predecessors.len() {
            return Err(not_found);
        }
        current = *previous;
    }
    path.reverse();

    if path.first() != Some(&source) || path.len() < 2 {
        return Err(not_found);
    }
    Ok(path)
}

/// Liens dont les extrémités se suivent sur le chemin, dans l'ordre des liens
pub fn links_on_path<'a>(links: &'a [Link], path: &[RouterId]) -> Vec<&'a Link> {
    links
        .iter()
        .filter(|link| path.windows(2).any(|hop| link.connects(hop[0], hop[1])))
        .collect()
}
