// Couche de commandes texte : traduit les saisies utilisateur en appels au simulateur
// et met en forme les résultats.

use std::fmt::Write as _;
use crate::core::path_calculation::links_on_path;
use crate::error::{AppError, Result, RoutingError};
use crate::simulator::Simulator;
use crate::state::AppState;
use crate::types::{RouterId, RoutingTable};

const SEPARATOR_WIDTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddRouter(RouterId),
    AddLink { a: RouterId, b: RouterId, cost: i64 },
    Run,
    Table(Option<RouterId>),
    Path { source: RouterId, destination: RouterId },
    Links,
    Dump,
    Clear,
    Help,
    Exit,
}

pub fn help_text() -> String {
    [
        "Commandes disponibles:",
        "  router <id>             - Ajoute un routeur",
        "  link <r1> <r2> <cost>   - Ajoute un lien bidirectionnel",
        "  run                     - Recalcule toutes les tables de routage (OSPF)",
        "  table [id]              - Affiche les tables de routage",
        "  path <start> <dest>     - Affiche le plus court chemin",
        "  links                   - Liste les liens",
        "  dump                    - Exporte l'état en JSON",
        "  clear                   - Supprime routeurs et liens",
        "  exit                    - Quitte le CLI",
    ]
    .join("\n")
}

fn parse_int(value: &str, what: &str) -> Result<i64> {
    value
        .parse::<i64>()
        .map_err(|_| AppError::ParseError(format!("Invalid {}: {}", what, value)))
}

fn usage(usage: &str) -> AppError {
    AppError::ParseError(format!("Usage: {}", usage))
}

/// Analyse une ligne saisie ; les identifiants et coûts doivent être des entiers
pub fn parse_command(line: &str) -> Result<Command> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = parts.split_first() else {
        return Err(AppError::ParseError("Empty command".to_string()));
    };

    match (name, args) {
        ("router", [id]) => Ok(Command::AddRouter(parse_int(id, "router ID")?)),
        ("router", _) => Err(usage("router <id>")),
        ("link", [a, b, cost]) => Ok(Command::AddLink {
            a: parse_int(a, "router ID")?,
            b: parse_int(b, "router ID")?,
            cost: parse_int(cost, "cost")?,
        }),
        ("link", _) => Err(usage("link <r1> <r2> <cost>")),
        ("run", []) => Ok(Command::Run),
        ("table", []) => Ok(Command::Table(None)),
        ("table", [id]) => Ok(Command::Table(Some(parse_int(id, "router ID")?))),
        ("table", _) => Err(usage("table [id]")),
        ("path", [source, destination]) => Ok(Command::Path {
            source: parse_int(source, "router ID")?,
            destination: parse_int(destination, "router ID")?,
        }),
        ("path", _) => Err(usage("path <start> <dest>")),
        ("links", []) => Ok(Command::Links),
        ("dump", []) => Ok(Command::Dump),
        ("clear", []) => Ok(Command::Clear),
        ("help", _) => Ok(Command::Help),
        ("exit", _) | ("quit", _) => Ok(Command::Exit),
        _ => Err(AppError::ParseError(format!("Unknown command: {}", line.trim()))),
    }
}

/// Exécute une commande sous le verrou de l'état partagé et renvoie la réponse à afficher
pub async fn execute(state: &AppState, command: Command) -> Result<String> {
    match command {
        Command::AddRouter(router_id) => {
            state.add_router(router_id).await?;
            Ok(format!("Router {} added", router_id))
        }
        Command::AddLink { a, b, cost } => {
            state.add_link(a, b, cost).await?;
            Ok(format!("Link added: {} <-> {} (cost {})", a, b, cost))
        }
        Command::Run => {
            let mut sim = state.lock().await;
            sim.recompute_all()?;
            Ok(format_routing_tables(&sim))
        }
        Command::Table(None) => Ok(format_routing_tables(&*state.lock().await)),
        Command::Table(Some(router_id)) => {
            let sim = state.lock().await;
            if !sim.contains(router_id) {
                return Err(RoutingError::UnknownRouter(router_id).into());
            }
            Ok(format_router_table(router_id, &sim.routing_table(router_id)))
        }
        Command::Path { source, destination } => show_path(&*state.lock().await, source, destination),
        Command::Links => Ok(format_links(&*state.lock().await)),
        Command::Dump => Ok(serde_json::to_string_pretty(&state.lock().await.snapshot())?),
        Command::Clear => {
            state.clear().await;
            Ok("All routers and links cleared".to_string())
        }
        Command::Help => Ok(help_text()),
        Command::Exit => Ok("Au revoir!".to_string()),
    }
}

/// Vérifie les routeurs et la présence d'un calcul avant de reconstruire le chemin
pub fn show_path(sim: &Simulator, source: RouterId, destination: RouterId) -> Result<String> {
    for router_id in [source, destination] {
        if !sim.contains(router_id) {
            return Err(RoutingError::UnknownRouter(router_id).into());
        }
    }
    if source == destination {
        return Err(RoutingError::SameRouter(source).into());
    }
    if !sim.has_computed(source) {
        return Err(AppError::NotComputed(source));
    }

    let path = sim.get_path(source, destination)?;
    Ok(format_path(sim, &path))
}

pub fn format_path(sim: &Simulator, path: &[RouterId]) -> String {
    let path_str = path.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(" -> ");
    let total_cost = match (path.first(), path.last()) {
        (Some(&start), Some(&dest)) => sim
            .path_cost(start, dest)
            .map(|cost| cost.to_string())
            .unwrap_or_else(|| "N/A".to_string()),
        _ => "N/A".to_string(),
    };

    let mut out = format!("Path: {}\nTotal Cost: {}", path_str, total_cost);
    for link in links_on_path(sim.links(), path) {
        let _ = write!(out, "\n  {} <-> {} (cost {})", link.a, link.b, link.cost);
    }
    out
}

pub fn format_router_table(router_id: RouterId, table: &RoutingTable) -> String {
    let mut out = format!("Router {}:\n{}\n", router_id, "-".repeat(SEPARATOR_WIDTH));
    if table.is_empty() {
        out.push_str("  No routes available\n");
    } else {
        for (dest, distance) in table {
            let _ = writeln!(out, "  Dest {}: distance {}", dest, distance);
        }
    }
    out
}

/// Rapport de toutes les tables, routeurs et destinations triés
pub fn format_routing_tables(sim: &Simulator) -> String {
    if sim.topology().is_empty() {
        return "No routers configured".to_string();
    }

    let mut out = format!("OSPF ROUTING TABLES\n{}\n", "=".repeat(SEPARATOR_WIDTH));
    for router in sim.routers() {
        out.push('\n');
        out.push_str(&format_router_table(router.router_id, &router.routing_table));
    }
    out
}

pub fn format_links(sim: &Simulator) -> String {
    if sim.links().is_empty() {
        return "No links configured".to_string();
    }
    sim.links()
        .iter()
        .map(|link| format!("{} <-> {} (cost {})", link.a, link.b, link.cost))
        .collect::<Vec<_>>()
        .join("\n")
}
