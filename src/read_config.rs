// Module de lecture de la topologie depuis un fichier TOML

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use crate::error::{AppError, Result};
use crate::simulator::Simulator;
use crate::types::RouterId;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LinkConfig {
    pub a: RouterId,
    pub b: RouterId,
    pub cost: i64, // signé : un coût négatif est refusé par la topologie
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct TopologyConfig {
    #[serde(default)]
    pub routers: Vec<RouterId>,
    #[serde(default)]
    pub links: Vec<LinkConfig>,
}

impl TopologyConfig {
    /// Rejoue les routeurs puis les liens via les opérations validées du simulateur
    pub fn apply(&self, simulator: &mut Simulator) -> Result<()> {
        for &router_id in &self.routers {
            simulator.add_router(router_id)?;
        }
        for link in &self.links {
            simulator.add_link(link.a, link.b, link.cost)?;
        }
        Ok(())
    }
}

/// Lit une topologie depuis une chaîne TOML
pub fn parse_topology_config(content: &str) -> Result<TopologyConfig> {
    toml::from_str(content)
        .map_err(|e| AppError::ConfigError(format!("Failed to parse topology: {}", e)))
}

/// Lit la topologie depuis un fichier TOML
pub fn read_topology_config<P: AsRef<Path>>(path: P) -> Result<TopologyConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AppError::ConfigError(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| AppError::ConfigError(format!("Failed to read config file {}: {}", path.display(), e)))?;
    let config = parse_topology_config(&content)
        .map_err(|e| AppError::ConfigError(format!("{} ({})", e, path.display())))?;

    log::info!(
        "Loaded topology from {}: {} routers, {} links",
        path.display(),
        config.routers.len(),
        config.links.len()
    );
    log::debug!("Config: {:?}", config);

    Ok(config)
}
