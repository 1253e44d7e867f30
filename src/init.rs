use std::sync::Arc;
use crate::error::Result;
use crate::read_config::TopologyConfig;
use crate::simulator::Simulator;
use crate::state::AppState;

/// Initialise env_logger ; `RUST_LOG` vaut "info" par défaut, `level` le remplace
pub fn init_logging_and_env(level: Option<&str>) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.parse_filters(level);
    }
    builder.init();
}

/// Construit l'état partagé, avec la topologie du fichier de configuration si fournie
pub fn init_state(config: Option<&TopologyConfig>) -> Result<Arc<AppState>> {
    let mut simulator = Simulator::new();
    if let Some(config) = config {
        config.apply(&mut simulator)?;
    }
    Ok(AppState::new(simulator))
}
