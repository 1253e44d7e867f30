// Gestion des erreurs personnalisées

use thiserror::Error;
use crate::types::RouterId;

/// Erreurs du cœur de routage. Aucune n'est fatale : l'état reste inchangé.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    #[error("Router {0} already exists")]
    DuplicateRouter(RouterId),
    #[error("Router {0} doesn't exist")]
    UnknownRouter(RouterId),
    #[error("Cannot link router {0} to itself")]
    SelfLink(RouterId),
    #[error("Invalid link cost {0}: cost must be >= 0")]
    InvalidCost(i64),
    #[error("No routers configured")]
    NoRoutersConfigured,
    #[error("Start and destination must be different (router {0})")]
    SameRouter(RouterId),
    #[error("No path found from {start} to {destination}")]
    NotFound {
        start: RouterId,
        destination: RouterId,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Run OSPF first: no routes computed for router {0}")]
    NotComputed(RouterId),
    #[error("Routing error: {0}")]
    Routing(#[from] RoutingError),
}

pub type Result<T> = std::result::Result<T, AppError>;
