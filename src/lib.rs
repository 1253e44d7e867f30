// Bibliothèque du simulateur de routage à état de liens : topologie, calcul
// des plus courts chemins (Dijkstra), tables de routage et reconstruction de chemins.

pub mod cli;
pub mod core;
pub mod dijkstra;
pub mod error;
pub mod init;
pub mod read_config;
pub mod simulator;
pub mod state;
pub mod types;

pub use error::{AppError, Result, RoutingError};
pub use simulator::Simulator;
pub use state::AppState;
pub use types::{Cost, Distance, Link, PredecessorMap, Router, RouterId, RoutingTable};
