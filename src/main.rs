use std::error::Error as StdError;
use std::io::{self, Write};
use std::path::PathBuf;
use clap::Parser;
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};
use ospf_simulator::cli::{execute, help_text, parse_command, Command};
use ospf_simulator::init::{init_logging_and_env, init_state};
use ospf_simulator::read_config::read_topology_config;

/// Simulateur OSPF : tables de routage et plus courts chemins
#[derive(Debug, Parser)]
#[command(name = "routing", version, about)]
struct Args {
    /// Fichier TOML décrivant les routeurs et les liens
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Recalcule les tables dès le chargement de la topologie
    #[arg(long)]
    run: bool,

    /// Filtre de logs (ex: "debug"), prioritaire sur RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn StdError>> {
    let args = Args::parse();
    init_logging_and_env(args.log_level.as_deref());

    let config = match &args.config {
        Some(path) => Some(read_topology_config(path)?),
        None => None,
    };
    let state = init_state(config.as_ref())?;

    if args.run {
        match execute(&state, Command::Run).await {
            Ok(report) => println!("{}", report),
            Err(e) => println!("Error: {}", e),
        }
    }

    println!("Bienvenue dans le simulateur OSPF");
    println!("{}", help_text());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Exit) => {
                println!("Au revoir!");
                break;
            }
            Ok(command) => match execute(&state, command).await {
                Ok(response) => println!("{}", response),
                Err(e) => println!("Error: {}", e),
            },
            Err(e) => println!("Error: {}", e),
        }
    }

    info!("CLI terminé");
    Ok(())
}
