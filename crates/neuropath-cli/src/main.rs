//! Neuropath CLI - drive a personal pattern network from the shell.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

use commands::Session;
use config::Config;

#[derive(Parser)]
#[command(name = "neuropath")]
#[command(author, version, about = "Neuropath - Hebbian pattern networks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// State file (default: from neuropath.toml, else .neuropath/state.json)
    #[arg(long, global = true)]
    state: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new Neuropath project
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Build an example network and print a report
    Demo {
        /// Write the demo network to the state file
        #[arg(long)]
        save: bool,
    },

    /// Manage nodes
    Node {
        #[command(subcommand)]
        command: NodeCommands,
    },

    /// Connect two nodes
    Connect {
        /// Source node id
        source: u64,
        /// Target node id
        target: u64,

        /// Reinforcement strength (0.0 to 1.0)
        #[arg(short, long, default_value = "0.5")]
        strength: f64,

        /// Signed weight (-1.0 to 1.0)
        #[arg(short, long, default_value = "0.5", allow_negative_numbers = true)]
        weight: f64,
    },

    /// Manage pathways
    Pathway {
        #[command(subcommand)]
        command: PathwayCommands,
    },

    /// Fire a pathway
    Activate {
        /// Pathway id or name
        pathway: String,

        /// Trigger type: message, mood_entry or external_event
        #[arg(short, long, default_value = "message")]
        trigger: String,

        /// Trigger content
        #[arg(short, long, default_value = "")]
        content: String,

        /// Number of times to fire
        #[arg(short = 'n', long, default_value = "1")]
        times: u32,
    },

    /// Shift every connection strength in a pathway
    Strengthen {
        /// Pathway id or name
        pathway: String,

        /// Amount to add (-1.0 to 1.0)
        #[arg(short, long, allow_negative_numbers = true)]
        delta: f64,
    },

    /// Show network statistics
    Snapshot {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Assess crisis risk and suggest healthier pathways
    Assess {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Adopt a suggested pathway by its number from `assess`
    Adopt {
        /// Suggestion number
        index: usize,
    },
}

#[derive(Subcommand)]
enum NodeCommands {
    /// Add a node
    Add {
        /// Node type: emotion, memory, trigger, response or pattern
        node_type: String,
        /// Label
        label: String,

        #[arg(short, long, default_value = "0.0", allow_negative_numbers = true)]
        x: f64,
        #[arg(short, long, default_value = "0.0", allow_negative_numbers = true)]
        y: f64,
        #[arg(short, long, allow_negative_numbers = true)]
        z: Option<f64>,

        /// Explicit content tag: harmful, protective or neutral
        #[arg(long)]
        tag: Option<String>,
    },

    /// List nodes
    List,
}

#[derive(Subcommand)]
enum PathwayCommands {
    /// Group nodes into a pathway
    Create {
        /// Pathway name
        name: String,
        /// Member node ids
        #[arg(required = true)]
        nodes: Vec<u64>,
    },

    /// List pathways
    List,

    /// Show activation history
    History {
        /// Pathway id or name (default: all)
        pathway: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let state = cli.state;
    let session = || -> Result<Session> { Ok(Session::new(Config::load()?, state.clone())) };

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Demo { save } => commands::demo::run(&session()?, save),
        Commands::Node { command } => match command {
            NodeCommands::Add { node_type, label, x, y, z, tag } => commands::node::add(
                &session()?,
                commands::node::AddArgs { node_type, label, x, y, z, tag },
            ),
            NodeCommands::List => commands::node::list(&session()?),
        },
        Commands::Connect { source, target, strength, weight } => {
            commands::connect::run(&session()?, source, target, strength, weight)
        }
        Commands::Pathway { command } => match command {
            PathwayCommands::Create { name, nodes } => {
                commands::pathway::create(&session()?, &name, &nodes)
            }
            PathwayCommands::List => commands::pathway::list(&session()?),
            PathwayCommands::History { pathway } => {
                commands::pathway::history(&session()?, pathway.as_deref())
            }
        },
        Commands::Activate { pathway, trigger, content, times } => {
            commands::activate::run(&session()?, &pathway, &trigger, &content, times)
        }
        Commands::Strengthen { pathway, delta } => {
            commands::strengthen::run(&session()?, &pathway, delta)
        }
        Commands::Snapshot { json } => commands::snapshot::run(&session()?, json),
        Commands::Assess { json } => commands::assess::run(&session()?, json),
        Commands::Adopt { index } => commands::assess::adopt(&session()?, index),
    }
}
