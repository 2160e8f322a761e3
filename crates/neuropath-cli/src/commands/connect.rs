//! Connect two nodes.

use anyhow::Result;
use colored::Colorize;
use neuropath::prelude::*;

use super::Session;

pub fn run(session: &Session, source: u64, target: u64, strength: f64, weight: f64) -> Result<()> {
    let mut engine = session.open_existing()?;
    let conn = engine.connect_nodes(NodeId(source), NodeId(target), strength, weight)?;
    session.save(&engine)?;

    println!(
        "{} Connected {} → {} as connection {} ({:?}, strength {:.2}, weight {:+.2})",
        "✓".green().bold(),
        source,
        target,
        conn.id.0.to_string().cyan(),
        conn.pathway_type,
        conn.strength,
        conn.weight
    );
    Ok(())
}
