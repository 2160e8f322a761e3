//! Apply outcome feedback to a pathway's connections.

use anyhow::Result;
use colored::Colorize;

use super::{resolve_pathway, Session};

pub fn run(session: &Session, key: &str, delta: f64) -> Result<()> {
    let mut engine = session.open_existing()?;
    let id = resolve_pathway(&engine, key)?;
    let changes = engine.update_pathway_strength(id, delta)?;
    session.save(&engine)?;

    println!("{} Adjusted {} connection(s) by {:+.2}", "✓".green().bold(), changes.len(), delta);
    for change in changes {
        println!(
            "  {}  {:.3} → {:.3}",
            change.connection_id.to_string().cyan(),
            change.old_strength,
            change.new_strength
        );
    }
    Ok(())
}
