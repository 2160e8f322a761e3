//! Fire a pathway.

use anyhow::{bail, Result};
use colored::Colorize;
use neuropath::prelude::*;

use super::{resolve_pathway, Session};

pub fn run(session: &Session, key: &str, trigger: &str, content: &str, times: u32) -> Result<()> {
    let Some(trigger_type) = TriggerType::parse(trigger) else {
        bail!("Unknown trigger: {} (expected message, mood_entry or external_event)", trigger);
    };

    let mut engine = session.open_existing()?;
    let id = resolve_pathway(&engine, key)?;
    let mut changed = 0;
    for _ in 0..times {
        let record = engine.activate_pathway(id, trigger_type, content)?;
        changed += record.strength_changes.len();
    }
    session.save(&engine)?;

    let pathway = engine.pathway(id).map(|p| (p.name.clone(), p.activation_frequency));
    if let Some((name, frequency)) = pathway {
        println!(
            "{} Activated {} {} time(s); total {}",
            "✓".green().bold(),
            name.cyan(),
            times,
            frequency
        );
    }
    println!("  Strength changes: {}", changed);
    if let Some(level) = engine.classify_pathway(id)? {
        println!("  Live risk:        {}", super::paint_risk(level));
    }
    Ok(())
}
