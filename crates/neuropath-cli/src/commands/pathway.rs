//! Pathway commands.

use anyhow::Result;
use colored::Colorize;
use neuropath::prelude::*;

use super::{paint_risk, Session};

pub fn create(session: &Session, name: &str, nodes: &[u64]) -> Result<()> {
    let mut engine = session.open_existing()?;
    let ids: Vec<NodeId> = nodes.iter().map(|n| NodeId(*n)).collect();
    let pathway = engine.create_pathway(name, &ids)?;
    session.save(&engine)?;

    println!(
        "{} Created pathway {} {}",
        "✓".green().bold(),
        pathway.id.0.to_string().cyan(),
        format!("\"{}\"", pathway.name).white()
    );
    println!("  Nodes:            {}", pathway.node_ids.len());
    println!("  Connections:      {}", pathway.connection_ids.len());
    println!("  Dominant emotion: {}", pathway.dominant_emotion);
    println!("  Risk:             {}", paint_risk(pathway.crisis_risk_level));
    Ok(())
}

pub fn list(session: &Session) -> Result<()> {
    let engine = session.open_existing()?;
    if engine.pathways().is_empty() {
        println!("{} No pathways.", "•".yellow());
        return Ok(());
    }

    println!("{}", "Pathways".blue().bold());
    for pathway in engine.pathways() {
        let live = engine
            .classify_pathway(pathway.id)?
            .map(paint_risk)
            .unwrap_or_else(|| "-".dimmed());
        println!(
            "  {:>4}  {:<28} fired {:>3}x  created {}  live {}",
            pathway.id.0.to_string().cyan(),
            pathway.name,
            pathway.activation_frequency,
            paint_risk(pathway.crisis_risk_level),
            live
        );
    }
    Ok(())
}

pub fn history(session: &Session, key: Option<&str>) -> Result<()> {
    let engine = session.open_existing()?;
    let records: Vec<&PathwayActivation> = match key {
        Some(key) => engine.activations_for(super::resolve_pathway(&engine, key)?),
        None => engine.activation_history().iter().collect(),
    };
    if records.is_empty() {
        println!("{} No activations recorded.", "•".yellow());
        return Ok(());
    }

    for record in records {
        println!(
            "  {}  {}  {:?}  {} nodes, {} strength changes  {}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
            record.pathway_id,
            record.trigger_type,
            record.fired_nodes.len(),
            record.strength_changes.len(),
            record.trigger_content
        );
    }
    Ok(())
}
