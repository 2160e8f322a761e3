//! Node registry commands.

use anyhow::{bail, Result};
use colored::Colorize;
use neuropath::prelude::*;

use super::Session;

pub struct AddArgs {
    pub node_type: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub tag: Option<String>,
}

pub fn add(session: &Session, args: AddArgs) -> Result<()> {
    let Some(node_type) = NodeType::parse(&args.node_type) else {
        bail!(
            "Unknown node type: {} (expected emotion, memory, trigger, response or pattern)",
            args.node_type
        );
    };
    let position = match args.z {
        Some(z) => Position::with_z(args.x, args.y, z),
        None => Position::new(args.x, args.y),
    };

    let mut engine = session.open()?;
    let node = match args.tag.as_deref() {
        None => engine.add_node(node_type, args.label, position),
        Some(tag) => {
            let tag = match tag.to_lowercase().as_str() {
                "harmful" => ContentTag::Harmful,
                "protective" => ContentTag::Protective,
                "neutral" => ContentTag::Neutral,
                other => bail!("Unknown tag: {} (expected harmful, protective or neutral)", other),
            };
            engine.add_tagged_node(node_type, args.label, position, tag)
        }
    };
    session.save(&engine)?;

    println!(
        "{} Added {} {} {}",
        "✓".green().bold(),
        node.node_type,
        node.id.0.to_string().cyan(),
        format!("\"{}\"", node.label).white()
    );
    if node.tag != ContentTag::Neutral {
        println!("  tag: {:?}", node.tag);
    }
    Ok(())
}

pub fn list(session: &Session) -> Result<()> {
    let engine = session.open_existing()?;
    let nodes = engine.registry().nodes();
    if nodes.is_empty() {
        println!("{} No nodes.", "•".yellow());
        return Ok(());
    }

    println!("{}", "Nodes".blue().bold());
    for node in nodes {
        println!(
            "  {:>4}  {:<9} {:<30} activation {:.2}",
            node.id.0.to_string().cyan(),
            node.node_type.as_str(),
            node.label,
            node.activation_level
        );
    }
    Ok(())
}
