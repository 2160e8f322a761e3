//! Print a network snapshot.

use anyhow::Result;
use colored::Colorize;
use neuropath::prelude::*;

use super::{print_json, Session};

pub fn run(session: &Session, json: bool) -> Result<()> {
    let engine = session.open_existing()?;
    let snap = engine.network_snapshot();
    if json {
        return print_json(&snap);
    }

    println!("{}", format!("Neuropath Snapshot for {}", snap.user_id).white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();

    println!("{}", "Network".blue().bold());
    println!("  Nodes:             {}", snap.total_nodes.to_string().cyan());
    println!("  Connections:       {}", snap.total_connections.to_string().cyan());
    println!("  Active pathways:   {}", snap.active_pathways.to_string().cyan());
    println!("  Density:           {:.4}", snap.network_density);
    println!();

    println!("{}", "Activity".blue().bold());
    println!("  Avg activation:    {:.3}", snap.average_activation);
    println!("  Avg strength:      {:.3}", snap.average_connection_strength);
    println!("  Dominant emotion:  {}", snap.dominant_emotion.cyan());
    println!("  Plasticity:        {:.3}", snap.plasticity_score);
    println!();

    println!("{}", "Crisis Flag".blue().bold());
    let flag = match snap.crisis_risk_level {
        SnapshotRiskLevel::Low => "low".green(),
        SnapshotRiskLevel::High => "high".red().bold(),
    };
    println!("  Level:             {}", flag);
    for name in &snap.crisis_indicators {
        println!("  {} {}", "!".red(), name);
    }

    println!();
    println!("{}", "═".repeat(40).dimmed());
    Ok(())
}
