//! Build an example network and walk it through a few weeks of activity.

use anyhow::Result;
use colored::Colorize;
use neuropath::prelude::*;

use super::{paint_risk, Session};

/// Build the demo network without printing anything.
pub fn build(config: EngineConfig, user: &str) -> Result<NeuralEngine> {
    let mut engine = NeuralEngine::with_config(UserId::new(user), config)?;

    let conflict = engine.add_node(NodeType::Trigger, "argument with partner", Position::new(0.0, 0.0)).id;
    let anxiety = engine.add_node(NodeType::Emotion, "anxiety", Position::new(1.0, 0.5)).id;
    let worthless = engine.add_node(NodeType::Pattern, "feeling worthless", Position::new(2.0, 1.0)).id;
    let withdraw = engine.add_node(NodeType::Response, "withdraw from friends", Position::new(3.0, 1.0)).id;
    let breathing = engine.add_node(NodeType::Response, "box breathing", Position::new(1.0, -1.0)).id;
    let calm = engine.add_node(NodeType::Emotion, "calm", Position::new(2.0, -1.0)).id;
    let memory = engine.add_node(NodeType::Memory, "good weekend away", Position::new(3.0, -1.5)).id;

    engine.connect_nodes(conflict, anxiety, 0.6, 0.9)?;
    engine.connect_nodes(anxiety, worthless, 0.6, 0.8)?;
    engine.connect_nodes(worthless, withdraw, 0.55, 0.7)?;
    engine.connect_nodes(conflict, breathing, 0.3, 0.6)?;
    engine.connect_nodes(breathing, calm, 0.4, 0.9)?;
    engine.connect_nodes(calm, memory, 0.35, 0.5)?;
    engine.connect_nodes(calm, anxiety, 0.5, -0.8)?;

    let spiral = engine.create_pathway("conflict spiral", &[conflict, anxiety, worthless, withdraw])?.id;
    let reset = engine.create_pathway("breathing reset", &[conflict, breathing, calm, memory])?.id;

    for week in 0..5 {
        engine.activate_pathway(spiral, TriggerType::Message, format!("week {} argument", week + 1))?;
    }
    engine.activate_pathway(reset, TriggerType::MoodEntry, "tried breathing after the argument")?;
    engine.update_pathway_strength(spiral, 0.1)?;

    Ok(engine)
}

pub fn run(session: &Session, save: bool) -> Result<()> {
    println!("{} Building demo network...", "→".blue());
    let engine = build(session.config.engine(), &session.config.session.user_id)?;

    let snap = engine.network_snapshot();
    println!(
        "  {} {} nodes, {} connections, {} pathways",
        "✓".green(),
        snap.total_nodes,
        snap.total_connections,
        engine.pathways().len()
    );
    println!();

    println!("{}", "Pathways".blue().bold());
    for pathway in engine.pathways() {
        let live = engine
            .classify_pathway(pathway.id)?
            .unwrap_or(RiskLevel::Low);
        println!(
            "  {:<18} fired {}x  dominant {:<8} risk {}",
            pathway.name,
            pathway.activation_frequency,
            pathway.dominant_emotion,
            paint_risk(live)
        );
    }
    println!();

    println!("{}", "Network".blue().bold());
    println!("  Density:           {:.4}", snap.network_density);
    println!("  Avg activation:    {:.3}", snap.average_activation);
    println!("  Avg strength:      {:.3}", snap.average_connection_strength);
    println!("  Dominant emotion:  {}", snap.dominant_emotion.cyan());
    println!("  Plasticity:        {:.3}", engine.calculate_neural_plasticity());
    println!("  Crisis risk:       {}", paint_risk(engine.assess_crisis_risk()));
    println!();

    let protective = engine.protective_pathways();
    println!("{}", "Protective Pathways".blue().bold());
    for p in &protective {
        println!("  {} {}", "✓".green(), p.name);
    }
    println!();

    let suggestions = engine.suggest_healthy_pathways();
    if !suggestions.is_empty() {
        println!("{}", "Suggested Pathways".blue().bold());
        for s in &suggestions {
            let steps: Vec<&str> = s.steps.iter().map(|st| st.label.as_str()).collect();
            println!("  {}: {}", s.name.cyan(), steps.join(" → "));
        }
        println!();
    }

    if save {
        session.save(&engine)?;
        println!("{} Saved to {}", "✓".green().bold(), session.state_path.display());
    }
    Ok(())
}
