//! Risk assessment, protective pathways and suggestions.

use anyhow::{bail, Result};
use colored::Colorize;
use neuropath::prelude::*;
use serde::Serialize;

use super::{paint_risk, print_json, Session};

#[derive(Serialize)]
struct Assessment<'a> {
    crisis_risk: RiskLevel,
    protective_pathways: Vec<&'a str>,
    neural_plasticity: f64,
    suggestions: Vec<PathwaySuggestion>,
}

pub fn run(session: &Session, json: bool) -> Result<()> {
    let engine = session.open_existing()?;
    let assessment = Assessment {
        crisis_risk: engine.assess_crisis_risk(),
        protective_pathways: engine
            .protective_pathways()
            .into_iter()
            .map(|p| p.name.as_str())
            .collect(),
        neural_plasticity: engine.calculate_neural_plasticity(),
        suggestions: engine.suggest_healthy_pathways(),
    };
    if json {
        return print_json(&assessment);
    }

    println!("{}", "Neuropath Assessment".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();
    println!("  Crisis risk:       {}", paint_risk(assessment.crisis_risk));
    println!("  Plasticity:        {:.3}", assessment.neural_plasticity);
    println!();

    println!("{}", "Protective Pathways".blue().bold());
    if assessment.protective_pathways.is_empty() {
        println!("  {}", "none active".dimmed());
    }
    for name in &assessment.protective_pathways {
        println!("  {} {}", "✓".green(), name);
    }
    println!();

    if !assessment.suggestions.is_empty() {
        println!("{}", "Suggested Pathways".blue().bold());
        for (i, s) in assessment.suggestions.iter().enumerate() {
            let steps: Vec<&str> = s.steps.iter().map(|st| st.label.as_str()).collect();
            println!("  {} {}: {}", format!("{}.", i).blue(), s.name.cyan(), steps.join(" → "));
            println!("     {}", s.rationale.dimmed());
        }
        println!();
        println!("Adopt one with {}", "neuropath adopt <number>".cyan());
    }

    Ok(())
}

/// Turn suggestion `index` into real nodes and a pathway.
pub fn adopt(session: &Session, index: usize) -> Result<()> {
    let mut engine = session.open_existing()?;
    let suggestions = engine.suggest_healthy_pathways();
    let Some(suggestion) = suggestions.get(index) else {
        bail!("No suggestion {} ({} available)", index, suggestions.len());
    };
    let pathway = engine.adopt_suggestion(suggestion)?;
    session.save(&engine)?;

    println!(
        "{} Adopted {} as pathway {}",
        "✓".green().bold(),
        pathway.name.cyan(),
        pathway.id.0
    );
    Ok(())
}
