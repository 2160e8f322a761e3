//! # Neuropath Core
//!
//! Core types and traits for modelling a person's recurring emotional and
//! behavioral patterns as a directed, weighted associative graph.
//!
//! - **Nodes**: emotions, memories, triggers, responses and patterns, each
//!   carrying a scalar activation level
//! - **Connections**: directed synapses with a reinforcement strength and a
//!   signed weight (excitatory or inhibitory)
//! - **Pathways**: named induced subgraphs representing a recurring pattern
//! - **Snapshots**: immutable, point-in-time network statistics
//!
//! ## Quick Start
//!
//! ```rust
//! use neuropath_core::prelude::*;
//!
//! let pos = Position::new(0.0, 0.0);
//! assert_eq!(ContentTag::from_label("Box breathing"), ContentTag::Protective);
//! assert_eq!(PathwayType::from_weight(0.5), PathwayType::Strengthening);
//! # let _ = pos;
//! ```

pub mod types;
pub mod lexicon;
pub mod registry;
pub mod error;
pub mod prelude;
