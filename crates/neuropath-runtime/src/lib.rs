//! # Neuropath Runtime
//!
//! Registries, engines and the per-user network owner.
//!
//! The runtime holds the mutable side of a network: a petgraph-backed
//! registry of nodes and connections, the pathways grouped over them, and
//! the activation history. [`engine::NeuralEngine`] ties these together;
//! the free functions in each module operate on any `NeuralRegistry`.

pub mod registry_impl;
pub mod clock;
pub mod config;
pub mod pathway;
pub mod activation;
pub mod metrics;
pub mod risk;
pub mod suggestions;
pub mod engine;
pub mod session;
pub mod prelude;
