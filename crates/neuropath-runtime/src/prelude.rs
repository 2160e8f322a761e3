//! Neuropath Runtime Prelude: convenient imports for common usage.
//!
//! ```rust
//! use neuropath_runtime::prelude::*;
//! ```

// Re-export the engine
pub use crate::engine::NeuralEngine;

// Re-export the registry backend
pub use crate::registry_impl::PetRegistry;

// Re-export configuration
pub use crate::config::{EngineConfig, ActivationConfig, RiskConfig};

// Re-export clocks
pub use crate::clock::{Clock, SystemClock, ManualClock};

// Re-export suggestions
pub use crate::suggestions::{PathwaySuggestion, SuggestedStep};

// Re-export session
pub use crate::session::{EngineState, StateMetadata, save_state, load_state};

// Re-export from core
pub use neuropath_core::prelude::*;
