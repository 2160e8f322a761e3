//! Content tags and the label lexicon used to assign them.
//!
//! Risk and protection queries read a node's [`ContentTag`], never its
//! label. The lexicon below is only consulted once, when a node is created
//! without an explicit tag.

use serde::{Deserialize, Serialize};

/// Label fragments that mark a node as harmful.
pub const HARMFUL_MARKERS: &[&str] = &["self-harm", "suicide", "hopelessness", "worthless"];

/// Label fragments that mark a node as protective (coping-oriented).
pub const PROTECTIVE_MARKERS: &[&str] = &["coping", "breathing", "calm", "support", "help"];

/// Classification of a node's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentTag {
    /// Indicates self-harm or crisis content.
    Harmful,
    /// Coping-oriented content.
    Protective,
    #[default]
    Neutral,
}

impl ContentTag {
    /// Derive a tag from free-text label content.
    ///
    /// Matching is a case-insensitive substring test. Harmful markers win
    /// over protective ones when a label carries both.
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if HARMFUL_MARKERS.iter().any(|m| lower.contains(m)) {
            ContentTag::Harmful
        } else if PROTECTIVE_MARKERS.iter().any(|m| lower.contains(m)) {
            ContentTag::Protective
        } else {
            ContentTag::Neutral
        }
    }

    pub fn is_harmful(&self) -> bool {
        matches!(self, ContentTag::Harmful)
    }

    pub fn is_protective(&self) -> bool {
        matches!(self, ContentTag::Protective)
    }
}
