// Preview rendering: ResumeRecord -> Document (a tree of blocks) -> HTML markup.
// One renderer serves both the strict and the placeholder variant; the difference
// is a single `BlankPolicy` flag in `RenderOptions`.

pub mod html;
pub mod renderer;

use serde::{Deserialize, Serialize};

use crate::models::resume::SectionKind;

pub use renderer::render;

/// How a blank display field inside a rendered item is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankPolicy {
    /// Render nothing for the field.
    #[default]
    Omit,
    /// Render a placeholder naming the expected content ("Degree", "Your Name", …).
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub blank_policy: BlankPolicy,
    pub section_order: Vec<SectionKind>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            blank_policy: BlankPolicy::Omit,
            section_order: SectionKind::DEFAULT_ORDER.to_vec(),
        }
    }
}

impl RenderOptions {
    pub fn with_placeholders(placeholders: bool) -> Self {
        Self {
            blank_policy: if placeholders {
                BlankPolicy::Placeholder
            } else {
                BlankPolicy::Omit
            },
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    Normal,
    Muted,
    /// Stand-in text for a blank field under `BlankPolicy::Placeholder`.
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading {
        level: u8,
        text: String,
        style: TextStyle,
    },
    Paragraph {
        text: String,
        style: TextStyle,
    },
    List {
        items: Vec<String>,
    },
    TagGroup {
        label: Option<String>,
        tags: Vec<String>,
    },
    Section {
        kind: SectionKind,
        title: String,
        blocks: Vec<Block>,
    },
    /// Empty-state block shown when no section has content.
    Placeholder {
        title: String,
        hint: String,
    },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// Section kinds present at the top level, in render order.
    pub fn sections(&self) -> Vec<SectionKind> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Section { kind, .. } => Some(*kind),
                _ => None,
            })
            .collect()
    }

    pub fn is_empty_state(&self) -> bool {
        self.blocks
            .iter()
            .any(|b| matches!(b, Block::Placeholder { .. }))
    }
}
