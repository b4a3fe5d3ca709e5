//! Entity tree nodes.

use serde::{Deserialize, Serialize};

/// Structural blank-line marker. Never rendered on its own position in the tree: the
/// endline shift pass relocates it and the newline handler turns it into a line break.
pub const ENDLINE: &str = "plainstd::endl";
/// A run of plain text carried in `data`.
pub const PLAIN_TEXT: &str = "plainstd::string";
/// Synthetic wrapper around all top-level entities.
pub const ROOT: &str = "root";
/// Synthetic node pooling every brief and description paragraph.
pub const SUMMARY: &str = "summary";
pub const BRIEF: &str = "brief";
pub const PART_OF_DESCRIPTION: &str = "partofdescription";
pub const PARAM: &str = "param";

/// A node of the comment tree.
///
/// Leaves carry only `data` and are never descended into by the translator. Use the
/// constructors rather than struct literals so `is_leaf` and `children` stay consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Command or markup name, e.g. `param`, `<b`, `plainstd::endl`.
    pub tag: String,
    /// Literal payload: text runs, HTML attribute text, link targets.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub data: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Entity>,
    #[serde(default, rename = "leaf", skip_serializing_if = "std::ops::Not::not")]
    pub is_leaf: bool,
}

impl Entity {
    /// A command node without children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            data: String::new(),
            children: Vec::new(),
            is_leaf: false,
        }
    }

    pub fn with_children(tag: impl Into<String>, children: Vec<Entity>) -> Self {
        Self {
            children,
            ..Self::new(tag)
        }
    }

    /// A leaf node holding only literal data.
    pub fn leaf(tag: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            data: data.into(),
            children: Vec::new(),
            is_leaf: true,
        }
    }

    /// A plain text run.
    pub fn text(data: impl Into<String>) -> Self {
        Self::leaf(PLAIN_TEXT, data)
    }

    pub fn endline() -> Self {
        Self::new(ENDLINE)
    }

    /// The synthetic root wrapping a top-level entity list.
    pub fn root(children: Vec<Entity>) -> Self {
        Self::with_children(ROOT, children)
    }

    pub fn is_endline(&self) -> bool {
        self.tag == ENDLINE
    }

    /// The dispatch key of this node, see [`base_command`].
    pub fn base_command(&self) -> &str {
        base_command(&self.tag)
    }

    /// Literal data of the first child, if there is one.
    pub fn first_child_data(&self) -> Option<&str> {
        self.children.first().map(|child| child.data.as_str())
    }
}

/// Strips the sub-qualifier from a command name.
///
/// `param[in]` and `param[out]` dispatch as `param`, `code{.py}` as `code`. Every other
/// tag is its own base command.
pub fn base_command(tag: &str) -> &str {
    if tag.starts_with("param") {
        "param"
    } else if tag.starts_with("code") {
        "code"
    } else {
        tag
    }
}
