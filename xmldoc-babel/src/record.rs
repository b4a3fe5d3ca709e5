//! Declaration records
//!
//! A serialized declaration: its name, parameters, raw comment, per-declaration features
//! and the entity tree the upstream tokenizer produced for the comment, along with any
//! warnings it raised. [`RecordParser`] replays the stored tree as the parser collaborator.
//!
//! ```text
//! {
//!   "name": "add",
//!   "parameters": ["x", "y"],
//!   "comment": "\\brief Adds two numbers.\n\\param x first",
//!   "features": { "nostripparams": false, "notranslate": false },
//!   "tree": [
//!     { "tag": "brief", "children": [{ "tag": "plainstd::string", "data": "Adds two numbers.", "leaf": true }] }
//!   ]
//! }
//! ```

use crate::declaration::{CommentParser, Declaration, WarningKind, WarningSink};
use crate::error::ConvertError;
use crate::ir::entity::Entity;
use serde::{Deserialize, Serialize};

/// Per-declaration feature flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    #[serde(default)]
    pub notranslate: bool,
    #[serde(default)]
    pub nostripparams: bool,
}

/// A warning raised by the tokenizer while building the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: WarningKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationRecord {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub features: Features,
    #[serde(default)]
    pub tree: Vec<Entity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl DeclarationRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_parameters<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_tree(mut self, tree: Vec<Entity>) -> Self {
        self.tree = tree;
        self
    }

    pub fn with_features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }
}

impl Declaration for DeclarationRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn raw_comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    fn has_parameter(&self, name: &str) -> bool {
        self.parameters.iter().any(|param| param == name)
    }

    fn keeps_unknown_params(&self) -> bool {
        self.features.nostripparams
    }

    fn verbatim_requested(&self) -> bool {
        self.features.notranslate
    }
}

/// Replays the tree stored in a [`DeclarationRecord`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordParser;

impl CommentParser<DeclarationRecord> for RecordParser {
    fn parse_tree(
        &self,
        declaration: &DeclarationRecord,
        _raw: &str,
        warnings: &mut dyn WarningSink,
    ) -> Vec<Entity> {
        for diagnostic in &declaration.diagnostics {
            warnings.report_warning(diagnostic.kind, &diagnostic.message);
        }
        declaration.tree.clone()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordInput {
    Many(Vec<DeclarationRecord>),
    One(DeclarationRecord),
}

/// Decode a single record or an array of records.
pub fn parse_records(json: &str) -> Result<Vec<DeclarationRecord>, ConvertError> {
    let input: RecordInput = serde_json::from_str(json)?;
    Ok(match input {
        RecordInput::Many(records) => records,
        RecordInput::One(record) => vec![record],
    })
}
