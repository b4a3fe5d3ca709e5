//! Collaborator seams
//!
//! The converter does not read source files or tokenize comments. It consumes a
//! declaration (raw comment text and parameter metadata), a parser that turns the raw text
//! into an entity tree, and a sink for the parser's warnings.

use crate::ir::entity::Entity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A documentable declaration.
pub trait Declaration {
    /// Name used in logs.
    fn name(&self) -> &str {
        ""
    }

    /// The raw documentation comment, if the declaration has one.
    fn raw_comment(&self) -> Option<&str>;

    fn has_parameter(&self, name: &str) -> bool;

    /// Keep `param` blocks even when the name is not a parameter of this declaration.
    fn keeps_unknown_params(&self) -> bool {
        false
    }

    /// Skip translation and only reformat the comment's continuation markers.
    fn verbatim_requested(&self) -> bool {
        false
    }
}

/// Turns raw comment text into top-level entities.
pub trait CommentParser<D: Declaration + ?Sized> {
    fn parse_tree(&self, declaration: &D, raw: &str, warnings: &mut dyn WarningSink)
        -> Vec<Entity>;
}

/// Answers whether a `param` block names a documented parameter.
pub trait ParameterScope {
    fn param_exists(&self, name: &str) -> bool;
}

impl<S: AsRef<str>> ParameterScope for Vec<S> {
    fn param_exists(&self, name: &str) -> bool {
        self.iter().any(|param| param.as_ref() == name)
    }
}

/// Parameter scope of a declaration, honoring the keep-unknown override.
pub struct DeclarationScope<'d, D: ?Sized> {
    declaration: &'d D,
    keep_unknown: bool,
}

impl<'d, D: Declaration + ?Sized> DeclarationScope<'d, D> {
    pub fn new(declaration: &'d D, keep_unknown: bool) -> Self {
        Self {
            declaration,
            keep_unknown: keep_unknown || declaration.keeps_unknown_params(),
        }
    }
}

impl<D: Declaration + ?Sized> ParameterScope for DeclarationScope<'_, D> {
    fn param_exists(&self, name: &str) -> bool {
        self.keep_unknown || self.declaration.has_parameter(name)
    }
}

/// Malformed-input conditions reported by the comment parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    UnknownCommand,
    UnexpectedEndOfComment,
    CommandExpected,
    HtmlError,
    CommandError,
    UnknownCharacter,
    UnexpectedIteratorValue,
}

impl WarningKind {
    /// Numeric warning code, stable across releases.
    pub fn code(self) -> u16 {
        match self {
            WarningKind::UnknownCommand => 560,
            WarningKind::UnexpectedEndOfComment => 561,
            WarningKind::CommandExpected => 562,
            WarningKind::HtmlError => 563,
            WarningKind::CommandError => 564,
            WarningKind::UnknownCharacter => 565,
            WarningKind::UnexpectedIteratorValue => 566,
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}", self.code())
    }
}

/// Receives parser warnings. The translator itself never warns.
pub trait WarningSink {
    fn report_warning(&mut self, kind: WarningKind, message: &str);
}

/// Logs warnings through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingWarnings;

impl WarningSink for TracingWarnings {
    fn report_warning(&mut self, kind: WarningKind, message: &str) {
        tracing::warn!(code = kind.code(), "Doxygen parser warning: {message}.");
    }
}

/// Keeps warnings for later inspection.
#[derive(Debug, Default, Clone)]
pub struct CollectedWarnings {
    pub warnings: Vec<(WarningKind, String)>,
}

impl WarningSink for CollectedWarnings {
    fn report_warning(&mut self, kind: WarningKind, message: &str) {
        self.warnings.push((kind, message.to_string()));
    }
}
