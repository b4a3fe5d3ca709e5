//! Doxygen to C# XML doc comment conversion
//!
//!     This crate turns the entity tree of a parsed Doxygen comment into a `///` C# XML
//!     documentation block, ready to be inserted before a generated declaration.
//!
//!     This is a pure lib: tokenizing comments, looking up declarations and printing
//!     warnings all belong to the caller, reached through the traits in ./declaration.rs.
//!     No code here should suppose a shell environment.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── declaration.rs          # Collaborator traits (declaration, parser, warnings)
//!     ├── record.rs               # JSON declaration records and their replaying parser
//!     ├── registry.rs             # Tag → handler table
//!     ├── handlers.rs             # Handler kinds and their rendering
//!     ├── translate.rs            # Recursive tree → string translation
//!     ├── converter.rs            # Orchestration of the passes
//!     ├── options.rs
//!     ├── ir
//!     │   ├── entity.rs           # The entity tree
//!     │   └── treeviz.rs          # Tree visualization for debugging
//!     └── common
//!         ├── endlines.rs         # Blank-line marker shifting
//!         └── verbatim.rs         # Pass-through framing of untranslated comments
//!
//! Core Algorithms
//!
//!     Translation is dispatch: every node is looked up by its base command and the matching
//!     handler renders it, deciding on its own whether to descend into its children. Nodes
//!     without a handler are dropped silently, since most Doxygen commands have no XML doc
//!     counterpart.
//!
//!     Before translation the tree is reshaped: brief and description paragraphs are pooled
//!     into a summary, unsupported nodes are filtered, and trailing blank-line markers are
//!     shifted out of elements so they do not end up right before a closing tag (see
//!     ./common/endlines.rs).
//!
//!     A sibling target dialect is a different handler table over the same engine: build a
//!     [`TagRegistry`] and pass it to [`CommentConverter::with_registry`].
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs
//!     ├── convert                 # End to end conversions of declaration records
//!     └── properties              # Property tests of the passes
//!
pub mod common;
pub mod converter;
pub mod declaration;
pub mod error;
pub mod handlers;
pub mod ir;
pub mod options;
pub mod record;
pub mod registry;
pub mod translate;

pub use converter::{CommentConverter, Stage};
pub use declaration::{CommentParser, Declaration, ParameterScope, WarningKind, WarningSink};
pub use error::ConvertError;
pub use ir::entity::Entity;
pub use options::ConvertOptions;
pub use record::{DeclarationRecord, RecordParser};
pub use registry::TagRegistry;

use declaration::TracingWarnings;

/// Convert a declaration record with the default table, logging parser warnings.
pub fn convert_record(record: &DeclarationRecord, options: &ConvertOptions) -> String {
    CommentConverter::new(options.clone()).build_comment(record, &RecordParser, &mut TracingWarnings)
}
