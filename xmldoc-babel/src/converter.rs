//! Comment conversion
//!
//! Assembles the final comment for one declaration:
//!
//!     1. fetch the raw comment (none: empty output)
//!     2. verbatim mode: frame the raw text and stop
//!     3. parse the raw text into entities
//!     4. drop leading blank-line markers
//!     5. pool every brief and partofdescription node into a leading summary node
//!     6. drop top-level nodes without a handler, and params naming unknown parameters
//!     7. wrap in a root node
//!     8. shift trailing markers up the tree
//!     9. trim markers at both ends of the root
//!     10. translate and append a line break
//!
//! Conversion is all or nothing per declaration, and never fails: malformed or
//! unsupported nodes contribute nothing instead of losing the rest of the comment.

use crate::common::endlines::{shift_endlines_up_tree, strip_leading_endlines, trim_root_endlines};
use crate::common::verbatim::indent_and_insert_asterisks;
use crate::declaration::{
    CommentParser, Declaration, DeclarationScope, ParameterScope, WarningSink,
};
use crate::error::ConvertError;
use crate::ir::entity::{Entity, BRIEF, PARAM, PART_OF_DESCRIPTION, SUMMARY};
use crate::ir::treeviz::to_treeviz_str;
use crate::options::ConvertOptions;
use crate::registry::TagRegistry;
use crate::translate::Translator;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, Level};

/// Checkpoints of the tree preparation, for inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// As returned by the parser
    Parsed,
    /// After leading markers are stripped and the summary node is synthesized
    Summary,
    /// After unsupported nodes are dropped
    Filtered,
    /// Ready for translation
    Shifted,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Parsed, Stage::Summary, Stage::Filtered, Stage::Shifted];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Parsed => "parsed",
            Stage::Summary => "summary",
            Stage::Filtered => "filtered",
            Stage::Shifted => "shifted",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stage {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.name() == s)
            .ok_or_else(|| ConvertError::UnknownStage(s.to_string()))
    }
}

/// Converts declarations' documentation comments to C# XML doc.
pub struct CommentConverter<'r> {
    registry: &'r TagRegistry,
    options: ConvertOptions,
}

impl CommentConverter<'static> {
    /// A converter using the shared default handler table.
    pub fn new(options: ConvertOptions) -> Self {
        Self::with_registry(TagRegistry::global(), options)
    }
}

impl Default for CommentConverter<'static> {
    fn default() -> Self {
        Self::new(ConvertOptions::default())
    }
}

impl<'r> CommentConverter<'r> {
    pub fn with_registry(registry: &'r TagRegistry, options: ConvertOptions) -> Self {
        Self { registry, options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn registry(&self) -> &TagRegistry {
        self.registry
    }

    /// Build the comment block to insert before the declaration.
    pub fn build_comment<D, P>(
        &self,
        declaration: &D,
        parser: &P,
        warnings: &mut dyn WarningSink,
    ) -> String
    where
        D: Declaration + ?Sized,
        P: CommentParser<D> + ?Sized,
    {
        let Some(raw) = declaration.raw_comment() else {
            return String::new();
        };

        if self.options.verbatim || declaration.verbatim_requested() {
            debug!(declaration = declaration.name(), "translation disabled");
            return indent_and_insert_asterisks(raw);
        }

        let entities = parser.parse_tree(declaration, raw, warnings);
        let scope = DeclarationScope::new(declaration, self.options.keep_unknown_params);
        let root = self.tree_at_stage(&scope, entities, Stage::Shifted);

        let mut comment = Translator::new(self.registry, &scope).translate(&root);
        comment.push('\n');
        debug!(declaration = declaration.name(), "result in C# XML doc:\n{comment}");
        comment
    }

    /// The prepared tree for a declaration at the given stage.
    ///
    /// Returns `None` when the declaration has no comment. Verbatim mode is ignored, the
    /// tree is always parsed.
    pub fn inspect<D, P>(
        &self,
        declaration: &D,
        parser: &P,
        warnings: &mut dyn WarningSink,
        stage: Stage,
    ) -> Option<Entity>
    where
        D: Declaration + ?Sized,
        P: CommentParser<D> + ?Sized,
    {
        let raw = declaration.raw_comment()?;
        let entities = parser.parse_tree(declaration, raw, warnings);
        let scope = DeclarationScope::new(declaration, self.options.keep_unknown_params);
        Some(self.tree_at_stage(&scope, entities, stage))
    }

    /// Run the preparation passes up to `stage`. Earlier stages come back under a root node.
    pub fn tree_at_stage(
        &self,
        scope: &dyn ParameterScope,
        entities: Vec<Entity>,
        stage: Stage,
    ) -> Entity {
        log_stage(Stage::Parsed, &entities);
        if stage == Stage::Parsed {
            return Entity::root(entities);
        }

        let entities = collect_summary(strip_leading_endlines(entities));
        log_stage(Stage::Summary, &entities);
        if stage == Stage::Summary {
            return Entity::root(entities);
        }

        let entities = self.filter_unsupported(scope, entities);
        log_stage(Stage::Filtered, &entities);
        if stage == Stage::Filtered {
            return Entity::root(entities);
        }

        let root = trim_root_endlines(shift_endlines_up_tree(Entity::root(entities)));
        debug!(stage = %Stage::Shifted, "\n{}", to_treeviz_str(&root));
        root
    }

    /// Drop top-level nodes with no handler, and `param` nodes naming a parameter
    /// outside `scope`. Filtering uses the parsed tag, before any handler renames it.
    pub fn filter_unsupported(
        &self,
        scope: &dyn ParameterScope,
        entities: Vec<Entity>,
    ) -> Vec<Entity> {
        entities
            .into_iter()
            .filter(|entity| {
                let base = entity.base_command();
                if !self.registry.supports(base) {
                    return false;
                }
                base != PARAM
                    || entity
                        .first_child_data()
                        .is_some_and(|name| scope.param_exists(name))
            })
            .collect()
    }
}

/// Move the children of every top-level brief and partofdescription node into one summary
/// node placed first. The summary node is created even when nothing is pooled.
pub fn collect_summary(entities: Vec<Entity>) -> Vec<Entity> {
    let (pooled, rest): (Vec<Entity>, Vec<Entity>) = entities
        .into_iter()
        .partition(|entity| entity.tag == BRIEF || entity.tag == PART_OF_DESCRIPTION);

    let summary = Entity::with_children(
        SUMMARY,
        pooled.into_iter().flat_map(|entity| entity.children).collect(),
    );
    std::iter::once(summary).chain(rest).collect()
}

fn log_stage(stage: Stage, entities: &[Entity]) {
    if tracing::enabled!(Level::DEBUG) {
        let root = Entity::root(entities.to_vec());
        debug!(stage = %stage, "\n{}", to_treeviz_str(&root));
    }
}
