//! Tag handler registry
//!
//! Maps a base command to the handler that renders it and the argument configuring that
//! handler. Commands missing from the table are not translatable and are dropped without a
//! warning: most Doxygen commands have no XML doc counterpart, and warning on each would
//! bury the warnings that matter.
//!
//! The default table is process-wide and built at most once, see [`TagRegistry::global`].

use crate::handlers::TagHandler;
use crate::ir::entity::{base_command, ENDLINE, PLAIN_TEXT};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static DEFAULT_REGISTRY: Lazy<TagRegistry> = Lazy::new(TagRegistry::with_defaults);

/// A handler together with its configuration argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    pub handler: TagHandler,
    /// An HTML tag name, a renamed output tag, an entity code, or empty.
    pub argument: String,
}

/// Registry of tag handlers, keyed by base command.
///
/// # Examples
///
/// ```ignore
/// let registry = TagRegistry::global();
/// let entry = registry.lookup("param[in]").unwrap();
/// assert_eq!(entry.handler, TagHandler::Param);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    entries: HashMap<String, TagEntry>,
}

impl TagRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        TagRegistry {
            entries: HashMap::new(),
        }
    }

    /// The shared default table. Built on first use and never mutated afterwards.
    pub fn global() -> &'static TagRegistry {
        &DEFAULT_REGISTRY
    }

    /// Register a handler for a tag.
    ///
    /// If the tag is already registered, its entry is replaced.
    pub fn register(
        &mut self,
        tag: impl Into<String>,
        handler: TagHandler,
        argument: impl Into<String>,
    ) {
        self.entries.insert(
            tag.into(),
            TagEntry {
                handler,
                argument: argument.into(),
            },
        );
    }

    /// Look up the entry for a tag, matching on its base command.
    pub fn lookup(&self, tag: &str) -> Option<&TagEntry> {
        self.entries.get(base_command(tag))
    }

    /// Whether a tag has a handler.
    pub fn supports(&self, tag: &str) -> bool {
        self.lookup(tag).is_some()
    }

    /// List all registered tags (sorted)
    pub fn list_tags(&self) -> Vec<&str> {
        let mut tags: Vec<_> = self.entries.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Create a registry with the C# XML doc table
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        // commands wrapped in an inline XML tag
        for (tag, element) in [
            ("a", "i"),
            ("arg", "li"),
            ("b", "b"),
            ("c", "code"),
            ("cite", "i"),
            ("e", "i"),
            ("em", "i"),
            ("li", "li"),
            ("p", "code"),
        ] {
            registry.register(tag, TagHandler::HtmlWrap, element);
        }

        // single characters, escaped where XML needs it
        for (tag, replacement) in [
            ("$", ""),
            ("@", ""),
            ("\\", ""),
            ("<", "&lt;"),
            (">", "&gt;"),
            ("&", "&amp;"),
            ("#", ""),
            ("%", ""),
            ("~", ""),
            ("\"", "&quot;"),
            (".", ""),
            // namespace separator
            ("::", "."),
        ] {
            registry.register(tag, TagHandler::LiteralChar, replacement);
        }

        // commands with an XML doc element of the same or a related name
        for (tag, renamed) in [
            ("author", ""),
            ("authors", "author"),
            ("deprecated", ""),
            ("result", "return"),
            ("return", "returns"),
            ("returns", ""),
            ("since", ""),
            ("throws", ""),
            ("throw", "throws"),
            ("version", ""),
            ("note", "remarks"),
            ("remark", "remarks"),
            ("remarks", ""),
            ("todo", ""),
            ("warning", "remarks"),
        ] {
            registry.register(tag, TagHandler::SameName, renamed);
        }

        registry.register("see", TagHandler::Cref, "see");
        registry.register("sa", TagHandler::Cref, "seealso");

        registry.register("param", TagHandler::Param, "");
        registry.register("ref", TagHandler::Ref, "");
        registry.register("link", TagHandler::Link, "");
        registry.register("par", TagHandler::Par, "");
        registry.register("anchor", TagHandler::Anchor, "");
        registry.register("code", TagHandler::Extended, "code");
        // brief and partofdescription are pooled into this node before translation
        registry.register("summary", TagHandler::Summary, "");

        // \f commands print the literal LaTeX formula
        for tag in ["f$", "f[", "f{"] {
            registry.register(tag, TagHandler::Verbatim, "");
        }

        registry.register(PLAIN_TEXT, TagHandler::PlainText, "");
        registry.register(ENDLINE, TagHandler::NewLine, "");
        registry.register("n", TagHandler::NewLine, "");

        for tag in [
            "<a",
            "<b",
            "<blockquote",
            "<body",
            "<br",
            "<center",
            "<caption",
            "<code",
            "<dd",
            "<dfn",
            "<div",
            "<dl",
            "<dt",
            "<em",
            "<form",
            "<hr",
            "<h1",
            "<h2",
            "<h3",
            "<i",
            "<input",
            "<img",
            "<li",
            "<meta",
            "<multicol",
            "<ol",
            "<p",
            "<pre",
            "<small",
            "<span",
            "<strong",
            "<sub",
            "<sup",
            "<table",
            "<td",
            "<th",
            "<tr",
            "<tt",
            "<kbd",
            "<ul",
            "<var",
        ] {
            registry.register(tag, TagHandler::HtmlTag, tag);
        }

        for entity in [
            "&copy", "&trade", "&reg", "&lt", "&gt", "&amp", "&apos", "&quot", "&lsquo",
            "&rsquo", "&ldquo", "&rdquo", "&ndash", "&mdash", "&nbsp", "&times", "&minus",
            "&sdot", "&sim", "&le", "&ge", "&larr", "&rarr",
        ] {
            registry.register(entity, TagHandler::HtmlEntity, entity);
        }

        registry
    }
}
