//! Tag handlers
//!
//! Each handler kind renders one entity into C# XML doc text. The handler, not the
//! translator, decides whether and how to descend into the entity's children, and a
//! handler whose structural precondition is unmet renders nothing.

use crate::ir::entity::Entity;
use crate::translate::Translator;

/// Line break followed by the continuation prefix of a `///` comment block.
pub const NEW_LINE: &str = " \n /// ";

const SUMMARY_OPEN: &str = " /// <summary>\n /// ";
const SUMMARY_CLOSE: &str = "\n /// </summary>";

/// The closed set of handler kinds. The registry pairs each with its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagHandler {
    /// Wraps the translated children in `<argument>…</argument>`.
    HtmlWrap,
    /// Emits the argument, or the tag itself when the argument is empty.
    LiteralChar,
    /// `<name>children</name>`, where name is the argument if given, else the tag.
    SameName,
    /// Self-closing `<argument cref="target"/>` from a single child.
    Cref,
    /// Raw HTML start or end tag, rebuilt from the argument and the attribute data.
    HtmlTag,
    /// HTML entities are valid XML doc, emitted as `&name;`.
    HtmlEntity,
    NewLine,
    PlainText,
    Summary,
    /// Concatenated child data with no translation, used for formulas.
    Verbatim,
    /// `<argument>paragraph</argument>`.
    Extended,
    Par,
    Param,
    Ref,
    Link,
    Anchor,
}

impl TagHandler {
    /// Render `entity` into `out`.
    pub fn render(
        self,
        translator: &Translator<'_>,
        entity: &Entity,
        argument: &str,
        out: &mut String,
    ) {
        match self {
            TagHandler::HtmlWrap => render_html_wrap(translator, entity, argument, out),
            TagHandler::LiteralChar => {
                if argument.is_empty() {
                    out.push_str(&entity.tag);
                } else {
                    out.push_str(argument);
                }
            }
            TagHandler::SameName => {
                let name = element_name(entity, argument);
                let body = translator.translate_subtree(entity);
                out.push_str(&reflow(format!("<{name}>{body}</{name}>"), 2));
            }
            TagHandler::Cref => {
                if entity.children.len() != 1 {
                    return;
                }
                let name = element_name(entity, argument);
                let target = &entity.children[0].data;
                out.push_str(&reflow(format!("<{name} cref=\"{target}\"/>"), 2));
            }
            TagHandler::HtmlTag => {
                if entity.data == "/" {
                    let name = argument.strip_prefix('<').unwrap_or(argument);
                    out.push_str(&format!("</{name}>"));
                } else {
                    out.push_str(argument);
                    out.push_str(&entity.data);
                    out.push('>');
                }
            }
            TagHandler::HtmlEntity => {
                out.push_str(argument);
                out.push(';');
            }
            TagHandler::NewLine => out.push_str(NEW_LINE),
            TagHandler::PlainText => out.push_str(&entity.data),
            TagHandler::Summary => {
                out.push_str(SUMMARY_OPEN);
                out.push_str(&paragraph(translator, entity));
                out.push_str(SUMMARY_CLOSE);
            }
            TagHandler::Verbatim => {
                out.push_str(argument);
                out.push(' ');
                for child in &entity.children {
                    out.push_str(&child.data);
                }
            }
            TagHandler::Extended => {
                out.push_str(&format!(
                    "<{argument}>{}</{argument}>",
                    paragraph(translator, entity)
                ));
            }
            TagHandler::Par => {
                let Some((caption, rest)) = entity.children.split_first() else {
                    return;
                };
                out.push_str(&format!(
                    "<para alt=\"{}\">{}</para>",
                    caption.data,
                    paragraph_of(translator, rest)
                ));
            }
            TagHandler::Param => {
                let Some((name, rest)) = entity.children.split_first() else {
                    return;
                };
                if !translator.param_exists(&name.data) {
                    return;
                }
                out.push_str(&format!(
                    "<param name=\"{}\">{}</param>",
                    name.data,
                    paragraph_of(translator, rest)
                ));
            }
            TagHandler::Ref => {
                // link to an \anchor id in the same document
                let Some((anchor, rest)) = entity.children.split_first() else {
                    return;
                };
                let text = rest.first().map_or(anchor.data.as_str(), |t| t.data.as_str());
                out.push_str(&format!("<a href=\"#{}\">{text}</a>", anchor.data));
            }
            TagHandler::Link => {
                let Some((object, rest)) = entity.children.split_first() else {
                    return;
                };
                let name = object
                    .data
                    .split_once(' ')
                    .map_or("", |(_target, name)| name);
                out.push_str(name);
                out.push_str(&paragraph_of(translator, rest));
            }
            TagHandler::Anchor => {
                out.push_str(&format!(
                    "<a id=\"{}\"></a>",
                    translator.translate_subtree(entity)
                ));
            }
        }
    }
}

fn render_html_wrap(translator: &Translator<'_>, entity: &Entity, element: &str, out: &mut String) {
    if entity.children.is_empty() {
        return;
    }
    let inner = translator.translate_subtree(entity);
    // trailing whitespace goes after the closing tag
    let body = inner.trim_end_matches(['\n', '\t', ' ']);
    if body.is_empty() {
        out.push_str(&format!("<{element}>{inner}</{element}> "));
    } else {
        let tail = &inner[body.len()..];
        out.push_str(&format!("<{element}>{body}</{element}>{tail}"));
    }
}

fn element_name<'a>(entity: &'a Entity, argument: &'a str) -> &'a str {
    if argument.is_empty() {
        &entity.tag
    } else {
        argument
    }
}

fn paragraph(translator: &Translator<'_>, entity: &Entity) -> String {
    reflow(translator.translate_subtree(entity), 0)
}

fn paragraph_of(translator: &Translator<'_>, children: &[Entity]) -> String {
    reflow(translator.translate_children(children), 0)
}

/// Line reflow for long comment lines.
///
/// Wrapping is disabled: original line breaks survive translation and read better than
/// automatic breaks, which leave short ragged lines behind. Returns the line unchanged.
pub fn reflow(line: String, _indent: usize) -> String {
    line
}
