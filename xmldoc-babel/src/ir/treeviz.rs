//! Treeviz formatter for entity trees
//!
//! One line per node, with the nesting encoded as connectors and two columns per level.
//!
//! Format:
//! <prefix><connector> <tag>[ "<data>"]
//!
//! Example:
//!
//! root
//! ├─ summary
//! │ └─ plainstd::string "Adds two numbers."
//! └─ param
//!   └─ plainstd::string "x"

use super::entity::Entity;

/// Render a tree, starting with the given node as the unprefixed first line.
pub fn to_treeviz_str(root: &Entity) -> String {
    let mut output = String::new();
    output.push_str(&label(root));
    output.push('\n');

    let count = root.children.len();
    for (index, child) in root.children.iter().enumerate() {
        format_entity(child, "", index, count, &mut output);
    }
    output
}

fn format_entity(
    entity: &Entity,
    prefix: &str,
    child_index: usize,
    child_count: usize,
    output: &mut String,
) {
    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!("{prefix}{connector} {}\n", label(entity)));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let count = entity.children.len();
    for (index, child) in entity.children.iter().enumerate() {
        format_entity(child, &child_prefix, index, count, output);
    }
}

fn label(entity: &Entity) -> String {
    if entity.data.is_empty() {
        entity.tag.clone()
    } else {
        format!("{} {:?}", entity.tag, entity.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_node() {
        assert_eq!(to_treeviz_str(&Entity::root(vec![])), "root\n");
    }

    #[test]
    fn test_nested_connectors() {
        let root = Entity::root(vec![
            Entity::with_children("summary", vec![Entity::text("Adds two numbers.")]),
            Entity::with_children("param", vec![Entity::text("x")]),
        ]);

        insta::assert_snapshot!(to_treeviz_str(&root), @r#"
        root
        ├─ summary
        │ └─ plainstd::string "Adds two numbers."
        └─ param
          └─ plainstd::string "x"
        "#);
    }

    #[test]
    fn test_data_is_escaped() {
        let root = Entity::root(vec![Entity::text("a\nb")]);
        assert_eq!(
            to_treeviz_str(&root),
            "root\n└─ plainstd::string \"a\\nb\"\n"
        );
    }
}
