//! Endline shift
//!
//! Line breaks inside a markup element are parsed as blank-line markers at the tail of its
//! children. Rendered in place they would produce blank lines right before a closing XML
//! tag. This pass moves trailing markers out of each node into its parent, one level at a
//! time, collapsing each run to a single marker on the way up.

use crate::ir::entity::Entity;

/// Bubble trailing blank-line markers up from every node below `root`.
///
/// After this pass no node other than `root` ends with a marker. `root` keeps whatever
/// lands at its own tail; callers trim it explicitly.
pub fn shift_endlines_up_tree(mut root: Entity) -> Entity {
    shift(&mut root, 0);
    root
}

/// Returns how many markers were stripped from the tail of `node`.
fn shift(node: &mut Entity, level: usize) -> usize {
    let mut index = 0;
    while index < node.children.len() {
        let removed = shift(&mut node.children[index], level + 1);
        index += 1;
        if removed > 0 {
            // a single marker: several line breaks between XML elements add nothing
            node.children.insert(index, Entity::endline());
            index += 1;
        }
    }

    if level == 0 {
        return 0;
    }

    let mut removed = 0;
    while node.children.last().is_some_and(Entity::is_endline) {
        node.children.pop();
        removed += 1;
    }
    removed
}

/// Drop markers at the start of a top-level entity list.
pub fn strip_leading_endlines(mut entities: Vec<Entity>) -> Vec<Entity> {
    let leading = entities
        .iter()
        .take_while(|entity| entity.is_endline())
        .count();
    entities.drain(..leading);
    entities
}

/// Drop markers at both ends of the root's children.
pub fn trim_root_endlines(mut root: Entity) -> Entity {
    root.children = strip_leading_endlines(root.children);
    while root.children.last().is_some_and(Entity::is_endline) {
        root.children.pop();
    }
    root
}

/// Whether some node below `root` still ends with a marker.
pub fn has_trailing_endlines(root: &Entity) -> bool {
    root.children.iter().any(|child| {
        child.children.last().is_some_and(Entity::is_endline) || has_trailing_endlines(child)
    })
}
