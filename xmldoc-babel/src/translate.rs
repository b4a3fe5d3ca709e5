//! Tree translator
//!
//! Depth-first rendering of an entity tree. For each child the registered handler is
//! invoked and descends further on its own; a child with no handler contributes nothing
//! and its subtree is never visited.

use crate::declaration::ParameterScope;
use crate::ir::entity::Entity;
use crate::registry::TagRegistry;

/// Renders entity trees with one handler table and one parameter scope.
pub struct Translator<'a> {
    registry: &'a TagRegistry,
    params: &'a dyn ParameterScope,
}

impl<'a> Translator<'a> {
    pub fn new(registry: &'a TagRegistry, params: &'a dyn ParameterScope) -> Self {
        Self { registry, params }
    }

    /// Translate the children of `root`. The root itself is not rendered.
    pub fn translate(&self, root: &Entity) -> String {
        self.translate_subtree(root)
    }

    /// Translated children of `entity`; empty for leaves.
    pub fn translate_subtree(&self, entity: &Entity) -> String {
        if entity.is_leaf {
            return String::new();
        }
        self.translate_children(&entity.children)
    }

    pub fn translate_children(&self, children: &[Entity]) -> String {
        let mut translated = String::new();
        for child in children {
            self.translate_entity(child, &mut translated);
        }
        translated
    }

    /// Dispatch a single entity to its handler, if it has one.
    pub fn translate_entity(&self, entity: &Entity, out: &mut String) {
        if let Some(entry) = self.registry.lookup(&entity.tag) {
            entry.handler.render(self, entity, &entry.argument, out);
        }
    }

    pub fn param_exists(&self, name: &str) -> bool {
        self.params.param_exists(name)
    }
}
