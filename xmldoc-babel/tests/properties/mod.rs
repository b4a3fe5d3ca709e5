//! Property tests for the preparation passes and the translator.

use proptest::prelude::*;
use xmldoc_babel::common::endlines::{has_trailing_endlines, shift_endlines_up_tree};
use xmldoc_babel::translate::Translator;
use xmldoc_babel::{convert_record, CommentConverter, ConvertOptions, DeclarationRecord, Entity, TagRegistry};

const TAGS: &[&str] = &["b", "c", "returns", "param", "details", "par", "see", "brief"];

fn arb_text() -> impl Strategy<Value = String> {
    "[a-z ]{0,12}"
}

fn arb_entity() -> impl Strategy<Value = Entity> {
    let leaf = prop_oneof![
        arb_text().prop_map(Entity::text),
        Just(Entity::endline()),
    ];
    leaf.prop_recursive(4, 48, 4, |inner| {
        (
            prop::sample::select(TAGS.to_vec()),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(tag, children)| Entity::with_children(tag, children))
    })
}

fn arb_entities() -> impl Strategy<Value = Vec<Entity>> {
    prop::collection::vec(arb_entity(), 0..6)
}

proptest! {
    #[test]
    fn text_runs_translate_to_their_concatenation(runs in prop::collection::vec(arb_text(), 0..8)) {
        let params: Vec<&str> = vec![];
        let translator = Translator::new(TagRegistry::global(), &params);
        let root = Entity::root(runs.iter().cloned().map(Entity::text).collect());

        prop_assert_eq!(translator.translate(&root), runs.concat());
    }

    #[test]
    fn filtering_is_idempotent(entities in arb_entities(), known in prop::collection::vec("[a-z]{1,2}", 0..3)) {
        let converter = CommentConverter::default();
        let once = converter.filter_unsupported(&known, entities);
        let twice = converter.filter_unsupported(&known, once.clone());

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn shifted_tree_has_no_trailing_markers(entities in arb_entities()) {
        let shifted = shift_endlines_up_tree(Entity::root(entities));
        prop_assert!(!has_trailing_endlines(&shifted));
    }

    #[test]
    fn shifting_twice_is_a_noop(entities in arb_entities()) {
        let once = shift_endlines_up_tree(Entity::root(entities));
        let twice = shift_endlines_up_tree(once.clone());

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn unknown_param_is_elided_with_its_body(body in arb_entities()) {
        let mut children = vec![Entity::text("missing")];
        children.extend(body);
        let decl = DeclarationRecord::new("f")
            .with_parameters(["present"])
            .with_comment("raw")
            .with_tree(vec![Entity::with_children("param", children)]);

        let output = convert_record(&decl, &ConvertOptions::default());

        prop_assert!(!output.contains("<param"));
        prop_assert_eq!(output, " /// <summary>\n /// \n /// </summary>\n");
    }

    #[test]
    fn html_wrap_has_a_single_closing_tag(runs in prop::collection::vec(arb_text(), 1..5)) {
        let params: Vec<&str> = vec![];
        let translator = Translator::new(TagRegistry::global(), &params);
        let bold = Entity::with_children("b", runs.iter().cloned().map(Entity::text).collect());
        let output = translator.translate(&Entity::root(vec![bold]));

        prop_assert!(output.starts_with("<b>"));
        prop_assert_eq!(output.matches("</b>").count(), 1);
        let body = runs.concat();
        prop_assert!(output.contains(body.trim_end()));
    }
}
