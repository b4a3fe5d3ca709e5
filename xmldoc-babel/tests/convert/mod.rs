//! End to end conversion of declaration records.

use xmldoc_babel::declaration::CollectedWarnings;
use xmldoc_babel::handlers::TagHandler;
use xmldoc_babel::record::Features;
use xmldoc_babel::{
    convert_record, CommentConverter, ConvertOptions, DeclarationRecord, Entity, RecordParser,
    TagRegistry, WarningKind,
};

fn text(data: &str) -> Entity {
    Entity::text(data)
}

fn cmd(tag: &str, children: Vec<Entity>) -> Entity {
    Entity::with_children(tag, children)
}

fn endl() -> Entity {
    Entity::endline()
}

fn record(parameters: &[&str], tree: Vec<Entity>) -> DeclarationRecord {
    DeclarationRecord::new("function")
        .with_parameters(parameters.iter().copied())
        .with_comment("raw comment")
        .with_tree(tree)
}

fn convert(record: &DeclarationRecord) -> String {
    convert_record(record, &ConvertOptions::default())
}

#[test]
fn test_brief_and_param() {
    let decl = record(
        &["x"],
        vec![
            cmd("brief", vec![text("Adds two numbers.")]),
            cmd("param", vec![text("x")]),
        ],
    );

    let output = convert(&decl);

    assert!(output.starts_with(" /// <summary>\n /// Adds two numbers.\n /// </summary>"));
    assert_eq!(
        output,
        " /// <summary>\n /// Adds two numbers.\n /// </summary><param name=\"x\"></param>\n"
    );
}

#[test]
fn test_param_with_line_breaks() {
    let decl = record(
        &["a"],
        vec![
            endl(),
            cmd("partofdescription", vec![text("Test for default args"), endl()]),
            cmd(
                "param",
                vec![text("a"), text(" Some parameter, default is 42"), endl()],
            ),
        ],
    );

    assert_eq!(
        convert(&decl),
        " /// <summary>\n /// Test for default args\n /// </summary> \n /// \
         <param name=\"a\"> Some parameter, default is 42</param>\n"
    );
}

#[test]
fn test_unknown_param_is_elided() {
    let decl = record(
        &["a"],
        vec![
            cmd("partofdescription", vec![text("Test for default args"), endl()]),
            cmd("param", vec![text("y"), text(" Not here"), endl()]),
        ],
    );

    let output = convert(&decl);

    assert_eq!(
        output,
        " /// <summary>\n /// Test for default args\n /// </summary>\n"
    );
    assert!(!output.contains("Not here"));
}

#[test]
fn test_nostripparams_keeps_unknown_param() {
    let decl = record(&[], vec![cmd("param", vec![text("y"), text(" kept")])]).with_features(
        Features {
            nostripparams: true,
            ..Features::default()
        },
    );

    assert!(convert(&decl).contains("<param name=\"y\"> kept</param>"));

    let options = ConvertOptions {
        keep_unknown_params: true,
        ..ConvertOptions::default()
    };
    let decl = record(&[], vec![cmd("param", vec![text("y"), text(" kept")])]);
    assert!(convert_record(&decl, &options).contains("<param name=\"y\">"));
}

#[test]
fn test_several_blocks() {
    let decl = record(
        &["y", "x"],
        vec![
            cmd("brief", vec![text("Multiple parameters test."), endl()]),
            cmd("param", vec![text("y"), text(" Vertical coordinate."), endl()]),
            cmd("param", vec![text("x"), text(" Horizontal coordinate."), endl()]),
            cmd(
                "returns",
                vec![
                    text("Arc tangent of "),
                    cmd("c", vec![text("y/x")]),
                    text("."),
                ],
            ),
        ],
    );

    assert_eq!(
        convert(&decl),
        " /// <summary>\n /// Multiple parameters test.\n /// </summary> \n /// \
         <param name=\"y\"> Vertical coordinate.</param> \n /// \
         <param name=\"x\"> Horizontal coordinate.</param> \n /// \
         <returns>Arc tangent of <code>y/x</code>.</returns>\n"
    );
}

#[test]
fn test_html_tags_pass_through() {
    let decl = record(
        &[],
        vec![cmd(
            "brief",
            vec![
                text("This is function "),
                Entity::leaf("<b", ""),
                text("one"),
                Entity::leaf("<b", "/"),
            ],
        )],
    );

    assert_eq!(
        convert(&decl),
        " /// <summary>\n /// This is function <b>one</b>\n /// </summary>\n"
    );
}

#[test]
fn test_author_returns_and_see() {
    let decl = record(
        &[],
        vec![
            cmd("brief", vec![text("Brief description."), endl()]),
            cmd("author", vec![text("Some author"), endl()]),
            cmd("return", vec![text("Some number"), endl()]),
            cmd("sa", vec![text("function2")]),
        ],
    );

    assert_eq!(
        convert(&decl),
        " /// <summary>\n /// Brief description.\n /// </summary> \n /// \
         <author>Some author</author> \n /// \
         <returns>Some number</returns> \n /// \
         <seealso cref=\"function2\"/>\n"
    );
}

#[test]
fn test_unsupported_commands_are_dropped() {
    let decl = record(
        &[],
        vec![
            cmd(
                "brief",
                vec![text("a "), cmd("image", vec![text("x.png")]), text("b")],
            ),
            cmd("details", vec![text("never shown")]),
        ],
    );

    let output = convert(&decl);
    assert_eq!(output, " /// <summary>\n /// a b\n /// </summary>\n");
}

#[test]
fn test_empty_summary_is_always_emitted() {
    let decl = record(&[], vec![cmd("returns", vec![text("n")])]);
    assert_eq!(
        convert(&decl),
        " /// <summary>\n /// \n /// </summary><returns>n</returns>\n"
    );
}

#[test]
fn test_no_comment() {
    let decl = DeclarationRecord::new("bare").with_tree(vec![text("ignored")]);
    assert_eq!(convert(&decl), "");
}

#[test]
fn test_verbatim_mode() {
    let decl = DeclarationRecord::new("raw")
        .with_comment("\n   Some text\n")
        .with_features(Features {
            notranslate: true,
            ..Features::default()
        });
    assert_eq!(convert(&decl), "  /**\n   * Some text\n   */\n");

    let single = DeclarationRecord::new("raw").with_comment(" line one ");
    let options = ConvertOptions {
        verbatim: true,
        ..ConvertOptions::default()
    };
    assert_eq!(convert_record(&single, &options), "/** line one */\n");
}

#[test]
fn test_parser_warnings_reach_the_sink() {
    let decl: DeclarationRecord = serde_json::from_str(
        r#"{
            "name": "warned",
            "comment": "\\brief Hi <b",
            "tree": [{"tag": "brief", "children": [{"tag": "plainstd::string", "data": "Hi", "leaf": true}]}],
            "diagnostics": [{"kind": "html-error", "message": "Unclosed HTML tag <b>"}]
        }"#,
    )
    .unwrap();

    let mut warnings = CollectedWarnings::default();
    let output = CommentConverter::default().build_comment(&decl, &RecordParser, &mut warnings);

    assert_eq!(output, " /// <summary>\n /// Hi\n /// </summary>\n");
    assert_eq!(
        warnings.warnings,
        vec![(WarningKind::HtmlError, "Unclosed HTML tag <b>".to_string())]
    );
}

#[test]
fn test_sibling_dialect_registry() {
    let mut registry = TagRegistry::new();
    registry.register("summary", TagHandler::SameName, "brief");
    registry.register("plainstd::string", TagHandler::PlainText, "");
    registry.register("b", TagHandler::HtmlWrap, "strong");

    let converter = CommentConverter::with_registry(&registry, ConvertOptions::default());
    let decl = record(
        &[],
        vec![
            cmd("brief", vec![text("Hi "), cmd("b", vec![text("there")])]),
            cmd("returns", vec![text("dropped: not in this table")]),
        ],
    );

    let output = converter.build_comment(&decl, &RecordParser, &mut CollectedWarnings::default());
    assert_eq!(output, "<brief>Hi <strong>there</strong></brief>\n");
}
