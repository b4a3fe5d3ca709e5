//! Stage inspection for the CLI
//!
//! A transform is `<stage>-<format>`: the stage is one of the converter's preparation
//! passes, the format is how the resulting tree is printed.

use xmldoc_babel::declaration::TracingWarnings;
use xmldoc_babel::ir::treeviz::to_treeviz_str;
use xmldoc_babel::{CommentConverter, DeclarationRecord, RecordParser, Stage};

/// All transform combinations accepted by `inspect`.
pub const AVAILABLE_TRANSFORMS: &[&str] = &[
    "parsed-treeviz",
    "parsed-json",
    "summary-treeviz",
    "summary-json",
    "filtered-treeviz",
    "filtered-json",
    "shifted-treeviz",
    "shifted-json",
];

pub const DEFAULT_TRANSFORM: &str = "shifted-treeviz";

/// Run a transform over every record, one section per record.
///
/// When there is more than one record each section starts with a `// <name>` line.
/// Records without a comment are listed with an empty section.
pub fn execute_transform(
    records: &[DeclarationRecord],
    transform_name: &str,
    converter: &CommentConverter<'_>,
) -> Result<String, String> {
    let (stage_name, format) = transform_name
        .rsplit_once('-')
        .ok_or_else(|| format!("Unknown transform: {transform_name}"))?;
    let stage: Stage = stage_name.parse().map_err(|e| format!("{e}"))?;
    if format != "treeviz" && format != "json" {
        return Err(format!("Unknown transform: {transform_name}"));
    }

    let mut output = String::new();
    for record in records {
        if records.len() > 1 {
            output.push_str(&format!("// {}\n", record.name));
        }
        let Some(tree) = converter.inspect(record, &RecordParser, &mut TracingWarnings, stage)
        else {
            continue;
        };
        let rendered = match format {
            "json" => serde_json::to_string_pretty(&tree)
                .map_err(|e| format!("JSON serialization failed: {e}"))?,
            _ => to_treeviz_str(&tree),
        };
        output.push_str(&rendered);
        if !rendered.ends_with('\n') {
            output.push('\n');
        }
    }
    Ok(output)
}

/// Convert every record, one section per record.
pub fn convert_records(records: &[DeclarationRecord], converter: &CommentConverter<'_>) -> String {
    let mut output = String::new();
    for record in records {
        if records.len() > 1 {
            output.push_str(&format!("// {}\n", record.name));
        }
        output.push_str(&converter.build_comment(record, &RecordParser, &mut TracingWarnings));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use xmldoc_babel::Entity;

    fn documented(name: &str) -> DeclarationRecord {
        DeclarationRecord::new(name)
            .with_parameters(["x"])
            .with_comment("@brief Does things.\n@param x the input")
            .with_tree(vec![
                Entity::with_children("brief", vec![Entity::text("Does things.")]),
                Entity::with_children("param", vec![Entity::text("x"), Entity::text("the input")]),
            ])
    }

    #[test]
    fn every_transform_runs() {
        let records = vec![documented("Run")];
        let converter = CommentConverter::default();
        for transform in AVAILABLE_TRANSFORMS {
            let output = execute_transform(&records, transform, &converter)
                .unwrap_or_else(|e| panic!("{transform}: {e}"));
            assert!(!output.is_empty(), "{transform} printed nothing");
        }
    }

    #[test]
    fn treeviz_shows_summary_after_summary_stage() {
        let records = vec![documented("Run")];
        let converter = CommentConverter::default();
        let output = execute_transform(&records, "summary-treeviz", &converter).unwrap();
        assert!(output.contains("summary"));
        assert!(output.contains("param"));
    }

    #[test]
    fn json_transform_emits_tags() {
        let records = vec![documented("Run")];
        let converter = CommentConverter::default();
        let output = execute_transform(&records, "parsed-json", &converter).unwrap();
        assert!(output.contains("\"tag\": \"brief\""));
    }

    #[test]
    fn unknown_transforms_are_rejected() {
        let converter = CommentConverter::default();
        assert!(execute_transform(&[], "ast-treeviz", &converter).is_err());
        assert!(execute_transform(&[], "shifted-xml", &converter).is_err());
        assert!(execute_transform(&[], "shifted", &converter).is_err());
    }

    #[test]
    fn several_records_get_headers() {
        let records = vec![documented("First"), DeclarationRecord::new("Second")];
        let converter = CommentConverter::default();
        let output = convert_records(&records, &converter);
        assert!(output.starts_with("// First\n /// <summary>"));
        assert!(output.ends_with("// Second\n"));
    }

    #[test]
    fn single_record_has_no_header() {
        let records = vec![documented("Only")];
        let converter = CommentConverter::default();
        let output = convert_records(&records, &converter);
        assert!(output.starts_with(" /// <summary>"));
    }
}
