//! Pass-through formatting for comments that are not translated.
//!
//! Markup is left untouched. The raw text is only re-framed as a `/** … */` block with a
//! `*` at the start of every line.

/// Frame raw comment text as a `/** … */` block, inserting `*` where a line lacks one.
///
/// Indentation is taken from the second line, since the first one follows the comment
/// opener and says nothing about it. Blank lines get an aligned `*`. Indentation of
/// non-empty lines is left as is.
pub fn indent_and_insert_asterisks(doc: &str) -> String {
    let first_break = doc.find('\n');
    let single_line = first_break.is_none();

    let indent = first_break
        .and_then(|idx| {
            doc[idx + 1..]
                .find(|c: char| c != ' ' && c != '\t')
                .map(|offset| offset + 1)
        })
        .unwrap_or(0)
        .max(1);
    let indent_str = " ".repeat(indent - 1);

    let mut opener = format!("{indent_str}/**");
    if indent > 1 {
        // align the opener's '*' with the ones below
        opener.remove(0);
    }
    let text = opener + doc;

    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len() - 1;
    let mut translated = String::with_capacity(text.len() + lines.len() * 2 + indent);
    for (index, line) in lines.iter().enumerate() {
        if index == 0 {
            translated.push_str(line);
            continue;
        }
        translated.push('\n');

        let body = line.trim_start_matches([' ', '\t']);
        if body.starts_with('*') {
            translated.push_str(line);
        } else if body.is_empty() {
            if index == last {
                translated.push_str(line);
            } else {
                translated.push_str(&indent_str);
                translated.push('*');
            }
        } else {
            translated.push_str(&line[..line.len() - body.len()]);
            translated.push_str("* ");
            translated.push_str(body);
        }
    }

    match translated.rfind(|c: char| c != ' ' && c != '\t') {
        Some(pos) if translated.as_bytes()[pos] == b'\n' => translated.truncate(pos + 1),
        Some(_) if !single_line => translated.push('\n'),
        _ => {}
    }
    translated.push_str(&indent_str);
    translated.push_str("*/\n");
    translated
}
