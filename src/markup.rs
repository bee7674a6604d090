// ABOUTME: Inline markup translator for the poseur application
// ABOUTME: Converts one raw source line into the display markup vocabulary

/// Translate one raw input line into display markup.
///
/// The output vocabulary is the wire format between the slide model and a
/// renderer: `<pre>`, `<i>`, `<b>`, `<u>`, `<center>`, `<ul><li>`,
/// `&mdash;` and decimal `&#N;` character references. The rules are
/// order-dependent; each one operates on the output of the previous.
pub fn translate(line: &str) -> String {
    // Two or more leading spaces mark a preformatted line. Exactly two of
    // them are stripped, the rest of the indentation is kept verbatim and
    // every inline rule is skipped; non-ASCII escaping still applies.
    if line.starts_with("  ") {
        return escape_non_ascii(&format!("<pre>{}</pre>", line[2..].trim_end()));
    }

    let mut text = replace_pairs(line, '/', "<i>", "</i>");
    text = replace_pairs(&text, '*', "<b>", "</b>");
    text = replace_pairs(&text, '_', "<u>", "</u>");
    text = center(&text);
    text = bullet(&text);
    text = text.replace("---", "&mdash;");
    escape_non_ascii(&text)
}

/// Replace each delimiter pair with an open/close tag, left to right.
///
/// A pair captures the shortest run with no delimiter inside it; a lone
/// trailing delimiter is left verbatim.
fn replace_pairs(text: &str, delim: char, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(delim) {
        let after = start + delim.len_utf8();
        match rest[after..].find(delim) {
            Some(len) => {
                out.push_str(&rest[..start]);
                out.push_str(open);
                out.push_str(&rest[after..after + len]);
                out.push_str(close);
                rest = &rest[after + len + delim.len_utf8()..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// A line of the form `-text-` becomes a centered line.
fn center(text: &str) -> String {
    if text.len() >= 3 && text.starts_with('-') && text.ends_with('-') {
        format!("<center>{}</center>", &text[1..text.len() - 1])
    } else {
        text.to_string()
    }
}

/// A line of the form `- text` or `* text` (optionally indented with tabs
/// or spaces) becomes a bullet point. Indented lines starting with two
/// spaces never reach this rule; they are preformatted.
fn bullet(text: &str) -> String {
    let trimmed = text.trim_start_matches([' ', '\t']);
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some('-') | Some('*'), Some(' ')) => {
            format!("<ul><li>{}</li></ul>", &trimmed[2..])
        }
        _ => text.to_string(),
    }
}

/// Replace every character above the ASCII range with a decimal numeric
/// character reference.
fn escape_non_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if (ch as u32) > 127 {
            out.push_str(&format!("&#{};", ch as u32));
        } else {
            out.push(ch);
        }
    }
    out
}
