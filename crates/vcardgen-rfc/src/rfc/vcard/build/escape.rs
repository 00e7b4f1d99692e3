//! vCard text escaping.

/// Escapes a text value for vCard serialization.
///
/// Escapes backslash, newline, comma, and semicolon. Carriage returns are
/// dropped, so a CRLF in the value becomes `\n`. Each character is visited
/// once, so an inserted backslash is never escaped again.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => {}
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            _ => result.push(c),
        }
    }

    result
}

/// Escapes each value of a list component and joins them with commas.
///
/// A separator is written before a value only once the output is non-empty,
/// so leading empty values vanish while later ones keep their comma.
#[must_use]
pub fn escape_component(values: &[String]) -> String {
    values.iter().fold(String::new(), |mut joined, value| {
        if !joined.is_empty() {
            joined.push(',');
        }
        joined.push_str(&escape_text(value));
        joined
    })
}

/// Sanitizes a parameter value for vCard serialization.
///
/// Double quotes are removed and newlines become `\n`. Values containing
/// `:`, `;` or `,` are wrapped in double quotes; nothing is backslash-escaped.
#[must_use]
pub fn escape_param_value(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    let mut needs_quotes = false;

    for c in s.chars() {
        match c {
            '"' => {}
            '\n' => result.push_str("\\n"),
            ':' | ';' | ',' => {
                result.push(c);
                needs_quotes = true;
            }
            _ => result.push(c),
        }
    }

    if needs_quotes {
        result.insert(0, '"');
        result.push('"');
    }

    result
}
