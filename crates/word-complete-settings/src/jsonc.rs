//! Relaxed JSON as found in `.sublime-settings` files: `//` and `/* */` comments plus
//! trailing commas, reduced to strict JSON before handing it to `serde_json`.

/// Remove comments and trailing commas outside of string literals.
///
/// Removed comments keep their newlines so parser line numbers still point at the source.
pub(crate) fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut pending_comma: Option<usize> = None;

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                pending_comma = None;
                out.push('"');
                while let Some(ch) = chars.next() {
                    out.push(ch);
                    match ch {
                        '\\' => {
                            if let Some(escaped) = chars.next() {
                                out.push(escaped);
                            }
                        }
                        '"' => break,
                        _ => {}
                    }
                }
            }
            '/' if chars.peek() == Some(&'/') => {
                for ch in chars.by_ref() {
                    if ch == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for ch in chars.by_ref() {
                    if ch == '\n' {
                        out.push('\n');
                    }
                    if prev == '*' && ch == '/' {
                        break;
                    }
                    prev = ch;
                }
            }
            ',' => {
                pending_comma = Some(out.len());
                out.push(',');
            }
            '}' | ']' => {
                if let Some(idx) = pending_comma.take() {
                    out.replace_range(idx..idx + 1, " ");
                }
                out.push(c);
            }
            c if c.is_whitespace() => out.push(c),
            c => {
                pending_comma = None;
                out.push(c);
            }
        }
    }

    out
}
