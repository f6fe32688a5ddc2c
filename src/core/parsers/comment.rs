//! Comment and trailing-comma stripping for JSONC sources.
//!
//! Both passes are string-aware: text inside a JSON string literal is copied
//! through untouched, so values such as `"see // not a comment"` survive.

/// Scanner state for [`strip_comments`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InString,
    InLineComment,
    InBlockComment,
}

/// Remove `//` line comments and `/* */` block comments.
///
/// The newline that ends a line comment is kept so line numbers in later
/// parse errors still point at the right place.
pub fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut state = ScanState::Normal;
    let mut escaped = false;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            ScanState::Normal => match c {
                '"' => {
                    out.push(c);
                    state = ScanState::InString;
                }
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    state = ScanState::InLineComment;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    state = ScanState::InBlockComment;
                }
                _ => out.push(c),
            },
            ScanState::InString => {
                out.push(c);
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == '"' {
                    state = ScanState::Normal;
                }
            }
            ScanState::InLineComment => {
                if c == '\n' || c == '\r' {
                    out.push(c);
                    state = ScanState::Normal;
                }
            }
            ScanState::InBlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = ScanState::Normal;
                }
            }
        }
    }

    out
}

/// Drop commas that are directly followed (ignoring whitespace) by `}` or `]`.
pub fn strip_trailing_commas(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut in_string = false;
    let mut escaped = false;

    for (i, &c) in chars.iter().enumerate() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ',' if closes_container(&chars[i + 1..]) => {}
            _ => out.push(c),
        }
    }

    out
}

fn closes_container(rest: &[char]) -> bool {
    matches!(
        rest.iter().find(|c| !c.is_whitespace()),
        Some('}') | Some(']')
    )
}
