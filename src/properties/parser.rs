//! Line-level parsing for properties documents
//!
//! Natural lines are assembled into logical lines first (a trailing odd run
//! of backslashes continues onto the next line, with the continuation's
//! leading whitespace dropped), then each logical line is split into a raw
//! key and value, and finally both halves are unescaped.

use super::{Properties, PropertiesError};

const WHITESPACE: [char; 3] = [' ', '\t', '\x0c'];

pub(super) fn parse(input: &str) -> Result<Properties, PropertiesError> {
    let mut properties = Properties::default();
    let mut lines = input.lines().enumerate();

    while let Some((index, raw)) = lines.next() {
        let line = raw.trim_start_matches(WHITESPACE);
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            // Comment and blank lines are never continued
            continue;
        }

        let mut logical = line.to_string();
        let mut line_number = index + 1;
        while has_line_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((next_index, continuation)) => {
                    line_number = next_index + 1;
                    logical.push_str(continuation.trim_start_matches(WHITESPACE));
                }
                None => break,
            }
        }

        let (raw_key, raw_value) = split_key_value(&logical);
        let key = unescape(raw_key, line_number)?;
        let value = unescape(raw_value, line_number)?;
        properties.insert(key, value);
    }

    Ok(properties)
}

/// A trailing even run of backslashes is escaped backslash data, an odd run
/// means the final one continues the line
fn has_line_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

/// Split a logical line at the first unescaped `=`, `:`, or whitespace run.
/// A whitespace terminator may still be followed by an `=`/`:` separator,
/// which is consumed together with the whitespace around it.
fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut terminator = None;
    for (index, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                terminator = Some((index, false));
                break;
            }
            c if WHITESPACE.contains(&c) => {
                terminator = Some((index, true));
                break;
            }
            _ => {}
        }
    }

    let Some((key_end, was_whitespace)) = terminator else {
        return (line, "");
    };

    let key = &line[..key_end];
    let mut rest = &line[key_end..];
    if was_whitespace {
        rest = rest.trim_start_matches(WHITESPACE);
        if rest.starts_with(['=', ':']) {
            rest = rest[1..].trim_start_matches(WHITESPACE);
        }
    } else {
        rest = rest[1..].trim_start_matches(WHITESPACE);
    }
    (key, rest)
}

/// Expand `\t`, `\n`, `\r`, `\f`, `\uXXXX`, and `\<char>` escapes
fn unescape(input: &str, line: usize) -> Result<String, PropertiesError> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let mut code = 0u32;
                for _ in 0..4 {
                    let digit = chars
                        .next()
                        .and_then(|h| h.to_digit(16))
                        .ok_or(PropertiesError::MalformedUnicodeEscape { line })?;
                    code = code * 16 + digit;
                }
                let decoded = char::from_u32(code)
                    .ok_or(PropertiesError::MalformedUnicodeEscape { line })?;
                out.push(decoded);
            }
            Some(other) => out.push(other),
            // A lone trailing backslash was already consumed as a line
            // continuation; one at end of input carries no data
            None => {}
        }
    }
    Ok(out)
}
