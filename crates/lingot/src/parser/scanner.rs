//! Splits raw source into `key = value` statements.
//!
//! A statement normally occupies one line. A value whose first non-blank
//! character is `'` or `"` is a quoted literal and may continue over
//! following lines until the matching unescaped quote.

use std::iter::Enumerate;
use std::str::Lines;

use super::error::{ParseError, SourceLocation};

/// One logical statement: a raw key and its decoded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// The trimmed text before the first `=`.
    pub key: String,
    /// The value with quotes, comments and escapes removed.
    pub value: String,
    pub location: SourceLocation,
}

/// Iterator over the statements of a source text.
///
/// Blank lines and comment lines are skipped. Malformed statements are
/// yielded as errors and scanning resumes on the following line.
///
/// # Example
///
/// ```
/// use lingot::parser::StatementScanner;
///
/// let source = "# greetings\nhello = Hello # trailing comment\nbye = 'Good\nbye'\n";
/// let statements: Vec<_> = StatementScanner::new(source)
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(statements[0].value, "Hello");
/// assert_eq!(statements[1].value, "Good\nbye");
/// assert_eq!(statements[1].location.line, 3);
/// ```
pub struct StatementScanner<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl<'a> StatementScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines().enumerate(),
        }
    }

    /// Read a quoted value starting after its opening quote.
    fn quoted(
        &mut self,
        key: String,
        first: &'a str,
        quote: char,
        location: SourceLocation,
    ) -> Result<Statement, ParseError> {
        let mut value = String::new();
        let mut segment = first;

        loop {
            if let Some(end) = find_unescaped(segment, quote) {
                unescape_into(&mut value, &segment[..end], quote);
                return Ok(Statement {
                    key,
                    value,
                    location,
                });
            }

            // Each physical line is unescaped on its own, so a trailing
            // backslash never escapes the first character of the next line.
            unescape_into(&mut value, segment, quote);

            let Some((_, next)) = self.lines.next() else {
                return Err(ParseError::UnclosedValueString { key, location });
            };
            value.push('\n');
            segment = next;
        }
    }
}

impl<'a> Iterator for StatementScanner<'a> {
    type Item = Result<Statement, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, line) = self.lines.next()?;

            if line.trim().is_empty() {
                continue;
            }

            let (key, value) = match line.split_once('=') {
                Some((key, value)) => (key.trim(), Some(value)),
                None => (line.trim(), None),
            };

            if key.starts_with('#') {
                continue;
            }

            let location = SourceLocation::new(index + 1, line);
            let key = key.to_string();

            let Some(value) = value else {
                return Some(Err(ParseError::MissingAssignmentOperator { key, location }));
            };

            let value = value.trim_start();
            let mut chars = value.chars();
            let statement = match chars.next() {
                None => Ok(Statement {
                    key,
                    value: String::new(),
                    location,
                }),
                Some(quote @ ('\'' | '"')) => self.quoted(key, chars.as_str(), quote, location),
                Some(_) => Ok(Statement {
                    key,
                    value: unquoted_value(value),
                    location,
                }),
            };

            return Some(statement);
        }
    }
}

/// Strip the trailing `#` comment from an unquoted value and trim it.
fn unquoted_value(value: &str) -> String {
    let end = find_unescaped(value, '#').unwrap_or(value.len());
    value[..end].trim().replace("\\#", "#")
}

/// Byte index of the first occurrence of `target` not preceded by an
/// escaping backslash.
fn find_unescaped(text: &str, target: char) -> Option<usize> {
    let mut escaped = false;
    for (index, c) in text.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == target {
            return Some(index);
        }
    }
    None
}

/// Append `segment` to `out`, turning `\quote` into the quote and `\\` into a
/// backslash. Other escapes are kept verbatim. A lone trailing backslash is
/// a line continuation marker and is dropped.
fn unescape_into(out: &mut String, segment: &str, quote: char) {
    let mut chars = segment.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some(&next) if next == quote || next == '\\' => {
                out.push(next);
                chars.next();
            }
            Some(_) => out.push('\\'),
            None => {}
        }
    }
}

/// Quote `content` so that scanning it back yields `content` unchanged.
///
/// ```
/// use lingot::parser::{StatementScanner, escape_value};
///
/// let content = "It's a \\ multi\nline 'value'";
/// let source = format!("note = {}", escape_value(content, '\''));
/// let statement = StatementScanner::new(&source).next().unwrap().unwrap();
/// assert_eq!(statement.value, content);
/// ```
pub fn escape_value(content: &str, quote: char) -> String {
    let mut out = String::with_capacity(content.len() + 2);
    out.push(quote);
    for c in content.chars() {
        if c == '\\' || c == quote {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(quote);
    out
}
