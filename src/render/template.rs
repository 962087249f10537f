//! Placeholder template parsing.
//!
//! Syntax: `{name}` is a placeholder, `{{` and `}}` are literal braces.
//! Names are ASCII identifiers.

use super::error::RenderError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder { name: String, line: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

fn syntax(line: usize, message: impl Into<String>) -> RenderError {
    RenderError::Syntax { line, message: message.into() }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Template {
    pub fn parse(text: &str) -> Result<Self, RenderError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut line = 1;
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') | Some('\n') | None => {
                                return Err(syntax(line, "unterminated placeholder"));
                            }
                            Some(ch) => name.push(ch),
                        }
                    }
                    if !is_valid_name(&name) {
                        return Err(syntax(line, format!("invalid placeholder name `{name}`")));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder { name, line });
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(syntax(line, "single '}' must be written as '}}'")),
                '\n' => {
                    line += 1;
                    literal.push('\n');
                }
                other => literal.push(other),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self { segments })
    }

    /// Placeholder occurrences as `(name, line)`, in template order.
    pub fn placeholders(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder { name, line } => Some((name.as_str(), *line)),
            Segment::Literal(_) => None,
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.placeholders().any(|(n, _)| n == name)
    }

    /// Substitute every placeholder with `value(name)`.
    ///
    /// Callers check beforehand that every name resolves; unresolved names
    /// render as empty text.
    pub(crate) fn fill<'a, F>(&self, mut value: F) -> String
    where
        F: FnMut(&str) -> Option<std::borrow::Cow<'a, str>>,
    {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder { name, .. } => {
                    if let Some(v) = value(name) {
                        out.push_str(&v);
                    }
                }
            }
        }
        out
    }
}
