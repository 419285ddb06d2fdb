//! Path templates
//!
//! A path expression such as `{Number}/{Revision}/{Name}.stp` is compiled
//! once, when the configuration is loaded, against the closed metadata
//! vocabulary. Rendering can therefore never fail: an unknown placeholder is
//! rejected before a single file is touched.
//!
//! Rendering is a three step pipeline:
//!
//! 1. substitute placeholders from a [`PropertyMap`]
//! 2. normalise the path lexically (`.` dropped, `name/..` folded, any root
//!    stripped so the result stays relative)
//! 3. replace every character outside `[\w_.: -]` and the platform separator
//!    with `_`

use super::errors::TemplateError;
use super::properties::{PropertyField, PropertyMap};
use regex::Regex;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(PropertyField),
}

/// A compiled path expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    expression: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Compile a path expression
    ///
    /// `{{` and `}}` produce literal braces.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] for unknown or empty placeholders and for
    /// unbalanced braces.
    ///
    /// # Examples
    ///
    /// ```
    /// use neutralizer::domain::template::PathTemplate;
    ///
    /// assert!(PathTemplate::parse("{Number}_{Revision}.stp").is_ok());
    /// assert!(PathTemplate::parse("{Colour}.stp").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = expression.char_indices().peekable();

        while let Some((offset, ch)) = chars.next() {
            match ch {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    literal.push('{');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, inner) in chars.by_ref() {
                        if inner == '}' {
                            closed = true;
                            break;
                        }
                        name.push(inner);
                    }
                    if !closed {
                        return Err(TemplateError::UnclosedPlaceholder {
                            offset,
                            expression: expression.to_string(),
                        });
                    }
                    if name.is_empty() {
                        return Err(TemplateError::EmptyPlaceholder {
                            offset,
                            expression: expression.to_string(),
                        });
                    }
                    let field = name.parse::<PropertyField>().map_err(|_| {
                        TemplateError::UnknownPlaceholder {
                            name: name.clone(),
                            expression: expression.to_string(),
                        }
                    })?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(field));
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    literal.push('}');
                }
                '}' => {
                    return Err(TemplateError::UnmatchedBrace {
                        offset,
                        expression: expression.to_string(),
                    });
                }
                other => literal.push(other),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            expression: expression.to_string(),
            segments,
        })
    }

    /// The source expression
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Metadata fields referenced by the expression, in order of appearance
    pub fn fields(&self) -> impl Iterator<Item = PropertyField> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(field) => Some(*field),
            Segment::Literal(_) => None,
        })
    }

    /// Placeholder substitution only
    pub fn substitute(&self, properties: &PropertyMap) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.as_str(),
                Segment::Field(field) => properties.get(*field),
            })
            .collect()
    }

    /// Full rendering: substitute, normalise, sanitise
    pub fn render(&self, properties: &PropertyMap) -> PathBuf {
        let normalized = normalize_relative(&self.substitute(properties));
        PathBuf::from(sanitize_path_text(&normalized))
    }
}

/// Lexically normalise a path into a relative path joined with the
/// platform separator
///
/// Leading `..` segments are kept. An empty result becomes `.`.
pub fn normalize_relative(path: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    for component in Path::new(path).components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(last) if last != ".." => {
                    parts.pop();
                }
                _ => parts.push("..".to_string()),
            },
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
        }
    }

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join(MAIN_SEPARATOR_STR)
    }
}

/// Replace characters that are unsafe in file names with `_`
///
/// Word characters, `_`, `.`, `:`, space, `-` and the platform path
/// separator are kept.
///
/// # Examples
///
/// ```
/// use neutralizer::domain::template::sanitize_path_text;
///
/// let sep = std::path::MAIN_SEPARATOR;
/// let input = format!("My{sep}Part:Rev#1");
/// assert_eq!(sanitize_path_text(&input), format!("My{sep}Part:Rev_1"));
/// ```
pub fn sanitize_path_text(path: &str) -> String {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        let class = format!(r"[^\w_.: \-{}]", regex::escape(MAIN_SEPARATOR_STR));
        Regex::new(&class).expect("sanitizer character class is a valid regex")
    });
    pattern.replace_all(path, "_").into_owned()
}
