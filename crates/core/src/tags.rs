//! Tag list and its at-rest text encoding.
//!
//! The `words` column stores tags as a bracketed list of quoted tokens,
//! e.g. `['harbour', 'fire', "king's visit"]`. `TagList` is the structured
//! form used everywhere else; `parse` and `to_storage_string` are the only
//! places that know the text encoding.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered list of tags attached to an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagList(Vec<String>);

impl TagList {
    #[must_use]
    pub fn new(tags: Vec<String>) -> Self {
        Self(tags)
    }

    /// Parse the at-rest encoding.
    ///
    /// Accepts single- or double-quoted tokens, bare tokens, surrounding
    /// whitespace, a missing pair of brackets, and the empty list. Backslash
    /// escapes inside quoted tokens are honoured. Empty tokens are dropped.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let inner = trimmed.strip_prefix('[').unwrap_or(trimmed);
        let inner = inner.strip_suffix(']').unwrap_or(inner);

        let mut tags = Vec::new();
        let mut chars = inner.chars().peekable();
        while let Some(&c) = chars.peek() {
            if c == ',' || c.is_whitespace() {
                chars.next();
                continue;
            }
            if c == '\'' || c == '"' {
                chars.next();
                let mut token = String::new();
                while let Some(ch) = chars.next() {
                    match ch {
                        '\\' => {
                            if let Some(escaped) = chars.next() {
                                token.push(escaped);
                            }
                        },
                        q if q == c => break,
                        other => token.push(other),
                    }
                }
                if !token.is_empty() {
                    tags.push(token);
                }
            } else {
                let mut token = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch == ',' {
                        break;
                    }
                    token.push(ch);
                    chars.next();
                }
                let token = token.trim();
                if !token.is_empty() {
                    tags.push(token.to_owned());
                }
            }
        }
        Self(tags)
    }

    /// Render the canonical at-rest encoding.
    #[must_use]
    pub fn to_storage_string(&self) -> String {
        let tokens: Vec<String> = self.0.iter().map(|tag| quote(tag)).collect();
        format!("[{}]", tokens.join(", "))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

fn quote(tag: &str) -> String {
    let delimiter = if tag.contains('\'') && !tag.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(tag.len() + 2);
    out.push(delimiter);
    for ch in tag.chars() {
        if ch == '\\' || ch == delimiter {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push(delimiter);
    out
}

impl fmt::Display for TagList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

impl From<Vec<String>> for TagList {
    fn from(tags: Vec<String>) -> Self {
        Self(tags)
    }
}
