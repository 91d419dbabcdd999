//! Minimal CSS selector support for the in-memory document.
//!
//! Only the simple selectors the page layer actually issues are understood: `#id`,
//! `.class`, `tag`, and a tag (optional) with one attribute test (`[attr]`,
//! `[attr="v"]`, `[attr^="v"]`). Compound and combinator selectors are rejected with
//! [`SelectorError::Unsupported`] rather than silently matching nothing.

use std::str::FromStr;

use super::Element;
use crate::error::SelectorError;

/// Attribute test inside `[...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeMatch {
    Exists,
    Equals(String),
    Prefix(String),
}

/// A parsed simple selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Class(String),
    Element {
        tag: Option<String>,
        attribute: Option<(String, AttributeMatch)>,
    },
}

impl Selector {
    /// Returns true if `element` satisfies this selector.
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Selector::Id(id) => element.id.as_deref() == Some(id.as_str()),
            Selector::Class(class) => element.classes.iter().any(|c| c == class),
            Selector::Element { tag, attribute } => {
                if let Some(tag) = tag {
                    if !element.tag.eq_ignore_ascii_case(tag) {
                        return false;
                    }
                }
                match attribute {
                    None => true,
                    Some((name, test)) => match (element.attributes.get(name), test) {
                        (None, _) => false,
                        (Some(_), AttributeMatch::Exists) => true,
                        (Some(value), AttributeMatch::Equals(expected)) => value == expected,
                        (Some(value), AttributeMatch::Prefix(prefix)) => value.starts_with(prefix.as_str()),
                    },
                }
            }
        }
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let selector = input.trim();
        if selector.is_empty() {
            return Err(SelectorError::Empty);
        }

        if let Some(rest) = selector.strip_prefix('#') {
            return parse_identifier(rest, input).map(Selector::Id);
        }
        if let Some(rest) = selector.strip_prefix('.') {
            return parse_identifier(rest, input).map(Selector::Class);
        }

        let (tag_part, attribute_part) = match selector.find('[') {
            Some(i) => (&selector[..i], Some(&selector[i..])),
            None => (selector, None),
        };

        let tag = if tag_part.is_empty() {
            None
        } else {
            Some(parse_tag(tag_part, input)?)
        };
        let attribute = attribute_part
            .map(|raw| parse_attribute(raw, input))
            .transpose()?;

        Ok(Selector::Element { tag, attribute })
    }
}

fn is_structural(c: char) -> bool {
    c.is_whitespace() || matches!(c, '>' | '+' | '~' | ',' | ':' | '.' | '#' | '[' | ']' | '*')
}

fn parse_identifier(raw: &str, input: &str) -> Result<String, SelectorError> {
    if raw.chars().any(is_structural) {
        return Err(SelectorError::Unsupported(input.to_string()));
    }

    let mut chars = raw.chars();
    let valid = match chars.next() {
        // A leading digit (or a bare hyphen followed by one) is not an identifier.
        Some(first) if first.is_ascii_alphabetic() || first == '_' || !first.is_ascii() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii())
        }
        Some('-') => {
            let rest: Vec<char> = chars.collect();
            matches!(rest.first(), Some(c) if !c.is_ascii_digit())
                && rest.iter().all(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_' || !c.is_ascii())
        }
        _ => false,
    };

    if valid {
        Ok(raw.to_string())
    } else {
        Err(SelectorError::InvalidIdentifier(raw.to_string()))
    }
}

fn parse_tag(raw: &str, input: &str) -> Result<String, SelectorError> {
    let mut chars = raw.chars();
    let valid = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        Ok(raw.to_ascii_lowercase())
    } else {
        Err(SelectorError::Unsupported(input.to_string()))
    }
}

fn parse_attribute(raw: &str, input: &str) -> Result<(String, AttributeMatch), SelectorError> {
    let inner = raw
        .strip_prefix('[')
        .and_then(|r| r.strip_suffix(']'))
        .ok_or_else(|| SelectorError::Unsupported(input.to_string()))?;

    let (name, test) = if let Some(i) = inner.find("^=") {
        (&inner[..i], Some((true, &inner[i + 2..])))
    } else if let Some(i) = inner.find('=') {
        (&inner[..i], Some((false, &inner[i + 1..])))
    } else {
        (inner, None)
    };

    let name = parse_identifier(name.trim(), input)?;
    let test = match test {
        None => AttributeMatch::Exists,
        Some((is_prefix, value)) => {
            let value = unquote(value.trim())
                .ok_or_else(|| SelectorError::Unsupported(input.to_string()))?;
            if is_prefix {
                AttributeMatch::Prefix(value)
            } else {
                AttributeMatch::Equals(value)
            }
        }
    };

    Ok((name, test))
}

fn unquote(value: &str) -> Option<String> {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return Some(value[1..value.len() - 1].to_string());
        }
    }
    if value.is_empty() || value.chars().any(|c| c.is_whitespace() || c == '"' || c == '\'') {
        None
    } else {
        Some(value.to_string())
    }
}
