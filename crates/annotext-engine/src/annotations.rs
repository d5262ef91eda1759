//! The annotation data model consumed from upstream document bodies.

use serde::{Deserialize, Serialize};

use crate::tree::Span;

/// A named attribute on an annotation, e.g. the URL and new-window flags of
/// a hyperlink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// The attribute name e.g. `href`
    pub name: String,
    /// The attribute value e.g. `https://example.com`
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One style/markup instruction over a text string, e.g. bold or italics.
///
/// `index` and `length` are measured in grapheme positions over the text the
/// annotation applies to. Upstream data can carry negative values; the
/// [`Span`] impl clamps them to zero so malformed ranges normalize instead
/// of erroring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// The annotation type e.g. `bold`
    #[serde(rename = "type")]
    pub kind: String,
    /// Where in the text the annotation begins
    pub index: i64,
    /// How many graphemes the annotation covers
    pub length: i64,
    /// Optional additional attributes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

impl Annotation {
    pub fn new(kind: impl Into<String>, index: i64, length: i64) -> Self {
        Self {
            kind: kind.into(),
            index,
            length,
            attributes: Vec::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    /// The value of the first attribute with the given name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }
}

impl Span for Annotation {
    fn index(&self) -> usize {
        self.index.max(0) as usize
    }

    fn length(&self) -> usize {
        self.length.max(0) as usize
    }

    fn with_range(&self, index: usize, length: usize) -> Self {
        Self {
            kind: self.kind.clone(),
            index: index as i64,
            length: length as i64,
            attributes: self.attributes.clone(),
        }
    }
}
