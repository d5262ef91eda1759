//! # Tag Rendering
//!
//! Combines the span tree with a caller-supplied per-type render table to
//! produce the final markup string: build the tree, flatten it to an
//! ordered tag stream, split the source text at the tag positions
//! (grapheme-aware), then interleave fragments and tags.

use std::collections::HashMap;

use crate::annotations::Annotation;
use crate::text;
use crate::tree::{self, Span, SpanTree};

/// An emission instruction: place `markup` at grapheme offset `position` in
/// the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub markup: String,
    pub position: usize,
}

/// How one annotation type renders: the markup to emit where the annotation
/// starts and where it ends.
///
/// Returning an empty string from either hook is an intentional no-op: the
/// converter filters empty tags out rather than emitting them (the original
/// use case: an unresolved internal link contributing no visible markup).
pub trait TagRules {
    fn on_start(&self, annotation: &Annotation) -> String;
    fn on_end(&self, annotation: &Annotation) -> String;
}

/// Fixed start/end markup, for the simple wrapper types.
pub struct Wrap {
    pub start: &'static str,
    pub end: &'static str,
}

impl TagRules for Wrap {
    fn on_start(&self, _annotation: &Annotation) -> String {
        self.start.to_string()
    }

    fn on_end(&self, _annotation: &Annotation) -> String {
        self.end.to_string()
    }
}

/// Maps annotation type names to their rendering rules.
///
/// Entirely caller-supplied configuration: the engine does not decide which
/// annotation types are legal. Types with no entry are skipped silently;
/// their text still renders, just without wrapping markup.
#[derive(Default)]
pub struct RenderTable {
    rules: HashMap<String, Box<dyn TagRules + Send + Sync>>,
}

impl RenderTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fixed wrapper pair for an annotation type.
    pub fn wrap(self, kind: &str, start: &'static str, end: &'static str) -> Self {
        self.rules(kind, Wrap { start, end })
    }

    /// Registers arbitrary rules for an annotation type.
    pub fn rules(mut self, kind: &str, rules: impl TagRules + Send + Sync + 'static) -> Self {
        self.rules.insert(kind.to_string(), Box::new(rules));
        self
    }

    /// The rules for a type, or `None` when no renderer is registered.
    pub fn get(&self, kind: &str) -> Option<&(dyn TagRules + Send + Sync)> {
        self.rules.get(kind).map(Box::as_ref)
    }
}

/// Flattens an annotation tree into tags via the render table.
///
/// Each node whose type has an entry contributes a start tag at its index
/// and an end tag at its end; unknown types contribute nothing themselves
/// but their children still do.
pub fn convert_tree_to_tags(tree: &SpanTree<Annotation>, table: &RenderTable) -> Vec<Tag> {
    tree::flatten(tree, |item| {
        let rules = table.get(&item.kind)?;
        Some((
            Tag {
                markup: rules.on_start(item),
                position: item.index(),
            },
            Tag {
                markup: rules.on_end(item),
                position: item.end(),
            },
        ))
    })
}

/// Renders annotated text to markup with a fixed render table.
pub struct AnnotationConverter {
    table: RenderTable,
}

impl AnnotationConverter {
    pub fn new(table: RenderTable) -> Self {
        Self { table }
    }

    /// Renders `text` with `annotations` applied as markup.
    ///
    /// Pure and infallible: a conversion owns its working tree and shares
    /// nothing, so concurrent calls on independent inputs are safe.
    pub fn convert_text(&self, text: &str, annotations: &[Annotation]) -> String {
        let spans = annotations.to_vec();
        let span_tree = tree::build_tree(spans);
        let tags: Vec<Tag> = convert_tree_to_tags(&span_tree, &self.table)
            .into_iter()
            // Empty markup means the renderer opted out of this instance.
            .filter(|tag| !tag.markup.is_empty())
            .collect();

        let points: Vec<usize> = tags.iter().map(|tag| tag.position).collect();
        let fragments = text::split_at_points(text, &points);

        // fragments.len() is always tags.len() + 1.
        let mut out = String::new();
        for (i, fragment) in fragments.iter().enumerate() {
            out.push_str(fragment);
            if let Some(tag) = tags.get(i) {
                out.push_str(&tag.markup);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::Attribute;
    use crate::tree::build_tree;

    fn table() -> RenderTable {
        RenderTable::new()
            .wrap("bold", "<b>", "</b>")
            .wrap("italic", "<i>", "</i>")
            .wrap("linebreak", "<br>", "")
    }

    #[test]
    fn absent_type_has_no_rules() {
        assert!(table().get("marquee").is_none());
        assert!(table().get("bold").is_some());
    }

    #[test]
    fn tree_converts_to_ordered_tags() {
        let tree = build_tree(vec![
            Annotation::new("bold", 0, 5),
            Annotation::new("italic", 1, 2),
        ]);
        let tags = convert_tree_to_tags(&tree, &table());
        let rendered: Vec<(String, usize)> =
            tags.into_iter().map(|t| (t.markup, t.position)).collect();
        assert_eq!(
            rendered,
            vec![
                ("<b>".to_string(), 0),
                ("<i>".to_string(), 1),
                ("</i>".to_string(), 3),
                ("</b>".to_string(), 5),
            ]
        );
    }

    #[test]
    fn unknown_type_in_tree_contributes_no_tags() {
        let tree = build_tree(vec![
            Annotation::new("marquee", 0, 5),
            Annotation::new("bold", 1, 2),
        ]);
        let tags = convert_tree_to_tags(&tree, &table());
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].markup, "<b>");
    }

    #[test]
    fn converts_simple_nesting() {
        let converter = AnnotationConverter::new(table());
        let html = converter.convert_text("hello world", &[Annotation::new("bold", 0, 5)]);
        assert_eq!(html, "<b>hello</b> world");
    }

    #[test]
    fn empty_markup_tags_are_filtered() {
        // linebreak's end hook renders nothing, so only <br> is inserted.
        let converter = AnnotationConverter::new(table());
        let html = converter.convert_text("ab", &[Annotation::new("linebreak", 1, 0)]);
        assert_eq!(html, "a<br>b");
    }

    #[test]
    fn no_annotations_is_the_identity() {
        let converter = AnnotationConverter::new(table());
        assert_eq!(converter.convert_text("plain text", &[]), "plain text");
    }

    #[test]
    fn negative_length_normalizes_to_a_point() {
        let converter = AnnotationConverter::new(table());
        let html = converter.convert_text("abc", &[Annotation::new("bold", 1, -4)]);
        assert_eq!(html, "a<b></b>bc");
    }

    #[test]
    fn caller_annotations_are_not_mutated() {
        let annotations = vec![
            Annotation::new("bold", 0, 5).with_attributes(vec![Attribute::new("x", "y")]),
            Annotation::new("italic", 3, 5),
        ];
        let before = annotations.clone();
        let converter = AnnotationConverter::new(table());
        converter.convert_text("hello world", &annotations);
        assert_eq!(annotations, before);
    }
}
