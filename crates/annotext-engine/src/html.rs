//! The HTML render table: how each supported annotation type renders to
//! HTML tag pairs.

use crate::annotations::Annotation;
use crate::render::{AnnotationConverter, RenderTable, TagRules};

/// Builds the standard HTML render table covering every supported
/// annotation type.
pub fn html_render_table() -> RenderTable {
    RenderTable::new()
        .wrap("linebreak", "<br>", "")
        .wrap("bold", "<b>", "</b>")
        .wrap("underlined", "<span>", "</span>")
        .wrap("italic", "<i>", "</i>")
        .wrap("drop_caps", "<span data-caps=\"initial\">", "</span>")
        .wrap("scaps", "<small>", "</small>")
        .wrap("subscript", "<sub>", "</sub>")
        .wrap("superscript", "<sup>", "</sup>")
        .wrap("ufinish", "<span class=\"ufinish\">", "</span>")
        .rules("external_link", Anchor)
        .rules("internal_link", Anchor)
}

/// A converter preloaded with the HTML render table.
pub fn html_converter() -> AnnotationConverter {
    AnnotationConverter::new(html_render_table())
}

/// Renders link annotations as anchors.
///
/// The opening tag is built from the annotation's `href`, `new_window` and
/// `no_follow` attributes; a missing or empty `href` falls back to
/// `href=""`. Attribute values are escaped for the double-quoted context.
struct Anchor;

impl TagRules for Anchor {
    fn on_start(&self, annotation: &Annotation) -> String {
        anchor_start("a", annotation)
    }

    fn on_end(&self, _annotation: &Annotation) -> String {
        "</a>".to_string()
    }
}

/// Shared with the XML table, where the element name differs but the
/// attribute handling is identical.
pub(crate) fn anchor_start(element: &str, annotation: &Annotation) -> String {
    let href = match annotation.attribute("href").filter(|v| !v.is_empty()) {
        Some(url) => format!(
            "href=\"{}\"",
            html_escape::encode_double_quoted_attribute(url)
        ),
        None => "href=\"\"".to_string(),
    };
    let target = if has_flag(annotation, "new_window") {
        "target=\"_blank\""
    } else {
        ""
    };
    let relation = if has_flag(annotation, "no_follow") {
        "rel=\"nofollow\""
    } else {
        ""
    };
    format!(
        "<{element} {}>",
        [href.as_str(), target, relation].join(" ").trim_end()
    )
}

/// A flag attribute counts as set when present with a non-empty value.
fn has_flag(annotation: &Annotation, name: &str) -> bool {
    annotation
        .attribute(name)
        .is_some_and(|value| !value.is_empty())
}
