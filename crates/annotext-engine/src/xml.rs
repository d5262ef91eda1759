//! The XML rendition: annotation types render as elements named after
//! themselves, and whole document bodies wrap in `<document>`.

use crate::annotations::Annotation;
use crate::document::Component;
use crate::html::anchor_start;
use crate::render::{AnnotationConverter, RenderTable, TagRules};

/// Builds the XML render table for the supported annotation types.
pub fn xml_render_table() -> RenderTable {
    RenderTable::new()
        .wrap("linebreak", "<linebreak>", "</linebreak>")
        .wrap("bold", "<bold>", "</bold>")
        .wrap("underlined", "<underlined>", "</underlined>")
        .wrap("italic", "<italic>", "</italic>")
        .wrap("drop_caps", "<drop_caps>", "</drop_caps>")
        .wrap("scaps", "<scaps>", "</scaps>")
        .wrap("subscript", "<subscript>", "</subscript>")
        .wrap("superscript", "<superscript>", "</superscript>")
        .wrap("ufinish", "<ufinish>", "</ufinish>")
        .rules("external_link", Link::new("external_link"))
        .rules("internal_link", Link::new("internal_link"))
}

/// A converter preloaded with the XML render table.
pub fn xml_converter() -> AnnotationConverter {
    AnnotationConverter::new(xml_render_table())
}

/// Link annotations keep their type name as the element name but share the
/// HTML table's attribute handling.
struct Link {
    element: &'static str,
}

impl Link {
    fn new(element: &'static str) -> Self {
        Self { element }
    }
}

impl TagRules for Link {
    fn on_start(&self, annotation: &Annotation) -> String {
        anchor_start(self.element, annotation)
    }

    fn on_end(&self, _annotation: &Annotation) -> String {
        format!("</{}>", self.element)
    }
}

/// Renders a single component as an XML fragment, or `None` for component
/// types with no XML rendition.
pub fn xml_transform(component: &Component) -> Option<String> {
    let converter = xml_converter();
    match component {
        Component::Paragraph(text)
        | Component::BlockQuote(text)
        | Component::PullQuote(text)
        | Component::BookInfo(text) => {
            let annotated = converter.convert_text(&text.text, &text.annotations);
            Some(format!("<paragraph><text>{annotated}</text></paragraph>"))
        }
        Component::OrderedList { .. } | Component::UnorderedList { .. } => {
            Some("<list></list>".to_string())
        }
        _ => None,
    }
}

/// Renders a full document body as XML. Components with no XML rendition
/// contribute nothing.
pub fn xml_body(components: &[Component]) -> String {
    let inner: String = components.iter().filter_map(xml_transform).collect();
    format!("<document>{inner}</document>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::Attribute;
    use crate::document::AnnotatedText;

    #[test]
    fn annotations_render_as_named_elements() {
        let xml = xml_converter().convert_text("hello", &[Annotation::new("bold", 0, 5)]);
        assert_eq!(xml, "<bold>hello</bold>");
    }

    #[test]
    fn links_keep_their_type_as_element_name() {
        let annotation = Annotation::new("external_link", 0, 4)
            .with_attributes(vec![Attribute::new("href", "https://example.com")]);
        let xml = xml_converter().convert_text("link", &[annotation]);
        assert_eq!(
            xml,
            "<external_link href=\"https://example.com\">link</external_link>"
        );
    }

    #[test]
    fn paragraphs_wrap_in_text_elements() {
        let component = Component::Paragraph(AnnotatedText::new(
            "hello world",
            vec![Annotation::new("italic", 0, 5)],
        ));
        assert_eq!(
            xml_transform(&component).unwrap(),
            "<paragraph><text><italic>hello</italic> world</text></paragraph>"
        );
    }

    #[test]
    fn lists_render_as_placeholder_elements() {
        let component = Component::OrderedList { items: vec![] };
        assert_eq!(xml_transform(&component).unwrap(), "<list></list>");
    }

    #[test]
    fn unrenderable_components_are_skipped() {
        assert_eq!(xml_transform(&Component::Divider), None);
    }

    #[test]
    fn body_wraps_components_in_a_document_element() {
        let components = vec![
            Component::Paragraph(AnnotatedText::new("one", vec![])),
            Component::Divider,
            Component::Paragraph(AnnotatedText::new("two", vec![])),
        ];
        assert_eq!(
            xml_body(&components),
            "<document><paragraph><text>one</text></paragraph>\
             <paragraph><text>two</text></paragraph></document>"
        );
    }
}
