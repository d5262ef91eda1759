//! The input document shape: an ordered sequence of typed components, each
//! carrying text, annotations and type-specific fields.
//!
//! This mirrors the upstream wire format (`camelCase` fields, literal
//! `SCREAMING_SNAKE` type tags). Schema validation beyond structural
//! deserialization is owned by the producer, not this crate.

use serde::{Deserialize, Serialize};

use crate::annotations::Annotation;

/// A text string with its annotations, plus the slot the transform fills
/// with rendered markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedText {
    pub text: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_html: Option<String>,
}

impl AnnotatedText {
    pub fn new(text: impl Into<String>, annotations: Vec<Annotation>) -> Self {
        Self {
            text: text.into(),
            annotations,
            text_html: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageMode {
    Normal,
    Slim,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub mode: ImageMode,
    pub alt_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<AnnotatedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoSource {
    Youtube,
    Default,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_source: Option<VideoSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Infographic {
    pub url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

/// One component of a document body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Component {
    Paragraph(AnnotatedText),
    BlockQuote(AnnotatedText),
    PullQuote(AnnotatedText),
    BookInfo(AnnotatedText),
    Crosshead(AnnotatedText),
    OrderedList { items: Vec<AnnotatedText> },
    UnorderedList { items: Vec<AnnotatedText> },
    Image(Image),
    Video(Video),
    GenericEmbed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
    Infographic(Infographic),
    Divider,
    Infobox { components: Vec<Component> },
    Unknown {
        #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
        metadata: serde_json::Value,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn paragraph_deserializes_from_wire_format() {
        let json = r#"{
            "type": "PARAGRAPH",
            "text": "hello world",
            "annotations": [{"type": "bold", "index": 0, "length": 5}]
        }"#;
        let component: Component = serde_json::from_str(json).unwrap();
        let Component::Paragraph(paragraph) = component else {
            panic!("expected a paragraph");
        };
        assert_eq!(paragraph.text, "hello world");
        assert_eq!(paragraph.annotations.len(), 1);
        assert_eq!(paragraph.text_html, None);
    }

    #[test]
    fn list_components_carry_annotated_items() {
        let json = r#"{
            "type": "UNORDERED_LIST",
            "items": [
                {"text": "first", "annotations": []},
                {"text": "second", "annotations": []}
            ]
        }"#;
        let component: Component = serde_json::from_str(json).unwrap();
        let Component::UnorderedList { items } = component else {
            panic!("expected a list");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].text, "second");
    }

    #[test]
    fn image_caption_is_optional() {
        let json = r#"{"type": "IMAGE", "mode": "NORMAL", "altText": "A chart"}"#;
        let component: Component = serde_json::from_str(json).unwrap();
        let Component::Image(image) = component else {
            panic!("expected an image");
        };
        assert_eq!(image.mode, ImageMode::Normal);
        assert_eq!(image.alt_text, "A chart");
        assert!(image.caption.is_none());
    }

    #[test]
    fn divider_has_no_payload() {
        let component: Component = serde_json::from_str(r#"{"type": "DIVIDER"}"#).unwrap();
        assert_eq!(component, Component::Divider);
    }

    #[test]
    fn infobox_nests_components() {
        let json = r#"{
            "type": "INFOBOX",
            "components": [{"type": "PARAGRAPH", "text": "inner", "annotations": []}]
        }"#;
        let component: Component = serde_json::from_str(json).unwrap();
        let Component::Infobox { components } = component else {
            panic!("expected an infobox");
        };
        assert!(matches!(components[0], Component::Paragraph(_)));
    }

    #[test]
    fn rendered_html_serializes_in_camel_case() {
        let mut paragraph = AnnotatedText::new("hi", vec![]);
        paragraph.text_html = Some("hi".to_string());
        let json = serde_json::to_string(&Component::Paragraph(paragraph)).unwrap();
        assert!(json.contains(r#""textHtml":"hi""#), "got {json}");
        assert!(json.contains(r#""type":"PARAGRAPH""#), "got {json}");
    }
}
