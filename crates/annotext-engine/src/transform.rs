//! # Component Transformation
//!
//! Prunes each component's annotations (allow-listing types, dropping
//! malformed or unresolvable ones) and fills in rendered markup via an
//! [`AnnotationConverter`]. Internal links and video metadata go through
//! collaborator traits so callers own the actual lookups.

use log::warn;

use crate::annotations::{Annotation, Attribute};
use crate::document::{Component, Video, VideoSource};
use crate::render::AnnotationConverter;

/// The annotation types the transform keeps; everything else is pruned
/// before rendering.
const ALLOWED_ANNOTATIONS: [&str; 11] = [
    "linebreak",
    "bold",
    "underlined",
    "italic",
    "drop_caps",
    "scaps",
    "subscript",
    "superscript",
    "external_link",
    "internal_link",
    "ufinish",
];

/// A resolved internal-link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub id: String,
    pub url: String,
}

/// Resolves internal-link identifiers against the content store.
///
/// `Ok(None)` means the target is unknown or unpublished; the transform
/// drops the annotation. Errors are treated the same way for annotations,
/// so a failed lookup never corrupts the rendered output.
pub trait LinkResolver {
    fn resolve(&self, identifier: &str) -> anyhow::Result<Option<ResolvedLink>>;
}

/// Metadata for an embedded video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMetadata {
    pub source: String,
    pub title: String,
    pub thumbnail_image: String,
}

/// Fetches video/embed metadata for a URL. Failure policy is owned by the
/// caller: errors surface as [`TransformError::MediaLookup`].
pub trait MediaLookup {
    fn lookup(&self, url: Option<&str>) -> anyhow::Result<VideoMetadata>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("media metadata lookup failed for {url:?}: {cause}")]
    MediaLookup {
        url: Option<String>,
        cause: anyhow::Error,
    },
}

/// Keeps only the annotations worth rendering.
///
/// Drops annotation types outside the allow-list and annotations with a
/// negative index; internal links are resolved through `resolver` and
/// dropped on any failure path (no attributes, no `href`, resolver error,
/// resolver miss). Resolved links get their `href` rewritten to the
/// resolved URL plus `id` and `type` attributes appended.
pub fn prune_annotations(
    annotations: Vec<Annotation>,
    resolver: &dyn LinkResolver,
) -> Vec<Annotation> {
    annotations
        .into_iter()
        .filter_map(|annotation| transform_internal_link(annotation, resolver))
        .filter(|annotation| ALLOWED_ANNOTATIONS.contains(&annotation.kind.as_str()))
        .filter(|annotation| annotation.index >= 0)
        .collect()
}

fn transform_internal_link(
    mut annotation: Annotation,
    resolver: &dyn LinkResolver,
) -> Option<Annotation> {
    if annotation.kind != "internal_link" {
        return Some(annotation);
    }

    if annotation.attributes.is_empty() {
        warn!("no attributes found on internal_link");
        return None;
    }
    let Some(href_index) = annotation
        .attributes
        .iter()
        .position(|attribute| attribute.name == "href")
    else {
        warn!("no href found on internal_link");
        return None;
    };

    let internal_link = annotation.attributes[href_index].value.clone();
    // The target identifier is the last path segment of the internal URL.
    let identifier = internal_link
        .rsplit('/')
        .next()
        .unwrap_or(internal_link.as_str());

    let resolved = match resolver.resolve(identifier) {
        Ok(Some(resolved)) => resolved,
        Ok(None) => {
            warn!("no published target for internal link {internal_link}");
            return None;
        }
        Err(error) => {
            warn!("error resolving internal link {internal_link}: {error:#}");
            return None;
        }
    };

    annotation.attributes[href_index].value = resolved.url;
    annotation
        .attributes
        .push(Attribute::new("id", resolved.id));
    annotation
        .attributes
        .push(Attribute::new("type", "Article"));
    Some(annotation)
}

/// Transforms every component of a document body in place.
pub fn transform_components(
    components: &mut [Component],
    converter: &AnnotationConverter,
    resolver: &dyn LinkResolver,
    media: &dyn MediaLookup,
) -> Result<(), TransformError> {
    for component in components {
        transform_component(component, converter, resolver, media)?;
    }
    Ok(())
}

/// Transforms a single component in place: paragraph-like components (and
/// list items, and image captions) get their annotations pruned and their
/// `text_html` slot filled; video components get metadata filled in from
/// the lookup collaborator; everything else passes through untouched.
pub fn transform_component(
    component: &mut Component,
    converter: &AnnotationConverter,
    resolver: &dyn LinkResolver,
    media: &dyn MediaLookup,
) -> Result<(), TransformError> {
    match component {
        Component::Paragraph(text)
        | Component::BlockQuote(text)
        | Component::PullQuote(text)
        | Component::BookInfo(text) => render_text(text, converter, resolver),
        Component::OrderedList { items } | Component::UnorderedList { items } => {
            for item in items {
                render_text(item, converter, resolver);
            }
        }
        Component::Image(image) => {
            if let Some(caption) = &mut image.caption {
                render_text(caption, converter, resolver);
            }
        }
        Component::Video(video) => fill_video_metadata(video, media)?,
        Component::Infobox { components } => {
            for inner in components {
                transform_component(inner, converter, resolver, media)?;
            }
        }
        Component::Crosshead(_)
        | Component::GenericEmbed { .. }
        | Component::Infographic(_)
        | Component::Divider
        | Component::Unknown { .. } => {}
    }
    Ok(())
}

fn render_text(
    text: &mut crate::document::AnnotatedText,
    converter: &AnnotationConverter,
    resolver: &dyn LinkResolver,
) {
    let annotations = prune_annotations(text.annotations.clone(), resolver);
    text.text_html = Some(converter.convert_text(&text.text, &annotations));
}

fn fill_video_metadata(video: &mut Video, media: &dyn MediaLookup) -> Result<(), TransformError> {
    let metadata =
        media
            .lookup(video.url.as_deref())
            .map_err(|cause| TransformError::MediaLookup {
                url: video.url.clone(),
                cause,
            })?;

    video.video_source = Some(if metadata.source == "YouTube" {
        VideoSource::Youtube
    } else {
        VideoSource::Default
    });
    video.title = Some(metadata.title);
    video.thumbnail_image = Some(metadata.thumbnail_image);
    Ok(())
}
