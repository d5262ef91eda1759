pub mod annotations;
pub mod document;
pub mod html;
pub mod io;
pub mod render;
pub mod text;
pub mod transform;
pub mod tree;
pub mod xml;

// Re-export key types for easier usage
pub use annotations::{Annotation, Attribute};
pub use document::{AnnotatedText, Component};
pub use render::{AnnotationConverter, RenderTable, Tag, TagRules};
pub use transform::{LinkResolver, MediaLookup, ResolvedLink, VideoMetadata};
pub use tree::{Span, SpanTree, SpanTreeNode, build_tree};
