use annotext_engine::html::html_converter;
use annotext_engine::io;
use annotext_engine::transform::{
    LinkResolver, MediaLookup, ResolvedLink, VideoMetadata, transform_components,
};
use anyhow::Result;
use log::debug;
use std::{env, path::PathBuf, process};

/// Offline stand-ins for the content-store collaborators: internal links
/// never resolve (so they drop from the output) and video metadata comes
/// back canned.
struct OfflineCollaborators;

impl LinkResolver for OfflineCollaborators {
    fn resolve(&self, identifier: &str) -> Result<Option<ResolvedLink>> {
        debug!("offline run, not resolving internal link {identifier}");
        Ok(None)
    }
}

impl MediaLookup for OfflineCollaborators {
    fn lookup(&self, url: Option<&str>) -> Result<VideoMetadata> {
        debug!("offline run, canned metadata for {url:?}");
        Ok(VideoMetadata {
            source: "YouTube".to_string(),
            title: "Video Title".to_string(),
            thumbnail_image: String::new(),
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let Some(path) = env::args().nth(1).map(PathBuf::from) else {
        eprintln!("Usage: annotext-cli <document.json>");
        process::exit(1);
    };

    let mut components = io::load_components(&path)?;
    transform_components(
        &mut components,
        &html_converter(),
        &OfflineCollaborators,
        &OfflineCollaborators,
    )?;

    println!("{}", serde_json::to_string_pretty(&components)?);
    Ok(())
}
