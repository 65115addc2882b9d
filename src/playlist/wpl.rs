//! WPL playlist parsing
//!
//! WPL is a SMIL-flavoured XML document:
//!
//! ```xml
//! <?wpl version="1.0"?>
//! <smil>
//!   <head>
//!     <meta name="Generator" content="Microsoft Windows Media Player -- 12.0"/>
//!     <author/>
//!     <title>Road Trip</title>
//!   </head>
//!   <body>
//!     <seq>
//!       <media src="..\Music\Artist\Song.mp3" tid="{...}" cid="{...}"/>
//!     </seq>
//!   </body>
//! </smil>
//! ```

use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

use super::error::{ConvertError, ConvertResult};

const UTF8_BOM: &str = "\u{feff}";

/// A parsed WPL document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaylistDocument {
    pub head: PlaylistHead,
    /// Tracks in document order
    pub media: Vec<MediaReference>,
}

/// Playlist metadata. Not used for conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaylistHead {
    pub title: Option<String>,
    pub author: Option<String>,
    pub meta: Vec<MetaEntry>,
}

/// A `<meta name=".." content=".."/>` pair
#[derive(Debug, Clone, PartialEq)]
pub struct MetaEntry {
    pub name: String,
    pub content: String,
}

/// One track entry
#[derive(Debug, Clone, PartialEq)]
pub struct MediaReference {
    /// Source path exactly as stored in the playlist
    pub src: String,
    /// Track id
    pub tid: Option<String>,
    /// Content id
    pub cid: Option<String>,
}

impl MediaReference {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            tid: None,
            cid: None,
        }
    }
}

/// Read and parse a WPL file
pub async fn parse_playlist_file(path: &Path) -> ConvertResult<PlaylistDocument> {
    let bytes = fs::read(path)
        .await
        .map_err(|e| ConvertError::io(path, e))?;

    let content = String::from_utf8(bytes).map_err(|_| ConvertError::Encoding {
        path: path.to_path_buf(),
    })?;

    let document = parse_wpl(&content).map_err(|e| match e {
        WplError::Xml(source) => ConvertError::Xml {
            path: path.to_path_buf(),
            source,
        },
        WplError::Schema(reason) => ConvertError::Schema {
            path: path.to_path_buf(),
            reason,
        },
    })?;

    let identified = document
        .media
        .iter()
        .filter(|m| m.tid.is_some() || m.cid.is_some())
        .count();
    debug!(
        "Parsed {}: title={:?}, author={:?}, {} tracks ({} with ids)",
        path.display(),
        document.head.title,
        document.head.author,
        document.media.len(),
        identified
    );
    for entry in &document.head.meta {
        debug!("  meta {} = {}", entry.name, entry.content);
    }

    Ok(document)
}

/// Failure parsing WPL text, before a file path is attached
#[derive(Debug)]
pub enum WplError {
    Xml(roxmltree::Error),
    Schema(String),
}

/// Parse WPL text into a document
pub fn parse_wpl(xml: &str) -> Result<PlaylistDocument, WplError> {
    let xml = xml.strip_prefix(UTF8_BOM).unwrap_or(xml);
    let doc = roxmltree::Document::parse(xml).map_err(WplError::Xml)?;

    let root = doc.root_element();
    if root.tag_name().name() != "smil" {
        return Err(WplError::Schema(format!(
            "root element is <{}>, expected <smil>",
            root.tag_name().name()
        )));
    }

    let mut document = PlaylistDocument::default();

    for child in root.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "head" => document.head = parse_head(&child),
            "body" => {
                // Several <seq> blocks are read back to back
                for seq in child
                    .children()
                    .filter(|n| n.is_element() && n.tag_name().name() == "seq")
                {
                    parse_seq(&seq, &mut document.media);
                }
            }
            _ => {}
        }
    }

    Ok(document)
}

fn parse_head(head: &roxmltree::Node) -> PlaylistHead {
    let mut result = PlaylistHead::default();

    for child in head.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "title" => result.title = child.text().map(|t| t.trim().to_string()),
            "author" => result.author = child.text().map(|t| t.trim().to_string()),
            "meta" => result.meta.push(MetaEntry {
                name: child.attribute("name").unwrap_or_default().to_string(),
                content: child.attribute("content").unwrap_or_default().to_string(),
            }),
            _ => {}
        }
    }

    result
}

fn parse_seq(seq: &roxmltree::Node, media: &mut Vec<MediaReference>) {
    for node in seq
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "media")
    {
        let Some(src) = node.attribute("src") else {
            warn!("Skipping <media> element without src attribute");
            continue;
        };

        media.push(MediaReference {
            tid: node.attribute("tid").map(str::to_string),
            cid: node.attribute("cid").map(str::to_string),
            ..MediaReference::new(src)
        });
    }
}
