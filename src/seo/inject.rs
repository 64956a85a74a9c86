//! JSON-LD script injection.
//!
//! Each graph lives in its own `<script type="application/ld+json">` keyed
//! by a marker id. Injection deletes every node with the marker before
//! appending the new one; the payload is a whole object graph, so there is
//! nothing to patch in place.

use anyhow::{Context, Result};
use serde::Serialize;

use super::head::{HeadTagStore, JSON_LD_MIME};

pub const MARKER_WEBSITE: &str = "jsonld-website";
pub const MARKER_ORGANIZATION: &str = "jsonld-organization";
pub const MARKER_BREADCRUMB: &str = "jsonld-breadcrumb";
pub const MARKER_DATE_MODIFIED: &str = "jsonld-date-modified";
pub const MARKER_ARTICLE_DATE_MODIFIED: &str = "jsonld-article-date-modified";
pub const MARKER_ENTITY: &str = "jsonld-entity";
pub const MARKER_SPEAKABLE: &str = "jsonld-speakable";
pub const MARKER_ITEM_LIST: &str = "jsonld-item-list";

/// Markers whose graphs depend on the page kind. A pass that does not emit
/// one of these must retract it.
pub const ENTITY_MARKERS: &[&str] = &[MARKER_ENTITY, MARKER_SPEAKABLE, MARKER_ITEM_LIST];

/// Replace the script carrying `marker` with one holding `payload`.
pub fn inject_json_ld<S, T>(store: &mut S, marker: &str, payload: &T) -> Result<()>
where
    S: HeadTagStore + ?Sized,
    T: Serialize + ?Sized,
{
    // Serialize first: a failure must leave the previous node in place
    let body = serde_json::to_string(payload)
        .with_context(|| format!("Failed to serialize JSON-LD for `{marker}`"))?;
    store.remove_scripts(marker);
    store.append_script(marker, JSON_LD_MIME, &body);
    Ok(())
}

/// Remove the script carrying `marker`. Returns whether one existed.
pub fn retract_json_ld<S: HeadTagStore + ?Sized>(store: &mut S, marker: &str) -> bool {
    store.remove_scripts(marker) > 0
}
