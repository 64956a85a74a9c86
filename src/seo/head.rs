//! Document `<head>` abstraction.
//!
//! The structured-data pass never touches a concrete DOM. It talks to a
//! [`HeadTagStore`], which exposes the handful of primitives the reconciler
//! and injector need. [`MemoryHead`] is the in-memory implementation used by
//! the CLI and the tests; a browser binding would implement the same trait
//! over `document.head`.
//!
//! # Node Keys
//!
//! | Node | Key | Selector equivalent |
//! |------|-----|---------------------|
//! | `<meta>` | (`property`/`name`, key) | `meta[property="og:url"]` |
//! | `<link>` | `rel` | `link[rel="canonical"]` |
//! | `<script>` | `id` | `script#jsonld-website` |
//!
//! The store itself does not enforce uniqueness; the callers in
//! [`super::reconcile`] and [`super::inject`] do, by find-or-create and
//! remove-then-recreate.

use anyhow::Result;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use crate::utils::xml::{
    XmlWriter, create_xml_writer, into_string, write_empty_elem, write_raw_element,
    write_text_element,
};

/// MIME type of structured-data scripts.
pub const JSON_LD_MIME: &str = "application/ld+json";

/// Attribute that keys a `<meta>` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaAttr {
    /// `<meta property="...">` (Open Graph, `article:*`)
    Property,
    /// `<meta name="...">` (Twitter, plain metadata)
    Name,
}

impl MetaAttr {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Name => "name",
        }
    }
}

/// A node in the head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadNode {
    Title(String),
    Meta {
        attr: MetaAttr,
        key: String,
        content: String,
    },
    Link {
        rel: String,
        href: String,
    },
    Script {
        id: String,
        mime: String,
        body: String,
    },
}

/// Primitive operations over a document head.
pub trait HeadTagStore {
    /// Whether a `<meta {attr}="{key}">` exists.
    fn has_meta(&self, attr: MetaAttr, key: &str) -> bool;

    /// Append an empty `<meta {attr}="{key}">`.
    fn create_meta(&mut self, attr: MetaAttr, key: &str);

    /// Set `content` on the existing `<meta {attr}="{key}">`.
    fn set_meta_content(&mut self, attr: MetaAttr, key: &str, content: &str);

    /// Whether a `<link rel="{rel}">` exists.
    fn has_link(&self, rel: &str) -> bool;

    /// Append a `<link rel="{rel}">` without `href`.
    fn create_link(&mut self, rel: &str);

    /// Set `href` on the existing `<link rel="{rel}">`.
    fn set_link_href(&mut self, rel: &str, href: &str);

    /// Remove every `<script id="{id}">`, returning how many were removed.
    fn remove_scripts(&mut self, id: &str) -> usize;

    /// Append a `<script type="{mime}" id="{id}">` holding `body`.
    fn append_script(&mut self, id: &str, mime: &str, body: &str);
}

// ============================================================================
// In-memory Head
// ============================================================================

/// Head kept as an ordered list of nodes, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHead {
    nodes: Vec<HeadNode>,
}

impl MemoryHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing head, e.g. the static tags of `index.html`.
    pub fn with_nodes(nodes: Vec<HeadNode>) -> Self {
        Self { nodes }
    }

    pub fn count_meta(&self, attr: MetaAttr, key: &str) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, HeadNode::Meta { attr: a, key: k, .. } if *a == attr && k == key))
            .count()
    }

    pub fn count_links(&self, rel: &str) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, HeadNode::Link { rel: r, .. } if r == rel))
            .count()
    }

    /// Serialize the head as indented HTML.
    pub fn render(&self) -> Result<String> {
        let mut writer = create_xml_writer();
        writer.write_event(Event::Start(BytesStart::new("head")))?;
        for node in &self.nodes {
            write_node(&mut writer, node)?;
        }
        writer.write_event(Event::End(BytesEnd::new("head")))?;
        into_string(writer)
    }
}

// Read accessors for assertions
#[cfg(test)]
impl MemoryHead {
    pub fn nodes(&self) -> &[HeadNode] {
        &self.nodes
    }

    pub fn meta_content(&self, attr: MetaAttr, key: &str) -> Option<&str> {
        self.nodes.iter().find_map(|node| match node {
            HeadNode::Meta {
                attr: a,
                key: k,
                content,
            } if *a == attr && k == key => Some(content.as_str()),
            _ => None,
        })
    }

    pub fn link_href(&self, rel: &str) -> Option<&str> {
        self.nodes.iter().find_map(|node| match node {
            HeadNode::Link { rel: r, href } if r == rel => Some(href.as_str()),
            _ => None,
        })
    }

    /// Bodies of every script with the given id, in document order.
    pub fn scripts(&self, id: &str) -> Vec<&str> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                HeadNode::Script { id: i, body, .. } if i == id => Some(body.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Ids of all scripts, in document order.
    pub fn script_ids(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                HeadNode::Script { id, .. } => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }
}

fn write_node(writer: &mut XmlWriter, node: &HeadNode) -> Result<()> {
    match node {
        HeadNode::Title(title) => write_text_element(writer, "title", title),
        HeadNode::Meta { attr, key, content } => write_empty_elem(
            writer,
            "meta",
            &[(attr.as_str(), key.as_str()), ("content", content.as_str())],
        ),
        HeadNode::Link { rel, href } => {
            write_empty_elem(writer, "link", &[("rel", rel.as_str()), ("href", href.as_str())])
        }
        HeadNode::Script { id, mime, body } => write_raw_element(
            writer,
            "script",
            &[("type", mime.as_str()), ("id", id.as_str())],
            &escape_script_body(body),
        ),
    }
}

/// Escape `<` so a JSON payload can never contain `</script>`.
///
/// `<` and `&` only occur inside JSON strings, where the `\u` escapes
/// decode to the same characters.
fn escape_script_body(body: &str) -> String {
    body.replace('<', "\\u003c").replace('&', "\\u0026")
}

impl HeadTagStore for MemoryHead {
    fn has_meta(&self, attr: MetaAttr, key: &str) -> bool {
        self.count_meta(attr, key) > 0
    }

    fn create_meta(&mut self, attr: MetaAttr, key: &str) {
        self.nodes.push(HeadNode::Meta {
            attr,
            key: key.to_owned(),
            content: String::new(),
        });
    }

    fn set_meta_content(&mut self, attr: MetaAttr, key: &str, content: &str) {
        let found = self.nodes.iter_mut().find_map(|node| match node {
            HeadNode::Meta {
                attr: a,
                key: k,
                content,
            } if *a == attr && k == key => Some(content),
            _ => None,
        });
        if let Some(slot) = found {
            content.clone_into(slot);
        }
    }

    fn has_link(&self, rel: &str) -> bool {
        self.count_links(rel) > 0
    }

    fn create_link(&mut self, rel: &str) {
        self.nodes.push(HeadNode::Link {
            rel: rel.to_owned(),
            href: String::new(),
        });
    }

    fn set_link_href(&mut self, rel: &str, href: &str) {
        let found = self.nodes.iter_mut().find_map(|node| match node {
            HeadNode::Link { rel: r, href } if r == rel => Some(href),
            _ => None,
        });
        if let Some(slot) = found {
            href.clone_into(slot);
        }
    }

    fn remove_scripts(&mut self, id: &str) -> usize {
        let before = self.nodes.len();
        self.nodes
            .retain(|node| !matches!(node, HeadNode::Script { id: i, .. } if i == id));
        before - self.nodes.len()
    }

    fn append_script(&mut self, id: &str, mime: &str, body: &str) {
        self.nodes.push(HeadNode::Script {
            id: id.to_owned(),
            mime: mime.to_owned(),
            body: body.to_owned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_primitives() {
        let mut head = MemoryHead::new();
        assert!(!head.has_meta(MetaAttr::Property, "og:url"));

        head.create_meta(MetaAttr::Property, "og:url");
        head.set_meta_content(MetaAttr::Property, "og:url", "https://a.com/x");

        assert!(head.has_meta(MetaAttr::Property, "og:url"));
        assert!(!head.has_meta(MetaAttr::Name, "og:url"));
        assert_eq!(head.meta_content(MetaAttr::Property, "og:url"), Some("https://a.com/x"));
    }

    #[test]
    fn test_set_meta_content_without_node_is_noop() {
        let mut head = MemoryHead::new();
        head.set_meta_content(MetaAttr::Name, "last-modified", "x");
        assert!(head.nodes().is_empty());
    }

    #[test]
    fn test_remove_scripts_removes_all_duplicates() {
        let mut head = MemoryHead::new();
        head.append_script("jsonld-website", JSON_LD_MIME, "{}");
        head.append_script("jsonld-other", JSON_LD_MIME, "{}");
        head.append_script("jsonld-website", JSON_LD_MIME, "{}");

        assert_eq!(head.remove_scripts("jsonld-website"), 2);
        assert_eq!(head.script_ids(), vec!["jsonld-other"]);
        assert_eq!(head.remove_scripts("jsonld-website"), 0);
    }

    #[test]
    fn test_render() {
        let mut head = MemoryHead::with_nodes(vec![HeadNode::Title("Stadiumport".into())]);
        head.create_link("canonical");
        head.set_link_href("canonical", "https://stadiumport.com/");
        head.create_meta(MetaAttr::Name, "twitter:url");
        head.set_meta_content(MetaAttr::Name, "twitter:url", "https://stadiumport.com/");
        head.append_script("jsonld-website", JSON_LD_MIME, r#"{"name":"A&B </script>"}"#);

        let html = head.render().unwrap();
        assert!(html.starts_with("<head>"));
        assert!(html.contains("<title>Stadiumport</title>"));
        assert!(html.contains(r#"<link rel="canonical" href="https://stadiumport.com/"/>"#));
        assert!(html.contains(r#"<meta name="twitter:url" content="https://stadiumport.com/"/>"#));
        assert!(html.contains(r#"<script type="application/ld+json" id="jsonld-website">"#));
        assert!(html.contains(r#"{"name":"A\u0026B \u003c/script>"}"#));
        assert_eq!(html.matches("</script>").count(), 1);
        assert!(html.trim_end().ends_with("</head>"));
    }

    #[test]
    fn test_escaped_body_is_still_valid_json() {
        let body = r#"{"name":"A&B </script>"}"#;
        let value: serde_json::Value = serde_json::from_str(&escape_script_body(body)).unwrap();
        assert_eq!(value["name"], "A&B </script>");
    }
}
