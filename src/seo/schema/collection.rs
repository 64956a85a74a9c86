//! Collection index graphs: CollectionPage and ItemList.
//!
//! Both are emitted together on `/world-cup-2026-host-cities` and
//! `/world-cup-2026-stadiums`, and each is valid on its own.

use serde::Serialize;

use super::SCHEMA_CONTEXT;

/// One entry of a collection, with absolute URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionItem {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

// ============================================================================
// CollectionPage
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPage {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub url: String,
    pub has_part: Vec<CollectionPart>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionPart {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

pub fn build_collection_page(
    name: &str,
    description: &str,
    url: &str,
    items: &[CollectionItem],
) -> CollectionPage {
    CollectionPage {
        context: SCHEMA_CONTEXT,
        kind: "CollectionPage",
        name: name.to_owned(),
        description: description.to_owned(),
        url: url.to_owned(),
        has_part: items
            .iter()
            .map(|item| CollectionPart {
                kind: "WebPage",
                name: item.name.clone(),
                url: item.url.clone(),
                image: item.image.clone(),
            })
            .collect(),
    }
}

// ============================================================================
// ItemList
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemList {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub number_of_items: usize,
    pub item_list_element: Vec<ListEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: usize,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Ordered ItemList; `numberOfItems` always equals the element count.
pub fn build_item_list(items: &[CollectionItem]) -> ItemList {
    let item_list_element: Vec<_> = items
        .iter()
        .enumerate()
        .map(|(i, item)| ListEntry {
            kind: "ListItem",
            position: i + 1,
            name: item.name.clone(),
            url: item.url.clone(),
            image: item.image.clone(),
        })
        .collect();

    ItemList {
        context: SCHEMA_CONTEXT,
        kind: "ItemList",
        number_of_items: item_list_element.len(),
        item_list_element,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items() -> Vec<CollectionItem> {
        vec![
            CollectionItem {
                name: "Miami".into(),
                url: "https://stadiumport.com/world-cup-2026-host-cities/miami-city-guide".into(),
                image: Some("https://stadiumport.com/images/cities/miami.webp".into()),
            },
            CollectionItem {
                name: "Boston".into(),
                url: "https://stadiumport.com/world-cup-2026-host-cities/boston-city-guide".into(),
                image: None,
            },
        ]
    }

    #[test]
    fn test_item_list_positions_and_count() {
        let json = serde_json::to_value(build_item_list(&items())).unwrap();

        assert_eq!(json["@type"], "ItemList");
        assert_eq!(json["numberOfItems"], 2);
        assert_eq!(json["itemListElement"][0]["position"], 1);
        assert_eq!(json["itemListElement"][1]["position"], 2);
        assert_eq!(json["itemListElement"][1]["name"], "Boston");
        assert!(json["itemListElement"][1].get("image").is_none());
    }

    #[test]
    fn test_empty_item_list() {
        let list = build_item_list(&[]);
        assert_eq!(list.number_of_items, 0);
        assert!(list.item_list_element.is_empty());
    }

    #[test]
    fn test_collection_page() {
        let page = build_collection_page(
            "World Cup 2026 Host Cities",
            "All 16 host cities",
            "https://stadiumport.com/world-cup-2026-host-cities",
            &items(),
        );
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["@type"], "CollectionPage");
        assert_eq!(json["hasPart"].as_array().unwrap().len(), 2);
        assert_eq!(
            json["hasPart"][0],
            json!({
                "@type": "WebPage",
                "name": "Miami",
                "url": "https://stadiumport.com/world-cup-2026-host-cities/miami-city-guide",
                "image": "https://stadiumport.com/images/cities/miami.webp"
            })
        );
    }
}
