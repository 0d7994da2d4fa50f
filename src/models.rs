//! Frontend Models
//!
//! Menu document as served in `menu.json`, and the flattened items the page renders.

use serde::{Deserialize, Serialize};

/// Root of the menu document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuDocument {
    pub categories: Vec<MenuCategory>,
}

/// A category block with its items
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<RawMenuItem>,
}

/// Item as it appears inside a category (extra fields are ignored)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawMenuItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
}

/// Flattened item tagged with its category
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub category_name: String,
}

/// Category tab shown in the category bar
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTab {
    pub id: String,
    pub name: String,
}

impl MenuDocument {
    /// Parse and validate a document body
    pub fn parse(body: &str) -> Result<Self, String> {
        let doc: MenuDocument =
            serde_json::from_str(body).map_err(|e| format!("Invalid menu document: {}", e))?;
        doc.validate()?;
        Ok(doc)
    }

    fn validate(&self) -> Result<(), String> {
        for category in &self.categories {
            for item in &category.items {
                if !item.price.is_finite() || item.price < 0.0 {
                    return Err(format!("Invalid price for '{}': {}", item.name, item.price));
                }
            }
        }
        Ok(())
    }

    /// Category tabs in document order
    pub fn category_tabs(&self) -> Vec<CategoryTab> {
        self.categories
            .iter()
            .map(|c| CategoryTab { id: c.id.clone(), name: c.name.clone() })
            .collect()
    }

    /// Flatten into items, category-major then item order
    pub fn flatten(self) -> Vec<MenuItem> {
        self.categories
            .into_iter()
            .flat_map(|category| {
                let MenuCategory { id, name, items } = category;
                items.into_iter().map(move |item| MenuItem {
                    name: item.name,
                    description: item.description,
                    price: item.price,
                    image: item.image,
                    category: id.clone(),
                    category_name: name.clone(),
                })
            })
            .collect()
    }
}

/// Feedback payload posted to the backend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackPayload {
    pub name: String,
    pub topic: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "categories": [
            {"id": "appetizers", "name": "Appetizers", "items": [
                {"name": "Lumpia", "description": "Crispy spring rolls", "price": 120, "image": "img/lumpia.jpg", "spicy": false}
            ]},
            {"id": "mains", "name": "Main Course", "items": [
                {"name": "Adobo", "description": "Braised pork", "price": 250.5, "image": "img/adobo.jpg"},
                {"name": "Sinigang", "description": "Sour tamarind soup", "price": 280, "image": "img/sinigang.jpg"}
            ]}
        ]
    }"#;

    #[test]
    fn test_flatten_tags_items_with_category() {
        let items = MenuDocument::parse(DOC).unwrap().flatten();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "Lumpia");
        assert_eq!(items[0].category, "appetizers");
        assert_eq!(items[0].category_name, "Appetizers");
        assert_eq!(items[1].name, "Adobo");
        assert_eq!(items[1].category, "mains");
        assert_eq!(items[2].name, "Sinigang");
        assert_eq!(items[2].category_name, "Main Course");
    }

    #[test]
    fn test_category_tabs_in_document_order() {
        let tabs = MenuDocument::parse(DOC).unwrap().category_tabs();
        let ids: Vec<_> = tabs.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["appetizers", "mains"]);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(MenuDocument::parse("{ not json").is_err());
        assert!(MenuDocument::parse(r#"{"menu": []}"#).is_err());
    }

    #[test]
    fn test_parse_rejects_negative_price() {
        let body = r#"{"categories": [{"id": "x", "name": "X", "items": [
            {"name": "Bad", "description": "", "price": -1, "image": ""}
        ]}]}"#;
        assert!(MenuDocument::parse(body).is_err());
    }

    #[test]
    fn test_category_without_items() {
        let body = r#"{"categories": [{"id": "empty", "name": "Empty"}]}"#;
        let doc = MenuDocument::parse(body).unwrap();
        assert_eq!(doc.category_tabs().len(), 1);
        assert!(doc.flatten().is_empty());
    }
}
