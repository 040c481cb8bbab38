use serde::{Deserialize, Serialize};

/// Placeholder image attached to every new draft until real images exist.
pub const DEFAULT_IMAGE_URL: &str = "https://placeimg.com/640/480/any?r=0.9178516507833767";

/// Closed set of categories offered by the form. The catalog API assigns
/// these ids; the form never loads them dynamically.
pub const CATEGORY_OPTIONS: &[(u32, &str)] = &[
    (1, "Category 1"),
    (2, "Category 2"),
    (3, "Category 3"),
];

/// The in-progress, not-yet-submitted product record edited by the user.
///
/// Serializes to the catalog API's create-product body (camelCase keys).
/// A draft is either fully valid per [`crate::validate::validate`] or is
/// never submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category_id: u32,
    pub images: Vec<String>,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            price: 0.0,
            description: String::new(),
            category_id: 1,
            images: vec![DEFAULT_IMAGE_URL.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_draft_matches_empty_form() {
        let draft = ProductDraft::default();
        assert_eq!(draft.title, "");
        assert_eq!(draft.price, 0.0);
        assert_eq!(draft.description, "");
        assert_eq!(draft.category_id, 1);
        assert_eq!(draft.images, vec![DEFAULT_IMAGE_URL.to_string()]);
    }

    #[test]
    fn draft_serializes_with_camel_case_keys() {
        let draft = ProductDraft {
            title: "Walnut desk".to_string(),
            price: 249.5,
            description: "Solid walnut, 140cm".to_string(),
            category_id: 2,
            images: vec![DEFAULT_IMAGE_URL.to_string()],
        };

        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["title"], "Walnut desk");
        assert_eq!(body["price"], 249.5);
        assert_eq!(body["description"], "Solid walnut, 140cm");
        assert_eq!(body["categoryId"], 2);
        assert_eq!(body["images"][0], DEFAULT_IMAGE_URL);
        assert!(body.get("category_id").is_none());
    }

    #[test]
    fn category_options_are_strictly_positive_and_unique() {
        let mut seen = Vec::new();
        for (id, _) in CATEGORY_OPTIONS {
            assert!(*id >= 1);
            assert!(!seen.contains(id));
            seen.push(*id);
        }
    }
}
