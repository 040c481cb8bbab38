//! Declarative validation schema for [`ProductDraft`].
//!
//! Validation is a pure function from a draft to a structured set of
//! field-level errors; the form decides when to run it and how to render
//! the messages.

use thiserror::Error;

use crate::draft::ProductDraft;

pub const MSG_TITLE_REQUIRED: &str = "Title is required!";
pub const MSG_PRICE_NUMBER: &str = "Price must be a number!";
pub const MSG_PRICE_POSITIVE: &str = "Price must be greater than 0!";
pub const MSG_DESCRIPTION_REQUIRED: &str = "Description is required!";
pub const MSG_CATEGORY_REQUIRED: &str = "Category is required!";

/// Fields of the draft that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Price,
    Description,
    Category,
    Images,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Price => "price",
            Field::Description => "description",
            Field::Category => "categoryId",
            Field::Images => "images",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field-local validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Structured result of validating a draft: at most one message per field,
/// first rule wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("validation failed: {} invalid field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn none() -> Self {
        Self::default()
    }

    /// Record an error for `field` unless it already carries one.
    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        if !self.has(field) {
            self.errors.push(FieldError {
                field,
                message: message.into(),
            });
        }
    }

    /// Fold `other` into `self`, keeping the first message per field.
    pub fn merge(&mut self, other: ValidationErrors) {
        for err in other.errors {
            self.push(err.field, err.message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn has(&self, field: Field) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

/// Parse a raw price entry. Numeric fields accept free text; anything that
/// does not parse to a finite number is invalid before the positivity
/// constraint is even considered.
pub fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Check every field constraint of the schema.
///
/// Rules: title non-blank, price finite and strictly positive, description
/// non-blank, category id strictly positive. Images carry no constraint.
pub fn validate(draft: &ProductDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::none();

    if draft.title.trim().is_empty() {
        errors.push(Field::Title, MSG_TITLE_REQUIRED);
    }
    if !(draft.price > 0.0 && draft.price.is_finite()) {
        errors.push(Field::Price, MSG_PRICE_POSITIVE);
    }
    if draft.description.trim().is_empty() {
        errors.push(Field::Description, MSG_DESCRIPTION_REQUIRED);
    }
    if draft.category_id == 0 {
        errors.push(Field::Category, MSG_CATEGORY_REQUIRED);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::DEFAULT_IMAGE_URL;

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            title: "Walnut desk".to_string(),
            price: 249.5,
            description: "Solid walnut, 140cm".to_string(),
            category_id: 2,
            images: vec![DEFAULT_IMAGE_URL.to_string()],
        }
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut draft = valid_draft();
        draft.title = "   ".to_string();

        let errors = validate(&draft);
        assert_eq!(errors.message_for(Field::Title), Some(MSG_TITLE_REQUIRED));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn non_positive_price_is_rejected() {
        for price in [0.0, -1.0, -249.5] {
            let mut draft = valid_draft();
            draft.price = price;

            let errors = validate(&draft);
            assert_eq!(errors.message_for(Field::Price), Some(MSG_PRICE_POSITIVE));
        }
    }

    #[test]
    fn non_finite_price_is_rejected() {
        for price in [f64::NAN, f64::INFINITY] {
            let mut draft = valid_draft();
            draft.price = price;

            assert!(validate(&draft).has(Field::Price));
        }
    }

    #[test]
    fn blank_description_is_rejected() {
        let mut draft = valid_draft();
        draft.description = String::new();

        let errors = validate(&draft);
        assert_eq!(
            errors.message_for(Field::Description),
            Some(MSG_DESCRIPTION_REQUIRED)
        );
    }

    #[test]
    fn zero_category_is_rejected() {
        let mut draft = valid_draft();
        draft.category_id = 0;

        let errors = validate(&draft);
        assert_eq!(
            errors.message_for(Field::Category),
            Some(MSG_CATEGORY_REQUIRED)
        );
    }

    #[test]
    fn every_broken_field_is_reported_at_once() {
        let draft = ProductDraft {
            title: String::new(),
            price: 0.0,
            description: String::new(),
            category_id: 0,
            images: vec![],
        };

        let errors = validate(&draft);
        assert_eq!(errors.len(), 4);
        for field in [Field::Title, Field::Price, Field::Description, Field::Category] {
            assert!(errors.has(field));
        }
    }

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = ValidationErrors::none();
        errors.push(Field::Price, MSG_PRICE_NUMBER);
        errors.push(Field::Price, MSG_PRICE_POSITIVE);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message_for(Field::Price), Some(MSG_PRICE_NUMBER));
    }

    #[test]
    fn parse_price_accepts_numeric_text() {
        assert_eq!(parse_price("19.99"), Some(19.99));
        assert_eq!(parse_price("  42 "), Some(42.0));
        assert_eq!(parse_price("-3.5"), Some(-3.5));
    }

    #[test]
    fn parse_price_rejects_non_numeric_text() {
        for raw in ["", "  ", "abc", "12abc", "1,50", "NaN", "inf"] {
            assert_eq!(parse_price(raw), None, "expected {raw:?} to be rejected");
        }
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: drafts with non-blank text, a positive finite price,
            /// and a known category always validate.
            #[test]
            fn well_formed_drafts_validate(
                title in "[A-Za-z][A-Za-z0-9 ]{0,40}",
                description in "[A-Za-z][A-Za-z0-9 ]{0,200}",
                price in 0.01f64..100_000.0,
                category_id in 1u32..=3,
            ) {
                let draft = ProductDraft {
                    title,
                    price,
                    description,
                    category_id,
                    images: vec![DEFAULT_IMAGE_URL.to_string()],
                };

                prop_assert!(validate(&draft).is_empty());
            }

            /// Property: a non-positive price is always rejected on exactly
            /// the price field.
            #[test]
            fn non_positive_price_never_validates(price in -100_000.0f64..=0.0) {
                let draft = ProductDraft {
                    title: "t".to_string(),
                    price,
                    description: "d".to_string(),
                    category_id: 1,
                    images: vec![],
                };

                let errors = validate(&draft);
                prop_assert!(errors.has(Field::Price));
                prop_assert_eq!(errors.len(), 1);
            }

            /// Property: whitespace-only titles are blank.
            #[test]
            fn whitespace_title_never_validates(title in "[ \t]{0,10}") {
                let mut draft = ProductDraft::default();
                draft.title = title;
                draft.price = 10.0;
                draft.description = "d".to_string();

                prop_assert!(validate(&draft).has(Field::Title));
            }
        }
    }
}
