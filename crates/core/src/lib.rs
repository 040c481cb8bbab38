//! `shopfront-core` — product draft domain.
//!
//! This crate contains **pure domain** logic for the product-entry form:
//! the draft entity, the closed category list, and the validation schema.
//! No IO, no HTTP, no rendering.

pub mod draft;
pub mod validate;

pub use draft::{CATEGORY_OPTIONS, DEFAULT_IMAGE_URL, ProductDraft};
pub use validate::{
    Field, FieldError, MSG_CATEGORY_REQUIRED, MSG_DESCRIPTION_REQUIRED, MSG_PRICE_NUMBER,
    MSG_PRICE_POSITIVE, MSG_TITLE_REQUIRED, ValidationErrors, parse_price, validate,
};
