//! Prefkit I18n
//!
//! Built-in translation catalog for the preference center page plus the
//! lookup and negotiation logic around it. Pure string handling; persisting
//! the chosen language and refreshing the page belong to the controller
//! crate.

pub mod brand;
pub mod catalog;
pub mod translator;

pub use brand::{apply_brand, BRAND_PLACEHOLDER};
pub use catalog::{Catalog, DEFAULT_LANGUAGE};
pub use translator::Translator;
