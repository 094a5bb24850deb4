//! Component catalog scraping.
//!
//! The catalog page served by the development session renders a JSON document
//! in its body: a possibly nested structure of component records, each keyed
//! by a `task` field. This module reads that document through the shared
//! browser session and lifts it into the domain types used by the generator.

mod extractor;
mod types;

pub use extractor::CatalogExtractor;
pub use types::{Category, ComponentDetail, ComponentSummary, Port};
