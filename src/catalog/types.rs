//! Domain types for scraped catalog data.

use serde::{Deserialize, Serialize};

/// Short summary of a component as listed under its category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComponentSummary {
    /// Component display name.
    pub name: String,
    /// One-line description taken from the component's docstring.
    pub description: String,
}

/// A named grouping of related components in the source catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Category display name (e.g., "SENDGRID").
    pub name: String,
    /// Category description scraped from the catalog page.
    pub description: String,
    /// Component summaries in the order they appear on the source page.
    pub components: Vec<ComponentSummary>,
}

/// A single input or output port on a component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Port {
    /// Port name.
    pub name: String,
    /// Type label as declared on the component (e.g., "string", "secret").
    pub type_label: String,
}

/// Full documentation details for a single component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentDetail {
    /// Component display name.
    pub name: String,
    /// Full description from the component's detail page.
    pub description: String,
    /// Input ports in declaration order.
    pub inputs: Vec<Port>,
    /// Output ports in declaration order.
    pub outputs: Vec<Port>,
    /// Optional usage example text.
    pub usage: Option<String>,
}
