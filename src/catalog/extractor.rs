//! Category and component extraction from the catalog page.

use serde::Deserialize;
use serde_json::Value;

use super::types::{Category, ComponentDetail, ComponentSummary, Port};
use crate::browser::BrowserSession;
use crate::error::CatalogError;

/// Raw component record as it appears in the catalog JSON.
///
/// Only `task` is guaranteed; every other field is optional and defaults to
/// empty so that partially described components still flatten cleanly.
#[derive(Debug, Clone, Deserialize)]
struct RawComponent {
    task: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    docstring: String,
    #[serde(default)]
    category_description: String,
    #[serde(default)]
    variables: Vec<RawVariable>,
    #[serde(default)]
    usage: Option<String>,
}

/// Raw port variable declaration on a component record.
#[derive(Debug, Clone, Deserialize)]
struct RawVariable {
    name: String,
    /// Port direction marker, e.g. "InArg", "InCompArg", "OutArg".
    #[serde(default)]
    kind: String,
    #[serde(rename = "type", default)]
    type_label: String,
}

/// Scrapes category and component data from the catalog page.
pub struct CatalogExtractor<'a> {
    session: &'a BrowserSession,
}

impl<'a> CatalogExtractor<'a> {
    /// Create an extractor over an already-open browser session pointed at
    /// the catalog listing page.
    pub fn new(session: &'a BrowserSession) -> Self {
        Self { session }
    }

    /// Extract a category by display name.
    ///
    /// The returned component list is non-empty and preserves the order in
    /// which components appear in the source document.
    pub fn extract_category(&self, name: &str) -> Result<Category, CatalogError> {
        let records = self.read_records()?;
        let category = category_from_records(&records, name)?;

        tracing::info!(
            category = name,
            components = category.components.len(),
            "Extracted category"
        );

        Ok(category)
    }

    /// Retrieve full details for a single component within a category.
    ///
    /// Fails with `ComponentNotFound` if the name has no match in the
    /// category's component list; never returns a partial record.
    pub fn component_detail(
        &self,
        category: &str,
        component: &str,
    ) -> Result<ComponentDetail, CatalogError> {
        let records = self.read_records()?;
        let detail = detail_from_records(&records, category, component)?;

        tracing::debug!(
            component = detail.name.as_str(),
            inputs = detail.inputs.len(),
            outputs = detail.outputs.len(),
            "Retrieved component detail"
        );

        Ok(detail)
    }

    /// Read the page body and flatten it into component records.
    fn read_records(&self) -> Result<Vec<RawComponent>, CatalogError> {
        let body = self.session.body_text()?;
        parse_records(&body)
    }
}

/// Parse a catalog page body into flat component records.
fn parse_records(body: &str) -> Result<Vec<RawComponent>, CatalogError> {
    let data: Value = serde_json::from_str(body)
        .map_err(|e| CatalogError::MalformedCatalog(format!("body is not JSON: {}", e)))?;

    let mut objects = Vec::new();
    flatten(&data, &mut objects);

    if objects.is_empty() {
        return Err(CatalogError::MalformedCatalog(
            "no component records found in catalog document".to_string(),
        ));
    }

    objects
        .into_iter()
        .map(|obj| serde_json::from_value(obj).map_err(CatalogError::Json))
        .collect()
}

/// Depth-first walk collecting every object that carries a `task` key,
/// preserving document order.
///
/// Object iteration must follow the source document, not key sort order;
/// serde_json's `preserve_order` feature is required for that.
fn flatten(value: &Value, out: &mut Vec<Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                flatten(item, out);
            }
        }
        Value::Object(map) => {
            if map.contains_key("task") {
                out.push(value.clone());
            } else {
                for child in map.values() {
                    flatten(child, out);
                }
            }
        }
        _ => {}
    }
}

/// Build a `Category` from flattened records.
fn category_from_records(records: &[RawComponent], name: &str) -> Result<Category, CatalogError> {
    let matched: Vec<&RawComponent> = records
        .iter()
        .filter(|r| r.category.trim().eq_ignore_ascii_case(name.trim()))
        .collect();

    if matched.is_empty() {
        return Err(CatalogError::CategoryNotFound(name.to_string()));
    }

    let description = matched
        .iter()
        .map(|r| r.category_description.trim())
        .find(|d| !d.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Components in the {} library.", name));

    let components = matched
        .iter()
        .map(|r| ComponentSummary {
            name: r.task.clone(),
            description: first_line(&r.docstring),
        })
        .collect();

    Ok(Category {
        name: name.to_string(),
        description,
        components,
    })
}

/// Find a component record within a category and lift it into a detail.
fn detail_from_records(
    records: &[RawComponent],
    category: &str,
    component: &str,
) -> Result<ComponentDetail, CatalogError> {
    let record = records
        .iter()
        .filter(|r| r.category.trim().eq_ignore_ascii_case(category.trim()))
        .find(|r| r.task.trim().eq_ignore_ascii_case(component.trim()))
        .ok_or_else(|| CatalogError::ComponentNotFound {
            component: component.to_string(),
            category: category.to_string(),
        })?;

    Ok(ComponentDetail {
        name: record.task.clone(),
        description: record.docstring.trim().to_string(),
        inputs: ports_by_direction(&record.variables, Direction::Input),
        outputs: ports_by_direction(&record.variables, Direction::Output),
        usage: record
            .usage
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(str::to_string),
    })
}

enum Direction {
    Input,
    Output,
}

fn ports_by_direction(variables: &[RawVariable], direction: Direction) -> Vec<Port> {
    variables
        .iter()
        .filter(|v| match direction {
            Direction::Input => v.kind.starts_with("In"),
            Direction::Output => v.kind.starts_with("Out"),
        })
        .map(|v| Port {
            name: v.name.clone(),
            type_label: v.type_label.clone(),
        })
        .collect()
}

/// First non-empty line of a docstring, for component summaries.
fn first_line(docstring: &str) -> String {
    docstring
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> String {
        serde_json::json!({
            "libraries": [
                {
                    "components": [
                        {
                            "task": "SendGridSendEmail",
                            "category": "SENDGRID",
                            "category_description": "Send and parse email with SendGrid.",
                            "docstring": "Sends an email through the SendGrid API.\n\nRequires an API key.",
                            "variables": [
                                {"name": "api_key", "kind": "InArg", "type": "secret"},
                                {"name": "to", "kind": "InCompArg", "type": "string"},
                                {"name": "response", "kind": "OutArg", "type": "dict"}
                            ]
                        },
                        {
                            "task": "SendgridParseExtractEmail",
                            "category": "SENDGRID",
                            "docstring": "Parses an inbound email payload.",
                            "variables": [
                                {"name": "payload", "kind": "InArg", "type": "dict"},
                                {"name": "sender", "kind": "OutArg", "type": "string"}
                            ]
                        }
                    ]
                },
                {
                    "components": [
                        {
                            "task": "SlackPostMessage",
                            "category": "SLACK",
                            "docstring": "Posts a message to a Slack channel."
                        }
                    ]
                }
            ]
        })
        .to_string()
    }

    fn sample_records() -> Vec<RawComponent> {
        parse_records(&sample_catalog()).expect("sample catalog should parse")
    }

    #[test]
    fn test_parse_records_flattens_in_order() {
        let records = sample_records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].task, "SendGridSendEmail");
        assert_eq!(records[1].task, "SendgridParseExtractEmail");
        assert_eq!(records[2].task, "SlackPostMessage");
    }

    #[test]
    fn test_parse_records_keeps_document_order_across_sibling_keys() {
        // Sibling object keys deliberately out of alphabetical order; the
        // records must still come out in document order.
        let body = r#"{
            "z_first": [{"task": "First", "category": "A"}],
            "a_second": [{"task": "Second", "category": "A"}]
        }"#;

        let records = parse_records(body).expect("catalog should parse");
        assert_eq!(records[0].task, "First");
        assert_eq!(records[1].task, "Second");
    }

    #[test]
    fn test_parse_records_rejects_non_json() {
        let err = parse_records("<html>not json</html>").unwrap_err();
        assert!(matches!(err, CatalogError::MalformedCatalog(_)));
    }

    #[test]
    fn test_parse_records_rejects_empty_document() {
        let err = parse_records("{\"libraries\": []}").unwrap_err();
        assert!(matches!(err, CatalogError::MalformedCatalog(_)));
    }

    #[test]
    fn test_category_from_records() {
        let records = sample_records();
        let category = category_from_records(&records, "sendgrid").expect("category exists");

        assert_eq!(category.name, "sendgrid");
        assert_eq!(category.description, "Send and parse email with SendGrid.");
        assert_eq!(category.components.len(), 2);
        // Order preserved from the source document
        assert_eq!(category.components[0].name, "SendGridSendEmail");
        assert_eq!(category.components[1].name, "SendgridParseExtractEmail");
        assert_eq!(
            category.components[0].description,
            "Sends an email through the SendGrid API."
        );
    }

    #[test]
    fn test_category_description_fallback() {
        let records = sample_records();
        let category = category_from_records(&records, "SLACK").expect("category exists");
        assert_eq!(category.description, "Components in the SLACK library.");
    }

    #[test]
    fn test_category_not_found() {
        let records = sample_records();
        let err = category_from_records(&records, "TWILIO").unwrap_err();
        assert!(matches!(err, CatalogError::CategoryNotFound(name) if name == "TWILIO"));
    }

    #[test]
    fn test_detail_from_records() {
        let records = sample_records();
        let detail =
            detail_from_records(&records, "SENDGRID", "SendGridSendEmail").expect("detail exists");

        assert_eq!(detail.name, "SendGridSendEmail");
        assert!(detail.description.starts_with("Sends an email"));
        assert_eq!(detail.inputs.len(), 2);
        assert_eq!(detail.inputs[0].name, "api_key");
        assert_eq!(detail.inputs[0].type_label, "secret");
        assert_eq!(detail.outputs.len(), 1);
        assert_eq!(detail.outputs[0].name, "response");
        assert!(detail.usage.is_none());
    }

    #[test]
    fn test_detail_not_found_is_never_partial() {
        let records = sample_records();
        let err = detail_from_records(&records, "SENDGRID", "SendGridMissing").unwrap_err();
        assert!(matches!(err, CatalogError::ComponentNotFound { .. }));

        // A component that exists in another category is still not found here.
        let err = detail_from_records(&records, "SENDGRID", "SlackPostMessage").unwrap_err();
        assert!(matches!(err, CatalogError::ComponentNotFound { .. }));
    }

    #[test]
    fn test_first_line() {
        assert_eq!(
            first_line("Sends an email.\n\nDetails follow."),
            "Sends an email."
        );
        assert_eq!(first_line("\n  leading blank\nrest"), "leading blank");
        assert_eq!(first_line(""), "");
    }
}
