//! Prompts for README generation.
//!
//! The prompt embeds the scraped category data, per-component details,
//! screenshot file references, and the fetched template text as style
//! guidance. Content synthesis is delegated entirely to the model; nothing
//! here formats the final README deterministically.

use crate::capture::Screenshot;
use crate::catalog::{Category, ComponentDetail};

/// System prompt for README generation.
pub const README_SYSTEM_PROMPT: &str =
    "You are a documentation generator. Output only the README content in Markdown format.";

/// User prompt template for README generation.
const README_PROMPT_TEMPLATE: &str = r#"You are a documentation generator. Generate a new README in Markdown format for a component library using the following details. The README must follow the style and structure of the provided template. It should be concise, clear, and natural, without unnecessary filler or signs of AI generation.

Template (Markdown):
{template}

Category Information (components library details):
{category_info}

Screenshot files for the documented components:
{screenshots}

Using the above information, generate a new README in Markdown format that summarizes the key features of the library, describes its main components, and includes the provided screenshot files as visual references. Do not enclose the output within Markdown formatting indicators like ```markdown```. You must strictly adhere to the given template, maintaining its exact structure, paragraph organization, and formatting. Do not alter the writing style or add any unnecessary content."#;

/// Build the README generation prompt.
pub fn build_readme_prompt(
    category: &Category,
    details: &[ComponentDetail],
    screenshots: &[Screenshot],
    template: &str,
) -> String {
    let category_info = serde_json::json!({
        "category": category.name,
        "description": category.description,
        "components": category.components,
        "details": details,
    });

    let screenshot_files: Vec<String> = screenshots.iter().map(|s| s.file_name()).collect();

    README_PROMPT_TEMPLATE
        .replace("{template}", template)
        .replace(
            "{category_info}",
            &serde_json::to_string_pretty(&category_info).unwrap_or_default(),
        )
        .replace(
            "{screenshots}",
            &serde_json::to_string_pretty(&screenshot_files).unwrap_or_default(),
        )
}
