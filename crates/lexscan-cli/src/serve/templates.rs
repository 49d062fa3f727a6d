//! HTML template rendering for the analysis page.
//!
//! Templates are stored as separate files for maintainability:
//! - `templates/index.html` - HTML structure
//! - `templates/styles.css` - CSS styles
//! - `templates/app.js` - JavaScript application code
//!
//! Files are embedded at compile time using `include_str!`.

use lexscan_core::{Category, SAMPLES, USE_CASES};

// Embed template files at compile time
const HTML_TEMPLATE: &str = include_str!("templates/index.html");
const STYLES: &str = include_str!("templates/styles.css");
const SCRIPT: &str = include_str!("templates/app.js");

/// Render the analysis page.
///
/// Assembles the final HTML by substituting placeholders in the template:
/// - `{{CATEGORY_OPTIONS}}` - Radio buttons, default pre-checked
/// - `{{USE_CASES}}` - Example use case list items
/// - `{{EXAMPLE_ROWS}}` - Clickable canned examples
/// - `{{STYLES}}` - CSS styles
/// - `{{SCRIPT}}` - JavaScript code
pub fn render_index_page() -> String {
    HTML_TEMPLATE
        .replace("{{CATEGORY_OPTIONS}}", &category_options())
        .replace("{{USE_CASES}}", &use_case_items())
        .replace("{{EXAMPLE_ROWS}}", &example_rows())
        .replace("{{STYLES}}", STYLES)
        .replace("{{SCRIPT}}", SCRIPT)
}

fn category_options() -> String {
    Category::ALL
        .iter()
        .map(|category| {
            let label = html_escape(category.label());
            let checked = if *category == Category::UI_DEFAULT {
                " checked"
            } else {
                ""
            };
            format!(
                r#"<label class="radio"><input type="radio" name="category" value="{label}"{checked}> {label}</label>"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn use_case_items() -> String {
    USE_CASES
        .iter()
        .map(|item| format!("<li>{}</li>", html_escape(item)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn example_rows() -> String {
    SAMPLES
        .iter()
        .map(|sample| {
            let text = html_escape(sample.text);
            let category = html_escape(sample.category.label());
            format!(
                r#"<tr class="example" data-text="{text}" data-category="{category}"><td>{text}</td><td>{category}</td></tr>"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape HTML special characters to prevent XSS.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_placeholders_filled() {
        let page = render_index_page();
        assert!(!page.contains("{{"));
    }

    #[test]
    fn test_default_category_checked() {
        let options = category_options();
        assert!(options.contains(r#"value="Contract Analysis" checked"#));
        assert_eq!(options.matches(" checked").count(), 1);
    }

    #[test]
    fn test_examples_escaped() {
        let rows = example_rows();
        assert_eq!(rows.matches("<tr").count(), SAMPLES.len());
        assert!(rows.contains(r#"data-category="Risk Assessment""#));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }
}
