//! Static text returned when no generated analysis is available.
//!
//! Every function here is pure: the same inputs always produce the same bytes.

use crate::category::Category;

/// Returned when the submitted text is empty or whitespace.
pub const EMPTY_INPUT_PROMPT: &str = "Please enter some legal text to analyze.";

/// Number of characters of the input quoted in the structured framework.
pub const EXCERPT_CHARS: usize = 100;

/// Fallback for a provider response that carried no usable text.
///
/// Quotes the first [`EXCERPT_CHARS`] characters of `text`.
pub fn structured_framework(category: Category, text: &str) -> String {
    let label = category.label();
    let lower = label.to_lowercase();
    let excerpt = excerpt(text, EXCERPT_CHARS);

    format!(
        r#"**{label} Results:**

**Summary:**
This legal text addresses {excerpt}...

**Key Points:**
- The clause establishes specific obligations and rights
- Important to review jurisdiction and governing law
- Consider consulting with legal counsel for complete analysis

**Risks to Consider:**
- Ambiguous language may lead to different interpretations
- Enforcement mechanisms should be clearly defined
- Time limitations and termination clauses require attention

**Plain English:**
This is a {lower} that sets out legal terms. It's important to understand all obligations before agreeing. Consider having a lawyer review the complete document.

*Note: This is an AI-assisted analysis for informational purposes only. Please consult with a qualified attorney for legal advice.*
"#
    )
}

/// Fallback for a provider that could not be reached or answered garbage.
pub fn service_unavailable(category: Category) -> String {
    let label = category.label();

    format!(
        r#"**Analysis Service Temporarily Unavailable**

The AI analysis service is currently unavailable, but here's a structured framework for your review:

**Document Type:** {label}

**Key Areas to Review:**
1. Parties and their obligations
2. Time periods and deadlines
3. Payment or compensation terms
4. Termination and breach conditions
5. Jurisdiction and governing law

**Next Steps:**
- Review the complete document carefully
- Identify any unclear or concerning terms
- Consult with a qualified attorney
- Ensure all parties understand their obligations

*This tool is designed to provide AI-powered legal analysis. For full functionality, API authentication is required.*
"#
    )
}

/// First `max` characters of `text`, never splitting a code point.
fn excerpt(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_short_text_unchanged() {
        assert_eq!(excerpt("short", 100), "short");
    }

    #[test]
    fn test_excerpt_counts_chars_not_bytes() {
        let text = "é".repeat(150);
        let cut = excerpt(&text, 100);
        assert_eq!(cut.chars().count(), 100);
        assert_eq!(cut.len(), 200);
    }

    #[test]
    fn test_framework_sections_in_order() {
        let out = structured_framework(Category::Contract, "The Licensee shall pay");
        let headings = [
            "**Contract Analysis Results:**",
            "**Summary:**",
            "**Key Points:**",
            "**Risks to Consider:**",
            "**Plain English:**",
            "*Note:",
        ];
        let mut last = 0;
        for heading in headings {
            let pos = out[last..].find(heading).map(|p| p + last);
            assert!(pos.is_some(), "missing {heading}");
            last = pos.unwrap();
        }
        assert!(out.contains("This legal text addresses The Licensee shall pay..."));
        assert!(out.contains("This is a contract analysis that sets out legal terms."));
    }

    #[test]
    fn test_framework_truncates_long_input() {
        let text = "a".repeat(250);
        let out = structured_framework(Category::General, &text);
        assert!(out.contains(&format!("addresses {}...", "a".repeat(100))));
        assert!(!out.contains(&"a".repeat(101)));
    }

    #[test]
    fn test_service_unavailable_names_category() {
        let out = service_unavailable(Category::PatentTech);
        assert!(out.starts_with("**Analysis Service Temporarily Unavailable**"));
        assert!(out.contains("**Document Type:** Patent/Tech Law"));
        assert!(out.contains("5. Jurisdiction and governing law"));
    }
}
