use crate::category::Category;

/// Closing request appended after the legal text.
pub const ANALYSIS_SUFFIX: &str = "Provide a detailed analysis:";

/// Builds the instruction sent to the generation provider.
pub fn build_instruction(category: Category, text: &str) -> String {
    format!(
        "{template}\n\nLegal Text: {text}\n\n{ANALYSIS_SUFFIX}",
        template = category.template()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_layout() {
        let instruction = build_instruction(Category::Contract, "Clause 4.2");
        assert!(instruction.starts_with(Category::Contract.template()));
        assert!(instruction.contains("\n\nLegal Text: Clause 4.2\n\n"));
        assert!(instruction.ends_with(ANALYSIS_SUFFIX));
    }

    #[test]
    fn test_text_is_inserted_verbatim() {
        let text = "  leading and trailing whitespace  ";
        let instruction = build_instruction(Category::General, text);
        assert!(instruction.contains(&format!("Legal Text: {text}\n")));
    }
}
