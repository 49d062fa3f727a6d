use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of analysis requested for a piece of legal text.
///
/// Each category selects one instruction template that is prepended to the
/// user's text before it is sent to the generation provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Summary, risks and plain English explanation
    #[default]
    #[serde(rename = "General Analysis")]
    General,
    /// Obligations, rights and red flags in a contract clause
    #[serde(rename = "Contract Analysis")]
    Contract,
    /// Claims and scope of patent or technology law text
    #[serde(rename = "Patent/Tech Law")]
    PatentTech,
    /// Liabilities and exposure
    #[serde(rename = "Risk Assessment")]
    RiskAssessment,
}

/// Returned by strict parsing when a label matches no category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown analysis category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    /// All categories, in the order they are offered to the user.
    pub const ALL: [Category; 4] = [
        Category::General,
        Category::Contract,
        Category::PatentTech,
        Category::RiskAssessment,
    ];

    /// Category pre-selected in the web UI.
    pub const UI_DEFAULT: Category = Category::Contract;

    /// Returns the display label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "General Analysis",
            Category::Contract => "Contract Analysis",
            Category::PatentTech => "Patent/Tech Law",
            Category::RiskAssessment => "Risk Assessment",
        }
    }

    /// Returns the instruction template for the category.
    pub fn template(&self) -> &'static str {
        match self {
            Category::General => "You are a legal analyst. Analyze this legal text and provide a clear summary, identify any potential risks or concerns, and explain it in plain English.",
            Category::Contract => "You are a contract lawyer. Analyze this contract clause and provide: 1) A brief summary, 2) Key obligations and rights, 3) Potential risks or red flags, 4) Plain English explanation.",
            Category::PatentTech => "You are a patent attorney. Analyze this patent or tech law text and provide: 1) Summary of claims/scope, 2) Key technical and legal points, 3) Potential issues, 4) Plain English explanation.",
            Category::RiskAssessment => "You are a legal risk assessor. Focus on risk analysis for this legal text. Identify all potential risks, liabilities, and concerns. Explain each in plain English.",
        }
    }

    /// Resolves a label to a category, falling back to [`Category::General`].
    ///
    /// Only exact display labels match. This never fails.
    pub fn resolve(label: &str) -> Category {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == label)
            .unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Strict parse. Accepts display labels and short kebab-case aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(category) = Category::ALL.into_iter().find(|c| c.label() == s) {
            return Ok(category);
        }

        match s.trim().to_lowercase().as_str() {
            "general" | "general-analysis" => Ok(Category::General),
            "contract" | "contract-analysis" => Ok(Category::Contract),
            "patent" | "tech" | "patent-tech" | "patent-tech-law" => Ok(Category::PatentTech),
            "risk" | "risk-assessment" => Ok(Category::RiskAssessment),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_labels() {
        for category in Category::ALL {
            assert_eq!(Category::resolve(category.label()), category);
        }
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_general() {
        assert_eq!(Category::resolve("Tax Law"), Category::General);
        assert_eq!(Category::resolve(""), Category::General);
        // Resolution is exact; aliases only work with strict parsing
        assert_eq!(Category::resolve("contract"), Category::General);
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("risk".parse::<Category>(), Ok(Category::RiskAssessment));
        assert_eq!("Patent/Tech Law".parse::<Category>(), Ok(Category::PatentTech));
        assert_eq!(" Contract ".parse::<Category>(), Ok(Category::Contract));
        assert!("tax".parse::<Category>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Category::default(), Category::General);
        assert_eq!(Category::UI_DEFAULT, Category::Contract);
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Category::PatentTech).unwrap();
        assert_eq!(json, "\"Patent/Tech Law\"");
    }
}
