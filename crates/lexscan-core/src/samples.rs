//! Canned inputs offered as one-click examples in the UI.

use serde::Serialize;

use crate::category::Category;

/// An example input paired with the category it is meant for.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Sample {
    pub text: &'static str,
    pub category: Category,
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        text: "The Employee shall be entitled to 28 days paid annual leave per year, inclusive of public holidays. Any unused holiday must be taken within the holiday year and cannot be carried forward without prior written consent from the Employer.",
        category: Category::Contract,
    },
    Sample {
        text: "The Recipient agrees to hold in confidence all Confidential Information disclosed by the Discloser and shall not disclose such information to any third party without prior written consent. This obligation shall survive for a period of 5 years.",
        category: Category::RiskAssessment,
    },
];

/// Typical documents the tool is meant for, shown next to the input box.
pub const USE_CASES: &[&str] = &[
    "Employment contract clauses",
    "Non-disclosure agreements",
    "Patent claims",
    "Terms of service",
    "Licensing agreements",
    "Liability waivers",
];
