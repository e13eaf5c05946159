//! Static subcategory tag tables.
//!
//! Questions carry a free-text `subcategory` tag. Instead of matching tags
//! by substring at scoring time, every engine-relevant tag is resolved here
//! through a closed mapping table. Resolution happens once, and the content
//! validator flags tags that do not map to any bucket.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::InterestType;

/// Resolve an interest-question tag to its RIASEC type.
pub fn interest_type(tag: &str) -> Option<InterestType> {
    match tag {
        "realistic" => Some(InterestType::R),
        "investigative" => Some(InterestType::I),
        "artistic" => Some(InterestType::A),
        "social" => Some(InterestType::S),
        "enterprising" => Some(InterestType::E),
        "conventional" => Some(InterestType::C),
        _ => None,
    }
}

/// The two identity-development dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityDimension {
    Exploration,
    Commitment,
}

/// Resolve an identity-question tag to its dimension.
pub fn identity_dimension(tag: &str) -> Option<IdentityDimension> {
    match tag {
        "exploration" => Some(IdentityDimension::Exploration),
        "commitment" => Some(IdentityDimension::Commitment),
        _ => None,
    }
}

/// Named self-efficacy skill domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillDomain {
    /// Foundational skills (math and general confidence items).
    Basic,
    /// Practical, hands-on application (fieldwork items).
    Applied,
    /// Data analysis and investigation items.
    Inquiry,
    /// Creating new approaches; also drives the overall score when present.
    Innovation,
}

impl SkillDomain {
    pub const ALL: [SkillDomain; 4] = [
        SkillDomain::Basic,
        SkillDomain::Applied,
        SkillDomain::Inquiry,
        SkillDomain::Innovation,
    ];
}

impl fmt::Display for SkillDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillDomain::Basic => write!(f, "basic"),
            SkillDomain::Applied => write!(f, "applied"),
            SkillDomain::Inquiry => write!(f, "inquiry"),
            SkillDomain::Innovation => write!(f, "innovation"),
        }
    }
}

/// Resolve a self-efficacy-question tag to its skill domain.
pub fn skill_domain(tag: &str) -> Option<SkillDomain> {
    match tag {
        "math" | "general" => Some(SkillDomain::Basic),
        "field" => Some(SkillDomain::Applied),
        "data" => Some(SkillDomain::Inquiry),
        "innovation" => Some(SkillDomain::Innovation),
        _ => None,
    }
}

/// The six work-value categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ValueCategory {
    EnvironmentalStewardship,
    ScientificDiscovery,
    WorkEnvironment,
    FinancialSecurity,
    SocialImpact,
    Independence,
}

impl ValueCategory {
    pub const ALL: [ValueCategory; 6] = [
        ValueCategory::EnvironmentalStewardship,
        ValueCategory::ScientificDiscovery,
        ValueCategory::WorkEnvironment,
        ValueCategory::FinancialSecurity,
        ValueCategory::SocialImpact,
        ValueCategory::Independence,
    ];

    /// Human-readable category name used in results.
    pub fn name(&self) -> &'static str {
        match self {
            ValueCategory::EnvironmentalStewardship => "Environmental Stewardship",
            ValueCategory::ScientificDiscovery => "Scientific Discovery",
            ValueCategory::WorkEnvironment => "Work Environment",
            ValueCategory::FinancialSecurity => "Financial Security",
            ValueCategory::SocialImpact => "Social Impact",
            ValueCategory::Independence => "Independence",
        }
    }

    /// Fixed descriptive text shown alongside the category.
    pub fn description(&self) -> &'static str {
        match self {
            ValueCategory::EnvironmentalStewardship => {
                "Protecting and preserving natural resources and ecosystems"
            }
            ValueCategory::ScientificDiscovery => {
                "Advancing human knowledge through research and investigation"
            }
            ValueCategory::WorkEnvironment => {
                "The physical and social setting where work takes place"
            }
            ValueCategory::FinancialSecurity => "Stable income and economic well-being",
            ValueCategory::SocialImpact => {
                "Making a positive difference in communities and society"
            }
            ValueCategory::Independence => "Autonomy and self-direction in work activities",
        }
    }
}

impl fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Resolve a values-question tag to its category.
pub fn value_category(tag: &str) -> Option<ValueCategory> {
    match tag {
        "environmental_stewardship" | "protecting_resources" | "future_generations" => {
            Some(ValueCategory::EnvironmentalStewardship)
        }
        "discovery" | "advancing_knowledge" | "intellectual_stimulation" => {
            Some(ValueCategory::ScientificDiscovery)
        }
        "outdoor_work" | "laboratory_work" | "travel_opportunities" => {
            Some(ValueCategory::WorkEnvironment)
        }
        "high_salary" | "job_security" | "earning_potential" => {
            Some(ValueCategory::FinancialSecurity)
        }
        "helping_communities" | "teaching_others" | "policy_influence" => {
            Some(ValueCategory::SocialImpact)
        }
        "working_independently" | "flexible_schedule" | "entrepreneurship" => {
            Some(ValueCategory::Independence)
        }
        _ => None,
    }
}
