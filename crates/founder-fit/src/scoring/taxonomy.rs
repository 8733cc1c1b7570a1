//! Closed skill taxonomy and the industry keys shared by ideas and network entries.

use serde::{Deserialize, Serialize};

/// One of the three fixed skill partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Business,
    Domain,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Technical,
        SkillCategory::Business,
        SkillCategory::Domain,
    ];

    /// Ordered skill keys belonging to this category.
    pub fn skills(self) -> &'static [&'static str] {
        match self {
            SkillCategory::Technical => TECHNICAL_SKILLS,
            SkillCategory::Business => BUSINESS_SKILLS,
            SkillCategory::Domain => DOMAIN_SKILLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical",
            SkillCategory::Business => "Business",
            SkillCategory::Domain => "Domain",
        }
    }

    /// Upper-case heading used when the taxonomy is rendered into the assessor prompt.
    pub fn heading(self) -> &'static str {
        match self {
            SkillCategory::Technical => "TECHNICAL",
            SkillCategory::Business => "BUSINESS",
            SkillCategory::Domain => "DOMAIN",
        }
    }
}

pub const TECHNICAL_SKILLS: &[&str] = &[
    "full-stack-dev",
    "mobile-dev",
    "ml-ai",
    "data-engineering",
    "data-science-analytics",
    "devops-infra",
    "product-design-ux",
    "cybersecurity",
    "blockchain-web3",
    "ar-vr-spatial",
    "embedded-iot",
];

pub const BUSINESS_SKILLS: &[&str] = &[
    "sales",
    "marketing-growth",
    "finance-accounting",
    "operations",
    "product-management",
    "fundraising-ir",
    "legal-compliance",
    "customer-success",
    "hr-people-ops",
    "supply-chain-mgmt",
    "partnerships-bizdev",
    "brand-comms",
];

pub const DOMAIN_SKILLS: &[&str] = &[
    "healthcare-medtech",
    "fintech-banking",
    "edtech",
    "enterprise-saas",
    "consumer-apps",
    "biotech-pharma",
    "workforce-hrtech",
    "future-of-work",
    "food-beverage",
    "foodtech-restauranttech",
    "agriculture-agtech",
    "hardware-manufacturing",
    "real-estate",
    "construction-proptech",
    "climate-energy",
    "retail-ecommerce",
    "logistics-supply-chain",
    "automotive-mobility",
    "travel-hospitality",
    "media-entertainment",
    "sports-fitness-wellness",
    "social-impact-nonprofit",
    "government-civictech",
];

/// Industry keys accepted for ideas and network entries.
pub const INDUSTRIES: &[&str] = &[
    "healthcare-medtech",
    "fintech-banking",
    "edtech",
    "enterprise-saas",
    "consumer-apps",
    "hardware-manufacturing",
    "real-estate",
    "logistics-supply-chain",
    "climate-energy",
    "media-entertainment",
    "other",
];

pub fn category_of(skill: &str) -> Option<SkillCategory> {
    SkillCategory::ALL
        .into_iter()
        .find(|category| category.skills().contains(&skill))
}

pub fn is_known_skill(skill: &str) -> bool {
    category_of(skill).is_some()
}

pub fn is_known_industry(industry: &str) -> bool {
    INDUSTRIES.contains(&industry)
}

/// Every skill key in taxonomy order.
pub fn all_skills() -> impl Iterator<Item = &'static str> {
    SkillCategory::ALL
        .into_iter()
        .flat_map(|category| category.skills().iter().copied())
}

pub fn skill_label(skill: &str) -> Option<&'static str> {
    let label = match skill {
        "full-stack-dev" => "Full-Stack Development",
        "mobile-dev" => "Mobile Development",
        "ml-ai" => "Machine Learning / AI",
        "data-engineering" => "Data Engineering",
        "data-science-analytics" => "Data Science / Analytics",
        "devops-infra" => "DevOps / Infrastructure",
        "product-design-ux" => "Product Design / UX",
        "cybersecurity" => "Cybersecurity",
        "blockchain-web3" => "Blockchain / Web3",
        "ar-vr-spatial" => "AR / VR / Spatial",
        "embedded-iot" => "Embedded Systems / IoT",
        "sales" => "Sales",
        "marketing-growth" => "Marketing / Growth",
        "finance-accounting" => "Finance / Accounting",
        "operations" => "Operations",
        "product-management" => "Product Management",
        "fundraising-ir" => "Fundraising / Investor Relations",
        "legal-compliance" => "Legal / Compliance",
        "customer-success" => "Customer Success",
        "hr-people-ops" => "HR / People Operations",
        "supply-chain-mgmt" => "Supply Chain Management",
        "partnerships-bizdev" => "Partnerships / Biz Dev",
        "brand-comms" => "Brand & Communications",
        "healthcare-medtech" => "Healthcare / MedTech",
        "fintech-banking" => "Fintech / Banking",
        "edtech" => "EdTech",
        "enterprise-saas" => "Enterprise SaaS",
        "consumer-apps" => "Consumer Apps",
        "biotech-pharma" => "Biotech / Pharma",
        "workforce-hrtech" => "Workforce / HR Tech",
        "future-of-work" => "Future of Work",
        "food-beverage" => "Food & Beverage",
        "foodtech-restauranttech" => "FoodTech / RestaurantTech",
        "agriculture-agtech" => "Agriculture / AgTech",
        "hardware-manufacturing" => "Hardware / Manufacturing",
        "real-estate" => "Real Estate",
        "construction-proptech" => "Construction / PropTech",
        "climate-energy" => "Climate / Energy",
        "retail-ecommerce" => "Retail / E-Commerce",
        "logistics-supply-chain" => "Logistics / Supply Chain",
        "automotive-mobility" => "Automotive / Mobility",
        "travel-hospitality" => "Travel / Hospitality",
        "media-entertainment" => "Media / Entertainment",
        "sports-fitness-wellness" => "Sports / Fitness / Wellness",
        "social-impact-nonprofit" => "Social Impact / Nonprofit",
        "government-civictech" => "Government / Civic Tech",
        _ => return None,
    };
    Some(label)
}
