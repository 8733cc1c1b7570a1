use super::domain::{Idea, Member, NetworkEntry};
use super::taxonomy::{is_known_industry, is_known_skill};

const TITLE_LEN: (usize, usize) = (3, 100);
const PROBLEM_LEN: (usize, usize) = (10, 2000);
const TARGET_CUSTOMER_LEN: (usize, usize) = (5, 500);
const MAX_NOTES_LEN: usize = 1000;
const MAX_BACKGROUND_LEN: usize = 2000;
pub const MAX_ESTIMATED_CONTACTS: u32 = 1_000_000;
const MAX_NOTABLE_ROLES: usize = 10;
const MAX_NOTABLE_ROLE_LEN: usize = 50;

/// Caller-supplied data that cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputViolation {
    #[error("idea {field} must be between {min} and {max} characters (found {found})")]
    IdeaFieldLength {
        field: &'static str,
        min: usize,
        max: usize,
        found: usize,
    },
    #[error("unknown idea industry '{0}'")]
    UnknownIdeaIndustry(String),
    #[error("idea id in path '{path}' does not match payload '{payload}'")]
    IdeaIdMismatch { path: String, payload: String },
    #[error("member {member}: background exceeds {max} characters")]
    BackgroundTooLong { member: String, max: usize },
    #[error("member {member}: unknown skill key '{skill}'")]
    UnknownSkill { member: String, skill: String },
    #[error("member {member}: network entry has unknown industry '{industry}'")]
    UnknownNetworkIndustry { member: String, industry: String },
    #[error("member {member}: estimated contacts {found} exceeds {max}")]
    ContactsOutOfRange { member: String, found: u32, max: u32 },
    #[error("member {member}: network entry lists {found} notable roles (max {max})")]
    TooManyNotableRoles {
        member: String,
        found: usize,
        max: usize,
    },
    #[error("member {member}: notable role '{role}' exceeds {max} characters")]
    NotableRoleTooLong {
        member: String,
        role: String,
        max: usize,
    },
}

/// Checks the idea and roster, collecting every violation instead of stopping at the first.
pub fn validate_evaluation_input(idea: &Idea, roster: &[Member]) -> Result<(), Vec<InputViolation>> {
    let mut violations = Vec::new();
    check_idea(idea, &mut violations);
    for member in roster {
        check_member(member, &mut violations);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check_idea(idea: &Idea, violations: &mut Vec<InputViolation>) {
    check_length("title", &idea.title, TITLE_LEN, violations);
    check_length("problemStatement", &idea.problem_statement, PROBLEM_LEN, violations);
    check_length(
        "targetCustomer",
        &idea.target_customer,
        TARGET_CUSTOMER_LEN,
        violations,
    );
    if let Some(notes) = &idea.notes {
        check_length("notes", notes, (0, MAX_NOTES_LEN), violations);
    }
    if !is_known_industry(&idea.industry) {
        violations.push(InputViolation::UnknownIdeaIndustry(idea.industry.clone()));
    }
}

fn check_length(
    field: &'static str,
    value: &str,
    (min, max): (usize, usize),
    violations: &mut Vec<InputViolation>,
) {
    let found = value.chars().count();
    if found < min || found > max {
        violations.push(InputViolation::IdeaFieldLength {
            field,
            min,
            max,
            found,
        });
    }
}

fn check_member(member: &Member, violations: &mut Vec<InputViolation>) {
    let Some(profile) = &member.profile else {
        return;
    };
    let member_id = &member.id.0;

    if profile.background.chars().count() > MAX_BACKGROUND_LEN {
        violations.push(InputViolation::BackgroundTooLong {
            member: member_id.clone(),
            max: MAX_BACKGROUND_LEN,
        });
    }

    for skill in profile.skills.iter().filter(|skill| !is_known_skill(skill)) {
        violations.push(InputViolation::UnknownSkill {
            member: member_id.clone(),
            skill: skill.clone(),
        });
    }

    for entry in &profile.network_entries {
        check_network_entry(member_id, entry, violations);
    }
}

fn check_network_entry(member: &str, entry: &NetworkEntry, violations: &mut Vec<InputViolation>) {
    if !is_known_industry(&entry.industry) {
        violations.push(InputViolation::UnknownNetworkIndustry {
            member: member.to_string(),
            industry: entry.industry.clone(),
        });
    }
    if entry.estimated_contacts > MAX_ESTIMATED_CONTACTS {
        violations.push(InputViolation::ContactsOutOfRange {
            member: member.to_string(),
            found: entry.estimated_contacts,
            max: MAX_ESTIMATED_CONTACTS,
        });
    }
    if entry.notable_roles.len() > MAX_NOTABLE_ROLES {
        violations.push(InputViolation::TooManyNotableRoles {
            member: member.to_string(),
            found: entry.notable_roles.len(),
            max: MAX_NOTABLE_ROLES,
        });
    }
    for role in entry
        .notable_roles
        .iter()
        .filter(|role| role.chars().count() > MAX_NOTABLE_ROLE_LEN)
    {
        violations.push(InputViolation::NotableRoleTooLong {
            member: member.to_string(),
            role: role.clone(),
            max: MAX_NOTABLE_ROLE_LEN,
        });
    }
}
