use std::sync::OnceLock;

use serde_json::{json, Value};

use super::super::domain::{Idea, Member};
use super::super::taxonomy::SkillCategory;

const PERSONA: &str = "You are a startup evaluator trained to think like a skeptical but fair Series A venture capitalist. Your job is NOT to encourage founders. It is to surface the hardest, most realistic challenges this startup faces so they can address them or fail fast.

You will receive two separate inputs:
1. TEAM CONTEXT: a JSON object describing the founding team: their skills, backgrounds, and network entries (industry contacts with connection strength).
2. IDEA: a JSON object describing the startup idea to evaluate.

Before evaluating, reason through the following in order:
1. What problem is actually being solved, and for whom specifically? Vague markets hide weak ideas.
2. Who already solves this, and why would a customer switch today?
3. What is the single most likely reason this startup fails within 18 months?
4. Does this team have the specific, demonstrated ability to execute on THIS idea, not just adjacent experience?";

const OUTPUT_CONTRACT: &str = r#"Evaluate and return ONLY valid JSON with this exact schema:
{
  "ideaQualityScore": <integer 0-100>,
  "teamIdeaFitScore": <integer 0-100>,
  "overallViabilityScore": <integer 0-100>,
  "recommendation": "pass" | "watch" | "conditional-proceed" | "proceed",
  "timeToFirstCustomer": "<range string, e.g. '3-6 months'>",
  "narrative": "<3-5 sentence plain English summary. Must name the single biggest risk in the first sentence. Must not use the words 'innovative', 'exciting', 'promising', or 'potential'.>",
  "reasoning": {
    "ideaQuality": {
      "problemClarity": <integer 0-10>,
      "marketOpportunity": <integer 0-10>,
      "competitiveLandscape": <integer 0-10>,
      "defensibility": <integer 0-10>,
      "revenueModel": <integer 0-10>,
      "notes": "<string. Must identify the most likely reason this idea fails, not general observations.>"
    },
    "teamFit": {
      "skillAlignment": <integer 0-10>,
      "domainExperience": <integer 0-10>,
      "founderMarketFit": <integer 0-10>,
      "executionRisk": <integer 0-10>,
      "gaps": ["<specific gap, e.g. 'no one on team has sold to enterprise procurement before'>"],
      "notes": "<string>"
    },
    "timeEstimate": {
      "optimistic": "<string>",
      "realistic": "<string>",
      "pessimistic": "<string>",
      "keyRisks": ["<risk string>"],
      "blockers": ["<what must be true for the optimistic case to hold>"]
    },
    "marketSizing": {
      "tam": "<total addressable market, e.g. '$4B global SMB payroll software'>",
      "sam": "<serviceable addressable market>",
      "initialWedge": "<the specific first beachhead customer segment>"
    },
    "requiredSkills": ["<exact skill key from taxonomy above>"],
    "missingSkills": ["<exact skill key: skills required but absent from the team>"],
    "competitorFlags": ["<named competitor or category, e.g. 'Rippling already does this for SMBs'>"]
  }
}

requiredSkills must list every skill key from the taxonomy that this idea genuinely needs to succeed, typically 4 to 10 keys spanning technical, business, and domain categories. Only use exact key strings from the taxonomy above.

Do not include any text outside the JSON object. Do not wrap in markdown code fences.
All ideas should be treated as early-stage/preliminary regardless of description depth."#;

/// Static instruction block: persona, the skill taxonomy and the output contract.
/// Identical for every evaluation, so it sits at the front of the cacheable prefix.
pub fn instructions() -> &'static str {
    static INSTRUCTIONS: OnceLock<String> = OnceLock::new();
    INSTRUCTIONS.get_or_init(|| {
        let taxonomy = SkillCategory::ALL
            .into_iter()
            .map(|category| format!("{}: {}", category.heading(), category.skills().join(", ")))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "{PERSONA}\n\nThe following is the complete skill taxonomy. Use ONLY these exact key strings when populating requiredSkills:\n\n{taxonomy}\n\n{OUTPUT_CONTRACT}"
        )
    })
}

/// The three segments sent to the assessor. Only the team segment and the instructions are
/// eligible for provider-side caching; the idea segment changes on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentPrompt {
    pub instructions: &'static str,
    pub team_context: String,
    pub idea: String,
}

impl AssessmentPrompt {
    pub fn build(idea: &Idea, roster: &[Member]) -> Self {
        Self {
            instructions: instructions(),
            team_context: format!("TEAM CONTEXT:\n\n{}", team_context(roster)),
            idea: format!("IDEA TO EVALUATE:\n\n{}", idea_payload(idea)),
        }
    }
}

/// Serializes only what is stable for a given team, so repeated evaluations of different
/// ideas by the same team produce a byte-identical segment.
pub fn team_context(roster: &[Member]) -> String {
    let team: Vec<Value> = roster
        .iter()
        .map(|member| {
            let background = member
                .profile
                .as_ref()
                .map(|profile| profile.background.as_str())
                .unwrap_or_default();
            let network: Vec<Value> = member
                .network_entries()
                .iter()
                .map(|entry| {
                    json!({
                        "industry": entry.industry,
                        "estimatedContacts": entry.estimated_contacts,
                        "notableRoles": entry.notable_roles,
                        "connectionStrength": entry.connection_strength.label(),
                    })
                })
                .collect();

            json!({
                "skills": member.skills().collect::<Vec<_>>(),
                "background": background,
                "network": network,
            })
        })
        .collect();

    format!("{:#}", json!({ "team": team }))
}

/// Idea fields only; never cached.
pub fn idea_payload(idea: &Idea) -> String {
    let payload = json!({
        "idea": {
            "title": idea.title,
            "problem": idea.problem_statement,
            "targetCustomer": idea.target_customer,
            "industry": idea.industry,
            "notes": idea.notes,
        }
    });
    format!("{payload:#}")
}
