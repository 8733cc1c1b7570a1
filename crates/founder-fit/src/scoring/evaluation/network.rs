use super::super::domain::NetworkEntry;
use super::config::ScoringConfig;

/// Log-compressed, strength-weighted reach blended with the share of reach inside the idea's
/// industry. Returns 0 when there are no entries or the weighted total is zero.
pub(crate) fn network_score(
    entries: &[&NetworkEntry],
    idea_industry: &str,
    config: &ScoringConfig,
) -> f64 {
    let weighted = |entry: &&NetworkEntry| {
        f64::from(entry.estimated_contacts)
            * config
                .strength_multipliers
                .multiplier(entry.connection_strength)
    };

    let weighted_total: f64 = entries.iter().map(weighted).sum();
    if weighted_total <= 0.0 {
        return 0.0;
    }

    let size_score = ((weighted_total + 1.0).log10() / (config.contact_scale + 1.0).log10())
        .min(1.0)
        * 100.0;

    let relevant: f64 = entries
        .iter()
        .filter(|entry| entry.industry == idea_industry)
        .map(weighted)
        .sum();
    let relevance_ratio = relevant / weighted_total;

    (config.size_weight * size_score + config.relevance_weight * relevance_ratio * 100.0)
        .clamp(0.0, 100.0)
}
