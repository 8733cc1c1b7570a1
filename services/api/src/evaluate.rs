use crate::infra::load_evaluation_request;
use clap::Args;
use founder_fit::config::AppConfig;
use founder_fit::error::AppError;
use founder_fit::scoring::{
    format_score, taxonomy, validate_evaluation_input, AnthropicTransport, DeterministicScorer,
    DeterministicScores, IdeaScoringService, InMemoryScoreRepository, ScoreResult,
    ScoringConfig, ScoringError, SkillCoverage,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// JSON document with `idea` and `roster`
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Only compute the deterministic sub-scores; skip the assessor call
    #[arg(long)]
    pub(crate) dry_run: bool,
}

pub(crate) async fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs { input, dry_run } = args;
    let request = load_evaluation_request(&input)?;
    validate_evaluation_input(&request.idea, &request.roster)
        .map_err(ScoringError::InputValidation)?;

    println!("Evaluating \"{}\" ({})", request.idea.title, request.idea.id);
    println!("Team size: {}", request.roster.len());

    let scorer = DeterministicScorer::default();
    let deterministic = scorer.score(&request.idea, &request.roster);
    render_deterministic(&deterministic);

    if dry_run {
        println!("\nDry run: qualitative assessment skipped.");
        return Ok(());
    }

    let config = AppConfig::load()?;
    let transport = AnthropicTransport::from_config(&config.assessor)?;
    let service = IdeaScoringService::new(
        Arc::new(InMemoryScoreRepository::default()),
        transport,
        ScoringConfig::default(),
    );

    println!("\nRequesting qualitative assessment from {} ...", config.assessor.model);
    let result = service.evaluate(&request.idea, &request.roster).await?;
    render_result(&result);

    let reasoning = result.ai_reasoning.decode();
    match SkillCoverage::from_reasoning(&reasoning, &request.roster) {
        Some(coverage) => render_coverage(&coverage),
        None => println!("\nRequired skills: none reported"),
    }

    let risks = reasoning.key_risks();
    if !risks.is_empty() {
        println!("\nKey risks");
        for risk in risks {
            println!("- {risk}");
        }
    }

    Ok(())
}

fn render_deterministic(scores: &DeterministicScores) {
    println!("\nDeterministic sub-scores");
    println!("- Team skill: {}", format_score(scores.team_skill_score));
    println!("- Network: {}", format_score(scores.network_score));
}

fn render_result(result: &ScoreResult) {
    let summary = result.summary_view();
    println!(
        "\nComposite: {} ({})",
        summary.composite,
        summary.band.label()
    );
    println!("- Idea quality: {}", summary.idea_quality);
    println!("- Team/idea fit: {}", summary.team_idea_fit);
    println!("- Time to first customer: {}", summary.time_to_first_customer);
    if let Some(recommendation) = summary.recommendation {
        println!("- Recommendation: {}", recommendation.label());
    }
    println!("\n{}", result.ai_narrative);
}

fn render_coverage(coverage: &SkillCoverage) {
    println!(
        "\nRequired skills covered: {}/{}",
        coverage.covered_count, coverage.total
    );
    for (category, entry) in &coverage.categories {
        println!("{}", category.label());
        for &skill in &entry.covered {
            println!("  [x] {}", taxonomy::skill_label(skill).unwrap_or(skill));
        }
        for &skill in &entry.missing {
            println!("  [ ] {}", taxonomy::skill_label(skill).unwrap_or(skill));
        }
    }
}
