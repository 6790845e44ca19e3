use analysis::{PromptBuilder, dto::analyze::AnalysisInput};
use llm::{Result, TextGenerator};

/// Build the analysis prompt and hand it to the generator
pub async fn analyze_rounds(generator: &dyn TextGenerator, input: &AnalysisInput) -> Result<String> {
    let prompt = PromptBuilder::build(&input.question, &input.rounds);

    tracing::info!(
        "Built analysis prompt ({} rounds, {} chars)",
        input.rounds.len(),
        prompt.len()
    );

    generator.generate(&prompt).await
}
