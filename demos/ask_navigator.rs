use anyhow::Result;
use dotenv::dotenv;
use incentive_navigator::llm::{BedrockClient, IncentiveAnalyst};
use incentive_navigator::{
    AnalysisRequest, NavigatorConfig, SessionContext, DEFAULT_PLAN_RULES, SAMPLE_REP_DATA,
};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = NavigatorConfig::from_env();
    if config.is_placeholder() {
        eprintln!("⚠️  BEDROCK_API_KEY is not set; requests will fail with a System Error result.");
    }

    let strict = std::env::var("NAVIGATOR_STRICT").is_ok();
    let analyst = IncentiveAnalyst::new(BedrockClient::new(config));
    let mut session = SessionContext::new();

    println!("🤖 Smart Incentive Navigator (strict mode: {strict})");
    println!("Ask about payouts, gaps, or what-if scenarios (type 'quit' to exit).");
    println!("------------------------------------------------------------------");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let question = input.trim();

        if question.eq_ignore_ascii_case("quit") || question.eq_ignore_ascii_case("exit") {
            break;
        }

        if question.is_empty() {
            continue;
        }

        println!("\nThinking...");

        let request = AnalysisRequest::new(SAMPLE_REP_DATA, DEFAULT_PLAN_RULES, question, strict);
        let result = analyst.ask_and_record(&mut session, &request).await;

        println!("\nAnswer: {}\n", result.summary);
        println!("{}\n", result.logic);
        if result.has_chart() {
            for point in &result.chart_data {
                println!("  {:<24} {:>12.2}", point.label, point.value);
            }
            println!();
        }
        println!(
            "({} entries in session history)",
            session.len()
        );
        println!("------------------------------------------------------------------");
    }

    Ok(())
}
