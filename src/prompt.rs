//! Prompt assembly for the incentive analyst persona.
//!
//! Pure text construction: no retries, no validation, no IO. The caller
//! decides what to do with the assembled body.

use crate::schema::AnalysisRequest;

/// Persona header shared by both modes.
pub const ANALYST_PERSONA: &str = "\
You are an expert Incentive Compensation Analyst.
You have access to the Plan Rules and the Rep's Sales Data below.";

/// Auditor mode: the model must refuse rather than guess when a
/// plan-required variable is missing from the data.
pub const STRICT_MODE_INSTRUCTIONS: &str = r#"## AUDITOR MODE (STRICT)
Before calculating anything, cross-check the Plan Rules against the Sales Data.
If ANY variable the plan requires (e.g., Quota, Eligibility, Units, MBO Rating)
is absent from the data, you MUST abort the calculation and respond with
EXACTLY this JSON shape instead:
{
    "final_answer_summary": "Missing required data: <variable name>",
    "detailed_logic": "The plan requires <variable name>, which is not present in the provided data. No calculation was performed.",
    "chart_data": {}
}
Do NOT assume, estimate, or substitute a default for any missing variable."#;

/// Lenient mode: minor gaps are filled with sensible defaults.
pub const LENIENT_MODE_INSTRUCTIONS: &str = r#"## ASSISTANT MODE (LENIENT)
If a minor detail is missing from the data, assume a sensible default and
state the assumption inside your detailed logic. Only refuse if the question
is entirely unanswerable from the plan rules."#;

/// Trailing schema description. The normalizer depends on these exact
/// field names.
pub const RESPONSE_FORMAT_INSTRUCTIONS: &str = r#"## RESPONSE FORMAT (CRITICAL)
You must respond with a single valid JSON object.

Formatting rules for 'detailed_logic':
- You MUST use Markdown formatting.
- Use numbered lists (1., 2., 3.) for main steps.
- Use bullet points (- ) for sub-calculations.
- Use bolding (**text**) for the final number in each step.
- Add newlines (\n) between every distinct step so it reads clearly.

Structure:
{
    "final_answer_summary": "A short, punchy summary (max 2 sentences).",
    "detailed_logic": "1. **Step One:** Calc...\n\n2. **Step Two:** Calc...\n  - Sub-step math...",
    "chart_data": {
        "Baseline Payout": 1234.56,
        "Simulated Payout": 2345.67
    }
}"#;

/// Assemble the full prompt body for one request.
pub fn build_prompt(request: &AnalysisRequest) -> String {
    let mode_block = if request.strict {
        STRICT_MODE_INSTRUCTIONS
    } else {
        LENIENT_MODE_INSTRUCTIONS
    };

    format!(
        "{persona}\n\n{mode}\n\n=== PLAN RULES ===\n{rules}\n\n=== REP DATA ===\n{data}\n\n=== USER QUESTION ===\n{question}\n\n{format}",
        persona = ANALYST_PERSONA,
        mode = mode_block,
        rules = request.plan_rules,
        data = request.sales_context,
        question = request.question,
        format = RESPONSE_FORMAT_INSTRUCTIONS,
    )
}
