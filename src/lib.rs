//! # Incentive Navigator
//!
//! A library for LLM-assisted incentive compensation analysis. It assembles
//! a textual context (sales data + plan rules) around a user question,
//! sends it to a hosted model, and normalizes the free-form reply into a
//! structured record (summary, markdown logic, chart values) kept in a
//! per-session history.
//!
//! ## Core Concepts
//!
//! - **Prompt Builder**: pure construction of the request text, with a
//!   strict (auditor) and a lenient instruction mode
//! - **Response Normalizer**: extracts, repairs, and coerces a JSON object
//!   out of whatever the model actually said; total, never fails
//! - **Session Context**: per-session, most-recent-first history with an
//!   explicit lifecycle; no global state
//! - All payout math is delegated to the model. The crate never computes
//!   or verifies incentive arithmetic itself.
//!
//! ## Example
//!
//! ```rust
//! use incentive_navigator::{
//!     build_prompt, normalize_response, AnalysisRequest, SessionContext,
//!     DEFAULT_PLAN_RULES, SAMPLE_REP_DATA,
//! };
//!
//! let request = AnalysisRequest::new(
//!     SAMPLE_REP_DATA,
//!     DEFAULT_PLAN_RULES,
//!     "Simulate if I sold 10 more Capital Units in May.",
//!     false,
//! );
//! let prompt = build_prompt(&request);
//! assert!(prompt.contains("=== USER QUESTION ==="));
//!
//! // Whatever comes back, normalization produces a displayable result.
//! let result = normalize_response("I cannot comply.");
//! let mut session = SessionContext::new();
//! session.record(request.question.clone(), result);
//! assert_eq!(session.len(), 1);
//! ```
//!
//! The network client lives behind the `bedrock` feature; everything else
//! works without it.

pub mod config;
pub mod error;
pub mod export;
pub mod ingestion;
pub mod prompt;
pub mod response;
pub mod schema;
pub mod session;

#[cfg(feature = "bedrock")]
pub mod llm;

pub use config::NavigatorConfig;
pub use error::{NavigatorError, Result};
pub use export::{encode_latin1, prepare_report_text};
pub use ingestion::{csv_preview, csv_preview_file, DEFAULT_PLAN_RULES, SAMPLE_REP_DATA};
pub use prompt::{
    build_prompt, LENIENT_MODE_INSTRUCTIONS, RESPONSE_FORMAT_INSTRUCTIONS,
    STRICT_MODE_INSTRUCTIONS,
};
pub use response::{
    normalize_response, parse_failure_result, system_error_result, PARSE_FAILURE_SUMMARY,
    SYSTEM_ERROR_SUMMARY,
};
pub use schema::{AnalysisRequest, AnalysisResult, ChartPoint};
pub use session::{HistoryEntry, SessionContext};
