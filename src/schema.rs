use serde::{Deserialize, Serialize};

/// One user query against the loaded context. Constructed once per question
/// and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Raw sales data text (rep performance, units, eligibility).
    pub sales_context: String,
    /// Compensation plan rules text. May be an uploaded-document override.
    pub plan_rules: String,
    /// The user's free-text question or scenario.
    pub question: String,
    /// Auditor mode: refuse rather than guess when required data is absent.
    pub strict: bool,
}

impl AnalysisRequest {
    pub fn new(
        sales_context: impl Into<String>,
        plan_rules: impl Into<String>,
        question: impl Into<String>,
        strict: bool,
    ) -> Self {
        Self {
            sales_context: sales_context.into(),
            plan_rules: plan_rules.into(),
            question: question.into(),
            strict,
        }
    }
}

/// A single labelled bar in the payout chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// The normalized outcome of one analysis. Always well-formed: failure is
/// represented as a result with an error-flavored summary, never as an
/// absent record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Short answer (a sentence or two).
    pub summary: String,
    /// Markdown step-by-step explanation. On failure this carries the raw
    /// model reply or the error detail so the user can inspect it.
    pub logic: String,
    /// Label -> value pairs in the order the model emitted them.
    #[serde(default)]
    pub chart_data: Vec<ChartPoint>,
}

impl AnalysisResult {
    pub fn new(
        summary: impl Into<String>,
        logic: impl Into<String>,
        chart_data: Vec<ChartPoint>,
    ) -> Self {
        Self {
            summary: summary.into(),
            logic: logic.into(),
            chart_data,
        }
    }

    /// Whether there is anything for a bar chart to display. An absent,
    /// empty, or fully non-numeric mapping renders as "no chart".
    pub fn has_chart(&self) -> bool {
        !self.chart_data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chart_is_not_displayable() {
        let result = AnalysisResult::new("ok", "logic", vec![]);
        assert!(!result.has_chart());
    }

    #[test]
    fn chart_order_survives_serialization() {
        let result = AnalysisResult::new(
            "ok",
            "logic",
            vec![
                ChartPoint::new("Baseline Payout", 1234.56),
                ChartPoint::new("Simulated Payout", 2345.67),
            ],
        );

        let json = serde_json::to_string(&result).unwrap();
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.chart_data[0].label, "Baseline Payout");
        assert_eq!(back.chart_data[1].label, "Simulated Payout");
    }
}
