use crate::domain::dataset::DatasetAggregate;
use crate::domain::insight::{InsightKind, REPORT_SECTIONS};
use crate::domain::prediction::{PredictionInput, PredictionRecord, PredictionResult};

/// System role sent with every completion request.
pub const ANALYST_SYSTEM_PROMPT: &str = "You are a senior business data analyst.";

/// Everything a single insight prompt needs, per kind.
#[derive(Debug, Clone, PartialEq)]
pub enum InsightRequest {
    Explain {
        input: PredictionInput,
        result: PredictionResult,
    },
    Recommend {
        result: PredictionResult,
        aggregate: DatasetAggregate,
    },
    Report {
        result: PredictionResult,
        aggregate: DatasetAggregate,
    },
}

impl InsightRequest {
    pub fn build(kind: InsightKind, record: &PredictionRecord, aggregate: &DatasetAggregate) -> Self {
        match kind {
            InsightKind::Explain => Self::Explain {
                input: record.input,
                result: record.result,
            },
            InsightKind::Recommend => Self::Recommend {
                result: record.result,
                aggregate: *aggregate,
            },
            InsightKind::Report => Self::Report {
                result: record.result,
                aggregate: *aggregate,
            },
        }
    }

    pub fn kind(&self) -> InsightKind {
        match self {
            Self::Explain { .. } => InsightKind::Explain,
            Self::Recommend { .. } => InsightKind::Recommend,
            Self::Report { .. } => InsightKind::Report,
        }
    }

    pub fn prompt(&self) -> String {
        match self {
            Self::Explain { input, result } => format!(
                "Explain this prediction in simple business terms.\n\n\
                 Quantity: {}\n\
                 Discount: {}\n\
                 Month: {}\n\
                 Quarter: {}\n\
                 Predicted Sales: {}\n\
                 Profit Category: {}",
                input.quantity,
                input.discount,
                input.month,
                input.quarter,
                result.sales_estimate,
                result.profit_category
            ),
            Self::Recommend { result, aggregate } => format!(
                "Total Sales: {}\n\
                 Total Profit: {}\n\
                 Predicted Sales: {}\n\
                 Profit Category: {}\n\n\
                 Provide 3 actionable business recommendations.",
                aggregate.total_sales,
                aggregate.total_profit,
                result.sales_estimate,
                result.profit_category
            ),
            Self::Report { result, aggregate } => {
                let sections: String = REPORT_SECTIONS
                    .iter()
                    .map(|s| format!("- {}\n", s))
                    .collect();
                format!(
                    "Generate a business report with:\n\
                     {}\n\
                     Total Sales: {}\n\
                     Total Profit: {}\n\
                     Predicted Sales: {}\n\
                     Profit Category: {}",
                    sections,
                    aggregate.total_sales,
                    aggregate.total_profit,
                    result.sales_estimate,
                    result.profit_category
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prediction::ProfitCategory;

    fn record(category: ProfitCategory) -> PredictionRecord {
        PredictionRecord::new(
            PredictionInput {
                quantity: 5,
                discount: 0.1,
                month: 6,
                quarter: 2,
            },
            PredictionResult {
                sales_estimate: 1234.56,
                profit_category: category,
            },
        )
    }

    fn aggregate() -> DatasetAggregate {
        DatasetAggregate {
            total_sales: 2297200.86,
            total_profit: 286397.02,
        }
    }

    #[test]
    fn test_explain_prompt_embeds_inputs() {
        let prompt = InsightRequest::build(InsightKind::Explain, &record(ProfitCategory::High), &aggregate())
            .prompt();

        assert!(prompt.starts_with("Explain this prediction"));
        assert!(prompt.contains("Quantity: 5\n"));
        assert!(prompt.contains("Discount: 0.1\n"));
        assert!(prompt.contains("Month: 6\n"));
        assert!(prompt.contains("Quarter: 2\n"));
        assert!(prompt.contains("Predicted Sales: 1234.56"));
        assert!(prompt.contains("Profit Category: High"));
        assert!(!prompt.contains("Total Sales"));
    }

    #[test]
    fn test_recommend_prompt_embeds_totals() {
        let prompt = InsightRequest::build(InsightKind::Recommend, &record(ProfitCategory::Low), &aggregate())
            .prompt();

        assert!(prompt.contains("Total Sales: 2297200.86"));
        assert!(prompt.contains("Total Profit: 286397.02"));
        assert!(prompt.contains("Predicted Sales: 1234.56"));
        assert!(prompt.contains("Provide 3 actionable business recommendations."));
    }

    #[test]
    fn test_report_prompt_lists_sections() {
        let prompt = InsightRequest::build(InsightKind::Report, &record(ProfitCategory::High), &aggregate())
            .prompt();

        for section in REPORT_SECTIONS {
            assert!(prompt.contains(&format!("- {}\n", section)), "missing {}", section);
        }
        assert!(prompt.contains("Total Profit: 286397.02"));
    }

    #[test]
    fn test_low_category_never_rendered_as_high() {
        for kind in InsightKind::ALL {
            let request = InsightRequest::build(kind, &record(ProfitCategory::Low), &aggregate());
            assert_eq!(request.kind(), kind);
            let prompt = request.prompt();
            assert!(prompt.contains("Profit Category: Low"), "{:?}", kind);
            assert!(!prompt.contains("High"), "{:?}", kind);
        }
    }
}
