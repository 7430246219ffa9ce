use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::scan::value_objects::RiskLevel;

/// Per-tier counts for a scan. Always derived from the stored results, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScanSummary {
    pub total_ingredients: usize,
    pub low_risk_count: usize,
    pub medium_risk_count: usize,
    pub high_risk_count: usize,
    pub overall_risk: RiskLevel,
}

impl ScanSummary {
    pub fn from_risks<I>(risks: I) -> Self
    where
        I: IntoIterator<Item = RiskLevel>,
    {
        let mut summary = Self {
            total_ingredients: 0,
            low_risk_count: 0,
            medium_risk_count: 0,
            high_risk_count: 0,
            overall_risk: RiskLevel::Low,
        };

        for risk in risks {
            summary.total_ingredients += 1;
            match risk {
                RiskLevel::Low => summary.low_risk_count += 1,
                RiskLevel::Medium => summary.medium_risk_count += 1,
                RiskLevel::High => summary.high_risk_count += 1,
            }
            summary.overall_risk = summary.overall_risk.max(risk);
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worst_tier_wins() {
        let summary =
            ScanSummary::from_risks([RiskLevel::Low, RiskLevel::High, RiskLevel::Medium]);

        assert_eq!(
            summary,
            ScanSummary {
                total_ingredients: 3,
                low_risk_count: 1,
                medium_risk_count: 1,
                high_risk_count: 1,
                overall_risk: RiskLevel::High,
            }
        );
    }

    #[test]
    fn all_low_is_low() {
        let summary = ScanSummary::from_risks([RiskLevel::Low, RiskLevel::Low]);

        assert_eq!(summary.total_ingredients, 2);
        assert_eq!(summary.low_risk_count, 2);
        assert_eq!(summary.overall_risk, RiskLevel::Low);
    }

    #[test]
    fn medium_beats_low() {
        let summary = ScanSummary::from_risks([RiskLevel::Low, RiskLevel::Medium]);

        assert_eq!(summary.overall_risk, RiskLevel::Medium);
    }

    #[test]
    fn empty_scan_is_low() {
        let summary = ScanSummary::from_risks(Vec::new());

        assert_eq!(summary.total_ingredients, 0);
        assert_eq!(summary.overall_risk, RiskLevel::Low);
    }
}
