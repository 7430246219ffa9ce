use crate::domain::scan::entities::{IngredientProcessingError, ScanResult};

/// Per-ingredient outcomes of recording one scan.
#[derive(Debug, Default)]
pub struct ScanBatchOutcome {
    pub recorded: Vec<ScanResult>,
    pub skipped: Vec<IngredientProcessingError>,
}

impl ScanBatchOutcome {
    pub fn push(&mut self, outcome: Result<ScanResult, IngredientProcessingError>) {
        match outcome {
            Ok(result) => self.recorded.push(result),
            Err(failure) => self.skipped.push(failure),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scan::{entities::IngredientFailure, value_objects::RiskLevel};

    #[test]
    fn outcomes_are_split_by_kind() {
        let recorded = ScanResult {
            id: 1,
            scan_id: 10,
            ingredient_id: 100,
            risk: RiskLevel::Low,
            severity: "Minimal".to_string(),
            explanation: String::new(),
        };
        let skipped =
            IngredientProcessingError::new(1, None, IngredientFailure::MissingField("risk"));

        let mut outcome = ScanBatchOutcome::default();
        assert!(outcome.is_complete());

        outcome.push(Ok(recorded.clone()));
        outcome.push(Err(skipped.clone()));

        assert_eq!(outcome.recorded, vec![recorded]);
        assert_eq!(outcome.skipped, vec![skipped]);
        assert!(!outcome.is_complete());
    }
}
