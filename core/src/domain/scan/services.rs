use serde_json::Value;
use tracing::{error, info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::{
        entities::NewIngredient, ports::IngredientRepository,
        services::find_or_create_ingredient,
    },
    scan::{
        entities::{
            IngredientFailure, IngredientProcessingError, NewScan, NewScanResult,
            RawIngredientAnalysis, Scan, ScanDetails, ScanResult,
        },
        helpers::ScanBatchOutcome,
        parser::parse_analysis,
        ports::{LLMClient, ScanRepository, ScanService},
        prompt::build_analysis_prompt,
        value_objects::{AnalysisRequest, AnalysisSource, ListScansFilter},
    },
    user::ports::UserRepository,
};

impl<U, I, S, LLM, HC> ScanService for Service<U, I, S, LLM, HC>
where
    U: UserRepository,
    I: IngredientRepository,
    S: ScanRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    #[instrument(
        skip(self, request),
        fields(
            user_id = request.user_id,
            source = request.source.kind(),
            category = %request.category
        )
    )]
    async fn process_scan(&self, request: AnalysisRequest) -> Result<Scan, CoreError> {
        // 1. Reject unusable input before spending a provider call
        request.validate()?;

        // 2. Resolve the owning user
        self.user_repository
            .get_by_id(request.user_id)
            .await?
            .ok_or(CoreError::UserNotFound)?;

        // 3. Build prompt and call the model
        let prompt = build_analysis_prompt(&request.source, request.category);
        let image = match request.source {
            AnalysisSource::Image(image) => Some(image),
            AnalysisSource::Text { .. } => None,
        };

        let raw_response = self.llm_client.invoke(prompt, image).await?;

        // 4. Decode the reply; nothing is persisted if this fails
        let analysis = parse_analysis(&raw_response)?;

        // 5. Create the scan row
        let scan = self
            .scan_repository
            .create_scan(NewScan::new(
                analysis.product_name,
                request.user_id,
                request.category,
                analysis.safety_score,
                analysis.overall_assessment,
            ))
            .await?;

        // 6. Record each ingredient independently
        let outcome = self.record_scan_results(scan.id, analysis.results).await;

        for failure in &outcome.skipped {
            warn!(
                scan_id = scan.id,
                index = failure.index,
                ingredient = ?failure.ingredient_name,
                "{}",
                failure
            );
        }

        if outcome.is_complete() {
            info!(
                scan_id = scan.id,
                recorded = outcome.recorded.len(),
                "scan processed"
            );
        } else {
            warn!(
                scan_id = scan.id,
                recorded = outcome.recorded.len(),
                skipped = outcome.skipped.len(),
                "scan processed with skipped ingredients"
            );
        }

        Ok(scan)
    }

    async fn get_scan(&self, scan_id: i64) -> Result<ScanDetails, CoreError> {
        let scan = self
            .scan_repository
            .get_scan_by_id(scan_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let owner = self
            .user_repository
            .get_by_id(scan.user_id)
            .await?
            .ok_or_else(|| {
                error!("Scan {} references missing user {}", scan.id, scan.user_id);
                CoreError::InternalServerError
            })?;

        self.scan_details(scan, owner.name).await
    }

    async fn list_user_scans(
        &self,
        user_id: i64,
        filter: ListScansFilter,
    ) -> Result<Vec<ScanDetails>, CoreError> {
        let owner = self
            .user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::UserNotFound)?;

        let scans = self
            .scan_repository
            .get_scans_by_user(user_id, filter)
            .await?;

        let mut details = Vec::with_capacity(scans.len());
        for scan in scans {
            details.push(self.scan_details(scan, owner.name.clone()).await?);
        }

        Ok(details)
    }
}

impl<U, I, S, LLM, HC> Service<U, I, S, LLM, HC>
where
    U: UserRepository,
    I: IngredientRepository,
    S: ScanRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn record_scan_results(
        &self,
        scan_id: i64,
        entries: Vec<Value>,
    ) -> ScanBatchOutcome {
        let mut outcome = ScanBatchOutcome::default();

        for (index, entry) in entries.into_iter().enumerate() {
            outcome.push(self.record_scan_result(scan_id, index, entry).await);
        }

        outcome
    }

    async fn record_scan_result(
        &self,
        scan_id: i64,
        index: usize,
        entry: Value,
    ) -> Result<ScanResult, IngredientProcessingError> {
        let analysis = RawIngredientAnalysis::from_value(entry, index)?.validate(index)?;

        let ingredient = find_or_create_ingredient(
            &self.ingredient_repository,
            NewIngredient::new(
                &analysis.ingredient_name,
                &analysis.description,
                &analysis.category,
                analysis.risk,
                &analysis.side_effects,
            ),
        )
        .await
        .map_err(|e| persistence_failure(index, &analysis.ingredient_name, e))?;

        self.scan_repository
            .create_scan_result(NewScanResult {
                scan_id,
                ingredient_id: ingredient.id,
                risk: analysis.risk,
                severity: analysis.severity.clone(),
                explanation: analysis.explanation.clone(),
            })
            .await
            .map_err(|e| persistence_failure(index, &analysis.ingredient_name, e))
    }

    async fn scan_details(&self, scan: Scan, user_name: String) -> Result<ScanDetails, CoreError> {
        let results = self
            .scan_repository
            .get_results_by_scan_id(scan.id)
            .await?;

        Ok(ScanDetails::new(scan, user_name, results))
    }
}

fn persistence_failure(
    index: usize,
    ingredient_name: &str,
    e: CoreError,
) -> IngredientProcessingError {
    IngredientProcessingError::new(
        index,
        Some(ingredient_name.to_string()),
        IngredientFailure::Persistence(e),
    )
}
