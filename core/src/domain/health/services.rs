use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    ingredient::ports::IngredientRepository,
    scan::ports::{LLMClient, ScanRepository},
    user::ports::UserRepository,
};

impl<U, I, S, LLM, HC> HealthCheckService for Service<U, I, S, LLM, HC>
where
    U: UserRepository,
    I: IngredientRepository,
    S: ScanRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
