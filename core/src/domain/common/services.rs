use crate::domain::{
    health::ports::HealthCheckRepository, ingredient::ports::IngredientRepository,
    scan::ports::{LLMClient, ScanRepository}, user::ports::UserRepository,
};

/// Aggregates every outbound port the domain services need.
#[derive(Clone)]
pub struct Service<U, I, S, LLM, HC>
where
    U: UserRepository,
    I: IngredientRepository,
    S: ScanRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    pub(crate) user_repository: U,
    pub(crate) ingredient_repository: I,
    pub(crate) scan_repository: S,
    pub(crate) llm_client: LLM,
    pub(crate) health_check_repository: HC,
}

impl<U, I, S, LLM, HC> Service<U, I, S, LLM, HC>
where
    U: UserRepository,
    I: IngredientRepository,
    S: ScanRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    pub fn new(
        user_repository: U,
        ingredient_repository: I,
        scan_repository: S,
        llm_client: LLM,
        health_check_repository: HC,
    ) -> Self {
        Self {
            user_repository,
            ingredient_repository,
            scan_repository,
            llm_client,
            health_check_repository,
        }
    }
}
