use crate::{
    domain::common::{NutriscanConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        ingredient::repositories::PostgresIngredientRepository,
        llm::LLMProvider,
        scan::repositories::PostgresScanRepository,
        user::repository::PostgresUserRepository,
    },
};

pub type NutriscanService = Service<
    PostgresUserRepository,
    PostgresIngredientRepository,
    PostgresScanRepository,
    LLMProvider,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: NutriscanConfig) -> Result<NutriscanService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    let user_repository = PostgresUserRepository::new(postgres.get_db());
    let ingredient_repository = PostgresIngredientRepository::new(postgres.get_db());
    let scan_repository = PostgresScanRepository::new(postgres.get_db());
    let health_check_repository = PostgresHealthCheckRepository::new(postgres.get_db());
    let llm_client = LLMProvider::from(config.llm);

    Ok(Service::new(
        user_repository,
        ingredient_repository,
        scan_repository,
        llm_client,
        health_check_repository,
    ))
}
