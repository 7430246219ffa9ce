use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    scan::ports::{LLMClient, ScanRepository},
    user::{
        entities::User,
        ports::{UserRepository, UserService},
        value_objects::CreateUserInput,
    },
};

impl<U, I, S, LLM, HC> UserService for Service<U, I, S, LLM, HC>
where
    U: UserRepository,
    I: IngredientRepository,
    S: ScanRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, input))]
    async fn create_user(&self, input: CreateUserInput) -> Result<User, CoreError> {
        let name = input.name.trim().to_string();
        let email = input.email.trim().to_lowercase();

        if name.is_empty() {
            return Err(CoreError::InvalidInput("name is required".to_string()));
        }

        if email.is_empty() || !email.contains('@') {
            return Err(CoreError::InvalidInput("a valid email is required".to_string()));
        }

        if self
            .user_repository
            .get_by_email(email.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::AlreadyExists(format!(
                "user with email {email}"
            )));
        }

        self.user_repository
            .create_user(CreateUserInput { name, email })
            .await
    }

    async fn get_user(&self, user_id: i64) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::UserNotFound)
    }
}
