use chrono::Utc;
use sea_orm::{
    ActiveValue::Set,
    DatabaseConnection, EntityTrait, QueryFilter,
    sea_query::{Expr, Func, SimpleExpr},
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        ingredient::{
            entities::{Ingredient, NewIngredient},
            ports::IngredientRepository,
        },
    },
    entity::ingredients::{ActiveModel, Column, Entity},
    infrastructure::db::errors::map_insert_error,
};

#[derive(Debug, Clone)]
pub struct PostgresIngredientRepository {
    pub db: DatabaseConnection,
}

impl PostgresIngredientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// `LOWER(name) = LOWER($1)`, folded on both sides by Postgres so the lookup
/// agrees with the unique index.
fn name_matches(name: String) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(Column::Name))).eq(Func::lower(Expr::val(name)))
}

impl IngredientRepository for PostgresIngredientRepository {
    async fn find_by_name_case_insensitive(
        &self,
        name: String,
    ) -> Result<Option<Ingredient>, CoreError> {
        let ingredient = Entity::find()
            .filter(name_matches(name))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient by name: {}", e);
                CoreError::InternalServerError
            })?;

        ingredient.map(Ingredient::try_from).transpose()
    }

    async fn insert(&self, ingredient: NewIngredient) -> Result<Ingredient, CoreError> {
        let created = Entity::insert(ActiveModel {
            name: Set(ingredient.name.clone()),
            description: Set(ingredient.description),
            category: Set(ingredient.category),
            risk_level: Set(ingredient.risk_level.as_str().to_string()),
            side_effects: Set(ingredient.side_effects),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| map_insert_error("ingredient", &ingredient.name, e))?;

        Ingredient::try_from(created)
    }
}
