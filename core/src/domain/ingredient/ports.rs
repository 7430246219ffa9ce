use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::entities::{Ingredient, NewIngredient},
};

/// Narrow view over the shared ingredient catalog table.
#[cfg_attr(test, mockall::automock)]
pub trait IngredientRepository: Send + Sync {
    /// Exact match on name, ignoring case.
    fn find_by_name_case_insensitive(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    /// Fails with `CoreError::AlreadyExists` when another writer inserted the
    /// same name first.
    fn insert(
        &self,
        ingredient: NewIngredient,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;
}
