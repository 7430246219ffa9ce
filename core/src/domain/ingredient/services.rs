use tracing::{debug, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::{Ingredient, NewIngredient},
        ports::IngredientRepository,
    },
};

/// Returns the catalog row for `candidate.name`, creating it on first sight.
///
/// Existing rows are returned untouched: the first analysis to mention an
/// ingredient owns its catalog metadata. Two scans racing on a brand-new name
/// may both miss the lookup; the loser's insert hits the unique index and the
/// winner's row is read back instead.
pub async fn find_or_create_ingredient<I>(
    ingredient_repository: &I,
    candidate: NewIngredient,
) -> Result<Ingredient, CoreError>
where
    I: IngredientRepository,
{
    let name = candidate.name.trim().to_string();
    if name.is_empty() {
        return Err(CoreError::InvalidInput(
            "ingredient name must not be empty".to_string(),
        ));
    }

    if let Some(existing) = ingredient_repository
        .find_by_name_case_insensitive(name.clone())
        .await?
    {
        debug!(ingredient_id = existing.id, name = %name, "ingredient already catalogued");
        return Ok(existing);
    }

    match ingredient_repository
        .insert(NewIngredient { name: name.clone(), ..candidate })
        .await
    {
        Ok(created) => Ok(created),
        Err(CoreError::AlreadyExists(_)) => {
            warn!(name = %name, "lost catalog insert race, reading back existing row");
            ingredient_repository
                .find_by_name_case_insensitive(name)
                .await?
                .ok_or(CoreError::InternalServerError)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::Utc;

    use super::*;
    use crate::domain::{
        ingredient::ports::MockIngredientRepository, scan::value_objects::RiskLevel,
    };

    /// Mock repository backed by a shared vector, matching names the way the
    /// Postgres adapter does.
    fn catalog() -> (MockIngredientRepository, Arc<Mutex<Vec<Ingredient>>>) {
        let rows: Arc<Mutex<Vec<Ingredient>>> = Arc::new(Mutex::new(Vec::new()));
        let mut repository = MockIngredientRepository::new();

        let lookup_rows = rows.clone();
        repository
            .expect_find_by_name_case_insensitive()
            .returning(move |name| {
                let found = lookup_rows
                    .lock()
                    .unwrap()
                    .iter()
                    .find(|row| row.name.to_lowercase() == name.to_lowercase())
                    .cloned();
                Box::pin(async move { Ok(found) })
            });

        let insert_rows = rows.clone();
        repository.expect_insert().returning(move |new| {
            let mut rows = insert_rows.lock().unwrap();
            let created = Ingredient {
                id: rows.len() as i64 + 1,
                name: new.name,
                description: new.description,
                category: new.category,
                risk_level: new.risk_level,
                side_effects: new.side_effects,
                created_at: Utc::now(),
            };
            rows.push(created.clone());
            Box::pin(async move { Ok(created) })
        });

        (repository, rows)
    }

    fn candidate(name: &str, risk_level: RiskLevel) -> NewIngredient {
        NewIngredient::new(
            name,
            "a common ingredient",
            "sweetener",
            risk_level,
            &["cavities".to_string()],
        )
    }

    #[tokio::test]
    async fn lookup_is_case_insensitive_and_first_write_wins() {
        let (repository, rows) = catalog();

        let sugar = find_or_create_ingredient(&repository, candidate("Sugar", RiskLevel::Medium))
            .await
            .unwrap();
        let shouted = find_or_create_ingredient(&repository, candidate("SUGAR", RiskLevel::High))
            .await
            .unwrap();

        assert_eq!(sugar, shouted);
        assert_eq!(shouted.name, "Sugar");
        assert_eq!(shouted.risk_level, RiskLevel::Medium);
        assert_eq!(rows.lock().unwrap().len(), 1);

        let aspartame =
            find_or_create_ingredient(&repository, candidate("Aspartame", RiskLevel::High))
                .await
                .unwrap();

        assert_ne!(aspartame.id, sugar.id);
        assert_eq!(rows.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn lost_insert_race_returns_the_winning_row() {
        let winner = Ingredient {
            id: 9,
            name: "Citric Acid".to_string(),
            description: "acidulant".to_string(),
            category: "acidity regulator".to_string(),
            risk_level: RiskLevel::Low,
            side_effects: String::new(),
            created_at: Utc::now(),
        };

        let mut repository = MockIngredientRepository::new();
        let mut lookups = 0;
        let stored = winner.clone();
        repository
            .expect_find_by_name_case_insensitive()
            .times(2)
            .returning(move |_| {
                lookups += 1;
                let found = (lookups > 1).then(|| stored.clone());
                Box::pin(async move { Ok(found) })
            });
        repository.expect_insert().times(1).returning(|_| {
            Box::pin(async { Err(CoreError::AlreadyExists("ingredient".to_string())) })
        });

        let resolved =
            find_or_create_ingredient(&repository, candidate("citric acid", RiskLevel::Low))
                .await
                .unwrap();

        assert_eq!(resolved, winner);
    }

    #[tokio::test]
    async fn blank_names_are_rejected_without_touching_the_catalog() {
        let mut repository = MockIngredientRepository::new();
        repository.expect_find_by_name_case_insensitive().never();
        repository.expect_insert().never();

        let err = find_or_create_ingredient(&repository, candidate("   ", RiskLevel::Low))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidInput(_)));
    }
}
