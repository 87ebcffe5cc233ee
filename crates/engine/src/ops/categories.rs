use sea_orm::{QueryOrder, prelude::*};

use crate::{Category, CategoryScope, Engine, EngineError, ResultEngine, categories};

impl Engine {
    /// Registers a new category.
    pub async fn new_category(
        &self,
        description: &str,
        scope: CategoryScope,
    ) -> ResultEngine<Category> {
        let description = categories::validate(description)?;
        let model = categories::new_active(description, scope)
            .insert(&self.database)
            .await?;
        tracing::info!(id = model.id, scope = scope.as_str(), "category created");
        Category::try_from(model)
    }

    /// Lists every category, ordered by id.
    pub async fn categories(&self) -> ResultEngine<Vec<Category>> {
        let models = categories::Entity::find()
            .order_by_asc(categories::Column::Id)
            .all(&self.database)
            .await?;
        models.into_iter().map(Category::try_from).collect()
    }

    /// Returns a category by id.
    pub async fn category(&self, id: i32) -> ResultEngine<Category> {
        let model = categories::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("category not exists".to_string()))?;
        Category::try_from(model)
    }
}
