use sea_orm::{QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use super::with_tx;
use crate::{Engine, EngineError, Person, ResultEngine, people, transactions};

impl Engine {
    /// Registers a new person.
    pub async fn new_person(&self, name: &str, age: i32) -> ResultEngine<Person> {
        let name = people::validate(name, age)?;
        let model = people::new_active(name, age).insert(&self.database).await?;
        tracing::info!(id = model.id, "person created");
        Ok(Person::from(model))
    }

    /// Lists every person, ordered by id.
    pub async fn people(&self) -> ResultEngine<Vec<Person>> {
        let models = people::Entity::find()
            .order_by_asc(people::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Person::from).collect())
    }

    /// Returns a person by id.
    pub async fn person(&self, id: i32) -> ResultEngine<Person> {
        let model = people::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("person not exists".to_string()))?;
        Ok(Person::from(model))
    }

    /// Deletes a person and every transaction that references it, in one
    /// database transaction.
    pub async fn delete_person(&self, id: i32) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            people::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound("person not exists".to_string()))?;

            let removed = transactions::Entity::delete_many()
                .filter(transactions::Column::PersonId.eq(id))
                .exec(&db_tx)
                .await?;
            people::Entity::delete_by_id(id).exec(&db_tx).await?;

            tracing::info!(
                id,
                cascaded = removed.rows_affected,
                "person deleted"
            );
            Ok(())
        })
    }
}
