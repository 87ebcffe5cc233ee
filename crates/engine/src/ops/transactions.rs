//! The transaction rule engine.
//!
//! Checks run in order and short-circuit on the first failure: structural
//! validation, person lookup, category lookup, age rule, scope rule. All of
//! it happens inside one database transaction, so a rejected draft leaves
//! nothing behind.

use std::collections::HashMap;

use sea_orm::{QueryOrder, TransactionTrait, prelude::*};
use serde::{Deserialize, Serialize};

use super::with_tx;
use crate::{
    Category, Engine, EngineError, MoneyCents, Person, ResultEngine, Transaction, TransactionKind,
    categories, people, transactions,
};

/// A proposed transaction, before the rule engine has admitted it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionDraft {
    pub description: String,
    pub value: MoneyCents,
    pub kind: TransactionKind,
    pub person_id: i32,
    pub category_id: i32,
}

/// A stored transaction decorated with its resolved person and category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub transaction: Transaction,
    pub person: Person,
    pub category: Category,
}

impl Engine {
    /// Runs the business rules against `draft` and, if every check passes,
    /// persists and returns the new transaction.
    pub async fn new_transaction(&self, draft: TransactionDraft) -> ResultEngine<Transaction> {
        let description = transactions::validate(&draft.description, draft.value)?;

        with_tx!(self, |db_tx| {
            let person = people::Entity::find_by_id(draft.person_id)
                .one(&db_tx)
                .await?
                .map(Person::from)
                .ok_or_else(|| EngineError::KeyNotFound("person not exists".to_string()))?;

            let category = categories::Entity::find_by_id(draft.category_id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound("category not exists".to_string()))
                .and_then(Category::try_from)?;

            if !person.is_adult() && draft.kind == TransactionKind::Income {
                return Err(EngineError::DomainRule(
                    "minors may only register expenses".to_string(),
                ));
            }

            if !category.scope.accepts(draft.kind) {
                return Err(EngineError::DomainRule(format!(
                    "category '{}' does not accept {} transactions",
                    category.description,
                    draft.kind.as_str()
                )));
            }

            let model = transactions::new_active(
                description,
                draft.value,
                draft.kind,
                person.id,
                category.id,
            )
            .insert(&db_tx)
            .await?;

            tracing::info!(
                id = model.id,
                kind = draft.kind.as_str(),
                person_id = person.id,
                category_id = category.id,
                "transaction created"
            );
            Transaction::try_from(model)
        })
    }

    /// Lists every transaction, ordered by id, each with its resolved person
    /// and category.
    pub async fn transactions(&self) -> ResultEngine<Vec<TransactionRecord>> {
        let tx_models = transactions::Entity::find()
            .order_by_asc(transactions::Column::Id)
            .all(&self.database)
            .await?;

        let people_by_id: HashMap<i32, Person> = people::Entity::find()
            .all(&self.database)
            .await?
            .into_iter()
            .map(|model| (model.id, Person::from(model)))
            .collect();

        let categories_by_id: HashMap<i32, Category> = categories::Entity::find()
            .all(&self.database)
            .await?
            .into_iter()
            .map(|model| Category::try_from(model).map(|category| (category.id, category)))
            .collect::<ResultEngine<_>>()?;

        let mut records = Vec::with_capacity(tx_models.len());
        for model in tx_models {
            let transaction = Transaction::try_from(model)?;
            let person = people_by_id
                .get(&transaction.person_id)
                .cloned()
                .ok_or_else(|| EngineError::KeyNotFound("person not exists".to_string()))?;
            let category = categories_by_id
                .get(&transaction.category_id)
                .cloned()
                .ok_or_else(|| EngineError::KeyNotFound("category not exists".to_string()))?;
            records.push(TransactionRecord {
                transaction,
                person,
                category,
            });
        }
        Ok(records)
    }

    /// Deletes a transaction by id.
    pub async fn delete_transaction(&self, id: i32) -> ResultEngine<()> {
        let result = transactions::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::KeyNotFound(
                "transaction not exists".to_string(),
            ));
        }
        tracing::info!(id, "transaction deleted");
        Ok(())
    }
}
