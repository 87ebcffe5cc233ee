//! Person registry.
//!
//! A `Person` owns transactions: deleting a person removes every transaction
//! referencing it, in the same database transaction.

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

/// Upper bound for a person's age, inclusive.
pub const MAX_AGE: i32 = 120;

/// Age below which income transactions are rejected.
pub const ADULT_AGE: i32 = 18;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

impl Person {
    /// Returns `true` if the person may register income transactions.
    #[must_use]
    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }
}

/// Checks the structural constraints on a person's fields and returns the
/// trimmed name.
pub(crate) fn validate(name: &str, age: i32) -> ResultEngine<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(EngineError::Validation(
            "name must not be empty".to_string(),
        ));
    }
    if !(0..=MAX_AGE).contains(&age) {
        return Err(EngineError::Validation(format!(
            "age must be between 0 and {MAX_AGE}"
        )));
    }
    Ok(trimmed.to_string())
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Person {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            age: model.age,
        }
    }
}

pub(crate) fn new_active(name: String, age: i32) -> ActiveModel {
    ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name),
        age: ActiveValue::Set(age),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_trims_name() {
        assert_eq!(validate("  Maria  ", 30).unwrap(), "Maria");
    }

    #[test]
    fn validate_rejects_blank_name() {
        assert_eq!(
            validate("   ", 30),
            Err(EngineError::Validation(
                "name must not be empty".to_string()
            ))
        );
    }

    #[test]
    fn validate_rejects_age_out_of_range() {
        assert!(validate("Maria", -1).is_err());
        assert!(validate("Maria", 121).is_err());
        assert!(validate("Maria", 0).is_ok());
        assert!(validate("Maria", 120).is_ok());
    }

    #[test]
    fn adult_boundary_is_eighteen() {
        let minor = Person {
            id: 1,
            name: "Ana".to_string(),
            age: 17,
        };
        let adult = Person { age: 18, ..minor.clone() };
        assert!(!minor.is_adult());
        assert!(adult.is_adult());
    }
}
