//! Category registry.
//!
//! A category declares which transaction kinds it accepts through its
//! [`CategoryScope`]. Categories are immutable and cannot be deleted.

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine, transactions::TransactionKind};

/// Which transaction kinds a category accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryScope {
    Expense,
    Income,
    Both,
}

impl CategoryScope {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
            Self::Both => "both",
        }
    }

    /// Returns `true` if a transaction of `kind` may use this category.
    #[must_use]
    pub fn accepts(self, kind: TransactionKind) -> bool {
        match self {
            Self::Both => true,
            Self::Expense => kind == TransactionKind::Expense,
            Self::Income => kind == TransactionKind::Income,
        }
    }
}

impl TryFrom<&str> for CategoryScope {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            "both" => Ok(Self::Both),
            other => Err(EngineError::Validation(format!(
                "invalid category scope: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub description: String,
    pub scope: CategoryScope,
}

/// Checks the structural constraints on a category's fields and returns the
/// trimmed description.
pub(crate) fn validate(description: &str) -> ResultEngine<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(EngineError::Validation(
            "description must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
    pub scope: String,
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

impl TryFrom<Model> for Category {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            description: model.description,
            scope: CategoryScope::try_from(model.scope.as_str())?,
        })
    }
}

pub(crate) fn new_active(description: String, scope: CategoryScope) -> ActiveModel {
    ActiveModel {
        id: ActiveValue::NotSet,
        description: ActiveValue::Set(description),
        scope: ActiveValue::Set(scope.as_str().to_string()),
    }
}
