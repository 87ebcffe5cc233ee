//! Transaction primitives.
//!
//! A `Transaction` records a single income or expense for one person in one
//! category. Rows are created only through the rule engine
//! ([`Engine::new_transaction`]) and are immutable apart from deletion.
//!
//! [`Engine::new_transaction`]: crate::Engine::new_transaction

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::{EngineError, MoneyCents, ResultEngine};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            other => Err(EngineError::Validation(format!(
                "invalid transaction kind: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i32,
    pub description: String,
    pub value: MoneyCents,
    pub kind: TransactionKind,
    pub person_id: i32,
    pub category_id: i32,
}

/// Checks the structural constraints on a transaction's fields and returns
/// the trimmed description. Business rules are not checked here.
pub(crate) fn validate(description: &str, value: MoneyCents) -> ResultEngine<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(EngineError::Validation(
            "description must not be empty".to_string(),
        ));
    }
    if !value.is_positive() {
        return Err(EngineError::Validation(
            "value must be greater than zero".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
    pub value_cents: i64,
    pub kind: String,
    pub person_id: i32,
    pub category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::people::Entity",
        from = "Column::PersonId",
        to = "super::people::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    People,
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Categories,
}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::People.def()
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Transaction {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            description: model.description,
            value: MoneyCents::new(model.value_cents),
            kind: TransactionKind::try_from(model.kind.as_str())?,
            person_id: model.person_id,
            category_id: model.category_id,
        })
    }
}

pub(crate) fn new_active(
    description: String,
    value: MoneyCents,
    kind: TransactionKind,
    person_id: i32,
    category_id: i32,
) -> ActiveModel {
    ActiveModel {
        id: ActiveValue::NotSet,
        description: ActiveValue::Set(description),
        value_cents: ActiveValue::Set(value.cents()),
        kind: ActiveValue::Set(kind.as_str().to_string()),
        person_id: ActiveValue::Set(person_id),
        category_id: ActiveValue::Set(category_id),
    }
}
