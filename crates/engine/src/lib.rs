//! Business core of the finance tracker.
//!
//! The [`Engine`] owns the database handle and exposes every operation the
//! API surface needs: person and category registration, the transaction rule
//! engine, and the report aggregator. All multi-step operations run inside a
//! single database transaction, committed on success and rolled back on any
//! failure.

use sea_orm::DatabaseConnection;

pub use categories::{Category, CategoryScope};
pub use error::EngineError;
pub use money::MoneyCents;
pub use ops::reports::{GrandTotal, Report, ReportRow, Totals};
pub use ops::transactions::{TransactionDraft, TransactionRecord};
pub use people::Person;
pub use transactions::{Transaction, TransactionKind};

pub mod categories;
mod error;
mod money;
mod ops;
pub mod people;
pub mod transactions;

type ResultEngine<T> = Result<T, EngineError>;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> Engine {
        Engine {
            database: self.database,
        }
    }
}
