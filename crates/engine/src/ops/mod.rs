//! Engine operations, one module per resource.
//!
//! Every multi-step operation goes through [`with_tx!`]: the database
//! transaction commits on success and rolls back (on drop) on any error,
//! so a failed operation leaves no trace.

mod categories;
mod people;
pub(crate) mod reports;
pub(crate) mod transactions;

/// Run a block inside a DB transaction, committing on success and rolling
/// back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;
