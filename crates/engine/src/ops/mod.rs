use sea_orm::DatabaseConnection;

mod accounts;
mod expenses;

/// Evaluate `$body` with `$tx` bound to a fresh transaction.
///
/// `Ok` commits; `Err` (or an early return) drops `$tx`, which rolls back.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let outcome = $body;
        if outcome.is_ok() {
            $tx.commit().await?;
        }
        outcome
    }};
}

pub(crate) use with_tx;

/// The record store.
///
/// Owns the database connection; every operation reads or writes through it,
/// so separate `Engine`s over separate databases are fully isolated.
#[derive(Debug, Clone)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// Collects what an [`Engine`] needs before it can serve requests.
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Connection with the ledger schema already migrated.
    pub fn database(mut self, database: DatabaseConnection) -> Self {
        self.database = database;
        self
    }

    /// Check the connection answers, then hand out the store.
    pub async fn build(self) -> crate::ResultEngine<Engine> {
        self.database.ping().await?;
        tracing::debug!("ledger store ready");
        Ok(Engine {
            database: self.database,
        })
    }
}
