use sea_orm::DatabaseConnection;

use crate::{EngineError, ResultEngine};

mod bills;

/// Evaluate `$body` against a fresh transaction `$tx`; commit only when it is `Ok`.
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

/// Bill store backed by a sea-orm connection.
#[derive(Debug, Clone)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

#[derive(Default)]
pub struct EngineBuilder {
    database: Option<DatabaseConnection>,
}

impl EngineBuilder {
    pub fn database(mut self, database: DatabaseConnection) -> EngineBuilder {
        self.database = Some(database);
        self
    }

    /// Fails with [`EngineError::MissingDatabase`] when no connection was given.
    /// The schema must already be migrated.
    pub fn build(self) -> ResultEngine<Engine> {
        let database = self.database.ok_or(EngineError::MissingDatabase)?;
        Ok(Engine { database })
    }
}
