use sea_orm::{
    ActiveValue, ConnectionTrait, QueryFilter, SqlErr, TransactionTrait, prelude::*,
};

use crate::{AccountId, EngineError, ResultEngine, accounts, credentials};

use super::{Engine, with_tx};

impl Engine {
    /// Register a new account and return its id.
    ///
    /// The name must be unique. Two concurrent registrations with the same
    /// name cannot both succeed: the loser hits the unique index and gets
    /// [`EngineError::ExistingKey`] like a sequential duplicate would.
    pub async fn create_account(&self, name: &str, secret: &str) -> ResultEngine<AccountId> {
        if name.trim().is_empty() {
            return Err(EngineError::MissingField("username".to_string()));
        }
        if secret.is_empty() {
            return Err(EngineError::MissingField("password".to_string()));
        }
        let secret_hash = credentials::hash_secret(secret)?;

        with_tx!(self, |db_tx| {
            let exists = accounts::Entity::find()
                .filter(accounts::Column::Name.eq(name))
                .one(&db_tx)
                .await?
                .is_some();
            if exists {
                return Err(EngineError::ExistingKey(name.to_string()));
            }

            let active = accounts::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                secret_hash: ActiveValue::Set(secret_hash),
                ..Default::default()
            };
            let model = active
                .insert(&db_tx)
                .await
                .map_err(|err| duplicate_name_or(err, name))?;

            tracing::info!(account_id = model.id, "account registered");
            Ok(model.id)
        })
    }

    /// Check a name/secret pair and return the matching account id.
    ///
    /// Unknown names and wrong secrets both fail with
    /// [`EngineError::InvalidCredentials`], after the same hashing work.
    pub async fn authenticate(&self, name: &str, secret: &str) -> ResultEngine<AccountId> {
        if name.is_empty() || secret.is_empty() {
            return Err(EngineError::InvalidCredentials);
        }

        let account = accounts::Entity::find()
            .filter(accounts::Column::Name.eq(name))
            .one(&self.database)
            .await?;

        match account {
            Some(account) => {
                credentials::verify_secret(secret, &account.secret_hash)?;
                Ok(account.id)
            }
            None => Err(credentials::reject_unknown(secret)),
        }
    }

    pub(super) async fn require_account<C>(
        &self,
        db: &C,
        account_id: AccountId,
    ) -> ResultEngine<()>
    where
        C: ConnectionTrait,
    {
        accounts::Entity::find_by_id(account_id)
            .one(db)
            .await?
            .map(|_| ())
            .ok_or_else(|| EngineError::KeyNotFound("account".to_string()))
    }
}

fn duplicate_name_or(err: DbErr, name: &str) -> EngineError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => EngineError::ExistingKey(name.to_string()),
        _ => EngineError::Database(err),
    }
}
