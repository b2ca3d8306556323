//! Named counters backing business-code allocation.

use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ConnectionTrait, DbErr, EntityTrait,
};

/// Repository for the `code_sequence` table.
pub struct CodeSequenceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CodeSequenceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns whether the named sequence has been created.
    pub async fn exists(&self, name: &str) -> Result<bool, DbErr> {
        Ok(entity::prelude::CodeSequence::find_by_id(name.to_string())
            .one(self.db)
            .await?
            .is_some())
    }

    /// Atomically increments the named sequence and returns the new value.
    ///
    /// A missing sequence is created with the value `seed + 1`, so the first call
    /// continues after codes that were issued before the sequence existed. The
    /// insert-or-increment is a single statement, so concurrent callers never observe
    /// the same value.
    ///
    /// # Arguments
    /// - `name` - Sequence name
    /// - `seed` - Highest value already in use when the sequence is created
    ///
    /// # Returns
    /// - `Ok(i64)` - Newly allocated value
    /// - `Err(DbErr)` - Database error during the upsert
    pub async fn next_value(&self, name: &str, seed: i64) -> Result<i64, DbErr> {
        let sequence =
            entity::prelude::CodeSequence::insert(entity::code_sequence::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                value: ActiveValue::Set(seed + 1),
            })
            .on_conflict(
                OnConflict::column(entity::code_sequence::Column::Name)
                    .value(
                        entity::code_sequence::Column::Value,
                        Expr::cust("\"value\" + 1"),
                    )
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        Ok(sequence.value)
    }
}
