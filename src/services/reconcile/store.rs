//! Write-back seam for accepted matches.

use sqlx::SqlitePool;
use std::future::Future;

use crate::database::member_repo;
use crate::types::errors::{CommandError, CommandResult};

/// Persists `member → folder` links. Writes must be idempotent per member.
pub trait MemberFolderStore {
    fn upsert_member_folder(
        &self,
        member_id: &str,
        folder_id: &str,
    ) -> impl Future<Output = CommandResult<()>> + Send;
}

/// Roster database backed store.
#[derive(Clone)]
pub struct SqliteMemberStore {
    pool: SqlitePool,
}

impl SqliteMemberStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl MemberFolderStore for SqliteMemberStore {
    async fn upsert_member_folder(&self, member_id: &str, folder_id: &str) -> CommandResult<()> {
        let updated = member_repo::set_member_folder(&self.pool, member_id, folder_id).await?;
        if !updated {
            return Err(CommandError::NotFound(format!("member {member_id}")));
        }
        Ok(())
    }
}
