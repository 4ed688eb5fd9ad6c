use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::services::matcher::Member;

/// Roster row stored in the `members` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MemberRow {
    pub id: String,
    pub given_name: String,
    pub surname: String,
    pub drive_folder_id: Option<String>,
}

impl MemberRow {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name.trim(), self.surname.trim())
            .trim()
            .to_string()
    }
}

impl From<MemberRow> for Member {
    fn from(row: MemberRow) -> Self {
        Member {
            full_name: row.full_name(),
            id: row.id,
            existing_folder_id: row.drive_folder_id,
        }
    }
}

// ── Roster ──────────────────────────────────────────────────

/// All members in document order: surname, given name, then id.
pub async fn list_members(pool: &SqlitePool) -> Result<Vec<MemberRow>, sqlx::Error> {
    let rows = sqlx::query_as::<_, MemberRow>(
        "SELECT id, given_name, surname, drive_folder_id FROM members ORDER BY surname, given_name, id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Insert or replace a roster row.
pub async fn upsert_member(pool: &SqlitePool, member: &MemberRow) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT OR REPLACE INTO members (id, given_name, surname, drive_folder_id, updated_at)
         VALUES (?, ?, ?, ?, CURRENT_TIMESTAMP)",
    )
    .bind(&member.id)
    .bind(&member.given_name)
    .bind(&member.surname)
    .bind(&member.drive_folder_id)
    .execute(pool)
    .await?;
    Ok(())
}

// ── Folder link ─────────────────────────────────────────────

/// Link a member to a storage folder. Returns `false` if the member does not exist.
pub async fn set_member_folder(
    pool: &SqlitePool,
    member_id: &str,
    folder_id: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE members SET drive_folder_id = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
    )
    .bind(folder_id)
    .bind(member_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn get_member_folder(
    pool: &SqlitePool,
    member_id: &str,
) -> Result<Option<String>, sqlx::Error> {
    let row: Option<(Option<String>,)> =
        sqlx::query_as("SELECT drive_folder_id FROM members WHERE id = ?")
            .bind(member_id)
            .fetch_optional(pool)
            .await?;
    Ok(row.and_then(|r| r.0))
}

#[cfg(test)]
#[path = "tests/member_repo_tests.rs"]
mod tests;
