//! Stored plan queries.

use std::str::FromStr;

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Plan, PlanListing, PlanRecord, PlanSource, SavedPlan},
};

const INSERT_PLAN_SQL: &str = "INSERT INTO plans (goal, domain, timeline_weeks, total_tasks, complexity, source, remote_id, body, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const UPSERT_LAST_PLAN_SQL: &str =
    "INSERT OR REPLACE INTO last_plan (slot, plan_id, saved_at) VALUES (1, ?1, ?2)";
const SELECT_PLAN_SQL: &str =
    "SELECT id, source, remote_id, created_at, body FROM plans WHERE id = ?1";
const SELECT_LAST_PLAN_SQL: &str = "SELECT p.id, p.body, l.saved_at FROM last_plan l JOIN plans p ON p.id = l.plan_id WHERE l.slot = 1";
const DELETE_LAST_PLAN_SQL: &str = "DELETE FROM last_plan WHERE slot = 1";
const LIST_PLANS_SQL: &str = "SELECT id, goal, domain, timeline_weeks, total_tasks, complexity, source, created_at FROM plans ORDER BY id DESC LIMIT ?1";

/// Converts a parse failure in column `index` into a rusqlite conversion error.
fn conversion_error<E>(index: usize, error: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(error))
}

fn invalid_data(index: usize, message: String) -> rusqlite::Error {
    conversion_error(
        index,
        std::io::Error::new(std::io::ErrorKind::InvalidData, message),
    )
}

fn parse_enum<T: FromStr<Err = String>>(row: &Row<'_>, index: usize) -> rusqlite::Result<T> {
    let raw: String = row.get(index)?;
    raw.parse::<T>().map_err(|e| invalid_data(index, e))
}

fn parse_timestamp(row: &Row<'_>, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| conversion_error(index, e))
}

fn parse_body(row: &Row<'_>, index: usize) -> rusqlite::Result<Plan> {
    let body: String = row.get(index)?;
    serde_json::from_str(&body).map_err(|e| conversion_error(index, e))
}

impl super::Database {
    /// Stores a plan and marks it as the last generated plan.
    pub fn create_plan(
        &mut self,
        plan: &Plan,
        source: PlanSource,
        remote_id: Option<&str>,
        now: Timestamp,
    ) -> Result<PlanRecord> {
        let body = serde_json::to_string(plan)?;
        let now_str = now.to_string();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                plan.goal,
                plan.domain.as_str(),
                plan.timeline_weeks,
                plan.tasks.len() as i64,
                plan.complexity.as_str(),
                source.as_str(),
                remote_id,
                body,
                &now_str,
            ],
        )
        .db_context("Failed to insert plan")?;

        let id = tx.last_insert_rowid() as u64;

        tx.execute(UPSERT_LAST_PLAN_SQL, params![id as i64, &now_str])
            .db_context("Failed to record last plan")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(PlanRecord {
            id,
            source,
            remote_id: remote_id.map(String::from),
            created_at: now,
            plan: plan.clone(),
        })
    }

    /// Retrieves a stored plan by its ID.
    pub fn get_plan(&self, id: u64) -> Result<Option<PlanRecord>> {
        self.connection
            .query_row(SELECT_PLAN_SQL, params![id as i64], |row| {
                Ok(PlanRecord {
                    id: row.get::<_, i64>(0)? as u64,
                    source: parse_enum(row, 1)?,
                    remote_id: row.get(2)?,
                    created_at: parse_timestamp(row, 3)?,
                    plan: parse_body(row, 4)?,
                })
            })
            .optional()
            .db_context("Failed to query plan")
    }

    /// Lists stored plans, newest first.
    pub fn list_plans(&self, limit: u32) -> Result<Vec<PlanListing>> {
        let mut stmt = self
            .connection
            .prepare(LIST_PLANS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![limit], |row| {
                Ok(PlanListing {
                    id: row.get::<_, i64>(0)? as u64,
                    goal: row.get(1)?,
                    domain: parse_enum(row, 2)?,
                    timeline_weeks: row.get(3)?,
                    total_tasks: row.get::<_, i64>(4)? as usize,
                    complexity: parse_enum(row, 5)?,
                    source: parse_enum(row, 6)?,
                    created_at: parse_timestamp(row, 7)?,
                })
            })
            .db_context("Failed to query plans")?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read plan row")
    }

    /// Returns the last generated plan regardless of its age.
    pub fn last_plan(&self) -> Result<Option<SavedPlan>> {
        self.connection
            .query_row(SELECT_LAST_PLAN_SQL, [], |row| {
                Ok(SavedPlan {
                    id: row.get::<_, i64>(0)? as u64,
                    plan: parse_body(row, 1)?,
                    timestamp: parse_timestamp(row, 2)?,
                })
            })
            .optional()
            .db_context("Failed to query last plan")
    }

    /// Forgets the last generated plan. Stored plans are kept.
    ///
    /// Returns whether there was a last plan to forget.
    pub fn clear_last_plan(&self) -> Result<bool> {
        let removed = self
            .connection
            .execute(DELETE_LAST_PLAN_SQL, [])
            .db_context("Failed to clear last plan")?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::Database,
        generator::{DemoPlanGenerator, FixedClock},
    };

    fn sample_plan(goal: &str, weeks: u32) -> Plan {
        DemoPlanGenerator::with_clock(FixedClock(
            "2024-03-01T09:30:00Z".parse::<Timestamp>().unwrap(),
        ))
        .generate(goal, weeks)
    }

    fn at(ts: &str) -> Timestamp {
        ts.parse().unwrap()
    }

    #[test]
    fn test_create_and_get_plan() {
        let mut db = Database::in_memory().unwrap();
        let plan = sample_plan("Build a website for the bakery", 8);

        let record = db
            .create_plan(&plan, PlanSource::Local, None, at("2024-03-01T10:00:00Z"))
            .unwrap();
        assert_eq!(record.id, 1);

        let loaded = db.get_plan(record.id).unwrap().unwrap();
        assert_eq!(loaded, record);
        assert_eq!(loaded.plan, plan);
        assert!(db.get_plan(99).unwrap().is_none());
    }

    #[test]
    fn test_last_plan_tracks_newest() {
        let mut db = Database::in_memory().unwrap();
        assert!(db.last_plan().unwrap().is_none());

        let first = sample_plan("Plan a team meeting", 2);
        let second = sample_plan("Promote the brand online", 10);
        db.create_plan(&first, PlanSource::Local, None, at("2024-03-01T10:00:00Z"))
            .unwrap();
        db.create_plan(&second, PlanSource::Remote, Some("42"), at("2024-03-02T10:00:00Z"))
            .unwrap();

        let last = db.last_plan().unwrap().unwrap();
        assert_eq!(last.id, 2);
        assert_eq!(last.plan, second);
        assert_eq!(last.timestamp, at("2024-03-02T10:00:00Z"));

        assert!(db.clear_last_plan().unwrap());
        assert!(db.last_plan().unwrap().is_none());
        assert!(!db.clear_last_plan().unwrap());
        // Stored plans survive a reset
        assert!(db.get_plan(2).unwrap().is_some());
    }

    #[test]
    fn test_list_plans_newest_first() {
        let mut db = Database::in_memory().unwrap();
        for (i, goal) in ["Write a cookbook", "Develop an app", "Host a party"]
            .iter()
            .enumerate()
        {
            let ts = Timestamp::from_second(1_700_000_000 + i as i64 * 60).unwrap();
            db.create_plan(&sample_plan(goal, 6), PlanSource::Local, None, ts)
                .unwrap();
        }

        let listed = db.list_plans(2).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].goal, "Host a party");
        assert_eq!(listed[1].goal, "Develop an app");
        assert_eq!(listed[1].total_tasks, 6);
        assert_eq!(listed[1].source, PlanSource::Local);
    }
}
