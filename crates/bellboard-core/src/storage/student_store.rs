//! Persistence, import and export of the personal schedule.

use std::path::Path;

use super::database::Database;
use crate::error::CoreError;
use crate::student::StudentSchedule;

pub const STUDENT_SCHEDULE_KEY: &str = "student_schedule";

pub struct StudentStore {
    db: Database,
}

impl StudentStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Open the store in the default data directory.
    pub fn open() -> Result<Self, CoreError> {
        Ok(Self::new(Database::open()?))
    }

    /// The stored schedule, or a blank week when nothing usable is stored.
    ///
    /// Never fails: unreadable or invalid data is logged and replaced by
    /// [`StudentSchedule::blank`].
    pub fn load(&self) -> StudentSchedule {
        let stored = match self.db.kv_get(STUDENT_SCHEDULE_KEY) {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read personal schedule");
                return StudentSchedule::blank();
            }
        };

        match stored.as_deref().map(StudentSchedule::from_json_str) {
            Some(Ok(schedule)) => schedule,
            Some(Err(err)) => {
                tracing::warn!(error = %err, "stored personal schedule is invalid, starting blank");
                StudentSchedule::blank()
            }
            None => StudentSchedule::blank(),
        }
    }

    pub fn save(&self, schedule: &StudentSchedule) -> Result<(), CoreError> {
        let json = serde_json::to_string(schedule)?;
        self.db.kv_set(STUDENT_SCHEDULE_KEY, &json)?;
        tracing::debug!("personal schedule saved");
        Ok(())
    }

    /// Discard the stored schedule and return the blank one.
    pub fn reset(&self) -> Result<StudentSchedule, CoreError> {
        self.db.kv_delete(STUDENT_SCHEDULE_KEY)?;
        Ok(StudentSchedule::blank())
    }

    /// Write the current schedule to `path` as pretty-printed JSON.
    pub fn export_to(&self, path: &Path) -> Result<(), CoreError> {
        let json = self.load().to_json_pretty()?;
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), "personal schedule exported");
        Ok(())
    }

    /// Replace the stored schedule with the contents of `path`.
    ///
    /// The file is validated before anything is written; a rejected file
    /// leaves the stored schedule untouched.
    pub fn import_from(&self, path: &Path) -> Result<StudentSchedule, CoreError> {
        let content = std::fs::read_to_string(path)?;
        let schedule = StudentSchedule::from_json_str(&content)?;
        self.save(&schedule)?;
        tracing::info!(path = %path.display(), "personal schedule imported");
        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> StudentStore {
        StudentStore::new(Database::open_memory().unwrap())
    }

    #[test]
    fn empty_store_loads_blank() {
        assert_eq!(store().load(), StudentSchedule::blank());
    }

    #[test]
    fn save_then_load() {
        let store = store();
        let mut schedule = StudentSchedule::blank();
        schedule.set_entry("Wednesday", "Mod 7", "Spanish II", "301").unwrap();
        store.save(&schedule).unwrap();
        assert_eq!(store.load(), schedule);
    }

    #[test]
    fn invalid_stored_data_loads_blank() {
        let store = store();
        store.db.kv_set(STUDENT_SCHEDULE_KEY, r#"{"days":{}}"#).unwrap();
        assert_eq!(store.load(), StudentSchedule::blank());
    }

    #[test]
    fn reset_clears() {
        let store = store();
        let mut schedule = StudentSchedule::blank();
        schedule.set_shield_room("9");
        store.save(&schedule).unwrap();
        store.reset().unwrap();
        assert_eq!(store.load().shield_room, "");
    }
}
