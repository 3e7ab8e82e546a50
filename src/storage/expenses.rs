//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json and reducing them to
//! per-day spend totals for the budget services.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::error::RolloverError;
use crate::models::{DailySpendMap, Expense};

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<Uuid, Expense>>,
}

fn lock_error(e: impl std::fmt::Display) -> RolloverError {
    RolloverError::Storage(format!("Failed to acquire lock: {}", e))
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), RolloverError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(lock_error)?;
        data.clear();
        for expense in file_data.expenses {
            data.insert(expense.id, expense);
        }

        info!(count = data.len(), path = %self.path.display(), "loaded expenses");
        Ok(())
    }

    /// Save expenses to disk, oldest first
    pub fn save(&self) -> Result<(), RolloverError> {
        let expenses = self.get_all()?;
        write_json_atomic(&self.path, &ExpenseData { expenses })
    }

    /// Add a validated expense
    pub fn insert(&self, expense: Expense) -> Result<(), RolloverError> {
        expense.validate()?;
        let mut data = self.data.write().map_err(lock_error)?;
        data.insert(expense.id, expense);
        Ok(())
    }

    /// Remove an expense by id, returning it
    pub fn remove(&self, id: Uuid) -> Result<Expense, RolloverError> {
        let mut data = self.data.write().map_err(lock_error)?;
        data.remove(&id)
            .ok_or_else(|| RolloverError::expense_not_found(id.to_string()))
    }

    /// All expenses sorted by date
    pub fn get_all(&self) -> Result<Vec<Expense>, RolloverError> {
        let data = self.data.read().map_err(lock_error)?;
        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        Ok(expenses)
    }

    /// Expenses dated within `[start, end]`
    pub fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>, RolloverError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|e| e.date >= start && e.date <= end)
            .collect())
    }

    /// Per-day spend totals for `[start, end]`
    pub fn spend_map(&self, start: NaiveDate, end: NaiveDate) -> Result<DailySpendMap, RolloverError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(DailySpendMap::from_expenses(data.values(), start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_insert_save_and_reload() {
        let (_temp_dir, repo) = create_repo();
        let expense = Expense::new(date(2025, 1, 2), 12.0, "Lunch");
        let id = expense.id;
        repo.insert(expense).unwrap();
        repo.save().unwrap();

        let reloaded = ExpenseRepository::new(repo.path.clone());
        reloaded.load().unwrap();
        let expenses = reloaded.get_all().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].id, id);
        assert_eq!(expenses[0].description, "Lunch");
    }

    #[test]
    fn test_insert_rejects_negative() {
        let (_temp_dir, repo) = create_repo();
        let err = repo.insert(Expense::new(date(2025, 1, 2), -3.0, "")).unwrap_err();
        assert!(err.is_validation());
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let (_temp_dir, repo) = create_repo();
        assert!(repo.remove(Uuid::new_v4()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_spend_map_and_range() {
        let (_temp_dir, repo) = create_repo();
        repo.insert(Expense::new(date(2025, 1, 2), 12.0, "a")).unwrap();
        repo.insert(Expense::new(date(2025, 1, 2), 8.0, "b")).unwrap();
        repo.insert(Expense::new(date(2025, 1, 9), 5.0, "c")).unwrap();

        let map = repo.spend_map(date(2025, 1, 1), date(2025, 1, 5)).unwrap();
        assert_eq!(map.spent_on(date(2025, 1, 2)), 20.0);
        assert_eq!(map.spent_on(date(2025, 1, 9)), 0.0);

        let in_range = repo.get_by_date_range(date(2025, 1, 3), date(2025, 1, 31)).unwrap();
        assert_eq!(in_range.len(), 1);
        assert_eq!(in_range[0].amount, 5.0);
    }
}
