//! Storage layer for daily-rollover
//!
//! JSON file storage for expenses with atomic writes. The budget services
//! never touch storage; callers reduce stored expenses to a spend map first.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::RolloverPaths;
use crate::error::RolloverError;

/// Main storage coordinator
pub struct Storage {
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: RolloverPaths) -> Result<Self, RolloverError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
        })
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), RolloverError> {
        self.expenses.load()
    }
}
