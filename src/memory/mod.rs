//! Simulated memory for the TinyOS shell
//!
//! A fixed array of signed integer cells, zeroed at start and addressed by a
//! bounds-checked index. Out-of-range accesses are rejected without touching
//! any cell.

use crate::error::{Result, ShellError};

/// Number of addressable cells
pub const MEMORY_SIZE: usize = 100;

/// Memory store owned by the executor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryStore {
    cells: [i32; MEMORY_SIZE],
}

impl MemoryStore {
    /// Create a zero-initialised store
    pub fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Write `value` at `index`
    pub fn store(&mut self, index: i32, value: i32) -> Result<()> {
        let slot = Self::slot(index)?;
        self.cells[slot] = value;
        Ok(())
    }

    /// Read the value at `index`; cells never written hold 0
    pub fn load(&self, index: i32) -> Result<i32> {
        let slot = Self::slot(index)?;
        Ok(self.cells[slot])
    }

    fn slot(index: i32) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&slot| slot < MEMORY_SIZE)
            .ok_or(ShellError::InvalidIndex(index))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_memory_starts_zeroed() {
        let mem = MemoryStore::new();
        assert_eq!(mem.cells.len(), 100);
        assert!(mem.cells.iter().all(|&cell| cell == 0));
        assert_eq!(mem.load(0).unwrap(), 0);
        assert_eq!(mem.load(99).unwrap(), 0);
    }

    #[test]
    fn test_store_load() {
        let mut mem = MemoryStore::new();

        mem.store(5, 42).unwrap();
        assert_eq!(mem.load(5).unwrap(), 42);

        // Overwrite keeps the latest value
        mem.store(5, -7).unwrap();
        assert_eq!(mem.load(5).unwrap(), -7);
    }

    #[test]
    fn test_boundaries() {
        let mut mem = MemoryStore::new();

        mem.store(0, 1).unwrap();
        mem.store(99, 2).unwrap();
        assert_eq!(mem.load(0).unwrap(), 1);
        assert_eq!(mem.load(99).unwrap(), 2);

        assert!(matches!(mem.store(100, 3), Err(ShellError::InvalidIndex(100))));
        assert!(matches!(mem.load(-1), Err(ShellError::InvalidIndex(-1))));
        assert!(matches!(mem.load(i32::MIN), Err(ShellError::InvalidIndex(_))));
    }

    #[test]
    fn test_invalid_index_message() {
        let mem = MemoryStore::new();
        let err = mem.load(250).unwrap_err();
        assert_eq!(err.to_string(), "Invalid memory index.");
    }

    // Property-Based Tests

    #[quickcheck]
    fn prop_store_then_load_roundtrip(index: u8, value: i32) -> TestResult {
        let index = i32::from(index);
        if index >= MEMORY_SIZE as i32 {
            return TestResult::discard();
        }

        let mut mem = MemoryStore::new();
        mem.store(index, value).unwrap();
        TestResult::from_bool(mem.load(index).unwrap() == value)
    }

    #[quickcheck]
    fn prop_invalid_index_never_mutates(index: i32, value: i32) -> TestResult {
        if (0..MEMORY_SIZE as i32).contains(&index) {
            return TestResult::discard();
        }

        let mut mem = MemoryStore::new();
        mem.store(3, 11).unwrap();
        let before = mem.clone();

        let stored = mem.store(index, value);
        let loaded = mem.load(index);
        TestResult::from_bool(stored.is_err() && loaded.is_err() && mem == before)
    }
}
