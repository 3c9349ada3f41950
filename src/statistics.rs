//! Cumulative game history: games played, best game, running accuracy.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no games recorded yet")]
pub struct EmptyHistoryError;

/// Immutable summary of one completed round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub correct: u32,
    pub total: u32,
    pub date: DateTime<Utc>,
}

impl GameRecord {
    /// Score as a percentage of this single round.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64 * 100.0
        }
    }
}

/// Durable storage behind the tracker. The sqlite implementation lives in
/// `crate::db`; tests inject an in-memory store.
pub trait RecordStore {
    fn append(&self, record: &GameRecord) -> Result<()>;
    fn read_all(&self) -> Result<Vec<GameRecord>>;
}

/// Append-only aggregate over every completed round.
///
/// History is loaded from the store once at construction and kept in memory;
/// `record` writes through to the store before touching the cache, so a
/// failed append never leaves a phantom entry.
pub struct StatisticsTracker {
    store: Box<dyn RecordStore>,
    history: Vec<GameRecord>,
}

impl StatisticsTracker {
    pub fn new(store: Box<dyn RecordStore>) -> Result<Self> {
        let history = store.read_all()?;
        Ok(Self { store, history })
    }

    /// Append a finished round. Every call appends, identical records included.
    pub fn record(&mut self, record: GameRecord) -> Result<()> {
        self.store.append(&record)?;
        self.history.push(record);
        Ok(())
    }

    pub fn games_count(&self) -> usize {
        self.history.len()
    }

    /// Percentage of correct answers across all recorded rounds, 0 when empty.
    pub fn total_accuracy(&self) -> f64 {
        let total: u64 = self.history.iter().map(|g| g.total as u64).sum();
        if total == 0 {
            return 0.0;
        }
        let correct: u64 = self.history.iter().map(|g| g.correct as u64).sum();
        correct as f64 / total as f64 * 100.0
    }

    /// Record with the highest correct count; ties keep the earliest entry.
    pub fn best_game(&self) -> Result<&GameRecord, EmptyHistoryError> {
        self.history
            .iter()
            .reduce(|best, g| if g.correct > best.correct { g } else { best })
            .ok_or(EmptyHistoryError)
    }
}

/// Volatile store for tests; contents vanish with the process.
#[cfg(test)]
pub(crate) struct MemoryRecordStore {
    records: std::sync::Mutex<Vec<GameRecord>>,
}

#[cfg(test)]
impl MemoryRecordStore {
    pub(crate) fn new() -> Self {
        Self {
            records: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_records(records: Vec<GameRecord>) -> Self {
        Self {
            records: std::sync::Mutex::new(records),
        }
    }
}

#[cfg(test)]
impl RecordStore for MemoryRecordStore {
    fn append(&self, record: &GameRecord) -> Result<()> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<GameRecord>> {
        Ok(self.records.lock().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(correct: u32, total: u32) -> GameRecord {
        GameRecord {
            correct,
            total,
            date: Utc::now(),
        }
    }

    fn tracker() -> StatisticsTracker {
        StatisticsTracker::new(Box::new(MemoryRecordStore::new())).unwrap()
    }

    #[test]
    fn test_empty_history() {
        let stats = tracker();
        assert_eq!(stats.games_count(), 0);
        assert_eq!(stats.total_accuracy(), 0.0);
        assert_eq!(stats.best_game().unwrap_err(), EmptyHistoryError);
    }

    #[test]
    fn test_best_game_and_accuracy() {
        let mut stats = tracker();
        stats.record(record(5, 10)).unwrap();
        stats.record(record(7, 10)).unwrap();

        assert_eq!(stats.games_count(), 2);
        assert_eq!(stats.total_accuracy(), 60.0);

        let best = stats.best_game().unwrap();
        assert_eq!(best.correct, 7);
        assert_eq!(best.total, 10);
    }

    #[test]
    fn test_best_game_tie_keeps_earliest() {
        let mut stats = tracker();
        let first = record(7, 10);
        let earliest = first.date;
        stats.record(first).unwrap();
        stats.record(record(7, 8)).unwrap();

        let best = stats.best_game().unwrap();
        assert_eq!(best.total, 10);
        assert_eq!(best.date, earliest);
    }

    #[test]
    fn test_identical_records_both_count() {
        let mut stats = tracker();
        let g = record(3, 10);
        stats.record(g.clone()).unwrap();
        stats.record(g).unwrap();
        assert_eq!(stats.games_count(), 2);
    }

    #[test]
    fn test_accuracy_is_weighted_average() {
        let mut stats = tracker();
        stats.record(record(9, 10)).unwrap();
        let before = stats.total_accuracy();

        // A round below the running average pulls it down.
        stats.record(record(1, 10)).unwrap();
        assert!(stats.total_accuracy() < before);
        assert_eq!(stats.total_accuracy(), 50.0);

        // A round above it pushes it back up.
        stats.record(record(10, 10)).unwrap();
        assert!(stats.total_accuracy() > 50.0);
    }

    #[test]
    fn test_history_loaded_from_store() {
        let store = MemoryRecordStore::with_records(vec![record(4, 10), record(8, 10)]);
        let stats = StatisticsTracker::new(Box::new(store)).unwrap();

        assert_eq!(stats.games_count(), 2);
        assert_eq!(stats.best_game().unwrap().correct, 8);
    }
}
