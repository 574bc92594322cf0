//! Execution timeline (Gantt sequence) model.
//!
//! A timeline is the ordered record of which process held the CPU during
//! which tick interval. Entries are appended in execution order, so starts
//! are non-decreasing; gaps between consecutive entries are idle time.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

/// One contiguous execution slice on the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Name of the process that ran.
    pub process_name: String,
    /// Tick at which the slice started.
    pub start: i64,
    /// Slice length in ticks. Always > 0 and never exceeds the quantum.
    pub duration: i64,
}

impl TimelineEntry {
    /// Creates a new entry.
    pub fn new(process_name: impl Into<String>, start: i64, duration: i64) -> Self {
        Self {
            process_name: process_name.into(),
            start,
            duration,
        }
    }

    /// Tick at which the slice ended (exclusive).
    #[inline]
    pub fn end(&self) -> i64 {
        self.start + self.duration
    }
}

/// The complete Gantt sequence of a simulation run.
///
/// Append-only during a run; consumers read it as an ordered slice list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in execution order.
    pub entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    pub fn push(&mut self, entry: TimelineEntry) {
        self.entries.push(entry);
    }

    /// Number of slices.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline holds no slices.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Latest end tick across all slices (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.entries.iter().map(|e| e.end()).max().unwrap_or(0)
    }

    /// Total ticks the CPU spent executing (sum of slice durations).
    pub fn total_busy_time(&self) -> i64 {
        self.entries.iter().map(|e| e.duration).sum()
    }

    /// Ticks between epoch and makespan during which the CPU was idle.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.total_busy_time()
    }

    /// All slices for a given process, in execution order.
    pub fn entries_for_process(&self, name: &str) -> Vec<&TimelineEntry> {
        self.entries
            .iter()
            .filter(|e| e.process_name == name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push(TimelineEntry::new("P1", 0, 3));
        t.push(TimelineEntry::new("P2", 3, 3));
        t.push(TimelineEntry::new("P1", 6, 2));
        t
    }

    #[test]
    fn test_entry_end() {
        let e = TimelineEntry::new("P1", 4, 3);
        assert_eq!(e.end(), 7);
    }

    #[test]
    fn test_makespan() {
        assert_eq!(sample_timeline().makespan(), 8);
    }

    #[test]
    fn test_busy_and_idle() {
        let t = sample_timeline();
        assert_eq!(t.total_busy_time(), 8);
        assert_eq!(t.idle_time(), 0);
    }

    #[test]
    fn test_idle_gap_counted() {
        let mut t = Timeline::new();
        t.push(TimelineEntry::new("P1", 5, 2));
        assert_eq!(t.makespan(), 7);
        assert_eq!(t.total_busy_time(), 2);
        assert_eq!(t.idle_time(), 5);
    }

    #[test]
    fn test_entries_for_process() {
        let t = sample_timeline();
        let p1 = t.entries_for_process("P1");
        assert_eq!(p1.len(), 2);
        assert_eq!(p1[0].start, 0);
        assert_eq!(p1[1].start, 6);
        assert!(t.entries_for_process("P9").is_empty());
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.entry_count(), 0);
        assert_eq!(t.makespan(), 0);
        assert_eq!(t.idle_time(), 0);
    }

    #[test]
    fn test_timeline_serde_round_trip() {
        let t = sample_timeline();
        let json = serde_json::to_string(&t).unwrap();
        let back: Timeline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
