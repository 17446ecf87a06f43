//! NoticeState - User Notices with Ring Buffer

use chrono::{DateTime, Local};
use std::collections::VecDeque;

use crate::constants::NOTICE_CAPACITY;

/// Notice level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warn,
}

impl NoticeLevel {
    pub fn label(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "INFO",
            NoticeLevel::Success => "OK",
            NoticeLevel::Warn => "WARN",
        }
    }

    pub fn color(&self) -> gpui::Rgba {
        match self {
            NoticeLevel::Info => gpui::rgba(0x3b82f6ff),    // Blue
            NoticeLevel::Success => gpui::rgba(0x22c55eff), // Green
            NoticeLevel::Warn => gpui::rgba(0xf59e0bff),    // Amber
        }
    }
}

/// A single notice
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// Notices shown to the user, oldest evicted first
#[derive(Debug)]
pub struct NoticeState {
    entries: VecDeque<Notice>,
    capacity: usize,
    next_id: u64,
}

impl NoticeState {
    /// Create a notice feed; capacity is at least one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    /// Push a notice
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>, timestamp: DateTime<Local>) {
        let notice = Notice {
            id: self.next_id,
            level,
            message: message.into(),
            timestamp,
        };
        self.next_id += 1;

        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(notice);
    }

    /// Push a notice stamped now
    pub fn push_now(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.push(level, message, Local::now());
    }

    pub fn entries(&self) -> &VecDeque<Notice> {
        &self.entries
    }

    /// Newest notices first, at most `limit`
    pub fn latest(&self, limit: usize) -> impl Iterator<Item = &Notice> {
        self.entries.iter().rev().take(limit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for NoticeState {
    fn default() -> Self {
        Self::new(NOTICE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_evicts_oldest() {
        let mut state = NoticeState::new(2);
        state.push_now(NoticeLevel::Info, "one");
        state.push_now(NoticeLevel::Success, "two");
        state.push_now(NoticeLevel::Warn, "three");

        assert_eq!(state.len(), 2);
        let messages: Vec<_> = state.entries().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, ["two", "three"]);
        assert_eq!(state.entries()[1].id, 3);
    }

    #[test]
    fn test_latest_is_newest_first() {
        let mut state = NoticeState::default();
        for i in 0..5 {
            state.push_now(NoticeLevel::Info, format!("n{i}"));
        }
        let latest: Vec<_> = state.latest(2).map(|n| n.message.clone()).collect();
        assert_eq!(latest, ["n4", "n3"]);

        state.clear();
        assert!(state.is_empty());
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut state = NoticeState::new(0);
        state.push_now(NoticeLevel::Info, "a");
        state.push_now(NoticeLevel::Info, "b");
        assert_eq!(state.len(), 1);
    }
}
