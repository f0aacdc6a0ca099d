pub use super::value_objects::{DrawNumber, LottoNumber, NumberSet};
use std::collections::VecDeque;
use strum::{Display, EnumString};

pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Outcome flag reported by the draw service as `returnValue`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DrawStatus {
    Success,
    Fail,
}

/// Domain entity - one historical draw
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRecord {
    pub number: DrawNumber,
    pub date: String,
    pub winning: NumberSet,
    pub bonus: LottoNumber,
    pub status: DrawStatus,
}

impl DrawRecord {
    pub fn new(number: DrawNumber, date: String, winning: NumberSet, bonus: LottoNumber) -> Self {
        Self { number, date, winning, bonus, status: DrawStatus::Success }
    }

    /// Only successful records are handed to callers of a draw source.
    pub fn is_success(&self) -> bool {
        self.status == DrawStatus::Success
    }
}

/// Domain entity - recent generated sets, newest first
#[derive(Debug, Clone)]
pub struct GenerationHistory {
    sets: VecDeque<NumberSet>,
    capacity: usize,
}

impl Default for GenerationHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl GenerationHistory {
    pub fn new(capacity: usize) -> Self {
        Self { sets: VecDeque::with_capacity(capacity + 1), capacity }
    }

    /// Front-insert; the oldest entry falls off past capacity.
    pub fn record(&mut self, set: NumberSet) {
        self.sets.push_front(set);
        self.sets.truncate(self.capacity);
    }

    pub fn iter(&self) -> impl Iterator<Item = &NumberSet> {
        self.sets.iter()
    }

    pub fn latest(&self) -> Option<&NumberSet> {
        self.sets.front()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
