//! The dates and times an admin collects before creating shows.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::ShowInput;

/// Ordered `date -> times` set.
///
/// A date is present iff it has at least one time. Dates and the times under
/// each date keep the order they were added in; a time appears at most once per date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateTimeSelection {
    entries: Vec<(String, Vec<String>)>,
}

impl DateTimeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `time` under `date`. Returns false when either part is empty or the
    /// pair is already selected.
    pub fn add(&mut self, date: &str, time: &str) -> bool {
        if date.is_empty() || time.is_empty() {
            return false;
        }
        match self.entries.iter_mut().find(|(d, _)| d == date) {
            Some((_, times)) => {
                if times.iter().any(|t| t == time) {
                    return false;
                }
                times.push(time.to_string());
            }
            None => self
                .entries
                .push((date.to_string(), vec![time.to_string()])),
        }
        true
    }

    /// Removes one pair, dropping the date once its last time is gone.
    pub fn remove(&mut self, date: &str, time: &str) -> bool {
        let Some(idx) = self.entries.iter().position(|(d, _)| d == date) else {
            return false;
        };
        let times = &mut self.entries[idx].1;
        let before = times.len();
        times.retain(|t| t != time);
        let removed = times.len() != before;
        if times.is_empty() {
            self.entries.remove(idx);
        }
        removed
    }

    pub fn times(&self, date: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(d, _)| d == date)
            .map(|(_, times)| times.as_slice())
    }

    pub fn contains(&self, date: &str, time: &str) -> bool {
        self.times(date)
            .map(|times| times.iter().any(|t| t == time))
            .unwrap_or(false)
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(d, _)| d.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(d, times)| (d.as_str(), times.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of selected (date, time) pairs.
    pub fn pair_count(&self) -> usize {
        self.entries.iter().map(|(_, times)| times.len()).sum()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// One `ShowInput` per selected pair, dates in insertion order.
    pub fn flatten(&self) -> Vec<ShowInput> {
        self.entries
            .iter()
            .flat_map(|(date, times)| {
                times.iter().map(move |time| ShowInput {
                    date: date.clone(),
                    time: time.clone(),
                })
            })
            .collect()
    }
}

impl Serialize for DateTimeSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (date, times) in &self.entries {
            map.serialize_entry(date, times)?;
        }
        map.end()
    }
}

/// Splits a `datetime-local` style value (`2024-05-01T18:30`) into date and time.
pub fn parse_date_time_input(input: &str) -> Option<(&str, &str)> {
    let (date, time) = input.trim().split_once('T')?;
    if date.is_empty() || time.is_empty() {
        return None;
    }
    Some((date, time))
}
