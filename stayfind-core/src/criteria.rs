use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::lookup::RoomsQuery;

/// Visitor counts for a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitors {
    pub adults_number: u32,
    pub children_number: u32,
}

impl Default for Visitors {
    fn default() -> Self {
        Self {
            adults_number: 1,
            children_number: 0,
        }
    }
}

/// The user-controlled search inputs: a stay date range plus visitor counts.
///
/// The date bounds are kept consistent on every edit: pushing `date_from`
/// past `date_to` drags `date_to` along, and vice versa, so
/// `date_from <= date_to` holds at all times. Counts are stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub visitors: Visitors,
}

impl SearchCriteria {
    /// Session defaults: arriving and leaving today, one adult, no children.
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            date_from: today,
            date_to: today,
            visitors: Visitors::default(),
        }
    }

    pub fn set_date_from(&mut self, date: NaiveDate) {
        self.date_from = date;
        if date > self.date_to {
            self.date_to = date;
        }
    }

    pub fn set_date_to(&mut self, date: NaiveDate) {
        self.date_to = date;
        if date < self.date_from {
            self.date_from = date;
        }
    }

    pub fn set_adults_number(&mut self, count: u32) {
        self.visitors.adults_number = count;
    }

    pub fn set_children_number(&mut self, count: u32) {
        self.visitors.children_number = count;
    }

    /// The wire payload sent to the availability lookup.
    pub fn to_query(&self) -> RoomsQuery {
        RoomsQuery {
            date_from: self.date_from,
            date_to: self.date_to,
            visitors: self.visitors,
        }
    }
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self::new()
    }
}
