//! Calendar source for the footer year.

use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub type SharedClock = Arc<dyn Clock>;

/// Local wall clock (browser time zone on wasm).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date, for tests and reproducible exports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// January 1st of `year`; `None` if the year is out of chrono's range.
    pub fn new_year(year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, 1, 1).map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Year shown in the copyright line. Computed once per page render.
pub fn display_year(clock: &dyn Clock) -> i32 {
    clock.today().year()
}
