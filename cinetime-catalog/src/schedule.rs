use chrono::{Duration, NaiveDate};
use serde::Serialize;

const WINDOW_DAYS: i64 = 7;

/// How a day is captioned in the date strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "weekday", rename_all = "camelCase")]
pub enum DayLabel {
    Today,
    Tomorrow,
    /// Short weekday name, "Mon"
    Weekday(String),
}

/// Seven-day date strip that can be paged a week at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    today: NaiveDate,
    start: NaiveDate,
}

impl DateWindow {
    /// Window starting at `today`.
    pub fn starting(today: NaiveDate) -> Self {
        Self { today, start: today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        (0..WINDOW_DAYS)
            .map(|offset| self.start + Duration::days(offset))
            .collect()
    }

    pub fn next_week(&mut self) {
        self.start += Duration::days(WINDOW_DAYS);
    }

    /// Paging back is allowed even into the past; past days just stay
    /// unselectable.
    pub fn previous_week(&mut self) {
        self.start -= Duration::days(WINDOW_DAYS);
    }

    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        date >= self.today
    }

    pub fn label(&self, date: NaiveDate) -> DayLabel {
        if date == self.today {
            DayLabel::Today
        } else if date == self.today + Duration::days(1) {
            DayLabel::Tomorrow
        } else {
            DayLabel::Weekday(date.format("%a").to_string())
        }
    }
}

/// The booking form offers today and the next six days.
pub fn bookable_dates(today: NaiveDate) -> Vec<NaiveDate> {
    DateWindow::starting(today).days()
}
