use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventCategory {
    Sports,
    Concert,
    Comedy,
    Food,
    Conference,
}

impl EventCategory {
    pub const ALL: [EventCategory; 5] = [
        EventCategory::Sports,
        EventCategory::Concert,
        EventCategory::Comedy,
        EventCategory::Food,
        EventCategory::Conference,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Sports => "Sports",
            EventCategory::Concert => "Concert",
            EventCategory::Comedy => "Comedy",
            EventCategory::Food => "Food",
            EventCategory::Conference => "Conference",
        }
    }
}

/// A sports match, concert or other live event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveEvent {
    pub id: u32,
    pub title: String,
    pub image: String,
    pub category: EventCategory,
    pub date: NaiveDate,
    /// 24h clock, "19:30"
    pub time: String,
    pub venue: String,
    /// Display label, "₹500 onwards"
    pub price: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventFilter {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl EventFilter {
    pub fn new(category: Option<String>, search: Option<String>) -> Self {
        Self { category, search }
    }

    pub fn matches(&self, event: &LiveEvent) -> bool {
        if let Some(category) = self.category.as_deref() {
            if category != "All" && event.category.as_str() != category {
                return false;
            }
        }

        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                event.title.to_lowercase().contains(&term)
                    || event.category.as_str().to_lowercase().contains(&term)
                    || event.venue.to_lowercase().contains(&term)
            }
            _ => true,
        }
    }

    pub fn apply(&self, events: &[LiveEvent]) -> Vec<LiveEvent> {
        events.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}
