//! Daily hot deals reminders.
//!
//! Only the content and schedule are built here; delivering them is up to
//! the platform notification service.

use crate::catalog::Catalog;
use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::Serialize;

pub const HOT_DEALS_CATEGORY: &str = "HOT_DEALS";
pub const MORNING_ID: &str = "hot-deals-morning";
pub const AFTERNOON_ID: &str = "hot-deals-afternoon";

/// A repeating local notification request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReminderRequest {
    pub id: String,
    pub title: String,
    pub body: String,
    pub category_id: String,
    /// Wall-clock time of day it fires
    pub at: NaiveTime,
    pub repeats_daily: bool,
}

impl ReminderRequest {
    /// Next firing strictly after `now`
    pub fn next_after(&self, now: NaiveDateTime) -> NaiveDateTime {
        let today = now.date().and_time(self.at);
        if today > now {
            today
        } else {
            today + Duration::days(1)
        }
    }
}

/// Morning and afternoon reminders. The morning one names the first
/// listing of the raw catalog.
pub fn hot_deals_reminders(catalog: &Catalog) -> Vec<ReminderRequest> {
    let sample = catalog.properties.first();
    let title = sample.map_or("Great property", |p| p.title.as_str());
    let price = sample.map(|p| p.price_formatted()).unwrap_or_default();

    vec![
        ReminderRequest {
            id: MORNING_ID.to_string(),
            title: "🔥 Hot Deals!".to_string(),
            body: format!("Check out today's best deals. {} from {}", title, price),
            category_id: HOT_DEALS_CATEGORY.to_string(),
            at: NaiveTime::from_hms_opt(10, 0, 0).unwrap_or(NaiveTime::MIN),
            repeats_daily: true,
        },
        ReminderRequest {
            id: AFTERNOON_ID.to_string(),
            title: "🔥 Don't miss these Hot Deals!".to_string(),
            body: "New properties just added. Open the app to see today's deals.".to_string(),
            category_id: HOT_DEALS_CATEGORY.to_string(),
            at: NaiveTime::from_hms_opt(14, 30, 0).unwrap_or(NaiveTime::MIN),
            repeats_daily: true,
        },
    ]
}
