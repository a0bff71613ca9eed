//! Backend row shapes and their mapping into domain types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use subfolio_config::Preferences;
use subfolio_domain::{BillingCycle, Category, Subscription};

use crate::RecordError;

/// A subscription row as the backend returns it: snake_case fields, ISO 8601
/// string dates, nullable presentation fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub billing_cycle: String,
    pub category: String,
    pub next_billing_date: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default = "default_true")]
    pub auto_renew: bool,
    pub created_at: String,
    pub updated_at: String,
    /// Owner reference; carried through for callers that need it, never
    /// part of the domain model.
    #[serde(default)]
    pub user_id: Option<String>,
}

impl SubscriptionRecord {
    /// Maps the row into the domain shape.
    ///
    /// Unknown billing cycles fall back to monthly and unknown categories to
    /// `Other`, each with a warning. A negative amount or an unparsable date
    /// rejects the record as a whole.
    pub fn into_subscription(self) -> Result<Subscription, RecordError> {
        if self.amount < 0.0 {
            return Err(RecordError::NegativeAmount {
                id: self.id,
                amount: self.amount,
            });
        }

        let billing_cycle = match self.billing_cycle.parse::<BillingCycle>() {
            Ok(cycle) => cycle,
            Err(err) => {
                warn!(id = %self.id, %err, "defaulting billing cycle to monthly");
                BillingCycle::Monthly
            }
        };
        let category = match self.category.parse::<Category>() {
            Ok(category) => category,
            Err(err) => {
                warn!(id = %self.id, %err, "defaulting category to other");
                Category::Other
            }
        };

        let next_billing_date =
            parse_billing_date(&self.next_billing_date).ok_or_else(|| RecordError::InvalidDate {
                id: self.id.clone(),
                field: "next_billing_date",
                value: self.next_billing_date.clone(),
            })?;
        let created_at = parse_timestamp(&self.created_at).ok_or_else(|| RecordError::InvalidDate {
            id: self.id.clone(),
            field: "created_at",
            value: self.created_at.clone(),
        })?;
        let updated_at = parse_timestamp(&self.updated_at).ok_or_else(|| RecordError::InvalidDate {
            id: self.id.clone(),
            field: "updated_at",
            value: self.updated_at.clone(),
        })?;

        let name = if self.name.trim().is_empty() {
            warn!(id = %self.id, "record has no name, using placeholder");
            "Untitled".to_string()
        } else {
            self.name
        };

        Ok(Subscription {
            id: self.id,
            name,
            description: self.description,
            amount: self.amount,
            currency: self.currency,
            billing_cycle,
            category,
            next_billing_date,
            logo: self.logo,
            color: self.color,
            active: self.active,
            auto_renew: self.auto_renew,
            created_at,
            updated_at,
        })
    }
}

/// Maps a fetched batch, skipping records that fail outright. Skips are
/// warned, not returned; a snapshot with holes beats no snapshot.
pub fn map_subscriptions(records: Vec<SubscriptionRecord>) -> Vec<Subscription> {
    records
        .into_iter()
        .filter_map(|record| match record.into_subscription() {
            Ok(subscription) => Some(subscription),
            Err(err) => {
                warn!(%err, "skipping malformed subscription record");
                None
            }
        })
        .collect()
}

/// A viewer-preferences row as the backend returns it. Every field is
/// optional; absent values take the application defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PreferenceRecord {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub default_view: Option<String>,
    #[serde(default)]
    pub time_format: Option<String>,
    #[serde(default)]
    pub show_inactive_subscriptions: Option<bool>,
    #[serde(default)]
    pub reminders_before: Option<u32>,
    #[serde(default)]
    pub email_notifications: Option<bool>,
    #[serde(default)]
    pub push_notifications: Option<bool>,
}

impl PreferenceRecord {
    pub fn into_preferences(self) -> Preferences {
        let defaults = Preferences::default();
        Preferences {
            currency: self.currency.unwrap_or(defaults.currency),
            theme: self
                .theme
                .map(|value| subfolio_config::Theme::parse(&value))
                .unwrap_or(defaults.theme),
            default_view: self
                .default_view
                .map(|value| subfolio_config::DefaultView::parse(&value))
                .unwrap_or(defaults.default_view),
            time_format: self
                .time_format
                .map(|value| subfolio_config::TimeFormat::parse(&value))
                .unwrap_or(defaults.time_format),
            show_inactive: self
                .show_inactive_subscriptions
                .unwrap_or(defaults.show_inactive),
            reminder_lead_days: self.reminders_before.unwrap_or(defaults.reminder_lead_days),
            email_notifications: self
                .email_notifications
                .unwrap_or(defaults.email_notifications),
            push_notifications: self
                .push_notifications
                .unwrap_or(defaults.push_notifications),
        }
    }
}

/// Accepts a full RFC 3339 timestamp, a bare datetime, or a bare date. The
/// date is taken as written; no timezone normalization is applied.
fn parse_billing_date(value: &str) -> Option<NaiveDate> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return Some(stamp.date_naive());
    }
    if let Ok(stamp) = chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(stamp.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return Some(stamp.with_timezone(&Utc));
    }
    if let Ok(stamp) = chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(DateTime::from_naive_utc_and_offset(stamp, Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

fn default_currency() -> String {
    "USD".into()
}

fn default_true() -> bool {
    true
}
