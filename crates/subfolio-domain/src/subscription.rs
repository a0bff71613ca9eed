//! Domain model for tracked subscriptions and their billing cadence.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::common::*;

/// A recurring payment tracked by the user.
///
/// The collection of subscriptions is always supplied wholesale by the
/// caller; nothing in the domain retains state between calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
    /// Opaque identifier issued by the backend.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Charge per billing cycle, in `currency` units. Never negative.
    pub amount: f64,
    /// ISO 4217-like code. Display only; no cross-currency math happens here.
    pub currency: String,
    pub billing_cycle: BillingCycle,
    pub category: Category,
    pub next_billing_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Inactive subscriptions are excluded from spend totals and upcoming
    /// views but still appear (dimmed) in list views.
    pub active: bool,
    pub auto_renew: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subscription {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        billing_cycle: BillingCycle,
        category: Category,
        next_billing_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            amount,
            currency: "USD".into(),
            billing_cycle,
            category,
            next_billing_date,
            logo: None,
            color: None,
            active: true,
            auto_renew: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Marks the subscription active or paused, refreshing the audit stamp.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl NamedEntity for Subscription {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for Subscription {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Subscription {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.billing_cycle)
    }
}

/// Recurrence period of a subscription charge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum BillingCycle {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl BillingCycle {
    /// Stable lowercase wire name for the cycle.
    pub fn as_str(self) -> &'static str {
        match self {
            BillingCycle::Weekly => "weekly",
            BillingCycle::Monthly => "monthly",
            BillingCycle::Quarterly => "quarterly",
            BillingCycle::Yearly => "yearly",
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BillingCycle::Weekly => "Weekly",
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Quarterly => "Quarterly",
            BillingCycle::Yearly => "Yearly",
        };
        f.write_str(label)
    }
}

impl FromStr for BillingCycle {
    type Err = UnknownBillingCycle;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(BillingCycle::Weekly),
            "monthly" => Ok(BillingCycle::Monthly),
            "quarterly" => Ok(BillingCycle::Quarterly),
            "yearly" => Ok(BillingCycle::Yearly),
            _ => Err(UnknownBillingCycle(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raised when a billing cycle string does not match a known cadence.
pub struct UnknownBillingCycle(pub String);

impl fmt::Display for UnknownBillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown billing cycle: {}", self.0)
    }
}

impl std::error::Error for UnknownBillingCycle {}
