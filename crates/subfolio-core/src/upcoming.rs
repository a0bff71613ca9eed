//! Selection of payments falling due within a horizon from a reference date.

use chrono::{Duration, NaiveDate};

use subfolio_domain::Subscription;

/// How urgently a due date should be surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentUrgency {
    /// Falls due on the reference date itself.
    DueToday,
    /// Falls due within the next three days.
    Imminent,
    /// Further out than the imminent window.
    Scheduled,
}

/// Selects and annotates upcoming payments. All operations take the
/// reference date explicitly; nothing here reads a clock.
pub struct UpcomingService;

impl UpcomingService {
    /// Active subscriptions due within `within_days` of `today`, ascending by
    /// due date. `limit` truncates the result when given.
    pub fn payments(
        subscriptions: &[Subscription],
        today: NaiveDate,
        within_days: i64,
        limit: Option<usize>,
    ) -> Vec<Subscription> {
        let horizon = today + Duration::days(within_days);
        let mut due: Vec<Subscription> = subscriptions
            .iter()
            .filter(|sub| sub.active && sub.next_billing_date <= horizon)
            .cloned()
            .collect();
        due.sort_by(|a, b| a.next_billing_date.cmp(&b.next_billing_date));
        if let Some(limit) = limit {
            due.truncate(limit);
        }
        due
    }

    /// Sum of the raw per-cycle amounts of upcoming payments. The dashboard
    /// "next N days" figure charges each payment once, so amounts are not
    /// normalized to monthly here.
    pub fn window_total(subscriptions: &[Subscription], today: NaiveDate, within_days: i64) -> f64 {
        Self::payments(subscriptions, today, within_days, None)
            .iter()
            .map(|sub| sub.amount)
            .sum()
    }

    /// Relative wording for a due date: "Today", "Tomorrow", or "In N days".
    ///
    /// Uses the absolute day difference, so an overdue date reads like an
    /// upcoming one. That matches the shipped behavior; change only with
    /// product direction.
    pub fn relative_due_label(due: NaiveDate, today: NaiveDate) -> String {
        let days = (due - today).num_days().abs();
        match days {
            0 => "Today".into(),
            1 => "Tomorrow".into(),
            n => format!("In {n} days"),
        }
    }

    /// Whether `due` falls on or before `today + days`.
    pub fn is_due_within(due: NaiveDate, today: NaiveDate, days: i64) -> bool {
        due <= today + Duration::days(days)
    }

    /// Styling tier for a due date: today, within three days, or later.
    pub fn urgency(due: NaiveDate, today: NaiveDate) -> PaymentUrgency {
        if due == today {
            PaymentUrgency::DueToday
        } else if Self::is_due_within(due, today, 3) {
            PaymentUrgency::Imminent
        } else {
            PaymentUrgency::Scheduled
        }
    }
}
