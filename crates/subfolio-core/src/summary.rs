//! Aggregation of monthly-equivalent spend across a subscription snapshot.

use std::collections::BTreeMap;

use subfolio_domain::{Category, Subscription};

use crate::billing::monthly_equivalent;

/// Monthly-equivalent spend attributed to one category, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpend {
    pub category: Category,
    /// Rounded to cents; use [`SummaryService::spend_by_category`] when full
    /// precision matters.
    pub monthly_total: f64,
}

/// Aggregates subscription spend for dashboards and charts.
pub struct SummaryService;

impl SummaryService {
    /// Sums the monthly-equivalent cost of every active subscription.
    pub fn total_monthly_spend(subscriptions: &[Subscription]) -> f64 {
        subscriptions
            .iter()
            .filter(|sub| sub.active)
            .map(|sub| monthly_equivalent(sub.amount, sub.billing_cycle))
            .sum()
    }

    /// Accumulates monthly-equivalent spend per category, at full precision.
    /// Inactive subscriptions are excluded; absent categories are absent keys.
    pub fn spend_by_category(subscriptions: &[Subscription]) -> BTreeMap<Category, f64> {
        let mut totals = BTreeMap::new();
        for sub in subscriptions.iter().filter(|sub| sub.active) {
            *totals.entry(sub.category).or_insert(0.0) +=
                monthly_equivalent(sub.amount, sub.billing_cycle);
        }
        totals
    }

    /// Display-ready category totals: rounded to cents, largest first.
    pub fn category_breakdown(subscriptions: &[Subscription]) -> Vec<CategorySpend> {
        let mut breakdown: Vec<CategorySpend> = Self::spend_by_category(subscriptions)
            .into_iter()
            .map(|(category, total)| CategorySpend {
                category,
                monthly_total: round_cents(total),
            })
            .collect();
        breakdown.sort_by(|a, b| b.monthly_total.total_cmp(&a.monthly_total));
        breakdown
    }

    /// Number of currently active subscriptions in the snapshot.
    pub fn active_count(subscriptions: &[Subscription]) -> usize {
        subscriptions.iter().filter(|sub| sub.active).count()
    }
}

/// Rounds to two decimal places for presentation.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use subfolio_domain::BillingCycle;

    fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn subscription(
        id: &str,
        amount: f64,
        cycle: BillingCycle,
        category: Category,
    ) -> Subscription {
        Subscription::new(id, id, amount, cycle, category, sample_date(2025, 6, 15))
    }

    #[test]
    fn empty_snapshot_totals_zero() {
        assert_eq!(SummaryService::total_monthly_spend(&[]), 0.0);
        assert!(SummaryService::spend_by_category(&[]).is_empty());
    }

    #[test]
    fn all_inactive_snapshot_totals_zero() {
        let mut a = subscription("a", 15.0, BillingCycle::Monthly, Category::Streaming);
        let mut b = subscription("b", 120.0, BillingCycle::Yearly, Category::Saas);
        a.active = false;
        b.active = false;
        assert_eq!(SummaryService::total_monthly_spend(&[a, b]), 0.0);
    }

    #[test]
    fn yearly_subscription_contributes_one_twelfth() {
        let subs = vec![subscription("a", 12.0, BillingCycle::Yearly, Category::Saas)];
        assert_eq!(SummaryService::total_monthly_spend(&subs), 1.0);
    }

    #[test]
    fn total_is_invariant_under_reordering() {
        let subs = vec![
            subscription("a", 9.99, BillingCycle::Weekly, Category::Entertainment),
            subscription("b", 52.99, BillingCycle::Monthly, Category::Productivity),
            subscription("c", 120.0, BillingCycle::Yearly, Category::Saas),
            subscription("d", 30.0, BillingCycle::Quarterly, Category::Utilities),
        ];
        let mut reversed = subs.clone();
        reversed.reverse();
        let forward = SummaryService::total_monthly_spend(&subs);
        let backward = SummaryService::total_monthly_spend(&reversed);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn category_totals_sum_to_overall_total() {
        let subs = vec![
            subscription("a", 15.99, BillingCycle::Monthly, Category::Streaming),
            subscription("b", 7.99, BillingCycle::Monthly, Category::Streaming),
            subscription("c", 9.99, BillingCycle::Weekly, Category::Entertainment),
            subscription("d", 84.0, BillingCycle::Yearly, Category::Saas),
        ];
        let by_category = SummaryService::spend_by_category(&subs);
        let sum: f64 = by_category.values().sum();
        let total = SummaryService::total_monthly_spend(&subs);
        assert!((sum - total).abs() < 1e-9);
    }

    #[test]
    fn inactive_subscriptions_are_excluded_from_category_spend() {
        let active = subscription("a", 5.0, BillingCycle::Monthly, Category::Streaming);
        let mut paused = subscription("b", 7.0, BillingCycle::Monthly, Category::Streaming);
        paused.active = false;
        let by_category = SummaryService::spend_by_category(&[active, paused]);
        assert_eq!(by_category.get(&Category::Streaming), Some(&5.0));
        assert_eq!(by_category.len(), 1);
    }

    #[test]
    fn breakdown_is_sorted_descending_and_rounded() {
        let subs = vec![
            subscription("a", 2.99, BillingCycle::Monthly, Category::Utilities),
            subscription("b", 9.99, BillingCycle::Weekly, Category::Entertainment),
            subscription("c", 15.99, BillingCycle::Monthly, Category::Streaming),
        ];
        let breakdown = SummaryService::category_breakdown(&subs);
        assert_eq!(breakdown[0].category, Category::Entertainment);
        assert_eq!(breakdown[0].monthly_total, 43.26);
        assert_eq!(breakdown[1].category, Category::Streaming);
        assert_eq!(breakdown[2].category, Category::Utilities);
    }

    #[test]
    fn active_count_ignores_paused_entries() {
        let active = subscription("a", 5.0, BillingCycle::Monthly, Category::Other);
        let mut paused = subscription("b", 5.0, BillingCycle::Monthly, Category::Other);
        paused.active = false;
        assert_eq!(SummaryService::active_count(&[active, paused]), 1);
    }
}
