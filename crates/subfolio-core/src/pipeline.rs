//! Filtering and sorting for subscription list views.

use std::cmp::Ordering;

use subfolio_domain::{Category, Subscription};

/// Predicates applied to a subscription list. Both are ANDed; an unset or
/// empty predicate matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionFilter {
    /// Case-insensitive substring matched against name or description.
    pub search_term: Option<String>,
    /// Exact category match.
    pub category: Option<Category>,
}

impl SubscriptionFilter {
    pub fn by_search(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..Self::default()
        }
    }

    pub fn by_category(category: Category) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    pub fn matches(&self, subscription: &Subscription) -> bool {
        let matches_search = match self.search_term.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let needle = term.to_lowercase();
                subscription.name.to_lowercase().contains(&needle)
                    || subscription
                        .description
                        .as_deref()
                        .is_some_and(|text| text.to_lowercase().contains(&needle))
            }
        };
        let matches_category = self
            .category
            .map_or(true, |category| subscription.category == category);
        matches_search && matches_category
    }
}

/// Field a list view orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    /// Compares the raw per-cycle amount, not the monthly equivalent. A
    /// yearly charge therefore sorts above a larger effective monthly one;
    /// kept as shipped pending product direction.
    Amount,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Returns the subscriptions matching `filter`, preserving input order.
pub fn filter_subscriptions(
    subscriptions: &[Subscription],
    filter: &SubscriptionFilter,
) -> Vec<Subscription> {
    subscriptions
        .iter()
        .filter(|sub| filter.matches(sub))
        .cloned()
        .collect()
}

/// Returns the subscriptions ordered by `key` in `direction`. The sort is
/// stable, so ties keep their input order in either direction.
pub fn sort_subscriptions(
    subscriptions: &[Subscription],
    key: SortKey,
    direction: SortDirection,
) -> Vec<Subscription> {
    let mut sorted = subscriptions.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Name => compare_names(&a.name, &b.name),
            SortKey::Amount => a.amount.total_cmp(&b.amount),
            SortKey::Date => a.next_billing_date.cmp(&b.next_billing_date),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

// Case-insensitive comparison with a case-sensitive tiebreak, so equal-but-
// differently-cased names still order deterministically.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
