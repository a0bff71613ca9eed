//! End-to-end: backend rows in, dashboard figures out.

use chrono::{NaiveDate, TimeZone, Utc};
use subfolio::connect::{map_subscriptions, SubscriptionRecord};
use subfolio::core::{
    filter_subscriptions, sort_subscriptions, Clock, FixedClock, SortDirection, SortKey,
    SubscriptionFilter, SummaryService, UpcomingService,
};
use subfolio::currency::{format_amount, CurrencyCode};
use subfolio::domain::{Category, Subscription};

fn fetched_rows() -> Vec<SubscriptionRecord> {
    serde_json::from_str(
        r##"[
            {
                "id": "1", "name": "Netflix", "description": "Premium streaming service",
                "amount": 15.99, "currency": "USD", "billing_cycle": "monthly",
                "category": "streaming", "next_billing_date": "2025-06-10T00:00:00+00:00",
                "logo": "N", "color": "#E50914", "active": true, "auto_renew": true,
                "created_at": "2023-01-15T00:00:00+00:00", "updated_at": "2023-01-15T00:00:00+00:00"
            },
            {
                "id": "2", "name": "Spotify", "description": "Music streaming service",
                "amount": 9.99, "currency": "USD", "billing_cycle": "monthly",
                "category": "entertainment", "next_billing_date": "2025-06-03T00:00:00+00:00",
                "active": true, "auto_renew": true,
                "created_at": "2023-02-01T00:00:00+00:00", "updated_at": "2023-02-01T00:00:00+00:00"
            },
            {
                "id": "3", "name": "Adobe Creative Cloud", "description": "Creative software suite",
                "amount": 52.99, "currency": "USD", "billing_cycle": "monthly",
                "category": "productivity", "next_billing_date": "2025-06-25T00:00:00+00:00",
                "active": true, "auto_renew": true,
                "created_at": "2023-01-10T00:00:00+00:00", "updated_at": "2023-01-10T00:00:00+00:00"
            },
            {
                "id": "4", "name": "iCloud Storage", "description": "Cloud storage service",
                "amount": 2.99, "currency": "USD", "billing_cycle": "monthly",
                "category": "utilities", "next_billing_date": "2025-06-02T00:00:00+00:00",
                "active": true, "auto_renew": true,
                "created_at": "2023-02-28T00:00:00+00:00", "updated_at": "2023-02-28T00:00:00+00:00"
            },
            {
                "id": "5", "name": "GitHub Pro", "description": "Developer tools",
                "amount": 84.0, "currency": "USD", "billing_cycle": "yearly",
                "category": "saas", "next_billing_date": "2025-06-21T00:00:00+00:00",
                "active": true, "auto_renew": true,
                "created_at": "2023-04-15T00:00:00+00:00", "updated_at": "2023-04-15T00:00:00+00:00"
            },
            {
                "id": "6", "name": "New York Times", "description": "News subscription",
                "amount": 17.0, "currency": "USD", "billing_cycle": "monthly",
                "category": "other", "next_billing_date": "2025-06-05T00:00:00+00:00",
                "active": false, "auto_renew": false,
                "created_at": "2023-01-25T00:00:00+00:00", "updated_at": "2023-01-25T00:00:00+00:00"
            },
            {
                "id": "7", "name": "Broken Row", "amount": 5.0,
                "billing_cycle": "monthly", "category": "other",
                "next_billing_date": "not-a-date",
                "created_at": "2023-01-01T00:00:00+00:00", "updated_at": "2023-01-01T00:00:00+00:00"
            }
        ]"##,
    )
    .expect("deserialize fetched rows")
}

fn snapshot() -> Vec<Subscription> {
    map_subscriptions(fetched_rows())
}

#[test]
fn malformed_rows_are_dropped_without_failing_the_batch() {
    let subs = snapshot();
    assert_eq!(subs.len(), 6);
    assert!(subs.iter().all(|sub| sub.id != "7"));
}

#[test]
fn dashboard_monthly_spend_matches_hand_computed_total() {
    let subs = snapshot();
    // 15.99 + 9.99 + 52.99 + 2.99 + 84/12; the paused NYT row is excluded.
    let total = SummaryService::total_monthly_spend(&subs);
    assert!((total - 88.96).abs() < 1e-9);
    assert_eq!(format_amount(total, &CurrencyCode::default()), "$88.96");
    assert_eq!(SummaryService::active_count(&subs), 5);
}

#[test]
fn category_breakdown_matches_chart_ordering() {
    let subs = snapshot();
    let breakdown = SummaryService::category_breakdown(&subs);
    let labels: Vec<&str> = breakdown
        .iter()
        .map(|entry| entry.category.info().label)
        .collect();
    assert_eq!(
        labels,
        ["Productivity", "Streaming", "Entertainment", "SaaS", "Utilities"]
    );
    assert_eq!(breakdown[3].monthly_total, 7.0);

    let by_category = SummaryService::spend_by_category(&subs);
    let sum: f64 = by_category.values().sum();
    assert!((sum - SummaryService::total_monthly_spend(&subs)).abs() < 1e-9);
    assert!(!by_category.contains_key(&Category::Shopping));
}

#[test]
fn upcoming_panel_lists_the_next_payments_in_order() {
    let subs = snapshot();
    let clock = FixedClock(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap());
    let today = clock.today();

    let upcoming = UpcomingService::payments(&subs, today, 30, Some(5));
    let ids: Vec<&str> = upcoming.iter().map(|sub| sub.id.as_str()).collect();
    assert_eq!(ids, ["4", "2", "1", "5", "3"]);

    assert_eq!(
        UpcomingService::relative_due_label(upcoming[0].next_billing_date, today),
        "Tomorrow"
    );

    // The "next 30 days" stat charges each upcoming payment at face value.
    let window_total = UpcomingService::window_total(&subs, today, 30);
    assert!((window_total - 165.96).abs() < 1e-9);
}

#[test]
fn due_today_rows_are_flagged_for_the_reminder_banner() {
    let subs = snapshot();
    let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    let netflix = subs.iter().find(|sub| sub.id == "1").unwrap();
    assert_eq!(
        UpcomingService::relative_due_label(netflix.next_billing_date, today),
        "Today"
    );
    assert!(UpcomingService::is_due_within(
        netflix.next_billing_date,
        today,
        7
    ));
}

#[test]
fn list_view_filtering_and_sorting_compose() {
    let subs = snapshot();

    let matches = filter_subscriptions(&subs, &SubscriptionFilter::by_search("net"));
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Netflix");

    let saas = filter_subscriptions(&subs, &SubscriptionFilter::by_category(Category::Saas));
    assert_eq!(saas.len(), 1);
    assert_eq!(saas[0].name, "GitHub Pro");

    // Inactive rows stay in list views; the pipeline never drops them.
    let everything = filter_subscriptions(&subs, &SubscriptionFilter::default());
    assert_eq!(everything.len(), subs.len());

    let by_amount = sort_subscriptions(&everything, SortKey::Amount, SortDirection::Desc);
    assert_eq!(by_amount[0].name, "GitHub Pro");
    assert_eq!(by_amount[1].name, "Adobe Creative Cloud");

    let by_date = sort_subscriptions(&everything, SortKey::Date, SortDirection::Asc);
    assert_eq!(by_date[0].id, "4");
}
