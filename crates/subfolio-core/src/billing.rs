//! Monthly-equivalent normalization of billing amounts.

use subfolio_domain::BillingCycle;

/// Average number of weeks in a month (52 / 12). Not calendar-accurate;
/// kept as the product-defined conversion factor.
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Rescales a per-cycle charge to a common monthly basis.
pub fn monthly_equivalent(amount: f64, cycle: BillingCycle) -> f64 {
    match cycle {
        BillingCycle::Monthly => amount,
        BillingCycle::Yearly => amount / 12.0,
        BillingCycle::Quarterly => amount / 3.0,
        BillingCycle::Weekly => amount * WEEKS_PER_MONTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_amounts_pass_through_unchanged() {
        assert_eq!(monthly_equivalent(15.99, BillingCycle::Monthly), 15.99);
        assert_eq!(monthly_equivalent(0.0, BillingCycle::Monthly), 0.0);
    }

    #[test]
    fn yearly_amounts_divide_by_twelve() {
        assert_eq!(monthly_equivalent(12.0, BillingCycle::Yearly), 1.0);
        assert_eq!(monthly_equivalent(120.0, BillingCycle::Yearly), 10.0);
    }

    #[test]
    fn quarterly_amounts_divide_by_three() {
        assert_eq!(monthly_equivalent(30.0, BillingCycle::Quarterly), 10.0);
    }

    #[test]
    fn weekly_amounts_scale_by_average_weeks() {
        let normalized = monthly_equivalent(9.99, BillingCycle::Weekly);
        assert!((normalized - 43.2567).abs() < 1e-9);
    }
}
