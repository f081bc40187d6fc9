//! Property tests for the budget arithmetic and the toggle cycles.

use proptest::prelude::*;

use indaia_planner::domain::budget::{Category, Expense};
use indaia_planner::domain::foundation::Money;
use indaia_planner::domain::guests::RsvpStatus;
use indaia_planner::domain::planner::{DashboardStats, Planner};

fn expense_strategy() -> impl Strategy<Value = Expense> {
    (0i64..=10_000_000, 0i64..=12_000_000, "[a-z]{1,12}").prop_map(|(amount, paid, name)| {
        let mut e = Expense::new(name, Category::Extra, Money::from_centavos(amount));
        // May exceed amount on purpose; the entity clamps.
        e.set_paid(Money::from_centavos(paid));
        e
    })
}

proptest! {
    #[test]
    fn totals_are_exact_sums(expenses in proptest::collection::vec(expense_strategy(), 0..32)) {
        let stats = DashboardStats::compute(&expenses, &[]);

        let budget: i64 = expenses.iter().map(|e| e.amount().centavos()).sum();
        let paid: i64 = expenses.iter().map(|e| e.paid().centavos()).sum();

        prop_assert_eq!(stats.total_budget.centavos(), budget);
        prop_assert_eq!(stats.total_paid.centavos(), paid);
        prop_assert_eq!(stats.total_pending.centavos(), budget - paid);
    }

    #[test]
    fn progress_stays_in_range(expenses in proptest::collection::vec(expense_strategy(), 0..32)) {
        let stats = DashboardStats::compute(&expenses, &[]);

        prop_assert!(stats.progress.is_finite());
        prop_assert!((0.0..=100.0).contains(&stats.progress));
        if stats.total_budget.is_zero() {
            prop_assert_eq!(stats.progress, 0.0);
        }
    }

    #[test]
    fn paid_toggle_preserves_the_paid_flag_under_double_application(
        amount in 1i64..=10_000_000,
        paid in 0i64..=10_000_000,
    ) {
        let mut e = Expense::new("item", Category::Extra, Money::from_centavos(amount));
        e.set_paid(Money::from_centavos(paid));
        let was_paid = e.is_paid();

        e.toggle_paid();
        prop_assert_ne!(e.is_paid(), was_paid);
        e.toggle_paid();
        prop_assert_eq!(e.is_paid(), was_paid);
    }

    #[test]
    fn rsvp_toggle_is_a_two_cycle_past_pending(steps in 1usize..20) {
        let mut status = RsvpStatus::Pending;
        for _ in 0..steps {
            status = status.toggled();
            prop_assert_ne!(status, RsvpStatus::Pending);
        }
        // Once past Pending, two more toggles always return to the same state.
        prop_assert_eq!(status.toggled().toggled(), status);
    }

    #[test]
    fn surviving_ids_match_the_operation_sequence(
        amounts in proptest::collection::vec(1i64..=1_000_000, 1..12),
        remove_mask in proptest::collection::vec(any::<bool>(), 1..12),
    ) {
        let mut planner = Planner::new();
        let mut ids = Vec::new();
        for amount in &amounts {
            let id = *planner
                .add_expense(Expense::new("item", Category::Extra, Money::from_centavos(*amount)))
                .id();
            ids.push(id);
        }

        let mut expected = Vec::new();
        for (i, id) in ids.iter().enumerate() {
            if remove_mask.get(i).copied().unwrap_or(false) {
                planner.remove_expense(id).unwrap();
            } else {
                expected.push(*id);
            }
        }

        let survivors: Vec<_> = planner.expenses().iter().map(|e| *e.id()).collect();
        prop_assert_eq!(survivors, expected);
    }
}
