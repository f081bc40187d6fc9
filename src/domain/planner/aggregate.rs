//! Planner aggregate - the single source of truth for dashboard state.
//!
//! # Aggregate Boundary
//!
//! The planner exclusively owns the expense and guest collections plus
//! the record of which showcase entries were already added. Views read
//! through the accessors and mutate only through the operations below;
//! nothing else may replace the collections. Statistics are derived on
//! demand and never stored.

use std::collections::HashSet;

use crate::domain::budget::{Category, Expense};
use crate::domain::foundation::{ExpenseId, GuestId, Money, ShowcaseItemId};
use crate::domain::guests::{AgeGroup, Guest, RsvpStatus, Side};
use crate::domain::showcase;

use super::{DashboardStats, PlannerError};

/// In-memory store for one couple's wedding plan.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    expenses: Vec<Expense>,
    guests: Vec<Guest>,
    added_showcase: HashSet<ShowcaseItemId>,
}

impl Planner {
    /// An empty planner.
    pub fn new() -> Self {
        Self::default()
    }

    /// A planner loaded with the couple's contract items and the first
    /// invitees, exactly as the dashboard has always opened.
    pub fn seeded() -> Self {
        let reais = |v: i64| Money::from_centavos(v * 100);

        let expenses = vec![
            Expense::seeded(
                "Contrato Indaiá (Espaço + Buffet)",
                Category::Venue,
                reais(45_000),
                reais(15_000),
            )
            .with_note("Pago sinal de 30%"),
            Expense::seeded("Pacote Floral Luxo", Category::Decor, reais(8_500), Money::ZERO),
            Expense::seeded("DJ & Iluminação Cênica", Category::Music, reais(4_200), reais(4_200)),
            Expense::seeded("Equipe de Fotografia", Category::Photo, reais(6_800), reais(1_000)),
            Expense::seeded("Bar de Drinks Extras", Category::Drink, reais(3_500), Money::ZERO),
        ];

        let guests = vec![
            Guest::seeded("Maria Silva", AgeGroup::Adult, Side::Bride, RsvpStatus::Confirmed),
            Guest::seeded("João Santos", AgeGroup::Adult, Side::Bride, RsvpStatus::Confirmed),
            Guest::seeded("Pedro Oliveira", AgeGroup::Adult, Side::Groom, RsvpStatus::Pending),
            Guest::seeded("Ana Costa", AgeGroup::Child, Side::Shared, RsvpStatus::Pending),
            Guest::seeded("Lucas Pereira", AgeGroup::Adult, Side::Groom, RsvpStatus::Declined),
        ];

        Self {
            expenses,
            guests,
            added_showcase: HashSet::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────

    /// All expenses, in insertion order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// All guests, in insertion order.
    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    /// Looks up one expense.
    pub fn expense(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id() == id)
    }

    /// Looks up one guest.
    pub fn guest(&self, id: &GuestId) -> Option<&Guest> {
        self.guests.iter().find(|g| g.id() == id)
    }

    /// Whether a showcase entry was already converted into an expense.
    pub fn is_showcase_added(&self, id: &ShowcaseItemId) -> bool {
        self.added_showcase.contains(id)
    }

    /// Derives the dashboard statistics from the current collections.
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(&self.expenses, &self.guests)
    }

    // ─────────────────────────────────────────────────────────────────
    // Expense operations
    // ─────────────────────────────────────────────────────────────────

    /// Appends an expense. The id is freshly generated at construction,
    /// so no collision check is needed.
    pub fn add_expense(&mut self, expense: Expense) -> &Expense {
        self.expenses.push(expense);
        self.expenses.last().expect("just pushed")
    }

    /// Replaces the expense with the same id (last write wins).
    pub fn update_expense(&mut self, expense: Expense) -> Result<&Expense, PlannerError> {
        match self.expenses.iter_mut().find(|e| e.id() == expense.id()) {
            Some(slot) => {
                *slot = expense;
                Ok(&*slot)
            }
            None => Err(PlannerError::ExpenseNotFound(*expense.id())),
        }
    }

    /// Removes a custom expense. Seeded contract items are refused.
    pub fn remove_expense(&mut self, id: &ExpenseId) -> Result<(), PlannerError> {
        let expense = self
            .expense(id)
            .ok_or(PlannerError::ExpenseNotFound(*id))?;
        if !expense.is_custom() {
            return Err(PlannerError::SeededExpense(*id));
        }
        self.expenses.retain(|e| e.id() != id);
        Ok(())
    }

    /// Flips the payment state of one expense.
    pub fn toggle_expense_paid(&mut self, id: &ExpenseId) -> Result<&Expense, PlannerError> {
        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(PlannerError::ExpenseNotFound(*id))?;
        expense.toggle_paid();
        Ok(&*expense)
    }

    // ─────────────────────────────────────────────────────────────────
    // Guest operations
    // ─────────────────────────────────────────────────────────────────

    /// Appends a guest.
    pub fn add_guest(&mut self, guest: Guest) -> &Guest {
        self.guests.push(guest);
        self.guests.last().expect("just pushed")
    }

    /// Replaces the guest with the same id (last write wins).
    pub fn update_guest(&mut self, guest: Guest) -> Result<&Guest, PlannerError> {
        match self.guests.iter_mut().find(|g| g.id() == guest.id()) {
            Some(slot) => {
                *slot = guest;
                Ok(&*slot)
            }
            None => Err(PlannerError::GuestNotFound(*guest.id())),
        }
    }

    /// Removes a guest unconditionally.
    pub fn remove_guest(&mut self, id: &GuestId) -> Result<(), PlannerError> {
        if self.guest(id).is_none() {
            return Err(PlannerError::GuestNotFound(*id));
        }
        self.guests.retain(|g| g.id() != id);
        Ok(())
    }

    /// Advances a guest's RSVP one step along the cycle.
    pub fn toggle_guest_rsvp(&mut self, id: &GuestId) -> Result<&Guest, PlannerError> {
        let guest = self
            .guests
            .iter_mut()
            .find(|g| g.id() == id)
            .ok_or(PlannerError::GuestNotFound(*id))?;
        guest.toggle_rsvp();
        Ok(&*guest)
    }

    // ─────────────────────────────────────────────────────────────────
    // Showcase operations
    // ─────────────────────────────────────────────────────────────────

    /// Converts a catalog entry into a budget expense. Each entry can be
    /// added once; a repeat add is rejected.
    pub fn add_showcase_item(&mut self, id: &ShowcaseItemId) -> Result<&Expense, PlannerError> {
        if self.added_showcase.contains(id) {
            return Err(PlannerError::AlreadyAdded(id.clone()));
        }
        let item =
            showcase::find_item(id).ok_or_else(|| PlannerError::ShowcaseItemNotFound(id.clone()))?;

        self.added_showcase.insert(id.clone());
        Ok(self.add_expense(item.to_expense()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom_expense(name: &str, amount: i64) -> Expense {
        Expense::new(name, Category::Extra, Money::from_centavos(amount))
    }

    #[test]
    fn seeded_planner_matches_the_opening_dashboard() {
        let planner = Planner::seeded();
        assert_eq!(planner.expenses().len(), 5);
        assert_eq!(planner.guests().len(), 5);

        let stats = planner.stats();
        assert_eq!(stats.total_budget, Money::from_centavos(6_800_000));
        assert_eq!(stats.total_paid, Money::from_centavos(2_020_000));
        assert_eq!(stats.total_pending, Money::from_centavos(4_780_000));
        assert_eq!(stats.guest_count, 5);
        assert_eq!(stats.confirmed_guests, 2);
    }

    #[test]
    fn add_update_remove_leaves_expected_survivors() {
        let mut planner = Planner::new();
        let a = *planner.add_expense(custom_expense("a", 100)).id();
        let b = *planner.add_expense(custom_expense("b", 200)).id();
        let c = *planner.add_expense(custom_expense("c", 300)).id();

        let mut replacement = planner.expense(&b).unwrap().clone();
        replacement.rename("b2");
        planner.update_expense(replacement).unwrap();
        planner.remove_expense(&a).unwrap();

        let survivors: Vec<_> = planner.expenses().iter().map(|e| *e.id()).collect();
        assert_eq!(survivors, vec![b, c]);
        assert_eq!(planner.expense(&b).unwrap().name(), "b2");
    }

    #[test]
    fn update_is_last_write_wins() {
        let mut planner = Planner::new();
        let original = custom_expense("Docinhos", 100);
        let id = *original.id();
        planner.add_expense(original);

        let mut updated = planner.expense(&id).unwrap().clone();
        updated.rename("Docinhos extras");
        updated.set_amount(Money::from_centavos(150));
        planner.update_expense(updated).unwrap();

        let stored = planner.expense(&id).unwrap();
        assert_eq!(stored.name(), "Docinhos extras");
        assert_eq!(stored.amount(), Money::from_centavos(150));
        assert_eq!(planner.expenses().len(), 1);
    }

    #[test]
    fn update_miss_reports_and_changes_nothing() {
        let mut planner = Planner::new();
        planner.add_expense(custom_expense("a", 100));
        let before = planner.expenses().to_vec();

        let stray = custom_expense("ghost", 999);
        assert!(matches!(
            planner.update_expense(stray),
            Err(PlannerError::ExpenseNotFound(_))
        ));
        assert_eq!(planner.expenses(), &before[..]);
    }

    #[test]
    fn seeded_expenses_cannot_be_removed() {
        let mut planner = Planner::seeded();
        let id = *planner.expenses()[0].id();
        assert!(matches!(
            planner.remove_expense(&id),
            Err(PlannerError::SeededExpense(_))
        ));
        assert_eq!(planner.expenses().len(), 5);
    }

    #[test]
    fn guests_are_removed_unconditionally() {
        let mut planner = Planner::seeded();
        let id = *planner.guests()[0].id();
        planner.remove_guest(&id).unwrap();
        assert_eq!(planner.guests().len(), 4);
    }

    #[test]
    fn rsvp_toggle_cycles_through_the_store() {
        let mut planner = Planner::new();
        let id = *planner
            .add_guest(Guest::new("Carla", AgeGroup::Adult, Side::Shared))
            .id();

        assert_eq!(planner.toggle_guest_rsvp(&id).unwrap().rsvp(), RsvpStatus::Confirmed);
        assert_eq!(planner.toggle_guest_rsvp(&id).unwrap().rsvp(), RsvpStatus::Declined);
        assert_eq!(planner.toggle_guest_rsvp(&id).unwrap().rsvp(), RsvpStatus::Confirmed);
    }

    #[test]
    fn showcase_add_creates_one_custom_expense() {
        let mut planner = Planner::new();
        let id = ShowcaseItemId::new("s2").unwrap();

        let expense = planner.add_showcase_item(&id).unwrap();
        assert_eq!(expense.amount(), Money::from_centavos(220_000));
        assert_eq!(expense.paid(), Money::ZERO);
        assert!(expense.is_custom());
        assert_eq!(planner.expenses().len(), 1);
        assert!(planner.is_showcase_added(&id));
    }

    #[test]
    fn showcase_add_is_once_per_item() {
        let mut planner = Planner::new();
        let id = ShowcaseItemId::new("s2").unwrap();
        planner.add_showcase_item(&id).unwrap();

        assert!(matches!(
            planner.add_showcase_item(&id),
            Err(PlannerError::AlreadyAdded(_))
        ));
        assert_eq!(planner.expenses().len(), 1);
    }

    #[test]
    fn unknown_showcase_id_is_rejected() {
        let mut planner = Planner::new();
        let id = ShowcaseItemId::new("s42").unwrap();
        assert!(matches!(
            planner.add_showcase_item(&id),
            Err(PlannerError::ShowcaseItemNotFound(_))
        ));
    }
}
