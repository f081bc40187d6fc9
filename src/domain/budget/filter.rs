//! Pure filtering for the budget view.

use super::{Category, Expense};

/// Filter criteria for the budget list.
///
/// Category match and name search compose with logical AND. Filtering
/// never mutates the underlying collection and preserves its order.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Exact category match; `None` is the "Todos" wildcard.
    pub category: Option<Category>,
    /// Case-insensitive substring match on the expense name.
    pub search: Option<String>,
}

impl ExpenseFilter {
    /// Matches everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts to one category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Restricts to names containing the term (case-insensitive).
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Whether a single expense passes the filter.
    pub fn matches(&self, expense: &Expense) -> bool {
        let category_ok = self
            .category
            .map_or(true, |category| expense.category() == category);
        let search_ok = self.search.as_ref().map_or(true, |term| {
            expense.name().to_lowercase().contains(&term.to_lowercase())
        });
        category_ok && search_ok
    }

    /// Applies the filter, preserving relative order.
    pub fn apply<'a>(&self, expenses: &'a [Expense]) -> Vec<&'a Expense> {
        expenses.iter().filter(|e| self.matches(e)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Money;

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new("Pacote Floral Luxo", Category::Decor, Money::from_centavos(850_000)),
            Expense::new("DJ & Iluminação Cênica", Category::Music, Money::from_centavos(420_000)),
            Expense::new("Flores da mesa", Category::Decor, Money::from_centavos(90_000)),
        ]
    }

    #[test]
    fn default_filter_matches_everything() {
        let expenses = sample();
        assert_eq!(ExpenseFilter::all().apply(&expenses).len(), 3);
    }

    #[test]
    fn category_and_search_compose_with_and() {
        let expenses = sample();
        let filter = ExpenseFilter::all()
            .with_category(Category::Decor)
            .with_search("floral");
        let hits = filter.apply(&expenses);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), "Pacote Floral Luxo");
    }

    #[test]
    fn search_is_case_insensitive() {
        let expenses = sample();
        let filter = ExpenseFilter::all().with_search("FLOR");
        assert_eq!(filter.apply(&expenses).len(), 2);
    }

    #[test]
    fn filtering_preserves_order() {
        let expenses = sample();
        let hits = ExpenseFilter::all().with_category(Category::Decor).apply(&expenses);
        assert_eq!(hits[0].name(), "Pacote Floral Luxo");
        assert_eq!(hits[1].name(), "Flores da mesa");
    }
}
