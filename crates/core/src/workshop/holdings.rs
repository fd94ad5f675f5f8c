//! Holding level queries.

use super::Workshop;

impl Workshop {
    /// Number of holdings owning at least one company.
    #[must_use]
    pub fn holdings_with_companies_count(&self) -> usize {
        self.holdings
            .iter()
            .filter(|h| !h.companies.is_empty())
            .count()
    }

    /// Holding names in generation order.
    #[must_use]
    pub fn holding_names(&self) -> Vec<String> {
        self.holdings.iter().map(|h| h.name.clone()).collect()
    }

    /// Sorted holding names joined with `", "`.
    #[must_use]
    pub fn holding_names_joined(&self) -> String {
        let mut names: Vec<&str> = self.holdings.iter().map(|h| h.name.as_str()).collect();
        names.sort_unstable();
        names.join(", ")
    }

    /// Number of companies across all holdings.
    #[must_use]
    pub fn total_companies(&self) -> usize {
        self.holdings.iter().map(|h| h.companies.len()).sum()
    }

    /// Number of employees across all companies.
    #[must_use]
    pub fn total_employees(&self) -> usize {
        self.holdings
            .iter()
            .flat_map(|h| h.companies.iter().map(|c| c.users.len()))
            .sum()
    }
}
