//! Company level queries.

use std::collections::{BTreeMap, LinkedList};

use rust_decimal::Decimal;
use workshop_shared::types::Currency;

use super::{Workshop, WorkshopError, WorkshopResult};
use crate::domain::{Company, User};

impl Workshop {
    fn sorted_company_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.companies().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Company names in traversal order.
    #[must_use]
    pub fn company_names(&self) -> Vec<String> {
        self.companies().map(|c| c.name.clone()).collect()
    }

    /// Company names in traversal order, collected straight into a linked list.
    #[must_use]
    pub fn company_names_linked(&self) -> LinkedList<String> {
        self.companies().map(|c| c.name.clone()).collect()
    }

    /// `"Names: A + B + ... + Z."` over the sorted company names.
    #[must_use]
    pub fn company_names_plus_delimited(&self) -> String {
        format!("Names: {}.", self.sorted_company_names().join(" + "))
    }

    /// Sorted company names joined by `" + "`, built with a single fold.
    #[must_use]
    pub fn company_names_folded(&self) -> String {
        self.sorted_company_names()
            .into_iter()
            .fold(String::new(), |mut acc, name| {
                if !acc.is_empty() {
                    acc.push_str(" + ");
                }
                acc.push_str(name);
                acc
            })
    }

    /// Names of the first `n` companies in traversal order.
    #[must_use]
    pub fn first_company_names(&self, n: usize) -> Vec<String> {
        self.companies().take(n).map(|c| c.name.clone()).collect()
    }

    /// Runs `action` once for every company.
    pub fn for_each_company<F>(&self, action: F)
    where
        F: FnMut(&Company),
    {
        self.companies().for_each(action);
    }

    /// Company name → `mapper(user)` for each of its employees.
    ///
    /// Companies sharing a name are merged into one entry.
    pub fn map_users_per_company<'a, T, F>(&'a self, mapper: F) -> BTreeMap<String, Vec<T>>
    where
        F: Fn(&'a User) -> T,
    {
        self.companies().fold(BTreeMap::new(), |mut map, company| {
            map.entry(company.name.clone())
                .or_insert_with(Vec::new)
                .extend(company.users.iter().map(&mapper));
            map
        })
    }

    /// Company name → employees.
    #[must_use]
    pub fn users_per_company(&self) -> BTreeMap<String, Vec<&User>> {
        self.map_users_per_company(|user| user)
    }

    /// Company name → `"First Last"` of each employee.
    #[must_use]
    pub fn user_full_names_per_company(&self) -> BTreeMap<String, Vec<String>> {
        self.map_users_per_company(User::full_name)
    }

    /// Companies grouped by name with their employee counts summed.
    #[must_use]
    pub fn employees_by_company_name(&self) -> BTreeMap<String, usize> {
        self.companies().fold(BTreeMap::new(), |mut map, company| {
            *map.entry(company.name.clone()).or_insert(0) += company.employee_count();
            map
        })
    }

    /// Company name → sum of every employee account converted into PLN.
    pub fn company_balances_in_pln(&self) -> WorkshopResult<BTreeMap<String, Decimal>> {
        self.companies().try_fold(BTreeMap::new(), |mut map, company| {
            let balance =
                Self::balance_in_pln(company.users.iter().flat_map(|u| u.accounts.iter()))?;
            *map.entry(company.name.clone()).or_insert(Decimal::ZERO) += balance;
            Ok::<_, WorkshopError>(map)
        })
    }

    /// Sorted, `", "`-joined names of companies with at least one account in
    /// `currency`.
    #[must_use]
    pub fn companies_with_currency(&self, currency: Currency) -> String {
        let mut names: Vec<&str> = self
            .companies()
            .filter(|c| {
                c.users
                    .iter()
                    .flat_map(|u| u.accounts.iter())
                    .any(|a| a.currency == currency)
            })
            .map(|c| c.name.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();
        names.join(", ")
    }
}
