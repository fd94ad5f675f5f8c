//! Account and currency queries.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use workshop_shared::types::{AccountNumber, Currency};

use super::{Workshop, WorkshopError, WorkshopResult};
use crate::domain::{Account, AccountType};

impl Workshop {
    /// Number of accounts across all users.
    #[must_use]
    pub fn accounts_count(&self) -> usize {
        self.accounts().count()
    }

    /// Distinct currencies held by any account.
    #[must_use]
    pub fn currencies(&self) -> BTreeSet<Currency> {
        self.accounts().map(|a| a.currency).collect()
    }

    /// Distinct, sorted currency codes joined with `", "`.
    #[must_use]
    pub fn currencies_joined(&self) -> String {
        self.accounts()
            .map(|a| a.currency.to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Same output as [`Workshop::currencies_joined`], pulled from a generator
    /// over the materialised codes instead of a second traversal.
    #[must_use]
    pub fn currencies_joined_generated(&self) -> String {
        let codes = self.currency_codes();
        let mut source = codes.iter();
        std::iter::from_fn(|| source.next())
            .take(codes.len())
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn currency_codes(&self) -> Vec<String> {
        self.accounts().map(|a| a.currency.to_string()).collect()
    }

    /// The account type held strictly more often than any other.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::NoDominantAccountType`] on a tie for first place
    /// or when there are no accounts.
    pub fn most_popular_account_type(&self) -> WorkshopResult<AccountType> {
        let counts = self
            .accounts()
            .fold(BTreeMap::<AccountType, usize>::new(), |mut counts, a| {
                *counts.entry(a.account_type).or_insert(0) += 1;
                counts
            });
        let top = counts.values().copied().max().unwrap_or(0);
        let candidates: Vec<AccountType> = counts
            .into_iter()
            .filter(|&(_, count)| count == top)
            .map(|(account_type, _)| account_type)
            .collect();

        match candidates.as_slice() {
            [winner] => Ok(*winner),
            _ => Err(WorkshopError::NoDominantAccountType { candidates }),
        }
    }

    /// Account number → account.
    #[must_use]
    pub fn accounts_by_number(&self) -> BTreeMap<&AccountNumber, &Account> {
        self.accounts().map(|a| (&a.number, a)).collect()
    }

    /// Account number → `"First Last"` of its owner.
    #[must_use]
    pub fn account_owners(&self) -> BTreeMap<&AccountNumber, String> {
        self.users()
            .flat_map(|u| u.accounts.iter().map(move |a| (&a.number, u.full_name())))
            .collect()
    }

    /// Account type → sum of its accounts converted into PLN.
    pub fn balance_by_account_type_in_pln(&self) -> WorkshopResult<BTreeMap<AccountType, Decimal>> {
        self.accounts().try_fold(BTreeMap::new(), |mut map, account| {
            *map.entry(account.account_type).or_insert(Decimal::ZERO) += Self::to_pln(account)?;
            Ok::<_, WorkshopError>(map)
        })
    }

    /// Currency → number of accounts held in it.
    #[must_use]
    pub fn accounts_count_by_currency(&self) -> BTreeMap<Currency, usize> {
        self.accounts().fold(BTreeMap::new(), |mut map, account| {
            *map.entry(account.currency).or_insert(0) += 1;
            map
        })
    }

    /// Every account number, sorted.
    #[must_use]
    pub fn account_numbers_sorted(&self) -> Vec<String> {
        self.accounts()
            .map(|a| &a.number)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }
}
