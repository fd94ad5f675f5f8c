//! User level queries.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use tracing::debug;

use super::{Workshop, WorkshopError, WorkshopResult};
use crate::domain::{Account, AccountType, Sex, User, is_man, is_woman};

/// Text returned by [`Workshop::age_description`] when there is no user.
pub const MISSING_USER: &str = "Brak użytkownika";

/// Most users [`Workshop::users_capped`] returns.
pub const USER_SET_LIMIT: usize = 10;

impl Workshop {
    /// Number of women across all companies.
    #[must_use]
    pub fn women_count(&self) -> usize {
        self.count_users(is_woman)
    }

    /// Number of users matching `predicate`.
    pub fn count_users<P>(&self, predicate: P) -> usize
    where
        P: Fn(&User) -> bool,
    {
        self.users().filter(|u| predicate(u)).count()
    }

    /// Distinct first names of users matching `predicate`.
    pub fn first_names_matching<P>(&self, predicate: P) -> BTreeSet<String>
    where
        P: Fn(&User) -> bool,
    {
        self.users()
            .filter(|u| predicate(u))
            .map(|u| u.first_name.clone())
            .collect()
    }

    /// First names of users at least `age` years old who are not men, in
    /// traversal order. Every user passing the age filter is traced.
    #[must_use]
    pub fn older_than_not_man_names(&self, age: u32) -> Vec<String> {
        self.users()
            .filter(|u| u.age >= age)
            .inspect(|u| debug!(name = %u.full_name(), age = u.age, "User passed age filter"))
            .filter(|u| !is_man(u))
            .map(|u| u.first_name.clone())
            .collect()
    }

    /// The woman with the largest balance converted into PLN.
    ///
    /// `None` when there are no women. Ties resolve to the last one found.
    pub fn richest_woman(&self) -> WorkshopResult<Option<&User>> {
        let balances = self
            .users()
            .filter(|u| is_woman(u))
            .map(|u| -> WorkshopResult<_> {
                Ok((u, Self::balance_in_pln(&u.accounts)?))
            })
            .collect::<WorkshopResult<Vec<_>>>()?;

        Ok(balances
            .into_iter()
            .max_by_key(|&(_, balance)| balance)
            .map(|(user, _)| user))
    }

    /// The first user matching `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::UserNotFound`] when nobody matches.
    pub fn find_user<P>(&self, predicate: P) -> WorkshopResult<&User>
    where
        P: Fn(&User) -> bool,
    {
        self.users()
            .find(|u| predicate(u))
            .ok_or(WorkshopError::UserNotFound)
    }

    /// Splits users into `(adults, minors)`, adults being 18 or older.
    #[must_use]
    pub fn partition_by_adulthood(&self) -> (Vec<&User>, Vec<&User>) {
        self.users().partition(|u| u.is_adult())
    }

    /// Distinct, sorted last names joined with `", "`.
    #[must_use]
    pub fn last_names_sorted(&self) -> String {
        self.users()
            .map(|u| u.last_name.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Sum of every user's age squared.
    #[must_use]
    pub fn sum_of_age_squares(&self) -> u64 {
        self.users().map(|u| u64::from(u.age).pow(2)).sum()
    }

    /// Account type → every man holding that type, with his PLN balance
    /// across his accounts of that type.
    ///
    /// Men are listed in traversal order; namesakes stay separate entries.
    pub fn men_balances_in_pln(
        &self,
    ) -> WorkshopResult<BTreeMap<AccountType, Vec<(&User, Decimal)>>> {
        let mut by_type: BTreeMap<AccountType, Vec<(&User, Decimal)>> = BTreeMap::new();
        for user in self.users().filter(|u| is_man(u)) {
            let mut owned: BTreeMap<AccountType, Vec<&Account>> = BTreeMap::new();
            for account in &user.accounts {
                owned.entry(account.account_type).or_default().push(account);
            }
            for (account_type, accounts) in owned {
                let balance = Self::balance_in_pln(accounts)?;
                by_type.entry(account_type).or_default().push((user, balance));
            }
        }
        Ok(by_type)
    }

    /// Combined PLN balance of users who are neither women nor men.
    pub fn other_sex_balance_in_pln(&self) -> WorkshopResult<Decimal> {
        Self::balance_in_pln(
            self.users()
                .filter(|u| u.sex == Sex::Other)
                .flat_map(|u| u.accounts.iter()),
        )
    }

    /// Number of users holding at least one account, keyed by adulthood
    /// (`true` for adults). Both keys are always present.
    #[must_use]
    pub fn account_holders_by_adulthood(&self) -> BTreeMap<bool, usize> {
        self.users()
            .filter(|u| !u.accounts.is_empty())
            .fold(BTreeMap::from([(true, 0), (false, 0)]), |mut acc, u| {
                *acc.entry(u.is_adult()).or_default() += 1;
                acc
            })
    }

    /// `"First Last ma lat X"`, or [`MISSING_USER`] without a user.
    #[must_use]
    pub fn age_description(user: Option<&User>) -> String {
        user.map_or_else(
            || MISSING_USER.to_string(),
            |u| format!("{} ma lat {}", u.full_name(), u.age),
        )
    }

    /// Full names of every user, sorted Z to A.
    #[must_use]
    pub fn full_names_descending(&self) -> Vec<String> {
        let mut names: Vec<String> = self.users().map(User::full_name).collect();
        names.sort_unstable_by(|a, b| b.cmp(a));
        names
    }

    /// Users in traversal order, at most [`USER_SET_LIMIT`] of them.
    #[must_use]
    pub fn users_capped(&self) -> Vec<&User> {
        self.users().take(USER_SET_LIMIT).collect()
    }

    /// Distinct first names, sorted, separated by single spaces.
    #[must_use]
    pub fn first_names_spaced(&self) -> String {
        self.users()
            .map(|u| u.first_name.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Distinct last names of men and of women. [`Sex::Other`] is skipped.
    #[must_use]
    pub fn last_names_by_sex(&self) -> BTreeMap<Sex, BTreeSet<&str>> {
        self.users()
            .filter(|u| u.sex != Sex::Other)
            .fold(BTreeMap::new(), |mut acc, u| {
                acc.entry(u.sex).or_default().insert(u.last_name.as_str());
                acc
            })
    }

    /// Mean age of all users.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::EmptyAggregation`] when there are no users.
    pub fn average_age(&self) -> WorkshopResult<Decimal> {
        let (count, total) = self
            .users()
            .fold((0u64, 0u64), |(count, total), u| (count + 1, total + u64::from(u.age)));
        if count == 0 {
            return Err(WorkshopError::EmptyAggregation("users"));
        }
        Ok(Decimal::from(total) / Decimal::from(count))
    }

    /// `n` distinct users sampled from every user of this workshop.
    ///
    /// For [`Workshop::new`] that is the whole generated fixture.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::NotEnoughUsers`] when `n` exceeds the number
    /// of users.
    pub fn random_users(&self, n: usize) -> WorkshopResult<Vec<&User>> {
        self.random_users_with(n, &mut rand::rng())
    }

    /// Like [`Workshop::random_users`], drawing from the given generator.
    pub fn random_users_with<R>(&self, n: usize, rng: &mut R) -> WorkshopResult<Vec<&User>>
    where
        R: Rng + ?Sized,
    {
        let mut pool: Vec<&User> = self.users().collect();
        if n > pool.len() {
            return Err(WorkshopError::NotEnoughUsers {
                requested: n,
                available: pool.len(),
            });
        }
        pool.shuffle(rng);
        pool.truncate(n);
        Ok(pool)
    }
}
