//! Conversion of accounts into PLN.

use rust_decimal::Decimal;

use super::{Workshop, WorkshopError, WorkshopResult};
use crate::currency;
use crate::domain::Account;

impl Workshop {
    /// Converts an account balance into PLN.
    ///
    /// `amount × rate`, rounded half-up to 4 significant digits.
    pub fn to_pln(account: &Account) -> WorkshopResult<Decimal> {
        Ok(currency::to_base(account.amount, account.currency)?)
    }

    /// Converts every account into PLN, preserving order.
    pub fn to_pln_list<'a, I>(accounts: I) -> WorkshopResult<Vec<Decimal>>
    where
        I: IntoIterator<Item = &'a Account>,
    {
        accounts.into_iter().map(Self::to_pln).collect()
    }

    /// Sum of the PLN conversions of `accounts`.
    ///
    /// Each account is rounded before summation, so the result equals the sum
    /// of [`Workshop::to_pln`] over the input.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::EmptyAggregation`] when `accounts` is empty.
    pub fn sum_to_pln<'a, I>(accounts: I) -> WorkshopResult<Decimal>
    where
        I: IntoIterator<Item = &'a Account>,
    {
        Self::to_pln_list(accounts)?
            .into_iter()
            .reduce(|total, amount| total + amount)
            .ok_or(WorkshopError::EmptyAggregation("accounts"))
    }

    /// Balance of a group of accounts in PLN, zero when there are none.
    pub(crate) fn balance_in_pln<'a, I>(accounts: I) -> WorkshopResult<Decimal>
    where
        I: IntoIterator<Item = &'a Account>,
    {
        accounts
            .into_iter()
            .try_fold(Decimal::ZERO, |total, account| {
                Ok::<_, WorkshopError>(total + Self::to_pln(account)?)
            })
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use rust_decimal_macros::dec;

    use super::*;

    #[fixture]
    fn workshop() -> Workshop {
        Workshop::new()
    }

    fn fanta_accounts(workshop: &Workshop) -> Vec<&Account> {
        workshop
            .companies()
            .filter(|c| c.name == "Fanta")
            .flat_map(|c| c.users.iter())
            .flat_map(|u| u.accounts.iter())
            .collect()
    }

    #[rstest]
    fn test_to_pln_first_account(workshop: Workshop) {
        let first = workshop.accounts().next().unwrap();
        assert_eq!(first.number.as_str(), "PL10001");
        assert_eq!(Workshop::to_pln(first).unwrap(), dec!(1521));
    }

    #[rstest]
    fn test_to_pln_list_preserves_order(workshop: Workshop) {
        let accounts = fanta_accounts(&workshop);
        assert_eq!(
            Workshop::to_pln_list(accounts).unwrap(),
            vec![dec!(1521), dec!(991.3), dec!(8700), dec!(120.8)]
        );
    }

    #[rstest]
    fn test_sum_to_pln_fanta(workshop: Workshop) {
        let accounts = fanta_accounts(&workshop);
        assert_eq!(Workshop::sum_to_pln(accounts).unwrap(), dec!(11333.1));
    }

    #[rstest]
    fn test_sum_to_pln_all_accounts(workshop: Workshop) {
        assert_eq!(
            Workshop::sum_to_pln(workshop.accounts()).unwrap(),
            dec!(375326.55)
        );
    }

    #[test]
    fn test_sum_to_pln_empty_fails() {
        let result = Workshop::sum_to_pln(&Vec::<Account>::new());
        assert!(matches!(
            result,
            Err(WorkshopError::EmptyAggregation("accounts"))
        ));
    }

    #[test]
    fn test_balance_in_pln_empty_is_zero() {
        let balance = Workshop::balance_in_pln(std::iter::empty::<&Account>()).unwrap();
        assert_eq!(balance, Decimal::ZERO);
    }
}
