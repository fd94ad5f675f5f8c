//! Deterministic fixture generator.
//!
//! Produces the same Holding → Company → User → Account tree on every call.
//! Account numbers are issued sequentially in traversal order, starting at
//! `PL10001`. Fixture literals in the query tests depend on this data, so any
//! change here must be mirrored there.

use rust_decimal::Decimal;
use workshop_shared::types::{AccountNumber, Currency};

use crate::domain::{Account, AccountType, Company, Holding, Sex, User};

use crate::domain::AccountType::{Lo1, Lo2, Ro1, Ror1, Ror2};
use workshop_shared::types::Currency::{Chf, Eur, Pln, Usd};

/// Balance in hundredths, currency, kind.
type AccountRow = (i64, Currency, AccountType);
/// First name, last name, age, sex, accounts.
type UserRow = (&'static str, &'static str, u32, Sex, &'static [AccountRow]);
type CompanyRow = (&'static str, &'static [UserRow]);
type HoldingRow = (&'static str, &'static [CompanyRow]);

#[rustfmt::skip]
const FIXTURE: &[HoldingRow] = &[
    (
        "Coca-Cola",
        &[
            (
                "Fanta",
                &[
                    ("Anna", "Kowalska", 34, Sex::Woman, &[(152050, Pln, Ror1), (23000, Eur, Lo1)]),
                    ("Jan", "Nowak", 45, Sex::Man, &[(870000, Pln, Ror1)]),
                    ("Zofia", "Wisniewska", 17, Sex::Woman, &[(12075, Pln, Ror2)]),
                ],
            ),
            (
                "Sprite",
                &[
                    ("Piotr", "Wojcik", 52, Sex::Man, &[(1200000, Usd, Lo2), (45025, Pln, Ror1)]),
                    ("Maria", "Kaminska", 29, Sex::Woman, &[(310040, Chf, Ro1), (9510, Pln, Ror1)]),
                ],
            ),
        ],
    ),
    (
        "Nestle",
        &[
            (
                "Nescafe",
                &[
                    ("Tomasz", "Lewandowski", 38, Sex::Man, &[(64000, Eur, Ror1)]),
                    ("Anna", "Zielinska", 16, Sex::Woman, &[(5555, Pln, Ror2)]),
                    ("Alex", "Szymanski", 27, Sex::Other, &[(275080, Pln, Ror1), (98000, Usd, Lo1)]),
                ],
            ),
            (
                "Gerber",
                &[
                    ("Katarzyna", "Wozniak", 61, Sex::Woman, &[(2500000, Chf, Lo2), (178030, Eur, Ror1)]),
                    ("Jan", "Dabrowski", 15, Sex::Man, &[(4000, Pln, Ror2)]),
                ],
            ),
            (
                "Nestea",
                &[
                    ("Michal", "Kozlowski", 41, Sex::Man, &[(530000, Pln, Ror1), (76045, Eur, Ro1)]),
                    ("Ewa", "Jankowska", 23, Sex::Woman, &[(121000, Pln, Ror1)]),
                    ("Pawel", "Mazur", 33, Sex::Man, &[(1540060, Usd, Lo2), (32000, Pln, Ror1)]),
                ],
            ),
        ],
    ),
    (
        "Pepsico",
        &[
            (
                "Lays",
                &[
                    ("Agnieszka", "Krawczyk", 47, Sex::Woman, &[(985000, Eur, Lo1), (41020, Pln, Ror1)]),
                    ("Krzysztof", "Piotrowski", 58, Sex::Man, &[(220000, Chf, Ror1)]),
                ],
            ),
            (
                "Pepsi",
                &[
                    ("Magdalena", "Grabowska", 36, Sex::Woman, &[(730090, Pln, Ror1), (15000, Usd, Ro1), (410000, Eur, Lo1)]),
                    ("Robin", "Nowakowski", 19, Sex::Other, &[(8880, Pln, Ror2)]),
                    ("Andrzej", "Pawlowski", 64, Sex::Man, &[(3100000, Pln, Lo2), (120000, Chf, Ror1)]),
                ],
            ),
            (
                "Mirinda",
                &[
                    ("Joanna", "Michalska", 31, Sex::Woman, &[(264000, Pln, Ror1), (58070, Usd, Ro1)]),
                    ("Marek", "Krol", 26, Sex::Man, &[(190000, Pln, Ror1), (30000, Eur, Ror2), (7525, Chf, Ro1), (640000, Pln, Lo1)]),
                ],
            ),
        ],
    ),
];

/// Builds the fixture tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldingMockGenerator;

impl HoldingMockGenerator {
    /// Creates a new generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates the holdings tree.
    #[must_use]
    pub fn generate(&self) -> Vec<Holding> {
        let mut seq: u16 = 0;
        FIXTURE
            .iter()
            .map(|(name, companies)| {
                let companies = companies
                    .iter()
                    .map(|(name, users)| {
                        let users = users
                            .iter()
                            .map(|row| build_user(row, &mut seq))
                            .collect();
                        Company::new(*name, users)
                    })
                    .collect();
                Holding::new(*name, companies)
            })
            .collect()
    }

    /// Every generated user, flattened in traversal order.
    #[cfg(test)]
    pub(crate) fn user_pool(&self) -> Vec<User> {
        self.generate()
            .into_iter()
            .flat_map(|holding| holding.companies)
            .flat_map(|company| company.users)
            .collect()
    }
}

fn build_user(&(first, last, age, sex, accounts): &UserRow, seq: &mut u16) -> User {
    let accounts = accounts
        .iter()
        .map(|&(hundredths, currency, account_type)| {
            *seq += 1;
            Account::new(
                AccountNumber::sequential(*seq),
                Decimal::new(hundredths, 2),
                currency,
                account_type,
            )
        })
        .collect();
    User::new(first, last, age, sex, accounts)
}
