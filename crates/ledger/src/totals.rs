//! Aggregate totals derived from the live record lists.

use serde::Serialize;

use crate::amount::Amount;
use crate::record::{Expense, Member};

/// Fund totals: what came in, what went out, and what is left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub expenses: f64,
    pub members: f64,
    pub balance: f64,
}

impl Totals {
    /// Sum both lists. Amounts that are not numbers count as zero.
    pub fn compute(members: &[Member], expenses: &[Expense]) -> Self {
        let members_total = sum("member", members.iter().map(|m| &m.amount));
        let expenses_total = sum("expense", expenses.iter().map(|e| &e.amount));

        Self {
            expenses: expenses_total,
            members: members_total,
            balance: members_total - expenses_total,
        }
    }
}

fn sum<'a>(kind: &str, amounts: impl Iterator<Item = &'a Amount>) -> f64 {
    amounts
        .map(|amount| match amount.value() {
            Some(v) => v,
            None => {
                tracing::warn!(kind, amount = %amount, "non-numeric amount counted as zero");
                0.0
            }
        })
        // `Sum for f64` starts from -0.0; an empty ledger must total +0.0.
        .fold(0.0, |acc, v| acc + v)
}

/// Summary shown on the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dashboard {
    pub totals: Totals,
    pub member_count: usize,
    pub expense_count: usize,
}

impl Dashboard {
    pub fn compute(members: &[Member], expenses: &[Expense]) -> Self {
        Self {
            totals: Totals::compute(members, expenses),
            member_count: members.len(),
            expense_count: expenses.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn member(name: &str, amount: &str) -> Member {
        Member::new(name, amount).unwrap()
    }

    fn expense(item: &str, amount: &str) -> Expense {
        Expense::new(item, amount, None).unwrap()
    }

    #[test]
    fn balance_is_contributions_minus_expenses() {
        let totals = Totals::compute(&[member("A", "100")], &[expense("Food", "40")]);

        assert_eq!(
            totals,
            Totals {
                members: 100.0,
                expenses: 40.0,
                balance: 60.0,
            }
        );
    }

    #[test]
    fn empty_lists_total_zero() {
        assert_eq!(Totals::compute(&[], &[]), Totals::default());
    }

    #[test]
    fn empty_totals_serialize_as_positive_zero() {
        let totals = Totals::compute(&[], &[]);

        assert!(totals.members.is_sign_positive());
        assert!(totals.expenses.is_sign_positive());
        assert!(totals.balance.is_sign_positive());
        assert_eq!(
            serde_json::to_value(totals).unwrap(),
            serde_json::json!({ "expenses": 0.0, "members": 0.0, "balance": 0.0 })
        );
        assert_eq!(
            serde_json::to_string(&totals).unwrap(),
            r#"{"expenses":0.0,"members":0.0,"balance":0.0}"#
        );
    }

    #[test]
    fn non_numeric_amount_counts_as_zero() {
        let members = vec![
            member("A", "100"),
            Member {
                name: "B".to_string(),
                amount: Amount::new("lots"),
            },
        ];
        let totals = Totals::compute(&members, &[]);
        assert_eq!(totals.members, 100.0);
        assert_eq!(totals.balance, 100.0);
    }

    #[test]
    fn balance_may_go_negative() {
        let totals = Totals::compute(&[member("A", "10")], &[expense("Idol", "250.5")]);
        assert_eq!(totals.balance, -240.5);
    }

    #[test]
    fn dashboard_counts_records() {
        let dashboard = Dashboard::compute(
            &[member("A", "1"), member("B", "2")],
            &[expense("Lights", "3")],
        );
        assert_eq!(dashboard.member_count, 2);
        assert_eq!(dashboard.expense_count, 1);
        assert_eq!(dashboard.totals.balance, 0.0);
    }

    proptest! {
        #[test]
        fn totals_match_integer_sums(
            contributions in prop::collection::vec(0i64..1_000_000i64, 0..20),
            spends in prop::collection::vec(0i64..1_000_000i64, 0..20),
        ) {
            let members: Vec<Member> = contributions
                .iter()
                .map(|a| member("m", &a.to_string()))
                .collect();
            let expenses: Vec<Expense> = spends
                .iter()
                .map(|a| expense("e", &a.to_string()))
                .collect();

            let totals = Totals::compute(&members, &expenses);
            let in_total: i64 = contributions.iter().sum();
            let out_total: i64 = spends.iter().sum();

            prop_assert_eq!(totals.members, in_total as f64);
            prop_assert_eq!(totals.expenses, out_total as f64);
            prop_assert_eq!(totals.balance, (in_total - out_total) as f64);
        }

        #[test]
        fn totals_match_decimal_sums(
            contributions in prop::collection::vec(0i64..100_000_000i64, 0..20),
            spends in prop::collection::vec(0i64..100_000_000i64, 0..20),
        ) {
            // Amounts in paise, rendered as rupee strings with two decimals.
            let text = |paise: &i64| format!("{}.{:02}", paise / 100, paise % 100);
            let members: Vec<Member> = contributions
                .iter()
                .map(|p| member("m", &text(p)))
                .collect();
            let expenses: Vec<Expense> = spends
                .iter()
                .map(|p| expense("e", &text(p)))
                .collect();

            let totals = Totals::compute(&members, &expenses);
            let in_total = contributions.iter().sum::<i64>() as f64 / 100.0;
            let out_total = spends.iter().sum::<i64>() as f64 / 100.0;

            prop_assert!((totals.members - in_total).abs() < 1e-6);
            prop_assert!((totals.expenses - out_total).abs() < 1e-6);
            prop_assert!((totals.balance - (in_total - out_total)).abs() < 1e-6);
            prop_assert_eq!(totals.balance, totals.members - totals.expenses);
        }
    }
}
