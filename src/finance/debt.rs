//! Debt payoff planning: snowball and avalanche
//!
//! Both strategies share one month-by-month simulation and differ only in the
//! order debts are targeted:
//!
//! - **Snowball**: smallest balance first (ties: higher rate first)
//! - **Avalanche**: highest rate first (ties: smaller balance first)
//!
//! The monthly budget is the sum of every minimum payment plus the extra
//! payment, and it never shrinks. Once a debt is cleared its minimum keeps
//! flowing, now toward the next target. Each month:
//!
//! 1. interest accrues on every open debt,
//! 2. every open debt receives its minimum (capped at its balance),
//! 3. whatever remains of the budget goes to open debts in priority order.
//!
//! The simulation ends when every balance is cleared or after
//! [`MAX_PAYOFF_MONTHS`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{monthly_rate, non_negative, BALANCE_EPSILON, MAX_PAYOFF_MONTHS};

/// A single debt to be paid off
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub name: String,
    pub balance: f64,
    /// Annual interest rate, percent
    pub annual_rate: f64,
    pub minimum_payment: f64,
}

impl Debt {
    pub fn new(name: impl Into<String>, balance: f64, annual_rate: f64, minimum_payment: f64) -> Self {
        Self {
            name: name.into(),
            balance,
            annual_rate,
            minimum_payment,
        }
    }
}

/// Order in which extra money is thrown at debts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoffStrategy {
    Snowball,
    Avalanche,
}

impl PayoffStrategy {
    /// Priority comparison between two debts (earlier = paid first)
    fn compare(&self, a: &Debt, b: &Debt) -> Ordering {
        match self {
            Self::Snowball => a
                .balance
                .total_cmp(&b.balance)
                .then_with(|| b.annual_rate.total_cmp(&a.annual_rate)),
            Self::Avalanche => b
                .annual_rate
                .total_cmp(&a.annual_rate)
                .then_with(|| a.balance.total_cmp(&b.balance)),
        }
    }
}

impl fmt::Display for PayoffStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Snowball => write!(f, "Snowball"),
            Self::Avalanche => write!(f, "Avalanche"),
        }
    }
}

impl FromStr for PayoffStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "snowball" => Ok(Self::Snowball),
            "avalanche" => Ok(Self::Avalanche),
            other => Err(format!("unknown payoff strategy '{}'", other)),
        }
    }
}

/// How one debt fared under a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPayoffSummary {
    pub name: String,
    pub original_balance: f64,
    pub annual_rate: f64,
    /// Month in which the balance reached zero; `None` if it never did
    pub payoff_month: Option<u32>,
    pub interest_paid: f64,
    pub total_paid: f64,
}

/// Totals across all debts for one simulated month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProgress {
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub remaining_balance: f64,
}

/// A complete payoff plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPayoffPlan {
    pub strategy: PayoffStrategy,
    pub total_months: u32,
    pub total_interest: f64,
    pub total_payment: f64,
    /// False when the budget cannot clear every debt within the simulation cap
    pub paid_off: bool,
    /// Debts in payoff-priority order
    pub debts: Vec<DebtPayoffSummary>,
    pub monthly_progress: Vec<MonthlyProgress>,
}

/// Side-by-side comparison of both strategies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub snowball: DebtPayoffPlan,
    pub avalanche: DebtPayoffPlan,
    /// Snowball interest minus avalanche interest
    pub interest_saved: f64,
    /// Snowball months minus avalanche months
    pub months_saved: i64,
}

/// Plan a payoff that targets the smallest balance first
pub fn calculate_debt_snowball(debts: &[Debt], extra_payment: f64) -> DebtPayoffPlan {
    simulate_payoff(debts, extra_payment, PayoffStrategy::Snowball)
}

/// Plan a payoff that targets the highest interest rate first
pub fn calculate_debt_avalanche(debts: &[Debt], extra_payment: f64) -> DebtPayoffPlan {
    simulate_payoff(debts, extra_payment, PayoffStrategy::Avalanche)
}

/// Run both strategies on the same debts
pub fn compare_strategies(debts: &[Debt], extra_payment: f64) -> StrategyComparison {
    let snowball = calculate_debt_snowball(debts, extra_payment);
    let avalanche = calculate_debt_avalanche(debts, extra_payment);

    StrategyComparison {
        interest_saved: snowball.total_interest - avalanche.total_interest,
        months_saved: snowball.total_months as i64 - avalanche.total_months as i64,
        snowball,
        avalanche,
    }
}

/// Mutable per-debt state during the simulation
struct OpenDebt {
    summary: DebtPayoffSummary,
    balance: f64,
    rate: f64,
    minimum: f64,
}

impl OpenDebt {
    fn is_open(&self) -> bool {
        self.balance >= BALANCE_EPSILON
    }

    fn pay(&mut self, amount: f64) -> f64 {
        let paid = amount.min(self.balance).max(0.0);
        self.balance -= paid;
        self.summary.total_paid += paid;
        paid
    }

    fn close_if_cleared(&mut self, month: u32) {
        if self.summary.payoff_month.is_none() && !self.is_open() {
            self.balance = 0.0;
            self.summary.payoff_month = Some(month);
        }
    }
}

fn simulate_payoff(debts: &[Debt], extra_payment: f64, strategy: PayoffStrategy) -> DebtPayoffPlan {
    let mut ordered: Vec<Debt> = debts
        .iter()
        .map(|d| Debt {
            name: d.name.clone(),
            balance: non_negative(d.balance),
            annual_rate: non_negative(d.annual_rate),
            minimum_payment: non_negative(d.minimum_payment),
        })
        .collect();
    ordered.sort_by(|a, b| strategy.compare(a, b));

    let budget: f64 =
        ordered.iter().map(|d| d.minimum_payment).sum::<f64>() + non_negative(extra_payment);

    let mut open: Vec<OpenDebt> = ordered
        .into_iter()
        .map(|d| OpenDebt {
            summary: DebtPayoffSummary {
                name: d.name,
                original_balance: d.balance,
                annual_rate: d.annual_rate,
                payoff_month: None,
                interest_paid: 0.0,
                total_paid: 0.0,
            },
            balance: d.balance,
            rate: monthly_rate(d.annual_rate),
            minimum: d.minimum_payment,
        })
        .collect();

    for debt in &mut open {
        debt.close_if_cleared(0);
    }

    let mut month = 0;
    let mut total_interest = 0.0;
    let mut total_payment = 0.0;
    let mut monthly_progress = Vec::new();

    while open.iter().any(OpenDebt::is_open) && month < MAX_PAYOFF_MONTHS {
        month += 1;

        let mut interest_this_month = 0.0;
        for debt in open.iter_mut().filter(|d| d.is_open()) {
            let interest = debt.balance * debt.rate;
            debt.balance += interest;
            debt.summary.interest_paid += interest;
            interest_this_month += interest;
        }

        let mut available = budget;
        for debt in open.iter_mut().filter(|d| d.is_open()) {
            let minimum = debt.minimum.min(available);
            available -= debt.pay(minimum);
        }

        for debt in open.iter_mut() {
            if available <= 0.0 {
                break;
            }
            if debt.is_open() {
                available -= debt.pay(available);
            }
        }

        for debt in &mut open {
            debt.close_if_cleared(month);
        }

        let paid_this_month = budget - available;
        total_interest += interest_this_month;
        total_payment += paid_this_month;

        monthly_progress.push(MonthlyProgress {
            month,
            payment: paid_this_month,
            interest: interest_this_month,
            remaining_balance: open.iter().map(|d| d.balance).sum(),
        });
    }

    let paid_off = !open.iter().any(OpenDebt::is_open);

    DebtPayoffPlan {
        strategy,
        total_months: month,
        total_interest,
        total_payment,
        paid_off,
        debts: open.into_iter().map(|d| d.summary).collect(),
        monthly_progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_debts() -> Vec<Debt> {
        vec![
            Debt::new("Credit Card", 5_000.0, 22.0, 150.0),
            Debt::new("Car Loan", 12_000.0, 6.0, 300.0),
            Debt::new("Medical", 800.0, 0.0, 50.0),
            Debt::new("Store Card", 2_500.0, 27.0, 75.0),
        ]
    }

    fn order(plan: &DebtPayoffPlan) -> Vec<&str> {
        plan.debts.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_snowball_orders_by_balance() {
        let plan = calculate_debt_snowball(&sample_debts(), 200.0);
        assert_eq!(order(&plan), vec!["Medical", "Store Card", "Credit Card", "Car Loan"]);
    }

    #[test]
    fn test_avalanche_orders_by_rate() {
        let plan = calculate_debt_avalanche(&sample_debts(), 200.0);
        assert_eq!(order(&plan), vec!["Store Card", "Credit Card", "Car Loan", "Medical"]);
    }

    #[test]
    fn test_plan_pays_everything() {
        let plan = calculate_debt_snowball(&sample_debts(), 200.0);
        assert!(plan.paid_off);
        assert!(plan.total_months > 0 && plan.total_months < MAX_PAYOFF_MONTHS);
        assert_eq!(plan.monthly_progress.len(), plan.total_months as usize);
        assert_eq!(plan.monthly_progress.last().unwrap().remaining_balance, 0.0);
        assert!(plan.debts.iter().all(|d| d.payoff_month.is_some()));

        let principal: f64 = sample_debts().iter().map(|d| d.balance).sum();
        assert!((plan.total_payment - (principal + plan.total_interest)).abs() < 0.05);
    }

    #[test]
    fn test_avalanche_never_costs_more_interest() {
        let comparison = compare_strategies(&sample_debts(), 200.0);
        assert!(comparison.avalanche.total_interest <= comparison.snowball.total_interest);
        assert!(comparison.interest_saved >= 0.0);
    }

    #[test]
    fn test_avalanche_never_costs_more_across_debt_mixes() {
        let mixes = vec![
            // Equal balances, different rates
            vec![
                Debt::new("A", 3_000.0, 9.0, 90.0),
                Debt::new("B", 3_000.0, 24.0, 90.0),
                Debt::new("C", 3_000.0, 15.0, 90.0),
            ],
            // Large low-rate debt beside a small high-rate one
            vec![
                Debt::new("Mortgage-like", 40_000.0, 3.5, 400.0),
                Debt::new("Payday", 900.0, 35.0, 60.0),
            ],
            // Small low-rate debt beside a large high-rate one
            vec![
                Debt::new("Family Loan", 1_000.0, 0.0, 50.0),
                Debt::new("Card", 10_000.0, 25.0, 250.0),
            ],
            // Many debts with scattered rates and minimums
            vec![
                Debt::new("D1", 750.0, 18.0, 25.0),
                Debt::new("D2", 6_400.0, 29.9, 190.0),
                Debt::new("D3", 2_100.0, 4.0, 60.0),
                Debt::new("D4", 15_000.0, 7.25, 310.0),
                Debt::new("D5", 4_800.0, 12.5, 110.0),
            ],
        ];

        for debts in &mixes {
            for extra in [0.0, 150.0, 600.0] {
                let comparison = compare_strategies(debts, extra);
                assert!(
                    comparison.avalanche.total_interest <= comparison.snowball.total_interest + 1e-6,
                    "avalanche cost more for {:?} with extra {}",
                    debts,
                    extra
                );
            }
        }

        let comparison = compare_strategies(&mixes[2], 300.0);
        assert!(comparison.interest_saved > 0.0);
    }

    #[test]
    fn test_freed_minimums_roll_over() {
        // Without rollover the larger debt would take 20 months at 50/month
        let debts = vec![
            Debt::new("Small", 100.0, 0.0, 50.0),
            Debt::new("Large", 1_000.0, 0.0, 50.0),
        ];
        let plan = calculate_debt_snowball(&debts, 0.0);

        assert_eq!(plan.debts[0].payoff_month, Some(2));
        assert_eq!(plan.debts[1].payoff_month, Some(11));
        assert_eq!(plan.total_months, 11);
        assert!(plan.monthly_progress.iter().all(|m| m.payment <= 100.0 + 1e-9));
    }

    #[test]
    fn test_insufficient_budget_hits_cap() {
        let debts = vec![Debt::new("Underwater", 10_000.0, 24.0, 100.0)];
        let plan = calculate_debt_avalanche(&debts, 0.0);

        assert!(!plan.paid_off);
        assert_eq!(plan.total_months, MAX_PAYOFF_MONTHS);
        assert_eq!(plan.debts[0].payoff_month, None);
    }

    #[test]
    fn test_empty_and_zero_balances() {
        let plan = calculate_debt_snowball(&[], 100.0);
        assert!(plan.paid_off);
        assert_eq!(plan.total_months, 0);
        assert!(plan.monthly_progress.is_empty());

        let plan = calculate_debt_snowball(&[Debt::new("Done", 0.0, 10.0, 25.0)], 0.0);
        assert!(plan.paid_off);
        assert_eq!(plan.debts[0].payoff_month, Some(0));
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("Avalanche".parse::<PayoffStrategy>().unwrap(), PayoffStrategy::Avalanche);
        assert!("random".parse::<PayoffStrategy>().is_err());
    }
}
