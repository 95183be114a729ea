use crate::currency::format_inr_or_raw;
use crate::error::{ensure_finite, EmiError, Result};
use chrono::{Months, NaiveDate};
use log::trace;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rupees.
pub type Amount = f64;
/// Loan duration in months.
pub type Tenure = f64;
/// Yearly interest rate as a percentage (8.5 means 8.5%).
pub type AnnualRate = f64;

/// Longest loan an amortization schedule is built for.
pub const MAX_SCHEDULE_MONTHS: u32 = 1200;

pub fn monthly_rate(annual_rate: AnnualRate) -> f64 {
    annual_rate / 12. / 100.
}

/// Equated monthly installment on the reducing balance.
///
/// `EMI = P * r * (1 + r)^n / ((1 + r)^n - 1)` with `r` the monthly rate and
/// `n` the tenure in months. A zero rate degenerates to `P / n`.
///
/// Terms whose installment does not fit in an `f64` are rejected.
pub fn emi(principal: Amount, tenure_months: Tenure, annual_rate: AnnualRate) -> Result<Amount> {
    check_terms(principal, tenure_months, annual_rate)?;

    let rate = monthly_rate(annual_rate);
    if rate == 0. {
        return ensure_finite("emi", principal / tenure_months);
    }

    // (1 + r)^n - 1, kept accurate for tiny rates
    let log_factor = tenure_months * rate.ln_1p();
    let growth = log_factor.exp_m1();
    trace!("monthly rate {}, growth {}", rate, growth);

    let pmt_amount = if growth.is_finite() {
        principal * rate * ((growth + 1.) / growth)
    } else {
        principal * rate / (1. - (-log_factor).exp())
    };
    ensure_finite("emi", pmt_amount)
}

/// Interest paid over the whole tenure, `EMI * n - P`.
pub fn total_interest(
    principal: Amount,
    tenure_months: Tenure,
    annual_rate: AnnualRate,
) -> Result<Amount> {
    ensure_finite(
        "total_interest",
        emi(principal, tenure_months, annual_rate)? * tenure_months - principal,
    )
}

fn check_terms(principal: Amount, tenure_months: Tenure, annual_rate: AnnualRate) -> Result<()> {
    ensure_finite("principal", principal)?;
    ensure_finite("tenure_months", tenure_months)?;
    ensure_finite("annual_rate", annual_rate)?;

    if principal < 0. {
        return Err(EmiError::invalid_input(
            "principal",
            format!("{} is negative", principal),
        ));
    }
    if tenure_months <= 0. {
        return Err(EmiError::invalid_input(
            "tenure_months",
            format!("{} is not a positive number of months", tenure_months),
        ));
    }
    if annual_rate < 0. {
        return Err(EmiError::invalid_input(
            "annual_rate",
            format!("{} is negative", annual_rate),
        ));
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoanSummary {
    pub principal: Amount,
    pub tenure_months: Tenure,
    pub annual_rate: AnnualRate,
    pub emi: Amount,
    pub total_interest: Amount,
    pub total_payment: Amount,
}

impl LoanSummary {
    pub fn new(principal: Amount, tenure_months: Tenure, annual_rate: AnnualRate) -> Result<Self> {
        let emi = emi(principal, tenure_months, annual_rate)?;
        let total_payment = ensure_finite("total_payment", emi * tenure_months)?;
        Ok(Self {
            principal,
            tenure_months,
            annual_rate,
            emi,
            total_interest: total_payment - principal,
            total_payment,
        })
    }

    /// Principal as a percentage of everything repaid.
    pub fn principal_share(&self) -> f64 {
        if self.total_payment == 0. {
            return 0.;
        }
        self.principal / self.total_payment * 100.
    }

    /// Interest as a percentage of everything repaid.
    pub fn interest_share(&self) -> f64 {
        if self.total_payment == 0. {
            return 0.;
        }
        self.total_interest / self.total_payment * 100.
    }
}

impl fmt::Display for LoanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EMI {}, total interest {}, total payment {}",
            format_inr_or_raw(self.emi, 2),
            format_inr_or_raw(self.total_interest, 0),
            format_inr_or_raw(self.total_payment, 0)
        )
    }
}

/// One month of an amortization schedule.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Installment {
    pub number: u32,
    pub due_date: NaiveDate,
    pub payment: Amount,
    pub interest: Amount,
    pub principal: Amount,
    pub balance: Amount,
}

impl fmt::Display for Installment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "installment {}, due {}, payment {}, interest {}, principal {}, balance {}",
            self.number,
            self.due_date,
            format_inr_or_raw(self.payment, 2),
            format_inr_or_raw(self.interest, 2),
            format_inr_or_raw(self.principal, 2),
            format_inr_or_raw(self.balance, 2)
        )
    }
}

/// Month-by-month repayment of the loan, first installment due on `first_due`.
///
/// The tenure has to be a whole number of months. Each later due date falls on
/// the same day of a following month, or that month's last day when it is
/// shorter. The last installment settles whatever balance is left so the
/// schedule always closes at exactly zero.
pub fn amortization_schedule(
    principal: Amount,
    tenure_months: Tenure,
    annual_rate: AnnualRate,
    first_due: NaiveDate,
) -> Result<Vec<Installment>> {
    let pmt_amount = emi(principal, tenure_months, annual_rate)?;
    if tenure_months.fract() != 0. || tenure_months > MAX_SCHEDULE_MONTHS as f64 {
        return Err(EmiError::invalid_input(
            "tenure_months",
            format!(
                "{} is not a whole number of months up to {}",
                tenure_months, MAX_SCHEDULE_MONTHS
            ),
        ));
    }

    let pmt_count = tenure_months as u32;
    let rate = monthly_rate(annual_rate);
    let mut balance = principal;
    let mut schedule = Vec::with_capacity(pmt_count as usize);

    for offset in 0..pmt_count {
        let due_date = first_due
            .checked_add_months(Months::new(offset))
            .ok_or_else(|| {
                EmiError::invalid_input(
                    "first_due",
                    format!("{} plus {} months is out of range", first_due, offset),
                )
            })?;

        let interest = balance * rate;
        let principal_paid = if offset + 1 == pmt_count {
            balance
        } else {
            pmt_amount - interest
        };
        balance -= principal_paid;
        if offset + 1 == pmt_count {
            balance = 0.;
        }
        trace!(
            "installment {}, due {}, interest {}, balance {}",
            offset + 1,
            due_date,
            interest,
            balance
        );

        schedule.push(Installment {
            number: offset + 1,
            due_date,
            payment: principal_paid + interest,
            interest,
            principal: principal_paid,
            balance,
        });
    }
    Ok(schedule)
}
