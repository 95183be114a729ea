//! Loan EMI calculator: rupee formatting, locale number parsing, slider
//! progress and reducing-balance loan math, plus the form handlers that tie
//! them to a page.

pub mod config;
pub mod currency;
pub mod error;
pub mod loan;
pub mod parse;
pub mod slider;
pub mod ui;

pub use error::{EmiError, Result};
