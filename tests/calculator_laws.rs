use approx::assert_abs_diff_eq;
use emi::currency::format_inr;
use emi::loan::{emi, total_interest, Installment, LoanSummary};
use emi::parse::parse_locale_number;
use emi::slider::{progress, SliderRange};
use emi::ui::{Calculator, LoanForm};
use emi::EmiError;
use test_log::test;

// verifies that types can be shared across threads freely
fn is_normal<T: Sized + Send + Sync + Unpin>() {}

#[test]
fn normal_types() {
    is_normal::<LoanSummary>();
    is_normal::<Installment>();
    is_normal::<SliderRange>();
    is_normal::<LoanForm>();
    is_normal::<Calculator>();
    is_normal::<EmiError>();
}

#[test]
fn test_format_then_parse_recovers_whole_rupees() {
    for amount in [0., 0.4, 1., 99.5, 999., 1000., 86782.3, 1000000., 12345678.9, 9876543210.] {
        let formatted = format_inr(amount, 0).unwrap();
        assert_eq!(parse_locale_number(&formatted).unwrap(), f64::round(amount), "{}", formatted);
    }
}

#[test]
fn test_ten_lakh_display() {
    assert_eq!(format_inr(1000000., 0).unwrap(), "₹10,00,000");
}

#[test]
fn test_progress_stays_within_range() {
    let (min, max) = (100000., 10000000.);
    let mut value = min;
    while value <= max {
        let pct = progress(min, max, value).unwrap();
        assert!((0. ..=100.).contains(&pct), "{} gave {}", value, pct);
        value += 95000.;
    }
    assert_eq!(progress(min, max, min).unwrap(), 0.);
    assert_eq!(progress(min, max, max).unwrap(), 100.);
    assert_eq!(progress(1., 20., 20.).unwrap(), 100.);
}

#[test]
fn test_progress_rejects_empty_range() {
    for value in [-1., 0., 42.] {
        assert!(matches!(progress(7., 7., value), Err(EmiError::InvalidRange { .. })));
    }
}

#[test]
fn test_zero_rate_repays_principal_evenly() {
    for (principal, tenure) in [(100000., 12.), (2500000., 240.), (333333., 7.), (1., 360.)] {
        assert_abs_diff_eq!(emi(principal, tenure, 0.).unwrap(), principal / tenure, epsilon = 1e-9);
        assert_abs_diff_eq!(total_interest(principal, tenure, 0.).unwrap(), 0., epsilon = 1e-6);
    }
}

#[test]
fn test_reference_emi() {
    let amount = emi(1000000., 240., 8.5).unwrap();
    assert_abs_diff_eq!(amount, 8678.23, epsilon = 0.005);
    assert_eq!(format_inr(amount, 2).unwrap(), "₹8,678.23");
}

#[test]
fn test_invalid_loan_terms() {
    assert!(matches!(emi(1000000., -5., 8.5), Err(EmiError::InvalidInput { .. })));
    assert!(matches!(emi(-100., 240., 8.5), Err(EmiError::InvalidInput { .. })));
    assert!(matches!(total_interest(1000000., 240., -0.5), Err(EmiError::InvalidInput { .. })));
}

#[test]
fn test_every_computed_amount_is_finite() {
    for principal in [0., 1e-300, 1., 1e5, 1e12, 1e300, f64::MAX] {
        for tenure in [1e-3, 1., 12., 360., 1e6, 1e15] {
            for rate in [0., 1e-300, 1e-15, 8.5, 1e3, 1e300] {
                match LoanSummary::new(principal, tenure, rate) {
                    Ok(summary) => {
                        assert!(summary.emi.is_finite(), "{} {} {}", principal, tenure, rate);
                        assert!(summary.total_interest.is_finite());
                        assert!(summary.total_payment.is_finite());
                        assert!(!summary.to_string().is_empty());
                    }
                    Err(e) => assert!(matches!(e, EmiError::InvalidInput { .. })),
                }
            }
        }
    }
}
