use chrono::{Local, Months, NaiveDate};
use clap::Parser;
use emi::config::{SliderDefaults, SLIDER_DEFAULTS};
use emi::currency::format_inr_or_raw;
use emi::loan::{amortization_schedule, LoanSummary};
use emi::ui::{Calculator, Control, UiEvent, View};
use log::{debug, info, LevelFilter};
use simple_logger::SimpleLogger;
use std::error::Error;

/// Loan EMI calculator.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Starting principal in rupees
    #[arg(long)]
    principal: Option<f64>,

    /// Starting tenure in months
    #[arg(long)]
    tenure: Option<f64>,

    /// Starting annual interest rate in percent
    #[arg(long)]
    rate: Option<f64>,

    /// Slider move to replay, as control=value (repeatable)
    #[arg(long = "slide", value_name = "CONTROL=VALUE")]
    slides: Vec<UiEvent>,

    /// Fraction digits shown for the EMI
    #[arg(long, default_value_t = 0)]
    decimals: u32,

    /// Print the amortization schedule of the final loan
    #[arg(long)]
    schedule: bool,

    /// Due date of the first installment (defaults to a month from today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    first_due: Option<NaiveDate>,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

struct ConsoleView;

impl View for ConsoleView {
    fn set_input_text(&mut self, control: Control, text: &str) {
        debug!("{} input: {}", control, text);
    }

    fn set_slider(&mut self, control: Control, value: f64, background: &str) {
        debug!("{} slider: {} ({})", control, value, background);
    }

    fn show_results(&mut self, emi_text: &str, summary: &LoanSummary) {
        println!(
            "EMI {} for {} over {} months at {}%, total interest {}",
            emi_text,
            format_inr_or_raw(summary.principal, 0),
            summary.tenure_months,
            summary.annual_rate,
            format_inr_or_raw(summary.total_interest, 0)
        );
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    SimpleLogger::new().with_level(cli.log_level).init()?;

    let mut defaults: SliderDefaults = SLIDER_DEFAULTS;
    if let Some(principal) = cli.principal {
        defaults.principal.value = principal;
    }
    if let Some(tenure) = cli.tenure {
        defaults.tenure.value = tenure;
    }
    if let Some(rate) = cli.rate {
        defaults.rate.value = rate;
    }

    let calculator = Calculator::new(defaults).with_decimal_places(cli.decimals);
    let mut view = ConsoleView;
    let mut form = calculator.init(&mut view)?;

    let rejected = calculator.run(&mut cli.slides.into_iter(), &mut form, &mut view);
    if !rejected.is_empty() {
        info!("{} slider events were rejected", rejected.len());
    }

    if cli.schedule {
        let summary = form.summary()?;
        let first_due = match cli.first_due {
            Some(date) => date,
            None => Local::now()
                .date_naive()
                .checked_add_months(Months::new(1))
                .ok_or("no due date a month from today")?,
        };
        info!("{}", summary);
        for pmt in amortization_schedule(
            summary.principal,
            summary.tenure_months,
            summary.annual_rate,
            first_due,
        )? {
            println!("{}", pmt);
        }
    }
    Ok(())
}
