//! Form state and input handling for the calculator page.
//!
//! Nothing in here draws anything. Handlers read events from an
//! [`EventSource`], update the [`LoanForm`] they are handed and push display
//! values into a [`View`]. The pure functions they call stay usable on their
//! own.

use crate::config::{SliderDefaults, SliderSpec, COLOR_GRAY_LIGHT, COLOR_PRIMARY};
use crate::currency::{format_inr, DEFAULT_DECIMAL_PLACES};
use crate::error::{EmiError, Result};
use crate::loan::LoanSummary;
use crate::parse::parse_locale_number;
use crate::slider::{track_background, SliderRange};
use log::{debug, warn};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Control {
    Principal,
    Tenure,
    Rate,
}

impl Control {
    pub const ALL: [Control; 3] = [Control::Principal, Control::Tenure, Control::Rate];
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Control::Principal => "principal",
            Control::Tenure => "tenure",
            Control::Rate => "rate",
        };
        f.write_str(name)
    }
}

impl FromStr for Control {
    type Err = EmiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "principal" => Ok(Control::Principal),
            "tenure" => Ok(Control::Tenure),
            "rate" => Ok(Control::Rate),
            other => Err(EmiError::invalid_input(
                "control",
                format!("unknown control '{}'", other),
            )),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum UiEvent {
    /// The slider thumb moved.
    SliderInput { control: Control, value: f64 },
    /// The text box was edited.
    TextInput { control: Control, text: String },
}

impl FromStr for UiEvent {
    type Err = EmiError;

    /// Reads `control=value` as a slider move.
    fn from_str(s: &str) -> Result<Self> {
        let (control, value) = s.split_once('=').ok_or_else(|| {
            EmiError::invalid_input("event", format!("'{}' is not of the form control=value", s))
        })?;
        Ok(UiEvent::SliderInput {
            control: control.parse()?,
            value: parse_locale_number(value)?,
        })
    }
}

/// Anything that yields user input, one event at a time.
pub trait EventSource {
    fn next_event(&mut self) -> Option<UiEvent>;
}

impl<I> EventSource for I
where
    I: Iterator<Item = UiEvent>,
{
    fn next_event(&mut self) -> Option<UiEvent> {
        self.next()
    }
}

/// Where the calculator sends what the user should see.
pub trait View {
    fn set_input_text(&mut self, control: Control, text: &str);
    fn set_slider(&mut self, control: Control, value: f64, background: &str);
    fn show_results(&mut self, emi_text: &str, summary: &LoanSummary);
}

/// Current contents of the three text boxes and three sliders.
#[derive(Clone, PartialEq, Debug)]
pub struct LoanForm {
    principal_text: String,
    tenure_text: String,
    rate_text: String,
    principal: SliderSpec,
    tenure: SliderSpec,
    rate: SliderSpec,
}

impl LoanForm {
    /// Form showing the configured starting values.
    pub fn new(defaults: &SliderDefaults) -> Result<Self> {
        Ok(Self {
            principal_text: format_inr(defaults.principal.value, DEFAULT_DECIMAL_PLACES)?,
            tenure_text: defaults.tenure.value.to_string(),
            rate_text: defaults.rate.value.to_string(),
            principal: defaults.principal,
            tenure: defaults.tenure,
            rate: defaults.rate,
        })
    }

    pub fn text(&self, control: Control) -> &str {
        match control {
            Control::Principal => &self.principal_text,
            Control::Tenure => &self.tenure_text,
            Control::Rate => &self.rate_text,
        }
    }

    pub fn slider(&self, control: Control) -> SliderRange {
        match control {
            Control::Principal => self.principal.range(),
            Control::Tenure => self.tenure.range(),
            Control::Rate => self.rate.range(),
        }
    }

    fn set_text(&mut self, control: Control, text: String) {
        match control {
            Control::Principal => self.principal_text = text,
            Control::Tenure => self.tenure_text = text,
            Control::Rate => self.rate_text = text,
        }
    }

    fn set_slider_value(&mut self, control: Control, value: f64) {
        let slider = match control {
            Control::Principal => &mut self.principal,
            Control::Tenure => &mut self.tenure,
            Control::Rate => &mut self.rate,
        };
        *slider = slider.with_value(slider.snap(value));
    }

    /// Loan terms as currently typed into the text boxes.
    pub fn summary(&self) -> Result<LoanSummary> {
        LoanSummary::new(
            parse_locale_number(&self.principal_text)?,
            parse_locale_number(&self.tenure_text)?,
            parse_locale_number(&self.rate_text)?,
        )
    }
}

/// Event handlers for a [`LoanForm`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Calculator {
    pub defaults: SliderDefaults,
    /// Fraction digits of the displayed EMI.
    pub decimal_places: u32,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(SliderDefaults::default())
    }
}

impl Calculator {
    pub fn new(defaults: SliderDefaults) -> Self {
        Self {
            defaults,
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }

    pub fn with_decimal_places(self, decimal_places: u32) -> Self {
        Self {
            decimal_places,
            ..self
        }
    }

    /// Form with the starting values, already pushed to `view`.
    pub fn init(&self, view: &mut impl View) -> Result<LoanForm> {
        let form = LoanForm::new(&self.defaults)?;
        for control in Control::ALL {
            view.set_input_text(control, form.text(control));
            self.refresh_slider(&form, control, view)?;
        }
        self.show_results(&form, view)?;
        Ok(form)
    }

    /// Applies one event. On error the view keeps the results it had.
    pub fn handle(&self, form: &mut LoanForm, event: &UiEvent, view: &mut impl View) -> Result<()> {
        debug!("handling {:?}", event);
        match event {
            UiEvent::SliderInput { control, value: requested } => {
                let control = *control;
                form.set_slider_value(control, *requested);
                let value = form.slider(control).value;
                if value != *requested {
                    debug!("{} slider moved to {} instead of {}", control, value, requested);
                }

                let text = match control {
                    Control::Principal => format_inr(value, DEFAULT_DECIMAL_PLACES)?,
                    Control::Tenure | Control::Rate => value.to_string(),
                };
                form.set_text(control, text);
                view.set_input_text(control, form.text(control));
                self.refresh_slider(form, control, view)?;
            }
            UiEvent::TextInput { control, text } => {
                let control = *control;
                form.set_text(control, text.clone());
                let value = parse_locale_number(text)?;
                form.set_slider_value(control, value);
                self.refresh_slider(form, control, view)?;
            }
        }
        self.show_results(form, view)?;
        Ok(())
    }

    /// Handles every event from `source`, logging and collecting the failures.
    pub fn run(
        &self,
        source: &mut impl EventSource,
        form: &mut LoanForm,
        view: &mut impl View,
    ) -> Vec<EmiError> {
        let mut rejected = Vec::new();
        while let Some(event) = source.next_event() {
            if let Err(e) = self.handle(form, &event, view) {
                warn!("keeping previous results, {:?} failed: {}", event, e);
                rejected.push(e);
            }
        }
        rejected
    }

    fn refresh_slider(&self, form: &LoanForm, control: Control, view: &mut impl View) -> Result<()> {
        let slider = form.slider(control);
        let progress = slider.progress()?;
        let background = track_background(progress, COLOR_PRIMARY, COLOR_GRAY_LIGHT);
        view.set_slider(control, slider.value, &background);
        Ok(())
    }

    fn show_results(&self, form: &LoanForm, view: &mut impl View) -> Result<LoanSummary> {
        let summary = form.summary()?;
        let emi_text = format_inr(summary.emi, self.decimal_places)?;
        view.show_results(&emi_text, &summary);
        Ok(summary)
    }
}
