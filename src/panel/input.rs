//! Values handed to a panel from outside, and the warnings they raise.
//!
//! Callers can give a panel either a ready-made value or some text to be
//! read as one. Text that can’t be read doesn’t stop the panel: it warns
//! once, through the `log` crate, and carries on as though nothing had
//! been given.

use std::collections::HashSet;
use std::fmt;

use log::warn;

use crate::cal::{DateTimeValue, Error};
use crate::panel::PanelError;


/// A value supplied by the caller.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum InputValue {

    /// A value that is already a date-time.
    Value(DateTimeValue),

    /// Text that should be read as an ISO 8601 date or date-time.
    Text(String),
}

impl InputValue {

    /// Turns this input into a date-time, reading it if it’s text.
    pub fn resolve(&self) -> Result<DateTimeValue, Error> {
        match self {
            InputValue::Value(value) => Ok(*value),
            InputValue::Text(text)   => read_text(text),
        }
    }
}

#[cfg(feature="parse")]
fn read_text(text: &str) -> Result<DateTimeValue, Error> {
    text.parse()
}

#[cfg(not(feature="parse"))]
fn read_text(text: &str) -> Result<DateTimeValue, Error> {
    Err(Error::Parse(format!("can’t read {:?} without the `parse` feature", text)))
}

impl From<DateTimeValue> for InputValue {
    fn from(value: DateTimeValue) -> Self {
        InputValue::Value(value)
    }
}

impl From<&str> for InputValue {
    fn from(text: &str) -> Self {
        InputValue::Text(text.to_string())
    }
}

impl From<String> for InputValue {
    fn from(text: String) -> Self {
        InputValue::Text(text)
    }
}


/// Which of a panel’s inputs a warning is about.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum InputParam {
    Value,
    DefaultValue,
}

impl fmt::Display for InputParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputParam::Value        => write!(f, "value"),
            InputParam::DefaultValue => write!(f, "defaultValue"),
        }
    }
}


/// The invalid inputs a panel has warned about.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warned: HashSet<InputParam>,
    reported: Vec<PanelError>,
}

impl Diagnostics {

    /// Resolves an optional input, treating an invalid one as though it
    /// were absent. The first invalid input for each parameter is logged
    /// and kept; later ones are dropped quietly.
    pub(crate) fn resolve(&mut self, param: InputParam, input: Option<&InputValue>) -> Option<DateTimeValue> {
        match input?.resolve() {
            Ok(value) => Some(value),
            Err(source) => {
                if self.warned.insert(param) {
                    let error = PanelError::InvalidInput { param, source };
                    warn!("{}", error);
                    self.reported.push(error);
                }
                None
            }
        }
    }

    /// Returns the warnings raised so far, oldest first.
    pub fn reported(&self) -> &[PanelError] {
        &self.reported
    }

    pub fn is_empty(&self) -> bool {
        self.reported.is_empty()
    }
}
