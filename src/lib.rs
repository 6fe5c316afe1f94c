#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Library for the state behind date picker panels: which view to show,
//! what its cells say, which of them can be picked, and what happens to
//! the value when one is.
//!
//! # Examples
//!
//! ```
//! use datepanel::{DateTimeValue, Month};
//! use datepanel::panel::{Direction, PanelConfig, PickerKind, PickerPanel, ViewMode};
//!
//! let now = DateTimeValue::ymd(1990, Month::September, 3).unwrap();
//! let mut panel = PickerPanel::new(PanelConfig::new(PickerKind::Month).now(now));
//! assert_eq!(panel.active_view(), ViewMode::Month);
//!
//! let _ = panel.navigate(Direction::SuperPrev).unwrap();
//! assert_eq!(panel.header_label(), "1989");
//! ```

mod system;
mod util;

pub mod cal;
pub use crate::cal::{DatePiece, DateTimeValue, Error, LocalDate, LocalTime, Month, TimePiece, Unit, Weekday, Year};

pub mod format;
pub use crate::format::Locale;

pub mod panel;
pub use crate::panel::{PanelConfig, PanelError, PanelEvent, PickerKind, PickerPanel, ViewMode};
