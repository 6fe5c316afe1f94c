//! Settings a panel is created with.

use std::fmt;

use derive_setters::Setters;

use crate::cal::DateTimeValue;
use crate::format::Locale;
use crate::panel::disabled::{AllowAll, DisabledPredicates};
use crate::panel::input::InputValue;
use crate::panel::view::{PickerKind, ViewMode};


/// How the time columns of a panel look and behave.
#[derive(Setters)]
pub struct ShowTimeConfig {

    /// The time of day used when a date is picked before any time has
    /// been, as long as the panel started out without a value.
    #[setters(strip_option)]
    pub default_value: Option<DateTimeValue>,

    /// Predicates that replace the panel’s own ones for time questions.
    #[setters(skip)]
    pub disabled: Option<Box<dyn DisabledPredicates>>,

    /// Shows hours from 12 to 11 with a separate AM/PM column.
    pub use_12_hours: bool,

    /// Shows a column for seconds.
    pub show_second: bool,

    /// Leaves disabled entries out of the columns instead of greying them.
    pub hide_disabled_options: bool,

    pub hour_step: i8,
    pub minute_step: i8,
    pub second_step: i8,
}

impl Default for ShowTimeConfig {
    fn default() -> Self {
        Self {
            default_value: None,
            disabled: None,
            use_12_hours: false,
            show_second: true,
            hide_disabled_options: false,
            hour_step: 1,
            minute_step: 1,
            second_step: 1,
        }
    }
}

impl ShowTimeConfig {

    /// Sets the predicates used for time columns only.
    pub fn disabled(mut self, predicates: impl DisabledPredicates + 'static) -> Self {
        self.disabled = Some(Box::new(predicates));
        self
    }
}

impl fmt::Debug for ShowTimeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShowTimeConfig")
         .field("default_value", &self.default_value)
         .field("disabled", &self.disabled.is_some())
         .field("use_12_hours", &self.use_12_hours)
         .field("show_second", &self.show_second)
         .field("hide_disabled_options", &self.hide_disabled_options)
         .field("steps", &(self.hour_step, self.minute_step, self.second_step))
         .finish()
    }
}


/// Everything a `PickerPanel` is created with.
///
/// ```rust
/// use datepanel::{DateTimeValue, Month};
/// use datepanel::panel::{PanelConfig, PickerKind, ShowTimeConfig};
///
/// let config = PanelConfig::new(PickerKind::Date)
///     .default_value(DateTimeValue::ymd(1990, Month::September, 3).unwrap())
///     .show_time(ShowTimeConfig::default().show_second(false));
/// assert!(config.has_time_component());
/// ```
#[derive(Setters)]
pub struct PanelConfig {

    pub picker: PickerKind,

    /// Starts the panel in this view instead of the picker’s default one.
    #[setters(strip_option)]
    pub mode: Option<ViewMode>,

    /// The caller-owned value. When this is set the panel is controlled:
    /// it reports changes but never applies them itself.
    #[setters(skip)]
    pub value: Option<Option<InputValue>>,

    /// The initial value of a panel that owns its own value.
    #[setters(strip_option, into)]
    pub default_value: Option<InputValue>,

    /// Adds time columns to a date picker, and configures them for time
    /// and date-time pickers.
    #[setters(strip_option)]
    pub show_time: Option<ShowTimeConfig>,

    #[setters(skip)]
    pub disabled: Box<dyn DisabledPredicates>,

    pub locale: Locale,

    /// Whether selections wait for `confirm` before becoming the value.
    /// Panels with a time component wait by default.
    #[setters(strip_option)]
    pub need_confirm: Option<bool>,

    /// The current time, used as the anchor when there’s no value.
    /// The system clock is read when this isn’t given.
    #[setters(strip_option)]
    pub now: Option<DateTimeValue>,
}

impl PanelConfig {
    pub fn new(picker: PickerKind) -> Self {
        Self {
            picker,
            mode: None,
            value: None,
            default_value: None,
            show_time: None,
            disabled: Box::new(AllowAll),
            locale: Locale::default(),
            need_confirm: None,
            now: None,
        }
    }

    /// Makes the panel controlled, with the given value.
    pub fn value(mut self, value: impl Into<InputValue>) -> Self {
        self.value = Some(Some(value.into()));
        self
    }

    /// Makes the panel controlled, with no value yet.
    pub fn empty_value(mut self) -> Self {
        self.value = Some(None);
        self
    }

    pub fn disabled(mut self, predicates: impl DisabledPredicates + 'static) -> Self {
        self.disabled = Box::new(predicates);
        self
    }

    /// Returns whether values picked in this panel carry a time of day.
    /// Date and week pickers gain one by having time columns shown.
    pub fn has_time_component(&self) -> bool {
        self.picker.has_time_component()
            || (self.show_time.is_some() && matches!(self.picker, PickerKind::Date | PickerKind::Week))
    }

    /// Returns whether selections need confirming.
    pub fn needs_confirm(&self) -> bool {
        self.need_confirm.unwrap_or_else(|| self.has_time_component())
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::new(PickerKind::default())
    }
}

impl fmt::Debug for PanelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelConfig")
         .field("picker", &self.picker)
         .field("mode", &self.mode)
         .field("value", &self.value)
         .field("default_value", &self.default_value)
         .field("show_time", &self.show_time)
         .field("locale", &self.locale)
         .field("need_confirm", &self.need_confirm)
         .field("now", &self.now)
         .finish_non_exhaustive()
    }
}
