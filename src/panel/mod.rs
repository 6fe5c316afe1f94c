//! # Picker Panels
//!
//! A **picker panel** is the part of a date picker that sits under the
//! input box: a header with navigation buttons, a grid of cells, and for
//! pickers that care about the time of day, a set of scrolling columns.
//! `PickerPanel` is everything such a panel *knows*, without anything it
//! draws. A renderer reads cells and labels out of it and feeds clicks
//! back in; the panel answers with the events the owner should hear.
//!
//! ```rust
//! use datepanel::{DateTimeValue, Month};
//! use datepanel::panel::{PanelConfig, PanelEvent, PickerKind, PickerPanel};
//!
//! let now = DateTimeValue::ymd(1990, Month::September, 3).unwrap();
//! let mut panel = PickerPanel::new(PanelConfig::new(PickerKind::Date).now(now));
//! assert_eq!(panel.header_label(), "Sep 1990");
//!
//! let picked = DateTimeValue::ymd(1990, Month::September, 23).unwrap();
//! let events = panel.select_cell(picked).unwrap();
//! assert_eq!(events, vec![ PanelEvent::Select(picked), PanelEvent::Change(picked) ]);
//! assert_eq!(panel.value(), Some(picked));
//! ```
//!
//! ## Owned and controlled values
//!
//! A panel either owns its value, starting from an optional default, or
//! is *controlled*, in which case the owner holds the value and passes it
//! back in with `set_value`. A controlled panel reports changes but never
//! applies them, so picking the same day twice reports twice until the
//! owner catches up.
//!
//! ## Confirming
//!
//! Panels with a time component hold selections as *pending* until
//! `confirm` is called, so that picking a day and then an hour doesn’t
//! report two changes. Other panels commit straight away. Either can be
//! overridden in the config.

use log::{debug, trace};

use crate::cal::{self, DateTimeValue, LocalDate, LocalTime, TimePiece};
use crate::format::{padded, Locale};

mod cells;
mod config;
mod disabled;
mod event;
mod input;
mod nav;
mod time;
mod view;

pub use self::cells::{Cell, DATE_CELLS};
pub use self::config::{PanelConfig, ShowTimeConfig};
pub use self::disabled::{AllowAll, DisabledPredicates, DisabledRules};
pub use self::event::{dispatch_all, PanelEvent, PanelListener};
pub use self::input::{Diagnostics, InputParam, InputValue};
pub use self::nav::{navigate, Direction};
pub use self::time::{twelve_hour_label, ColumnKind, ScrollQueue, ScrollRequest, TimeColumn, TimeColumns, TimeEntry};
pub use self::view::{range_label, resolve_view, PickerKind, ResolvedView, ViewMode};

use self::disabled::Evaluator;


/// Who holds a panel’s committed value.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
enum Ownership {
    Owned(Option<DateTimeValue>),
    Controlled(Option<DateTimeValue>),
}

impl Ownership {
    fn value(self) -> Option<DateTimeValue> {
        match self {
            Ownership::Owned(value) | Ownership::Controlled(value) => value,
        }
    }
}


/// The state of one picker panel.
pub struct PickerPanel {
    picker: PickerKind,
    view: ViewMode,
    leaf_view: ViewMode,
    anchor: DateTimeValue,
    ownership: Ownership,
    pending: Option<DateTimeValue>,

    /// The time of day to use for the first selection, when the panel
    /// started out empty. Cleared once anything has been picked.
    seed_time: Option<LocalTime>,

    has_time: bool,
    need_confirm: bool,
    show_time: ShowTimeConfig,
    disabled: Box<dyn DisabledPredicates>,
    locale: Locale,
    diagnostics: Diagnostics,
    scroll: ScrollQueue,
}

impl PickerPanel {

    /// Creates a panel from its configuration.
    ///
    /// The anchor starts at the value if there is one, then the default
    /// value, then the current time. Invalid values are warned about and
    /// treated as absent.
    pub fn new(config: PanelConfig) -> Self {
        let has_time = config.has_time_component();
        let need_confirm = config.needs_confirm();
        let PanelConfig { picker, mode, value, default_value, show_time, disabled, locale, now, .. } = config;

        let mut diagnostics = Diagnostics::default();
        let value = value.map(|v| diagnostics.resolve(InputParam::Value, v.as_ref()));
        let default_value = diagnostics.resolve(InputParam::DefaultValue, default_value.as_ref());

        // A controlled panel ignores its default value, even when the
        // controlled value is empty.
        let ownership = match value {
            Some(value) => Ownership::Controlled(value),
            None        => Ownership::Owned(default_value),
        };

        let initial = ownership.value();
        let anchor = initial.or(now).unwrap_or_else(DateTimeValue::now);

        let show_time = show_time.unwrap_or_default();
        let seed_time = match initial {
            None if has_time => show_time.default_value.map(|v| v.time()),
            _                => None,
        };

        let ResolvedView { active_view, leaf_view } = resolve_view(picker, mode);
        debug!("Creating {:?} panel in {:?} view at {}", picker, active_view, anchor);

        Self {
            picker,
            view: active_view,
            leaf_view,
            anchor,
            ownership,
            pending: None,
            seed_time,
            has_time,
            need_confirm,
            show_time,
            disabled,
            locale,
            diagnostics,
            scroll: ScrollQueue::default(),
        }
    }

    pub fn picker(&self) -> PickerKind {
        self.picker
    }

    pub fn active_view(&self) -> ViewMode {
        self.view
    }

    /// Returns the value that decides which page each view shows.
    pub fn anchor(&self) -> DateTimeValue {
        self.anchor
    }

    /// Returns the committed value.
    pub fn value(&self) -> Option<DateTimeValue> {
        self.ownership.value()
    }

    /// Returns the selection waiting to be confirmed, if any.
    pub fn pending(&self) -> Option<DateTimeValue> {
        self.pending
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self.ownership, Ownership::Controlled(_))
    }

    pub fn has_time_component(&self) -> bool {
        self.has_time
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn evaluator(&self) -> Evaluator<'_> {
        Evaluator::new(&*self.disabled, self.show_time.disabled.as_deref())
    }

    /// The value selections are made relative to: what’s pending, or else
    /// what’s committed.
    fn current(&self) -> Option<DateTimeValue> {
        self.pending.or_else(|| self.value())
    }

    /// The time of day a newly-picked date gets.
    fn base_time(&self) -> LocalTime {
        self.current().map(|v| v.time())
            .or(self.seed_time)
            .unwrap_or_else(|| self.anchor.time())
    }

    /// The date a newly-picked time of day goes on.
    fn base_date(&self) -> LocalDate {
        self.current().unwrap_or(self.anchor).date()
    }


    // ---- reading ----

    /// Returns the text for the header of the current view.
    pub fn header_label(&self) -> String {
        let time = self.base_time();
        let mut label = format!("{}:{}", padded(time.hour(), 2), padded(time.minute(), 2));
        if self.show_time.show_second {
            label = format!("{}:{}", label, padded(time.second(), 2));
        }

        range_label(self.view, &self.anchor, &self.locale, &label)
    }

    /// Returns the short weekday names heading the date grid’s columns.
    pub fn weekday_labels(&self) -> Vec<String> {
        self.locale.week().iter()
            .map(|day| self.locale.short_weekday_name(*day).to_string())
            .collect()
    }

    /// Returns the cells of the current view. The time view has none.
    pub fn cells(&self) -> Vec<Cell> {
        let current = self.current();
        cells::build_cells(self.view, &self.anchor, self.leaf_view, current.as_ref(), &self.evaluator(), &self.locale)
    }

    /// Returns the time columns, if this panel shows any.
    pub fn time_columns(&self) -> Option<TimeColumns> {
        if self.has_time || self.view == ViewMode::Time {
            Some(time::build_columns(self.base_time(), &self.show_time, &self.evaluator(), &self.locale))
        }
        else {
            None
        }
    }

    /// Returns the columns that should be scrolled since this was last
    /// called, and forgets about them.
    pub fn take_scroll_requests(&mut self) -> Vec<ScrollRequest> {
        self.scroll.take()
    }


    // ---- moving around ----

    /// Moves the anchor a page in the given direction.
    pub fn navigate(&mut self, direction: Direction) -> Result<Vec<PanelEvent>, PanelError> {
        let anchor = nav::navigate(&self.anchor, self.view, direction).map_err(|e| {
            debug!("Ignoring navigation: {}", e);
            e
        })?;

        trace!("Anchor moved from {} to {}", self.anchor, anchor);
        self.anchor = anchor;
        Ok(Vec::new())
    }

    /// Shows a different view. Only views on the way to this picker’s
    /// leaf view can be shown, plus the time view for pickers with a time
    /// component.
    pub fn switch_view(&mut self, view: ViewMode) -> Result<Vec<PanelEvent>, PanelError> {
        let reachable = self.picker.drill_chain().contains(&view) || (view == ViewMode::Time && self.has_time);
        if !reachable {
            return Err(PanelError::UnreachableView { view });
        }

        Ok(self.enter_view(view))
    }

    /// Shows the next coarser view, as when clicking the header label.
    pub fn drill_up(&mut self) -> Result<Vec<PanelEvent>, PanelError> {
        match self.picker.coarser_view(self.view) {
            Some(view) => Ok(self.enter_view(view)),
            None       => Err(PanelError::UnreachableView { view: self.view }),
        }
    }

    fn enter_view(&mut self, view: ViewMode) -> Vec<PanelEvent> {
        if view == self.view {
            return Vec::new();
        }

        debug!("Switching from {:?} to {:?} view", self.view, view);
        self.view = view;
        vec![ PanelEvent::PanelChange { view, anchor: self.anchor } ]
    }


    // ---- selecting ----

    /// Picks a cell in the current view.
    ///
    /// In a view coarser than the picker’s leaf view, this drills down
    /// into the period of the cell. In the leaf view, it selects the cell’s
    /// date, keeping the current time of day.
    pub fn select_cell(&mut self, candidate: DateTimeValue) -> Result<Vec<PanelEvent>, PanelError> {
        if self.view == ViewMode::Time {
            return Err(PanelError::NoCells { view: self.view });
        }

        if self.view != self.leaf_view {
            if let Some(finer) = self.picker.finer_view(self.view) {
                self.anchor = candidate.start_of(self.view.cell_unit()).with_time(self.anchor.time());
                return Ok(self.enter_view(finer));
            }
        }

        if self.evaluator().is_cell_disabled(self.view, &candidate) {
            trace!("Refusing disabled cell {}", candidate);
            return Err(PanelError::DisabledSelection);
        }

        let value = candidate.with_time(self.base_time());
        Ok(self.select(value))
    }

    /// Picks the entry at the given index of a time column, as it’s
    /// currently shown.
    pub fn select_time_cell(&mut self, column: ColumnKind, index: usize) -> Result<Vec<PanelEvent>, PanelError> {
        let columns = self.time_columns().ok_or(PanelError::NoCells { view: self.view })?;
        let entry = columns.column(column)
                           .and_then(|c| c.entries.get(index))
                           .ok_or(PanelError::NoSuchEntry { column, index })?;

        if entry.disabled {
            trace!("Refusing disabled {:?} entry {}", column, entry.label);
            return Err(PanelError::DisabledSelection);
        }

        let time = time::apply_entry(self.base_time(), column, entry.value)?;
        let value = DateTimeValue::new(self.base_date(), time);
        self.scroll.request(column, index);
        Ok(self.select(value))
    }

    fn select(&mut self, value: DateTimeValue) -> Vec<PanelEvent> {
        self.anchor = value;
        self.seed_time = None;

        let mut events = vec![ PanelEvent::Select(value) ];
        if self.need_confirm {
            self.pending = Some(value);
        }
        else {
            self.pending = None;
            events.extend(self.commit(value));
        }

        events
    }

    /// Reports a change if the value differs from the committed one, and
    /// applies it when the panel owns its value.
    fn commit(&mut self, value: DateTimeValue) -> Option<PanelEvent> {
        if self.value() == Some(value) {
            return None;
        }

        if let Ownership::Owned(owned) = &mut self.ownership {
            *owned = Some(value);
        }

        Some(PanelEvent::Change(value))
    }

    /// Confirms the pending selection.
    pub fn confirm(&mut self) -> Result<Vec<PanelEvent>, PanelError> {
        let value = self.pending.ok_or(PanelError::NothingPending)?;
        if self.has_time && self.evaluator().is_time_disabled(value.time()) {
            return Err(PanelError::DisabledSelection);
        }

        self.pending = None;
        let mut events: Vec<_> = self.commit(value).into_iter().collect();
        events.push(PanelEvent::Ok(value));
        Ok(events)
    }


    // ---- outside changes ----

    /// Sets the value of a controlled panel, making it controlled if it
    /// wasn’t already. Anything pending is dropped.
    pub fn set_value(&mut self, value: Option<InputValue>) {
        let value = self.diagnostics.resolve(InputParam::Value, value.as_ref());
        self.ownership = Ownership::Controlled(value);
        self.reset(value);
    }

    /// Replaces the value of a panel that owns its value. A controlled
    /// panel keeps its value, but still drops anything pending.
    pub fn set_default_value(&mut self, value: Option<InputValue>) {
        let value = self.diagnostics.resolve(InputParam::DefaultValue, value.as_ref());
        if let Ownership::Owned(owned) = &mut self.ownership {
            *owned = value;
            self.reset(value);
        }
        else {
            self.pending = None;
        }
    }

    fn reset(&mut self, value: Option<DateTimeValue>) {
        self.pending = None;
        if let Some(value) = value {
            self.anchor = value;
        }
    }
}

impl std::fmt::Debug for PickerPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickerPanel")
         .field("picker", &self.picker)
         .field("view", &self.view)
         .field("anchor", &self.anchor)
         .field("ownership", &self.ownership)
         .field("pending", &self.pending)
         .finish_non_exhaustive()
    }
}


/// Reasons a panel refuses an operation.
#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
pub enum PanelError {

    /// A value handed in from outside couldn’t be used.
    #[error("invalid date passed to `{param}`: {source}")]
    InvalidInput { param: InputParam, source: cal::Error },

    #[error("that date or time is disabled")]
    DisabledSelection,

    #[error("can’t move {direction:?} in the {view:?} view")]
    IllegalNavigation { view: ViewMode, direction: Direction },

    #[error("the {view:?} view can’t be shown by this picker")]
    UnreachableView { view: ViewMode },

    #[error("the {view:?} view has nothing to pick")]
    NoCells { view: ViewMode },

    #[error("no entry {index} in the {column:?} column")]
    NoSuchEntry { column: ColumnKind, index: usize },

    #[error("there is nothing to confirm")]
    NothingPending,

    #[error(transparent)]
    Calendar(#[from] cal::Error),
}
