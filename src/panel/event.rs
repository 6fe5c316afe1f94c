//! What a panel tells its owner.
//!
//! Every operation on a panel returns the events it raised, in the order
//! they happened. Owners can match on them directly or hand them to a
//! `PanelListener`.

use crate::cal::DateTimeValue;
use crate::panel::view::ViewMode;


#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum PanelEvent {

    /// The committed value became this one.
    Change(DateTimeValue),

    /// The user picked this value. It may still need confirming.
    Select(DateTimeValue),

    /// The panel moved to another view.
    PanelChange { view: ViewMode, anchor: DateTimeValue },

    /// The user confirmed this value.
    Ok(DateTimeValue),
}

impl PanelEvent {

    /// Calls the listener method matching this event.
    pub fn dispatch(&self, listener: &mut dyn PanelListener) {
        match self {
            PanelEvent::Change(value)                => listener.on_change(value),
            PanelEvent::Select(value)                => listener.on_select(value),
            PanelEvent::PanelChange { view, anchor } => listener.on_panel_change(*view, anchor),
            PanelEvent::Ok(value)                    => listener.on_ok(value),
        }
    }
}

/// Something that wants to hear about panel events. Every method does
/// nothing by default.
pub trait PanelListener {
    fn on_change(&mut self, _value: &DateTimeValue) {}
    fn on_select(&mut self, _value: &DateTimeValue) {}
    fn on_panel_change(&mut self, _view: ViewMode, _anchor: &DateTimeValue) {}
    fn on_ok(&mut self, _value: &DateTimeValue) {}
}

/// Hands every event to the listener, in order.
pub fn dispatch_all(events: &[PanelEvent], listener: &mut dyn PanelListener) {
    for event in events {
        event.dispatch(listener);
    }
}
