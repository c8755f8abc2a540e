// File: src/surface.rs
/*! Calendar widget trait seam.

The rendering widget (the component that actually draws the calendar
grid and handles drag/resize gestures) is owned by the embedding layer.
This crate only ever talks to it through `CalendarSurface` and, for
in-place mutation of a single rendered event, `LiveEvent`. The widget's
internal object graph is never modeled here.
*/

use crate::model::Event;
use crate::palette::ColorPair;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// Calendar grid granularity the widget can display.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    #[default]
    Month,
    Week,
    Day,
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarView::Month => write!(f, "month"),
            CalendarView::Week => write!(f, "week"),
            CalendarView::Day => write!(f, "day"),
        }
    }
}

/// An event record decorated with its resolved display colors; the shape
/// the widget renders and reports back from live queries.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledEvent {
    pub event: Event,
    pub colors: ColorPair,
}

/// Mutable handle to one event the widget currently renders.
///
/// Setters write through to the widget's own state; the widget decides
/// how (and whether) to re-render.
pub trait LiveEvent {
    fn id(&self) -> &str;
    fn start(&self) -> DateTime<Utc>;
    fn end(&self) -> Option<DateTime<Utc>>;

    fn set_title(&mut self, title: &str);
    fn set_start(&mut self, start: DateTime<Utc>);
    fn set_end(&mut self, end: Option<DateTime<Utc>>);
    fn set_all_day(&mut self, all_day: bool);
    fn set_colors(&mut self, colors: ColorPair);
}

/// Operations the externally-owned calendar widget exposes to this crate.
pub trait CalendarSurface {
    /// Hand a styled event to the widget for rendering. Duplicate-id
    /// handling is widget-defined and not inspected here.
    fn add_event(&mut self, event: StyledEvent);

    /// Live lookup of a rendered event. `None` when the widget does not
    /// currently render the id.
    fn event_by_id(&mut self, id: &str) -> Option<&mut dyn LiveEvent>;

    /// Remove one rendered event. Returns whether the widget had it.
    fn remove_event(&mut self, id: &str) -> bool;

    /// Drop every rendered event.
    fn remove_all_events(&mut self);

    /// Snapshot of everything the widget currently renders.
    fn events(&self) -> Vec<StyledEvent>;

    fn change_view(&mut self, view: CalendarView);
    fn show_today(&mut self);
    fn prev_period(&mut self);
    fn next_period(&mut self);
}

impl<S: CalendarSurface + ?Sized> CalendarSurface for Box<S> {
    fn add_event(&mut self, event: StyledEvent) {
        (**self).add_event(event)
    }

    fn event_by_id(&mut self, id: &str) -> Option<&mut dyn LiveEvent> {
        (**self).event_by_id(id)
    }

    fn remove_event(&mut self, id: &str) -> bool {
        (**self).remove_event(id)
    }

    fn remove_all_events(&mut self) {
        (**self).remove_all_events()
    }

    fn events(&self) -> Vec<StyledEvent> {
        (**self).events()
    }

    fn change_view(&mut self, view: CalendarView) {
        (**self).change_view(view)
    }

    fn show_today(&mut self) {
        (**self).show_today()
    }

    fn prev_period(&mut self) {
        (**self).prev_period()
    }

    fn next_period(&mut self) {
        (**self).next_period()
    }
}
