// File: src/store.rs
use crate::model::{Event, EventPatch};
use crate::palette;
use crate::surface::{CalendarSurface, StyledEvent};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Queryable mirror of the events shown by an externally-owned calendar
/// widget.
///
/// The widget stays authoritative for what is rendered; the mirror holds
/// the insert-time snapshot of each record so hosts can look events up
/// (and interaction callbacks can be fed) without reaching into the
/// widget. Range queries read the live widget, not the mirror.
#[derive(Debug)]
pub struct EventStore<S: CalendarSurface> {
    surface: S,
    events: HashMap<String, Event>,
}

impl<S: CalendarSurface> EventStore<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            events: HashMap::new(),
        }
    }

    /// Resolve display colors for the event's category, hand the styled
    /// record to the widget and mirror the plain record. Re-adding an id
    /// replaces the mirror entry; what the widget does with a duplicate
    /// is its own business.
    pub fn add_event(&mut self, event: Event) {
        let colors = palette::category_colors(event.category);
        self.surface.add_event(StyledEvent {
            event: event.clone(),
            colors,
        });
        self.events.insert(event.id.clone(), event);
    }

    /// Patch the widget's live event in place. Only fields present in
    /// the patch are written; a category change re-resolves the color
    /// pair. Unknown ids are a silent no-op.
    ///
    /// The mirror entry keeps its insert-time snapshot: range queries
    /// read the live surface, so rendering and querying stay consistent
    /// without the mirror tracking every mutation.
    pub fn update_event(&mut self, id: &str, patch: &EventPatch) {
        let Some(live) = self.surface.event_by_id(id) else {
            log::debug!("update_event: '{id}' not rendered, ignoring");
            return;
        };

        if let Some(title) = &patch.title {
            live.set_title(title);
        }
        if let Some(start) = patch.start {
            live.set_start(start);
        }
        if let Some(end) = patch.end {
            live.set_end(Some(end));
        }
        if let Some(all_day) = patch.all_day {
            live.set_all_day(all_day);
        }
        if let Some(category) = patch.category {
            live.set_colors(palette::category_colors(category));
        }
    }

    /// Remove an event from the widget and, when the widget had it, from
    /// the mirror. Unknown ids are a silent no-op.
    pub fn remove_event(&mut self, id: &str) {
        if self.surface.remove_event(id) {
            self.events.remove(id);
        }
    }

    /// Drop every event from the widget and the mirror.
    pub fn clear_events(&mut self) {
        self.surface.remove_all_events();
        self.events.clear();
    }

    /// Events the widget currently renders whose effective interval
    /// intersects `[start, end]`, boundaries inclusive.
    ///
    /// An event matches when its start falls within the range, or its
    /// end falls within the range, or its interval fully contains the
    /// range. An event without an end occupies the single instant at its
    /// start.
    pub fn events_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<StyledEvent> {
        self.surface
            .events()
            .into_iter()
            .filter(|styled| {
                let event_start = styled.event.start;
                let event_end = styled.event.effective_end();
                (event_start >= start && event_start <= end)
                    || (event_end >= start && event_end <= end)
                    || (event_start <= start && event_end >= end)
            })
            .collect()
    }

    /// Insert-time snapshot for an id, if one was ever added.
    pub fn snapshot(&self, id: &str) -> Option<&Event> {
        self.events.get(id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
