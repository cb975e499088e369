//! Home screen: the event list

use event_client::{Event, EventId};
use serde::Serialize;

use super::format::format_event_date;
use super::FetchState;

/// Event list state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeScreen {
    fetch: FetchState,
    events: Vec<Event>,
}

impl HomeScreen {
    /// Screen header
    pub const HEADER: &'static str = "Explore the Best Events Happening Around You";
    /// Notice title when the list cannot be loaded
    pub const FETCH_FAILED_TITLE: &'static str = "Failed to fetch events:";

    /// Screen that has not fetched yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the one fetch this screen makes
    ///
    /// Returns true exactly once.
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetch != FetchState::Pending {
            return false;
        }
        self.fetch = FetchState::Loading;
        true
    }

    /// Store the fetched collection
    pub fn finish_fetch(&mut self, events: Vec<Event>) {
        self.events = events;
        self.fetch = FetchState::Done;
    }

    /// The fetch failed; the list stays empty
    pub fn fail_fetch(&mut self) {
        self.fetch = FetchState::Done;
    }

    /// Whether the fetch is outstanding
    pub fn is_loading(&self) -> bool {
        self.fetch == FetchState::Loading
    }

    /// Loaded events
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Render state
    pub fn view(&self) -> HomeView {
        HomeView {
            header: Self::HEADER,
            loading: self.fetch != FetchState::Done,
            cards: self.events.iter().map(EventCard::from).collect(),
        }
    }
}

/// One entry in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCard {
    /// List key
    pub key: EventId,
    /// Formatted date
    pub date: String,
    /// Title
    pub title: String,
    /// Venue
    pub location: String,
    /// Feature image URL
    pub image_url: String,
}

impl From<&Event> for EventCard {
    fn from(event: &Event) -> Self {
        Self {
            key: event.id.clone(),
            date: format_event_date(&event.date_time),
            title: event.title.clone(),
            location: event.location.clone(),
            image_url: event.feature_image.clone(),
        }
    }
}

/// Render state of the home screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    /// Header text
    pub header: &'static str,
    /// Loading indicator
    pub loading: bool,
    /// Event cards in server order
    pub cards: Vec<EventCard>,
}
