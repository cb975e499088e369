//! Event details screen

use event_client::{Event, EventId};
use serde::Serialize;

use super::format::{format_content, format_event_date};
use super::FetchState;

/// Single event state
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetailsScreen {
    event_id: EventId,
    fetch: FetchState,
    event: Option<Event>,
}

impl EventDetailsScreen {
    /// Shown when the fetch finished without an event
    pub const UNAVAILABLE: &'static str = "Event details not available";
    /// Notice title when the event cannot be loaded
    pub const FETCH_FAILED_TITLE: &'static str = "Failed to fetch event details:";
    /// Register button label
    pub const REGISTER_LABEL: &'static str = "Register";
    /// Notice title after pressing Register
    pub const REGISTERED_TITLE: &'static str = "Registration";
    /// Notice body after pressing Register
    pub const REGISTERED_MESSAGE: &'static str = "You have successfully registered for the event!";
    /// Description section title
    pub const ABOUT_TITLE: &'static str = "About";
    /// Terms section title
    pub const TERMS_TITLE: &'static str = "Terms and Conditions";

    /// Screen for `event_id` that has not fetched yet
    pub fn new(event_id: EventId) -> Self {
        Self { event_id, fetch: FetchState::Pending, event: None }
    }

    /// Event this screen shows
    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    /// Claim the one fetch this screen makes
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetch != FetchState::Pending {
            return false;
        }
        self.fetch = FetchState::Loading;
        true
    }

    /// Store the fetched event
    pub fn finish_fetch(&mut self, event: Event) {
        self.event = Some(event);
        self.fetch = FetchState::Done;
    }

    /// The fetch failed
    pub fn fail_fetch(&mut self) {
        self.fetch = FetchState::Done;
    }

    /// Loaded event
    pub fn event(&self) -> Option<&Event> {
        self.event.as_ref()
    }

    /// Render state
    pub fn view(&self) -> EventDetailsView {
        match (&self.fetch, &self.event) {
            (FetchState::Done, Some(event)) => EventDetailsView::Loaded(EventDetailsBody::from(event)),
            (FetchState::Done, None) => EventDetailsView::Unavailable { message: Self::UNAVAILABLE },
            _ => EventDetailsView::Loading,
        }
    }
}

/// A titled block of paragraphs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Section heading
    pub title: &'static str,
    /// Paragraphs, blank ones included
    pub paragraphs: Vec<String>,
}

/// Content of a loaded event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDetailsBody {
    /// Feature image URL
    pub image_url: String,
    /// Title
    pub title: String,
    /// Formatted date
    pub date: String,
    /// Venue
    pub location: String,
    /// Register button label
    pub register_label: &'static str,
    /// About, then terms
    pub sections: Vec<Section>,
}

impl From<&Event> for EventDetailsBody {
    fn from(event: &Event) -> Self {
        Self {
            image_url: event.feature_image.clone(),
            title: event.title.clone(),
            date: format_event_date(&event.date_time),
            location: event.location.clone(),
            register_label: EventDetailsScreen::REGISTER_LABEL,
            sections: vec![
                Section {
                    title: EventDetailsScreen::ABOUT_TITLE,
                    paragraphs: format_content(&event.description),
                },
                Section {
                    title: EventDetailsScreen::TERMS_TITLE,
                    paragraphs: format_content(&event.terms_and_conditions),
                },
            ],
        }
    }
}

/// Render state of the details screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EventDetailsView {
    /// Fetch outstanding
    Loading,
    /// Fetch finished without an event
    Unavailable {
        /// Placeholder text
        message: &'static str,
    },
    /// Event loaded
    Loaded(EventDetailsBody),
}

#[cfg(test)]
mod tests {
    use super::*;
    use event_client::test_utils;

    fn loaded(id: u64) -> EventDetailsScreen {
        let mut screen = EventDetailsScreen::new(EventId::from(id));
        screen.begin_fetch();
        screen.finish_fetch(serde_json::from_value(test_utils::event(id)).unwrap());
        screen
    }

    #[test]
    fn test_loading_until_fetched() {
        let mut screen = EventDetailsScreen::new(EventId::from(1u64));
        assert_eq!(screen.view(), EventDetailsView::Loading);
        assert!(screen.begin_fetch());
        assert!(!screen.begin_fetch());
        assert_eq!(screen.view(), EventDetailsView::Loading);
    }

    #[test]
    fn test_unavailable_after_failure() {
        let mut screen = EventDetailsScreen::new(EventId::from(1u64));
        screen.begin_fetch();
        screen.fail_fetch();

        assert_eq!(
            screen.view(),
            EventDetailsView::Unavailable { message: "Event details not available" }
        );
    }

    #[test]
    fn test_loaded_sections() {
        let EventDetailsView::Loaded(body) = loaded(5).view() else {
            panic!("expected loaded view");
        };

        assert_eq!(body.title, "Event 5");
        assert_eq!(body.date, "March 5, 2025");
        assert_eq!(body.sections[0].title, "About");
        assert_eq!(body.sections[0].paragraphs, vec!["Doors open at six.", "Bring a friend."]);
        assert_eq!(body.sections[1].title, "Terms and Conditions");
        assert_eq!(body.sections[1].paragraphs, vec!["No refunds.", "Be kind."]);
    }
}
