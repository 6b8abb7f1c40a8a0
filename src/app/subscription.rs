// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are turned into top-level messages here: window resizes
//! feed the grid layout, and two keyboard shortcuts act on the whole page.

use super::Message;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, window, Event, Subscription};

/// Subscribes to the native events the page reacts to.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| route_event(&event, status))
}

/// Maps a native event to an application message.
///
/// Keyboard shortcuts are skipped when a widget (such as a focused text
/// input) already captured the key press.
fn route_event(event: &Event, status: event::Status) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(*size)),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if status == event::Status::Ignored =>
        {
            shortcut(key, *modifiers)
        }
        _ => None,
    }
}

fn shortcut(key: &Key, modifiers: Modifiers) -> Option<Message> {
    match key.as_ref() {
        Key::Named(Named::Escape) => Some(Message::DismissToast),
        Key::Character("t" | "T") if modifiers.command() => Some(Message::ToggleTheme),
        _ => None,
    }
}
