// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` holds at most one active notification. A new notification
//! replaces the current one and restarts the expiry timer; the timer, when it
//! fires, only retires the notification it was scheduled for.
//!
//! ```text
//!            notify                 notify (replace, restart timer)
//!   Idle ────────────▶ Active ◀──────────────┐
//!    ▲  ◀──────────────  │ └─────────────────┘
//!    │  expiry / dismiss │
//!    └── dismiss ────────┘ (Idle → Idle is a no-op)
//! ```

use super::duration::NotificationDuration;
use super::notification::{Notification, NotificationId};
use iced::task;
use iced::Task;
use std::fmt;
use std::time::Duration;

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Dismiss the current notification.
    Dismiss,
    /// The expiry timer scheduled for this notification fired.
    Expired(NotificationId),
}

/// A pending expiry: which notification, and after how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    pub id: NotificationId,
    pub after: Duration,
}

/// Waits out an expiry and yields the notification it belongs to.
///
/// Feed the returned id to [`Manager::expire`].
pub async fn expire_after(expiry: Expiry) -> NotificationId {
    tokio::time::sleep(expiry.after).await;
    expiry.id
}

/// Single-slot notification holder with an identity-guarded expiry timer.
#[derive(Default)]
pub struct Manager {
    current: Option<Notification>,
    duration: NotificationDuration,
    /// Abort handle of the running expiry task. Dropping it cancels the task.
    timer: Option<task::Handle>,
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("current", &self.current)
            .field("duration", &self.duration)
            .field("timer_pending", &self.timer.is_some())
            .finish()
    }
}

impl Manager {
    #[must_use]
    pub fn new(duration: NotificationDuration) -> Self {
        Self {
            current: None,
            duration,
            timer: None,
        }
    }

    /// Shows `notification` and returns the task that expires it.
    ///
    /// The task must be handed to the Iced runtime; its output is
    /// [`Message::Expired`] carrying the id of this notification.
    pub fn notify(&mut self, notification: Notification) -> Task<Message> {
        let expiry = self.push(notification);
        let (task, handle) = Task::perform(expire_after(expiry), Message::Expired).abortable();
        self.timer = Some(handle.abort_on_drop());
        task
    }

    /// Replaces the current notification without scheduling anything.
    ///
    /// Any timer started by a previous [`notify`](Self::notify) is cancelled.
    /// The caller owns the returned [`Expiry`] and is expected to call
    /// [`expire`](Self::expire) once it has elapsed.
    pub fn push(&mut self, notification: Notification) -> Expiry {
        self.timer = None;
        let id = notification.id();
        tracing::debug!(
            ?id,
            severity = ?notification.severity(),
            key = notification.key(),
            replaced = self.current.is_some(),
            "notification raised"
        );
        self.current = Some(notification);
        Expiry {
            id,
            after: self.duration.as_duration(),
        }
    }

    /// Clears the current notification and cancels its timer.
    ///
    /// Returns `false` when there was nothing to dismiss.
    pub fn dismiss(&mut self) -> bool {
        self.timer = None;
        match self.current.take() {
            Some(notification) => {
                tracing::debug!(id = ?notification.id(), "notification dismissed");
                true
            }
            None => false,
        }
    }

    /// Retires the current notification if, and only if, it is `id`.
    ///
    /// A timer that outlived its notification is ignored.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        if self.current.as_ref().map(Notification::id) != Some(id) {
            tracing::trace!(?id, "ignoring stale expiry");
            return false;
        }
        self.current = None;
        self.timer = None;
        tracing::debug!(?id, "notification expired");
        true
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss => {
                self.dismiss();
            }
            Message::Expired(id) => {
                self.expire(*id);
            }
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}
