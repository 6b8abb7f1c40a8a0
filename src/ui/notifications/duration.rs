// SPDX-License-Identifier: MPL-2.0
//! Toast display duration.

use crate::app::config::{
    DEFAULT_NOTIFICATION_DURATION_MS, MAX_NOTIFICATION_DURATION_MS, MIN_NOTIFICATION_DURATION_MS,
};
use std::time::Duration;

/// How long a toast stays on screen, in milliseconds.
///
/// Values outside the supported range are clamped on construction.
///
/// # Example
///
/// ```
/// use iced_showcase::ui::notifications::NotificationDuration;
///
/// assert_eq!(NotificationDuration::default().value(), 3000);
/// assert_eq!(NotificationDuration::new(5).value(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationDuration(u64);

impl NotificationDuration {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_NOTIFICATION_DURATION_MS, MAX_NOTIFICATION_DURATION_MS))
    }

    /// Builds the duration from an optional config value.
    #[must_use]
    pub fn from_config(millis: Option<u64>) -> Self {
        millis.map_or_else(Self::default, Self::new)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for NotificationDuration {
    fn default() -> Self {
        Self(DEFAULT_NOTIFICATION_DURATION_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(NotificationDuration::new(0).value(), MIN_NOTIFICATION_DURATION_MS);
        assert_eq!(
            NotificationDuration::new(u64::MAX).value(),
            MAX_NOTIFICATION_DURATION_MS
        );
    }

    #[test]
    fn default_is_three_seconds() {
        assert_eq!(
            NotificationDuration::default().as_duration(),
            Duration::from_millis(3000)
        );
    }

    #[test]
    fn from_config_uses_default_when_unset() {
        assert_eq!(
            NotificationDuration::from_config(None),
            NotificationDuration::default()
        );
        assert_eq!(NotificationDuration::from_config(Some(4500)).value(), 4500);
    }
}
