// SPDX-License-Identifier: MPL-2.0
//! Fallbacks and bounds for values read from `settings.toml`, plus the
//! fixed limits of the contact form and the grid breakpoints.

// Toasts

/// How long a toast stays visible before it expires (in milliseconds).
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 3000;

/// Minimum toast duration (in milliseconds).
pub const MIN_NOTIFICATION_DURATION_MS: u64 = 1000;

/// Maximum toast duration (in milliseconds).
pub const MAX_NOTIFICATION_DURATION_MS: u64 = 30_000;

// Catalog fetch

/// Fixed latency of the simulated catalog fetch (in milliseconds).
pub const DEFAULT_FETCH_DELAY_MS: u64 = 1000;

/// Upper bound for the simulated fetch latency (in milliseconds).
pub const MAX_FETCH_DELAY_MS: u64 = 10_000;

// Contact form

/// Minimum number of characters in a contact message.
pub const MIN_CONTACT_MESSAGE_CHARS: usize = 10;

/// Maximum number of characters in a contact message.
pub const MAX_CONTACT_MESSAGE_CHARS: usize = 2000;

/// Latency of the simulated contact submission (in milliseconds).
pub const CONTACT_SEND_DELAY_MS: u64 = 600;

// Cards grid

/// Available width under which the cards grid uses a single column.
pub const SINGLE_COLUMN_MAX_WIDTH: f32 = 640.0;

/// Available width under which the cards grid uses two columns.
pub const TWO_COLUMNS_MAX_WIDTH: f32 = 1024.0;

const _: () = {
    assert!(MIN_NOTIFICATION_DURATION_MS <= DEFAULT_NOTIFICATION_DURATION_MS);
    assert!(DEFAULT_NOTIFICATION_DURATION_MS <= MAX_NOTIFICATION_DURATION_MS);
    assert!(DEFAULT_FETCH_DELAY_MS <= MAX_FETCH_DELAY_MS);
    assert!(MIN_CONTACT_MESSAGE_CHARS < MAX_CONTACT_MESSAGE_CHARS);
};
