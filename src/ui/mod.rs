// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Sections
//!
//! - [`navbar`] - Brand, language switch and theme toggle
//! - [`hero`] - Hero banner with the contact call-to-action
//! - [`cards`] - Responsive cards grid with the highlighted card
//! - [`contact`] - Contact form with validation
//! - [`notifications`] - Single-toast notification system
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod cards;
pub mod contact;
pub mod design_tokens;
pub mod hero;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theming;
