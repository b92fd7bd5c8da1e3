//! swipelist - swipe-to-reveal row actions for list interfaces
//!
//! This library provides the gesture core that lets a user drag a list row
//! sideways to reveal an action control, keeps at most one row open, attaches
//! itself to rows added at any time, and forwards action taps to the host
//! application. A terminal demo built with Ratatui drives it from mouse input.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`surface`] - Element tree the gesture attaches to
//! * [`swipe`] - Gesture tracking, open-row coordination and action dispatch
//! * [`ui`] - Terminal user interface hosting the swipe list

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Retained element tree with structural change notifications
pub mod surface;

/// Swipe gesture core
pub mod swipe;

/// Terminal user interface components and rendering
pub mod ui;
