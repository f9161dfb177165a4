//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure formatting and rendering helpers, kept out of components so they can
//! be unit tested without a DOM.

pub mod format;
pub mod markdown;
