//! Shared text utilities for terminal rendering.
//!
//! Unicode-aware width measurement and truncation, control-character
//! sanitization for user-supplied catalog text, and compact number
//! formatting for listen counts.

mod text;

pub use text::{display_width, format_listen_count, strip_control_chars, truncate_to_width};

/// Maximum allowed search query length, enforced at the input layer.
pub const MAX_SEARCH_QUERY_LENGTH: usize = 256;
