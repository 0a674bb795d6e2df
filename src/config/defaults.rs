// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of grid items per row at the widest breakpoint.
pub const DEFAULT_ITEMS_PER_ROW: u8 = 4;

/// Minimum recognized items-per-row value.
pub const MIN_ITEMS_PER_ROW: u8 = 2;

/// Maximum recognized items-per-row value. Unrecognized values fall back
/// to the schedule this ceiling produces.
pub const MAX_ITEMS_PER_ROW: u8 = 4;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_ITEMS_PER_ROW >= 2);
    assert!(MAX_ITEMS_PER_ROW >= MIN_ITEMS_PER_ROW);
    assert!(DEFAULT_ITEMS_PER_ROW >= MIN_ITEMS_PER_ROW);
    assert!(DEFAULT_ITEMS_PER_ROW <= MAX_ITEMS_PER_ROW);
};
