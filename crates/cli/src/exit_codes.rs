//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range | Domain    | Description                              |
//! |-------|-----------|------------------------------------------|
//! | 0     | Universal | Success                                  |
//! | 1     | Universal | General error (reserved, unspecified)    |
//! | 2     | Universal | CLI usage error (bad args, missing file) |
//! | 3-9   | pipeline  | Tabulate/reconcile-specific codes        |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant in the appropriate range
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into the relevant command's error handling

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Pipeline (3-9)
// =============================================================================

/// Reconciliation ran but left not-found rows or quantity mismatches.
/// Like `diff(1)`, a nonzero exit here means "the lists differ."
pub const EXIT_RECON_UNMATCHED: u8 = 3;

/// Job config failed to parse or validate, or names unknown/unassigned
/// role columns.
pub const EXIT_RECON_INVALID_CONFIG: u8 = 4;

/// Runtime failure reading inputs or writing outputs.
pub const EXIT_RECON_RUNTIME: u8 = 5;

/// The list text had no tabulatable lines.
pub const EXIT_EMPTY_INPUT: u8 = 6;
