//! Structured logging field name constants for notehub.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized names across every
//! subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, request rejected unexpectedly |
//! | INFO  | Lifecycle events (startup, shutdown), operation completions |
//! | DEBUG | Decision points: policy outcomes, code issuance |
//! | TRACE | Per-item detail (store lookups) |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "api", "store", "policy"
pub const SUBSYSTEM: &str = "subsystem";

/// Logical operation name.
/// Examples: "view_note", "issue_code", "confirm_code"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// User UUID making the request (absent for anonymous visitors).
pub const USER_ID: &str = "user_id";

/// Note UUID being operated on.
pub const NOTE_ID: &str = "note_id";

/// Collection UUID the note belongs to.
pub const COLLECTION_ID: &str = "collection_id";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Access/validation outcome.
/// Values: "allowed", "denied", "success", or a rejection reason.
pub const OUTCOME: &str = "outcome";

/// Rejection reason for a failed code validation.
pub const REASON: &str = "reason";
