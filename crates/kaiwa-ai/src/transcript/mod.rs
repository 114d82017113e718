//! Per-session conversation transcripts.
//!
//! A transcript is the ordered list of user/assistant turns of one session,
//! never including the system turn. Transcripts only grow; the only way a
//! turn disappears is the whole session expiring.

mod store;

pub use store::TranscriptStore;
