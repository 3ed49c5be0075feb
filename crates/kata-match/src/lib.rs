//! Substring-based autocomplete ranking.
//!
//! Candidates are normalized (trimmed + lowercased), filtered to those that
//! contain the normalized query as a substring, and ranked in three tiers by
//! match position: prefix matches first, interior matches next, suffix
//! matches last. Within a tier, candidates order by their normalized value in
//! ordinal (byte) order, with the original value as the final tiebreak so
//! case variants rank deterministically.
//!
//! All state is local to the call; the ranker is safe to use from any number
//! of threads without synchronization.

#![forbid(unsafe_code)]

mod ranker;

pub use ranker::{autocomplete, Match, MatchError, MatchTier};
