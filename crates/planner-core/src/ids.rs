//! ID prefixes and generation.
//!
//! IDs look like `tsk-a3f8b2c1`: a three-letter prefix, a dash and eight
//! lowercase hex characters.

use std::fmt;

use chrono::Utc;

pub const PREFIX_TASK: &str = "tsk";

/// Source of fresh entity IDs.
///
/// The store asks for a new ID until it gets one not already in use, so an
/// implementation only needs to be unlikely to repeat itself.
pub trait IdSource: fmt::Debug + Send {
    fn next_id(&mut self, prefix: &str) -> String;
}

/// Random IDs from the OS entropy source.
///
/// Falls back to the hex millisecond timestamp plus a per-source counter if
/// the entropy source is unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds {
    fallbacks: u32,
}

impl IdSource for RandomIds {
    fn next_id(&mut self, prefix: &str) -> String {
        let mut bytes = [0u8; 4];
        match getrandom::fill(&mut bytes) {
            Ok(()) => format_id(prefix, &bytes),
            Err(error) => {
                tracing::warn!(%error, "entropy source unavailable; using timestamp id");
                self.fallbacks = self.fallbacks.wrapping_add(1);
                format!(
                    "{prefix}-{:x}{:x}",
                    Utc::now().timestamp_millis(),
                    self.fallbacks
                )
            }
        }
    }
}

/// Deterministic IDs (`tsk-00000001`, `tsk-00000002`, ...).
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialIds {
    next: u32,
}

impl SequentialIds {
    #[must_use]
    pub const fn starting_at(next: u32) -> Self {
        Self { next }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next = self.next.wrapping_add(1);
        format_id(prefix, &self.next.to_be_bytes())
    }
}

fn format_id(prefix: &str, bytes: &[u8]) -> String {
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    format!("{prefix}-{hex}")
}
