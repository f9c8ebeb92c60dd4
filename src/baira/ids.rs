//! Item id generation.
//!
//! Ids only need to be unique within a list for the lifetime of a user's data.
//! The default generator concatenates the current time in base 36 with a short
//! random suffix, e.g. `m1ab2c3dq7k2x`. Tests swap in [`SequentialIds`] to get
//! predictable ids.

use chrono::Utc;
use uuid::Uuid;

const SUFFIX_LEN: usize = 5;

/// Anything that can hand out fresh item ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

impl<F: FnMut() -> String> IdGenerator for F {
    fn next_id(&mut self) -> String {
        self()
    }
}

/// Base-36 milliseconds since the epoch plus 5 random base-36 characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeRandomIds;

impl IdGenerator for TimeRandomIds {
    fn next_id(&mut self) -> String {
        let millis = Utc::now().timestamp_millis().max(0) as u128;
        let random = to_base36(Uuid::new_v4().as_u128());
        let suffix: String = random.chars().rev().take(SUFFIX_LEN).collect();
        format!("{}{:0>width$}", to_base36(millis), suffix, width = SUFFIX_LEN)
    }
}

/// Deterministic ids: `<prefix>1`, `<prefix>2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

fn to_base36(mut n: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
