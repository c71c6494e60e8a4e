//! Region proxy derived from a customer identifier.
//!
//! This is a placeholder for real geolocation: it buckets identifiers by the
//! sum of their UTF-16 code units, so it is stable across runs but carries no
//! geographic meaning.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Apac,
    Emea,
    Americas,
}

impl Region {
    /// Bucket order used by [`region_of`].
    pub const ALL: [Region; 3] = [Region::Apac, Region::Emea, Region::Americas];

    pub fn label(self) -> &'static str {
        match self {
            Region::Apac => "UTC+8 (APAC)",
            Region::Emea => "UTC+1 (EMEA)",
            Region::Americas => "UTC-5 (AMER)",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn region_of(customer_id: &str) -> Region {
    let sum: u64 = customer_id.encode_utf16().map(u64::from).sum();
    Region::ALL[(sum % 3) as usize]
}
