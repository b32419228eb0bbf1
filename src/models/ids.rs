//! Strongly-typed ID wrappers for all entity types
//!
//! Ids are small integers handed out sequentially by the stores. The newtype
//! wrappers keep a `BudgetId` from being passed where a `CategoryId` is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ids that a store can allocate in sequence
pub trait SequentialId: Copy + Ord + fmt::Display + fmt::Debug + Send + Sync + 'static {
    /// The id given to the first record of an empty store
    fn first() -> Self;

    /// The id following this one
    fn next(self) -> Self;
}

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            pub const fn value(&self) -> u32 {
                self.0
            }
        }

        impl SequentialId for $name {
            fn first() -> Self {
                Self(1)
            }

            fn next(self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

define_id!(TransactionId, "txn-");
define_id!(CategoryId, "cat-");
define_id!(BudgetId, "bud-");
