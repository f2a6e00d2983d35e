use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A monthly spending limit, scoped to one account by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Budget {
    pub id: Uuid,
    pub amount_cents: i64,
}

impl Budget {
    pub fn new(amount_cents: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount_cents,
        }
    }
}
