#![doc(test(attr(deny(warnings))))]

//! Ledger Analytics provides the pure view-state and aggregation engine
//! behind a personal-finance transaction ledger: filtering, sorting, and
//! paginating the transaction table, tracking bulk-selection state, and
//! producing the time-series, category, and budget-utilization summaries
//! the surrounding UI renders.
//!
//! The crate performs no I/O and owns no storage. Callers hand it
//! already-fetched account, transaction, and budget collections and read
//! back derived view models; the only state that outlives a single call
//! is the per-session [`table::TableSession`].

pub mod errors;
pub mod ledger;
pub mod summary;
pub mod table;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ledger Analytics tracing initialized.");
    });
}
