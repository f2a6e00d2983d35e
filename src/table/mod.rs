//! The transaction-table state machine: filtering, sorting, pagination,
//! and bulk-selection tracking for the ledger view.
//!
//! [`filter`], [`pager`], and [`selection`] are the pure building blocks;
//! [`session`] is the thin controller that owns the mutable view state
//! and enforces the cross-component contracts (page resets, selection
//! clearing) the pieces themselves stay agnostic of.

pub mod filter;
pub mod pager;
pub mod selection;
pub mod session;

pub use filter::{apply, FilterState, RecurrenceFilter, SortConfig, SortDirection, SortField};
pub use pager::{paginate, Page};
pub use selection::SelectionSet;
pub use session::{TableOptions, TableSession, TableView};
