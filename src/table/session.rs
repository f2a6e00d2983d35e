use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ledger::{Transaction, TransactionKind};
use crate::table::filter::{self, FilterState, RecurrenceFilter, SortConfig, SortDirection, SortField};
use crate::table::pager;
use crate::table::selection::SelectionSet;

/// Tuning knobs for a table session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableOptions {
    pub page_size: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}

/// The visible slice of the table for the current session state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableView {
    pub rows: Vec<Transaction>,
    pub total_pages: usize,
    pub page_number: usize,
}

/// Owns the mutable view state of one ledger-table session: filter
/// criteria, sort order, page number, and the bulk-selection set.
///
/// Each interaction handler mutates the state and enforces the
/// cross-component contracts: every filter or sort change resets the
/// page to 1, and every page-changing operation clears the selection.
/// Derived views are recomputed from scratch by [`TableSession::visible`]
/// on each call; nothing derived is cached or persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSession {
    pub filter: FilterState,
    pub sort: SortConfig,
    pub page_number: usize,
    pub selection: SelectionSet,
    pub options: TableOptions,
}

impl Default for TableSession {
    fn default() -> Self {
        Self::new(TableOptions::default())
    }
}

impl TableSession {
    pub fn new(options: TableOptions) -> Self {
        Self {
            filter: FilterState::default(),
            sort: SortConfig::default(),
            page_number: 1,
            selection: SelectionSet::new(),
            options,
        }
    }

    /// Recomputes filter, sort, and pagination for the current state and
    /// returns the slice the table should render.
    pub fn visible(&self, transactions: &[Transaction]) -> TableView {
        let ordered = filter::apply(transactions, &self.filter, &self.sort);
        let page = pager::paginate(&ordered, self.options.page_size, self.page_number);
        tracing::debug!(
            rows = page.items.len(),
            total_pages = page.total_pages,
            page_number = self.page_number,
            "recomputed table view"
        );
        TableView {
            rows: page.items,
            total_pages: page.total_pages,
            page_number: self.page_number,
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
        self.reset_to_first_page();
    }

    pub fn set_kind_filter(&mut self, kind: Option<TransactionKind>) {
        self.filter.kind = kind;
        self.reset_to_first_page();
    }

    pub fn set_recurrence_filter(&mut self, recurrence: Option<RecurrenceFilter>) {
        self.filter.recurrence = recurrence;
        self.reset_to_first_page();
    }

    /// A sort-column click: clicking the currently ascending column flips
    /// it to descending, clicking anything else starts ascending.
    pub fn sort_by(&mut self, field: SortField) {
        let direction = if self.sort.field == field && self.sort.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        self.sort = SortConfig { field, direction };
        self.reset_to_first_page();
    }

    /// Navigates to a page. The floor is clamped here; the upper bound is
    /// the caller's contract, and an overshoot renders as an empty page.
    pub fn set_page(&mut self, page_number: usize) {
        self.page_number = page_number.max(1);
        self.selection.clear();
    }

    /// Returns the filter and sort to their defaults.
    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
        self.sort = SortConfig::default();
        self.reset_to_first_page();
    }

    pub fn toggle_row(&mut self, id: Uuid) {
        self.selection.toggle(id);
    }

    pub fn toggle_page(&mut self, view: &TableView) {
        let page_ids: Vec<Uuid> = view.rows.iter().map(|t| t.id).collect();
        self.selection.toggle_all_on_page(&page_ids);
    }

    /// Prunes selected ids that were deleted by an external collaborator.
    pub fn reconcile_selection(&mut self, transactions: &[Transaction]) {
        let valid: Vec<Uuid> = transactions.iter().map(|t| t.id).collect();
        self.selection.reconcile(&valid);
    }

    /// The ids the UI hands to the bulk-delete collaborator.
    pub fn selected_ids(&self) -> Vec<Uuid> {
        self.selection.ids()
    }

    fn reset_to_first_page(&mut self) {
        self.page_number = 1;
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn transactions(count: usize) -> Vec<Transaction> {
        (0..count)
            .map(|idx| {
                Transaction::new(
                    Uuid::new_v4(),
                    TransactionKind::Expense,
                    100 * (idx as i64 + 1),
                    "general",
                    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
                        + chrono::Duration::days(idx as i64),
                )
                .with_description(format!("entry {idx}"))
            })
            .collect()
    }

    #[test]
    fn new_session_starts_on_page_one_with_defaults() {
        let session = TableSession::default();
        assert_eq!(session.page_number, 1);
        assert_eq!(session.sort, SortConfig::default());
        assert!(!session.filter.is_active());
    }

    #[test]
    fn search_change_resets_page_and_selection() {
        let data = transactions(25);
        let mut session = TableSession::new(TableOptions::default());
        session.set_page(3);
        let view = session.visible(&data);
        session.toggle_page(&view);
        assert!(!session.selection.is_empty());

        session.set_search_term("entry");
        assert_eq!(session.page_number, 1);
        assert!(session.selection.is_empty());
    }

    #[test]
    fn sort_click_toggles_direction_on_the_same_column() {
        let mut session = TableSession::new(TableOptions::default());
        session.sort_by(SortField::Amount);
        assert_eq!(session.sort.direction, SortDirection::Asc);
        session.sort_by(SortField::Amount);
        assert_eq!(session.sort.direction, SortDirection::Desc);
        session.sort_by(SortField::Amount);
        assert_eq!(session.sort.direction, SortDirection::Asc);
        session.sort_by(SortField::Category);
        assert_eq!(session.sort.field, SortField::Category);
        assert_eq!(session.sort.direction, SortDirection::Asc);
    }

    #[test]
    fn sort_change_resets_to_the_first_page() {
        let mut session = TableSession::new(TableOptions::default());
        session.set_page(4);
        session.sort_by(SortField::Date);
        assert_eq!(session.page_number, 1);
    }

    #[test]
    fn page_change_clears_the_selection() {
        let data = transactions(25);
        let mut session = TableSession::new(TableOptions::default());
        let view = session.visible(&data);
        session.toggle_page(&view);
        assert_eq!(session.selection.len(), 10);

        session.set_page(2);
        assert!(session.selection.is_empty());
    }

    #[test]
    fn set_page_floors_at_one() {
        let mut session = TableSession::new(TableOptions::default());
        session.set_page(0);
        assert_eq!(session.page_number, 1);
    }

    #[test]
    fn clear_filters_restores_the_default_view() {
        let mut session = TableSession::new(TableOptions::default());
        session.set_search_term("coffee");
        session.set_kind_filter(Some(TransactionKind::Income));
        session.sort_by(SortField::Amount);
        session.set_page(2);

        session.clear_filters();
        assert!(!session.filter.is_active());
        assert_eq!(session.sort, SortConfig::default());
        assert_eq!(session.page_number, 1);
    }

    #[test]
    fn reconcile_drops_externally_deleted_rows() {
        let data = transactions(5);
        let mut session = TableSession::new(TableOptions::default());
        let view = session.visible(&data);
        session.toggle_page(&view);
        assert_eq!(session.selected_ids().len(), 5);

        let remaining = &data[2..];
        session.reconcile_selection(remaining);
        assert_eq!(session.selected_ids().len(), 3);
    }
}
