//! Session view state: the fetched snapshot, fetch status, active tab and
//! delete confirmation.

use api_types::stats::StatsSnapshot;

use crate::{
    client::{ClientError, StatsApi},
    views::{HistoryView, OverviewView},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    History,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Asosiy",
            Self::History => "Tarix",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Overview => Self::History,
            Self::History => Self::Overview,
        }
    }
}

/// Fetch status. The snapshot only exists while `Ready`.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Loading,
    Ready(StatsSnapshot),
    Error(String),
}

/// Identifies one fetch. Results carrying an outdated ticket are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct FetchTicket {
    generation: u64,
}

#[derive(Debug)]
pub struct ViewState {
    status: Status,
    active_tab: Tab,
    delete_confirmation_open: bool,
    deleting: bool,
    notice: Option<String>,
    /// Highlighted row on the history tab.
    history_selected: usize,
    generation: u64,
    torn_down: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            status: Status::Loading,
            active_tab: Tab::Overview,
            delete_confirmation_open: false,
            deleting: false,
            notice: None,
            history_selected: 0,
            generation: 0,
            torn_down: false,
        }
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn snapshot(&self) -> Option<&StatsSnapshot> {
        match &self.status {
            Status::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            Status::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn delete_confirmation_open(&self) -> bool {
        self.delete_confirmation_open
    }

    /// A confirmed delete request is still in flight.
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn history_selected(&self) -> usize {
        self.history_selected
    }

    /// Moves the history highlight down, stopping at the last transaction.
    pub fn select_next_row(&mut self) {
        let rows = self
            .snapshot()
            .map_or(0, |snapshot| snapshot.recent_transactions.len());
        if self.history_selected + 1 < rows {
            self.history_selected += 1;
        }
    }

    pub fn select_previous_row(&mut self) {
        self.history_selected = self.history_selected.saturating_sub(1);
    }

    /// Blocking message from a failed delete, shown until dismissed.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Starts a fetch cycle: status becomes `Loading` and any ticket handed
    /// out earlier is invalidated.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.status = Status::Loading;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Applies the outcome of the fetch identified by `ticket`.
    ///
    /// Returns `false` when the result is stale (a newer fetch started, the
    /// cycle already settled, or the session was torn down) and was dropped.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<StatsSnapshot, ClientError>,
    ) -> bool {
        if self.torn_down || ticket.generation != self.generation || !self.is_loading() {
            tracing::debug!(
                "dropping stale stats response (ticket {}, current {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.status = match result {
            Ok(snapshot) => {
                tracing::info!(
                    "stats loaded: {} transactions, {} weekly points",
                    snapshot.recent_transactions.len(),
                    snapshot.weekly_data.len()
                );
                Status::Ready(snapshot)
            }
            Err(err) => {
                tracing::warn!("stats fetch failed: {err}");
                Status::Error(err.to_string())
            }
        };
        true
    }

    /// Runs one complete fetch cycle.
    pub async fn initialize<A: StatsApi>(&mut self, api: &A, user_id: i64) {
        let ticket = self.begin_fetch();
        let result = api.fetch_stats(user_id).await;
        self.apply_fetch(ticket, result);
    }

    /// Marks the session as ended; later fetch results are ignored.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn request_delete(&mut self) {
        if !self.deleting {
            self.delete_confirmation_open = true;
        }
    }

    pub fn cancel_delete(&mut self) {
        self.delete_confirmation_open = false;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Deletes every transaction after the user confirmed.
    ///
    /// Does nothing unless the confirmation is open. On success the whole
    /// state is discarded and fetched again; on failure the snapshot stays
    /// and the error becomes the notice. The confirmation closes either way.
    pub async fn confirm_delete<A: StatsApi>(&mut self, api: &A, user_id: i64) {
        if !self.begin_delete() {
            return;
        }
        let result = api.delete_all_transactions(user_id).await;
        if self.finish_delete(result) {
            self.initialize(api, user_id).await;
        }
    }

    /// First half of [`confirm_delete`](Self::confirm_delete) for callers
    /// that send the request themselves. Closes the confirmation and returns
    /// whether a delete should be sent.
    pub fn begin_delete(&mut self) -> bool {
        if !self.delete_confirmation_open || self.deleting {
            tracing::debug!("delete confirmation not open; ignoring confirm");
            return false;
        }
        self.delete_confirmation_open = false;
        self.deleting = true;
        true
    }

    /// Applies the delete outcome. Returns `true` when the state was reset
    /// and a fresh fetch has to be started.
    pub fn finish_delete(&mut self, result: Result<(), ClientError>) -> bool {
        self.deleting = false;
        if self.torn_down {
            return false;
        }

        match result {
            Ok(()) => {
                self.reset();
                true
            }
            Err(err) => {
                tracing::warn!("delete all transactions failed: {err}");
                self.notice = Some(err.to_string());
                false
            }
        }
    }

    /// Back to a fresh session. The generation keeps counting so tickets
    /// from before the reset stay stale.
    fn reset(&mut self) {
        let generation = self.generation;
        *self = Self {
            generation,
            ..Self::new()
        };
    }

    pub fn overview(&self) -> Option<OverviewView> {
        self.snapshot().map(OverviewView::from_snapshot)
    }

    pub fn history(&self) -> Option<HistoryView> {
        self.snapshot().map(HistoryView::from_snapshot)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::VecDeque,
        sync::{
            Mutex,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use api_types::stats::{CategoryTotal, MonthlyStats};

    use super::*;

    #[derive(Default)]
    struct FakeApi {
        stats: Mutex<VecDeque<Result<StatsSnapshot, ClientError>>>,
        delete: Mutex<VecDeque<Result<(), ClientError>>>,
        fetch_calls: AtomicUsize,
        delete_calls: AtomicUsize,
    }

    impl FakeApi {
        fn with_stats(self, result: Result<StatsSnapshot, ClientError>) -> Self {
            self.stats.lock().unwrap().push_back(result);
            self
        }

        fn with_delete(self, result: Result<(), ClientError>) -> Self {
            self.delete.lock().unwrap().push_back(result);
            self
        }
    }

    impl StatsApi for FakeApi {
        async fn fetch_stats(&self, _user_id: i64) -> Result<StatsSnapshot, ClientError> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            self.stats
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ClientError::RequestFailed("no response".to_string())))
        }

        async fn delete_all_transactions(&self, _user_id: i64) -> Result<(), ClientError> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            self.delete.lock().unwrap().pop_front().unwrap_or(Ok(()))
        }
    }

    fn snapshot(balance: i64) -> StatsSnapshot {
        StatsSnapshot {
            balance: Some(balance),
            monthly_stats: MonthlyStats {
                income: Some(2_000_000),
                expense: Some(500_000),
            },
            expenses_by_category: vec![CategoryTotal {
                category: "Food".to_string(),
                value: 300_000,
            }],
            ..StatsSnapshot::default()
        }
    }

    fn server_error() -> ClientError {
        ClientError::RequestFailed("Server xatosi".to_string())
    }

    #[test]
    fn fresh_state_is_loading_on_overview() {
        let state = ViewState::new();
        assert!(state.is_loading());
        assert!(state.snapshot().is_none());
        assert_eq!(state.active_tab(), Tab::Overview);
        assert!(!state.delete_confirmation_open());
    }

    #[tokio::test]
    async fn initialize_success_is_ready() {
        let api = FakeApi::default().with_stats(Ok(snapshot(1_500_000)));
        let mut state = ViewState::new();

        state.initialize(&api, 1).await;

        assert_eq!(state.snapshot().and_then(|s| s.balance), Some(1_500_000));
        assert!(state.error_message().is_none());
        assert_eq!(api.fetch_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn initialize_failure_is_error_without_snapshot() {
        let api = FakeApi::default().with_stats(Err(server_error()));
        let mut state = ViewState::new();

        state.initialize(&api, 1).await;

        assert_eq!(state.error_message(), Some("Server xatosi"));
        assert!(state.snapshot().is_none());
        assert!(state.overview().is_none());
    }

    #[test]
    fn stale_ticket_is_dropped() {
        let mut state = ViewState::new();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert!(!state.apply_fetch(first, Ok(snapshot(1))));
        assert!(state.is_loading());
        assert!(state.apply_fetch(second, Ok(snapshot(2))));
        assert_eq!(state.snapshot().and_then(|s| s.balance), Some(2));
    }

    #[test]
    fn settled_cycle_ignores_repeat_result() {
        let mut state = ViewState::new();
        let ticket = state.begin_fetch();

        assert!(state.apply_fetch(ticket, Err(server_error())));
        assert!(!state.apply_fetch(ticket, Ok(snapshot(1))));
        assert_eq!(state.error_message(), Some("Server xatosi"));
    }

    #[test]
    fn result_after_teardown_is_dropped() {
        let mut state = ViewState::new();
        let ticket = state.begin_fetch();
        state.teardown();

        assert!(!state.apply_fetch(ticket, Ok(snapshot(1))));
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn tab_and_dialog_are_independent_of_fetch() {
        let mut state = ViewState::new();
        state.select_tab(Tab::History);
        state.request_delete();
        let ticket = state.begin_fetch();
        state.apply_fetch(ticket, Err(server_error()));

        assert_eq!(state.active_tab(), Tab::History);
        assert!(state.delete_confirmation_open());

        state.cancel_delete();
        assert!(!state.delete_confirmation_open());
    }

    #[tokio::test]
    async fn confirm_without_request_does_nothing() {
        let api = FakeApi::default().with_stats(Ok(snapshot(10)));
        let mut state = ViewState::new();
        state.initialize(&api, 1).await;

        state.confirm_delete(&api, 1).await;

        assert_eq!(api.delete_calls.load(Ordering::SeqCst), 0);
        assert_eq!(state.snapshot().and_then(|s| s.balance), Some(10));
    }

    #[tokio::test]
    async fn confirmed_delete_resets_and_refetches() {
        let api = FakeApi::default()
            .with_stats(Ok(snapshot(10)))
            .with_stats(Ok(StatsSnapshot::default()))
            .with_delete(Ok(()));
        let mut state = ViewState::new();
        state.initialize(&api, 1).await;
        state.select_tab(Tab::History);
        state.request_delete();

        state.confirm_delete(&api, 1).await;

        assert_eq!(api.delete_calls.load(Ordering::SeqCst), 1);
        assert_eq!(api.fetch_calls.load(Ordering::SeqCst), 2);
        assert!(!state.delete_confirmation_open());
        assert_eq!(state.active_tab(), Tab::Overview);
        assert_eq!(state.snapshot(), Some(&StatsSnapshot::default()));
        assert!(state.notice().is_none());
    }

    #[tokio::test]
    async fn failed_delete_keeps_snapshot_and_closes_dialog() {
        let api = FakeApi::default()
            .with_stats(Ok(snapshot(10)))
            .with_delete(Err(ClientError::RequestFailed(
                "O'chirishda xatolik".to_string(),
            )));
        let mut state = ViewState::new();
        state.initialize(&api, 1).await;
        state.request_delete();

        state.confirm_delete(&api, 1).await;

        assert!(!state.delete_confirmation_open());
        assert_eq!(state.snapshot().and_then(|s| s.balance), Some(10));
        assert_eq!(state.notice(), Some("O'chirishda xatolik"));
        assert_eq!(api.fetch_calls.load(Ordering::SeqCst), 1);

        state.dismiss_notice();
        assert!(state.notice().is_none());
    }

    fn transactions(count: usize) -> StatsSnapshot {
        let date = "2024-03-05T09:07:00Z".parse().unwrap();
        StatsSnapshot {
            recent_transactions: (0..count)
                .map(|i| api_types::stats::Transaction {
                    description: format!("tx{i}"),
                    amount: 1_000,
                    kind: api_types::stats::TransactionKind::Expense,
                    category: None,
                    date,
                })
                .collect(),
            ..StatsSnapshot::default()
        }
    }

    #[test]
    fn history_selection_stays_within_rows() {
        let mut state = ViewState::new();
        let ticket = state.begin_fetch();
        state.apply_fetch(ticket, Ok(transactions(3)));

        state.select_previous_row();
        assert_eq!(state.history_selected(), 0);
        for _ in 0..5 {
            state.select_next_row();
        }
        assert_eq!(state.history_selected(), 2);
        state.select_previous_row();
        assert_eq!(state.history_selected(), 1);
    }

    #[tokio::test]
    async fn confirmed_delete_resets_history_selection() {
        let api = FakeApi::default()
            .with_stats(Ok(transactions(4)))
            .with_stats(Ok(StatsSnapshot::default()))
            .with_delete(Ok(()));
        let mut state = ViewState::new();
        state.initialize(&api, 1).await;
        state.select_next_row();
        state.select_next_row();
        state.request_delete();

        state.confirm_delete(&api, 1).await;

        assert_eq!(state.history_selected(), 0);
    }

    #[test]
    fn split_delete_closes_dialog_before_the_request_finishes() {
        let mut state = ViewState::new();
        let ticket = state.begin_fetch();
        state.apply_fetch(ticket, Ok(snapshot(10)));
        state.request_delete();

        assert!(state.begin_delete());
        assert!(!state.delete_confirmation_open());
        assert!(state.is_deleting());
        assert!(!state.begin_delete());

        state.request_delete();
        assert!(!state.delete_confirmation_open());

        assert!(state.finish_delete(Ok(())));
        assert!(!state.is_deleting());
        assert!(state.is_loading());
    }

    #[test]
    fn delete_finishing_after_teardown_is_ignored() {
        let mut state = ViewState::new();
        let ticket = state.begin_fetch();
        state.apply_fetch(ticket, Ok(snapshot(10)));
        state.request_delete();
        assert!(state.begin_delete());
        state.teardown();

        assert!(!state.finish_delete(Ok(())));
        assert_eq!(state.snapshot().and_then(|s| s.balance), Some(10));
    }

    #[test]
    fn ticket_from_before_reset_stays_stale() {
        let mut state = ViewState::new();
        let old = state.begin_fetch();
        state.reset();
        let _fresh = state.begin_fetch();

        assert!(!state.apply_fetch(old, Ok(snapshot(1))));
    }
}
