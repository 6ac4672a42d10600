//! One-shot dashboard load: fetch, format, publish.

use gofin_core::{
    BalanceFormatter, FormattedBalance, FormattedTransaction, TransactionFormatter, ValueFormatter,
};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::api::TransactionsApi;
use crate::error::FetchError;

/// What the dashboard view renders. Transactions and balance only ever
/// change together, inside `Ready`.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    /// Nothing fetched yet, or a fetch is in flight
    Loading,
    Ready(DashboardData),
    Failed(FetchError),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardData {
    pub transactions: Vec<FormattedTransaction>,
    pub balance: FormattedBalance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Idle,
    Done,
    Failed,
}

/// Owns the dashboard's observable state and loads it once per mount.
pub struct DashboardLoader<A> {
    api: A,
    formatter: ValueFormatter,
    state: LoadState,
    view: watch::Sender<DashboardView>,
}

impl<A: TransactionsApi> DashboardLoader<A> {
    pub fn new(api: A, formatter: ValueFormatter) -> Self {
        let (view, _) = watch::channel(DashboardView::Loading);
        Self {
            api,
            formatter,
            state: LoadState::Idle,
            view,
        }
    }

    /// A receiver that observes every published view.
    pub fn subscribe(&self) -> watch::Receiver<DashboardView> {
        self.view.subscribe()
    }

    /// Snapshot of the current view.
    pub fn view(&self) -> DashboardView {
        self.view.borrow().clone()
    }

    /// Lifecycle hook for "dashboard became visible". Only the first call
    /// reaches the network; later calls are no-ops.
    pub async fn activate(&mut self) -> DashboardView {
        if self.state != LoadState::Idle {
            debug!("dashboard already activated; skipping fetch");
            return self.view();
        }
        self.load().await
    }

    /// Fetch again after a failure. Does nothing once a load has succeeded.
    pub async fn retry(&mut self) -> DashboardView {
        if self.state != LoadState::Failed {
            return self.view();
        }
        self.view.send_replace(DashboardView::Loading);
        self.load().await
    }

    async fn load(&mut self) -> DashboardView {
        let next = match self.api.list_transactions().await {
            Ok(resp) => {
                let transactions = TransactionFormatter::format(&self.formatter, resp.transactions);
                let balance = BalanceFormatter::format(&self.formatter, &resp.balance);
                debug!(count = transactions.len(), "dashboard loaded");
                self.state = LoadState::Done;
                DashboardView::Ready(DashboardData {
                    transactions,
                    balance,
                })
            }
            Err(e) => {
                let err = FetchError::from(e);
                warn!(error = %err, "dashboard load failed");
                self.state = LoadState::Failed;
                DashboardView::Failed(err)
            }
        };

        // One send carries both transactions and balance.
        self.view.send_replace(next.clone());
        next
    }
}
