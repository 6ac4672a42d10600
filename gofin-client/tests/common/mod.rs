//! In-memory stand-ins for the backend and the router.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use gofin_client::{ApiError, ImportPayload, Navigator, TransactionsApi, TransactionsResponse};
use gofin_core::{Balance, Category, Transaction, TransactionType};

#[derive(Default)]
struct Inner {
    list_results: VecDeque<Result<TransactionsResponse, ApiError>>,
    import_results: VecDeque<Result<(), ApiError>>,
    list_calls: usize,
    imports: Vec<ImportPayload>,
}

/// Replays queued results and records every call.
#[derive(Clone, Default)]
pub struct FakeApi {
    inner: Arc<Mutex<Inner>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(&self, result: Result<TransactionsResponse, ApiError>) {
        self.inner.lock().unwrap().list_results.push_back(result);
    }

    pub fn push_import(&self, result: Result<(), ApiError>) {
        self.inner.lock().unwrap().import_results.push_back(result);
    }

    pub fn list_calls(&self) -> usize {
        self.inner.lock().unwrap().list_calls
    }

    pub fn imports(&self) -> Vec<ImportPayload> {
        self.inner.lock().unwrap().imports.clone()
    }
}

impl TransactionsApi for FakeApi {
    async fn list_transactions(&self) -> Result<TransactionsResponse, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.list_calls += 1;
        inner
            .list_results
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no response queued".to_string())))
    }

    async fn import_transactions(&self, payload: ImportPayload) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.imports.push(payload);
        inner.import_results.pop_front().unwrap_or(Ok(()))
    }
}

#[derive(Debug, Default)]
pub struct CountingNavigator {
    pub visits: usize,
}

impl Navigator for CountingNavigator {
    fn to_dashboard(&mut self) {
        self.visits += 1;
    }
}

pub fn transaction(id: &str, value: f64, kind: TransactionType, day: u32) -> Transaction {
    Transaction {
        id: id.to_string(),
        title: format!("Transaction {id}"),
        value,
        kind,
        category: Category {
            title: "Others".to_string(),
        },
        created_at: Utc.with_ymd_and_hms(2020, 1, day, 10, 30, 0).unwrap(),
    }
}

pub fn sample_response() -> TransactionsResponse {
    TransactionsResponse {
        transactions: vec![
            transaction("1", 500.0, TransactionType::Income, 2),
            transaction("2", 50.0, TransactionType::Outcome, 5),
            transaction("3", 150.0, TransactionType::Outcome, 3),
        ],
        balance: Balance {
            income: 500.0,
            outcome: 200.0,
            total: 300.0,
        },
    }
}
