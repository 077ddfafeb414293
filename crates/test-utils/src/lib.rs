//! Test utilities for gnfd crates.
//!
//! [`StubChainClient`] answers [`ChainClient`] calls from canned data and
//! records every call it receives, so tests can assert on which network steps
//! an operation reached.

use std::collections::HashSet;

use alloy_primitives::Address;
use async_trait::async_trait;
use gnfd_chain::{ChainClient, ChainError, ChainResult};
use gnfd_primitives::{BucketName, QuotaLedgerSnapshot, StoragePrice, TxHash, TxOptions};
use parking_lot::Mutex;

/// A call received by [`StubChainClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainCall {
    HeadBucket(BucketName),
    StoragePrice(Address),
    BuyQuota {
        bucket: BucketName,
        target_quota: u64,
        options: TxOptions,
    },
    ReadQuota(BucketName),
}

/// How the stub answers a quota purchase.
#[derive(Debug, Clone)]
enum Submission {
    Accept(TxHash),
    Reject {
        code: u32,
        log: String,
        tx_hash: Option<String>,
    },
    Undecodable(String),
}

/// In-memory [`ChainClient`] with call recording.
#[derive(Debug)]
pub struct StubChainClient {
    buckets: HashSet<String>,
    price: Option<StoragePrice>,
    ledger: Option<QuotaLedgerSnapshot>,
    submission: Submission,
    calls: Mutex<Vec<ChainCall>>,
}

impl Default for StubChainClient {
    fn default() -> Self {
        Self {
            buckets: HashSet::new(),
            price: None,
            ledger: None,
            submission: Submission::Accept(TxHash::new("0x0")),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl StubChainClient {
    /// Stub with no buckets, no price, no ledger, accepting submissions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `name` as an existing bucket.
    pub fn with_bucket(mut self, name: &str) -> Self {
        self.buckets.insert(name.to_string());
        self
    }

    /// Quote the given raw decimal prices for any provider.
    pub fn with_price(mut self, read_price: &str, store_price: &str) -> Self {
        self.price = Some(StoragePrice {
            read_price: read_price.to_string(),
            store_price: store_price.to_string(),
        });
        self
    }

    /// Return the given counters for any existing bucket.
    pub fn with_ledger(mut self, charged: u64, free: u64, consumed: u64) -> Self {
        self.ledger = Some(QuotaLedgerSnapshot {
            charged_quota_size: charged,
            provider_free_quota_size: free,
            consumed_quota_size: consumed,
        });
        self
    }

    /// Accept submissions with the given transaction hash.
    pub fn accepting(mut self, tx_hash: &str) -> Self {
        self.submission = Submission::Accept(TxHash::new(tx_hash));
        self
    }

    /// Reject submissions with the given code and log.
    pub fn rejecting(mut self, code: u32, log: &str) -> Self {
        self.submission = Submission::Reject {
            code,
            log: log.to_string(),
            tx_hash: None,
        };
        self
    }

    /// Reject submissions after inclusion, reporting the failed transaction's hash.
    pub fn rejecting_included(mut self, code: u32, log: &str, tx_hash: &str) -> Self {
        self.submission = Submission::Reject {
            code,
            log: log.to_string(),
            tx_hash: Some(tx_hash.to_string()),
        };
        self
    }

    /// Fail submissions as if the broadcast answer could not be read.
    pub fn undecodable_submission(mut self, reason: &str) -> Self {
        self.submission = Submission::Undecodable(reason.to_string());
        self
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<ChainCall> {
        self.calls.lock().clone()
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Only the purchase submissions received so far.
    pub fn submissions(&self) -> Vec<ChainCall> {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, ChainCall::BuyQuota { .. }))
            .cloned()
            .collect()
    }

    fn record(&self, call: ChainCall) {
        self.calls.lock().push(call);
    }

    fn not_found(what: &str) -> ChainError {
        ChainError::Api {
            endpoint: format!("stub/{what}"),
            status: 404,
            message: format!("{what} not configured"),
        }
    }
}

#[async_trait]
impl ChainClient for StubChainClient {
    async fn head_bucket(&self, bucket: &BucketName) -> ChainResult<bool> {
        self.record(ChainCall::HeadBucket(bucket.clone()));
        Ok(self.buckets.contains(bucket.as_str()))
    }

    async fn storage_price(&self, sp_address: &Address) -> ChainResult<StoragePrice> {
        self.record(ChainCall::StoragePrice(*sp_address));
        self.price.clone().ok_or_else(|| Self::not_found("price"))
    }

    async fn buy_quota_for_bucket(
        &self,
        bucket: &BucketName,
        target_quota: u64,
        options: &TxOptions,
    ) -> ChainResult<TxHash> {
        self.record(ChainCall::BuyQuota {
            bucket: bucket.clone(),
            target_quota,
            options: *options,
        });
        match &self.submission {
            Submission::Accept(hash) => Ok(hash.clone()),
            Submission::Reject { code, log, tx_hash } => Err(ChainError::TxRejected {
                code: *code,
                log: log.clone(),
                tx_hash: tx_hash.clone(),
            }),
            Submission::Undecodable(reason) => Err(ChainError::Decode {
                endpoint: "stub/broadcast".to_string(),
                reason: reason.clone(),
            }),
        }
    }

    async fn bucket_read_quota(&self, bucket: &BucketName) -> ChainResult<QuotaLedgerSnapshot> {
        self.record(ChainCall::ReadQuota(bucket.clone()));
        self.ledger.ok_or_else(|| Self::not_found("ledger"))
    }
}
