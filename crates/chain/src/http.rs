//! HTTP implementation of [`ChainClient`].
//!
//! Chain queries go to the chain's REST endpoint, transactions to its
//! broadcast route, and read quota queries to the configured storage
//! provider. The client never retries: a failed request surfaces as a
//! [`ChainError`] and the caller decides what to do.

use alloy_primitives::Address;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use chrono::Utc;
use gnfd_primitives::{BucketName, QuotaLedgerSnapshot, StoragePrice, TxHash, TxOptions};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, info};

use crate::{
    BroadcastRequest, ChainClient, ChainConfig, ChainError, ChainResult, MsgUpdateBucketInfo,
    constants::USER_AGENT,
    msg::{read_quota_string_to_sign, sp_authorization},
};

/// gRPC status code the chain gateway uses for "not found".
const GRPC_NOT_FOUND: i64 = 5;

/// Chain client speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpChainClient {
    client: reqwest::Client,
    rpc_addr: String,
    sp_endpoint: Option<String>,
    chain_id: String,
    signer: Option<PrivateKeySigner>,
}

impl HttpChainClient {
    /// Build a client from configuration and the account's signing key.
    pub fn new(config: &ChainConfig, signer: PrivateKeySigner) -> ChainResult<Self> {
        Self::build(config, Some(signer))
    }

    /// Build a client for unsigned queries only.
    ///
    /// Calls that need a signature fail with [`ChainError::Config`].
    pub fn unsigned(config: &ChainConfig) -> ChainResult<Self> {
        Self::build(config, None)
    }

    fn build(config: &ChainConfig, signer: Option<PrivateKeySigner>) -> ChainResult<Self> {
        if config.timeout_secs == 0 {
            return Err(ChainError::Config("timeout must be at least one second".into()));
        }
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ChainError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            rpc_addr: config.rpc_addr.trim_end_matches('/').to_string(),
            sp_endpoint: config
                .sp_endpoint
                .as_deref()
                .map(|endpoint| endpoint.trim_end_matches('/').to_string()),
            chain_id: config.chain_id.clone(),
            signer,
        })
    }

    /// Address of the signing account, if the client has one.
    pub fn address(&self) -> Option<Address> {
        self.signer.as_ref().map(|signer| signer.address())
    }

    fn signer(&self) -> ChainResult<&PrivateKeySigner> {
        self.signer
            .as_ref()
            .ok_or_else(|| ChainError::Config("no account key configured for signing".into()))
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> ChainResult<reqwest::Response> {
        debug!(endpoint, "sending request");
        request.send().await.map_err(|source| ChainError::Http {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        endpoint: &str,
    ) -> ChainResult<T> {
        response.json().await.map_err(|e| ChainError::Decode {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })
    }

    async fn api_error(response: reqwest::Response, endpoint: &str) -> ChainError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|err| err.message)
            .unwrap_or(body);
        ChainError::Api {
            endpoint: endpoint.to_string(),
            status,
            message,
        }
    }

    fn sp_endpoint(&self) -> ChainResult<&str> {
        self.sp_endpoint.as_deref().ok_or_else(|| {
            ChainError::Config("no storage provider endpoint configured (--sp-endpoint)".into())
        })
    }
}

#[async_trait]
impl ChainClient for HttpChainClient {
    async fn head_bucket(&self, bucket: &BucketName) -> ChainResult<bool> {
        let endpoint = format!("{}/greenfield/storage/head_bucket/{bucket}", self.rpc_addr);
        let response = self.send(self.client.get(&endpoint), &endpoint).await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(false);
        }

        if status.is_success() {
            let head: HeadBucketResponse = Self::decode(response, &endpoint).await?;
            return Ok(head.bucket_info.is_some());
        }

        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(err) if err.is_not_found() => Ok(false),
            Ok(err) => Err(ChainError::Api {
                endpoint,
                status: status.as_u16(),
                message: err.message,
            }),
            Err(_) => Err(ChainError::Api {
                endpoint,
                status: status.as_u16(),
                message: body,
            }),
        }
    }

    async fn storage_price(&self, sp_address: &Address) -> ChainResult<StoragePrice> {
        let endpoint = format!(
            "{}/greenfield/sp/get_sp_storage_price_by_time/{sp_address}/0",
            self.rpc_addr
        );
        let response = self.send(self.client.get(&endpoint), &endpoint).await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response, &endpoint).await);
        }

        let price: StoragePriceResponse = Self::decode(response, &endpoint).await?;
        Ok(StoragePrice {
            read_price: price.sp_storage_price.read_price,
            store_price: price.sp_storage_price.store_price,
        })
    }

    async fn buy_quota_for_bucket(
        &self,
        bucket: &BucketName,
        target_quota: u64,
        options: &TxOptions,
    ) -> ChainResult<TxHash> {
        let signer = self.signer()?;
        let endpoint = format!("{}/greenfield/tx/broadcast", self.rpc_addr);
        let msg = MsgUpdateBucketInfo::charged_read_quota(signer.address(), bucket, target_quota);
        let request = BroadcastRequest::sign(signer, &self.chain_id, msg, options.commitment)?;

        let response = self
            .send(self.client.post(&endpoint).json(&request), &endpoint)
            .await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response, &endpoint).await);
        }

        let broadcast: BroadcastResponse = Self::decode(response, &endpoint).await?;
        let tx = broadcast.tx_response;
        if tx.code != 0 {
            return Err(ChainError::TxRejected {
                code: tx.code,
                log: tx.raw_log,
                tx_hash: (!tx.txhash.is_empty()).then_some(tx.txhash),
            });
        }

        info!(
            %bucket,
            target_quota,
            tx_hash = %tx.txhash,
            mode = %options.commitment,
            "quota update accepted"
        );
        Ok(TxHash::new(tx.txhash))
    }

    async fn bucket_read_quota(&self, bucket: &BucketName) -> ChainResult<QuotaLedgerSnapshot> {
        let sp_endpoint = self.sp_endpoint()?;
        let signer = self.signer()?;
        let year_month = Utc::now().format("%Y-%m").to_string();
        let endpoint = format!("{sp_endpoint}/{bucket}?read-quota&year-month={year_month}");
        let authorization =
            sp_authorization(signer, &read_quota_string_to_sign(bucket, &year_month))?;

        let response = self
            .send(
                self.client
                    .get(&endpoint)
                    .header(reqwest::header::AUTHORIZATION, authorization),
                &endpoint,
            )
            .await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response, &endpoint).await);
        }

        let quota: ReadQuotaResponse = Self::decode(response, &endpoint).await?;
        Ok(QuotaLedgerSnapshot {
            charged_quota_size: quota.read_quota_size.0,
            provider_free_quota_size: quota.sp_free_read_quota_size.0,
            consumed_quota_size: quota.read_consumed_size.0,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

impl ErrorBody {
    fn is_not_found(&self) -> bool {
        self.code == GRPC_NOT_FOUND || self.message.contains("No such bucket")
    }
}

#[derive(Debug, Deserialize)]
struct HeadBucketResponse {
    #[serde(default)]
    bucket_info: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct StoragePriceResponse {
    sp_storage_price: SpStoragePrice,
}

#[derive(Debug, Deserialize)]
struct SpStoragePrice {
    read_price: String,
    store_price: String,
}

#[derive(Debug, Deserialize)]
struct BroadcastResponse {
    tx_response: TxResponse,
}

#[derive(Debug, Deserialize)]
struct TxResponse {
    #[serde(default)]
    txhash: String,
    #[serde(default)]
    code: u32,
    #[serde(default)]
    raw_log: String,
}

#[derive(Debug, Deserialize)]
struct ReadQuotaResponse {
    read_quota_size: Bytes,
    sp_free_read_quota_size: Bytes,
    read_consumed_size: Bytes,
}

/// Byte count that may arrive as a JSON number or a decimal string.
#[derive(Debug, Clone, Copy)]
struct Bytes(u64);

impl<'de> Deserialize<'de> for Bytes {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Self(n)),
            Raw::Text(s) => s.parse().map(Self).map_err(serde::de::Error::custom),
        }
    }
}
