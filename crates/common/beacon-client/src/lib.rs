pub mod error;
pub mod types;

use std::sync::OnceLock;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use crate::{
    error::BeaconClientError,
    types::{BeaconBlockId, BeaconGenesis, BeaconSpecConfig, BlobSidecar, DataResponse},
};

const GENESIS_METHOD: &str = "eth/v1/beacon/genesis";
const SPEC_METHOD: &str = "eth/v1/config/spec";
const SIDECARS_METHOD_PREFIX: &str = "eth/v1/beacon/blob_sidecars";

/// The memoized slot arithmetic inputs. Published as one value so
/// concurrent callers never observe half of a cold-cache fill.
#[derive(Debug, Clone, Copy)]
struct SlotTiming {
    genesis_timestamp: u64,
    seconds_per_slot: u64,
}

/// Client for the subset of the beacon API that L1 data-availability
/// derivation consults: genesis, spec, and blob sidecars.
///
/// Long-lived and safe for concurrent use; the HTTP client is shared across
/// calls. Performs no retries and applies no implicit timeout. Every
/// request races the shared cancellation token, so shutdown aborts
/// in-flight calls.
#[derive(Debug)]
pub struct BeaconBlobFetcher {
    base: String,
    client: Client,
    cancellation: CancellationToken,
    slot_timing: OnceLock<SlotTiming>,
}

impl BeaconBlobFetcher {
    pub fn new(
        beacon_url: Url,
        cancellation: CancellationToken,
    ) -> Result<Self, BeaconClientError> {
        Ok(Self {
            base: beacon_url.as_str().trim_end_matches('/').to_string(),
            client: Client::builder().build()?,
            cancellation,
            slot_timing: OnceLock::new(),
        })
    }

    /// The beacon chain genesis timestamp. Performs HTTP on every call; the
    /// memoized path is [`Self::slot_from_time`].
    pub async fn genesis_timestamp(&self) -> Result<u64, BeaconClientError> {
        let genesis: DataResponse<BeaconGenesis> = self
            .get_json(&format!("{}/{GENESIS_METHOD}", self.base))
            .await?;
        Ok(genesis.data.genesis_time)
    }

    /// The beacon chain spec config, fetched fresh each call.
    pub async fn spec(&self) -> Result<BeaconSpecConfig, BeaconClientError> {
        let spec: DataResponse<BeaconSpecConfig> = self
            .get_json(&format!("{}/{SPEC_METHOD}", self.base))
            .await?;
        if spec.data.seconds_per_slot == 0 {
            return Err(BeaconClientError::Decode(
                "SECONDS_PER_SLOT must be non-zero".to_string(),
            ));
        }
        Ok(spec.data)
    }

    /// The slot whose interval contains `timestamp`. The first call fetches
    /// and publishes the genesis timestamp and slot interval; subsequent
    /// calls only do arithmetic.
    pub async fn slot_from_time(&self, timestamp: u64) -> Result<u64, BeaconClientError> {
        let timing = self.slot_timing().await?;
        let elapsed = timestamp.checked_sub(timing.genesis_timestamp).ok_or(
            BeaconClientError::SlotBeforeGenesis {
                timestamp,
                genesis_time: timing.genesis_timestamp,
            },
        )?;
        Ok(elapsed / timing.seconds_per_slot)
    }

    /// The sidecars of the block identified by `block_id`, filtered to
    /// `indices` when non-empty. An empty `indices` fetches every sidecar of
    /// the slot.
    pub async fn blob_sidecars(
        &self,
        block_id: &BeaconBlockId,
        indices: &[u64],
    ) -> Result<Vec<BlobSidecar>, BeaconClientError> {
        let mut url = format!("{}/{SIDECARS_METHOD_PREFIX}/{block_id}", self.base);
        if !indices.is_empty() {
            let joined = indices
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(",");
            url = format!("{url}?indices={joined}");
        }
        let sidecars: DataResponse<Vec<BlobSidecar>> = self.get_json(&url).await?;
        Ok(sidecars.data)
    }

    async fn slot_timing(&self) -> Result<&SlotTiming, BeaconClientError> {
        if let Some(timing) = self.slot_timing.get() {
            return Ok(timing);
        }
        // Cold cache: concurrent callers may fetch redundantly; the values
        // are identical and the first publication wins.
        let genesis_timestamp = self.genesis_timestamp().await?;
        let spec = self.spec().await?;
        Ok(self.slot_timing.get_or_init(|| SlotTiming {
            genesis_timestamp,
            seconds_per_slot: spec.seconds_per_slot,
        }))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, BeaconClientError> {
        debug!(%url, "beacon api request");
        let request = async {
            let response = self.client.get(url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(BeaconClientError::HttpStatus { status });
            }
            let body = response.bytes().await?;
            serde_json::from_slice(&body).map_err(|err| BeaconClientError::Decode(err.to_string()))
        };
        tokio::select! {
            _ = self.cancellation.cancelled() => Err(BeaconClientError::Cancelled),
            result = request => result,
        }
    }
}
