//! Balance query orchestration.
//!
//! A query is two steps: one call for the address's balance list, then one
//! metadata call per token. Metadata calls run concurrently, at most
//! `concurrency` at a time, and are put back in balance order by index so
//! `metadata[i]` always describes `balances[i]`. The first failure aborts the
//! remaining calls.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::client::TokenDataApi;
use crate::domain::{IndexerError, QueryResult, TokenBalance, TokenMetadata};

/// Fetches balances and metadata for `address`.
///
/// # Errors
///
/// Returns the first error from either step.
pub async fn fetch_holdings(
    api: Arc<dyn TokenDataApi>,
    address: String,
    concurrency: usize,
) -> Result<QueryResult, IndexerError> {
    let balances = api.get_token_balances(&address).await?;
    tracing::info!("{} token balances for {address}", balances.len());

    let metadata = fetch_metadata(api, &balances, concurrency).await?;
    QueryResult::new(address, balances, metadata)
}

/// Fetches metadata for every balance, preserving input order.
///
/// # Errors
///
/// Returns the first metadata error; in-flight calls are aborted.
pub async fn fetch_metadata(
    api: Arc<dyn TokenDataApi>,
    balances: &[TokenBalance],
    concurrency: usize,
) -> Result<Vec<TokenMetadata>, IndexerError> {
    let limit = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut tasks = JoinSet::new();

    for (index, balance) in balances.iter().enumerate() {
        let api = Arc::clone(&api);
        let limit = Arc::clone(&limit);
        let contract = balance.contract_address.clone();

        tasks.spawn(async move {
            let _permit = limit
                .acquire_owned()
                .await
                .map_err(|e| IndexerError::Task(e.to_string()))?;
            let metadata = api.get_token_metadata(&contract).await?;
            Ok::<_, IndexerError>((index, metadata))
        });
    }

    let mut slots: Vec<Option<TokenMetadata>> = vec![None; balances.len()];
    while let Some(joined) = tasks.join_next().await {
        let (index, metadata) = joined.map_err(|e| IndexerError::Task(e.to_string()))??;
        slots[index] = Some(metadata);
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.ok_or_else(|| IndexerError::Task(format!("no metadata for token #{index}")))
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
