//! Wire types for the `/wallet-history/` response.
//!
//! Decoding is lenient: any field the backend leaves out or sends as `null`
//! takes its default value, so a sparse record still renders instead of
//! failing the whole response.

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde_json::Value;

/// Reads `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One transaction entry in the history response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub model: HistoryModel,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryModel {
    #[serde(deserialize_with = "null_as_default")]
    pub block_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub block_height: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: TransactionContent,
    #[serde(deserialize_with = "null_as_default")]
    pub from_address_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub network_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub to_address_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub transaction_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub transaction_link: String,
    pub unsigned_payload: Option<String>,
}

/// Chain-level details of a transaction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionContent {
    #[serde(deserialize_with = "null_as_default")]
    pub block_timestamp: String,
    pub flattened_traces: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub from: String,
    #[serde(deserialize_with = "null_as_default")]
    pub gas: u64,
    pub gas_price: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub index: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub input: String,
    pub max_fee_per_gas: Option<u64>,
    pub max_priority_fee_per_gas: Option<u64>,
    pub mint: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub nonce: u64,
    pub priority_fee_per_gas: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub to: String,
    #[serde(deserialize_with = "null_as_default")]
    pub token_transfers: Vec<TokenTransfer>,
    pub transaction_access_list: Value,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub tx_type: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

/// A value movement of a specific token inside a transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenTransfer {
    #[serde(deserialize_with = "null_as_default")]
    pub contract_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub from_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub log_index: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub to_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub token_transfer_type: String,
    /// Amount in the token's base units, as a decimal integer string.
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

impl HistoryItem {
    /// The transfer used for display. Only the first one is ever shown.
    pub fn first_transfer(&self) -> Option<&TokenTransfer> {
        self.model.content.token_transfers.first()
    }
}
