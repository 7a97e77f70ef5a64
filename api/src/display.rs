//! Display transforms for the history table.
//!
//! These only affect what is rendered. Copy actions and links always work
//! with the untouched values kept alongside.

use crate::history::HistoryItem;
use crate::token_amount::TokenAmount;

/// Characters kept on each side of a truncated value.
pub const TRUNCATE_EDGE: usize = 7;

/// Shown in a cell whose value cannot be derived.
pub const PLACEHOLDER: &str = "—";

/// Shown instead of a table when the backend returns no records.
pub const NO_DATA: &str = "No data found.";

/// Abbreviates `value` to its first and last [`TRUNCATE_EDGE`] characters.
///
/// Values short enough to be shown whole are returned unchanged.
pub fn truncate_middle(value: &str) -> String {
    let len = value.chars().count();
    if len <= TRUNCATE_EDGE * 2 {
        return value.to_string();
    }

    let head: String = value.chars().take(TRUNCATE_EDGE).collect();
    let tail: String = value.chars().skip(len - TRUNCATE_EDGE).collect();
    format!("{head}...{tail}")
}

/// The label above a non-empty result table.
pub fn count_label(count: usize) -> String {
    format!("Found {count} transactions.")
}

/// One table row, derived from a [`HistoryItem`].
///
/// Address and hash fields hold full values; the view truncates them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRow {
    /// 1-based position in the response.
    pub position: usize,
    pub transaction_hash: String,
    pub transaction_link: String,
    pub from_address: String,
    pub to_address: String,
    pub network: String,
    pub amount: String,
    pub transfer_type: String,
    pub block_hash: String,
    pub block_height: String,
    pub block_timestamp: String,
}

impl HistoryRow {
    /// Derives the row for the record at zero-based `index`.
    ///
    /// Amount and transfer type come from the first token transfer. Records
    /// without one, or with a value that is not an integer, get
    /// [`PLACEHOLDER`] in those cells.
    pub fn new(index: usize, item: &HistoryItem) -> Self {
        let model = &item.model;
        let transfer = item.first_transfer();

        let amount = transfer
            .and_then(|t| t.value.parse::<TokenAmount>().ok())
            .map(|amount| amount.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        let transfer_type = transfer
            .map(|t| t.token_transfer_type.as_str())
            .filter(|t| !t.is_empty())
            .unwrap_or(PLACEHOLDER)
            .to_string();

        Self {
            position: index + 1,
            transaction_hash: model.transaction_hash.clone(),
            transaction_link: model.transaction_link.clone(),
            from_address: model.from_address_id.clone(),
            to_address: model.to_address_id.clone(),
            network: model.network_id.clone(),
            amount,
            transfer_type,
            block_hash: model.block_hash.clone(),
            block_height: model.block_height.clone(),
            block_timestamp: model.content.block_timestamp.clone(),
        }
    }

    /// Rows for a whole response, in response order.
    pub fn from_items(items: &[HistoryItem]) -> Vec<Self> {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| Self::new(i, item))
            .collect()
    }
}
