//! The form model behind the history screen and the request it produces.

use crate::network::Network;
use serde::Deserialize;
use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;

/// Number of transactions requested until the user changes it.
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest accepted limit. Larger inputs are ignored.
pub const MAX_LIMIT: u32 = 9999;

/// Body of `POST /wallet-history/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRequest {
    pub limit: u32,
    pub wallet_address: String,
    pub network: Network,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("wallet address is required")]
    MissingAddress,
}

/// Current contents of the history form.
///
/// Invariant: `limit` is always in `1..=MAX_LIMIT`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryForm {
    wallet_address: String,
    network: Network,
    limit: u32,
}

impl Default for HistoryForm {
    fn default() -> Self {
        Self {
            wallet_address: String::new(),
            network: Network::default(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl HistoryForm {
    pub fn wallet_address(&self) -> &str {
        &self.wallet_address
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Stores the address as typed. No format checks happen client-side.
    pub fn set_wallet_address(&mut self, address: impl Into<String>) {
        self.wallet_address = address.into();
    }

    pub fn set_network(&mut self, network: Network) {
        self.network = network;
    }

    /// Applies a selector value. Unknown identifiers are ignored.
    pub fn set_network_input(&mut self, input: &str) -> bool {
        match Network::from_str(input) {
            Ok(network) => {
                self.network = network;
                true
            }
            Err(_) => false,
        }
    }

    /// Applies raw text from the limit field.
    ///
    /// Returns `false` and leaves the limit untouched unless `input` is an
    /// integer in `1..=MAX_LIMIT`.
    pub fn set_limit_input(&mut self, input: &str) -> bool {
        match input.trim().parse::<u32>() {
            Ok(limit) => self.set_limit(limit),
            Err(_) => false,
        }
    }

    /// True when `input` is a whole number above [`MAX_LIMIT`], including
    /// numbers too large to parse.
    pub fn exceeds_max_limit(input: &str) -> bool {
        let digits = input.trim();
        !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && digits
                .parse::<u64>()
                .map_or(true, |limit| limit > u64::from(MAX_LIMIT))
    }

    pub fn set_limit(&mut self, limit: u32) -> bool {
        if limit == 0 || limit > MAX_LIMIT {
            return false;
        }
        self.limit = limit;
        true
    }

    /// Snapshot of the form as a request body.
    pub fn to_request(&self) -> Result<HistoryRequest, FormError> {
        if self.wallet_address.trim().is_empty() {
            return Err(FormError::MissingAddress);
        }
        Ok(HistoryRequest {
            limit: self.limit,
            wallet_address: self.wallet_address.clone(),
            network: self.network,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults() {
        let form = HistoryForm::default();
        assert_eq!(form.limit(), DEFAULT_LIMIT);
        assert_eq!(form.network(), Network::default());
        assert_eq!(form.wallet_address(), "");
    }

    #[test]
    fn limit_within_bounds_is_stored() {
        let mut form = HistoryForm::default();
        for input in ["1", "25", "9998", "9999"] {
            assert!(form.set_limit_input(input));
            assert_eq!(form.limit().to_string(), input);
        }
    }

    #[test]
    fn limit_above_max_is_ignored() {
        let mut form = HistoryForm::default();
        assert!(form.set_limit_input("50"));
        assert!(!form.set_limit_input("10000"));
        assert!(!form.set_limit_input("123456"));
        assert_eq!(form.limit(), 50);
    }

    #[test]
    fn non_positive_or_garbage_limit_is_ignored() {
        let mut form = HistoryForm::default();
        for input in ["", "0", "-5", "abc", "1.5"] {
            assert!(!form.set_limit_input(input), "accepted {input:?}");
        }
        assert_eq!(form.limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn detects_limits_above_max() {
        assert!(HistoryForm::exceeds_max_limit("10000"));
        assert!(HistoryForm::exceeds_max_limit(" 99999999999999999999999 "));
        for input in ["", "0", "9999", "-5", "abc", "1.5"] {
            assert!(!HistoryForm::exceeds_max_limit(input), "flagged {input:?}");
        }
    }

    #[test]
    fn unknown_network_is_ignored() {
        let mut form = HistoryForm::default();
        assert!(form.set_network_input("polygon-mainnet"));
        assert!(!form.set_network_input("dogecoin"));
        assert_eq!(form.network(), Network::PolygonMainnet);
    }

    #[test]
    fn request_mirrors_form_state() {
        let mut form = HistoryForm::default();
        form.set_wallet_address("0xsOmEAdDrEsS");
        form.set_network(Network::EthereumMainnet);
        form.set_limit(42);

        let request = form.to_request().unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "limit": 42,
                "walletAddress": "0xsOmEAdDrEsS",
                "network": "ethereum-mainnet"
            })
        );
    }

    #[test]
    fn blank_address_cannot_be_submitted() {
        let mut form = HistoryForm::default();
        assert_eq!(form.to_request(), Err(FormError::MissingAddress));
        form.set_wallet_address("   ");
        assert_eq!(form.to_request(), Err(FormError::MissingAddress));
    }
}
