//! Defines the blockchain networks the history backend can be queried for.

use serde::Deserialize;
use serde::Serialize;

/// A network identifier offered in the selector.
///
/// The identifiers are sent to the backend verbatim (kebab-case), and the
/// declaration order is the order shown to the user. The first entry is the
/// default selection.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Network {
    #[default]
    BaseMainnet,
    BaseSepolia,
    EthereumMainnet,
    EthereumHolesky,
    PolygonMainnet,
    ArbitrumMainnet,
}

impl Network {
    /// Returns the wire identifier (e.g. "base-mainnet").
    pub fn id(&self) -> &'static str {
        self.into()
    }

    /// All networks, in selector order.
    pub fn all() -> impl Iterator<Item = Network> {
        <Self as strum::IntoEnumIterator>::iter()
    }
}
