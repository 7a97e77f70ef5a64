pub mod use_wallet_history;
