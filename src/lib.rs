//! # pascal-rs: PascalCoin JSON-RPC client
//!
//! Talks to PascalCoin nodes over their JSON-RPC interface.
//!
//! The library is organized into three crates, re-exported here:
//!
//! - [`primitives`] - validated value types (account numbers with checksum,
//!   hex strings, currency amounts, curves, operation types)
//! - [`config`] - node endpoints and client settings loaded from TOML
//! - [`rpc`] - request dispatch, the raw method catalog and the typed rich API
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pascal_rs::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::with_endpoints(vec![EndPoint::with_host("127.0.0.1")?]);
//!     let client = PascalClient::new(&config)?;
//!
//!     let rich = client.rich_api(&[]);
//!     let account = rich.account().find(AccountNumber::new(77)).await?;
//!     println!("{} holds {}", account.number, account.balance);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use pascal_config as config;
pub use pascal_primitives as primitives;
pub use pascal_rpc as rpc;

/// Common imports for PascalCoin clients
pub mod prelude {
    pub use crate::config::{ClientConfig, EndPoint, Scheme};
    pub use crate::primitives::{
        AccountNumber, BlockNumber, EncodedPublicKey, HexaString, PascalCurrency,
    };
    pub use crate::rpc::{
        Account, Block, KeyArgs, Operation, OperationOptions, PascalClient, PublicKey, RawApi,
        RichApi, RpcError, RpcResult,
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
