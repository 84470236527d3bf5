//! # Pascal RPC
//!
//! JSON-RPC 2.0 client for PascalCoin nodes.
//!
//! Two layers are exposed:
//!
//! - [`RawApi`]: one async method per node RPC method, returning the node's
//!   JSON result (or a plain scalar where the result is a count or a flag).
//! - [`RichApi`]: typed facades (`node`, `wallet`, `account`, `block`,
//!   `operations`) that map results into entities such as [`Account`] and
//!   [`Block`].
//!
//! [`PascalClient`] is the entry point. It owns the configured endpoints and
//! the transport, and hands out both layers with optional per-call endpoint
//! overrides.
//!
//! ```no_run
//! use pascal_config::{ClientConfig, EndPoint};
//! use pascal_rpc::PascalClient;
//!
//! # async fn demo() -> pascal_rpc::RpcResult<()> {
//! let config = ClientConfig::with_endpoints(vec![EndPoint::with_host("127.0.0.1")?]);
//! let client = PascalClient::new(&config)?;
//! let height = client.rich_api(&[]).block().count().await?;
//! println!("node is at block {height}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod error_code;

pub use client::models::{
    Account, Block, Changer, Connection, JsonObject, ModelError, ModelResult, NetStats, NodeServer,
    Operation, PublicKey, Receiver, RpcRequest, RpcResponse, RpcResponseError, Sender, Status,
};
pub use client::params::{
    AccountAndKey, AccountFilter, KeyArgs, MultiOperationChange, MultiOperationReceiver,
    MultiOperationSender, OfflineSigning, OperationOptions, RpcParams,
};
pub use client::rich::{
    AccountApi, AccountRef, BlockApi, BlockRef, KeyRef, NodeApi, OperationsApi, RichApi,
    WalletApi,
};
pub use client::{
    EndpointSelector, HttpTransport, PascalClient, RawApi, RpcDispatcher, Transport,
    TransportError,
};
pub use error::{RpcError, RpcResult};
pub use error_code::RpcErrorCode;
