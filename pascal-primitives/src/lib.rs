//! # Pascal Primitives
//!
//! Validated value types for the PascalCoin JSON-RPC client.
//!
//! This crate provides the scalar types that travel through RPC parameters and
//! responses:
//! - `AccountNumber`: account id with its `id-checksum` representation
//! - `BlockNumber`: block height
//! - `HexaString` / `OperationHash`: hex encoded byte strings
//! - `EncodedPublicKey` / `Base58PublicKey`: the two public key encodings
//! - `PascalCurrency`: fixed point amounts stored in molinas
//!
//! Every type validates its input on construction, an invalid instance can not
//! be created.
//!
//! ## Example
//!
//! ```rust
//! use pascal_primitives::{AccountNumber, PascalCurrency};
//!
//! let account = AccountNumber::new(1);
//! assert_eq!(account.to_string(), "1-21");
//! assert_eq!(account, "1-21".parse().unwrap());
//!
//! let amount = PascalCurrency::parse("1,234.5").unwrap();
//! assert_eq!(amount.molinas(), "12345000");
//! assert_eq!(amount.to_pascal(), "1234.5000");
//! ```

pub mod account_number;
pub mod account_state;
pub mod block_number;
pub mod ec_curve;
pub mod error;
pub mod hexa_string;
pub mod operation_type;
pub mod pascal_currency;
pub mod payload_method;
pub mod public_key;

pub use account_number::AccountNumber;
pub use account_state::AccountState;
pub use block_number::BlockNumber;
pub use ec_curve::EcCurve;
pub use error::{PrimitiveError, PrimitiveResult};
pub use hexa_string::{HexaString, OperationHash};
pub use operation_type::OperationType;
pub use pascal_currency::{PascalCurrency, MOLINAS_PER_PASCAL};
pub use payload_method::PayloadMethod;
pub use public_key::{Base58PublicKey, EncodedPublicKey};
