pub mod connection;
pub mod constants;
pub mod signer;
pub mod transaction;
