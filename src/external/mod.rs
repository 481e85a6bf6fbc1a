pub mod client;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use transport::{ReqwestTransport, Transport, TransportResponse};
