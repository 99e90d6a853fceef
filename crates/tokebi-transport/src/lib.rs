//! # tokebi-transport
//!
//! HTTP transport for the analytics service and the JSON bodies it speaks.

pub mod http_client;
pub mod protocol;

pub use http_client::{HttpTransport, HttpTransportConfig};
pub use protocol::{RegistrationRequest, RegistrationResponse};
