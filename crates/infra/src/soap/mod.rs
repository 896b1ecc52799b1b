//! SOAP transport over HTTP

pub mod transport;

pub use transport::HttpSoapTransport;
