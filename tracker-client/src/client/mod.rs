mod client;
mod http_trait;
mod request;
pub mod structs;
#[cfg(feature = "reqwest-client")]
mod reqwest_impl;
#[cfg(feature = "ureq-client")]
mod ureq_impl;

pub use client::TrackerClient;
pub use http_trait::HttpClient;
pub use request::{Headers, Method, Request, RequestOptions};

#[cfg(feature = "reqwest-client")]
pub use reqwest_impl::ReqwestClient;
#[cfg(feature = "ureq-client")]
pub use ureq_impl::UreqClient;
