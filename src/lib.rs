//! Signing S3-compatible object storage requests for Cloudflare R2.
//!
//! This crate implements [AWS Signature Version 4][sigv4] for S3-compatible
//! stores. It works directly on [`http::request::Parts`], so it fits any
//! HTTP client built on the `http` types.
//!
//! # Example
//!
//! Sign a request by header:
//!
//! ```rust
//! use r2sign::{Credential, RequestSigner};
//!
//! fn main() -> r2sign::Result<()> {
//!     let credential = Credential::new("access_key_id", "secret_access_key");
//!     let signer = RequestSigner::new("s3", "auto");
//!
//!     let req = http::Request::get("https://bucket.account.r2.cloudflarestorage.com/object.txt")
//!         .body(())
//!         .unwrap();
//!     let (mut parts, body) = req.into_parts();
//!
//!     signer.sign(&mut parts, None, &credential)?;
//!
//!     let req = http::Request::from_parts(parts, body);
//!     assert!(req.headers().contains_key("authorization"));
//!     Ok(())
//! }
//! ```
//!
//! Produce a presigned URL valid for one hour:
//!
//! ```rust
//! use std::time::Duration;
//!
//! use r2sign::{Credential, RequestSigner};
//!
//! fn main() -> r2sign::Result<()> {
//!     let credential = Credential::new("access_key_id", "secret_access_key");
//!     let signer = RequestSigner::new("s3", "auto");
//!
//!     let req = http::Request::get("https://bucket.account.r2.cloudflarestorage.com/object.txt")
//!         .body(())
//!         .unwrap();
//!     let (mut parts, _) = req.into_parts();
//!
//!     signer.sign_query(&mut parts, Duration::from_secs(3600), &credential)?;
//!
//!     println!("presigned url: {}", parts.uri);
//!     Ok(())
//! }
//! ```
//!
//! [sigv4]: https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html

#![warn(missing_docs)]

mod constants;

mod credential;
pub use credential::Credential;

mod error;
pub use error::{Error, ErrorKind, Result};

pub mod hash;
pub mod time;

mod request;
pub use request::SigningRequest;

mod signer;
pub use signer::RequestSigner;
