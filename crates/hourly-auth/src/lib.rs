//! # hourly-auth
//!
//! Session credentials for the Hourly front-end.
//!
//! This crate provides:
//! - [`TokenStore`]: the single owner of the bearer credential, with a
//!   session (in-memory) and a durable (file) variant
//! - [`token`]: unverified decoding of the credential's payload segment
//! - [`IdentityResolver`]: credential → claims → upstream user → [`UserIdentity`]
//! - [`ApiClient`] and [`DemoDirectory`]: the two backends behind
//!   [`UserLookup`] and [`LoginProvider`]
//! - [`session`]: the login/logout flows that write to the store
//!
//! ## Trust model
//!
//! Token signatures are **not** verified. The resolver trusts any payload
//! whose subject the backend accepts when presented with the same bearer
//! credential; the backend is the authority.
//!
//! [`UserIdentity`]: hourly_core::UserIdentity

pub mod backend;
pub mod claims;
pub mod client;
pub mod credential;
pub mod demo;
pub mod error;
pub mod lookup;
pub mod resolver;
pub mod session;
pub mod store;
pub mod token;

pub use backend::Backend;
pub use claims::TokenClaims;
pub use client::ApiClient;
pub use credential::Credential;
pub use demo::DemoDirectory;
pub use error::{AuthError, LookupError, StoreError};
pub use lookup::{LoginProvider, LoginResponse, UserLookup};
pub use resolver::{IdentityResolver, ResolveIdentity};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore, create_store};
pub use token::{decode_claims, mint_unsigned};
