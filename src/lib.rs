//! Orbiter
//!
//! Register and unregister device tokens with push notification providers
//! (Urban Airship, Parse, or any `device_tokens` compatible service) without
//! pulling in their SDKs.
//!
//! ```ignore
//! use orbiter::{Orbiter, Registration};
//!
//! let orbiter = Orbiter::urban_airship("app-key", "app-secret")?;
//! orbiter
//!     .register_device_token("<a1b2c3d4 e5f6a7b8>", &Registration::new().alias("jdoe").badge(1))
//!     .await?;
//! orbiter.unregister_device_token("<a1b2c3d4 e5f6a7b8>").await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod models;
pub mod providers;
pub mod request;

pub use client::{AnyOrbiter, Orbiter};
pub use error::{OrbiterError, OrbiterResult};
pub use external::{ReqwestTransport, Transport, TransportResponse};
pub use models::{Credential, DeviceToken, Payload, QuietTime, Registration};
pub use providers::{GenericProvider, Parse, Provider, StructuredPayload, UrbanAirship};
pub use request::Endpoint;
