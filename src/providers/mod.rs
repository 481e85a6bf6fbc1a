//! Push providers.
//!
//! `Provider` describes routing and body shaping; `StructuredPayload` adds
//! typed registration fields for providers that understand them.

mod generic;
mod parse;
mod provider;
mod urban_airship;

pub use generic::GenericProvider;
pub use parse::{APPLICATION_ID_HEADER, PARSE_BASE_URL, Parse, REST_API_KEY_HEADER};
pub use provider::{Provider, StructuredPayload};
pub use urban_airship::{URBAN_AIRSHIP_BASE_URL, UrbanAirship};
