mod credential;
mod device_token;
mod registration;

pub use credential::Credential;
pub use device_token::DeviceToken;
pub use registration::{Payload, QuietTime, Registration};
