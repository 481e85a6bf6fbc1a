mod orbiter_error;

pub use orbiter_error::{OrbiterError, OrbiterResult};
