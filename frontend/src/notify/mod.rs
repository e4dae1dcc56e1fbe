//! Notify-me email capture: validation, honeypot, client-side rate limit and
//! the POST to the form backend.

pub mod clock;
pub mod error;
pub mod form;
pub mod gate;
pub mod record;
pub mod store;
pub mod transport;
pub mod validation;

pub use error::SubmitError;
pub use form::FormState;
pub use gate::BrowserGate;
