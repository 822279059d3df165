//! Contact-form mail relay — validates submissions and dispatches two
//! templated emails (owner notification, sender acknowledgment) through an
//! HTTP mail-provider API.

pub mod message;
pub mod provider;

pub use message::ContactMessage;
pub use provider::MailProvider;
