//! dnstap-quiet Infrastructure Layer
pub mod dns;
pub mod dnstap;
pub mod framestream;
