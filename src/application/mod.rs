//! Application layer wiring the host collaborators to the domain rules.
//!
//! `SofortPaymentMethod` is what the host checkout talks to: it resolves the
//! shipping country and display language once, then answers eligibility and
//! presentation queries against a fresh configuration snapshot.

pub mod payment_method;
