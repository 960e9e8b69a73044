//! Application layer containing the payment authorization orchestration.
//!
//! `PaymentService` is the entry point. It resolves an account store and a
//! scheme validator for each payment and applies approved debits.

pub mod payment_service;
pub mod validator_provider;
