#![doc(test(attr(deny(warnings))))]

//! Fintrack Core offers the installment scheduling, due-status, and summary
//! primitives that power a personal finance tracker's form and display layers.

pub mod currency;
pub mod dates;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fintrack Core tracing initialized.");
    });
}
