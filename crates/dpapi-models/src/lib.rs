//! HAProxy Data Plane API configuration models.
//!
//! One module per schema definition. Every model derives serde with the
//! wire names of the API, and implements [`Validate`], [`Comparable`] and
//! [`Diffable`]; [`BinaryCodec`] comes for free through serde.

pub mod codec;
pub mod common;
pub mod compare;
pub mod validate;

pub mod acme_provider;
pub mod backend;
pub mod configuration;
pub mod cookie;
pub mod defaults;
pub mod email_alert;
pub mod global;
pub mod global_options;
pub mod global_tune_options;
pub mod http_after_response_rule;
pub mod lua_options;
pub mod ocsp_update_options;
pub mod proxy;

pub use acme_provider::AcmeProvider;
pub use backend::Backend;
pub use codec::BinaryCodec;
pub use compare::{Change, CompareOptions, Comparable, Diff, Diffable};
pub use configuration::Configuration;
pub use cookie::Cookie;
pub use defaults::Defaults;
pub use email_alert::EmailAlert;
pub use global::Global;
pub use global_tune_options::GlobalTuneOptions;
pub use http_after_response_rule::HttpAfterResponseRule;
pub use lua_options::LuaOptions;
pub use ocsp_update_options::OcspUpdateOptions;
pub use validate::{Validate, ValidationContext};

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

pub(crate) fn is_zero(value: &i64) -> bool {
    *value == 0
}
