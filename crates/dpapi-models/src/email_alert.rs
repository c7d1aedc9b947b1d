use crate::common::LogLevel;
use crate::validate::{EMAIL, NAME, NO_WHITESPACE, Validate, ValidationContext, Validator};
use crate::comparable;
use dpapi_error::ValidationErrors;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// `email-alert` settings of a proxy section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailAlert {
    pub from: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,

    /// Name of the `mailers` section used to send alerts.
    pub mailers: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub myhostname: Option<String>,

    pub to: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, Value>>,
}

comparable!(EmailAlert {
    from,
    level,
    mailers,
    myhostname,
    to,
    metadata,
});

impl Validate for EmailAlert {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        Validator::new(ctx)
            .required_str("from", &self.from)
            .pattern("from", &self.from, &EMAIL)
            .required_str("mailers", &self.mailers)
            .pattern("mailers", &self.mailers, &NAME)
            .pattern_opt("myhostname", self.myhostname.as_deref(), &NO_WHITESPACE)
            .required_str("to", &self.to)
            .pattern("to", &self.to, &EMAIL)
            .finish()
    }
}
