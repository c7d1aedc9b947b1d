use crate::validate::{NO_WHITESPACE, Validate, ValidationContext, Validator};
use crate::{comparable, leaf_comparable};
use dpapi_error::ValidationErrors;
use serde::{Deserialize, Serialize};

/// `ocsp-update.*` settings of the `global` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcspUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub httpproxy: Option<OcspUpdateHttpProxy>,

    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxdelay: Option<i64>,

    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mindelay: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<OcspUpdateMode>,
}

/// Proxy used to reach OCSP responders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcspUpdateHttpProxy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OcspUpdateMode {
    Enabled,
    Disabled,
}

leaf_comparable!(OcspUpdateMode);

comparable!(OcspUpdateOptions {
    disable,
    httpproxy,
    maxdelay,
    mindelay,
    mode,
});

comparable!(OcspUpdateHttpProxy { address, port });

impl Validate for OcspUpdateOptions {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        let mut v = Validator::new(ctx);
        v.nested_opt("httpproxy", &self.httpproxy)
            .minimum_opt("maxdelay", self.maxdelay, 0)
            .minimum_opt("mindelay", self.mindelay, 0);

        if let (Some(min), Some(max)) = (self.mindelay, self.maxdelay) {
            if min > max {
                v.invalid("mindelay", "must not exceed maxdelay");
            }
        }
        v.finish()
    }
}

impl Validate for OcspUpdateHttpProxy {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        Validator::new(ctx)
            .pattern_opt("address", self.address.as_deref(), &NO_WHITESPACE)
            .range("port", self.port, 1, 65535)
            .finish()
    }
}
