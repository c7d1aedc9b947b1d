use crate::validate::{NAME, NO_WHITESPACE, Validate, ValidationContext, Validator};
use crate::{comparable, leaf_comparable};
use dpapi_error::ValidationErrors;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// An `acme` section: a certificate authority HAProxy requests certificates from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcmeProvider {
    /// Path of the account key; generated by HAProxy when missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_key: Option<String>,

    /// Key size in bits, RSA only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bits: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge: Option<AcmeChallenge>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,

    /// Curves, ECDSA only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curves: Option<String>,

    /// URL of the ACME directory.
    pub directory: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keytype: Option<AcmeKeyType>,

    /// Map file holding the HTTP-01 challenge tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcmeChallenge {
    #[serde(rename = "HTTP-01")]
    Http01,
    #[serde(rename = "DNS-01")]
    Dns01,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcmeKeyType {
    #[serde(rename = "RSA")]
    Rsa,
    #[serde(rename = "ECDSA")]
    Ecdsa,
}

leaf_comparable!(AcmeChallenge, AcmeKeyType);

comparable!(AcmeProvider {
    account_key,
    bits,
    challenge,
    contact,
    curves,
    directory,
    keytype,
    map,
    name,
    metadata,
});

impl Validate for AcmeProvider {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        let mut v = Validator::new(ctx);
        v.minimum_opt("bits", self.bits, 1024)
            .pattern_opt("contact", self.contact.as_deref(), &NO_WHITESPACE)
            .required_str("directory", &self.directory)
            .pattern("directory", &self.directory, &NO_WHITESPACE)
            .required_str("name", &self.name)
            .pattern("name", &self.name, &NAME);

        if self.keytype == Some(AcmeKeyType::Ecdsa) && self.bits.is_some() {
            v.invalid("bits", "only applies to RSA keys");
        }
        if self.keytype == Some(AcmeKeyType::Rsa) && self.curves.is_some() {
            v.invalid("curves", "only applies to ECDSA keys");
        }
        v.finish()
    }
}
