use crate::validate::{NO_WHITESPACE, Validate, ValidationContext, Validator};
use crate::{comparable, is_false, is_zero, leaf_comparable};
use dpapi_error::ValidationErrors;
use serde::{Deserialize, Serialize};

/// Persistence cookie of a backend or defaults section (`cookie` directive).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cookie {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attr: Vec<CookieAttr>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub domain: Vec<CookieDomain>,

    #[serde(skip_serializing_if = "is_false")]
    pub dynamic: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub httponly: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub indirect: bool,

    #[serde(skip_serializing_if = "is_zero")]
    pub maxidle: i64,

    #[serde(skip_serializing_if = "is_zero")]
    pub maxlife: i64,

    pub name: String,

    #[serde(skip_serializing_if = "is_false")]
    pub nocache: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub postonly: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub preserve: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub secure: bool,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<CookieType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CookieType {
    #[serde(rename = "rewrite")]
    Rewrite,
    #[serde(rename = "insert")]
    Insert,
    #[serde(rename = "prefix")]
    Prefix,
}

/// Extra `attr` appended to the Set-Cookie header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieAttr {
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieDomain {
    pub value: String,
}

leaf_comparable!(CookieType);

comparable!(Cookie {
    attr,
    domain,
    dynamic,
    httponly,
    indirect,
    maxidle,
    maxlife,
    name,
    nocache,
    postonly,
    preserve,
    secure,
    kind as "type",
});

comparable!(CookieAttr { value });
comparable!(CookieDomain { value });

impl Validate for Cookie {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        Validator::new(ctx)
            .each("attr", &self.attr)
            .each("domain", &self.domain)
            .minimum("maxidle", self.maxidle, 0)
            .minimum("maxlife", self.maxlife, 0)
            .required_str("name", &self.name)
            .pattern("name", &self.name, &NO_WHITESPACE)
            .finish()
    }
}

impl Validate for CookieAttr {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        Validator::new(ctx)
            .pattern("value", &self.value, &NO_WHITESPACE)
            .finish()
    }
}

impl Validate for CookieDomain {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        Validator::new(ctx)
            .pattern("value", &self.value, &NO_WHITESPACE)
            .finish()
    }
}
