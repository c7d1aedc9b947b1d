use crate::cookie::Cookie;
use crate::email_alert::EmailAlert;
use crate::http_after_response_rule::HttpAfterResponseRule;
use crate::proxy::{
    AdvCheck, Balance, Forwardfor, HashType, HttpConnectionMode, HttpchkParams, ProxyMode,
    Redispatch,
};
use crate::validate::{NAME, NO_WHITESPACE, Validate, ValidationContext, Validator};
use crate::{comparable, is_false};
use dpapi_error::ValidationErrors;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A `backend` section: a named pool of servers and how traffic reaches them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Backend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adv_check: Option<AdvCheck>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Balance>,

    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_timeout: Option<i64>,

    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie: Option<Cookie>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "is_false")]
    pub disabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_alert: Option<EmailAlert>,

    #[serde(skip_serializing_if = "is_false")]
    pub enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub forwardfor: Option<Forwardfor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_type: Option<HashType>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub http_after_response_rule_list: Vec<HttpAfterResponseRule>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_connection_mode: Option<HttpConnectionMode>,

    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_keep_alive_timeout: Option<i64>,

    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_request_timeout: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub httpchk_params: Option<HttpchkParams>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ProxyMode>,

    pub name: String,

    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_timeout: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub redispatch: Option<Redispatch>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<i64>,

    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_timeout: Option<i64>,

    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tunnel_timeout: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, Value>>,
}

comparable!(Backend {
    adv_check,
    balance,
    check_timeout,
    connect_timeout,
    cookie,
    description,
    disabled,
    email_alert,
    enabled,
    forwardfor,
    hash_type,
    http_after_response_rule_list,
    http_connection_mode,
    http_keep_alive_timeout,
    http_request_timeout,
    httpchk_params,
    id,
    log_tag,
    mode,
    name,
    queue_timeout,
    redispatch,
    retries,
    server_timeout,
    tunnel_timeout,
    metadata,
});

impl Backend {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl Validate for Backend {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        let mut v = Validator::new(ctx);
        v.nested_opt("balance", &self.balance)
            .minimum_opt("check_timeout", self.check_timeout, 0)
            .minimum_opt("connect_timeout", self.connect_timeout, 0)
            .nested_opt("cookie", &self.cookie)
            .nested_opt("email_alert", &self.email_alert)
            .nested_opt("forwardfor", &self.forwardfor)
            .each("http_after_response_rule_list", &self.http_after_response_rule_list)
            .minimum_opt("http_keep_alive_timeout", self.http_keep_alive_timeout, 0)
            .minimum_opt("http_request_timeout", self.http_request_timeout, 0)
            .nested_opt("httpchk_params", &self.httpchk_params)
            .minimum_opt("id", self.id, 1)
            .pattern_opt("log_tag", self.log_tag.as_deref(), &NO_WHITESPACE)
            .required_str("name", &self.name)
            .pattern("name", &self.name, &NAME)
            .minimum_opt("queue_timeout", self.queue_timeout, 0)
            .nested_opt("redispatch", &self.redispatch)
            .minimum_opt("retries", self.retries, 0)
            .minimum_opt("server_timeout", self.server_timeout, 0)
            .minimum_opt("tunnel_timeout", self.tunnel_timeout, 0);

        if self.disabled && self.enabled {
            v.invalid("enabled", "conflicts with disabled");
        }
        if self.mode == Some(ProxyMode::Tcp) && !self.http_after_response_rule_list.is_empty() {
            v.invalid("http_after_response_rule_list", "requires mode http");
        }
        if self.httpchk_params.is_some()
            && self.adv_check.is_some_and(|check| check != AdvCheck::Httpchk)
        {
            v.invalid("httpchk_params", "requires adv_check httpchk");
        }
        v.finish()
    }
}
