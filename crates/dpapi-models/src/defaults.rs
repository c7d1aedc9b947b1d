use crate::common::Toggle;
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

/// A `defaults` section. Unnamed sections apply to every proxy declared after them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adv_check: Option<AdvCheck>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Balance>,

    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_timeout: Option<i64>,

    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_timeout: Option<i64>,

    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie: Option<Cookie>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dontlognull: Option<Toggle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_alert: Option<EmailAlert>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub forwardfor: Option<Forwardfor>,

    /// Named defaults section this one inherits from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

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

    #[serde(skip_serializing_if = "is_false")]
    pub httplog: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxconn: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ProxyMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

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

    #[serde(skip_serializing_if = "is_false")]
    pub tcplog: bool,

    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tunnel_timeout: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, Value>>,
}

comparable!(Defaults {
    adv_check,
    balance,
    check_timeout,
    client_timeout,
    connect_timeout,
    cookie,
    dontlognull,
    email_alert,
    forwardfor,
    from,
    hash_type,
    http_after_response_rule_list,
    http_connection_mode,
    http_keep_alive_timeout,
    http_request_timeout,
    httpchk_params,
    httplog,
    log_tag,
    maxconn,
    mode,
    name,
    queue_timeout,
    redispatch,
    retries,
    server_timeout,
    tcplog,
    tunnel_timeout,
    metadata,
});

impl Validate for Defaults {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        let mut v = Validator::new(ctx);
        v.nested_opt("balance", &self.balance)
            .minimum_opt("check_timeout", self.check_timeout, 0)
            .minimum_opt("client_timeout", self.client_timeout, 0)
            .minimum_opt("connect_timeout", self.connect_timeout, 0)
            .nested_opt("cookie", &self.cookie)
            .nested_opt("email_alert", &self.email_alert)
            .nested_opt("forwardfor", &self.forwardfor)
            .pattern_opt("from", self.from.as_deref(), &NAME)
            .each("http_after_response_rule_list", &self.http_after_response_rule_list)
            .minimum_opt("http_keep_alive_timeout", self.http_keep_alive_timeout, 0)
            .minimum_opt("http_request_timeout", self.http_request_timeout, 0)
            .nested_opt("httpchk_params", &self.httpchk_params)
            .pattern_opt("log_tag", self.log_tag.as_deref(), &NO_WHITESPACE)
            .minimum_opt("maxconn", self.maxconn, 0)
            .pattern_opt("name", self.name.as_deref(), &NAME)
            .minimum_opt("queue_timeout", self.queue_timeout, 0)
            .nested_opt("redispatch", &self.redispatch)
            .minimum_opt("retries", self.retries, 0)
            .minimum_opt("server_timeout", self.server_timeout, 0)
            .minimum_opt("tunnel_timeout", self.tunnel_timeout, 0);

        if self.httplog && self.tcplog {
            v.invalid("tcplog", "conflicts with httplog");
        }
        if self.from.is_some() && self.from == self.name {
            v.invalid("from", "a defaults section cannot inherit from itself");
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
