//! Directives shared by the `defaults` and `backend` sections.

use crate::common::Toggle;
use crate::validate::{NO_WHITESPACE, Validate, ValidationContext, Validator};
use crate::{comparable, is_false, leaf_comparable};
use dpapi_error::ValidationErrors;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyMode {
    Http,
    Tcp,
    Log,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HttpConnectionMode {
    Httpclose,
    HttpServerClose,
    HttpKeepAlive,
}

/// Health check protocol (`option httpchk`, `option redis-check`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdvCheck {
    Httpchk,
    SslHelloChk,
    Smtpchk,
    LdapCheck,
    MysqlCheck,
    PgsqlCheck,
    TcpCheck,
    RedisCheck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BalanceAlgorithm {
    Roundrobin,
    StaticRr,
    Leastconn,
    First,
    Source,
    Uri,
    #[serde(rename = "url_param")]
    UrlParam,
    Hdr,
    Random,
    RdpCookie,
    Hash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Head,
    Put,
    Post,
    Get,
    Trace,
    Patch,
    Delete,
    Connect,
    Options,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HashMethod {
    MapBased,
    Consistent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashFunction {
    Sdbm,
    Djb2,
    Wt6,
    Crc32,
    None,
}

leaf_comparable!(
    ProxyMode,
    HttpConnectionMode,
    AdvCheck,
    BalanceAlgorithm,
    HttpMethod,
    HashMethod,
    HashFunction,
);

/// `balance <algorithm> [<arguments>]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Balance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<BalanceAlgorithm>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_expression: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdr_name: Option<String>,

    #[serde(skip_serializing_if = "is_false")]
    pub hdr_use_domain_only: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_draws: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rdp_cookie_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri_depth: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri_len: Option<i64>,

    #[serde(skip_serializing_if = "is_false")]
    pub uri_path_only: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub uri_whole: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_param: Option<String>,

    #[serde(skip_serializing_if = "is_false")]
    pub url_param_check_post: bool,
}

/// `option forwardfor [except <net>] [header <name>] [if-none]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Forwardfor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Toggle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub except: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    #[serde(skip_serializing_if = "is_false")]
    pub ifnone: bool,
}

/// `option httpchk [<method>] [<uri>] [<version>]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpchkParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<HttpMethod>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// `option redispatch [<interval>]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Redispatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Toggle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
}

/// `hash-type <method> <function> [<modifier>]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<HashFunction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<HashMethod>,

    #[serde(skip_serializing_if = "is_false")]
    pub avalanche: bool,
}

comparable!(Balance {
    algorithm,
    hash_expression,
    hdr_name,
    hdr_use_domain_only,
    random_draws,
    rdp_cookie_name,
    uri_depth,
    uri_len,
    uri_path_only,
    uri_whole,
    url_param,
    url_param_check_post,
});

comparable!(Forwardfor {
    enabled,
    except,
    header,
    ifnone,
});

comparable!(HttpchkParams { method, uri, version });

comparable!(Redispatch { enabled, interval });

comparable!(HashType {
    function,
    method,
    avalanche,
});

impl Validate for Balance {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        let mut v = Validator::new(ctx);
        v.required("algorithm", &self.algorithm)
            .pattern_opt("hdr_name", self.hdr_name.as_deref(), &NO_WHITESPACE)
            .minimum_opt("random_draws", self.random_draws, 1)
            .pattern_opt("rdp_cookie_name", self.rdp_cookie_name.as_deref(), &NO_WHITESPACE)
            .minimum_opt("uri_depth", self.uri_depth, 0)
            .minimum_opt("uri_len", self.uri_len, 0)
            .pattern_opt("url_param", self.url_param.as_deref(), &NO_WHITESPACE);

        match self.algorithm {
            Some(BalanceAlgorithm::Hdr) if self.hdr_name.is_none() => {
                v.invalid("hdr_name", "is required by the hdr algorithm");
            }
            Some(BalanceAlgorithm::UrlParam) if self.url_param.is_none() => {
                v.invalid("url_param", "is required by the url_param algorithm");
            }
            Some(BalanceAlgorithm::Hash) if self.hash_expression.is_none() => {
                v.invalid("hash_expression", "is required by the hash algorithm");
            }
            _ => {}
        }
        v.finish()
    }
}

impl Validate for Forwardfor {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        Validator::new(ctx)
            .required("enabled", &self.enabled)
            .pattern_opt("except", self.except.as_deref(), &NO_WHITESPACE)
            .pattern_opt("header", self.header.as_deref(), &NO_WHITESPACE)
            .finish()
    }
}

impl Validate for HttpchkParams {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        let mut v = Validator::new(ctx);
        v.pattern_opt("uri", self.uri.as_deref(), &NO_WHITESPACE);
        if self.version.is_some() && self.uri.is_none() {
            v.invalid("version", "requires uri");
        }
        v.finish()
    }
}

impl Validate for Redispatch {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        Validator::new(ctx)
            .required("enabled", &self.enabled)
            .finish()
    }
}
