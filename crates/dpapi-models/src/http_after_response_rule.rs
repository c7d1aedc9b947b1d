use crate::common::{LogLevel, OnOff};
use crate::validate::{NO_WHITESPACE, Validate, ValidationContext, Validator};
use crate::{comparable, leaf_comparable};
use dpapi_error::ValidationErrors;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

static VAR_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._]+$").expect("variable name pattern must compile"));

/// One `http-after-response` rule of a proxy section.
///
/// Which arguments apply depends on `type`; the rest must stay unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpAfterResponseRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl_file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl_keyfmt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_len: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_sample: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cond: Option<RuleCondition>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cond_test: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdr_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdr_match: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdr_method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdr_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_keyfmt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_valuefmt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sc_expr: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sc_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sc_idx: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sc_int: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_mode: Option<OnOff>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<HttpAfterResponseRuleType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub var_expr: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub var_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub var_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub var_scope: Option<VarScope>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HttpAfterResponseRuleType {
    AddHeader,
    Allow,
    Capture,
    DelAcl,
    DelHeader,
    DelMap,
    ReplaceHeader,
    ReplaceValue,
    ScAddGpc,
    ScIncGpc,
    ScIncGpc0,
    ScIncGpc1,
    ScSetGpt,
    ScSetGpt0,
    SetHeader,
    SetLogLevel,
    SetMap,
    SetStatus,
    SetVar,
    SetVarFmt,
    StrictMode,
    UnsetVar,
}

impl HttpAfterResponseRuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddHeader => "add-header",
            Self::Allow => "allow",
            Self::Capture => "capture",
            Self::DelAcl => "del-acl",
            Self::DelHeader => "del-header",
            Self::DelMap => "del-map",
            Self::ReplaceHeader => "replace-header",
            Self::ReplaceValue => "replace-value",
            Self::ScAddGpc => "sc-add-gpc",
            Self::ScIncGpc => "sc-inc-gpc",
            Self::ScIncGpc0 => "sc-inc-gpc0",
            Self::ScIncGpc1 => "sc-inc-gpc1",
            Self::ScSetGpt => "sc-set-gpt",
            Self::ScSetGpt0 => "sc-set-gpt0",
            Self::SetHeader => "set-header",
            Self::SetLogLevel => "set-log-level",
            Self::SetMap => "set-map",
            Self::SetStatus => "set-status",
            Self::SetVar => "set-var",
            Self::SetVarFmt => "set-var-fmt",
            Self::StrictMode => "strict-mode",
            Self::UnsetVar => "unset-var",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCondition {
    If,
    Unless,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarScope {
    Proc,
    Sess,
    Txn,
    Req,
    Res,
}

leaf_comparable!(HttpAfterResponseRuleType, RuleCondition, VarScope);

comparable!(HttpAfterResponseRule {
    acl_file,
    acl_keyfmt,
    capture_id,
    capture_len,
    capture_sample,
    cond,
    cond_test,
    hdr_format,
    hdr_match,
    hdr_method,
    hdr_name,
    log_level,
    map_file,
    map_keyfmt,
    map_valuefmt,
    sc_expr,
    sc_id,
    sc_idx,
    sc_int,
    status,
    status_reason,
    strict_mode,
    kind as "type",
    var_expr,
    var_format,
    var_name,
    var_scope,
    metadata,
});

impl HttpAfterResponseRule {
    /// Arguments `type` cannot do without, as `(field, present)` pairs.
    fn required_arguments(&self, kind: HttpAfterResponseRuleType) -> Vec<(&'static str, bool)> {
        use HttpAfterResponseRuleType::*;

        match kind {
            AddHeader | SetHeader => vec![
                ("hdr_name", self.hdr_name.is_some()),
                ("hdr_format", self.hdr_format.is_some()),
            ],
            DelHeader => vec![("hdr_name", self.hdr_name.is_some())],
            ReplaceHeader | ReplaceValue => vec![
                ("hdr_name", self.hdr_name.is_some()),
                ("hdr_match", self.hdr_match.is_some()),
                ("hdr_format", self.hdr_format.is_some()),
            ],
            SetStatus => vec![("status", self.status.is_some())],
            SetVar => vec![
                ("var_name", self.var_name.is_some()),
                ("var_scope", self.var_scope.is_some()),
                ("var_expr", self.var_expr.is_some()),
            ],
            SetVarFmt => vec![
                ("var_name", self.var_name.is_some()),
                ("var_scope", self.var_scope.is_some()),
                ("var_format", self.var_format.is_some()),
            ],
            UnsetVar => vec![
                ("var_name", self.var_name.is_some()),
                ("var_scope", self.var_scope.is_some()),
            ],
            SetMap => vec![
                ("map_file", self.map_file.is_some()),
                ("map_keyfmt", self.map_keyfmt.is_some()),
                ("map_valuefmt", self.map_valuefmt.is_some()),
            ],
            DelMap => vec![
                ("map_file", self.map_file.is_some()),
                ("map_keyfmt", self.map_keyfmt.is_some()),
            ],
            DelAcl => vec![
                ("acl_file", self.acl_file.is_some()),
                ("acl_keyfmt", self.acl_keyfmt.is_some()),
            ],
            SetLogLevel => vec![("log_level", self.log_level.is_some())],
            StrictMode => vec![("strict_mode", self.strict_mode.is_some())],
            Capture => vec![("capture_sample", self.capture_sample.is_some())],
            ScIncGpc0 | ScIncGpc1 | ScSetGpt0 => vec![("sc_id", self.sc_id.is_some())],
            ScIncGpc | ScAddGpc | ScSetGpt => vec![
                ("sc_id", self.sc_id.is_some()),
                ("sc_idx", self.sc_idx.is_some()),
            ],
            Allow => vec![],
        }
    }
}

impl Validate for HttpAfterResponseRule {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        use HttpAfterResponseRuleType::*;

        let mut v = Validator::new(ctx);
        v.required("type", &self.kind)
            .minimum_opt("capture_id", self.capture_id, 0)
            .minimum_opt("capture_len", self.capture_len, 1)
            .pattern_opt("hdr_name", self.hdr_name.as_deref(), &NO_WHITESPACE)
            .pattern_opt("hdr_method", self.hdr_method.as_deref(), &NO_WHITESPACE)
            .pattern_opt("map_file", self.map_file.as_deref(), &NO_WHITESPACE)
            .pattern_opt("acl_file", self.acl_file.as_deref(), &NO_WHITESPACE)
            .minimum_opt("sc_id", self.sc_id, 0)
            .minimum_opt("sc_idx", self.sc_idx, 0)
            .range("status", self.status, 100, 999)
            .pattern_opt("var_name", self.var_name.as_deref(), &VAR_NAME);

        if self.cond.is_some() && self.cond_test.is_none() {
            v.invalid("cond_test", "is required when cond is set");
        }

        if let Some(kind) = self.kind {
            for (field, present) in self.required_arguments(kind) {
                if !present {
                    v.invalid(field, format!("is required by {}", kind.as_str()));
                }
            }
            if kind == Capture && self.capture_id.is_none() && self.capture_len.is_none() {
                v.invalid("capture_id", "capture needs either capture_id or capture_len");
            }
            if matches!(kind, ScAddGpc | ScSetGpt | ScSetGpt0)
                && self.sc_expr.is_none()
                && self.sc_int.is_none()
            {
                v.invalid(
                    "sc_expr",
                    format!("{} needs either sc_expr or sc_int", kind.as_str()),
                );
            }
        }
        v.finish()
    }
}
