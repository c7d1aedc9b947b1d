//! Sub-blocks and enumerations of the `global` section besides tuning.

use crate::common::LogLevel;
use crate::validate::{NAME, NO_WHITESPACE, Validate, ValidationContext, Validator};
use crate::{comparable, leaf_comparable};
use dpapi_error::ValidationErrors;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static ENV_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("environment name pattern must compile")
});

static PROC_VAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^proc\.[A-Za-z0-9._]+$").expect("process variable pattern must compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpPreference {
    Ipv4,
    Ipv6,
}

/// `ssl-server-verify` and `httpclient.ssl.verify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SslVerify {
    None,
    Required,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadServerState {
    Global,
    Local,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfilingMode {
    Auto,
    On,
    Off,
}

leaf_comparable!(IpPreference, SslVerify, LoadServerState, ProfilingMode);

/// `setenv` / `presetenv <name> <value>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvVar {
    pub name: String,

    pub value: String,
}

/// `set-var <name> <expr>`, process scope only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSetVar {
    pub name: String,

    pub expr: String,
}

/// `set-var-fmt <name> <format>`, process scope only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSetVarFmt {
    pub name: String,

    pub format: String,
}

/// `ssl-engine <name> [algo <algorithms>]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SslEngine {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithms: Option<String>,
}

/// `thread-group <group> <num-or-range>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreadGroup {
    pub group: String,

    pub num_or_range: String,
}

/// A `log <address> [len <length>] [format <format>] <facility> [<level> [<minlevel>]]` line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalLogTarget {
    pub address: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minlevel: Option<LogLevel>,
}

/// DeviceAtlas detection settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceAtlasOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties_cookie: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
}

/// 51Degrees detection settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiftyOneDegreesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_name_list: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_separator: Option<String>,
}

/// WURFL detection settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WurflOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub information_list: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub information_list_separator: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_file: Option<String>,
}

comparable!(EnvVar { name, value });

comparable!(GlobalSetVar { name, expr });

comparable!(GlobalSetVarFmt { name, format });

comparable!(SslEngine { name, algorithms });

comparable!(ThreadGroup { group, num_or_range });

comparable!(GlobalLogTarget {
    address,
    facility,
    format,
    length,
    level,
    minlevel,
});

comparable!(DeviceAtlasOptions {
    json_file,
    log_level,
    properties_cookie,
    separator,
});

comparable!(FiftyOneDegreesOptions {
    cache_size,
    data_file,
    property_name_list,
    property_separator,
});

comparable!(WurflOptions {
    cache_size,
    data_file,
    information_list,
    information_list_separator,
    patch_file,
});

impl Validate for EnvVar {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        Validator::new(ctx)
            .required_str("name", &self.name)
            .pattern("name", &self.name, &ENV_NAME)
            .finish()
    }
}

impl Validate for GlobalSetVar {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        Validator::new(ctx)
            .required_str("name", &self.name)
            .pattern("name", &self.name, &PROC_VAR)
            .required_str("expr", &self.expr)
            .finish()
    }
}

impl Validate for GlobalSetVarFmt {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        Validator::new(ctx)
            .required_str("name", &self.name)
            .pattern("name", &self.name, &PROC_VAR)
            .required_str("format", &self.format)
            .finish()
    }
}

impl Validate for SslEngine {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        Validator::new(ctx)
            .required_str("name", &self.name)
            .pattern("name", &self.name, &NAME)
            .finish()
    }
}

impl Validate for ThreadGroup {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        Validator::new(ctx)
            .required_str("group", &self.group)
            .required_str("num_or_range", &self.num_or_range)
            .pattern("num_or_range", &self.num_or_range, &NO_WHITESPACE)
            .finish()
    }
}

impl Validate for GlobalLogTarget {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        let mut v = Validator::new(ctx);
        v.required_str("address", &self.address)
            .pattern("address", &self.address, &NO_WHITESPACE)
            .pattern_opt("facility", self.facility.as_deref(), &NO_WHITESPACE)
            .range("length", self.length, 80, 65535);
        if self.minlevel.is_some() && self.level.is_none() {
            v.invalid("minlevel", "requires level");
        }
        v.finish()
    }
}

impl Validate for DeviceAtlasOptions {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        Validator::new(ctx)
            .pattern_opt("json_file", self.json_file.as_deref(), &NO_WHITESPACE)
            .range("log_level", self.log_level, 0, 3)
            .finish()
    }
}

impl Validate for FiftyOneDegreesOptions {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        Validator::new(ctx)
            .minimum_opt("cache_size", self.cache_size, 0)
            .pattern_opt("data_file", self.data_file.as_deref(), &NO_WHITESPACE)
            .finish()
    }
}

impl Validate for WurflOptions {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        Validator::new(ctx)
            .minimum_opt("cache_size", self.cache_size, 0)
            .pattern_opt("data_file", self.data_file.as_deref(), &NO_WHITESPACE)
            .pattern_opt("patch_file", self.patch_file.as_deref(), &NO_WHITESPACE)
            .finish()
    }
}
