use crate::common::Toggle;
use crate::global_options::{
    DeviceAtlasOptions, EnvVar, FiftyOneDegreesOptions, GlobalLogTarget, GlobalSetVar,
    GlobalSetVarFmt, IpPreference, LoadServerState, ProfilingMode, SslEngine, SslVerify,
    ThreadGroup, WurflOptions,
};
use crate::global_tune_options::GlobalTuneOptions;
use crate::lua_options::LuaOptions;
use crate::ocsp_update_options::OcspUpdateOptions;
use crate::validate::{NAME, NO_WHITESPACE, Validate, ValidationContext, Validator};
use crate::{comparable, is_false, leaf_comparable};
use dpapi_error::ValidationErrors;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

static SOCKET_MODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-7]{3,4}$").expect("socket mode pattern must compile"));

/// The `global` section: process-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Global {
    /// Key used to anonymize the runtime API output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonkey: Option<i64>,

    #[serde(skip_serializing_if = "is_false")]
    pub busy_polling: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_base: Option<String>,

    /// Directory to chroot to after startup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chroot: Option<String>,

    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_spread_time: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_secret: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cpu_maps: Vec<CpuMap>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub crt_base: Option<String>,

    #[serde(skip_serializing_if = "is_false")]
    pub daemon: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_path: Option<GlobalDefaultPath>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_atlas_options: Option<DeviceAtlasOptions>,

    #[serde(skip_serializing_if = "is_false")]
    pub expose_experimental_directives: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub external_check: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fifty_one_degrees_options: Option<FiftyOneDegreesOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gid: Option<i64>,

    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grace: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub h1_case_adjust: Vec<H1CaseAdjust>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub h1_case_adjust_file: Option<String>,

    #[serde(skip_serializing_if = "is_false")]
    pub h2_workaround_bogus_websocket_clients: bool,

    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hard_stop_after: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub httpclient_resolvers_disabled: Option<Toggle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub httpclient_resolvers_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub httpclient_resolvers_prefer: Option<IpPreference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub httpclient_ssl_ca_file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub httpclient_ssl_verify: Option<SslVerify>,

    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub httpclient_timeout_connect: Option<i64>,

    #[serde(skip_serializing_if = "is_false")]
    pub insecure_fork_wanted: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub insecure_setuid_wanted: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuers_chain_path: Option<String>,

    #[serde(skip_serializing_if = "is_false")]
    pub limited_quic: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_server_state_from_file: Option<LoadServerState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub localpeer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_send_hostname: Option<GlobalLogSendHostname>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_tag: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub log_target_list: Vec<GlobalLogTarget>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lua_options: Option<LuaOptions>,

    #[serde(skip_serializing_if = "is_false")]
    pub master_worker: bool,

    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_spread_checks: Option<i64>,

    /// Percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxcompcpuusage: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxcomprate: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxconn: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxconnrate: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxpipes: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxsessrate: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxsslconn: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxsslrate: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxzlibmem: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mworker_max_reloads: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbthread: Option<i64>,

    #[serde(skip_serializing_if = "is_false")]
    pub no_quic: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,

    #[serde(skip_serializing_if = "is_false")]
    pub noepoll: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub noevports: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub nogetaddrinfo: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub nokqueue: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub nopoll: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub noreuseport: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub nosplice: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub numa_cpu_mapping: Option<Toggle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocsp_update_options: Option<OcspUpdateOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pidfile: Option<String>,

    #[serde(skip_serializing_if = "is_false")]
    pub pp2_never_send_local: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub prealloc_fd: bool,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub presetenv: Vec<EnvVar>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiling_tasks: Option<ProfilingMode>,

    #[serde(skip_serializing_if = "is_false")]
    pub quiet: bool,

    /// Space separated names of the variables to keep.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resetenv: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub runtime_apis: Vec<RuntimeApi>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_state_base: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_state_file: Option<String>,

    #[serde(skip_serializing_if = "is_false")]
    pub set_dumpable: bool,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub set_var: Vec<GlobalSetVar>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub set_var_fmt: Vec<GlobalSetVarFmt>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub setenv: Vec<EnvVar>,

    /// Percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spread_checks: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_default_bind_ciphers: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_default_bind_ciphersuites: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_default_bind_client_sigalgs: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_default_bind_curves: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_default_bind_options: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_default_bind_sigalgs: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_default_server_ciphers: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_default_server_ciphersuites: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_default_server_client_sigalgs: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_default_server_curves: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_default_server_options: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_default_server_sigalgs: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_dh_param_file: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ssl_engines: Vec<SslEngine>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_load_extra_files: Option<String>,

    #[serde(skip_serializing_if = "is_false")]
    pub ssl_mode_async: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_propquery: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_provider: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_provider_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_security_level: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_server_verify: Option<SslVerify>,

    #[serde(skip_serializing_if = "is_false")]
    pub ssl_skip_self_issued_ca: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats_file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats_maxconn: Option<i64>,

    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats_timeout: Option<i64>,

    #[serde(skip_serializing_if = "is_false")]
    pub strict_limits: bool,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub thread_group_lines: Vec<ThreadGroup>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_groups: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tune_options: Option<GlobalTuneOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ulimit_n: Option<i64>,

    /// Space separated names of the variables to remove.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsetenv: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wurfl_options: Option<WurflOptions>,

    #[serde(skip_serializing_if = "is_false")]
    pub zero_warning: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, Value>>,
}

/// `cpu-map <process> <cpu-set>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuMap {
    pub cpu_set: String,

    pub process: String,
}

/// `default-path { current | config | parent | origin <path> }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalDefaultPath {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<DefaultPathType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultPathType {
    Current,
    Config,
    Parent,
    Origin,
}

/// `h1-case-adjust <from> <to>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct H1CaseAdjust {
    pub from: String,

    pub to: String,
}

/// `log-send-hostname [<string>]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalLogSendHostname {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Toggle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

/// `stats socket <address> [params]`: a runtime API endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeApi {
    pub address: String,

    #[serde(skip_serializing_if = "is_false")]
    pub expose_fd_listeners: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<RuntimeApiLevel>,

    /// Octal permissions of a UNIX socket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeApiLevel {
    User,
    Operator,
    Admin,
}

leaf_comparable!(DefaultPathType, RuntimeApiLevel);

comparable!(Global {
    anonkey,
    busy_polling,
    ca_base,
    chroot,
    close_spread_time,
    cluster_secret,
    cpu_maps,
    crt_base,
    daemon,
    default_path,
    description,
    device_atlas_options,
    expose_experimental_directives,
    external_check,
    fifty_one_degrees_options,
    gid,
    grace,
    group,
    h1_case_adjust,
    h1_case_adjust_file,
    h2_workaround_bogus_websocket_clients,
    hard_stop_after,
    httpclient_resolvers_disabled,
    httpclient_resolvers_id,
    httpclient_resolvers_prefer,
    httpclient_ssl_ca_file,
    httpclient_ssl_verify,
    httpclient_timeout_connect,
    insecure_fork_wanted,
    insecure_setuid_wanted,
    issuers_chain_path,
    limited_quic,
    load_server_state_from_file,
    localpeer,
    log_send_hostname,
    log_tag,
    log_target_list,
    lua_options,
    master_worker,
    max_spread_checks,
    maxcompcpuusage,
    maxcomprate,
    maxconn,
    maxconnrate,
    maxpipes,
    maxsessrate,
    maxsslconn,
    maxsslrate,
    maxzlibmem,
    mworker_max_reloads,
    nbthread,
    no_quic,
    node,
    noepoll,
    noevports,
    nogetaddrinfo,
    nokqueue,
    nopoll,
    noreuseport,
    nosplice,
    numa_cpu_mapping,
    ocsp_update_options,
    pidfile,
    pp2_never_send_local,
    prealloc_fd,
    presetenv,
    profiling_tasks,
    quiet,
    resetenv,
    runtime_apis,
    server_state_base,
    server_state_file,
    set_dumpable,
    set_var,
    set_var_fmt,
    setenv,
    spread_checks,
    ssl_default_bind_ciphers,
    ssl_default_bind_ciphersuites,
    ssl_default_bind_client_sigalgs,
    ssl_default_bind_curves,
    ssl_default_bind_options,
    ssl_default_bind_sigalgs,
    ssl_default_server_ciphers,
    ssl_default_server_ciphersuites,
    ssl_default_server_client_sigalgs,
    ssl_default_server_curves,
    ssl_default_server_options,
    ssl_default_server_sigalgs,
    ssl_dh_param_file,
    ssl_engines,
    ssl_load_extra_files,
    ssl_mode_async,
    ssl_propquery,
    ssl_provider,
    ssl_provider_path,
    ssl_security_level,
    ssl_server_verify,
    ssl_skip_self_issued_ca,
    stats_file,
    stats_maxconn,
    stats_timeout,
    strict_limits,
    thread_group_lines,
    thread_groups,
    tune_options,
    uid,
    ulimit_n,
    unsetenv,
    user,
    wurfl_options,
    zero_warning,
    metadata,
});

comparable!(CpuMap { cpu_set, process });

comparable!(GlobalDefaultPath {
    path,
    kind as "type",
});

comparable!(H1CaseAdjust { from, to });

comparable!(GlobalLogSendHostname { enabled, param });

comparable!(RuntimeApi {
    address,
    expose_fd_listeners,
    level,
    mode,
    name,
});

impl Validate for Global {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        let mut v = Validator::new(ctx);
        v.range("anonkey", self.anonkey, 0, 4294967295)
            .pattern_opt("ca_base", self.ca_base.as_deref(), &NO_WHITESPACE)
            .pattern_opt("chroot", self.chroot.as_deref(), &NO_WHITESPACE)
            .minimum_opt("close_spread_time", self.close_spread_time, 0)
            .each("cpu_maps", &self.cpu_maps)
            .pattern_opt("crt_base", self.crt_base.as_deref(), &NO_WHITESPACE)
            .nested_opt("default_path", &self.default_path)
            .nested_opt("device_atlas_options", &self.device_atlas_options)
            .nested_opt("fifty_one_degrees_options", &self.fifty_one_degrees_options)
            .minimum_opt("gid", self.gid, 0)
            .minimum_opt("grace", self.grace, 0)
            .pattern_opt("group", self.group.as_deref(), &NO_WHITESPACE)
            .each("h1_case_adjust", &self.h1_case_adjust)
            .minimum_opt("hard_stop_after", self.hard_stop_after, 0)
            .pattern_opt(
                "httpclient_resolvers_id",
                self.httpclient_resolvers_id.as_deref(),
                &NAME,
            )
            .pattern_opt(
                "httpclient_ssl_ca_file",
                self.httpclient_ssl_ca_file.as_deref(),
                &NO_WHITESPACE,
            )
            .minimum_opt(
                "httpclient_timeout_connect",
                self.httpclient_timeout_connect,
                0,
            )
            .pattern_opt(
                "issuers_chain_path",
                self.issuers_chain_path.as_deref(),
                &NO_WHITESPACE,
            )
            .pattern_opt("localpeer", self.localpeer.as_deref(), &NAME)
            .each("log_target_list", &self.log_target_list)
            .nested_opt("log_send_hostname", &self.log_send_hostname)
            .nested_opt("lua_options", &self.lua_options)
            .range("maxcompcpuusage", self.maxcompcpuusage, 0, 100)
            .minimum_opt("max_spread_checks", self.max_spread_checks, 0)
            .minimum_opt("maxconn", self.maxconn, 0)
            .minimum_opt("mworker_max_reloads", self.mworker_max_reloads, 0)
            .minimum_opt("nbthread", self.nbthread, 1)
            .nested_opt("ocsp_update_options", &self.ocsp_update_options)
            .pattern_opt("pidfile", self.pidfile.as_deref(), &NO_WHITESPACE)
            .each("presetenv", &self.presetenv)
            .each("runtime_apis", &self.runtime_apis)
            .pattern_opt(
                "server_state_base",
                self.server_state_base.as_deref(),
                &NO_WHITESPACE,
            )
            .pattern_opt(
                "server_state_file",
                self.server_state_file.as_deref(),
                &NO_WHITESPACE,
            )
            .each("set_var", &self.set_var)
            .each("set_var_fmt", &self.set_var_fmt)
            .each("setenv", &self.setenv)
            .range("spread_checks", self.spread_checks, 0, 50)
            .pattern_opt(
                "ssl_dh_param_file",
                self.ssl_dh_param_file.as_deref(),
                &NO_WHITESPACE,
            )
            .each("ssl_engines", &self.ssl_engines)
            .pattern_opt(
                "ssl_provider_path",
                self.ssl_provider_path.as_deref(),
                &NO_WHITESPACE,
            )
            .range("ssl_security_level", self.ssl_security_level, 0, 5)
            .pattern_opt("stats_file", self.stats_file.as_deref(), &NO_WHITESPACE)
            .each("thread_group_lines", &self.thread_group_lines)
            .range("thread_groups", self.thread_groups, 1, 64)
            .nested_opt("tune_options", &self.tune_options)
            .minimum_opt("uid", self.uid, 0)
            .minimum_opt("ulimit_n", self.ulimit_n, 0)
            .pattern_opt("user", self.user.as_deref(), &NO_WHITESPACE)
            .nested_opt("wurfl_options", &self.wurfl_options);

        if let (Some(groups), Some(threads)) = (self.thread_groups, self.nbthread) {
            if groups > threads {
                v.invalid("thread_groups", "must not exceed nbthread");
            }
        }
        if self.user.is_some() && self.uid.is_some() {
            v.invalid("uid", "conflicts with user");
        }
        if self.group.is_some() && self.gid.is_some() {
            v.invalid("gid", "conflicts with group");
        }
        if self.load_server_state_from_file == Some(LoadServerState::Global)
            && self.server_state_file.is_none()
        {
            v.invalid("server_state_file", "is required to load the global server state");
        }
        v.finish()
    }
}

impl Validate for CpuMap {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        Validator::new(ctx)
            .required_str("cpu_set", &self.cpu_set)
            .required_str("process", &self.process)
            .finish()
    }
}

impl Validate for GlobalDefaultPath {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        let mut v = Validator::new(ctx);
        v.required("type", &self.kind)
            .pattern_opt("path", self.path.as_deref(), &NO_WHITESPACE);
        if self.kind == Some(DefaultPathType::Origin) && self.path.is_none() {
            v.invalid("path", "is required for origin");
        }
        v.finish()
    }
}

impl Validate for H1CaseAdjust {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        let mut v = Validator::new(ctx);
        v.required_str("from", &self.from).required_str("to", &self.to);
        if !self.from.is_empty() && !self.from.eq_ignore_ascii_case(&self.to) {
            v.invalid("to", "must only differ from 'from' by case");
        }
        v.finish()
    }
}

impl Validate for GlobalLogSendHostname {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        Validator::new(ctx)
            .required("enabled", &self.enabled)
            .pattern_opt("param", self.param.as_deref(), &NO_WHITESPACE)
            .finish()
    }
}

impl Validate for RuntimeApi {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        Validator::new(ctx)
            .required_str("address", &self.address)
            .pattern("address", &self.address, &NO_WHITESPACE)
            .pattern_opt("mode", self.mode.as_deref(), &SOCKET_MODE)
            .pattern_opt("name", self.name.as_deref(), &NO_WHITESPACE)
            .finish()
    }
}
