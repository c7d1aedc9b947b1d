//! Fixture pairs whose members differ in every field.

#![allow(dead_code)]

use dpapi_models::{
    AcmeProvider, Backend, Cookie, Defaults, EmailAlert, Global, GlobalTuneOptions,
    HttpAfterResponseRule, LuaOptions, OcspUpdateOptions,
};
use serde::de::DeserializeOwned;

pub const COOKIE_FIELDS: usize = 13;
pub const GLOBAL_FIELDS: usize = 113;
pub const TUNE_FIELDS: usize = 75;
pub const BACKEND_FIELDS: usize = 26;
pub const DEFAULTS_FIELDS: usize = 28;
pub const RULE_FIELDS: usize = 28;
pub const ACME_FIELDS: usize = 10;
pub const EMAIL_ALERT_FIELDS: usize = 6;
pub const LUA_FIELDS: usize = 3;
pub const OCSP_FIELDS: usize = 5;

pub fn parse<T: DeserializeOwned>(json: &str) -> T {
    serde_json::from_str(json).unwrap()
}

pub fn cookie_pair() -> (Cookie, Cookie) {
    let a = parse(
        r#"{
            "attr": [{"value": "SameSite=Lax"}],
            "domain": [{"value": ".example.com"}],
            "dynamic": true,
            "httponly": true,
            "indirect": true,
            "maxidle": 100,
            "maxlife": 1000,
            "name": "SRVID",
            "nocache": true,
            "postonly": true,
            "preserve": true,
            "secure": true,
            "type": "insert"
        }"#,
    );
    let b = parse(
        r#"{
            "attr": [{"value": "SameSite=Strict"}],
            "domain": [],
            "maxidle": 200,
            "maxlife": 2000,
            "name": "SESSION",
            "type": "prefix"
        }"#,
    );
    (a, b)
}

pub fn global_pair() -> (Global, Global) {
    let a = parse(
        r#"{
            "anonkey": 1,
            "busy_polling": true,
            "ca_base": "a-ca_base",
            "chroot": "a-chroot",
            "close_spread_time": 1,
            "cluster_secret": "a-cluster_secret",
            "cpu_maps": [
                {
                    "cpu_set": "0-1",
                    "process": "1"
                }
            ],
            "crt_base": "a-crt_base",
            "daemon": true,
            "default_path": {
                "type": "config"
            },
            "description": "a-description",
            "device_atlas_options": {
                "json_file": "/etc/haproxy/da.json"
            },
            "expose_experimental_directives": true,
            "external_check": true,
            "fifty_one_degrees_options": {
                "cache_size": 100
            },
            "gid": 1,
            "grace": 1,
            "group": "a-group",
            "h1_case_adjust": [
                {
                    "from": "content-length",
                    "to": "Content-Length"
                }
            ],
            "h1_case_adjust_file": "a-h1_case_adjust_file",
            "h2_workaround_bogus_websocket_clients": true,
            "hard_stop_after": 1,
            "httpclient_resolvers_disabled": "enabled",
            "httpclient_resolvers_id": "a-httpclient_resolvers_id",
            "httpclient_resolvers_prefer": "ipv4",
            "httpclient_ssl_ca_file": "a-httpclient_ssl_ca_file",
            "httpclient_ssl_verify": "none",
            "httpclient_timeout_connect": 1,
            "insecure_fork_wanted": true,
            "insecure_setuid_wanted": true,
            "issuers_chain_path": "a-issuers_chain_path",
            "limited_quic": true,
            "load_server_state_from_file": "local",
            "localpeer": "a-localpeer",
            "log_send_hostname": {
                "enabled": "enabled"
            },
            "log_tag": "a-log_tag",
            "log_target_list": [
                {
                    "address": "/dev/log",
                    "facility": "local0"
                }
            ],
            "lua_options": {
                "load_per_thread": "a.lua"
            },
            "master_worker": true,
            "max_spread_checks": 1,
            "maxcompcpuusage": 1,
            "maxcomprate": 1,
            "maxconn": 1,
            "maxconnrate": 1,
            "maxpipes": 1,
            "maxsessrate": 1,
            "maxsslconn": 1,
            "maxsslrate": 1,
            "maxzlibmem": 1,
            "mworker_max_reloads": 1,
            "nbthread": 1,
            "no_quic": true,
            "node": "a-node",
            "noepoll": true,
            "noevports": true,
            "nogetaddrinfo": true,
            "nokqueue": true,
            "nopoll": true,
            "noreuseport": true,
            "nosplice": true,
            "numa_cpu_mapping": "enabled",
            "ocsp_update_options": {
                "mode": "enabled",
                "mindelay": 300
            },
            "pidfile": "a-pidfile",
            "pp2_never_send_local": true,
            "prealloc_fd": true,
            "presetenv": [
                {
                    "name": "TZ",
                    "value": "UTC"
                }
            ],
            "profiling_tasks": "auto",
            "quiet": true,
            "resetenv": "a-resetenv",
            "runtime_apis": [
                {
                    "address": "/var/run/haproxy.sock",
                    "level": "admin",
                    "mode": "660"
                }
            ],
            "server_state_base": "a-server_state_base",
            "server_state_file": "a-server_state_file",
            "set_dumpable": true,
            "set_var": [
                {
                    "name": "proc.tier",
                    "expr": "str(a)"
                }
            ],
            "set_var_fmt": [
                {
                    "name": "proc.host",
                    "format": "%[env(HOST)]"
                }
            ],
            "setenv": [
                {
                    "name": "TZ",
                    "value": "UTC"
                }
            ],
            "spread_checks": 1,
            "ssl_default_bind_ciphers": "a-ssl_default_bind_ciphers",
            "ssl_default_bind_ciphersuites": "a-ssl_default_bind_ciphersuites",
            "ssl_default_bind_client_sigalgs": "a-ssl_default_bind_client_sigalgs",
            "ssl_default_bind_curves": "a-ssl_default_bind_curves",
            "ssl_default_bind_options": "a-ssl_default_bind_options",
            "ssl_default_bind_sigalgs": "a-ssl_default_bind_sigalgs",
            "ssl_default_server_ciphers": "a-ssl_default_server_ciphers",
            "ssl_default_server_ciphersuites": "a-ssl_default_server_ciphersuites",
            "ssl_default_server_client_sigalgs": "a-ssl_default_server_client_sigalgs",
            "ssl_default_server_curves": "a-ssl_default_server_curves",
            "ssl_default_server_options": "a-ssl_default_server_options",
            "ssl_default_server_sigalgs": "a-ssl_default_server_sigalgs",
            "ssl_dh_param_file": "a-ssl_dh_param_file",
            "ssl_engines": [
                {
                    "name": "rdrand"
                }
            ],
            "ssl_load_extra_files": "a-ssl_load_extra_files",
            "ssl_mode_async": true,
            "ssl_propquery": "a-ssl_propquery",
            "ssl_provider": "a-ssl_provider",
            "ssl_provider_path": "a-ssl_provider_path",
            "ssl_security_level": 1,
            "ssl_server_verify": "none",
            "ssl_skip_self_issued_ca": true,
            "stats_file": "a-stats_file",
            "stats_maxconn": 1,
            "stats_timeout": 1,
            "strict_limits": true,
            "thread_group_lines": [
                {
                    "group": "1",
                    "num_or_range": "1-4"
                }
            ],
            "thread_groups": 1,
            "tune_options": {
                "bufsize": 16384
            },
            "uid": 1,
            "ulimit_n": 1,
            "unsetenv": "a-unsetenv",
            "user": "a-user",
            "wurfl_options": {
                "data_file": "/etc/haproxy/a.zip"
            },
            "zero_warning": true,
            "metadata": {
                "owner": "team-a"
            }
        }"#,
    );
    let b = parse(
        r#"{
            "anonkey": 2,
            "busy_polling": false,
            "ca_base": "b-ca_base",
            "chroot": "b-chroot",
            "close_spread_time": 2,
            "cluster_secret": "b-cluster_secret",
            "cpu_maps": [
                {
                    "cpu_set": "0-3",
                    "process": "1"
                }
            ],
            "crt_base": "b-crt_base",
            "daemon": false,
            "default_path": {
                "type": "origin",
                "path": "/etc/haproxy"
            },
            "description": "b-description",
            "device_atlas_options": {
                "json_file": "/etc/haproxy/da2.json",
                "log_level": 1
            },
            "expose_experimental_directives": false,
            "external_check": false,
            "fifty_one_degrees_options": {
                "cache_size": 200
            },
            "gid": 2,
            "grace": 2,
            "group": "b-group",
            "h1_case_adjust": [
                {
                    "from": "x-forwarded-for",
                    "to": "X-Forwarded-For"
                },
                {
                    "from": "host",
                    "to": "Host"
                }
            ],
            "h1_case_adjust_file": "b-h1_case_adjust_file",
            "h2_workaround_bogus_websocket_clients": false,
            "hard_stop_after": 2,
            "httpclient_resolvers_disabled": "disabled",
            "httpclient_resolvers_id": "b-httpclient_resolvers_id",
            "httpclient_resolvers_prefer": "ipv6",
            "httpclient_ssl_ca_file": "b-httpclient_ssl_ca_file",
            "httpclient_ssl_verify": "required",
            "httpclient_timeout_connect": 2,
            "insecure_fork_wanted": false,
            "insecure_setuid_wanted": false,
            "issuers_chain_path": "b-issuers_chain_path",
            "limited_quic": false,
            "load_server_state_from_file": "none",
            "localpeer": "b-localpeer",
            "log_send_hostname": {
                "enabled": "disabled",
                "param": "lb1"
            },
            "log_tag": "b-log_tag",
            "log_target_list": [
                {
                    "address": "127.0.0.1:514",
                    "facility": "local1",
                    "level": "info"
                },
                {
                    "address": "/dev/log",
                    "facility": "local2"
                }
            ],
            "lua_options": {
                "load_per_thread": "b.lua",
                "loads": [
                    {
                        "file": "c.lua"
                    }
                ]
            },
            "master_worker": false,
            "max_spread_checks": 2,
            "maxcompcpuusage": 2,
            "maxcomprate": 2,
            "maxconn": 2,
            "maxconnrate": 2,
            "maxpipes": 2,
            "maxsessrate": 2,
            "maxsslconn": 2,
            "maxsslrate": 2,
            "maxzlibmem": 2,
            "mworker_max_reloads": 2,
            "nbthread": 2,
            "no_quic": false,
            "node": "b-node",
            "noepoll": false,
            "noevports": false,
            "nogetaddrinfo": false,
            "nokqueue": false,
            "nopoll": false,
            "noreuseport": false,
            "nosplice": false,
            "numa_cpu_mapping": "disabled",
            "ocsp_update_options": {
                "mode": "disabled",
                "maxdelay": 3600
            },
            "pidfile": "b-pidfile",
            "pp2_never_send_local": false,
            "prealloc_fd": false,
            "presetenv": [
                {
                    "name": "LANG",
                    "value": "C"
                }
            ],
            "profiling_tasks": "off",
            "quiet": false,
            "resetenv": "b-resetenv",
            "runtime_apis": [
                {
                    "address": "127.0.0.1:9999",
                    "level": "user"
                },
                {
                    "address": "/run/api.sock",
                    "expose_fd_listeners": true
                }
            ],
            "server_state_base": "b-server_state_base",
            "server_state_file": "b-server_state_file",
            "set_dumpable": false,
            "set_var": [
                {
                    "name": "proc.tier",
                    "expr": "str(b)"
                }
            ],
            "set_var_fmt": [
                {
                    "name": "proc.node",
                    "format": "%[hostname]"
                }
            ],
            "setenv": [
                {
                    "name": "LANG",
                    "value": "C"
                }
            ],
            "spread_checks": 2,
            "ssl_default_bind_ciphers": "b-ssl_default_bind_ciphers",
            "ssl_default_bind_ciphersuites": "b-ssl_default_bind_ciphersuites",
            "ssl_default_bind_client_sigalgs": "b-ssl_default_bind_client_sigalgs",
            "ssl_default_bind_curves": "b-ssl_default_bind_curves",
            "ssl_default_bind_options": "b-ssl_default_bind_options",
            "ssl_default_bind_sigalgs": "b-ssl_default_bind_sigalgs",
            "ssl_default_server_ciphers": "b-ssl_default_server_ciphers",
            "ssl_default_server_ciphersuites": "b-ssl_default_server_ciphersuites",
            "ssl_default_server_client_sigalgs": "b-ssl_default_server_client_sigalgs",
            "ssl_default_server_curves": "b-ssl_default_server_curves",
            "ssl_default_server_options": "b-ssl_default_server_options",
            "ssl_default_server_sigalgs": "b-ssl_default_server_sigalgs",
            "ssl_dh_param_file": "b-ssl_dh_param_file",
            "ssl_engines": [
                {
                    "name": "qatengine",
                    "algorithms": "RSA"
                }
            ],
            "ssl_load_extra_files": "b-ssl_load_extra_files",
            "ssl_mode_async": false,
            "ssl_propquery": "b-ssl_propquery",
            "ssl_provider": "b-ssl_provider",
            "ssl_provider_path": "b-ssl_provider_path",
            "ssl_security_level": 2,
            "ssl_server_verify": "required",
            "ssl_skip_self_issued_ca": false,
            "stats_file": "b-stats_file",
            "stats_maxconn": 2,
            "stats_timeout": 2,
            "strict_limits": false,
            "thread_group_lines": [
                {
                    "group": "1",
                    "num_or_range": "1-8"
                }
            ],
            "thread_groups": 2,
            "tune_options": {
                "bufsize": 32768,
                "maxrewrite": 1024
            },
            "uid": 2,
            "ulimit_n": 2,
            "unsetenv": "b-unsetenv",
            "user": "b-user",
            "wurfl_options": {
                "data_file": "/etc/haproxy/b.zip"
            },
            "zero_warning": false,
            "metadata": {
                "owner": "team-b"
            }
        }"#,
    );
    (a, b)
}

pub fn tune_pair() -> (GlobalTuneOptions, GlobalTuneOptions) {
    let a = parse(
        r#"{
            "applet_zero_copy_forwarding": "enabled",
            "buffers_limit": 1,
            "buffers_reserve": 1,
            "bufsize": 1,
            "comp_maxlevel": 1,
            "disable_fast_forward": true,
            "disable_zero_copy_forwarding": true,
            "epoll_mask_events": [
                "err"
            ],
            "events_max_events_at_once": 1,
            "fail_alloc": true,
            "fd_edge_triggered": "enabled",
            "glitches_kill_cpu_usage": 1,
            "h1_zero_copy_fwd_recv": "enabled",
            "h1_zero_copy_fwd_send": "enabled",
            "h2_be_glitches_threshold": 1,
            "h2_be_initial_window_size": 1,
            "h2_be_max_concurrent_streams": 1,
            "h2_fe_glitches_threshold": 1,
            "h2_fe_initial_window_size": 1,
            "h2_fe_max_concurrent_streams": 1,
            "h2_header_table_size": 1,
            "h2_initial_window_size": 1,
            "h2_max_concurrent_streams": 1,
            "h2_max_frame_size": 1,
            "h2_zero_copy_fwd_send": "enabled",
            "http_cookielen": 1,
            "http_logurilen": 1,
            "http_maxhdr": 1,
            "idle_pool_shared": "enabled",
            "idletimer": 1,
            "listener_default_shards": "by-process",
            "listener_multi_queue": "fair",
            "lua_forced_yield": 1,
            "lua_log_loggers": "enabled",
            "lua_maxmem": 1,
            "lua_service_timeout": 1,
            "lua_session_timeout": 1,
            "lua_task_timeout": 1,
            "max_checks_per_thread": 1,
            "maxaccept": 1,
            "maxpollevents": 1,
            "maxrewrite": 1,
            "memory_hot_size": 1,
            "pattern_cache_size": 1,
            "peers_max_updates_at_once": 1,
            "pipesize": 1,
            "pool_high_fd_ratio": 1,
            "pool_low_fd_ratio": 1,
            "pt_zero_copy_forwarding": "enabled",
            "rcvbuf_backend": 1,
            "rcvbuf_client": 1,
            "rcvbuf_frontend": 1,
            "rcvbuf_server": 1,
            "recv_enough": 1,
            "ring_queues": 1,
            "runqueue_depth": 1,
            "sched_low_latency": "enabled",
            "sndbuf_backend": 1,
            "sndbuf_client": 1,
            "sndbuf_frontend": 1,
            "sndbuf_server": 1,
            "ssl_cachesize": 1,
            "ssl_capture_buffer_size": 1,
            "ssl_ctx_cache_size": 1,
            "ssl_default_dh_param": 1,
            "ssl_force_private_cache": true,
            "ssl_keylog": "enabled",
            "ssl_lifetime": 1,
            "ssl_maxrecord": 1,
            "ssl_ocsp_update_max_delay": 1,
            "ssl_ocsp_update_min_delay": 1,
            "stick_counters": 1,
            "takeover_other_tg_connections": "none",
            "zlib_memlevel": 1,
            "zlib_windowsize": 1
        }"#,
    );
    let b = parse(
        r#"{
            "applet_zero_copy_forwarding": "disabled",
            "buffers_limit": 2,
            "buffers_reserve": 2,
            "bufsize": 2,
            "comp_maxlevel": 2,
            "disable_fast_forward": false,
            "disable_zero_copy_forwarding": false,
            "epoll_mask_events": [
                "hup",
                "rdhup"
            ],
            "events_max_events_at_once": 2,
            "fail_alloc": false,
            "fd_edge_triggered": "disabled",
            "glitches_kill_cpu_usage": 2,
            "h1_zero_copy_fwd_recv": "disabled",
            "h1_zero_copy_fwd_send": "disabled",
            "h2_be_glitches_threshold": 2,
            "h2_be_initial_window_size": 2,
            "h2_be_max_concurrent_streams": 2,
            "h2_fe_glitches_threshold": 2,
            "h2_fe_initial_window_size": 2,
            "h2_fe_max_concurrent_streams": 2,
            "h2_header_table_size": 2,
            "h2_initial_window_size": 2,
            "h2_max_concurrent_streams": 2,
            "h2_max_frame_size": 2,
            "h2_zero_copy_fwd_send": "disabled",
            "http_cookielen": 2,
            "http_logurilen": 2,
            "http_maxhdr": 2,
            "idle_pool_shared": "disabled",
            "idletimer": 2,
            "listener_default_shards": "by-group",
            "listener_multi_queue": "disabled",
            "lua_forced_yield": 2,
            "lua_log_loggers": "disabled",
            "lua_maxmem": 2,
            "lua_service_timeout": 2,
            "lua_session_timeout": 2,
            "lua_task_timeout": 2,
            "max_checks_per_thread": 2,
            "maxaccept": 2,
            "maxpollevents": 2,
            "maxrewrite": 2,
            "memory_hot_size": 2,
            "pattern_cache_size": 2,
            "peers_max_updates_at_once": 2,
            "pipesize": 2,
            "pool_high_fd_ratio": 2,
            "pool_low_fd_ratio": 2,
            "pt_zero_copy_forwarding": "disabled",
            "rcvbuf_backend": 2,
            "rcvbuf_client": 2,
            "rcvbuf_frontend": 2,
            "rcvbuf_server": 2,
            "recv_enough": 2,
            "ring_queues": 2,
            "runqueue_depth": 2,
            "sched_low_latency": "disabled",
            "sndbuf_backend": 2,
            "sndbuf_client": 2,
            "sndbuf_frontend": 2,
            "sndbuf_server": 2,
            "ssl_cachesize": 2,
            "ssl_capture_buffer_size": 2,
            "ssl_ctx_cache_size": 2,
            "ssl_default_dh_param": 2,
            "ssl_force_private_cache": false,
            "ssl_keylog": "disabled",
            "ssl_lifetime": 2,
            "ssl_maxrecord": 2,
            "ssl_ocsp_update_max_delay": 2,
            "ssl_ocsp_update_min_delay": 2,
            "stick_counters": 2,
            "takeover_other_tg_connections": "full",
            "zlib_memlevel": 2,
            "zlib_windowsize": 2
        }"#,
    );
    (a, b)
}

pub fn backend_pair() -> (Backend, Backend) {
    let a = parse(
        r#"{
            "adv_check": "httpchk",
            "balance": {"algorithm": "roundrobin"},
            "check_timeout": 1000,
            "connect_timeout": 5000,
            "cookie": {"name": "SRVID"},
            "description": "api servers",
            "disabled": true,
            "email_alert": {"from": "lb@example.com", "to": "ops@example.com", "mailers": "smtp"},
            "forwardfor": {"enabled": "enabled"},
            "hash_type": {"method": "map-based"},
            "http_after_response_rule_list": [{"type": "del-header", "hdr_name": "Server"}],
            "http_connection_mode": "http-keep-alive",
            "http_keep_alive_timeout": 1000,
            "http_request_timeout": 10000,
            "httpchk_params": {"method": "GET", "uri": "/health"},
            "id": 1,
            "log_tag": "api",
            "mode": "http",
            "name": "be_api",
            "queue_timeout": 1000,
            "redispatch": {"enabled": "enabled"},
            "retries": 3,
            "server_timeout": 30000,
            "tunnel_timeout": 3600000,
            "metadata": {"owner": "team-a"}
        }"#,
    );
    let b = parse(
        r#"{
            "adv_check": "tcp-check",
            "balance": {"algorithm": "leastconn"},
            "check_timeout": 2000,
            "connect_timeout": 4000,
            "cookie": {"name": "SESSION"},
            "description": "static servers",
            "email_alert": {"from": "lb@example.com", "to": "noc@example.com", "mailers": "smtp"},
            "enabled": true,
            "forwardfor": {"enabled": "disabled"},
            "hash_type": {"method": "consistent"},
            "http_after_response_rule_list": [
                {"type": "del-header", "hdr_name": "Server"},
                {"type": "set-status", "status": 503}
            ],
            "http_connection_mode": "httpclose",
            "http_keep_alive_timeout": 2000,
            "http_request_timeout": 20000,
            "httpchk_params": {"method": "HEAD", "uri": "/health"},
            "id": 2,
            "log_tag": "static",
            "mode": "tcp",
            "name": "be_static",
            "queue_timeout": 2000,
            "redispatch": {"enabled": "disabled"},
            "retries": 5,
            "server_timeout": 60000,
            "tunnel_timeout": 7200000,
            "metadata": {"owner": "team-b"}
        }"#,
    );
    (a, b)
}

pub fn defaults_pair() -> (Defaults, Defaults) {
    let a = parse(
        r#"{
            "adv_check": "httpchk",
            "balance": {"algorithm": "roundrobin"},
            "check_timeout": 1000,
            "client_timeout": 50000,
            "connect_timeout": 5000,
            "cookie": {"name": "SRVID"},
            "dontlognull": "enabled",
            "email_alert": {"from": "lb@example.com", "to": "ops@example.com", "mailers": "smtp"},
            "forwardfor": {"enabled": "enabled"},
            "from": "base",
            "hash_type": {"function": "sdbm"},
            "http_after_response_rule_list": [{"type": "del-header", "hdr_name": "Server"}],
            "http_connection_mode": "http-keep-alive",
            "http_keep_alive_timeout": 1000,
            "http_request_timeout": 10000,
            "httpchk_params": {"uri": "/health"},
            "httplog": true,
            "log_tag": "web",
            "maxconn": 2000,
            "mode": "http",
            "name": "web",
            "queue_timeout": 1000,
            "redispatch": {"enabled": "enabled"},
            "retries": 3,
            "server_timeout": 50000,
            "tunnel_timeout": 3600000,
            "metadata": {"owner": "team-a"}
        }"#,
    );
    let b = parse(
        r#"{
            "adv_check": "mysql-check",
            "balance": {"algorithm": "source"},
            "check_timeout": 2000,
            "client_timeout": 30000,
            "connect_timeout": 4000,
            "cookie": {"name": "SESSION"},
            "dontlognull": "disabled",
            "email_alert": {"from": "lb@example.com", "to": "noc@example.com", "mailers": "smtp"},
            "forwardfor": {"enabled": "disabled"},
            "from": "common",
            "hash_type": {"function": "crc32"},
            "http_after_response_rule_list": [],
            "http_connection_mode": "http-server-close",
            "http_keep_alive_timeout": 2000,
            "http_request_timeout": 20000,
            "httpchk_params": {"uri": "/ready"},
            "log_tag": "db",
            "maxconn": 4000,
            "mode": "tcp",
            "name": "db",
            "queue_timeout": 2000,
            "redispatch": {"enabled": "disabled"},
            "retries": 5,
            "server_timeout": 30000,
            "tcplog": true,
            "tunnel_timeout": 7200000,
            "metadata": {"owner": "team-b"}
        }"#,
    );
    (a, b)
}

pub fn rule_pair() -> (HttpAfterResponseRule, HttpAfterResponseRule) {
    let a = parse(
        r#"{
            "acl_file": "/etc/haproxy/a.acl",
            "acl_keyfmt": "%[src]",
            "capture_id": 0,
            "capture_len": 10,
            "capture_sample": "res.hdr(Server)",
            "cond": "if",
            "cond_test": "{ ssl_fc }",
            "hdr_format": "max-age=31536000",
            "hdr_match": "^foo",
            "hdr_method": "GET",
            "hdr_name": "Strict-Transport-Security",
            "log_level": "info",
            "map_file": "/etc/haproxy/a.map",
            "map_keyfmt": "%[src]",
            "map_valuefmt": "%[res.hdr(X-Value)]",
            "sc_expr": "1",
            "sc_id": 0,
            "sc_idx": 0,
            "sc_int": 1,
            "status": 200,
            "status_reason": "OK",
            "strict_mode": "on",
            "type": "set-header",
            "var_expr": "res.status",
            "var_format": "%[res.status]",
            "var_name": "status",
            "var_scope": "txn",
            "metadata": {"owner": "team-a"}
        }"#,
    );
    let b = parse(
        r#"{
            "acl_file": "/etc/haproxy/b.acl",
            "acl_keyfmt": "%[dst]",
            "capture_id": 1,
            "capture_len": 20,
            "capture_sample": "res.hdr(Via)",
            "cond": "unless",
            "cond_test": "{ src 10.0.0.0/8 }",
            "hdr_format": "nosniff",
            "hdr_match": "^bar",
            "hdr_method": "POST",
            "hdr_name": "X-Content-Type-Options",
            "log_level": "debug",
            "map_file": "/etc/haproxy/b.map",
            "map_keyfmt": "%[dst]",
            "map_valuefmt": "%[res.hdr(X-Other)]",
            "sc_expr": "2",
            "sc_id": 1,
            "sc_idx": 1,
            "sc_int": 2,
            "status": 503,
            "status_reason": "Unavailable",
            "strict_mode": "off",
            "type": "add-header",
            "var_expr": "res.ver",
            "var_format": "%[res.ver]",
            "var_name": "version",
            "var_scope": "sess",
            "metadata": {"owner": "team-b"}
        }"#,
    );
    (a, b)
}

pub fn acme_pair() -> (AcmeProvider, AcmeProvider) {
    let a = parse(
        r#"{
            "account_key": "/etc/haproxy/acme/a.key",
            "bits": 2048,
            "challenge": "HTTP-01",
            "contact": "ops@example.com",
            "curves": "P-256",
            "directory": "https://acme-v02.api.letsencrypt.org/directory",
            "keytype": "RSA",
            "map": "virt@acme",
            "name": "letsencrypt",
            "metadata": {"owner": "team-a"}
        }"#,
    );
    let b = parse(
        r#"{
            "account_key": "/etc/haproxy/acme/b.key",
            "bits": 4096,
            "challenge": "DNS-01",
            "contact": "noc@example.com",
            "curves": "P-384",
            "directory": "https://acme-staging-v02.api.letsencrypt.org/directory",
            "keytype": "ECDSA",
            "map": "staging@acme",
            "name": "staging",
            "metadata": {"owner": "team-b"}
        }"#,
    );
    (a, b)
}

pub fn email_alert_pair() -> (EmailAlert, EmailAlert) {
    let a = parse(
        r#"{
            "from": "lb@example.com",
            "level": "alert",
            "mailers": "smtp",
            "myhostname": "lb1",
            "to": "ops@example.com",
            "metadata": {"owner": "team-a"}
        }"#,
    );
    let b = parse(
        r#"{
            "from": "lb2@example.com",
            "level": "notice",
            "mailers": "smtp_backup",
            "myhostname": "lb2",
            "to": "noc@example.com",
            "metadata": {"owner": "team-b"}
        }"#,
    );
    (a, b)
}

pub fn lua_pair() -> (LuaOptions, LuaOptions) {
    let a = parse(
        r#"{
            "loads": [{"file": "/etc/haproxy/a.lua"}],
            "load_per_thread": "/etc/haproxy/t.lua",
            "prepend_path": [{"name": "/usr/share/lua/?.lua", "type": "path"}]
        }"#,
    );
    let b = parse(
        r#"{
            "loads": [{"file": "/etc/haproxy/a.lua"}, {"file": "/etc/haproxy/b.lua"}],
            "load_per_thread": "/etc/haproxy/u.lua",
            "prepend_path": []
        }"#,
    );
    (a, b)
}

pub fn ocsp_pair() -> (OcspUpdateOptions, OcspUpdateOptions) {
    let a = parse(
        r#"{
            "disable": true,
            "httpproxy": {"address": "10.0.0.1", "port": 3128},
            "maxdelay": 3600,
            "mindelay": 300,
            "mode": "enabled"
        }"#,
    );
    let b = parse(
        r#"{
            "disable": false,
            "httpproxy": {"address": "10.0.0.2", "port": 8080},
            "maxdelay": 7200,
            "mindelay": 600,
            "mode": "disabled"
        }"#,
    );
    (a, b)
}
