use crate::common::Toggle;
use crate::validate::{Validate, ValidationContext, Validator};
use crate::{comparable, is_false, leaf_comparable};
use dpapi_error::ValidationErrors;
use serde::{Deserialize, Serialize};

/// `tune.*` directives of the `global` section.
///
/// Sizes are in bytes unless stated otherwise. Every directive is optional
/// and falls back to the HAProxy built-in value when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalTuneOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applet_zero_copy_forwarding: Option<Toggle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffers_limit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffers_reserve: Option<i64>,

    /// Bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bufsize: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comp_maxlevel: Option<i64>,

    #[serde(skip_serializing_if = "is_false")]
    pub disable_fast_forward: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub disable_zero_copy_forwarding: bool,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub epoll_mask_events: Vec<EpollEvent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_max_events_at_once: Option<i64>,

    #[serde(skip_serializing_if = "is_false")]
    pub fail_alloc: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fd_edge_triggered: Option<Toggle>,

    /// Percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glitches_kill_cpu_usage: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub h1_zero_copy_fwd_recv: Option<Toggle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub h1_zero_copy_fwd_send: Option<Toggle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub h2_be_glitches_threshold: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub h2_be_initial_window_size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub h2_be_max_concurrent_streams: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub h2_fe_glitches_threshold: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub h2_fe_initial_window_size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub h2_fe_max_concurrent_streams: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub h2_header_table_size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub h2_initial_window_size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub h2_max_concurrent_streams: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub h2_max_frame_size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub h2_zero_copy_fwd_send: Option<Toggle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_cookielen: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_logurilen: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_maxhdr: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_pool_shared: Option<Toggle>,

    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idletimer: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub listener_default_shards: Option<ListenerShards>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub listener_multi_queue: Option<ListenerMultiQueue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lua_forced_yield: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lua_log_loggers: Option<Toggle>,

    /// Megabytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lua_maxmem: Option<i64>,

    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lua_service_timeout: Option<i64>,

    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lua_session_timeout: Option<i64>,

    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lua_task_timeout: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_checks_per_thread: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxaccept: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxpollevents: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxrewrite: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_hot_size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_cache_size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub peers_max_updates_at_once: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipesize: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_high_fd_ratio: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_low_fd_ratio: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pt_zero_copy_forwarding: Option<Toggle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rcvbuf_backend: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rcvbuf_client: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rcvbuf_frontend: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rcvbuf_server: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recv_enough: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ring_queues: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub runqueue_depth: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sched_low_latency: Option<Toggle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sndbuf_backend: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sndbuf_client: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sndbuf_frontend: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sndbuf_server: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_cachesize: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_capture_buffer_size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_ctx_cache_size: Option<i64>,

    /// Bits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_default_dh_param: Option<i64>,

    #[serde(skip_serializing_if = "is_false")]
    pub ssl_force_private_cache: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_keylog: Option<Toggle>,

    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_lifetime: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_maxrecord: Option<i64>,

    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_ocsp_update_max_delay: Option<i64>,

    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_ocsp_update_min_delay: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stick_counters: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub takeover_other_tg_connections: Option<TakeoverPolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zlib_memlevel: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zlib_windowsize: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpollEvent {
    Err,
    Hup,
    Rdhup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListenerShards {
    ByProcess,
    ByThread,
    ByGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListenerMultiQueue {
    Enabled,
    Fair,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TakeoverPolicy {
    None,
    Restricted,
    Full,
}

leaf_comparable!(EpollEvent, ListenerShards, ListenerMultiQueue, TakeoverPolicy);

comparable!(GlobalTuneOptions {
    applet_zero_copy_forwarding,
    buffers_limit,
    buffers_reserve,
    bufsize,
    comp_maxlevel,
    disable_fast_forward,
    disable_zero_copy_forwarding,
    epoll_mask_events,
    events_max_events_at_once,
    fail_alloc,
    fd_edge_triggered,
    glitches_kill_cpu_usage,
    h1_zero_copy_fwd_recv,
    h1_zero_copy_fwd_send,
    h2_be_glitches_threshold,
    h2_be_initial_window_size,
    h2_be_max_concurrent_streams,
    h2_fe_glitches_threshold,
    h2_fe_initial_window_size,
    h2_fe_max_concurrent_streams,
    h2_header_table_size,
    h2_initial_window_size,
    h2_max_concurrent_streams,
    h2_max_frame_size,
    h2_zero_copy_fwd_send,
    http_cookielen,
    http_logurilen,
    http_maxhdr,
    idle_pool_shared,
    idletimer,
    listener_default_shards,
    listener_multi_queue,
    lua_forced_yield,
    lua_log_loggers,
    lua_maxmem,
    lua_service_timeout,
    lua_session_timeout,
    lua_task_timeout,
    max_checks_per_thread,
    maxaccept,
    maxpollevents,
    maxrewrite,
    memory_hot_size,
    pattern_cache_size,
    peers_max_updates_at_once,
    pipesize,
    pool_high_fd_ratio,
    pool_low_fd_ratio,
    pt_zero_copy_forwarding,
    rcvbuf_backend,
    rcvbuf_client,
    rcvbuf_frontend,
    rcvbuf_server,
    recv_enough,
    ring_queues,
    runqueue_depth,
    sched_low_latency,
    sndbuf_backend,
    sndbuf_client,
    sndbuf_frontend,
    sndbuf_server,
    ssl_cachesize,
    ssl_capture_buffer_size,
    ssl_ctx_cache_size,
    ssl_default_dh_param,
    ssl_force_private_cache,
    ssl_keylog,
    ssl_lifetime,
    ssl_maxrecord,
    ssl_ocsp_update_max_delay,
    ssl_ocsp_update_min_delay,
    stick_counters,
    takeover_other_tg_connections,
    zlib_memlevel,
    zlib_windowsize,
});

impl Validate for GlobalTuneOptions {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        let mut v = Validator::new(ctx);
        v.minimum_opt("buffers_limit", self.buffers_limit, 1)
            .minimum_opt("buffers_reserve", self.buffers_reserve, 2)
            .minimum_opt("bufsize", self.bufsize, 1024)
            .range("comp_maxlevel", self.comp_maxlevel, 1, 9)
            .range("events_max_events_at_once", self.events_max_events_at_once, 1, 10000)
            .range("glitches_kill_cpu_usage", self.glitches_kill_cpu_usage, 0, 100)
            .minimum_opt("h2_be_glitches_threshold", self.h2_be_glitches_threshold, 0)
            .minimum_opt("h2_be_initial_window_size", self.h2_be_initial_window_size, 0)
            .minimum_opt("h2_be_max_concurrent_streams", self.h2_be_max_concurrent_streams, 0)
            .minimum_opt("h2_fe_glitches_threshold", self.h2_fe_glitches_threshold, 0)
            .minimum_opt("h2_fe_initial_window_size", self.h2_fe_initial_window_size, 0)
            .minimum_opt("h2_fe_max_concurrent_streams", self.h2_fe_max_concurrent_streams, 0)
            .range("h2_header_table_size", self.h2_header_table_size, 0, 65535)
            .minimum_opt("h2_initial_window_size", self.h2_initial_window_size, 0)
            .minimum_opt("h2_max_concurrent_streams", self.h2_max_concurrent_streams, 0)
            .minimum_opt("h2_max_frame_size", self.h2_max_frame_size, 0)
            .minimum_opt("http_cookielen", self.http_cookielen, 0)
            .minimum_opt("http_logurilen", self.http_logurilen, 0)
            .range("http_maxhdr", self.http_maxhdr, 1, 32767)
            .range("idletimer", self.idletimer, 0, 65535)
            .minimum_opt("lua_forced_yield", self.lua_forced_yield, 0)
            .minimum_opt("lua_maxmem", self.lua_maxmem, 0)
            .minimum_opt("lua_service_timeout", self.lua_service_timeout, 0)
            .minimum_opt("lua_session_timeout", self.lua_session_timeout, 0)
            .minimum_opt("lua_task_timeout", self.lua_task_timeout, 0)
            .minimum_opt("max_checks_per_thread", self.max_checks_per_thread, 0)
            .minimum_opt("maxpollevents", self.maxpollevents, 0)
            .minimum_opt("maxrewrite", self.maxrewrite, 0)
            .minimum_opt("memory_hot_size", self.memory_hot_size, 0)
            .minimum_opt("pattern_cache_size", self.pattern_cache_size, 0)
            .minimum_opt("peers_max_updates_at_once", self.peers_max_updates_at_once, 1)
            .minimum_opt("pipesize", self.pipesize, 0)
            .range("pool_high_fd_ratio", self.pool_high_fd_ratio, 0, 100)
            .range("pool_low_fd_ratio", self.pool_low_fd_ratio, 0, 100)
            .minimum_opt("rcvbuf_backend", self.rcvbuf_backend, 0)
            .minimum_opt("rcvbuf_client", self.rcvbuf_client, 0)
            .minimum_opt("rcvbuf_frontend", self.rcvbuf_frontend, 0)
            .minimum_opt("rcvbuf_server", self.rcvbuf_server, 0)
            .minimum_opt("recv_enough", self.recv_enough, 0)
            .minimum_opt("ring_queues", self.ring_queues, 0)
            .minimum_opt("runqueue_depth", self.runqueue_depth, 0)
            .minimum_opt("sndbuf_backend", self.sndbuf_backend, 0)
            .minimum_opt("sndbuf_client", self.sndbuf_client, 0)
            .minimum_opt("sndbuf_frontend", self.sndbuf_frontend, 0)
            .minimum_opt("sndbuf_server", self.sndbuf_server, 0)
            .minimum_opt("ssl_cachesize", self.ssl_cachesize, 0)
            .minimum_opt("ssl_capture_buffer_size", self.ssl_capture_buffer_size, 0)
            .minimum_opt("ssl_ctx_cache_size", self.ssl_ctx_cache_size, 0)
            .minimum_opt("ssl_default_dh_param", self.ssl_default_dh_param, 0)
            .minimum_opt("ssl_lifetime", self.ssl_lifetime, 0)
            .minimum_opt("ssl_maxrecord", self.ssl_maxrecord, 0)
            .minimum_opt("ssl_ocsp_update_max_delay", self.ssl_ocsp_update_max_delay, 0)
            .minimum_opt("ssl_ocsp_update_min_delay", self.ssl_ocsp_update_min_delay, 0)
            .minimum_opt("stick_counters", self.stick_counters, 0)
            .range("zlib_memlevel", self.zlib_memlevel, 1, 9)
            .range("zlib_windowsize", self.zlib_windowsize, 8, 15);

        if let (Some(low), Some(high)) = (self.pool_low_fd_ratio, self.pool_high_fd_ratio) {
            if low > high {
                v.invalid("pool_low_fd_ratio", "must not exceed pool_high_fd_ratio");
            }
        }
        if let (Some(bufsize), Some(maxrewrite)) = (self.bufsize, self.maxrewrite) {
            if maxrewrite >= bufsize {
                v.invalid("maxrewrite", "must be smaller than bufsize");
            }
        }
        v.finish()
    }
}
