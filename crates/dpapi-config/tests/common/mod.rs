#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const GLOBAL_YAML: &str = r#"
global:
  daemon: true
  master_worker: true
  maxconn: 4096
  nbthread: 4
  log_send_hostname:
    enabled: enabled
    param: lb1
  runtime_apis:
    - address: /var/run/haproxy.sock
      level: admin
      mode: "660"
  tune_options:
    bufsize: 32768
    maxrewrite: 1024
"#;

pub const DEFAULTS_YAML: &str = r#"
defaults:
  - name: web
    mode: http
    httplog: true
    client_timeout: 50000
    connect_timeout: 5000
    server_timeout: 50000
    forwardfor:
      enabled: enabled
"#;

pub const BACKENDS_JSON: &str = r#"{
  "backends": [
    {
      "name": "be_api",
      "mode": "http",
      "balance": {"algorithm": "roundrobin"},
      "cookie": {"name": "SRVID", "type": "insert", "indirect": true},
      "http_after_response_rule_list": [
        {"type": "del-header", "hdr_name": "Server"}
      ]
    },
    {
      "name": "be_static",
      "mode": "http",
      "balance": {"algorithm": "leastconn"}
    }
  ],
  "acme_providers": [
    {
      "name": "letsencrypt",
      "directory": "https://acme-v02.api.letsencrypt.org/directory",
      "keytype": "ECDSA",
      "curves": "P-256"
    }
  ]
}"#;

/// A fresh directory under the system temp dir, removed on drop.
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("dpapi-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&path);
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let file = self.path.join(relative);
        if let Some(parent) = file.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&file, content).unwrap();
        file
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
