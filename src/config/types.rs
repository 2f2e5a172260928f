//! Configuration values for the server, the pool, and the SQL objects the store talks to.

/// Table and stored-routine names. Each is a validated, optionally schema-qualified identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreNames {
    pub table: String,
    pub procedure: String,
    pub function: String,
}

impl Default for StoreNames {
    fn default() -> Self {
        Self {
            table: "students".into(),
            procedure: "tambah_student".into(),
            function: "fungsi_tambah_student".into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    /// Upper bound on JSON request bodies.
    pub body_limit_bytes: usize,
    pub names: StoreNames,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "postgres://localhost/students".into(),
            host: "0.0.0.0".into(),
            port: 8080,
            max_connections: 5,
            acquire_timeout_secs: 5,
            body_limit_bytes: 64 * 1024,
            names: StoreNames::default(),
        }
    }
}

impl AppConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
