//! Default configuration values

pub struct HttpDefaults;

impl HttpDefaults {
    pub const HOST: &'static str = "127.0.0.1";
    pub const PORT: u16 = 3000;
    pub const LOG_REQUESTS: bool = true;
    /// Largest request body read into memory (2 MiB)
    pub const MAX_REQUEST_BODY: usize = 2 * 1024 * 1024;
}
