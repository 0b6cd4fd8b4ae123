//! Run configuration

/// Settings accepted from the command line
///
/// Link generation makes no requests, so none of these change what gets
/// built or exported. They are kept so existing invocations still parse.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Seconds to wait between requests
    pub rate_limit_secs: u64,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Verbose output requested
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            rate_limit_secs: crate::DEFAULT_RATE_LIMIT_SECS,
            timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
            verbose: false,
        }
    }
}

impl RunConfig {
    pub fn with_rate_limit(mut self, secs: u64) -> Self {
        self.rate_limit_secs = secs;
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
