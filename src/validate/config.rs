//! Configuration for validation operations

/// Tables smaller than this are always scanned on the calling thread
pub const PARALLEL_MIN_ORDER: usize = 32;

/// Configuration for table validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Number of threads for the associativity scan (0 = auto-detect)
    pub threads: usize,
    /// Whether to use parallel scanning (false = single-threaded everything)
    pub parallel: bool,
    /// Reject tables with more elements than this before any check runs
    pub max_order: Option<usize>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            threads: 0, // Auto-detect CPU cores
            parallel: true,
            max_order: None,
        }
    }
}

impl ValidationConfig {
    pub fn new(threads: usize, parallel: bool) -> Self {
        Self {
            threads,
            parallel,
            max_order: None,
        }
    }

    /// Single-threaded configuration used by the plain query functions
    pub fn sequential() -> Self {
        Self::new(1, false)
    }

    pub fn with_max_order(mut self, max_order: usize) -> Self {
        self.max_order = Some(max_order);
        self
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let threads = matches
            .get_one::<String>("threads")
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);

        let parallel = !matches.get_flag("no-parallel");

        let max_order = matches
            .get_one::<String>("max-order")
            .and_then(|s| s.parse().ok());

        Self {
            threads,
            parallel,
            max_order,
        }
    }

    /// Get effective thread count (auto-detect if 0)
    pub fn effective_threads(&self) -> usize {
        match (self.parallel, self.threads) {
            (false, _) => 1, // Sequential mode always uses single thread
            (true, 0) => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            (true, n) => n,
        }
    }

    /// Whether a table of `order` elements gets the parallel scan
    pub fn scans_in_parallel(&self, order: usize) -> bool {
        self.parallel && self.effective_threads() > 1 && order >= PARALLEL_MIN_ORDER
    }
}
