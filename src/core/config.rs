use crate::core::error::{Error, ErrorKind, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub parallel_fit: bool,          // Spread the per-term PMI loop over rayon
    pub workers: usize,              // Threads in the fit pool
    pub progress_interval: usize,    // Log fit progress every N terms
    pub pos_separator: char,         // Marker between word and POS tag
    pub default_top_n: usize,        // Rows returned by most_common()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            parallel_fit: true,
            workers: num_cpus::get(),
            progress_interval: 1000,
            pos_separator: '/',
            default_top_n: 100,
        }
    }
}

impl Config {
    pub fn with_parallel_fit(mut self, parallel: bool) -> Self {
        self.parallel_fit = parallel;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    pub fn with_pos_separator(mut self, separator: char) -> Self {
        self.pos_separator = separator;
        self
    }

    pub fn with_default_top_n(mut self, n: usize) -> Self {
        self.default_top_n = n;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::new(ErrorKind::InvalidArgument, "workers must be at least 1"));
        }
        if self.progress_interval == 0 {
            return Err(Error::new(ErrorKind::InvalidArgument, "progress_interval must be at least 1"));
        }
        if self.default_top_n == 0 {
            return Err(Error::new(ErrorKind::InvalidArgument, "default_top_n must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn zero_workers_rejected() {
        let err = Config::default().with_workers(0).validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
