use crate::data::axis::ScaleDomain;

#[derive(Clone, Debug)]
pub struct LinearScaleConfig {
    pub domain: (f64, f64),
    pub range: (f64, f64),
    pub clamp: bool,
}

impl Default for LinearScaleConfig {
    fn default() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
            clamp: false,
        }
    }
}

/// A linear scale that maps numeric input values from a domain to a range.
#[derive(Clone, Debug)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    clamp: bool,
}

impl LinearScale {
    pub fn new(config: &LinearScaleConfig) -> Self {
        Self {
            domain_start: config.domain.0,
            domain_end: config.domain.1,
            range_start: config.range.0,
            range_end: config.range.1,
            clamp: config.clamp,
        }
    }

    /// Scale over a padded axis domain onto the unit interval.
    pub fn unit(domain: ScaleDomain) -> Self {
        Self::new(&LinearScaleConfig::default()).with_domain((domain.min, domain.max))
    }

    pub fn with_domain(mut self, domain: (f64, f64)) -> Self {
        self.domain_start = domain.0;
        self.domain_end = domain.1;
        self
    }

    pub fn with_range(mut self, range: (f64, f64)) -> Self {
        self.range_start = range.0;
        self.range_end = range.1;
        self
    }

    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    fn is_degenerate(&self) -> bool {
        self.domain_start == self.domain_end
            || self.range_start == self.range_end
            || self.domain_start.is_nan()
            || self.domain_end.is_nan()
            || self.range_start.is_nan()
            || self.range_end.is_nan()
    }

    /// Maps a domain value into the range.
    pub fn scale(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return self.range_start;
        }
        let k = (self.range_end - self.range_start) / (self.domain_end - self.domain_start);
        let out = self.range_start + k * (value - self.domain_start);
        if self.clamp {
            let (lo, hi) = if self.range_start <= self.range_end {
                (self.range_start, self.range_end)
            } else {
                (self.range_end, self.range_start)
            };
            out.clamp(lo, hi)
        } else {
            out
        }
    }

    /// Maps a range value back into the domain.
    pub fn invert(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return self.domain_start;
        }
        let k = (self.domain_end - self.domain_start) / (self.range_end - self.range_start);
        let out = self.domain_start + k * (value - self.range_start);
        if self.clamp {
            let (lo, hi) = if self.domain_start <= self.domain_end {
                (self.domain_start, self.domain_end)
            } else {
                (self.domain_end, self.domain_start)
            };
            out.clamp(lo, hi)
        } else {
            out
        }
    }

    /// Position of `value` within the domain, 0 at the start and 1 at the end.
    pub fn normalize(&self, value: f64) -> f64 {
        if self.domain_start == self.domain_end || self.domain_start.is_nan() || self.domain_end.is_nan() {
            return 0.0;
        }
        (value - self.domain_start) / (self.domain_end - self.domain_start)
    }
}
