//! Domain-to-pixel scales for chart layout.

/// Linear map from a numeric domain to a pixel range.
///
/// The range may be inverted (e.g. `[height, 0]` for a y axis). A degenerate
/// domain maps every input to the range midpoint.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self {
            d0: domain[0],
            d1: domain[1],
            r0: range[0],
            r1: range[1],
        }
    }

    pub fn domain(&self) -> [f64; 2] {
        [self.d0, self.d1]
    }

    pub fn range(&self) -> [f64; 2] {
        [self.r0, self.r1]
    }

    /// Map a domain value to the pixel range.
    pub fn scale(&self, v: f64) -> f64 {
        if self.d1 == self.d0 {
            return (self.r0 + self.r1) / 2.0;
        }
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    /// Step between ticks toward `target` tick count, snapped to 1/2/5/10
    /// times a power of ten.
    pub fn tick_step(&self, target: usize) -> f64 {
        nice_step((self.d1 - self.d0).abs(), target)
    }

    /// Tick values inside the domain, ascending, on multiples of the nice
    /// step. A degenerate domain yields the single domain value.
    pub fn ticks(&self, target: usize) -> Vec<f64> {
        let (lo, hi) = if self.d0 <= self.d1 {
            (self.d0, self.d1)
        } else {
            (self.d1, self.d0)
        };
        if lo == hi {
            return vec![lo];
        }
        let step = self.tick_step(target);
        let first = (lo / step).ceil() as i64;
        let last = (hi / step + 1e-9).floor() as i64;
        (first..=last).map(|k| k as f64 * step).collect()
    }
}

/// Categorical band layout: `n` equal slots across a pixel range with
/// fractional padding between and around the bands, centered.
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    n: usize,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(n: usize, range: [f64; 2], padding: f64) -> Self {
        let span = range[1] - range[0];
        let slots = (n as f64 - padding + 2.0 * padding).max(1.0);
        let step = span / slots;
        // Center the bands in whatever space the outer padding leaves over.
        let start = range[0] + (span - step * (n as f64 - padding)) / 2.0;
        Self {
            n,
            start,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Left edge of band `i`.
    pub fn position(&self, i: usize) -> f64 {
        self.start + self.step * i as f64
    }

    /// Width of every band.
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Center of band `i`, where its axis tick and label sit.
    pub fn center(&self, i: usize) -> f64 {
        self.position(i) + self.bandwidth / 2.0
    }
}

/// Snap a raw step to 1, 2, 5, or 10 times a power of ten.
fn nice_step(span: f64, target_steps: usize) -> f64 {
    let raw_step = span / target_steps.max(1) as f64;
    if raw_step <= 0.0 || !raw_step.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;

    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}

/// Format a tick value with just enough decimals for the step size.
pub(crate) fn tick_label(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 || step <= 0.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    format!("{value:.decimals$}")
}

#[cfg(test)]
#[path = "scale_tests.rs"]
mod tests;
