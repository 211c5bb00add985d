//! Growth-rate estimation
//!
//! Given (n, cost) samples, each candidate class is scored by how constant the
//! ratio `cost / scale(n)` stays across the samples. The class whose ratio
//! varies least (smallest coefficient of variation) is the best fit.
//!
//! Costs may be operation counts (deterministic) or elapsed seconds
//! (noisy, illustrative only).

use bigo_core::{
    BigOError, BigOResult, ComplexityClass, ExampleFunction, Input, InputKind, NullSink,
};

use crate::{Clock, TimingHarness};

/// Samples needed before a fit is attempted
pub const MIN_SAMPLES: usize = 2;

/// One observation: input magnitude and its cost
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthSample {
    pub n: u64,
    pub cost: f64,
}

impl GrowthSample {
    /// Sample of cost at input magnitude n
    pub fn new(n: u64, cost: f64) -> Self {
        GrowthSample { n, cost }
    }
}

/// Input sizes for a sweep
///
/// The default ladder goes up to 10^9 and is meant for size-argument
/// functions. A sequence input of that length is an 8 GB `Vec<f64>`; use
/// [`SweepConfig::for_sequences`] (or [`SweepConfig::for_kind`]) there.
#[derive(Clone, Debug)]
pub struct SweepConfig {
    pub sizes: Vec<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            sizes: vec![1_000, 1_000_000, 1_000_000_000],
        }
    }
}

impl SweepConfig {
    /// Ladder for sequence inputs, largest input 80 MB
    pub fn for_sequences() -> Self {
        SweepConfig {
            sizes: vec![1_000, 100_000, 10_000_000],
        }
    }

    /// Default ladder for size inputs, the sequence ladder otherwise
    pub fn for_kind(kind: InputKind) -> Self {
        match kind {
            InputKind::Size => Self::default(),
            InputKind::Numbers => Self::for_sequences(),
        }
    }

    /// Small ladder that finishes instantly even for quadratic functions
    pub fn quick() -> Self {
        SweepConfig {
            sizes: vec![10, 100, 1_000, 10_000],
        }
    }
}

/// How well one class explains the samples
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassFit {
    pub class: ComplexityClass,
    /// Mean of cost / scale(n)
    pub coefficient: f64,
    /// Coefficient of variation of cost / scale(n); lower is better
    pub spread: f64,
}

/// Fits for every class, plus the winner
#[derive(Clone, Debug)]
pub struct GrowthReport {
    pub best: ComplexityClass,
    pub fits: Vec<ClassFit>,
}

impl GrowthReport {
    /// Fit computed for one class
    pub fn fit_for(&self, class: ComplexityClass) -> Option<&ClassFit> {
        self.fits.iter().find(|f| f.class == class)
    }
}

fn fit_class(class: ComplexityClass, samples: &[GrowthSample]) -> ClassFit {
    let ratios: Vec<f64> = samples
        .iter()
        .map(|s| s.cost / class.scale(s.n as f64))
        .collect();
    let count = ratios.len() as f64;
    let mean = ratios.iter().sum::<f64>() / count;
    let variance = ratios.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / count;

    let spread = if mean > 0.0 {
        variance.sqrt() / mean
    } else if variance == 0.0 {
        // all costs zero: flat
        0.0
    } else {
        f64::INFINITY
    };

    ClassFit {
        class,
        coefficient: mean,
        spread,
    }
}

/// Score every class against the samples
///
/// Samples with n < 2 are ignored (log2 n would be zero there).
pub fn fit(samples: &[GrowthSample]) -> BigOResult<GrowthReport> {
    let usable: Vec<GrowthSample> = samples
        .iter()
        .copied()
        .filter(|s| s.n >= 2 && s.cost.is_finite() && s.cost >= 0.0)
        .collect();
    if usable.len() < MIN_SAMPLES {
        return Err(BigOError::InsufficientSamples {
            needed: MIN_SAMPLES,
            got: usable.len(),
        });
    }

    let fits: Vec<ClassFit> = ComplexityClass::ALL
        .iter()
        .map(|&class| fit_class(class, &usable))
        .collect();

    // Ties go to the slower-growing class, which comes first
    let mut best = fits[0];
    for candidate in &fits[1..] {
        if candidate.spread < best.spread {
            best = *candidate;
        }
    }

    tracing::debug!(
        samples = usable.len(),
        best = best.class.notation(),
        spread = best.spread,
        "growth fit"
    );

    Ok(GrowthReport {
        best: best.class,
        fits,
    })
}

/// Best-fitting class for the samples
pub fn classify(samples: &[GrowthSample]) -> BigOResult<ComplexityClass> {
    fit(samples).map(|report| report.best)
}

/// Deterministic samples from a function's operation-count model
pub fn operation_series(function: &ExampleFunction, sizes: &[u64]) -> Vec<GrowthSample> {
    sizes
        .iter()
        .map(|&n| GrowthSample::new(n, function.operations(n) as f64))
        .collect()
}

/// Default input of magnitude n for a catalog entry
///
/// Sequence inputs are materialized: n elements of 8 bytes each.
pub fn input_of_size(kind: InputKind, n: u64) -> Input {
    match kind {
        InputKind::Size => Input::Size(n.min(i64::MAX as u64) as i64),
        InputKind::Numbers => Input::Numbers((0..n).map(|v| v as f64).collect()),
    }
}

/// Wall-clock samples: one timed call per size, output discarded
///
/// Illustrative only. Results depend on the machine and its load.
pub fn timing_series<C, F>(
    harness: &TimingHarness<C>,
    function: &ExampleFunction,
    sizes: &[u64],
    mut make_input: F,
) -> BigOResult<Vec<GrowthSample>>
where
    C: Clock,
    F: FnMut(u64) -> Input,
{
    let mut samples = Vec::with_capacity(sizes.len());
    for &n in sizes {
        let input = make_input(n);
        let (_, result) = harness.measure_function(function, &input, &mut NullSink)?;
        tracing::debug!(
            function = function.name(),
            n,
            elapsed_secs = result.elapsed_seconds(),
            "timed sample"
        );
        samples.push(GrowthSample::new(n, result.elapsed_seconds()));
    }
    Ok(samples)
}
