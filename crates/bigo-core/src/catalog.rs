//! Immutable catalog of reference functions
//!
//! Built once on first access and never modified afterwards. Each entry pairs a
//! uniform call adapter with its declared time and space classes and its
//! operation-count model.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use crate::{functions, ops, BigOError, BigOResult, ComplexityClass, OutputSink};

/// Argument shape accepted by a reference function
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// A single integer size
    Size,
    /// A sequence of numbers
    Numbers,
}

/// Argument passed to a catalog entry
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    Size(i64),
    Numbers(Vec<f64>),
}

impl Input {
    /// Shape of this argument
    pub fn kind(&self) -> InputKind {
        match self {
            Input::Size(_) => InputKind::Size,
            Input::Numbers(_) => InputKind::Numbers,
        }
    }

    /// Input magnitude n used by the complexity models (negative sizes count as 0)
    pub fn magnitude(&self) -> u64 {
        match self {
            Input::Size(n) => (*n).max(0) as u64,
            Input::Numbers(values) => values.len() as u64,
        }
    }
}

/// Value returned by a catalog entry
#[derive(Clone, Debug, PartialEq)]
pub enum Output {
    /// Integer sum
    Sum(u128),
    /// Floating-point total
    Number(f64),
    /// A new sequence
    Numbers(Vec<f64>),
    /// Output went to the sink only
    Emitted,
}

type Invoke = fn(&Input, &mut dyn OutputSink) -> BigOResult<Output>;

/// A named reference function with its declared complexity
#[derive(Clone, Copy)]
pub struct ExampleFunction {
    name: &'static str,
    summary: &'static str,
    input: InputKind,
    time: ComplexityClass,
    space: ComplexityClass,
    invoke: Invoke,
    operations: fn(u64) -> u64,
}

impl ExampleFunction {
    /// Catalog key, e.g. `sum_range`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// One-line description of the behavior
    pub fn summary(&self) -> &'static str {
        self.summary
    }

    /// Argument shape this function accepts
    pub fn input_kind(&self) -> InputKind {
        self.input
    }

    /// Declared time complexity
    pub fn time(&self) -> ComplexityClass {
        self.time
    }

    /// Declared auxiliary space complexity
    pub fn space(&self) -> ComplexityClass {
        self.space
    }

    /// Invoke the function, writing any stream output to `sink`
    pub fn call(&self, input: &Input, sink: &mut dyn OutputSink) -> BigOResult<Output> {
        (self.invoke)(input, sink)
    }

    /// Simple operations performed for input magnitude n
    pub fn operations(&self, n: u64) -> u64 {
        (self.operations)(n)
    }
}

impl fmt::Debug for ExampleFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExampleFunction")
            .field("name", &self.name)
            .field("input", &self.input)
            .field("time", &self.time)
            .field("space", &self.space)
            .finish()
    }
}

fn size(function: &'static str, input: &Input) -> BigOResult<i64> {
    match input {
        Input::Size(n) => Ok(*n),
        Input::Numbers(_) => Err(BigOError::InputKindMismatch {
            function,
            expected: "an integer size",
        }),
    }
}

fn numbers<'a>(function: &'static str, input: &'a Input) -> BigOResult<&'a [f64]> {
    match input {
        Input::Numbers(values) => Ok(values.as_slice()),
        Input::Size(_) => Err(BigOError::InputKindMismatch {
            function,
            expected: "a sequence of numbers",
        }),
    }
}

/// Name-ordered, immutable set of reference functions
#[derive(Debug)]
pub struct Catalog {
    entries: BTreeMap<&'static str, ExampleFunction>,
}

impl Catalog {
    /// The standard catalog, built once per process
    pub fn standard() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Catalog::build)
    }

    fn build() -> Catalog {
        use ComplexityClass::*;

        let defs = [
            ExampleFunction {
                name: "sum_range",
                summary: "accumulate 1..=n in a loop",
                input: InputKind::Size,
                time: Linear,
                space: Constant,
                invoke: |input, _| {
                    functions::sum_range(size("sum_range", input)?).map(Output::Sum)
                },
                operations: ops::sum_range,
            },
            ExampleFunction {
                name: "sum_range_closed_form",
                summary: "n * (n + 1) / 2",
                input: InputKind::Size,
                time: Constant,
                space: Constant,
                invoke: |input, _| {
                    let n = size("sum_range_closed_form", input)?;
                    functions::sum_range_closed_form(n).map(Output::Sum)
                },
                operations: ops::sum_range_closed_form,
            },
            ExampleFunction {
                name: "count_up_and_down",
                summary: "emit 0..n ascending then descending",
                input: InputKind::Size,
                time: Linear,
                space: Constant,
                invoke: |input, sink| {
                    let n = size("count_up_and_down", input)?;
                    functions::count_up_and_down(n, sink).map(|_| Output::Emitted)
                },
                operations: ops::count_up_and_down,
            },
            ExampleFunction {
                name: "print_all_pairs",
                summary: "emit every ordered pair in [0, n)",
                input: InputKind::Size,
                time: Quadratic,
                space: Constant,
                invoke: |input, sink| {
                    let n = size("print_all_pairs", input)?;
                    functions::print_all_pairs(n, sink).map(|_| Output::Emitted)
                },
                operations: ops::print_all_pairs,
            },
            ExampleFunction {
                name: "log_at_least",
                summary: "emit 1..=max(5, n)",
                input: InputKind::Size,
                time: Linear,
                space: Constant,
                invoke: |input, sink| {
                    functions::log_at_least(size("log_at_least", input)?, sink);
                    Ok(Output::Emitted)
                },
                operations: ops::log_at_least,
            },
            ExampleFunction {
                name: "log_at_most",
                summary: "emit 1..=min(5, n)",
                input: InputKind::Size,
                time: Constant,
                space: Constant,
                invoke: |input, sink| {
                    functions::log_at_most(size("log_at_most", input)?, sink);
                    Ok(Output::Emitted)
                },
                operations: ops::log_at_most,
            },
            ExampleFunction {
                name: "sum_array",
                summary: "total of every element",
                input: InputKind::Numbers,
                time: Linear,
                space: Constant,
                invoke: |input, _| {
                    let values = numbers("sum_array", input)?;
                    Ok(Output::Number(functions::sum_array(values)))
                },
                operations: ops::sum_array,
            },
            ExampleFunction {
                name: "double_array",
                summary: "new sequence with each element doubled",
                input: InputKind::Numbers,
                time: Linear,
                space: Linear,
                invoke: |input, _| {
                    let values = numbers("double_array", input)?;
                    Ok(Output::Numbers(functions::double_array(values)))
                },
                operations: ops::double_array,
            },
        ];

        Catalog {
            entries: defs.into_iter().map(|def| (def.name, def)).collect(),
        }
    }

    /// Look up an entry by name
    pub fn get(&self, name: &str) -> BigOResult<&ExampleFunction> {
        self.entries
            .get(name)
            .ok_or_else(|| BigOError::UnknownFunction(name.to_string()))
    }

    /// Entries in name order
    pub fn iter(&self) -> impl Iterator<Item = &ExampleFunction> {
        self.entries.values()
    }

    /// Entry names in order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
