// Copyright 2024-2025 Irreducible Inc.

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::{Args, ValueEnum};
use lanebench_kernels::{
	run, BenchConfig, ResultPolicy, RunReport, Threading, Variant, DEFAULT_ELEMENTS,
	DEFAULT_REPETITIONS,
};
use lanebench_utils::{rayon::adjust_thread_pool, tracing::init_tracing};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResultArg {
	Store,
	Discard,
}

impl From<ResultArg> for ResultPolicy {
	fn from(value: ResultArg) -> Self {
		match value {
			ResultArg::Store => Self::Store,
			ResultArg::Discard => Self::Discard,
		}
	}
}

/// Options shared by both programs.
#[derive(Debug, Args)]
pub struct CommonArgs {
	/// Number of elements in each buffer.
	#[arg(short = 'n', long, default_value_t = DEFAULT_ELEMENTS)]
	pub elements: usize,
	/// Number of times every addition is repeated.
	#[arg(short, long, default_value_t = DEFAULT_REPETITIONS)]
	pub repetitions: usize,
	/// Split the work between the threads of the rayon pool.
	#[arg(long)]
	pub parallel: bool,
	/// Print a timing summary to stdout.
	#[arg(long)]
	pub report: bool,
	/// Print every output element, one per line. Prints nothing when sums are discarded.
	#[arg(long)]
	pub print_output: bool,
}

impl CommonArgs {
	pub fn config(&self, lane_width: usize, result: ResultArg) -> BenchConfig {
		BenchConfig {
			elements: self.elements,
			lane_width,
			repetitions: self.repetitions,
			result: result.into(),
			threading: if self.parallel {
				Threading::Parallel
			} else {
				Threading::Single
			},
		}
	}
}

/// Sets up tracing and the thread pool, runs `variant` and prints what was asked for.
pub fn run_program(variant: Variant, args: &CommonArgs, config: &BenchConfig) -> Result<()> {
	adjust_thread_pool()
		.as_ref()
		.map_err(|err| anyhow::anyhow!("failed to init thread pool: {err}"))?;
	init_tracing();

	let report = run(config, variant)?;
	print_report(&report, args, &mut BufWriter::new(io::stdout().lock()))?;

	Ok(())
}

fn print_report(report: &RunReport, args: &CommonArgs, out: &mut impl Write) -> Result<()> {
	if args.report {
		writeln!(out, "{report}")?;
	}

	if args.print_output {
		match report.output() {
			Some(output) => {
				for value in output {
					writeln!(out, "{value}")?;
				}
			}
			None => tracing::warn!("--print-output has no effect when sums are discarded"),
		}
	}

	out.flush()?;
	Ok(())
}
