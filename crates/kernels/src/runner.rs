// Copyright 2024-2025 Irreducible Inc.

use std::{
	fmt,
	time::{Duration, Instant},
};

use lanebench_utils::ensure;
use tracing::{debug, info, info_span};

use crate::{
	scalar::add_elements, vectorized::add_vectorized, BenchConfig, Buffers, Error, Kernel,
	ResultPolicy, Threading, Variant,
};

/// Outcome of one timed run.
#[derive(Debug, Clone)]
pub struct RunReport {
	pub kernel: Kernel,
	pub repetitions: usize,
	pub result: ResultPolicy,
	pub threading: Threading,
	/// Wall time of the addition loops only, buffer initialization excluded.
	pub elapsed: Duration,
	pub buffers: Buffers,
}

impl RunReport {
	pub fn variant(&self) -> Variant {
		self.kernel.variant()
	}

	pub fn elements(&self) -> usize {
		self.buffers.len()
	}

	/// Final sums, or `None` if the run discarded them.
	pub fn output(&self) -> Option<&[f32]> {
		match self.result {
			ResultPolicy::Store => Some(self.buffers.output()),
			ResultPolicy::Discard => None,
		}
	}

	/// Number of add operations issued: one per group (or element) and repetition.
	pub fn add_ops(&self) -> u64 {
		(self.elements() / self.kernel.group_len()) as u64 * self.repetitions as u64
	}

	/// Number of scalar additions performed, counting every lane.
	pub fn element_adds(&self) -> u64 {
		self.elements() as u64 * self.repetitions as u64
	}

	pub fn ns_per_element_add(&self) -> f64 {
		match self.element_adds() {
			0 => 0.0,
			adds => self.elapsed.as_nanos() as f64 / adds as f64,
		}
	}
}

impl fmt::Display for RunReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "variant:      {}", self.variant())?;
		writeln!(f, "elements:     {}", self.elements())?;
		writeln!(f, "lane width:   {}", self.kernel.group_len())?;
		writeln!(f, "repetitions:  {}", self.repetitions)?;
		writeln!(f, "add ops:      {}", self.add_ops())?;
		writeln!(f, "elapsed:      {:.3} ms", self.elapsed.as_secs_f64() * 1000.0)?;
		write!(f, "per element:  {:.4} ns", self.ns_per_element_add())
	}
}

/// Runs `kernel` over `buffers` in place.
///
/// Fails without touching the buffers if their length is not a multiple of the kernel's
/// group length or if `repetitions` is zero.
pub fn execute(
	kernel: Kernel,
	buffers: &mut Buffers,
	repetitions: usize,
	policy: ResultPolicy,
	threading: Threading,
) -> Result<(), Error> {
	ensure!(repetitions > 0, Error::ZeroRepetitions);
	ensure!(
		buffers.len() % kernel.group_len() == 0,
		Error::LaneWidthMismatch {
			elements: buffers.len(),
			lane_width: kernel.group_len(),
		}
	);

	match kernel {
		Kernel::Scalar => buffers.for_each_chunk(threading, 1, |a, b, out| {
			add_elements(a, b, out, repetitions, policy)
		}),
		Kernel::Vectorized(lane_width) => {
			buffers.for_each_chunk(threading, lane_width.get(), |a, b, out| {
				add_vectorized(lane_width, a, b, out, repetitions, policy)
			})
		}
	}

	Ok(())
}

/// Validates `config`, initializes the ramp buffers and times the selected driver.
pub fn run(config: &BenchConfig, variant: Variant) -> Result<RunReport, Error> {
	let kernel = config.kernel(variant)?;

	let _span = info_span!(
		"run",
		%variant,
		elements = config.elements,
		lane_width = kernel.group_len(),
		repetitions = config.repetitions,
	)
	.entered();

	let mut buffers = Buffers::ramp(config.elements);
	debug!(len = buffers.len(), "initialized buffers");

	let start = Instant::now();
	{
		let _span = info_span!("add").entered();
		execute(kernel, &mut buffers, config.repetitions, config.result, config.threading)?;
	}
	let elapsed = start.elapsed();
	info!(elapsed_ms = elapsed.as_secs_f64() * 1000.0, "finished");

	Ok(RunReport {
		kernel,
		repetitions: config.repetitions,
		result: config.result,
		threading: config.threading,
		elapsed,
		buffers,
	})
}
