// Copyright 2024-2025 Irreducible Inc.

use anyhow::Result;
use clap::Parser;
use lanebench_kernels::{Variant, DEFAULT_LANE_WIDTH};
use lanebench_programs::{run_program, CommonArgs, ResultArg};

/// Adds two ramp buffers with one lane-parallel add per group of `lane_width` elements.
#[derive(Debug, Parser)]
struct Args {
	#[command(flatten)]
	common: CommonArgs,
	/// Number of lanes per vector add. Must divide the element count.
	#[arg(short = 'w', long, default_value_t = DEFAULT_LANE_WIDTH)]
	lane_width: usize,
	/// Whether the sums are written to the output buffer.
	#[arg(long, value_enum, default_value_t = ResultArg::Discard)]
	result: ResultArg,
}

fn main() -> Result<()> {
	let args = Args::parse();
	let config = args.common.config(args.lane_width, args.result);

	run_program(Variant::Vectorized, &args.common, &config)
}
