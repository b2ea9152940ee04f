// Copyright 2024-2025 Irreducible Inc.

use anyhow::Result;
use clap::Parser;
use lanebench_kernels::{Variant, DEFAULT_LANE_WIDTH};
use lanebench_programs::{run_program, CommonArgs, ResultArg};

/// Adds two ramp buffers one element at a time.
#[derive(Debug, Parser)]
struct Args {
	#[command(flatten)]
	common: CommonArgs,
	/// Whether the sums are written to the output buffer.
	#[arg(long, value_enum, default_value_t = ResultArg::Store)]
	result: ResultArg,
}

fn main() -> Result<()> {
	let args = Args::parse();
	let config = args.common.config(DEFAULT_LANE_WIDTH, args.result);

	run_program(Variant::Scalar, &args.common, &config)
}
