// Copyright 2024-2025 Irreducible Inc.

use assert_matches::assert_matches;
use lanebench_kernels::{
	execute, run, BenchConfig, Buffers, Error, Kernel, LaneWidth, ResultPolicy, Threading,
	Variant,
};
use proptest::prelude::*;

fn lane_width() -> impl Strategy<Value = LaneWidth> {
	prop::sample::select(LaneWidth::SUPPORTED).prop_map(|w| LaneWidth::try_from(w).unwrap())
}

fn inputs(len: usize) -> impl Strategy<Value = (Vec<f32>, Vec<f32>)> {
	let values = prop::collection::vec(-1.0e6f32..1.0e6, len);
	(values.clone(), values)
}

fn sums(
	kernel: Kernel,
	a: &[f32],
	b: &[f32],
	repetitions: usize,
	threading: Threading,
) -> Vec<f32> {
	let mut buffers = Buffers::from_inputs(a.to_vec(), b.to_vec()).unwrap();
	execute(kernel, &mut buffers, repetitions, ResultPolicy::Store, threading).unwrap();
	buffers.into_output()
}

proptest! {
	#[test]
	fn test_vectorized_matches_scalar(
		(width, (a, b)) in lane_width().prop_flat_map(|w| (Just(w), inputs(w.get() * 7))),
		repetitions in 1..4usize,
	) {
		let vectorized = sums(Kernel::Vectorized(width), &a, &b, repetitions, Threading::Single);
		let scalar = sums(Kernel::Scalar, &a, &b, repetitions, Threading::Single);

		prop_assert_eq!(&vectorized, &scalar);
		for (i, sum) in scalar.iter().enumerate() {
			prop_assert_eq!(*sum, a[i] + b[i]);
		}
	}

	#[test]
	fn test_repetitions_do_not_change_output(width in lane_width(), repetitions in 1..20usize) {
		let (a, b) = (vec![1.25; 32], vec![-0.5; 32]);
		let once = sums(Kernel::Vectorized(width), &a, &b, 1, Threading::Single);
		let many = sums(Kernel::Vectorized(width), &a, &b, repetitions, Threading::Single);

		prop_assert_eq!(once, many);
	}

	#[test]
	fn test_parallel_matches_single(width in lane_width(), groups in 0..200usize) {
		let len = width.get() * groups;
		let buffers = Buffers::ramp(len);

		for kernel in [Kernel::Scalar, Kernel::Vectorized(width)] {
			let single = sums(kernel, buffers.input(), buffers.input2(), 2, Threading::Single);
			let parallel = sums(kernel, buffers.input(), buffers.input2(), 2, Threading::Parallel);
			prop_assert_eq!(single, parallel);
		}
	}
}

#[test]
fn test_runs_are_idempotent() {
	let config = BenchConfig {
		elements: 4096,
		repetitions: 3,
		..Default::default()
	};

	for variant in [Variant::Vectorized, Variant::Scalar] {
		let first = run(&config, variant).unwrap();
		let second = run(&config, variant).unwrap();

		let bits = |output: &[f32]| output.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
		assert_eq!(bits(first.buffers.output()), bits(second.buffers.output()));
	}
}

#[test]
fn test_execute_rejects_non_dividing_length() {
	for threading in [Threading::Single, Threading::Parallel] {
		for policy in [ResultPolicy::Store, ResultPolicy::Discard] {
			let mut buffers = Buffers::ramp(9);
			assert_matches!(
				execute(Kernel::Vectorized(LaneWidth::W8), &mut buffers, 1, policy, threading),
				Err(Error::LaneWidthMismatch {
					elements: 9,
					lane_width: 8
				})
			);
			assert_eq!(buffers.output(), &[0.0; 9]);
		}
	}

	let mut buffers = Buffers::ramp(18);
	assert_matches!(
		execute(
			Kernel::Vectorized(LaneWidth::W4),
			&mut buffers,
			3,
			ResultPolicy::Store,
			Threading::Single,
		),
		Err(Error::LaneWidthMismatch {
			elements: 18,
			lane_width: 4
		})
	);
}

#[test]
fn test_single_group() {
	for &width in LaneWidth::SUPPORTED {
		let config = BenchConfig {
			elements: width,
			lane_width: width,
			repetitions: 1,
			..Default::default()
		};
		let report = run(&config, Variant::Vectorized).unwrap();
		let expected: Vec<f32> = (0..width).map(|i| (3 * i) as f32).collect();
		assert_eq!(report.output(), Some(expected.as_slice()));
	}
}

#[test]
fn test_default_size_parallel() {
	let config = BenchConfig {
		repetitions: 1,
		threading: Threading::Parallel,
		..Default::default()
	};
	let report = run(&config, Variant::Vectorized).unwrap();
	let output = report.output().unwrap();

	assert_eq!(output.len(), 524288);
	assert_eq!(output[524287], 3.0 * 524287.0);
}
