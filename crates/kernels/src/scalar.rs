// Copyright 2024-2025 Irreducible Inc.

use std::hint::black_box;

use itertools::izip;

use crate::ResultPolicy;

/// Adds `input[i] + input2[i]` `repetitions` times for every index, one scalar
/// operation per element and repetition.
///
/// Every repetition is routed through [`black_box`] so that the optimizer keeps all of
/// them. With [`ResultPolicy::Store`] the sum is written to `output[i]`.
pub fn add_elements(
	input: &[f32],
	input2: &[f32],
	output: &mut [f32],
	repetitions: usize,
	policy: ResultPolicy,
) {
	debug_assert_eq!(input.len(), input2.len());
	debug_assert_eq!(input.len(), output.len());

	for (&a, &b, out) in izip!(input, input2, output) {
		let mut sum = 0.0;
		for _ in 0..repetitions {
			sum = black_box(black_box(a) + b);
		}

		if policy == ResultPolicy::Store {
			*out = sum;
		}
	}
}
