// Copyright 2024-2025 Irreducible Inc.

use std::hint::black_box;

use itertools::izip;

use crate::{
	lanes::{LaneVector, Lanes4, Lanes8, PortableLanes},
	LaneWidth, ResultPolicy,
};

/// Adds the inputs group by group with one `L`-wide lane operation per group and
/// repetition.
///
/// The two lane vectors of a group are loaded once and the same add is issued
/// `repetitions` times; every sum goes through [`black_box`]. With
/// [`ResultPolicy::Store`] the last sum of each group is written to `output`.
///
/// Panics if the buffer length is not a multiple of `L::WIDTH`; [`crate::execute`]
/// reports that case as [`crate::Error::LaneWidthMismatch`] instead.
pub fn add_groups<L: LaneVector>(
	input: &[f32],
	input2: &[f32],
	output: &mut [f32],
	repetitions: usize,
	policy: ResultPolicy,
) {
	debug_assert_eq!(input.len(), input2.len());
	debug_assert_eq!(input.len(), output.len());
	assert_eq!(input.len() % L::WIDTH, 0, "buffer length must be a multiple of the lane width");

	for (a, b, out) in izip!(
		input.chunks_exact(L::WIDTH),
		input2.chunks_exact(L::WIDTH),
		output.chunks_exact_mut(L::WIDTH)
	) {
		let lhs = L::load(a);
		let rhs = L::load(b);

		let mut sum = L::splat(0.0);
		for _ in 0..repetitions {
			sum = black_box(black_box(lhs) + rhs);
		}

		if policy == ResultPolicy::Store {
			sum.store(out);
		}
	}
}

/// [`add_groups`] instantiated with the lane type for `lane_width`.
pub fn add_vectorized(
	lane_width: LaneWidth,
	input: &[f32],
	input2: &[f32],
	output: &mut [f32],
	repetitions: usize,
	policy: ResultPolicy,
) {
	match lane_width {
		LaneWidth::W1 => add_groups::<PortableLanes<1>>(input, input2, output, repetitions, policy),
		LaneWidth::W2 => add_groups::<PortableLanes<2>>(input, input2, output, repetitions, policy),
		LaneWidth::W4 => add_groups::<Lanes4>(input, input2, output, repetitions, policy),
		LaneWidth::W8 => add_groups::<Lanes8>(input, input2, output, repetitions, policy),
		LaneWidth::W16 => {
			add_groups::<PortableLanes<16>>(input, input2, output, repetitions, policy)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Buffers;

	#[test]
	fn test_two_groups_of_eight() {
		let buffers = Buffers::ramp(16);
		let mut output = vec![0.0; 16];
		add_groups::<Lanes8>(
			buffers.input(),
			buffers.input2(),
			&mut output,
			1,
			ResultPolicy::Store,
		);

		let expected: Vec<f32> = (0..16).map(|i| (3 * i) as f32).collect();
		assert_eq!(output, expected);
	}

	#[test]
	fn test_discard_leaves_output_untouched() {
		let buffers = Buffers::ramp(32);
		let mut output = vec![7.0; 32];
		add_vectorized(
			LaneWidth::W8,
			buffers.input(),
			buffers.input2(),
			&mut output,
			10,
			ResultPolicy::Discard,
		);
		assert_eq!(output, vec![7.0; 32]);
	}

	#[test]
	#[should_panic(expected = "multiple of the lane width")]
	fn test_partial_group_panics() {
		let buffers = Buffers::ramp(9);
		let mut output = vec![0.0; 9];
		add_vectorized(
			LaneWidth::W8,
			buffers.input(),
			buffers.input2(),
			&mut output,
			1,
			ResultPolicy::Store,
		);
	}

	#[test]
	fn test_every_lane_width() {
		let buffers = Buffers::ramp(48);
		for &width in LaneWidth::SUPPORTED {
			let lane_width = LaneWidth::try_from(width).unwrap();
			let mut output = vec![0.0; 48];
			add_vectorized(
				lane_width,
				buffers.input(),
				buffers.input2(),
				&mut output,
				2,
				ResultPolicy::Store,
			);
			assert!(
				output.iter().enumerate().all(|(i, &x)| x == (3 * i) as f32),
				"width {width}"
			);
		}
	}
}
