// Copyright 2024-2025 Irreducible Inc.

use lanebench_utils::{ensure, rayon::aligned_chunk_len};
use rayon::prelude::*;

use crate::{Error, Threading};

/// The two inputs and the output of an addition run.
///
/// All three buffers live on the heap and always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffers {
	input: Vec<f32>,
	input2: Vec<f32>,
	output: Vec<f32>,
}

impl Buffers {
	/// Buffers of length `len` with `input[i] = i` and `input2[i] = 2 * i`.
	pub fn ramp(len: usize) -> Self {
		let input = (0..len).map(|i| i as f32).collect();
		let input2 = (0..len).map(|i| (2 * i) as f32).collect();

		Self {
			input,
			input2,
			output: vec![0.0; len],
		}
	}

	pub fn from_inputs(input: Vec<f32>, input2: Vec<f32>) -> Result<Self, Error> {
		ensure!(
			input.len() == input2.len(),
			Error::LengthMismatch {
				expected: input.len(),
				actual: input2.len(),
			}
		);

		let output = vec![0.0; input.len()];
		Ok(Self {
			input,
			input2,
			output,
		})
	}

	pub fn len(&self) -> usize {
		self.input.len()
	}

	pub fn is_empty(&self) -> bool {
		self.input.is_empty()
	}

	pub fn input(&self) -> &[f32] {
		&self.input
	}

	pub fn input2(&self) -> &[f32] {
		&self.input2
	}

	pub fn output(&self) -> &[f32] {
		&self.output
	}

	pub fn into_output(self) -> Vec<f32> {
		self.output
	}

	/// Calls `f` on matching sub-slices of the inputs and the output.
	///
	/// With [`Threading::Single`] `f` sees the whole buffers once. With
	/// [`Threading::Parallel`] the buffers are split into chunks whose length is a
	/// multiple of `align`, and the chunks are processed on the rayon pool.
	pub fn for_each_chunk<F>(&mut self, threading: Threading, align: usize, f: F)
	where
		F: Fn(&[f32], &[f32], &mut [f32]) + Sync,
	{
		let Self {
			input,
			input2,
			output,
		} = self;

		match threading {
			Threading::Single => f(input.as_slice(), input2.as_slice(), output.as_mut_slice()),
			Threading::Parallel => {
				let chunk_len = aligned_chunk_len(output.len(), align);
				output
					.par_chunks_mut(chunk_len)
					.zip(input.par_chunks(chunk_len))
					.zip(input2.par_chunks(chunk_len))
					.for_each(|((out, a), b)| f(a, b, out));
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicUsize, Ordering};

	use super::*;

	#[test]
	fn test_ramp() {
		let buffers = Buffers::ramp(5);
		assert_eq!(buffers.input(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
		assert_eq!(buffers.input2(), &[0.0, 2.0, 4.0, 6.0, 8.0]);
		assert_eq!(buffers.output(), &[0.0; 5]);
	}

	#[test]
	fn test_empty_ramp() {
		let buffers = Buffers::ramp(0);
		assert!(buffers.is_empty());
		assert!(buffers.output().is_empty());
	}

	#[test]
	fn test_from_inputs_length_mismatch() {
		assert_eq!(
			Buffers::from_inputs(vec![1.0; 4], vec![1.0; 3]),
			Err(Error::LengthMismatch {
				expected: 4,
				actual: 3
			})
		);
	}

	#[test]
	fn test_parallel_chunks_are_aligned_and_cover_everything() {
		let mut buffers = Buffers::ramp(8 * 37);
		let seen = AtomicUsize::new(0);

		buffers.for_each_chunk(Threading::Parallel, 8, |a, b, out| {
			assert_eq!(out.len() % 8, 0);
			assert_eq!(a.len(), out.len());
			assert_eq!(b.len(), out.len());
			// Chunks start at a group boundary: input[i] == i.
			assert_eq!(a[0] as usize % 8, 0);
			seen.fetch_add(out.len(), Ordering::Relaxed);
		});

		assert_eq!(seen.into_inner(), 8 * 37);
	}

	#[test]
	fn test_single_chunk_sees_whole_buffers() {
		let mut buffers = Buffers::ramp(10);
		buffers.for_each_chunk(Threading::Single, 8, |a, _, out| {
			assert_eq!(a.len(), 10);
			out.copy_from_slice(a);
		});
		assert_eq!(buffers.output(), buffers.input());
	}
}
