// Copyright 2024-2025 Irreducible Inc.

use std::{array, ops::Add};

use super::LaneVector;

/// Lane vector backed by a plain array; the compiler is free to auto-vectorize the
/// lane-wise loop.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(transparent)]
pub struct PortableLanes<const W: usize>(pub [f32; W]);

impl<const W: usize> From<[f32; W]> for PortableLanes<W> {
	fn from(value: [f32; W]) -> Self {
		Self(value)
	}
}

impl<const W: usize> Add for PortableLanes<W> {
	type Output = Self;

	#[inline(always)]
	fn add(self, rhs: Self) -> Self::Output {
		Self(array::from_fn(|i| self.0[i] + rhs.0[i]))
	}
}

impl<const W: usize> LaneVector for PortableLanes<W> {
	const WIDTH: usize = W;

	#[inline(always)]
	fn load(src: &[f32]) -> Self {
		let mut lanes = [0.0; W];
		lanes.copy_from_slice(src);
		Self(lanes)
	}

	#[inline(always)]
	fn store(self, dst: &mut [f32]) {
		dst.copy_from_slice(&self.0);
	}

	#[inline(always)]
	fn splat(value: f32) -> Self {
		Self([value; W])
	}
}
