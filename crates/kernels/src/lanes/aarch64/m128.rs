// Copyright 2024-2025 Irreducible Inc.

use std::{arch::aarch64::*, fmt, ops::Add};

use crate::lanes::LaneVector;

/// Four `f32` lanes in a NEON register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct M128(pub(super) float32x4_t);

impl From<[f32; 4]> for M128 {
	#[inline(always)]
	fn from(value: [f32; 4]) -> Self {
		Self::load(&value)
	}
}

impl From<M128> for [f32; 4] {
	#[inline(always)]
	fn from(value: M128) -> Self {
		let mut result = [0.0; 4];
		value.store(&mut result);
		result
	}
}

impl fmt::Debug for M128 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let lanes: [f32; 4] = (*self).into();
		write!(f, "M128({lanes:?})")
	}
}

impl Add for M128 {
	type Output = Self;

	#[inline(always)]
	fn add(self, rhs: Self) -> Self::Output {
		// SAFETY: the module is only compiled when NEON is enabled for the target.
		Self(unsafe { vaddq_f32(self.0, rhs.0) })
	}
}

impl LaneVector for M128 {
	const WIDTH: usize = 4;

	#[inline(always)]
	fn load(src: &[f32]) -> Self {
		assert_eq!(src.len(), Self::WIDTH);
		// SAFETY: `src` holds exactly four floats.
		Self(unsafe { vld1q_f32(src.as_ptr()) })
	}

	#[inline(always)]
	fn store(self, dst: &mut [f32]) {
		assert_eq!(dst.len(), Self::WIDTH);
		// SAFETY: `dst` holds exactly four floats.
		unsafe { vst1q_f32(dst.as_mut_ptr(), self.0) }
	}

	#[inline(always)]
	fn splat(value: f32) -> Self {
		// SAFETY: the module is only compiled when NEON is enabled for the target.
		Self(unsafe { vdupq_n_f32(value) })
	}
}
