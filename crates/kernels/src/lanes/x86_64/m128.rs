// Copyright 2024-2025 Irreducible Inc.

use std::{arch::x86_64::*, fmt, ops::Add};

use bytemuck::must_cast;

use crate::lanes::LaneVector;

/// Four `f32` lanes in an SSE register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct M128(pub(super) __m128);

impl From<[f32; 4]> for M128 {
	#[inline(always)]
	fn from(value: [f32; 4]) -> Self {
		Self(must_cast(value))
	}
}

impl From<M128> for [f32; 4] {
	#[inline(always)]
	fn from(value: M128) -> Self {
		must_cast(value.0)
	}
}

impl fmt::Debug for M128 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let lanes: [f32; 4] = (*self).into();
		write!(f, "M128({lanes:?})")
	}
}

impl PartialEq for M128 {
	fn eq(&self, other: &Self) -> bool {
		<[f32; 4]>::from(*self) == <[f32; 4]>::from(*other)
	}
}

impl Add for M128 {
	type Output = Self;

	#[inline(always)]
	fn add(self, rhs: Self) -> Self::Output {
		// SAFETY: the module is only compiled when SSE is enabled for the target.
		Self(unsafe { _mm_add_ps(self.0, rhs.0) })
	}
}

impl LaneVector for M128 {
	const WIDTH: usize = 4;

	#[inline(always)]
	fn load(src: &[f32]) -> Self {
		assert_eq!(src.len(), Self::WIDTH);
		// SAFETY: `src` holds exactly four floats; the load is unaligned.
		Self(unsafe { _mm_loadu_ps(src.as_ptr()) })
	}

	#[inline(always)]
	fn store(self, dst: &mut [f32]) {
		assert_eq!(dst.len(), Self::WIDTH);
		// SAFETY: `dst` holds exactly four floats; the store is unaligned.
		unsafe { _mm_storeu_ps(dst.as_mut_ptr(), self.0) }
	}

	#[inline(always)]
	fn splat(value: f32) -> Self {
		// SAFETY: the module is only compiled when SSE is enabled for the target.
		Self(unsafe { _mm_set1_ps(value) })
	}
}
