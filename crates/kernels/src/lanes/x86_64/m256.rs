// Copyright 2024-2025 Irreducible Inc.

use std::{arch::x86_64::*, fmt, ops::Add};

use bytemuck::must_cast;

use crate::lanes::LaneVector;

/// Eight `f32` lanes in an AVX register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct M256(pub(super) __m256);

impl From<[f32; 8]> for M256 {
	#[inline(always)]
	fn from(value: [f32; 8]) -> Self {
		Self(must_cast(value))
	}
}

impl From<M256> for [f32; 8] {
	#[inline(always)]
	fn from(value: M256) -> Self {
		must_cast(value.0)
	}
}

impl fmt::Debug for M256 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let lanes: [f32; 8] = (*self).into();
		write!(f, "M256({lanes:?})")
	}
}

impl PartialEq for M256 {
	fn eq(&self, other: &Self) -> bool {
		<[f32; 8]>::from(*self) == <[f32; 8]>::from(*other)
	}
}

impl Add for M256 {
	type Output = Self;

	#[inline(always)]
	fn add(self, rhs: Self) -> Self::Output {
		// SAFETY: the module is only compiled when AVX is enabled for the target.
		Self(unsafe { _mm256_add_ps(self.0, rhs.0) })
	}
}

impl LaneVector for M256 {
	const WIDTH: usize = 8;

	#[inline(always)]
	fn load(src: &[f32]) -> Self {
		assert_eq!(src.len(), Self::WIDTH);
		// SAFETY: `src` holds exactly eight floats; the load is unaligned.
		Self(unsafe { _mm256_loadu_ps(src.as_ptr()) })
	}

	#[inline(always)]
	fn store(self, dst: &mut [f32]) {
		assert_eq!(dst.len(), Self::WIDTH);
		// SAFETY: `dst` holds exactly eight floats; the store is unaligned.
		unsafe { _mm256_storeu_ps(dst.as_mut_ptr(), self.0) }
	}

	#[inline(always)]
	fn splat(value: f32) -> Self {
		// SAFETY: the module is only compiled when AVX is enabled for the target.
		Self(unsafe { _mm256_set1_ps(value) })
	}
}
