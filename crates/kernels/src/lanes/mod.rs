// Copyright 2024-2025 Irreducible Inc.

//! Fixed-width vectors of `f32` lanes.
//!
//! [`LaneVector`] is implemented by the portable [`PortableLanes`] type for every width
//! and by thin wrappers over the native vector registers where the target has them.
//! [`Lanes4`] and [`Lanes8`] name the best implementation for the compilation target.

use std::{fmt::Debug, ops::Add};

use cfg_if::cfg_if;

mod portable;

pub use portable::PortableLanes;

/// A group of `WIDTH` `f32` values added lane by lane with a single operation.
pub trait LaneVector: Copy + Debug + Send + Sync + Add<Output = Self> + 'static {
	const WIDTH: usize;

	/// Load `WIDTH` consecutive values, `src[0]` going to lane 0.
	///
	/// Panics if `src.len() != WIDTH`.
	fn load(src: &[f32]) -> Self;

	/// Panics if `dst.len() != WIDTH`.
	fn store(self, dst: &mut [f32]);

	fn splat(value: f32) -> Self;

	fn to_vec(self) -> Vec<f32> {
		let mut result = vec![0.0; Self::WIDTH];
		self.store(&mut result);
		result
	}
}

cfg_if! {
	if #[cfg(target_arch = "x86_64")] {
		#[cfg(target_feature = "sse")]
		mod x86_64;
	} else if #[cfg(target_arch = "aarch64")] {
		#[cfg(target_feature = "neon")]
		mod aarch64;
	}
}

cfg_if! {
	if #[cfg(all(target_arch = "x86_64", target_feature = "sse"))] {
		pub type Lanes4 = x86_64::M128;
	} else if #[cfg(all(target_arch = "aarch64", target_feature = "neon"))] {
		pub type Lanes4 = aarch64::M128;
	} else {
		pub type Lanes4 = PortableLanes<4>;
	}
}

cfg_if! {
	if #[cfg(all(target_arch = "x86_64", target_feature = "avx"))] {
		pub type Lanes8 = x86_64::M256;
	} else {
		pub type Lanes8 = PortableLanes<8>;
	}
}
