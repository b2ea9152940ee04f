// Copyright 2024-2025 Irreducible Inc.

use std::fmt;

use lanebench_utils::ensure;
use static_assertions::const_assert_eq;

use crate::Error;

/// Element count of both programs: 4096 rows of 128 floats.
pub const DEFAULT_ELEMENTS: usize = 4096 * 128;
/// Number of `f32` lanes in a 256-bit vector register.
pub const DEFAULT_LANE_WIDTH: usize = 8;
pub const DEFAULT_REPETITIONS: usize = 1000;

const_assert_eq!(DEFAULT_ELEMENTS % DEFAULT_LANE_WIDTH, 0);

/// Whether the drivers write the final sum of every group to the output buffer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ResultPolicy {
	#[default]
	Store,
	/// Sums are only passed through [`std::hint::black_box`]; the output buffer is
	/// left untouched.
	Discard,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Threading {
	#[default]
	Single,
	/// Split the buffers into group-aligned chunks processed on the global rayon pool.
	Parallel,
}

/// Which of the two addition drivers to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
	Vectorized,
	Scalar,
}

impl fmt::Display for Variant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Vectorized => write!(f, "vectorized"),
			Self::Scalar => write!(f, "scalar"),
		}
	}
}

/// Lane widths the vectorized driver can be instantiated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LaneWidth {
	W1,
	W2,
	W4,
	W8,
	W16,
}

impl LaneWidth {
	pub const SUPPORTED: &'static [usize] = &[1, 2, 4, 8, 16];

	pub const fn get(self) -> usize {
		match self {
			Self::W1 => 1,
			Self::W2 => 2,
			Self::W4 => 4,
			Self::W8 => 8,
			Self::W16 => 16,
		}
	}
}

impl TryFrom<usize> for LaneWidth {
	type Error = Error;

	fn try_from(lane_width: usize) -> Result<Self, Self::Error> {
		match lane_width {
			1 => Ok(Self::W1),
			2 => Ok(Self::W2),
			4 => Ok(Self::W4),
			8 => Ok(Self::W8),
			16 => Ok(Self::W16),
			_ => Err(Error::UnsupportedLaneWidth {
				lane_width,
				supported: Self::SUPPORTED,
			}),
		}
	}
}

/// The driver a validated configuration resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kernel {
	Scalar,
	Vectorized(LaneWidth),
}

impl Kernel {
	pub fn variant(&self) -> Variant {
		match self {
			Self::Scalar => Variant::Scalar,
			Self::Vectorized(_) => Variant::Vectorized,
		}
	}

	/// Number of elements consumed by one add instruction.
	pub fn group_len(&self) -> usize {
		match self {
			Self::Scalar => 1,
			Self::Vectorized(width) => width.get(),
		}
	}
}

/// Parameters of a single benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
	/// Length of each of the three buffers (N).
	pub elements: usize,
	/// Lanes per vector add (W). Ignored by the scalar driver.
	pub lane_width: usize,
	/// Adds issued per group or element (R).
	pub repetitions: usize,
	pub result: ResultPolicy,
	pub threading: Threading,
}

impl Default for BenchConfig {
	fn default() -> Self {
		Self {
			elements: DEFAULT_ELEMENTS,
			lane_width: DEFAULT_LANE_WIDTH,
			repetitions: DEFAULT_REPETITIONS,
			result: ResultPolicy::default(),
			threading: Threading::default(),
		}
	}
}

impl BenchConfig {
	/// Checks the configuration for `variant` and resolves the kernel to run.
	///
	/// An element count of zero is accepted and makes the run a no-op.
	pub fn kernel(&self, variant: Variant) -> Result<Kernel, Error> {
		ensure!(self.repetitions > 0, Error::ZeroRepetitions);

		match variant {
			Variant::Scalar => Ok(Kernel::Scalar),
			Variant::Vectorized => {
				let width = LaneWidth::try_from(self.lane_width)?;
				ensure!(
					self.elements % width.get() == 0,
					Error::LaneWidthMismatch {
						elements: self.elements,
						lane_width: self.lane_width,
					}
				);
				Ok(Kernel::Vectorized(width))
			}
		}
	}
}
