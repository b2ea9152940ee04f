// Copyright 2024-2025 Irreducible Inc.

/// Error thrown when a benchmark configuration or its buffers are inconsistent.
///
/// All variants are detected before any addition is performed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("lane width {lane_width} does not divide the element count {elements}")]
	LaneWidthMismatch { elements: usize, lane_width: usize },
	#[error("lane width {lane_width} is not supported, expected one of {supported:?}")]
	UnsupportedLaneWidth {
		lane_width: usize,
		supported: &'static [usize],
	},
	#[error("the repetition count must be at least 1")]
	ZeroRepetitions,
	#[error("input buffers have different lengths: expected {expected}, got {actual}")]
	LengthMismatch { expected: usize, actual: usize },
}
