// Copyright 2024-2025 Irreducible Inc.

//! Scalar and lane-parallel addition of two `f32` buffers.
//!
//! Both drivers compute `output[i] = input[i] + input2[i]` and repeat every addition a
//! configurable number of times to produce measurable work. The scalar driver issues one
//! add per element, the vectorized one issues one [`lanes::LaneVector`] add per group of
//! `lane_width` consecutive elements.
//!
//! ```
//! use lanebench_kernels::{run, BenchConfig, Variant};
//!
//! let config = BenchConfig { elements: 16, repetitions: 1, ..Default::default() };
//! let report = run(&config, Variant::Vectorized).unwrap();
//! assert_eq!(report.output().unwrap()[15], 45.0);
//! ```

pub mod buffers;
pub mod config;
pub mod error;
pub mod lanes;
pub mod runner;
pub mod scalar;
pub mod vectorized;

pub use buffers::Buffers;
pub use config::*;
pub use error::*;
pub use runner::{execute, run, RunReport};
