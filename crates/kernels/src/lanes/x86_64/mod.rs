// Copyright 2024-2025 Irreducible Inc.

mod m128;
#[cfg(target_feature = "avx")]
mod m256;

pub use m128::M128;
#[cfg(target_feature = "avx")]
pub use m256::M256;
