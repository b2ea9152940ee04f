// Copyright 2024-2025 Irreducible Inc.

mod m128;

pub use m128::M128;
