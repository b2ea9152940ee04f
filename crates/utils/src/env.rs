// Copyright 2024-2025 Irreducible Inc.

/// Enables span timing output in [`crate::tracing::init_tracing`].
pub const PROFILE_FLAG: &str = "LANEBENCH_PROFILE";

/// Read boolean flag from the environment variable.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	match std::env::var(flag) {
		Ok(val) => is_truthy(&val),
		Err(_) => false,
	}
}

fn is_truthy(val: &str) -> bool {
	["1", "on", "ON", "true", "TRUE", "yes", "YES"].contains(&val)
}
