// Copyright 2024-2025 Irreducible Inc.

/// Returns the error from the enclosing function, or panics with it when the
/// `bail_panic` feature is enabled. The error is logged at `warn` level either way.
#[cfg(feature = "bail_panic")]
#[macro_export]
macro_rules! bail {
	($err:expr) => {{
		let err = $err;
		$crate::tracing::log_rejected(&err);
		panic!("{}", err);
	}};
}

#[cfg(not(feature = "bail_panic"))]
#[macro_export]
macro_rules! bail {
	($err:expr) => {{
		let err = $err;
		$crate::tracing::log_rejected(&err);
		return Err(err.into());
	}};
}

#[macro_export]
macro_rules! ensure {
	($cond:expr, $err:expr) => {
		if !$cond {
			$crate::bail!($err);
		}
	};
}

#[cfg(all(test, not(feature = "bail_panic")))]
mod tests {
	#[derive(Debug, PartialEq, Eq)]
	struct Rejected(usize);

	impl std::fmt::Display for Rejected {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			write!(f, "rejected {}", self.0)
		}
	}

	fn check_even(val: usize) -> Result<usize, Rejected> {
		ensure!(val % 2 == 0, Rejected(val));
		Ok(val / 2)
	}

	#[test]
	fn test_ensure_passes_through() {
		assert_eq!(check_even(8), Ok(4));
	}

	#[test]
	fn test_ensure_returns_error() {
		assert_eq!(check_even(7), Err(Rejected(7)));
	}
}
