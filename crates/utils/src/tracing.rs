// Copyright 2023-2025 Irreducible Inc.

use std::fmt::Display;

use tracing_subscriber::{
	fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::env::{boolean_env_flag_set, PROFILE_FLAG};

/// Installs the global subscriber. `RUST_LOG` selects the filter (`warn` when unset);
/// setting `LANEBENCH_PROFILE` additionally reports the duration of every closed span.
///
/// Repeated calls are no-ops.
pub fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

	let span_events = if boolean_env_flag_set(PROFILE_FLAG) {
		FmtSpan::CLOSE
	} else {
		FmtSpan::NONE
	};

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_span_events(span_events)
				.with_writer(std::io::stderr),
		)
		.try_init();
}

#[doc(hidden)]
pub fn log_rejected(err: &impl Display) {
	::tracing::warn!(error = %err, "precondition violated");
}
