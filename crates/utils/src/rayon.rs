// Copyright 2024-2025 Irreducible Inc.

use std::{env, sync::OnceLock};

/// In case when number of threads is set to 1, use rayon thread pool with
/// `use_current_thread` set to true, so that a "parallel" run is indistinguishable
/// from the single-threaded one in profiles.
///
/// NOTE: rayon doesn't allow initializing global thread pool several times, so
/// in case when it was initialized before this function returns an error.
/// Call it at the beginning of `main`.
pub fn adjust_thread_pool() -> &'static Result<(), rayon::ThreadPoolBuildError> {
	static ONCE_GUARD: OnceLock<Result<(), rayon::ThreadPoolBuildError>> = OnceLock::new();

	ONCE_GUARD.get_or_init(|| {
		// `rayon::current_num_threads` would initialize the global pool, so read the variable.
		match env::var("RAYON_NUM_THREADS") {
			Ok(v) if v == "1" => rayon::ThreadPoolBuilder::new()
				.num_threads(1)
				.use_current_thread()
				.build_global(),
			_ => Ok(()),
		}
	})
}

/// Length of the chunk each worker gets when `len` elements are split between the
/// threads of the current pool. The result is a multiple of `align` (unless `len`
/// is smaller than `align`) and is never zero.
pub fn aligned_chunk_len(len: usize, align: usize) -> usize {
	aligned_chunk_len_for_threads(len, align, rayon::current_num_threads())
}

fn aligned_chunk_len_for_threads(len: usize, align: usize, n_threads: usize) -> usize {
	let align = align.max(1);
	let per_thread = len.div_ceil(n_threads.max(1));
	let aligned = per_thread.div_ceil(align) * align;

	aligned.max(align)
}
