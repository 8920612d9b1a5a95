//! Benchmark-only workspace member; see `benches/`.
