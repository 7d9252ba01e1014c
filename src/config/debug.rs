//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so the
//! sweep log stays short.

pub struct DebugFlags {
    /// Emit a progress line (index / total) before each symbol in a sweep.
    pub print_sweep_progress: bool,
    /// Emit a line for symbols that produced no alert (no data, or within threshold).
    pub print_quiet_symbols: bool,
    /// Emit the computed statistics for every evaluated symbol, alert or not.
    pub print_deviation_stats: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_sweep_progress: false,
    print_quiet_symbols: false,
    print_deviation_stats: false,
};
