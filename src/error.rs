//! Playlist loading errors.

/// Errors that can occur while loading or validating a playlist.
///
/// Runtime scheduling never produces these: duration-dependent queries
/// return `Option::None` until metadata resolves, out-of-range jumps
/// normalize to the all-ended path, and stale timers are dropped after
/// an epoch check. Only the load path rejects input outright.
#[derive(Debug, thiserror::Error)]
pub enum PlaylistError {
    #[error("Entry {entry}: {kind} times must be sorted ascending (index {index})")]
    UnsortedTimes {
        entry: usize,
        kind: &'static str,
        index: usize,
    },

    #[error("Entry {entry}: {kind} at index {index} has a negative time")]
    NegativeTime {
        entry: usize,
        kind: &'static str,
        index: usize,
    },

    #[error("Entry {entry}: pause at index {index} must have a positive duration")]
    NonPositivePauseDuration { entry: usize, index: usize },

    #[error("Entry {entry}: end-sentinel {kind} at index {index} precedes a timed one")]
    EndBeforeTimed {
        entry: usize,
        kind: &'static str,
        index: usize,
    },
}
