//! Non-determinism classification
//!
//! Some corpus snippets have outputs that depend on engine scheduling,
//! wall-clock time, or randomness: timer/microtask ordering examples,
//! `Date.now()` demonstrations, `Math.random()` samples. Their declared
//! outputs cannot be diffed meaningfully, so the checker skips them
//! instead of judging them. Detection is textual over the snippet source.

/// Source markers whose presence makes a snippet's output unstable
const MARKERS: [&str; 8] = [
    "setTimeout",
    "setInterval",
    "Math.random",
    "Date.now",
    "new Date(",
    "performance.now",
    "process.nextTick",
    "queueMicrotask",
];

/// Find the first non-determinism marker in snippet source, if any
pub fn nondeterminism_marker(source: &str) -> Option<&'static str> {
    MARKERS.iter().find(|m| source.contains(*m)).copied()
}
