use ahash::RandomState;
use std::collections::{HashMap as StdHashMap, HashSet as StdHashSet};
use std::sync::{LazyLock, Mutex};

pub type HashMap<K, V> = StdHashMap<K, V, RandomState>;
pub type HashSet<K> = StdHashSet<K, RandomState>;

static WARNED: LazyLock<Mutex<HashSet<String>>> =
    LazyLock::new(|| Mutex::new(HashSet::default()));

/// Returns true the first time `message` is seen in this process
#[doc(hidden)]
pub fn first_occurrence(message: &str) -> bool {
    match WARNED.lock() {
        Ok(mut seen) => seen.insert(message.to_string()),
        Err(_) => true,
    }
}

/// Like [`log::warn!`] but only logs a given message once per process.
/// Useful for fallbacks that would otherwise log on every frame.
#[macro_export]
macro_rules! warn_once {
    ($($arg:tt)+) => {{
        let message = format!($($arg)+);
        if $crate::core::util::first_occurrence(&message) {
            log::warn!("{}", message);
        }
    }};
}

/// `ternary!(cond, true_case, false_case)`
#[macro_export]
macro_rules! ternary {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition { $_true } else { $_false }
    };
}

pub fn bool_to_f32(cond: bool) -> f32 {
    ternary!(cond, 1.0, 0.0)
}

/// Number of decimal places needed to represent `step` (capped at 6), e.g.
/// `0.25 => 2`, `5.0 => 0`
pub fn decimal_places(step: f32) -> i32 {
    let mut places = 0;
    let mut scaled = step.abs() as f64;
    while places < 6 && (scaled - scaled.round()).abs() > 1e-6 {
        scaled *= 10.0;
        places += 1;
    }
    places
}

/// Rounds `value` to `places` decimal places
pub fn round_to(value: f32, places: i32) -> f32 {
    let factor = 10f64.powi(places);
    ((value as f64 * factor).round() / factor) as f32
}

/// A helper to avoid inverted ranges by swapping min and max when needed
pub fn safe_range(min: f32, max: f32) -> (f32, f32) {
    if max < min { (max, min) } else { (min, max) }
}
