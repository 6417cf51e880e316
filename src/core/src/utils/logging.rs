use log::debug;
use std::time::Instant;

pub struct Logging;

impl Logging {
    /// Runs `action`, logging how long it took under `message`.
    pub fn estimate_result<T, F: FnOnce() -> T>(action: F, message: &str) -> T {
        let (result, elapsed) = TimeEstimation::estimate(action);

        debug!("{}, {} ms", message, elapsed);

        result
    }
}

pub struct TimeEstimation;

impl TimeEstimation {
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u128) {
        let now = Instant::now();

        let result = action();

        (result, now.elapsed().as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_returns_action_result() {
        let (value, _elapsed) = TimeEstimation::estimate(|| 2 + 2);
        assert_eq!(value, 4);

        let logged = Logging::estimate_result(|| "done", "test action");
        assert_eq!(logged, "done");
    }
}
