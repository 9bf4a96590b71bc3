use std::future::Future;
use std::time::Instant;

pub struct TimeEstimation;

impl TimeEstimation {
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u128) {
        let now = Instant::now();

        let result = action();

        (result, now.elapsed().as_millis())
    }

    pub async fn estimate_async<T, F: Future<Output = T>>(action: F) -> (T, u128) {
        let now = Instant::now();

        let result = action.await;

        (result, now.elapsed().as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_returns_action_result() {
        let (result, _) = TimeEstimation::estimate(|| 2 + 2);
        assert_eq!(result, 4);
    }

    #[tokio::test]
    async fn estimate_async_returns_future_output() {
        let (result, _) = TimeEstimation::estimate_async(async { "done" }).await;
        assert_eq!(result, "done");
    }
}
