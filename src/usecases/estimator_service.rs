//! Duration estimation. Asks the AI port how long a task takes and parses the reply.
//!
//! Never fails towards the caller: parse failures and service failures both
//! degrade to 0 minutes, while `estimate_detailed` keeps them apart.

use crate::domain::{DomainError, Estimation, parse_minutes};
use crate::ports::{AiPort, Role, Turn};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Instruction sent as the first turn of every estimation request.
pub const PREAMBLE: &str = "\
You are an automated tool which estimates how long tasks will take. You will be given the name of a task and must reply with an estimate, in minutes, of how long this task will take.

- Reply with a single number so that it may be easily parsed in a program
- ONLY respond with a single number
- DO NOT reply with any text that isn't a number
- If you cannot determine a duration, reply with a random value between 0 and 15

The task is as follows: ";

/// Service estimating task durations in minutes.
pub struct EstimatorService {
    ai: Arc<dyn AiPort>,
    timeout: Duration,
}

impl EstimatorService {
    /// # Arguments
    /// * `ai` - AI port implementation (OpenAI, Mock, etc.)
    /// * `timeout` - Bound for one outbound request; expiry counts as unavailable
    pub fn new(ai: Arc<dyn AiPort>, timeout: Duration) -> Self {
        Self { ai, timeout }
    }

    /// Estimated minutes for `task`. 0 when no usable estimate could be obtained.
    pub async fn estimate(&self, task: &str) -> u32 {
        self.estimate_detailed(task).await.minutes()
    }

    /// Estimate with the reason behind the number.
    pub async fn estimate_detailed(&self, task: &str) -> Estimation {
        let turns = Self::conversation(task);

        let reply = match tokio::time::timeout(self.timeout, self.ai.complete(&turns)).await {
            Ok(Ok(reply)) => reply,
            Ok(Err(e)) => return Self::unavailable(task, e),
            Err(_) => return Self::unavailable(task, DomainError::Timeout(self.timeout.as_secs())),
        };

        info!(
            task_len = task.len(),
            reply = reply.as_deref().unwrap_or_default(),
            "AI estimate reply"
        );

        let estimation = Estimation::from(parse_minutes(reply.as_deref()));
        if estimation == Estimation::Unparseable {
            warn!(
                reply = reply.as_deref().unwrap_or_default(),
                "duration could not be parsed as a positive number, using 0"
            );
        }
        estimation
    }

    /// Preamble as an assistant turn, then the task text as the user turn.
    fn conversation(task: &str) -> [Turn; 2] {
        [Turn::new(Role::Assistant, PREAMBLE), Turn::new(Role::User, task)]
    }

    fn unavailable(task: &str, e: DomainError) -> Estimation {
        warn!(task_len = task.len(), error = %e, "AI estimate unavailable, using 0");
        Estimation::Unavailable(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAiAdapter;

    fn service(adapter: MockAiAdapter) -> EstimatorService {
        EstimatorService::new(Arc::new(adapter), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_estimate_bare_number() {
        assert_eq!(service(MockAiAdapter::with_reply("42")).estimate("Write report").await, 42);
    }

    #[tokio::test]
    async fn test_estimate_number_in_text() {
        let svc = service(MockAiAdapter::with_reply("about 7 minutes"));
        assert_eq!(svc.estimate("Reply to John's email").await, 7);
    }

    #[tokio::test]
    async fn test_estimate_no_digits() {
        let svc = service(MockAiAdapter::with_reply("I cannot determine this"));
        assert_eq!(svc.estimate_detailed("???").await, Estimation::Unparseable);
        assert_eq!(svc.estimate("???").await, 0);
    }

    #[tokio::test]
    async fn test_estimate_negative_rejected() {
        assert_eq!(service(MockAiAdapter::with_reply("-5")).estimate("x").await, 0);
    }

    #[tokio::test]
    async fn test_estimate_empty_reply() {
        assert_eq!(service(MockAiAdapter::empty()).estimate("x").await, 0);
        assert_eq!(service(MockAiAdapter::with_reply("")).estimate("x").await, 0);
    }

    #[tokio::test]
    async fn test_estimate_service_outage() {
        let svc = service(MockAiAdapter::failing("connection refused"));
        let estimation = svc.estimate_detailed("Write report").await;
        assert!(estimation.is_unavailable());
        assert_eq!(estimation.minutes(), 0);
        assert_eq!(svc.estimate("Write report").await, 0);
    }

    #[tokio::test]
    async fn test_estimate_timeout() {
        let adapter = MockAiAdapter::with_reply("10").with_delay(500);
        let svc = EstimatorService::new(Arc::new(adapter), Duration::from_millis(20));
        let estimation = svc.estimate_detailed("slow").await;
        assert!(estimation.is_unavailable());
    }

    #[tokio::test]
    async fn test_estimate_sends_two_turn_conversation() {
        let adapter = Arc::new(MockAiAdapter::with_reply("3"));
        let svc = EstimatorService::new(adapter.clone(), Duration::from_secs(5));

        svc.estimate("Water the plants").await;

        let sent = adapter.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0][0], Turn::new(Role::Assistant, PREAMBLE));
        assert_eq!(sent[0][1], Turn::new(Role::User, "Water the plants"));
    }

    #[tokio::test]
    async fn test_estimate_tolerates_odd_input() {
        let svc = service(MockAiAdapter::with_reply("5"));
        assert_eq!(svc.estimate("").await, 5);
        assert_eq!(svc.estimate("\u{0}\u{1b}[31m").await, 5);
        assert_eq!(svc.estimate(&"long ".repeat(10_000)).await, 5);
    }
}
