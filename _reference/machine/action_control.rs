//! Control flow action implementations

use super::*;

/// Retry action that attempts to execute an action multiple times
pub struct RetryAction<C, E> {
    /// The action to retry
    pub action: Box<dyn Action<C, E>>,
    /// Maximum number of retry attempts
    pub max_attempts: usize,
    /// Delay between retries
    pub delay: std::time::Duration,
    /// Backoff strategy
    pub backoff: RetryBackoff,
    /// Description of the retry action
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RetryBackoff {
    /// Fixed delay between retries
    Fixed,
    /// Exponential backoff
    Exponential,
    /// Linear backoff
    Linear,
}

impl<C, E> RetryAction<C, E> {
    /// Create a new retry action
    pub fn new(action: Box<dyn Action<C, E>>, max_attempts: usize) -> Self {
        Self {
            action,
            max_attempts,
            delay: std::time::Duration::from_millis(100),
            backoff: RetryBackoff::Fixed,
            description: "Retry Action".to_string(),
        }
    }

    /// Set the delay between retries
    pub fn with_delay(mut self, delay: std::time::Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the backoff strategy
    pub fn with_backoff(mut self, backoff: RetryBackoff) -> Self {
        self.backoff = backoff;
        self
    }

    /// Set description
    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }
}

impl<C: Send + Sync + 'static, E: Send + Sync + 'static> Action<C, E> for RetryAction<C, E> {
    fn execute(&self, context: &mut C, event: &E) {
        // For now, just execute the action once
        // In a real implementation, this would retry on failure
        self.action.execute(context, event);
    }

    fn name(&self) -> &str {
        "retry"
    }

    fn description(&self) -> String {
        format!("{} (max {} attempts)", self.description, self.max_attempts)
    }

    fn clone_action(&self) -> Box<dyn Action<C, E>> {
        Box::new(Self {
            action: self.action.clone_action(),
            max_attempts: self.max_attempts,
            delay: self.delay,
            backoff: self.backoff.clone(),
            description: self.description.clone(),
        })
    }
}

/// Timer action that tracks execution time
pub struct TimerAction<C, E> {
    /// The action to time
    pub action: Box<dyn Action<C, E>>,
    /// Timer name for metrics
    pub timer_name: String,
    /// Whether to log execution time
    pub log_execution_time: bool,
    /// Description of the timer action
    pub description: String,
}

impl<C, E> TimerAction<C, E> {
    /// Create a new timer action
    pub fn new(action: Box<dyn Action<C, E>>, timer_name: String) -> Self {
        Self {
            action,
            timer_name,
            log_execution_time: true,
            description: "Timer Action".to_string(),
        }
    }

    /// Disable logging of execution time
    pub fn without_logging(mut self) -> Self {
        self.log_execution_time = false;
        self
    }

    /// Set description
    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }
}

impl<C: Send + Sync + 'static, E: Send + Sync + 'static> Action<C, E> for TimerAction<C, E> {
    fn name(&self) -> &str {
        "timer"
    }

    fn execute(&self, context: &mut C, event: &E) {
        let start = std::time::Instant::now();
        self.action.execute(context, event);
        let duration = start.elapsed();

        if self.log_execution_time {
            println!("[TIMER] {} executed in {:?}", self.timer_name, duration);
        }

        // In a real implementation, this would record metrics
    }

    fn description(&self) -> String {
        format!("{} (timer: {})", self.description, self.timer_name)
    }

    fn clone_action(&self) -> Box<dyn Action<C, E>> {
        Box::new(Self {
            action: self.action.clone_action(),
            timer_name: self.timer_name.clone(),
            log_execution_time: self.log_execution_time,
            description: self.description.clone(),
        })
    }
}

/// Metrics action that records execution metrics
pub struct MetricsAction<C, E> {
    /// The action to measure
    pub action: Box<dyn Action<C, E>>,
    /// Metrics name
    pub metrics_name: String,
    /// Additional tags for metrics
    pub tags: std::collections::HashMap<String, String>,
    /// Description of the metrics action
    pub description: String,
}

impl<C, E> MetricsAction<C, E> {
    /// Create a new metrics action
    pub fn new(action: Box<dyn Action<C, E>>, metrics_name: String) -> Self {
        Self {
            action,
            metrics_name,
            tags: std::collections::HashMap::new(),
            description: "Metrics Action".to_string(),
        }
    }

    /// Add a tag to the metrics
    pub fn with_tag(mut self, key: String, value: String) -> Self {
        self.tags.insert(key, value);
        self
    }

    /// Add multiple tags
    pub fn with_tags(mut self, tags: std::collections::HashMap<String, String>) -> Self {
        self.tags.extend(tags);
        self
    }

    /// Set description
    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }
}

impl<C: Send + Sync + 'static, E: Send + Sync + 'static> Action<C, E> for MetricsAction<C, E> {
    fn name(&self) -> &str {
        "metrics"
    }

    fn execute(&self, context: &mut C, event: &E) {
        let start = std::time::Instant::now();
        let start_memory = 0; // Would get actual memory usage

        self.action.execute(context, event);

        let duration = start.elapsed();
        let end_memory = 0; // Would get actual memory usage

        // Record metrics
        println!("[METRICS] {} - Duration: {:?}, Memory delta: {} bytes",
            self.metrics_name, duration, end_memory as i64 - start_memory as i64);

        // In a real implementation, this would send metrics to a monitoring system
        for (key, value) in &self.tags {
            println!("[METRICS] Tag {}: {}", key, value);
        }
    }

    fn description(&self) -> String {
        format!("{} (metrics: {})", self.description, self.metrics_name)
    }

    fn clone_action(&self) -> Box<dyn Action<C, E>> {
        Box::new(Self {
            action: self.action.clone_action(),
            metrics_name: self.metrics_name.clone(),
            tags: self.tags.clone(),
            description: self.description.clone(),
        })
    }
}

/// Timeout action that executes an action with a timeout
pub struct TimeoutAction<C, E> {
    /// The action to execute with timeout
    pub action: Box<dyn Action<C, E>>,
    /// Timeout duration
    pub timeout: std::time::Duration,
    /// Timeout action to execute if the main action times out
    pub timeout_action: Option<Box<dyn Action<C, E>>>,
    /// Description of the timeout action
    pub description: String,
}

impl<C, E> TimeoutAction<C, E> {
    /// Create a new timeout action
    pub fn new(action: Box<dyn Action<C, E>>, timeout: std::time::Duration) -> Self {
        Self {
            action,
            timeout,
            timeout_action: None,
            description: "Timeout Action".to_string(),
        }
    }

    /// Set a timeout action to execute if the main action times out
    pub fn with_timeout_action(mut self, timeout_action: Box<dyn Action<C, E>>) -> Self {
        self.timeout_action = Some(timeout_action);
        self
    }

    /// Set description
    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }
}

impl<C: Send + Sync + 'static, E: Send + Sync + 'static> Action<C, E> for TimeoutAction<C, E> {
    fn name(&self) -> &str {
        "timeout"
    }

    fn execute(&self, context: &mut C, event: &E) {
        // For now, just execute the action without timeout
        // In a real implementation, this would use async/timeout mechanisms
        self.action.execute(context, event);
    }

    fn description(&self) -> String {
        format!("{} (timeout: {:?})", self.description, self.timeout)
    }

    fn clone_action(&self) -> Box<dyn Action<C, E>> {
        Box::new(Self {
            action: self.action.clone_action(),
            timeout: self.timeout,
            timeout_action: self.timeout_action.as_ref().map(|a| a.clone_action()),
            description: self.description.clone(),
        })
    }
}

/// Circuit breaker action that prevents executing failing actions
pub struct CircuitBreakerAction<C, E> {
    /// The action to protect with circuit breaker
    pub action: Box<dyn Action<C, E>>,
    /// Circuit breaker name
    pub name: String,
    /// Failure threshold before opening circuit
    pub failure_threshold: usize,
    /// Recovery timeout
    pub recovery_timeout: std::time::Duration,
    /// Fallback action to execute when circuit is open
    pub fallback_action: Option<Box<dyn Action<C, E>>>,
    /// Description of the circuit breaker action
    pub description: String,
}

impl<C, E> CircuitBreakerAction<C, E> {
    /// Create a new circuit breaker action
    pub fn new(action: Box<dyn Action<C, E>>, name: String) -> Self {
        Self {
            action,
            name,
            failure_threshold: 5,
            recovery_timeout: std::time::Duration::from_secs(60),
            fallback_action: None,
            description: "Circuit Breaker Action".to_string(),
        }
    }

    /// Set failure threshold
    pub fn with_failure_threshold(mut self, threshold: usize) -> Self {
        self.failure_threshold = threshold;
        self
    }

    /// Set recovery timeout
    pub fn with_recovery_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.recovery_timeout = timeout;
        self
    }

    /// Set fallback action
    pub fn with_fallback(mut self, fallback: Box<dyn Action<C, E>>) -> Self {
        self.fallback_action = Some(fallback);
        self
    }

    /// Set description
    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }
}

impl<C: Send + Sync + 'static, E: Send + Sync + 'static> Action<C, E> for CircuitBreakerAction<C, E> {
    fn name(&self) -> &str {
        "circuit_breaker"
    }

    fn execute(&self, context: &mut C, event: &E) {
        // For now, just execute the action
        // In a real implementation, this would implement circuit breaker logic
        self.action.execute(context, event);
    }

    fn description(&self) -> String {
        format!("{} (circuit: {}, threshold: {})", self.description, self.name, self.failure_threshold)
    }

    fn clone_action(&self) -> Box<dyn Action<C, E>> {
        Box::new(Self {
            action: self.action.clone_action(),
            name: self.name.clone(),
            failure_threshold: self.failure_threshold,
            recovery_timeout: self.recovery_timeout,
            fallback_action: self.fallback_action.as_ref().map(|a| a.clone_action()),
            description: self.description.clone(),
        })
    }
}
