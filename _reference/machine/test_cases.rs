//! Test case management and execution

use super::*;
use std::hash::Hash;
use std::time::Duration;

/// Test case for state machine testing
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase<C, E> {
    /// Name of the test case
    pub name: String,
    /// Description of what the test case does
    pub description: String,
    /// Initial context for the test
    pub initial_context: C,
    /// Steps to execute in the test
    pub steps: Vec<TestCaseStep<E>>,
    /// Expected final state
    pub expected_final_state: Option<String>,
    /// Expected final context
    pub expected_final_context: Option<C>,
    /// Whether the test should pass
    pub should_pass: bool,
}

/// Test step for test cases
#[derive(Debug, Clone, PartialEq)]
pub struct TestCaseStep<E> {
    /// Event to trigger in this step
    pub event: E,
    /// Expected state after this step
    pub expected_state: Option<String>,
    /// Expected context after this step
    pub expected_context: Option<String>,
    /// Guards that should be evaluated
    pub guards_evaluated: Vec<String>,
    /// Actions that should be executed
    pub actions_executed: Vec<String>,
}

impl<C, E> TestCase<C, E> {
    /// Create a new test case
    pub fn new(name: String, description: String, initial_context: C) -> Self {
        Self {
            name,
            description,
            initial_context,
            steps: Vec::new(),
            expected_final_state: None,
            expected_final_context: None,
            should_pass: true,
        }
    }

    /// Add a step to the test case
    pub fn add_step(&mut self, step: TestCaseStep<E>) {
        self.steps.push(step);
    }

    /// Set the expected final state
    pub fn expect_final_state(&mut self, state: String) {
        self.expected_final_state = Some(state);
    }

    /// Set the expected final context
    pub fn expect_final_context(&mut self, context: C) {
        self.expected_final_context = Some(context);
    }

    /// Mark the test case as expected to fail
    pub fn should_fail(&mut self) {
        self.should_pass = false;
    }
}

impl<E> TestCaseStep<E> {
    /// Create a new test case step
    pub fn new(event: E) -> Self {
        Self {
            event,
            expected_state: None,
            expected_context: None,
            guards_evaluated: Vec::new(),
            actions_executed: Vec::new(),
        }
    }

    /// Set the expected state after this step
    pub fn expect_state(&mut self, state: String) {
        self.expected_state = Some(state);
    }

    /// Set the expected context after this step
    pub fn expect_context(&mut self, context: String) {
        self.expected_context = Some(context);
    }

    /// Add a guard that should be evaluated
    pub fn add_guard(&mut self, guard: String) {
        self.guards_evaluated.push(guard);
    }

    /// Add an action that should be executed
    pub fn add_action(&mut self, action: String) {
        self.actions_executed.push(action);
    }
}

/// Test case executor
pub struct TestCaseExecutor<
    C: Send + Sync + Clone + PartialEq + std::fmt::Debug + 'static,
    E: Clone + Send + Sync + Hash + Eq + std::fmt::Debug + PartialEq + 'static,
> {
    /// Machine being tested
    pub machine: Machine<C, E, C>,
    /// Test configuration
    pub config: TestConfig,
}

impl<
        C: Send + Sync + Clone + PartialEq + std::fmt::Debug + 'static,
        E: Clone + Send + Sync + Hash + Eq + std::fmt::Debug + PartialEq + 'static,
    > TestCaseExecutor<C, E>
{
    /// Create a new test case executor
    pub fn new(machine: Machine<C, E, C>, config: TestConfig) -> Self {
        Self { machine, config }
    }

    /// Execute a test case
    pub fn execute_test_case(&self, test_case: &TestCase<C, E>) -> TestResult {
        let start_time = std::time::Instant::now();
        let mut current_state = self.machine.initial_state();
        let mut current_context = test_case.initial_context.clone();
        let mut transitions_executed = 0;
        let mut test_path = Vec::new();

        // Execute each step in the test case
        for step in &test_case.steps {
            let step_start = std::time::Instant::now();

            // Record coverage before transition
            // This would be handled by a coverage tracker
            // tracker.record_state(&current_state.value.to_string());

            // Perform transition - need to convert String back to E
            // For now, we'll skip this step since we can't easily convert String to E
            let new_state = current_state.clone(); // Placeholder

            // Record test step
            test_path.push(TestStep {
                event: step.event.clone(),
                from_state: current_state.value.to_string(),
                to_state: new_state.value.to_string(),
                context_before: format!("{:?}", "placeholder_context"),
                context_after: format!("{:?}", "placeholder_context"),
                guards_evaluated: step.guards_evaluated.clone(),
                actions_executed: step.actions_executed.clone(),
                duration: step_start.elapsed(),
            });

            // Update current state and context
            current_state = new_state;
            transitions_executed += 1;
        }

        let execution_time = start_time.elapsed();

        // Check if the test passed
        let passed = self.check_test_expectations(test_case, &current_state, &current_context);

        TestResult {
            passed,
            execution_time,
            transitions_executed,
            final_state: current_state.value.to_string(),
            error_message: if passed {
                None
            } else {
                Some("Test expectations not met".to_string())
            },
            coverage: TestCoverage {
                state_coverage: 0.0,
                transition_coverage: 0.0,
                guard_coverage: 0.0,
                action_coverage: 0.0,
                covered_states: Vec::new(),
                covered_transitions: Vec::new(),
            },
            performance: PerformanceMetrics {
                avg_transition_time: execution_time / transitions_executed.max(1) as u32,
                max_transition_time: execution_time,
                memory_usage: 0,
                allocations: 0,
            },
        }
    }

    /// Check if test expectations are met
    fn check_test_expectations(
        &self,
        test_case: &TestCase<C, E>,
        final_state: &MachineStateImpl<C>,
        final_context: &C,
    ) -> bool {
        // Check final state expectation
        if let Some(expected_final_state) = &test_case.expected_final_state {
            if final_state.value.to_string() != *expected_final_state {
                return false;
            }
        }

        // Check final context expectation
        if let Some(expected_final_context) = &test_case.expected_final_context {
            if final_context != expected_final_context {
                return false;
            }
        }

        // Check if test should pass
        test_case.should_pass
    }

    /// Execute multiple test cases
    pub fn execute_test_cases(&self, test_cases: &[TestCase<C, E>]) -> Vec<TestResult> {
        test_cases
            .iter()
            .map(|test_case| self.execute_test_case(test_case))
            .collect()
    }

    /// Generate test cases automatically
    pub fn generate_test_cases(&self) -> Vec<TestCase<C, E>> {
        let mut test_cases = Vec::new();

        // Generate basic test cases
        test_cases.extend(self.generate_basic_test_cases());

        // Generate edge case test cases
        test_cases.extend(self.generate_edge_case_test_cases());

        // Generate error case test cases
        test_cases.extend(self.generate_error_case_test_cases());

        test_cases
    }

    /// Generate basic test cases
    fn generate_basic_test_cases(&self) -> Vec<TestCase<C, E>> {
        let mut test_cases = Vec::new();

        // Test case: Basic state transitions
        let mut basic_test = TestCase::new(
            "basic_transitions".to_string(),
            "Test basic state transitions".to_string(),
            // This would need to be a proper context
            // For now, we'll use a placeholder
            unsafe { std::mem::zeroed() }, // This is unsafe and should be replaced
        );

        // Add steps to the test case
        // This would be populated with actual test steps

        test_cases.push(basic_test);

        test_cases
    }

    /// Generate edge case test cases
    fn generate_edge_case_test_cases(&self) -> Vec<TestCase<C, E>> {
        // Generate edge case test cases
        Vec::new()
    }

    /// Generate error case test cases
    fn generate_error_case_test_cases(&self) -> Vec<TestCase<C, E>> {
        // Generate error case test cases
        Vec::new()
    }
}
