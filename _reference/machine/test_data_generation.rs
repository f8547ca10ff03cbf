//! Test data generation for state machine testing

use super::*;
use std::collections::HashMap;
use std::hash::Hash;

/// Test data generator trait
pub trait TestDataGenerator<C, E> {
    /// Generate test context
    fn generate_context(&self) -> C;

    /// Generate test event
    fn generate_event(&self) -> E;

    /// Generate test context for a specific state
    fn generate_context_for_state(&self, state: &str) -> C;

    /// Generate test event for a specific transition
    fn generate_event_for_transition(&self, from: &str, to: &str) -> E;
}

/// Default test data generator
pub struct DefaultTestDataGenerator;

impl<C, E> TestDataGenerator<C, E> for DefaultTestDataGenerator {
    fn generate_context(&self) -> C {
        // This would generate appropriate test context
        // For now, return a placeholder
        unsafe { std::mem::zeroed() } // This is unsafe and should be replaced
    }

    fn generate_event(&self) -> E {
        // This would generate appropriate test event
        // For now, return a placeholder
        unsafe { std::mem::zeroed() } // This is unsafe and should be replaced
    }

    fn generate_context_for_state(&self, _state: &str) -> C {
        // This would generate context appropriate for the state
        // For now, return a placeholder
        unsafe { std::mem::zeroed() } // This is unsafe and should be replaced
    }

    fn generate_event_for_transition(&self, _from: &str, _to: &str) -> E {
        // This would generate event appropriate for the transition
        // For now, return a placeholder
        unsafe { std::mem::zeroed() } // This is unsafe and should be replaced
    }
}

/// Test data generator for specific machine types
pub struct MachineTestDataGenerator<C: Clone + Send + Sync + std::fmt::Debug + 'static, E: Clone + Send + Sync + std::fmt::Debug + PartialEq + 'static> {
    /// Machine being tested
    pub machine: Machine<C, E, C>,
    /// Context templates
    pub context_templates: HashMap<String, C>,
    /// Event templates
    pub event_templates: HashMap<String, E>,
}

impl<
        C: Send + Sync + Clone + PartialEq + 'static,
        E: Clone + Send + Sync + Hash + Eq + 'static,
    > MachineTestDataGenerator<C, E>
{
    /// Create a new machine test data generator
    pub fn new(machine: Machine<C, E, C>) -> Self {
        Self {
            machine,
            context_templates: HashMap::new(),
            event_templates: HashMap::new(),
        }
    }

    /// Add a context template
    pub fn add_context_template(&mut self, name: String, context: C) {
        self.context_templates.insert(name, context);
    }

    /// Add an event template
    pub fn add_event_template(&mut self, name: String, event: E) {
        self.event_templates.insert(name, event);
    }

    /// Generate test data based on machine structure
    pub fn generate_machine_test_data(&self) -> Vec<(C, E)> {
        let mut test_data = Vec::new();

        // Generate test data for each state
        for state_name in self.machine.get_states() {
            if let Some(state_node) = self.machine.states_map().get(&state_name) {
                // Generate context for this state
                let context = self.generate_context_for_state(&state_name);

                // Generate events for each transition
                for transition in &state_node.transitions {
                    let event = transition.event.clone();
                    test_data.push((context.clone(), event));
                }
            }
        }

        test_data
    }

    /// Generate context for a specific state
    fn generate_context_for_state(&self, state_name: &str) -> C {
        // This would generate context appropriate for the state
        // For now, return a placeholder
        unsafe { std::mem::zeroed() } // This is unsafe and should be replaced
    }

    /// Generate event for a specific transition
    fn generate_event_for_transition(&self, from: &str, to: &str) -> E {
        // This would generate event appropriate for the transition
        // For now, return a placeholder
        unsafe { std::mem::zeroed() } // This is unsafe and should be replaced
    }
}

impl<C: Clone + Send + Sync + std::fmt::Debug + 'static, E: Clone + Send + Sync + std::fmt::Debug + PartialEq + 'static> TestDataGenerator<C, E> for MachineTestDataGenerator<C, E> {
    fn generate_context(&self) -> C {
        // Generate a random context
        unsafe { std::mem::zeroed() } // This is unsafe and should be replaced
    }

    fn generate_event(&self) -> E {
        // Generate a random event
        unsafe { std::mem::zeroed() } // This is unsafe and should be replaced
    }

    fn generate_context_for_state(&self, state: &str) -> C {
        self.generate_context_for_state(state)
    }

    fn generate_event_for_transition(&self, from: &str, to: &str) -> E {
        self.generate_event_for_transition(from, to)
    }
}

/// Test data generation strategies
pub enum DataGenerationStrategy {
    /// Generate random data
    Random,
    /// Generate data based on patterns
    Pattern,
    /// Generate data based on coverage
    CoverageBased,
    /// Generate data based on machine structure
    MachineBased,
}

/// Test data generation configuration
pub struct DataGenerationConfig {
    /// Strategy to use
    pub strategy: DataGenerationStrategy,
    /// Number of test cases to generate
    pub test_case_count: usize,
    /// Whether to include edge cases
    pub include_edge_cases: bool,
    /// Whether to include error cases
    pub include_error_cases: bool,
}

impl Default for DataGenerationConfig {
    fn default() -> Self {
        Self {
            strategy: DataGenerationStrategy::Random,
            test_case_count: 100,
            include_edge_cases: true,
            include_error_cases: true,
        }
    }
}

/// Test data generation manager
pub struct TestDataGenerationManager<C, E> {
    /// Configuration
    pub config: DataGenerationConfig,
    /// Generators
    pub generators: Vec<Box<dyn TestDataGenerator<C, E>>>,
}

impl<C, E> TestDataGenerationManager<C, E> {
    /// Create a new test data generation manager
    pub fn new(config: DataGenerationConfig) -> Self {
        Self {
            config,
            generators: Vec::new(),
        }
    }

    /// Add a generator
    pub fn add_generator(&mut self, generator: Box<dyn TestDataGenerator<C, E>>) {
        self.generators.push(generator);
    }

    /// Generate test data using all generators
    pub fn generate_test_data(&self) -> Vec<(C, E)> {
        let mut all_test_data = Vec::new();

        for generator in &self.generators {
            let test_data = self.generate_with_generator(generator);
            all_test_data.extend(test_data);
        }

        all_test_data
    }

    /// Generate test data with a specific generator
    fn generate_with_generator(&self, generator: &dyn TestDataGenerator<C, E>) -> Vec<(C, E)> {
        let mut test_data = Vec::new();

        for _ in 0..self.config.test_case_count {
            let context = generator.generate_context();
            let event = generator.generate_event();
            test_data.push((context, event));
        }

        test_data
    }
}
