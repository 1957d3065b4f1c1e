// Strategy: the algorithm is a function value handed over at construction
// time. Without one, the default behaviour runs.

/// Signature shared by every execute strategy: `(strategy name, job data)`.
pub type ExecuteFn = Box<dyn Fn(&str, &str) -> String + Send + Sync>;

pub struct StrategyExample {
    name: String,
    execute: Option<ExecuteFn>,
}

impl StrategyExample {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            execute: None,
        }
    }

    pub fn with_execute<F>(name: impl Into<String>, execute: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            execute: Some(Box::new(execute)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn execute(&self, data: &str) -> String {
        match &self.execute {
            Some(execute) => execute(&self.name, data),
            None => format!("{} from execute{}", self.name, data),
        }
    }
}

pub fn execute_replacement1(name: &str, data: &str) -> String {
    format!("{name} from execute 1{data}")
}

pub fn execute_replacement2(name: &str, data: &str) -> String {
    format!("{name} from execute 2{data}")
}

/// The client: owns a strategy and the data it hands to it.
pub struct Job {
    strategy: StrategyExample,
    data: String,
}

impl Job {
    pub const DEFAULT_DATA: &'static str = ", solving blah";

    pub fn new(strategy: StrategyExample) -> Self {
        Self {
            strategy,
            data: Self::DEFAULT_DATA.to_string(),
        }
    }

    pub fn with_data(strategy: StrategyExample, data: impl Into<String>) -> Self {
        Self {
            strategy,
            data: data.into(),
        }
    }

    pub fn set_strategy(&mut self, strategy: StrategyExample) {
        self.strategy = strategy;
    }

    pub fn run(&self) -> String {
        self.strategy.execute(&self.data)
    }
}
