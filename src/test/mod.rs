
pub use runner::{Outcome, TestCase, TestResult, TestRunner, TestSuiteResult};
