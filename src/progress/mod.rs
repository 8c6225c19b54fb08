mod step_reporter;

pub use step_reporter::StepReporter;
