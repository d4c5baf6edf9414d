mod metrics;
mod outcome;

#[cfg(test)]
mod tests;

pub use metrics::AssessmentMetrics;
pub use outcome::record_outcome;
