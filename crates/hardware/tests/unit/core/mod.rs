/// Functional interpreter and agreement with the pipeline.
pub mod functional;
