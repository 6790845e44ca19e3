pub mod classifier;
pub mod normalizer;
pub mod prompt_builder;
pub mod sorter;
