pub mod engine;
pub mod outcome;

pub use engine::{Classifier, Strategy};
pub use outcome::Evaluation;
