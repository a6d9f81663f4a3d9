pub mod gemini;
pub mod metrics;
pub mod prompt;
pub mod renderer;
pub mod simplifier;
pub mod workbench;

pub use gemini::{GeminiClient, TextBackend};
pub use renderer::{render, Block, Section};
pub use simplifier::simplify;
pub use workbench::Workbench;
