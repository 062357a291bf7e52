pub mod binder;
pub mod codegen;
pub mod context;
pub mod errors;
pub mod negotiator;
pub mod orchestrator;
pub mod types;


pub use codegen::{CodeEmitter, EmittedClient};
pub use context::{AcceptPolicy, DecodePolicy, GenerateOptions, GenerationContext, ModelRegistry, PathParamMode};
pub use errors::GenerateError;
pub use orchestrator::{GenerationStats, OperationSummary, Orchestrator, generate_from_description};
