pub mod generate;
pub mod list;

pub use generate::{GenerateConfig, generate_code, generate_with_source};
pub use list::list_operations;
