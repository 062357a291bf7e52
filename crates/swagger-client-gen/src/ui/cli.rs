use std::path::PathBuf;

use clap::Parser;

use super::colors::{ColorMode, Colors, ThemeMode};
use crate::generator::{AcceptPolicy, DecodePolicy};

#[derive(Parser, Debug)]
#[command(name = "swagger-client-gen")]
#[command(author, version, about = "Swagger 1.2 to Rust HTTP client generator")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  /// Endpoint of the resource listing (e.g. http://myservice/apidocs.json)
  #[arg(long, value_name = "URL")]
  pub url: String,

  /// Name of the module wrapping the generated client
  #[arg(long = "pkg", value_name = "NAME", default_value = "client")]
  pub package: String,

  /// Path where the generated Rust code will be written [default: <temp dir>/service.rs]
  #[arg(short, long, value_name = "FILE")]
  pub output: Option<PathBuf>,

  /// How generated methods decode response bodies
  #[arg(long, value_enum, default_value_t)]
  pub decode: DecodePolicy,

  /// How the Accept header is built from the declared MIME types
  #[arg(long, value_enum, default_value_t)]
  pub accept: AcceptPolicy,

  /// Fail when a path placeholder has no matching path parameter
  #[arg(long, default_value_t = false)]
  pub strict_path_params: bool,

  /// Print the operations of the description instead of generating code
  #[arg(long, default_value_t = false)]
  pub list_operations: bool,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false, conflicts_with = "quiet")]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto")]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto")]
  pub theme: ThemeMode,
}
