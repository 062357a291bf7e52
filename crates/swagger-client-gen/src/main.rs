use clap::Parser;
use swagger_client_gen::ui::{
  self, Cli, Colors, colors,
  commands::{GenerateConfig, generate_code, list_operations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  ui::init_tracing(cli.verbose);
  let colors = Colors::new(colors::colors_enabled(cli.color), colors::detect_theme(cli.theme));

  if cli.list_operations {
    list_operations(&cli.url, &colors).await?;
  } else {
    generate_code(GenerateConfig::from_cli(cli), &colors).await?;
  }

  Ok(())
}
