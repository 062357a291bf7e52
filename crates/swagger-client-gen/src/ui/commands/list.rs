use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  fetcher::HttpSource,
  generator::{GenerateOptions, OperationSummary, Orchestrator},
  ui::{Colors, term_width},
};

pub async fn list_operations(url: &str, colors: &Colors) -> anyhow::Result<()> {
  let orchestrator = Orchestrator::new(HttpSource::new()?, GenerateOptions::default());
  let operations = orchestrator.list_operations(url).await?;

  println!("{}", operations_table(&operations, colors));
  Ok(())
}

/// Renders operations in emission order, one row per operation.
pub(crate) fn operations_table(operations: &[OperationSummary], colors: &Colors) -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  for title in ["NICKNAME", "METHOD", "PATH", "SUMMARY"] {
    header.add_cell(Cell::new(title).fg(Colors::cell(colors.label())));
  }
  table.set_header(header);

  for operation in operations {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(&operation.nickname)
        .fg(Colors::cell(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(&operation.method)
        .fg(Colors::cell(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(&operation.path).fg(Colors::cell(colors.primary())));
    row.add_cell(Cell::new(operation.summary.as_deref().unwrap_or_default()));
    table.add_row(row);
  }

  table
}
