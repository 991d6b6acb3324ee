use crate::model::EntityTable;

/// Render an entity table as CSV bytes with the canonical column order.
/// Optional fields serialize as empty strings.
pub fn render_csv(table: &EntityTable) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    let header: Vec<&str> = table.columns.iter().map(|col| col.name).collect();
    writer.write_record(&header)?;

    for row in &table.rows {
        let record: Vec<String> = row.iter().map(|cell| cell.to_csv()).collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    writer.into_inner().map_err(|err| err.into_error().into())
}
