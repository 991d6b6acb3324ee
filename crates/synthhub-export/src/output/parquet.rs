use std::sync::Arc;

use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;

use synthhub_core::schema::{Cell, ColumnKind};

use crate::errors::ExportError;
use crate::model::EntityTable;

/// Render an entity table as Parquet bytes. Text columns map to nullable
/// Utf8, integer columns to non-null Int64.
pub fn render_parquet(table: &EntityTable) -> Result<Vec<u8>, ExportError> {
    let fields: Vec<Field> = table
        .columns
        .iter()
        .map(|col| match col.kind {
            ColumnKind::Int => Field::new(col.name, DataType::Int64, false),
            ColumnKind::Text => Field::new(col.name, DataType::Utf8, true),
        })
        .collect();
    let schema = Arc::new(Schema::new(fields));

    let mut arrays: Vec<ArrayRef> = Vec::with_capacity(table.columns.len());
    for (index, col) in table.columns.iter().enumerate() {
        let array: ArrayRef = match col.kind {
            ColumnKind::Int => {
                let values: Vec<i64> = table
                    .rows
                    .iter()
                    .map(|row| match row.get(index) {
                        Some(Cell::Int(value)) => *value,
                        _ => 0,
                    })
                    .collect();
                Arc::new(Int64Array::from(values))
            }
            ColumnKind::Text => {
                let values: Vec<Option<String>> = table
                    .rows
                    .iter()
                    .map(|row| match row.get(index) {
                        Some(Cell::Text(value)) => Some(value.clone()),
                        Some(Cell::Int(value)) => Some(value.to_string()),
                        _ => None,
                    })
                    .collect();
                Arc::new(StringArray::from(values))
            }
        };
        arrays.push(array);
    }

    let batch = RecordBatch::try_new(Arc::clone(&schema), arrays)?;
    let mut buffer = Vec::new();
    let props = WriterProperties::builder().build();
    let mut writer = ArrowWriter::try_new(&mut buffer, schema, Some(props))?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(buffer)
}
