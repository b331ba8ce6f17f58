use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tabfold_core::{Record, Value};
use tabfold_data::{Dataset, DatasetRecipe, PrepareOptions};
use tracing::info;

use crate::error::IoError;

fn delimiter_byte(delimiter: char) -> Result<u8, IoError> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(IoError::Delimiter(delimiter))
    }
}

/// Read a delimited text file into raw text records, one per line.
///
/// No header handling: every line becomes a record, and a blank line is a
/// record with one empty field, so `header_length` counts raw lines.
/// Blank lines after the last data line are dropped. Lines may differ in
/// width so that embedded header blocks can be read and then dropped with
/// [`Dataset::remove_header`].
pub fn read_rows<P: AsRef<Path>>(path: P, delimiter: char) -> Result<Vec<Record>, IoError> {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(delimiter_byte(delimiter)?);

    let file = File::open(path.as_ref())?;
    let mut rows: Vec<Record> = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            rows.push(Record::new(vec![Value::Text(String::new())]));
            continue;
        }
        let mut rdr = builder.from_reader(line.as_bytes());
        let mut record = csv::StringRecord::new();
        rdr.read_record(&mut record)?;
        rows.push(record.iter().map(|f| Value::Text(f.to_string())).collect());
    }

    while rows.last().is_some_and(is_blank) {
        rows.pop();
    }
    Ok(rows)
}

fn is_blank(record: &Record) -> bool {
    matches!(record.values(), [Value::Text(s)] if s.is_empty())
}

/// Read `path` and run it through `recipe`.
pub fn load_dataset<P: AsRef<Path>>(
    path: P,
    recipe: &DatasetRecipe,
    options: &PrepareOptions,
) -> Result<Dataset, IoError> {
    let path = path.as_ref();
    let rows = read_rows(path, recipe.delimiter)?;
    info!(path = %path.display(), rows = rows.len(), recipe = %recipe.name, "read raw rows");
    let ds = recipe.prepare(rows, options)?;
    Ok(ds.with_source(path.display().to_string()))
}

/// Write one comma-joined line per record, replacing any existing file.
/// Fields are written unquoted, so a record with one empty field becomes
/// an empty line.
pub fn save_dataset<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<(), IoError> {
    let mut wtr = BufWriter::new(File::create(path.as_ref())?);
    for record in dataset.rows() {
        writeln!(wtr, "{}", record)?;
    }
    wtr.flush()?;
    Ok(())
}
