//! CSV/TSV readers and writers for the toolbox CLI.
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use ndarray::{Array1, Array2};

/// Require a `.csv` or `.tsv` extension and an existing file.
pub fn validate_csv_or_tsv_file(path: &str) -> Result<()> {
    let pb = PathBuf::from(path);

    let ext = pb
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("csv") | Some("tsv") => {}
        _ => bail!("File must have a .csv or .tsv extension: {}", path),
    }

    if !pb.exists() {
        bail!("File does not exist: {}", path);
    }

    Ok(())
}

fn delimiter_for(path: &Path) -> u8 {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
        _ => b',',
    }
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .delimiter(delimiter_for(path))
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))
}

/// Read every numeric field of a CSV/TSV file into a flat array.
///
/// Rows may have different widths; empty fields are skipped.
pub fn read_numeric_file<P: AsRef<Path>>(path: P) -> Result<Array1<f64>> {
    let path = path.as_ref();
    let mut reader = open_reader(path)?;

    let mut values = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record
            .with_context(|| format!("Failed to read row {} of {}", row + 1, path.display()))?;
        for (col, field) in record.iter().enumerate() {
            let field = field.trim();
            if field.is_empty() {
                continue;
            }
            let value: f64 = field.parse().with_context(|| {
                format!(
                    "Invalid number '{}' at row {}, column {} of {}",
                    field,
                    row + 1,
                    col + 1,
                    path.display()
                )
            })?;
            values.push(value);
        }
    }
    Ok(Array1::from_vec(values))
}

/// Read a CSV/TSV file as a matrix: one record per row, one field per column.
///
/// Every row must have the same width.
pub fn read_matrix_file<P: AsRef<Path>>(path: P) -> Result<Array2<f64>> {
    let path = path.as_ref();
    let mut reader = open_reader(path)?;

    let mut data = Vec::new();
    let mut nrows = 0usize;
    let mut width: Option<usize> = None;

    for (row, record) in reader.records().enumerate() {
        let record = record
            .with_context(|| format!("Failed to read row {} of {}", row + 1, path.display()))?;
        let expected = *width.get_or_insert(record.len());
        if record.len() != expected {
            bail!(
                "Row {} of {} has {} values, expected {}",
                row + 1,
                path.display(),
                record.len(),
                expected
            );
        }
        for (col, field) in record.iter().enumerate() {
            let value: f64 = field.trim().parse().with_context(|| {
                format!(
                    "Invalid number '{}' at row {}, column {} of {}",
                    field,
                    row + 1,
                    col + 1,
                    path.display()
                )
            })?;
            data.push(value);
        }
        nrows += 1;
    }

    let ncols = match width {
        Some(w) => w,
        None => bail!("Matrix file is empty: {}", path.display()),
    };
    Ok(Array2::from_shape_vec((nrows, ncols), data).expect("read_matrix_file: shape mismatch"))
}

/// Write a matrix as CSV, one record per row.
pub fn write_matrix<W: Write>(writer: W, matrix: &Array2<f64>) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    for row in matrix.rows() {
        out.write_record(row.iter().map(|v| v.to_string()))
            .context("Failed to write matrix row")?;
    }
    out.flush().context("Failed to flush matrix output")?;
    Ok(())
}

/// Write a matrix as CSV to a file path.
pub fn write_matrix_file<P: AsRef<Path>>(path: P, matrix: &Array2<f64>) -> Result<()> {
    let file = std::fs::File::create(path.as_ref())
        .with_context(|| format!("Failed to create output file: {}", path.as_ref().display()))?;
    write_matrix(file, matrix)
}
