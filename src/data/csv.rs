//! Delimited-text parsing for labeled score data.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::{DataError, LoadOptions, ScoredDataset};

/// Parse a label column value.
fn parse_label(value: &str, line: usize) -> Result<bool, DataError> {
    match value {
        "1" => Ok(true),
        "0" => Ok(false),
        other => match other.to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(DataError::InvalidLabel {
                line,
                value: value.to_string(),
            }),
        },
    }
}

/// Parse a score column value.
fn parse_score(value: &str, line: usize) -> Result<f64, DataError> {
    value.parse().map_err(|_| DataError::InvalidScore {
        line,
        value: value.to_string(),
    })
}

/// Split a line into at least `want` columns.
fn split_columns<'a>(
    line: &'a str,
    delimiter: char,
    want: usize,
    line_num: usize,
) -> Result<Vec<&'a str>, DataError> {
    let parts: Vec<&str> = line.split(delimiter).map(str::trim).collect();
    if parts.len() < want {
        return Err(DataError::Parse {
            line: line_num,
            message: format!("Expected {} columns, got {}", want, parts.len()),
        });
    }
    Ok(parts)
}

/// Load a single dataset from a two-column (`label`, `score`) file.
///
/// The dataset is named after the file stem. Empty lines are skipped; the
/// header line is skipped when `options.has_header` is set.
///
/// # Errors
///
/// Returns [`DataError`] if the file cannot be read, a line is malformed,
/// or no data rows remain.
pub fn load_labeled_scores(path: &Path, options: &LoadOptions) -> Result<ScoredDataset, DataError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_string());

    let mut labels = Vec::new();
    let mut scores = Vec::new();

    for (line_idx, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if options.has_header && line_idx == 0 {
            continue;
        }

        let line_num = line_idx + 1;
        let parts = split_columns(line, options.delimiter, 2, line_num)?;
        labels.push(parse_label(parts[0], line_num)?);
        scores.push(parse_score(parts[1], line_num)?);
    }

    if labels.is_empty() {
        return Err(DataError::Empty);
    }

    debug!(
        dataset = %name,
        observations = labels.len(),
        "loaded labeled scores"
    );
    Ok(ScoredDataset::new(name, labels, scores))
}

/// Load several named datasets from a three-column
/// (`dataset`, `label`, `score`) file.
///
/// Rows are grouped on the first column; datasets are returned in order of
/// first appearance.
///
/// # Errors
///
/// Returns [`DataError`] if the file cannot be read, a line is malformed,
/// or no data rows remain.
pub fn load_grouped_scores(
    path: &Path,
    options: &LoadOptions,
) -> Result<Vec<ScoredDataset>, DataError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut datasets: Vec<ScoredDataset> = Vec::new();

    for (line_idx, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if options.has_header && line_idx == 0 {
            continue;
        }

        let line_num = line_idx + 1;
        let parts = split_columns(line, options.delimiter, 3, line_num)?;
        let group = parts[0];
        let label = parse_label(parts[1], line_num)?;
        let score = parse_score(parts[2], line_num)?;

        match datasets.iter_mut().find(|d| d.name == group) {
            Some(dataset) => {
                dataset.labels.push(label);
                dataset.scores.push(score);
            }
            None => {
                datasets.push(ScoredDataset::new(group, vec![label], vec![score]));
            }
        }
    }

    if datasets.is_empty() {
        return Err(DataError::Empty);
    }

    debug!(
        datasets = datasets.len(),
        observations = datasets.iter().map(|d| d.len()).sum::<usize>(),
        "loaded grouped scores"
    );
    Ok(datasets)
}
