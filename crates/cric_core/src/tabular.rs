//! Tabular dataset profiling.
//!
//! Builds a column-level summary of a CSV file (row counts, missing
//! values, numeric distributions) suitable for the dataset-summary
//! prompt. Cells are profiled as text; a column is numeric when every
//! populated cell parses as a number.

use std::path::Path;

use serde::Serialize;

use crate::error::TabularError;

/// Column-level profile of one CSV dataset.
#[derive(Debug, Clone, Serialize)]
pub struct CsvProfile {
    pub total_rows: usize,
    pub columns: Vec<ColumnProfile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    /// Empty cells in this column.
    pub missing: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericSummary>,
}

/// Distribution summary over the populated cells of a numeric column.
#[derive(Debug, Clone, Serialize)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator), 0.0 for a single value.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl CsvProfile {
    /// Column names in file order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn numeric_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.numeric.is_some())
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Dataset-summary prompt for the narrative backend.
    pub fn prompt(&self) -> String {
        let profile = serde_json::to_string_pretty(self).expect("profile serializes to JSON");
        format!(
            "Analyze this CSV data summary:\n{profile}\n\n\
             Provide a concise report with:\n\
             1. Dataset overview\n\
             2. Key column descriptions\n\
             3. Notable patterns/insights\n\
             4. Data quality issues\n\n\
             Use markdown formatting."
        )
    }

    /// Plain-text rendering for CLI output.
    pub fn render_text(&self) -> String {
        let mut out = format!(
            "Dataset: {} rows, {} columns ({} numeric)\n",
            self.total_rows,
            self.columns.len(),
            self.numeric_columns().len()
        );
        for column in &self.columns {
            match &column.numeric {
                Some(summary) => {
                    out.push_str(&format!(
                        "  {}: numeric, {} values, {} missing, mean {:.2}, std {:.2}, range [{:.2}, {:.2}]\n",
                        column.name,
                        summary.count,
                        column.missing,
                        summary.mean,
                        summary.std_dev,
                        summary.min,
                        summary.max
                    ));
                }
                None => {
                    out.push_str(&format!(
                        "  {}: text, {} missing\n",
                        column.name, column.missing
                    ));
                }
            }
        }
        out
    }
}

/// Profile a headered CSV file.
pub fn profile_csv(path: &Path) -> Result<CsvProfile, TabularError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    if headers.is_empty() {
        return Err(TabularError::Empty);
    }

    let mut states: Vec<ColumnState> = headers.into_iter().map(ColumnState::new).collect();
    let mut total_rows = 0usize;

    for result in reader.records() {
        let record = result?;
        total_rows += 1;
        for (idx, state) in states.iter_mut().enumerate() {
            // Short rows in flexible mode count as missing cells.
            state.observe(record.get(idx).unwrap_or(""));
        }
    }

    log::debug!("profiled CSV: {} rows, {} columns", total_rows, states.len());

    Ok(CsvProfile {
        total_rows,
        columns: states.into_iter().map(ColumnState::finish).collect(),
    })
}

struct ColumnState {
    name: String,
    missing: usize,
    values: Vec<f64>,
    all_numeric: bool,
}

impl ColumnState {
    fn new(name: String) -> Self {
        Self { name, missing: 0, values: Vec::new(), all_numeric: true }
    }

    fn observe(&mut self, cell: &str) {
        let cell = cell.trim();
        if cell.is_empty() {
            self.missing += 1;
            return;
        }
        if !self.all_numeric {
            return;
        }
        match cell.parse::<f64>() {
            Ok(value) => self.values.push(value),
            Err(_) => {
                self.all_numeric = false;
                self.values.clear();
            }
        }
    }

    fn finish(self) -> ColumnProfile {
        let numeric = if self.all_numeric && !self.values.is_empty() {
            Some(summarize(&self.values))
        } else {
            None
        };
        ColumnProfile { name: self.name, missing: self.missing, numeric }
    }
}

fn summarize(values: &[f64]) -> NumericSummary {
    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let std_dev = if count > 1 {
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        variance.sqrt()
    } else {
        0.0
    };
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    NumericSummary { count, mean, std_dev, min, max }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn profiles_numeric_and_text_columns() {
        let file = write_csv(
            "player,runs,team\n\
             Warner,73,SRH\n\
             Dhawan,45,SRH\n\
             Pant,,DD\n",
        );

        let profile = profile_csv(file.path()).unwrap();
        assert_eq!(profile.total_rows, 3);
        assert_eq!(profile.column_names(), vec!["player", "runs", "team"]);
        assert_eq!(profile.numeric_columns(), vec!["runs"]);

        let runs = &profile.columns[1];
        assert_eq!(runs.missing, 1);
        let summary = runs.numeric.as_ref().unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.mean, 59.0);
        assert_eq!(summary.min, 45.0);
        assert_eq!(summary.max, 73.0);
        // Sample std dev of {45, 73}: |73 - 59| * sqrt(2) / sqrt(1)
        assert!((summary.std_dev - 19.79898987).abs() < 1e-6);
    }

    #[test]
    fn mixed_column_is_not_numeric() {
        let file = write_csv("score\n10\nDNB\n12\n");
        let profile = profile_csv(file.path()).unwrap();
        assert!(profile.columns[0].numeric.is_none());
        assert_eq!(profile.columns[0].missing, 0);
    }

    #[test]
    fn prompt_mentions_quality_sections() {
        let file = write_csv("a,b\n1,x\n");
        let prompt = profile_csv(file.path()).unwrap().prompt();
        assert!(prompt.contains("Analyze this CSV data summary"));
        assert!(prompt.contains("Data quality issues"));
    }

    #[test]
    fn render_text_lists_each_column() {
        let file = write_csv("a,b\n1,x\n2,y\n");
        let text = profile_csv(file.path()).unwrap().render_text();
        assert!(text.contains("2 rows, 2 columns (1 numeric)"));
        assert!(text.contains("a: numeric"));
        assert!(text.contains("b: text"));
    }
}
