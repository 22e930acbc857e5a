// src/core/batch.rs

use crate::algorithms::Factorizer;
use crate::factor::ResultMap;
use glob::glob;
use log::{info, warn};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// I/O-layer failure while moving a batch through the factorizer.
#[derive(Debug)]
pub enum BatchError {
    MissingDirectory { path: PathBuf },
    Pattern { path: PathBuf, source: glob::PatternError },
    Read { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BatchError::MissingDirectory { path } => {
                write!(f, "{} doesn't exist or is not a directory", path.display())
            }
            BatchError::Pattern { path, source } => {
                write!(f, "cannot list {}: {}", path.display(), source)
            }
            BatchError::Read { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            BatchError::Write { path, source } => {
                write!(f, "cannot write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::MissingDirectory { .. } => None,
            BatchError::Pattern { source, .. } => Some(source),
            BatchError::Read { source, .. } => Some(source),
            BatchError::Write { source, .. } => Some(source),
        }
    }
}

/// Where a batch run reads its number files and drops its answers.
#[derive(Debug, Clone)]
pub struct BatchLocations {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl BatchLocations {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(input_dir: P, output_dir: Q) -> Self {
        BatchLocations {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Output path for one input file: `numbers.txt` → `answer_numbers.txt`
    /// in the output directory.
    pub fn answer_path(&self, input_file: &Path) -> PathBuf {
        let name = input_file
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.output_dir.join(format!("answer_{}", name))
    }
}

/// All regular files in the input directory, in sorted name order.
pub fn enumerate_input_files(locations: &BatchLocations) -> Result<Vec<PathBuf>, BatchError> {
    if !locations.input_dir.is_dir() {
        return Err(BatchError::MissingDirectory {
            path: locations.input_dir.clone(),
        });
    }
    let pattern = format!("{}/*", locations.input_dir.display());
    let paths = glob(&pattern).map_err(|source| BatchError::Pattern {
        path: locations.input_dir.clone(),
        source,
    })?;
    let mut files: Vec<PathBuf> = paths
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// Parses one decimal integer per line. Blank lines are ignored; lines that
/// are not an integer are logged and skipped — a malformed line never aborts
/// the batch.
pub fn read_numbers(path: &Path) -> Result<Vec<u64>, BatchError> {
    let contents = fs::read_to_string(path).map_err(|source| BatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut numbers = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<u64>() {
            Ok(n) => numbers.push(n),
            Err(_) => warn!(
                "{}:{}: skipping non-integer line '{}'",
                path.display(),
                index + 1,
                line
            ),
        }
    }
    Ok(numbers)
}

/// Factors a batch in input order. Rejected inputs (< 2) are logged and
/// skipped; everything else lands in the map.
pub fn run_batch(factorizer: &Factorizer, numbers: &[u64]) -> ResultMap {
    let start = Instant::now();
    let mut results = ResultMap::with_capacity(numbers.len());
    for &n in numbers {
        match factorizer.factorize(n) {
            Ok(factorization) => results.insert(factorization),
            Err(e) => warn!("skipping input: {}", e),
        }
    }
    info!(
        "factored {} of {} inputs in {:.3?}",
        results.len(),
        numbers.len(),
        start.elapsed()
    );
    results
}

/// Writes one `"{n} {factors}"` line per entry, in input order.
pub fn write_results(path: &Path, results: &ResultMap) -> Result<(), BatchError> {
    let mut out = String::new();
    for (n, factorization) in results.iter() {
        out.push_str(&format!("{} {}\n", n, factorization));
    }
    fs::write(path, out).map_err(|source| BatchError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Runs every input file through the factorizer and writes its answer file.
pub fn process_directory(
    locations: &BatchLocations,
    factorizer: &Factorizer,
) -> Result<(), BatchError> {
    if !locations.output_dir.is_dir() {
        return Err(BatchError::MissingDirectory {
            path: locations.output_dir.clone(),
        });
    }

    let files = enumerate_input_files(locations)?;
    info!(
        "{} input file(s) in {}",
        files.len(),
        locations.input_dir.display()
    );

    for file in files {
        let numbers = read_numbers(&file)?;
        info!("{}: {} number(s)", file.display(), numbers.len());
        let results = run_batch(factorizer, &numbers);
        let answer = locations.answer_path(&file);
        write_results(&answer, &results)?;
        info!("wrote {}", answer.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer_math::prime_table::PrimeTable;

    #[test]
    fn test_answer_path_naming() {
        let locations = BatchLocations::new("/in", "/out");
        let answer = locations.answer_path(Path::new("/in/numbers_01.txt"));
        assert_eq!(answer, PathBuf::from("/out/answer_numbers_01.txt"));
    }

    #[test]
    fn test_enumerate_missing_directory() {
        let locations = BatchLocations::new("/no/such/directory", "/out");
        assert!(matches!(
            enumerate_input_files(&locations),
            Err(BatchError::MissingDirectory { .. })
        ));
    }

    #[test]
    fn test_run_batch_skips_invalid_inputs() {
        let table = PrimeTable::build(100).unwrap();
        let factorizer = Factorizer::with_default_strategy(&table);
        let results = run_batch(&factorizer, &[10, 0, 1, 7]);

        assert_eq!(results.len(), 2);
        assert_eq!(results.get(10).unwrap().factors(), &[2, 5]);
        assert_eq!(results.get(7).unwrap().factors(), &[7]);
    }

    #[test]
    fn test_run_batch_preserves_input_order() {
        let table = PrimeTable::build(100).unwrap();
        let factorizer = Factorizer::with_default_strategy(&table);
        let results = run_batch(&factorizer, &[15, 4, 9]);

        let keys: Vec<u64> = results.iter().map(|(n, _)| n).collect();
        assert_eq!(keys, vec![15, 4, 9]);
    }
}
