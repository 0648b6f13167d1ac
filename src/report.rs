//! Tabular output of convergence sweeps
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use crate::convergence::Convergence;

/// Column headers shared by the text table and the CSV output
pub const HEADERS: [&str; 5] = ["n", "pi_estimate", "std_err", "lower", "upper"];

#[derive(Debug)]
pub enum ReportError {
    Io(io::Error),
    Csv(csv::Error),
}

/// Write the sweep as CSV to any writer.
///
/// # Example
///
/// ```
/// use mcpi::{report, Convergence};
///
/// let conv = Convergence::from_hits(&[1, 1, 0, 1], vec![2, 4]).unwrap();
/// let mut buf = Vec::new();
/// report::write_csv(&conv, &mut buf).unwrap();
///
/// let text = String::from_utf8(buf).unwrap();
/// assert_eq!(text.lines().next(), Some("n,pi_estimate,std_err,lower,upper"));
/// assert_eq!(text.lines().count(), 3);
/// ```
pub fn write_csv<W: io::Write>(
    conv: &Convergence,
    writer: W,
) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADERS)?;
    for pt in conv.iter() {
        let est = pt.estimate;
        wtr.write_record(&[
            pt.n.to_string(),
            est.pi().to_string(),
            est.std_err().to_string(),
            est.lower().to_string(),
            est.upper().to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the sweep as CSV to `path`, creating parent directories.
pub fn save_csv<P: AsRef<Path>>(
    conv: &Convergence,
    path: P,
) -> Result<(), ReportError> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let file = fs::File::create(path)?;
    write_csv(conv, file)?;
    info!(path = %path.display(), rows = conv.len(), "saved convergence table");
    Ok(())
}

/// Render the sweep as an aligned text table
pub fn table(conv: &Convergence) -> String {
    let mut out = format!(
        "{:>10}  {:>10}  {:>10}  {:>10}  {:>10}\n",
        HEADERS[0], HEADERS[1], HEADERS[2], HEADERS[3], HEADERS[4]
    );
    for pt in conv.iter() {
        let est = pt.estimate;
        out.push_str(&format!(
            "{:>10}  {:>10.6}  {:>10.6}  {:>10.6}  {:>10.6}\n",
            pt.n,
            est.pi(),
            est.std_err(),
            est.lower(),
            est.upper()
        ));
    }
    out
}

impl From<io::Error> for ReportError {
    fn from(err: io::Error) -> Self {
        ReportError::Io(err)
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        ReportError::Csv(err)
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Csv(err) => Some(err),
        }
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io: {}", err),
            Self::Csv(err) => write!(f, "csv: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_sweep() -> Convergence {
        Convergence::from_hits(&[1, 0, 1, 1], vec![1, 2, 4]).unwrap()
    }

    #[test]
    fn csv_rows() {
        let mut buf = Vec::new();
        write_csv(&small_sweep(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let rows: Vec<&str> = text.lines().collect();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1], "1,4,0,4,4");
        assert_eq!(
            rows[2],
            "2,2,1.414213562373095,0.5857864376269051,3.414213562373095"
        );
        assert!(rows[3].starts_with("4,3,"));
    }

    #[test]
    fn table_has_header_and_rows() {
        let text = table(&small_sweep());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("pi_estimate"));
        assert!(lines[1].trim_start().starts_with("1  "));
        assert!(lines[3].contains("3.000000"));
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("figures").join("pi.csv");
        save_csv(&small_sweep(), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("n,pi_estimate"));
    }
}
