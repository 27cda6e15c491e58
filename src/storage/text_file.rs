// src/storage/text_file.rs
// Reads and writes the roster as plain text, one record per line:
// `id,name,grade,attendance`. No quoting or escaping; a comma inside a name
// corrupts the file. That limitation is part of the format.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{info, warn};

use crate::roster::{ListOrder, Roster, Student};

/// Why a single line failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("expected 4 fields, got {0}")]
    FieldCount(usize),
    #[error("bad id {0:?}")]
    Id(String),
    #[error("bad grade {0:?}")]
    Grade(String),
    #[error("bad attendance {0:?}")]
    Attendance(String),
}

/// A failed load. Loads are all-or-nothing: one malformed line rejects the
/// whole file, and the caller's existing roster stays as it was.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {kind}")]
    Malformed { line: usize, kind: LineError },
}

/// Writes the roster in insertion order, replacing any existing file.
pub fn save(roster: &Roster, path: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for s in roster.list(ListOrder::Insertion) {
        writeln!(out, "{},{},{},{}", s.id, s.name, s.grade, s.attendance)?;
    }
    out.flush()?;
    info!("saved {} records to {}", roster.len(), path.display());
    Ok(())
}

/// Reads a whole roster back from `path`.
///
/// Duplicate ids in the file are kept as-is; only `Roster::add` enforces
/// uniqueness. Parse failures carry the 1-based line number.
pub fn load(path: &Path) -> Result<Roster, LoadError> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let student = parse_line(&line).map_err(|kind| {
            warn!("{}: line {}: {}", path.display(), index + 1, kind);
            LoadError::Malformed { line: index + 1, kind }
        })?;
        records.push(student);
    }
    info!("loaded {} records from {}", records.len(), path.display());
    Ok(Roster::from_records(records))
}

fn parse_line(line: &str) -> Result<Student, LineError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 4 {
        return Err(LineError::FieldCount(fields.len()));
    }
    Ok(Student {
        id: fields[0].parse().map_err(|_| LineError::Id(fields[0].to_string()))?,
        name: fields[1].to_string(),
        grade: fields[2].parse().map_err(|_| LineError::Grade(fields[2].to_string()))?,
        attendance: fields[3].parse().map_err(|_| LineError::Attendance(fields[3].to_string()))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn student(id: i64, name: &str, grade: f64, attendance: u32) -> Student {
        Student { id, name: name.to_string(), grade, attendance }
    }

    fn temp_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
        dir.path().join("students.txt")
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);

        let mut roster = Roster::new();
        roster.add(student(1, "Ann", 3.5, 90)).unwrap();
        roster.add(student(2, "Bo", 3.0, 80)).unwrap();
        save(&roster, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(
            loaded.list(ListOrder::Insertion).collect::<Vec<_>>(),
            roster.list(ListOrder::Insertion).collect::<Vec<_>>(),
        );
    }

    #[test]
    fn test_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);

        let mut roster = Roster::new();
        roster.add(student(1, "Ann", 3.5, 90)).unwrap();
        roster.add(student(2, "Bo", 2.25, 80)).unwrap();
        save(&roster, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "1,Ann,3.5,90\n2,Bo,2.25,80\n");
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);

        let mut first = Roster::new();
        first.add(student(1, "Ann", 3.5, 90)).unwrap();
        first.add(student(2, "Bo", 3.0, 80)).unwrap();
        save(&first, &path).unwrap();

        let mut second = Roster::new();
        second.add(student(3, "Cy", 2.0, 70)).unwrap();
        save(&second, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "3,Cy,2,70\n");
    }

    #[test]
    fn test_malformed_grade_rejects_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);
        fs::write(&path, "1,Ann,3.5,90\n3,Dee,notanumber,50\n").unwrap();

        match load(&path) {
            Err(LoadError::Malformed { line, kind }) => {
                assert_eq!(line, 2);
                assert_eq!(kind, LineError::Grade("notanumber".to_string()));
            }
            other => panic!("expected a parse failure, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_load_leaves_existing_roster_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);
        fs::write(&path, "3,Dee,notanumber,50\n").unwrap();

        let mut roster = Roster::new();
        roster.add(student(1, "Ann", 3.5, 90)).unwrap();

        // The caller replaces its roster only on Ok, so an error changes nothing.
        if let Ok(loaded) = load(&path) {
            roster = loaded;
        }
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.find(1), Some(&student(1, "Ann", 3.5, 90)));
    }

    #[test]
    fn test_wrong_field_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);
        fs::write(&path, "1,Ann,3.5\n").unwrap();

        match load(&path) {
            Err(LoadError::Malformed { line: 1, kind }) => {
                assert_eq!(kind, LineError::FieldCount(3));
            }
            other => panic!("expected a parse failure, got {other:?}"),
        }
    }

    #[test]
    fn test_comma_in_name_breaks_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);

        let mut roster = Roster::new();
        roster.add(student(1, "Ann,Marie", 3.5, 90)).unwrap();
        save(&roster, &path).unwrap();

        match load(&path) {
            Err(LoadError::Malformed { line: 1, kind }) => {
                assert_eq!(kind, LineError::FieldCount(5));
            }
            other => panic!("expected a parse failure, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_ids_load_permissively() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);
        fs::write(&path, "1,Ann,3.5,90\n1,Cy,2,70\n").unwrap();

        let roster = load(&path).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.find_all(1).count(), 2);
    }

    #[test]
    fn test_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);
        fs::write(&path, "").unwrap();
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load(&temp_path(&dir)), Err(LoadError::Io(_))));
    }
}
