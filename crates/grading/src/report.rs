//! Flat-file results processing.
//!
//! Input is comma-delimited `id,name,score`, exactly three fields per line,
//! fields trimmed. A malformed line fails the whole read with its 1-based
//! line number; no partial results escape.

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use thiserror::Error;

use tally_core::{DomainError, StudentId};

use crate::student::Student;

/// Errors from reading or writing result files.
///
/// File-level I/O failures (missing input, unwritable output) are kept apart
/// from malformed content, which arrives as [`DomainError::MalformedRecord`].
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ReportError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read `id,name,score` lines into students.
///
/// Any malformed line (wrong field count, unparsable id or score) aborts
/// the read.
pub fn read_students(path: impl AsRef<Path>) -> Result<Vec<Student>, ReportError> {
    let path = path.as_ref();
    let file = fs::File::open(path).map_err(|e| ReportError::io(path, e))?;
    let reader = io::BufReader::new(file);

    let mut students = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ReportError::io(path, e))?;
        students.push(parse_line(index + 1, &line)?);
    }
    Ok(students)
}

fn parse_line(line_number: usize, line: &str) -> Result<Student, DomainError> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 3 {
        return Err(DomainError::malformed_record(
            line_number,
            format!("expected 3 fields but got {}", parts.len()),
        ));
    }

    let id: StudentId = parts[0].trim().parse().map_err(|_| {
        DomainError::malformed_record(line_number, format!("invalid id '{}'", parts[0].trim()))
    })?;
    let name = parts[1].trim();
    let score: i64 = parts[2].trim().parse().map_err(|_| {
        DomainError::malformed_record(
            line_number,
            format!("score '{}' is not a valid number", parts[2].trim()),
        )
    })?;

    Ok(Student::new(id, name, score))
}

/// Write one summary line per student.
pub fn write_report(students: &[Student], path: impl AsRef<Path>) -> Result<(), ReportError> {
    let path = path.as_ref();
    let mut report = String::new();
    for student in students {
        report.push_str(&student.summary());
        report.push('\n');
    }
    fs::write(path, report).map_err(|e| ReportError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::Grade;
    use tally_core::Entity;

    fn write_input(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.txt");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_well_formed_lines_with_trimming() {
        let (_dir, path) = write_input("1, Ama Mensah , 84\n2,Kofi Boateng,61\n");

        let students = read_students(&path).unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].full_name(), "Ama Mensah");
        assert_eq!(students[0].score(), 84);
        assert_eq!(students[0].grade(), Grade::A);
        assert_eq!(students[1].id(), StudentId::new(2));
        assert_eq!(students[1].grade(), Grade::C);
    }

    #[test]
    fn two_field_line_aborts_with_its_line_number() {
        let (_dir, path) = write_input("1,Ama Mensah,84\n2,Kofi Boateng\n3,Esi Owusu,70\n");

        let err = read_students(&path).unwrap_err();
        match err {
            ReportError::Domain(DomainError::MalformedRecord { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("expected 3 fields but got 2"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn extra_fields_are_rejected() {
        let (_dir, path) = write_input("1,Ama,84,extra\n");

        let err = read_students(&path).unwrap_err();
        assert!(matches!(
            err,
            ReportError::Domain(DomainError::MalformedRecord { line: 1, .. })
        ));
    }

    #[test]
    fn unparsable_score_is_rejected_with_the_offending_field() {
        let (_dir, path) = write_input("1,Ama Mensah,eighty\n");

        let err = read_students(&path).unwrap_err();
        match err {
            ReportError::Domain(DomainError::MalformedRecord { line, message }) => {
                assert_eq!(line, 1);
                assert!(message.contains("'eighty'"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unparsable_id_is_rejected() {
        let (_dir, path) = write_input("1,Ama,84\nabc,Kofi,61\n");

        let err = read_students(&path).unwrap_err();
        assert!(matches!(
            err,
            ReportError::Domain(DomainError::MalformedRecord { line: 2, .. })
        ));
    }

    #[test]
    fn missing_input_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_students(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }

    #[test]
    fn report_contains_one_summary_line_per_student() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let students = vec![
            Student::new(StudentId::new(1), "Ama Mensah", 84),
            Student::new(StudentId::new(2), "Kofi Boateng", 61),
        ];

        write_report(&students, &path).unwrap();

        let report = fs::read_to_string(&path).unwrap();
        assert_eq!(
            report,
            "Ama Mensah (ID: 1): Score = 84, Grade = A\n\
             Kofi Boateng (ID: 2): Score = 61, Grade = C\n"
        );
    }
}
