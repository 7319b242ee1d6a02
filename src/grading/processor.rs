// 📝 Student Result Processor
//
// Input format (one student per line, no header, no quoting):
//   id,fullName,score
// Parsing is fail-fast: the first malformed line aborts the whole read.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::config::StudentReportConfig;
use crate::error::{GradingError, StudentField};
use crate::grading::student::Student;

const FIELD_COUNT: usize = 3;
const DELIMITER: char = ',';

// ============================================================================
// PARSING
// ============================================================================

/// Parse every line of `reader` into a `Student`
///
/// Every physical line must hold exactly three fields, so an empty line is a
/// `MissingField` with one field found. Line numbers in errors are 1-indexed;
/// LF and CRLF endings both count as one line.
pub fn parse_students<R: Read>(reader: R) -> Result<Vec<Student>, GradingError> {
    let mut students = Vec::new();
    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        students.push(parse_line(&line, index as u64 + 1)?);
    }

    tracing::debug!(count = students.len(), "parsed student records");
    Ok(students)
}

fn parse_line(line: &str, line_number: u64) -> Result<Student, GradingError> {
    let fields: Vec<&str> = line
        .trim_end_matches('\r')
        .split(DELIMITER)
        .map(str::trim)
        .collect();

    if fields.len() != FIELD_COUNT {
        return Err(GradingError::MissingField {
            line: line_number,
            found: fields.len(),
        });
    }

    let id = parse_int(fields[0], line_number, StudentField::Id)?;
    let score = parse_int(fields[2], line_number, StudentField::Score)?;

    Ok(Student::new(id, fields[1], score))
}

fn parse_int(raw: &str, line: u64, field: StudentField) -> Result<i32, GradingError> {
    raw.parse::<i32>().map_err(|_| GradingError::InvalidFormat {
        line,
        field,
        value: raw.to_string(),
    })
}

// ============================================================================
// PROCESSOR
// ============================================================================

#[derive(Debug, Default)]
pub struct StudentResultProcessor;

impl StudentResultProcessor {
    pub fn new() -> Self {
        StudentResultProcessor
    }

    /// Read and parse a student file; a missing file is reported as `FileNotFound`
    pub fn read_students_from_file(&self, path: &Path) -> Result<Vec<Student>, GradingError> {
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => GradingError::FileNotFound(path.to_path_buf()),
            _ => GradingError::Io(err),
        })?;

        parse_students(file)
    }

    /// Write one report line per student, replacing any existing file
    pub fn write_report_to_file(&self, students: &[Student], path: &Path) -> Result<(), GradingError> {
        let mut writer = BufWriter::new(File::create(path)?);
        for student in students {
            writeln!(writer, "{}", student.report_line())?;
        }
        writer.flush()?;

        tracing::debug!(count = students.len(), path = %path.display(), "report written");
        Ok(())
    }

    /// Read then write; nothing is written if reading fails
    pub fn process(&self, config: &StudentReportConfig) -> Result<usize, GradingError> {
        let students = self.read_students_from_file(&config.input)?;
        self.write_report_to_file(&students, &config.output)?;
        Ok(students.len())
    }

    /// Run `process` and turn the outcome into the console message
    pub fn run(&self, config: &StudentReportConfig) -> String {
        match self.process(config) {
            Ok(_) => format!(
                "Report successfully written to {}",
                config.output.display()
            ),
            Err(err @ GradingError::FileNotFound(_)) => {
                format!("Error: Input file not found. {}", err)
            }
            Err(err) if err.is_parse_error() => format!("Error: {}", err),
            Err(err) => {
                tracing::warn!(error = %err, "student report failed");
                format!("An unexpected error occurred: {}", err)
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::student::Grade;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_single_line() {
        let students = parse_students("7,Jane Doe,85".as_bytes()).unwrap();

        assert_eq!(students, vec![Student::new(7, "Jane Doe", 85)]);
        assert_eq!(students[0].grade(), Grade::A);
    }

    #[test]
    fn test_parse_trims_fields() {
        let students = parse_students(" 1 ,  Ann Lee , 72 \n2,Bo Chan,49\n".as_bytes()).unwrap();

        assert_eq!(students.len(), 2);
        assert_eq!(students[0], Student::new(1, "Ann Lee", 72));
        assert_eq!(students[1].grade(), Grade::F);
    }

    #[test]
    fn test_parse_missing_field() {
        let err = parse_students("7,Jane Doe".as_bytes()).unwrap_err();

        assert!(matches!(err, GradingError::MissingField { line: 1, found: 2 }));
    }

    #[test]
    fn test_parse_extra_field_counts_as_missing_field() {
        let err = parse_students("7,Jane,Doe,85".as_bytes()).unwrap_err();
        assert!(matches!(err, GradingError::MissingField { line: 1, found: 4 }));
    }

    #[test]
    fn test_parse_invalid_score() {
        let err = parse_students("7,Jane Doe,abc".as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            GradingError::InvalidFormat { line: 1, field: StudentField::Score, .. }
        ));
        assert_eq!(err.to_string(), "Line 1: Invalid score 'abc'.");
    }

    #[test]
    fn test_parse_invalid_id() {
        let err = parse_students("x,Jane Doe,80".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "Line 1: Invalid ID 'x'.");
    }

    #[test]
    fn test_parse_stops_at_first_failure_with_line_number() {
        let input = "1,Ann Lee,90\n2,Bo Chan\n3,Cy Diaz,abc\n";
        let err = parse_students(input.as_bytes()).unwrap_err();

        assert_eq!(err.line(), Some(2));
        assert!(matches!(err, GradingError::MissingField { .. }));
    }

    #[test]
    fn test_parse_crlf_line_numbers() {
        let err = parse_students("1,A,90\r\n2,B\r\n".as_bytes()).unwrap_err();
        assert!(matches!(err, GradingError::MissingField { line: 2, found: 2 }));

        let err = parse_students("1,A,90\r\n2,B,80\r\n3,C,x\r\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "Line 3: Invalid score 'x'.");
    }

    #[test]
    fn test_parse_crlf_input_parses_cleanly() {
        let students = parse_students("1,Ann Lee,90\r\n2,Bo Chan,65\r\n".as_bytes()).unwrap();

        assert_eq!(students[0], Student::new(1, "Ann Lee", 90));
        assert_eq!(students[1].score, 65);
    }

    #[test]
    fn test_parse_blank_line_is_missing_field() {
        let err = parse_students("1,Ann Lee,90\n\n2,Bo Chan,80\n".as_bytes()).unwrap_err();

        assert!(matches!(err, GradingError::MissingField { line: 2, found: 1 }));
        assert_eq!(
            err.to_string(),
            "Line 2: Missing field(s). Expected 3 fields but found 1."
        );
    }

    #[test]
    fn test_parse_counts_lines_after_blank_lines() {
        // Stops at the first blank line, not at the later short one
        let err = parse_students("1,A,90\n\n\n4,D\n".as_bytes()).unwrap_err();
        assert_eq!(err.line(), Some(2));

        let err = parse_students("1,A,90\n2,B,80\n3,C,70\n4,D\n".as_bytes()).unwrap_err();
        assert_eq!(err.line(), Some(4));
    }

    #[test]
    fn test_parse_whitespace_only_line() {
        let err = parse_students("1,Ann Lee,90\r\n   \r\n".as_bytes()).unwrap_err();
        assert!(matches!(err, GradingError::MissingField { line: 2, found: 1 }));
    }

    #[test]
    fn test_parse_trailing_newline_is_not_a_line() {
        let students = parse_students("1,Ann Lee,90\n".as_bytes()).unwrap();
        assert_eq!(students.len(), 1);
        assert!(parse_students("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let processor = StudentResultProcessor::new();

        let err = processor
            .read_students_from_file(&dir.path().join("nope.txt"))
            .unwrap_err();

        assert!(matches!(err, GradingError::FileNotFound(_)));
        assert!(!err.is_parse_error());
    }

    #[test]
    fn test_process_writes_report() {
        let dir = TempDir::new().unwrap();
        let config = StudentReportConfig {
            input: dir.path().join("students.txt"),
            output: dir.path().join("students_report.txt"),
        };
        fs::write(&config.input, "1,Ann Lee,80\n2,Bo Chan,59\n").unwrap();

        let processor = StudentResultProcessor::new();
        assert_eq!(processor.process(&config).unwrap(), 2);

        let report = fs::read_to_string(&config.output).unwrap();
        assert_eq!(
            report,
            "Ann Lee (ID: 1): Score = 80, Grade = A\nBo Chan (ID: 2): Score = 59, Grade = D\n"
        );
    }

    #[test]
    fn test_run_parse_failure_skips_report() {
        let dir = TempDir::new().unwrap();
        let config = StudentReportConfig {
            input: dir.path().join("students.txt"),
            output: dir.path().join("students_report.txt"),
        };
        fs::write(&config.input, "1,Ann Lee,80\n2,Bo Chan,abc\n").unwrap();

        let message = StudentResultProcessor::new().run(&config);

        assert_eq!(message, "Error: Line 2: Invalid score 'abc'.");
        assert!(!config.output.exists());
    }

    #[test]
    fn test_run_missing_input_message() {
        let dir = TempDir::new().unwrap();
        let config = StudentReportConfig {
            input: dir.path().join("missing.txt"),
            output: dir.path().join("out.txt"),
        };

        let message = StudentResultProcessor::new().run(&config);
        assert!(message.starts_with("Error: Input file not found."));
    }
}
