//! Plain-text process definitions.
//!
//! One process per line: `arrival burst [priority]`, whitespace separated.
//! Blank lines and lines starting with `#` are skipped. Processes are named
//! `P1`, `P2`, ... in the order their lines appear.
//!
//! ```text
//! # at bt prio
//! 0 5 2
//! 1 3 1
//! ```

use crate::models::Process;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Parses a block of process definitions, reporting every malformed line.
pub fn parse_processes(text: &str) -> Result<Vec<Process>, Vec<ValidationError>> {
    let mut processes = Vec::new();
    let mut errors = Vec::new();

    let definitions = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    for (n, (line_no, line)) in definitions.enumerate() {
        match parse_process_line(&format!("P{}", n + 1), line) {
            Ok(p) => processes.push(p),
            Err(message) => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProcessDefinition,
                format!("line {line_no}: {message}"),
            )),
        }
    }

    if errors.is_empty() {
        Ok(processes)
    } else {
        Err(errors)
    }
}

/// Parses a single `arrival burst [priority]` definition.
pub fn parse_process_line(name: &str, line: &str) -> Result<Process, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if !(2..=3).contains(&fields.len()) {
        return Err(format!(
            "expected 'arrival burst [priority]', got {} fields",
            fields.len()
        ));
    }

    let arrival = parse_field("arrival time", fields[0])?;
    let burst = parse_field("burst time", fields[1])?;
    let mut process = Process::new(name, arrival, burst);
    if let Some(priority) = fields.get(2) {
        process = process.with_priority(parse_field("priority", priority)?);
    }
    Ok(process)
}

/// Parses a quantum value.
pub fn parse_quantum(text: &str) -> Result<u32, ValidationError> {
    match text.trim().parse::<u32>() {
        Ok(q) if q > 0 => Ok(q),
        _ => Err(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("invalid quantum '{}': expected a positive integer", text.trim()),
        )),
    }
}

fn parse_field(what: &str, raw: &str) -> Result<u32, String> {
    raw.parse::<u32>()
        .map_err(|e| format!("invalid {what} '{raw}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_processes() {
        let text = "# at bt prio\n0 5 2\n\n1 3 1\n";
        let processes = parse_processes(text).unwrap();

        assert_eq!(processes.len(), 2);
        assert_eq!(processes[0], Process::new("P1", 0, 5).with_priority(2));
        assert_eq!(processes[1], Process::new("P2", 1, 3).with_priority(1));
    }

    #[test]
    fn test_missing_priority_defaults() {
        let p = parse_process_line("P1", "4 2").unwrap();
        assert_eq!(p.arrival_time, 4);
        assert_eq!(p.priority, Process::DEFAULT_PRIORITY);
    }

    #[test]
    fn test_malformed_lines_reported_with_line_numbers() {
        let text = "0 5 2\n0 x 1\n1\n-1 2 3\n";
        let errors = parse_processes(text).unwrap_err();

        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvalidProcessDefinition));
        assert!(errors[0].message.starts_with("line 2:"));
        assert!(errors[0].message.contains("burst time"));
        assert!(errors[1].message.starts_with("line 3:"));
        assert!(errors[2].message.contains("arrival time"));
    }

    #[test]
    fn test_too_many_fields() {
        assert!(parse_process_line("P1", "1 2 3 4").is_err());
    }

    #[test]
    fn test_parse_quantum() {
        assert_eq!(parse_quantum(" 3\n"), Ok(3));
        assert_eq!(
            parse_quantum("0").unwrap_err().kind,
            ValidationErrorKind::InvalidQuantum
        );
        assert!(parse_quantum("two").is_err());
    }
}
