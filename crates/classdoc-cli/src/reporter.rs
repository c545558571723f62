use colored::Colorize;

use classdoc::{ClassFailure, DocGenError};

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    pub fn render(&self, failures: &[ClassFailure]) -> String {
        let mut out = String::new();
        for failure in failures {
            out.push_str(&self.format_failure(failure));
            out.push('\n');
        }
        if !failures.is_empty() {
            out.push_str(&self.format_summary(failures.len()));
            out.push('\n');
        }
        out
    }

    pub fn format_failure(&self, failure: &ClassFailure) -> String {
        format!(
            "{} - {} {}: class {}: {}",
            self.format_file(&failure.file_name),
            self.format_label(),
            self.format_code(&failure.error),
            self.format_class(&failure.class_name),
            failure.error
        )
    }

    fn format_summary(&self, count: usize) -> String {
        let noun = if count == 1 { "class" } else { "classes" };
        let summary = format!("Failed to document {count} {noun}.");
        if self.color {
            summary.bold().to_string()
        } else {
            summary
        }
    }

    fn format_file(&self, file: &str) -> String {
        if self.color {
            file.cyan().to_string()
        } else {
            file.to_string()
        }
    }

    fn format_label(&self) -> String {
        if self.color {
            "error".red().bold().to_string()
        } else {
            "error".to_string()
        }
    }

    fn format_code(&self, error: &DocGenError) -> String {
        let code = match error {
            DocGenError::MalformedType { .. } => "malformed-type",
        };
        if self.color {
            code.bright_blue().to_string()
        } else {
            code.to_string()
        }
    }

    fn format_class(&self, name: &str) -> String {
        if self.color {
            name.bold().to_string()
        } else {
            name.to_string()
        }
    }
}
