use clap::{Parser, ValueEnum};
use records::{
    report::{self, EnrollmentReport, GradeReport, Scope, TeacherReport},
    Registry,
};
use serde::Serialize;
use tracing::instrument;

use super::terminal::{rule, Colorize};

const NARROW_RULE: usize = 50;
const WIDE_RULE: usize = 70;

/// Command arguments for `records report`.
#[derive(Debug, Parser)]
#[command(about = "Print a grade, enrollment or teaching-load report")]
pub struct Command {
    /// Which report to print
    #[arg(value_enum)]
    kind: ReportKind,

    /// Limit the grade report to the student at this position (1-based)
    #[arg(long, value_name = "N")]
    student: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportKind {
    /// Grades, averages and GPA per student
    Grades,
    /// Enrolled students per course
    Enrollment,
    /// Courses per teacher
    Teachers,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Command {
    #[instrument(level = "debug", skip(registry))]
    pub fn run(self, registry: &Registry) -> anyhow::Result<()> {
        match self.kind {
            ReportKind::Grades => {
                let scope = match &self.student {
                    Some(position) => Scope::One(registry.select_student(position)?),
                    None => Scope::All,
                };
                let reports = report::student_grades(registry, scope);
                self.output.emit(&reports, print_grade_reports)
            }
            ReportKind::Enrollment => {
                let reports = report::course_enrollment(registry);
                self.output.emit(&reports, print_enrollment_reports)
            }
            ReportKind::Teachers => {
                let reports = report::teacher_courses(registry);
                self.output.emit(&reports, print_teacher_reports)
            }
        }
    }
}

impl OutputFormat {
    fn emit<T: Serialize>(self, reports: &[T], table: fn(&[T])) -> anyhow::Result<()> {
        match self {
            Self::Table => table(reports),
            Self::Json => println!("{}", serde_json::to_string_pretty(reports)?),
        }
        Ok(())
    }
}

pub fn print_grade_reports(reports: &[GradeReport<'_>]) {
    if reports.is_empty() {
        println!("{}", "No students available.".warning());
        return;
    }

    println!("\n{}", "GRADE REPORT".info());
    println!("{}", rule('=', NARROW_RULE));
    for report in reports {
        println!("\n{report}");
        if reports.len() > 1 {
            println!("{}", rule('-', NARROW_RULE));
        }
    }
}

pub fn print_enrollment_reports(reports: &[EnrollmentReport<'_>]) {
    if reports.is_empty() {
        println!("{}", "No courses available.".warning());
        return;
    }

    println!("\n{}", "COURSE ENROLLMENT REPORT".info());
    println!("{}", rule('=', WIDE_RULE));
    for report in reports {
        println!("\n{report}");
        println!("{}", rule('-', WIDE_RULE));
    }
}

pub fn print_teacher_reports(reports: &[TeacherReport<'_>]) {
    if reports.is_empty() {
        println!("{}", "No teachers available.".warning());
        return;
    }

    println!("\n{}", "TEACHER COURSE REPORT".info());
    println!("{}", rule('=', WIDE_RULE));
    for report in reports {
        println!("\n{report}");
        println!("{}", rule('-', WIDE_RULE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_report_for_a_single_student() {
        let command = Command {
            kind: ReportKind::Grades,
            student: Some("2".to_string()),
            output: OutputFormat::Json,
        };

        command
            .run(&Registry::with_sample_data())
            .expect("report should succeed");
    }

    #[test]
    fn invalid_student_position_is_an_error() {
        let command = Command {
            kind: ReportKind::Grades,
            student: Some("9".to_string()),
            output: OutputFormat::Table,
        };

        assert!(command.run(&Registry::with_sample_data()).is_err());
    }

    #[test]
    fn reports_on_an_empty_registry() {
        for kind in [ReportKind::Grades, ReportKind::Enrollment, ReportKind::Teachers] {
            let command = Command {
                kind,
                student: None,
                output: OutputFormat::Table,
            };
            command.run(&Registry::new()).expect("report should succeed");
        }
    }
}
