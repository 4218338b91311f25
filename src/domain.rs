//! Domain models for academic records.
//!
//! This module contains the core record types (people, students, teachers
//! and courses), the grade ledger, and configuration.

mod config;
pub use config::{Config, ConfigError};

mod course;
pub use course::{Course, Enrollment};

/// Grades, pass/fail status and GPA calculation.
pub mod grade;
pub use grade::{Grade, GradeError, GradeLedger, Status};

mod key;
pub use key::{CourseKey, StudentKey, TeacherKey};

mod member;
pub use member::Member;

mod person;
pub use person::{Field, Person, RecordError};

mod student;
pub use student::Student;

mod teacher;
pub use teacher::Teacher;
