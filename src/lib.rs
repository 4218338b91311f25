//! In-memory Academic Records
//!
//! Tracks students, teachers and courses, records enrollments and grades,
//! and produces grade, enrollment and teaching-load reports.

pub mod domain;
pub use domain::{
    Config, Course, CourseKey, Enrollment, Grade, GradeError, Member, Person, RecordError, Status,
    Student, StudentKey, Teacher, TeacherKey,
};

/// The registry of all records, and positional selection into it.
pub mod registry;
pub use registry::{Registry, RegistryError, Selection, SelectionError};

pub mod report;
