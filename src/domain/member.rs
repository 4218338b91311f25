use std::fmt;

use crate::domain::{Person, Student, Teacher};

/// A borrowed view of any record that is a [`Person`].
///
/// Used wherever students and teachers are handled uniformly, such as
/// when displaying someone's details.
#[derive(Debug, Clone, Copy)]
pub enum Member<'a> {
    /// A student.
    Student(&'a Student),
    /// A teacher.
    Teacher(&'a Teacher),
}

impl<'a> Member<'a> {
    /// The identity fields shared by both record kinds.
    #[must_use]
    pub const fn person(self) -> &'a Person {
        match self {
            Self::Student(student) => student.person(),
            Self::Teacher(teacher) => teacher.person(),
        }
    }

    /// The record's identifier (student ID or teacher ID).
    #[must_use]
    pub fn id(self) -> &'a str {
        match self {
            Self::Student(student) => student.student_id(),
            Self::Teacher(teacher) => teacher.teacher_id(),
        }
    }

    /// A label for the kind of record.
    #[must_use]
    pub const fn role(self) -> &'static str {
        match self {
            Self::Student(_) => "Student",
            Self::Teacher(_) => "Teacher",
        }
    }
}

impl<'a> From<&'a Student> for Member<'a> {
    fn from(student: &'a Student) -> Self {
        Self::Student(student)
    }
}

impl<'a> From<&'a Teacher> for Member<'a> {
    fn from(teacher: &'a Teacher) -> Self {
        Self::Teacher(teacher)
    }
}

impl fmt::Display for Member<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student(student) => fmt::Display::fmt(student, f),
            Self::Teacher(teacher) => fmt::Display::fmt(teacher, f),
        }
    }
}
