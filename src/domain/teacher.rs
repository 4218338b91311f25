use std::{fmt, ops::Deref};

use non_empty_string::NonEmptyString;

use crate::domain::{
    person::{required, Field, RecordError},
    Person,
};

/// A teacher, who may be the instructor of any number of courses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    person: Person,
    subject: NonEmptyString,
    teacher_id: NonEmptyString,
}

impl Teacher {
    /// Construct a new [`Teacher`].
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingField`] if the subject or teacher ID is
    /// empty.
    pub fn new(
        person: Person,
        subject: impl Into<String>,
        teacher_id: impl Into<String>,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            person,
            subject: required(Field::Subject, subject)?,
            teacher_id: required(Field::TeacherId, teacher_id)?,
        })
    }

    /// The identity fields of this teacher.
    #[must_use]
    pub const fn person(&self) -> &Person {
        &self.person
    }

    /// The subject this teacher teaches.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }

    /// The teacher's identifier.
    #[must_use]
    pub fn teacher_id(&self) -> &str {
        self.teacher_id.as_str()
    }
}

impl Deref for Teacher {
    type Target = Person;

    fn deref(&self) -> &Self::Target {
        &self.person
    }
}

impl fmt::Display for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.person)?;
        writeln!(f, "{:<15} {}", "Subject:", self.subject())?;
        write!(f, "{:<15} {}", "Teacher ID:", self.teacher_id())
    }
}
