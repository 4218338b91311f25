use std::fmt;

use non_empty_string::NonEmptyString;

/// A required text field on one of the record types.
///
/// Used to report which field was missing when construction fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// A person's name.
    Name,
    /// A person's gender.
    Gender,
    /// A student's identifier.
    StudentId,
    /// A student's major.
    Major,
    /// The subject a teacher teaches.
    Subject,
    /// A teacher's identifier.
    TeacherId,
    /// A course's code.
    CourseCode,
    /// A course's name.
    CourseName,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "name",
            Self::Gender => "gender",
            Self::StudentId => "student ID",
            Self::Major => "major",
            Self::Subject => "subject",
            Self::TeacherId => "teacher ID",
            Self::CourseCode => "course code",
            Self::CourseName => "course name",
        };
        f.write_str(label)
    }
}

/// Error returned when a record cannot be constructed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RecordError {
    /// A required text field was empty or contained only whitespace.
    #[error("{0} must not be empty")]
    MissingField(Field),
}

/// Validates a required text field.
///
/// Surrounding whitespace is trimmed; a value that is empty after trimming
/// is rejected.
pub(crate) fn required(
    field: Field,
    value: impl Into<String>,
) -> Result<NonEmptyString, RecordError> {
    let value = value.into();
    NonEmptyString::new(value.trim().to_string()).map_err(|_| RecordError::MissingField(field))
}

/// Identity fields shared by students and teachers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: NonEmptyString,
    age: u32,
    gender: NonEmptyString,
}

impl Person {
    /// Construct a new [`Person`].
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingField`] if the name or gender is empty.
    pub fn new(
        name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            name: required(Field::Name, name)?,
            age,
            gender: required(Field::Gender, gender)?,
        })
    }

    /// The person's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The person's age in years.
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// The person's gender.
    #[must_use]
    pub fn gender(&self) -> &str {
        self.gender.as_str()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<15} {}", "Name:", self.name())?;
        writeln!(f, "{:<15} {}", "Age:", self.age)?;
        write!(f, "{:<15} {}", "Gender:", self.gender())
    }
}
