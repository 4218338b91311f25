use std::{fmt, ops::Deref};

use non_empty_string::NonEmptyString;
use nonempty::NonEmpty;

use crate::domain::{
    grade::{Grade, GradeError, GradeLedger, Status},
    person::{required, Field, RecordError},
    Person,
};

/// A student, with a ledger of the grades they have been awarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    person: Person,
    student_id: NonEmptyString,
    major: NonEmptyString,
    grades: GradeLedger,
}

impl Student {
    /// Construct a new [`Student`] with an empty grade ledger.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingField`] if the student ID or major is
    /// empty.
    pub fn new(
        person: Person,
        student_id: impl Into<String>,
        major: impl Into<String>,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            person,
            student_id: required(Field::StudentId, student_id)?,
            major: required(Field::Major, major)?,
            grades: GradeLedger::default(),
        })
    }

    /// The identity fields of this student.
    #[must_use]
    pub const fn person(&self) -> &Person {
        &self.person
    }

    /// The student's identifier.
    #[must_use]
    pub fn student_id(&self) -> &str {
        self.student_id.as_str()
    }

    /// The student's major.
    #[must_use]
    pub fn major(&self) -> &str {
        self.major.as_str()
    }

    /// The student's grade ledger.
    #[must_use]
    pub const fn ledger(&self) -> &GradeLedger {
        &self.grades
    }

    /// Record a grade for this student against a course.
    ///
    /// This does not check that the course exists, or that the student is
    /// enrolled in it. Use [`Registry::add_grade`](crate::Registry::add_grade)
    /// for a checked version.
    ///
    /// # Errors
    ///
    /// Returns an error if the grade is outside `0..=100` or the course code
    /// is empty. The ledger is left unchanged.
    pub fn add_grade(&mut self, course_code: &str, grade: i64) -> Result<Grade, GradeError> {
        match self.grades.record(course_code, grade) {
            Ok(grade) => {
                tracing::info!(
                    student = self.student_id(),
                    course = course_code,
                    %grade,
                    "Grade added"
                );
                Ok(grade)
            }
            Err(e) => {
                tracing::warn!(student = self.student_id(), course = course_code, "{e}");
                Err(e)
            }
        }
    }

    /// The grades recorded for a course, in submission order.
    #[must_use]
    pub fn grades(&self, course_code: &str) -> Option<&NonEmpty<Grade>> {
        self.grades.grades(course_code)
    }

    /// The mean grade for a course.
    ///
    /// Returns `None` if no grades are recorded for the course, which is
    /// distinct from a genuine average of zero.
    #[must_use]
    pub fn average_grade(&self, course_code: &str) -> Option<f64> {
        self.grades.average(course_code)
    }

    /// The highest grade for a course, or `None` if there are no grades.
    #[must_use]
    pub fn highest_grade(&self, course_code: &str) -> Option<Grade> {
        self.grades.highest(course_code)
    }

    /// Pass or fail for a course. A course with no grades is a fail.
    #[must_use]
    pub fn status(&self, course_code: &str) -> Status {
        self.grades.status(course_code)
    }

    /// The student's overall GPA, or `0.0` if nothing has been graded.
    #[must_use]
    pub fn gpa(&self) -> f64 {
        self.grades.gpa()
    }

    /// Returns `true` if at least one grade has been recorded.
    #[must_use]
    pub fn has_grades(&self) -> bool {
        !self.grades.is_empty()
    }

    /// A short, one-line description of the student.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} (ID: {})", self.name(), self.student_id())
    }
}

impl Deref for Student {
    type Target = Person;

    fn deref(&self) -> &Self::Target {
        &self.person
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.person)?;
        writeln!(f, "{:<15} {}", "Student ID:", self.student_id())?;
        write!(f, "{:<15} {}", "Major:", self.major())
    }
}
