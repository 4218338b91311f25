use non_empty_string::NonEmptyString;

use crate::domain::{
    key::{StudentKey, TeacherKey},
    person::{required, Field, RecordError},
};

/// A course, taught by exactly one teacher.
///
/// A course does not own its instructor or its students. It holds keys
/// which are resolved against the [`Registry`](crate::Registry) that holds
/// the course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    code: NonEmptyString,
    name: NonEmptyString,
    instructor: TeacherKey,
    enrolled: Vec<StudentKey>,
}

/// Result of enrolling a student in a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Enrollment {
    /// The student was added to the course.
    Enrolled,
    /// The student was already enrolled; nothing changed.
    AlreadyEnrolled,
}

impl Course {
    /// Construct a new [`Course`] with no enrolled students.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingField`] if the code or name is empty.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        instructor: TeacherKey,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            code: required(Field::CourseCode, code)?,
            name: required(Field::CourseName, name)?,
            instructor,
            enrolled: Vec::new(),
        })
    }

    /// The unique course code, e.g. `CS101`.
    #[must_use]
    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    /// The descriptive course name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The teacher responsible for the course.
    #[must_use]
    pub const fn instructor(&self) -> TeacherKey {
        self.instructor
    }

    /// Enroll a student.
    ///
    /// Enrolling the same student twice is a no-op.
    pub fn enroll(&mut self, student: StudentKey) -> Enrollment {
        if self.is_enrolled(student) {
            Enrollment::AlreadyEnrolled
        } else {
            self.enrolled.push(student);
            Enrollment::Enrolled
        }
    }

    /// Returns `true` if the student is enrolled in this course.
    #[must_use]
    pub fn is_enrolled(&self, student: StudentKey) -> bool {
        self.enrolled.contains(&student)
    }

    /// The enrolled students, in the order they enrolled.
    #[must_use]
    pub fn enrolled(&self) -> &[StudentKey] {
        &self.enrolled
    }

    /// The number of enrolled students.
    #[must_use]
    pub fn enrolled_count(&self) -> usize {
        self.enrolled.len()
    }

    /// A short, one-line description of the course.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} - {}", self.code(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course() -> Course {
        Course::new("CS101", "Introduction to Programming", TeacherKey::new(0)).unwrap()
    }

    #[test]
    fn enroll_twice_keeps_one_entry() {
        let mut course = course();
        let student = StudentKey::new(0);

        assert_eq!(course.enroll(student), Enrollment::Enrolled);
        assert_eq!(course.enroll(student), Enrollment::AlreadyEnrolled);
        assert_eq!(course.enrolled(), [student]);
    }

    #[test]
    fn enrollment_order_is_preserved() {
        let mut course = course();
        let order = [StudentKey::new(2), StudentKey::new(0), StudentKey::new(1)];
        for student in order {
            let _ = course.enroll(student);
        }
        let _ = course.enroll(StudentKey::new(0));

        assert_eq!(course.enrolled(), order);
        assert_eq!(course.enrolled_count(), 3);
    }

    #[test]
    fn empty_code_is_rejected() {
        let error = Course::new(" ", "Advanced Calculus", TeacherKey::new(0)).unwrap_err();
        assert_eq!(error, RecordError::MissingField(Field::CourseCode));
    }

    #[test]
    fn summary_joins_code_and_name() {
        assert_eq!(course().summary(), "CS101 - Introduction to Programming");
    }
}
