//! Grades and the per-student grade ledger.
//!
//! The ledger maps a course code to the grades recorded for that course, in
//! the order they were submitted. An entry only exists once at least one
//! grade has been recorded, so every sequence in the ledger is non-empty.

use std::fmt;

use nonempty::NonEmpty;
use serde::Serialize;

/// The minimum course average required to pass.
pub const PASS_MARK: f64 = 60.0;

/// A single grade, an integer in the range `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Grade(u8);

impl Grade {
    /// The highest possible grade.
    pub const MAX: u8 = 100;

    /// Construct a new [`Grade`].
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::OutOfRange`] if the value is outside `0..=100`.
    pub fn new(value: i64) -> Result<Self, GradeError> {
        u8::try_from(value)
            .ok()
            .filter(|&v| v <= Self::MAX)
            .map(Self)
            .ok_or(GradeError::OutOfRange(value))
    }

    /// The numeric value of the grade.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Grade {
    type Error = GradeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur when recording a grade.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GradeError {
    /// The grade was outside `0..=100`.
    #[error("invalid grade {0}: please enter a number between 0 and 100")]
    OutOfRange(i64),
    /// The course code was empty.
    #[error("course code cannot be empty")]
    BlankCourseCode,
}

/// Whether a student is passing a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    /// The course average is at or above [`PASS_MARK`].
    Pass,
    /// The course average is below [`PASS_MARK`], or there are no grades.
    Fail,
}

impl Status {
    /// The status implied by a course average.
    #[must_use]
    pub fn from_average(average: f64) -> Self {
        if average >= PASS_MARK {
            Self::Pass
        } else {
            Self::Fail
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => f.write_str("Pass"),
            Self::Fail => f.write_str("Fail"),
        }
    }
}

/// Map a course average onto the GPA breakpoint table.
#[must_use]
pub fn grade_points(average: f64) -> f64 {
    if average >= 90.0 {
        4.0
    } else if average >= 80.0 {
        3.0
    } else if average >= 70.0 {
        2.0
    } else if average >= 60.0 {
        1.0
    } else {
        0.0
    }
}

/// Grades recorded against each course, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeLedger {
    // Kept in the order each course's first grade was recorded.
    entries: Vec<(String, NonEmpty<Grade>)>,
}

impl GradeLedger {
    /// Record a grade against a course.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the ledger unchanged, if the course code is
    /// blank or the grade is outside `0..=100`.
    pub fn record(&mut self, course_code: &str, grade: i64) -> Result<Grade, GradeError> {
        let course_code = course_code.trim();
        if course_code.is_empty() {
            return Err(GradeError::BlankCourseCode);
        }
        let grade = Grade::new(grade)?;

        match self.entries.iter_mut().find(|(code, _)| code == course_code) {
            Some((_, grades)) => grades.push(grade),
            None => self
                .entries
                .push((course_code.to_string(), NonEmpty::new(grade))),
        }

        Ok(grade)
    }

    /// The grades recorded for a course, if any.
    #[must_use]
    pub fn grades(&self, course_code: &str) -> Option<&NonEmpty<Grade>> {
        self.entries
            .iter()
            .find(|(code, _)| code == course_code)
            .map(|(_, grades)| grades)
    }

    /// The mean grade for a course, or `None` if no grades are recorded.
    #[must_use]
    pub fn average(&self, course_code: &str) -> Option<f64> {
        self.grades(course_code).map(mean)
    }

    /// The highest grade for a course, or `None` if no grades are recorded.
    #[must_use]
    pub fn highest(&self, course_code: &str) -> Option<Grade> {
        self.grades(course_code).map(NonEmpty::maximum).copied()
    }

    /// Whether the course average meets the pass mark.
    ///
    /// A course with no recorded grades is a [`Status::Fail`].
    #[must_use]
    pub fn status(&self, course_code: &str) -> Status {
        Status::from_average(self.average(course_code).unwrap_or(0.0))
    }

    /// The unweighted grade point average across all graded courses.
    ///
    /// Each course contributes equally, regardless of how many grades it
    /// holds. Returns `0.0` if nothing has been graded.
    #[must_use]
    pub fn gpa(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }

        let total: f64 = self
            .entries
            .iter()
            .map(|(_, grades)| grade_points(mean(grades)))
            .sum();

        #[allow(clippy::cast_precision_loss)]
        let count = self.entries.len() as f64;
        total / count
    }

    /// Iterate over the graded courses in the order they were first graded.
    pub fn courses(&self) -> impl Iterator<Item = (&str, &NonEmpty<Grade>)> {
        self.entries
            .iter()
            .map(|(code, grades)| (code.as_str(), grades))
    }

    /// Returns `true` if no grades have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(grades: &NonEmpty<Grade>) -> f64 {
    let sum: u64 = grades.iter().map(|grade| u64::from(grade.value())).sum();
    sum as f64 / grades.len() as f64
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0; "lower bound")]
    #[test_case(100; "upper bound")]
    #[test_case(59; "inside range")]
    fn grade_accepts_values_in_range(value: i64) {
        assert_eq!(i64::from(Grade::new(value).unwrap().value()), value);
    }

    #[test_case(-1; "negative")]
    #[test_case(101; "above maximum")]
    #[test_case(1000; "above u8 range")]
    fn grade_rejects_values_out_of_range(value: i64) {
        assert_eq!(Grade::new(value), Err(GradeError::OutOfRange(value)));
    }

    #[test_case(100.0, 4.0)]
    #[test_case(90.0, 4.0)]
    #[test_case(89.9, 3.0)]
    #[test_case(80.0, 3.0)]
    #[test_case(70.0, 2.0)]
    #[test_case(60.0, 1.0)]
    #[test_case(59.5, 0.0)]
    #[test_case(0.0, 0.0)]
    fn grade_points_follow_breakpoints(average: f64, expected: f64) {
        assert!((grade_points(average) - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn average_highest_and_status() {
        let mut ledger = GradeLedger::default();
        ledger.record("CS101", 90).unwrap();
        ledger.record("CS101", 85).unwrap();

        assert_eq!(ledger.average("CS101"), Some(87.5));
        assert_eq!(ledger.highest("CS101").map(Grade::value), Some(90));
        assert_eq!(ledger.status("CS101"), Status::Pass);
    }

    #[test_case(&[95, 70, 80], 95; "first")]
    #[test_case(&[70, 80, 95], 95; "last")]
    #[test_case(&[70, 100, 100, 0], 100; "repeated")]
    fn highest_grade_is_found_anywhere(grades: &[i64], expected: u8) {
        let mut ledger = GradeLedger::default();
        for &grade in grades {
            ledger.record("CS101", grade).unwrap();
        }

        assert_eq!(ledger.highest("CS101").map(Grade::value), Some(expected));
    }

    #[test]
    fn mean_of_a_very_long_sequence() {
        // More grades of 100 than fit in a u32 running total.
        let count = usize::try_from(u32::MAX / 100).unwrap() + 1;
        let grades = NonEmpty::from((Grade(100), vec![Grade(100); count]));

        assert_eq!(mean(&grades), 100.0);
    }

    #[test]
    fn rejected_grades_are_not_recorded() {
        let mut ledger = GradeLedger::default();
        ledger.record("CS101", 40).unwrap();

        assert_eq!(
            ledger.record("CS101", 101),
            Err(GradeError::OutOfRange(101))
        );
        assert_eq!(ledger.record("CS101", -5), Err(GradeError::OutOfRange(-5)));

        assert_eq!(ledger.grades("CS101").map(NonEmpty::len), Some(1));
        assert_eq!(ledger.average("CS101"), Some(40.0));
        assert_eq!(ledger.highest("CS101").map(Grade::value), Some(40));
    }

    #[test]
    fn rejected_grade_does_not_create_entry() {
        let mut ledger = GradeLedger::default();
        assert!(ledger.record("MATH201", 250).is_err());
        assert!(ledger.is_empty());
    }

    #[test]
    fn blank_course_code_is_rejected() {
        let mut ledger = GradeLedger::default();
        assert_eq!(ledger.record("  ", 50), Err(GradeError::BlankCourseCode));
        assert!(ledger.is_empty());
    }

    #[test]
    fn missing_course_has_no_data() {
        let ledger = GradeLedger::default();

        assert_eq!(ledger.average("PHYS100"), None);
        assert_eq!(ledger.average("PHYS100").unwrap_or(0.0), 0.0);
        assert_eq!(ledger.highest("PHYS100"), None);
        assert_eq!(ledger.status("PHYS100"), Status::Fail);
    }

    #[test]
    fn status_boundary_is_inclusive() {
        let mut ledger = GradeLedger::default();
        ledger.record("HIST110", 60).unwrap();
        ledger.record("ART100", 59).unwrap();

        assert_eq!(ledger.status("HIST110"), Status::Pass);
        assert_eq!(ledger.status("ART100"), Status::Fail);
    }

    #[test]
    fn gpa_is_unweighted_mean_of_course_points() {
        let mut ledger = GradeLedger::default();
        ledger.record("CS101", 92).unwrap();
        for grade in [50, 60, 55] {
            ledger.record("MATH201", grade).unwrap();
        }

        // 92 -> 4.0, 55 -> 0.0; MATH201's three grades count once.
        assert_eq!(ledger.gpa(), 2.0);
    }

    #[test]
    fn gpa_is_zero_without_grades() {
        assert_eq!(GradeLedger::default().gpa(), 0.0);
    }

    #[test]
    fn courses_keep_first_graded_order() {
        let mut ledger = GradeLedger::default();
        ledger.record("MATH201", 88).unwrap();
        ledger.record("CS101", 78).unwrap();
        ledger.record("MATH201", 95).unwrap();

        let codes: Vec<_> = ledger.courses().map(|(code, _)| code).collect();
        assert_eq!(codes, ["MATH201", "CS101"]);

        let grades: Vec<_> = ledger
            .grades("MATH201")
            .unwrap()
            .iter()
            .map(|grade| grade.value())
            .collect();
        assert_eq!(grades, [88, 95]);
    }
}
