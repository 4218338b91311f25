//! Read-only reports over a [`Registry`].
//!
//! Each report function selects the data to display and returns a plain
//! value. Values render as text through [`Display`](fmt::Display) and can be
//! serialized (e.g. to JSON) with `serde`.

use std::fmt;

use serde::Serialize;

use crate::{
    domain::{CourseKey, Status, Student, StudentKey},
    Registry,
};

/// Which students to include in a grade report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// A single student.
    One(StudentKey),
    /// Every student, in registration order.
    All,
}

/// A student's grades across every course they have been graded in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport<'a> {
    /// The student's name.
    pub name: &'a str,
    /// The student's identifier.
    pub student_id: &'a str,
    /// Per-course results, in the order courses were first graded.
    pub courses: Vec<CourseResult<'a>>,
    /// Overall GPA, or `None` if the student has no grades.
    pub gpa: Option<f64>,
}

/// A student's grades in one course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseResult<'a> {
    /// The course code.
    pub course_code: &'a str,
    /// Every grade recorded, in submission order.
    pub grades: Vec<u8>,
    /// The mean grade.
    pub average: f64,
    /// Pass or fail.
    pub status: Status,
}

/// Build the grade report for one or all students.
///
/// An unknown student key produces an empty report.
#[must_use]
pub fn student_grades(registry: &Registry, scope: Scope) -> Vec<GradeReport<'_>> {
    match scope {
        Scope::One(key) => registry.student(key).map(grade_report).into_iter().collect(),
        Scope::All => registry
            .students()
            .map(|(_, student)| grade_report(student))
            .collect(),
    }
}

fn grade_report(student: &Student) -> GradeReport<'_> {
    GradeReport {
        name: student.name(),
        student_id: student.student_id(),
        courses: student
            .ledger()
            .courses()
            .filter_map(|(code, _)| course_result(student, code))
            .collect(),
        gpa: student.has_grades().then(|| student.gpa()),
    }
}

fn course_result<'a>(student: &'a Student, course_code: &str) -> Option<CourseResult<'a>> {
    let ledger = student.ledger();
    let (code, grades) = ledger
        .courses()
        .find(|(code, _)| *code == course_code)?;

    Some(CourseResult {
        course_code: code,
        grades: grades.iter().map(|grade| grade.value()).collect(),
        average: ledger.average(code)?,
        status: ledger.status(code),
    })
}

/// A course and the students enrolled in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrollmentReport<'a> {
    /// The course code.
    pub course_code: &'a str,
    /// The course name.
    pub course_name: &'a str,
    /// The instructor's name.
    pub instructor: &'a str,
    /// The instructor's subject.
    pub subject: &'a str,
    /// The enrolled students, in enrollment order.
    pub students: Vec<StudentLine<'a>>,
}

/// A one-line reference to a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentLine<'a> {
    /// The student's name.
    pub name: &'a str,
    /// The student's identifier.
    pub student_id: &'a str,
    /// The student's major.
    pub major: &'a str,
}

impl<'a> From<&'a Student> for StudentLine<'a> {
    fn from(student: &'a Student) -> Self {
        Self {
            name: student.name(),
            student_id: student.student_id(),
            major: student.major(),
        }
    }
}

/// Build the enrollment report for every course.
#[must_use]
pub fn course_enrollment(registry: &Registry) -> Vec<EnrollmentReport<'_>> {
    registry
        .courses()
        .filter_map(|(key, _)| enrollment_report(registry, key))
        .collect()
}

/// Build the enrollment details of a single course.
///
/// Returns `None` if the course is not in the registry.
#[must_use]
pub fn course_details(registry: &Registry, course: CourseKey) -> Option<EnrollmentReport<'_>> {
    enrollment_report(registry, course)
}

fn enrollment_report(registry: &Registry, key: CourseKey) -> Option<EnrollmentReport<'_>> {
    let course = registry.course(key)?;
    let instructor = registry.instructor(course)?;

    Some(EnrollmentReport {
        course_code: course.code(),
        course_name: course.name(),
        instructor: instructor.name(),
        subject: instructor.subject(),
        students: registry
            .enrolled_students(key)
            .map(|(_, student)| StudentLine::from(student))
            .collect(),
    })
}

/// A teacher and the courses they teach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherReport<'a> {
    /// The teacher's name.
    pub name: &'a str,
    /// The teacher's identifier.
    pub teacher_id: &'a str,
    /// The teacher's subject.
    pub subject: &'a str,
    /// The courses taught, in creation order.
    pub courses: Vec<TaughtCourse<'a>>,
}

/// A course as it appears in a teacher's report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaughtCourse<'a> {
    /// The course code.
    pub course_code: &'a str,
    /// The course name.
    pub course_name: &'a str,
    /// The number of enrolled students.
    pub enrolled: usize,
}

/// Build the course-load report for every teacher.
#[must_use]
pub fn teacher_courses(registry: &Registry) -> Vec<TeacherReport<'_>> {
    registry
        .teachers()
        .map(|(key, teacher)| TeacherReport {
            name: teacher.name(),
            teacher_id: teacher.teacher_id(),
            subject: teacher.subject(),
            courses: registry
                .courses_taught_by(key)
                .map(|(_, course)| TaughtCourse {
                    course_code: course.code(),
                    course_name: course.name(),
                    enrolled: course.enrolled_count(),
                })
                .collect(),
        })
        .collect()
}

/// Every enrolled student's grades in a single course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeSheet<'a> {
    /// The course code.
    pub course_code: &'a str,
    /// The course name.
    pub course_name: &'a str,
    /// One row per enrolled student, in enrollment order.
    pub rows: Vec<GradeSheetRow<'a>>,
}

/// A student's row in a [`GradeSheet`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeSheetRow<'a> {
    /// The student.
    pub student: StudentLine<'a>,
    /// Grades recorded in the course, or `None` if there are none.
    pub result: Option<CourseResult<'a>>,
}

/// Build the grade sheet for a course.
///
/// Returns `None` if the course is not in the registry.
#[must_use]
pub fn course_grades(registry: &Registry, course: CourseKey) -> Option<GradeSheet<'_>> {
    let record = registry.course(course)?;
    let code = record.code();

    let rows = registry
        .enrolled_students(course)
        .map(|(_, student)| GradeSheetRow {
            student: StudentLine::from(student),
            result: course_result(student, code),
        })
        .collect();

    Some(GradeSheet {
        course_code: code,
        course_name: record.name(),
        rows,
    })
}

fn grades_line(grades: &[u8]) -> String {
    grades
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for CourseResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grades: {}", grades_line(&self.grades))?;
        writeln!(f, "Average: {:.1}", self.average)?;
        write!(f, "Status: {}", self.status)
    }
}

impl fmt::Display for GradeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Student: {} (ID: {})", self.name, self.student_id)?;
        match self.gpa {
            None => write!(f, "No grades recorded yet."),
            Some(gpa) => {
                for course in &self.courses {
                    writeln!(f, "\n{}:", course.course_code)?;
                    writeln!(f, "{course}")?;
                }
                write!(f, "\nOverall GPA: {gpa:.2}")
            }
        }
    }
}

impl fmt::Display for StudentLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.student_id)
    }
}

impl fmt::Display for EnrollmentReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Course: {} - {}", self.course_code, self.course_name)?;
        writeln!(f, "Instructor: {} ({})", self.instructor, self.subject)?;
        write!(f, "Enrolled Students: {}", self.students.len())?;

        if self.students.is_empty() {
            return write!(f, "\nNo students enrolled.");
        }
        for student in &self.students {
            write!(f, "\n- {student}")?;
        }
        Ok(())
    }
}

impl fmt::Display for TeacherReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Teacher: {} (ID: {})", self.name, self.teacher_id)?;
        writeln!(f, "Subject: {}", self.subject)?;
        write!(f, "Courses Teaching: {}", self.courses.len())?;

        if self.courses.is_empty() {
            return write!(f, "\nNo courses assigned.");
        }
        for course in &self.courses {
            write!(
                f,
                "\n- {} - {}\n  Enrolled Students: {}",
                course.course_code, course.course_name, course.enrolled
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for GradeSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grades for {} - {}", self.course_code, self.course_name)?;
        if self.rows.is_empty() {
            return write!(f, "\nNo students enrolled.");
        }
        for row in &self.rows {
            write!(f, "\n\n{}", row.student)?;
            match &row.result {
                Some(result) => write!(f, "\n{result}")?,
                None => write!(f, "\nNo grades recorded for {}", self.course_code)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Registry {
        Registry::with_sample_data()
    }

    #[test]
    fn grade_report_for_one_student() {
        let registry = sample();
        let muhammad = registry.select_student("1").unwrap();

        let reports = student_grades(&registry, Scope::One(muhammad));

        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert_eq!(report.student_id, "S001");
        assert_eq!(report.courses.len(), 1);
        assert_eq!(report.courses[0].grades, [90, 85]);
        assert_eq!(report.courses[0].average, 87.5);
        assert_eq!(report.courses[0].status, Status::Pass);
        assert_eq!(report.gpa, Some(3.0));
    }

    #[test]
    fn grade_report_for_all_students() {
        let registry = sample();
        let reports = student_grades(&registry, Scope::All);

        let ids: Vec<_> = reports.iter().map(|r| r.student_id).collect();
        assert_eq!(ids, ["S001", "S002", "S003"]);

        let youssef = &reports[2];
        let codes: Vec<_> = youssef.courses.iter().map(|c| c.course_code).collect();
        assert_eq!(codes, ["CS101", "MATH201"]);
    }

    #[test]
    fn grade_report_without_grades_has_no_gpa() {
        let mut registry = Registry::new();
        let person = crate::Person::new("Lin", 19, "Female").unwrap();
        let key = registry
            .add_student(Student::new(person, "S010", "History").unwrap())
            .unwrap();

        let reports = student_grades(&registry, Scope::One(key));

        assert!(reports[0].courses.is_empty());
        assert_eq!(reports[0].gpa, None);
        assert!(reports[0].to_string().contains("No grades recorded yet."));
    }

    #[test]
    fn unknown_student_gives_empty_report() {
        let registry = Registry::new();
        assert!(student_grades(&registry, Scope::One(StudentKey::new(0))).is_empty());
    }

    #[test]
    fn enrollment_report_lists_every_course() {
        let registry = sample();
        let reports = course_enrollment(&registry);

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].course_code, "CS101");
        assert_eq!(reports[0].instructor, "Dr. Sabry");

        let names: Vec<_> = reports[0].students.iter().map(|s| s.name).collect();
        assert_eq!(names, ["Muhammad", "Youssef"]);
    }

    #[test]
    fn enrollment_report_for_empty_course() {
        let mut registry = sample();
        let rania = registry.select_teacher("2").unwrap();
        let course = registry.create_course("MATH301", "Topology", rania).unwrap();

        let report = course_details(&registry, course).unwrap();

        assert!(report.students.is_empty());
        assert!(report.to_string().ends_with("No students enrolled."));
    }

    #[test]
    fn teacher_report_groups_courses_by_instructor() {
        let mut registry = sample();
        let sabry = registry.select_teacher("1").unwrap();
        registry.create_course("CS102", "Data Structures", sabry).unwrap();

        let reports = teacher_courses(&registry);

        assert_eq!(reports.len(), 2);
        let codes: Vec<_> = reports[0].courses.iter().map(|c| c.course_code).collect();
        assert_eq!(codes, ["CS101", "CS102"]);
        assert_eq!(reports[0].courses[0].enrolled, 2);
        assert_eq!(reports[0].courses[1].enrolled, 0);
        assert_eq!(reports[1].subject, "Mathematics");
        assert_eq!(reports[1].courses.len(), 1);
    }

    #[test]
    fn grade_sheet_covers_enrolled_students_only() {
        let mut registry = sample();
        let (cs101, _) = registry.course_by_code("CS101").unwrap();
        // Nour is graded in CS101 but not enrolled in it.
        let nour = registry.select_student("2").unwrap();
        registry.add_grade(nour, "CS101", 70).unwrap();

        let sheet = course_grades(&registry, cs101).unwrap();

        let ids: Vec<_> = sheet.rows.iter().map(|r| r.student.student_id).collect();
        assert_eq!(ids, ["S001", "S003"]);
        let averages: Vec<_> = sheet
            .rows
            .iter()
            .map(|r| r.result.as_ref().map(|result| result.average))
            .collect();
        assert_eq!(averages, [Some(87.5), Some(85.0)]);
    }

    #[test]
    fn grade_sheet_marks_students_without_grades() {
        let mut registry = sample();
        let (math201, _) = registry.course_by_code("MATH201").unwrap();
        let muhammad = registry.select_student("1").unwrap();
        registry.enroll(math201, muhammad).unwrap();

        let sheet = course_grades(&registry, math201).unwrap();

        let last = sheet.rows.last().unwrap();
        assert_eq!(last.student.name, "Muhammad");
        assert_eq!(last.result, None);
    }

    #[test]
    fn reports_serialize_to_json() {
        let registry = sample();
        let json = serde_json::to_value(teacher_courses(&registry)).unwrap();

        assert_eq!(json[0]["teacher_id"], "T001");
        assert_eq!(json[0]["courses"][0]["course_code"], "CS101");
    }
}
