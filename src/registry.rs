//! The in-memory registry of all records.
//!
//! The [`Registry`] owns every student, teacher and course. Records refer to
//! one another through typed keys ([`StudentKey`], [`TeacherKey`],
//! [`CourseKey`]) which are resolved against the registry on lookup.

use tracing::instrument;

use crate::domain::{
    Config, Course, CourseKey, Enrollment, Grade, GradeError, RecordError, Student, StudentKey,
    Teacher, TeacherKey,
};

mod sample;

/// Positional selection of records from user input.
pub mod selection;
pub use selection::{Selection, SelectionError};

/// Every student, teacher and course known to the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    students: Vec<Student>,
    teachers: Vec<Teacher>,
    courses: Vec<Course>,
    allow_duplicate_ids: bool,
}

/// Errors that can occur when modifying the registry.
///
/// The registry is always left unchanged when an operation fails.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A course cannot be created before any teachers exist.
    #[error("No teachers available. Please add teachers first.")]
    NoTeachers,
    /// The student key does not belong to this registry.
    #[error("no student at position {}", .0.position())]
    UnknownStudent(StudentKey),
    /// The teacher key does not belong to this registry.
    #[error("no teacher at position {}", .0.position())]
    UnknownTeacher(TeacherKey),
    /// The course key does not belong to this registry.
    #[error("no course at position {}", .0.position())]
    UnknownCourse(CourseKey),
    /// No course has the given code.
    #[error("course {0} not found")]
    UnknownCourseCode(String),
    /// A student with the same student ID is already registered.
    #[error("a student with ID {0} already exists")]
    DuplicateStudentId(String),
    /// A teacher with the same teacher ID is already registered.
    #[error("a teacher with ID {0} already exists")]
    DuplicateTeacherId(String),
    /// A course with the same code is already registered.
    #[error("a course with code {0} already exists")]
    DuplicateCourseCode(String),
    /// A record could not be constructed.
    #[error(transparent)]
    Record(#[from] RecordError),
    /// A grade was rejected.
    #[error(transparent)]
    Grade(#[from] GradeError),
}

impl Registry {
    /// Creates an empty registry which rejects duplicate identifiers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry according to the given configuration.
    ///
    /// If `sample_data` is set, the registry is pre-seeded with the sample
    /// dataset.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self {
            allow_duplicate_ids: config.allow_duplicate_ids,
            ..Self::default()
        };

        if config.sample_data {
            registry.seed_sample_data();
        }

        registry
    }

    /// Add a student to the registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateStudentId`] if another student has
    /// the same ID and duplicates are not allowed.
    pub fn add_student(&mut self, student: Student) -> Result<StudentKey, RegistryError> {
        if !self.allow_duplicate_ids
            && self
                .students
                .iter()
                .any(|s| s.student_id() == student.student_id())
        {
            return Err(RegistryError::DuplicateStudentId(
                student.student_id().to_string(),
            ));
        }

        tracing::info!("Student {} added", student.summary());
        let key = StudentKey::new(self.students.len());
        self.students.push(student);
        Ok(key)
    }

    /// Add a teacher to the registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateTeacherId`] if another teacher has
    /// the same ID and duplicates are not allowed.
    pub fn add_teacher(&mut self, teacher: Teacher) -> Result<TeacherKey, RegistryError> {
        if !self.allow_duplicate_ids
            && self
                .teachers
                .iter()
                .any(|t| t.teacher_id() == teacher.teacher_id())
        {
            return Err(RegistryError::DuplicateTeacherId(
                teacher.teacher_id().to_string(),
            ));
        }

        tracing::info!("Teacher {} (ID: {}) added", teacher.name(), teacher.teacher_id());
        let key = TeacherKey::new(self.teachers.len());
        self.teachers.push(teacher);
        Ok(key)
    }

    /// Add a course to the registry.
    ///
    /// # Errors
    ///
    /// This method can fail if:
    ///
    /// - the course's instructor is not in this registry
    /// - another course has the same code and duplicates are not allowed
    pub fn add_course(&mut self, course: Course) -> Result<CourseKey, RegistryError> {
        let instructor = self
            .teacher(course.instructor())
            .ok_or(RegistryError::UnknownTeacher(course.instructor()))?;

        if !self.allow_duplicate_ids && self.course_by_code(course.code()).is_some() {
            return Err(RegistryError::DuplicateCourseCode(course.code().to_string()));
        }

        tracing::info!(
            "Course {} created with instructor {}",
            course.summary(),
            instructor.name()
        );
        let key = CourseKey::new(self.courses.len());
        self.courses.push(course);
        Ok(key)
    }

    /// Create a course taught by an existing teacher.
    ///
    /// # Errors
    ///
    /// This method can fail if:
    ///
    /// - there are no teachers in the registry
    /// - the teacher key does not belong to this registry
    /// - the code or name is empty
    /// - another course has the same code and duplicates are not allowed
    #[instrument(level = "debug", skip(self, code, name))]
    pub fn create_course(
        &mut self,
        code: impl Into<String>,
        name: impl Into<String>,
        teacher: TeacherKey,
    ) -> Result<CourseKey, RegistryError> {
        if self.teachers.is_empty() {
            return Err(RegistryError::NoTeachers);
        }
        let course = Course::new(code, name, teacher)?;
        self.add_course(course)
    }

    /// Record a grade for a student in an existing course.
    ///
    /// The student does not need to be enrolled in the course.
    ///
    /// # Errors
    ///
    /// This method can fail if:
    ///
    /// - the student key does not belong to this registry
    /// - no course has the given code
    /// - the grade is outside `0..=100`
    #[instrument(level = "debug", skip(self))]
    pub fn add_grade(
        &mut self,
        student: StudentKey,
        course_code: &str,
        grade: i64,
    ) -> Result<Grade, RegistryError> {
        if self.course_by_code(course_code).is_none() {
            return Err(RegistryError::UnknownCourseCode(course_code.trim().to_string()));
        }

        let record = self
            .students
            .get_mut(student.index())
            .ok_or(RegistryError::UnknownStudent(student))?;

        Ok(record.add_grade(course_code.trim(), grade)?)
    }

    /// Enroll a student in a course.
    ///
    /// Enrolling a student who is already enrolled is not an error; it is
    /// reported as [`Enrollment::AlreadyEnrolled`].
    ///
    /// # Errors
    ///
    /// Returns an error if either key does not belong to this registry.
    #[instrument(level = "debug", skip(self))]
    pub fn enroll(
        &mut self,
        course: CourseKey,
        student: StudentKey,
    ) -> Result<Enrollment, RegistryError> {
        let name = self
            .student(student)
            .ok_or(RegistryError::UnknownStudent(student))?
            .name()
            .to_string();

        let record = self
            .courses
            .get_mut(course.index())
            .ok_or(RegistryError::UnknownCourse(course))?;

        let outcome = record.enroll(student);
        match outcome {
            Enrollment::Enrolled => tracing::info!("{name} enrolled in {}", record.name()),
            Enrollment::AlreadyEnrolled => {
                tracing::info!("{name} is already enrolled in {}", record.name());
            }
        }
        Ok(outcome)
    }

    /// Look up a student by key.
    #[must_use]
    pub fn student(&self, key: StudentKey) -> Option<&Student> {
        self.students.get(key.index())
    }

    /// Look up a teacher by key.
    #[must_use]
    pub fn teacher(&self, key: TeacherKey) -> Option<&Teacher> {
        self.teachers.get(key.index())
    }

    /// Look up a course by key.
    #[must_use]
    pub fn course(&self, key: CourseKey) -> Option<&Course> {
        self.courses.get(key.index())
    }

    /// Find the first course with the given code.
    #[must_use]
    pub fn course_by_code(&self, code: &str) -> Option<(CourseKey, &Course)> {
        let code = code.trim();
        self.courses().find(|(_, course)| course.code() == code)
    }

    /// The teacher of a course.
    #[must_use]
    pub fn instructor(&self, course: &Course) -> Option<&Teacher> {
        self.teacher(course.instructor())
    }

    /// Iterate over all students in the order they were added.
    pub fn students(&self) -> impl Iterator<Item = (StudentKey, &Student)> {
        self.students
            .iter()
            .enumerate()
            .map(|(i, student)| (StudentKey::new(i), student))
    }

    /// Iterate over all teachers in the order they were added.
    pub fn teachers(&self) -> impl Iterator<Item = (TeacherKey, &Teacher)> {
        self.teachers
            .iter()
            .enumerate()
            .map(|(i, teacher)| (TeacherKey::new(i), teacher))
    }

    /// Iterate over all courses in the order they were added.
    pub fn courses(&self) -> impl Iterator<Item = (CourseKey, &Course)> {
        self.courses
            .iter()
            .enumerate()
            .map(|(i, course)| (CourseKey::new(i), course))
    }

    /// Iterate over the courses taught by a teacher.
    pub fn courses_taught_by(
        &self,
        teacher: TeacherKey,
    ) -> impl Iterator<Item = (CourseKey, &Course)> {
        self.courses()
            .filter(move |(_, course)| course.instructor() == teacher)
    }

    /// Iterate over the students enrolled in a course, in enrollment order.
    ///
    /// Yields nothing if the course is not in this registry.
    pub fn enrolled_students(
        &self,
        course: CourseKey,
    ) -> impl Iterator<Item = (StudentKey, &Student)> {
        self.course(course)
            .into_iter()
            .flat_map(|course| course.enrolled().iter().copied())
            .filter_map(|key| self.student(key).map(|student| (key, student)))
    }

    /// The number of registered students.
    #[must_use]
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// The number of registered teachers.
    #[must_use]
    pub fn teacher_count(&self) -> usize {
        self.teachers.len()
    }

    /// The number of registered courses.
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Select a student by the 1-based position typed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no students, or the input is not a
    /// valid position.
    pub fn select_student(&self, input: &str) -> Result<StudentKey, SelectionError> {
        selection::position(input, self.students.len(), "students").map(StudentKey::new)
    }

    /// Select a teacher by the 1-based position typed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no teachers, or the input is not a
    /// valid position.
    pub fn select_teacher(&self, input: &str) -> Result<TeacherKey, SelectionError> {
        selection::position(input, self.teachers.len(), "teachers").map(TeacherKey::new)
    }

    /// Select a course by the 1-based position typed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no courses, or the input is not a
    /// valid position.
    pub fn select_course(&self, input: &str) -> Result<CourseKey, SelectionError> {
        selection::position(input, self.courses.len(), "courses").map(CourseKey::new)
    }

    /// As [`select_student`](Self::select_student), but also accepting `0`.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no students, or the input is neither
    /// `0` nor a valid position.
    pub fn choose_student(&self, input: &str) -> Result<Selection<StudentKey>, SelectionError> {
        selection::choice(input, self.students.len(), "students").map(|s| s.map(StudentKey::new))
    }

    /// As [`select_teacher`](Self::select_teacher), but also accepting `0`.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no teachers, or the input is neither
    /// `0` nor a valid position.
    pub fn choose_teacher(&self, input: &str) -> Result<Selection<TeacherKey>, SelectionError> {
        selection::choice(input, self.teachers.len(), "teachers").map(|s| s.map(TeacherKey::new))
    }

    /// As [`select_course`](Self::select_course), but also accepting `0`.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no courses, or the input is neither
    /// `0` nor a valid position.
    pub fn choose_course(&self, input: &str) -> Result<Selection<CourseKey>, SelectionError> {
        selection::choice(input, self.courses.len(), "courses").map(|s| s.map(CourseKey::new))
    }
}
