use crate::{
    domain::{Person, RecordError, Student, Teacher},
    registry::RegistryError,
    Registry,
};

impl Registry {
    /// Creates a registry pre-seeded with a small sample dataset.
    ///
    /// The dataset holds two teachers, three students and two courses, with
    /// a handful of enrollments and grades.
    #[must_use]
    pub fn with_sample_data() -> Self {
        let mut registry = Self::new();
        registry.seed_sample_data();
        registry
    }

    pub(super) fn seed_sample_data(&mut self) {
        // The dataset is fixed, and only ever added to an empty registry.
        self.try_seed_sample_data()
            .expect("sample data should always be valid");
    }

    fn try_seed_sample_data(&mut self) -> Result<(), RegistryError> {
        let sabry = teacher("Dr. Sabry", 45, "Male", "Computer Science", "T001")?;
        let rania = teacher("Prof. Rania", 50, "Female", "Mathematics", "T002")?;
        let sabry = self.add_teacher(sabry)?;
        let rania = self.add_teacher(rania)?;

        let muhammad = student("Muhammad", 20, "Male", "S001", "Computer Science")?;
        let nour = student("Nour", 21, "Male", "S002", "Mathematics")?;
        let youssef = student("Youssef", 22, "Male", "S003", "Computer Science")?;
        let muhammad = self.add_student(muhammad)?;
        let nour = self.add_student(nour)?;
        let youssef = self.add_student(youssef)?;

        let cs101 = self.create_course("CS101", "Introduction to Programming", sabry)?;
        let math201 = self.create_course("MATH201", "Advanced Calculus", rania)?;

        for (course, student) in [
            (cs101, muhammad),
            (cs101, youssef),
            (math201, nour),
            (math201, youssef),
        ] {
            let _ = self.enroll(course, student)?;
        }

        for (student, code, grade) in [
            (muhammad, "CS101", 90),
            (muhammad, "CS101", 85),
            (youssef, "CS101", 78),
            (youssef, "CS101", 92),
            (nour, "MATH201", 88),
            (nour, "MATH201", 95),
            (youssef, "MATH201", 82),
        ] {
            self.add_grade(student, code, grade)?;
        }

        Ok(())
    }
}

fn teacher(
    name: &str,
    age: u32,
    gender: &str,
    subject: &str,
    id: &str,
) -> Result<Teacher, RecordError> {
    Teacher::new(Person::new(name, age, gender)?, subject, id)
}

fn student(
    name: &str,
    age: u32,
    gender: &str,
    id: &str,
    major: &str,
) -> Result<Student, RecordError> {
    Student::new(Person::new(name, age, gender)?, id, major)
}
