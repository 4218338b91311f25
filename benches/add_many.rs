//! This bench test simulates populating a large registry with students,
//! enrollments and grades, and then generating the reports over it.

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use records::{
    report::{self, Scope},
    Person, Registry, Student, Teacher,
};

const TEACHERS: usize = 20;
const COURSES_PER_TEACHER: usize = 5;
const STUDENTS: usize = 1_000;

/// Builds a registry where every student is enrolled in, and graded on,
/// a handful of courses.
fn populate() -> Registry {
    let mut registry = Registry::new();

    let mut courses = Vec::new();
    for t in 0..TEACHERS {
        let person = Person::new(format!("Teacher {t}"), 40, "Female").unwrap();
        let teacher = Teacher::new(person, "Science", format!("T{t:03}")).unwrap();
        let teacher = registry.add_teacher(teacher).unwrap();
        for c in 0..COURSES_PER_TEACHER {
            let code = format!("SCI{t:02}{c}");
            let course = registry
                .create_course(code.clone(), format!("Science {t}.{c}"), teacher)
                .unwrap();
            courses.push((course, code));
        }
    }

    for s in 0..STUDENTS {
        let person = Person::new(format!("Student {s}"), 20, "Male").unwrap();
        let student = Student::new(person, format!("S{s:05}"), "Science").unwrap();
        let student = registry.add_student(student).unwrap();
        for (i, (course, code)) in courses.iter().enumerate().skip(s % 7).step_by(7) {
            registry.enroll(*course, student).unwrap();
            let grade = i64::try_from((s + i) % 101).unwrap();
            registry.add_grade(student, code, grade).unwrap();
        }
    }

    registry
}

fn add_many(c: &mut Criterion) {
    c.bench_function("add many", |b| {
        b.iter(populate);
    });
}

fn reports(c: &mut Criterion) {
    c.bench_function("reports", |b| {
        b.iter_batched(
            populate,
            |registry| {
                report::student_grades(&registry, Scope::All).len()
                    + report::course_enrollment(&registry).len()
                    + report::teacher_courses(&registry).len()
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, add_many, reports);
criterion_main!(benches);
