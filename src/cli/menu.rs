//! The interactive menu.
//!
//! Every rejected operation is reported to the user and leaves the registry
//! unchanged; control then returns to the menu it was started from.

use std::fmt::Display;

use dialoguer::{Input, Select};
use records::{
    report::{self, Scope},
    Enrollment, Member, Person, Registry, RegistryError, Selection, SelectionError, Student,
    Teacher,
};
use tracing::instrument;

use super::{
    report::{print_enrollment_reports, print_grade_reports, print_teacher_reports},
    terminal::{rule, Colorize},
};

/// Command arguments for `records menu`.
#[derive(Debug, Default, clap::Parser)]
#[command(about = "Manage students, teachers and courses interactively")]
pub struct Command {}

impl Command {
    #[instrument(level = "debug", skip(self, registry))]
    pub fn run(self, registry: Registry) -> anyhow::Result<()> {
        Menu { registry }.run()
    }
}

/// A set of choices shown as one menu.
trait Action: Copy + 'static {
    const TITLE: &'static str;
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn prompt() -> anyhow::Result<Self> {
        let labels: Vec<_> = Self::ALL.iter().map(|action| action.label()).collect();
        let index = Select::new()
            .with_prompt(Self::TITLE)
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(Self::ALL[index])
    }
}

macro_rules! action {
    ($name:ident, $title:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy)]
        enum $name {
            $($variant),+
        }

        impl Action for $name {
            const TITLE: &'static str = $title;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }
    };
}

action!(MainAction, "Student Management System", {
    Students => "Student Operations",
    Teachers => "Teacher Operations",
    Courses => "Course Operations",
    Reports => "View Reports",
    Exit => "Exit",
});

action!(StudentAction, "Student Operations", {
    Add => "Add New Student",
    AddGrade => "Add Grade to Student",
    View => "View Student Details",
    List => "List All Students",
    Back => "Back to Main Menu",
});

action!(TeacherAction, "Teacher Operations", {
    Add => "Add New Teacher",
    View => "View Teacher Details",
    List => "List All Teachers",
    Back => "Back to Main Menu",
});

action!(CourseAction, "Course Operations", {
    Create => "Create New Course",
    Enroll => "Enroll Student in Course",
    View => "View Course Details",
    Grades => "View Course Grades",
    List => "List All Courses",
    Back => "Back to Main Menu",
});

action!(ReportAction, "Reports", {
    Grades => "Student Grade Report",
    Enrollment => "Course Enrollment Report",
    Teachers => "Teacher Course Report",
    Back => "Back to Main Menu",
});

struct Menu {
    registry: Registry,
}

impl Menu {
    fn run(mut self) -> anyhow::Result<()> {
        loop {
            println!();
            match MainAction::prompt()? {
                MainAction::Students => self.students()?,
                MainAction::Teachers => self.teachers()?,
                MainAction::Courses => self.courses()?,
                MainAction::Reports => self.reports()?,
                MainAction::Exit => return Ok(()),
            }
        }
    }

    fn students(&mut self) -> anyhow::Result<()> {
        loop {
            println!();
            match StudentAction::prompt()? {
                StudentAction::Add => self.add_student()?,
                StudentAction::AddGrade => self.add_grade()?,
                StudentAction::View => self.view_student()?,
                StudentAction::List => self.list_students(),
                StudentAction::Back => return Ok(()),
            }
        }
    }

    fn teachers(&mut self) -> anyhow::Result<()> {
        loop {
            println!();
            match TeacherAction::prompt()? {
                TeacherAction::Add => self.add_teacher()?,
                TeacherAction::View => self.view_teacher()?,
                TeacherAction::List => self.list_teachers(),
                TeacherAction::Back => return Ok(()),
            }
        }
    }

    fn courses(&mut self) -> anyhow::Result<()> {
        loop {
            println!();
            match CourseAction::prompt()? {
                CourseAction::Create => self.create_course()?,
                CourseAction::Enroll => self.enroll()?,
                CourseAction::View => self.view_course()?,
                CourseAction::Grades => self.view_course_grades()?,
                CourseAction::List => self.list_courses(),
                CourseAction::Back => return Ok(()),
            }
        }
    }

    fn reports(&self) -> anyhow::Result<()> {
        loop {
            println!();
            match ReportAction::prompt()? {
                ReportAction::Grades => self.grade_report()?,
                ReportAction::Enrollment => {
                    print_enrollment_reports(&report::course_enrollment(&self.registry));
                }
                ReportAction::Teachers => {
                    print_teacher_reports(&report::teacher_courses(&self.registry));
                }
                ReportAction::Back => return Ok(()),
            }
        }
    }

    fn add_student(&mut self) -> anyhow::Result<()> {
        let Some(person) = read_person("student")? else {
            return Ok(());
        };
        let student_id = read_line("Enter student ID")?;
        let major = read_line("Enter major")?;

        let added = Student::new(person, student_id, major)
            .map_err(RegistryError::from)
            .and_then(|student| self.registry.add_student(student));

        match added {
            Ok(key) => {
                let name = self.registry.student(key).map_or("", |s| s.name());
                success(format!("Student {name} added successfully."));
            }
            Err(e) => reject(e),
        }
        Ok(())
    }

    fn add_grade(&mut self) -> anyhow::Result<()> {
        let Some(student) = self.pick_student("Select student (number)")? else {
            return Ok(());
        };
        let Some(course) = self.pick_course("Select course (number)")? else {
            return Ok(());
        };

        let Ok(grade) = read_line("Enter grade (0-100)")?.trim().parse::<i64>() else {
            reject("Invalid grade. Operation cancelled.");
            return Ok(());
        };

        let code = self
            .registry
            .course(course)
            .map(|course| course.code().to_string())
            .unwrap_or_default();

        match self.registry.add_grade(student, &code, grade) {
            Ok(grade) => {
                let name = self.registry.student(student).map_or("", |s| s.name());
                success(format!("Grade {grade} added for {name} in course {code}"));
            }
            Err(e) => reject(e),
        }
        Ok(())
    }

    fn view_student(&self) -> anyhow::Result<()> {
        let choice = self.choose(
            "Available Students:",
            &self.student_lines(),
            "Select student (number) or 0 to cancel",
            Registry::choose_student,
        )?;
        let Some(Selection::Item(key)) = choice else {
            return Ok(());
        };

        if let Some(student) = self.registry.student(key) {
            println!("\n{}", Member::from(student));
            for report in report::student_grades(&self.registry, Scope::One(key)) {
                println!("\n{report}");
            }
        }
        Ok(())
    }

    fn list_students(&self) {
        if self.registry.student_count() == 0 {
            reject(SelectionError::Empty("students"));
            return;
        }

        println!("\n{}", "List of All Students:".info());
        println!("{}", rule('=', 50));
        for (_, student) in self.registry.students() {
            println!("{:<15} {}", "Name:", student.name());
            println!("{:<15} {}", "Student ID:", student.student_id());
            println!("{:<15} {}", "Major:", student.major());
            println!("{}", rule('-', 50));
        }
    }

    fn add_teacher(&mut self) -> anyhow::Result<()> {
        let Some(person) = read_person("teacher")? else {
            return Ok(());
        };
        let subject = read_line("Enter subject")?;
        let teacher_id = read_line("Enter teacher ID")?;

        let added = Teacher::new(person, subject, teacher_id)
            .map_err(RegistryError::from)
            .and_then(|teacher| self.registry.add_teacher(teacher));

        match added {
            Ok(key) => {
                let name = self.registry.teacher(key).map_or("", |t| t.name());
                success(format!("Teacher {name} added successfully."));
            }
            Err(e) => reject(e),
        }
        Ok(())
    }

    fn view_teacher(&self) -> anyhow::Result<()> {
        let lines: Vec<_> = self
            .registry
            .teachers()
            .map(|(_, t)| format!("{} (ID: {})", t.name(), t.teacher_id()))
            .collect();
        let choice = self.choose(
            "Available Teachers:",
            &lines,
            "Select teacher (number) or 0 to cancel",
            Registry::choose_teacher,
        )?;
        let Some(Selection::Item(key)) = choice else {
            return Ok(());
        };

        if let Some(teacher) = self.registry.teacher(key) {
            println!("\n{}", Member::from(teacher));
        }
        Ok(())
    }

    fn list_teachers(&self) {
        if self.registry.teacher_count() == 0 {
            reject(SelectionError::Empty("teachers"));
            return;
        }

        println!("\n{}", "List of All Teachers:".info());
        println!("{}", rule('=', 50));
        for (_, teacher) in self.registry.teachers() {
            println!("{teacher}");
            println!("{}", rule('-', 50));
        }
    }

    fn create_course(&mut self) -> anyhow::Result<()> {
        if self.registry.teacher_count() == 0 {
            reject(RegistryError::NoTeachers);
            return Ok(());
        }

        let code = read_line("Enter course code")?;
        let name = read_line("Enter course name")?;

        let lines: Vec<_> = self
            .registry
            .teachers()
            .map(|(_, t)| format!("{} ({})", t.name(), t.subject()))
            .collect();
        let Some(teacher) = self.select(
            "Available Teachers:",
            &lines,
            "Select teacher (number)",
            Registry::select_teacher,
        )?
        else {
            return Ok(());
        };

        match self.registry.create_course(code, name, teacher) {
            Ok(key) => {
                let summary = self.registry.course(key).map(|c| c.summary());
                let instructor = self.registry.teacher(teacher).map_or("", |t| t.name());
                success(format!(
                    "Course {} created successfully with instructor {instructor}.",
                    summary.unwrap_or_default()
                ));
            }
            Err(e) => reject(e),
        }
        Ok(())
    }

    fn enroll(&mut self) -> anyhow::Result<()> {
        if self.registry.course_count() == 0 {
            reject("No courses available. Please create courses first.");
            return Ok(());
        }
        if self.registry.student_count() == 0 {
            reject("No students available. Please add students first.");
            return Ok(());
        }

        let Some(course) = self.pick_course("Select course (number)")? else {
            return Ok(());
        };
        let Some(student) = self.pick_student("Select student (number)")? else {
            return Ok(());
        };

        let outcome = self.registry.enroll(course, student);
        let name = self.registry.student(student).map_or("", |s| s.name());
        let course_name = self.registry.course(course).map_or("", |c| c.name());
        match outcome {
            Ok(Enrollment::Enrolled) => success(format!("{name} enrolled in {course_name}")),
            Ok(Enrollment::AlreadyEnrolled) => {
                reject(format!("{name} is already enrolled in {course_name}"));
            }
            Err(e) => reject(e),
        }
        Ok(())
    }

    fn view_course(&self) -> anyhow::Result<()> {
        let choice = self.choose(
            "Available Courses:",
            &self.course_lines(),
            "Select course (number) or 0 to cancel",
            Registry::choose_course,
        )?;
        let Some(Selection::Item(key)) = choice else {
            return Ok(());
        };
        let Some(course) = self.registry.course(key) else {
            return Ok(());
        };

        println!("\n{:<15} {}", "Course Code:", course.code());
        println!("{:<15} {}", "Course Name:", course.name());
        if let Some(instructor) = self.registry.instructor(course) {
            println!("\n{}", "Instructor:".info());
            println!("{instructor}");
        }

        println!("\n{}", "Enrolled Students:".info());
        if course.enrolled_count() == 0 {
            println!("No students enrolled yet.");
        }
        for (_, student) in self.registry.enrolled_students(key) {
            println!("{student}");
            println!("{}", rule('-', 40));
        }
        Ok(())
    }

    fn view_course_grades(&self) -> anyhow::Result<()> {
        let Some(course) = self.pick_course("Select course (number)")? else {
            return Ok(());
        };
        if let Some(sheet) = report::course_grades(&self.registry, course) {
            println!("\n{sheet}");
        }
        Ok(())
    }

    fn list_courses(&self) {
        if self.registry.course_count() == 0 {
            reject(SelectionError::Empty("courses"));
            return;
        }

        println!("\n{}", "List of All Courses:".info());
        println!("{}", rule('=', 70));
        for (_, course) in self.registry.courses() {
            println!("{}", course.summary());
            if let Some(instructor) = self.registry.instructor(course) {
                println!(
                    "Instructor: {} ({})",
                    instructor.name(),
                    instructor.subject()
                );
            }
            println!("Enrolled Students: {}", course.enrolled_count());
            println!("{}", rule('-', 70));
        }
    }

    fn grade_report(&self) -> anyhow::Result<()> {
        let choice = self.choose(
            "Available Students:",
            &self.student_lines(),
            "Select student (number) or 0 for all students",
            Registry::choose_student,
        )?;
        let scope = match choice {
            Some(Selection::Zero) => Scope::All,
            Some(Selection::Item(key)) => Scope::One(key),
            None => return Ok(()),
        };

        print_grade_reports(&report::student_grades(&self.registry, scope));
        Ok(())
    }

    fn student_lines(&self) -> Vec<String> {
        self.registry
            .students()
            .map(|(_, student)| student.summary())
            .collect()
    }

    fn course_lines(&self) -> Vec<String> {
        self.registry
            .courses()
            .map(|(_, course)| course.summary())
            .collect()
    }

    fn pick_student(&self, prompt: &str) -> anyhow::Result<Option<records::StudentKey>> {
        self.select(
            "Available Students:",
            &self.student_lines(),
            prompt,
            Registry::select_student,
        )
    }

    fn pick_course(&self, prompt: &str) -> anyhow::Result<Option<records::CourseKey>> {
        self.select(
            "Available Courses:",
            &self.course_lines(),
            prompt,
            Registry::select_course,
        )
    }

    /// List `lines` with 1-based numbers and let the user pick one.
    ///
    /// Returns `None`, after telling the user why, if the selection is
    /// rejected.
    fn select<K>(
        &self,
        heading: &str,
        lines: &[String],
        prompt: &str,
        select: impl FnOnce(&Registry, &str) -> Result<K, SelectionError>,
    ) -> anyhow::Result<Option<K>> {
        // An empty collection is rejected without prompting.
        let input = if lines.is_empty() {
            String::new()
        } else {
            println!("\n{}", heading.info());
            for (i, line) in lines.iter().enumerate() {
                println!("{}. {line}", i + 1);
            }
            read_line(prompt)?
        };

        match select(&self.registry, &input) {
            Ok(key) => Ok(Some(key)),
            Err(e @ SelectionError::Empty(_)) => {
                reject(e);
                Ok(None)
            }
            Err(e) => {
                reject(format!("{e} Operation cancelled."));
                Ok(None)
            }
        }
    }

    /// As [`select`](Self::select), for prompts which also accept `0`.
    fn choose<K>(
        &self,
        heading: &str,
        lines: &[String],
        prompt: &str,
        choose: impl FnOnce(&Registry, &str) -> Result<Selection<K>, SelectionError>,
    ) -> anyhow::Result<Option<Selection<K>>> {
        self.select(heading, lines, prompt, choose)
    }
}

/// Read the fields shared by students and teachers.
///
/// Returns `None` if the age is not a number.
fn read_person(kind: &str) -> anyhow::Result<Option<Person>> {
    let name = read_line(&format!("Enter {kind} name"))?;
    let Ok(age) = read_line("Enter age")?.trim().parse::<u32>() else {
        reject("Invalid age. Operation cancelled.");
        return Ok(None);
    };
    let gender = read_line("Enter gender")?;

    match Person::new(name, age, gender) {
        Ok(person) => Ok(Some(person)),
        Err(e) => {
            reject(e);
            Ok(None)
        }
    }
}

fn read_line(prompt: &str) -> anyhow::Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

fn success(message: impl Display) {
    println!("{}", message.to_string().success());
}

fn reject(message: impl Display) {
    println!("{}", message.to_string().warning());
}
