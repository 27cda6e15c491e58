// gradebook - main.rs
// A minimal line-oriented front-end standing in for the original form: one
// command per line, fields prompted one at a time like the form's text
// boxes. All record handling goes through the library; this file only
// prompts, prints, and maps errors to a single generic message.

use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::warn;

use gradebook::forms;
use gradebook::roster::{ListOrder, Roster, Student};
use gradebook::storage;
use gradebook::Config;

const MENU: &str =
    "commands: add, display, sort, update, delete, search, peek, count, save, load, quit";

fn main() -> Result<(), String> {
    env_logger::init();

    let config = Config::load(Path::new("gradebook.json")).map_err(|e| e.to_string())?;
    let data_file = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.data_file.clone());

    let mut roster = Roster::new();
    println!("Student Database ({})", data_file.display());
    println!("{MENU}");

    loop {
        let mut line = String::new();
        let read = io::stdin().read_line(&mut line).map_err(|e| e.to_string())?;
        if read == 0 {
            break;
        }
        match line.trim() {
            "" => {}
            "add" => match add_flow(&mut roster, &config) {
                Ok(name) => println!("Added: {name}"),
                Err(e) => reject("add", e),
            },
            "display" => display(&roster, ListOrder::NewestFirst),
            "sort" => display(&roster, ListOrder::GradeDesc),
            "update" => match update_flow(&mut roster) {
                Ok(true) => println!("Student updated."),
                Ok(false) => println!("Student not found."),
                Err(e) => reject("update", e),
            },
            "delete" => match delete_flow(&mut roster) {
                Ok(true) => println!("Student deleted."),
                Ok(false) => println!("Student not found."),
                Err(e) => reject("delete", e),
            },
            "search" => match search_flow(&roster) {
                Ok(()) => {}
                Err(e) => reject("search", e),
            },
            "peek" => match roster.latest() {
                Some(s) => println!("Top Student -> {}", describe(s)),
                None => println!("No students."),
            },
            "count" => println!("Total Students: {}", roster.len()),
            "save" => match storage::save(&roster, &data_file) {
                Ok(()) => println!("Data saved to {}.", data_file.display()),
                Err(e) => {
                    warn!("save failed: {e}");
                    println!("Error saving file!");
                }
            },
            "load" => match storage::load(&data_file) {
                Ok(loaded) => {
                    roster = loaded;
                    println!("Data loaded successfully!");
                }
                Err(e) => {
                    warn!("load failed: {e}");
                    println!("Error loading file!");
                }
            },
            "quit" | "exit" => break,
            other => println!("Unknown command {other:?}. {MENU}"),
        }
    }

    Ok(())
}

fn reject(operation: &str, err: Box<dyn Error>) {
    warn!("{operation} rejected: {err}");
    println!("Invalid input! Please check values.");
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn describe(s: &Student) -> String {
    format!(
        "ID: {}, Name: {}, Grade: {}, Attendance: {}",
        s.id, s.name, s.grade, s.attendance
    )
}

fn display(roster: &Roster, order: ListOrder) {
    if roster.is_empty() {
        println!("No students.");
        return;
    }
    match order {
        ListOrder::GradeDesc => println!("===== Students Sorted by GPA (High -> Low) ====="),
        _ => println!("===== Students (Newest -> Oldest) ====="),
    }
    for s in roster.list(order) {
        println!("{}", describe(s));
    }
}

fn add_flow(roster: &mut Roster, config: &Config) -> Result<String, Box<dyn Error>> {
    let id = prompt("ID")?;
    let name = prompt("Name")?;
    let grade = prompt("GPA (blank to enter marks)")?;
    let attendance = prompt("Attendance")?;

    // A blank grade means the GPA comes from per-subject marks instead.
    let grade = if grade.is_empty() {
        let mut marks = Vec::with_capacity(config.subjects);
        for subject in 1..=config.subjects {
            let text = prompt(&format!("Marks for subject {} (out of {})", subject, config.full_marks))?;
            marks.push(forms::parse_mark(&text)?);
        }
        forms::gpa_from_marks(&marks, config.full_marks).to_string()
    } else {
        grade
    };

    forms::add_student(roster, &id, &name, &grade, &attendance)?;
    Ok(name)
}

fn update_flow(roster: &mut Roster) -> Result<bool, Box<dyn Error>> {
    let id = prompt("ID to update")?;
    let name = prompt("New name (blank keeps current)")?;
    let grade = prompt("New GPA (blank keeps current)")?;
    let attendance = prompt("New attendance (blank keeps current)")?;
    Ok(forms::update_student(roster, &id, &name, &grade, &attendance)?)
}

fn delete_flow(roster: &mut Roster) -> Result<bool, Box<dyn Error>> {
    let id = prompt("ID to delete")?;
    Ok(forms::delete_student(roster, &id)?)
}

fn search_flow(roster: &Roster) -> Result<(), Box<dyn Error>> {
    let id = prompt("ID to search")?;
    match forms::find_student(roster, &id)? {
        Some(s) => println!("Found -> {}", describe(s)),
        None => println!("Student not found!"),
    }
    Ok(())
}
