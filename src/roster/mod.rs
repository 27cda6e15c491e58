// src/roster/mod.rs
// The in-memory record store: an insertion-ordered roster of students.

/// A single student record.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i64,          // Unique key
    pub name: String,
    pub grade: f64,       // GPA, conventionally on the 4.0 scale
    pub attendance: u32,  // Days attended
}

/// A field-wise update for an existing record. `None` leaves that field as it is.
#[derive(Debug, Clone, Default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub grade: Option<f64>,
    pub attendance: Option<u32>,
}

/// Enumeration orders accepted by [`Roster::list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    /// Oldest first: the order records were added or loaded.
    Insertion,
    /// Most recently added first.
    NewestFirst,
    /// Highest grade first. Equal grades keep their insertion order.
    GradeDesc,
}

/// Rejection returned by [`Roster::add`] when the id is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("id {0} already exists")]
pub struct DuplicateId(pub i64);

/// An insertion-ordered collection of students. The most recently added
/// record sits at the back and is what [`Roster::latest`] reports.
///
/// `add` keeps ids pairwise distinct. Rosters built through
/// [`Roster::from_records`] (the file-load path) skip that check, so every
/// lookup scans the whole roster and tolerates duplicates.
#[derive(Debug, Default)]
pub struct Roster {
    records: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Roster { records: Vec::new() }
    }

    /// Builds a roster from already-collected records without the
    /// duplicate-id check. File loads come through here and keep whatever
    /// the file holds.
    pub fn from_records(records: Vec<Student>) -> Self {
        Roster { records }
    }

    /// Appends a record, making it the new most-recent entry.
    /// An id clash leaves the roster untouched.
    pub fn add(&mut self, student: Student) -> Result<(), DuplicateId> {
        if self.records.iter().any(|s| s.id == student.id) {
            return Err(DuplicateId(student.id));
        }
        self.records.push(student);
        Ok(())
    }

    /// Applies the supplied patch fields to every record with this id.
    /// Returns whether any record matched.
    pub fn update(&mut self, id: i64, patch: &StudentPatch) -> bool {
        let mut found = false;
        for record in self.records.iter_mut().filter(|s| s.id == id) {
            if let Some(name) = &patch.name {
                record.name = name.clone();
            }
            if let Some(grade) = patch.grade {
                record.grade = grade;
            }
            if let Some(attendance) = patch.attendance {
                record.attendance = attendance;
            }
            found = true;
        }
        found
    }

    /// Removes every record with this id. Returns whether any record matched.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.records.len();
        self.records.retain(|s| s.id != id);
        self.records.len() != before
    }

    /// The first record with this id, if any.
    pub fn find(&self, id: i64) -> Option<&Student> {
        self.records.iter().find(|s| s.id == id)
    }

    /// Every record with this id. More than one means a duplicate came in
    /// through a permissive load.
    pub fn find_all(&self, id: i64) -> impl Iterator<Item = &Student> {
        self.records.iter().filter(move |s| s.id == id)
    }

    /// The most recently added record, left in place.
    pub fn latest(&self) -> Option<&Student> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates the roster in the requested order.
    pub fn list(&self, order: ListOrder) -> Box<dyn Iterator<Item = &Student> + '_> {
        match order {
            ListOrder::Insertion => Box::new(self.records.iter()),
            ListOrder::NewestFirst => Box::new(self.records.iter().rev()),
            ListOrder::GradeDesc => {
                let mut sorted: Vec<&Student> = self.records.iter().collect();
                // Stable sort: equal grades keep their insertion order.
                sorted.sort_by(|a, b| b.grade.total_cmp(&a.grade));
                Box::new(sorted.into_iter())
            }
        }
    }
}
