//! Insertion-ordered keyed collections
//!
//! Every store collection is a plain `Vec` scanned by id. There are no
//! secondary indices and no uniqueness check beyond what callers choose to do.

use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceSession, ChatRoom, ClassPatch, ClassRoom, GradeSession, HomeworkPatch,
    HomeworkPost, Notification, Resource, ResourcePatch, Student, StudentPatch,
};

/// A record addressed by an opaque string id
pub trait Entity {
    fn id(&self) -> &str;
}

/// A partial update; unset fields leave the record untouched
pub trait Patch<T> {
    fn apply(self, target: &mut T);
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Collection { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Collection { items }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the front (newest first)
    pub fn add(&mut self, record: T) {
        self.items.insert(0, record);
    }

    /// Insert at the back
    pub fn append(&mut self, record: T) {
        self.items.push(record);
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Shallow-merge `patch` into every record with `id`. Returns false when nothing matched.
    pub fn update<P: Patch<T> + Clone>(&mut self, id: &str, patch: P) -> bool {
        self.modify(id, |record| patch.clone().apply(record))
    }

    /// Run `f` on each record with `id`
    pub fn modify<F: FnMut(&mut T)>(&mut self, id: &str, mut f: F) -> bool {
        let mut hit = false;
        for record in self.items.iter_mut().filter(|r| r.id() == id) {
            f(record);
            hit = true;
        }
        hit
    }

    /// Drop every record with `id`. Returns how many were removed.
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|r| r.id() != id);
        before - self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

macro_rules! entity {
    ($($ty:ty),* $(,)?) => {
        $(impl Entity for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

entity!(
    ClassRoom,
    Student,
    HomeworkPost,
    Resource,
    GradeSession,
    AttendanceSession,
    ChatRoom,
    Notification,
);

macro_rules! merge {
    ($patch:ident, $target:ident; $($field:ident),* $(,)?) => {
        $(if let Some(v) = $patch.$field {
            $target.$field = v;
        })*
    };
}

impl Patch<ClassRoom> for ClassPatch {
    fn apply(self, target: &mut ClassRoom) {
        merge!(self, target; name, level, subject, student_count, room, schedule, average_grade);
    }
}

impl Patch<Student> for StudentPatch {
    fn apply(self, target: &mut Student) {
        merge!(self, target;
            first_name, last_name, class_id, class_name, average,
            attendance_rate, parent_name, parent_phone, status,
        );
    }
}

impl Patch<HomeworkPost> for HomeworkPatch {
    fn apply(self, target: &mut HomeworkPost) {
        merge!(self, target;
            class_id, class_name, subject, title, description,
            due_date, created_at, attachments, view_count, is_corrected,
        );
    }
}

impl Patch<Resource> for ResourcePatch {
    fn apply(self, target: &mut Resource) {
        merge!(self, target;
            class_id, class_name, subject, title, description, file_type,
            file_url, file_size, chapter, uploaded_at, download_count,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StudentStatus;

    fn student(id: &str, first: &str) -> Student {
        Student {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: "Test".to_string(),
            class_id: "C1".to_string(),
            class_name: "4ème A".to_string(),
            average: 12.0,
            attendance_rate: 90.0,
            parent_name: "M. Test".to_string(),
            parent_phone: "0550 000 000".to_string(),
            status: StudentStatus::Active,
        }
    }

    #[test]
    fn test_add_prepends_and_append_appends() {
        let mut c = Collection::new();
        c.append(student("A", "a"));
        c.add(student("B", "b"));
        c.append(student("C", "c"));
        let ids: Vec<&str> = c.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_remove_keeps_other_records_in_order() {
        let mut c: Collection<Student> =
            vec![student("A", "a"), student("B", "b"), student("C", "c")].into();
        assert_eq!(c.remove("B"), 1);
        let ids: Vec<&str> = c.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["A", "C"]);

        assert_eq!(c.remove("missing"), 0);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_update_changes_only_named_fields() {
        let mut c: Collection<Student> = vec![student("A", "a"), student("B", "b")].into();
        let before = c.get("A").cloned().unwrap();

        let hit = c.update(
            "A",
            StudentPatch {
                status: Some(StudentStatus::Watch),
                average: Some(8.5),
                ..Default::default()
            },
        );
        assert!(hit);

        let after = c.get("A").unwrap();
        assert_eq!(after.status, StudentStatus::Watch);
        assert_eq!(after.average, 8.5);
        assert_eq!(after.first_name, before.first_name);
        assert_eq!(after.parent_phone, before.parent_phone);
        assert_eq!(c.get("B").unwrap(), &student("B", "b"));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut c: Collection<Student> = vec![student("A", "a")].into();
        let snapshot = c.clone();
        assert!(!c.update("Z", StudentPatch { average: Some(1.0), ..Default::default() }));
        assert_eq!(c, snapshot);
    }

    #[test]
    fn test_duplicate_ids_are_accepted() {
        let mut c = Collection::new();
        c.add(student("A", "first"));
        c.add(student("A", "second"));
        assert_eq!(c.len(), 2);
        assert_eq!(c.get("A").unwrap().first_name, "second");
    }

    #[test]
    fn test_remove_drops_every_duplicate() {
        let mut c: Collection<Student> =
            vec![student("A", "first"), student("B", "b"), student("A", "second")].into();
        assert_eq!(c.remove("A"), 2);
        assert!(c.get("A").is_none());
        let ids: Vec<&str> = c.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["B"]);
    }

    #[test]
    fn test_update_and_modify_reach_every_duplicate() {
        let mut c: Collection<Student> =
            vec![student("A", "first"), student("B", "b"), student("A", "second")].into();

        assert!(c.update("A", StudentPatch { status: Some(StudentStatus::Watch), ..Default::default() }));
        assert!(c.iter().filter(|s| s.id == "A").all(|s| s.status == StudentStatus::Watch));
        assert_eq!(c.get("B").unwrap().status, StudentStatus::Active);

        let mut calls = 0;
        assert!(c.modify("A", |s| {
            calls += 1;
            s.average = 0.0;
        }));
        assert_eq!(calls, 2);
        let names: Vec<&str> = c.iter().filter(|s| s.id == "A").map(|s| s.first_name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
