//! In-memory entity store
//!
//! Holds the seeded collections and the named mutation actions the screens
//! call. Actions are synchronous and infallible: an unknown id is a silent
//! no-op, and nothing here validates values or workflow order. Gating lives
//! one level up, in [`crate::app::AppState::dispatch`].

use chrono::Utc;

use crate::collection::Collection;
use crate::constants::JUST_NOW;
use crate::models::{
    AttendanceSession, AttendanceStatus, ChatMessage, ChatRoom, ChatRoomType, ClassPatch,
    ClassRoom, GradeSession, GradeStatus, HomeworkPatch, HomeworkPost, MessageType, Notification,
    Resource, ResourcePatch, SenderRole, Student, StudentPatch, TeacherProfile,
};
use crate::seed::Seed;

/// Unread totals kept alongside the collections
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnreadCounts {
    pub messages: u32,
    pub notifications: u32,
}

pub struct Store {
    teacher: TeacherProfile,
    classes: Collection<ClassRoom>,
    students: Collection<Student>,
    homework: Collection<HomeworkPost>,
    resources: Collection<Resource>,
    grade_sessions: Collection<GradeSession>,
    attendance_sessions: Collection<AttendanceSession>,
    chat_rooms: Collection<ChatRoom>,
    notifications: Collection<Notification>,
    active_class_id: Option<String>,
    unread: UnreadCounts,
    id_seq: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(Seed::builtin())
    }
}

impl Store {
    pub fn new(seed: Seed) -> Self {
        let mut store = Store {
            teacher: seed.teacher,
            classes: seed.classes.into(),
            students: seed.students.into(),
            homework: seed.homework.into(),
            resources: seed.resources.into(),
            grade_sessions: seed.grade_sessions.into(),
            attendance_sessions: seed.attendance_sessions.into(),
            chat_rooms: seed.chat_rooms.into(),
            notifications: seed.notifications.into(),
            active_class_id: seed.active_class_id,
            unread: UnreadCounts::default(),
            id_seq: 0,
        };
        store.unread = store.recount();
        store
    }

    /// Opaque id in the spirit of a millisecond timestamp, made unique per store
    fn fresh_id(&mut self, prefix: &str) -> String {
        self.id_seq += 1;
        format!("{}{}_{}", prefix, Utc::now().timestamp_millis(), self.id_seq)
    }

    // ========================
    // Reads
    // ========================

    pub fn teacher(&self) -> &TeacherProfile {
        &self.teacher
    }

    pub fn classes(&self) -> &Collection<ClassRoom> {
        &self.classes
    }

    pub fn students(&self) -> &Collection<Student> {
        &self.students
    }

    pub fn homework(&self) -> &Collection<HomeworkPost> {
        &self.homework
    }

    pub fn resources(&self) -> &Collection<Resource> {
        &self.resources
    }

    pub fn grade_sessions(&self) -> &Collection<GradeSession> {
        &self.grade_sessions
    }

    pub fn attendance_sessions(&self) -> &Collection<AttendanceSession> {
        &self.attendance_sessions
    }

    pub fn chat_rooms(&self) -> &Collection<ChatRoom> {
        &self.chat_rooms
    }

    pub fn notifications(&self) -> &Collection<Notification> {
        &self.notifications
    }

    pub fn active_class_id(&self) -> Option<&str> {
        self.active_class_id.as_deref()
    }

    pub fn unread_message_count(&self) -> u32 {
        self.unread.messages
    }

    pub fn unread_notification_count(&self) -> u32 {
        self.unread.notifications
    }

    /// Full scan of both unread totals
    pub fn recount(&self) -> UnreadCounts {
        UnreadCounts {
            messages: self.chat_rooms.iter().map(|r| r.unread_count).sum(),
            notifications: self.notifications.iter().filter(|n| !n.is_read).count() as u32,
        }
    }

    fn verify_counters(&self) {
        debug_assert_eq!(self.unread, self.recount(), "unread counters drifted");
    }

    // ========================
    // Classes
    // ========================

    pub fn add_class(&mut self, class: ClassRoom) {
        tracing::debug!(id = %class.id, "add class");
        self.classes.append(class);
    }

    pub fn update_class(&mut self, id: &str, patch: ClassPatch) {
        self.classes.update(id, patch);
    }

    /// Students of the class are left in place
    pub fn delete_class(&mut self, id: &str) {
        if self.classes.remove(id) > 0 {
            tracing::debug!(id, "delete class");
        }
        if self.active_class_id.as_deref() == Some(id) {
            self.active_class_id = None;
        }
    }

    pub fn set_active_class(&mut self, class_id: Option<String>) {
        self.active_class_id = class_id;
    }

    // ========================
    // Students
    // ========================

    pub fn add_student(&mut self, student: Student) {
        tracing::debug!(id = %student.id, class = %student.class_id, "add student");
        self.students.append(student);
    }

    pub fn update_student(&mut self, id: &str, patch: StudentPatch) {
        self.students.update(id, patch);
    }

    pub fn delete_student(&mut self, id: &str) {
        if self.students.remove(id) > 0 {
            tracing::debug!(id, "delete student");
        }
    }

    // ========================
    // Homework
    // ========================

    pub fn add_homework(&mut self, hw: HomeworkPost) {
        tracing::debug!(id = %hw.id, class = %hw.class_id, "add homework");
        self.homework.add(hw);
    }

    pub fn update_homework(&mut self, id: &str, patch: HomeworkPatch) {
        self.homework.update(id, patch);
    }

    pub fn delete_homework(&mut self, id: &str) {
        self.homework.remove(id);
    }

    pub fn mark_homework_corrected(&mut self, id: &str) {
        self.homework.modify(id, |hw| hw.is_corrected = true);
    }

    pub fn record_homework_view(&mut self, id: &str) {
        self.homework.modify(id, |hw| hw.view_count += 1);
    }

    // ========================
    // Resources
    // ========================

    pub fn add_resource(&mut self, resource: Resource) {
        tracing::debug!(id = %resource.id, "add resource");
        self.resources.add(resource);
    }

    pub fn update_resource(&mut self, id: &str, patch: ResourcePatch) {
        self.resources.update(id, patch);
    }

    pub fn delete_resource(&mut self, id: &str) {
        self.resources.remove(id);
    }

    pub fn record_resource_download(&mut self, id: &str) {
        self.resources.modify(id, |r| r.download_count += 1);
    }

    // ========================
    // Grades
    // ========================

    /// Prepends the session under a freshly assigned id, which is returned
    pub fn create_grade_session(&mut self, mut session: GradeSession) -> String {
        session.id = self.fresh_id("GS");
        let id = session.id.clone();
        tracing::info!(id = %id, class = %session.class_id, exam = ?session.exam_type, "create grade session");
        self.grade_sessions.add(session);
        id
    }

    /// Any value is accepted; bounds are a form concern
    pub fn update_grade_value(&mut self, session_id: &str, student_id: &str, value: f64) {
        self.grade_sessions.modify(session_id, |session| {
            for grade in session.grades.iter_mut().filter(|g| g.student_id == student_id) {
                grade.value = value;
            }
        });
    }

    pub fn submit_grade_session(&mut self, session_id: &str) {
        let submitted_at = Utc::now();
        let hit = self.grade_sessions.modify(session_id, |session| {
            set_session_status(session, GradeStatus::Submitted);
            session.submitted_at = Some(submitted_at);
        });
        if hit {
            tracing::info!(id = session_id, "grade session submitted");
        }
    }

    pub fn publish_grade_session(&mut self, session_id: &str) {
        self.grade_sessions.modify(session_id, |session| {
            set_session_status(session, GradeStatus::Published);
        });
    }

    pub fn return_grade_session(&mut self, session_id: &str, comment: Option<String>) {
        self.grade_sessions.modify(session_id, |session| {
            set_session_status(session, GradeStatus::Returned);
            session.admin_comment = comment.clone();
        });
    }

    pub fn delete_grade_session(&mut self, session_id: &str) {
        self.grade_sessions.remove(session_id);
    }

    // ========================
    // Attendance
    // ========================

    pub fn create_attendance_session(&mut self, session: AttendanceSession) {
        tracing::info!(id = %session.id, class = %session.class_id, "create attendance session");
        self.attendance_sessions.add(session);
    }

    pub fn update_attendance_status(
        &mut self,
        session_id: &str,
        student_id: &str,
        status: AttendanceStatus,
    ) {
        self.attendance_sessions.modify(session_id, |session| {
            for r in session.records.iter_mut().filter(|r| r.student_id == student_id) {
                r.status = status;
            }
        });
    }

    pub fn update_attendance_note(&mut self, session_id: &str, student_id: &str, note: String) {
        self.attendance_sessions.modify(session_id, |session| {
            for r in session.records.iter_mut().filter(|r| r.student_id == student_id) {
                r.note = Some(note.clone());
            }
        });
    }

    pub fn submit_attendance(&mut self, session_id: &str) {
        if self.attendance_sessions.modify(session_id, |s| s.is_submitted = true) {
            tracing::info!(id = session_id, "attendance submitted");
        }
    }

    pub fn delete_attendance_session(&mut self, session_id: &str) {
        self.attendance_sessions.remove(session_id);
    }

    // ========================
    // Messages
    // ========================

    /// Appends a teacher message; teacher messages never count as unread
    pub fn send_message(&mut self, room_id: &str, content: &str, message_type: MessageType) {
        if !self.chat_rooms.contains(room_id) {
            return;
        }
        let message = ChatMessage {
            id: self.fresh_id("M"),
            room_id: room_id.to_string(),
            sender_id: self.teacher.id.clone(),
            sender_name: self.teacher.full_name(),
            sender_role: SenderRole::Teacher,
            content: content.to_string(),
            message_type,
            attachment: None,
            sent_at: Utc::now(),
            is_read: true,
        };
        self.chat_rooms.modify(room_id, |room| {
            room.last_message = message.content.clone();
            room.last_time = JUST_NOW.to_string();
            room.messages.push(message.clone());
        });
        tracing::debug!(room = room_id, "message sent");
        self.verify_counters();
    }

    /// Incoming message from the room's participant
    pub fn receive_message(&mut self, room_id: &str, content: &str) {
        let Some(room) = self.chat_rooms.get(room_id) else {
            return;
        };
        let sender_id = room.participant_id();
        let message = ChatMessage {
            id: String::new(),
            room_id: room_id.to_string(),
            sender_id,
            sender_name: room.participant_name.clone(),
            sender_role: room.participant_role,
            content: content.to_string(),
            message_type: MessageType::Text,
            attachment: None,
            sent_at: Utc::now(),
            is_read: false,
        };
        let message = ChatMessage { id: self.fresh_id("M"), ..message };
        let mut rooms = 0;
        self.chat_rooms.modify(room_id, |room| {
            room.last_message = message.content.clone();
            room.last_time = JUST_NOW.to_string();
            room.unread_count += 1;
            room.messages.push(message.clone());
            rooms += 1;
        });
        self.unread.messages += rooms;
        tracing::debug!(room = room_id, unread = self.unread.messages, "message received");
        self.verify_counters();
    }

    pub fn mark_room_as_read(&mut self, room_id: &str) {
        let mut cleared = 0;
        self.chat_rooms.modify(room_id, |room| {
            cleared += room.unread_count;
            room.unread_count = 0;
            for m in room.messages.iter_mut() {
                m.is_read = true;
            }
        });
        self.unread.messages = self.unread.messages.saturating_sub(cleared);
        self.verify_counters();
    }

    /// Opens a room about `student_id`. No-op when the student is unknown or
    /// a room of that type already exists for them. Returns the new room id.
    pub fn create_chat_room(&mut self, student_id: &str, room_type: ChatRoomType) -> Option<String> {
        let student = self.students.get(student_id)?.clone();
        if self
            .chat_rooms
            .iter()
            .any(|r| r.related_student_id == student_id && r.room_type == room_type)
        {
            return None;
        }

        let (participant_name, participant_role) = match room_type {
            ChatRoomType::TeacherParent => (student.parent_name.clone(), SenderRole::Parent),
            ChatRoomType::TeacherStudent => (student.full_name(), SenderRole::Student),
        };
        let id = self.fresh_id("CR");
        self.chat_rooms.append(ChatRoom {
            id: id.clone(),
            room_type,
            related_student_id: student.id.clone(),
            related_student_name: student.full_name(),
            class_name: student.class_name.clone(),
            participant_name,
            participant_role,
            last_message: String::new(),
            last_time: String::new(),
            unread_count: 0,
            is_online: false,
            messages: Vec::new(),
        });
        tracing::info!(id = %id, student = student_id, "chat room created");
        self.verify_counters();
        Some(id)
    }

    // ========================
    // Notifications
    // ========================

    pub fn push_notification(&mut self, notification: Notification) {
        if !notification.is_read {
            self.unread.notifications += 1;
        }
        self.notifications.add(notification);
        self.verify_counters();
    }

    pub fn mark_notification_read(&mut self, id: &str) {
        let mut cleared = 0;
        self.notifications.modify(id, |n| {
            if !n.is_read {
                cleared += 1;
            }
            n.is_read = true;
        });
        self.unread.notifications = self.unread.notifications.saturating_sub(cleared);
        self.verify_counters();
    }

    pub fn mark_all_notifications_read(&mut self) {
        for n in self.notifications.iter_mut() {
            n.is_read = true;
        }
        self.unread.notifications = 0;
        self.verify_counters();
    }
}

fn set_session_status(session: &mut GradeSession, status: GradeStatus) {
    session.status = status;
    for g in session.grades.iter_mut() {
        g.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExamType, GradeScale, NotificationType, ResourceType, Trimester};

    fn store() -> Store {
        Store::default()
    }

    fn class_students<'a>(store: &'a Store, class_id: &str) -> Vec<&'a Student> {
        store.students().iter().filter(|s| s.class_id == class_id).collect()
    }

    #[test]
    fn test_seed_counters_match_scan() {
        let s = store();
        assert_eq!(s.unread_message_count(), 3);
        assert_eq!(s.unread_notification_count(), 3);
        assert_eq!(
            s.recount(),
            UnreadCounts { messages: 3, notifications: 3 }
        );
        assert_eq!(s.active_class_id(), Some("C1"));
    }

    #[test]
    fn test_add_homework_prepends() {
        let mut s = store();
        let mut hw = s.homework().get("HW2").cloned().unwrap();
        hw.id = "HW9".to_string();
        s.add_homework(hw);
        assert_eq!(s.homework().iter().next().unwrap().id, "HW9");
        assert_eq!(s.homework().len(), 5);
    }

    #[test]
    fn test_delete_homework_removes_only_target() {
        let mut s = store();
        s.delete_homework("HW2");
        let ids: Vec<&str> = s.homework().iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["HW1", "HW3", "HW4"]);

        s.delete_homework("HW2");
        assert_eq!(s.homework().len(), 3);
    }

    #[test]
    fn test_update_homework_merges_fields() {
        let mut s = store();
        s.update_homework(
            "HW1",
            HomeworkPatch {
                title: Some("Chapitre 3 bis".to_string()),
                ..Default::default()
            },
        );
        let hw = s.homework().get("HW1").unwrap();
        assert_eq!(hw.title, "Chapitre 3 bis");
        assert_eq!(hw.view_count, 22);
        assert_eq!(hw.attachments.len(), 1);
    }

    #[test]
    fn test_same_id_homework_is_corrected_and_deleted_together() {
        let mut s = store();
        let copy = s.homework().get("HW1").cloned().unwrap();
        s.add_homework(copy);

        s.mark_homework_corrected("HW1");
        let flags: Vec<bool> = s
            .homework()
            .iter()
            .filter(|h| h.id == "HW1")
            .map(|h| h.is_corrected)
            .collect();
        assert_eq!(flags, vec![true, true]);

        s.delete_homework("HW1");
        assert!(s.homework().get("HW1").is_none());
        assert_eq!(s.homework().len(), 3);
    }

    #[test]
    fn test_update_homework_can_move_class() {
        let mut s = store();
        s.update_homework(
            "HW2",
            HomeworkPatch {
                class_id: Some("C3".to_string()),
                class_name: Some("4ème B".to_string()),
                ..Default::default()
            },
        );
        let hw = s.homework().get("HW2").unwrap();
        assert_eq!(hw.class_id, "C3");
        assert_eq!(hw.class_name, "4ème B");
    }

    #[test]
    fn test_mark_homework_corrected_is_idempotent() {
        let mut s = store();
        s.mark_homework_corrected("HW1");
        let once = s.homework().get("HW1").cloned().unwrap();
        s.mark_homework_corrected("HW1");
        let twice = s.homework().get("HW1").cloned().unwrap();
        assert!(twice.is_corrected);
        assert_eq!(once, twice);
        assert_eq!(s.homework().len(), 4);
    }

    #[test]
    fn test_resource_lifecycle() {
        let mut s = store();
        s.record_resource_download("R5");
        assert_eq!(s.resources().get("R5").unwrap().download_count, 3);

        s.update_resource(
            "R5",
            ResourcePatch {
                chapter: Some(None),
                ..Default::default()
            },
        );
        assert_eq!(s.resources().get("R5").unwrap().chapter, None);

        s.update_resource(
            "R5",
            ResourcePatch {
                file_type: Some(ResourceType::Link),
                file_size: Some(None),
                ..Default::default()
            },
        );
        let r5 = s.resources().get("R5").unwrap();
        assert_eq!(r5.file_type, ResourceType::Link);
        assert_eq!(r5.file_size, None);

        s.delete_resource("R5");
        assert!(s.resources().get("R5").is_none());
        assert_eq!(s.resources().len(), 4);
    }

    #[test]
    fn test_grade_session_scenario() {
        let mut s = store();
        let class = s.classes().get("C1").cloned().unwrap();
        let students: Vec<Student> = class_students(&s, "C1").into_iter().take(5).cloned().collect();
        let refs: Vec<&Student> = students.iter().collect();
        let draft = GradeSession::draft_for(
            &class,
            &refs,
            Trimester::First,
            ExamType::Test1,
            GradeScale::Twenty,
        );
        let id = s.create_grade_session(draft);

        let session = s.grade_sessions().iter().next().unwrap();
        assert_eq!(session.id, id);
        assert_eq!(session.class_name, "4ème A");
        assert_eq!(session.grades.len(), 5);
        assert!(session.grades.iter().all(|g| g.value == 0.0));

        s.update_grade_value(&id, "ST02", 11.0);
        s.update_grade_value(&id, "ST01", 16.0);
        s.submit_grade_session(&id);

        let session = s.grade_sessions().get(&id).unwrap();
        assert_eq!(session.status, GradeStatus::Submitted);
        assert!(session.submitted_at.is_some());
        assert!(session.grades.iter().all(|g| g.status == GradeStatus::Submitted));
        assert_eq!(session.grade_for("ST01").unwrap().value, 16.0);
        assert_eq!(session.grade_for("ST02").unwrap().value, 11.0);
        assert_eq!(session.grade_for("ST03").unwrap().value, 0.0);
    }

    #[test]
    fn test_store_accepts_any_grade_value() {
        let mut s = store();
        s.update_grade_value("GS3", "ST16", 42.0);
        s.update_grade_value("GS3", "ST17", -3.0);
        let session = s.grade_sessions().get("GS3").unwrap();
        assert_eq!(session.grade_for("ST16").unwrap().value, 42.0);
        assert_eq!(session.grade_for("ST17").unwrap().value, -3.0);
    }

    #[test]
    fn test_store_does_not_enforce_workflow_order() {
        let mut s = store();
        s.submit_grade_session("GS1");
        assert_eq!(s.grade_sessions().get("GS1").unwrap().status, GradeStatus::Submitted);

        s.return_grade_session("GS2", Some("Vérifier ST03".to_string()));
        let gs2 = s.grade_sessions().get("GS2").unwrap();
        assert_eq!(gs2.status, GradeStatus::Returned);
        assert_eq!(gs2.admin_comment.as_deref(), Some("Vérifier ST03"));

        s.publish_grade_session("GS3");
        assert_eq!(s.grade_sessions().get("GS3").unwrap().status, GradeStatus::Published);
    }

    #[test]
    fn test_attendance_edits_and_submit() {
        let mut s = store();
        s.update_attendance_status("AS1", "ST03", AttendanceStatus::Absent);
        s.update_attendance_note("AS1", "ST03", "Malade".to_string());
        s.submit_attendance("AS1");

        let session = s.attendance_sessions().get("AS1").unwrap();
        let record = session.records.iter().find(|r| r.student_id == "ST03").unwrap();
        assert_eq!(record.status, AttendanceStatus::Absent);
        assert_eq!(record.note.as_deref(), Some("Malade"));
        assert!(session.is_submitted);

        // the raw store still accepts edits after submit
        s.update_attendance_status("AS1", "ST03", AttendanceStatus::Late);
        let session = s.attendance_sessions().get("AS1").unwrap();
        let record = session.records.iter().find(|r| r.student_id == "ST03").unwrap();
        assert_eq!(record.status, AttendanceStatus::Late);
    }

    #[test]
    fn test_unread_message_count_tracks_every_mutation() {
        let mut s = store();
        let scan = |s: &Store| s.chat_rooms().iter().map(|r| r.unread_count).sum::<u32>();

        s.send_message("CR2", "Bientôt", MessageType::Text);
        assert_eq!(s.unread_message_count(), scan(&s));
        assert_eq!(s.chat_rooms().get("CR2").unwrap().last_message, "Bientôt");

        s.receive_message("CR1", "Merci !");
        assert_eq!(s.unread_message_count(), 4);
        assert_eq!(s.unread_message_count(), scan(&s));

        s.mark_room_as_read("CR2");
        assert_eq!(s.unread_message_count(), 2);
        assert_eq!(s.unread_message_count(), scan(&s));
        assert!(s.chat_rooms().get("CR2").unwrap().messages.iter().all(|m| m.is_read));

        s.mark_room_as_read("CR2");
        s.mark_room_as_read("nope");
        assert_eq!(s.unread_message_count(), scan(&s));

        s.create_chat_room("ST05", ChatRoomType::TeacherParent);
        assert_eq!(s.unread_message_count(), scan(&s));
    }

    #[test]
    fn test_incoming_message_carries_participant_id() {
        let mut s = store();
        s.receive_message("CR2", "Merci");
        assert_eq!(s.chat_rooms().get("CR2").unwrap().messages.last().unwrap().sender_id, "P2");

        s.receive_message("CR3", "Compris");
        assert_eq!(s.chat_rooms().get("CR3").unwrap().messages.last().unwrap().sender_id, "ST04");

        let id = s.create_chat_room("ST05", ChatRoomType::TeacherParent).unwrap();
        s.receive_message(&id, "Bonjour");
        let last = s.chat_rooms().get(&id).unwrap().messages.last().cloned().unwrap();
        assert_eq!(last.sender_id, "P_ST05");
        assert_eq!(last.sender_role, SenderRole::Parent);
    }

    #[test]
    fn test_teacher_message_is_read_and_signed() {
        let mut s = store();
        s.send_message("CR3", "Bravo", MessageType::Text);
        let room = s.chat_rooms().get("CR3").unwrap();
        let last = room.messages.last().unwrap();
        assert_eq!(last.sender_role, SenderRole::Teacher);
        assert_eq!(last.sender_name, "Meriem Hadj");
        assert!(last.is_read);
        assert_eq!(room.last_time, JUST_NOW);
    }

    #[test]
    fn test_create_chat_room_rules() {
        let mut s = store();
        // CR1 already covers ST01 / parent
        assert!(s.create_chat_room("ST01", ChatRoomType::TeacherParent).is_none());
        assert!(s.create_chat_room("ST99", ChatRoomType::TeacherParent).is_none());

        let id = s.create_chat_room("ST01", ChatRoomType::TeacherStudent).unwrap();
        let room = s.chat_rooms().get(&id).unwrap();
        assert_eq!(room.participant_name, "Ahmed Benali");
        assert_eq!(room.participant_role, SenderRole::Student);

        let id = s.create_chat_room("ST02", ChatRoomType::TeacherParent).unwrap();
        let room = s.chat_rooms().get(&id).unwrap();
        assert_eq!(room.participant_name, "M. Hamid");
        assert_eq!(s.chat_rooms().iter().last().unwrap().id, id);
    }

    #[test]
    fn test_notification_counters() {
        let mut s = store();
        s.mark_notification_read("N1");
        s.mark_notification_read("N1");
        s.mark_notification_read("N3");
        assert_eq!(s.unread_notification_count(), 2);

        s.push_notification(Notification {
            id: "N6".to_string(),
            kind: NotificationType::Reminder,
            title: "Rappel".to_string(),
            body: "Appel à faire".to_string(),
            is_read: false,
            created_at: Utc::now(),
            related_id: None,
        });
        assert_eq!(s.unread_notification_count(), 3);

        s.push_notification(Notification {
            id: "N2".to_string(),
            kind: NotificationType::Announcement,
            title: "Doublon".to_string(),
            body: "Même id".to_string(),
            is_read: false,
            created_at: Utc::now(),
            related_id: None,
        });
        s.mark_notification_read("N2");
        assert!(s.notifications().iter().filter(|n| n.id == "N2").all(|n| n.is_read));
        assert_eq!(s.unread_notification_count(), s.recount().notifications);

        s.mark_all_notifications_read();
        assert_eq!(s.unread_notification_count(), 0);
        assert_eq!(s.recount().notifications, 0);
    }

    #[test]
    fn test_delete_class_does_not_cascade() {
        let mut s = store();
        let before = s.students().len();
        s.delete_class("C1");
        assert!(s.classes().get("C1").is_none());
        assert_eq!(s.students().len(), before);
        assert_eq!(s.active_class_id(), None);
    }

    #[test]
    fn test_student_crud() {
        let mut s = store();
        s.update_student(
            "ST15",
            StudentPatch {
                status: Some(crate::models::StudentStatus::Active),
                ..Default::default()
            },
        );
        assert_eq!(
            s.students().get("ST15").unwrap().status,
            crate::models::StudentStatus::Active
        );
        s.delete_student("ST15");
        assert!(s.students().get("ST15").is_none());
        assert!(s.students().get("ST14").is_some());
    }
}
