//! Command handlers - screen logic for processing UI events

use chrono::Utc;

use crate::app::state::PendingConfirm;
use crate::app::AppState;
use crate::constants::DEFAULT_GRADE_SCALE;
use crate::form::GradeDraft;
use crate::messages::ui_events::{InputMode, Screen};
use crate::messages::StoreAction;
use crate::models::{
    AttendanceSession, AttendanceStatus, ChatRoomType, GradeScale, GradeSession, GradeStatus,
    MessageType,
};
use crate::views;

/// Comment attached when a session is sent back from the admin preview
const RETURN_COMMENT: &str = "Merci de vérifier les notes saisies.";

impl AppState {
    /// Dispatch and surface any rejection on the status line
    fn apply(&mut self, action: StoreAction) -> Option<String> {
        let name = action.name();
        match self.dispatch(action) {
            Ok(created) => created,
            Err(e) => {
                tracing::warn!(action = name, error = %e, "action rejected");
                self.status = Some(e.to_string());
                None
            }
        }
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    // ========================
    // Navigation
    // ========================

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.selected = 0;
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
        self.grade_entry = None;
        self.open_room = None;
        if screen == Screen::Attendance {
            self.ensure_attendance_session();
        }
    }

    pub fn next_screen(&mut self) {
        self.switch_screen(self.screen.next());
    }

    pub fn prev_screen(&mut self) {
        self.switch_screen(self.screen.prev());
    }

    pub fn select_prev(&mut self) {
        let len = self.list_len();
        if len > 0 {
            self.selected = if self.selected == 0 { len - 1 } else { self.selected - 1 };
        }
    }

    pub fn select_next(&mut self) {
        let len = self.list_len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn back(&mut self) {
        if self.grade_entry.take().is_some() || self.open_room.take().is_some() {
            self.selected = 0;
        }
        self.status = None;
    }

    /// Move to the next class in the list, wrapping around
    pub fn cycle_active_class(&mut self) {
        let classes = self.store.classes();
        if classes.is_empty() {
            return;
        }
        let current = self
            .store
            .active_class_id()
            .and_then(|id| classes.iter().position(|c| c.id == id));
        let next_idx = current.map_or(0, |i| (i + 1) % classes.len());
        let Some(class) = classes.iter().nth(next_idx) else {
            return;
        };
        let (id, name) = (class.id.clone(), class.name.clone());

        self.apply(StoreAction::SetActiveClass(Some(id)));
        self.selected = 0;
        self.set_status(format!("Classe active: {}", name));
        if self.screen == Screen::Attendance {
            self.ensure_attendance_session();
        }
    }

    /// Enter on a list row
    pub fn open_selected(&mut self) {
        match self.screen {
            Screen::Homework => {
                if let Some(id) = self.selected_homework_id() {
                    self.apply(StoreAction::RecordHomeworkView(id));
                }
            }
            Screen::Grades => self.open_grade_entry(),
            Screen::Messages => {
                if let Some(room) = self.store.chat_rooms().iter().nth(self.selected) {
                    let id = room.id.clone();
                    self.open_chat_room(id);
                }
            }
            Screen::Notifications => {
                if let Some(n) = self.store.notifications().iter().nth(self.selected) {
                    let id = n.id.clone();
                    self.apply(StoreAction::MarkNotificationRead(id));
                }
            }
            _ => {}
        }
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        let buffer = match self.screen {
            Screen::Grades => {
                let Some(session) = self.open_grade_session() else {
                    return;
                };
                if !session.status.is_editable() {
                    let msg = format!("Session {}: notes verrouillées", session.status.as_str());
                    self.set_status(msg);
                    return;
                }
                let Some(grade) = session.grades.get(self.selected) else {
                    return;
                };
                let student_id = grade.student_id.clone();
                self.grade_entry
                    .as_ref()
                    .map(|d| d.text(&student_id).to_string())
                    .unwrap_or_default()
            }
            Screen::Attendance => {
                let Some(session) = self.current_attendance() else {
                    return;
                };
                if session.is_submitted {
                    self.set_status("Appel déjà soumis");
                    return;
                }
                let Some(record) = session.records.get(self.selected) else {
                    return;
                };
                record.note.clone().unwrap_or_default()
            }
            Screen::Messages if self.open_room.is_some() => String::new(),
            _ => return,
        };
        self.input_buffer = buffer;
        self.input_mode = InputMode::Editing;
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    pub fn enter_char(&mut self, c: char) {
        self.input_buffer.push(c);
    }

    pub fn delete_char(&mut self) {
        self.input_buffer.pop();
    }

    /// Enter while editing: hand the buffer to whatever is being edited
    pub fn commit_input(&mut self) {
        let text = std::mem::take(&mut self.input_buffer);
        self.input_mode = InputMode::Normal;
        match self.screen {
            Screen::Grades => self.commit_grade(&text),
            Screen::Attendance => {
                let Some((session_id, student_id)) = self.selected_attendance_record() else {
                    return;
                };
                self.apply(StoreAction::UpdateAttendanceNote {
                    session_id,
                    student_id,
                    note: text.trim().to_string(),
                });
            }
            Screen::Messages => {
                let Some(room_id) = self.open_room.clone() else {
                    return;
                };
                let content = text.trim();
                if content.is_empty() {
                    return;
                }
                self.apply(StoreAction::SendMessage {
                    room_id,
                    content: content.to_string(),
                    message_type: MessageType::Text,
                });
            }
            _ => {}
        }
    }

    // ========================
    // Homework
    // ========================

    fn selected_homework_id(&self) -> Option<String> {
        self.store
            .homework()
            .iter()
            .nth(self.selected)
            .map(|hw| hw.id.clone())
    }

    pub fn mark_selected_corrected(&mut self) {
        if let Some(id) = self.selected_homework_id() {
            self.apply(StoreAction::MarkHomeworkCorrected(id));
            self.set_status("Devoir marqué comme corrigé");
        }
    }

    pub fn delete_selected(&mut self) {
        if self.screen == Screen::Homework {
            if let Some(id) = self.selected_homework_id() {
                self.pending_confirm = Some(PendingConfirm::DeleteHomework(id));
            }
        }
    }

    // ========================
    // Grades
    // ========================

    pub fn cycle_grade_filter(&mut self) {
        self.grade_filter = match self.grade_filter {
            None => Some(GradeStatus::Draft),
            Some(GradeStatus::Draft) => Some(GradeStatus::Submitted),
            Some(GradeStatus::Submitted) => Some(GradeStatus::Published),
            Some(GradeStatus::Published) => Some(GradeStatus::Returned),
            Some(GradeStatus::Returned) => None,
        };
        self.selected = 0;
    }

    pub fn cycle_trimester(&mut self) {
        self.new_session_trimester = self.new_session_trimester.next();
    }

    pub fn cycle_exam_type(&mut self) {
        self.new_session_exam = self.new_session_exam.next();
    }

    /// New draft for the active class, opened straight into entry
    pub fn new_grade_session(&mut self) {
        let Some(class) = self
            .store
            .active_class_id()
            .and_then(|id| self.store.classes().get(id))
            .cloned()
        else {
            self.set_status("Aucune classe active");
            return;
        };
        let students = views::students_in_class(&self.store, &class.id);
        if students.is_empty() {
            self.set_status(format!("Aucun élève dans {}", class.name));
            return;
        }
        let scale = GradeScale::try_from(DEFAULT_GRADE_SCALE).unwrap_or(GradeScale::Twenty);
        let draft = GradeSession::draft_for(
            &class,
            &students,
            self.new_session_trimester,
            self.new_session_exam,
            scale,
        );

        if let Some(id) = self.apply(StoreAction::CreateGradeSession(draft)) {
            self.grade_filter = None;
            self.set_status(format!(
                "Session créée: {} T{} {}",
                class.name,
                self.new_session_trimester.number(),
                self.new_session_exam.label()
            ));
            self.open_grade_entry_for(&id);
        }
    }

    fn open_grade_entry(&mut self) {
        if let Some(id) = self.filtered_session_ids().get(self.selected).cloned() {
            self.open_grade_entry_for(&id);
        }
    }

    fn open_grade_entry_for(&mut self, session_id: &str) {
        if let Some(session) = self.store.grade_sessions().get(session_id) {
            self.grade_entry = Some(GradeDraft::from_session(session));
            self.selected = 0;
        }
    }

    fn commit_grade(&mut self, text: &str) {
        let Some(session) = self.open_grade_session() else {
            return;
        };
        let Some(grade) = session.grades.get(self.selected) else {
            return;
        };
        let (session_id, student_id, scale) =
            (session.id.clone(), grade.student_id.clone(), grade.max_value);
        let Some(draft) = self.grade_entry.as_mut() else {
            return;
        };

        match draft.input(&student_id, text, scale) {
            Ok(Some(value)) => {
                self.apply(StoreAction::UpdateGradeValue { session_id, student_id, value });
                self.select_next();
            }
            Ok(None) => self.select_next(),
            Err(e) => self.set_status(e.to_string()),
        }
    }

    pub fn fill_empty_with_zero(&mut self) {
        if !self.open_grade_session().is_some_and(|s| s.status.is_editable()) {
            self.set_status("Session verrouillée");
            return;
        }
        let Some(draft) = self.grade_entry.as_mut() else {
            return;
        };
        let session_id = draft.session_id.clone();
        let filled = draft.fill_empty_with_zero();
        let count = filled.len();
        for student_id in filled {
            self.apply(StoreAction::UpdateGradeValue {
                session_id: session_id.clone(),
                student_id,
                value: 0.0,
            });
        }
        self.set_status(format!("{} note(s) mises à 0", count));
    }

    pub fn request_clear_grades(&mut self) {
        let Some(session) = self.open_grade_session() else {
            return;
        };
        if !session.status.is_editable() {
            self.set_status("Session verrouillée");
            return;
        }
        self.pending_confirm = Some(PendingConfirm::ClearGrades(session.id.clone()));
    }

    fn clear_grades(&mut self, session_id: &str) {
        let Some(draft) = self.grade_entry.as_mut().filter(|d| d.session_id == session_id) else {
            return;
        };
        for student_id in draft.clear_all() {
            self.apply(StoreAction::UpdateGradeValue {
                session_id: session_id.to_string(),
                student_id,
                value: 0.0,
            });
        }
    }

    /// Publish the highlighted session (admin preview)
    pub fn publish_selected(&mut self) {
        if let Some(id) = self.filtered_session_ids().get(self.selected).cloned() {
            self.apply(StoreAction::PublishGradeSession(id));
            self.set_status("Notes publiées");
        }
    }

    /// Send the highlighted session back to the teacher (admin preview)
    pub fn return_selected(&mut self) {
        if let Some(id) = self.filtered_session_ids().get(self.selected).cloned() {
            self.apply(StoreAction::ReturnGradeSession {
                id,
                comment: Some(RETURN_COMMENT.to_string()),
            });
            self.set_status("Session renvoyée pour correction");
        }
    }

    // ========================
    // Attendance
    // ========================

    fn current_attendance(&self) -> Option<&AttendanceSession> {
        let id = self.attendance_session.as_deref()?;
        self.store.attendance_sessions().get(id)
    }

    fn selected_attendance_record(&self) -> Option<(String, String)> {
        let session = self.current_attendance()?;
        let record = session.records.get(self.selected)?;
        Some((session.id.clone(), record.student_id.clone()))
    }

    /// Today's roll call for the active class, created with everyone present
    /// the first time the screen opens
    pub fn ensure_attendance_session(&mut self) {
        self.attendance_session = None;
        let Some(class) = self
            .store
            .active_class_id()
            .and_then(|id| self.store.classes().get(id))
            .cloned()
        else {
            return;
        };
        let now = Utc::now();
        if let Some(existing) = views::attendance_on(&self.store, &class.id, now) {
            self.attendance_session = Some(existing.id.clone());
            return;
        }

        let slot = views::slot_on(&class, now)
            .map(|s| s.label())
            .unwrap_or_else(|| now.format("%H:%M").to_string());
        let students = views::students_in_class(&self.store, &class.id);
        let id = format!("AS_{}_{}", class.id, now.format("%Y%m%d"));
        let session = AttendanceSession::roll_call(id.clone(), &class, &students, now, slot);
        self.apply(StoreAction::CreateAttendanceSession(session));
        self.attendance_session = Some(id);
    }

    pub fn cycle_attendance_status(&mut self) {
        let Some(session) = self.current_attendance() else {
            return;
        };
        let Some(record) = session.records.get(self.selected) else {
            return;
        };
        let action = StoreAction::UpdateAttendanceStatus {
            session_id: session.id.clone(),
            student_id: record.student_id.clone(),
            status: record.status.next(),
        };
        self.apply(action);
    }

    pub fn mark_all_present(&mut self) {
        let Some(session) = self.current_attendance() else {
            return;
        };
        let session_id = session.id.clone();
        let students: Vec<String> = session.records.iter().map(|r| r.student_id.clone()).collect();
        for student_id in students {
            self.apply(StoreAction::UpdateAttendanceStatus {
                session_id: session_id.clone(),
                student_id,
                status: AttendanceStatus::Present,
            });
        }
    }

    // ========================
    // Submit
    // ========================

    pub fn request_submit(&mut self) {
        match self.screen {
            Screen::Grades => {
                let Some(session) = self.open_grade_session() else {
                    return;
                };
                if !session.status.is_editable() {
                    let msg = format!("Session déjà {}", session.status.as_str().to_lowercase());
                    self.set_status(msg);
                    return;
                }
                self.pending_confirm = Some(PendingConfirm::SubmitGrades(session.id.clone()));
            }
            Screen::Attendance => {
                let Some(session) = self.current_attendance() else {
                    return;
                };
                if session.is_submitted {
                    self.set_status("Appel déjà soumis");
                    return;
                }
                self.pending_confirm = Some(PendingConfirm::SubmitAttendance(session.id.clone()));
            }
            _ => {}
        }
    }

    pub fn confirm(&mut self) {
        let Some(pending) = self.pending_confirm.take() else {
            return;
        };
        match pending {
            PendingConfirm::DeleteHomework(id) => {
                self.apply(StoreAction::DeleteHomework(id));
                let len = self.store.homework().len();
                self.selected = self.selected.min(len.saturating_sub(1));
                self.set_status("Devoir supprimé");
            }
            PendingConfirm::SubmitGrades(id) => {
                if self.dispatch(StoreAction::SubmitGradeSession(id.clone())).is_ok() {
                    self.open_grade_entry_for(&id);
                    self.set_status("Notes soumises à l'administration");
                } else {
                    self.set_status(format!("Session introuvable: {}", id));
                }
            }
            PendingConfirm::ClearGrades(id) => self.clear_grades(&id),
            PendingConfirm::SubmitAttendance(id) => {
                self.apply(StoreAction::SubmitAttendance(id));
                if let Some(session) = self.current_attendance() {
                    let counts = views::attendance_counts(session);
                    self.set_status(format!(
                        "Appel validé: {} présents, {} absents, {} retards",
                        counts.present, counts.absent, counts.late
                    ));
                }
            }
        }
    }

    pub fn cancel(&mut self) {
        self.pending_confirm = None;
    }

    // ========================
    // Messages
    // ========================

    fn open_chat_room(&mut self, room_id: String) {
        self.apply(StoreAction::MarkRoomAsRead(room_id.clone()));
        self.open_room = Some(room_id);
        self.selected = 0;
    }

    /// Open (or create) the room about the highlighted student
    pub fn message_selected_student(&mut self, room_type: ChatRoomType) {
        let Some(student) = self.active_students().get(self.selected).map(|s| s.id.clone()) else {
            return;
        };
        let created = self.apply(StoreAction::CreateChatRoom {
            student_id: student.clone(),
            room_type,
        });
        let room_id = created.or_else(|| {
            self.store
                .chat_rooms()
                .iter()
                .find(|r| r.related_student_id == student && r.room_type == room_type)
                .map(|r| r.id.clone())
        });
        if let Some(room_id) = room_id {
            self.switch_screen(Screen::Messages);
            self.open_chat_room(room_id);
        }
    }

    // ========================
    // Notifications
    // ========================

    pub fn mark_all_notifications_read(&mut self) {
        self.apply(StoreAction::MarkAllNotificationsRead);
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            state.enter_char(c);
        }
    }

    #[test]
    fn test_new_session_entry_and_submit() {
        let mut state = AppState::default();
        state.switch_screen(Screen::Grades);
        state.cycle_exam_type(); // TEST_1
        state.new_grade_session();

        let session = state.open_grade_session().unwrap().clone();
        assert_eq!(session.class_name, "4ème A");
        assert_eq!(session.exam_type, crate::models::ExamType::Test1);
        assert!(session.grades.iter().all(|g| g.value == 0.0));
        assert_eq!(state.store.grade_sessions().iter().next().unwrap().id, session.id);

        // first row
        state.start_editing();
        assert_eq!(state.input_mode, InputMode::Editing);
        type_text(&mut state, "16");
        state.commit_input();
        assert_eq!(state.selected, 1);

        // second row: out of range stays out of the store
        state.start_editing();
        type_text(&mut state, "25");
        state.commit_input();
        assert!(state.status.is_some());
        assert_eq!(state.selected, 1);

        state.request_submit();
        assert_eq!(state.pending_confirm, Some(PendingConfirm::SubmitGrades(session.id.clone())));
        state.confirm();

        let stored = state.store.grade_sessions().get(&session.id).unwrap();
        let first = &session.grades[0].student_id;
        let second = &session.grades[1].student_id;
        assert_eq!(stored.status, GradeStatus::Submitted);
        assert!(stored.submitted_at.is_some());
        assert_eq!(stored.grade_for(first).unwrap().value, 16.0);
        assert_eq!(stored.grade_for(second).unwrap().value, 0.0);

        // locked now
        state.start_editing();
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_fill_and_clear_grades() {
        let mut state = AppState::default();
        state.switch_screen(Screen::Grades);
        state.new_grade_session();
        let id = state.open_grade_session().unwrap().id.clone();

        state.start_editing();
        type_text(&mut state, "12");
        state.commit_input();
        state.fill_empty_with_zero();
        let draft = state.grade_entry.as_ref().unwrap();
        let session = state.store.grade_sessions().get(&id).unwrap();
        assert!(session.grades.iter().all(|g| !draft.text(&g.student_id).is_empty()));

        state.request_clear_grades();
        state.confirm();
        let session = state.store.grade_sessions().get(&id).unwrap();
        assert!(session.grades.iter().all(|g| g.value == 0.0));
    }

    #[test]
    fn test_attendance_flow() {
        let mut state = AppState::default();
        state.switch_screen(Screen::Attendance);
        assert_eq!(state.attendance_session.as_deref(), Some("AS1"));

        state.select_next();
        state.cycle_attendance_status();
        state.start_editing();
        type_text(&mut state, " Malade ");
        state.commit_input();

        let record = &state.store.attendance_sessions().get("AS1").unwrap().records[1];
        assert_eq!(record.status, AttendanceStatus::Absent);
        assert_eq!(record.note.as_deref(), Some("Malade"));

        state.request_submit();
        state.confirm();
        assert!(state.store.attendance_sessions().get("AS1").unwrap().is_submitted);

        // frozen
        state.cycle_attendance_status();
        let record = &state.store.attendance_sessions().get("AS1").unwrap().records[1];
        assert_eq!(record.status, AttendanceStatus::Absent);
        assert!(state.status.is_some());
    }

    #[test]
    fn test_attendance_created_for_class_without_sheet() {
        let mut state = AppState::default();
        state.cycle_active_class(); // C1 -> C2
        state.switch_screen(Screen::Attendance);

        let id = state.attendance_session.clone().unwrap();
        let session = state.store.attendance_sessions().get(&id).unwrap();
        assert_eq!(session.class_id, "C2");
        assert!(!session.is_submitted);
        assert!(session.records.iter().all(|r| r.status == AttendanceStatus::Present));

        // reopening reuses the same sheet
        let before = state.store.attendance_sessions().len();
        state.switch_screen(Screen::Attendance);
        assert_eq!(state.store.attendance_sessions().len(), before);
    }

    #[test]
    fn test_open_room_marks_read_and_sends() {
        let mut state = AppState::default();
        state.switch_screen(Screen::Messages);
        let unread_room = state
            .store
            .chat_rooms()
            .iter()
            .position(|r| r.unread_count > 0)
            .unwrap();
        state.selected = unread_room;
        let before = state.store.unread_message_count();
        state.open_selected();
        assert!(state.store.unread_message_count() < before);

        state.start_editing();
        type_text(&mut state, "Bonjour");
        state.commit_input();
        let room_id = state.open_room.clone().unwrap();
        let room = state.store.chat_rooms().get(&room_id).unwrap();
        assert_eq!(room.last_message, "Bonjour");
        assert_eq!(state.store.unread_message_count(), state.store.recount().messages);
    }

    #[test]
    fn test_message_student_reuses_existing_room() {
        let mut state = AppState::default();
        state.switch_screen(Screen::Classes);
        // ST01 already has a parent room (CR1)
        state.message_selected_student(ChatRoomType::TeacherParent);
        assert_eq!(state.screen, Screen::Messages);
        assert_eq!(state.open_room.as_deref(), Some("CR1"));
    }

    #[test]
    fn test_delete_homework_needs_confirmation() {
        let mut state = AppState::default();
        state.switch_screen(Screen::Homework);
        state.delete_selected();
        assert_eq!(state.store.homework().len(), 4);
        state.cancel();
        assert_eq!(state.store.homework().len(), 4);

        state.delete_selected();
        state.confirm();
        assert_eq!(state.store.homework().len(), 3);
        assert!(state.store.homework().get("HW1").is_none());
    }

    #[test]
    fn test_grade_filter_cycles_back_to_all() {
        let mut state = AppState::default();
        for _ in 0..5 {
            state.cycle_grade_filter();
        }
        assert_eq!(state.grade_filter, None);
        state.cycle_grade_filter();
        assert_eq!(state.filtered_session_ids(), vec!["GS3".to_string()]);
    }
}
