//! Action layer - the one path from screens into the store
//!
//! The store accepts any mutation. Workflow rules the screens rely on are
//! enforced here: grades can only be typed into draft or returned sessions,
//! a submitted roll call is frozen, and submitting something that does not
//! exist is reported instead of silently ignored.

use crate::app::AppState;
use crate::error::{AppError, Result};
use crate::messages::StoreAction;

impl AppState {
    /// Apply one store action. Returns the id the store assigned, for the
    /// actions that create something under a fresh id.
    pub fn dispatch(&mut self, action: StoreAction) -> Result<Option<String>> {
        tracing::debug!(action = action.name(), "dispatch");
        self.check(&action)?;

        let store = &mut self.store;
        let created = match action {
            // Classes
            StoreAction::AddClass(class) => {
                store.add_class(class);
                None
            }
            StoreAction::UpdateClass { id, patch } => {
                store.update_class(&id, patch);
                None
            }
            StoreAction::DeleteClass(id) => {
                store.delete_class(&id);
                None
            }
            StoreAction::SetActiveClass(id) => {
                store.set_active_class(id);
                None
            }

            // Students
            StoreAction::AddStudent(student) => {
                store.add_student(student);
                None
            }
            StoreAction::UpdateStudent { id, patch } => {
                store.update_student(&id, patch);
                None
            }
            StoreAction::DeleteStudent(id) => {
                store.delete_student(&id);
                None
            }

            // Homework
            StoreAction::AddHomework(hw) => {
                store.add_homework(hw);
                None
            }
            StoreAction::UpdateHomework { id, patch } => {
                store.update_homework(&id, patch);
                None
            }
            StoreAction::DeleteHomework(id) => {
                store.delete_homework(&id);
                None
            }
            StoreAction::MarkHomeworkCorrected(id) => {
                store.mark_homework_corrected(&id);
                None
            }
            StoreAction::RecordHomeworkView(id) => {
                store.record_homework_view(&id);
                None
            }

            // Resources
            StoreAction::AddResource(resource) => {
                store.add_resource(resource);
                None
            }
            StoreAction::UpdateResource { id, patch } => {
                store.update_resource(&id, patch);
                None
            }
            StoreAction::DeleteResource(id) => {
                store.delete_resource(&id);
                None
            }
            StoreAction::RecordResourceDownload(id) => {
                store.record_resource_download(&id);
                None
            }

            // Grades
            StoreAction::CreateGradeSession(session) => Some(store.create_grade_session(session)),
            StoreAction::UpdateGradeValue { session_id, student_id, value } => {
                store.update_grade_value(&session_id, &student_id, value);
                None
            }
            StoreAction::SubmitGradeSession(id) => {
                store.submit_grade_session(&id);
                None
            }
            StoreAction::PublishGradeSession(id) => {
                store.publish_grade_session(&id);
                None
            }
            StoreAction::ReturnGradeSession { id, comment } => {
                store.return_grade_session(&id, comment);
                None
            }
            StoreAction::DeleteGradeSession(id) => {
                store.delete_grade_session(&id);
                None
            }

            // Attendance
            StoreAction::CreateAttendanceSession(session) => {
                store.create_attendance_session(session);
                None
            }
            StoreAction::UpdateAttendanceStatus { session_id, student_id, status } => {
                store.update_attendance_status(&session_id, &student_id, status);
                None
            }
            StoreAction::UpdateAttendanceNote { session_id, student_id, note } => {
                store.update_attendance_note(&session_id, &student_id, note);
                None
            }
            StoreAction::SubmitAttendance(id) => {
                store.submit_attendance(&id);
                None
            }
            StoreAction::DeleteAttendanceSession(id) => {
                store.delete_attendance_session(&id);
                None
            }

            // Messages
            StoreAction::SendMessage { room_id, content, message_type } => {
                store.send_message(&room_id, &content, message_type);
                None
            }
            StoreAction::ReceiveMessage { room_id, content } => {
                store.receive_message(&room_id, &content);
                None
            }
            StoreAction::MarkRoomAsRead(id) => {
                store.mark_room_as_read(&id);
                None
            }
            StoreAction::CreateChatRoom { student_id, room_type } => {
                store.create_chat_room(&student_id, room_type)
            }

            // Notifications
            StoreAction::PushNotification(n) => {
                store.push_notification(n);
                None
            }
            StoreAction::MarkNotificationRead(id) => {
                store.mark_notification_read(&id);
                None
            }
            StoreAction::MarkAllNotificationsRead => {
                store.mark_all_notifications_read();
                None
            }
        };

        Ok(created)
    }

    fn check(&self, action: &StoreAction) -> Result<()> {
        match action {
            StoreAction::UpdateGradeValue { session_id, .. } => {
                let session = self
                    .store
                    .grade_sessions()
                    .get(session_id)
                    .ok_or_else(|| AppError::not_found("Session de notes", session_id.as_str()))?;
                if !session.status.is_editable() {
                    return Err(AppError::SessionLocked(session_id.clone()));
                }
            }
            StoreAction::SubmitGradeSession(id) => {
                if !self.store.grade_sessions().contains(id) {
                    return Err(AppError::not_found("Session de notes", id.as_str()));
                }
            }
            StoreAction::UpdateAttendanceStatus { session_id, .. }
            | StoreAction::UpdateAttendanceNote { session_id, .. } => {
                let session = self
                    .store
                    .attendance_sessions()
                    .get(session_id)
                    .ok_or_else(|| AppError::not_found("Appel", session_id.as_str()))?;
                if session.is_submitted {
                    return Err(AppError::AttendanceSubmitted(session_id.clone()));
                }
            }
            StoreAction::SubmitAttendance(id) => {
                if !self.store.attendance_sessions().contains(id) {
                    return Err(AppError::not_found("Appel", id.as_str()));
                }
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceStatus, GradeStatus};

    fn grade(session_id: &str, student_id: &str, value: f64) -> StoreAction {
        StoreAction::UpdateGradeValue {
            session_id: session_id.to_string(),
            student_id: student_id.to_string(),
            value,
        }
    }

    #[test]
    fn test_grade_entry_only_in_editable_sessions() {
        let mut state = AppState::default();

        // GS3 is the seeded draft
        assert_eq!(state.dispatch(grade("GS3", "ST16", 15.0)), Ok(None));
        assert_eq!(
            state.store.grade_sessions().get("GS3").unwrap().grade_for("ST16").unwrap().value,
            15.0
        );

        // GS1 is published
        assert_eq!(
            state.dispatch(grade("GS1", "ST01", 3.0)),
            Err(AppError::SessionLocked("GS1".to_string()))
        );
        assert_ne!(
            state.store.grade_sessions().get("GS1").unwrap().grade_for("ST01").unwrap().value,
            3.0
        );

        assert!(matches!(
            state.dispatch(grade("nope", "ST01", 3.0)),
            Err(AppError::NotFound { .. })
        ));
    }

    #[test]
    fn test_returned_session_reopens_for_entry() {
        let mut state = AppState::default();
        state.dispatch(StoreAction::SubmitGradeSession("GS3".to_string())).unwrap();
        assert!(state.dispatch(grade("GS3", "ST16", 10.0)).is_err());

        state
            .dispatch(StoreAction::ReturnGradeSession {
                id: "GS3".to_string(),
                comment: Some("Vérifier".to_string()),
            })
            .unwrap();
        assert_eq!(state.dispatch(grade("GS3", "ST16", 10.0)), Ok(None));
    }

    #[test]
    fn test_submit_twice_is_accepted_and_missing_is_reported() {
        let mut state = AppState::default();
        let submit = || StoreAction::SubmitGradeSession("GS3".to_string());
        state.dispatch(submit()).unwrap();
        state.dispatch(submit()).unwrap();
        assert_eq!(state.store.grade_sessions().get("GS3").unwrap().status, GradeStatus::Submitted);

        assert!(matches!(
            state.dispatch(StoreAction::SubmitGradeSession("GS404".to_string())),
            Err(AppError::NotFound { .. })
        ));
        assert!(matches!(
            state.dispatch(StoreAction::SubmitAttendance("AS404".to_string())),
            Err(AppError::NotFound { .. })
        ));
    }

    #[test]
    fn test_submitted_attendance_is_frozen() {
        let mut state = AppState::default();
        let mark = |status| StoreAction::UpdateAttendanceStatus {
            session_id: "AS1".to_string(),
            student_id: "ST02".to_string(),
            status,
        };

        state.dispatch(mark(AttendanceStatus::Late)).unwrap();
        state.dispatch(StoreAction::SubmitAttendance("AS1".to_string())).unwrap();

        assert_eq!(
            state.dispatch(mark(AttendanceStatus::Absent)),
            Err(AppError::AttendanceSubmitted("AS1".to_string()))
        );
        assert!(state
            .dispatch(StoreAction::UpdateAttendanceNote {
                session_id: "AS1".to_string(),
                student_id: "ST02".to_string(),
                note: "Bus".to_string(),
            })
            .is_err());

        let session = state.store.attendance_sessions().get("AS1").unwrap();
        assert!(session.is_submitted);
        let record = session.records.iter().find(|r| r.student_id == "ST02").unwrap();
        assert_eq!(record.status, AttendanceStatus::Late);
        assert_eq!(record.note, None);
    }

    #[test]
    fn test_created_ids_are_returned() {
        let mut state = AppState::default();
        let room = state
            .dispatch(StoreAction::CreateChatRoom {
                student_id: "ST05".to_string(),
                room_type: crate::models::ChatRoomType::TeacherParent,
            })
            .unwrap();
        assert!(room.is_some_and(|id| state.store.chat_rooms().contains(&id)));

        assert_eq!(state.dispatch(StoreAction::MarkAllNotificationsRead), Ok(None));
        assert_eq!(state.store.unread_notification_count(), 0);
    }
}
