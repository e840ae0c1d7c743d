//! Store actions - every mutation the store accepts, as a message
//!
//! Screens never touch the store directly; they send one of these through
//! [`crate::app::AppState::dispatch`], which applies the action-layer gating
//! before forwarding to the store.

use crate::models::{
    AttendanceSession, AttendanceStatus, ChatRoomType, ClassPatch, ClassRoom, GradeSession,
    HomeworkPatch, HomeworkPost, MessageType, Notification, Resource, ResourcePatch, Student,
    StudentPatch,
};

#[derive(Debug, Clone)]
pub enum StoreAction {
    // Classes
    AddClass(ClassRoom),
    UpdateClass { id: String, patch: ClassPatch },
    DeleteClass(String),
    SetActiveClass(Option<String>),

    // Students
    AddStudent(Student),
    UpdateStudent { id: String, patch: StudentPatch },
    DeleteStudent(String),

    // Homework
    AddHomework(HomeworkPost),
    UpdateHomework { id: String, patch: HomeworkPatch },
    DeleteHomework(String),
    MarkHomeworkCorrected(String),
    RecordHomeworkView(String),

    // Resources
    AddResource(Resource),
    UpdateResource { id: String, patch: ResourcePatch },
    DeleteResource(String),
    RecordResourceDownload(String),

    // Grades
    CreateGradeSession(GradeSession),
    UpdateGradeValue {
        session_id: String,
        student_id: String,
        value: f64,
    },
    SubmitGradeSession(String),
    PublishGradeSession(String),
    ReturnGradeSession { id: String, comment: Option<String> },
    DeleteGradeSession(String),

    // Attendance
    CreateAttendanceSession(AttendanceSession),
    UpdateAttendanceStatus {
        session_id: String,
        student_id: String,
        status: AttendanceStatus,
    },
    UpdateAttendanceNote {
        session_id: String,
        student_id: String,
        note: String,
    },
    SubmitAttendance(String),
    DeleteAttendanceSession(String),

    // Messages
    SendMessage {
        room_id: String,
        content: String,
        message_type: MessageType,
    },
    ReceiveMessage { room_id: String, content: String },
    MarkRoomAsRead(String),
    CreateChatRoom {
        student_id: String,
        room_type: ChatRoomType,
    },

    // Notifications
    PushNotification(Notification),
    MarkNotificationRead(String),
    MarkAllNotificationsRead,
}

impl StoreAction {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            StoreAction::AddClass(_) => "add_class",
            StoreAction::UpdateClass { .. } => "update_class",
            StoreAction::DeleteClass(_) => "delete_class",
            StoreAction::SetActiveClass(_) => "set_active_class",
            StoreAction::AddStudent(_) => "add_student",
            StoreAction::UpdateStudent { .. } => "update_student",
            StoreAction::DeleteStudent(_) => "delete_student",
            StoreAction::AddHomework(_) => "add_homework",
            StoreAction::UpdateHomework { .. } => "update_homework",
            StoreAction::DeleteHomework(_) => "delete_homework",
            StoreAction::MarkHomeworkCorrected(_) => "mark_homework_corrected",
            StoreAction::RecordHomeworkView(_) => "record_homework_view",
            StoreAction::AddResource(_) => "add_resource",
            StoreAction::UpdateResource { .. } => "update_resource",
            StoreAction::DeleteResource(_) => "delete_resource",
            StoreAction::RecordResourceDownload(_) => "record_resource_download",
            StoreAction::CreateGradeSession(_) => "create_grade_session",
            StoreAction::UpdateGradeValue { .. } => "update_grade_value",
            StoreAction::SubmitGradeSession(_) => "submit_grade_session",
            StoreAction::PublishGradeSession(_) => "publish_grade_session",
            StoreAction::ReturnGradeSession { .. } => "return_grade_session",
            StoreAction::DeleteGradeSession(_) => "delete_grade_session",
            StoreAction::CreateAttendanceSession(_) => "create_attendance_session",
            StoreAction::UpdateAttendanceStatus { .. } => "update_attendance_status",
            StoreAction::UpdateAttendanceNote { .. } => "update_attendance_note",
            StoreAction::SubmitAttendance(_) => "submit_attendance",
            StoreAction::DeleteAttendanceSession(_) => "delete_attendance_session",
            StoreAction::SendMessage { .. } => "send_message",
            StoreAction::ReceiveMessage { .. } => "receive_message",
            StoreAction::MarkRoomAsRead(_) => "mark_room_as_read",
            StoreAction::CreateChatRoom { .. } => "create_chat_room",
            StoreAction::PushNotification(_) => "push_notification",
            StoreAction::MarkNotificationRead(_) => "mark_notification_read",
            StoreAction::MarkAllNotificationsRead => "mark_all_notifications_read",
        }
    }
}
