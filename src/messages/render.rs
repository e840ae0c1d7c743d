//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::{InputMode, Screen};
use crate::models::{
    AttendanceSession, ChatRoom, ClassRoom, ExamType, GradeSession, GradeStatus, HomeworkPost,
    Notification, Resource, Student, Trimester,
};
use crate::views::{AttendanceCounts, GradeStats};

/// Open grade-entry sheet
#[derive(Debug, Clone)]
pub struct GradeEntryView {
    pub session: GradeSession,
    /// Raw text per grade row, in session order
    pub texts: Vec<String>,
    pub stats: GradeStats,
    pub editable: bool,
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    // Navigation
    pub screen: Screen,
    pub input_mode: InputMode,
    pub selected: usize,
    pub input_buffer: String,

    // Header
    pub teacher_name: String,
    pub school_name: String,
    pub active_class: Option<ClassRoom>,
    pub unread_messages: u32,
    pub unread_notifications: u32,

    // Home
    pub draft_sessions: usize,
    pub homework_to_correct: usize,

    // Classes
    pub classes: Vec<ClassRoom>,
    pub class_students: Vec<Student>,

    // Homework
    pub homework: Vec<HomeworkPost>,
    pub resources: Vec<Resource>,

    // Grades
    pub grade_filter: Option<GradeStatus>,
    pub grade_sessions: Vec<GradeSession>,
    pub new_session_trimester: Trimester,
    pub new_session_exam: ExamType,
    pub grade_entry: Option<GradeEntryView>,

    // Attendance
    pub attendance: Option<AttendanceSession>,
    pub attendance_counts: AttendanceCounts,

    // Messages
    pub chat_rooms: Vec<ChatRoom>,
    pub open_room: Option<ChatRoom>,

    // Notifications
    pub notifications: Vec<Notification>,

    // Popups
    pub show_help: bool,
    pub confirm_prompt: Option<String>,
    pub status: Option<String>,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            screen: Screen::Home,
            input_mode: InputMode::Normal,
            selected: 0,
            input_buffer: String::new(),
            teacher_name: String::new(),
            school_name: String::new(),
            active_class: None,
            unread_messages: 0,
            unread_notifications: 0,
            draft_sessions: 0,
            homework_to_correct: 0,
            classes: Vec::new(),
            class_students: Vec::new(),
            homework: Vec::new(),
            resources: Vec::new(),
            grade_filter: None,
            grade_sessions: Vec::new(),
            new_session_trimester: Trimester::First,
            new_session_exam: ExamType::Continuous,
            grade_entry: None,
            attendance: None,
            attendance_counts: AttendanceCounts::default(),
            chat_rooms: Vec::new(),
            open_room: None,
            notifications: Vec::new(),
            show_help: false,
            confirm_prompt: None,
            status: None,
        }
    }
}
