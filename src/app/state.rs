//! App state - pure data structure with no I/O logic

use chrono::Utc;

use crate::constants::CORRECTION_WINDOW_DAYS;
use crate::form::GradeDraft;
use crate::messages::render::GradeEntryView;
use crate::messages::ui_events::{InputMode, Screen};
use crate::messages::RenderState;
use crate::models::{ExamType, GradeSession, GradeStatus, Student, Trimester};
use crate::store::Store;
use crate::views;

/// Action waiting for a yes/no answer
#[derive(Clone, Debug, PartialEq)]
pub enum PendingConfirm {
    DeleteHomework(String),
    SubmitGrades(String),
    ClearGrades(String),
    SubmitAttendance(String),
}

impl PendingConfirm {
    pub fn prompt(&self) -> &str {
        match self {
            PendingConfirm::DeleteHomework(_) => "Supprimer ce devoir ?",
            PendingConfirm::SubmitGrades(_) => {
                "Soumettre les notes ? Elles ne seront plus modifiables."
            }
            PendingConfirm::ClearGrades(_) => "Effacer toutes les notes saisies ?",
            PendingConfirm::SubmitAttendance(_) => "Valider l'appel ? Il ne pourra plus être modifié.",
        }
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Entity store (single owner)
    pub store: Store,

    // Navigation
    pub screen: Screen,
    pub input_mode: InputMode,
    pub selected: usize,
    pub input_buffer: String,

    // Grades
    pub grade_filter: Option<GradeStatus>,
    pub new_session_trimester: Trimester,
    pub new_session_exam: ExamType,
    pub grade_entry: Option<GradeDraft>,

    // Attendance
    pub attendance_session: Option<String>,

    // Messages
    pub open_room: Option<String>,

    // Popups
    pub show_help: bool,
    pub pending_confirm: Option<PendingConfirm>,
    pub status: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Store::default())
    }
}

impl AppState {
    pub fn new(store: Store) -> Self {
        AppState {
            store,
            screen: Screen::Home,
            input_mode: InputMode::Normal,
            selected: 0,
            input_buffer: String::new(),
            grade_filter: None,
            new_session_trimester: Trimester::First,
            new_session_exam: ExamType::Continuous,
            grade_entry: None,
            attendance_session: None,
            open_room: None,
            show_help: false,
            pending_confirm: None,
            status: None,
        }
    }

    /// Whether a detail view (grade sheet or chat room) is open on the current screen
    pub fn detail_open(&self) -> bool {
        match self.screen {
            Screen::Grades => self.grade_entry.is_some(),
            Screen::Messages => self.open_room.is_some(),
            _ => false,
        }
    }

    /// Number of rows the selection moves over
    pub fn list_len(&self) -> usize {
        match self.screen {
            Screen::Home => 0,
            Screen::Classes => self.active_students().len(),
            Screen::Homework => self.store.homework().len(),
            Screen::Grades => match self.open_grade_session() {
                Some(session) => session.grades.len(),
                None => self.filtered_session_ids().len(),
            },
            Screen::Attendance => self
                .attendance_session
                .as_deref()
                .and_then(|id| self.store.attendance_sessions().get(id))
                .map_or(0, |s| s.records.len()),
            Screen::Messages => match self.open_room {
                Some(_) => 0,
                None => self.store.chat_rooms().len(),
            },
            Screen::Notifications => self.store.notifications().len(),
        }
    }

    pub fn active_students(&self) -> Vec<&Student> {
        match self.store.active_class_id() {
            Some(class_id) => views::students_in_class(&self.store, class_id),
            None => Vec::new(),
        }
    }

    pub fn filtered_session_ids(&self) -> Vec<String> {
        views::sessions_by_status(&self.store, self.grade_filter)
            .into_iter()
            .map(|s| s.id.clone())
            .collect()
    }

    pub fn open_grade_session(&self) -> Option<&GradeSession> {
        let draft = self.grade_entry.as_ref()?;
        self.store.grade_sessions().get(&draft.session_id)
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let store = &self.store;
        let teacher = store.teacher();
        let active_class = store
            .active_class_id()
            .and_then(|id| store.classes().get(id))
            .cloned();

        let grade_entry = self.grade_entry.as_ref().and_then(|draft| {
            let session = store.grade_sessions().get(&draft.session_id)?;
            let values = draft.effective_values(session);
            Some(GradeEntryView {
                texts: session
                    .grades
                    .iter()
                    .map(|g| draft.text(&g.student_id).to_string())
                    .collect(),
                stats: views::grade_stats(&values),
                editable: session.status.is_editable(),
                session: session.clone(),
            })
        });

        let attendance = self
            .attendance_session
            .as_deref()
            .and_then(|id| store.attendance_sessions().get(id))
            .cloned();

        RenderState {
            screen: self.screen,
            input_mode: self.input_mode,
            selected: self.selected,
            input_buffer: self.input_buffer.clone(),
            teacher_name: teacher.full_name(),
            school_name: teacher.school_name.clone(),
            active_class,
            unread_messages: store.unread_message_count(),
            unread_notifications: store.unread_notification_count(),
            draft_sessions: views::draft_session_count(store),
            homework_to_correct: views::homework_to_correct(store, Utc::now(), CORRECTION_WINDOW_DAYS)
                .len(),
            classes: store.classes().iter().cloned().collect(),
            class_students: self.active_students().into_iter().cloned().collect(),
            homework: store.homework().iter().cloned().collect(),
            resources: store.resources().iter().cloned().collect(),
            grade_filter: self.grade_filter,
            grade_sessions: views::sessions_by_status(store, self.grade_filter)
                .into_iter()
                .cloned()
                .collect(),
            new_session_trimester: self.new_session_trimester,
            new_session_exam: self.new_session_exam,
            grade_entry,
            attendance_counts: attendance
                .as_ref()
                .map(views::attendance_counts)
                .unwrap_or_default(),
            attendance,
            chat_rooms: store.chat_rooms().iter().cloned().collect(),
            open_room: self
                .open_room
                .as_deref()
                .and_then(|id| store.chat_rooms().get(id))
                .cloned(),
            notifications: store.notifications().iter().cloned().collect(),
            show_help: self.show_help,
            confirm_prompt: self.pending_confirm.as_ref().map(|c| c.prompt().to_string()),
            status: self.status.clone(),
        }
    }
}
