use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The signed-in teacher
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub school_name: String,
}

impl TeacherProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ========================
// Classes
// ========================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Primaire,
    #[serde(rename = "Collège")]
    College,
    #[serde(rename = "Lycée")]
    Lycee,
}

impl Level {
    pub fn as_str(&self) -> &str {
        match self {
            Level::Primaire => "Primaire",
            Level::College => "Collège",
            Level::Lycee => "Lycée",
        }
    }
}

/// School days; the week runs Sunday to Thursday
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchoolDay {
    #[serde(rename = "Dimanche")]
    Sunday,
    #[serde(rename = "Lundi")]
    Monday,
    #[serde(rename = "Mardi")]
    Tuesday,
    #[serde(rename = "Mercredi")]
    Wednesday,
    #[serde(rename = "Jeudi")]
    Thursday,
}

impl SchoolDay {
    pub fn as_str(&self) -> &str {
        match self {
            SchoolDay::Sunday => "Dimanche",
            SchoolDay::Monday => "Lundi",
            SchoolDay::Tuesday => "Mardi",
            SchoolDay::Wednesday => "Mercredi",
            SchoolDay::Thursday => "Jeudi",
        }
    }

    /// Maps a calendar weekday; Friday and Saturday have no classes
    pub fn from_weekday(day: chrono::Weekday) -> Option<SchoolDay> {
        use chrono::Weekday;
        match day {
            Weekday::Sun => Some(SchoolDay::Sunday),
            Weekday::Mon => Some(SchoolDay::Monday),
            Weekday::Tue => Some(SchoolDay::Tuesday),
            Weekday::Wed => Some(SchoolDay::Wednesday),
            Weekday::Thu => Some(SchoolDay::Thursday),
            Weekday::Fri | Weekday::Sat => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    pub id: String,
    pub day: SchoolDay,
    pub start_time: String,
    pub end_time: String,
    pub class_id: String,
    pub class_name: String,
    pub subject: String,
    pub room: String,
}

impl ScheduleSlot {
    pub fn label(&self) -> String {
        format!("{} – {}", self.start_time, self.end_time)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRoom {
    pub id: String,
    pub name: String,
    pub level: Level,
    pub subject: String,
    pub student_count: u32,
    pub room: String,
    pub schedule: Vec<ScheduleSlot>,
    pub average_grade: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ClassPatch {
    pub name: Option<String>,
    pub level: Option<Level>,
    pub subject: Option<String>,
    pub student_count: Option<u32>,
    pub room: Option<String>,
    pub schedule: Option<Vec<ScheduleSlot>>,
    pub average_grade: Option<f64>,
}

// ========================
// Students
// ========================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    #[default]
    Active,
    Watch,
    Suspended,
}

impl StudentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            StudentStatus::Active => "active",
            StudentStatus::Watch => "watch",
            StudentStatus::Suspended => "suspended",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Soft reference, never checked against the class collection
    pub class_id: String,
    pub class_name: String,
    pub average: f64,
    pub attendance_rate: f64,
    pub parent_name: String,
    pub parent_phone: String,
    pub status: StudentStatus,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Debug, Default)]
pub struct StudentPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub class_id: Option<String>,
    pub class_name: Option<String>,
    pub average: Option<f64>,
    pub attendance_rate: Option<f64>,
    pub parent_name: Option<String>,
    pub parent_phone: Option<String>,
    pub status: Option<StudentStatus>,
}

// ========================
// Homework & resources
// ========================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentType {
    Pdf,
    Image,
    Docx,
    Pptx,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    pub name: String,
    pub file_type: AttachmentType,
    pub file_size: String,
    pub file_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeworkPost {
    pub id: String,
    pub class_id: String,
    pub class_name: String,
    pub subject: String,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub view_count: u32,
    pub is_corrected: bool,
}

#[derive(Clone, Debug, Default)]
pub struct HomeworkPatch {
    pub class_id: Option<String>,
    pub class_name: Option<String>,
    pub subject: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub attachments: Option<Vec<Attachment>>,
    pub view_count: Option<u32>,
    pub is_corrected: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Pdf,
    Pptx,
    Docx,
    Image,
    Video,
    Link,
}

impl ResourceType {
    pub fn as_str(&self) -> &str {
        match self {
            ResourceType::Pdf => "PDF",
            ResourceType::Pptx => "PPTX",
            ResourceType::Docx => "DOCX",
            ResourceType::Image => "IMG",
            ResourceType::Video => "VIDEO",
            ResourceType::Link => "LIEN",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub class_id: String,
    pub class_name: String,
    pub subject: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub file_type: ResourceType,
    pub file_url: String,
    #[serde(default)]
    pub file_size: Option<String>,
    #[serde(default)]
    pub chapter: Option<String>,
    pub uploaded_at: DateTime<Utc>,
    pub download_count: u32,
}

#[derive(Clone, Debug, Default)]
pub struct ResourcePatch {
    pub class_id: Option<String>,
    pub class_name: Option<String>,
    pub subject: Option<String>,
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub file_type: Option<ResourceType>,
    pub file_url: Option<String>,
    pub file_size: Option<Option<String>>,
    pub chapter: Option<Option<String>>,
    pub uploaded_at: Option<DateTime<Utc>>,
    pub download_count: Option<u32>,
}

// ========================
// Grades
// ========================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExamType {
    Continuous,
    #[serde(rename = "TEST_1")]
    Test1,
    #[serde(rename = "TEST_2")]
    Test2,
    Final,
}

impl ExamType {
    pub fn label(&self) -> &str {
        match self {
            ExamType::Continuous => "Contrôle continu",
            ExamType::Test1 => "Composition 1",
            ExamType::Test2 => "Composition 2",
            ExamType::Final => "Examen final",
        }
    }

    pub fn next(&self) -> ExamType {
        match self {
            ExamType::Continuous => ExamType::Test1,
            ExamType::Test1 => ExamType::Test2,
            ExamType::Test2 => ExamType::Final,
            ExamType::Final => ExamType::Continuous,
        }
    }
}

/// Workflow: draft -> submitted -> published, or submitted -> returned -> submitted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeStatus {
    #[default]
    Draft,
    Submitted,
    Published,
    Returned,
}

impl GradeStatus {
    pub fn as_str(&self) -> &str {
        match self {
            GradeStatus::Draft => "Brouillon",
            GradeStatus::Submitted => "Soumis",
            GradeStatus::Published => "Publié",
            GradeStatus::Returned => "Renvoyé",
        }
    }

    /// Whether the teacher may still type grades
    pub fn is_editable(&self) -> bool {
        matches!(self, GradeStatus::Draft | GradeStatus::Returned)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Trimester {
    First,
    Second,
    Third,
}

impl Trimester {
    pub fn number(&self) -> u8 {
        match self {
            Trimester::First => 1,
            Trimester::Second => 2,
            Trimester::Third => 3,
        }
    }

    pub fn next(&self) -> Trimester {
        match self {
            Trimester::First => Trimester::Second,
            Trimester::Second => Trimester::Third,
            Trimester::Third => Trimester::First,
        }
    }
}

impl TryFrom<u8> for Trimester {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Trimester::First),
            2 => Ok(Trimester::Second),
            3 => Ok(Trimester::Third),
            other => Err(AppError::InvalidInput(format!("trimestre {}", other))),
        }
    }
}

impl From<Trimester> for u8 {
    fn from(t: Trimester) -> u8 {
        t.number()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GradeScale {
    Ten,
    Twenty,
}

impl GradeScale {
    pub fn max(&self) -> u8 {
        match self {
            GradeScale::Ten => 10,
            GradeScale::Twenty => 20,
        }
    }
}

impl TryFrom<u8> for GradeScale {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(GradeScale::Ten),
            20 => Ok(GradeScale::Twenty),
            other => Err(AppError::InvalidInput(format!("barème /{}", other))),
        }
    }
}

impl From<GradeScale> for u8 {
    fn from(s: GradeScale) -> u8 {
        s.max()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub value: f64,
    pub max_value: GradeScale,
    pub status: GradeStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeSession {
    pub id: String,
    pub class_id: String,
    pub class_name: String,
    pub subject: String,
    pub trimester: Trimester,
    pub exam_type: ExamType,
    pub status: GradeStatus,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    pub grades: Vec<Grade>,
    #[serde(default)]
    pub admin_comment: Option<String>,
}

impl GradeSession {
    /// New draft session with one zero grade per student
    pub fn draft_for(
        class: &ClassRoom,
        students: &[&Student],
        trimester: Trimester,
        exam_type: ExamType,
        scale: GradeScale,
    ) -> Self {
        let grades = students
            .iter()
            .enumerate()
            .map(|(i, st)| Grade {
                id: format!("g_{}_{}", class.id, i),
                student_id: st.id.clone(),
                student_name: st.full_name(),
                value: 0.0,
                max_value: scale,
                status: GradeStatus::Draft,
            })
            .collect();

        GradeSession {
            id: String::new(),
            class_id: class.id.clone(),
            class_name: class.name.clone(),
            subject: class.subject.clone(),
            trimester,
            exam_type,
            status: GradeStatus::Draft,
            submitted_at: None,
            grades,
            admin_comment: None,
        }
    }

    pub fn grade_for(&self, student_id: &str) -> Option<&Grade> {
        self.grades.iter().find(|g| g.student_id == student_id)
    }
}

// ========================
// Attendance
// ========================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AttendanceStatus::Present => "Présent",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Retard",
        }
    }

    pub fn next(&self) -> AttendanceStatus {
        match self {
            AttendanceStatus::Present => AttendanceStatus::Absent,
            AttendanceStatus::Absent => AttendanceStatus::Late,
            AttendanceStatus::Late => AttendanceStatus::Present,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub student_id: String,
    pub student_name: String,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSession {
    pub id: String,
    pub class_id: String,
    pub class_name: String,
    pub subject: String,
    pub date: DateTime<Utc>,
    pub slot: String,
    pub records: Vec<AttendanceRecord>,
    pub is_submitted: bool,
}

impl AttendanceSession {
    /// Fresh roll-call with every student present
    pub fn roll_call(
        id: impl Into<String>,
        class: &ClassRoom,
        students: &[&Student],
        date: DateTime<Utc>,
        slot: impl Into<String>,
    ) -> Self {
        AttendanceSession {
            id: id.into(),
            class_id: class.id.clone(),
            class_name: class.name.clone(),
            subject: class.subject.clone(),
            date,
            slot: slot.into(),
            records: students
                .iter()
                .map(|s| AttendanceRecord {
                    student_id: s.id.clone(),
                    student_name: s.full_name(),
                    status: AttendanceStatus::Present,
                    note: None,
                })
                .collect(),
            is_submitted: false,
        }
    }
}

// ========================
// Messaging
// ========================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Text,
    Image,
    File,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChatRoomType {
    TeacherParent,
    TeacherStudent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderRole {
    Teacher,
    Parent,
    Student,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub room_id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub sender_role: SenderRole,
    pub content: String,
    pub message_type: MessageType,
    #[serde(default)]
    pub attachment: Option<Attachment>,
    pub sent_at: DateTime<Utc>,
    pub is_read: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRoom {
    pub id: String,
    #[serde(rename = "type")]
    pub room_type: ChatRoomType,
    pub related_student_id: String,
    pub related_student_name: String,
    pub class_name: String,
    pub participant_name: String,
    pub participant_role: SenderRole,
    pub last_message: String,
    pub last_time: String,
    /// Maintained by hand, not derived from `messages`
    pub unread_count: u32,
    pub is_online: bool,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl ChatRoom {
    /// Sender id of the room's participant: the id on their latest message,
    /// else the student id for student rooms and `P_<student>` for parents
    pub fn participant_id(&self) -> String {
        self.messages
            .iter()
            .rev()
            .find(|m| m.sender_role == self.participant_role)
            .map(|m| m.sender_id.clone())
            .unwrap_or_else(|| match self.participant_role {
                SenderRole::Parent => format!("P_{}", self.related_student_id),
                _ => self.related_student_id.clone(),
            })
    }
}

// ========================
// Notifications
// ========================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    GradeReturned,
    NewMessage,
    AbsenceJustified,
    Announcement,
    Reminder,
}

impl NotificationType {
    pub fn icon(&self) -> &str {
        match self {
            NotificationType::GradeReturned => "↩",
            NotificationType::NewMessage => "✉",
            NotificationType::AbsenceJustified => "✓",
            NotificationType::Announcement => "📣",
            NotificationType::Reminder => "⏰",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub body: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub related_id: Option<String>,
}
