//! Seed data for the store
//!
//! The store always starts from fixtures. A YAML or JSON seed file (the
//! first CLI argument, or `~/.educonnect/seed.yaml`) can replace any of the
//! built-in collections; collections the file leaves out keep the built-in
//! data. Nothing is ever written back.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::constants::{DEFAULT_ACTIVE_CLASS, SEED_DIR, SEED_FILE};
use crate::error::{AppError, Result};
use crate::models::*;

/// Everything the store is built from
#[derive(Clone, Debug)]
pub struct Seed {
    pub teacher: TeacherProfile,
    pub classes: Vec<ClassRoom>,
    pub students: Vec<Student>,
    pub homework: Vec<HomeworkPost>,
    pub resources: Vec<Resource>,
    pub grade_sessions: Vec<GradeSession>,
    pub attendance_sessions: Vec<AttendanceSession>,
    pub chat_rooms: Vec<ChatRoom>,
    pub notifications: Vec<Notification>,
    pub active_class_id: Option<String>,
}

/// On-disk shape: every section optional
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SeedFile {
    teacher: Option<TeacherProfile>,
    classes: Option<Vec<ClassRoom>>,
    students: Option<Vec<Student>>,
    homework_posts: Option<Vec<HomeworkPost>>,
    resources: Option<Vec<Resource>>,
    grade_sessions: Option<Vec<GradeSession>>,
    attendance_sessions: Option<Vec<AttendanceSession>>,
    chat_rooms: Option<Vec<ChatRoom>>,
    notifications: Option<Vec<Notification>>,
    active_class_id: Option<String>,
}

impl Seed {
    /// Explicit path wins; otherwise the home seed file if present; otherwise fixtures
    pub fn resolve(explicit: Option<&Path>) -> Result<Seed> {
        if let Some(path) = explicit {
            return Seed::load(path);
        }
        match default_seed_path() {
            Some(path) if path.exists() => Seed::load(&path),
            _ => Ok(Seed::builtin()),
        }
    }

    /// Read a seed file, choosing the decoder by extension
    pub fn load(path: &Path) -> Result<Seed> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::seed(format!("{}: {}", path.display(), e)))?;

        let file: SeedFile = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| AppError::seed(format!("{}: {}", path.display(), e)))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .map_err(|e| AppError::seed(format!("{}: {}", path.display(), e)))?,
            _ => {
                return Err(AppError::seed(format!(
                    "{}: expected a .yaml, .yml or .json file",
                    path.display()
                )))
            }
        };

        tracing::info!(path = %path.display(), "loaded seed file");
        Ok(Seed::builtin().overlay(file))
    }

    fn overlay(mut self, file: SeedFile) -> Seed {
        if let Some(v) = file.teacher {
            self.teacher = v;
        }
        if let Some(v) = file.classes {
            self.classes = v;
        }
        if let Some(v) = file.students {
            self.students = v;
        }
        if let Some(v) = file.homework_posts {
            self.homework = v;
        }
        if let Some(v) = file.resources {
            self.resources = v;
        }
        if let Some(v) = file.grade_sessions {
            self.grade_sessions = v;
        }
        if let Some(v) = file.attendance_sessions {
            self.attendance_sessions = v;
        }
        if let Some(v) = file.chat_rooms {
            self.chat_rooms = v;
        }
        if let Some(v) = file.notifications {
            self.notifications = v;
        }
        if file.active_class_id.is_some() {
            self.active_class_id = file.active_class_id;
        }
        self
    }

    /// Built-in fixtures: one teacher, three classes, 25 students
    pub fn builtin() -> Seed {
        let now = Utc::now();
        let classes = classes();
        let students = students();
        let attendance = attendance_sessions(&classes, &students, now);

        Seed {
            teacher: teacher(),
            homework: homework(now),
            resources: resources(now),
            grade_sessions: grade_sessions(&students, now),
            attendance_sessions: attendance,
            chat_rooms: chat_rooms(now),
            notifications: notifications(now),
            active_class_id: Some(DEFAULT_ACTIVE_CLASS.to_string()),
            classes,
            students,
        }
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self::builtin()
    }
}

/// `~/.educonnect/seed.yaml`
pub fn default_seed_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(SEED_DIR).join(SEED_FILE))
}

// ========================
// Fixtures
// ========================

const SUBJECT: &str = "Mathématiques";

fn teacher() -> TeacherProfile {
    TeacherProfile {
        id: "T001".into(),
        first_name: "Meriem".into(),
        last_name: "Hadj".into(),
        email: "meriem.hadj@lycee-ibnadis.dz".into(),
        phone: "0550 123 456".into(),
        subject: SUBJECT.into(),
        school_name: "École Privée Ibn Badis".into(),
    }
}

fn slot(id: &str, day: SchoolDay, start: &str, end: &str, class_id: &str, class_name: &str, room: &str) -> ScheduleSlot {
    ScheduleSlot {
        id: id.into(),
        day,
        start_time: start.into(),
        end_time: end.into(),
        class_id: class_id.into(),
        class_name: class_name.into(),
        subject: SUBJECT.into(),
        room: room.into(),
    }
}

fn classes() -> Vec<ClassRoom> {
    vec![
        ClassRoom {
            id: "C1".into(),
            name: "4ème A".into(),
            level: Level::College,
            subject: SUBJECT.into(),
            student_count: 28,
            room: "Salle B12".into(),
            average_grade: 13.2,
            schedule: vec![
                slot("S1", SchoolDay::Sunday, "08:00", "09:30", "C1", "4ème A", "B12"),
                slot("S2", SchoolDay::Tuesday, "10:00", "11:30", "C1", "4ème A", "B12"),
                slot("S3", SchoolDay::Thursday, "14:00", "15:30", "C1", "4ème A", "B12"),
            ],
        },
        ClassRoom {
            id: "C2".into(),
            name: "5ème B".into(),
            level: Level::College,
            subject: SUBJECT.into(),
            student_count: 30,
            room: "Salle A08".into(),
            average_grade: 11.8,
            schedule: vec![
                slot("S4", SchoolDay::Monday, "09:30", "11:00", "C2", "5ème B", "A08"),
                slot("S5", SchoolDay::Wednesday, "08:00", "09:30", "C2", "5ème B", "A08"),
            ],
        },
        ClassRoom {
            id: "C3".into(),
            name: "4ème B".into(),
            level: Level::College,
            subject: SUBJECT.into(),
            student_count: 27,
            room: "Salle C05".into(),
            average_grade: 12.5,
            schedule: vec![
                slot("S6", SchoolDay::Monday, "14:00", "15:30", "C3", "4ème B", "C05"),
                slot("S7", SchoolDay::Thursday, "08:00", "09:30", "C3", "4ème B", "C05"),
            ],
        },
    ]
}

fn students() -> Vec<Student> {
    use StudentStatus::*;
    #[rustfmt::skip]
    let rows: [(&str, &str, &str, &str, &str, f64, f64, &str, &str, StudentStatus); 25] = [
        ("ST01", "Ahmed",   "Benali",   "C1", "4ème A", 16.0, 96.0, "Mme. Benali",   "0550 111 222", Active),
        ("ST02", "Sara",    "Hamid",    "C1", "4ème A", 14.5, 91.0, "M. Hamid",      "0661 333 444", Active),
        ("ST03", "Youcef",  "Kaci",     "C1", "4ème A",  9.5, 72.0, "Mme. Kaci",     "0770 555 666", Watch),
        ("ST04", "Imane",   "Zerrouk",  "C1", "4ème A", 17.5, 98.0, "M. Zerrouk",    "0555 777 888", Active),
        ("ST05", "Rayan",   "Bouab",    "C1", "4ème A", 13.0, 89.0, "Mme. Bouab",    "0699 999 000", Active),
        ("ST06", "Lina",    "Meziane",  "C1", "4ème A", 11.5, 85.0, "M. Meziane",    "0556 111 333", Active),
        ("ST07", "Karim",   "Bouras",   "C1", "4ème A",  8.0, 65.0, "Mme. Bouras",   "0770 222 444", Watch),
        ("ST08", "Nour",    "Aissou",   "C1", "4ème A", 15.0, 94.0, "M. Aissou",     "0550 333 555", Active),
        ("ST09", "Amine",   "Larbi",    "C1", "4ème A", 12.5, 90.0, "Mme. Larbi",    "0661 444 666", Active),
        ("ST10", "Sonia",   "Belmadi",  "C1", "4ème A", 14.0, 92.0, "M. Belmadi",    "0699 555 777", Active),
        ("ST11", "Walid",   "Cherif",   "C1", "4ème A", 10.5, 78.0, "Mme. Cherif",   "0550 666 888", Active),
        ("ST12", "Asma",    "Rahmani",  "C1", "4ème A", 16.5, 97.0, "M. Rahmani",    "0770 777 999", Active),
        ("ST13", "Bilal",   "Bouchama", "C1", "4ème A", 13.5, 88.0, "Mme. Bouchama", "0555 888 000", Active),
        ("ST14", "Houda",   "Ziane",    "C1", "4ème A", 15.5, 95.0, "M. Ziane",      "0556 999 111", Active),
        ("ST15", "Tarek",   "Benabbas", "C1", "4ème A",  7.5, 60.0, "Mme. Benabbas", "0661 000 222", Suspended),
        ("ST16", "Ryma",    "Taleb",    "C2", "5ème B", 12.0, 90.0, "M. Taleb",      "0699 111 333", Active),
        ("ST17", "Omar",    "Mansouri", "C2", "5ème B",  9.0, 75.0, "Mme. Mansouri", "0550 222 444", Watch),
        ("ST18", "Fatima",  "Chibane",  "C2", "5ème B", 14.5, 93.0, "M. Chibane",    "0770 333 555", Active),
        ("ST19", "Zakaria", "Mebarki",  "C2", "5ème B", 11.5, 87.0, "Mme. Mebarki",  "0555 444 666", Active),
        ("ST20", "Meriem",  "Bensaid",  "C2", "5ème B", 13.5, 92.0, "M. Bensaid",    "0556 555 777", Active),
        ("ST21", "Ines",    "Belaidi",  "C3", "4ème B", 15.0, 96.0, "Mme. Belaidi",  "0661 666 888", Active),
        ("ST22", "Sofiane", "Amrani",   "C3", "4ème B", 12.0, 83.0, "M. Amrani",     "0699 777 999", Active),
        ("ST23", "Nadia",   "Kettaf",   "C3", "4ème B", 10.0, 79.0, "Mme. Kettaf",   "0550 888 000", Watch),
        ("ST24", "Adel",    "Bouzid",   "C3", "4ème B", 14.0, 91.0, "M. Bouzid",     "0770 999 111", Active),
        ("ST25", "Yasmine", "Guerfi",   "C3", "4ème B", 16.5, 97.0, "Mme. Guerfi",   "0555 000 222", Active),
    ];

    rows.into_iter()
        .map(|(id, first, last, class_id, class_name, average, rate, parent, phone, status)| Student {
            id: id.into(),
            first_name: first.into(),
            last_name: last.into(),
            class_id: class_id.into(),
            class_name: class_name.into(),
            average,
            attendance_rate: rate,
            parent_name: parent.into(),
            parent_phone: phone.into(),
            status,
        })
        .collect()
}

fn pdf(id: &str, name: &str, size: &str) -> Attachment {
    Attachment {
        id: id.into(),
        name: name.into(),
        file_type: AttachmentType::Pdf,
        file_size: size.into(),
        file_url: "#".into(),
    }
}

#[allow(clippy::too_many_arguments)]
fn homework_post(
    id: &str,
    class_id: &str,
    class_name: &str,
    title: &str,
    description: &str,
    due: DateTime<Utc>,
    created: DateTime<Utc>,
    attachments: Vec<Attachment>,
    view_count: u32,
    is_corrected: bool,
) -> HomeworkPost {
    HomeworkPost {
        id: id.into(),
        class_id: class_id.into(),
        class_name: class_name.into(),
        subject: SUBJECT.into(),
        title: title.into(),
        description: description.into(),
        due_date: due,
        created_at: created,
        attachments,
        view_count,
        is_corrected,
    }
}

fn homework(now: DateTime<Utc>) -> Vec<HomeworkPost> {
    let days = Duration::days;
    vec![
        homework_post(
            "HW1", "C1", "4ème A",
            "Exercices sur les équations du second degré",
            "Résoudre les exercices 1 à 15 page 127 du manuel. Montrer toutes les étapes de résolution. Rendre sur feuille double.",
            now + days(2), now - days(1),
            vec![pdf("A1", "exercices_ch3.pdf", "1.2 Mo")],
            22, false,
        ),
        homework_post(
            "HW2", "C2", "5ème B",
            "Révision : Fractions et proportionnalité",
            "Compléter la fiche de révision distribuée en classe. Tous les exercices sont obligatoires.",
            now + days(4), now - days(2),
            Vec::new(),
            18, false,
        ),
        homework_post(
            "HW3", "C1", "4ème A",
            "Problème : Géométrie dans l'espace",
            "Résoudre le problème de géométrie distribué. Utiliser les théorèmes de Pythagore et Thalès.",
            now - days(3), now - days(7),
            vec![pdf("A2", "probleme_geo.pdf", "800 Ko")],
            28, true,
        ),
        homework_post(
            "HW4", "C3", "4ème B",
            "Exercices : Statistiques et représentations graphiques",
            "Exercices 1 à 8 page 95. Tracer les graphiques sur papier millimétré.",
            now + days(6), now,
            Vec::new(),
            5, false,
        ),
    ]
}

fn resources(now: DateTime<Utc>) -> Vec<Resource> {
    let days = Duration::days;
    #[rustfmt::skip]
    let rows = [
        ("R1", "C1", "4ème A", "Cours Chapitre 3 — Équations", Some("Cours complet avec exemples résolus"), ResourceType::Pdf, "#", Some("2.4 Mo"), "Chapitre 3", 5, 24),
        ("R2", "C1", "4ème A", "Présentation : Introduction aux fonctions", None, ResourceType::Pptx, "#", Some("5.1 Mo"), "Chapitre 4", 3, 19),
        ("R3", "C1", "4ème A", "Vidéo : Loi de Pythagore expliquée", None, ResourceType::Video, "https://youtube.com", None, "Chapitre 2", 8, 31),
        ("R4", "C2", "5ème B", "Fiche de révision — Fractions", None, ResourceType::Pdf, "#", Some("1.8 Mo"), "Révisions", 2, 28),
        ("R5", "C3", "4ème B", "Cours Chapitre 5 — Statistiques", None, ResourceType::Pdf, "#", Some("3.2 Mo"), "Chapitre 5", 0, 2),
    ];

    rows.into_iter()
        .map(|(id, class_id, class_name, title, description, file_type, url, size, chapter, age, downloads)| Resource {
            id: id.into(),
            class_id: class_id.into(),
            class_name: class_name.into(),
            subject: SUBJECT.into(),
            title: title.into(),
            description: description.map(Into::into),
            file_type,
            file_url: url.into(),
            file_size: size.map(Into::into),
            chapter: Some(chapter.into()),
            uploaded_at: now - days(age),
            download_count: downloads,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn grade_session(
    id: &str,
    class_id: &str,
    class_name: &str,
    exam_type: ExamType,
    status: GradeStatus,
    submitted_at: Option<DateTime<Utc>>,
    students: &[Student],
    values: &[(&str, &str, f64)],
) -> GradeSession {
    let grades = values
        .iter()
        .map(|(grade_id, student_id, value)| Grade {
            id: (*grade_id).into(),
            student_id: (*student_id).into(),
            student_name: students
                .iter()
                .find(|s| s.id == *student_id)
                .map(Student::full_name)
                .unwrap_or_default(),
            value: *value,
            max_value: GradeScale::Twenty,
            status,
        })
        .collect();

    GradeSession {
        id: id.into(),
        class_id: class_id.into(),
        class_name: class_name.into(),
        subject: SUBJECT.into(),
        trimester: Trimester::First,
        exam_type,
        status,
        submitted_at,
        grades,
        admin_comment: None,
    }
}

fn grade_sessions(students: &[Student], now: DateTime<Utc>) -> Vec<GradeSession> {
    vec![
        grade_session(
            "GS1", "C1", "4ème A", ExamType::Test1, GradeStatus::Published,
            Some(now - Duration::days(10)), students,
            &[
                ("G1", "ST01", 16.0), ("G2", "ST02", 14.0), ("G3", "ST03", 9.0),
                ("G4", "ST04", 18.0), ("G5", "ST05", 13.0), ("G6", "ST06", 11.0),
                ("G7", "ST07", 7.0), ("G8", "ST08", 15.0), ("G9", "ST09", 12.0),
                ("G10", "ST10", 14.0),
            ],
        ),
        grade_session(
            "GS2", "C1", "4ème A", ExamType::Test2, GradeStatus::Submitted,
            Some(now - Duration::days(1)), students,
            &[
                ("G11", "ST01", 17.0), ("G12", "ST02", 15.0), ("G13", "ST03", 10.0),
                ("G14", "ST04", 19.0), ("G15", "ST05", 12.0),
            ],
        ),
        grade_session(
            "GS3", "C2", "5ème B", ExamType::Test1, GradeStatus::Draft,
            None, students,
            &[
                ("G21", "ST16", 12.0), ("G22", "ST17", 9.0), ("G23", "ST18", 15.0),
                ("G24", "ST19", 11.0), ("G25", "ST20", 13.0),
            ],
        ),
    ]
}

fn attendance_sessions(
    classes: &[ClassRoom],
    students: &[Student],
    now: DateTime<Utc>,
) -> Vec<AttendanceSession> {
    let Some(class) = classes.iter().find(|c| c.id == "C1") else {
        return Vec::new();
    };
    let roster: Vec<&Student> = students.iter().filter(|s| s.class_id == class.id).collect();
    vec![AttendanceSession::roll_call("AS1", class, &roster, now, "08:00 – 09:30")]
}

#[allow(clippy::too_many_arguments)]
fn message(
    id: &str,
    room_id: &str,
    sender_id: &str,
    sender_name: &str,
    role: SenderRole,
    content: &str,
    sent_at: DateTime<Utc>,
    is_read: bool,
) -> ChatMessage {
    ChatMessage {
        id: id.into(),
        room_id: room_id.into(),
        sender_id: sender_id.into(),
        sender_name: sender_name.into(),
        sender_role: role,
        content: content.into(),
        message_type: MessageType::Text,
        attachment: None,
        sent_at,
        is_read,
    }
}

fn chat_rooms(now: DateTime<Utc>) -> Vec<ChatRoom> {
    use SenderRole::{Parent, Student as Pupil, Teacher};
    let hours = Duration::hours;
    let minutes = Duration::minutes;
    let me = "Mme. Hadj";

    vec![
        ChatRoom {
            id: "CR1".into(),
            room_type: ChatRoomType::TeacherParent,
            related_student_id: "ST01".into(),
            related_student_name: "Ahmed Benali".into(),
            class_name: "4ème A".into(),
            participant_name: "Mme. Benali".into(),
            participant_role: Parent,
            last_message: "Merci pour votre retour sur Ahmed.".into(),
            last_time: "il y a 2h".into(),
            unread_count: 0,
            is_online: true,
            messages: vec![
                message("M1", "CR1", "P1", "Mme. Benali", Parent, "Bonjour Madame Meriem, je voulais vous parler des résultats d'Ahmed en mathématiques ce trimestre.", now - hours(3), true),
                message("M2", "CR1", "T001", me, Teacher, "Bonjour Madame Benali. Ahmed progresse très bien ! Sa dernière note est 17/20, ce qui est excellent.", now - minutes(150), true),
                message("M3", "CR1", "P1", "Mme. Benali", Parent, "C'est très encourageant ! Y a-t-il des points sur lesquels il devrait travailler davantage ?", now - hours(2), true),
                message("M4", "CR1", "T001", me, Teacher, "Il devrait revoir les exercices sur les fonctions du chapitre 4. Je lui ai uploadé des ressources supplémentaires dans l'application.", now - hours(2) + minutes(5), true),
                message("M5", "CR1", "P1", "Mme. Benali", Parent, "Merci pour votre retour sur Ahmed.", now - hours(2) + minutes(10), true),
            ],
        },
        ChatRoom {
            id: "CR2".into(),
            room_type: ChatRoomType::TeacherParent,
            related_student_id: "ST03".into(),
            related_student_name: "Youcef Kaci".into(),
            class_name: "4ème A".into(),
            participant_name: "M. Kaci".into(),
            participant_role: Parent,
            last_message: "Quand seront publiées les notes ?".into(),
            last_time: "il y a 4h".into(),
            unread_count: 2,
            is_online: false,
            messages: vec![
                message("M6", "CR2", "P2", "M. Kaci", Parent, "Bonjour, mon fils Youcef semble avoir du mal avec les mathématiques. Que puis-je faire pour l'aider ?", now - hours(5), true),
                message("M7", "CR2", "T001", me, Teacher, "Bonjour M. Kaci. En effet, Youcef a quelques difficultés notamment sur les équations. Je vous recommande de lui faire revoir les cours du chapitre 3 que j'ai mis en ligne.", now - minutes(270), true),
                message("M8", "CR2", "P2", "M. Kaci", Parent, "Quand seront publiées les notes ?", now - hours(4), false),
            ],
        },
        ChatRoom {
            id: "CR3".into(),
            room_type: ChatRoomType::TeacherStudent,
            related_student_id: "ST04".into(),
            related_student_name: "Imane Zerrouk".into(),
            class_name: "4ème A".into(),
            participant_name: "Imane Zerrouk".into(),
            participant_role: Pupil,
            last_message: "Merci Madame, j'ai compris !".into(),
            last_time: "Hier".into(),
            unread_count: 0,
            is_online: true,
            messages: vec![
                message("M9", "CR3", "ST04", "Imane Zerrouk", Pupil, "Bonjour Madame, j'ai une question sur l'exercice 5 du devoir. Je ne comprends pas comment factoriser l'expression.", now - hours(24), true),
                message("M10", "CR3", "T001", me, Teacher, "Bonjour Imane ! Pour factoriser, commence par identifier le facteur commun. Dans cet exercice c'est 3x. Tu mets 3x en évidence et tu divises chaque terme.", now - hours(23), true),
                message("M11", "CR3", "ST04", "Imane Zerrouk", Pupil, "Merci Madame, j'ai compris !", now - hours(22), true),
            ],
        },
        ChatRoom {
            id: "CR4".into(),
            room_type: ChatRoomType::TeacherParent,
            related_student_id: "ST07".into(),
            related_student_name: "Karim Bouras".into(),
            class_name: "4ème A".into(),
            participant_name: "Mme. Bouras".into(),
            participant_role: Parent,
            last_message: "Nous allons en discuter avec lui.".into(),
            last_time: "il y a 2j".into(),
            unread_count: 1,
            is_online: false,
            messages: vec![
                message("M12", "CR4", "T001", me, Teacher, "Bonjour Mme. Bouras. Je souhaitais vous informer que Karim a des absences répétées et cela affecte sa progression. Sa moyenne est actuellement de 8/20.", now - hours(48), true),
                message("M13", "CR4", "P4", "Mme. Bouras", Parent, "Nous allons en discuter avec lui.", now - hours(48) + minutes(30), false),
            ],
        },
    ]
}

fn notifications(now: DateTime<Utc>) -> Vec<Notification> {
    use NotificationType::*;
    #[rustfmt::skip]
    let rows = [
        ("N1", GradeReturned,    "Notes renvoyées",           "L'admin a renvoyé les notes de Composition 2 — 4ème A avec un commentaire.", false, Duration::hours(1)),
        ("N2", NewMessage,       "Nouveau message",           "M. Kaci vous a envoyé un message concernant Youcef.", false, Duration::hours(4)),
        ("N3", AbsenceJustified, "Absence justifiée",         "L'absence d'Ahmed Benali du 20/02 a été justifiée par l'administration.", true, Duration::days(1)),
        ("N4", Announcement,     "Réunion pédagogique",       "Réunion du conseil pédagogique jeudi 6 mars à 16h30 — Salle des professeurs.", true, Duration::days(2)),
        ("N5", Reminder,         "Rappel : Notes en attente", "Vous avez des notes en brouillon pour 5ème B — Composition 1. Pensez à les soumettre.", false, Duration::days(3)),
    ];

    rows.into_iter()
        .map(|(id, kind, title, body, is_read, age)| Notification {
            id: id.into(),
            kind,
            title: title.into(),
            body: body.into(),
            is_read,
            created_at: now - age,
            related_id: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, Builder};

    #[test]
    fn test_builtin_fixture_shape() {
        let seed = Seed::builtin();
        assert_eq!(seed.classes.len(), 3);
        assert_eq!(seed.students.len(), 25);
        assert_eq!(seed.students.iter().filter(|s| s.class_id == "C1").count(), 15);
        assert_eq!(seed.attendance_sessions[0].records.len(), 15);
        assert_eq!(seed.grade_sessions[0].grades[0].student_name, "Ahmed Benali");
        assert_eq!(seed.active_class_id.as_deref(), Some("C1"));
    }

    #[test]
    fn test_yaml_overlay_keeps_missing_sections() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            r#"
activeClassId: C9
classes:
  - id: C9
    name: "1ère AS A"
    level: "Lycée"
    subject: Physique
    studentCount: 2
    room: Labo 1
    averageGrade: 12.0
    schedule:
      - id: S90
        day: Lundi
        startTime: "08:00"
        endTime: "10:00"
        classId: C9
        className: "1ère AS A"
        subject: Physique
        room: Labo 1
"#
        )
        .unwrap();

        let seed = Seed::load(file.path()).unwrap();
        assert_eq!(seed.classes.len(), 1);
        assert_eq!(seed.classes[0].level, Level::Lycee);
        assert_eq!(seed.classes[0].schedule[0].day, SchoolDay::Monday);
        assert_eq!(seed.active_class_id.as_deref(), Some("C9"));
        assert_eq!(seed.students.len(), 25);
    }

    #[test]
    fn test_json_seed_is_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seed.json");
        fs::write(
            &path,
            r#"{"notifications": [{"id": "N9", "type": "reminder", "title": "t", "body": "b", "isRead": false, "createdAt": "2026-01-05T08:00:00Z"}]}"#,
        )
        .unwrap();

        let seed = Seed::load(&path).unwrap();
        assert_eq!(seed.notifications.len(), 1);
        assert_eq!(seed.notifications[0].kind, NotificationType::Reminder);
    }

    #[test]
    fn test_bad_seed_files_are_reported() {
        let dir = tempdir().unwrap();

        let txt = dir.path().join("seed.txt");
        fs::write(&txt, "classes: []").unwrap();
        assert!(matches!(Seed::load(&txt), Err(AppError::Seed(_))));

        let broken = dir.path().join("seed.yaml");
        fs::write(&broken, "classes: [ {id: ").unwrap();
        assert!(matches!(Seed::load(&broken), Err(AppError::Seed(_))));

        let missing = dir.path().join("absent.yaml");
        assert!(matches!(Seed::resolve(Some(missing.as_path())), Err(AppError::Seed(_))));
    }
}
