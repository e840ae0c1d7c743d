//! EduConnect Teacher - terminal console for the teacher side of a school app
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - actor owning the in-memory store, processing events

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{Datelike, Local, Utc};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use educonnect::app::AppActor;
use educonnect::constants::{APP_NAME, APP_VERSION, LOG_FILE};
use educonnect::messages::ui_events::{key_to_ui_event, InputMode, Screen};
use educonnect::messages::{RenderState, UiEvent};
use educonnect::models::{SchoolDay, SenderRole};
use educonnect::seed::Seed;
use educonnect::store::Store;
use educonnect::ui::{
    self, attendance_color, grade_color, grade_status_color, student_status_color,
};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Seed before touching the terminal so a bad file reports cleanly
    let seed_path = std::env::args().nth(1).map(PathBuf::from);
    let seed = Seed::resolve(seed_path.as_deref())?;
    let store = Store::new(seed);
    tracing::info!(
        version = APP_VERSION,
        classes = store.classes().len(),
        students = store.students().len(),
        "store ready"
    );

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn app actor
    let app_actor = AppActor::new(store, render_tx);
    tokio::spawn(app_actor.run(ui_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let detail_open = match current_state.screen {
                    Screen::Grades => current_state.grade_entry.is_some(),
                    Screen::Messages => current_state.open_room.is_some(),
                    _ => false,
                };
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.screen,
                    current_state.input_mode,
                    current_state.show_help,
                    current_state.confirm_prompt.is_some(),
                    detail_open,
                ) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, state, main_chunks[0]);
    draw_tab_bar(f, state, main_chunks[1]);

    match state.screen {
        Screen::Home => draw_home(f, state, main_chunks[2]),
        Screen::Classes => draw_classes(f, state, main_chunks[2]),
        Screen::Homework => draw_homework(f, state, main_chunks[2]),
        Screen::Grades => draw_grades(f, state, main_chunks[2]),
        Screen::Attendance => draw_attendance(f, state, main_chunks[2]),
        Screen::Messages => draw_messages(f, state, main_chunks[2]),
        Screen::Notifications => draw_notifications(f, state, main_chunks[2]),
    }

    draw_status_bar(f, state, main_chunks[3]);

    // Popups
    if state.show_help {
        draw_help_popup(f, area);
    }

    if let Some(prompt) = &state.confirm_prompt {
        draw_confirm_popup(f, prompt, area);
    }
}

fn draw_header(f: &mut Frame, state: &RenderState, area: Rect) {
    let class = state
        .active_class
        .as_ref()
        .map(|c| format!("{} · {}", c.name, c.subject))
        .unwrap_or_else(|| "aucune classe".to_string());

    let line = Line::from(vec![
        Span::styled(format!(" {} ", APP_NAME), Style::default().fg(Color::Black).bg(Color::Cyan).bold()),
        Span::raw(format!(" {} · {} ", state.teacher_name, state.school_name)),
        Span::styled(format!("[{}]", class), Style::default().fg(Color::Yellow)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_tab_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let titles: Vec<String> = Screen::ALL
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let badge = match s {
                Screen::Messages if state.unread_messages > 0 => format!(" ({})", state.unread_messages),
                Screen::Notifications if state.unread_notifications > 0 => {
                    format!(" ({})", state.unread_notifications)
                }
                _ => String::new(),
            };
            format!("{}:{}{}", i + 1, s.title(), badge)
        })
        .collect();
    let refs: Vec<&str> = titles.iter().map(String::as_str).collect();

    f.render_widget(ui::render_tabs(&refs, state.screen.index()), area);
}

fn draw_home(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(3)])
        .split(area);

    let today = Local::now().format("%A %d/%m/%Y").to_string();
    let lines = vec![
        Line::from(Span::styled(format!("Bonjour, {}", state.teacher_name), Style::default().bold())),
        Line::from(Span::styled(today, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(format!("  Classes              {}", state.classes.len())),
        Line::from(format!("  Sessions en brouillon {}", state.draft_sessions)),
        Line::from(format!("  Devoirs à corriger    {}", state.homework_to_correct)),
        Line::from(format!(
            "  Non lus              {} messages, {} notifications",
            state.unread_messages, state.unread_notifications
        )),
    ];
    let summary = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Tableau de bord "));
    f.render_widget(summary, chunks[0]);

    // Today's schedule
    let weekday = Utc::now().weekday();
    let items: Vec<ListItem> = state
        .classes
        .iter()
        .flat_map(|c| c.schedule.iter())
        .filter(|slot| SchoolDay::from_weekday(weekday) == Some(slot.day))
        .map(|slot| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<15}", slot.label()), Style::default().fg(Color::Cyan)),
                Span::raw(format!(" {}  {}  salle {}", slot.class_name, slot.subject, slot.room)),
            ]))
        })
        .collect();
    let empty = items.is_empty();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Emploi du temps du jour "));
    f.render_widget(list, chunks[1]);
    if empty {
        let inner = chunks[1].inner(Margin::new(1, 1));
        f.render_widget(
            Paragraph::new("Pas de cours aujourd'hui").style(Style::default().fg(Color::DarkGray)),
            inner,
        );
    }
}

fn draw_classes(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let active_id = state.active_class.as_ref().map(|c| c.id.as_str());
    let classes: Vec<ListItem> = state
        .classes
        .iter()
        .map(|c| {
            let style = if Some(c.id.as_str()) == active_id {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default()
            };
            ListItem::new(vec![
                Line::from(Span::styled(format!("{} ({})", c.name, c.level.as_str()), style)),
                Line::from(Span::styled(
                    format!("  {} élèves · salle {} · moy. {:.1}", c.student_count, c.room, c.average_grade),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();
    let list = List::new(classes).block(Block::default().borders(Borders::ALL).title(" Classes (c: changer) "));
    f.render_widget(list, chunks[0]);

    let students: Vec<ListItem> = state
        .class_students
        .iter()
        .map(|s| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<24}", s.full_name())),
                Span::styled(format!("{:>5.1}", s.average), Style::default().fg(grade_color(s.average, 20))),
                Span::raw(format!("  {:>3.0}%  ", s.attendance_rate)),
                Span::styled(s.status.as_str().to_string(), Style::default().fg(student_status_color(s.status))),
            ]))
        })
        .collect();
    let title = format!(" Élèves ({}) · m: parent · M: élève ", state.class_students.len());
    let list = ui::render_list(students, title, true);
    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    f.render_stateful_widget(list, chunks[1], &mut list_state);
}

fn draw_homework(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let now = Utc::now();
    let items: Vec<ListItem> = state
        .homework
        .iter()
        .map(|hw| {
            let (tag, color) = if hw.is_corrected {
                ("corrigé", Color::Green)
            } else if hw.due_date < now {
                ("en retard", Color::Red)
            } else {
                ("à rendre", Color::Yellow)
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("[{}] ", tag), Style::default().fg(color)),
                    Span::styled(hw.title.clone(), Style::default().bold()),
                    Span::raw(format!("  {}", hw.class_name)),
                ]),
                Line::from(Span::styled(
                    format!(
                        "  pour le {} · {} vue(s) · {} pièce(s) jointe(s)",
                        hw.due_date.with_timezone(&Local).format("%d/%m %H:%M"),
                        hw.view_count,
                        hw.attachments.len()
                    ),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();
    let list = ui::render_list(items, " Devoirs (Enter: ouvrir · k: corrigé · d: supprimer) ".to_string(), true);
    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    f.render_stateful_widget(list, chunks[0], &mut list_state);

    let resources: Vec<ListItem> = state
        .resources
        .iter()
        .map(|r| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<6}", r.file_type.as_str()), Style::default().fg(Color::Cyan)),
                Span::raw(format!(" {}  {}", r.title, r.class_name)),
                Span::styled(
                    format!(
                        "  {}{} téléch.",
                        r.chapter.as_deref().map(|c| format!("{} · ", c)).unwrap_or_default(),
                        r.download_count
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();
    let list = List::new(resources).block(Block::default().borders(Borders::ALL).title(" Ressources "));
    f.render_widget(list, chunks[1]);
}

fn draw_grades(f: &mut Frame, state: &RenderState, area: Rect) {
    if state.grade_entry.is_some() {
        draw_grade_entry(f, state, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let filter = state.grade_filter.as_ref().map(|s| s.as_str()).unwrap_or("Toutes");
    let header = Paragraph::new(Line::from(vec![
        Span::raw(" Filtre (f): "),
        Span::styled(filter, Style::default().fg(Color::Yellow)),
        Span::raw("   Nouvelle session (n): "),
        Span::styled(
            format!("T{} (t) · {} (x)", state.new_session_trimester.number(), state.new_session_exam.label()),
            Style::default().fg(Color::Cyan),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = state
        .grade_sessions
        .iter()
        .map(|s| {
            let stats = educonnect::views::session_stats(s);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<10}", s.status.as_str()),
                    Style::default().fg(grade_status_color(s.status)),
                ),
                Span::raw(format!(
                    " {}  T{}  {:<16} {}/{} saisies",
                    s.class_name,
                    s.trimester.number(),
                    s.exam_type.label(),
                    stats.filled,
                    stats.total
                )),
                Span::styled(
                    if stats.filled > 0 { format!("  moy. {:.2}", stats.average) } else { String::new() },
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();
    let list = ui::render_list(
        items,
        " Sessions de notes (Enter: saisir · p: publier · b: renvoyer) ".to_string(),
        true,
    );
    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    f.render_stateful_widget(list, chunks[1], &mut list_state);
}

fn draw_grade_entry(f: &mut Frame, state: &RenderState, area: Rect) {
    let Some(entry) = &state.grade_entry else {
        return;
    };
    let session = &entry.session;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let stats = entry.stats;
    let mut info = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} · T{} · {} ", session.class_name, session.trimester.number(), session.exam_type.label()),
                Style::default().bold(),
            ),
            Span::styled(session.status.as_str(), Style::default().fg(grade_status_color(session.status))),
        ]),
        Line::from(format!(
            " Moyenne {:.2} · Max {} · Min {} · {}/{} saisies",
            stats.average, stats.highest, stats.lowest, stats.filled, stats.total
        )),
    ];
    if let Some(comment) = &session.admin_comment {
        info.push(Line::from(Span::styled(
            format!(" Administration: {}", comment),
            Style::default().fg(Color::Magenta),
        )));
    }
    f.render_widget(Paragraph::new(info).block(Block::default().borders(Borders::ALL)), chunks[0]);

    let items: Vec<ListItem> = session
        .grades
        .iter()
        .zip(entry.texts.iter())
        .map(|(g, text)| {
            let max = u8::from(g.max_value);
            let shown = if text.is_empty() { "—".to_string() } else { format!("{}/{}", text, max) };
            let value: f64 = text.parse().unwrap_or(0.0);
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<26}", g.student_name)),
                Span::styled(shown, Style::default().fg(grade_color(value, max))),
            ]))
        })
        .collect();
    let title = if entry.editable {
        " Notes (e: saisir · z: vides à 0 · r: effacer · s: soumettre · Esc: retour) "
    } else {
        " Notes (lecture seule · Esc: retour) "
    };
    let list = ui::render_list(items, title.to_string(), state.input_mode == InputMode::Normal);
    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    f.render_stateful_widget(list, chunks[1], &mut list_state);

    draw_input_line(f, state, " Note ", chunks[2]);
}

fn draw_attendance(f: &mut Frame, state: &RenderState, area: Rect) {
    let Some(session) = &state.attendance else {
        let msg = Paragraph::new("Aucune classe active. Appuyez sur 'c' pour en choisir une.")
            .block(Block::default().borders(Borders::ALL).title(" Appel "));
        f.render_widget(msg, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let counts = state.attendance_counts;
    let locked = if session.is_submitted { "  [soumis]" } else { "" };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} · {} · {}{} ", session.class_name, session.date.with_timezone(&Local).format("%d/%m/%Y"), session.slot, locked),
            Style::default().bold(),
        ),
        Span::styled(format!("{} présents ", counts.present), Style::default().fg(Color::Green)),
        Span::styled(format!("{} absents ", counts.absent), Style::default().fg(Color::Red)),
        Span::styled(format!("{} retards", counts.late), Style::default().fg(Color::Yellow)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = session
        .records
        .iter()
        .map(|r| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<26}", r.student_name)),
                Span::styled(format!("{:<8}", r.status.as_str()), Style::default().fg(attendance_color(r.status))),
                Span::styled(r.note.clone().unwrap_or_default(), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();
    let title = if session.is_submitted {
        " Élèves (appel verrouillé) "
    } else {
        " Élèves (Enter: statut · a: tous présents · e: note · s: valider) "
    };
    let list = ui::render_list(items, title.to_string(), state.input_mode == InputMode::Normal);
    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    f.render_stateful_widget(list, chunks[1], &mut list_state);

    draw_input_line(f, state, " Remarque ", chunks[2]);
}

fn draw_messages(f: &mut Frame, state: &RenderState, area: Rect) {
    if let Some(room) = &state.open_room {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(area);

        let lines: Vec<Line> = room
            .messages
            .iter()
            .map(|m| {
                let (who, color) = match m.sender_role {
                    SenderRole::Teacher => ("Moi", Color::Cyan),
                    _ => (m.sender_name.as_str(), Color::Green),
                };
                Line::from(vec![
                    Span::styled(
                        format!("{} ", m.sent_at.with_timezone(&Local).format("%H:%M")),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(format!("{}: ", who), Style::default().fg(color).bold()),
                    Span::raw(m.content.clone()),
                ])
            })
            .collect();
        let title = format!(
            " {} ({}) · {} · {} ",
            room.participant_name,
            room.related_student_name,
            room.class_name,
            if room.is_online { "en ligne" } else { "hors ligne" }
        );
        let scroll = (lines.len() as u16).saturating_sub(chunks[0].height.saturating_sub(2));
        let log = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        f.render_widget(log, chunks[0]);

        draw_input_line(f, state, " Message (e: écrire · Enter: envoyer · Esc: retour) ", chunks[1]);
        return;
    }

    let items: Vec<ListItem> = state
        .chat_rooms
        .iter()
        .map(|r| {
            let unread = if r.unread_count > 0 {
                Span::styled(format!(" ({})", r.unread_count), Style::default().fg(Color::Red).bold())
            } else {
                Span::raw("")
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(r.participant_name.clone(), Style::default().bold()),
                    Span::raw(format!("  {} · {}", r.related_student_name, r.class_name)),
                    unread,
                ]),
                Line::from(Span::styled(
                    format!("  {}  {}", r.last_time, r.last_message),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();
    let list = ui::render_list(items, " Conversations (Enter: ouvrir) ".to_string(), true);
    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_notifications(f: &mut Frame, state: &RenderState, area: Rect) {
    let items: Vec<ListItem> = state
        .notifications
        .iter()
        .map(|n| {
            let style = if n.is_read { Style::default().fg(Color::DarkGray) } else { Style::default().bold() };
            ListItem::new(vec![
                Line::from(vec![
                    Span::raw(format!("{} ", n.kind.icon())),
                    Span::styled(n.title.clone(), style),
                    Span::styled(
                        format!("  {}", n.created_at.with_timezone(&Local).format("%d/%m %H:%M")),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(Span::styled(format!("   {}", n.body), Style::default().fg(Color::Gray))),
            ])
        })
        .collect();
    let title = format!(
        " Notifications · {} non lue(s) (Enter: lue · a: tout marquer) ",
        state.unread_notifications
    );
    let list = ui::render_list(items, title, true);
    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_input_line(f: &mut Frame, state: &RenderState, title: &str, area: Rect) {
    let editing = state.input_mode == InputMode::Editing;
    let input = ui::render_input(&state.input_buffer, title, editing);
    f.render_widget(input, area);

    if editing {
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + state.input_buffer.chars().count() as u16 + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let (text, color) = match &state.status {
        Some(msg) => (format!(" {} ", msg), Color::Yellow),
        None if state.input_mode == InputMode::Editing => {
            (" Enter:valider | Esc:annuler ".to_string(), Color::DarkGray)
        }
        None => (
            " 1-7/Tab:écran | ↑↓:sélection | c:classe | ?:aide | q:quitter ".to_string(),
            Color::DarkGray,
        ),
    };

    let bar = Paragraph::new(text).style(Style::default().fg(color));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 80, area);

    let help_text = r#"
 EDUCONNECT - Raccourcis clavier

 NAVIGATION
   1-7 / Tab          Changer d'écran
   ↑ / ↓              Sélection
   Enter              Ouvrir / valider
   Esc                Retour
   c                  Classe active suivante

 CLASSES
   m / M              Écrire au parent / à l'élève

 DEVOIRS
   k                  Marquer comme corrigé
   d                  Supprimer

 NOTES
   n                  Nouvelle session (t: trimestre, x: type)
   f                  Filtrer par statut
   e                  Saisir une note
   z / r              Vides à 0 / tout effacer
   s                  Soumettre
   p / b              Publier / renvoyer (aperçu admin)

 APPEL
   Enter / Espace     Présent → Absent → Retard
   a                  Tous présents
   e                  Remarque
   s                  Valider l'appel

 GÉNÉRAL
   ?                  Aide
   q / Ctrl+C         Quitter

 Appuyez sur une touche pour fermer...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Aide ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn draw_confirm_popup(f: &mut Frame, prompt: &str, area: Rect) {
    let popup_area = centered_rect(50, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Confirmation (o/y: oui · n/Esc: non) ")
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new(format!("\n{}", prompt))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(text, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
