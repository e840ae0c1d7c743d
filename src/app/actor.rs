//! App actor - message loop processing UI events

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::ui_events::{InputMode, Screen};
use crate::messages::{RenderState, UiEvent};
use crate::models::ChatRoomType;
use crate::store::Store;

/// App actor that owns the store and processes UI events
pub struct AppActor {
    state: AppState,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(store: Store, render_tx: mpsc::UnboundedSender<RenderState>) -> Self {
        AppActor {
            state: AppState::new(store),
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(mut self, mut ui_rx: mpsc::UnboundedReceiver<UiEvent>) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        while let Some(event) = ui_rx.recv().await {
            if self.handle_ui_event(event) {
                tracing::info!("quit requested");
                break;
            }
            let _ = self.render_tx.send(self.state.to_render_state());
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Navigation
            UiEvent::SwitchScreen(screen) => self.state.switch_screen(screen),
            UiEvent::NextScreen => self.state.next_screen(),
            UiEvent::PrevScreen => self.state.prev_screen(),
            UiEvent::SelectPrev => self.state.select_prev(),
            UiEvent::SelectNext => self.state.select_next(),
            UiEvent::Open => self.state.open_selected(),
            UiEvent::Back => self.state.back(),
            UiEvent::CycleActiveClass => self.state.cycle_active_class(),

            // Text input
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::Commit => self.state.commit_input(),

            // Homework
            UiEvent::MarkCorrected => self.state.mark_selected_corrected(),
            UiEvent::DeleteSelected => self.state.delete_selected(),

            // Grades
            UiEvent::CycleGradeFilter => self.state.cycle_grade_filter(),
            UiEvent::CycleTrimester => self.state.cycle_trimester(),
            UiEvent::CycleExamType => self.state.cycle_exam_type(),
            UiEvent::NewGradeSession => self.state.new_grade_session(),
            UiEvent::FillEmptyWithZero => self.state.fill_empty_with_zero(),
            UiEvent::ClearAllGrades => self.state.request_clear_grades(),
            UiEvent::Submit => self.state.request_submit(),
            UiEvent::PublishSelected => self.state.publish_selected(),
            UiEvent::ReturnSelected => self.state.return_selected(),

            // Attendance
            UiEvent::CycleAttendanceStatus => self.state.cycle_attendance_status(),
            UiEvent::MarkAllPresent => self.state.mark_all_present(),

            // Messages
            UiEvent::MessageParent => self
                .state
                .message_selected_student(ChatRoomType::TeacherParent),
            UiEvent::MessageStudent => self
                .state
                .message_selected_student(ChatRoomType::TeacherStudent),

            // Notifications
            UiEvent::MarkAllRead => self.state.mark_all_notifications_read(),

            // Confirmation
            UiEvent::Confirm => self.state.confirm(),
            UiEvent::Cancel => self.state.cancel(),

            UiEvent::Dispatch(action) => {
                let name = action.name();
                if let Err(e) = self.state.dispatch(action) {
                    tracing::warn!(action = name, error = %e, "action rejected");
                    self.state.status = Some(e.to_string());
                }
            }

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => {
                if self.state.input_mode == InputMode::Editing {
                    self.state.stop_editing();
                }
                return true;
            }
        }

        // Selection can point past the end after a delete or a filter change
        let len = self.state.list_len();
        if self.state.selected >= len && self.state.screen != Screen::Home {
            self.state.selected = len.saturating_sub(1);
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::StoreAction;

    #[tokio::test]
    async fn test_actor_emits_render_state_per_event() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();
        let actor = AppActor::new(Store::default(), render_tx);
        let handle = tokio::spawn(actor.run(ui_rx));

        let initial = render_rx.recv().await.unwrap();
        assert_eq!(initial.screen, Screen::Home);
        assert_eq!(initial.unread_messages, 3);
        assert_eq!(initial.unread_notifications, 3);

        ui_tx.send(UiEvent::SwitchScreen(Screen::Notifications)).unwrap();
        let rs = render_rx.recv().await.unwrap();
        assert_eq!(rs.screen, Screen::Notifications);

        ui_tx.send(UiEvent::MarkAllRead).unwrap();
        let rs = render_rx.recv().await.unwrap();
        assert_eq!(rs.unread_notifications, 0);
        assert!(rs.notifications.iter().all(|n| n.is_read));

        ui_tx.send(UiEvent::Quit).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_rejected_dispatch_lands_on_status_line() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(AppActor::new(Store::default(), render_tx).run(ui_rx));
        let _ = render_rx.recv().await;

        ui_tx
            .send(UiEvent::Dispatch(StoreAction::UpdateGradeValue {
                session_id: "GS1".to_string(),
                student_id: "ST01".to_string(),
                value: 2.0,
            }))
            .unwrap();
        let rs = render_rx.recv().await.unwrap();
        assert!(rs.status.is_some_and(|s| s.contains("GS1")));

        drop(ui_tx);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_incoming_events_raise_unread_badges() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(AppActor::new(Store::default(), render_tx).run(ui_rx));
        let _ = render_rx.recv().await;

        ui_tx
            .send(UiEvent::Dispatch(StoreAction::ReceiveMessage {
                room_id: "CR3".to_string(),
                content: "Madame, une question".to_string(),
            }))
            .unwrap();
        let rs = render_rx.recv().await.unwrap();
        assert_eq!(rs.unread_messages, 4);
        assert!(rs.status.is_none());

        let notification = Store::default().notifications().get("N1").cloned().unwrap();
        ui_tx
            .send(UiEvent::Dispatch(StoreAction::PushNotification(
                crate::models::Notification {
                    id: "N7".to_string(),
                    is_read: false,
                    ..notification
                },
            )))
            .unwrap();
        let rs = render_rx.recv().await.unwrap();
        assert_eq!(rs.unread_notifications, 4);

        drop(ui_tx);
        handle.await.unwrap();
    }
}
