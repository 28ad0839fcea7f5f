//! Full-screen chat session.
//!
//! The loop owns the controller and the view. Terminal input is polled on
//! this task; the only other task is the request spawned by
//! [`ConversationController::spawn_submit`], whose outcome comes back over a
//! channel and is applied here.

pub mod lifecycle;

use std::error::Error;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::core::controller::{AskOutcome, ConversationController};
use crate::ui::renderer::ui;
use crate::ui::view::{ChatView, KeyOutcome};
use lifecycle::{install_panic_hook, restore_terminal, setup_terminal};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EventOutcome {
    pub request_redraw: bool,
    pub exit_requested: bool,
}

/// Apply one terminal event to the view and controller.
pub(crate) fn handle_event(
    event: Event,
    view: &mut ChatView,
    controller: &mut ConversationController,
    outcome_tx: &mpsc::UnboundedSender<AskOutcome>,
) -> EventOutcome {
    let mut outcome = EventOutcome::default();

    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match view.handle_key(key) {
            KeyOutcome::QuitRequested => outcome.exit_requested = true,
            KeyOutcome::SubmitRequested => {
                controller.set_draft(view.draft());
                if controller.spawn_submit(outcome_tx.clone()) {
                    view.clear_input();
                    view.mark_request_started();
                } else {
                    debug!(
                        loading = controller.state().is_loading(),
                        "submit ignored"
                    );
                }
                outcome.request_redraw = true;
            }
            KeyOutcome::Edited => {
                controller.set_draft(view.draft());
                outcome.request_redraw = true;
            }
            KeyOutcome::Scrolled => outcome.request_redraw = true,
            KeyOutcome::Ignored => {}
        },
        Event::Paste(text) => {
            view.insert_paste(&text);
            controller.set_draft(view.draft());
            outcome.request_redraw = true;
        }
        Event::Resize(_, _) => outcome.request_redraw = true,
        _ => {}
    }

    outcome
}

pub async fn run_chat(
    mut controller: ConversationController,
    title: String,
) -> Result<(), Box<dyn Error>> {
    let mut view = ChatView::new(title);
    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel::<AskOutcome>();

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    info!(
        session_id = controller.session().session_id(),
        "chat session started"
    );

    let mut request_redraw = true;

    let result: Result<(), Box<dyn Error>> = 'main_loop: loop {
        if request_redraw || controller.state().is_loading() {
            let session_id = controller.session().session_id().to_string();
            if let Err(err) =
                terminal.draw(|f| ui(f, &mut view, controller.state(), &session_id))
            {
                break 'main_loop Err(err.into());
            }
            request_redraw = false;
        }

        match event::poll(POLL_INTERVAL) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    let outcome = handle_event(ev, &mut view, &mut controller, &outcome_tx);
                    if outcome.exit_requested {
                        break 'main_loop Ok(());
                    }
                    request_redraw |= outcome.request_redraw;
                }
                Err(err) => break 'main_loop Err(err.into()),
            },
            Ok(false) => {}
            Err(err) => break 'main_loop Err(err.into()),
        }

        while let Ok(outcome) = outcome_rx.try_recv() {
            controller.settle(outcome);
            request_redraw = true;
        }

        // Let the request task make progress on the shared runtime.
        tokio::task::yield_now().await;
    };

    restore_terminal(&mut terminal)?;
    if controller.state().is_loading() {
        debug!("quitting with a request in flight; its reply will be dropped");
    }
    result
}
