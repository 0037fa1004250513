use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::player::{ControlCmd, PlayerWorker, WorkerCmd};
use crate::ui;

/// What a key press asks the runtime to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Control(ControlCmd),
}

/// Map a key press to an action using the configured bindings.
pub fn action_for_key(key: KeyEvent, controls: &config::ControlsSettings) -> Option<Action> {
    // Raw mode swallows SIGINT, so Ctrl-C has to be handled here.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    let KeyCode::Char(c) = key.code else {
        return None;
    };
    if c == controls.quit {
        Some(Action::Quit)
    } else if c == controls.play_pause {
        Some(Action::Control(ControlCmd::PlayPause))
    } else if c == controls.next {
        Some(Action::Control(ControlCmd::Next))
    } else if c == controls.previous {
        Some(Action::Control(ControlCmd::Prev))
    } else {
        None
    }
}

/// Main terminal event loop: applies results from the player worker, redraws
/// and dispatches key presses. Returns `Ok(())` when quit is requested.
///
/// Nothing here waits on playerctl; queries and commands run on the worker.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    worker: &PlayerWorker,
) -> Result<(), Box<dyn std::error::Error>> {
    while !app.should_quit {
        while let Some(ev) = worker.try_recv() {
            app.apply(ev);
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui, &settings.controls))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_action(action_for_key(key, &settings.controls), app, worker);
                }
            }
        }
    }

    tracing::info!("quit requested");
    Ok(())
}

fn handle_action(action: Option<Action>, app: &mut App, worker: &PlayerWorker) {
    match action {
        Some(Action::Quit) => app.request_quit(),
        Some(Action::Control(cmd)) => {
            let _ = worker.send(WorkerCmd::Control(cmd));
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn default_bindings_map_to_actions() {
        let controls = config::ControlsSettings::default();
        let cases = [
            ('q', Some(Action::Quit)),
            ('p', Some(Action::Control(ControlCmd::PlayPause))),
            ('n', Some(Action::Control(ControlCmd::Next))),
            ('b', Some(Action::Control(ControlCmd::Prev))),
            ('x', None),
        ];
        for (c, expected) in cases {
            assert_eq!(
                action_for_key(press(KeyCode::Char(c), KeyModifiers::NONE), &controls),
                expected,
                "key {c:?}"
            );
        }
    }

    #[test]
    fn ctrl_c_quits_and_other_modifiers_are_ignored() {
        let controls = config::ControlsSettings::default();
        assert_eq!(
            action_for_key(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &controls),
            Some(Action::Quit)
        );
        assert_eq!(
            action_for_key(press(KeyCode::Char('p'), KeyModifiers::CONTROL), &controls),
            None
        );
        assert_eq!(
            action_for_key(press(KeyCode::Char('n'), KeyModifiers::ALT), &controls),
            None
        );
        assert_eq!(
            action_for_key(press(KeyCode::Enter, KeyModifiers::NONE), &controls),
            None
        );
    }

    #[test]
    fn custom_bindings_are_honoured() {
        let controls = config::ControlsSettings {
            play_pause: ' ',
            next: 'L',
            previous: 'H',
            quit: 'Q',
        };
        assert_eq!(
            action_for_key(press(KeyCode::Char(' '), KeyModifiers::NONE), &controls),
            Some(Action::Control(ControlCmd::PlayPause))
        );
        assert_eq!(
            action_for_key(press(KeyCode::Char('L'), KeyModifiers::SHIFT), &controls),
            Some(Action::Control(ControlCmd::Next))
        );
        assert_eq!(
            action_for_key(press(KeyCode::Char('q'), KeyModifiers::NONE), &controls),
            None
        );
    }
}
