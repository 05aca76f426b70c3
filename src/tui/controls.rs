//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    // Shift+arrow moves ten steps at a time
    let coarse = if key.modifiers.contains(KeyModifiers::SHIFT) {
        10
    } else {
        1
    };
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Right => app.adjust(coarse),
        KeyCode::Left => app.adjust(-coarse),
        KeyCode::Char('+' | '=' | 'l') => app.adjust(1),
        KeyCode::Char('-' | 'h') => app.adjust(-1),
        KeyCode::Char(' ' | 's') => app.toggle_stepwise(),
        KeyCode::Char('1') => app.switch_preset("baseline"),
        KeyCode::Char('2') => app.switch_preset("grace_period"),
        KeyCode::Char('3') => app.switch_preset("stepwise"),
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScenarioConfig;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn arrows_select_and_adjust() {
        let mut app = App::new(ScenarioConfig::baseline(), "baseline");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.scenario.project.capex, 410_000.0);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.scenario.project.opex, 75_000.0);
    }

    #[test]
    fn shift_adjusts_in_coarse_steps() {
        let mut app = App::new(ScenarioConfig::baseline(), "baseline");
        handle_key(&mut app, KeyEvent::new(KeyCode::Right, KeyModifiers::SHIFT));
        assert_eq!(app.scenario.project.capex, 500_000.0);
    }

    #[test]
    fn preset_keys_and_quit() {
        let mut app = App::new(ScenarioConfig::baseline(), "baseline");
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.preset_name, "grace_period");
        press(&mut app, KeyCode::Char(' '));
        assert!(app.scenario.loan.stepwise);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.quit);
    }
}
