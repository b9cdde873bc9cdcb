use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use tracing::trace;

use crate::events::Control;

/// Converts a crossterm event into a control signal for the host loop
pub fn convert_event(event: CrossTermEvent) -> Option<Control> {
    match event {
        CrossTermEvent::Key(key_event) => {
            trace!(?key_event, "key");

            match key_event {
                KeyEvent {
                    kind: KeyEventKind::Release,
                    ..
                } => None,
                KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                } => Some(Control::Interrupt),
                KeyEvent {
                    code: KeyCode::Char('q'),
                    ..
                } => Some(Control::Quit),
                _ => None,
            }
        }
        CrossTermEvent::Resize(cols, rows) => Some(Control::Resize { cols, rows }),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use crossterm::event::Event;
    use crossterm::event::KeyCode;
    use crossterm::event::KeyEvent;
    use crossterm::event::KeyEventKind;
    use crossterm::event::KeyModifiers;

    use super::convert_event;
    use crate::events::Control;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn q_quits() {
        let event = key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(convert_event(event), Some(Control::Quit));
    }

    #[test]
    fn ctrl_c_interrupts() {
        let event = key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(convert_event(event), Some(Control::Interrupt));
    }

    #[test]
    fn plain_c_is_ignored() {
        let event = key(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(convert_event(event), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let event = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(convert_event(event), None);
    }

    #[test]
    fn resize_is_forwarded() {
        let event = Event::Resize(120, 40);
        assert_eq!(
            convert_event(event),
            Some(Control::Resize { cols: 120, rows: 40 })
        );
    }

    #[test]
    fn focus_is_ignored() {
        assert_eq!(convert_event(Event::FocusGained), None);
    }
}
