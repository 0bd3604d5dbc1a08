//! Keyboard mapping from Zellij key events to application events.
//!
//! The mapping depends on the input mode and on whether the detail overlay is
//! open. Keys that mean nothing in the current context map to `None`.
//!
//! # Example
//!
//! ```rust
//! use zellij_tile::prelude::{BareKey, KeyWithModifier};
//! use zinema::app::keys::map_key;
//! use zinema::{Event, InputMode};
//!
//! let key = KeyWithModifier::new(BareKey::Char('l'));
//! assert_eq!(map_key(&key, InputMode::Browsing, false), Some(Event::NextPage));
//! assert_eq!(map_key(&key, InputMode::Typing, false), Some(Event::Char('l')));
//! ```

use super::handler::Event;
use super::modes::InputMode;
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Maps a key press to an application event.
///
/// `Ctrl+n` and `Ctrl+p` move the cursor in both modes. Any other chord
/// except a plain `Shift` is ignored, so `Ctrl`/`Alt` shortcuts never type
/// into the search box.
#[must_use]
pub fn map_key(key: &KeyWithModifier, mode: InputMode, detail_open: bool) -> Option<Event> {
    if detail_open {
        return match key.bare_key {
            BareKey::Esc | BareKey::Enter | BareKey::Char('q') if key.has_no_modifiers() => {
                Some(Event::CloseDetail)
            }
            _ => None,
        };
    }

    if key.has_modifiers(&[KeyModifier::Ctrl]) {
        return match key.bare_key {
            BareKey::Char('n') => Some(Event::SelectNext),
            BareKey::Char('p') => Some(Event::SelectPrevious),
            _ => None,
        };
    }

    if !(key.has_no_modifiers() || key.has_modifiers(&[KeyModifier::Shift])) {
        return None;
    }

    match mode {
        InputMode::Typing => Some(match key.bare_key {
            BareKey::Enter => Event::Submit,
            BareKey::Backspace => Event::Backspace,
            BareKey::Esc => Event::LeaveSearch,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        }),
        InputMode::Browsing => Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::SelectNext,
            BareKey::Up | BareKey::Char('k') => Event::SelectPrevious,
            BareKey::Enter => Event::OpenDetail,
            BareKey::Right | BareKey::Char('l') => Event::NextPage,
            BareKey::Left | BareKey::Char('h') => Event::PreviousPage,
            BareKey::Char('g') => Event::FirstPage,
            BareKey::Char('G') => Event::LastPage,
            BareKey::Char('/') => Event::FocusSearch,
            BareKey::Char('q') | BareKey::Esc => Event::Quit,
            _ => return None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(bare_key: BareKey) -> KeyWithModifier {
        KeyWithModifier::new(bare_key)
    }

    #[test]
    fn modified_chords_do_not_type() {
        let ctrl_a = plain(BareKey::Char('a')).with_ctrl_modifier();
        let alt_b = plain(BareKey::Char('b')).with_alt_modifier();

        assert_eq!(map_key(&ctrl_a, InputMode::Typing, false), None);
        assert_eq!(map_key(&alt_b, InputMode::Typing, false), None);
        assert_eq!(map_key(&alt_b, InputMode::Browsing, false), None);
    }

    #[test]
    fn shifted_and_plain_characters_type() {
        let shift_a = plain(BareKey::Char('A')).with_shift_modifier();

        assert_eq!(map_key(&shift_a, InputMode::Typing, false), Some(Event::Char('A')));
        assert_eq!(map_key(&plain(BareKey::Char('j')), InputMode::Typing, false), Some(Event::Char('j')));
        assert_eq!(map_key(&plain(BareKey::Enter), InputMode::Typing, false), Some(Event::Submit));
    }

    #[test]
    fn ctrl_n_and_ctrl_p_move_in_every_mode() {
        let ctrl_n = plain(BareKey::Char('n')).with_ctrl_modifier();
        let ctrl_p = plain(BareKey::Char('p')).with_ctrl_modifier();

        for mode in [InputMode::Typing, InputMode::Browsing] {
            assert_eq!(map_key(&ctrl_n, mode, false), Some(Event::SelectNext));
            assert_eq!(map_key(&ctrl_p, mode, false), Some(Event::SelectPrevious));
        }
    }

    #[test]
    fn browsing_keys_drive_grid_and_pages() {
        let browse = |bare_key| map_key(&plain(bare_key), InputMode::Browsing, false);

        assert_eq!(browse(BareKey::Down), Some(Event::SelectNext));
        assert_eq!(browse(BareKey::Char('h')), Some(Event::PreviousPage));
        assert_eq!(browse(BareKey::Char('G')), Some(Event::LastPage));
        assert_eq!(browse(BareKey::Char('/')), Some(Event::FocusSearch));
        assert_eq!(browse(BareKey::Esc), Some(Event::Quit));
        assert_eq!(browse(BareKey::Char('x')), None);
    }

    #[test]
    fn overlay_only_accepts_close_keys() {
        for bare_key in [BareKey::Esc, BareKey::Enter, BareKey::Char('q')] {
            assert_eq!(map_key(&plain(bare_key), InputMode::Browsing, true), Some(Event::CloseDetail));
        }
        assert_eq!(map_key(&plain(BareKey::Char('l')), InputMode::Browsing, true), None);
    }
}
