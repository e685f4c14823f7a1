//! On-screen keyboard geometry
//!
//! One layout function feeds both rendering and mouse hit-testing, so a click
//! always lands on the key that was drawn there.

use crate::game::Keystroke;
use ratatui::layout::Rect;

const LETTER_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

pub const KEY_HEIGHT: u16 = 3;
const LETTER_KEY_WIDTH: u16 = 5;
const WIDE_KEY_WIDTH: u16 = 7;
const KEY_GAP: u16 = 1;

/// Rows needed to draw the whole keyboard
pub const KEYBOARD_HEIGHT: u16 = KEY_HEIGHT * LETTER_ROWS.len() as u16;

/// A button on the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnScreenKey {
    Letter(char),
    Enter,
    Back,
}

impl OnScreenKey {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(ch) => ch.to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Back => "BACK".to_string(),
        }
    }

    #[must_use]
    pub const fn width(self) -> u16 {
        match self {
            Self::Letter(_) => LETTER_KEY_WIDTH,
            Self::Enter | Self::Back => WIDE_KEY_WIDTH,
        }
    }

    #[must_use]
    pub const fn keystroke(self) -> Keystroke {
        match self {
            Self::Letter(ch) => Keystroke::Letter(ch),
            Self::Enter => Keystroke::Submit,
            Self::Back => Keystroke::Backspace,
        }
    }
}

/// Keys row by row: QWERTY rows, with ENTER and BACK around the last one
#[must_use]
pub fn rows() -> Vec<Vec<OnScreenKey>> {
    let last = LETTER_ROWS.len() - 1;
    LETTER_ROWS
        .iter()
        .enumerate()
        .map(|(i, letters)| {
            let mut row: Vec<OnScreenKey> = letters.chars().map(OnScreenKey::Letter).collect();
            if i == last {
                row.insert(0, OnScreenKey::Enter);
                row.push(OnScreenKey::Back);
            }
            row
        })
        .collect()
}

/// Place every key inside `area`, each row centered horizontally
///
/// Keys that would not fit are left out.
#[must_use]
pub fn layout(area: Rect) -> Vec<(OnScreenKey, Rect)> {
    let mut placed = Vec::new();

    for (i, row) in rows().into_iter().enumerate() {
        let y = area.y + i as u16 * KEY_HEIGHT;
        if y + KEY_HEIGHT > area.bottom() {
            break;
        }

        let row_width: u16 = row.iter().map(|key| key.width()).sum::<u16>()
            + KEY_GAP * (row.len() as u16).saturating_sub(1);
        let mut x = area.x + area.width.saturating_sub(row_width) / 2;

        for key in row {
            if x + key.width() > area.right() {
                break;
            }
            placed.push((key, Rect::new(x, y, key.width(), KEY_HEIGHT)));
            x += key.width() + KEY_GAP;
        }
    }

    placed
}

/// Find the key under a terminal cell
#[must_use]
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<OnScreenKey> {
    layout(area)
        .into_iter()
        .find(|(_, rect)| {
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        })
        .map(|(key, _)| key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide_area() -> Rect {
        Rect::new(0, 20, 80, KEYBOARD_HEIGHT)
    }

    #[test]
    fn rows_match_qwerty_with_controls() {
        let rows = rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 10);
        assert_eq!(rows[1].len(), 9);
        assert_eq!(rows[2].first(), Some(&OnScreenKey::Enter));
        assert_eq!(rows[2].last(), Some(&OnScreenKey::Back));
        assert_eq!(rows[2].len(), 9);
    }

    #[test]
    fn layout_places_all_keys_when_wide_enough() {
        let placed = layout(wide_area());
        assert_eq!(placed.len(), 28);
        assert!(placed.iter().all(|(_, rect)| rect.right() <= 80));
    }

    #[test]
    fn layout_centers_rows() {
        let placed = layout(wide_area());
        // Top row: 10 keys × 5 + 9 gaps = 59 wide, (80 - 59) / 2 = 10
        let (key, rect) = placed[0];
        assert_eq!(key, OnScreenKey::Letter('Q'));
        assert_eq!(rect, Rect::new(10, 20, 5, 3));
    }

    #[test]
    fn layout_drops_rows_that_do_not_fit() {
        let placed = layout(Rect::new(0, 0, 80, 4));
        assert_eq!(placed.len(), 10);
    }

    #[test]
    fn hit_test_finds_keys() {
        let area = wide_area();
        assert_eq!(hit_test(area, 10, 20), Some(OnScreenKey::Letter('Q')));
        assert_eq!(hit_test(area, 14, 22), Some(OnScreenKey::Letter('Q')));
        assert_eq!(hit_test(area, 16, 21), Some(OnScreenKey::Letter('W')));
        // Gap between Q and W
        assert_eq!(hit_test(area, 15, 21), None);
        assert_eq!(hit_test(area, 0, 0), None);
    }

    #[test]
    fn hit_test_control_keys() {
        let area = wide_area();
        let placed = layout(area);
        let (_, enter) = placed
            .iter()
            .find(|(key, _)| *key == OnScreenKey::Enter)
            .copied()
            .unwrap();
        assert_eq!(hit_test(area, enter.x, enter.y), Some(OnScreenKey::Enter));
        assert_eq!(OnScreenKey::Enter.keystroke(), Keystroke::Submit);
        assert_eq!(OnScreenKey::Back.keystroke(), Keystroke::Backspace);
    }
}
