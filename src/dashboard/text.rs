use std::borrow::Cow;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MARQUEE_GAP: &str = "   ";
const ELLIPSIS: char = '…';

/// Cut `text` to at most `max_width` terminal columns, marking the cut with
/// an ellipsis. Wide (CJK) characters count as two columns.
pub fn truncate_text(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut truncated = String::new();
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width > budget {
            break;
        }
        used += width;
        truncated.push(ch);
    }
    truncated.push(ELLIPSIS);
    truncated
}

/// Title window for a card.
///
/// Titles of at most `threshold` characters are returned whole. Longer ones
/// scroll: a window of at most `width` columns starting `tick` characters
/// into the looped title.
pub fn marquee(title: &str, threshold: usize, width: usize, tick: u64) -> Cow<'_, str> {
    let len = title.chars().count();
    if len <= threshold || width == 0 {
        return Cow::Borrowed(title);
    }

    let looped: Vec<char> = title.chars().chain(MARQUEE_GAP.chars()).collect();
    let offset = (tick % looped.len() as u64) as usize;
    let mut used = 0;
    let mut window = String::new();
    // One full loop at most
    for ch in looped.iter().cycle().skip(offset).take(looped.len()) {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        used += ch_width;
        window.push(*ch);
    }
    Cow::Owned(window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_text("a longer piece of text", 8), "a longe…");
        assert_eq!(truncate_text("anything", 0), "");
    }

    #[test]
    fn test_truncate_counts_wide_characters_as_two_columns() {
        assert_eq!(truncate_text("서울 세계 불꽃 축제", 5), "서울…");
        assert_eq!(truncate_text("서울 세계 불꽃 축제", 6), "서울 …");

        let cut = truncate_text("서울 세계 불꽃 축제 한강 야경 특별 공연", 10);
        assert_eq!(cut, "서울 세계…");
        assert!(cut.width() <= 10);

        // An odd budget never splits a wide character
        let cut = truncate_text("가나다라마", 4);
        assert_eq!(cut, "가…");
        assert_eq!(cut.width(), 3);
    }

    #[test]
    fn test_short_titles_do_not_scroll() {
        let title = "Hamlet";
        assert_eq!(marquee(title, 20, 10, 0), "Hamlet");
        assert_eq!(marquee(title, 20, 10, 57), "Hamlet");
        assert!(matches!(marquee(title, 20, 10, 3), Cow::Borrowed(_)));
    }

    #[test]
    fn test_long_titles_scroll_with_tick() {
        let title = "abcdefghijklmnopqrstuvwxyz";
        assert_eq!(marquee(title, 20, 5, 0), "abcde");
        assert_eq!(marquee(title, 20, 5, 2), "cdefg");
        // Wraps through the gap back to the start
        assert_eq!(marquee(title, 20, 5, 24), "yz   ");
        assert_eq!(marquee(title, 20, 5, 27), "  abc");
        // A full loop returns to the first frame
        assert_eq!(marquee(title, 20, 5, 29), "abcde");
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let title: String = "가".repeat(20);
        assert_eq!(marquee(&title, 20, 8, 4), title.as_str());
        let longer: String = "가".repeat(21);
        let window = marquee(&longer, 20, 8, 0);
        assert_eq!(window.chars().count(), 4);
        assert_eq!(window.width(), 8);
    }

    #[test]
    fn test_wide_window_fits_card_width() {
        let title = "한강 여름 불꽃 축제와 야간 드론 라이트 쇼";
        for tick in 0..40 {
            assert!(marquee(title, 20, 9, tick).width() <= 9);
        }
    }
}
