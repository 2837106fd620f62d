use crate::components::traffic::models::Congestion;
use lazy_static::lazy_static;
use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

lazy_static! {
    pub static ref TITLE_STYLE: Style = Style::new().fg(Color::LightCyan).add_modifier(Modifier::BOLD);
    pub static ref FRAME_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    pub static ref DIM_STYLE: Style = Style::new().fg(Color::DarkGray);
    pub static ref LABEL_STYLE: Style = Style::new().fg(Color::Gray);
    pub static ref VALUE_STYLE: Style = Style::new().fg(Color::White);
    pub static ref KEY_STYLE: Style = Style::new().fg(Color::Gray).add_modifier(Modifier::BOLD);
    pub static ref BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);
    pub static ref CURSOR_BORDER_STYLE: Style = Style::new().fg(Color::LightYellow).add_modifier(Modifier::BOLD);
    pub static ref CURSOR_ROW_STYLE: Style = Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD);
    pub static ref HEADER_ROW_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    pub static ref EVENT_TITLE_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
    pub static ref FREE_BADGE_STYLE: Style = Style::new().fg(Color::Black).bg(Color::LightGreen).add_modifier(Modifier::BOLD);
    pub static ref PAID_BADGE_STYLE: Style = Style::new().fg(Color::Black).bg(Color::LightYellow);
    pub static ref BANNER_STYLE: Style = Style::new().fg(Color::White).bg(Color::Red);
    pub static ref LOADING_STYLE: Style = Style::new().fg(Color::LightBlue).add_modifier(Modifier::BOLD);
    pub static ref CURRENT_PAGE_STYLE: Style = Style::new().fg(Color::Black).bg(Color::LightCyan).add_modifier(Modifier::BOLD);
    pub static ref INPUT_STYLE: Style = Style::new().fg(Color::LightYellow).add_modifier(Modifier::UNDERLINED);

    /// Badge colours for the categories the event API publishes
    static ref CATEGORY_COLORS: HashMap<&'static str, Color> = {
        let mut colors = HashMap::new();
        colors.insert("교육/체험", Color::LightBlue);
        colors.insert("국악", Color::Rgb(186, 140, 99));
        colors.insert("기타", Color::Gray);
        colors.insert("독주/독창회", Color::LightMagenta);
        colors.insert("무용", Color::Magenta);
        colors.insert("뮤지컬/오페라", Color::LightRed);
        colors.insert("연극", Color::Red);
        colors.insert("영화", Color::Blue);
        colors.insert("전시/미술", Color::Green);
        colors.insert("축제-기타", Color::Yellow);
        colors.insert("축제-문화/예술", Color::LightYellow);
        colors.insert("축제-시민화합", Color::Rgb(255, 165, 0));
        colors.insert("축제-자연/경관", Color::LightGreen);
        colors.insert("축제-전통/역사", Color::Rgb(160, 82, 45));
        colors.insert("콘서트", Color::Cyan);
        colors.insert("클래식", Color::LightCyan);
        colors
    };
}

pub fn category_color(category: &str) -> Color {
    CATEGORY_COLORS.get(category).copied().unwrap_or(Color::Gray)
}

pub fn category_badge_style(category: &str) -> Style {
    Style::new()
        .fg(Color::Black)
        .bg(category_color(category))
        .add_modifier(Modifier::BOLD)
}

pub fn fee_badge_style(is_free: bool) -> Style {
    if is_free {
        *FREE_BADGE_STYLE
    } else {
        *PAID_BADGE_STYLE
    }
}

pub fn congestion_style(congestion: Congestion) -> Style {
    match congestion {
        Congestion::Smooth => Style::new().fg(Color::LightGreen),
        Congestion::Slow => Style::new().fg(Color::Yellow),
        Congestion::Congested => Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        Congestion::Unknown => *DIM_STYLE,
    }
}
