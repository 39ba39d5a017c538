//! Paper rendering for the player.
//!
//! Lays out the revealed part of the script as wrapped, styled lines and
//! records where linked text ended up so mouse clicks can be mapped back to
//! URLs.

use std::str::FromStr;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::player::state::PlaybackPosition;
use crate::script::{Script, Segment, TextStyle};
use crate::tui::theme::Theme;

/// Revealed text of every visible segment, paired with its index.
///
/// Completed segments are shown in full, the active one up to `char_index`
/// and later segments not at all.
pub fn visible_segments(script: &Script, position: PlaybackPosition) -> Vec<(usize, &str)> {
    script
        .segments()
        .iter()
        .enumerate()
        .take(position.segment_index + 1)
        .map(|(index, segment)| {
            let text = if index < position.segment_index {
                segment.text.as_str()
            } else {
                segment.revealed(position.char_index)
            };
            (index, text)
        })
        .collect()
}

/// Plain text on the paper at `position`.
pub fn visible_text(script: &Script, position: PlaybackPosition) -> String {
    visible_segments(script, position)
        .into_iter()
        .map(|(_, text)| text)
        .collect()
}

/// Screen area covered by linked text on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRegion {
    pub url: String,
    /// Line index within the layout (or screen row once placed)
    pub row: u16,
    /// First column covered
    pub start_col: u16,
    /// One past the last column covered
    pub end_col: u16,
}

impl LinkRegion {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        row == self.row && column >= self.start_col && column < self.end_col
    }
}

/// Wrapped lines plus link regions, relative to the paper's top-left corner.
#[derive(Debug, Clone, Default)]
pub struct PaperLayout {
    pub lines: Vec<Line<'static>>,
    pub links: Vec<LinkRegion>,
}

impl PaperLayout {
    /// Number of leading lines hidden so the last line fits in `height`.
    pub fn scroll_for(&self, height: u16) -> usize {
        self.lines.len().saturating_sub(height as usize)
    }
}

/// Ratatui style for a segment over its committed default.
pub fn segment_style(segment: &Segment, committed: &TextStyle, theme: &Theme) -> Style {
    let style = segment.style.over(committed);
    let mut out = theme.text_style();

    if style.glow {
        out = out.patch(theme.glow_style());
    }
    if let Some(color) = style.color.as_deref().and_then(|c| Color::from_str(c).ok()) {
        out = out.fg(color);
    }
    // Links keep the link color whatever the segment asks for
    if segment.url.is_some() {
        out = out.patch(theme.link_style());
    }
    if style.bold {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.italic {
        out = out.add_modifier(Modifier::ITALIC);
    }
    if style.underline {
        out = out.add_modifier(Modifier::UNDERLINED);
    }
    out
}

/// Accumulates styled runs into width-limited lines.
struct LineBuilder {
    width: usize,
    lines: Vec<Line<'static>>,
    links: Vec<LinkRegion>,
    spans: Vec<Span<'static>>,
    line_width: usize,
    run: String,
    run_start: usize,
}

impl LineBuilder {
    fn new(width: u16) -> Self {
        Self {
            width: (width as usize).max(1),
            lines: Vec::new(),
            links: Vec::new(),
            spans: Vec::new(),
            line_width: 0,
            run: String::new(),
            run_start: 0,
        }
    }

    fn flush_run(&mut self, style: Style, url: Option<&str>) {
        if self.run.is_empty() {
            return;
        }
        if let Some(url) = url {
            self.links.push(LinkRegion {
                url: url.to_string(),
                row: self.lines.len() as u16,
                start_col: self.run_start as u16,
                end_col: self.line_width as u16,
            });
        }
        self.spans
            .push(Span::styled(std::mem::take(&mut self.run), style));
        self.run_start = self.line_width;
    }

    fn break_line(&mut self, style: Style, url: Option<&str>) {
        self.flush_run(style, url);
        self.lines.push(Line::from(std::mem::take(&mut self.spans)));
        self.line_width = 0;
        self.run_start = 0;
    }

    fn push_segment(&mut self, text: &str, style: Style, url: Option<&str>) {
        self.run_start = self.line_width;
        for ch in text.chars() {
            if ch == '\n' {
                self.break_line(style, url);
                continue;
            }
            let ch = if ch == '\t' { ' ' } else { ch };
            let w = ch.width().unwrap_or(0);
            if self.line_width + w > self.width && self.line_width > 0 {
                self.break_line(style, url);
            }
            self.run.push(ch);
            self.line_width += w;
        }
        self.flush_run(style, url);
    }

    fn finish(mut self) -> PaperLayout {
        if !self.spans.is_empty() || self.lines.is_empty() {
            self.lines.push(Line::from(self.spans));
        }
        PaperLayout {
            lines: self.lines,
            links: self.links,
        }
    }
}

/// Lay out the revealed text at `position`, hard-wrapped at `width` columns.
pub fn layout_paper(
    script: &Script,
    position: PlaybackPosition,
    committed: &[TextStyle],
    theme: &Theme,
    width: u16,
) -> PaperLayout {
    let mut builder = LineBuilder::new(width);
    let plain = TextStyle::default();

    for (index, text) in visible_segments(script, position) {
        let segment = &script.segments()[index];
        let base = committed.get(index).unwrap_or(&plain);
        let style = segment_style(segment, base, theme);
        builder.push_segment(text, style, segment.url.as_deref());
    }

    builder.finish()
}

/// Draw the paper into `area`, scrolled to keep the newest line visible.
///
/// Returns the link regions in screen coordinates.
pub fn render_paper(
    frame: &mut Frame,
    area: Rect,
    script: &Script,
    position: PlaybackPosition,
    committed: &[TextStyle],
    theme: &Theme,
) -> Vec<LinkRegion> {
    let layout = layout_paper(script, position, committed, theme, area.width);
    let scroll = layout.scroll_for(area.height);

    let links = layout
        .links
        .iter()
        .filter(|link| link.row as usize >= scroll)
        .map(|link| LinkRegion {
            url: link.url.clone(),
            row: area.y + (link.row as usize - scroll) as u16,
            start_col: area.x + link.start_col,
            end_col: area.x + link.end_col,
        })
        .collect();

    let visible: Vec<Line<'static>> = layout.lines.into_iter().skip(scroll).collect();
    frame.render_widget(Paragraph::new(visible), area);
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::committed_styles;

    fn script() -> Script {
        Script::new(vec![
            Segment::new("Hello ", 1.0),
            Segment::new("world", 1.0).with_url("https://example.com"),
            Segment::new("!\nbye", 1.0),
        ])
        .unwrap()
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn visible_text_is_prefix_of_full_text() {
        let script = script();
        let full = script.full_text();
        for segment_index in 0..script.len() {
            for char_index in 0..=script.segments()[segment_index].char_len() {
                let pos = PlaybackPosition {
                    segment_index,
                    char_index,
                };
                let text = visible_text(&script, pos);
                assert!(full.starts_with(&text));
                assert_eq!(text.chars().count(), pos.revealed_chars(&script));
            }
        }
    }

    #[test]
    fn later_segments_are_hidden() {
        let script = script();
        let pos = PlaybackPosition {
            segment_index: 1,
            char_index: 2,
        };
        let segments = visible_segments(&script, pos);
        assert_eq!(segments, vec![(0, "Hello "), (1, "wo")]);
    }

    #[test]
    fn terminal_position_shows_everything() {
        let script = script();
        let pos = PlaybackPosition::terminal(&script);
        assert_eq!(visible_text(&script, pos), script.full_text());
    }

    #[test]
    fn newlines_break_lines() {
        let script = script();
        let styles = committed_styles(script.segments());
        let layout = layout_paper(
            &script,
            PlaybackPosition::terminal(&script),
            &styles,
            &Theme::default(),
            80,
        );
        let texts: Vec<String> = layout.lines.iter().map(line_text).collect();
        assert_eq!(texts, ["Hello world!", "bye"]);
    }

    #[test]
    fn long_text_wraps_at_width() {
        let script = Script::new(vec![Segment::new("abcdefghij", 1.0)]).unwrap();
        let layout = layout_paper(
            &script,
            PlaybackPosition::terminal(&script),
            &[TextStyle::default()],
            &Theme::default(),
            4,
        );
        let texts: Vec<String> = layout.lines.iter().map(line_text).collect();
        assert_eq!(texts, ["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wide_characters_count_double() {
        let script = Script::new(vec![Segment::new("日本語", 1.0)]).unwrap();
        let layout = layout_paper(
            &script,
            PlaybackPosition::terminal(&script),
            &[TextStyle::default()],
            &Theme::default(),
            4,
        );
        assert_eq!(layout.lines.len(), 2);
    }

    #[test]
    fn link_region_covers_linked_text() {
        let script = script();
        let styles = committed_styles(script.segments());
        let layout = layout_paper(
            &script,
            PlaybackPosition::terminal(&script),
            &styles,
            &Theme::default(),
            80,
        );
        assert_eq!(
            layout.links,
            vec![LinkRegion {
                url: "https://example.com".to_string(),
                row: 0,
                start_col: 6,
                end_col: 11,
            }]
        );
        assert!(layout.links[0].contains(6, 0));
        assert!(!layout.links[0].contains(11, 0));
    }

    #[test]
    fn wrapped_link_has_one_region_per_line() {
        let script = Script::new(vec![
            Segment::new("ab", 1.0),
            Segment::new("cdef", 1.0).with_url("https://example.com"),
        ])
        .unwrap();
        let layout = layout_paper(
            &script,
            PlaybackPosition::terminal(&script),
            &committed_styles(script.segments()),
            &Theme::default(),
            4,
        );
        assert_eq!(layout.links.len(), 2);
        assert_eq!((layout.links[0].row, layout.links[0].start_col, layout.links[0].end_col), (0, 2, 4));
        assert_eq!((layout.links[1].row, layout.links[1].start_col, layout.links[1].end_col), (1, 0, 2));
    }

    #[test]
    fn segment_style_layers_over_committed() {
        let theme = Theme::default();
        let committed = TextStyle {
            italic: true,
            color: Some("red".into()),
            ..TextStyle::default()
        };
        let segment = Segment::new("x", 1.0).with_style(TextStyle {
            bold: true,
            ..TextStyle::default()
        });
        let style = segment_style(&segment, &committed, &theme);
        assert_eq!(style.fg, Some(Color::Red));
        assert!(style.add_modifier.contains(Modifier::BOLD | Modifier::ITALIC));
    }

    #[test]
    fn glow_and_link_styles_apply() {
        let theme = Theme::default();
        let glowing = Segment::new("x", 1.0).with_style(TextStyle {
            glow: true,
            ..TextStyle::default()
        });
        assert_eq!(
            segment_style(&glowing, &TextStyle::default(), &theme).fg,
            Some(theme.glow)
        );

        let linked = Segment::new("x", 1.0).with_url("https://a.b");
        let style = segment_style(&linked, &TextStyle::default(), &theme);
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));
        assert_eq!(style.fg, Some(theme.link));
    }

    #[test]
    fn link_color_wins_over_segment_color() {
        let theme = Theme::default();
        let committed = TextStyle {
            color: Some("red".to_string()),
            ..TextStyle::default()
        };
        let linked = Segment::new("x", 1.0)
            .with_url("https://a.b")
            .with_style(TextStyle {
                color: Some("magenta".to_string()),
                bold: true,
                ..TextStyle::default()
            });
        let style = segment_style(&linked, &committed, &theme);
        assert_eq!(style.fg, Some(theme.link));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn scroll_keeps_last_line_visible() {
        let layout = PaperLayout {
            lines: vec![Line::from("a"), Line::from("b"), Line::from("c")],
            links: Vec::new(),
        };
        assert_eq!(layout.scroll_for(2), 1);
        assert_eq!(layout.scroll_for(10), 0);
    }
}
