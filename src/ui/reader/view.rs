use crate::app::render_state::{ContextView, ReadingStats, RenderState};
use crate::reading::ovp::MAX_HIGHLIGHT_INDEX;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const PROGRESS_CELLS: usize = 20;
// Rows needed before the context lines fit under the word
const MIN_CONTEXT_HEIGHT: u16 = 7;

/// Word with its anchor letter highlighted, padded so the anchor always
/// falls on the same column.
pub fn render_word_display(word: &str, anchor_pos: usize, theme: &Theme) -> Paragraph<'static> {
    let graphemes: Vec<&str> = word.graphemes(true).collect();
    let split = anchor_pos.min(graphemes.len());
    let prefix = graphemes[..split].concat();

    let left_padding = MAX_HIGHLIGHT_INDEX.saturating_sub(prefix.width());
    let mut spans = vec![Span::styled(" ".repeat(left_padding), theme.base())];
    spans.push(Span::styled(prefix, theme.word()));

    if let Some(anchor) = graphemes.get(split) {
        spans.push(Span::styled(anchor.to_string(), theme.anchor()));
        spans.push(Span::styled(graphemes[split + 1..].concat(), theme.word()));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Left)
        .style(theme.base())
}

/// Column where the padded word starts; the anchor lands just left of center.
pub fn word_start_column(width: u16) -> u16 {
    (width / 2).saturating_sub(MAX_HIGHLIGHT_INDEX as u16 + 1)
}

pub fn render_stats(stats: &ReadingStats, theme: &Theme) -> Line<'static> {
    Line::styled(stats.to_string(), theme.base())
}

pub fn render_progress_bar(progress: (usize, usize), theme: &Theme) -> Line<'static> {
    let (current, total) = progress;
    let filled_len = if total == 0 {
        0
    } else {
        (current.min(total) * PROGRESS_CELLS) / total
    };
    let empty_len = PROGRESS_CELLS - filled_len;

    Line::from(vec![
        Span::styled("─".repeat(filled_len), theme.base()),
        Span::styled("─".repeat(empty_len), theme.context()),
    ])
    .alignment(Alignment::Center)
}

/// The line being read, with the active word marked.
pub fn render_current_line(words: &[String], active: usize, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(words.len() * 2);
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", theme.context()));
        }
        let style = if i == active {
            theme.active_context_word()
        } else {
            theme.context()
        };
        spans.push(Span::styled(word.clone(), style));
    }
    Line::from(spans)
}

pub fn render_context_line(text: Option<&str>, theme: &Theme) -> Line<'static> {
    Line::styled(text.unwrap_or_default().to_string(), theme.context())
}

fn row(area: Rect, y: u16) -> Rect {
    Rect::new(area.x, area.y + y, area.width, 1)
}

fn draw_context(frame: &mut Frame, area: Rect, context: &ContextView<'_>, theme: &Theme) {
    frame.render_widget(render_stats(&context.stats, theme), row(area, 0));
    if area.height > 1 {
        frame.render_widget(render_progress_bar(context.progress, theme), row(area, 1));
    }

    if area.height >= MIN_CONTEXT_HEIGHT {
        let bottom = area.height - 3;
        frame.render_widget(render_context_line(context.previous, theme), row(area, bottom));
        frame.render_widget(
            render_current_line(context.current, context.active_word, theme),
            row(area, bottom + 1),
        );
        frame.render_widget(render_context_line(context.next, theme), row(area, bottom + 2));
    }
}

pub fn draw_reader(frame: &mut Frame, state: &RenderState<'_>, theme: &Theme) {
    let area = frame.area();
    if area.height == 0 || area.width == 0 {
        return;
    }
    frame.render_widget(Block::default().style(theme.base()), area);

    if let Some(context) = &state.context {
        draw_context(frame, area, context, theme);
    }

    let start = word_start_column(area.width);
    let word_area = Rect::new(
        area.x + start,
        area.y + area.height / 2,
        area.width - start,
        1,
    );
    frame.render_widget(
        render_word_display(state.word, state.highlight, theme),
        word_area,
    );
}
