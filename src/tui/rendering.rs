use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{CompareOverlay, MessageType, StatusMessage};
use super::layout::{AppLayout, CompareLayout, centered_rect, split_columns};
use super::palette::{Palette, provider_accent};
use super::timestamps::entry_label;
use crate::compare::{CompareMode, ComparisonEngine, ComparisonView, DiffOp, DiffSegment, Slot};
use crate::history::HistoryStore;
use crate::models::{ModelCatalog, ResultField};
use crate::reveal::RevealState;
use crate::theme::ThemeMode;
use crate::utils::sanitize_for_terminal;

const TYPING_CURSOR: &str = "▌";
const INPUT_CURSOR: &str = "▏";
const SKELETON_WIDTHS: [usize; 3] = [42, 36, 28];

/// Everything the renderer needs from the app for one frame
pub struct RenderState<'a> {
    pub question: &'a str,
    pub catalog: &'a ModelCatalog,
    pub provider: &'a str,
    pub loading: bool,
    pub reveal: Option<&'a RevealState>,
    pub history: &'a HistoryStore,
    pub theme_mode: ThemeMode,
    pub dark: bool,
    pub compare: Option<&'a CompareOverlay>,
    pub notice: Option<&'a str>,
    pub status_message: Option<&'a StatusMessage>,
    pub scroll: u16,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let palette = Palette::new(state.dark);
    let layout = AppLayout::new(frame.area());

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
        frame.area(),
    );

    render_header(frame, layout.header_area, state, &palette);
    render_question(frame, layout.question_area, state.question, &palette);
    render_providers(frame, layout.provider_area, state, &palette);
    render_results(frame, layout.results_area, state, &palette);
    render_status_bar(frame, layout.status_area, state, &palette);

    let full = frame.area();
    if let Some(overlay) = state.compare {
        render_compare(frame, centered_rect(94, 90, full), overlay, state.history, &palette);
    }
    if let Some(notice) = state.notice {
        render_notice(frame, centered_rect(60, 30, full), notice, &palette);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &RenderState, palette: &Palette) {
    let resolved = if state.dark { "dark" } else { "light" };
    let theme = match state.theme_mode {
        ThemeMode::Auto => format!("{} ({})", state.theme_mode.label(), resolved),
        _ => state.theme_mode.label().to_string(),
    };

    let line = Line::from(vec![
        Span::styled(
            " Multi-Agent Brainstorm ",
            Style::default().fg(palette.title).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("| theme: {} | history: {} ", theme, state.history.len()),
            Style::default().fg(palette.muted),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_question(frame: &mut Frame, area: Rect, question: &str, palette: &Palette) {
    let mut lines: Vec<Line> = question.split('\n').map(|l| Line::from(l.to_string())).collect();
    if let Some(last) = lines.last_mut() {
        last.push_span(Span::styled(INPUT_CURSOR, Style::default().fg(palette.muted)));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(" Question (Enter: ask | Alt+Enter: new line) "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_providers(frame: &mut Frame, area: Rect, state: &RenderState, palette: &Palette) {
    let accent = provider_accent(state.provider, state.dark);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(" Provider (↑/↓) ");

    let selected = state.catalog.find(state.provider);
    let mut lines = Vec::new();

    match selected {
        Some(info) => {
            lines.push(Line::from(Span::styled(
                format!("● {}", info.name),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )));
            if let Some(description) = &info.description {
                lines.push(Line::from(description.clone()));
            }
            let mut details = Vec::new();
            if let Some(speed) = &info.speed {
                details.push(format!("speed: {}", speed));
            }
            if let Some(cost) = &info.cost {
                details.push(format!("cost: {}", cost));
            }
            if !details.is_empty() {
                lines.push(Line::from(Span::styled(
                    details.join(" | "),
                    Style::default().fg(palette.muted),
                )));
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                format!("● {}", state.provider),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )));
            if state.catalog.available_models.is_empty() {
                lines.push(Line::from(Span::styled(
                    "Provider list unavailable",
                    Style::default().fg(palette.muted),
                )));
            }
        }
    }

    if state.catalog.available_models.len() > 1 {
        let others = state
            .catalog
            .available_models
            .iter()
            .filter(|p| p.id != state.provider)
            .map(|p| p.id.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(Line::from(Span::styled(
            format!("also: {}", others),
            Style::default().fg(palette.muted),
        )));
    }

    let paragraph = Paragraph::new(Text::from(lines)).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_results(frame: &mut Frame, area: Rect, state: &RenderState, palette: &Palette) {
    let mut lines: Vec<Line> = Vec::new();

    if state.loading {
        lines.push(Line::from(Span::styled(
            "Agents are working on it…",
            Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
        for field in ResultField::ALL {
            lines.push(section_title(field, palette));
            for width in SKELETON_WIDTHS {
                lines.push(Line::from(Span::styled(
                    "░".repeat(width),
                    Style::default().fg(palette.border),
                )));
            }
            lines.push(Line::from(""));
        }
    } else if let Some(reveal) = state.reveal {
        for field in ResultField::ALL {
            lines.push(section_title(field, palette));
            lines.extend(section_body(reveal, field, palette));
            lines.push(Line::from(""));
        }
    } else {
        lines.push(Line::from(Span::styled(
            "Type a question and press Enter to start brainstorming.",
            Style::default().fg(palette.muted),
        )));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(" Results (PgUp/PgDn) "),
        )
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));

    frame.render_widget(paragraph, area);
}

fn section_title(field: ResultField, palette: &Palette) -> Line<'static> {
    let color = if field == ResultField::Final { palette.final_border } else { palette.title };
    Line::from(Span::styled(
        field.title().to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

fn section_body(reveal: &RevealState, field: ResultField, palette: &Palette) -> Vec<Line<'static>> {
    let text = sanitize_for_terminal(reveal.text(field));
    let typing = !reveal.is_field_complete(field);

    if text.is_empty() && typing {
        return vec![Line::from(Span::styled("…", Style::default().fg(palette.muted)))];
    }

    let body_style = if field == ResultField::Final {
        Style::default().bg(palette.final_bg).fg(palette.foreground)
    } else {
        Style::default().fg(palette.foreground)
    };

    let mut lines: Vec<Line> = text
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), body_style)))
        .collect();
    if typing && let Some(last) = lines.last_mut() {
        last.push_span(Span::styled(TYPING_CURSOR, Style::default().fg(palette.muted)));
    }
    lines
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState, palette: &Palette) {
    let (status_text, style) = if let Some(msg) = state.status_message {
        let fg = match msg.message_type {
            MessageType::Success => palette.success,
            MessageType::Error => palette.error,
        };
        (format!(" {} ", msg.text), Style::default().fg(fg).bg(palette.status_bg))
    } else {
        let mut parts = vec![];
        if state.loading {
            parts.push("[THINKING]".to_string());
        }
        parts.push("Ctrl+R: regenerate".to_string());
        parts.push("Ctrl+O: compare".to_string());
        parts.push("Ctrl+Y: copy".to_string());
        parts.push("Ctrl+T: theme".to_string());
        parts.push("Esc: clear".to_string());
        parts.push("Ctrl+C: quit".to_string());
        (
            format!(" {} ", parts.join(" | ")),
            Style::default().fg(palette.foreground).bg(palette.status_bg),
        )
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}

fn render_notice(frame: &mut Frame, area: Rect, notice: &str, palette: &Palette) {
    let mut lines: Vec<Line> =
        sanitize_for_terminal(notice).split('\n').map(|l| Line::from(l.to_string())).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter / Esc: dismiss",
        Style::default().fg(palette.muted),
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.error))
                .title(" Error ")
                .style(Style::default().bg(palette.background).fg(palette.foreground)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn render_compare(
    frame: &mut Frame,
    area: Rect,
    overlay: &CompareOverlay,
    history: &HistoryStore,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.final_border))
        .title(" Compare final answers ")
        .style(Style::default().bg(palette.background).fg(palette.foreground));
    let inner = block.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let layout = CompareLayout::new(inner);
    render_picker(frame, layout.picker_a, Slot::A, overlay, history, palette);
    render_picker(frame, layout.picker_b, Slot::B, overlay, history, palette);

    let mode = match overlay.selection.mode {
        CompareMode::Side => "side by side",
        CompareMode::Diff => "diff",
    };
    frame.render_widget(
        Paragraph::new(format!(
            " Mode: {} | Tab: switch slot | ↑/↓: choose | Ctrl+D: mode | Esc: close ",
            mode
        ))
        .style(Style::default().fg(palette.muted)),
        layout.mode_area,
    );

    if !overlay.selection.is_complete() {
        frame.render_widget(
            Paragraph::new("Select a result in both slots to compare.")
                .style(Style::default().fg(palette.muted)),
            layout.content_area,
        );
        return;
    }

    let engine = ComparisonEngine::new(history);
    match overlay.selection.render(&engine) {
        ComparisonView::SideBySide { left, right } => {
            let (left_area, right_area) = split_columns(layout.content_area);
            render_column(frame, left_area, " A ", left, overlay.scroll, palette);
            render_column(frame, right_area, " B ", right, overlay.scroll, palette);
        }
        ComparisonView::Diff(segments) => {
            let paragraph = Paragraph::new(Text::from(diff_lines(&segments, palette)))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(palette.border))
                        .title(" A → B "),
                )
                .wrap(Wrap { trim: false })
                .scroll((overlay.scroll, 0));
            frame.render_widget(paragraph, layout.content_area);
        }
    }
}

fn render_picker(
    frame: &mut Frame,
    area: Rect,
    slot: Slot,
    overlay: &CompareOverlay,
    history: &HistoryStore,
    palette: &Palette,
) {
    let now = Local::now();
    let selected = overlay.selection.slot(slot);

    let items: Vec<ListItem> = history
        .iter()
        .map(|entry| {
            let preview = entry
                .result
                .final_answer
                .lines()
                .next()
                .unwrap_or("")
                .chars()
                .take(40)
                .collect::<String>();
            let content = format!(
                "{} | {}",
                entry_label(&entry.timestamp, &entry.created_at, &now),
                sanitize_for_terminal(&preview)
            );

            let style = if selected == Some(entry.id.as_str()) {
                Style::default()
                    .fg(palette.selection_fg)
                    .bg(palette.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.muted)
            };
            ListItem::new(content).style(style)
        })
        .collect();

    let border = if overlay.focus == slot { palette.final_border } else { palette.border };
    let title = match slot {
        Slot::A => " Result A ",
        Slot::B => " Result B ",
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(border)).title(title));

    // Scroll so the selected entry stays visible in the short picker
    let mut list_state = ListState::default().with_selected(selected.and_then(|id| history.position(id)));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_column(frame: &mut Frame, area: Rect, title: &str, text: &str, scroll: u16, palette: &Palette) {
    let lines: Vec<Line> =
        sanitize_for_terminal(text).split('\n').map(|l| Line::from(l.to_string())).collect();
    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(title.to_string()),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Lay diff segments out as styled lines: insertions highlighted, deletions struck through
pub fn diff_lines(segments: &[DiffSegment], palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for segment in segments {
        let style = match segment.op {
            DiffOp::Equal => Style::default().fg(palette.foreground),
            DiffOp::Insert => Style::default().fg(palette.foreground).bg(palette.inserted_bg),
            DiffOp::Delete => Style::default()
                .fg(palette.foreground)
                .bg(palette.deleted_bg)
                .add_modifier(Modifier::CROSSED_OUT),
        };

        let text = sanitize_for_terminal(&segment.text);
        for (idx, piece) in text.split('\n').enumerate() {
            if idx > 0 {
                lines.push(Line::from(std::mem::take(&mut current)));
            }
            if !piece.is_empty() {
                current.push(Span::styled(piece.to_string(), style));
            }
        }
    }

    lines.push(Line::from(current));
    lines
}
