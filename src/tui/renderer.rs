//! Rendering for the calculator form and output cards.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::{input_field_spec, InputField, RecalcMode, OUTPUT_SPECS};
use crate::formatting::display_or_dash;

use super::app::App;
use super::theme::Theme;

/// Layout based on terminal width: side-by-side panels when there is room,
/// stacked otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LayoutMode {
    Wide,
    Stacked,
}

impl LayoutMode {
    fn from_terminal_width(width: u16) -> Self {
        if width >= 80 {
            Self::Wide
        } else {
            Self::Stacked
        }
    }
}

/// Render the full interface.
pub fn render(frame: &mut Frame, app: &App) {
    let theme = Theme::for_mode(app.theme_mode());
    let area = frame.area();

    // Paint the background before anything else so the light theme covers
    // the whole screen.
    frame.render_widget(Block::default().style(theme.base_style()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Title line
            Constraint::Min(10),   // Form + results
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_header(frame, app, &theme, chunks[0]);
    render_body(frame, app, &theme, chunks[1]);
    render_footer(frame, app, &theme, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let mode_tag = match app.mode() {
        RecalcMode::Reactive => "reactive",
        RecalcMode::Deferred => "deferred",
    };

    let title_line = Line::from(vec![
        Span::styled("adplan", theme.title_style()),
        Span::raw("  "),
        Span::styled("Campaign Calculator", theme.value_style()),
        Span::raw("  "),
        Span::styled(mode_tag, theme.hint_style()),
    ]);

    frame.render_widget(Paragraph::new(title_line), area);
}

fn render_body(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let (form_area, results_area) = match LayoutMode::from_terminal_width(area.width) {
        LayoutMode::Wide => {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);
            (halves[0], halves[1])
        }
        LayoutMode::Stacked => {
            let halves = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);
            (halves[0], halves[1])
        }
    };

    render_form(frame, app, theme, form_area);
    render_results(frame, app, theme, results_area);
}

fn render_form(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let block = Block::default()
        .title("Campaign Parameters")
        .borders(Borders::ALL)
        .border_style(theme.border_style());

    let mut lines = Vec::new();
    for (i, field) in InputField::ALL.iter().enumerate() {
        let spec = input_field_spec(*field);
        let focused = i == app.focused_index();
        let marker = if focused { "▸ " } else { "  " };

        lines.push(Line::from(vec![
            Span::styled(marker, theme.label_style(focused)),
            Span::styled(spec.label, theme.label_style(focused)),
        ]));

        let editor = app.editor(i);
        let value_line = if editor.is_empty() {
            Line::from(vec![
                Span::raw("    "),
                Span::styled(spec.placeholder, theme.placeholder_style()),
            ])
        } else {
            let mut spans = vec![
                Span::raw("    "),
                Span::styled(editor.text().to_string(), theme.value_style()),
            ];
            if focused {
                spans.push(Span::styled("▏", theme.label_style(true)));
            }
            Line::from(spans)
        };
        lines.push(value_line);
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_results(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let title = if app.is_stale() {
        "Calculated Results (stale)"
    } else {
        "Calculated Results"
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if app.is_stale() {
            theme.stale_style()
        } else {
            theme.border_style()
        });

    let mut lines = Vec::new();
    for spec in &OUTPUT_SPECS {
        let value = display_or_dash(spec.kind, spec.value(app.outputs()));

        lines.push(Line::from(vec![
            Span::styled(spec.title, theme.label_style(false)),
            Span::raw("  "),
            Span::styled(value, theme.accent_style(spec.accent)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(spec.description, theme.hint_style()),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_footer(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let mut hints = String::from("tab/↑↓ move · 0-9. edit · +/- step · r reset · t theme · q quit");
    if app.mode() == RecalcMode::Deferred {
        hints.insert_str(0, "enter calculate · ");
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hints, theme.hint_style()))),
        area,
    );
}
