//! TUI rendering using ratatui.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use triage_board::{allowed_targets, can_transition, Gesture};
use triage_models::{Report, Stage};

use super::app::{App, HitTarget};

/// Rows taken by one card, borders included.
const CARD_HEIGHT: u16 = 4;

const VIEW_LABEL: &str = "[view]";

/// Accent color of a stage's column.
fn stage_color(stage: Stage) -> Color {
    match stage {
        Stage::Pending => Color::Red,
        Stage::InProgress => Color::Yellow,
        Stage::Completed => Color::Green,
    }
}

/// Draw the TUI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    // Regions are rebuilt every frame
    app.clear_hit_regions();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(CARD_HEIGHT + 2), // Columns
            Constraint::Length(1), // Status
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    draw_columns(frame, app, chunks[1]);
    draw_status(frame, app, chunks[2]);
    draw_footer(frame, app, chunks[3]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(" Triage Board ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(" [{}]", app.active_source())),
    ];

    if app.board.is_read_only() {
        spans.push(Span::styled(
            " READ-ONLY",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }

    let refreshed = app
        .last_refresh
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());
    spans.push(Span::raw(format!("  refreshed {}", refreshed)));
    if app.is_refreshing() {
        spans.push(Span::styled(" (refreshing)", Style::default().fg(Color::Cyan)));
    }

    let header = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::Blue).fg(Color::White));
    frame.render_widget(header, area);
}

fn draw_columns(frame: &mut Frame, app: &mut App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for stage in Stage::ALL {
        draw_column(frame, app, stage, columns[stage.column()]);
    }
}

fn draw_column(frame: &mut Frame, app: &mut App, stage: Stage, area: Rect) {
    let gesture = app.board.gesture();
    let hovered = gesture.hover_target() == Some(stage);
    let color = stage_color(stage);
    let count = app.board.board().stage(stage).len();

    let border_style = if hovered {
        Style::default().fg(color).add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else if stage == app.selected_stage {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ({}) ", stage.label(), count));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.add_hit_region(area, HitTarget::Column(stage));

    if count == 0 {
        let hint = if app.board.is_read_only() {
            "No items"
        } else {
            "Drop here"
        };
        let placeholder = Paragraph::new(hint)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(placeholder, inner);
        return;
    }

    let visible = (inner.height / CARD_HEIGHT).max(1) as usize;
    let offset = if stage == app.selected_stage {
        app.cursor.saturating_sub(visible - 1)
    } else {
        0
    };

    let reports: Vec<Report> = app
        .board
        .board()
        .stage(stage)
        .iter()
        .skip(offset)
        .take(visible)
        .cloned()
        .collect();

    for (row, report) in reports.iter().enumerate() {
        let index = offset + row;
        let y = inner.y + row as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(inner.bottom().saturating_sub(y));
        if height < CARD_HEIGHT {
            break;
        }
        let card = Rect::new(inner.x, y, inner.width, height);
        let selected = stage == app.selected_stage && index == app.cursor;
        let dragged = gesture.source() == Some((stage, index));
        draw_card(frame, app, report, stage, index, card, selected, dragged);
    }

    let hidden = count.saturating_sub(offset + reports.len());
    if hidden > 0 && inner.height > 0 {
        let more = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
        let line = Paragraph::new(format!("+{} more", hidden))
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(line, more);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_card(
    frame: &mut Frame,
    app: &mut App,
    report: &Report,
    stage: Stage,
    index: usize,
    area: Rect,
    selected: bool,
    dragged: bool,
) {
    let border_style = if dragged {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.add_hit_region(area, HitTarget::Card { stage, index });

    if inner.height < 2 {
        return;
    }

    // Line 1: label and weight
    let mut title = vec![Span::styled(
        report.label.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if let Some(weight) = report.weight {
        let style = if report.is_escalated() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        title.push(Span::styled(format!("  ^ {}", weight), style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(title)),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    // Line 2: timestamp, escalation tag and the view action
    let line = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(VIEW_LABEL.len() as u16)])
        .split(Rect::new(inner.x, inner.y + 1, inner.width, 1));

    let mut details = vec![Span::styled(
        report.timestamp.clone(),
        Style::default().fg(Color::DarkGray),
    )];
    if report.is_escalated() {
        details.push(Span::styled(
            " Auto-escalated",
            Style::default().fg(Color::Red),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(details)), line[0]);

    let view = Paragraph::new(VIEW_LABEL).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED),
    );
    frame.render_widget(view, line[1]);
    app.add_hit_region(line[1], HitTarget::View { stage, index });
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match app.board.gesture() {
        Gesture::Idle => match &app.status {
            Some(status) if status.is_error => {
                (status.text.clone(), Style::default().fg(Color::Red))
            }
            Some(status) => (status.text.clone(), Style::default().fg(Color::Gray)),
            None => (String::new(), Style::default()),
        },
        Gesture::Dragging { .. } => (
            format!("Moving {}: release over a column", dragged_label(app)),
            Style::default().fg(Color::Cyan),
        ),
        Gesture::Hovering { source, target, .. } => {
            if source == target {
                (
                    format!("Moving {}: already in {}", dragged_label(app), target.label()),
                    Style::default().fg(Color::DarkGray),
                )
            } else if can_transition(source, target) {
                (
                    format!("Moving {}: {} -> {}", dragged_label(app), source.label(), target.label()),
                    Style::default().fg(Color::Cyan),
                )
            } else {
                (
                    format!(
                        "Moving {}: {} -> {} is not allowed, drop on {}",
                        dragged_label(app),
                        source.label(),
                        target.label(),
                        targets_phrase(source)
                    ),
                    Style::default().fg(Color::Yellow),
                )
            }
        }
    };

    frame.render_widget(Paragraph::new(format!(" {}", text)).style(style), area);
}

/// Stages a report in `source` may be dropped on, joined for display.
fn targets_phrase(source: Stage) -> String {
    allowed_targets(source)
        .iter()
        .map(|stage| stage.label())
        .collect::<Vec<_>>()
        .join(" or ")
}

fn dragged_label(app: &App) -> String {
    app.board
        .dragged_report()
        .map(|r| r.label.clone())
        .unwrap_or_else(|| "report".to_string())
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let keys = if !app.board.gesture().is_idle() {
        " Left/Right target | Enter drop | Esc cancel "
    } else if app.board.is_read_only() {
        " Arrows select | o open | r refresh | R reseed | m mock | q quit "
    } else {
        " Arrows select | Space grab | o open | r refresh | R reseed | m mock | q quit "
    };

    let footer = Paragraph::new(keys).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(footer, area);
}
