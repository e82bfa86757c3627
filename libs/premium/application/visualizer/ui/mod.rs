//! UI widgets for the dashboard

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use super::app::{Dashboard, TickStatus};

const POSITIVE_COLOR: Color = Color::Green;
const NEGATIVE_COLOR: Color = Color::Red;

/// Draw the main UI layout
pub fn draw(frame: &mut Frame, dashboard: &Dashboard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Metrics row
            Constraint::Min(0),    // Chart
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    draw_header(frame, dashboard, chunks[0]);
    draw_metrics(frame, dashboard, chunks[1]);
    draw_chart(frame, dashboard, chunks[2]);
    draw_footer(frame, dashboard, chunks[3]);
}

fn draw_header(frame: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let (status, status_color) = match &dashboard.status {
        TickStatus::Starting => ("Starting...", Color::Yellow),
        TickStatus::Live => ("Live", Color::Green),
        TickStatus::Pending { .. } => ("Data pending", Color::Yellow),
    };

    let header_text = format!(
        " Status: {} | Sources: Binance P2P & Yahoo Finance | Samples: {}",
        status,
        dashboard.samples.len()
    );

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(status_color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" USDT Premium Monitor "),
        );

    frame.render_widget(header, area);
}

fn draw_metrics(frame: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let (premium, mid, rate) = match dashboard.latest() {
        Some(sample) => (
            format!("{:+.2}%", sample.premium_rate),
            format!("\u{a5}{:.3}", sample.usdt_mid),
            format!("\u{a5}{:.4}", sample.usd_cny),
        ),
        None => ("--".to_string(), "--".to_string(), "--".to_string()),
    };

    let premium_color = match dashboard.latest() {
        Some(sample) if sample.premium_rate > 0.0 => POSITIVE_COLOR,
        Some(_) => NEGATIVE_COLOR,
        None => Color::DarkGray,
    };

    draw_metric(frame, " USDT Premium ", &premium, premium_color, columns[0]);
    draw_metric(frame, " Binance USDT ", &mid, Color::White, columns[1]);
    draw_metric(frame, " USD Rate ", &rate, Color::White, columns[2]);
}

fn draw_metric(frame: &mut Frame, title: &str, value: &str, color: Color, area: Rect) {
    let widget = Paragraph::new(format!(" {}", value))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(widget, area);
}

fn draw_chart(frame: &mut Frame, dashboard: &Dashboard, area: Rect) {
    if dashboard.samples.is_empty() {
        let empty = Paragraph::new(" Waiting for the first sample...").block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Premium History "),
        );
        frame.render_widget(empty, area);
        return;
    }

    let points = dashboard.chart_points();
    let x_max = (points.len().saturating_sub(1)).max(1) as f64;
    let [y_min, y_max] = dashboard.premium_bounds();

    // Line color follows the sign of the latest premium
    let line_color = match dashboard.latest() {
        Some(sample) if sample.premium_rate > 0.0 => POSITIVE_COLOR,
        _ => NEGATIVE_COLOR,
    };

    let baseline = [(0.0, 0.0), (x_max, 0.0)];

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&baseline),
        Dataset::default()
            .name("premium %")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(line_color))
            .data(&points),
    ];

    let x_labels: Vec<String> = match (dashboard.samples.first(), dashboard.samples.last()) {
        (Some(first), Some(last)) => vec![first.time_label(), last.time_label()],
        _ => Vec::new(),
    };

    let y_labels = vec![
        format!("{:+.2}", y_min),
        "+0.00".to_string(),
        format!("{:+.2}", y_max),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Premium History "),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

fn draw_footer(frame: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let footer_text = match &dashboard.status {
        TickStatus::Pending { since } => format!(
            " [{}] Data pending, waiting for sources... | q=quit r=refresh",
            since.format("%H:%M:%S")
        ),
        _ => " q=quit r=refresh now".to_string(),
    };

    let footer_style = match &dashboard.status {
        TickStatus::Pending { .. } => Style::default().fg(Color::Yellow),
        _ => Style::default(),
    };

    let footer = Paragraph::new(footer_text)
        .style(footer_style)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}
