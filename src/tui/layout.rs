use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout
pub struct AppLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub provider_area: Rect,
    pub results_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Stack: header row, input band (question 65% | provider 35%), results, status row
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(7), // Question + provider
                Constraint::Min(3),    // Staged results
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let input_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(vertical_chunks[1]);

        Self {
            header_area: vertical_chunks[0],
            question_area: input_chunks[0],
            provider_area: input_chunks[1],
            results_area: vertical_chunks[2],
            status_area: vertical_chunks[3],
        }
    }
}

/// Comparison overlay layout
pub struct CompareLayout {
    pub picker_a: Rect,
    pub picker_b: Rect,
    pub mode_area: Rect,
    pub content_area: Rect,
}

impl CompareLayout {
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8), // Entry pickers
                Constraint::Length(1), // Mode line
                Constraint::Min(3),    // Comparison body
            ])
            .split(area);

        let pickers = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical_chunks[0]);

        Self {
            picker_a: pickers[0],
            picker_b: pickers[1],
            mode_area: vertical_chunks[1],
            content_area: vertical_chunks[2],
        }
    }
}

/// Split a comparison body into two equal columns
pub fn split_columns(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Rectangle of the given percentage size centred in `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
