use crate::calendar::Calendar;
use crate::model::{Grid, Window};
use chrono::{Datelike, Duration, NaiveDate, TimeZone};
use console::Style;
use std::io::{self, Write};

const HEADER_GUTTER: &str = "         ";
const BLANK_MONTH: &str = "    ";
const EMPTY_CELL: &str = "  - ";

/// Color band of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    Empty,
    Low,
    Medium,
    High,
    Today,
}

impl Intensity {
    pub fn classify(value: u32, today: bool) -> Self {
        if today {
            return Intensity::Today;
        }
        match value {
            0 => Intensity::Empty,
            1..=4 => Intensity::Low,
            5..=9 => Intensity::Medium,
            _ => Intensity::High,
        }
    }

    pub fn style(self) -> Style {
        match self {
            Intensity::Empty => Style::new().dim(),
            Intensity::Low => Style::new().bold().black().on_white(),
            Intensity::Medium => Style::new().bold().black().on_yellow(),
            Intensity::High => Style::new().bold().black().on_green(),
            Intensity::Today => Style::new().bold().white().on_magenta(),
        }
    }
}

/// Weekday gutter. Only every other day is named to keep the grid compact.
pub fn weekday_label(row: u32) -> &'static str {
    match row {
        1 => " Mon ",
        3 => " Wed ",
        5 => " Fri ",
        _ => "     ",
    }
}

/// Four columns wide for any count below 1000.
pub fn cell_text(value: u32) -> String {
    match value {
        0 => EMPTY_CELL.to_string(),
        1..=9 => format!("  {value} "),
        10..=99 => format!(" {value} "),
        _ => format!("{value} "),
    }
}

/// Draws the week x weekday grid with month and weekday labels.
#[derive(Debug, Clone)]
pub struct HeatmapRenderer {
    today: NaiveDate,
    window_start: NaiveDate,
    window: Window,
    offset: u32,
    styled: bool,
}

impl HeatmapRenderer {
    pub fn new<Tz: TimeZone>(calendar: &Calendar<Tz>) -> Self {
        Self {
            today: calendar.today(),
            window_start: calendar.window_start(),
            window: *calendar.window(),
            offset: calendar.week_offset(),
            styled: true,
        }
    }

    /// Emit ANSI colors or plain text, regardless of what the terminal supports.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn render<W: Write>(&self, grid: &Grid, out: &mut W) -> io::Result<()> {
        out.write_all(self.render_to_string(grid).as_bytes())?;
        out.flush()
    }

    pub fn render_to_string(&self, grid: &Grid) -> String {
        let mut buf = self.month_header();
        buf.push('\n');

        let today_row = self.offset - 1;
        for row in (0..7u32).rev() {
            buf.push_str(weekday_label(row));
            for week in (0..self.window.columns()).rev() {
                let is_today = week == 0 && row == today_row;
                let value = grid.cell(week, row as usize);
                buf.push_str(&self.cell(value, is_today));
            }
            buf.push('\n');
        }
        buf
    }

    /// One slot per week from the window start up to today; a month name is
    /// printed on the first week it appears in.
    pub fn month_header(&self) -> String {
        let mut header = String::from(HEADER_GUTTER);
        let mut step = self.window_start;
        let mut month = step.month();

        while step <= self.today {
            if step.month() != month {
                header.push_str(&format!("{} ", step.format("%b")));
                month = step.month();
            } else {
                header.push_str(BLANK_MONTH);
            }
            step += Duration::days(7);
        }
        header
    }

    fn cell(&self, value: u32, today: bool) -> String {
        let style = Intensity::classify(value, today)
            .style()
            .force_styling(self.styled);
        style.apply_to(cell_text(value)).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heat::{aggregate, build_grid, CommitAggregator};
    use crate::model::{CommitEvent, DayBucketMap};
    use chrono::{DateTime, FixedOffset};
    use pretty_assertions::assert_eq;

    const TODAY_CODE: &str = "\u{1b}[45m";

    fn at(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(y, m, d, 12, 0, 0)
            .single()
            .unwrap()
    }

    // Thursday, offset 3, so today is row 2 of week 0.
    fn calendar() -> Calendar<FixedOffset> {
        Calendar::new(at(2024, 6, 13), Window::default())
    }

    fn empty_grid(cal: &Calendar<FixedOffset>) -> Grid {
        build_grid(&DayBucketMap::new(cal.window()))
    }

    #[test]
    fn banding_thresholds() {
        assert_eq!(Intensity::classify(0, false), Intensity::Empty);
        assert_eq!(Intensity::classify(1, false), Intensity::Low);
        assert_eq!(Intensity::classify(4, false), Intensity::Low);
        assert_eq!(Intensity::classify(5, false), Intensity::Medium);
        assert_eq!(Intensity::classify(9, false), Intensity::Medium);
        assert_eq!(Intensity::classify(10, false), Intensity::High);
        assert_eq!(Intensity::classify(250, false), Intensity::High);
        assert_eq!(Intensity::classify(0, true), Intensity::Today);
        assert_eq!(Intensity::classify(12, true), Intensity::Today);
    }

    #[test]
    fn cells_stay_four_columns_wide() {
        assert_eq!(cell_text(0), "  - ");
        assert_eq!(cell_text(7), "  7 ");
        assert_eq!(cell_text(42), " 42 ");
        assert_eq!(cell_text(123), "123 ");
    }

    #[test]
    fn weekday_gutter_names_odd_rows() {
        let labels: Vec<&str> = (0..7).rev().map(weekday_label).collect();
        assert_eq!(
            labels,
            vec!["     ", " Fri ", "     ", " Wed ", "     ", " Mon ", "     "]
        );
    }

    #[test]
    fn month_names_appear_once_at_their_first_week() {
        let renderer = HeatmapRenderer::new(&calendar());
        let header = renderer.month_header();

        // 2023-12-13 through 2024-06-12 in weekly steps: 27 slots.
        assert_eq!(header.len(), 9 + 27 * 4);
        assert_eq!(
            header.split_whitespace().collect::<Vec<_>>(),
            vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
        );
        assert_eq!(header.find("Jan"), Some(9 + 3 * 4));
    }

    #[test]
    fn empty_history_renders_one_highlighted_cell() {
        let cal = calendar();
        let grid = empty_grid(&cal);
        let out = HeatmapRenderer::new(&cal).render_to_string(&grid);
        assert_eq!(out.matches(TODAY_CODE).count(), 1);

        let plain = HeatmapRenderer::new(&cal).styled(false).render_to_string(&grid);
        let lines: Vec<&str> = plain.lines().collect();
        assert_eq!(lines.len(), 8);
        for line in &lines[1..] {
            assert_eq!(line.len(), 5 + 28 * 4);
            assert_eq!(line[5..].matches("  - ").count(), 28);
        }
    }

    #[test]
    fn commit_today_uses_the_today_highlight() {
        let cal = calendar();
        let today = CommitEvent::new(at(2024, 6, 13), "me@example.com");
        let buckets = aggregate(&cal, "me@example.com", vec![today]);
        let grid = build_grid(&buckets);
        let out = HeatmapRenderer::new(&cal).render_to_string(&grid);

        let highlighted = Intensity::Today.style().force_styling(true).apply_to("  1 ").to_string();
        let banded = Intensity::Low.style().force_styling(true).apply_to("  1 ").to_string();
        assert_eq!(out.matches(&highlighted).count(), 1);
        assert!(!out.contains(&banded));

        let plain = HeatmapRenderer::new(&cal).styled(false).render_to_string(&grid);
        let today_line = plain.lines().nth(5).unwrap();
        assert!(today_line.ends_with("  1 "));
    }

    fn plain_cell(plain: &str, week: u32, row: u32) -> &str {
        let line = plain.lines().nth(1 + (6 - row) as usize).unwrap();
        let start = 5 + (27 - week) as usize * 4;
        &line[start..start + 4]
    }

    #[test]
    fn commit_today_lands_in_the_today_cell_on_every_weekday() {
        let monday = at(2024, 6, 10);
        for i in 0..7 {
            let now = monday + Duration::days(i);
            let cal = Calendar::new(now, Window::default());
            let offset = cal.week_offset();

            let mut aggregator = CommitAggregator::new(&cal, "me@example.com");
            let bucket = aggregator.record(&CommitEvent::new(now, "me@example.com"));
            assert_eq!(bucket, Some(offset), "{}", now.weekday());
            let grid = build_grid(&aggregator.finish());

            let plain = HeatmapRenderer::new(&cal).styled(false).render_to_string(&grid);
            assert_eq!(plain.matches("  1 ").count(), 1, "{}", now.weekday());
            let styled = HeatmapRenderer::new(&cal).render_to_string(&grid);
            assert_eq!(styled.matches(TODAY_CODE).count(), 1, "{}", now.weekday());

            if offset < 7 {
                assert_eq!(plain_cell(&plain, 0, offset - 1), "  1 ", "{}", now.weekday());
                let highlighted = Intensity::Today
                    .style()
                    .force_styling(true)
                    .apply_to("  1 ")
                    .to_string();
                assert_eq!(styled.matches(&highlighted).count(), 1, "{}", now.weekday());
            } else {
                // Sunday: the count moves to the first day of week 1 and the
                // highlight sits on an empty cell.
                assert_eq!(plain_cell(&plain, 1, 0), "  1 ");
                assert_eq!(plain_cell(&plain, 0, 6), "  - ");
                let highlighted = Intensity::Today
                    .style()
                    .force_styling(true)
                    .apply_to("  - ")
                    .to_string();
                assert_eq!(styled.matches(&highlighted).count(), 1);
            }
        }
    }

    #[test]
    fn oldest_weeks_print_first() {
        let cal = calendar();
        let mut buckets = DayBucketMap::new(cal.window());
        // Week 25, third day.
        for _ in 0..12 {
            buckets.increment(25 * 7 + 2);
        }
        let grid = build_grid(&buckets);
        let plain = HeatmapRenderer::new(&cal).styled(false).render_to_string(&grid);
        let row = plain.lines().nth(5).unwrap();
        // Columns run 27, 26, 25, ... so week 25 is the third cell.
        assert_eq!(&row[5 + 2 * 4..5 + 3 * 4], " 12 ");
    }

    #[test]
    fn sunday_highlights_the_missing_seventh_row() {
        let cal = Calendar::new(at(2024, 6, 16), Window::default());
        assert_eq!(cal.week_offset(), 7);
        let grid = empty_grid(&cal);
        let out = HeatmapRenderer::new(&cal).render_to_string(&grid);
        assert_eq!(out.matches(TODAY_CODE).count(), 1);

        let plain = HeatmapRenderer::new(&cal).styled(false).render_to_string(&grid);
        assert!(plain.lines().nth(1).unwrap().ends_with("  - "));
    }

    #[test]
    fn rendering_is_deterministic() {
        let cal = calendar();
        let mut buckets = DayBucketMap::new(cal.window());
        for day in [4, 9, 9, 40, 41, 120] {
            buckets.increment(day);
        }
        let grid = build_grid(&buckets);
        let renderer = HeatmapRenderer::new(&cal);

        let mut first = Vec::new();
        let mut second = Vec::new();
        renderer.render(&grid, &mut first).unwrap();
        renderer.render(&grid, &mut second).unwrap();
        assert_eq!(first, second);
    }
}
