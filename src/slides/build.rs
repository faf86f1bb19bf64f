//! Slide builders: pure functions from content tables to slide specs.
//!
//! Each builder resolves its palette references through the injected theme
//! and derives per-item geometry with the layout algorithms; nothing here
//! performs I/O or looks at any other slide. Literal coordinates that are
//! genuinely one-off chrome (heading band, footer bar) stay literal; every
//! repeated region goes through `grid_rows`, `column_origins`, or
//! `panel_row`.

use super::content::*;
use crate::common::unit::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::common::{Align, Error, FontFace, Result, TextRun, TextStyle, VAlign};
use crate::deck::SlideSpec;
use crate::layout::{Frame, Primitive, Runs, column_origins, grid_rows, panel_row};
use crate::theme::Theme;

/// Slide heading in the standard position.
fn heading(text: &str, theme: &Theme) -> Result<Primitive> {
    Ok(Primitive::text(
        Frame::new(0.7, 0.4, 8.5, 0.7),
        text,
        TextStyle::new(FontFace::Georgia, 32.0, theme.color("navy")?).bold(),
    ))
}

/// Bulleted runs: every line gets a bullet, all but the last break the
/// paragraph.
fn bullet_runs(lines: &[String]) -> Runs {
    let mut runs = Runs::new();
    for (i, line) in lines.iter().enumerate() {
        let run = TextRun::bullet(line.clone());
        runs.push(if i + 1 < lines.len() { run.break_line() } else { run });
    }
    runs
}

/// Plain multi-line runs: all but the last line break the paragraph.
fn line_runs(lines: &[String]) -> Runs {
    let mut runs = Runs::new();
    for (i, line) in lines.iter().enumerate() {
        let run = TextRun::plain(line.clone());
        runs.push(if i + 1 < lines.len() { run.break_line() } else { run });
    }
    runs
}

/// Title slide: dark background, accent edge bar, footer band.
pub fn title(content: &TitleContent, theme: &Theme) -> Result<SlideSpec> {
    let mut spec = SlideSpec::new(theme.color("navy")?);

    spec.push(Primitive::rect(
        Frame::new(0.0, 0.0, 0.12, CANVAS_HEIGHT),
        theme.color("mint")?,
    ));
    spec.push(Primitive::text(
        Frame::new(0.8, 1.0, 8.5, 1.2),
        &content.title,
        TextStyle::new(FontFace::Georgia, 44.0, theme.color("white")?).bold(),
    ));
    spec.push(Primitive::text(
        Frame::new(0.8, 2.2, 8.5, 0.7),
        &content.subtitle,
        TextStyle::new(FontFace::Calibri, 22.0, theme.color("mint")?),
    ));
    spec.push(Primitive::text(
        Frame::new(0.8, 3.3, 8.5, 0.5),
        &content.tagline,
        TextStyle::new(FontFace::Calibri, 14.0, theme.color("light")?),
    ));
    spec.push(Primitive::rect(
        Frame::new(0.0, CANVAS_HEIGHT - 0.5, CANVAS_WIDTH, 0.5),
        theme.color("deep_blue")?,
    ));
    spec.push(Primitive::text(
        Frame::new(0.8, CANVAS_HEIGHT - 0.5, 8.5, 0.5),
        &content.date_line,
        TextStyle::new(FontFace::Calibri, 11.0, theme.color("teal")?).align(Align::Right),
    ));

    Ok(spec)
}

/// Comparison slide: co-equal panels of header band plus bullets.
pub fn comparison(content: &ComparisonContent, theme: &Theme) -> Result<SlideSpec> {
    let mut spec = SlideSpec::new(theme.color("off_white")?);
    spec.push(heading(&content.heading, theme)?);

    // Co-equal widths across the 8.6" body with a 0.4" gutter; two panels
    // come out at the classic 4.1".
    let count = content.panels.len();
    let width = if count > 0 {
        (8.6 - (count as f64 - 1.0) * 0.4) / count as f64
    } else {
        0.0
    };

    for (frame, panel) in panel_row(count, 0.7, width, 0.4, 1.5, 3.5)
        .into_iter()
        .zip(&content.panels)
    {
        let accent = theme.color(&panel.accent)?;
        spec.push(Primitive::card(frame, theme.color("white")?, theme.shadow()));
        let band = Frame::new(frame.x, frame.y, frame.w, 0.5);
        spec.push(Primitive::rect(band, accent));
        spec.push(Primitive::text(
            band,
            &panel.header,
            TextStyle::new(FontFace::Calibri, 14.0, theme.color("white")?)
                .bold()
                .align(Align::Center),
        ));
        spec.push(Primitive::text_runs(
            Frame::new(frame.x + 0.3, 2.2, frame.w - 0.6, 2.5),
            bullet_runs(&panel.bullets),
            TextStyle::new(FontFace::Calibri, 13.0, theme.color("dark_text")?).spacing(8.0),
        ));
    }

    Ok(spec)
}

/// Architecture diagram slide: container box, component cards on an equal
/// column grid, flow note, callout boxes.
pub fn diagram(content: &DiagramContent, theme: &Theme) -> Result<SlideSpec> {
    if content.components.is_empty() {
        return Err(Error::EmptyContent("diagram components"));
    }

    let mut spec = SlideSpec::new(theme.color("off_white")?);
    spec.push(heading(&content.heading, theme)?);

    spec.push(Primitive::card(
        Frame::new(0.5, 1.5, 9.0, 3.8),
        theme.color("white")?,
        theme.shadow(),
    ));
    spec.push(Primitive::text(
        Frame::new(0.8, 1.6, 8.5, 0.4),
        &content.container_label,
        TextStyle::new(FontFace::Consolas, 13.0, theme.color("deep_blue")?).bold(),
    ));

    for (column, component) in column_origins(content.components.len(), 0.8, 1.65)
        .into_iter()
        .zip(&content.components)
    {
        spec.push(Primitive::rect(
            Frame::new(column.x, 2.2, 1.5, 1.0),
            theme.color(&component.accent)?,
        ));
        spec.push(Primitive::text(
            Frame::new(column.x, 2.2, 1.5, 0.55),
            &component.name,
            TextStyle::new(FontFace::Calibri, 12.0, theme.color("white")?)
                .bold()
                .align(Align::Center)
                .anchor(VAlign::Bottom),
        ));
        spec.push(Primitive::text(
            Frame::new(column.x, 2.7, 1.5, 0.5),
            &component.desc,
            TextStyle::new(FontFace::Calibri, 9.0, theme.color("white")?).align(Align::Center),
        ));
    }

    spec.push(Primitive::text(
        Frame::new(0.8, 3.5, 8.5, 0.4),
        &content.flow_note,
        TextStyle::new(FontFace::Calibri, 10.0, theme.color("muted_text")?)
            .italic()
            .align(Align::Center),
    ));

    let count = content.callouts.len();
    let width = if count > 0 {
        (8.0 - (count as f64 - 1.0) * 1.0) / count as f64
    } else {
        0.0
    };
    for (frame, callout) in panel_row(count, 0.8, width, 1.0, 4.1, 0.9)
        .into_iter()
        .zip(&content.callouts)
    {
        spec.push(Primitive::rect(frame, theme.color("light")?));
        spec.push(Primitive::text(
            frame,
            callout,
            TextStyle::new(FontFace::Calibri, 11.0, theme.color("deep_blue")?)
                .align(Align::Center)
                .anchor(VAlign::Middle),
        ));
    }

    Ok(spec)
}

/// Tabular-list slide: striped rows of monospace key plus description.
pub fn table(content: &TableContent, theme: &Theme) -> Result<SlideSpec> {
    let mut spec = SlideSpec::new(theme.color("off_white")?);
    spec.push(heading(&content.heading, theme)?);

    let white = theme.color("white")?;
    let light = theme.color("light")?;
    for (row, entry) in grid_rows(content.rows.len(), 1.4, 0.55)
        .into_iter()
        .zip(&content.rows)
    {
        spec.push(Primitive::rect(
            Frame::new(0.7, row.y, 8.6, 0.48),
            row.stripe.pick(white, light),
        ));
        spec.push(Primitive::text(
            Frame::new(0.9, row.y, 2.0, 0.48),
            &entry.name,
            TextStyle::new(FontFace::Consolas, 12.0, theme.color("deep_blue")?)
                .bold()
                .anchor(VAlign::Middle),
        ));
        spec.push(Primitive::text(
            Frame::new(3.0, row.y, 6.1, 0.48),
            &entry.desc,
            TextStyle::new(FontFace::Calibri, 11.0, theme.color("dark_text")?)
                .anchor(VAlign::Middle),
        ));
    }

    Ok(spec)
}

/// Numbered-workflow slide: circled step markers above cards, equal column
/// stride, optional command bar.
pub fn workflow(content: &WorkflowContent, theme: &Theme) -> Result<SlideSpec> {
    let mut spec = SlideSpec::new(theme.color("off_white")?);
    spec.push(heading(&content.heading, theme)?);

    for (column, step) in column_origins(content.steps.len(), 0.5, 2.35)
        .into_iter()
        .zip(&content.steps)
    {
        let marker = Frame::new(column.x + 0.55, 1.5, 0.7, 0.7);
        spec.push(Primitive::oval(marker, theme.color("deep_blue")?));
        spec.push(Primitive::text(
            marker,
            (column.index + 1).to_string(),
            TextStyle::new(FontFace::Georgia, 22.0, theme.color("white")?)
                .bold()
                .align(Align::Center)
                .anchor(VAlign::Middle),
        ));
        spec.push(Primitive::card(
            Frame::new(column.x, 2.5, 2.1, 1.5),
            theme.color("white")?,
            theme.shadow(),
        ));
        spec.push(Primitive::text(
            Frame::new(column.x, 2.6, 2.1, 0.5),
            &step.title,
            TextStyle::new(FontFace::Calibri, 14.0, theme.color("navy")?)
                .bold()
                .align(Align::Center),
        ));
        spec.push(Primitive::text(
            Frame::new(column.x, 3.1, 2.1, 0.7),
            &step.desc,
            TextStyle::new(FontFace::Calibri, 11.0, theme.color("muted_text")?)
                .align(Align::Center),
        ));
    }

    if let Some(command) = &content.command {
        spec.push(Primitive::rect(
            Frame::new(0.7, 4.3, 8.6, 0.9),
            theme.color("navy")?,
        ));
        spec.push(Primitive::text(
            Frame::new(1.0, 4.3, 8.0, 0.9),
            command,
            TextStyle::new(FontFace::Consolas, 13.0, theme.color("mint")?).anchor(VAlign::Middle),
        ));
    }

    Ok(spec)
}

/// Issue/solution slide: full-width cards with a colored accent edge.
pub fn issues(content: &IssueListContent, theme: &Theme) -> Result<SlideSpec> {
    let mut spec = SlideSpec::new(theme.color("off_white")?);
    spec.push(heading(&content.heading, theme)?);

    for (row, entry) in grid_rows(content.rows.len(), 1.5, 1.3)
        .into_iter()
        .zip(&content.rows)
    {
        spec.push(Primitive::card(
            Frame::new(0.7, row.y, 8.6, 1.1),
            theme.color("white")?,
            theme.shadow(),
        ));
        spec.push(Primitive::rect(
            Frame::new(0.7, row.y, 0.1, 1.1),
            theme.color(&entry.accent)?,
        ));
        spec.push(Primitive::text(
            Frame::new(1.1, row.y, 3.5, 1.1),
            &entry.issue,
            TextStyle::new(FontFace::Calibri, 13.0, theme.color("dark_text")?)
                .bold()
                .anchor(VAlign::Middle),
        ));
        spec.push(Primitive::text(
            Frame::new(5.0, row.y, 4.0, 1.1),
            &entry.solution,
            TextStyle::new(FontFace::Calibri, 12.0, theme.color("dark_text")?)
                .anchor(VAlign::Middle),
        ));
    }

    Ok(spec)
}

/// Status-board slide: striped label rows with status chips, next-steps
/// bullets on the right.
pub fn status_board(content: &StatusBoardContent, theme: &Theme) -> Result<SlideSpec> {
    let mut spec = SlideSpec::new(theme.color("off_white")?);
    spec.push(heading(&content.heading, theme)?);

    let white = theme.color("white")?;
    let light = theme.color("light")?;
    for (row, entry) in grid_rows(content.rows.len(), 1.5, 0.6)
        .into_iter()
        .zip(&content.rows)
    {
        spec.push(Primitive::card(
            Frame::new(0.7, row.y, 5.5, 0.5),
            row.stripe.pick(white, light),
            theme.shadow(),
        ));
        spec.push(Primitive::text(
            Frame::new(1.0, row.y, 3.5, 0.5),
            &entry.label,
            TextStyle::new(FontFace::Calibri, 13.0, theme.color("dark_text")?)
                .anchor(VAlign::Middle),
        ));
        let chip = Frame::new(4.8, row.y + 0.12, 1.2, 0.26);
        spec.push(Primitive::rect(chip, theme.color(&entry.accent)?));
        spec.push(Primitive::text(
            chip,
            &entry.status,
            TextStyle::new(FontFace::Calibri, 9.0, theme.color("white")?)
                .bold()
                .align(Align::Center)
                .anchor(VAlign::Middle),
        ));
    }

    spec.push(Primitive::text(
        Frame::new(6.8, 1.5, 2.7, 0.5),
        &content.next_heading,
        TextStyle::new(FontFace::Calibri, 16.0, theme.color("navy")?).bold(),
    ));
    if !content.next_steps.is_empty() {
        spec.push(Primitive::text_runs(
            Frame::new(6.8, 2.0, 2.8, 2.5),
            bullet_runs(&content.next_steps),
            TextStyle::new(FontFace::Calibri, 12.0, theme.color("muted_text")?).spacing(6.0),
        ));
    }

    Ok(spec)
}

/// Closing slide: dark card with heading, monospace address and details.
pub fn closing(content: &ClosingContent, theme: &Theme) -> Result<SlideSpec> {
    let mut spec = SlideSpec::new(theme.color("navy")?);

    spec.push(Primitive::rect(
        Frame::new(0.0, 0.0, 0.12, CANVAS_HEIGHT),
        theme.color("mint")?,
    ));
    spec.push(Primitive::text(
        Frame::new(0.8, 1.5, 8.5, 1.0),
        &content.heading,
        TextStyle::new(FontFace::Georgia, 40.0, theme.color("white")?).bold(),
    ));
    spec.push(Primitive::text(
        Frame::new(0.8, 2.6, 8.5, 0.7),
        &content.address,
        TextStyle::new(FontFace::Consolas, 28.0, theme.color("mint")?),
    ));
    if !content.lines.is_empty() {
        spec.push(Primitive::text_runs(
            Frame::new(0.8, 3.5, 8.5, 1.5),
            line_runs(&content.lines),
            TextStyle::new(FontFace::Consolas, 12.0, theme.color("light")?).spacing(8.0),
        ));
    }
    spec.push(Primitive::rect(
        Frame::new(0.0, CANVAS_HEIGHT - 0.5, CANVAS_WIDTH, 0.5),
        theme.color("deep_blue")?,
    ));

    Ok(spec)
}
