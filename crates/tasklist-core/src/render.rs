use std::io::{self, IsTerminal, Write};

use tasklist_shared::{COMPLETED_MARKER, EditForm, Task};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// Colors only when stdout is a terminal.
    pub fn new() -> Self {
        Self {
            color: io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    #[tracing::instrument(skip(self, tasks))]
    pub fn print_task_table(&self, tasks: &[Task]) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        self.write_task_table(&mut out, tasks)
    }

    pub fn write_task_table<W: Write>(&self, mut out: W, tasks: &[Task]) -> anyhow::Result<()> {
        if tasks.is_empty() {
            writeln!(out, "No tasks.")?;
            return Ok(());
        }

        let headers = vec![
            "ID".to_string(),
            "Title".to_string(),
            "Description".to_string(),
            "Status".to_string(),
        ];

        let rows = tasks
            .iter()
            .map(|task| {
                let status = if task.completed {
                    self.paint(COMPLETED_MARKER, "32")
                } else {
                    String::new()
                };
                vec![
                    self.paint(&task.id.to_string(), "33"),
                    task.title.clone(),
                    task.description.clone(),
                    status,
                ]
            })
            .collect();

        write_table(&mut out, headers, rows)?;
        Ok(())
    }

    #[tracing::instrument(skip(self, form))]
    pub fn print_edit_form(&self, form: &EditForm) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        self.write_edit_form(&mut out, form)
    }

    pub fn write_edit_form<W: Write>(&self, mut out: W, form: &EditForm) -> anyhow::Result<()> {
        writeln!(out, "id           {}", form.id)?;
        writeln!(out, "title        {}", form.title)?;
        writeln!(out, "description  {}", form.description)?;
        writeln!(out, "completed    {}", if form.completed { "yes" } else { "no" })?;
        Ok(())
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn write_table<W: Write>(
    mut writer: W,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
) -> anyhow::Result<()> {
    let column_count = headers.len();
    let mut widths = vec![0usize; column_count];

    for (idx, header) in headers.iter().enumerate() {
        widths[idx] = widths[idx].max(UnicodeWidthStr::width(header.as_str()));
    }

    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(UnicodeWidthStr::width(strip_ansi(cell).as_str()));
        }
    }

    for (header, width) in headers.iter().zip(&widths) {
        write!(writer, "{header:width$} ", width = *width)?;
    }
    writeln!(writer)?;

    for width in &widths {
        write!(writer, "{:-<width$} ", "", width = *width)?;
    }
    writeln!(writer)?;

    for row in rows {
        for (cell, width) in row.iter().zip(&widths) {
            let visible_width = UnicodeWidthStr::width(strip_ansi(cell).as_str());
            let padding = width.saturating_sub(visible_width);
            write!(writer, "{}{} ", cell, " ".repeat(padding))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut escaped = false;

    for ch in s.chars() {
        if escaped {
            if ch == 'm' {
                escaped = false;
            }
            continue;
        }

        if ch == '\x1b' {
            escaped = true;
            continue;
        }

        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use tasklist_shared::TaskId;

    use super::*;

    fn render(tasks: &[Task]) -> String {
        let mut buf = Vec::new();
        Renderer::plain()
            .write_task_table(&mut buf, tasks)
            .expect("render table");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn completed_rows_carry_the_marker() {
        let out = render(&[
            Task {
                id: TaskId::Number(1),
                title: "Buy milk".to_string(),
                description: "2%".to_string(),
                completed: false,
            },
            Task {
                id: TaskId::Number(2),
                title: "Walk dog".to_string(),
                description: String::new(),
                completed: true,
            },
        ]);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].contains("Buy milk"));
        assert!(!lines[2].contains(COMPLETED_MARKER));
        assert!(lines[3].contains("Walk dog"));
        assert!(lines[3].contains(COMPLETED_MARKER));
    }

    #[test]
    fn empty_list_says_so() {
        assert_eq!(render(&[]), "No tasks.\n");
    }

    #[test]
    fn strip_ansi_keeps_visible_text() {
        assert_eq!(strip_ansi("\x1b[32m(Completed)\x1b[0m"), "(Completed)");
    }

    #[test]
    fn edit_form_lists_every_field() {
        let mut buf = Vec::new();
        Renderer::plain()
            .write_edit_form(
                &mut buf,
                &EditForm {
                    id: TaskId::Text("abc".to_string()),
                    title: "t".to_string(),
                    description: "d".to_string(),
                    completed: true,
                },
            )
            .expect("render form");
        let out = String::from_utf8(buf).expect("utf8");
        assert!(out.contains("id           abc"));
        assert!(out.contains("completed    yes"));
    }
}
