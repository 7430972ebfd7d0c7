use colored::Colorize;
use console::measure_text_width;

/// Display utilities for the CLI interface
///
/// Color is decided per stream: `use_color` for stdout output, `use_color_stderr`
/// for errors and warnings.
#[derive(Debug, Clone, Copy)]
pub struct DisplayHelper {
    pub use_color: bool,
    pub use_color_stderr: bool,
}

impl DisplayHelper {
    /// Create a new DisplayHelper using the same color setting on both streams
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            use_color_stderr: use_color,
        }
    }

    /// Override the color setting for stderr
    pub fn with_stderr_color(mut self, use_color_stderr: bool) -> Self {
        self.use_color_stderr = use_color_stderr;
        self
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.use_color {
            println!("{} {}", "✓".green().bold(), message);
        } else {
            println!("[SUCCESS] {}", message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.format_error(message));
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        eprintln!("{}", self.format_warning(message));
    }

    /// Format an error line for stderr
    pub fn format_error(&self, message: &str) -> String {
        if self.use_color_stderr {
            format!("{} {}", "Error:".red().bold(), message)
        } else {
            format!("[ERROR] {}", message)
        }
    }

    /// Format a warning line for stderr
    pub fn format_warning(&self, message: &str) -> String {
        if self.use_color_stderr {
            format!("{} {}", "⚠".yellow().bold(), message)
        } else {
            format!("[WARNING] {}", message)
        }
    }

    /// Whether any stream is colored
    pub fn any_color(&self) -> bool {
        self.use_color || self.use_color_stderr
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.use_color {
            println!("{} {}", "::".blue().bold(), message);
        } else {
            println!("[INFO] {}", message);
        }
    }

    /// Format a file path with appropriate styling
    pub fn format_path(&self, path: &str) -> String {
        if self.use_color {
            path.cyan().to_string()
        } else {
            format!("'{}'", path)
        }
    }

    /// Format a project or repository name
    pub fn format_name(&self, name: &str) -> String {
        if self.use_color {
            name.bold().to_string()
        } else {
            name.to_string()
        }
    }

    /// Print a bordered table
    pub fn print_table(&self, headers: &[&str], rows: &[Vec<String>]) {
        println!("{}", self.render_table(headers, rows));
    }

    /// Render a bordered table with a header row
    pub fn render_table(&self, headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut col_widths: Vec<usize> = headers.iter().map(|h| measure_text_width(h)).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if i < col_widths.len() {
                    col_widths[i] = col_widths[i].max(measure_text_width(cell));
                }
            }
        }

        let (h, v, top, mid, bottom) = if self.use_color {
            ("─", "│", ["┌", "┬", "┐"], ["├", "┼", "┤"], ["└", "┴", "┘"])
        } else {
            ("-", "|", ["+", "+", "+"], ["+", "+", "+"], ["+", "+", "+"])
        };

        let border = |corners: [&str; 3]| {
            let segments: Vec<String> = col_widths.iter().map(|w| h.repeat(w + 2)).collect();
            format!("{}{}{}", corners[0], segments.join(corners[1]), corners[2])
        };

        let line = |cells: Vec<String>| {
            let padded: Vec<String> = cells
                .into_iter()
                .enumerate()
                .map(|(i, cell)| {
                    let width = col_widths.get(i).copied().unwrap_or(0);
                    let pad = width.saturating_sub(measure_text_width(&cell));
                    format!(" {}{} ", cell, " ".repeat(pad))
                })
                .collect();
            format!("{}{}{}", v, padded.join(v), v)
        };

        let header_cells: Vec<String> = headers
            .iter()
            .map(|header| {
                if self.use_color {
                    header.bold().to_string()
                } else {
                    header.to_string()
                }
            })
            .collect();

        let mut lines = vec![border(top), line(header_cells), border(mid)];
        for row in rows {
            let mut cells = row.clone();
            cells.resize(headers.len(), String::new());
            lines.push(line(cells));
        }
        lines.push(border(bottom));
        lines.join("\n")
    }
}

/// Helper functions for common display patterns
pub mod helpers {
    use super::*;

    /// Create a display helper with color detection for stdout and stderr
    pub fn auto_display(no_color: bool) -> DisplayHelper {
        let disabled = no_color || std::env::var_os("NO_COLOR").is_some();
        DisplayHelper::new(!disabled && atty::is(atty::Stream::Stdout))
            .with_stderr_color(!disabled && atty::is(atty::Stream::Stderr))
    }
}
