//! Markdown rendering for generated documents.

use crate::error::Result;
use crate::model::{Block, Document, ListInfo, Paragraph, Table, TextRun, TextStyle};

use super::RenderOptions;

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
    in_list: bool,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            in_list: false,
        }
    }

    /// Render a document to Markdown.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        let result = self.render_internal(doc)?;
        Ok(result)
    }

    fn render_internal(&mut self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&doc.metadata.to_yaml_frontmatter());
            output.push('\n');
        }

        for block in doc.blocks() {
            self.render_block(&mut output, block);
        }

        Ok(format!("{}\n", output.trim()))
    }

    fn render_block(&mut self, output: &mut String, block: &Block) {
        let continues_list = matches!(block, Block::Paragraph(p) if p.is_list_item());
        if self.in_list && !continues_list {
            output.push('\n');
            self.in_list = false;
        }

        match block {
            Block::Paragraph(p) => self.render_paragraph(output, p),
            Block::Table(t) => self.render_table(output, t),
            Block::PageBreak => {
                if self.options.page_break_rule {
                    output.push_str("---\n\n");
                }
            }
        }
    }

    fn render_paragraph(&mut self, output: &mut String, para: &Paragraph) {
        if para.is_empty() {
            return;
        }

        if let Some(level) = para.heading_level() {
            let level = level.min(self.options.max_heading_level);
            output.push_str(&"#".repeat(level as usize));
            output.push(' ');
            output.push_str(&self.escape(&para.plain_text()));
            output.push_str("\n\n");
            return;
        }

        if let Some(ref list_info) = para.style.list_info {
            self.render_list_item(output, para, list_info);
            self.in_list = true;
            return;
        }

        if para.is_code_block() {
            output.push_str("```\n");
            output.push_str(&para.plain_text());
            output.push_str("\n```\n\n");
            return;
        }

        self.render_runs(output, para.runs());
        output.push_str("\n\n");
    }

    fn render_list_item(&self, output: &mut String, para: &Paragraph, list_info: &ListInfo) {
        output.push_str(&"  ".repeat(list_info.level as usize));
        output.push(self.options.list_marker);
        output.push(' ');
        self.render_runs(output, para.runs());
        output.push('\n');
    }

    fn render_runs(&self, output: &mut String, runs: &[TextRun]) {
        let mut line = String::new();
        for run in runs {
            let text = self.escape(&run.text);
            line.push_str(&apply_text_style(&text, &run.style));
        }
        output.push_str(line.trim_end().replace('\n', "  \n").as_str());
    }

    fn render_table(&self, output: &mut String, table: &Table) {
        if table.is_empty() || table.column_count() == 0 {
            return;
        }

        for (i, row) in table.rows.iter().enumerate() {
            output.push('|');
            for cell in &row.cells {
                let content = self.escape(cell.plain_text().trim()).replace('\n', "<br>");
                output.push_str(&format!(" {} |", content));
            }
            output.push('\n');

            // Separator after the last header row, or after row 0 if none is marked
            let header_end = (table.header_rows as usize).max(1) - 1;
            if i == header_end {
                output.push('|');
                for _ in &row.cells {
                    output.push_str(" --- |");
                }
                output.push('\n');
            }
        }

        output.push('\n');
    }

    fn escape(&self, text: &str) -> String {
        if self.options.escape_special_chars {
            escape_markdown(text)
        } else {
            text.to_string()
        }
    }
}

/// Wrap text in emphasis markers, keeping surrounding whitespace outside.
fn apply_text_style(text: &str, style: &TextStyle) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() || (!style.bold && !style.italic) {
        return text.to_string();
    }

    let start = text.len() - text.trim_start().len();
    let end = start + trimmed.len();

    let mut inner = trimmed.to_string();
    if style.italic {
        inner = format!("*{}*", inner);
    }
    if style.bold {
        inner = format!("**{}**", inner);
    }
    format!("{}{}{}", &text[..start], inner, &text[end..])
}

/// Escape special Markdown characters.
/// Only escape characters that could be misinterpreted as Markdown syntax.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}
