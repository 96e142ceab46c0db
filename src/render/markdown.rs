//! Markdown rendering for specification documents.

use crate::error::Result;
use crate::model::{Document, Head, ListKind, ParagraphKind, SpanStyle};

use super::numbering::OutlineEntry;
use super::walker::{
    walk, Backend, BlockStyle, GrammarToken, Heading, ListMarker, RuleLayout, Segment,
};
use super::{RenderOptions, RenderResult};

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render_with_stats(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to Markdown.
    pub fn render(self, doc: &Document) -> Result<String> {
        let (output, _) = walk(doc, &self.options, MarkdownBackend::new(&self.options));
        Ok(output)
    }

    /// Render a document to Markdown with rendering statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let (content, stats) = walk(doc, &self.options, MarkdownBackend::new(&self.options));
        log::debug!(
            "rendered {} sections and {} paragraphs to Markdown",
            stats.section_count,
            stats.paragraph_count
        );
        Ok(RenderResult::new(content, doc.head.clone(), stats))
    }
}

/// Markdown leaf emission.
pub(crate) struct MarkdownBackend<'a> {
    options: &'a RenderOptions,
    output: String,
    /// Content widths of the open list items, outermost first
    indents: Vec<usize>,
    first_rule: bool,
}

impl<'a> MarkdownBackend<'a> {
    pub(crate) fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            output: String::new(),
            indents: Vec::new(),
            first_rule: true,
        }
    }

    fn indent(&self) -> usize {
        self.indents.iter().sum()
    }

    fn marker_text(&self, marker: &ListMarker) -> String {
        match marker.kind {
            ListKind::Bulleted => self.options.list_marker.to_string(),
            ListKind::Numbered => format!("{}.", marker.ordinal),
        }
    }

    /// Push text line by line, indenting every non-empty line.
    fn push_lines(&mut self, text: &str, indent: usize) {
        for line in text.split('\n') {
            if !line.is_empty() {
                self.output.push_str(&" ".repeat(indent));
                self.output.push_str(line);
            }
            self.output.push('\n');
        }
    }

    fn escape(&self, text: &str) -> String {
        if self.options.escape_special_chars {
            escape_markdown(text)
        } else {
            text.to_string()
        }
    }

    fn render_inline(&self, segments: &[Segment], code: bool) -> String {
        let mut result = String::new();
        for segment in segments {
            match segment {
                Segment::LineBreak if code => result.push('\n'),
                Segment::LineBreak => result.push_str("<br/>"),
                Segment::Text { text, .. } if code => result.push_str(text),
                Segment::Text { text, style: None } => result.push_str(&self.escape(text)),
                Segment::Text {
                    text,
                    style: Some(style),
                } => result.push_str(&self.apply_span_style(text, *style)),
            }
        }
        result
    }

    fn apply_span_style(&self, text: &str, style: SpanStyle) -> String {
        match style {
            SpanStyle::Code => code_span(text),
            SpanStyle::Emphasis | SpanStyle::Label => format!("**{}**", self.escape(text)),
            SpanStyle::Italic | SpanStyle::Reference | SpanStyle::Definition => {
                format!("*{}*", self.escape(text))
            }
            SpanStyle::BoldItalic => format!("**_{}_**", self.escape(text)),
            SpanStyle::Subscript => format!("<sub>{}</sub>", self.escape(text)),
            SpanStyle::Superscript => format!("<sup>{}</sup>", self.escape(text)),
            SpanStyle::Strikethrough => format!("~~{}~~", self.escape(text)),
        }
    }
}

impl Backend for MarkdownBackend<'_> {
    type Output = String;

    fn title(&mut self, head: &Head) {
        let lines = [
            head.title.as_ref().map(|title| format!("# {}", title)),
            head.version.clone(),
            head.status().map(str::to_string),
            head.author.clone(),
        ];
        for line in lines.into_iter().flatten() {
            self.output.push_str(&line);
            self.output.push_str("\n\n");
        }
        self.output.push_str("<br/>\n\n");
    }

    fn contents(&mut self, outline: &[OutlineEntry]) {
        self.output.push_str("## Table of Contents\n\n");
        for entry in outline {
            self.output.push_str(&format!(
                "{}{} [{} {}](#{})\n",
                "  ".repeat(entry.depth() - 1),
                self.options.list_marker,
                entry.number,
                entry.title,
                entry.number
            ));
        }
        self.output.push_str("\n<br/>\n\n");
    }

    fn begin_section(&mut self, heading: &Heading<'_>) {
        let level = heading
            .depth()
            .min(self.options.max_heading_level as usize);
        self.output.push_str(&format!(
            "{} <a name=\"{}\"/>{} {}\n",
            "#".repeat(level),
            heading.number,
            heading.number,
            heading.title
        ));
    }

    fn end_section(&mut self, heading: &Heading<'_>) {
        if heading.depth() == 1 {
            self.output.push_str("\n<br/>\n\n");
        }
    }

    fn separator(&mut self) {
        self.output.push('\n');
    }

    fn paragraph(&mut self, style: &BlockStyle, segments: &[Segment]) {
        let code = style.kind == ParagraphKind::Code;
        let body = self.render_inline(segments, code);

        if let Some(marker) = &style.marker {
            let body = match style.kind {
                ParagraphKind::Label => format!("**{}**", body),
                ParagraphKind::Issue => format!("> **Issue:** {}", body),
                ParagraphKind::Alert | ParagraphKind::Annotation => format!("> {}", body),
                _ => body,
            };
            let outer = self.indent() - self.indents.last().copied().unwrap_or(0);
            let line = format!("{} {}", self.marker_text(marker), body);
            self.push_lines(line.trim_end(), outer);
            return;
        }

        let text = match style.kind {
            ParagraphKind::Code => format!("```\n{}\n```", body),
            ParagraphKind::Text | ParagraphKind::Definition => body,
            ParagraphKind::Label => format!("**{}**", body),
            ParagraphKind::Alert | ParagraphKind::Annotation => format!("> {}", body),
            ParagraphKind::Issue => format!("> **Issue:** {}", body),
        };
        let indent = self.indent();
        self.push_lines(&text, indent);
    }

    fn begin_list_item(&mut self, marker: &ListMarker, _level: usize) {
        let width = self.marker_text(marker).len() + 1;
        self.indents.push(width);
    }

    fn end_list_item(&mut self, _level: usize) {
        self.indents.pop();
    }

    fn begin_grammar(&mut self, _level: usize) {
        let indent = self.indent();
        self.push_lines("```grammar", indent);
        self.first_rule = true;
    }

    fn grammar_rule(&mut self, rule: &RuleLayout<'_>, _level: usize) {
        let mut text = String::new();
        if !self.first_rule {
            text.push('\n');
        }
        self.first_rule = false;

        text.push_str(rule.name);
        for (i, production) in rule.productions.iter().enumerate() {
            let lead = if i == 0 { ":" } else { "|" };
            let line = format!("  {} {}", lead, grammar_line(production));
            text.push('\n');
            text.push_str(line.trim_end());
        }
        text.push_str("\n  ;");

        let indent = self.indent();
        self.push_lines(&text, indent);
    }

    fn end_grammar(&mut self, _level: usize) {
        let indent = self.indent();
        self.push_lines("```", indent);
    }

    fn finish(self) -> String {
        let mut output = self.output.trim_end().to_string();
        output.push('\n');
        output
    }
}

fn grammar_line(tokens: &[GrammarToken<'_>]) -> String {
    let mut line = String::new();
    for token in tokens {
        match token {
            GrammarToken::NonTerminal(name) => line.push_str(name),
            GrammarToken::Terminal(literal) => {
                line.push('\'');
                line.push_str(literal);
                line.push('\'');
            }
            GrammarToken::Meta(label) => {
                line.push('<');
                line.push_str(label);
                line.push('>');
            }
            GrammarToken::Operator(op) => line.push_str(op),
            GrammarToken::Separator => line.push(' '),
        }
    }
    line
}

/// Wrap text in a code span whose fence is longer than any backtick run
/// inside it.
fn code_span(text: &str) -> String {
    let longest = text
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest + 1);
    if longest > 0 {
        format!("{} {} {}", fence, text, fence)
    } else {
        format!("{}{}{}", fence, text, fence)
    }
}

/// Escape special Markdown characters.
/// Only escape characters that could be misinterpreted as Markdown syntax.
pub fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            // Core formatting that must be escaped
            '\\' | '`' | '*' | '_' |
            // Brackets for links, pipe for tables, angle brackets for raw HTML
            '[' | ']' | '|' | '<' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}
