//! Styled rendering: a paragraph/run tree bound to the style catalogue.

use crate::model::{Document, Head, ListKind, ParagraphKind, SpanStyle};
use crate::package::{NumberingAllocator, Paragraph, Run, SectionBreak, StyledDocument};

use super::numbering::OutlineEntry;
use super::walker::{
    walk, Backend, BlockStyle, GrammarToken, Heading, RuleLayout, Segment, MAX_LIST_LEVEL,
};
use super::RenderOptions;

/// Deepest heading with its own style.
pub const MAX_HEADING_STYLE: usize = 9;

const TOC_FIELD: &str = " TOC \\o \"3-9\" \\h \\z \\t \"Heading 1,1,Heading 2,2\" ";

/// Render a document to a styled paragraph tree.
pub fn to_styled(doc: &Document, options: &RenderOptions) -> StyledDocument {
    let (styled, _) = walk(doc, options, StyledBackend::new());
    log::debug!(
        "produced {} styled paragraphs with {} numbering instances",
        styled.paragraphs.len(),
        styled.numbering.len()
    );
    styled
}

/// Character style id for a span style.
pub fn span_style_id(style: SpanStyle) -> &'static str {
    match style {
        SpanStyle::Emphasis => "Bold",
        SpanStyle::Italic => "Italic",
        SpanStyle::BoldItalic => "BoldItalic",
        SpanStyle::Label => "LabelEmbedded",
        SpanStyle::Code => "CodeEmbedded",
        SpanStyle::Subscript => "Subscript",
        SpanStyle::Superscript => "Superscript",
        SpanStyle::Strikethrough => "Strikethrough",
        SpanStyle::Reference => "GrammarReference",
        SpanStyle::Definition => "Definition",
    }
}

/// Paragraph style id for a block at a list level.
pub fn paragraph_style_id(style: &BlockStyle) -> String {
    if let Some(marker) = style.marker {
        let family = match marker.kind {
            ListKind::Bulleted => "BulletedList",
            ListKind::Numbered => "NumberedList",
        };
        return format!("{}{}", family, style.level.clamp(1, MAX_LIST_LEVEL));
    }

    let family = match style.kind {
        ParagraphKind::Annotation => return "Annotation".to_string(),
        ParagraphKind::Issue => return "Issue".to_string(),
        ParagraphKind::Text => "Text",
        ParagraphKind::Code => "Code",
        ParagraphKind::Alert => "AlertText",
        ParagraphKind::Label => "Label",
        ParagraphKind::Definition => "DefinitionText",
    };
    match style.level.min(MAX_LIST_LEVEL) {
        0 => family.to_string(),
        level => format!("{}inList{}", family, level),
    }
}

/// Styled leaf emission.
pub(crate) struct StyledBackend {
    paragraphs: Vec<Paragraph>,
    numbering: NumberingAllocator,
}

impl StyledBackend {
    pub(crate) fn new() -> Self {
        Self {
            paragraphs: Vec::new(),
            numbering: NumberingAllocator::new(),
        }
    }

    fn empty_text(&mut self, count: usize) {
        for _ in 0..count {
            self.paragraphs.push(Paragraph::styled("Text"));
        }
    }

    fn head_line(&mut self, style: &str, value: Option<&str>) {
        let mut para = Paragraph::styled(style);
        if let Some(value) = value {
            para.push(Run::preserved(value));
        }
        self.paragraphs.push(para);
    }

    fn section_break(&mut self, section: SectionBreak) {
        self.paragraphs.push(Paragraph {
            section_break: Some(section),
            ..Paragraph::styled("Text")
        });
    }
}

impl Backend for StyledBackend {
    type Output = StyledDocument;

    fn title(&mut self, head: &Head) {
        self.empty_text(8);
        self.head_line("Title", head.title.as_deref());
        self.empty_text(7);
        self.head_line("Subtitle", head.version.as_deref());
        self.head_line("Subtitle", head.status());
        self.empty_text(3);
        self.head_line("Author", head.author.as_deref());
        self.section_break(SectionBreak::TitlePage);
    }

    fn contents(&mut self, _outline: &[OutlineEntry]) {
        self.paragraphs.push(
            Paragraph::styled("TOCHeading")
                .with_run(Run::LastRenderedPageBreak)
                .with_run(Run::text("Table of Contents")),
        );
        self.empty_text(1);
        self.paragraphs.push(Paragraph::default().with_run(Run::Field {
            instruction: TOC_FIELD.to_string(),
        }));
        self.section_break(SectionBreak::Contents);
    }

    fn begin_section(&mut self, heading: &Heading<'_>) {
        let depth = heading.depth();
        if depth > MAX_HEADING_STYLE {
            log::warn!(
                "section {} nested {} levels deep; using Heading{}",
                heading.number,
                depth,
                MAX_HEADING_STYLE
            );
        }

        let mut para = Paragraph {
            bookmark: Some(heading.number.bookmark()),
            ..Paragraph::styled(format!("Heading{}", depth.min(MAX_HEADING_STYLE)))
        };
        if depth == 1 {
            para.push(Run::LastRenderedPageBreak);
        }
        para.push(Run::text(heading.title));
        self.paragraphs.push(para);
    }

    fn end_section(&mut self, heading: &Heading<'_>) {
        if heading.depth() == 1 {
            self.section_break(SectionBreak::Body {
                first: heading.first,
            });
        }
    }

    fn paragraph(&mut self, style: &BlockStyle, segments: &[Segment]) {
        let mut para = Paragraph::styled(paragraph_style_id(style));
        para.numbering = style.marker.and_then(|marker| marker.numbering);

        for segment in segments {
            match segment {
                Segment::Text { text, style: None } => para.push(Run::preserved(text.as_str())),
                Segment::Text {
                    text,
                    style: Some(span),
                } => para.push(Run::styled(span_style_id(*span), text.as_str())),
                Segment::LineBreak => para.push(Run::Break),
            }
        }

        self.paragraphs.push(para);
    }

    fn allocate_numbering(&mut self, level: usize) -> Option<u32> {
        Some(self.numbering.allocate(level))
    }

    fn grammar_rule(&mut self, rule: &RuleLayout<'_>, _level: usize) {
        let mut para = Paragraph::styled("Grammar")
            .with_run(Run::styled("GrammarNon-Terminal", rule.name))
            .with_run(Run::Break);

        for (i, production) in rule.productions.iter().enumerate() {
            if i > 0 {
                para.push(Run::Break);
                para.push(Run::preserved("|"));
            } else {
                para.push(Run::preserved(":"));
            }
            if !production.is_empty() {
                para.push(Run::preserved("  "));
            }
            for token in production {
                grammar_token(&mut para, token);
            }
        }

        para.push(Run::Break);
        para.push(Run::preserved(";"));
        self.paragraphs.push(para);
    }

    fn finish(self) -> StyledDocument {
        StyledDocument {
            paragraphs: self.paragraphs,
            numbering: self.numbering.into_instances(),
        }
    }
}

fn grammar_token(para: &mut Paragraph, token: &GrammarToken<'_>) {
    match token {
        GrammarToken::NonTerminal(name) => para.push(Run::styled("GrammarNon-Terminal", *name)),
        GrammarToken::Terminal(literal) => {
            para.push(Run::text("'"));
            para.push(Run::styled("GrammarTerminal", *literal));
            para.push(Run::text("'"));
        }
        GrammarToken::Meta(label) => {
            para.push(Run::styled("GrammarTerminal", format!("<{}>", label)))
        }
        GrammarToken::Operator(op) => para.push(Run::text(*op)),
        GrammarToken::Separator => para.push(Run::preserved("  ")),
    }
}
