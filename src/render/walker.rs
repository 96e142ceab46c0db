//! The shared document walk.
//!
//! [`walk`] drives a [`Backend`] over a document. Section numbering, the
//! outline, whitespace modes and list levels are all computed here, so each
//! backend only decides how the leaves look.

use crate::model::{
    Block, Document, Grammar, Head, Inline, List, ListKind, Paragraph, ParagraphKind, Rule,
    Section, SectionItem, SpanStyle, Term,
};

use super::numbering::{outline, OutlineEntry, SectionNumber};
use super::whitespace;
use super::{RenderOptions, RenderStats};

/// Deepest list level with a dedicated style family.
pub const MAX_LIST_LEVEL: usize = 2;

/// A piece of rendered inline content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text, optionally carrying a span style
    Text {
        /// Text after whitespace handling
        text: String,
        /// Span style; `None` for plain text
        style: Option<SpanStyle>,
    },

    /// A line break; explicit, or a line boundary in preserved text
    LineBreak,
}

impl Segment {
    /// Create a plain text segment.
    pub fn plain(text: impl Into<String>) -> Self {
        Segment::Text {
            text: text.into(),
            style: None,
        }
    }

    /// Create a styled text segment.
    pub fn styled(style: SpanStyle, text: impl Into<String>) -> Self {
        Segment::Text {
            text: text.into(),
            style: Some(style),
        }
    }
}

/// A section heading as seen by a backend.
#[derive(Debug, Clone, Copy)]
pub struct Heading<'a> {
    /// Structural number
    pub number: &'a SectionNumber,
    /// Section title
    pub title: &'a str,
    /// True only for the first top-level section of the document
    pub first: bool,
}

impl Heading<'_> {
    /// Nesting depth; top-level sections are at depth 1.
    pub fn depth(&self) -> usize {
        self.number.depth()
    }
}

/// Marker carried by the first paragraph of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    /// List flavour
    pub kind: ListKind,
    /// 1-based position of the item in its list
    pub ordinal: u32,
    /// Numbering id allocated for the list, if the backend allocates any
    pub numbering: Option<u32>,
}

/// How a paragraph-like block should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockStyle {
    /// Paragraph kind
    pub kind: ParagraphKind,
    /// List nesting level; 0 outside lists
    pub level: usize,
    /// Item marker, for the first paragraph of a list item
    pub marker: Option<ListMarker>,
}

/// A flattened grammar term piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarToken<'a> {
    /// Rule reference
    NonTerminal(&'a str),
    /// Literal, unquoted
    Terminal(&'a str),
    /// Placeholder label, without angle brackets
    Meta(&'a str),
    /// Punctuation: `*`, `+`, `?`, `(`, `)`, `..`
    Operator(&'static str),
    /// Gap between two terms
    Separator,
}

/// A grammar rule flattened for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleLayout<'a> {
    /// Rule name
    pub name: &'a str,
    /// One token line per production
    pub productions: Vec<Vec<GrammarToken<'a>>>,
}

impl<'a> RuleLayout<'a> {
    /// Flatten a rule.
    pub fn new(rule: &'a Rule) -> Self {
        let productions = rule
            .productions
            .iter()
            .map(|production| {
                let mut tokens = Vec::new();
                flatten_sequence(&production.terms, &mut tokens);
                tokens
            })
            .collect();
        Self {
            name: &rule.name,
            productions,
        }
    }
}

fn flatten_sequence<'a>(terms: &'a [Term], out: &mut Vec<GrammarToken<'a>>) {
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            out.push(GrammarToken::Separator);
        }
        flatten_term(term, out);
    }
}

fn flatten_term<'a>(term: &'a Term, out: &mut Vec<GrammarToken<'a>>) {
    match term {
        Term::NonTerminal { name } => out.push(GrammarToken::NonTerminal(name)),
        Term::Terminal { literal } => out.push(GrammarToken::Terminal(literal)),
        Term::Meta { label } => out.push(GrammarToken::Meta(label)),
        Term::Star { term } => {
            flatten_term(term, out);
            out.push(GrammarToken::Operator("*"));
        }
        Term::Plus { term } => {
            flatten_term(term, out);
            out.push(GrammarToken::Operator("+"));
        }
        Term::Opt { term } => {
            flatten_term(term, out);
            out.push(GrammarToken::Operator("?"));
        }
        Term::Group { terms } => {
            out.push(GrammarToken::Operator("("));
            flatten_sequence(terms, out);
            out.push(GrammarToken::Operator(")"));
        }
        Term::Range { low, high } => {
            flatten_term(low, out);
            out.push(GrammarToken::Operator(".."));
            flatten_term(high, out);
        }
    }
}

/// Leaf emission for one output format.
///
/// Calls arrive in document order. Only [`Backend::paragraph`] and
/// [`Backend::finish`] are required.
pub trait Backend {
    /// What the backend produces.
    type Output;

    /// Emit the title block.
    fn title(&mut self, head: &Head) {
        let _ = head;
    }

    /// Emit the table of contents.
    fn contents(&mut self, outline: &[OutlineEntry]) {
        let _ = outline;
    }

    /// Open a section: emit its heading.
    fn begin_section(&mut self, heading: &Heading<'_>) {
        let _ = heading;
    }

    /// Close a section.
    fn end_section(&mut self, heading: &Heading<'_>) {
        let _ = heading;
    }

    /// Called before each child of a section and before each continuation
    /// block of a list item.
    fn separator(&mut self) {}

    /// Emit a paragraph-like block.
    fn paragraph(&mut self, style: &BlockStyle, segments: &[Segment]);

    /// Allocate a fresh numbering identity for a numbered list found at
    /// `level`. Backends without list numbering return `None`.
    fn allocate_numbering(&mut self, level: usize) -> Option<u32> {
        let _ = level;
        None
    }

    /// Open a list whose items sit at `level`.
    fn begin_list(&mut self, kind: ListKind, level: usize) {
        let _ = (kind, level);
    }

    /// Close a list.
    fn end_list(&mut self, kind: ListKind, level: usize) {
        let _ = (kind, level);
    }

    /// Open a list item.
    fn begin_list_item(&mut self, marker: &ListMarker, level: usize) {
        let _ = (marker, level);
    }

    /// Close a list item.
    fn end_list_item(&mut self, level: usize) {
        let _ = level;
    }

    /// Open a grammar block.
    fn begin_grammar(&mut self, level: usize) {
        let _ = level;
    }

    /// Emit one grammar rule.
    fn grammar_rule(&mut self, rule: &RuleLayout<'_>, level: usize) {
        let _ = (rule, level);
    }

    /// Close a grammar block.
    fn end_grammar(&mut self, level: usize) {
        let _ = level;
    }

    /// Produce the output.
    fn finish(self) -> Self::Output;
}

/// Walk a document with a backend.
///
/// Statistics are gathered only when `options.collect_stats` is set;
/// otherwise the returned stats are empty.
pub fn walk<B: Backend>(
    document: &Document,
    options: &RenderOptions,
    backend: B,
) -> (B::Output, RenderStats) {
    let mut walker = Walker {
        backend,
        collect_stats: options.collect_stats,
        stats: RenderStats::new(),
    };

    if options.include_title {
        walker.backend.title(&document.head);
    }
    if options.include_contents {
        walker.backend.contents(&outline(document));
    }

    for (section, ordinal) in document.body.iter().zip(1u32..) {
        walker.section(section, SectionNumber::top(ordinal), ordinal == 1);
    }

    let Walker { backend, stats, .. } = walker;
    (backend.finish(), stats)
}

struct Walker<B> {
    backend: B,
    collect_stats: bool,
    stats: RenderStats,
}

impl<B: Backend> Walker<B> {
    fn section(&mut self, section: &Section, number: SectionNumber, first: bool) {
        let heading = Heading {
            number: &number,
            title: &section.title,
            first,
        };
        if self.collect_stats {
            self.stats.add_section();
        }
        self.backend.begin_section(&heading);

        let mut subsections = 0;
        for item in &section.children {
            self.backend.separator();
            match item {
                SectionItem::Section(subsection) => {
                    subsections += 1;
                    self.section(subsection, number.child(subsections), false);
                }
                SectionItem::Block(block) => self.block(block, 0),
            }
        }

        self.backend.end_section(&heading);
    }

    fn block(&mut self, block: &Block, level: usize) {
        match block {
            Block::Text(p) => self.paragraph(ParagraphKind::Text, p, level, None),
            Block::Code(p) => self.paragraph(ParagraphKind::Code, p, level, None),
            Block::Alert(p) => self.paragraph(ParagraphKind::Alert, p, level, None),
            Block::Annotation(p) => self.paragraph(ParagraphKind::Annotation, p, level, None),
            Block::Issue(p) => self.paragraph(ParagraphKind::Issue, p, level, None),
            Block::Label(p) => self.paragraph(ParagraphKind::Label, p, level, None),
            Block::Definition(p) => self.paragraph(ParagraphKind::Definition, p, level, None),
            Block::Grammar(grammar) => self.grammar(grammar, level),
            Block::BulletedList(list) => self.list(ListKind::Bulleted, list, level),
            Block::NumberedList(list) => self.list(ListKind::Numbered, list, level),
        }
    }

    fn paragraph(
        &mut self,
        kind: ParagraphKind,
        paragraph: &Paragraph,
        level: usize,
        marker: Option<ListMarker>,
    ) {
        let segments = segments(&paragraph.content, kind.preserves_whitespace());
        if self.collect_stats {
            match kind {
                ParagraphKind::Code => self.stats.add_code_block(),
                _ => self.stats.add_paragraph(),
            }
            for segment in &segments {
                if let Segment::Text { text, .. } = segment {
                    self.stats.count_text(text);
                }
            }
        }
        let style = BlockStyle {
            kind,
            level,
            marker,
        };
        self.backend.paragraph(&style, &segments);
    }

    fn list(&mut self, kind: ListKind, list: &List, level: usize) {
        let item_level = level + 1;
        if item_level > MAX_LIST_LEVEL {
            log::warn!(
                "list nested {} levels deep; styles clamp to level {}",
                item_level,
                MAX_LIST_LEVEL
            );
        }

        let numbering = match kind {
            ListKind::Numbered => self.backend.allocate_numbering(level),
            ListKind::Bulleted => None,
        };
        if self.collect_stats {
            self.stats.add_list(kind == ListKind::Numbered);
        }

        self.backend.begin_list(kind, item_level);
        for (item, ordinal) in list.items.iter().zip(1u32..) {
            let marker = ListMarker {
                kind,
                ordinal,
                numbering,
            };
            if self.collect_stats {
                self.stats.add_list_item();
            }
            self.backend.begin_list_item(&marker, item_level);

            let leading = item
                .blocks
                .first()
                .and_then(Block::paragraph)
                .filter(|(kind, _)| *kind != ParagraphKind::Code);
            let continuation = match leading {
                Some((kind, paragraph)) => {
                    self.paragraph(kind, paragraph, item_level, Some(marker));
                    &item.blocks[1..]
                }
                None => {
                    let style = BlockStyle {
                        kind: ParagraphKind::Text,
                        level: item_level,
                        marker: Some(marker),
                    };
                    self.backend.paragraph(&style, &[]);
                    &item.blocks[..]
                }
            };

            for block in continuation {
                self.backend.separator();
                self.block(block, item_level);
            }

            self.backend.end_list_item(item_level);
        }
        self.backend.end_list(kind, item_level);
    }

    fn grammar(&mut self, grammar: &Grammar, level: usize) {
        self.backend.begin_grammar(level);
        for rule in grammar.presentation_order() {
            if self.collect_stats {
                self.stats.add_grammar_rule();
            }
            self.backend.grammar_rule(&RuleLayout::new(rule), level);
        }
        self.backend.end_grammar(level);
    }
}

/// Apply whitespace handling to the inline content of one block.
///
/// Prose text collapses whitespace and is trimmed once at the end of the
/// block; preserved text becomes lines joined by line breaks.
pub fn segments(content: &[Inline], preserve: bool) -> Vec<Segment> {
    let mut out = Vec::new();

    for inline in content {
        match inline {
            Inline::Text { text } => {
                let skip_leading = at_whitespace(&out);
                push_text(&mut out, text, None, preserve, skip_leading)
            }
            Inline::Span { style, text } => push_text(&mut out, text, Some(*style), preserve, true),
            Inline::LineBreak => out.push(Segment::LineBreak),
        }
    }

    if !preserve {
        trim_trailing(&mut out);
    }
    out
}

/// True at the start of a block, after a line break, or after text ending
/// in a collapsed space.
fn at_whitespace(out: &[Segment]) -> bool {
    match out.last() {
        None | Some(Segment::LineBreak) => true,
        Some(Segment::Text { text, .. }) => text.ends_with(' '),
    }
}

fn push_text(
    out: &mut Vec<Segment>,
    text: &str,
    style: Option<SpanStyle>,
    preserve: bool,
    skip_leading: bool,
) {
    if preserve {
        for (i, line) in whitespace::preserve(text).into_iter().enumerate() {
            if i > 0 {
                out.push(Segment::LineBreak);
            }
            out.push(Segment::Text { text: line, style });
        }
        return;
    }

    let text = whitespace::collapse(text, skip_leading);
    if !text.is_empty() {
        out.push(Segment::Text { text, style });
    }
}

fn trim_trailing(out: &mut Vec<Segment>) {
    loop {
        let Some(Segment::Text { text, .. }) = out.last_mut() else {
            break;
        };
        let len = text.trim_end().len();
        text.truncate(len);
        if !text.is_empty() {
            break;
        }
        out.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListItem;

    #[derive(Default)]
    struct Trace {
        events: Vec<String>,
        next_numbering: u32,
    }

    impl Backend for Trace {
        type Output = Vec<String>;

        fn begin_section(&mut self, heading: &Heading<'_>) {
            self.events
                .push(format!("section {} {} first={}", heading.number, heading.title, heading.first));
        }

        fn paragraph(&mut self, style: &BlockStyle, segments: &[Segment]) {
            let text: String = segments
                .iter()
                .map(|s| match s {
                    Segment::Text { text, .. } => text.as_str(),
                    Segment::LineBreak => "|",
                })
                .collect();
            let marker = style
                .marker
                .map(|m| format!(" #{}@{:?}", m.ordinal, m.numbering))
                .unwrap_or_default();
            self.events
                .push(format!("{:?}/{}{} {}", style.kind, style.level, marker, text));
        }

        fn allocate_numbering(&mut self, _level: usize) -> Option<u32> {
            self.next_numbering += 1;
            Some(self.next_numbering)
        }

        fn finish(self) -> Self::Output {
            self.events
        }
    }

    #[test]
    fn test_walk_numbers_sections() {
        let doc = Document::new()
            .with_section(
                Section::new("A")
                    .with_section(Section::new("A1"))
                    .with_section(Section::new("A2")),
            )
            .with_section(Section::new("B"));

        let (events, _) = walk(&doc, &RenderOptions::new(), Trace::default());
        assert_eq!(
            events,
            vec![
                "section 1 A first=true",
                "section 1.1 A1 first=false",
                "section 1.2 A2 first=false",
                "section 2 B first=false",
            ]
        );
    }

    #[test]
    fn test_list_items_carry_markers() {
        let inner = List::new().with_item(ListItem::text("deep"));
        let list = List::new()
            .with_item(ListItem::text("one"))
            .with_item(ListItem::new(vec![
                Block::Code(Paragraph::with_text("x")),
                Block::NumberedList(inner),
            ]));
        let doc = Document::new()
            .with_section(Section::new("S").with_block(Block::NumberedList(list)));

        let (events, stats) = walk(&doc, &RenderOptions::new().with_stats(true), Trace::default());
        assert_eq!(
            events,
            vec![
                "section 1 S first=true",
                "Text/1 #1@Some(1) one",
                "Text/1 #2@Some(1) ",
                "Code/1 x",
                "Text/2 #1@Some(2) deep",
            ]
        );
        assert_eq!(stats.list_count, 2);
        assert_eq!(stats.numbered_list_count, 2);
        assert_eq!(stats.list_item_count, 3);
        assert_eq!(stats.code_block_count, 1);
    }

    #[test]
    fn test_segments_trim_paragraph_end_only() {
        let content = vec![
            Inline::text_node("  hello   world  \n"),
            Inline::span(SpanStyle::Code, " x "),
            Inline::text_node("  tail  "),
        ];
        let segs = segments(&content, false);
        assert_eq!(
            segs,
            vec![
                Segment::plain("hello world "),
                Segment::styled(SpanStyle::Code, "x "),
                Segment::plain("tail"),
            ]
        );
    }

    #[test]
    fn test_segments_collapse_across_nodes() {
        let content = vec![
            Inline::text_node("a   "),
            Inline::text_node("   b"),
            Inline::LineBreak,
            Inline::text_node("  c"),
        ];
        assert_eq!(
            segments(&content, false),
            vec![
                Segment::plain("a "),
                Segment::plain("b"),
                Segment::LineBreak,
                Segment::plain("c"),
            ]
        );

        let joined = vec![Inline::text_node("x"), Inline::text_node(" y")];
        assert_eq!(
            segments(&joined, false),
            vec![Segment::plain("x"), Segment::plain(" y")]
        );
    }

    #[test]
    fn test_segments_preserve_lines() {
        let content = vec![Inline::text_node("\n    a = 1\n      b = 2\n")];
        let segs = segments(&content, true);
        assert_eq!(
            segs,
            vec![
                Segment::plain("a = 1"),
                Segment::LineBreak,
                Segment::plain("  b = 2"),
            ]
        );
    }

    #[test]
    fn test_rule_layout_flattens_terms() {
        let rule = Rule::syntax("list").with_production(vec![
            Term::nt("item"),
            Term::star(Term::group(vec![Term::t(","), Term::nt("item")])),
            Term::opt(Term::meta("eol")),
        ]);
        let layout = RuleLayout::new(&rule);
        assert_eq!(
            layout.productions[0],
            vec![
                GrammarToken::NonTerminal("item"),
                GrammarToken::Separator,
                GrammarToken::Operator("("),
                GrammarToken::Terminal(","),
                GrammarToken::Separator,
                GrammarToken::NonTerminal("item"),
                GrammarToken::Operator(")"),
                GrammarToken::Operator("*"),
                GrammarToken::Separator,
                GrammarToken::Meta("eol"),
                GrammarToken::Operator("?"),
            ]
        );
    }
}
