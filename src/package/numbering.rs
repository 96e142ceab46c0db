//! List numbering allocation and the numbering part.

use super::xml::XmlWriter;

/// First id handed out by a [`NumberingAllocator`]; ids below it belong to
/// the static catalogue.
pub const FIRST_ALLOCATED_ID: u32 = 6;

/// Abstract numbering used by numbered lists at the top list level.
pub const TOP_LEVEL_ABSTRACT_ID: u32 = 3;

/// A numbering instance: one independent counter over an abstract numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingInstance {
    /// Instance id referenced by paragraphs
    pub id: u32,
    /// Abstract numbering definition the instance uses
    pub abstract_id: u32,
}

/// Hands out numbering instances for one render pass.
///
/// Each numbered list gets its own instance so its counter restarts at 1,
/// independent of sibling and enclosing lists.
#[derive(Debug, Clone, Default)]
pub struct NumberingAllocator {
    instances: Vec<NumberingInstance>,
}

impl NumberingAllocator {
    /// Create an allocator with nothing allocated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an instance for a numbered list found at list `level`.
    pub fn allocate(&mut self, level: usize) -> u32 {
        let id = FIRST_ALLOCATED_ID + self.instances.len() as u32;
        let abstract_id = TOP_LEVEL_ABSTRACT_ID + level.min(1) as u32;
        self.instances.push(NumberingInstance { id, abstract_id });
        id
    }

    /// Instances allocated so far.
    pub fn instances(&self) -> &[NumberingInstance] {
        &self.instances
    }

    /// Number of instances allocated.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Check if nothing was allocated.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Consume the allocator into its instances.
    pub fn into_instances(self) -> Vec<NumberingInstance> {
        self.instances
    }
}

enum LevelKind {
    Bullet,
    Decimal,
}

/// Write the numbering part body: static abstract definitions, static
/// instances 1-5, then the allocated instances.
pub(crate) fn write_numbering(xml: &mut XmlWriter, instances: &[NumberingInstance]) {
    xml.open(
        "w:numbering",
        &[("xmlns:w", super::parts::WORDPROCESSING_NS)],
    );

    list_abstract(xml, "0", "453D70D5", LevelKind::Bullet, "BulletedList1", "360");
    list_abstract(xml, "1", "70C804DC", LevelKind::Bullet, "BulletedList2", "720");
    heading_abstract(xml);
    list_abstract(xml, "3", "0B086C79", LevelKind::Decimal, "NumberedList1", "360");
    list_abstract(xml, "4", "49917801", LevelKind::Decimal, "NumberedList2", "720");

    for (id, abstract_id) in [("1", "0"), ("2", "1"), ("3", "2"), ("4", "3"), ("5", "4")] {
        xml.open("w:num", &[("w:numId", id)]);
        xml.val("w:abstractNumId", abstract_id);
        xml.close();
    }

    for instance in instances {
        xml.open("w:num", &[("w:numId", &instance.id.to_string())]);
        xml.val("w:abstractNumId", &instance.abstract_id.to_string());
        xml.open("w:lvlOverride", &[("w:ilvl", "0")]);
        xml.val("w:startOverride", "1");
        xml.close();
        xml.close();
    }

    xml.close();
}

fn list_abstract(
    xml: &mut XmlWriter,
    id: &str,
    nsid: &str,
    kind: LevelKind,
    style: &str,
    tab: &str,
) {
    xml.open("w:abstractNum", &[("w:abstractNumId", id)]);
    xml.val("w:nsid", nsid);
    xml.val("w:multiLevelType", "singleLevel");
    xml.open("w:lvl", &[("w:ilvl", "0")]);
    xml.val("w:start", "1");
    match kind {
        LevelKind::Bullet => {
            xml.val("w:numFmt", "bullet");
            xml.val("w:pStyle", style);
            xml.val("w:lvlText", "\u{F0B7}");
        }
        LevelKind::Decimal => {
            xml.val("w:numFmt", "decimal");
            xml.val("w:pStyle", style);
            xml.val("w:lvlText", "%1.");
        }
    }
    xml.val("w:lvlJc", "left");
    xml.open("w:pPr", &[]);
    xml.open("w:tabs", &[]);
    xml.empty("w:tab", &[("w:val", "num"), ("w:pos", tab)]);
    xml.close();
    xml.empty("w:ind", &[("w:left", tab), ("w:hanging", "360")]);
    xml.close();
    xml.open("w:rPr", &[]);
    match kind {
        LevelKind::Bullet => xml.empty(
            "w:rFonts",
            &[("w:ascii", "Symbol"), ("w:hAnsi", "Symbol"), ("w:hint", "default")],
        ),
        LevelKind::Decimal => xml.empty("w:rFonts", &[("w:hint", "default")]),
    }
    xml.close();
    xml.close();
    xml.close();
}

fn heading_abstract(xml: &mut XmlWriter) {
    xml.open("w:abstractNum", &[("w:abstractNumId", "2")]);
    xml.val("w:nsid", "7AF84DA2");
    xml.val("w:multiLevelType", "multilevel");

    let mut text = String::new();
    for level in 0..9u32 {
        if level > 0 {
            text.push('.');
        }
        text.push_str(&format!("%{}", level + 1));
        let lvl_text = if level == 0 {
            format!("{}.", text)
        } else {
            text.clone()
        };
        let indent = (432 + 144 * level).to_string();

        xml.open("w:lvl", &[("w:ilvl", &level.to_string())]);
        xml.val("w:start", "1");
        xml.val("w:numFmt", "decimal");
        xml.val("w:pStyle", &format!("Heading{}", level + 1));
        xml.val("w:suff", "space");
        xml.val("w:lvlText", &lvl_text);
        xml.val("w:lvlJc", "left");
        xml.open("w:pPr", &[]);
        xml.empty("w:ind", &[("w:left", &indent), ("w:hanging", &indent)]);
        xml.close();
        xml.close();
    }

    xml.close();
}
