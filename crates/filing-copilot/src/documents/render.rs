use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object};

use super::DocumentError;

const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 56;
const BODY_SIZE: i64 = 10;
const HEADING_SIZE: i64 = 13;
const TITLE_SIZE: i64 = 16;
const LINE_HEIGHT: i64 = 15;
const WRAP_COLUMNS: usize = 92;

/// Typed line of a text-only document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Title(String),
    Heading(String),
    Body(String),
    Blank,
}

/// Plain structured document prior to PDF encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    pub file_name: String,
    pub lines: Vec<Line>,
}

impl TextDocument {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            lines: Vec::new(),
        }
    }

    pub fn title(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(Line::Title(text.into()));
        self
    }

    pub fn heading(&mut self, text: impl Into<String>) -> &mut Self {
        if !self.lines.is_empty() {
            self.lines.push(Line::Blank);
        }
        self.lines.push(Line::Heading(text.into()));
        self
    }

    pub fn body(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(Line::Body(text.into()));
        self
    }

    pub fn field(&mut self, label: &str, value: &str) -> &mut Self {
        let value = if value.trim().is_empty() { "-" } else { value };
        self.body(format!("{label}: {value}"))
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(Line::Blank);
        self
    }

    /// All text in reading order; used to check content without decoding PDFs.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| match line {
                Line::Title(text) | Line::Heading(text) | Line::Body(text) => text.as_str(),
                Line::Blank => "",
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Lays `document` out on A4 pages using the built-in Helvetica faces.
pub fn render_pdf(document: &TextDocument) -> Result<Vec<u8>, DocumentError> {
    let mut pdf = Document::with_version("1.5");
    let pages_id = pdf.new_object_id();

    let regular = pdf.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold = pdf.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = pdf.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular,
            "F2" => bold,
        },
    });

    let mut kids = Vec::new();
    for page in paginate(&layout(&document.lines)) {
        let content = Content {
            operations: page_operations(page),
        };
        let encoded = content
            .encode()
            .map_err(|err| DocumentError::Render(err.to_string()))?;
        let content_id = pdf.add_object(lopdf::Stream::new(dictionary! {}, encoded));
        let page_id = pdf.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(PAGE_WIDTH),
            Object::Integer(PAGE_HEIGHT),
        ],
    };
    pdf.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    pdf.trailer.set("Root", catalog_id);
    pdf.compress();

    let mut buffer = Vec::new();
    pdf.save_to(&mut buffer)
        .map_err(|err| DocumentError::Render(err.to_string()))?;
    Ok(buffer)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Face {
    Regular,
    Bold,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PlacedLine {
    face: Face,
    size: i64,
    text: String,
}

fn layout(lines: &[Line]) -> Vec<PlacedLine> {
    let mut placed = Vec::new();
    for line in lines {
        let (face, size, text) = match line {
            Line::Title(text) => (Face::Bold, TITLE_SIZE, text.as_str()),
            Line::Heading(text) => (Face::Bold, HEADING_SIZE, text.as_str()),
            Line::Body(text) => (Face::Regular, BODY_SIZE, text.as_str()),
            Line::Blank => (Face::Regular, BODY_SIZE, ""),
        };
        for segment in wrap(&to_latin_text(text), WRAP_COLUMNS) {
            placed.push(PlacedLine {
                face,
                size,
                text: segment,
            });
        }
    }
    placed
}

fn paginate(lines: &[PlacedLine]) -> Vec<&[PlacedLine]> {
    let per_page = ((PAGE_HEIGHT - 2 * MARGIN) / LINE_HEIGHT).max(1) as usize;
    if lines.is_empty() {
        return vec![&[]];
    }
    lines.chunks(per_page).collect()
}

fn page_operations(lines: &[PlacedLine]) -> Vec<Operation> {
    let mut operations = Vec::new();
    let mut y = PAGE_HEIGHT - MARGIN;
    for line in lines {
        if !line.text.is_empty() {
            let font = match line.face {
                Face::Regular => "F1",
                Face::Bold => "F2",
            };
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new(
                "Tf",
                vec![Object::Name(font.as_bytes().to_vec()), Object::Integer(line.size)],
            ));
            operations.push(Operation::new(
                "Td",
                vec![Object::Integer(MARGIN), Object::Integer(y)],
            ));
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(line.text.as_str())],
            ));
            operations.push(Operation::new("ET", vec![]));
        }
        y -= LINE_HEIGHT;
    }
    operations
}

// Standard Type1 fonts only cover single-byte text.
fn to_latin_text(text: &str) -> String {
    text.chars()
        .map(|ch| if ch.is_ascii() && !ch.is_ascii_control() { ch } else { '?' })
        .collect()
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word);
            word = rest;
        }
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
