//! Shared test helpers: minimal xlsx fixture assembly
//!
//! An xlsx file is a zip of XML parts. The fixtures here carry a single
//! worksheet with inline-string and numeric cells, which is exactly the
//! shape of the raw vocabulary spreadsheets.
#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// A fixture cell value
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
}

/// Write a one-sheet xlsx file containing the given rows (header included)
pub fn write_xlsx(path: &Path, rows: &[Vec<Cell<'_>>]) {
    let file = File::create(path).expect("create fixture file");
    let mut zip = ZipWriter::new(file);

    let parts: [(&str, String); 5] = [
        ("[Content_Types].xml", content_types().to_string()),
        ("_rels/.rels", root_rels().to_string()),
        ("xl/workbook.xml", workbook_xml().to_string()),
        ("xl/_rels/workbook.xml.rels", workbook_rels().to_string()),
        ("xl/worksheets/sheet1.xml", sheet_xml(rows)),
    ];

    for (name, contents) in parts {
        zip.start_file(name, SimpleFileOptions::default())
            .expect("start zip entry");
        zip.write_all(contents.as_bytes()).expect("write zip entry");
    }
    zip.finish().expect("finish fixture zip");
}

fn content_types() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#
}

fn root_rels() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#
}

fn workbook_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets>
</workbook>"#
}

fn workbook_rels() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
</Relationships>"#
}

fn sheet_xml(rows: &[Vec<Cell<'_>>]) -> String {
    let mut body = String::new();
    for (r, row) in rows.iter().enumerate() {
        body.push_str(&format!("<row r=\"{}\">", r + 1));
        for (c, cell) in row.iter().enumerate() {
            let reference = format!("{}{}", col_letter(c), r + 1);
            match cell {
                Cell::Text(s) => body.push_str(&format!(
                    "<c r=\"{}\" t=\"inlineStr\"><is><t>{}</t></is></c>",
                    reference,
                    escape_xml(s)
                )),
                Cell::Number(n) => {
                    body.push_str(&format!("<c r=\"{}\"><v>{}</v></c>", reference, n))
                }
            }
        }
        body.push_str("</row>");
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<sheetData>{}</sheetData>
</worksheet>"#,
        body
    )
}

fn col_letter(col: usize) -> String {
    let mut result = String::new();
    let mut col = col + 1;
    while col > 0 {
        col -= 1;
        result.insert(0, (b'A' + (col % 26) as u8) as char);
        col /= 26;
    }
    result
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Header plus two sentence rows matching the dataset layout
pub fn sentences_fixture(path: &Path) {
    write_xlsx(
        path,
        &[
            vec![Cell::Text("English"), Cell::Text("Spoken"), Cell::Text("Letters")],
            vec![Cell::Text("hi"), Cell::Text("shalom"), Cell::Text("שלום")],
            vec![
                Cell::Text("bye"),
                Cell::Text("lehitraot"),
                Cell::Text("להתראות"),
            ],
        ],
    );
}
