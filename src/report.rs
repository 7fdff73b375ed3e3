// Agent report protocol: request body construction and response parsing

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;

use crate::models::{AttributeGroup, CellValue, Row};

/// Errors from parsing an agent report response. A missing table name is
/// not an error (see [`parse_report`]); only malformed XML is fatal.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("malformed report XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Build the POST body requesting one attribute group from the agent.
pub fn request_body(group: &str, subnodes: &[String]) -> String {
    format!(
        "<REPORT><SQLTABLE NULLATTROUTPUT=\"Y\"><TABLENAME>{}</TABLENAME><SUBNODES>{}</SUBNODES></SQLTABLE></REPORT>",
        group,
        subnodes.join(",")
    )
}

/// Parse a report response into an [`AttributeGroup`].
///
/// Returns `Ok(None)` when the document carries no TABLENAME node; that is
/// the agent's way of saying "no data", which callers report cleanly
/// instead of failing. Malformed XML is fatal; no partial group is
/// returned.
///
/// Within a row, a COLUMN missing its NAME or DATA child is dropped and
/// parsing continues. A row whose columns are all dropped still counts as
/// a (empty) row, so row counts match the source document.
///
/// Value typing follows the protocol: CDATA-wrapped data stays a string,
/// plain text is parsed as an integer, and non-numeric plain text becomes
/// integer zero (agent compatibility, do not "fix").
pub fn parse_report(xml: &str) -> Result<Option<AttributeGroup>, ReportError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut group_name: Option<String> = None;
    let mut rows: Vec<Row> = Vec::new();

    let mut current_row: Option<Row> = None;
    let mut column_name: Option<String> = None;
    let mut column_data: Option<CellValue> = None;
    // Which leaf element text belongs to, if any.
    let mut leaf: Option<Leaf> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"TABLENAME" => leaf = Some(Leaf::TableName),
                b"ROW" => current_row = Some(Row::new()),
                b"COLUMN" => {
                    column_name = None;
                    column_data = None;
                }
                b"NAME" => leaf = Some(Leaf::Name),
                b"DATA" => {
                    leaf = Some(Leaf::Data);
                    column_data = None;
                }
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                // <ROW/> is a row with no columns; it still counts.
                b"ROW" => rows.push(Row::new()),
                // <DATA/> is present-but-empty plain text: integer zero.
                b"DATA" => column_data = Some(CellValue::Int(0)),
                _ => {}
            },
            Event::Text(t) => {
                let text = t.unescape()?;
                match leaf {
                    Some(Leaf::TableName) => group_name = Some(text.into_owned()),
                    Some(Leaf::Name) => column_name = Some(text.into_owned()),
                    Some(Leaf::Data) => {
                        // Plain (non-CDATA) data is integer-typed; anything
                        // that does not parse is zero, per the agent quirk.
                        let n = text.trim().parse::<i64>().unwrap_or(0);
                        column_data = Some(CellValue::Int(n));
                    }
                    None => {}
                }
            }
            Event::CData(t) => {
                let text = String::from_utf8_lossy(&t.into_inner()).into_owned();
                match leaf {
                    Some(Leaf::TableName) => group_name = Some(text),
                    Some(Leaf::Name) => column_name = Some(text),
                    // CDATA wrapping is the protocol's string-typing marker.
                    Some(Leaf::Data) => column_data = Some(CellValue::Text(text)),
                    None => {}
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"TABLENAME" | b"NAME" => leaf = None,
                b"DATA" => {
                    leaf = None;
                    // Present but empty <DATA></DATA>: empty plain text.
                    if column_data.is_none() {
                        column_data = Some(CellValue::Int(0));
                    }
                }
                b"COLUMN" => {
                    match (column_name.take(), column_data.take()) {
                        (Some(name), Some(value)) => {
                            if let Some(row) = current_row.as_mut() {
                                row.insert(name, value);
                            }
                        }
                        // Missing NAME or DATA: drop the column, keep going.
                        _ => debug!("dropping column with missing NAME or DATA node"),
                    }
                }
                b"ROW" => {
                    if let Some(row) = current_row.take() {
                        rows.push(row);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    let Some(name) = group_name else {
        debug!("no attribute group name found in report");
        return Ok(None);
    };
    let mut group = AttributeGroup::new(name);
    for row in rows {
        group.push_row(row);
    }
    Ok(Some(group))
}

#[derive(Clone, Copy)]
enum Leaf {
    TableName,
    Name,
    Data,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_exact_shape() {
        let body = request_body("KLZCPU", &["sub1".into(), "sub2".into()]);
        assert_eq!(
            body,
            "<REPORT><SQLTABLE NULLATTROUTPUT=\"Y\"><TABLENAME>KLZCPU</TABLENAME><SUBNODES>sub1,sub2</SUBNODES></SQLTABLE></REPORT>"
        );
    }

    #[test]
    fn test_request_body_no_subnodes() {
        let body = request_body("CPU", &[]);
        assert!(body.contains("<SUBNODES></SUBNODES>"));
    }
}
