// HTML serialization: a self-contained document with a fixed stylesheet

use super::Table;

// Layout is the stylesheet's job in this mode; no width/alignment/padding
// logic applies.
const STYLE: &str = "\
body { font-family: sans-serif; background: #fafafa; color: #222; }
table { border-collapse: collapse; margin: 1em auto; }
th, td { border: 1px solid #999; padding: 4px 10px; }
th { background: #ddd; }
tr:nth-child(even) { background: #eee; }";

// Labels and cell values are emitted verbatim, markup included. Escaping
// would change observable output for markup-bearing data; see DESIGN.md.
pub(super) fn render(table: &Table, title: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str(&format!("<title>{}</title>\n", title));
    out.push_str(&format!("<style>\n{}\n</style>\n", STYLE));
    out.push_str("</head>\n<body>\n<table>\n<tr>");
    for column in &table.columns {
        out.push_str(&format!("<th>{}</th>", column.label_str()));
    }
    out.push_str("</tr>\n");
    if let Some(data) = &table.data {
        for record in data {
            if record.len() != table.columns.len() {
                continue;
            }
            out.push_str("<tr>");
            for (column, cell) in table.columns.iter().zip(record) {
                out.push_str(&format!("<td>{}</td>", column.format.display(cell)));
            }
            out.push_str("</tr>\n");
        }
    }
    out.push_str("</table>\n</body>\n</html>\n");
    out
}
