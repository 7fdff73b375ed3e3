// Bridge from a parsed attribute group to a renderable table

use std::collections::BTreeSet;

use crate::models::AttributeGroup;
use crate::table::{Alignment, Column, Table};

/// Assemble a [`Table`] for one attribute group. With an empty selection
/// every column seen across the rows is shown, alphabetically; otherwise
/// the selected ids are shown in the order given. Cells are centered with
/// the given padding.
///
/// A row missing one of the chosen columns yields a record shorter than
/// the column list, which the renderer skips; that mirrors the agent's
/// one-schema-per-group assumption.
pub fn group_table(group: &AttributeGroup, selected: &[String], padding: &str) -> Table {
    let ids: Vec<String> = if selected.is_empty() {
        group
            .rows()
            .iter()
            .flat_map(|row| row.column_names())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    } else {
        selected.to_vec()
    };

    let columns: Vec<Column> = ids
        .iter()
        .map(|id| {
            Column::new(id)
                .alignment(Alignment::Center)
                .padding(padding)
        })
        .collect();

    if group.rows().is_empty() {
        // No rows at all: let the renderer emit its placeholder line.
        return Table::new(columns);
    }

    let data = group
        .rows()
        .iter()
        .map(|row| ids.iter().filter_map(|id| row.get(id).cloned()).collect())
        .collect();
    Table::with_data(columns, data)
}
