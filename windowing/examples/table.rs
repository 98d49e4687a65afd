// Example: a savings table with a sticky header and column layout.
use std::borrow::Cow;

use windowing::{Align, ColumnDef, TableConfig, TableRow, Viewport, VirtualTable};

struct Saving {
    member: String,
    balance: u64,
}

impl TableRow for Saving {
    fn cell(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "member" => Some(Cow::Borrowed(&self.member)),
            "balance" => Some(Cow::Owned(self.balance.to_string())),
            _ => None,
        }
    }
}

fn main() {
    let rows: Vec<Saving> = (0..10_000)
        .map(|i| Saving {
            member: format!("Member {i}"),
            balance: (i as u64 * 37) % 5_000,
        })
        .collect();

    let columns = vec![
        ColumnDef::new("member", "Member").flex(2).sortable(true),
        ColumnDef::new("balance", "Balance")
            .fixed(140)
            .sortable(true)
            .with_render(|s: &Saving| format!("{:>8}.00", s.balance)),
    ];
    let config = TableConfig::new(40, 56, 3).expect("non-zero row height");
    let mut table = VirtualTable::new(config, columns, rows.len()).expect("valid columns");
    table.set_viewport(Viewport::new(0, 600));
    table.scroll_to_index(5_000, Align::Center);

    for col in table.layout_columns(640) {
        println!("column {:<8} x={:<4} width={}", col.key, col.x, col.width);
    }
    table.for_each_virtual_row(|r| {
        let row = &rows[r.index];
        let cells: Vec<String> = table.columns().iter().map(|c| c.cell_text(row)).collect();
        println!("{:>6} @ {:>7}: {}", r.index, r.offset, cells.join(" | "));
    });
}
