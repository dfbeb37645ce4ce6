//! FILENAME: app/src/render.rs
//! PURPOSE: Plain-text rendering of the dashboard for the terminal.

use std::fmt::Write;

use pivot_engine::{format_currency, ShareSlice, SummaryTable, TreeNode};

use crate::api_types::{DashboardViewResponse, TableData};

/// Rows of the data viewer printed before truncating.
const PRINTED_DATA_ROWS: usize = 20;

pub fn render_dashboard(view: &DashboardViewResponse) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Superstore Sales EDA");
    if let Some(name) = &view.source_name {
        let _ = writeln!(out, "Source: {}", name);
    }
    if let Some(range) = &view.date_range {
        let _ = writeln!(out, "Order Date: {} .. {}", range.start, range.end);
    }
    for (label, set) in [
        ("Region", &view.selection.region),
        ("State", &view.selection.state),
        ("City", &view.selection.city),
    ] {
        let chosen: Vec<&str> = set.iter().collect();
        let shown = if chosen.is_empty() { "(all)".to_string() } else { chosen.join(", ") };
        let _ = writeln!(out, "{}: {}", label, shown);
    }
    let _ = writeln!(
        out,
        "Records: {} filtered / {} in date range / {} loaded, Sales {}",
        view.filtered_records,
        view.date_filtered_records,
        view.total_records,
        format_currency(view.filtered_sales)
    );

    section(&mut out, "Category wise Sales");
    out.push_str(&render_summary(&view.category_sales));
    section(&mut out, "Region wise Sales");
    out.push_str(&render_shares(&view.region_share));
    section(&mut out, "Time Series Analysis");
    out.push_str(&render_summary(&view.monthly_sales));
    section(&mut out, "Hierarchical view of Sales");
    out.push_str(&render_tree(&view.treemap));
    section(&mut out, "Segment wise Sales");
    out.push_str(&render_shares(&view.segment_share));
    section(&mut out, "Category share of Sales");
    out.push_str(&render_shares(&view.category_share));
    section(&mut out, "Sample");
    out.push_str(&render_table(&view.sample));
    section(&mut out, "Month wise Sub-Category Sales (mean)");
    out.push_str(&render_table(&TableData {
        headers: view.month_pivot.headers(),
        rows: view.month_pivot.string_rows(),
    }));
    section(&mut out, "Sales vs Profit");
    let _ = writeln!(out, "{} points", view.scatter.len());
    section(&mut out, "Data");
    out.push_str(&render_table(&TableData {
        headers: view.data_view.headers.clone(),
        rows: view.data_view.rows.iter().take(PRINTED_DATA_ROWS).cloned().collect(),
    }));
    if view.data_view.len() > PRINTED_DATA_ROWS {
        let _ = writeln!(out, "... {} more rows", view.data_view.len() - PRINTED_DATA_ROWS);
    }

    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n== {} ==", title);
}

pub fn render_summary(table: &SummaryTable) -> String {
    if table.is_empty() {
        return "(no data)\n".to_string();
    }
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|r| vec![r.label.clone(), format_currency(r.value)])
        .collect();
    render_table(&TableData {
        headers: table.headers(),
        rows,
    })
}

fn render_shares(slices: &[ShareSlice]) -> String {
    if slices.is_empty() {
        return "(no data)\n".to_string();
    }
    let mut out = String::new();
    for slice in slices {
        let _ = writeln!(
            out,
            "{:<20} {:>14} {:>6.1}%",
            slice.label,
            format_currency(slice.value),
            slice.fraction * 100.0
        );
    }
    out
}

fn render_tree(nodes: &[TreeNode]) -> String {
    fn walk(out: &mut String, nodes: &[TreeNode], depth: usize) {
        for node in nodes {
            let _ = writeln!(
                out,
                "{}{} {}",
                "  ".repeat(depth),
                node.label,
                format_currency(node.value)
            );
            walk(out, &node.children, depth + 1);
        }
    }

    if nodes.is_empty() {
        return "(no data)\n".to_string();
    }
    let mut out = String::new();
    walk(&mut out, nodes, 0);
    out
}

/// Left-aligned columns padded to the widest cell.
pub fn render_table(table: &TableData) -> String {
    if table.headers.is_empty() {
        return "(no data)\n".to_string();
    }
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    let mut line = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(c, &w)| format!("{:<width$}", c, width = w))
            .collect();
        let _ = writeln!(out, "{}", padded.join("  ").trim_end());
    };
    line(&table.headers);
    for row in &table.rows {
        line(row);
    }
    out
}
