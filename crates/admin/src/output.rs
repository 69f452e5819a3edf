use hsnp_core::model::metric::MetricRecord;
use hsnp_core::model::tenant::TenantRow;
use hsnp_core::model::template::TemplateRow;
use hsnp_core::presenter::MetricsView;
use owo_colors::OwoColorize;

pub fn print_dashboard_human(view: &MetricsView, color: bool) {
    print!("{}", render_dashboard_human(view, color));
}

pub fn print_tenants_human(rows: &[TenantRow]) {
    let cells: Vec<[&str; 4]> = rows
        .iter()
        .map(|t| [&*t.name, &*t.plan, &*t.sends_per_day, &*t.status])
        .collect();
    print!(
        "{}",
        render_table(["NAME", "PLAN", "DAILY SENDS", "STATUS"], &cells)
    );
}

pub fn print_templates_human(rows: &[TemplateRow]) {
    let cells: Vec<[&str; 4]> = rows
        .iter()
        .map(|t| [&*t.name, &*t.channel, &*t.version, &*t.updated])
        .collect();
    print!(
        "{}",
        render_table(["NAME", "CHANNEL", "VERSION", "LAST UPDATED"], &cells)
    );
}

pub fn render_dashboard_human(view: &MetricsView, color: bool) -> String {
    let mut out = format!("Delivery Snapshot ({})\n", view.state_name());
    let records = view.records();
    let label_width = records.iter().map(|r| r.label.len()).max().unwrap_or(0);
    let value_width = records.iter().map(|r| r.value.len()).max().unwrap_or(0);
    for record in records {
        out.push_str(&render_card_line(record, label_width, value_width, color));
        out.push('\n');
    }
    out
}

fn render_card_line(
    record: &MetricRecord,
    label_width: usize,
    value_width: usize,
    color: bool,
) -> String {
    let label = format!("{:<label_width$}", record.label);
    let value = format!("{:>value_width$}", record.value);
    if color {
        format!(
            "  {}  {}  {}",
            label.bold(),
            value.green(),
            record.sublabel.bright_black()
        )
    } else {
        format!("  {label}  {value}  {}", record.sublabel)
    }
}

fn render_table(headers: [&str; 4], rows: &[[&str; 4]]) -> String {
    let mut widths = headers.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    for line in std::iter::once(&headers).chain(rows) {
        let cells: Vec<String> = line
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }
    out
}
