use cocomo::api::ModeInfo;
use cocomo::config::OutputOptions;
use cocomo::estimator::EstimateResult;
use cocomo::format::{format_fixed, format_large_number, format_number, round_team_size};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

pub fn print_estimate_report(result: &EstimateResult, opts: &OutputOptions) {
    let dp = opts.decimals;
    println!(
        "\nProject: {} KLOC ({})",
        format_number(result.size_kloc, 3),
        result.mode
    );
    println!("{}", result.mode.help_text());

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
        Cell::new("Unit"),
    ]);

    table.add_row(vec![
        Cell::new("Effort"),
        Cell::new(format_fixed(result.effort_pm, dp)).fg(Color::Cyan),
        Cell::new("person-months"),
    ]);
    table.add_row(vec![
        Cell::new("Development Time"),
        Cell::new(format_fixed(result.schedule_months, dp)).fg(Color::Cyan),
        Cell::new("months"),
    ]);
    table.add_row(vec![
        Cell::new("Average Team Size"),
        Cell::new(round_team_size(result.team_size)).fg(Color::Green),
        Cell::new("people"),
    ]);
    table.add_row(vec![
        Cell::new("Productivity"),
        Cell::new(format_number(result.productivity, dp)),
        Cell::new("LOC / person-month"),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("{}", table);

    let k = &result.constants;
    println!(
        "Constants: a={} b={} c={} d={}  |  Total LOC: {}",
        k.a,
        k.b,
        k.c,
        k.d,
        format_large_number(result.size_kloc * 1000.0)
    );
}

pub fn print_comparison_report(results: &[EstimateResult], opts: &OutputOptions) {
    let dp = opts.decimals;
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Mode").add_attribute(Attribute::Bold),
        Cell::new("Effort (PM)").fg(Color::Cyan),
        Cell::new("Time (mo)").fg(Color::Cyan),
        Cell::new("Team"),
        Cell::new("LOC/PM"),
    ]);

    for r in results {
        table.add_row(vec![
            Cell::new(r.mode.to_string()).add_attribute(Attribute::Bold),
            Cell::new(format_fixed(r.effort_pm, dp)),
            Cell::new(format_fixed(r.schedule_months, dp)),
            Cell::new(round_team_size(r.team_size)),
            Cell::new(format_number(r.productivity, dp)),
        ]);
    }

    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("{}", table);
}

pub fn print_modes_report(modes: &[ModeInfo]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Mode").add_attribute(Attribute::Bold),
        Cell::new("a"),
        Cell::new("b"),
        Cell::new("c"),
        Cell::new("d"),
        Cell::new("Description"),
    ]);

    for m in modes {
        table.add_row(vec![
            Cell::new(m.mode.to_string()).add_attribute(Attribute::Bold),
            Cell::new(format_fixed(m.a, 2)),
            Cell::new(format_fixed(m.b, 2)),
            Cell::new(format_fixed(m.c, 2)),
            Cell::new(format_fixed(m.d, 2)),
            Cell::new(format!("{}\n{}", m.description, m.help_text)),
        ]);
    }
    println!("{}", table);
}
