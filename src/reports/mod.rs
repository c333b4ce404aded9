use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use lapboard::config::ReportParams;
use lapboard::race::RaceState;
use lapboard::records::RecordBook;
use lapboard::scorer::Standings;
use lapboard::timecode::{self, LapTime};

pub fn print_race(
    title: &str,
    race: &RaceState,
    standings: &Standings,
    records: Option<&RecordBook>,
    params: &ReportParams,
) {
    println!(
        "\n🏁 === {} ({} racers, {} maps) === 🏁",
        title,
        race.racers.len(),
        race.maps.len()
    );

    if !params.hide_maps {
        print_map_report(race, standings, records);
    }
    if !params.hide_matrix {
        print_points_matrix(race, standings);
    }
    print_standings(race, standings);
}

pub fn print_map_report(race: &RaceState, standings: &Standings, records: Option<&RecordBook>) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("Map").add_attribute(Attribute::Bold),
        Cell::new("Best").fg(Color::Cyan),
    ];
    header.extend(race.racers.iter().map(|r| Cell::new(&r.name)));
    table.add_row(header);

    for summary in &standings.maps {
        let Some(map) = race.maps.get(summary.index) else {
            continue;
        };
        let label = if summary.is_btc {
            format!("{} [BTC]", summary.name)
        } else {
            summary.name.clone()
        };

        let mut row = vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(timecode::encode_time(summary.best_time)).fg(Color::Cyan),
        ];

        for (slot, racer) in race.racers.iter().enumerate() {
            let time = map.time_at(slot).filter(|t| t.is_valid());
            let mut text = match (time, summary.best_time) {
                (Some(t), Some(best)) if t == best => t.to_string(),
                (Some(t), Some(best)) => format!("{} (+{})", t, format_gap(t.behind(best))),
                _ => timecode::PLACEHOLDER.to_string(),
            };
            // Star a time that matches or beats the stored record
            if let (Some(book), Some(t)) = (records, time) {
                if book.is_personal_best(&racer.name, &map.name, t) {
                    text.push_str(" *");
                }
            }
            let cell = Cell::new(text);
            row.push(if summary.winners.contains(&slot) {
                cell.fg(Color::Green)
            } else {
                cell
            });
        }
        table.add_row(row);
    }
    println!("\n{}", table);
}

pub fn print_points_matrix(race: &RaceState, standings: &Standings) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Points").add_attribute(Attribute::Bold)];
    header.extend(race.racers.iter().map(|r| Cell::new(&r.name)));
    table.add_row(header);

    for i in 1..=race.racers.len() {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (map, row) in race.maps.iter().zip(standings.matrix.rows()) {
        let mut cells = vec![Cell::new(&map.name)];
        cells.extend(row.iter().map(|p| Cell::new(p)));
        table.add_row(cells);
    }

    let mut total_row = vec![Cell::new("Total").add_attribute(Attribute::Bold)];
    total_row.extend(
        standings
            .matrix
            .totals(race.racers.len())
            .into_iter()
            .map(|t| Cell::new(t).add_attribute(Attribute::Bold)),
    );
    table.add_row(total_row);

    println!("\n{}", table);
}

pub fn print_standings(race: &RaceState, standings: &Standings) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Racer"),
        Cell::new("Signature"),
        Cell::new("Total").fg(Color::Cyan),
    ]);

    for entry in &standings.ranking {
        let signature = race
            .racers
            .get(entry.original_index)
            .map(|r| r.signature_map.trim())
            .unwrap_or_default();
        let rank_cell = Cell::new(entry.rank).set_alignment(CellAlignment::Right);
        table.add_row(vec![
            if entry.rank == 1 {
                rank_cell.fg(Color::Yellow)
            } else {
                rank_cell
            },
            Cell::new(&entry.name).add_attribute(Attribute::Bold),
            Cell::new(signature),
            Cell::new(entry.total_score)
                .fg(Color::Cyan)
                .set_alignment(CellAlignment::Right),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_decode_table(entries: &[(String, Option<LapTime>)]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Input").add_attribute(Attribute::Bold),
        Cell::new("Seconds"),
        Cell::new("Canonical"),
    ]);

    for (input, time) in entries {
        let seconds = match time {
            Some(t) => format!("{:.2}", t.as_seconds()),
            None => "invalid".to_string(),
        };
        let seconds_cell = if time.is_some_and(LapTime::is_valid) {
            Cell::new(seconds)
        } else {
            Cell::new(seconds).fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(input),
            seconds_cell,
            Cell::new(timecode::encode_time(*time)),
        ]);
    }
    println!("{}", table);
}

// +S.CC under a minute, otherwise the full notation.
fn format_gap(gap: LapTime) -> String {
    let h = gap.hundredths();
    if h < 6000 {
        format!("{}.{:02}", h / 100, h % 100)
    } else {
        gap.to_string()
    }
}
