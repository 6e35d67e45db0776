use owo_colors::OwoColorize;
use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Alignment, Format, Modify, Panel};
use tabled::Table;

/// The super table wraps the per-codec table with a title and a footer holding the total benchmark time
pub(crate) fn format_super_table(
    super_table: &Table,
    processing_time: std::time::Duration,
    styled: bool,
) -> Table {
    let mut modded_table = super_table.clone();

    let _ = modded_table.with(Panel::header("Report")).with(
        Modify::new(Rows::single(0))
            .with(Alignment::center())
            .with(Format::content(move |x| {
                let x = x.to_uppercase();
                if styled {
                    x.green().to_string()
                } else {
                    x
                }
            })),
    );

    let row_count = modded_table.count_rows();
    let _ = modded_table
        .with(Panel::footer(format!(
            "Benchmarked in {processing_time:.02?}"
        )))
        .with(
            Modify::new(Rows::single(row_count))
                .with(Alignment::center())
                .with(Format::content(move |x| {
                    if styled {
                        x.dimmed().to_string()
                    } else {
                        x.to_string()
                    }
                })),
        );
    modded_table
}

/// Formats the table with one row per codec
///
/// Header row in all caps, codec names, sizes and latencies each in their own colour.
pub(crate) fn format_codec_sub_table(codec_table: &mut Table, styled: bool) {
    let style = tabled::settings::Style::rounded()
        .remove_left()
        .remove_right()
        .remove_top()
        .remove_bottom()
        .remove_vertical()
        .horizontals([tabled::settings::style::HorizontalLine::new(
            1,
            tabled::settings::Style::rounded().get_horizontal(),
        )
        .main(Some('═'))
        .intersection(None)]);

    let _ = codec_table
        .with(style)
        .with(Modify::new(Rows::single(0)).with(Format::content(|x| x.to_uppercase())))
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));

    if !styled {
        return;
    }

    let _ = codec_table
        .with(
            Modify::new(Columns::single(0)).with(Format::content(|s| s.bright_blue().to_string())),
        )
        .with(
            Modify::new(Columns::single(1)).with(Format::content(|s| s.bright_cyan().to_string())),
        )
        .with(Modify::new(Columns::new(2..)).with(Format::content(|s| s.yellow().to_string())))
        .with(
            Modify::new(Rows::single(0))
                .with(Format::content(|x| x.bright_yellow().to_string())),
        );
}
