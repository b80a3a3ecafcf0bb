use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// List the output formats `render --format` accepts.
pub(crate) fn run_formats(default: &str) {
    for format in gamenfo::all_formats() {
        let marker = if format.name().eq_ignore_ascii_case(default) {
            " (default)"
        } else {
            ""
        };
        println!(
            "  {:<6} .{}{}",
            format.name().if_supports_color(Stdout, |t| t.bold()),
            format.file_extension(),
            marker.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}
