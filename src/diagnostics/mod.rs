//! `ariadne`-rendered span reports for the `run <file>` command. The
//! interactive REPL never uses this — it prints the plain tab-prefixed
//! lines the wire format specifies instead.

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use wisp::parser::ParseError;

pub(crate) fn report_parse_errors(filename: &str, source: &str, errors: &[ParseError]) {
    for error in errors {
        let span_range = error.span.start..error.span.end;
        let result = Report::build(ReportKind::Error, (filename, span_range.clone()))
            .with_config(Config::default().with_index_type(IndexType::Byte))
            .with_message(&error.message)
            .with_label(
                Label::new((filename, span_range))
                    .with_message(&error.message)
                    .with_color(Color::Red),
            )
            .finish()
            .eprint((filename, Source::from(source)));

        if let Err(report_err) = result {
            eprintln!(
                "Error: {} (at {}:{})",
                error.message, error.span.line, error.span.column
            );
            eprintln!("(Failed to display detailed error report: {report_err})");
        }
    }
}

pub(crate) fn report_plain(label: &str, message: impl std::fmt::Display) {
    eprintln!("{label}:\n {message}");
}
