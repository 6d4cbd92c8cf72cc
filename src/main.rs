// std imports
use std::{env, fs, ops::Range, process::ExitCode};

// third-party imports
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};

// local imports
use json_tree::{Error, parse_str};

// ---

fn main() -> ExitCode {
    let Some(filename) = env::args().nth(1) else {
        eprintln!("usage: json-tree <file>");
        return ExitCode::FAILURE;
    };

    let src = match fs::read_to_string(&filename) {
        Ok(src) => src,
        Err(err) => {
            eprintln!("error: cannot read {filename}: {err}");
            return ExitCode::FAILURE;
        }
    };

    match parse_str(&src) {
        Ok(value) => {
            println!("{value:#?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&filename, &src, &err);
            ExitCode::FAILURE
        }
    }
}

fn report(filename: &str, src: &str, err: &Error) {
    // parse errors carry no source span, point at the end of input
    let span: Range<usize> = match err {
        Error::Lex(err) => err.span.clone(),
        Error::Parse(_) => src.len()..src.len(),
    };

    let mut colors = ColorGenerator::new();
    let color = colors.next();

    Report::build(ReportKind::Error, (filename, span.clone()))
        .with_message("invalid JSON")
        .with_label(
            Label::new((filename, span))
                .with_message(err.to_string())
                .with_color(color),
        )
        .finish()
        .eprint((filename, Source::from(src)))
        .ok();
}
