// SPDX-License-Identifier: MIT
//
// textobj: resolve a Vim text object against a file.
//
// The binary is a thin shell around textobj-core:
//
//   args → SelectionState + Options → resolve_keys → span + covered text
//
// Positions are 1-indexed `line:col` on the way in and on the way out.
// A resolution that finds nothing prints `no match` and exits with 1;
// bad arguments, unreadable files and bad `--set` values exit with 2.
//
// Logging goes to stderr and is controlled by TEXTOBJ_LOG (default `warn`),
// e.g. `TEXTOBJ_LOG=textobj_core=trace`.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use textobj_core::mode::{Mode, Operator, VisualKind};
use textobj_core::position::Range;
use textobj_core::text_object::TextObjectKind;
use textobj_core::{resolve_keys, Buffer, Options, Position, Resolution, Resolved, SelectionState};

#[derive(Parser, Debug)]
#[command(name = "textobj", about = "Resolve a Vim text object in a file")]
struct Opts {
    /// File to read.
    path: PathBuf,

    /// Cursor position, `line:col`, 1-indexed.
    #[arg(value_parser = parse_position)]
    cursor: Position,

    /// Text object keys: `aw`, `is`, `ap`, `ii`, `ia`, `i(`, `af`, ...
    keys: String,

    /// Start a visual selection anchored at `line:col`.
    #[arg(long, value_parser = parse_position)]
    visual: Option<Position>,

    /// Make the visual selection line-wise.
    #[arg(long, requires = "visual")]
    linewise: bool,

    /// Repeat count (`3aw`).
    #[arg(long)]
    count: Option<usize>,

    /// Resolve as the target of a pending operator (`d`, `c`, `y`, `>`, `<`, `gq`).
    #[arg(long, value_parser = parse_operator, conflicts_with = "visual")]
    op: Option<Operator>,

    /// `:set` arguments applied before resolving, e.g. `--set "ao=({ ac=)}"`.
    #[arg(long = "set", value_name = "ARGS")]
    set: Vec<String>,
}

impl Opts {
    fn selection_state(&self) -> SelectionState {
        let mut state = match (self.visual, self.op) {
            (Some(anchor), _) => {
                let kind = if self.linewise {
                    VisualKind::Line
                } else {
                    VisualKind::Char
                };
                SelectionState::visual(anchor, self.cursor, kind)
            }
            (None, Some(op)) => SelectionState::operator_pending(self.cursor, op),
            (None, None) => SelectionState::at(self.cursor),
        };
        state.count = self.count;
        state
    }
}

fn parse_position(arg: &str) -> Result<Position, String> {
    let (line, col) = arg
        .split_once(':')
        .ok_or_else(|| format!("expected line:col, got {arg:?}"))?;
    let one_based = |part: &str| {
        part.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(|| format!("expected a number from 1, got {part:?}"))
    };
    Ok(Position::new(one_based(line)?, one_based(col)?))
}

fn parse_operator(arg: &str) -> Result<Operator, String> {
    Operator::from_keys(arg).ok_or_else(|| format!("unknown operator {arg:?}"))
}

/// `<span> <kind> <covered text>`, one line.
///
/// With an operator pending the span is already the operator's half-open
/// range; otherwise it is inclusive.
fn describe(buf: &Buffer, resolved: &Resolved, mode: Mode) -> String {
    let span = resolved.span;
    let range = if mode.operator().is_some() {
        Range::new(span.first(), span.last())
    } else {
        buf.span_to_range(span)
    };
    let text = buf.slice(range).map(|s| s.to_string()).unwrap_or_default();
    let kind = match resolved.kind {
        TextObjectKind::Charwise => "charwise",
        TextObjectKind::Linewise => "linewise",
    };
    format!("{span} {kind} {text:?}")
}

fn run(opts: &Opts) -> anyhow::Result<bool> {
    let buf = Buffer::from_file(&opts.path)
        .with_context(|| format!("cannot read {}", opts.path.display()))?;

    let mut options = Options::default();
    for args in &opts.set {
        let messages = options
            .apply_set(args)
            .with_context(|| format!(":set {args}"))?;
        for message in messages {
            eprintln!("{message}");
        }
    }

    let state = opts.selection_state();
    tracing::debug!(keys = %opts.keys, cursor = %state.active, mode = %state.mode, ?buf, "resolving");

    match resolve_keys(&opts.keys, &buf, &state, &options)? {
        Resolution::Found(resolved) => {
            println!("{}", describe(&buf, &resolved, state.mode));
            Ok(true)
        }
        Resolution::Failed { .. } => {
            println!("no match");
            Ok(false)
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("TEXTOBJ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let opts = Opts::parse();

    match run(&opts) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("textobj: {e:#}");
            ExitCode::from(2)
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
