use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::debug;

use crate::errors::{self, TodoError};
use crate::runner::commands::{self, parse_line, Command};
use crate::runner::handlers::{handle_command, Outcome, Session};
use crate::ui;

/// How the driver reacts to a failing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOptions {
    /// Stop at the first failing line and return its error.
    pub strict: bool,
    /// Print list views as JSON instead of text.
    pub json: bool,
}

/// Counters reported when the loop finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: usize,
    pub commands: usize,
    pub errors: usize,
}

/// Read action lines from `input` until EOF or `quit`, applying each to
/// `session`. Views go to `out`, per-line errors to `err_out`.
pub fn run_lines<R: BufRead, W: Write, E: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    err_out: &mut E,
    opts: LoopOptions,
) -> anyhow::Result<RunSummary> {
    let mut summary = RunSummary::default();
    for (idx, line) in input.lines().enumerate() {
        let line = line.context("failed to read command input")?;
        let line_no = idx + 1;
        summary.lines = line_no;

        let result = parse_line(&line)
            .map_err(anyhow::Error::from)
            .and_then(|cmd| match cmd {
                Some(cmd) => run_one(session, cmd, out, opts).map(Some),
                None => Ok(None),
            });

        match result {
            Ok(None) => {}
            Ok(Some(outcome)) => {
                summary.commands += 1;
                if outcome == Outcome::Quit {
                    debug!(line = line_no, "quit requested");
                    break;
                }
            }
            Err(e) => {
                summary.errors += 1;
                let msg = match e.downcast_ref::<TodoError>() {
                    Some(te) => errors::render_todo_error(te, Some(line_no)),
                    None => format!("line {line_no}: {e:#}"),
                };
                debug!("{msg}");
                // In strict mode the caller reports the returned error.
                if opts.strict {
                    return Err(e.context(format!("line {line_no}")));
                }
                writeln!(err_out, "error: {msg}")?;
            }
        }
    }
    Ok(summary)
}

fn run_one<W: Write>(
    session: &mut Session,
    cmd: Command,
    out: &mut W,
    opts: LoopOptions,
) -> anyhow::Result<Outcome> {
    // Every mutating line prints a view, even when it changed nothing.
    let show_view = cmd.mutates() || cmd == Command::List;
    if cmd == Command::Help {
        out.write_all(commands::HELP.as_bytes())?;
    }
    let before = session.manager.revision();
    let outcome = handle_command(session, cmd)?;
    debug!(before, after = session.manager.revision(), "command applied");
    if show_view {
        print_view(session, out, opts)?;
    }
    Ok(outcome)
}

/// Print the current list view in the configured format.
pub fn print_view<W: Write>(session: &Session, out: &mut W, opts: LoopOptions) -> anyhow::Result<()> {
    if opts.json {
        let json = ui::render_json(&session.manager.snapshot())?;
        writeln!(out, "{json}")?;
    } else {
        out.write_all(ui::render_text(&session.manager, session.settings.show_ids).as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::settings::Settings;

    fn run(script: &str, opts: LoopOptions) -> (anyhow::Result<RunSummary>, String, String, Session) {
        let settings = Settings {
            show_ids: false,
            ..Settings::default()
        };
        let mut session = Session::new(settings, Some(1));
        let mut out = Vec::new();
        let mut err = Vec::new();
        let res = run_lines(&mut session, script.as_bytes(), &mut out, &mut err, opts);
        (
            res,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            session,
        )
    }

    const TEXT: LoopOptions = LoopOptions {
        strict: false,
        json: false,
    };

    #[test]
    fn prints_view_after_each_mutation() {
        let (res, out, err, _) = run("add a\n# note\n\nadd -c work b\n", TEXT);
        let summary = res.unwrap();
        assert_eq!(summary.lines, 4);
        assert_eq!(summary.commands, 2);
        assert_eq!(summary.errors, 0);
        assert_eq!(out, "  □ a [Other]\n  □ a [Other]\n  ◷ b [Work]\n");
        assert!(err.is_empty());
    }

    #[test]
    fn errors_are_reported_and_skipped() {
        let (res, out, err, session) = run("bogus\nadd\nadd x\n", TEXT);
        let summary = res.unwrap();
        assert_eq!(summary.errors, 2);
        assert_eq!(session.manager.len(), 1);
        assert!(err.contains("line 1: unknown command `bogus`"));
        assert!(err.contains("line 2: task text must not be blank"));
        assert_eq!(out, "  □ x [Other]\n");
    }

    #[test]
    fn strict_mode_stops_on_mismatch() {
        let mut session = Session::new(Settings::default(), None);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let script = "add a\nadd b\n";
        run_lines(&mut session, script.as_bytes(), &mut out, &mut err, TEXT).unwrap();
        let a = session.manager.items()[0].id();
        let b = session.manager.items()[1].id();
        let script = format!("edit {a}\nchange {b} x\nadd never\n");
        let opts = LoopOptions {
            strict: true,
            json: false,
        };
        let e = run_lines(&mut session, script.as_bytes(), &mut out, &mut err, opts).unwrap_err();
        assert!(e.downcast_ref::<TodoError>().is_some());
        assert_eq!(session.manager.len(), 2);
        assert_eq!(e.to_string(), "line 2");
        assert!(format!("{e:#}").contains(&format!("cannot edit item #{b}")));
        // The failing line is reported once, by whoever handles the error.
        assert!(err.is_empty());
    }

    #[test]
    fn quit_ends_the_loop() {
        let (res, _, _, session) = run("add a\nquit\nadd b\n", TEXT);
        assert_eq!(res.unwrap().commands, 2);
        assert_eq!(session.manager.len(), 1);
    }

    #[test]
    fn json_view() {
        let (res, out, _, _) = run(
            "add a\n",
            LoopOptions {
                strict: false,
                json: true,
            },
        );
        res.unwrap();
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["items"][0]["task"], "a");
        assert!(value["editing"].is_null());
    }
}
