//! Interactive session: one command per input line.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::export::ArtifactSink;
use crate::{Error, Result, Studio};

pub const SESSION_HELP: &str = "commands: generate (g), save (s), show, help, quit (q)";

/// Read commands from `input` until EOF or `quit`, replying on `out`.
///
/// Blank lines are skipped. Lists-not-loaded and nothing-to-export are
/// reported to the user; other generation failures end the session.
pub async fn run_session<R, W>(
    studio: &mut Studio,
    sink: &dyn ArtifactSink,
    input: R,
    mut out: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}", SESSION_HELP)?;
    out.flush()?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let cmd = line.trim();
        if cmd.is_empty() {
            continue;
        }
        match cmd {
            "generate" | "g" => match studio.generate().await {
                Ok(story) => writeln!(
                    out,
                    "{}  {}",
                    story.record.color,
                    story.record.description()
                )?,
                Err(Error::ListsNotLoaded) => writeln!(out, "{}", Error::ListsNotLoaded)?,
                Err(e) => return Err(e),
            },
            "save" | "s" => match studio.export(sink) {
                Ok(path) => writeln!(out, "saved {}", path.display())?,
                Err(Error::NothingToExport) => writeln!(out, "{}", Error::NothingToExport)?,
                Err(e) => writeln!(out, "error: {}", e)?,
            },
            "show" => match studio.current() {
                Some(story) => writeln!(
                    out,
                    "{}  {}  sha256:{}",
                    story.record.color,
                    story.record.description(),
                    story.image.digest()
                )?,
                None => writeln!(out, "no story yet")?,
            },
            "help" => writeln!(out, "{}", SESSION_HELP)?,
            "quit" | "q" => break,
            other => writeln!(out, "unknown command '{}'; {}", other, SESSION_HELP)?,
        }
        out.flush()?;
    }
    Ok(())
}
