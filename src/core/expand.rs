//! Include expansion
//!
//! Drives line-by-line scanning over an explicit stack of open files. A
//! directive line pushes the resolved file as a new frame; the frame is
//! drained completely before the including file continues, so output is a
//! pre-order traversal of the inclusion tree. Plain lines are appended
//! verbatim to the single shared output writer.
//!
//! The stack also carries the canonical identity of every file currently
//! being expanded, which turns an include cycle into a reported error instead
//! of unbounded growth.

use std::collections::HashSet;
use std::fs;
use std::io::{BufRead, BufReader, Lines, Write};
use std::path::{Path, PathBuf};

use crate::core::directive::parse_directive;
use crate::core::error::PreprocessError;
use crate::core::resolve::{resolve, SearchContext};

/// One file being expanded. The open handle lives inside `lines` and is
/// released when the frame is popped, on success and failure alike.
struct Frame<'a> {
    lines: Lines<Box<dyn BufRead + 'a>>,
    /// Path of this file; its parent directory anchors quoted resolution
    /// for directives found inside it.
    path: PathBuf,
    /// Canonicalized path used for cycle checks.
    identity: PathBuf,
    /// 1-indexed number of the most recently read line.
    line: u32,
}

fn identity_of(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Expand `input` into `output`, substituting every include directive with
/// the fully expanded contents of its target.
///
/// `input_path` is the path `input` was opened from; quoted directives in it
/// resolve relative to its parent directory. `ctx` supplies the ordered
/// search-directory list and is shared unchanged by every nested file.
///
/// On error the expansion stops immediately at every nesting level. Whatever
/// was written before the failing directive remains in `output`; callers that
/// need all-or-nothing semantics must discard it.
pub fn expand<'a, R, W>(
    input: R,
    output: &mut W,
    input_path: &Path,
    ctx: &SearchContext,
) -> Result<(), PreprocessError>
where
    R: BufRead + 'a,
    W: Write,
{
    let root_identity = identity_of(input_path);
    let mut active: HashSet<PathBuf> = HashSet::new();
    active.insert(root_identity.clone());

    let mut frames: Vec<Frame<'a>> = vec![Frame {
        lines: (Box::new(input) as Box<dyn BufRead + 'a>).lines(),
        path: input_path.to_path_buf(),
        identity: root_identity,
        line: 0,
    }];

    loop {
        let Some(frame) = frames.last_mut() else {
            break;
        };

        let Some(next) = frame.lines.next() else {
            active.remove(&frame.identity);
            frames.pop();
            continue;
        };

        let text = next?;
        frame.line += 1;
        let line = frame.line;
        let own_path = frame.path.clone();

        let Some(directive) = parse_directive(&text) else {
            writeln!(output, "{}", text)?;
            continue;
        };

        let including_dir = own_path.parent().unwrap_or_else(|| Path::new(""));
        let Some((path, file)) = resolve(&directive, including_dir, ctx) else {
            return Err(PreprocessError::UnresolvedInclude {
                target: directive.target,
                file: own_path,
                line,
            });
        };

        let identity = identity_of(&path);
        if !active.insert(identity.clone()) {
            return Err(PreprocessError::CircularInclude {
                target: directive.target,
                file: own_path,
                line,
            });
        }

        frames.push(Frame {
            lines: (Box::new(BufReader::new(file)) as Box<dyn BufRead + 'a>).lines(),
            path,
            identity,
            line: 0,
        });
    }

    Ok(())
}
