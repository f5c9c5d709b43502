//! Input side: reads the probe's text stream and forwards it line by line.
//!
//! A background thread owns the reader and pushes [`StreamEvent`]s into an
//! `mpsc` channel. The UI thread drains the channel once per frame, so all
//! session state stays on a single thread.

use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};

/// Where temperature lines come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    /// The probe shows up as keyboard input, so stdin is the usual source.
    #[default]
    Stdin,
    /// A file or device node.
    Path(PathBuf),
}

impl InputSource {
    /// Open the source as a buffered reader.
    pub fn open(&self) -> std::io::Result<Box<dyn BufRead + Send>> {
        Ok(match self {
            InputSource::Stdin => Box::new(BufReader::new(std::io::stdin())),
            InputSource::Path(p) => Box::new(BufReader::new(std::fs::File::open(p)?)),
        })
    }
}

/// Messages sent from the reader thread to the UI.
#[derive(Debug)]
pub enum StreamEvent {
    /// One complete line, without its line terminator.
    Line(String),
    /// End of input; no more samples will arrive.
    Closed,
    /// The read failed; the reader has stopped.
    Error(std::io::Error),
}

/// Create the channel used between the reader thread and the UI.
pub fn channel_lines() -> (Sender<StreamEvent>, Receiver<StreamEvent>) {
    std::sync::mpsc::channel()
}

/// Read `reader` to the end, sending each line as it completes.
///
/// Bytes that are not valid UTF-8 are replaced rather than failing the line.
/// A final line without a terminator is still delivered. Returns when the
/// input ends, a read fails, or the receiver hangs up.
pub fn forward_lines<R: BufRead>(mut reader: R, tx: &Sender<StreamEvent>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                let _ = tx.send(StreamEvent::Closed);
                return;
            }
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string();
                if tx.send(StreamEvent::Line(line)).is_err() {
                    return;
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => {
                let _ = tx.send(StreamEvent::Error(e));
                return;
            }
        }
    }
}

/// Spawn a thread forwarding lines from `reader`.
pub fn spawn_line_reader<R: BufRead + Send + 'static>(reader: R) -> Receiver<StreamEvent> {
    let (tx, rx) = channel_lines();
    std::thread::Builder::new()
        .name("tempchart-input".into())
        .spawn(move || forward_lines(reader, &tx))
        .map_err(|e| log::error!("failed to start input thread: {e}"))
        .ok();
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(input: &[u8]) -> Vec<String> {
        let (tx, rx) = channel_lines();
        forward_lines(Cursor::new(input.to_vec()), &tx);
        drop(tx);
        rx.iter()
            .map(|e| match e {
                StreamEvent::Line(l) => l,
                StreamEvent::Closed => "<closed>".to_string(),
                StreamEvent::Error(e) => format!("<error {e}>"),
            })
            .collect()
    }

    #[test]
    fn splits_on_newlines_and_reports_close() {
        let lines = collect(b";\t:\t23.50\t22.00\t1s\n;\t:\n");
        assert_eq!(lines, vec![";\t:\t23.50\t22.00\t1s", ";\t:", "<closed>"]);
    }

    #[test]
    fn strips_crlf_and_keeps_unterminated_tail() {
        let lines = collect(b"a b 1.0\r\nc d 2.0");
        assert_eq!(lines, vec!["a b 1.0", "c d 2.0", "<closed>"]);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let lines = collect(b"; : 20.25 \xff 1s\n");
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("; : 20.25 "));
        assert!(lines[0].contains('\u{FFFD}'));
    }

    #[test]
    fn spawned_reader_delivers_all_lines() {
        let rx = spawn_line_reader(Cursor::new(b"x y 1\nx y 2\n".to_vec()));
        let events: Vec<StreamEvent> = rx.iter().collect();
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[0], StreamEvent::Line(l) if l == "x y 1"));
        assert!(matches!(events[2], StreamEvent::Closed));
    }
}
