//! Verse Lyrics
//!
//! Line-tagged timed-text (LRC) parsing and the cursor that resolves which
//! lyric line is active at a playback position.
//!
//! Parsing is lenient by design: lines without a recognizable time tag are
//! not lyrics and are dropped, never reported as errors. A physical line may
//! carry several tags (a chorus sung at multiple times); each tag becomes
//! its own entry with the line's text.
//!
//! # Example
//!
//! ```rust
//! use verse_lyrics::{active_line, parse_lrc};
//!
//! let lines = parse_lrc("[00:00.00]first\n[00:05.00]second\n[00:10.00]third");
//! assert_eq!(lines.len(), 3);
//! assert_eq!(lines[1].text, "second");
//!
//! assert_eq!(active_line(&lines, 7.2), Some(1));
//! assert_eq!(active_line(&lines, 0.0), Some(0));
//! assert_eq!(active_line(&[], 7.2), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cursor;
pub mod parse;

pub use cursor::active_line;
pub use parse::{parse_lrc, LyricLine};
