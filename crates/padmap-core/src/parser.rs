//! Line parser for controller mapping databases
//!
//! A database is a sequence of lines. `#<Platform>` switches the platform
//! that following data lines are filed under; any other `#` line is a
//! comment. Data lines seen before a recognized header are dropped.

use crate::platform::Platform;
use crate::table::MappingRecord;

const COMMENT_MARKER: char = '#';

/// A line that carries meaning for the merged table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// A recognized platform header
    Header(Platform),
    /// A data line filed under the active platform
    Mapping {
        platform: Platform,
        record: MappingRecord,
    },
}

/// Per-file scan state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseState {
    #[default]
    NoPlatform,
    InPlatform(Platform),
}

impl ParseState {
    /// Advance over one raw line
    pub fn step(self, raw: &str) -> (ParseState, Option<ParsedLine>) {
        let line = raw.trim();
        if line.is_empty() {
            return (self, None);
        }

        if let Some(rest) = line.strip_prefix(COMMENT_MARKER) {
            return match Platform::from_header_name(rest.trim()) {
                Some(platform) => (
                    ParseState::InPlatform(platform),
                    Some(ParsedLine::Header(platform)),
                ),
                None => (self, None),
            };
        }

        match self {
            ParseState::InPlatform(platform) => (
                self,
                Some(ParsedLine::Mapping {
                    platform,
                    record: MappingRecord::from_line(line),
                }),
            ),
            ParseState::NoPlatform => (self, None),
        }
    }

    /// The platform data lines are currently filed under
    pub fn platform(self) -> Option<Platform> {
        match self {
            ParseState::InPlatform(platform) => Some(platform),
            ParseState::NoPlatform => None,
        }
    }
}

/// Lazy iterator over the meaningful lines of one database
#[derive(Debug)]
pub struct MappingLines<I> {
    lines: I,
    state: ParseState,
}

impl<I> MappingLines<I> {
    /// Current scan state
    pub fn state(&self) -> ParseState {
        self.state
    }
}

impl<I, S> Iterator for MappingLines<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = ParsedLine;

    fn next(&mut self) -> Option<Self::Item> {
        for raw in self.lines.by_ref() {
            let (state, parsed) = self.state.step(raw.as_ref());
            self.state = state;
            if parsed.is_some() {
                return parsed;
            }
        }
        None
    }
}

/// Parse the lines of a single database
///
/// Each call starts with no active platform.
pub fn parse_lines<I, S>(lines: I) -> MappingLines<I::IntoIter>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    MappingLines {
        lines: lines.into_iter(),
        state: ParseState::NoPlatform,
    }
}

/// Lines of database text split on `\n`, `\r\n` or a lone `\r`
#[derive(Debug, Clone)]
pub struct DatabaseLines<'a> {
    rest: &'a str,
}

impl<'a> DatabaseLines<'a> {
    pub fn new(content: &'a str) -> Self {
        Self { rest: content }
    }
}

impl<'a> Iterator for DatabaseLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                let line = &self.rest[..end];
                let break_len = if self.rest[end..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &self.rest[end + break_len..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Parse database text
pub fn parse_str(content: &str) -> MappingLines<DatabaseLines<'_>> {
    parse_lines(DatabaseLines::new(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(platform: Platform, line: &str) -> ParsedLine {
        ParsedLine::Mapping {
            platform,
            record: MappingRecord::from_line(line),
        }
    }

    #[test]
    fn test_parse_simple_database() {
        let db = "#Linux\nabc,Pad,a:b0,\n#Windows\ndef,Pad Win,a:b0,\n";
        let parsed: Vec<ParsedLine> = parse_str(db).collect();

        assert_eq!(
            parsed,
            vec![
                ParsedLine::Header(Platform::Linux),
                mapping(Platform::Linux, "abc,Pad,a:b0,"),
                ParsedLine::Header(Platform::Windows),
                mapping(Platform::Windows, "def,Pad Win,a:b0,"),
            ]
        );
    }

    #[test]
    fn test_orphan_lines_are_dropped() {
        let parsed: Vec<ParsedLine> = parse_str("abc,Pad,\n#Linux\n").collect();
        assert_eq!(parsed, vec![ParsedLine::Header(Platform::Linux)]);
    }

    #[test]
    fn test_unknown_header_is_a_comment() {
        let parsed: Vec<ParsedLine> = parse_str("#Nintendo\nabc,Pad,\n").collect();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_unknown_header_keeps_active_platform() {
        let db = "#Linux\n# Game Controller DB for SDL\nabc,Pad,\n";
        let parsed: Vec<ParsedLine> = parse_str(db).collect();
        assert_eq!(parsed.last(), Some(&mapping(Platform::Linux, "abc,Pad,")));
    }

    #[test]
    fn test_header_whitespace_is_trimmed() {
        let parsed: Vec<ParsedLine> = parse_str("   #  Mac OS X  \n").collect();
        assert_eq!(parsed, vec![ParsedLine::Header(Platform::MacOsX)]);
    }

    #[test]
    fn test_data_lines_are_trimmed() {
        let parsed: Vec<ParsedLine> = parse_str("#Web\n\t abc,Pad, \r\n").collect();
        assert_eq!(parsed[1], mapping(Platform::Web, "abc,Pad,"));
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let parsed: Vec<ParsedLine> = parse_str("\n   \n#iOS\n\n\nabc,Pad,\n\n").collect();
        assert_eq!(
            parsed,
            vec![ParsedLine::Header(Platform::Ios), mapping(Platform::Ios, "abc,Pad,")]
        );
    }

    #[test]
    fn test_line_without_comma() {
        let parsed: Vec<ParsedLine> = parse_str("#Android\nno-delimiter-here\n").collect();
        match &parsed[1] {
            ParsedLine::Mapping { record, .. } => {
                assert_eq!(record.key, "no-delimiter-here");
                assert_eq!(record.line, "no-delimiter-here");
            }
            other => panic!("expected mapping, got {:?}", other),
        }
    }

    #[test]
    fn test_state_machine_transitions() {
        let state = ParseState::default();
        assert_eq!(state, ParseState::NoPlatform);

        let (state, _) = state.step("#Linux");
        assert_eq!(state, ParseState::InPlatform(Platform::Linux));

        let (state, _) = state.step("# just a comment");
        assert_eq!(state.platform(), Some(Platform::Linux));

        let (state, _) = state.step("#Windows");
        assert_eq!(state.platform(), Some(Platform::Windows));
    }

    #[test]
    fn test_each_parse_starts_without_platform() {
        let mut first = parse_str("#Linux\n");
        assert!(first.next().is_some());
        assert_eq!(first.state(), ParseState::InPlatform(Platform::Linux));

        let second: Vec<ParsedLine> = parse_str("abc,Pad,\n").collect();
        assert!(second.is_empty());
    }

    #[test]
    fn test_carriage_return_only_line_endings() {
        let parsed: Vec<ParsedLine> = parse_str("#Linux\rk1,Pad,\r").collect();
        assert_eq!(
            parsed,
            vec![ParsedLine::Header(Platform::Linux), mapping(Platform::Linux, "k1,Pad,")]
        );
    }

    #[test]
    fn test_database_lines_split_all_endings() {
        let lines: Vec<&str> = DatabaseLines::new("a\r\nb\rc\nd").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);

        let lines: Vec<&str> = DatabaseLines::new("a\n\r\nb\r\r").collect();
        assert_eq!(lines, vec!["a", "", "b", ""]);

        assert_eq!(DatabaseLines::new("").count(), 0);
    }

    #[test]
    fn test_parse_owned_lines() {
        let lines = vec!["#Linux".to_string(), "abc,Pad,".to_string()];
        assert_eq!(parse_lines(lines).count(), 2);
    }
}
