//! Line scanner for lang files.
//!
//! Lang files are edited as raw line sequences, never through a DOM, so
//! untouched lines survive byte-for-byte. The scanner walks a file line by
//! line and tracks whether the cursor sits inside an XML comment block or
//! inside a multi-line string resource, so callers (repair, sync) know
//! which lines are safe to match against and which must pass through
//! unchanged.

/// Opening marker of an XML comment, checked against the trimmed line start.
pub const COMMENT_OPEN: &str = "<!--";
/// Closing marker of an XML comment, checked against the trimmed line end.
pub const COMMENT_CLOSE: &str = "-->";
/// Closing tag of a string resource entry.
pub const RESOURCE_CLOSE: &str = "</sys:String>";

/// Scanner position within the file.
///
/// At most one of the non-`Normal` states is active at a time: an entry
/// inside a comment block is skipped wholesale and never tracked as a
/// pending multi-line resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    Normal,
    /// Inside a `<!-- ... -->` block that spans multiple lines.
    InComment,
    /// Inside a multi-line resource entry the caller has marked.
    InMultilineResource,
}

/// What the current line is, from the caller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Whitespace-only line. Passes through, never changes state.
    Blank,
    /// Line inside (or wholly containing) an XML comment. Skipped from
    /// match-testing; copied through unchanged.
    Comment,
    /// Interior line of a marked multi-line resource entry.
    ResourceBody,
    /// Line that closes a marked multi-line resource entry.
    ResourceEnd,
    /// Regular line, candidate for match-testing.
    Content,
}

/// Comment/multi-line-resource state machine shared by the repair and sync
/// transforms.
#[derive(Debug, Default)]
pub struct LineScanner {
    state: ScanState,
}

impl LineScanner {
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Classify the next line and advance the comment state.
    ///
    /// The line that closes a comment block is still classified `Comment`;
    /// the state flips back to `Normal` only after it. Entry into
    /// `InMultilineResource` is caller-driven via [`mark_multiline`]
    /// because only the caller knows whether a matched line opens an entry
    /// it wants to track.
    ///
    /// [`mark_multiline`]: LineScanner::mark_multiline
    pub fn classify(&mut self, line: &str) -> LineClass {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineClass::Blank;
        }

        match self.state {
            ScanState::InComment => {
                if trimmed.ends_with(COMMENT_CLOSE) {
                    self.state = ScanState::Normal;
                }
                LineClass::Comment
            }
            ScanState::InMultilineResource => {
                if trimmed.ends_with(RESOURCE_CLOSE) {
                    self.state = ScanState::Normal;
                    LineClass::ResourceEnd
                } else {
                    LineClass::ResourceBody
                }
            }
            ScanState::Normal => {
                if trimmed.starts_with(COMMENT_OPEN) {
                    if !trimmed.ends_with(COMMENT_CLOSE) {
                        self.state = ScanState::InComment;
                    }
                    LineClass::Comment
                } else {
                    LineClass::Content
                }
            }
        }
    }

    /// Mark the line just classified `Content` as the opening tag of a
    /// multi-line resource entry. Subsequent lines classify as
    /// `ResourceBody` until one ends with [`RESOURCE_CLOSE`].
    pub fn mark_multiline(&mut self) {
        debug_assert_eq!(self.state, ScanState::Normal);
        self.state = ScanState::InMultilineResource;
    }
}

/// Leading whitespace of `line`: the prefix up to its trimmed content.
pub fn padding(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

/// A trimmed line holding a complete entry, opening and closing tag included.
pub fn is_one_liner(trimmed: &str) -> bool {
    trimmed.ends_with(RESOURCE_CLOSE)
}
