//! Position over classified lines, shared by the body and definitions grammars.

use crate::lines::{classify, scan_lines, Line, LineKind};
use crate::tree::{Blocklist, BlocklistItem};

pub(crate) struct Cursor<'t> {
    lines: Vec<Line<'t>>,
    kinds: Vec<LineKind<'t>>,
    pos: usize,
}

impl<'t> Cursor<'t> {
    /// Scan `text[from..]` and classify every non-blank line.
    pub fn new(text: &'t str, from: usize) -> Self {
        let lines = scan_lines(text, from);
        let kinds = lines.iter().map(classify).collect();
        Self {
            lines,
            kinds,
            pos: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// The current line and its class.
    pub fn peek(&self) -> Option<(Line<'t>, LineKind<'t>)> {
        self.peek_at(0)
    }

    /// The line `ahead` positions after the current one.
    pub fn peek_at(&self, ahead: usize) -> Option<(Line<'t>, LineKind<'t>)> {
        let index = self.pos + ahead;
        Some((*self.lines.get(index)?, *self.kinds.get(index)?))
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// End offset of the most recently consumed line.
    pub fn last_end(&self) -> Option<usize> {
        self.pos
            .checked_sub(1)
            .and_then(|index| self.lines.get(index))
            .map(Line::end)
    }

    /// The first heading class at or after the current line.
    pub fn next_heading(&self) -> Option<LineKind<'t>> {
        self.kinds[self.pos.min(self.kinds.len())..]
            .iter()
            .copied()
            .find(|kind| {
                matches!(
                    kind,
                    LineKind::ChapterHeading { .. } | LineKind::PartHeading { .. }
                )
            })
    }

    /// Parse a run of list items starting at the current line.
    ///
    /// The caller guarantees the current line is an item.
    pub fn blocklist(&mut self) -> Blocklist {
        self.blocklist_from(false)
    }

    /// Items indented deeper than the list's first item open a nested list
    /// under the preceding item. A nested list ends at the first item
    /// indented less than its own first item.
    fn blocklist_from(&mut self, nested: bool) -> Blocklist {
        let base_indent = self.peek().map_or(0, |(line, _)| line.indent);
        let mut items: Vec<BlocklistItem> = Vec::new();

        while let Some((line, kind)) = self.peek() {
            let LineKind::Item { marker, content } = kind else {
                break;
            };

            if nested && line.indent < base_indent {
                break;
            }

            if line.indent > base_indent {
                if let Some(last) = items.last_mut() {
                    if last.blocklist.is_none() {
                        last.blocklist = Some(self.blocklist_from(true));
                        continue;
                    }
                }
            }

            self.advance();
            items.push(BlocklistItem {
                num: marker.to_string(),
                content: content.map(|f| f.text.to_string()).unwrap_or_default(),
                blocklist: None,
                span: line.span(),
            });
        }

        Blocklist { items }
    }
}
