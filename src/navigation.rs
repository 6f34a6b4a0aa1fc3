//! Navigation and sharing capabilities handed to the front-end.
//!
//! Library code never scrolls, copies, or opens anything itself; whatever
//! surface hosts the curriculum supplies a [`Navigator`].
use std::io::Write;

use anyhow::Result;

pub trait Navigator {
    /// Bring the section with this id into view.
    fn scroll_to(&mut self, section_id: &str) -> Result<()>;

    /// Open a URL in a new browsing context. Fire-and-forget.
    fn open_external(&mut self, url: &str) -> Result<()>;

    /// Offer a link for sharing (clipboard or equivalent).
    fn share(&mut self, link: &str) -> Result<()>;

    /// Produce a printable rendition of the current view.
    fn print(&mut self) -> Result<()>;
}

/// Anchor fragment for a section id.
#[must_use]
pub fn section_anchor(section_id: &str) -> String {
    format!("#{section_id}")
}

/// Navigator for terminals: every action becomes a line of output.
pub struct TerminalNavigator<W: Write> {
    out: W,
}

impl<W: Write> TerminalNavigator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Navigator for TerminalNavigator<W> {
    fn scroll_to(&mut self, section_id: &str) -> Result<()> {
        writeln!(self.out, "→ {}", section_anchor(section_id))?;
        Ok(())
    }

    fn open_external(&mut self, url: &str) -> Result<()> {
        writeln!(self.out, "🔗 {url}")?;
        Ok(())
    }

    fn share(&mut self, link: &str) -> Result<()> {
        writeln!(self.out, "تم نسخ الرابط: {link}")?;
        Ok(())
    }

    fn print(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_navigator_writes_lines() {
        let mut nav = TerminalNavigator::new(Vec::new());
        nav.scroll_to("environmental").unwrap();
        nav.open_external("https://www.google.com/search?q=x").unwrap();
        nav.share("#social").unwrap();
        nav.print().unwrap();

        let out = String::from_utf8(nav.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "→ #environmental");
        assert_eq!(lines[1], "🔗 https://www.google.com/search?q=x");
        assert_eq!(lines[2], "تم نسخ الرابط: #social");
        assert_eq!(lines.len(), 3);
    }
}
