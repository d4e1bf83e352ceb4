//! Rendering for the cell editor.

use super::model::Model;
use lipgloss_extras::lipgloss;
use unicode_width::UnicodeWidthStr;

impl Model {
    /// Renders the visible part of the draft, padded to the editor width.
    pub fn view(&self) -> String {
        if self.value.is_empty() && !self.focus && !self.placeholder.is_empty() {
            return self.placeholder_view();
        }

        let end = self.offset_right.min(self.value.len());
        let start = self.offset.min(end);

        let mut out = String::new();
        let used = if self.focus {
            let caret_at = self.pos.clamp(start, end);
            let before: String = self.value[start..caret_at].iter().collect();
            let under = if caret_at < end {
                self.value[caret_at].to_string()
            } else {
                " ".to_string()
            };
            let mut room = self.width.saturating_sub(before.width() + under.width());
            let after: String = self
                .value
                .get(caret_at + 1..end)
                .unwrap_or_default()
                .iter()
                .take_while(|&&c| {
                    let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
                    if self.width > 0 && w > room {
                        return false;
                    }
                    room = room.saturating_sub(w);
                    true
                })
                .collect();

            let mut cur = self.cursor.clone();
            cur.set_char(&under);
            if !before.is_empty() {
                out.push_str(&self.text_style.render(&before));
            }
            out.push_str(&cur.view());
            if !after.is_empty() {
                out.push_str(&self.text_style.render(&after));
            }
            before.width() + under.width() + after.width()
        } else {
            let visible: String = self.value[start..end].iter().collect();
            if !visible.is_empty() {
                out.push_str(&self.text_style.render(&visible));
            }
            visible.width()
        };

        if self.width > used {
            out.push_str(&" ".repeat(self.width - used));
        }
        out
    }

    fn placeholder_view(&self) -> String {
        let mut text = self.placeholder.clone();
        if self.width > 0 {
            text = truncate_to_width(&text, self.width);
        }
        let rendered = self.placeholder_style.render(&text);
        let used = lipgloss::width_visible(&rendered);
        if self.width > used {
            format!("{}{}", rendered, " ".repeat(self.width - used))
        } else {
            rendered
        }
    }
}

pub(crate) fn truncate_to_width(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}
