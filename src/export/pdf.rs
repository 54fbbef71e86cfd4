use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH: f32 = 0.55;

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode text for a WinAnsi Type1 font: Latin-1 passes through, `€` maps
/// to 0x80, `…` to 0x85, anything else becomes `?`.
pub(crate) fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '€' => 0x80,
            '…' => 0x85,
            c if (c as u32) < 0x80 => c as u8,
            c if (0xA0..=0xFF).contains(&(c as u32)) => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // ids are assigned by hand
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,

            next_id,
            font_id,

            font_size: 10.0,
            header_font_size: 11.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        let bytes = to_win_ansi(text);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    /// Cut `text` so it fits a cell of width `w`.
    fn clip(text: &str, w: f32, font_size: f32) -> String {
        let max_chars = ((w - 8.0) / (font_size * AVG_GLYPH)).floor().max(1.0) as usize;
        if text.chars().count() <= max_chars {
            return text.to_string();
        }
        let mut s: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        s.push('…');
        s
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        font_size: f32,
    ) {
        let mut x = self.margin;

        for (text, w) in row.iter().zip(col_widths) {
            let shown = Self::clip(text, *w, font_size);
            self.draw_text(content, x + 4.0, y + 6.0, font_size, &shown);
            self.draw_cell_borders(content, x, y, *w, self.row_h);
            x += w;
        }
    }

    /// Scale relative column weights to the printable page width.
    pub fn fixed_widths(&self, weights: &[f32]) -> Vec<f32> {
        let total: f32 = weights.iter().sum();
        let max = self.page_w - 2.0 * self.margin;
        weights.iter().map(|w| w / total * max).collect()
    }

    fn fill_band(&self, content: &mut Content, y: f32, width: f32, rgb: (f32, f32, f32)) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin + 15.0,
            self.title_font_size,
            title,
        );

        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            self.page_w - self.margin - 60.0,
            self.margin - 35.0,
            self.font_size,
            &pg,
        );
    }

    /// Multi-page table with title and fixed column widths. An empty table
    /// still produces one page with the header and a "No data" line.
    pub fn write_table(
        &mut self,
        title: &str,
        headers: &[&str],
        rows: &[Vec<String>],
        col_widths: &[f32],
    ) {
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let table_w: f32 = col_widths.iter().sum();

        let mut remaining: &[Vec<String>] = rows;
        let mut page_idx = 1;

        loop {
            let mut content = self.new_page();
            self.draw_page_header_footer(&mut content, title, page_idx);

            let mut y = self.page_h - self.margin - 30.0;

            self.fill_band(&mut content, y, table_w, (0.85, 0.87, 0.90));
            self.draw_row(
                &mut content,
                y,
                col_widths,
                &header_row,
                self.header_font_size,
            );
            y -= self.row_h;

            if rows.is_empty() {
                self.draw_text(&mut content, self.margin + 4.0, y + 6.0, self.font_size, "No data");
                self.finalize_page(content);
                return;
            }

            let mut consumed = 0;
            for (i, row) in remaining.iter().enumerate() {
                if y - self.row_h < self.margin {
                    break;
                }

                // zebra stripe
                if i % 2 == 0 {
                    self.fill_band(&mut content, y, table_w, (0.96, 0.96, 0.96));
                }

                self.draw_row(&mut content, y, col_widths, row, self.font_size);

                y -= self.row_h;
                consumed += 1;
            }

            self.finalize_page(content);
            remaining = &remaining[consumed..];
            page_idx += 1;

            if remaining.is_empty() {
                return;
            }
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_ansi_keeps_spanish_and_euro() {
        assert_eq!(to_win_ansi("Peón 5 €"), b"Pe\xf3n 5 \x80".to_vec());
        assert_eq!(to_win_ansi("📈"), b"?".to_vec());
    }

    #[test]
    fn clip_marks_truncation() {
        let s = PdfManager::clip("Reforma integral del ascensor del portal 3", 60.0, 10.0);
        assert!(s.ends_with('…'));
        assert!(s.chars().count() < 12);
    }
}
