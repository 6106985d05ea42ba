// Fri Oct 16 2026 - Alex

use crate::config::InspectorConfig;
use crate::structure::{LayoutKind, Size, TypeLayout};
use itertools::Itertools;

/// Draws a [`TypeLayout`] as a boxed, column-aligned text diagram.
pub struct LayoutRenderer {
    show_padding: bool,
    indent_width: usize,
}

struct Row {
    depth: usize,
    start: usize,
    size: Size,
    label: String,
}

impl Row {
    fn new(depth: usize, start: usize, size: Size, label: impl Into<String>) -> Self {
        Self {
            depth,
            start,
            size,
            label: label.into(),
        }
    }

    fn range(&self) -> String {
        match self.size.as_usize() {
            0 | 1 => self.start.to_string(),
            n => format!("{}-{}", self.start, self.start + n - 1),
        }
    }
}

impl LayoutRenderer {
    pub fn new() -> Self {
        Self {
            show_padding: true,
            indent_width: 2,
        }
    }

    pub fn from_config(config: &InspectorConfig) -> Self {
        Self::new()
            .with_padding_rows(config.show_padding)
            .with_indent_width(config.indent_width)
    }

    pub fn with_padding_rows(mut self, show: bool) -> Self {
        self.show_padding = show;
        self
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn summary(layout: &TypeLayout) -> String {
        format!(
            "Size: {}. Paddings: {} ({}% of empty space)",
            layout.total_size(),
            layout.padding(),
            layout.padding_percent()
        )
    }

    /// Summary line followed by the framed diagram. With `recursive`, fields
    /// whose own layout has more than one field are expanded beneath their row.
    pub fn render(&self, layout: &TypeLayout, recursive: bool) -> String {
        let mut rows = Vec::new();
        self.collect_rows(layout, 0, 0, recursive, &mut rows);

        let ranges: Vec<String> = rows.iter().map(Row::range).collect();
        let range_width = ranges.iter().map(String::len).max().unwrap_or(0);

        let lines: Vec<(usize, String)> = rows
            .iter()
            .zip(&ranges)
            .map(|(row, range)| {
                let line = format!(
                    "{}{:>w$}: {} ({})",
                    " ".repeat(row.depth * self.indent_width),
                    range,
                    row.label,
                    row.size.describe(),
                    w = range_width
                );
                (row.depth, line)
            })
            .collect();

        let width = lines.iter().map(|(_, line)| line.chars().count()).max().unwrap_or(0);
        let border = |fill: &str| format!("|{}|", fill.repeat(width + 2));

        let mut out = Vec::with_capacity(lines.len() * 2 + 3);
        out.push(Self::summary(layout));
        out.push(border("="));
        for (i, (depth, line)) in lines.iter().enumerate() {
            if i > 0 && *depth == 0 {
                out.push(border("-"));
            }
            out.push(format!("| {:<w$} |", line, w = width));
        }
        out.push(border("="));

        out.iter().join("\n")
    }

    fn collect_rows(&self, layout: &TypeLayout, base: usize, depth: usize, recursive: bool, rows: &mut Vec<Row>) {
        let mut cursor = base;

        if let LayoutKind::Reference { header, type_handle } = layout.kind() {
            rows.push(Row::new(depth, cursor, header, "object header"));
            cursor += header.as_usize();
            rows.push(Row::new(depth, cursor, type_handle, "type handle"));
            cursor += type_handle.as_usize();
        }

        let start = cursor;
        for field in layout.fields() {
            let at = start + field.offset().as_usize();
            if self.show_padding && at > cursor {
                rows.push(Row::new(depth, cursor, Size::new(at - cursor), "padding"));
            }

            let label = format!("{} {}", field.declared().short_name(), field.name());
            rows.push(Row::new(depth, at, field.size(), label));

            if recursive {
                if let Some(nested) = field.nested().filter(|n| n.fields().len() > 1) {
                    self.collect_rows(nested, at, depth + 1, recursive, rows);
                }
            }
            cursor = cursor.max(field.end() + start);
        }

        let end = base + layout.total_size().as_usize();
        if self.show_padding && end > cursor {
            rows.push(Row::new(depth, cursor, Size::new(end - cursor), "padding"));
        }
    }
}

impl Default for LayoutRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::{TypeRef, POINTER_WIDTH};
    use crate::structure::{FieldLayout, LayoutComputer, Offset};
    use std::sync::Arc;

    crate::reflect! {
        #[allow(dead_code)]
        struct Mixed {
            a: u8,
            b: u64,
        }
    }

    crate::reflect! {
        #[allow(dead_code)]
        struct Inner {
            x: u32,
            y: u16,
        }
    }

    crate::reflect! {
        #[allow(dead_code)]
        struct Outer {
            tag: u8,
            inner: Inner,
        }
    }

    crate::reflect! {
        @object
        #[allow(dead_code)]
        struct Counter {
            hits: u32,
        }
    }

    // built by hand so the expected diagram does not depend on the host
    fn outer_layout() -> TypeLayout {
        let inner = TypeLayout::new(
            TypeRef::of::<Inner>(),
            LayoutKind::Value,
            Size::new(8),
            Size::new(2),
            vec![
                FieldLayout::new("x", TypeRef::of::<u32>(), Offset::new(0), Size::new(4), None),
                FieldLayout::new("y", TypeRef::of::<u16>(), Offset::new(4), Size::new(2), None),
            ],
        );
        TypeLayout::new(
            TypeRef::of::<Outer>(),
            LayoutKind::Value,
            Size::new(12),
            Size::new(3),
            vec![
                FieldLayout::new("tag", TypeRef::of::<u8>(), Offset::new(0), Size::new(1), None),
                FieldLayout::new("inner", TypeRef::of::<Inner>(), Offset::new(4), Size::new(8), Some(Arc::new(inner))),
            ],
        )
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_render_mixed() {
        let layout = LayoutComputer::new().compute_layout(&TypeRef::of::<Mixed>()).unwrap();
        let expected = "\
Size: 16. Paddings: 7 (43% of empty space)
|=========================|
|  0-7: u64 b (8 bytes)   |
|-------------------------|
|    8: u8 a (1 byte)     |
|-------------------------|
| 9-15: padding (7 bytes) |
|=========================|";
        assert_eq!(LayoutRenderer::new().render(&layout, true), expected);
    }

    #[test]
    fn test_render_nested_block() {
        let expected = "\
Size: 12. Paddings: 3 (25% of empty space)
|==============================|
|     0: u8 tag (1 byte)       |
|------------------------------|
|   1-3: padding (3 bytes)     |
|------------------------------|
|  4-11: Inner inner (8 bytes) |
|     4-7: u32 x (4 bytes)     |
|     8-9: u16 y (2 bytes)     |
|   10-11: padding (2 bytes)   |
|==============================|";
        assert_eq!(LayoutRenderer::new().render(&outer_layout(), true), expected);
    }

    #[test]
    fn test_render_flat_skips_nested() {
        let expected = "\
Size: 12. Paddings: 3 (25% of empty space)
|=============================|
|    0: u8 tag (1 byte)       |
|-----------------------------|
|  1-3: padding (3 bytes)     |
|-----------------------------|
| 4-11: Inner inner (8 bytes) |
|=============================|";
        assert_eq!(LayoutRenderer::new().render(&outer_layout(), false), expected);
    }

    #[test]
    fn test_render_without_padding_rows() {
        let text = LayoutRenderer::new()
            .with_padding_rows(false)
            .render(&outer_layout(), true);
        assert!(!text.lines().skip(1).any(|line| line.contains("padding")));
    }

    #[test]
    fn test_all_frame_lines_share_width() {
        let text = LayoutRenderer::new().render(&outer_layout(), true);
        let widths: Vec<usize> = text.lines().skip(1).map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_reference_rows_lead_with_overhead() {
        let layout = LayoutComputer::new().compute_layout(&TypeRef::of::<Counter>()).unwrap();
        let text = LayoutRenderer::new().render(&layout, true);
        let rows: Vec<&str> = text.lines().filter(|l| !l.starts_with("|=") && !l.starts_with("|-")).collect();

        assert!(rows[1].contains("object header"));
        assert!(rows[2].contains("type handle"));
        let hits = format!("{}-{}: u32 hits", 2 * POINTER_WIDTH, 2 * POINTER_WIDTH + 3);
        assert!(rows[3].contains(&hits), "{}", rows[3]);
    }

    #[test]
    fn test_empty_frame() {
        let layout = TypeLayout::new(TypeRef::of::<()>(), LayoutKind::Value, Size::zero(), Size::zero(), Vec::new());
        let text = LayoutRenderer::new().render(&layout, true);
        assert_eq!(text, "Size: 0. Paddings: 0 (0% of empty space)\n|==|\n|==|");
    }
}
