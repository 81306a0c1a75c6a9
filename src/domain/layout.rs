//! Documents and layouts
//!
//! A document has one root layout. Layouts nest: a row places its children
//! side by side, a column stacks them top to bottom.

use crate::domain::Plot;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Width/height requested on the command line
///
/// Only honored when the document root is a single plot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeOverride {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl SizeOverride {
    /// Create a new override
    pub fn new(width: Option<u32>, height: Option<u32>) -> Self {
        Self { width, height }
    }

    /// True when neither dimension is set
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }
}

/// Layout tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Layout {
    Plot(Plot),
    Row { children: Vec<Layout> },
    Column { children: Vec<Layout> },
}

/// A plot positioned on the output canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<'a> {
    pub plot: &'a Plot,
    pub x: u32,
    pub y: u32,
}

impl Layout {
    /// Validate the tree and every plot in it
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            Layout::Plot(plot) => plot.validate(),
            Layout::Row { children } | Layout::Column { children } => {
                if children.is_empty() {
                    return Err(DomainError::EmptyLayout);
                }
                children.iter().try_for_each(Layout::validate)
            }
        }
    }

    /// Pixel size of the layout with `spacing` pixels between siblings
    ///
    /// # Errors
    /// `DomainError::InvalidSize` when the size does not fit in `u32`
    pub fn size(&self, spacing: u32) -> Result<(u32, u32), DomainError> {
        match self {
            Layout::Plot(plot) => Ok((plot.width, plot.height)),
            Layout::Row { children } => stacked(children, spacing, |size| size),
            Layout::Column { children } => {
                let (along, across) = stacked(children, spacing, |(w, h)| (h, w))?;
                Ok((across, along))
            }
        }
    }

    /// Positions of every plot, in depth-first order
    pub fn placements(&self, spacing: u32) -> Result<Vec<Placement<'_>>, DomainError> {
        self.size(spacing)?;
        let mut out = Vec::new();
        self.place(0, 0, spacing, &mut out)?;
        Ok(out)
    }

    // Offsets stay within the root size checked by `placements`.
    fn place<'a>(
        &'a self,
        x: u32,
        y: u32,
        spacing: u32,
        out: &mut Vec<Placement<'a>>,
    ) -> Result<(), DomainError> {
        match self {
            Layout::Plot(plot) => out.push(Placement { plot, x, y }),
            Layout::Row { children } => {
                let mut cursor = x;
                for child in children {
                    child.place(cursor, y, spacing, out)?;
                    cursor = cursor
                        .saturating_add(child.size(spacing)?.0)
                        .saturating_add(spacing);
                }
            }
            Layout::Column { children } => {
                let mut cursor = y;
                for child in children {
                    child.place(x, cursor, spacing, out)?;
                    cursor = cursor
                        .saturating_add(child.size(spacing)?.1)
                        .saturating_add(spacing);
                }
            }
        }
        Ok(())
    }

    /// First plot title found in the tree
    pub fn first_title(&self) -> Option<&str> {
        match self {
            Layout::Plot(plot) => plot.title.as_deref(),
            Layout::Row { children } | Layout::Column { children } => {
                children.iter().find_map(Layout::first_title)
            }
        }
    }
}

/// Extent of `children` laid end to end along one axis
///
/// `axes` maps a child's `(width, height)` to `(along, across)`. Returns the
/// summed extent along the axis and the largest extent across it.
fn stacked(
    children: &[Layout],
    spacing: u32,
    axes: impl Fn((u32, u32)) -> (u32, u32),
) -> Result<(u32, u32), DomainError> {
    let mut along: u32 = 0;
    let mut across: u32 = 0;
    for (index, child) in children.iter().enumerate() {
        let (child_along, child_across) = axes(child.size(spacing)?);
        let gap = if index == 0 { 0 } else { spacing };
        across = across.max(child_across);
        along = along
            .checked_add(gap)
            .and_then(|v| v.checked_add(child_along))
            .ok_or_else(|| {
                let (width, height) = axes((u32::MAX, across));
                DomainError::InvalidSize { width, height }
            })?;
    }
    Ok((along, across))
}

/// A plotting application's output: a titled layout tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub root: Layout,
}

impl Document {
    /// Create a document with a single root
    pub fn new(root: Layout) -> Self {
        Self { title: None, root }
    }

    /// Validate the layout tree and its overall size
    pub fn validate(&self) -> Result<(), DomainError> {
        self.root.validate()?;
        self.root.size(0).map(|_| ())
    }

    /// Document title, falling back to the first plot title
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().or_else(|| self.root.first_title())
    }

    /// Copy of the document with `size` applied
    ///
    /// Returns the document unchanged when the root is not a single plot.
    pub fn with_size(&self, size: SizeOverride) -> Document {
        let mut document = self.clone();
        match &mut document.root {
            Layout::Plot(plot) => {
                if let Some(width) = size.width {
                    plot.width = width;
                }
                if let Some(height) = size.height {
                    plot.height = height;
                }
            }
            _ if !size.is_empty() => {
                log::info!("Ignoring --width/--height: document root is not a single plot");
            }
            _ => {}
        }
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plot(width: u32, height: u32) -> Layout {
        Layout::Plot(Plot {
            width,
            height,
            ..Plot::default()
        })
    }

    #[test]
    fn test_row_size() {
        let row = Layout::Row {
            children: vec![plot(100, 50), plot(200, 80)],
        };
        assert_eq!(row.size(10), Ok((310, 80)));
    }

    #[test]
    fn test_nested_placements() {
        let layout = Layout::Column {
            children: vec![
                plot(100, 50),
                Layout::Row {
                    children: vec![plot(40, 40), plot(40, 30)],
                },
            ],
        };
        assert_eq!(layout.size(5), Ok((100, 95)));

        let positions: Vec<_> = layout
            .placements(5)
            .unwrap()
            .iter()
            .map(|p| (p.x, p.y))
            .collect();
        assert_eq!(positions, vec![(0, 0), (0, 55), (45, 55)]);
    }

    #[test]
    fn test_empty_container_rejected() {
        let layout = Layout::Row { children: vec![] };
        assert_eq!(layout.validate(), Err(DomainError::EmptyLayout));
    }

    #[test]
    fn test_size_override_applies_to_plot() {
        let doc = Document::new(plot(600, 600));
        let resized = doc.with_size(SizeOverride::new(Some(300), None));
        assert_eq!(resized.root.size(0), Ok((300, 600)));
    }

    #[test]
    fn test_size_override_ignored_for_layouts() {
        let doc = Document::new(Layout::Column {
            children: vec![plot(100, 100)],
        });
        let resized = doc.with_size(SizeOverride::new(Some(300), Some(300)));
        assert_eq!(resized, doc);
    }

    #[test]
    fn test_display_title_fallback() {
        let mut doc = Document::new(Layout::Row {
            children: vec![Layout::Plot(Plot {
                title: Some("inner".into()),
                ..Plot::default()
            })],
        });
        assert_eq!(doc.display_title(), Some("inner"));
        doc.title = Some("outer".into());
        assert_eq!(doc.display_title(), Some("outer"));
    }

    #[test]
    fn test_row_size_overflow_is_an_error() {
        let row = Layout::Row {
            children: vec![plot(3_000_000_000, 10), plot(3_000_000_000, 20)],
        };
        assert_eq!(
            row.size(10),
            Err(DomainError::InvalidSize {
                width: u32::MAX,
                height: 20
            })
        );
        assert!(row.placements(10).is_err());
        assert!(Document::new(row).validate().is_err());
    }

    #[test]
    fn test_column_spacing_overflow_is_an_error() {
        let column = Layout::Column {
            children: vec![plot(50, 100), plot(70, 100)],
        };
        assert_eq!(
            column.size(u32::MAX),
            Err(DomainError::InvalidSize {
                width: 70,
                height: u32::MAX
            })
        );
        assert_eq!(column.size(0), Ok((70, 200)));
    }

    #[test]
    fn test_nested_overflow_propagates() {
        let wide = Layout::Row {
            children: vec![plot(u32::MAX, 1), plot(1, 1)],
        };
        let column = Layout::Column {
            children: vec![plot(10, 10), wide],
        };
        assert!(matches!(
            column.size(0),
            Err(DomainError::InvalidSize { .. })
        ));
    }
}
