use std::iter;

use crate::prelude::{Real, INF};

/// Average consecutive values so the curve fits in at most width columns.
fn downsample(values: &[Real], width: usize) -> Vec<Real> {
    if width == 0 || values.len() <= width {
        return values.to_vec();
    }
    let chunk = (values.len() + width - 1) / width;
    values
        .chunks(chunk)
        .map(|c| c.iter().sum::<Real>() / c.len() as Real)
        .collect()
}

/// ASCII plot of a sequence of non-negative values.
///
/// Draw each point as a column filled with '*'s up to its height. Curves
/// longer than width are averaged down to width columns.
pub fn render_vbars(values: &[Real], height: usize, width: usize) -> String {
    let values = downsample(values, width);
    if values.is_empty() || height == 0 {
        return String::new();
    }
    let max = values.iter().cloned().fold(-INF, |x, y| x.max(y));
    let step = max / height as Real;

    let mut lines = Vec::with_capacity(height);
    for i in 0..height {
        let h = (height - i) as Real * step;
        let ln: String = values.iter().map(|&x| if x >= h { '*' } else { ' ' }).collect();
        lines.push(ln.trim_end().to_string());
    }
    lines.push(iter::repeat('-').take(values.len()).collect());
    return lines.join("\n");
}

/// A line with '^' under the column that holds sample index of a curve with
/// len samples, matching the downsampling of render_vbars().
pub fn render_marker(len: usize, index: usize, width: usize) -> String {
    if index >= len {
        return String::new();
    }
    let col = if width == 0 || len <= width {
        index
    } else {
        index / ((len + width - 1) / width)
    };
    let mut ln: String = iter::repeat(' ').take(col).collect();
    ln.push('^');
    return ln;
}
