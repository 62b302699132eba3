//! Non-normative rendering of the hunting engine's internal state, gated
//! behind the `diagnostics` feature. None of this feeds back into the
//! algorithm; it exists purely so a developer staring at a misdetected
//! table can see what the engine saw.

use tablehunt_types::GridPositions;

use crate::matrix::CellMatrix;

/// Renders the cell matrix as a grid of ASCII-art box-drawing characters:
/// `+`/`-`/`|` for ruled edges, `>`/`v` where content was seen crossing a
/// divider instead of respecting it, `#` for a cell whose interior is
/// fully covered by content, and a blank where nothing was observed at
/// all.
pub fn render_ascii_matrix(matrix: &CellMatrix) -> String {
    let mut out = String::new();
    for y in 0..matrix.rows() {
        for x in 0..matrix.cols() {
            let cell = matrix.get(x, y);
            out.push(match (cell.h_line, cell.h_crossed) {
                (true, true) => '*',
                (true, false) => '-',
                (false, true) => 'v',
                (false, false) => ' ',
            });
        }
        out.push('\n');
        for x in 0..matrix.cols() {
            let cell = matrix.get(x, y);
            out.push(match (cell.v_line, cell.v_crossed) {
                (true, true) => '*',
                (true, false) => '|',
                (false, true) => '>',
                (false, false) if cell.full => '#',
                (false, false) => ' ',
            });
        }
        out.push('\n');
    }
    out
}

/// Emits a PostScript fragment drawing every candidate divider as a line
/// across the page: reinforced (ruled-confirmed) dividers in dark green,
/// merely-inferred ones in bright green, so the two are easy to tell
/// apart when overlaid on a rendering of the original page.
pub fn render_postscript_overlay(xs: &GridPositions, ys: &GridPositions, page_height: f64) -> String {
    let mut out = String::new();
    let (x0, x1) = (xs.first_pos().unwrap_or(0.0), xs.last_pos().unwrap_or(0.0));
    let (y0, y1) = (ys.first_pos().unwrap_or(0.0), ys.last_pos().unwrap_or(0.0));

    for p in &xs.list {
        let color = if p.reinforcement > 0 { "0 0.5 0 setrgbcolor" } else { "0 1 0 setrgbcolor" };
        out.push_str(&format!(
            "{color}\n{:.2} {:.2} moveto {:.2} {:.2} lineto stroke\n",
            p.pos,
            page_height - y0,
            p.pos,
            page_height - y1
        ));
    }
    for p in &ys.list {
        let color = if p.reinforcement > 0 { "0 0.5 0 setrgbcolor" } else { "0 1 0 setrgbcolor" };
        out.push_str(&format!(
            "{color}\n{:.2} {:.2} moveto {:.2} {:.2} lineto stroke\n",
            x0,
            page_height - p.pos,
            x1,
            page_height - p.pos
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablehunt_types::GridPosition;

    #[test]
    fn ascii_matrix_has_two_lines_per_row() {
        let matrix = CellMatrix::new(3, 3);
        let rendered = render_ascii_matrix(&matrix);
        assert_eq!(rendered.lines().count(), 2 * matrix.rows());
    }

    #[test]
    fn ascii_matrix_for_a_fully_ruled_grid() {
        let mut matrix = CellMatrix::new(2, 2);
        for y in 0..matrix.rows() {
            for x in 0..matrix.cols() {
                let cell = matrix.get_mut(x, y);
                cell.h_line = true;
                cell.v_line = true;
                cell.full = true;
            }
        }
        assert_eq!(render_ascii_matrix(&matrix), "--\n||\n--\n||\n");
    }

    #[test]
    fn postscript_overlay_colors_reinforced_dividers_dark_green() {
        let mut xs = GridPositions { list: vec![GridPosition::new(0.0, 1), GridPosition::new(10.0, 1)] };
        xs.list[0].reinforce(0.5);
        let ys = GridPositions { list: vec![GridPosition::new(0.0, 1), GridPosition::new(10.0, 1)] };
        let ps = render_postscript_overlay(&xs, &ys, 792.0);
        assert!(ps.contains("0 0.5 0 setrgbcolor"));
        assert!(ps.contains("0 1 0 setrgbcolor"));
    }
}
