use crate::grid::Grid;

/// Cell type for the text rendering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Label {
    #[default]
    Exterior,
    Interior,
}

fn border(out: &mut String, width: u32) {
    out.push('+');
    out.extend(std::iter::repeat_n('-', width as usize));
    out.push_str("+\n");
}

/// Boxed ASCII picture of the grid: `*` for interior cells, space otherwise.
pub fn render_ascii(grid: &Grid<Label>) -> String {
    let mut out = String::with_capacity((grid.width() as usize + 3) * (grid.height() as usize + 2));
    border(&mut out, grid.width());
    for row in grid.rows() {
        out.push('|');
        for label in row {
            out.push(match label {
                Label::Interior => '*',
                Label::Exterior => ' ',
            });
        }
        out.push_str("|\n");
    }
    border(&mut out, grid.width());
    out
}

/// One summary line for the console output.
pub fn summary(grid: &Grid<Label>, interior: usize) -> String {
    format!("{interior} of {} cells interior", grid.width() as usize * grid.height() as usize)
}
