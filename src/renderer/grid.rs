//! Board grid, winning-line highlights and progress bar

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::board::{BingoReport, BoardState};
use crate::consts::{BOARD_CELLS, FREE_TASK};

/// Attribute carrying the cell index, read by the grid click handler
pub const INDEX_ATTR: &str = "data-index";

fn grid(document: &Document) -> Option<Element> {
    document.get_element_by_id("bingo-grid")
}

/// Rebuild every cell. Needed after shuffle and reset, when both texts
/// and marks move.
pub fn render_grid(document: &Document, board: &BoardState) -> Result<(), JsValue> {
    let Some(grid) = grid(document) else {
        log::warn!("No #bingo-grid element");
        return Ok(());
    };
    grid.set_inner_html("");

    for (index, task) in board.tasks.iter().enumerate() {
        let cell = document.create_element("div")?;
        cell.set_class_name("bingo-cell");
        if board.marked[index] {
            cell.class_list().add_1("marked")?;
        }
        if task == FREE_TASK {
            cell.class_list().add_1("free-space")?;
        }

        let span = document.create_element("span")?;
        span.set_text_content(Some(task));
        cell.append_child(&span)?;

        cell.set_attribute(INDEX_ATTR, &index.to_string())?;
        cell.set_attribute("role", "button")?;
        cell.set_attribute("aria-pressed", bool_attr(board.marked[index]))?;
        grid.append_child(&cell)?;
    }
    Ok(())
}

/// Sync a single cell after a toggle
pub fn update_cell(document: &Document, index: usize, marked: bool) {
    let Some(cell) = grid(document).and_then(|g| g.children().item(index as u32)) else {
        return;
    };
    let classes = cell.class_list();
    let _ = if marked {
        classes.add_1("marked")
    } else {
        classes.remove_1("marked")
    };
    let _ = cell.set_attribute("aria-pressed", bool_attr(marked));
}

/// Outline every cell that belongs to a completed line
pub fn update_winners(document: &Document, report: &BingoReport) {
    let Some(grid) = grid(document) else {
        return;
    };
    let winners = report.winning_cells();
    let cells = grid.children();
    for index in 0..BOARD_CELLS {
        if let Some(cell) = cells.item(index as u32) {
            let _ = if winners[index] {
                cell.class_list().add_1("winner")
            } else {
                cell.class_list().remove_1("winner")
            };
        }
    }
}

/// "N / 25" counter and bar width
pub fn update_progress(document: &Document, board: &BoardState) {
    let progress = board.progress();

    if let Some(el) = document.get_element_by_id("progress-count") {
        el.set_text_content(Some(&progress.label()));
    }

    if let Some(bar) = document
        .get_element_by_id("progress-bar")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = bar
            .style()
            .set_property("width", &format!("{}%", progress.percent()));
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
