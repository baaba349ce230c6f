//! The physical render window: a fixed-size table of editable cells.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, HtmlElement, HtmlTableCellElement, HtmlTableElement, HtmlTableRowElement,
    HtmlTableSectionElement,
};

use crate::engine::GridEngine;
use crate::error::{GridError, Result};

/// Edit Dispatcher callback: `(physical_row, physical_col, new_text)`.
///
/// Each cell's `input` observer is constructed with its fixed physical
/// coordinates, so there are no captured loop variables to alias.
pub type EditDispatcher = Rc<dyn Fn(u32, u32, String)>;

/// Fixed-size physical grid of renderable cells.
///
/// Structure (all handles cached at build time):
///
/// ```text
/// table.data-sheet
/// ├── thead > tr > th.empty-header, th.header-cell × physical_cols
/// └── tbody > tr × physical_rows
///     └── th.row-header, td.data-cell (contenteditable) × physical_cols
/// ```
///
/// `repaint` only mutates text content; the table is detached from its
/// parent when the window is dropped.
pub struct RenderWindow {
    table: HtmlTableElement,
    header_cells: Vec<HtmlTableCellElement>,
    row_headers: Vec<HtmlTableCellElement>,
    cells: Vec<Vec<HtmlTableCellElement>>,
    physical_rows: u32,
    physical_cols: u32,
    // Retained so the per-cell input observers stay registered for the
    // table's lifetime.
    #[allow(dead_code)]
    edit_closures: Vec<Closure<dyn FnMut(Event)>>,
}

fn create_as<T: JsCast>(document: &Document, tag: &str) -> Result<T> {
    document
        .create_element(tag)
        .ok()
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| GridError::Dom(format!("failed to create <{tag}>")))
}

impl RenderWindow {
    /// Build a fresh physical grid of `physical_rows` x `physical_cols`
    /// cells with edit observers wired to `dispatch`.
    ///
    /// # Errors
    /// Returns [`GridError::Dom`] if element creation fails.
    pub fn build(
        document: &Document,
        physical_rows: u32,
        physical_cols: u32,
        dispatch: EditDispatcher,
    ) -> Result<Self> {
        let table: HtmlTableElement = create_as(document, "table")?;
        table.set_class_name("data-sheet");
        let _ = table.style().set_property("border-collapse", "collapse");

        // Header row
        let thead: HtmlTableSectionElement = create_as(document, "thead")?;
        let header_row: HtmlTableRowElement = create_as(document, "tr")?;
        let corner: HtmlTableCellElement = create_as(document, "th")?;
        corner.set_class_name("empty-header");
        let _ = header_row.append_child(&corner);

        let mut header_cells = Vec::with_capacity(physical_cols as usize);
        for _ in 0..physical_cols {
            let th: HtmlTableCellElement = create_as(document, "th")?;
            th.set_class_name("header-cell");
            let _ = header_row.append_child(&th);
            header_cells.push(th);
        }
        let _ = thead.append_child(&header_row);
        let _ = table.append_child(&thead);

        // Body rows
        let tbody: HtmlTableSectionElement = create_as(document, "tbody")?;
        let mut row_headers = Vec::with_capacity(physical_rows as usize);
        let mut cells = Vec::with_capacity(physical_rows as usize);
        let mut edit_closures = Vec::new();

        for r in 0..physical_rows {
            let tr: HtmlTableRowElement = create_as(document, "tr")?;
            let row_header: HtmlTableCellElement = create_as(document, "th")?;
            row_header.set_class_name("row-header");
            let _ = tr.append_child(&row_header);
            row_headers.push(row_header);

            let mut row_cells = Vec::with_capacity(physical_cols as usize);
            for c in 0..physical_cols {
                let td: HtmlTableCellElement = create_as(document, "td")?;
                td.set_class_name("data-cell");
                td.set_content_editable("true");

                let dispatch = Rc::clone(&dispatch);
                let cell_handle = td.clone();
                let closure = Closure::wrap(Box::new(move |_event: Event| {
                    let text = cell_handle.text_content().unwrap_or_default();
                    dispatch(r, c, text);
                }) as Box<dyn FnMut(Event)>);
                td.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
                    .map_err(|_| GridError::Dom("failed to attach edit observer".to_string()))?;
                edit_closures.push(closure);

                let _ = tr.append_child(&td);
                row_cells.push(td);
            }
            cells.push(row_cells);
            let _ = tbody.append_child(&tr);
        }
        let _ = table.append_child(&tbody);

        Ok(Self {
            table,
            header_cells,
            row_headers,
            cells,
            physical_rows,
            physical_cols,
            edit_closures,
        })
    }

    /// Attach the table to its container.
    pub fn attach(&self, container: &HtmlElement) {
        let _ = container.append_child(&self.table);
    }

    /// Physical row count of this window.
    #[must_use]
    pub fn physical_rows(&self) -> u32 {
        self.physical_rows
    }

    /// Physical column count of this window.
    #[must_use]
    pub fn physical_cols(&self) -> u32 {
        self.physical_cols
    }

    /// Repaint every cell and header from current engine state.
    ///
    /// Mutates text content only; never allocates or removes cells, so
    /// it is safe to call arbitrarily often.
    pub fn repaint(&self, engine: &GridEngine) {
        for c in 0..self.physical_cols {
            if let Some(th) = self.header_cells.get(c as usize) {
                th.set_text_content(Some(&engine.col_label_at(c)));
            }
        }

        for r in 0..self.physical_rows {
            if let Some(header) = self.row_headers.get(r as usize) {
                header.set_text_content(Some(&engine.row_label_at(r)));
            }
            let Some(row_cells) = self.cells.get(r as usize) else {
                continue;
            };
            for c in 0..self.physical_cols {
                if let Some(td) = row_cells.get(c as usize) {
                    td.set_text_content(Some(engine.cell_text_at(r, c)));
                }
            }
        }
    }
}

impl Drop for RenderWindow {
    fn drop(&mut self) {
        if let Some(parent) = self.table.parent_node() {
            let _ = parent.remove_child(&self.table);
        }
    }
}
