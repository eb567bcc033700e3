//! Leptos DragDrop Utilities
//!
//! Sortable-list drag and drop for Leptos using native HTML5 drag events.
//! Rows are rendered from a preview order while a drag is in flight; the
//! preview is handed to the caller on drop and thrown away on cancel.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Attribute carrying a row's committed index
pub const SORT_KEY_ATTR: &str = "data-sort-key";

/// Selector matching the sortable rows of a container
const ROW_SELECTOR: &str = ":scope > [data-sort-key]";

/// Vertical extent of a rendered row
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowBox {
    pub key: usize,
    pub top: f64,
    pub height: f64,
}

/// Sort state signals
#[derive(Clone, Copy)]
pub struct SortSignals {
    /// Committed index of the row being dragged
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    /// Preview order: committed indices in display order
    pub order_read: ReadSignal<Vec<usize>>,
    pub order_write: WriteSignal<Vec<usize>>,
}

pub fn create_sort_signals() -> SortSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (order_read, order_write) = signal(Vec::<usize>::new());
    SortSignals {
        dragging_read,
        dragging_write,
        order_read,
        order_write,
    }
}

impl SortSignals {
    /// Reset the preview to the committed order of `len` rows
    pub fn reset(&self, len: usize) {
        self.order_write.set(identity_order(len));
    }

    pub fn is_dragging(&self, key: usize) -> bool {
        self.dragging_read.get() == Some(key)
    }

    /// End the drag with a drop. Returns the preview order when it differs
    /// from the committed one; the preview is reset either way.
    pub fn commit(&self) -> Option<Vec<usize>> {
        self.dragging_write.set(None);
        let order = self.order_read.get_untracked();
        let len = order.len();
        self.reset(len);
        (order != identity_order(len)).then_some(order)
    }

    /// End the drag without a drop and restore the committed order
    pub fn cancel(&self) {
        self.dragging_write.set(None);
        let len = self.order_read.get_untracked().len();
        self.reset(len);
    }
}

/// `0..len` as an order
pub fn identity_order(len: usize) -> Vec<usize> {
    (0..len).collect()
}

/// Find the row the dragged element should be placed before.
///
/// For each row the offset is `y - top - height / 2`. Among rows with a
/// negative offset (center below the pointer) the one closest to zero wins.
/// `None` means the pointer is below every row: append at the end.
pub fn drag_after_element(rows: &[RowBox], y: f64) -> Option<usize> {
    rows.iter()
        .fold((f64::NEG_INFINITY, None), |closest, row| {
            let offset = y - row.top - row.height / 2.0;
            if offset < 0.0 && offset > closest.0 {
                (offset, Some(row.key))
            } else {
                closest
            }
        })
        .1
}

/// Move `dragged` in front of `before`, or to the end when `before` is `None`.
///
/// Returns `true` if the order changed.
pub fn move_before(order: &mut Vec<usize>, dragged: usize, before: Option<usize>) -> bool {
    let Some(from) = order.iter().position(|&k| k == dragged) else {
        return false;
    };
    let original = order.clone();
    order.remove(from);
    match before.and_then(|b| order.iter().position(|&k| k == b)) {
        Some(to) => order.insert(to, dragged),
        None => order.push(dragged),
    }
    *order != original
}

/// Measure the sortable rows of `container`, skipping the dragged one
fn measure_rows(container: &web_sys::Element, dragging: usize) -> Vec<RowBox> {
    let Ok(nodes) = container.query_selector_all(ROW_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .filter_map(|el| {
            let key = el.get_attribute(SORT_KEY_ATTR)?.parse::<usize>().ok()?;
            if key == dragging {
                return None;
            }
            let rect = el.get_bounding_client_rect();
            Some(RowBox { key, top: rect.top(), height: rect.height() })
        })
        .collect()
}

/// Create dragstart handler for a row
pub fn make_on_dragstart(sort: SortSignals, key: usize) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        // Firefox refuses to start a drag without payload
        if let Some(dt) = ev.data_transfer() {
            let _ = dt.set_data("text/plain", &key.to_string());
            dt.set_effect_allowed("move");
        }
        sort.dragging_write.set(Some(key));
    }
}

/// Create dragover handler for the list container.
/// Moves the dragged row in the preview order under the pointer.
pub fn make_on_dragover(sort: SortSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let Some(dragging) = sort.dragging_read.get_untracked() else {
            return;
        };
        let Some(container) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };

        let rows = measure_rows(&container, dragging);
        let after = drag_after_element(&rows, f64::from(ev.client_y()));

        let mut order = sort.order_read.get_untracked();
        if move_before(&mut order, dragging, after) {
            sort.order_write.set(order);
        }
    }
}

/// Create drop handler for the list container.
/// Hands a changed preview order to `on_commit`, then resets the preview.
pub fn make_on_drop<F>(sort: SortSignals, on_commit: F) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    F: Fn(Vec<usize>) + Clone + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if sort.dragging_read.get_untracked().is_none() {
            return;
        }
        if let Some(order) = sort.commit() {
            on_commit(order);
        }
    }
}

/// Create dragend handler for a row.
/// Without a preceding drop this cancels the drag and restores the committed order.
pub fn make_on_dragend(sort: SortSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| sort.cancel()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    /// Start a drag of `dragged` over `len` rows and preview it before `before`
    fn dragged_preview(len: usize, dragged: usize, before: Option<usize>) -> SortSignals {
        let sort = create_sort_signals();
        sort.reset(len);
        sort.dragging_write.set(Some(dragged));
        let mut order = sort.order_read.get_untracked();
        move_before(&mut order, dragged, before);
        sort.order_write.set(order);
        sort
    }

    fn rows(tops: &[f64]) -> Vec<RowBox> {
        tops.iter()
            .enumerate()
            .map(|(key, &top)| RowBox { key, top, height: 40.0 })
            .collect()
    }

    #[test]
    fn test_drag_after_picks_first_row_below_pointer() {
        // Centers at 20, 70, 120
        let rows = rows(&[0.0, 50.0, 100.0]);
        assert_eq!(drag_after_element(&rows, 10.0), Some(0));
        assert_eq!(drag_after_element(&rows, 45.0), Some(1));
        assert_eq!(drag_after_element(&rows, 100.0), Some(2));
    }

    #[test]
    fn test_drag_after_none_below_all_rows() {
        let rows = rows(&[0.0, 50.0, 100.0]);
        assert_eq!(drag_after_element(&rows, 500.0), None);
        assert_eq!(drag_after_element(&[], 0.0), None);
    }

    #[test]
    fn test_drag_after_pointer_on_center_is_not_below() {
        let rows = rows(&[0.0, 50.0]);
        // offset == 0 for row 0, so row 1 is the first strictly below
        assert_eq!(drag_after_element(&rows, 20.0), Some(1));
    }

    #[test]
    fn test_drag_after_ignores_dom_order() {
        let rows = vec![
            RowBox { key: 7, top: 100.0, height: 40.0 },
            RowBox { key: 3, top: 0.0, height: 40.0 },
            RowBox { key: 5, top: 50.0, height: 40.0 },
        ];
        assert_eq!(drag_after_element(&rows, 30.0), Some(5));
    }

    #[test]
    fn test_move_before() {
        let mut order = identity_order(4);
        assert!(move_before(&mut order, 3, Some(1)));
        assert_eq!(order, vec![0, 3, 1, 2]);

        assert!(move_before(&mut order, 0, None));
        assert_eq!(order, vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_move_before_keeps_count_and_detects_noop() {
        let mut order = identity_order(3);
        assert!(!move_before(&mut order, 1, Some(2)));
        assert!(!move_before(&mut order, 2, None));
        assert!(!move_before(&mut order, 9, Some(0)));
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_drop_commits_preview_and_resets() {
        let owner = Owner::new();
        owner.with(|| {
            let sort = dragged_preview(3, 2, Some(0));
            assert_eq!(sort.order_read.get_untracked(), vec![2, 0, 1]);

            assert_eq!(sort.commit(), Some(vec![2, 0, 1]));
            assert_eq!(sort.dragging_read.get_untracked(), None);
            assert_eq!(sort.order_read.get_untracked(), identity_order(3));
        });
    }

    #[test]
    fn test_drop_in_place_commits_nothing() {
        let owner = Owner::new();
        owner.with(|| {
            let sort = dragged_preview(3, 1, Some(2));
            assert_eq!(sort.commit(), None);
            assert_eq!(sort.dragging_read.get_untracked(), None);
            assert_eq!(sort.order_read.get_untracked(), identity_order(3));
        });
    }

    #[test]
    fn test_cancel_restores_committed_order() {
        let owner = Owner::new();
        owner.with(|| {
            let sort = dragged_preview(4, 0, None);
            assert_eq!(sort.order_read.get_untracked(), vec![1, 2, 3, 0]);

            sort.cancel();
            assert_eq!(sort.dragging_read.get_untracked(), None);
            assert_eq!(sort.order_read.get_untracked(), identity_order(4));
        });
    }
}
