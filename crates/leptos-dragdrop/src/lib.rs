//! Leptos DragDrop Utilities
//!
//! Pointer-driven drag-and-drop for Leptos using mouse events, generic over
//! the dragged id and the drop target. Uses a movement threshold to tell a
//! click from a drag. Callers decide what a drop means.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// DnD state signals
pub struct DndSignals<Id: 'static, Target: 'static> {
    pub dragging_id_read: ReadSignal<Option<Id>>,
    pub dragging_id_write: WriteSignal<Option<Id>>,
    /// Target under the pointer while dragging
    pub hover_target_read: ReadSignal<Option<Target>>,
    pub hover_target_write: WriteSignal<Option<Target>>,
    /// Pending id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<Id>>,
    pub pending_id_write: WriteSignal<Option<Id>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

impl<Id: 'static, Target: 'static> Clone for DndSignals<Id, Target> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Id: 'static, Target: 'static> Copy for DndSignals<Id, Target> {}

pub fn create_dnd_signals<Id, Target>() -> DndSignals<Id, Target>
where
    Id: Send + Sync + 'static,
    Target: Send + Sync + 'static,
{
    let (dragging_id_read, dragging_id_write) = signal(None::<Id>);
    let (hover_target_read, hover_target_write) = signal(None::<Target>);
    let (pending_id_read, pending_id_write) = signal(None::<Id>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        hover_target_read,
        hover_target_write,
        pending_id_read,
        pending_id_write,
        start_read,
        start_write,
    }
}

impl<Id, Target> DndSignals<Id, Target>
where
    Id: Clone + PartialEq + Send + Sync + 'static,
    Target: Clone + PartialEq + Send + Sync + 'static,
{
    /// Whether `id` is the one being dragged (tracked, for styling)
    pub fn is_dragging(&self, id: &Id) -> bool {
        self.dragging_id_read.with(|d| d.as_ref() == Some(id))
    }

    /// Whether `target` is under the pointer during a drag (tracked, for styling)
    pub fn is_hovered(&self, target: &Target) -> bool {
        self.hover_target_read.with(|t| t.as_ref() == Some(target))
    }
}

/// End drag operation
pub fn end_drag<Id, Target>(dnd: &DndSignals<Id, Target>)
where
    Id: Send + Sync + 'static,
    Target: Send + Sync + 'static,
{
    dnd.dragging_id_write.set(None);
    dnd.hover_target_write.set(None);
    dnd.pending_id_write.set(None);
}

/// Create mousedown handler for draggable elements
/// Records pending drag with start position
pub fn make_on_mousedown<Id, Target>(dnd: DndSignals<Id, Target>, id: Id) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    Id: Clone + Send + Sync + 'static,
    Target: Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Controls inside a card keep their own click behavior
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
        }
        dnd.pending_id_write.set(Some(id.clone()));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for drop targets
pub fn make_on_target_mouseenter<Id, Target>(dnd: DndSignals<Id, Target>, target: Target) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    Id: Send + Sync + 'static,
    Target: Clone + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.with_untracked(Option::is_some) {
            dnd.hover_target_write.set(Some(target.clone()));
        }
    }
}

/// Create mouseleave handler for drop targets
pub fn make_on_mouseleave<Id, Target>(dnd: DndSignals<Id, Target>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    Id: Send + Sync + 'static,
    Target: Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.with_untracked(Option::is_some) {
            dnd.hover_target_write.set(None);
        }
    }
}

/// Bind global drag handlers on the document.
///
/// `on_begin` runs once the pointer moves past the threshold after a
/// mousedown. On mouseup during a drag, `on_drop` receives the dragged id and
/// the hovered target, or `None` when released outside every target.
pub fn bind_global_handlers<Id, Target, B, D>(dnd: DndSignals<Id, Target>, on_begin: B, on_drop: D)
where
    Id: Clone + Send + Sync + 'static,
    Target: Clone + Send + Sync + 'static,
    B: Fn(Id) + 'static,
    D: Fn(Id, Option<Target>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.with_untracked(Option::is_some) {
            return;
        }
        let Some(pending) = dnd.pending_id_read.get_untracked() else {
            return;
        };
        let (start_x, start_y) = dnd.start_read.get_untracked();
        let dx = (ev.client_x() - start_x).abs();
        let dy = (ev.client_y() - start_y).abs();

        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.dragging_id_write.set(Some(pending.clone()));
            on_begin(pending);
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let hover_target = dnd.hover_target_read.get_untracked();

        end_drag(&dnd);
        // A plain click never started dragging; let it through untouched
        if let Some(dragged) = dragging_id {
            on_drop(dragged, hover_target);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
    on_mouseup.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_drag_clears_all_state() {
        let owner = Owner::new();
        owner.set();

        let dnd = create_dnd_signals::<u32, &'static str>();
        dnd.pending_id_write.set(Some(7));
        dnd.dragging_id_write.set(Some(7));
        dnd.hover_target_write.set(Some("DONE"));

        end_drag(&dnd);

        assert_eq!(dnd.pending_id_read.get_untracked(), None);
        assert_eq!(dnd.dragging_id_read.get_untracked(), None);
        assert_eq!(dnd.hover_target_read.get_untracked(), None);
    }

    #[test]
    fn test_end_drag_after_plain_click() {
        let owner = Owner::new();
        owner.set();

        let dnd = create_dnd_signals::<u32, u8>();
        dnd.pending_id_write.set(Some(3));

        end_drag(&dnd);

        assert_eq!(dnd.pending_id_read.get_untracked(), None);
        assert!(!dnd.is_dragging(&3));
    }
}
