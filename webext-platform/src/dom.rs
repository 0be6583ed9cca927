use crate::error::PlatformError;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

const CELL: &str = ".list-section-item";
// The marker keeps a second wiring pass from double-binding listeners.
const UNWIRED_CELL: &str = ".list-section-item:not([data-events=\"1\"])";
const TEXT_CONTROLS: &str = "input:not([type=\"checkbox\"]):not([type=\"radio\"]):not([type=\"hidden\"]), textarea";

/// Wires click-to-focus and focus/blur active-class behavior across a
/// document's list-section cells. Listeners live for the lifetime of the
/// page, so the closures are leaked on purpose.
pub fn init_list_section_listeners(doc: &Document) -> Result<(), PlatformError> {
	let cells = doc.query_selector_all(UNWIRED_CELL)?;
	let controls = doc.query_selector_all(&format!("{UNWIRED_CELL} input, {UNWIRED_CELL} select, {UNWIRED_CELL} textarea"))?;

	for i in 0..cells.length() {
		let Some(cell) = cells.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
			continue;
		};
		cell.dataset().set("events", "1")?;

		let on_click = Closure::<dyn FnMut(Event)>::new(focus_cell_control);
		cell.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
		on_click.forget();
	}

	for i in 0..controls.length() {
		let Some(control) = controls.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
			continue;
		};
		if let Some(cell) = control.closest(CELL)?.and_then(|c| c.dyn_into::<HtmlElement>().ok()) {
			cell.dataset().set("events", "1")?;
		}

		let on_focus = Closure::<dyn FnMut(Event)>::new(|e: Event| set_cell_active(&e, true));
		control.add_event_listener_with_callback("focus", on_focus.as_ref().unchecked_ref())?;
		on_focus.forget();

		let on_blur = Closure::<dyn FnMut(Event)>::new(|e: Event| set_cell_active(&e, false));
		control.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())?;
		on_blur.forget();
	}

	Ok(())
}

fn focus_cell_control(e: Event) {
	if e.default_prevented() {
		return;
	}
	let Some(el) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
		return;
	};

	// Some controls already focus themselves on click.
	if matches!(el.tag_name().to_lowercase().as_str(), "label" | "input" | "textarea" | "select") {
		return;
	}

	let Ok(Some(cell)) = el.closest(CELL) else {
		return;
	};

	if let Ok(texts) = cell.query_selector_all(TEXT_CONTROLS)
		&& let Some(text) = texts.item(0).and_then(|n| n.dyn_into::<HtmlElement>().ok())
	{
		let _ = text.focus();
		return;
	}

	if let Ok(selects) = cell.query_selector_all("select")
		&& let Some(select) = selects.item(0).and_then(|n| n.dyn_into::<HtmlElement>().ok())
	{
		let _ = select.focus();
		return;
	}

	if let Ok(boxes) = cell.query_selector_all("input[type=\"checkbox\"]")
		&& let Some(checkbox) = boxes.item(0).and_then(|n| n.dyn_into::<HtmlInputElement>().ok())
	{
		checkbox.set_checked(!checkbox.checked());
	}
}

fn set_cell_active(e: &Event, active: bool) {
	let Some(el) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
		return;
	};
	let Ok(Some(cell)) = el.closest(CELL) else {
		return;
	};
	let class_list = cell.class_list();
	let _ = if active { class_list.add_1("active") } else { class_list.remove_1("active") };
}
