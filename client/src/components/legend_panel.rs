//! Status legend with live room counts.
//!
//! Two presentations over the same rows: a fixed panel for wide screens and
//! a bottom sheet toggled from the mobile floor map. The sheet's open flag
//! is the shared [`ViewerContext`] flag when one is provided, otherwise the
//! sheet keeps its own.

#[cfg(test)]
#[path = "legend_panel_test.rs"]
mod legend_panel_test;

use leptos::prelude::*;

use floorplan::legend::{LegendEntry, LegendSheet, LegendToggle};
use floorplan::style::RoomStyle;

use crate::state::viewer::{ViewerContext, ViewerState};

/// Inline style for a legend swatch.
fn swatch_style(style: &RoomStyle) -> String {
    format!(
        "background-color: {}; border: {}px solid {};",
        style.fill,
        style.stroke_width.max(1.0),
        style.stroke
    )
}

fn count_label(count: usize) -> String {
    if count == 1 { "1 space".to_owned() } else { format!("{count} spaces") }
}

#[component]
fn LegendRows(entries: Signal<Vec<LegendEntry>>) -> impl IntoView {
    view! {
        <ul class="legend__rows">
            <For
                each=move || entries.get()
                key=|entry| (entry.descriptor.label, entry.count)
                children=move |entry| {
                    view! {
                        <li class="legend__row">
                            <span class="legend__swatch" style=swatch_style(&entry.descriptor.swatch)></span>
                            <span class="legend__text">
                                <span class="legend__label">{entry.descriptor.label}</span>
                                <span class="legend__description">{entry.descriptor.description}</span>
                            </span>
                            <span class="legend__count" title=count_label(entry.count)>
                                {entry.count}
                            </span>
                        </li>
                    }
                }
            />
        </ul>
    }
}

/// Always-visible legend for the desktop floor map.
#[component]
pub fn LegendPanel() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let entries = Signal::derive(move || viewer.with(|v| v.legend.clone()));

    view! {
        <aside class="legend legend--panel">
            <h3 class="legend__title">"Highlight Legend"</h3>
            <LegendRows entries=entries/>
        </aside>
    }
}

/// Toggle button plus bottom sheet for narrow screens.
#[component]
pub fn LegendSheetToggle() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let shared = use_context::<ViewerContext>();
    let sheet = RwSignal::new(LegendSheet::default());
    let entries = Signal::derive(move || viewer.with(|v| v.legend.clone()));

    let external = move || shared.map(|ctx| ctx.show_legend.get());
    let is_open = move || sheet.with(|s| s.is_open(external()));
    let apply = move |toggle: LegendToggle| {
        if let (LegendToggle::External(open), Some(ctx)) = (toggle, shared) {
            ctx.show_legend.set(open);
        }
    };
    let on_toggle = move |_| {
        let current = shared.map(|ctx| ctx.show_legend.get_untracked());
        let mut toggle = LegendToggle::Internal(false);
        sheet.update(|s| toggle = s.toggle(current));
        apply(toggle);
    };
    let on_close = move |_| {
        let current = shared.map(|ctx| ctx.show_legend.get_untracked());
        let mut toggle = LegendToggle::Internal(false);
        sheet.update(|s| toggle = s.close(current));
        apply(toggle);
    };

    view! {
        <button class="legend-toggle" on:click=on_toggle aria-label="Show legend">
            "Legend"
        </button>
        <Show when=is_open>
            <div class="legend legend--sheet" role="dialog">
                <div class="legend__header">
                    <h3 class="legend__title">"Highlight Legend"</h3>
                    <button class="legend__close" on:click=on_close aria-label="Close legend">
                        "✕"
                    </button>
                </div>
                <LegendRows entries=entries/>
            </div>
        </Show>
    }
}
