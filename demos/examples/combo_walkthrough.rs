// Copyright 2025 the Listbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driving the headless combo-box from scripted events.
//!
//! This example shows how to combine:
//! - `listbox_options` for resolving grouped raw data into a visible list,
//! - `listbox_control` for routing keys and clicks into effect transitions.
//!
//! Run:
//! - `cargo run -p listbox_demos --example combo_walkthrough`

use listbox_control::{
    ClickTarget, Combo, ComboConfig, ComboContext, ComboFlags, Effect, Key, KeySurface, Transition,
};
use listbox_options::{BasicAccessor, BasicOption, FilterSpec, ResolvedList};

fn options() -> Vec<BasicOption<u32>> {
    vec![
        BasicOption::group(
            "Citrus",
            vec![
                BasicOption::new("Lemon", 1),
                BasicOption::new("Lime", 2),
                BasicOption::new("Orange", 3).disabled(),
            ],
        ),
        BasicOption::group(
            "Berries",
            vec![BasicOption::new("Blueberry", 4), BasicOption::new("Cranberry", 5)],
        ),
    ]
}

fn report(event: &str, tx: &Transition) {
    println!("{event}:");
    println!("  consumed: {}", tx.consumed);
    for effect in &tx.effects {
        println!("  effect:   {effect:?}");
    }
}

fn main() {
    let raw = options();
    let accessor = BasicAccessor::new();

    // The external selection is owned by the caller; the control only ever
    // sees its index in the current visible list.
    let mut selected: Option<u32> = Some(4);

    let mut combo = Combo::new(ComboConfig {
        flags: ComboFlags::AUTO_FOCUS_ON_OPEN | ComboFlags::FILTER,
        ..ComboConfig::default()
    });

    let list = ResolvedList::resolve(&accessor, &raw, true, None);
    let ctx = ComboContext {
        view: &list,
        selected: selected.and_then(|v| list.selected_index(&v)),
        overlay_has_focusables: true,
        now_ms: 0,
    };

    // Click the trigger: the overlay opens seeded on the selection.
    report("click trigger", &combo.on_click(ClickTarget::Trigger, &ctx));
    report("overlay enter", &combo.on_overlay_enter());
    report("overlay entered", &combo.on_overlay_entered());

    // Navigate: ArrowUp walks backwards, skipping the disabled Orange and
    // the group headers.
    report(
        "arrow up",
        &combo.on_key(Key::ArrowUp { alt: false }, KeySurface::Trigger, &ctx),
    );

    // Typeahead: 'c' jumps to Cranberry.
    report(
        "type 'c'",
        &combo.on_key(Key::Char('c'), KeySurface::Trigger, &ctx),
    );

    // Filter: narrowing to "berry" drops the Citrus group entirely.
    report("filter 'berry'", &combo.on_filter_input("berry", 10));
    let filtered = ResolvedList::resolve(
        &accessor,
        &raw,
        true,
        Some(&FilterSpec::new(combo.filter_text())),
    );
    println!("  visible rows:");
    for i in 0..filtered.entries().len() {
        let marker = if filtered.is_group(i) { "#" } else { "-" };
        let label = filtered.label(i).map(|l| l.into_owned()).unwrap_or_default();
        println!("    {marker} {label}");
    }
    let ctx = ComboContext {
        view: &filtered,
        selected: selected.and_then(|v| filtered.selected_index(&v)),
        overlay_has_focusables: true,
        now_ms: 20,
    };

    // Commit the second surviving berry with ArrowDown + Enter.
    report(
        "arrow down",
        &combo.on_key(Key::ArrowDown, KeySurface::Filter, &ctx),
    );
    report(
        "arrow down",
        &combo.on_key(Key::ArrowDown, KeySurface::Filter, &ctx),
    );
    let tx = combo.on_key(Key::Enter, KeySurface::Filter, &ctx);
    report("enter", &tx);
    for effect in &tx.effects {
        if let Effect::Commit(index) = effect {
            selected = filtered.value(*index);
            let label = filtered
                .label(*index)
                .map(|l| l.into_owned())
                .unwrap_or_default();
            println!("  committed: {label:?} ({selected:?})");
        }
    }

    report("overlay exit", &combo.on_overlay_exit());
    report("overlay exited", &combo.on_overlay_exited());
}
