// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow-key navigation over a small form.
//!
//! Builds a two-column form with a document tree, then replays direction
//! tokens given on the command line (or a default sequence) and prints where
//! focus lands after each step.
//!
//! Run:
//! - `cargo run -p spatial_focus_demos --example keyboard_form -- right down down left`
//! - `RUST_LOG=spatial_focus=trace cargo run -p spatial_focus_demos --example keyboard_form`

use std::collections::HashMap;

use kurbo::Rect;
use spatial_focus::{Direction, Navigator};
use spatial_focus_tree::{Document, Element, ElementId, ElementKind, FocusState};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut doc = Document::new();
    let mut names: HashMap<ElementId, &str> = HashMap::new();
    let form = doc.insert(None, Element::default());

    // Labels on the left are plain text and never take focus.
    let rows = [
        ("name", ElementKind::Input),
        ("email", ElementKind::Input),
        ("country", ElementKind::Select),
        ("notes", ElementKind::TextArea),
    ];
    let mut first = None;
    for (i, (name, kind)) in rows.into_iter().enumerate() {
        let top = i as f64 * 40.0;
        doc.insert(
            Some(form),
            Element::new(ElementKind::Generic, Rect::new(0.0, top, 80.0, top + 30.0)),
        );
        let field = doc.insert(
            Some(form),
            Element::new(kind, Rect::new(100.0, top, 300.0, top + 30.0)),
        );
        names.insert(field, name);
        first.get_or_insert(field);
    }
    let help = doc.insert(
        Some(form),
        Element::new(ElementKind::Link, Rect::new(320.0, 0.0, 380.0, 30.0)),
    );
    names.insert(help, "help");
    let cancel = doc.insert(
        Some(form),
        Element::new(ElementKind::Button, Rect::new(100.0, 170.0, 190.0, 200.0)),
    );
    names.insert(cancel, "cancel");
    let submit = doc.insert(
        Some(form),
        Element::new(ElementKind::Button, Rect::new(210.0, 170.0, 300.0, 200.0)).disabled(),
    );
    names.insert(submit, "submit (disabled)");

    let Some(start) = first else {
        return;
    };
    let mut focus = FocusState::with_focus(start);
    let navigator = Navigator::new(&doc, &doc).with_scope(form);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let tokens: Vec<&str> = if args.is_empty() {
        vec!["right", "left", "down", "down", "down", "down", "right", "up"]
    } else {
        args.iter().map(String::as_str).collect()
    };

    println!("start: {}", names[&start]);
    for token in tokens {
        let direction: Direction = match token.parse() {
            Ok(direction) => direction,
            Err(err) => {
                println!("{token:>6}: {err}");
                continue;
            }
        };
        let Some(current) = focus.focused() else {
            break;
        };
        match navigator.navigate(current, direction, &mut focus) {
            Some(next) => println!("{direction:>6}: {}", names[&next]),
            None => println!("{direction:>6}: stays on {}", names[&current]),
        }
    }
    println!("focus changes: {}", focus.changes());
}
