//! module Render Action
//!
//! Renderers for the direct results of a command: item inspection and the
//! success / failure / error lines.

use colored::Colorize as _;
use textwrap::fill;

use crate::{
    View, ViewItem,
    style::{GameStyle as _, indented_block, normal_block},
    view::icons::{ICON_ERROR, ICON_FAILURE, ICON_SUCCESS},
};

/// Shows the result of `examine`.
pub(super) fn item_detail(view: &View) {
    if let Some((name, lines)) = view.items.iter().find_map(|i| match &i.view_item {
        ViewItem::ItemDescription { name, lines } => Some((name, lines)),
        _ => None,
    }) {
        println!("{}", name.item_style().underline());
        for line in lines {
            println!("{}", fill(line, indented_block()).description_style());
        }
        println!();
    }
}

pub(super) fn action_success(view: &View) {
    let messages: Vec<_> = view
        .items
        .iter()
        .filter_map(|i| match &i.view_item {
            ViewItem::ActionSuccess(msg) => Some(msg),
            _ => None,
        })
        .collect();
    for msg in messages {
        println!(
            "{}",
            fill(
                format!("{} {}", ICON_SUCCESS.bright_green(), msg).as_str(),
                normal_block()
            )
        );
    }
}

pub(super) fn action_failure(view: &View) {
    let messages: Vec<_> = view
        .items
        .iter()
        .filter_map(|i| match &i.view_item {
            ViewItem::ActionFailure(msg) => Some(msg),
            _ => None,
        })
        .collect();
    for msg in messages {
        println!(
            "{}",
            fill(
                format!("{} {}", ICON_FAILURE.bright_red(), msg).as_str(),
                normal_block()
            )
        );
    }
}

pub(super) fn errors(view: &View) {
    let messages: Vec<_> = view
        .items
        .iter()
        .filter_map(|i| match &i.view_item {
            ViewItem::Error(msg) => Some(msg),
            _ => None,
        })
        .collect();
    for msg in messages {
        println!(
            "{}",
            fill(
                format!("{:<4}{}", ICON_ERROR.error_style(), msg.italic()).as_str(),
                normal_block()
            )
        );
    }
}
