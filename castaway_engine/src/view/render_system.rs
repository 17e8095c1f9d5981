//! module Render System
//!
//! This module contains the `ViewItem` renderers for system/engine messages,
//! such as help, the score report, or the summary shown when the game ends.

use colored::Colorize as _;
use textwrap::{fill, termwidth};

use crate::{
    View, ViewItem,
    style::{GameStyle as _, normal_block},
    view::icons::ICON_ENGINE,
};

/// Used for generic messages from the engine.
pub(super) fn engine_message(view: &View) {
    let engine_msgs: Vec<_> = view
        .items
        .iter()
        .filter_map(|i| match &i.view_item {
            ViewItem::EngineMessage(msg) => Some(msg),
            _ => None,
        })
        .collect();
    for msg in &engine_msgs {
        println!("{}", fill(format!("{ICON_ENGINE:<4}{msg}").as_str(), normal_block()));
    }
    if !engine_msgs.is_empty() {
        println!();
    }
}

/// Displays the help text and command reference.
pub(super) fn show_help(view: &View) {
    if let Some(entry) = view
        .items
        .iter()
        .find(|item| matches!(&item.view_item, ViewItem::Help { .. }))
        && let ViewItem::Help { basic_text, commands } = &entry.view_item
    {
        println!("{}", fill(basic_text, normal_block()).italic().cyan());
        println!();

        // Partition commands into normal vs DEV (':'-prefixed)
        let (dev_cmds, normal_cmds): (Vec<_>, Vec<_>) = commands.iter().partition(|c| c.command.starts_with(':'));

        println!("{}", "Available Commands:".bold().yellow());
        println!();
        for command in &normal_cmds {
            let formatted_line = format!("{} - {}", command.command.bold().green(), command.description.italic());
            println!("{}", fill(&formatted_line, normal_block()));
        }

        if crate::DEV_MODE && !dev_cmds.is_empty() {
            println!();
            println!("{}", "Developer Commands (dev-mode):".bold().yellow());
            println!();
            for command in &dev_cmds {
                let formatted_line = format!("{} - {}", command.command.bold().green(), command.description.italic());
                println!("{}", fill(&formatted_line, normal_block()));
            }
        }
        println!();
    }
}

pub(super) fn score(view: &View) {
    if let Some(score) = view.items.iter().find_map(|i| match &i.view_item {
        ViewItem::Score(score) => Some(score),
        _ => None,
    }) {
        println!("Current score: {}", score.to_string().bold());
        println!();
    }
}

/// Dev listing of world flags.
pub(super) fn flag_list(view: &View) {
    if let Some(flags) = view.items.iter().find_map(|i| match &i.view_item {
        ViewItem::FlagList(flags) => Some(flags),
        _ => None,
    }) {
        println!("{}:", "Flags".subheading_style());
        for (name, value) in flags {
            let shown = if *value { "set".green() } else { "unset".dimmed() };
            println!("    {name:<20} {shown}");
        }
        println!();
    }
}

#[allow(clippy::cast_precision_loss)]
pub(super) fn quit_summary(view: &View) {
    if let Some(entry) = view
        .items
        .iter()
        .find(|entry| matches!(entry.view_item, ViewItem::QuitSummary { .. }))
        && let ViewItem::QuitSummary {
            title,
            score,
            visited,
            max_visited,
        } = &entry.view_item
    {
        let visit_pct = 100.0 * (*visited as f32 / (*max_visited).max(1) as f32);
        println!("{:^width$}", title.as_str().black().on_yellow(), width = termwidth());
        println!("{:10} {}", "Score:", score);
        println!("{:10} {}/{} ({:.1}%)", "Visited:", visited, max_visited, visit_pct);
    }
}
