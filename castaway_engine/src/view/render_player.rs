//! module Render Player
//!
//! Renderers for player-related feedback: the inventory listing and the
//! status screen.

use colored::Colorize as _;

use crate::{View, ViewItem, style::GameStyle as _};

/// Displays the player's inventory list from `ViewItem::Inventory`
pub(super) fn inventory(view: &View) {
    if let Some((items, capacity)) = view.items.iter().find_map(|i| match &i.view_item {
        ViewItem::Inventory { items, capacity } => Some((items, capacity)),
        _ => None,
    }) {
        if items.is_empty() {
            println!("   {}", "You are not carrying anything.".italic().dimmed());
        } else {
            println!(
                "{}",
                format!("Carrying {}/{capacity} items:", items.len()).subheading_style()
            );
            for line in items {
                if line.value > 0 {
                    println!(
                        "   - {} {}",
                        line.item_name.item_style(),
                        format!("(Value: {} gold)", line.value).dimmed()
                    );
                } else {
                    println!("   - {}", line.item_name.item_style());
                }
            }
        }
        println!();
    }
}

/// Displays the status screen: name, health with condition, inventory load.
pub(super) fn player_status(view: &View) {
    if let Some(ViewItem::PlayerStatus {
        name,
        health,
        condition,
        carried,
        capacity,
    }) = view.items.iter().find_map(|i| match i.view_item {
        ViewItem::PlayerStatus { .. } => Some(&i.view_item),
        _ => None,
    }) {
        println!("{:11}{}", "Name:", name.player_style());
        println!(
            "{:11}{}/{} ({})",
            "Health:",
            health.current_hp(),
            health.max_hp(),
            condition.italic()
        );
        println!("{:11}{carried}/{capacity} items", "Inventory:");
        println!();
    }
}
