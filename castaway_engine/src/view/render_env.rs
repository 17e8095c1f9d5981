//! # Render Env(ironment) Module
//!
//! This module contains the individual `ViewItem` renderers for the "environment" section
//! of an output frame.

use textwrap::fill;

use crate::{
    View, ViewItem,
    style::{GameStyle as _, normal_block},
};

/// Movement message shown ahead of the scene.
pub(super) fn transition(view: &View) {
    if let Some(msg) = view.items.iter().find_map(|i| match &i.view_item {
        ViewItem::TransitionMessage(msg) => Some(msg),
        _ => None,
    }) {
        println!("\n{}", fill(msg.as_str(), normal_block()).transition_style());
    }
}

/// Used by `flush()` to show base room description
pub(super) fn room_description(view: &View) {
    if let Some((name, description)) = view.items.iter().find_map(|i| match &i.view_item {
        ViewItem::RoomDescription { name, description } => Some((name, description)),
        _ => None,
    }) {
        println!("{:^width$}", name.room_titlebar_style(), width = view.width);
        println!("{}", fill(description, normal_block()).description_style());
        println!();
    }
}

pub(super) fn room_item_list(view: &View) {
    if let Some(ViewItem::RoomItems(lines)) = view.items.iter().find_map(|i| match i.view_item {
        ViewItem::RoomItems(_) => Some(&i.view_item),
        _ => None,
    }) {
        println!("{}:", "You see".subheading_style());
        for line in lines {
            if line.takeable {
                println!("    * {} (you can take this)", line.name.item_style());
            } else {
                println!("    * {}", line.name.item_style());
            }
        }
        println!();
    }
}

pub(super) fn room_exit_list(view: &View) {
    if let Some(ViewItem::RoomExits(directions)) = view.items.iter().find_map(|i| match i.view_item {
        ViewItem::RoomExits(_) => Some(&i.view_item),
        _ => None,
    }) {
        if directions.is_empty() {
            println!("{}", "There are no obvious exits.".denied_style());
        } else {
            let listed: Vec<String> = directions.iter().map(|dir| dir.exit_style().to_string()).collect();
            println!("{}: {}", "Exits".subheading_style(), listed.join(", "));
        }
    }
}
