//! module Render Health
//!
//! This module contains the individual `ViewItem` renderers for the world's
//! reactions to a command: damage, healing, points, and the two endings.

use colored::Colorize as _;
use textwrap::fill;

use crate::{
    ViewItem,
    style::{GameStyle as _, normal_block},
    view::ViewEntry,
    view::icons::{ICON_CELEBRATE, ICON_DEATH, ICON_HARMED, ICON_HEALED, ICON_POSITIVE},
};

/// Renders messages displayed when the player is harmed.
pub(super) fn character_harmed(entries: &[&ViewEntry]) {
    let messages: Vec<_> = entries
        .iter()
        .filter_map(|i| match &i.view_item {
            ViewItem::CharacterHarmed { name, amount, band } => Some((name, amount, band)),
            _ => None,
        })
        .collect();
    for (name, amount, band) in messages {
        println!(
            "{}",
            fill(
                format!(
                    "{:<4}{} takes {} damage! {}",
                    ICON_HARMED.bright_yellow(),
                    name.player_style(),
                    amount.to_string().bright_red(),
                    band.italic()
                )
                .as_str(),
                normal_block()
            )
        );
        println!();
    }
}

/// Renders the message when the player is healed.
pub(super) fn character_healed(entries: &[&ViewEntry]) {
    let messages: Vec<_> = entries
        .iter()
        .filter_map(|i| match &i.view_item {
            ViewItem::CharacterHealed { amount, health, .. } => Some((amount, health)),
            _ => None,
        })
        .collect();
    for (amount, health) in messages {
        println!(
            "{}",
            fill(
                format!(
                    "{:<4}You feel better! Health restored by {} points.",
                    ICON_HEALED.bright_blue(),
                    amount.to_string().bright_green()
                )
                .as_str(),
                normal_block()
            )
        );
        println!("    Current health: {}/{}", health.current_hp(), health.max_hp());
        println!();
    }
}

pub(super) fn points_awarded(entries: &[&ViewEntry]) {
    let point_msgs = entries.iter().copied().filter(|i| i.view_item.is_points_awarded());
    for msg in point_msgs {
        if let ViewItem::PointsAwarded { amount, reason } = &msg.view_item {
            let plural = if *amount == 1 { "" } else { "s" };
            if *amount > 15 {
                let text = format!("{reason} (+{amount} point{plural}!)").bright_blue();
                println!("{:<4}{}", ICON_CELEBRATE.bright_blue(), text);
            } else {
                let text = format!("{reason} (+{amount} point{plural})").bright_green();
                println!("{:<4}{}", ICON_POSITIVE.bright_green(), text);
            }
        }
    }
}

/// Renders the victory banner.
pub(super) fn victory(entries: &[&ViewEntry]) {
    for entry in entries {
        if let ViewItem::Victory(lines) = &entry.view_item {
            println!();
            for line in lines {
                println!("{}", fill(line, normal_block()).bright_yellow().bold());
            }
            println!();
        }
    }
}

/// Renders the message announcing the player's death.
pub(super) fn character_death(entries: &[&ViewEntry]) {
    let messages: Vec<_> = entries
        .iter()
        .filter_map(|i| match &i.view_item {
            ViewItem::CharacterDeath { name, score } => Some((name, score)),
            _ => None,
        })
        .collect();
    for (name, score) in messages {
        println!(
            "{}",
            fill(
                format!(
                    "{:<4}{} has died! Your adventure ends here.",
                    ICON_DEATH.red(),
                    name.player_style()
                )
                .as_str(),
                normal_block()
            )
        );
        println!("    Final Score: {}", score.to_string().bold());
        println!();
    }
}
