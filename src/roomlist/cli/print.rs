use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use roomlist::api::{CmdMessage, MessageLevel, PageHeader};
use roomlist::error::{Result, RoomListError};
use roomlist::index::DisplayRoom;
use roomlist::model::{Difficulty, Room, Thumbnail};
use serde::Serialize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 32;
const CREATOR_WIDTH: usize = 20;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_header(header: &PageHeader) {
    println!("{}  {}", header.title.bold(), header.credits.cyan());
    println!("{}", header.subtitle.dimmed());
    println!();
}

pub(super) fn print_rooms(rooms: &[DisplayRoom]) {
    if rooms.is_empty() {
        println!("No rooms found.");
        return;
    }

    let idx_width = rooms
        .iter()
        .map(|dr| dr.index.to_string().len())
        .max()
        .unwrap_or(1);

    for dr in rooms {
        let room = &dr.room;
        let idx = format!("{:>width$}. ", dr.index, width = idx_width);
        let tags = room
            .tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ");

        println!(
            "{}{} {} {:<6} {} {:>5} {:>4} {:>6}  {}",
            idx.yellow(),
            pad_to_width(&room.title, TITLE_WIDTH).bold(),
            pad_to_width(&room.creator, CREATOR_WIDTH).dimmed(),
            difficulty_colored(room.difficulty),
            format!("★{:.1}", room.rating),
            format!("{}p", room.player_count),
            room.like_rate,
            room.play_count,
            tags.dimmed()
        );
    }
}

pub(super) fn print_full_rooms(rooms: &[DisplayRoom]) {
    for (i, dr) in rooms.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        let room = &dr.room;
        println!("{} {}", dr.index.to_string().yellow(), room.title.bold());
        println!("--------------------------------");
        println!("Creator:     {}", room.creator);
        println!("Difficulty:  {}", difficulty_colored(room.difficulty));
        println!("Rating:      {:.1}", room.rating);
        println!("Players:     {}", room.player_count);
        println!(
            "Likes:       {} ({:.1})",
            room.like_rate,
            room.like_percentage()
        );
        println!(
            "Plays:       {} ({})",
            room.play_count,
            room.play_count_number()
        );
        if !room.tags.is_empty() {
            println!("Tags:        {}", room.tags.join(", "));
        }
        println!("Thumbnail:   {}", describe_thumbnail(&room.thumbnail));
        println!("Added:       {}", format_time_ago(room.created_at).dimmed());
        println!("Id:          {}", room.id.to_string().dimmed());
    }
}

#[derive(Serialize)]
struct JsonRoom<'a> {
    index: usize,
    #[serde(flatten)]
    room: &'a Room,
}

pub(super) fn print_json(rooms: &[DisplayRoom]) -> Result<()> {
    let payload: Vec<JsonRoom> = rooms
        .iter()
        .map(|dr| JsonRoom {
            index: dr.index,
            room: &dr.room,
        })
        .collect();
    let json = serde_json::to_string_pretty(&payload).map_err(RoomListError::Serialization)?;
    println!("{}", json);
    Ok(())
}

fn difficulty_colored(difficulty: Difficulty) -> ColoredString {
    let label = difficulty.label();
    match difficulty {
        Difficulty::Easy => label.green(),
        Difficulty::Medium => label.yellow(),
        Difficulty::Hard => label.red(),
    }
}

fn describe_thumbnail(thumbnail: &Thumbnail) -> String {
    match thumbnail {
        Thumbnail::Image(image) => image.clone(),
        Thumbnail::Color(rgb) => format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b),
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

/// Truncates or pads `s` to exactly `width` terminal columns. Wide
/// characters (e.g. Hangul) count as two.
fn pad_to_width(s: &str, width: usize) -> String {
    let mut result = String::new();
    let mut current = 0;

    if s.width() > width {
        for c in s.chars() {
            let w = c.width().unwrap_or(0);
            if current + w > width.saturating_sub(1) {
                break;
            }
            result.push(c);
            current += w;
        }
        result.push('…');
        current += 1;
    } else {
        result.push_str(s);
        current = s.width();
    }

    result.push_str(&" ".repeat(width.saturating_sub(current)));
    result
}
