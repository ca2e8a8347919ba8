use crate::error::CatApiError;
use crate::models::{Category, Image};
use colored::*;
use serde_json::Value;

/// Pretty-print a payload as JSON.
pub fn display_json(payload: &Value) {
    match serde_json::to_string_pretty(payload) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("{}", payload),
    }
}

/// Display image entries, one block per image
pub fn display_images(images: &[Image]) {
    if images.is_empty() {
        println!("{}", "No images.".dimmed());
        return;
    }

    for image in images {
        println!("{} {}", "id:".dimmed(), image.id.cyan());
        if let Some(url) = &image.url {
            println!("    {}", url);
        }
        if let Some(source) = &image.source_url {
            println!("    {} {}", "source:".dimmed(), source.dimmed());
        }
        if let Some(score) = &image.score {
            println!("    {} {}", "score:".dimmed(), score.yellow());
        }
        if let Some(created) = &image.created {
            println!("    {} {}", "created:".dimmed(), created);
        }
        if let Some(sub_id) = &image.sub_id {
            println!("    {} {}", "sub_id:".dimmed(), sub_id);
        }
    }
}

pub fn display_categories(categories: &[Category]) {
    for category in categories {
        println!("{:>4}  {}", category.id.dimmed(), category.name.green());
    }
}

/// Print a payload using the typed view when it carries images or
/// categories, falling back to JSON otherwise.
pub fn display_payload(payload: &Value) {
    if let Ok(images) = Image::list_from(payload) {
        if !images.is_empty() {
            display_images(&images);
            return;
        }
    }

    if let Ok(categories) = Category::list_from(payload) {
        if !categories.is_empty() {
            display_categories(&categories);
            return;
        }
    }

    if payload.is_null() {
        println!("{}", "OK".green());
    } else {
        display_json(payload);
    }
}

pub fn display_error(error: &CatApiError) {
    let label = match error {
        e if e.is_validation() => "Invalid request:",
        CatApiError::Api(_) => "API error:",
        _ => "Error:",
    };
    eprintln!("{} {}", label.red(), error);
}
