use colored::*;
use console::Term;
use dialoguer::{ theme::ColorfulTheme, Confirm, Input, Select };
use textwrap::wrap;

use calcestate::models::property::{ DataField, Property };
use calcestate::models::ratio::{ RatioDefinition, ResultRating };

/// UI theme for consistent appearance
pub fn get_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

fn term_width() -> usize {
    let width = Term::stdout().size().1 as usize;
    if width == 0 { 80 } else { width }
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print text with proper wrapping
pub fn print_text(text: &str) {
    let width = term_width();
    for line in text.lines() {
        for wrapped_line in wrap(line, width.saturating_sub(4)) {
            println!("  {}", wrapped_line);
        }
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Colored bullet for a `#RRGGBB` color; plain bullet if the color is malformed
pub fn color_dot(hex: &str) -> ColoredString {
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range).and_then(|s| u8::from_str_radix(s, 16).ok())
    };
    match (channel(1..3), channel(3..5), channel(5..7)) {
        (Some(r), Some(g), Some(b)) if hex.len() == 7 => "●".truecolor(r, g, b),
        _ => "●".normal(),
    }
}

/// `annualRentalIncome` -> `Annual Rental Income`
pub fn format_input_label(name: &str) -> String {
    let mut label = String::new();
    for (i, c) in name.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else {
            if c.is_uppercase() {
                label.push(' ');
            }
            label.push(c);
        }
    }
    label
}

/// One line of the ratio list
pub fn print_ratio_line(ratio: &RatioDefinition, liked: bool) {
    let heart = if liked { "♥".red().to_string() } else { "♡".dimmed().to_string() };
    println!(
        "{} {:>2}  {}  {}",
        heart,
        ratio.id,
        ratio.title.bold(),
        format!("[{}]", ratio.category).dimmed()
    );
}

/// Full detail of a ratio
pub fn print_ratio_detail(ratio: &RatioDefinition, liked: bool) {
    print_header(ratio.title);
    print_result("Category", ratio.category.as_str());
    let importance = ratio.importance.to_string();
    let importance = match ratio.importance {
        calcestate::Importance::Critical => importance.red().bold(),
        calcestate::Importance::High => importance.yellow().bold(),
        calcestate::Importance::Medium => importance.green().bold(),
    };
    println!("{}: {}", "Importance".bold(), importance);
    print_result("Liked", if liked { "yes" } else { "no" });
    println!();
    print_text(ratio.description);
    println!();
    print_result("Formula", ratio.formula);
    let inputs: Vec<String> = ratio.inputs
        .iter()
        .map(|name| format!("{} ({})", format_input_label(name), name))
        .collect();
    print_result("Inputs", &inputs.join(", "));
}

/// Computed result with its rating
pub fn print_calculation(ratio: &RatioDefinition, result: f64) {
    let rating = ResultRating::for_result(ratio.id, result);
    let formatted = ratio.format_result(result);
    let formatted = match rating {
        ResultRating::Good => formatted.green().bold(),
        ResultRating::Average => formatted.yellow().bold(),
        ResultRating::NeedsImprovement => formatted.red().bold(),
        ResultRating::Calculated => formatted.cyan().bold(),
    };
    println!("{}: {}  ({})", ratio.title.bold(), formatted, rating);
}

/// One line of the property list
pub fn print_property_line(property: &Property, now_millis: i64) {
    let count = property.data_fields.len();
    println!(
        "{} {}  {}  {} {}  {}",
        color_dot(&property.color),
        property.name.bold(),
        property.id.dimmed(),
        count,
        if count == 1 { "field" } else { "fields" },
        property.time_ago(now_millis).dimmed()
    );
}

/// A property and all of its fields
pub fn print_property_detail(property: &Property, now_millis: i64) {
    print_header(&property.name);
    print_result("Id", &property.id);
    println!("{}: {} {}", "Color".bold(), color_dot(&property.color), property.color);
    print_result("Created", &property.time_ago(now_millis));
    println!();
    if property.data_fields.is_empty() {
        print_info("No data fields yet");
        return;
    }
    for field in &property.data_fields {
        print_field_line(field);
    }
}

fn print_field_line(field: &DataField) {
    println!(
        "  {:<28} {:<24} {}  {}",
        field.label.bold(),
        field.preview(),
        format!("[{}]", field.field_type).dimmed(),
        field.id.dimmed()
    );
}

/// Prompt for a line of text, possibly empty
pub fn prompt_input(prompt: &str) -> std::io::Result<String> {
    Input::with_theme(&get_theme())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Interactive selection among properties
pub fn select_property(properties: &[Property]) -> std::io::Result<Option<usize>> {
    let items: Vec<String> = properties
        .iter()
        .map(|p| {
            let count = p.data_fields.len();
            format!("{} ({} {})", p.name, count, if count == 1 { "field" } else { "fields" })
        })
        .collect();

    Select::with_theme(&get_theme())
        .with_prompt("Save to property")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Confirm an action with the user
pub fn confirm_action(prompt: &str) -> std::io::Result<bool> {
    Confirm::with_theme(&get_theme())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}
