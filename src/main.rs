//! menubook - Digital restaurant menus as a flip book.
//!
//! Usage:
//!   menubook [MENU]                  Open the flip-book viewer
//!   menubook pages MENU              Print the paginated book
//!   menubook capacity WIDTH          Show the page capacity for a viewport width
//!   menubook --help                  Show help

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result, bail};

use menubook_core::{LayoutConfig, MenuPayload, PreviewTemplate};
use menubook_layout::{BookPaginator, CapacityEstimator, Page, PageEntry};

#[derive(Parser)]
#[command(
    name = "menubook",
    version,
    about = "Digital restaurant menus paginated into a flip book",
    long_about = "menubook lays out a restaurant's public menu as pages of a flip book.\n\n\
                  Open the interactive viewer by running `menubook MENU`, or use \
                  subcommands to inspect the pagination."
)]
struct Cli {
    /// Public menu JSON file to view
    menu: Option<PathBuf>,

    #[command(flatten)]
    options: MenuOptions,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Options shared by every command that loads a menu.
#[derive(Args, Clone, Default)]
struct MenuOptions {
    /// Preview a template id instead of the menu's saved template
    #[arg(long, global = true)]
    preview: Option<String>,

    /// JSON file holding the template being previewed
    #[arg(long, global = true, requires = "preview")]
    preview_file: Option<PathBuf>,

    /// JSON file overriding unit costs and width breakpoints
    #[arg(long, global = true)]
    layout: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Paginate a menu and print its pages
    Pages {
        /// Public menu JSON file
        menu: PathBuf,

        /// Viewport width in pixels
        #[arg(short, long, default_value = "1024", conflicts_with = "capacity")]
        width: u32,

        /// Page capacity in units (overrides --width)
        #[arg(short, long)]
        capacity: Option<u32>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the page capacity for a viewport width
    Capacity {
        /// Viewport width in pixels
        width: u32,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let layout = load_layout(cli.options.layout.as_deref())?;

    match cli.command {
        Some(Command::Pages {
            menu,
            width,
            capacity,
            format,
        }) => {
            let menu = load_menu(&menu, &cli.options)?;
            let capacity = capacity
                .unwrap_or_else(|| CapacityEstimator::with_config(&layout).capacity_for_width(width));
            run_pages(&menu, &layout, capacity, format)?;
        }
        Some(Command::Capacity { width }) => {
            let capacity = CapacityEstimator::with_config(&layout).capacity_for_width(width);
            println!("{capacity}");
        }
        None => {
            let Some(path) = cli.menu else {
                bail!("No menu given. Run `menubook MENU` or see `menubook --help`.");
            };
            let menu = load_menu(&path, &cli.options)?;
            let config = menubook_tui::TuiConfig::new().with_layout(layout);
            menubook_tui::run_with_config(menu, config)?;
        }
    }

    Ok(())
}

/// Load the layout config, falling back to defaults.
fn load_layout(path: Option<&Path>) -> Result<LayoutConfig> {
    match path {
        Some(path) => LayoutConfig::load(path)
            .wrap_err_with(|| format!("Invalid layout config {}", path.display())),
        None => Ok(LayoutConfig::default()),
    }
}

/// Load a menu and apply any template preview.
fn load_menu(path: &Path, options: &MenuOptions) -> Result<MenuPayload> {
    let mut menu = MenuPayload::load(path).context("Could not load menu")?;

    if let Some(preview_id) = options.preview.as_deref() {
        let stored = match options.preview_file.as_deref() {
            Some(file) => Some(load_preview(file)?),
            None => None,
        };
        menu.apply_preview(preview_id, stored.as_ref());
    }

    Ok(menu)
}

/// Load a stored preview template.
fn load_preview(path: &Path) -> Result<PreviewTemplate> {
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Could not read preview template {}", path.display()))?;
    serde_json::from_str(&json).context("Malformed preview template")
}

/// Paginate and print a menu.
fn run_pages(
    menu: &MenuPayload,
    layout: &LayoutConfig,
    capacity: u32,
    format: OutputFormat,
) -> Result<()> {
    let pages = BookPaginator::with_config(layout).paginate_menu(menu, capacity);

    match format {
        OutputFormat::Text => print!("{}", format_pages(menu, &pages, capacity)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&pages)?),
    }

    Ok(())
}

/// Render pages as plain text.
fn format_pages(menu: &MenuPayload, pages: &[Page], capacity: u32) -> String {
    let mut out = String::new();
    let rule = "─".repeat(60);

    out.push_str(&format!(
        " {} - {} page(s), capacity {} units\n",
        menu.restaurant_name,
        pages.len(),
        capacity
    ));

    for (index, page) in pages.iter().enumerate() {
        out.push_str(&format!("{rule}\n Page {} of {}\n{rule}\n", index + 1, pages.len()));

        if page.is_empty() {
            out.push_str(" No items yet.\n");
        }

        for entry in page {
            match entry {
                PageEntry::Heading {
                    label,
                    continued,
                    description,
                    ..
                } => {
                    let suffix = if *continued { " (cont.)" } else { "" };
                    out.push_str(&format!(" {label}{suffix}\n"));
                    if !description.is_empty() {
                        out.push_str(&format!("   {description}\n"));
                    }
                }
                PageEntry::Item { item } => {
                    out.push_str(&format!(
                        "   {:<44} {:>10}\n",
                        truncate(&item.name, 44),
                        item.price_label()
                    ));
                    if let Some(description) = item.description() {
                        out.push_str(&format!("     {description}\n"));
                    }
                }
            }
        }
    }

    out
}

/// Truncate a string to max length.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 1).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menubook_core::{Catalog, Item};

    fn menu() -> MenuPayload {
        MenuPayload::new(
            "Cafe",
            Catalog::new().with_category(
                "Drinks",
                vec![
                    Item::new(1, "Tea", 2.0),
                    Item::new(2, "Coffee", 3.0).with_description("Hot"),
                ],
            ),
        )
    }

    #[test]
    fn test_format_split_pages() {
        let pages = BookPaginator::new().paginate_menu(&menu(), 5);
        let text = format_pages(&menu(), &pages, 5);

        assert!(text.contains("2 page(s), capacity 5 units"));
        assert!(text.contains(" Page 2 of 2"));
        assert!(text.contains(" Drinks (cont.)"));
        assert!(text.contains("     Hot"));
    }

    #[test]
    fn test_format_empty_menu() {
        let menu = MenuPayload::new("Cafe", Catalog::new());
        let pages = BookPaginator::new().paginate_menu(&menu, 18);
        let text = format_pages(&menu, &pages, 18);

        assert!(text.contains(" Page 1 of 1"));
        assert!(text.contains("No items yet."));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Tea", 10), "Tea");
        assert_eq!(truncate("Crème brûlée", 6), "Crème…");
    }

    #[test]
    fn test_load_menu_with_preview() {
        let temp = tempfile::TempDir::new().unwrap();
        let menu_path = temp.path().join("menu.json");
        let preview_path = temp.path().join("preview.json");
        std::fs::write(&menu_path, r#"{"restaurant_name": "Cafe", "categories": {}}"#).unwrap();
        std::fs::write(
            &preview_path,
            r#"{"id": "tpl-1", "style_id": "warm-paper"}"#,
        )
        .unwrap();

        let options = MenuOptions {
            preview: Some("tpl-1".to_string()),
            preview_file: Some(preview_path),
            layout: None,
        };
        let menu = load_menu(&menu_path, &options).unwrap();

        assert_eq!(menu.template_id.as_deref(), Some("tpl-1"));
        assert_eq!(menu.template_style_id.as_deref(), Some("warm-paper"));
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();

        let cli = Cli::try_parse_from(["menubook", "pages", "menu.json", "--capacity", "7"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Pages {
                capacity: Some(7),
                ..
            })
        ));
    }
}
