// PagePulse - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Config and page content loading
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use pagepulse::app;

pub use pagepulse::core;
pub use pagepulse::platform;
pub use pagepulse::ui;
pub use pagepulse::util;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use crate::core::notice::NoticeKind;

/// Configure fonts for the egui context.
///
/// On Windows, loads Segoe UI, Segoe UI Emoji, and Segoe UI Symbol from the
/// system font directory and sets them as the primary proportional fonts.
/// These fonts have much broader Unicode coverage than the egui built-ins,
/// preventing square-glyph rendering for the hamburger, dismiss, and other
/// symbol glyphs the panels use. The built-in egui fonts are kept as final
/// fallbacks so no glyph is ever lost.
///
/// On non-Windows platforms the egui defaults are used unchanged.
fn configure_fonts(ctx: &egui::Context) {
    #[cfg(target_os = "windows")]
    {
        let mut fonts = egui::FontDefinitions::default();

        // Load Windows system fonts in priority order.
        // Segoe UI covers most Latin and common UI symbols.
        // Segoe UI Emoji adds Unicode emoji and many pictographic symbols.
        // Segoe UI Symbol covers the remaining specialist blocks.
        let candidates: &[(&str, &str)] = &[
            ("Segoe UI", r"C:\Windows\Fonts\segoeui.ttf"),
            ("Segoe UI Emoji", r"C:\Windows\Fonts\seguiemj.ttf"),
            ("Segoe UI Symbol", r"C:\Windows\Fonts\seguisym.ttf"),
        ];

        let mut loaded_names: Vec<&str> = Vec::new();
        for (name, path) in candidates {
            match std::fs::read(path) {
                Ok(data) => {
                    fonts
                        .font_data
                        .insert((*name).to_owned(), egui::FontData::from_owned(data).into());
                    loaded_names.push(name);
                    tracing::debug!(font = name, "Loaded Windows system font");
                }
                Err(e) => {
                    tracing::warn!(
                        font = name,
                        error = %e,
                        "Failed to load Windows system font; some symbols may render as squares"
                    );
                }
            }
        }

        if !loaded_names.is_empty() {
            // Place Windows fonts first so they take priority over the
            // egui default (NotoSans), while keeping it as a final fallback.
            if let Some(proportional) = fonts.families.get_mut(&egui::FontFamily::Proportional) {
                for (i, name) in loaded_names.iter().enumerate() {
                    proportional.insert(i, (*name).to_owned());
                }
            }

            ctx.set_fonts(fonts);
            tracing::info!(fonts = ?loaded_names, "Windows system fonts configured");
        }
    }

    // On non-Windows platforms the egui built-in fonts are used unchanged.
    #[cfg(not(target_os = "windows"))]
    let _ = ctx;
}

/// Apply the configured theme and base text size to the egui context.
///
/// The font size acts as a page zoom: the whole layout scales relative to
/// the default size rather than just the label glyphs.
fn apply_style(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_theme(if dark_mode {
        egui::Theme::Dark
    } else {
        egui::Theme::Light
    });
    ctx.set_zoom_factor(font_size / util::constants::DEFAULT_FONT_SIZE);
}

/// PagePulse - Desktop renderer for interactive showcase pages.
///
/// Point PagePulse at a TOML page description to render it with the full
/// interaction layer: a scroll-aware navbar, reveal-on-scroll sections,
/// a slide-in menu, glide-to-anchor navigation, forms, and transient
/// notices.
#[derive(Parser, Debug)]
#[command(name = "PagePulse", version, about)]
struct Cli {
    /// Page description file (renders the built-in showcase if omitted).
    page: Option<PathBuf>,

    /// Theme override: "dark" or "light" (takes precedence over config.toml).
    #[arg(short = 't', long = "theme")]
    theme: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging init so a configured level can take
    // effect; its warnings are queued until the subscriber exists.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "PagePulse starting"
    );

    // Load the page content: CLI file > built-in showcase > empty shell.
    let (page, load_errors) = app::page_loader::load_page(cli.page.as_deref());

    let now = Instant::now();
    let mut state = app::state::AppState::new(
        page,
        config.reveal_enabled,
        config.notice_visible_ms,
        cli.debug,
        now,
    );

    // Config and content problems surface in the notice stack as well as
    // the log, so they are visible without a console attached.
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
        state
            .notices
            .push(warning.clone(), NoticeKind::Warning, now);
    }
    for err in &load_errors {
        tracing::warn!(error = %err, "Page loading warning");
        state
            .notices
            .push(err.to_string(), NoticeKind::Warning, now);
    }

    tracing::info!(sections = state.page.sections.len(), "Ready to launch GUI");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([400.0, 500.0]),
        ..Default::default()
    };

    // CLI theme override takes precedence over the config file.
    let dark_mode = match cli.theme.as_deref() {
        Some("dark") => true,
        Some("light") => false,
        Some(other) => {
            tracing::warn!(
                theme = %other,
                "Unrecognised --theme value; expected \"dark\" or \"light\". Using config."
            );
            config.dark_mode
        }
        None => config.dark_mode,
    };
    let font_size = config.font_size;

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            apply_style(&cc.egui_ctx, dark_mode, font_size);
            Ok(Box::new(gui::PagePulseApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch PagePulse GUI: {e}");
        std::process::exit(1);
    }
}
