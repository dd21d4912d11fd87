// Copyright 2025 the Squiggles Authors
// SPDX-License-Identifier: Apache-2.0

//! Squiggles: a freehand drawing canvas built with Xilem

use anyhow::Context;
use clap::Parser;
use winit::dpi::LogicalSize;
use xilem::{EventLoopBuilder, WindowView, Xilem, window};

mod components;
pub mod config;
mod data;
pub mod model;
mod settings;
mod theme;
mod views;

use config::{CliArgs, Config};
use data::AppState;
use views::canvas_tab;

/// Entry point for the Squiggles application
pub fn run(event_loop: EventLoopBuilder) -> anyhow::Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    // Filter out noisy wgpu/naga shader compilation logs
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("squiggles=info".parse()?)
                .add_directive("wgpu=warn".parse()?)
                .add_directive("naga=warn".parse()?)
                .add_directive("wgpu_core=warn".parse()?)
                .add_directive("wgpu_hal=warn".parse()?),
        )
        .init();

    let config = handle_command_line_args()?;

    tracing::info!(
        "Starting {:?} canvas, {}x{}, fill button {}",
        config.variant,
        config.width,
        config.height,
        config.fill_button
    );

    let app = Xilem::new(AppState::new(config), app_logic);
    app.run_in(event_loop)
        .context("failed to start the GUI event loop")?;
    Ok(())
}

/// Parse command-line arguments and load the configuration
///
/// Usage errors and `--help` are reported by clap, which exits the process.
/// Configuration errors are returned and reported once by `main`.
fn handle_command_line_args() -> anyhow::Result<Config> {
    load_config(&CliArgs::parse())
}

fn load_config(args: &CliArgs) -> anyhow::Result<Config> {
    if let Some(path) = &args.config {
        tracing::info!("Loading config from: {}", path.display());
    }

    let config = Config::load(args).context("invalid configuration")?;
    Ok(config)
}

/// Build the single canvas window.
fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let content = canvas_tab(state);

    let window_size = LogicalSize::new(state.config.width, state.config.height);
    let window_view = window(state.main_window_id, state.config.title.clone(), content);
    let window_with_options = window_view.with_options(|options| {
        options
            .with_initial_inner_size(window_size)
            .on_close(|state: &mut AppState| state.running = false)
    });

    std::iter::once(window_with_options)
}
