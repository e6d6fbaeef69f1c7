use anyhow::{Context, anyhow};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fuel_deck::constants::*;
use fuel_deck::deck::{DECK_TITLE, aviation_deck};
use fuel_deck::{Content, Presentation};

mod cli;
mod texture_loader;
mod view;

use crate::cli::Args;
use crate::view::DeckEngine;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "fuel_deck=debug" } else { "fuel_deck=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn print_slides(presentation: &Presentation<Content>) {
    for (i, slide) in presentation.slides().iter().enumerate() {
        match &slide.subtitle {
            Some(subtitle) => println!("{:>2}. {:<30} {} ({})", i + 1, slide.id, slide.title, subtitle),
            None => println!("{:>2}. {:<30} {}", i + 1, slide.id, slide.title),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut presentation = Presentation::new(aviation_deck())
        .context("failed to build the slide deck")?
        .with_edges(args.edge_behavior());

    if let Some(start) = args.start_index() {
        presentation
            .go_to_signed(start)
            .with_context(|| format!("invalid --start {}", start + 1))?;
    }

    if args.list {
        print_slides(&presentation);
        return Ok(());
    }

    let mut builder = raylib::init();
    builder
        .size(args.width, args.height)
        .title(DECK_TITLE)
        .vsync()
        .resizable();
    if args.fullscreen {
        builder.fullscreen();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(if args.verbose {
        TraceLogLevel::LOG_WARNING
    } else {
        TraceLogLevel::LOG_ERROR
    });

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("failed to create render texture: {e}"))?;

    info!(
        slides = presentation.len(),
        start = presentation.current_index() + 1,
        edges = ?presentation.edges(),
        "presentation ready"
    );

    let mut engine = DeckEngine::new(presentation, args.autoplay);
    if !engine.initialize(&mut rl, &thread, &args.assets) {
        warn!(assets = %args.assets.display(), "no charts found, slides will show placeholders");
    }

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        engine.update(dt, &rl);
        engine.render_frame(&mut rl, &thread, &mut framebuffer);

        // Draw the framebuffer to the window, flipped and stretched
        let mut d = rl.begin_drawing(&thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;

        d.clear_background(Color::BLACK);
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    Ok(())
}
