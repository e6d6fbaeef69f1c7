use std::path::Path;

use fuel_deck::constants::*;
use fuel_deck::layout::Chrome;
use fuel_deck::{Command, Content, Presentation};
use raylib::prelude::*;
use tracing::{debug, info, warn};

use crate::texture_loader::{Textures, load_textures};
use crate::view::autoplay::Autoplay;
use crate::view::draw::{draw_chrome, draw_slide};
use crate::view::input::{Action, BOUND_KEYS, action_for_key, to_render_space};
use crate::view::state::ViewState;
use crate::view::theme;
use crate::view::transition::Transition;

pub struct DeckEngine {
    presentation: Presentation<Content>,
    chrome: Chrome,
    textures: Textures,

    state: ViewState,
    transition: Option<Transition>,

    autoplay: Autoplay,

    scroll: f32,
    content_height: f32,
}

impl DeckEngine {
    pub fn new(presentation: Presentation<Content>, autoplay: Option<f32>) -> Self {
        let chrome = Chrome::new(RENDER_WIDTH as f32, RENDER_HEIGHT as f32, presentation.len());
        Self {
            presentation,
            chrome,
            textures: Textures::new(),
            state: ViewState::Displaying,
            transition: None,
            autoplay: Autoplay::new(autoplay),
            scroll: 0.0,
            content_height: 0.0,
        }
    }

    pub fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, assets: &Path) -> bool {
        let files: Vec<&'static str> = self
            .presentation
            .slides()
            .iter()
            .flat_map(|slide| slide.content.images())
            .map(|image| image.file)
            .collect();
        let wanted = files.len();
        self.textures = load_textures(rl, thread, assets, files);
        info!(loaded = self.textures.len(), wanted, "charts ready");
        !self.textures.is_empty()
    }

    /// Poll input, advance timers and animations.
    pub fn update(&mut self, dt: f32, rl: &RaylibHandle) {
        for key in BOUND_KEYS {
            if !rl.is_key_pressed(key) {
                continue;
            }
            match action_for_key(key) {
                Some(Action::Navigate(command)) => self.navigate(command),
                Some(Action::Scroll(by)) => self.scroll_by(by),
                None => {}
            }
        }

        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            self.scroll_by(-wheel * SCROLL_STEP);
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let screen = Vector2::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
            let render = Vector2::new(RENDER_WIDTH as f32, RENDER_HEIGHT as f32);
            let point = to_render_space(rl.get_mouse_position(), screen, render);
            if let Some(command) = self.chrome.hit_test(point.x, point.y, &self.presentation) {
                self.navigate(command);
            }
        }

        match self.state {
            ViewState::Displaying => {
                if self.autoplay.tick(dt) {
                    debug!("autoplay advancing");
                    self.navigate(Command::Next);
                }
            }
            ViewState::Transitioning => {
                let finished = self.transition.as_mut().is_none_or(|t| t.update(dt));
                if finished {
                    self.transition = None;
                    self.state = ViewState::Displaying;
                    self.autoplay.reset();
                }
            }
        }
    }

    fn navigate(&mut self, command: Command) {
        let from = self.presentation.current_index();
        if let Err(e) = self.presentation.execute(command) {
            warn!(error = %e, ?command, "navigation rejected");
            return;
        }
        let to = self.presentation.current_index();
        if to == from {
            return;
        }

        info!(from = from + 1, to = to + 1, id = %self.presentation.current().id, "slide changed");
        self.transition = Some(Transition::new(from, self.scroll, command.direction(from, to)));
        self.state = ViewState::Transitioning;
        self.autoplay.reset();
        self.scroll = 0.0;
    }

    fn scroll_by(&mut self, by: f32) {
        self.scroll = scrolled(
            self.scroll,
            by,
            self.content_height,
            self.chrome.body.height,
            self.state,
        );
    }

    pub fn render_frame(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) {
        let presentation = &self.presentation;
        let chrome = &self.chrome;
        let textures = &self.textures;
        let transition = self.transition.as_ref();
        let scroll = self.scroll;
        let mut measured = self.content_height;

        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            d.clear_background(theme::BACKGROUND);

            let frame = presentation.frame();
            draw_chrome(&mut d, chrome, &frame, presentation.indicators());

            let body = chrome.body;
            let mut s = d.begin_scissor_mode(body.x as i32, body.y as i32, body.width as i32, body.height as i32);
            let current = presentation.current();
            match transition {
                Some(t) => {
                    let (outgoing, incoming) = t.offsets(body.width + 2.0 * MARGIN);
                    let previous = &presentation.slides()[t.from];
                    draw_slide(&mut s, previous, body.offset(outgoing, 0.0), t.from_scroll, textures);
                    measured = draw_slide(&mut s, current, body.offset(incoming, 0.0), 0.0, textures);
                }
                None => {
                    measured = draw_slide(&mut s, current, body, scroll, textures);
                }
            }
        });

        self.content_height = measured;
    }
}

/// Scroll position after moving by `by`, clamped to the content. The body is
/// frozen while a transition is running.
fn scrolled(scroll: f32, by: f32, content_height: f32, viewport: f32, state: ViewState) -> f32 {
    if state == ViewState::Transitioning {
        return scroll;
    }
    let max = (content_height - viewport).max(0.0);
    (scroll + by).clamp(0.0, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_clamps_to_content() {
        assert_eq!(scrolled(0.0, 50.0, 300.0, 200.0, ViewState::Displaying), 50.0);
        assert_eq!(scrolled(90.0, 50.0, 300.0, 200.0, ViewState::Displaying), 100.0);
        assert_eq!(scrolled(10.0, -50.0, 300.0, 200.0, ViewState::Displaying), 0.0);
        assert_eq!(scrolled(0.0, 50.0, 150.0, 200.0, ViewState::Displaying), 0.0);
    }

    #[test]
    fn scroll_is_ignored_mid_transition() {
        assert_eq!(scrolled(0.0, 50.0, 300.0, 200.0, ViewState::Transitioning), 0.0);
        assert_eq!(scrolled(40.0, -40.0, 300.0, 200.0, ViewState::Transitioning), 40.0);
    }
}
