//! The terminal-backed [`Renderer`] used by the game loop.

use anyhow::Result;

use crate::core::GameState;
use crate::engine::Renderer;
use crate::fb::FrameBuffer;
use crate::game_view::GameView;
use crate::renderer::TerminalRenderer;

pub struct TerminalScreen {
    term: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new(GameView::default())
    }
}

impl TerminalScreen {
    pub fn new(view: GameView) -> Self {
        Self {
            term: TerminalRenderer::new(),
            view,
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.term.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.term.exit()
    }
}

impl Renderer for TerminalScreen {
    fn render(&mut self, state: &GameState) -> Result<()> {
        self.view.render_into(state, &mut self.fb);
        self.term.draw(&self.fb)
    }

    fn show_prompt(&mut self, text: &str) -> Result<()> {
        self.term.show_message(text)
    }
}
