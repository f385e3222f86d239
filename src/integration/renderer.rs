use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{core::state::AppState, infrastructure::tui, presentation::components::Components};

#[derive(Default)]
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            components: Components::new(),
        }
    }

    pub async fn render(
        &mut self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        state: &AppState,
    ) -> Result<()> {
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut ratatui::Frame<'_>| {
            self.components.render(f, state);
        };
        guard.draw(&mut draw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::ticker::Ticker,
        infrastructure::{config::Config, tui::test::TestTui},
    };

    #[tokio::test]
    async fn renderer_renders_with_test_tui() -> Result<()> {
        let test_tui = Arc::new(Mutex::new(TestTui::new(120, 40)?));
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> =
            Arc::<Mutex<TestTui>>::clone(&test_tui);
        let state = AppState::new_with_config(Ticker::default(), Config::default());

        let mut renderer = Renderer::new();
        renderer.render(&tui, &state).await?;

        let guard = test_tui.lock().await;
        assert_eq!(guard.draw_count(), 1);
        assert!(guard.screen_contains("WorldAware"));
        assert!(guard.screen_contains("NVDA"));
        assert!(guard.screen_contains("1 AI Intel"));
        Ok(())
    }
}
